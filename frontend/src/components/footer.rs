use yew::prelude::*;

use crate::version::Version;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gradient-to-r from-slate-900 to-indigo-700 text-white mt-auto">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-6 flex flex-col sm:flex-row justify-between items-center">
                <p class="text-indigo-100 text-sm">
                    {"Skyhook: fleet waitlists and pilot profiles for Star Frontier."}
                </p>
                <p class="text-xs text-indigo-200 font-mono">
                    {"Frontend "}{Version::short()}
                </p>
            </div>
        </footer>
    }
}
