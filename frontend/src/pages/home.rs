use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::api_url;
use crate::auth::AuthContext;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();

    let on_view_profile = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            navigator.push(&Route::Profile);
        })
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-indigo-50 via-white to-slate-50">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-16 lg:py-24">
                <div class="text-center max-w-3xl mx-auto">
                    <h1 class="text-4xl lg:text-5xl font-bold text-gray-900 mb-6 leading-tight">
                        <span class="bg-gradient-to-r from-indigo-600 to-slate-600 bg-clip-text text-transparent">
                            {"Skyhook"}
                        </span>
                    </h1>
                    <p class="text-lg lg:text-xl text-gray-600 mb-10 leading-relaxed">
                        {"Join fleet waitlists, track your fleet history and look up any \
                          pilot on your account."}
                    </p>
                    if auth.state.is_authenticated() {
                        <button
                            onclick={on_view_profile}
                            class="px-6 py-3 rounded-md text-white bg-indigo-600 hover:bg-indigo-700 font-medium"
                        >
                            {"View your profile"}
                        </button>
                    } else {
                        <a
                            href={api_url("/auth/start")}
                            class="inline-block px-6 py-3 rounded-md text-white bg-indigo-600 hover:bg-indigo-700 font-medium"
                        >
                            {"Log in to get started"}
                        </a>
                    }
                </div>
            </div>
        </div>
    }
}
