use yew::prelude::*;

use shared::CharacterId;

#[derive(Properties, PartialEq)]
pub struct FitCheckTabProps {
    pub character_id: CharacterId,
}

// TODO: call /api/profile/{characterId}/fits once the doctrine review
// endpoint lands.
#[function_component(FitCheckTab)]
pub fn fit_check_tab(_props: &FitCheckTabProps) -> Html {
    html! {
        <div>
            <h2 class="text-xl font-semibold mb-3">{"Fit Check"}</h2>
            <p class="text-gray-500">
                {"Doctrine review for this pilot's saved fits is coming soon."}
            </p>
        </div>
    }
}
