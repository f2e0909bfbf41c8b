use yew::prelude::*;

use shared::CharacterId;

#[derive(Properties, PartialEq)]
pub struct NotesTabProps {
    pub character_id: CharacterId,
}

#[function_component(NotesTab)]
pub fn notes_tab(_props: &NotesTabProps) -> Html {
    html! {
        <div>
            <h2 class="text-xl font-semibold mb-3">{"Notes"}</h2>
            <p class="text-gray-500">{"No notes recorded for this pilot."}</p>
        </div>
    }
}
