use yew::prelude::*;

use shared::CharacterId;

#[derive(Properties, PartialEq)]
pub struct SkillsTabProps {
    pub character_id: CharacterId,
}

#[function_component(SkillsTab)]
pub fn skills_tab(_props: &SkillsTabProps) -> Html {
    html! {
        <div>
            <h2 class="text-xl font-semibold mb-3">{"Skills"}</h2>
            <p class="text-gray-500">
                {"Skill plans and doctrine requirements will show up here."}
            </p>
        </div>
    }
}
