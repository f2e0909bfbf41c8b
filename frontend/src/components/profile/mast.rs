use yew::prelude::*;

use shared::CharacterDetailsDto;

use crate::components::badge::BadgeIcon;
use crate::components::profile::profile_tabs::ProfileTabs;
use crate::config::Config;
use crate::pages::profile::ProfileTab;

#[derive(Properties, PartialEq)]
pub struct ProfileMastProps {
    pub character: CharacterDetailsDto,
    #[prop_or_default]
    pub active: Option<ProfileTab>,
}

/// Profile header: portrait, name, role and badge glyphs, tab bar.
/// Rendered only once profile data is available.
#[function_component(ProfileMast)]
pub fn profile_mast(props: &ProfileMastProps) -> Html {
    let character = &props.character;
    let portrait = format!(
        "{}/characters/{}/portrait?size=64",
        Config::image_base_url(),
        character.id
    );

    html! {
        <div class="flex flex-wrap items-center px-4 pb-4">
            <img
                src={portrait}
                alt="Character portrait"
                class="rounded-full mr-3"
                width="64"
                height="64"
            />
            <h1 class="text-3xl font-bold mr-3">{&character.name}</h1>
            <div class="flex flex-row space-x-1">
                if let Some(role) = &character.role {
                    <BadgeIcon tag={role.clone()} />
                }
                { for character.badges.iter().map(|tag| html! {
                    <BadgeIcon key={tag.clone()} tag={tag.clone()} />
                }) }
            </div>
            <ProfileTabs character_id={character.id} active={props.active} />
        </div>
    }
}
