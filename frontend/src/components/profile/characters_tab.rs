use yew::prelude::*;
use yew_router::prelude::*;

use shared::CharacterDetailsDto;

use crate::config::Config;
use crate::pages::profile::profile_route;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CharactersTabProps {
    #[prop_or_default]
    pub main: Option<CharacterDetailsDto>,
    #[prop_or_default]
    pub alts: Vec<CharacterDetailsDto>,
}

/// Lists the other characters on the profiled account, linking to their
/// profiles.
#[function_component(CharactersTab)]
pub fn characters_tab(props: &CharactersTabProps) -> Html {
    let Some(main) = &props.main else {
        return html! { <p class="text-gray-500">{"Loading characters..."}</p> };
    };

    html! {
        <div>
            <h2 class="text-xl font-semibold mb-3">{"Characters"}</h2>
            if props.alts.is_empty() {
                <p class="text-gray-500">
                    {format!("{} has no other characters on this account.", main.name)}
                </p>
            } else {
                <ul class="space-y-2">
                    { for props.alts.iter().map(|alt| {
                        let portrait = format!(
                            "{}/characters/{}/portrait?size=32",
                            Config::image_base_url(),
                            alt.id
                        );
                        html! {
                            <li key={alt.id.0} class="flex items-center space-x-2">
                                <img
                                    src={portrait}
                                    alt="Character portrait"
                                    class="rounded-full"
                                    width="32"
                                    height="32"
                                />
                                <Link<Route>
                                    to={profile_route(alt.id, None)}
                                    classes="text-indigo-600 hover:underline"
                                >
                                    {&alt.name}
                                </Link<Route>>
                            </li>
                        }
                    }) }
                </ul>
            }
        </div>
    }
}
