use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

use shared::CharacterId;

use crate::pages::profile::{profile_route, ProfileTab};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProfileTabsProps {
    pub character_id: CharacterId,
    #[prop_or_default]
    pub active: Option<ProfileTab>,
}

/// Tab bar for the profile sub-views. Wide screens get a link row, narrow
/// screens a select; both navigate, so the URL stays the only source of
/// the active tab.
#[function_component(ProfileTabs)]
pub fn profile_tabs(props: &ProfileTabsProps) -> Html {
    let navigator = use_navigator().unwrap();
    let character_id = props.character_id;

    let onchange = {
        let navigator = navigator.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            navigator.push(&profile_route(character_id, Some(&select.value())));
        })
    };

    html! {
        <div class="basis-full">
            <nav class="hidden md:flex space-x-2 pt-4">
                { for ProfileTab::ALL.iter().map(|&tab| {
                    let is_active = props.active == Some(tab);
                    html! {
                        <Link<Route>
                            to={profile_route(character_id, Some(tab.slug()))}
                            classes={classes!(
                                "px-6", "py-3", "font-semibold", "text-center", "border-t-2",
                                "transition-colors", "duration-200",
                                if is_active {
                                    classes!("border-indigo-500", "text-indigo-600")
                                } else {
                                    classes!("border-transparent", "text-gray-600", "hover:border-gray-300")
                                }
                            )}
                        >
                            <span class="mr-2">{tab.icon()}</span>
                            {tab.label()}
                        </Link<Route>>
                    }
                }) }
            </nav>
            <div class="md:hidden pt-2">
                <select class="w-full rounded border-gray-300" onchange={onchange}>
                    { for ProfileTab::ALL.iter().map(|&tab| html! {
                        <option value={tab.slug()} selected={props.active == Some(tab)}>
                            {tab.label()}
                        </option>
                    }) }
                </select>
            </div>
        </div>
    }
}
