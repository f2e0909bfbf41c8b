use log::{debug, error};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use shared::{CharacterId, ProfileDto, SessionDto, PROFILE_VIEW_ALL};

use crate::api::profile::get_profile;
use crate::auth::AuthContext;
use crate::components::profile::characters_tab::CharactersTab;
use crate::components::profile::fit_check_tab::FitCheckTab;
use crate::components::profile::history_tab::HistoryTab;
use crate::components::profile::mast::ProfileMast;
use crate::components::profile::notes_tab::NotesTab;
use crate::components::profile::skills_tab::SkillsTab;
use crate::Route;

/// Sub-views of the profile page. The active tab is derived from the URL
/// and nowhere else.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProfileTab {
    Characters,
    FitCheck,
    History,
    Skills,
    Notes,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 5] = [
        ProfileTab::Characters,
        ProfileTab::FitCheck,
        ProfileTab::History,
        ProfileTab::Skills,
        ProfileTab::Notes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileTab::Characters => "Characters",
            ProfileTab::FitCheck => "Fit Check",
            ProfileTab::History => "History",
            ProfileTab::Skills => "Skills",
            ProfileTab::Notes => "Notes",
        }
    }

    /// URL segment for the tab: the label lowercased, spaces to hyphens.
    pub fn slug(self) -> &'static str {
        match self {
            ProfileTab::Characters => "characters",
            ProfileTab::FitCheck => "fit-check",
            ProfileTab::History => "history",
            ProfileTab::Skills => "skills",
            ProfileTab::Notes => "notes",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ProfileTab::Characters => "👥",
            ProfileTab::FitCheck => "📋",
            ProfileTab::History => "🕘",
            ProfileTab::Skills => "🎯",
            ProfileTab::Notes => "💬",
        }
    }

    /// Inverse of [`ProfileTab::slug`]. Case-sensitive; unknown segments
    /// resolve to no tab.
    pub fn from_slug(slug: &str) -> Option<ProfileTab> {
        Self::ALL.iter().copied().find(|tab| tab.slug() == slug)
    }

    /// Resolves the optional URL segment. A missing segment shows
    /// Characters; an unrecognized one shows no content block.
    pub fn from_segment(segment: Option<&str>) -> Option<ProfileTab> {
        match segment {
            None => Some(ProfileTab::Characters),
            Some(slug) => Self::from_slug(slug),
        }
    }
}

/// Route for a character's profile, optionally pinned to a tab.
pub fn profile_route(character_id: CharacterId, tab: Option<&str>) -> Route {
    match tab {
        Some(tab) => Route::ProfileCharacterTab {
            character_id,
            tab: tab.to_string(),
        },
        None => Route::ProfileCharacter { character_id },
    }
}

/// Outcome of the profile access check.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AccessDecision {
    /// No session; show the login prompt.
    LoginRequired,
    /// Navigate to the corrected URL instead of rendering.
    Redirect {
        character_id: CharacterId,
        tab: Option<String>,
    },
    /// Render this character's profile.
    Allow { character_id: CharacterId },
}

/// Decides whose profile the caller gets to see.
///
/// Pure; the navigation for `Redirect` is issued by the caller, once per
/// navigation event. Callers without the `profiles:view-all` key are
/// silently pointed back at their own character when the requested id is
/// not on their account. The tab segment is opaque here and survives the
/// redirect.
pub fn resolve_profile_access(
    requested: Option<CharacterId>,
    tab: Option<&str>,
    session: Option<&SessionDto>,
) -> AccessDecision {
    let Some(session) = session else {
        return AccessDecision::LoginRequired;
    };

    let own = session.current.id;
    let Some(requested) = requested else {
        return AccessDecision::Redirect {
            character_id: own,
            tab: tab.map(str::to_string),
        };
    };

    if requested == own
        || session.has_access(PROFILE_VIEW_ALL)
        || session.owns_character(requested)
    {
        return AccessDecision::Allow {
            character_id: requested,
        };
    }

    AccessDecision::Redirect {
        character_id: own,
        tab: tab.map(str::to_string),
    }
}

#[derive(Properties, PartialEq)]
pub struct ProfilePageProps {
    #[prop_or_default]
    pub character_id: Option<CharacterId>,
    #[prop_or_default]
    pub tab: Option<String>,
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfilePageProps) -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();

    let decision = resolve_profile_access(
        props.character_id,
        props.tab.as_deref(),
        auth.state.session.as_ref(),
    );

    // Corrective navigation runs as a guard keyed on the navigation
    // inputs, not as a render side effect.
    {
        let navigator = navigator.clone();
        let decision = decision.clone();
        use_effect_with(
            (
                props.character_id,
                props.tab.clone(),
                auth.state.session.clone(),
            ),
            move |_| {
                if let AccessDecision::Redirect { character_id, tab } = decision {
                    debug!("Redirecting to profile of character {}", character_id);
                    navigator.push(&profile_route(character_id, tab.as_deref()));
                }
                || ()
            },
        );
    }

    if auth.state.loading {
        return html! {
            <div class="px-4 py-8 text-gray-500">{"Loading session..."}</div>
        };
    }

    match decision {
        AccessDecision::LoginRequired => html! {
            <div class="px-4 py-8">
                {"You must "}
                <Link<Route> to={Route::Login} classes="text-indigo-600 hover:underline">
                    {"log in"}
                </Link<Route>>
                {" to view this page."}
            </div>
        },
        // The guard above is about to navigate; render nothing meanwhile.
        AccessDecision::Redirect { .. } => html! {},
        AccessDecision::Allow { character_id } => html! {
            <ProfileView character_id={character_id} tab={props.tab.clone()} />
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ProfileViewProps {
    pub character_id: CharacterId,
    #[prop_or_default]
    pub tab: Option<String>,
}

#[function_component(ProfileView)]
pub fn profile_view(props: &ProfileViewProps) -> Html {
    let profile = use_state(|| None::<ProfileDto>);

    // Fetched fresh whenever the target character changes; tab switches
    // reuse the loaded data.
    {
        let profile = profile.clone();
        use_effect_with(props.character_id, move |&character_id| {
            profile.set(None);
            spawn_local(async move {
                match get_profile(character_id).await {
                    Ok(data) => profile.set(Some(data)),
                    // Absorbed locally: the header stays empty and the tab
                    // content renders without profile data.
                    Err(e) => error!("Failed to load profile for {}: {}", character_id, e),
                }
            });
            || ()
        });
    }

    // Page title follows the profile.
    {
        let name = profile.as_ref().map(|p| p.main.name.clone());
        use_effect_with(name, move |name| {
            let title = name.clone().unwrap_or_else(|| "Profile".to_string());
            gloo_utils::document().set_title(&title);
            || ()
        });
    }

    let active = ProfileTab::from_segment(props.tab.as_deref());

    // Exactly one content block per resolved tab; an unrecognized segment
    // renders none.
    let content = match active {
        Some(ProfileTab::Characters) => {
            let (main, alts) = match &*profile {
                Some(p) => (Some(p.main.clone()), p.alts.clone()),
                None => (None, Vec::new()),
            };
            html! { <CharactersTab main={main} alts={alts} /> }
        }
        Some(ProfileTab::FitCheck) => html! {
            <FitCheckTab character_id={props.character_id} />
        },
        Some(ProfileTab::History) => {
            let (fleet_time, totals) = match &*profile {
                Some(p) => (p.main.fleet_time.clone(), p.total_fleet_time.clone()),
                None => (Vec::new(), Vec::new()),
            };
            html! { <HistoryTab fleet_time={fleet_time} totals={totals} /> }
        }
        Some(ProfileTab::Skills) => html! {
            <SkillsTab character_id={props.character_id} />
        },
        Some(ProfileTab::Notes) => html! {
            <NotesTab character_id={props.character_id} />
        },
        None => html! {},
    };

    html! {
        <>
            if let Some(profile) = &*profile {
                <ProfileMast character={profile.main.clone()} active={active} />
            }
            <div class="px-4 pb-4">
                {content}
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::CharacterDto;

    fn character(id: i64) -> CharacterDto {
        CharacterDto {
            id: CharacterId(id),
            name: format!("Pilot {}", id),
        }
    }

    fn session(current: i64, owned: &[i64], access: &[&str]) -> SessionDto {
        SessionDto {
            current: character(current),
            characters: owned.iter().map(|&id| character(id)).collect(),
            access: access.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn unauthenticated_callers_always_get_the_prompt() {
        assert_eq!(
            resolve_profile_access(None, None, None),
            AccessDecision::LoginRequired
        );
        assert_eq!(
            resolve_profile_access(Some(CharacterId(42)), Some("history"), None),
            AccessDecision::LoginRequired
        );
    }

    #[test]
    fn missing_id_redirects_to_own_character() {
        let session = session(100, &[100], &[]);
        assert_eq!(
            resolve_profile_access(None, None, Some(&session)),
            AccessDecision::Redirect {
                character_id: CharacterId(100),
                tab: None,
            }
        );
        assert_eq!(
            resolve_profile_access(None, Some("skills"), Some(&session)),
            AccessDecision::Redirect {
                character_id: CharacterId(100),
                tab: Some("skills".to_string()),
            }
        );
    }

    #[test]
    fn foreign_id_redirects_without_the_view_all_key() {
        let session = session(100, &[100, 200], &[]);
        assert_eq!(
            resolve_profile_access(Some(CharacterId(999)), Some("history"), Some(&session)),
            AccessDecision::Redirect {
                character_id: CharacterId(100),
                tab: Some("history".to_string()),
            }
        );
    }

    #[test]
    fn unknown_tab_slug_survives_the_redirect() {
        let session = session(100, &[100], &[]);
        assert_eq!(
            resolve_profile_access(Some(CharacterId(999)), Some("bogus"), Some(&session)),
            AccessDecision::Redirect {
                character_id: CharacterId(100),
                tab: Some("bogus".to_string()),
            }
        );
    }

    #[test]
    fn view_all_key_allows_any_id() {
        let session = session(100, &[100], &[PROFILE_VIEW_ALL]);
        assert_eq!(
            resolve_profile_access(Some(CharacterId(999)), None, Some(&session)),
            AccessDecision::Allow {
                character_id: CharacterId(999),
            }
        );
    }

    #[test]
    fn owned_characters_are_visible_without_any_key() {
        let session = session(100, &[100, 200], &[]);
        assert_eq!(
            resolve_profile_access(Some(CharacterId(200)), None, Some(&session)),
            AccessDecision::Allow {
                character_id: CharacterId(200),
            }
        );
    }

    #[test]
    fn own_id_never_redirects() {
        // Even with an inconsistent owned list the caller's own character
        // is visible, so the corrective redirect cannot loop.
        let session = session(100, &[], &[]);
        assert_eq!(
            resolve_profile_access(Some(CharacterId(100)), None, Some(&session)),
            AccessDecision::Allow {
                character_id: CharacterId(100),
            }
        );
    }

    #[test]
    fn slugs_are_hyphenated_lowercase_labels() {
        for tab in ProfileTab::ALL {
            assert_eq!(tab.slug(), tab.label().to_lowercase().replace(' ', "-"));
            assert_eq!(ProfileTab::from_slug(tab.slug()), Some(tab));
        }
    }

    #[test]
    fn missing_segment_defaults_to_characters() {
        assert_eq!(
            ProfileTab::from_segment(None),
            Some(ProfileTab::Characters)
        );
    }

    #[test]
    fn unrecognized_segments_select_no_tab() {
        assert_eq!(ProfileTab::from_segment(Some("bogus")), None);
        // Matching is case-sensitive.
        assert_eq!(ProfileTab::from_segment(Some("History")), None);
        assert_eq!(ProfileTab::from_segment(Some("fit check")), None);
    }

    #[test]
    fn history_segment_resolves_history() {
        assert_eq!(
            ProfileTab::from_segment(Some("history")),
            Some(ProfileTab::History)
        );
    }

    #[test]
    fn profile_routes_serialize_tab_slugs() {
        assert_eq!(
            profile_route(CharacterId(42), None).to_path(),
            "/profile/42"
        );
        assert_eq!(
            profile_route(CharacterId(42), Some("fit-check")).to_path(),
            "/profile/42/fit-check"
        );
    }
}
