use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::api_url;
use crate::auth::AuthContext;
use crate::pages::profile::profile_route;
use crate::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();
    let current_route = use_route::<Route>().unwrap_or(Route::Home);

    let on_logout_click = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            auth.logout.emit(());
            navigator.push(&Route::Home);
        })
    };

    let on_profile = matches!(
        current_route,
        Route::Profile | Route::ProfileCharacter { .. } | Route::ProfileCharacterTab { .. }
    );

    html! {
        <nav class={classes!(
            "sticky", "top-0", "z-50", "bg-gradient-to-r", "from-slate-900", "to-indigo-700",
            "text-white", "shadow-lg"
        )}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8")}>
                <div class={classes!("flex", "justify-between", "h-16", "items-center")}>
                    // Left side - brand and main nav
                    <div class={classes!("flex", "items-center", "space-x-4", "sm:space-x-8")}>
                        <Link<Route> to={Route::Home} classes={classes!(
                            "text-lg", "sm:text-xl", "font-medium", "bg-white", "text-indigo-700",
                            "px-2", "py-0.5", "rounded"
                        )}>
                            {"SKYHOOK"}
                        </Link<Route>>
                        if let Some(session) = &auth.state.session {
                            <Link<Route>
                                to={profile_route(session.current.id, None)}
                                classes={classes!(
                                    "px-3", "py-2", "rounded-md", "text-sm", "font-medium",
                                    "transition-colors", "duration-200",
                                    if on_profile {
                                        classes!("bg-white/20", "text-white")
                                    } else {
                                        classes!("text-white/90", "hover:bg-white/10", "hover:text-white")
                                    }
                                )}
                            >
                                {"Profile"}
                            </Link<Route>>
                        }
                    </div>

                    // Right side - session info
                    <div class={classes!("flex", "items-center", "space-x-2", "sm:space-x-4")}>
                        if let Some(session) = &auth.state.session {
                            <span class={classes!("text-sm", "text-white/90")}>
                                {"Flying as "}
                                <span class={classes!("font-medium", "text-white")}>
                                    {&session.current.name}
                                </span>
                            </span>
                            <button
                                onclick={on_logout_click}
                                class={classes!(
                                    "inline-flex", "items-center", "px-3", "py-1.5", "text-xs",
                                    "font-medium", "rounded-md", "text-indigo-700", "bg-white",
                                    "hover:bg-indigo-50", "transition-colors", "duration-200"
                                )}
                            >
                                {"Log out"}
                            </button>
                        } else {
                            <a
                                href={api_url("/auth/start")}
                                class={classes!(
                                    "inline-flex", "items-center", "px-4", "py-2", "text-sm",
                                    "font-medium", "rounded-md", "text-white", "bg-indigo-500",
                                    "hover:bg-indigo-600", "transition-colors", "duration-200"
                                )}
                            >
                                {"Log in"}
                            </a>
                        }
                    </div>
                </div>
            </div>
        </nav>
    }
}
