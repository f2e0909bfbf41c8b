use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::api_url;
use crate::auth::AuthContext;
use crate::Route;

#[function_component(Login)]
pub fn login() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();

    // Already-authenticated sessions skip straight to their profile.
    {
        let navigator = navigator.clone();
        let authenticated = auth.state.is_authenticated();
        use_effect_with(authenticated, move |&authenticated| {
            if authenticated {
                debug!("Session already active, redirecting to profile");
                navigator.push(&Route::Profile);
            }
            || ()
        });
    }

    html! {
        <div class="max-w-md mx-auto mt-16 text-center px-4">
            <h1 class="text-2xl font-bold mb-4">{"Log in"}</h1>
            <p class="text-gray-600 mb-6">
                {"Sign in with your pilot account to join waitlists and view \
                  profiles."}
            </p>
            <a
                href={api_url("/auth/start")}
                class="inline-block px-6 py-3 rounded-md text-white bg-indigo-600 hover:bg-indigo-700 font-medium"
            >
                {"Log in with Star Frontier"}
            </a>
            if let Some(error) = &auth.state.error {
                <p class="mt-4 text-sm text-red-600">{error}</p>
            }
        </div>
    }
}
