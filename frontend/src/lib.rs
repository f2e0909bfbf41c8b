use log::{debug, info};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

use shared::CharacterId;

use crate::auth::AuthProvider;
use crate::components::footer::Footer;
use crate::components::nav::Nav;

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod version;
pub mod pages {
    pub mod home;
    pub mod login;
    pub mod not_found;
    pub mod profile;
}

use pages::{home::Home, login::Login, not_found::NotFound, profile::ProfilePage};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/profile")]
    Profile,
    #[at("/profile/:character_id")]
    ProfileCharacter { character_id: CharacterId },
    #[at("/profile/:character_id/:tab")]
    ProfileCharacterTab {
        character_id: CharacterId,
        tab: String,
    },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <AuthProvider>
            <BrowserRouter>
                <div class="app-container min-h-screen flex flex-col">
                    <Nav />
                    <main class="flex-1">
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                </div>
            </BrowserRouter>
        </AuthProvider>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::ProfileCharacter { character_id } => html! {
            <ProfilePage character_id={character_id} />
        },
        Route::ProfileCharacterTab { character_id, tab } => html! {
            <ProfilePage character_id={character_id} tab={tab} />
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();

    info!("Mounting application to #app");
    yew::Renderer::<App>::new().render();

    Ok(())
}

// Entry point called by Trunk
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        run_app().await.expect("Failed to run app");
    });
    Ok(())
}
