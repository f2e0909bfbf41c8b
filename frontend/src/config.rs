pub struct Config;

impl Config {
    /// Base URL for API requests. Empty means same-origin relative URLs,
    /// which both the Trunk dev proxy and the production reverse proxy
    /// resolve to the API server.
    pub fn api_base_url() -> String {
        "".to_string()
    }

    /// Base URL of the game's character image service.
    pub fn image_base_url() -> String {
        "https://images.starfrontier.net".to_string()
    }
}
