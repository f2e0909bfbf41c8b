use wasm_bindgen::prelude::*;

/// Version information for the frontend application
pub struct Version;

impl Version {
    /// Returns the current version of the application
    pub fn current() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Returns the application name
    pub fn name() -> &'static str {
        env!("CARGO_PKG_NAME")
    }

    /// Returns a short version string
    pub fn short() -> String {
        format!("v{}", Self::current())
    }
}

#[wasm_bindgen]
pub fn get_version() -> String {
    Version::current().to_string()
}
