use gloo_net::http::{Request, RequestBuilder};
use gloo_storage::{LocalStorage, Storage};

use crate::auth::TOKEN_STORAGE_KEY;

/// Creates a request with the stored bearer token attached, if any.
pub fn authenticated_request(method: &str, url: &str) -> RequestBuilder {
    let req = match method.to_uppercase().as_str() {
        "POST" => Request::post(url),
        "PUT" => Request::put(url),
        "DELETE" => Request::delete(url),
        _ => Request::get(url),
    };

    match LocalStorage::get::<String>(TOKEN_STORAGE_KEY) {
        Ok(token) => req.header("Authorization", &format!("Bearer {}", token)),
        // No token found, continue unauthenticated
        Err(_) => req,
    }
}

/// Creates a GET request with authentication
pub fn authenticated_get(url: &str) -> RequestBuilder {
    authenticated_request("GET", url)
}

/// Creates a POST request with authentication
pub fn authenticated_post(url: &str) -> RequestBuilder {
    authenticated_request("POST", url)
}
