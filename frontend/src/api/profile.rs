use log::debug;

use shared::{CharacterId, ErrorResponse, ProfileDto};

use crate::api::api_url;
use crate::api::utils::authenticated_get;

/// Fetches the profile for one character. Visibility is enforced
/// server-side as well as by the view's access check.
pub async fn get_profile(character_id: CharacterId) -> Result<ProfileDto, String> {
    debug!("Fetching profile for character {}", character_id);

    let response = authenticated_get(&api_url(&format!("/api/profile/{}", character_id)))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch profile: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let profile = response
        .json::<ProfileDto>()
        .await
        .map_err(|e| format!("Failed to parse profile response: {}", e))?;

    debug!("Loaded profile for {}", profile.main.name);
    Ok(profile)
}
