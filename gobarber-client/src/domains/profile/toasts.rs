//! Toast copy for the profile screen

use crate::infra::services::Toast;

pub const PROFILE_UPDATED_TITLE: &str = "Profile updated!";
pub const PROFILE_UPDATED_DESCRIPTION: &str =
    "Your profile information was updated successfully!";

pub const PROFILE_FAILED_TITLE: &str = "Profile update failed";
pub const PROFILE_FAILED_DESCRIPTION: &str =
    "An error occurred while updating your profile, please try again.";

pub const AVATAR_UPDATED_TITLE: &str = "Avatar updated!";

pub const AVATAR_FAILED_TITLE: &str = "Avatar update failed";
pub const AVATAR_FAILED_DESCRIPTION: &str =
    "Your avatar could not be uploaded, please try again.";

pub fn profile_updated() -> Toast {
    Toast::success(PROFILE_UPDATED_TITLE)
        .with_description(PROFILE_UPDATED_DESCRIPTION)
}

/// Shown for both rejected input and failed requests
pub fn profile_failed() -> Toast {
    Toast::error(PROFILE_FAILED_TITLE)
        .with_description(PROFILE_FAILED_DESCRIPTION)
}

pub fn avatar_updated() -> Toast {
    Toast::success(AVATAR_UPDATED_TITLE)
}

pub fn avatar_failed() -> Toast {
    Toast::error(AVATAR_FAILED_TITLE)
        .with_description(AVATAR_FAILED_DESCRIPTION)
}
