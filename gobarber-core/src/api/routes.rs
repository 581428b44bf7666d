//! Route constants for the GoBarber API

/// Profile API routes. Paths are relative to the configured API base URL.
pub mod profile {
    /// `PUT` the profile update payload, returns the updated user record
    pub const UPDATE: &str = "/profile";
}

/// User account routes
pub mod users {
    /// `PATCH` a multipart body with a single `avatar` file field
    pub const AVATAR: &str = "/users/avatar";

    /// Multipart field name the avatar endpoint reads the upload from
    pub const AVATAR_FIELD: &str = "avatar";
}

/// Path helpers
pub mod utils {
    /// Join an API base URL and a route path with exactly one slash.
    pub fn join(base_url: &str, path: &str) -> String {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
