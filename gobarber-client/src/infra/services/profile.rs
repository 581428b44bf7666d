use async_trait::async_trait;
use gobarber_core::api::routes;
use gobarber_core::profile::ProfileUpdatePayload;
use gobarber_core::users::UserRecord;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::sync::Arc;

use crate::infra::{api_client::ApiClient, errors::RequestResult};

/// File selected for the avatar input
#[derive(Clone)]
pub struct AvatarUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for AvatarUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvatarUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl AvatarUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Read a file from disk the way a file input hands it over
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "avatar".to_string());
        Ok(Self::new(file_name, bytes))
    }

    fn into_form(self) -> RequestResult<Form> {
        let part = Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.content_type)?;
        Ok(Form::new().part(routes::users::AVATAR_FIELD, part))
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Remote profile operations
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// `PUT /profile`, returns the full updated user record
    async fn update_profile(
        &self,
        payload: &ProfileUpdatePayload,
    ) -> RequestResult<UserRecord>;

    /// `PATCH /users/avatar`, returns the full updated user record
    async fn update_avatar(&self, avatar: AvatarUpload)
    -> RequestResult<UserRecord>;
}

#[derive(Clone, Debug)]
pub struct ProfileApiAdapter {
    client: Arc<ApiClient>,
}

impl ProfileApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileService for ProfileApiAdapter {
    async fn update_profile(
        &self,
        payload: &ProfileUpdatePayload,
    ) -> RequestResult<UserRecord> {
        self.client.put(routes::profile::UPDATE, payload).await
    }

    async fn update_avatar(
        &self,
        avatar: AvatarUpload,
    ) -> RequestResult<UserRecord> {
        let form = avatar.into_form()?;
        self.client
            .patch_multipart(routes::users::AVATAR, form)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_follows_extension() {
        assert_eq!(
            AvatarUpload::new("me.PNG", vec![]).content_type,
            "image/png"
        );
        assert_eq!(
            AvatarUpload::new("me.jpeg", vec![]).content_type,
            "image/jpeg"
        );
        assert_eq!(
            AvatarUpload::new("avatar", vec![]).content_type,
            "application/octet-stream"
        );
    }

    #[test]
    fn debug_omits_file_bytes() {
        let upload = AvatarUpload::new("me.png", vec![0x89, 0x50, 0x4e, 0x47]);
        let debug = format!("{upload:?}");
        assert!(debug.contains("len: 4"));
        assert!(!debug.contains("137"));
    }
}
