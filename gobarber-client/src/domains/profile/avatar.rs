use super::toasts;
use super::update::ProfileWorkflow;
use crate::infra::services::AvatarUpload;

/// Result of an avatar file selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarOutcome {
    /// The input changed without a file; nothing was sent
    NoFile,
    Updated,
    Failed,
}

impl ProfileWorkflow {
    /// Handle the avatar input's change event
    ///
    /// Uploads the selected file. On success the session user is replaced and
    /// a success toast raised; on failure an error toast is raised and the
    /// session is left as it was.
    pub async fn change_avatar(
        &self,
        file: Option<AvatarUpload>,
    ) -> AvatarOutcome {
        let Some(file) = file else {
            return AvatarOutcome::NoFile;
        };

        log::debug!("[Profile] Uploading avatar {}", file.file_name);
        match self.profile_service.update_avatar(file).await {
            Ok(user) => {
                self.session.update_user(user);
                self.notifier.notify(toasts::avatar_updated());
                AvatarOutcome::Updated
            }
            Err(err) => {
                log::warn!("[Profile] Avatar upload failed: {}", err);
                self.notifier.notify(toasts::avatar_failed());
                AvatarOutcome::Failed
            }
        }
    }
}
