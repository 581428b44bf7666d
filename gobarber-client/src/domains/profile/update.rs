use gobarber_core::profile::{ProfileSubmission, prepare_submission};
use std::sync::Arc;
use tokio::sync::watch;

use super::state::{ProfileFormState, SubmissionPhase};
use super::toasts;
use crate::infra::services::{
    Navigator, Notifier, ProfileService, Route, SessionStore,
};

/// Drives profile submissions and avatar replacement
///
/// Every collaborator is injected. Each submit is an independent attempt and
/// overlapping submits are not guarded against, so the last response to
/// arrive owns the session record. Phase transitions are also published to
/// subscribers, since `submit` borrows the form until it finishes.
#[derive(Clone)]
pub struct ProfileWorkflow {
    pub(super) profile_service: Arc<dyn ProfileService>,
    pub(super) session: Arc<dyn SessionStore>,
    pub(super) notifier: Arc<dyn Notifier>,
    pub(super) navigator: Arc<dyn Navigator>,
    phase: Arc<watch::Sender<SubmissionPhase>>,
}

impl std::fmt::Debug for ProfileWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileWorkflow").finish_non_exhaustive()
    }
}

impl ProfileWorkflow {
    pub fn new(
        profile_service: Arc<dyn ProfileService>,
        session: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let (phase, _) = watch::channel(SubmissionPhase::Idle);
        Self {
            profile_service,
            session,
            notifier,
            navigator,
            phase: Arc::new(phase),
        }
    }

    /// Subscribe to submission phase changes
    pub fn phase(&self) -> watch::Receiver<SubmissionPhase> {
        self.phase.subscribe()
    }

    /// A profile update request is in flight
    pub fn is_submitting(&self) -> bool {
        *self.phase.borrow() == SubmissionPhase::Submitting
    }

    fn enter(&self, form: &mut ProfileFormState, phase: SubmissionPhase) {
        form.phase = phase;
        self.phase.send_replace(phase);
    }

    /// Initial form for the profile screen, seeded from the session
    pub fn initial_form(&self) -> ProfileFormState {
        self.session
            .current_user()
            .map(|user| ProfileFormState::from_user(&user))
            .unwrap_or_default()
    }

    /// Handle a form submit
    ///
    /// Rejected input is written back to `form.errors` and never reaches the
    /// API. On success the session user is replaced with the response, the
    /// app navigates to the dashboard and a success toast is raised, in that
    /// order. A failed request raises one generic error toast and leaves the
    /// session, the route and the typed values alone.
    pub async fn submit(&self, form: &mut ProfileFormState) -> SubmissionPhase {
        form.errors.clear();
        self.enter(form, SubmissionPhase::Validating);

        let payload = match prepare_submission(form.to_input()) {
            ProfileSubmission::Valid(payload) => payload,
            ProfileSubmission::Invalid(errors) => {
                log::debug!(
                    "[Profile] Submission rejected on {} field(s)",
                    errors.len()
                );
                form.errors = errors;
                self.enter(form, SubmissionPhase::Invalid);
                self.notifier.notify(toasts::profile_failed());
                return form.phase;
            }
        };

        self.enter(form, SubmissionPhase::Submitting);
        log::debug!(
            "[Profile] Submitting profile update (password change: {})",
            payload.password_change.is_some()
        );

        match self.profile_service.update_profile(&payload).await {
            Ok(user) => {
                log::info!("[Profile] Profile updated for {}", user.email);
                self.session.update_user(user);
                self.navigator.navigate(Route::Dashboard);
                self.notifier.notify(toasts::profile_updated());
                form.clear_passwords();
                self.enter(form, SubmissionPhase::Succeeded);
            }
            Err(err) => {
                log::warn!("[Profile] Profile update failed: {}", err);
                self.notifier.notify(toasts::profile_failed());
                self.enter(form, SubmissionPhase::Failed);
            }
        }

        form.phase
    }
}
