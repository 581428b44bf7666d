//! Profile screen domain
//!
//! [`state::ProfileFormState`] holds what the form shows. [`ProfileWorkflow`]
//! handles the two events the screen raises: form submit and avatar file
//! selection.

pub mod avatar;
pub mod state;
pub mod toasts;
pub mod update;

pub use avatar::AvatarOutcome;
pub use state::{ProfileFormState, SubmissionPhase};
pub use update::ProfileWorkflow;
