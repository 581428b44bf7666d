//! Collaborator contracts for the client domains
//!
//! Each workflow receives these as `Arc<dyn Trait>` so it can run against the
//! real API and session, or against test doubles.

pub mod navigation;
pub mod notifications;
pub mod profile;
pub mod session;

pub use navigation::{HistoryNavigator, LogNavigator, Navigator, Route};
pub use notifications::{LogNotifier, Notifier, Toast, ToastKind, ToastQueue};
pub use profile::{AvatarUpload, ProfileApiAdapter, ProfileService};
pub use session::{InMemorySession, SessionStore};
