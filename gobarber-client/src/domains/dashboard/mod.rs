//! Dashboard screen domain

pub mod state;
pub mod update;

pub use state::{DashboardState, ScheduleHeading};
pub use update::handle_sign_out;
