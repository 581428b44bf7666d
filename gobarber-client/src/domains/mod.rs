//! Screen domains: state and the workflows that drive it

pub mod dashboard;
pub mod profile;
