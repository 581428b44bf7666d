use crate::infra::services::{Navigator, Route, SessionStore};

/// Handle the power button in the dashboard header
pub fn handle_sign_out(session: &dyn SessionStore, navigator: &dyn Navigator) {
    log::info!("[Dashboard] Signing out");
    session.sign_out();
    navigator.navigate(Route::SignIn);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::services::{HistoryNavigator, InMemorySession};
    use gobarber_core::users::UserRecord;

    #[test]
    fn sign_out_clears_session_and_returns_to_sign_in() {
        let session =
            InMemorySession::signed_in(UserRecord::new("Ana", "ana@x.com"));
        let navigator = HistoryNavigator::starting_at(Route::Dashboard);

        handle_sign_out(&session, &navigator);

        assert!(!session.is_signed_in());
        assert_eq!(navigator.current(), Some(Route::SignIn));
    }
}
