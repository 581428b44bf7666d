use gobarber_core::users::UserRecord;
use parking_lot::RwLock;

/// Signed-in session as seen by the screens
///
/// The user record is only ever replaced wholesale, never merged: whichever
/// update resolves last wins.
pub trait SessionStore: Send + Sync {
    fn current_user(&self) -> Option<UserRecord>;

    /// Replace the cached user with `user`
    fn update_user(&self, user: UserRecord);

    fn sign_out(&self);
}

#[derive(Debug, Default)]
pub struct InMemorySession {
    user: RwLock<Option<UserRecord>>,
}

impl InMemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(user: UserRecord) -> Self {
        Self {
            user: RwLock::new(Some(user)),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.read().is_some()
    }
}

impl SessionStore for InMemorySession {
    fn current_user(&self) -> Option<UserRecord> {
        self.user.read().clone()
    }

    fn update_user(&self, user: UserRecord) {
        log::debug!("session user replaced ({})", user.email);
        *self.user.write() = Some(user);
    }

    fn sign_out(&self) {
        *self.user.write() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_replaces_instead_of_merging() {
        let mut original = UserRecord::new("Ana", "ana@x.com")
            .with_avatar_url("http://localhost:3333/files/a.png");
        original.extra.insert("id".into(), json!("u-1"));
        let session = InMemorySession::signed_in(original);

        session.update_user(UserRecord::new("Ana Souza", "ana@x.com"));

        let current = session.current_user().unwrap();
        assert_eq!(current.name, "Ana Souza");
        assert_eq!(current.avatar_url, None);
        assert!(current.extra.is_empty());
    }

    #[test]
    fn sign_out_clears_user() {
        let session =
            InMemorySession::signed_in(UserRecord::new("Ana", "ana@x.com"));
        assert!(session.is_signed_in());

        session.sign_out();
        assert!(!session.is_signed_in());
        assert_eq!(session.current_user(), None);
    }
}
