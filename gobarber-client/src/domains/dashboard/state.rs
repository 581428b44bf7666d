use chrono::{Datelike, NaiveDate};
use gobarber_core::users::UserRecord;

use crate::infra::services::SessionStore;

pub const GREETING: &str = "Welcome";

/// Header and schedule state of the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub user_name: Option<String>,
    pub avatar_url: Option<String>,
    pub today: NaiveDate,
    pub selected_date: NaiveDate,
}

/// Labels above the schedule for the selected day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleHeading {
    pub is_today: bool,
    pub day: String,
    pub weekday: String,
}

impl DashboardState {
    /// Build from the session; the selected day starts at `today`
    pub fn from_session(session: &dyn SessionStore, today: NaiveDate) -> Self {
        let mut state = Self {
            user_name: None,
            avatar_url: None,
            today,
            selected_date: today,
        };
        state.refresh_user(session.current_user().as_ref());
        state
    }

    /// Re-read the header after the session user was replaced
    pub fn refresh_user(&mut self, user: Option<&UserRecord>) {
        self.user_name = user.map(|u| u.name.clone());
        self.avatar_url = user.and_then(|u| u.avatar_url.clone());
    }

    pub fn greeting(&self) -> &'static str {
        GREETING
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    pub fn schedule_heading(&self) -> ScheduleHeading {
        ScheduleHeading {
            is_today: self.selected_date == self.today,
            day: format!("Day {:02}", self.selected_date.day()),
            weekday: self.selected_date.format("%A").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::services::InMemorySession;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 7, 6).unwrap()
    }

    #[test]
    fn header_reflects_session_user() {
        let session = InMemorySession::signed_in(
            UserRecord::new("Ana", "ana@x.com")
                .with_avatar_url("http://localhost:3333/files/ana.png"),
        );
        let state = DashboardState::from_session(&session, monday());

        assert_eq!(state.greeting(), "Welcome");
        assert_eq!(state.user_name.as_deref(), Some("Ana"));
        assert_eq!(
            state.avatar_url.as_deref(),
            Some("http://localhost:3333/files/ana.png")
        );
    }

    #[test]
    fn schedule_heading_follows_selected_date() {
        let session = InMemorySession::new();
        let mut state = DashboardState::from_session(&session, monday());

        assert_eq!(
            state.schedule_heading(),
            ScheduleHeading {
                is_today: true,
                day: "Day 06".into(),
                weekday: "Monday".into(),
            }
        );

        state.select_date(NaiveDate::from_ymd_opt(2020, 7, 8).unwrap());
        let heading = state.schedule_heading();
        assert!(!heading.is_today);
        assert_eq!(heading.day, "Day 08");
        assert_eq!(heading.weekday, "Wednesday");
    }
}
