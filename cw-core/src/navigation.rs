//! Navigation shell state.
//!
//! The app shows exactly one of ten screens. Any screen may ask for any
//! other; there are no guards. The [`Navigator`] also carries the session
//! user, the report picked on the map or in a list, and the role chosen on
//! the landing page before signing in.

use crate::user::{User, UserRole};
use crate::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Landing,
    Auth,
    CitizenReporting,
    Dashboard,
    ReportDetails,
    SocialFeed,
    Analytics,
    MyReports,
    AdminSettings,
    EmergencyReport,
}

impl Screen {
    pub const ALL: [Screen; 10] = [
        Screen::Landing,
        Screen::Auth,
        Screen::CitizenReporting,
        Screen::Dashboard,
        Screen::ReportDetails,
        Screen::SocialFeed,
        Screen::Analytics,
        Screen::MyReports,
        Screen::AdminSettings,
        Screen::EmergencyReport,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::Auth => "auth",
            Screen::CitizenReporting => "citizen-reporting",
            Screen::Dashboard => "dashboard",
            Screen::ReportDetails => "report-details",
            Screen::SocialFeed => "social-feed",
            Screen::Analytics => "analytics",
            Screen::MyReports => "my-reports",
            Screen::AdminSettings => "admin-settings",
            Screen::EmergencyReport => "emergency-report",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Screen {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.id() == s.trim())
            .ok_or_else(|| CoreError::UnknownScreen(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Navigator {
    current: Screen,
    user: Option<User>,
    selected_report: Option<String>,
    pending_role: Option<UserRole>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn selected_report(&self) -> Option<&str> {
        self.selected_report.as_deref()
    }

    pub fn pending_role(&self) -> Option<UserRole> {
        self.pending_role
    }

    /// Role the auth screen signs in as.
    pub fn auth_role(&self) -> UserRole {
        self.pending_role.unwrap_or(UserRole::Citizen)
    }

    pub fn navigate(&mut self, screen: Screen) {
        self.navigate_to(screen, None, None);
    }

    /// Switch screens. A report id or role, when given, replaces the stored
    /// one; `None` keeps whatever was there.
    pub fn navigate_to(&mut self, screen: Screen, report_id: Option<&str>, role: Option<UserRole>) {
        log::debug!("[CW] navigation: {} -> {}", self.current, screen);
        self.current = screen;
        if let Some(id) = report_id {
            self.selected_report = Some(id.to_string());
        }
        if let Some(role) = role {
            self.pending_role = Some(role);
        }
    }

    /// Where the signed-in user starts; the landing page when signed out.
    pub fn home(&self) -> Screen {
        match &self.user {
            Some(user) if user.role == UserRole::Citizen => Screen::CitizenReporting,
            Some(_) => Screen::Dashboard,
            None => Screen::Landing,
        }
    }

    /// Store the user and route by role. Returns the screen landed on.
    pub fn login(&mut self, user: User) -> Screen {
        log::info!("[CW] navigation: {} signed in as {}", user.username, user.role);
        self.user = Some(user);
        let target = self.home();
        self.navigate(target);
        target
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.navigate(Screen::Landing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_landing_without_user() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Screen::Landing);
        assert!(nav.user().is_none());
        assert_eq!(nav.auth_role(), UserRole::Citizen);
    }

    #[test]
    fn citizen_login_goes_to_reporting() {
        let mut nav = Navigator::new();
        let landed = nav.login(User::from_credentials("1", "a@b.c", UserRole::Citizen));
        assert_eq!(landed, Screen::CitizenReporting);
        assert_eq!(nav.current(), Screen::CitizenReporting);
    }

    #[test]
    fn staff_login_goes_to_dashboard() {
        for role in [UserRole::Analyst, UserRole::Official, UserRole::Admin] {
            let mut nav = Navigator::new();
            nav.login(User::from_credentials("1", "a@b.c", role));
            assert_eq!(nav.current(), Screen::Dashboard, "role {role} should land on dashboard");
        }
    }

    #[test]
    fn logout_clears_user_from_any_screen() {
        for screen in Screen::ALL {
            let mut nav = Navigator::new();
            nav.login(User::guest());
            nav.navigate(screen);
            nav.logout();
            assert_eq!(nav.current(), Screen::Landing);
            assert!(nav.user().is_none());
        }
    }

    #[test]
    fn any_screen_reaches_any_other() {
        for from in Screen::ALL {
            for to in Screen::ALL {
                let mut nav = Navigator::new();
                nav.navigate(from);
                nav.navigate(to);
                assert_eq!(nav.current(), to);
            }
        }
    }

    #[test]
    fn report_and_role_are_sticky() {
        let mut nav = Navigator::new();
        nav.navigate_to(Screen::Auth, None, Some(UserRole::Official));
        assert_eq!(nav.auth_role(), UserRole::Official);

        nav.navigate_to(Screen::ReportDetails, Some("r_002"), None);
        nav.navigate(Screen::Dashboard);
        assert_eq!(nav.selected_report(), Some("r_002"));
        assert_eq!(nav.pending_role(), Some(UserRole::Official));
    }

    #[test]
    fn screen_ids_parse_back() {
        assert_eq!("my-reports".parse::<Screen>(), Ok(Screen::MyReports));
        assert_eq!(
            "settings".parse::<Screen>(),
            Err(CoreError::UnknownScreen("settings".to_string()))
        );
    }

    #[test]
    fn home_follows_the_session() {
        let mut nav = Navigator::new();
        assert_eq!(nav.home(), Screen::Landing);
        nav.login(User::from_credentials("u1", "ops@coastalwatch.gov", UserRole::Official));
        nav.navigate(Screen::EmergencyReport);
        assert_eq!(nav.home(), Screen::Dashboard);
        nav.logout();
        nav.login(User::guest());
        assert_eq!(nav.home(), Screen::CitizenReporting);
    }
}
