use crate::records::{field, parse_timestamp, reader};
use crate::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Embedded CSV of accounts shown on the admin screen.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/system_users.csv");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Citizen,
    Analyst,
    Official,
    Admin,
}

impl UserRole {
    /// Roles a visitor can sign in as from the landing page.
    pub const SIGN_IN: [UserRole; 3] = [UserRole::Citizen, UserRole::Analyst, UserRole::Official];

    pub const ALL: [UserRole; 4] = [
        UserRole::Citizen,
        UserRole::Analyst,
        UserRole::Official,
        UserRole::Admin,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Citizen => "citizen",
            UserRole::Analyst => "analyst",
            UserRole::Official => "official",
            UserRole::Admin => "admin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UserRole::Citizen => "Citizen",
            UserRole::Analyst => "Analyst",
            UserRole::Official => "Official",
            UserRole::Admin => "Admin",
        }
    }

    /// Analysts, officials and admins see the monitoring side of the app.
    pub fn is_staff(self) -> bool {
        !matches!(self, UserRole::Citizen)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::unknown("role", s))
    }
}

/// The signed-in user of the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub username: String,
}

impl User {
    pub const GUEST_ID: &'static str = "guest";
    pub const GUEST_NAME: &'static str = "Guest User";

    /// Build a session user from a sign-in form. The username is the local
    /// part of the email address.
    pub fn from_credentials(id: impl Into<String>, email: &str, role: UserRole) -> Self {
        let email = email.trim();
        let username = email.split('@').next().unwrap_or(email).to_string();
        User {
            id: id.into(),
            email: email.to_string(),
            role,
            username,
        }
    }

    pub fn guest() -> Self {
        User {
            id: Self::GUEST_ID.to_string(),
            email: "guest@example.com".to_string(),
            role: UserRole::Citizen,
            username: Self::GUEST_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
    Pending,
}

impl AccountStatus {
    pub const ALL: [AccountStatus; 3] = [
        AccountStatus::Active,
        AccountStatus::Inactive,
        AccountStatus::Pending,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
            AccountStatus::Pending => "pending",
        }
    }
}

impl FromStr for AccountStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountStatus::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::unknown("account status", s))
    }
}

/// An account listed on the admin users tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: AccountStatus,
    pub last_active: DateTime<Utc>,
    pub reports_submitted: Option<u32>,
    pub reports_verified: Option<u32>,
}

impl SystemUser {
    /// Expected columns (with headers): `id,name,email,role,status,last_active,
    /// reports_submitted,reports_verified`
    pub fn parse_system_user_csv(csv_data: &str) -> anyhow::Result<Vec<SystemUser>> {
        let mut rdr = reader(csv_data);
        let mut users = Vec::new();
        for row in rdr.records() {
            let r = row?;
            users.push(SystemUser {
                id: field(&r, 0).to_string(),
                name: field(&r, 1).to_string(),
                email: field(&r, 2).to_string(),
                role: field(&r, 3).parse()?,
                status: field(&r, 4).parse()?,
                last_active: parse_timestamp(field(&r, 5))?,
                reports_submitted: field(&r, 6).parse().ok(),
                reports_verified: field(&r, 7).parse().ok(),
            });
        }
        Ok(users)
    }
}
