use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::AppError;

/// Account role controlling which views a signed-in user may open.
///
/// - `Artist`: uploads tracks and follows their performance.
/// - `Admin`: reviews submissions and manages artist accounts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Role {
    #[default]
    Artist,
    Admin,
}

/// All roles in login tab order.
pub const ALL_ROLES: &[Role] = &[Role::Artist, Role::Admin];

impl Role {
    /// Lowercase key used in config files and serialized identities.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Artist => "artist",
            Role::Admin => "admin",
        }
    }

    /// Human-readable label for tabs and buttons.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Artist => "Artist",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    /// Case-insensitive; accepts "administrator" as an alias for admin.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "artist" => Ok(Role::Artist),
            "admin" | "administrator" => Ok(Role::Admin),
            other => Err(AppError::validation_field(
                "role",
                format!("Unknown role \"{other}\""),
            )),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Account details shared by both identity variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// The currently signed-in actor.
///
/// The role is carried by the variant itself, so an identity always has
/// exactly one role and it cannot change without replacing the identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role", content = "profile", rename_all = "lowercase")]
pub enum Identity {
    Artist(Profile),
    #[serde(rename = "admin")]
    Administrator(Profile),
}

impl Identity {
    /// Wrap a profile in the variant for `role`.
    pub fn new(role: Role, profile: Profile) -> Self {
        match role {
            Role::Artist => Identity::Artist(profile),
            Role::Admin => Identity::Administrator(profile),
        }
    }

    /// Build a fresh identity from login form input.
    ///
    /// There is no account store: the profile is synthesized from the email
    /// with a new id and the current time.
    pub fn from_login(email: &str, role: Role) -> Self {
        let email = email.trim();
        let profile = Profile {
            id: Uuid::new_v4(),
            name: display_name_from_email(email, role),
            email: email.to_string(),
            created_at: Utc::now(),
        };
        Identity::new(role, profile)
    }

    pub fn role(&self) -> Role {
        match self {
            Identity::Artist(_) => Role::Artist,
            Identity::Administrator(_) => Role::Admin,
        }
    }

    pub fn profile(&self) -> &Profile {
        match self {
            Identity::Artist(profile) | Identity::Administrator(profile) => profile,
        }
    }

    pub fn name(&self) -> &str {
        &self.profile().name
    }

    pub fn email(&self) -> &str {
        &self.profile().email
    }
}

/// Derive a display name from the local part of an email address.
///
/// `.`, `_` and `-` separate words and each word is capitalised, so
/// `luna.echo@example.com` becomes "Luna Echo". Falls back to the role's
/// label when the local part is empty.
pub fn display_name_from_email(email: &str, role: Role) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let words: Vec<String> = local
        .split(['.', '_', '-'])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect();

    if words.is_empty() {
        role.display_name().to_string()
    } else {
        words.join(" ")
    }
}
