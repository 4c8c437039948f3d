/// User domain types
use super::ids::UserId;
use crate::error::Result;
use crate::validation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Email address, unique across all users
    pub email: String,

    /// Account creation timestamp, set once at creation
    pub created_at: DateTime<Utc>,
}

/// User with aggregate counts, as shown in user listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// The user record
    #[serde(flatten)]
    pub user: User,

    /// Number of playlists owned by the user
    pub playlist_count: i64,

    /// Number of songs across all of the user's playlists
    pub song_count: i64,
}

/// Validated data for creating a new user
///
/// Only obtainable through [`CreateUser::new`], so every value reaching the
/// store has already been trimmed and checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    name: String,
    email: String,
}

impl CreateUser {
    /// Validate and normalize user input
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is blank, or the email is blank
    /// or lacks an `@`.
    pub fn new(name: &str, email: &str) -> Result<Self> {
        Ok(Self {
            name: validation::required("name", name)?,
            email: validation::email(email)?,
        })
    }

    /// Trimmed display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trimmed email address
    pub fn email(&self) -> &str {
        &self.email
    }
}
