/// Playlist domain types
use super::ids::{PlaylistId, UserId};
use crate::error::Result;
use crate::validation;
use serde::{Deserialize, Serialize};

/// Playlist owned by a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist title
    pub title: String,

    /// Free-form description
    pub description: Option<String>,

    /// Owner user ID
    pub user_id: UserId,
}

/// Playlist with its song count, as shown in playlist listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    /// The playlist record
    #[serde(flatten)]
    pub playlist: Playlist,

    /// Number of songs in the playlist
    pub song_count: i64,
}

/// Validated data for creating a new playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePlaylist {
    user_id: UserId,
    title: String,
    description: Option<String>,
}

impl CreatePlaylist {
    /// Validate and normalize playlist input
    ///
    /// A blank description is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the title is blank or too long.
    pub fn new(user_id: UserId, title: &str, description: Option<&str>) -> Result<Self> {
        Ok(Self {
            user_id,
            title: validation::required("title", title)?,
            description: validation::optional(description),
        })
    }

    /// Owning user
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Trimmed title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Trimmed description, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
