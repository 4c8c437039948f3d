/// Song domain types
use super::ids::{PlaylistId, SongId};
use crate::error::Result;
use crate::validation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Song stored in a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Song title
    pub title: String,

    /// Performing artist
    pub artist: String,

    /// Album name
    pub album: Option<String>,

    /// Owning playlist ID
    pub playlist_id: PlaylistId,
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' by {}", self.title, self.artist)
    }
}

/// Search hit with denormalized owner data for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongMatch {
    /// The matching song
    #[serde(flatten)]
    pub song: Song,

    /// Title of the playlist holding the song
    pub playlist_title: String,

    /// Name of the user owning that playlist
    pub user_name: String,
}

/// Validated data for adding a song to a playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSong {
    playlist_id: PlaylistId,
    title: String,
    artist: String,
    album: Option<String>,
}

impl CreateSong {
    /// Validate and normalize song input
    ///
    /// # Errors
    ///
    /// Returns a validation error if the title or artist is blank.
    pub fn new(
        playlist_id: PlaylistId,
        title: &str,
        artist: &str,
        album: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            playlist_id,
            title: validation::required("title", title)?,
            artist: validation::required("artist", artist)?,
            album: validation::optional(album),
        })
    }

    /// Owning playlist
    pub fn playlist_id(&self) -> PlaylistId {
        self.playlist_id
    }

    /// Trimmed title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Trimmed artist
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Trimmed album, if any
    pub fn album(&self) -> Option<&str> {
        self.album.as_deref()
    }
}
