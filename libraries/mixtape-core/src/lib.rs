//! Mixtape Core
//!
//! Entity types, validated creation drafts, and error handling shared by
//! every Mixtape crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Playlist`, `Song` and their summary views
//! - **Creation Drafts**: `CreateUser`, `CreatePlaylist`, `CreateSong`, which
//!   can only be built through validating constructors
//! - **Catalog Trait**: the operation surface front ends call into
//! - **Error Handling**: `MixtapeError` keeping validation, lookup and
//!   infrastructure failures apart
//!
//! # Example
//!
//! ```rust
//! use mixtape_core::types::{CreateSong, CreateUser};
//!
//! let user = CreateUser::new("  Alice Johnson ", "alice@email.com").unwrap();
//! assert_eq!(user.name(), "Alice Johnson");
//!
//! // Required fields must not be blank
//! assert!(CreateSong::new(1, "Weightless", "   ", None).is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod types;
mod validation;

pub use catalog::Catalog;
pub use error::{MixtapeError, Result};

pub use types::{
    CreatePlaylist, CreateSong, CreateUser, Playlist, PlaylistId, PlaylistSummary, Song, SongId,
    SongMatch, User, UserId, UserSummary,
};
