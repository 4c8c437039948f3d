//! Domain types for users, playlists and songs

mod ids;
mod playlist;
mod song;
mod user;

pub use ids::{PlaylistId, SongId, UserId};
pub use playlist::{CreatePlaylist, Playlist, PlaylistSummary};
pub use song::{CreateSong, Song, SongMatch};
pub use user::{CreateUser, User, UserSummary};
