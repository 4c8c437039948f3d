//! Sample data for a fresh catalog

use crate::{playlists, songs, users};
use mixtape_core::{error::Result, CreatePlaylist, CreateSong, CreateUser};
use sqlx::SqliteConnection;

/// Sample users as `(name, email)`
pub const SAMPLE_USERS: &[(&str, &str)] = &[
    ("Alice Johnson", "alice@email.com"),
    ("Bob Smith", "bob@email.com"),
    ("Charlie Brown", "charlie@email.com"),
];

/// Sample playlists as `(owner index into SAMPLE_USERS, title, description)`
pub const SAMPLE_PLAYLISTS: &[(usize, &str, &str)] = &[
    (0, "Rock Classics", "Best rock songs ever"),
    (1, "Chill Vibes", "Relaxing music for studying"),
    (2, "Workout Mix", "High energy workout songs"),
    (0, "Road Trip", "Perfect driving playlist"),
];

/// Sample songs as `(playlist index into SAMPLE_PLAYLISTS, title, artist, album)`
pub const SAMPLE_SONGS: &[(usize, &str, &str, &str)] = &[
    (0, "Bohemian Rhapsody", "Queen", "A Night at the Opera"),
    (0, "Sweet Child O' Mine", "Guns N' Roses", "Appetite for Destruction"),
    (0, "Hotel California", "Eagles", "Hotel California"),
    (1, "Weightless", "Marconi Union", "Weightless"),
    (1, "Strawberry Swing", "Coldplay", "Viva la Vida"),
    (2, "Eye of the Tiger", "Survivor", "Eye of the Tiger"),
    (2, "Stronger", "Kanye West", "Graduation"),
    (3, "Life is a Highway", "Tom Cochrane", "Mad Mad World"),
    (3, "On the Road Again", "Willie Nelson", "Honeysuckle Rose"),
];

/// Insert the sample users, playlists and songs
///
/// Does nothing and returns `false` if any user exists. Run inside a unit of
/// work: a failure part-way leaves earlier inserts pending for rollback.
pub async fn seed(conn: &mut SqliteConnection) -> Result<bool> {
    if users::count(conn).await? > 0 {
        tracing::info!("Catalog already has users, skipping sample data");
        return Ok(false);
    }

    let mut user_ids = Vec::with_capacity(SAMPLE_USERS.len());
    for (name, email) in SAMPLE_USERS {
        let user = users::create(conn, &CreateUser::new(name, email)?).await?;
        user_ids.push(user.id);
    }

    let mut playlist_ids = Vec::with_capacity(SAMPLE_PLAYLISTS.len());
    for &(owner, title, description) in SAMPLE_PLAYLISTS {
        let draft = CreatePlaylist::new(user_ids[owner], title, Some(description))?;
        let playlist = playlists::create(conn, &draft).await?;
        playlist_ids.push(playlist.id);
    }

    for &(playlist, title, artist, album) in SAMPLE_SONGS {
        let draft = CreateSong::new(playlist_ids[playlist], title, artist, Some(album))?;
        songs::create(conn, &draft).await?;
    }

    tracing::info!(
        "Seeded {} users, {} playlists, {} songs",
        SAMPLE_USERS.len(),
        SAMPLE_PLAYLISTS.len(),
        SAMPLE_SONGS.len()
    );

    Ok(true)
}
