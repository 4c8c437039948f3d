//! Plain-text rendering of catalog results

use mixtape_core::{Playlist, PlaylistSummary, Song, SongMatch, User, UserSummary};

pub fn users(users: &[UserSummary]) -> String {
    if users.is_empty() {
        return "No users found.\n".to_string();
    }

    let mut out = String::from("\n--- All Users ---\n");
    for summary in users {
        let user = &summary.user;
        out.push_str(&format!(
            "{}. {} - {} (Joined: {}) | Playlists: {} | Songs: {}\n",
            user.id,
            user.name,
            user.email,
            user.created_at.format("%Y-%m-%d"),
            summary.playlist_count,
            summary.song_count,
        ));
    }
    out
}

pub fn user_created(user: &User) -> String {
    format!("User '{}' created successfully! (ID {})\n", user.name, user.id)
}

pub fn user_deleted(user: &User) -> String {
    format!(
        "Deleted user '{}' along with their playlists and songs.\n",
        user.name
    )
}

pub fn playlist_created(playlist: &Playlist, owner: &User) -> String {
    format!(
        "Playlist '{}' created for {}! (ID {})\n",
        playlist.title, owner.name, playlist.id
    )
}

pub fn playlist_deleted(playlist: &Playlist) -> String {
    format!("Deleted playlist '{}' and its songs.\n", playlist.title)
}

pub fn playlists(owner: &User, playlists: &[PlaylistSummary]) -> String {
    if playlists.is_empty() {
        return format!("{} has no playlists yet.\n", owner.name);
    }

    let mut out = format!("\n--- {}'s Playlists ---\n", owner.name);
    for summary in playlists {
        let playlist = &summary.playlist;
        out.push_str(&format!("{}. {}\n", playlist.id, playlist.title));
        if let Some(description) = &playlist.description {
            out.push_str(&format!("   Description: {description}\n"));
        }
        out.push_str(&format!("   Songs: {}\n\n", summary.song_count));
    }
    out
}

pub fn song_added(song: &Song, playlist: &Playlist) -> String {
    format!("Added {} to '{}'! (ID {})\n", song, playlist.title, song.id)
}

pub fn song_deleted(song: &Song) -> String {
    format!("Deleted {} successfully.\n", song)
}

pub fn songs(playlist: &Playlist, songs: &[Song]) -> String {
    if songs.is_empty() {
        return format!("Playlist '{}' is empty.\n", playlist.title);
    }

    let mut out = format!("\n--- Songs in '{}' ---\n", playlist.title);
    for (i, song) in songs.iter().enumerate() {
        let album = song
            .album
            .as_ref()
            .map(|album| format!(" (Album: {album})"))
            .unwrap_or_default();
        out.push_str(&format!(
            "{}. {} by {}{} [ID {}]\n",
            i + 1,
            song.title,
            song.artist,
            album,
            song.id
        ));
    }
    out
}

pub fn search_results(term: &str, hits: &[SongMatch]) -> String {
    if hits.is_empty() {
        return "No songs found matching your search.\n".to_string();
    }

    let mut out = format!("\n--- Search Results for '{term}' ---\n");
    for hit in hits {
        let album = hit
            .song
            .album
            .as_ref()
            .map(|album| format!(" | Album: {album}"))
            .unwrap_or_default();
        out.push_str(&format!("{}{}\n", hit.song, album));
        out.push_str(&format!(
            "   -> Playlist: {} | User: {}\n\n",
            hit.playlist_title, hit.user_name
        ));
    }
    out
}

pub fn seeded(seeded: bool) -> String {
    if seeded {
        "Sample data seeded successfully!\nCreated 3 users, 4 playlists, and 9 songs.\n"
            .to_string()
    } else {
        "Data already exists in the database!\nUse 'list-users' to see existing data.\n"
            .to_string()
    }
}
