//! Command-line surface and dispatch onto the catalog

use crate::error::Result;
use crate::output;
use clap::{Parser, Subcommand};
use mixtape_core::{Catalog, MixtapeError, Playlist, PlaylistId, User, UserId};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mixtape")]
#[command(about = "Manage users, playlists and songs", long_about = None)]
pub struct Cli {
    /// Configuration file path (defaults to ./mixtape.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Database URL, overriding the configuration
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all users
    ListUsers,
    /// Create a new user
    CreateUser {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Email address
        #[arg(short, long)]
        email: String,
    },
    /// Delete a user with all their playlists and songs
    DeleteUser {
        #[arg(short, long)]
        user_id: UserId,
    },
    /// Create a playlist for a user
    CreatePlaylist {
        #[arg(short, long)]
        user_id: UserId,
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Show a user's playlists
    ViewPlaylists {
        #[arg(short, long)]
        user_id: UserId,
    },
    /// Delete a playlist with all its songs
    DeletePlaylist {
        #[arg(short, long)]
        playlist_id: PlaylistId,
    },
    /// Add a song to a playlist
    AddSong {
        #[arg(short, long)]
        playlist_id: PlaylistId,
        #[arg(short, long)]
        title: String,
        #[arg(short = 'r', long)]
        artist: String,
        #[arg(short = 'l', long)]
        album: Option<String>,
    },
    /// Show the songs in a playlist
    ViewSongs {
        #[arg(short, long)]
        playlist_id: PlaylistId,
    },
    /// Delete a song
    DeleteSong {
        #[arg(short, long)]
        song_id: i64,
    },
    /// Search songs by title, artist or album
    Search {
        /// Text to look for (case-insensitive)
        #[arg(short, long)]
        term: String,
    },
    /// Populate an empty database with sample data
    Seed,
}

/// Run one command against the catalog and render its result
pub async fn execute(catalog: &dyn Catalog, command: Commands, json: bool) -> Result<String> {
    let rendered = match command {
        Commands::ListUsers => {
            let users = catalog.list_users().await?;
            render(json, &users, || output::users(&users))?
        }
        Commands::CreateUser { name, email } => {
            let user = catalog.create_user(&name, &email).await?;
            render(json, &user, || output::user_created(&user))?
        }
        Commands::DeleteUser { user_id } => {
            let user = catalog.delete_user(user_id).await?;
            render(json, &user, || output::user_deleted(&user))?
        }
        Commands::CreatePlaylist {
            user_id,
            title,
            description,
        } => {
            let playlist = catalog
                .create_playlist(user_id, &title, description.as_deref())
                .await?;
            let owner = require_user(catalog, user_id).await?;
            render(json, &playlist, || output::playlist_created(&playlist, &owner))?
        }
        Commands::ViewPlaylists { user_id } => {
            let playlists = catalog.list_playlists(user_id).await?;
            let owner = require_user(catalog, user_id).await?;
            render(json, &playlists, || output::playlists(&owner, &playlists))?
        }
        Commands::DeletePlaylist { playlist_id } => {
            let playlist = catalog.delete_playlist(playlist_id).await?;
            render(json, &playlist, || output::playlist_deleted(&playlist))?
        }
        Commands::AddSong {
            playlist_id,
            title,
            artist,
            album,
        } => {
            let song = catalog
                .add_song(playlist_id, &title, &artist, album.as_deref())
                .await?;
            let playlist = require_playlist(catalog, playlist_id).await?;
            render(json, &song, || output::song_added(&song, &playlist))?
        }
        Commands::ViewSongs { playlist_id } => {
            let songs = catalog.list_songs(playlist_id).await?;
            let playlist = require_playlist(catalog, playlist_id).await?;
            render(json, &songs, || output::songs(&playlist, &songs))?
        }
        Commands::DeleteSong { song_id } => {
            let song = catalog.delete_song(song_id).await?;
            render(json, &song, || output::song_deleted(&song))?
        }
        Commands::Search { term } => {
            let hits = catalog.search_songs(&term).await?;
            render(json, &hits, || output::search_results(term.trim(), &hits))?
        }
        Commands::Seed => {
            let seeded = catalog.seed_sample_data().await?;
            render(json, &seeded, || output::seeded(seeded))?
        }
    };

    Ok(rendered)
}

fn render<T>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<String>
where
    T: Serialize + ?Sized,
{
    if json {
        let mut out = serde_json::to_string_pretty(value)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(text())
    }
}

async fn require_user(catalog: &dyn Catalog, id: UserId) -> Result<User> {
    catalog
        .get_user(id)
        .await?
        .ok_or_else(|| MixtapeError::not_found("User", id).into())
}

async fn require_playlist(catalog: &dyn Catalog, id: PlaylistId) -> Result<Playlist> {
    catalog
        .get_playlist(id)
        .await?
        .ok_or_else(|| MixtapeError::not_found("Playlist", id).into())
}
