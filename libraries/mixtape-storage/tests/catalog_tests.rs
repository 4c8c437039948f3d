//! Integration tests for the catalog operations
//!
//! Tests:
//! - User registration, normalization and email uniqueness
//! - Playlist and song creation against existing owners
//! - Listing order and aggregate counts
//! - Deletes, including cascades
//! - Search semantics


use mixtape_core::{Catalog, MixtapeError};
use test_helpers::*;

// ===== Users =====

#[tokio::test]
async fn test_create_user_trims_fields() {
    let db = TestDb::new().await;

    let user = db
        .catalog
        .create_user("  Dana Scully ", "\tdana@fbi.gov  ")
        .await
        .expect("Failed to create user");

    assert_eq!(user.name, "Dana Scully");
    assert_eq!(user.email, "dana@fbi.gov");
    assert!(user.id > 0);

    let stored = db.catalog.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(stored, user);
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let db = TestDb::new().await;

    db.catalog
        .create_user("Alice", "alice@email.com")
        .await
        .unwrap();

    let err = db
        .catalog
        .create_user("Another Alice", " alice@email.com ")
        .await
        .unwrap_err();

    assert!(
        matches!(err, MixtapeError::Validation { field: "email", .. }),
        "unexpected error: {err:?}"
    );
    assert!(err.to_string().contains("already registered"));

    let (users, _, _) = db.counts().await;
    assert_eq!(users, 1);
}

#[tokio::test]
async fn test_long_fields_are_stored_whole() {
    let db = TestDb::new().await;
    let name = "N".repeat(101);

    let user = db
        .catalog
        .create_user(&name, "long@email.com")
        .await
        .expect("Failed to create user with long name");
    assert_eq!(user.name, name);

    let playlist = db
        .catalog
        .create_playlist(user.id, &"T".repeat(250), None)
        .await
        .expect("Failed to create playlist with long title");
    let song = db
        .catalog
        .add_song(playlist.id, "Weightless", "Marconi Union", Some(&"A".repeat(150)))
        .await
        .expect("Failed to add song with long album");
    assert_eq!(song.album.map(|a| a.len()), Some(150));
}

#[tokio::test]
async fn test_invalid_user_input_writes_nothing() {
    let db = TestDb::new().await;

    for (name, email) in [("", "a@b.c"), ("   ", "a@b.c"), ("Ann", ""), ("Ann", "no-at-sign")] {
        let err = db.catalog.create_user(name, email).await.unwrap_err();
        assert!(err.is_validation(), "{name:?}/{email:?} gave {err:?}");
    }

    let (users, _, _) = db.counts().await;
    assert_eq!(users, 0);
}

#[tokio::test]
async fn test_list_users_sorted_with_counts() {
    let db = TestDb::new().await;

    let zoe = create_test_user(&db.catalog, "Zoe").await;
    let adam = create_test_user(&db.catalog, "Adam").await;
    create_test_user(&db.catalog, "Mia").await;

    let mix = create_test_playlist(&db.catalog, &zoe, "Mix").await;
    create_test_playlist(&db.catalog, &zoe, "Empty").await;
    db.catalog.add_song(mix.id, "One", "U2", None).await.unwrap();
    db.catalog.add_song(mix.id, "Two", "U2", None).await.unwrap();

    let users = db.catalog.list_users().await.unwrap();
    let names: Vec<&str> = users.iter().map(|u| u.user.name.as_str()).collect();
    assert_eq!(names, ["Adam", "Mia", "Zoe"]);

    assert_eq!(users[0].user.id, adam.id);
    assert_eq!((users[0].playlist_count, users[0].song_count), (0, 0));
    assert_eq!((users[2].playlist_count, users[2].song_count), (2, 2));
}

#[tokio::test]
async fn test_list_users_empty() {
    let db = TestDb::new().await;
    assert!(db.catalog.list_users().await.unwrap().is_empty());
}

// ===== Playlists =====

#[tokio::test]
async fn test_create_playlist_listed_once() {
    let db = TestDb::new().await;
    let owner = create_test_user(&db.catalog, "Owner").await;
    let other = create_test_user(&db.catalog, "Other").await;

    let playlist = db
        .catalog
        .create_playlist(owner.id, " Late Night ", Some(" quiet stuff "))
        .await
        .expect("Failed to create playlist");
    create_test_playlist(&db.catalog, &other, "Not Mine").await;

    assert_eq!(playlist.title, "Late Night");
    assert_eq!(playlist.description.as_deref(), Some("quiet stuff"));
    assert_eq!(playlist.user_id, owner.id);

    let listed = db.catalog.list_playlists(owner.id).await.unwrap();
    let hits = listed.iter().filter(|p| p.playlist.id == playlist.id).count();
    assert_eq!(hits, 1);
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].song_count, 0);
}

#[tokio::test]
async fn test_create_playlist_unknown_user() {
    let db = TestDb::new().await;

    let err = db
        .catalog
        .create_playlist(999, "Orphan", None)
        .await
        .unwrap_err();

    assert!(matches!(err, MixtapeError::NotFound { entity: "User", id: 999 }));
    assert_eq!(db.counts().await, (0, 0, 0));
}

#[tokio::test]
async fn test_create_playlist_empty_title() {
    let db = TestDb::new().await;
    let owner = create_test_user(&db.catalog, "Owner").await;

    let err = db
        .catalog
        .create_playlist(owner.id, "  ", None)
        .await
        .unwrap_err();

    assert!(matches!(err, MixtapeError::Validation { field: "title", .. }));
    assert!(db.catalog.list_playlists(owner.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_playlists_unknown_user() {
    let db = TestDb::new().await;
    let err = db.catalog.list_playlists(42).await.unwrap_err();
    assert!(err.is_not_found());
}

// ===== Songs =====

#[tokio::test]
async fn test_add_and_list_songs_in_order() {
    let db = TestDb::new().await;
    let owner = create_test_user(&db.catalog, "Owner").await;
    let playlist = create_test_playlist(&db.catalog, &owner, "Rock").await;

    let first = db
        .catalog
        .add_song(playlist.id, " Hotel California ", " Eagles ", Some("  "))
        .await
        .unwrap();
    let second = db
        .catalog
        .add_song(playlist.id, "Bohemian Rhapsody", "Queen", Some("A Night at the Opera"))
        .await
        .unwrap();

    assert_eq!(first.title, "Hotel California");
    assert_eq!(first.artist, "Eagles");
    assert_eq!(first.album, None);
    assert_eq!(first.playlist_id, playlist.id);

    let songs = db.catalog.list_songs(playlist.id).await.unwrap();
    assert_eq!(songs, vec![first, second]);
}

#[tokio::test]
async fn test_add_song_empty_artist_keeps_count() {
    let db = TestDb::new().await;
    let owner = create_test_user(&db.catalog, "Owner").await;
    let playlist = create_test_playlist(&db.catalog, &owner, "Rock").await;
    db.catalog
        .add_song(playlist.id, "Hotel California", "Eagles", None)
        .await
        .unwrap();

    let err = db
        .catalog
        .add_song(playlist.id, "Untitled", "", None)
        .await
        .unwrap_err();

    assert!(matches!(err, MixtapeError::Validation { field: "artist", .. }));
    assert_eq!(db.catalog.list_songs(playlist.id).await.unwrap().len(), 1);

    let summaries = db.catalog.list_playlists(owner.id).await.unwrap();
    assert_eq!(summaries[0].song_count, 1);

    let mut conn = db.pool().acquire().await.unwrap();
    let stored = mixtape_storage::songs::count_in_playlist(&mut conn, playlist.id)
        .await
        .unwrap();
    assert_eq!(stored, 1);
}

#[tokio::test]
async fn test_add_song_unknown_playlist() {
    let db = TestDb::new().await;

    let err = db
        .catalog
        .add_song(7, "Song", "Artist", None)
        .await
        .unwrap_err();

    assert!(matches!(err, MixtapeError::NotFound { entity: "Playlist", id: 7 }));
}

#[tokio::test]
async fn test_list_songs_unknown_playlist() {
    let db = TestDb::new().await;
    let err = db.catalog.list_songs(3).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_song_returns_deleted() {
    let db = TestDb::new().await;
    let owner = create_test_user(&db.catalog, "Owner").await;
    let playlist = create_test_playlist(&db.catalog, &owner, "Rock").await;
    let song = db
        .catalog
        .add_song(playlist.id, "Stronger", "Kanye West", Some("Graduation"))
        .await
        .unwrap();

    let deleted = db.catalog.delete_song(song.id).await.unwrap();
    assert_eq!(deleted, song);
    assert!(db.catalog.list_songs(playlist.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_missing_song_mutates_nothing() {
    let db = TestDb::new().await;
    db.catalog.seed_sample_data().await.unwrap();
    let before = db.counts().await;

    let err = db.catalog.delete_song(10_000).await.unwrap_err();

    assert!(matches!(err, MixtapeError::NotFound { entity: "Song", id: 10_000 }));
    assert_eq!(db.counts().await, before);
}

// ===== Cascades =====

#[tokio::test]
async fn test_delete_user_cascades() {
    let db = TestDb::new().await;
    let keep = create_test_user(&db.catalog, "Keep").await;
    let gone = create_test_user(&db.catalog, "Gone").await;

    let kept_playlist = create_test_playlist(&db.catalog, &keep, "Kept").await;
    db.catalog
        .add_song(kept_playlist.id, "Stay", "Someone", None)
        .await
        .unwrap();

    let mut gone_playlists = Vec::new();
    let mut gone_songs = Vec::new();
    for title in ["One", "Two"] {
        let playlist = create_test_playlist(&db.catalog, &gone, title).await;
        let song = db
            .catalog
            .add_song(playlist.id, title, "Artist", None)
            .await
            .unwrap();
        gone_playlists.push(playlist);
        gone_songs.push(song);
    }

    let deleted = db.catalog.delete_user(gone.id).await.unwrap();
    assert_eq!(deleted.id, gone.id);

    assert!(db.catalog.get_user(gone.id).await.unwrap().is_none());
    for playlist in &gone_playlists {
        assert!(db.catalog.get_playlist(playlist.id).await.unwrap().is_none());
    }
    let mut conn = db.pool().acquire().await.unwrap();
    for song in &gone_songs {
        let found = mixtape_storage::songs::get_by_id(&mut conn, song.id)
            .await
            .unwrap();
        assert!(found.is_none());
    }

    assert_eq!(db.counts().await, (1, 1, 1));
    assert!(db.catalog.search_songs("Artist").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_playlist_cascades() {
    let db = TestDb::new().await;
    let owner = create_test_user(&db.catalog, "Owner").await;
    let playlist = create_test_playlist(&db.catalog, &owner, "Doomed").await;
    db.catalog
        .add_song(playlist.id, "Song", "Artist", None)
        .await
        .unwrap();

    let deleted = db.catalog.delete_playlist(playlist.id).await.unwrap();
    assert_eq!(deleted, playlist);

    assert_eq!(db.counts().await, (1, 0, 0));
    assert!(db.catalog.list_songs(playlist.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_delete_missing_user() {
    let db = TestDb::new().await;
    let err = db.catalog.delete_user(5).await.unwrap_err();
    assert!(matches!(err, MixtapeError::NotFound { entity: "User", id: 5 }));
}

// ===== Search =====

#[tokio::test]
async fn test_search_case_insensitive() {
    let db = TestDb::new().await;
    db.catalog.seed_sample_data().await.unwrap();

    let hits = db.catalog.search_songs("queen").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].song.title, "Bohemian Rhapsody");
    assert_eq!(hits[0].song.artist, "Queen");
    assert_eq!(hits[0].playlist_title, "Rock Classics");
    assert_eq!(hits[0].user_name, "Alice Johnson");

    assert!(db.catalog.search_songs("zzz-no-match").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_matches_any_field_once() {
    let db = TestDb::new().await;
    db.catalog.seed_sample_data().await.unwrap();

    // "Weightless" is both title and album of one song
    let hits = db.catalog.search_songs("WEIGHTLESS").await.unwrap();
    assert_eq!(hits.len(), 1);

    // "Eye of the Tiger" likewise; "tiger" must not duplicate it
    let hits = db.catalog.search_songs("tiger").await.unwrap();
    assert_eq!(hits.len(), 1);

    // Album-only match
    let hits = db.catalog.search_songs("graduation").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].song.title, "Stronger");

    // Title, artist and album matches across songs, each once, ordered by id
    let hits = db.catalog.search_songs("o").await.unwrap();
    let mut ids: Vec<i64> = hits.iter().map(|h| h.song.id).collect();
    let sorted = {
        let mut s = ids.clone();
        s.sort_unstable();
        s
    };
    assert_eq!(ids, sorted);
    ids.dedup();
    assert_eq!(ids.len(), hits.len());
}

#[tokio::test]
async fn test_search_wildcards_are_literal() {
    let db = TestDb::new().await;
    let owner = create_test_user(&db.catalog, "Owner").await;
    let playlist = create_test_playlist(&db.catalog, &owner, "Odd").await;
    db.catalog
        .add_song(playlist.id, "100% Pure", "Someone", None)
        .await
        .unwrap();
    db.catalog
        .add_song(playlist.id, "1000 Pure", "Someone", None)
        .await
        .unwrap();

    let hits = db.catalog.search_songs("100%").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].song.title, "100% Pure");

    assert!(db.catalog.search_songs("_").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_empty_term_rejected() {
    let db = TestDb::new().await;

    for term in ["", "   "] {
        let err = db.catalog.search_songs(term).await.unwrap_err();
        assert!(matches!(err, MixtapeError::Validation { field: "search term", .. }));
    }
}
