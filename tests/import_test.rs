mod common;

use anghami2spotify::{Error, import, spotify::PLAYLIST_DESCRIPTION, types::{Session, TrackEntry}};
use common::{FakeService, RecordingReporter};

fn session() -> Session {
    Session::from_access_token("fake-token")
}

#[tokio::test]
async fn test_create_playlist_is_public_with_description() {
    let service = FakeService::default();

    let id = import::create_playlist(&service, &session(), "someone", "From Anghami")
        .await
        .unwrap();

    assert_eq!(id, "playlist-1");
    assert_eq!(
        *service.created.lock().unwrap(),
        vec![(
            "someone".to_string(),
            "From Anghami".to_string(),
            PLAYLIST_DESCRIPTION.to_string()
        )]
    );
}

#[tokio::test]
async fn test_create_playlist_rejection_is_fatal() {
    let service = FakeService {
        reject_create: true,
        ..FakeService::default()
    };

    let res = import::create_playlist(&service, &session(), "someone", "From Anghami").await;
    assert!(matches!(res, Err(Error::PlaylistCreate(_))));
}

#[tokio::test]
async fn test_import_collects_misses_in_order() {
    let service = FakeService::with_catalog(&[
        ("Song A Artist X", "spotify:track:a"),
        ("Song C Artist Z", "spotify:track:c"),
    ]);
    let reporter = RecordingReporter::default();
    let entries = vec![
        TrackEntry::new("Song A", "Artist X"),
        TrackEntry::new("Song B", "Artist Y"),
        TrackEntry::new("Song C", "Artist Z"),
        TrackEntry::new("Song D", "Artist W"),
    ];

    let not_found =
        import::import_tracks(&service, &session(), "playlist-1", &entries, &reporter).await;

    assert_eq!(not_found, vec!["Song B Artist Y", "Song D Artist W"]);
    assert_eq!(
        service.added_uris(),
        vec!["spotify:track:a", "spotify:track:c"]
    );
    assert!(
        service
            .added
            .lock()
            .unwrap()
            .iter()
            .all(|(playlist, _)| playlist == "playlist-1")
    );
    assert!(reporter.channel("error").is_empty());
}

#[tokio::test]
async fn test_import_searches_each_entry_once_in_order() {
    let service = FakeService::with_catalog(&[("Song B Artist Y", "spotify:track:b")]);
    let reporter = RecordingReporter::default();
    let entries = vec![
        TrackEntry::new("Song A", "Artist X"),
        TrackEntry::new("Song B", "Artist Y"),
    ];

    import::import_tracks(&service, &session(), "playlist-1", &entries, &reporter).await;

    assert_eq!(
        service.calls(),
        vec![
            "search Song A Artist X",
            "search Song B Artist Y",
            "add spotify:track:b",
        ]
    );
}

#[tokio::test]
async fn test_remote_errors_do_not_abort_import() {
    let mut service = FakeService::with_catalog(&[
        ("Song A Artist X", "spotify:track:a"),
        ("Song B Artist Y", "spotify:track:b"),
        ("Song C Artist Z", "spotify:track:c"),
    ]);
    service.failing = vec!["Song A Artist X".to_string()];
    service.fail_add_for = vec!["spotify:track:b".to_string()];
    let reporter = RecordingReporter::default();
    let entries = vec![
        TrackEntry::new("Song A", "Artist X"),
        TrackEntry::new("Song B", "Artist Y"),
        TrackEntry::new("Song C", "Artist Z"),
    ];

    let not_found =
        import::import_tracks(&service, &session(), "playlist-1", &entries, &reporter).await;

    assert_eq!(not_found, vec!["Song A Artist X", "Song B Artist Y"]);
    assert_eq!(service.added_uris(), vec!["spotify:track:c"]);
    assert_eq!(reporter.channel("error").len(), 2);
}

#[tokio::test]
async fn test_duplicates_are_added_again() {
    let service = FakeService::with_catalog(&[("Song A Artist X", "spotify:track:a")]);
    let reporter = RecordingReporter::default();
    let entries = vec![
        TrackEntry::new("Song A", "Artist X"),
        TrackEntry::new("Song A", "Artist X"),
    ];

    let not_found =
        import::import_tracks(&service, &session(), "playlist-1", &entries, &reporter).await;

    assert!(not_found.is_empty());
    assert_eq!(
        service.added_uris(),
        vec!["spotify:track:a", "spotify:track:a"]
    );
}

#[tokio::test]
async fn test_progress_reported_per_entry() {
    let service = FakeService::default();
    let reporter = RecordingReporter::default();
    let entries = vec![
        TrackEntry::new("Song A", "Artist X"),
        TrackEntry::new("Song B", "Artist Y"),
    ];

    import::import_tracks(&service, &session(), "playlist-1", &entries, &reporter).await;

    assert_eq!(
        reporter.progress(),
        vec!["start 2", "Song A Artist X", "Song B Artist Y", "finish"]
    );
}
