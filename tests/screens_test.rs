use chrono::NaiveDate;
use std::fs;

use tournament_hub::config::LiveSettings;
use tournament_hub::domain::{LiveEventCollection, Player};
use tournament_hub::formatting::normalize;
use tournament_hub::live::{LiveSessionBuilder, LiveSessionError, SessionState};
use tournament_hub::projection::{project, SortOrder};
use tournament_hub::screens::{LiveScreen, ProfileScreen, RankingsScreen};
use tournament_hub::store::FileSource;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
}

#[test]
fn test_rankings_projection_end_to_end() {
    let players: Vec<Player> = serde_json::from_str(
        r#"[{"id": 1, "name": "A", "points": 10}, {"id": 2, "name": "B", "points": 30}, {"id": 3, "name": "C", "points": 20}]"#,
    )
    .unwrap();

    let projected = project(&players, |p| p.points, SortOrder::Desc);

    assert_eq!(projected.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 3, 1]);
}

#[test]
fn test_date_normalizer_examples() {
    assert_eq!(normalize("6/15/2024").unwrap(), "June 15, 2024");
    assert_eq!(normalize("12/1/2023").unwrap(), "December 1, 2023");
    assert_eq!(normalize("01/05/2025").unwrap(), "January 5, 2025");
}

#[test]
fn test_live_session_commit_and_rejections() {
    let tournaments = vec!["Open".to_string()];
    let mut live = LiveEventCollection::new();
    let mut builder = LiveSessionBuilder::new(&LiveSettings::default());

    builder.start(&tournaments);
    builder.set_player1("John").unwrap();
    builder.set_player2("Mike").unwrap();
    builder.set_url("ftp://x.com").unwrap();
    assert_eq!(builder.submit(&mut live, today()), Err(LiveSessionError::InvalidUrl));
    assert!(live.is_empty());

    builder.set_player1("").unwrap();
    builder.set_url("https://x.com/live").unwrap();
    assert_eq!(builder.submit(&mut live, today()), Err(LiveSessionError::MissingPlayerNames));
    assert!(live.is_empty());

    builder.set_player1("John").unwrap();
    let event = builder.submit(&mut live, today()).unwrap();
    assert_eq!(live.len(), 1);
    assert_eq!(event.date.as_deref(), Some("1/5/2025"));
    assert_eq!(normalize(event.date.as_deref().unwrap()).unwrap(), "January 5, 2025");
    assert_eq!(builder.state(), &SessionState::Idle);

    builder.start(&tournaments);
    builder.set_player2("Someone").unwrap();
    builder.cancel();
    assert_eq!(live.len(), 1);
    assert_eq!(builder.state(), &SessionState::Idle);
}

#[tokio::test]
async fn test_screens_from_record_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("rankings.json"),
        r#"{"players": [
            {"id": 1, "name": "A", "points": 10},
            {"id": 2, "name": "B", "points": 30},
            {"id": 3, "name": "C", "points": 20}
        ]}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("live.json"),
        r#"{
            "currentLive": [],
            "pastEvents": [
                {"id": 1, "tournament": "Open", "match": "A vs B", "url": "https://x.com/1", "date": "2/1/2024"},
                {"id": 2, "tournament": "Open", "match": "C vs D", "url": "https://x.com/2", "date": "11/30/2024"}
            ],
            "tournaments": ["Open", "Cup"]
        }"#,
    )
    .unwrap();
    let source = FileSource::new(dir.path());

    let rankings = RankingsScreen::load(&source).await;
    let ranks: Vec<(usize, i64)> = rankings.view().iter().map(|r| (r.rank, r.player_id)).collect();
    assert_eq!(ranks, vec![(1, 2), (2, 3), (3, 1)]);

    let mut live = LiveScreen::load(&source, &LiveSettings::default()).await;
    assert_eq!(live.past().iter().map(|e| e.id).collect::<Vec<_>>(), vec![2, 1]);

    live.start_draft();
    let builder = live.builder_mut();
    builder.select_tournament("Cup").unwrap();
    builder.set_player1("John").unwrap();
    builder.set_player2("Mike").unwrap();
    builder.set_url("https://x.com/live").unwrap();
    let event = live.submit_draft(today()).unwrap();

    assert_eq!(event.id, 1);
    assert_eq!(event.tournament, "Cup");
    assert_eq!(live.view().current_live.len(), 1);
}

#[tokio::test]
async fn test_missing_records_leave_screen_empty() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileSource::new(dir.path());

    let profile = ProfileScreen::load(&source).await;
    let view = profile.view();

    assert!(view.tournament_points.is_empty());
    assert_eq!(view.total_points, 0);

    let live = LiveScreen::load(&source, &LiveSettings::default()).await;
    assert!(live.current().is_empty());
    assert!(live.past().is_empty());
}
