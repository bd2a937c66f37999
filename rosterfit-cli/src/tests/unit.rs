//! Focused unit tests covering configuration, roster loading and output.

use super::helpers::{RosterFiles, roster_with_interests, write_utf8};
use super::*;
use crate::analytics::{AnalyticsArgs, AnalyticsConfig, AnalyticsTarget};
use crate::browse::PlayersConfig;
use crate::matching::{MatchConfig, RecommendConfig, recommend_config_from_layers_for_test};
use crate::roster::{load_roster, require_existing};
use camino::Utf8PathBuf;
use rosterfit_core::test_support::sample_snapshot;
use rosterfit_core::{Requirement, RosterSnapshot, SnapshotError};
use rstest::{fixture, rstest};
use serde_json::Value;

#[fixture]
fn files() -> RosterFiles {
    RosterFiles::new()
}

fn run_to_json(command: Command) -> Result<Value, CliError> {
    let mut buffer = Vec::new();
    run_command(command, &mut buffer)?;
    let stdout = String::from_utf8(buffer).expect("stdout utf-8");
    assert!(stdout.ends_with('\n'));
    Ok(serde_json::from_str(&stdout).expect("output should be JSON"))
}

fn ids(values: &Value, pointer: &str) -> Vec<u64> {
    values
        .pointer(pointer)
        .and_then(Value::as_array)
        .expect("array output")
        .iter()
        .filter_map(|entry| entry.pointer("/player/id").and_then(Value::as_u64))
        .collect()
}

#[rstest]
#[case::missing_roster(None, Some(100), ARG_ROSTER, ENV_MATCH_ROSTER)]
#[case::missing_requirement(Some("roster.json"), None, ARG_REQUIREMENT, ENV_MATCH_REQUIREMENT)]
fn converting_match_without_required_values_errors(
    #[case] roster: Option<&str>,
    #[case] requirement: Option<u64>,
    #[case] expected_field: &'static str,
    #[case] expected_env: &'static str,
) {
    let args = MatchArgs {
        roster: roster.map(Utf8PathBuf::from),
        requirement,
    };
    let err = MatchConfig::try_from(args).expect_err("missing value should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, expected_field);
            assert_eq!(env, expected_env);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn recommend_defaults_to_five_results() {
    let args = RecommendArgs {
        roster: Some(Utf8PathBuf::from("roster.json")),
        requirement: Some(100),
        top: None,
    };
    let config = RecommendConfig::try_from(args).expect("config should build");
    assert_eq!(config.top, 5);
}

#[rstest]
#[case::player(Some(3), None, Some(AnalyticsTarget::Player(3)))]
#[case::team(None, Some("Harbour FC"), Some(AnalyticsTarget::Team("Harbour FC".to_owned())))]
#[case::player_wins(Some(3), Some("Harbour FC"), Some(AnalyticsTarget::Player(3)))]
#[case::neither(None, None, None)]
fn analytics_resolves_its_target(
    #[case] player: Option<u64>,
    #[case] team: Option<&str>,
    #[case] expected: Option<AnalyticsTarget>,
) {
    let args = AnalyticsArgs {
        roster: Some(Utf8PathBuf::from("roster.json")),
        player,
        team: team.map(str::to_owned),
    };
    match (AnalyticsConfig::try_from(args), expected) {
        (Ok(config), Some(target)) => assert_eq!(config.target, target),
        (Err(err @ CliError::MissingTarget { .. }), None) => {
            let message = err.to_string();
            assert!(message.contains(ENV_ANALYTICS_PLAYER), "{message}");
            assert!(message.contains(ENV_ANALYTICS_TEAM), "{message}");
            assert!(message.contains("--team"), "{message}");
        }
        (other, _) => panic!("unexpected analytics resolution {other:?}"),
    }
}

#[rstest]
#[case::sport(Some("SOC"), None, None, None, vec![1, 2, 4])]
#[case::position_and_location(None, Some("keeper"), None, Some("leeds"), vec![4])]
#[case::skill(None, None, Some("communication"), None, vec![1, 2])]
#[case::blank(Some("  "), None, None, None, vec![1, 2, 3, 4])]
fn players_lists_filtered_roster(
    files: RosterFiles,
    #[case] sport: Option<&str>,
    #[case] position: Option<&str>,
    #[case] skill: Option<&str>,
    #[case] location: Option<&str>,
    #[case] expected: Vec<u64>,
) {
    let roster = files.write_roster(&roster_with_interests());
    let output = run_to_json(Command::Players(PlayersArgs {
        roster: Some(roster),
        sport: sport.map(str::to_owned),
        position: position.map(str::to_owned),
        skill: skill.map(str::to_owned),
        location: location.map(str::to_owned),
    }))
    .expect("players should succeed");
    let found: Vec<u64> = output
        .pointer("/players")
        .and_then(Value::as_array)
        .expect("players array")
        .iter()
        .filter_map(|player| player.pointer("/id").and_then(Value::as_u64))
        .collect();
    assert_eq!(found, expected);
}

#[rstest]
fn requirements_lists_newest_first(files: RosterFiles) {
    let mut snapshot = roster_with_interests();
    snapshot
        .requirements
        .push(Requirement::new(200, "Basketball", "Centre").with_location("Leeds"));
    snapshot
        .requirements
        .push(Requirement::new(300, "Soccer", "Striker").with_location("York"));
    let roster = files.write_roster(&snapshot);
    let output = run_to_json(Command::Requirements(RequirementsArgs {
        roster: Some(roster),
        sport: None,
        position: None,
        location: Some("LEEDS".to_owned()),
    }))
    .expect("requirements should succeed");
    let found: Vec<u64> = output
        .pointer("/requirements")
        .and_then(Value::as_array)
        .expect("requirements array")
        .iter()
        .filter_map(|requirement| requirement.pointer("/id").and_then(Value::as_u64))
        .collect();
    assert_eq!(found, vec![200, 100]);
}

#[rstest]
fn players_requires_a_roster() {
    let err = PlayersConfig::try_from(PlayersArgs::default()).expect_err("roster is required");
    assert!(matches!(
        err,
        CliError::MissingArgument {
            field: ARG_ROSTER,
            env: ENV_PLAYERS_ROSTER,
        }
    ));
}

#[rstest]
fn require_existing_reports_missing_file(files: RosterFiles) {
    let path = files.roster_path();
    let err = require_existing(&path, ARG_ROSTER).expect_err("missing roster");
    match err {
        CliError::MissingSourceFile { field, path: found } => {
            assert_eq!(field, ARG_ROSTER);
            assert_eq!(found, path);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn require_existing_reports_directories(files: RosterFiles) {
    let path = files.root().join("nested");
    std::fs::create_dir(path.as_std_path()).expect("create dir");
    let err = require_existing(&path, ARG_ROSTER).expect_err("directory is not a roster");
    assert!(matches!(err, CliError::SourcePathNotFile { .. }));
}

#[rstest]
fn load_roster_rejects_invalid_json(files: RosterFiles) {
    let path = files.roster_path();
    write_utf8(&path, b"{ not valid json");
    let err = load_roster(&path).expect_err("invalid json should error");
    match err {
        CliError::ParseRoster { path: found, .. } => assert_eq!(found, path),
        other => panic!("expected ParseRoster, found {other:?}"),
    }
}

#[rstest]
fn load_roster_rejects_duplicate_players(files: RosterFiles) {
    let path = files.roster_path();
    write_utf8(
        &path,
        br#"{"players": [{"id": 4}, {"id": 4}]}"#,
    );
    let err = load_roster(&path).expect_err("duplicate ids should error");
    match err {
        CliError::InvalidRoster { source, .. } => {
            assert_eq!(source, SnapshotError::DuplicatePlayer { id: 4 });
        }
        other => panic!("expected InvalidRoster, found {other:?}"),
    }
}

#[rstest]
fn load_roster_io_error_returns_open_error(files: RosterFiles) {
    let path = files.roster_path();
    let err = load_roster(&path).expect_err("missing roster should error");
    assert!(matches!(err, CliError::OpenRoster { .. }));
}

#[rstest]
fn match_prints_ranked_players(files: RosterFiles) {
    let roster = files.write_roster(&roster_with_interests());
    let output = run_to_json(Command::Match(MatchArgs {
        roster: Some(roster),
        requirement: Some(100),
    }))
    .expect("match should succeed");
    assert_eq!(ids(&output, "/matches"), vec![1, 4, 2, 3]);
    assert_eq!(output.pointer("/matches/0/score"), Some(&Value::from(9)));
    assert_eq!(
        output.pointer("/matches/0/matched_skills"),
        Some(&Value::from("communication,reflexes"))
    );
}

#[rstest]
fn recommend_truncates_and_reports_confidence(files: RosterFiles) {
    let roster = files.write_roster(&roster_with_interests());
    let output = run_to_json(Command::Recommend(RecommendArgs {
        roster: Some(roster),
        requirement: Some(100),
        top: Some(2),
    }))
    .expect("recommend should succeed");
    assert_eq!(ids(&output, "/recommendations"), vec![1, 4]);
    assert_eq!(
        output.pointer("/recommendations/1/breakdown/location"),
        Some(&Value::from(5))
    );
    assert!(output.pointer("/recommendations/0/raw_score").is_none());
}

#[rstest]
#[case::without_interest(sample_snapshot(), 90.5, 91)]
#[case::with_social_proof(roster_with_interests(), 92.0, 92)]
fn recommend_rounds_score_and_confidence(
    files: RosterFiles,
    #[case] snapshot: RosterSnapshot,
    #[case] ai_score: f64,
    #[case] confidence: u64,
) {
    let roster = files.write_roster(&snapshot);
    let output = run_to_json(Command::Recommend(RecommendArgs {
        roster: Some(roster),
        requirement: Some(100),
        top: Some(1),
    }))
    .expect("recommend should succeed");
    assert_eq!(ids(&output, "/recommendations"), vec![1]);
    let score = output
        .pointer("/recommendations/0/ai_score")
        .and_then(Value::as_f64)
        .expect("ai_score should be a number");
    assert!((score - ai_score).abs() < 1e-9, "ai_score was {score}");
    assert_eq!(
        output.pointer("/recommendations/0/confidence"),
        Some(&Value::from(confidence))
    );
}

#[rstest]
fn load_roster_refuses_an_average_without_ratings(files: RosterFiles) {
    let path = files.roster_path();
    write_utf8(
        &path,
        br#"{"players": [{"id": 1, "ratings": {"average": 50.0, "count": 0}}]}"#,
    );
    let err = load_roster(&path).expect_err("impossible rating should error");
    assert!(matches!(err, CliError::ParseRoster { .. }));
}

#[rstest]
fn unknown_requirement_is_reported(files: RosterFiles) {
    let roster = files.write_roster(&roster_with_interests());
    let err = run_to_json(Command::Match(MatchArgs {
        roster: Some(roster),
        requirement: Some(999),
    }))
    .expect_err("unknown requirement should fail");
    assert!(matches!(err, CliError::UnknownRequirement { id: 999 }));
}

#[rstest]
fn leaderboard_lists_sports_and_entries(files: RosterFiles) {
    let roster = files.write_roster(&roster_with_interests());
    let output = run_to_json(Command::Leaderboard(LeaderboardArgs {
        roster: Some(roster),
        sport: None,
    }))
    .expect("leaderboard should succeed");
    assert_eq!(ids(&output, "/entries"), vec![2, 1, 4, 3]);
    assert_eq!(
        output.pointer("/sports"),
        Some(&serde_json::json!(["Basketball", "Soccer", "soccer"]))
    );
}

#[rstest]
#[case::distinct(Some(1), Some(4), false)]
#[case::same(Some(2), Some(2), true)]
#[case::missing(Some(1), None, true)]
fn compare_prints_null_when_absent(
    files: RosterFiles,
    #[case] first: Option<u64>,
    #[case] second: Option<u64>,
    #[case] absent: bool,
) {
    let roster = files.write_roster(&roster_with_interests());
    let output = run_to_json(Command::Compare(CompareArgs {
        roster: Some(roster),
        first,
        second,
    }))
    .expect("compare should succeed");
    assert_eq!(
        output.pointer("/comparison").is_some_and(Value::is_null),
        absent
    );
}

#[rstest]
fn analytics_summarises_a_player(files: RosterFiles) {
    let roster = files.write_roster(&roster_with_interests());
    let output = run_to_json(Command::Analytics(AnalyticsArgs {
        roster: Some(roster),
        player: Some(1),
        team: None,
    }))
    .expect("analytics should succeed");
    assert_eq!(output.pointer("/interest_count"), Some(&Value::from(1)));
    assert_eq!(output.pointer("/match_count"), Some(&Value::from(1)));
    assert_eq!(output.pointer("/rating_count"), Some(&Value::from(2)));
}

#[rstest]
fn analytics_summarises_a_team(files: RosterFiles) {
    let roster = files.write_roster(&roster_with_interests());
    let output = run_to_json(Command::Analytics(AnalyticsArgs {
        roster: Some(roster),
        player: None,
        team: Some("Harbour FC".to_owned()),
    }))
    .expect("analytics should succeed");
    assert_eq!(output.pointer("/total_interests"), Some(&Value::from(2)));
    assert_eq!(
        output.pointer("/per_requirement/0/count"),
        Some(&Value::from(2))
    );
}

#[rstest]
fn analytics_rejects_unknown_players(files: RosterFiles) {
    let roster = files.write_roster(&roster_with_interests());
    let err = run_to_json(Command::Analytics(AnalyticsArgs {
        roster: Some(roster),
        player: Some(77),
        team: None,
    }))
    .expect_err("unknown player should fail");
    assert!(matches!(err, CliError::UnknownPlayer { id: 77 }));
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "top": "many" }));

    let err = recommend_config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence(files: RosterFiles) {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let env_roster = files.root().join("from-env.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "roster": files.root().join("from-file.json").as_str(),
            "requirement": 1,
            "top": 3,
        }),
        None,
    );
    composer.push_environment(json!({ "roster": env_roster.as_str() }));
    composer.push_cli(json!({ "requirement": 100 }));

    let config = recommend_config_from_layers_for_test(composer.layers())
        .expect("merged config should build");
    assert_eq!(config.roster, env_roster);
    assert_eq!(config.requirement, 100);
    assert_eq!(config.top, 3);
}
