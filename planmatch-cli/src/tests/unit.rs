//! Focused unit tests covering recommend configuration and input loading.

use super::helpers::{Workspace, write_utf8};
use super::*;
use crate::recommend::{
    RecommendConfig, config_from_layers_for_test, load_json, run_recommend_with,
};
use camino::Utf8PathBuf;
use planmatch_core::test_support::{MOCK_TEMPLATE_COUNT, beginner_strength_profile};
use planmatch_core::{PlanTemplate, RecommendError, UserProfile, UserProfileError};
use planmatch_ranker::{RankerConfig, RankerConfigError};
use planmatch_scorer::{EligibilityGate, ScorerConfig, ScorerConfigError};
use rstest::rstest;
use serde_json::Value;

fn args_for(workspace: &Workspace) -> RecommendArgs {
    RecommendArgs {
        catalog: Some(workspace.catalog_path()),
        profile: Some(workspace.profile_path()),
        ..RecommendArgs::default()
    }
}

#[rstest]
#[case::catalog(ARG_CATALOG, ENV_CATALOG)]
#[case::profile(ARG_PROFILE, ENV_PROFILE)]
fn converting_without_a_source_errors(
    #[case] expected_field: &'static str,
    #[case] expected_env: &'static str,
) {
    let mut args = RecommendArgs {
        catalog: Some(Utf8PathBuf::from("catalog.json")),
        profile: Some(Utf8PathBuf::from("profile.json")),
        ..RecommendArgs::default()
    };
    if expected_field == ARG_CATALOG {
        args.catalog = None;
    } else {
        args.profile = None;
    }

    let err = RecommendConfig::try_from(args).expect_err("missing source should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, expected_field);
            assert_eq!(env, expected_env);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn config_applies_defaults() {
    let workspace = Workspace::new();
    let config = RecommendConfig::try_from(args_for(&workspace)).expect("config should build");

    assert_eq!(config.catalog, workspace.catalog_path());
    assert_eq!(config.profile, workspace.profile_path());
    assert_eq!(config.limit, DEFAULT_LIMIT);
    assert_eq!(config.scorer, ScorerConfig::default());
    assert_eq!(config.ranker, RankerConfig::default());
    assert_eq!(config.output, None);
}

#[rstest]
fn soft_gate_takes_the_penalty_factor() {
    let workspace = Workspace::new();
    let args = RecommendArgs {
        gate: Some("Soft".into()),
        penalty_factor: Some(0.25),
        exclusion_floor: Some(40.0),
        limit: Some(3),
        ..args_for(&workspace)
    };

    let config = RecommendConfig::try_from(args).expect("config should build");
    assert_eq!(
        config.scorer.gate,
        EligibilityGate::Soft {
            penalty_factor: 0.25
        }
    );
    assert_eq!(config.ranker.exclusion_floor, Some(40.0));
    assert_eq!(config.limit, 3);
}

#[rstest]
fn penalty_factor_is_ignored_under_the_hard_gate() {
    let workspace = Workspace::new();
    let args = RecommendArgs {
        gate: Some("hard".into()),
        penalty_factor: Some(0.25),
        ..args_for(&workspace)
    };

    let config = RecommendConfig::try_from(args).expect("config should build");
    assert_eq!(config.scorer.gate, EligibilityGate::Hard);
}

#[rstest]
fn unknown_gate_is_rejected() {
    let workspace = Workspace::new();
    let args = RecommendArgs {
        gate: Some("lenient".into()),
        ..args_for(&workspace)
    };

    let err = RecommendConfig::try_from(args).expect_err("unknown gate");
    match err {
        CliError::ScorerConfig(ScorerConfigError::UnknownGate { value }) => {
            assert_eq!(value, "lenient");
        }
        other => panic!("expected UnknownGate, found {other:?}"),
    }
}

#[rstest]
#[case::above_one(1.5)]
#[case::negative(-0.1)]
#[case::not_a_number(f32::NAN)]
fn out_of_range_penalty_factor_is_rejected(#[case] penalty_factor: f32) {
    let workspace = Workspace::new();
    let args = RecommendArgs {
        gate: Some("soft".into()),
        penalty_factor: Some(penalty_factor),
        ..args_for(&workspace)
    };

    let err = RecommendConfig::try_from(args).expect_err("bad penalty factor");
    assert!(matches!(
        err,
        CliError::ScorerConfig(ScorerConfigError::InvalidPenaltyFactor)
    ));
}

#[rstest]
#[case::negative(-1.0)]
#[case::maximum_score(100.0)]
#[case::above_max(100.5)]
#[case::infinite(f32::INFINITY)]
#[case::not_a_number(f32::NAN)]
fn out_of_range_exclusion_floor_is_rejected(#[case] floor: f32) {
    let workspace = Workspace::new();
    let args = RecommendArgs {
        exclusion_floor: Some(floor),
        ..args_for(&workspace)
    };

    let err = RecommendConfig::try_from(args).expect_err("bad floor");
    assert!(matches!(
        err,
        CliError::RankerConfig(RankerConfigError::InvalidExclusionFloor { .. })
    ));
}

#[rstest]
#[case::catalog(ARG_CATALOG)]
#[case::profile(ARG_PROFILE)]
fn validate_sources_reports_missing_files(#[case] expected_field: &'static str) {
    let workspace = Workspace::with_defaults();
    let missing = workspace.root().join("absent.json");
    let mut config =
        RecommendConfig::try_from(args_for(&workspace)).expect("config should build");
    if expected_field == ARG_CATALOG {
        config.catalog = missing.clone();
    } else {
        config.profile = missing.clone();
    }

    let err = config.validate_sources().expect_err("missing file");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, expected_field);
            assert_eq!(path, missing);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let workspace = Workspace::with_defaults();
    let directory = workspace.root().join("catalogs");
    std::fs::create_dir(directory.as_std_path()).expect("create dir");
    let mut config =
        RecommendConfig::try_from(args_for(&workspace)).expect("config should build");
    config.catalog = directory;

    let err = config.validate_sources().expect_err("directory is not a file");
    assert!(matches!(
        err,
        CliError::MissingSourceFile {
            field: ARG_CATALOG,
            ..
        }
    ));
}

#[rstest]
fn load_json_decodes_catalog_and_profile() {
    let workspace = Workspace::with_defaults();

    let catalog: Vec<PlanTemplate> =
        load_json(&workspace.catalog_path(), ARG_CATALOG).expect("catalog should decode");
    let profile: UserProfile =
        load_json(&workspace.profile_path(), ARG_PROFILE).expect("profile should decode");

    assert_eq!(catalog.len(), MOCK_TEMPLATE_COUNT);
    assert_eq!(profile, beginner_strength_profile());
}

#[rstest]
fn load_json_reports_malformed_input() {
    let workspace = Workspace::new();
    write_utf8(&workspace.catalog_path(), b"[ not valid json");

    let err = load_json::<Vec<PlanTemplate>>(&workspace.catalog_path(), ARG_CATALOG)
        .expect_err("malformed catalog");
    match err {
        CliError::ParseInput { field, path, .. } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(path, workspace.catalog_path());
        }
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[rstest]
fn load_json_reports_out_of_domain_profiles() {
    let workspace = Workspace::new();
    write_utf8(
        &workspace.profile_path(),
        br#"{
            "fitness_level": "beginner",
            "training_experience_months": 2,
            "available_training_days": 0,
            "primary_goal": "strength"
        }"#,
    );

    let err = load_json::<UserProfile>(&workspace.profile_path(), ARG_PROFILE)
        .expect_err("zero training days");
    match err {
        CliError::ParseInput { field, source, .. } => {
            assert_eq!(field, ARG_PROFILE);
            let expected = UserProfileError::InvalidTrainingDays { days: 0 }.to_string();
            assert!(
                source.to_string().contains(&expected),
                "unexpected decoder message: {source}"
            );
        }
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[rstest]
fn load_json_reports_unreadable_paths() {
    let workspace = Workspace::new();
    let err = load_json::<UserProfile>(&workspace.profile_path(), ARG_PROFILE)
        .expect_err("missing profile");
    assert!(matches!(
        err,
        CliError::OpenInput {
            field: ARG_PROFILE,
            ..
        }
    ));
}

#[rstest]
fn load_json_rejects_non_utf8_input() {
    let workspace = Workspace::new();
    write_utf8(&workspace.catalog_path(), &[b'[', 0xff, 0xfe, b']']);

    let err = load_json::<Vec<PlanTemplate>>(&workspace.catalog_path(), ARG_CATALOG)
        .expect_err("invalid utf-8");
    match err {
        CliError::OpenInput { field, source, .. } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
        }
        other => panic!("expected OpenInput, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_map_invalid_values_to_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "limit": "many" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honour_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let workspace = Workspace::new();
    let env_catalog = workspace.root().join("env-catalog.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "catalog": workspace.root().join("file-catalog.json").as_str(),
            "profile": workspace.profile_path().as_str(),
            "gate": "soft",
            "limit": 3,
        }),
        None,
    );
    composer.push_environment(json!({
        "catalog": env_catalog.as_str(),
        "limit": 4,
    }));
    composer.push_cli(json!({ "limit": 2 }));

    let config = config_from_layers_for_test(composer.layers()).expect("layers should merge");
    assert_eq!(config.catalog, env_catalog);
    assert_eq!(config.profile, workspace.profile_path());
    assert_eq!(config.limit, 2);
    assert_eq!(config.scorer.gate, EligibilityGate::soft());
}

fn report_from(bytes: &[u8]) -> Vec<Value> {
    let text = std::str::from_utf8(bytes).expect("report utf-8");
    serde_json::from_str(text).expect("report should be a JSON array")
}

#[rstest]
fn run_recommend_prints_a_ranked_report() {
    let workspace = Workspace::with_defaults();
    let mut buffer = Vec::new();

    run_recommend_with(args_for(&workspace), &mut buffer).expect("recommend should succeed");

    let report = report_from(&buffer);
    let ids: Vec<&str> = report
        .iter()
        .filter_map(|entry| entry["template"]["id"].as_str())
        .collect();
    assert_eq!(
        ids,
        vec!["starting_strength", "stronglifts_5x5", "full_body_basics"]
    );
    let first = report.first().expect("non-empty report");
    assert_eq!(first["rank"], 1);
    assert_eq!(first["tier"], "optimal");
    assert_eq!(first["score"]["eligibility"]["status"], "eligible");
}

#[rstest]
fn run_recommend_writes_the_output_file() {
    let workspace = Workspace::with_defaults();
    let output = workspace.root().join("reports/top.json");
    let args = RecommendArgs {
        output: Some(output.clone()),
        limit: Some(1),
        ..args_for(&workspace)
    };
    let mut buffer = Vec::new();

    run_recommend_with(args, &mut buffer).expect("recommend should succeed");

    assert!(buffer.is_empty(), "stdout should stay empty");
    let written = std::fs::read(output.as_std_path()).expect("read report");
    let report = report_from(&written);
    assert_eq!(report.len(), 1);
    assert_eq!(report[0]["template"]["id"], "starting_strength");
}

#[rstest]
fn run_recommend_surfaces_recommender_errors() {
    let workspace = Workspace::with_defaults();
    let args = RecommendArgs {
        limit: Some(0),
        ..args_for(&workspace)
    };

    let err = run_recommend_with(args, &mut Vec::new()).expect_err("zero limit");
    assert!(matches!(
        err,
        CliError::Recommend(RecommendError::InvalidLimit { limit: 0 })
    ));
}
