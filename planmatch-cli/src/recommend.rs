//! Recommend command implementation for the planmatch CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use planmatch_core::{MatchTier, PlanRecommendation, PlanTemplate, Recommender, UserProfile};
use planmatch_fs::{create_utf8_file, file_is_file, read_utf8_to_string};
use planmatch_ranker::{RankerConfig, RankingRecommender};
use planmatch_scorer::{EligibilityGate, ScorerConfig, WeightedScorer};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATALOG, ARG_EXCLUSION_FLOOR, ARG_GATE, ARG_LIMIT, ARG_OUTPUT, ARG_PENALTY_FACTOR,
    ARG_PROFILE, CliError, DEFAULT_LIMIT, ENV_CATALOG, ENV_PROFILE,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Score every template in a JSON catalog against a JSON \
                 user profile and print the best matches as JSON. Options \
                 can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Rank a template catalog for a profile"
)]
#[ortho_config(prefix = "PLANMATCH")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON array of plan templates.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Path to a JSON user profile.
    #[arg(long = ARG_PROFILE, value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
    /// Maximum number of recommendations (default 5).
    #[arg(long = ARG_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Experience gate policy: `hard` drops plans above the user's
    /// experience, `soft` keeps them with a reduced score.
    #[arg(long = ARG_GATE, value_name = "hard|soft")]
    #[serde(default)]
    pub(crate) gate: Option<String>,
    /// Score multiplier applied by the soft gate (default 0.5).
    #[arg(long = ARG_PENALTY_FACTOR, value_name = "factor")]
    #[serde(default)]
    pub(crate) penalty_factor: Option<f32>,
    /// Drop templates scoring at or below this value.
    #[arg(long = ARG_EXCLUSION_FLOOR, value_name = "score")]
    #[serde(default)]
    pub(crate) exclusion_floor: Option<f32>,
    /// Write the JSON report here instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON template catalog.
    pub(crate) catalog: Utf8PathBuf,
    /// Path to the JSON user profile.
    pub(crate) profile: Utf8PathBuf,
    /// Maximum number of recommendations.
    pub(crate) limit: usize,
    /// Validated scorer configuration.
    pub(crate) scorer: ScorerConfig,
    /// Ranking configuration.
    pub(crate) ranker: RankerConfig,
    /// Report destination; stdout when `None`.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.catalog, ARG_CATALOG)?;
        Self::require_existing(&self.profile, ARG_PROFILE)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_CATALOG,
        })?;
        let profile = args.profile.ok_or(CliError::MissingArgument {
            field: ARG_PROFILE,
            env: ENV_PROFILE,
        })?;

        let policy = match args.gate.as_deref() {
            Some(name) => name.parse::<EligibilityGate>()?,
            None => EligibilityGate::default(),
        };
        let gate = match (policy, args.penalty_factor) {
            (EligibilityGate::Soft { .. }, Some(penalty_factor)) => {
                EligibilityGate::Soft { penalty_factor }
            }
            (chosen, _) => chosen,
        };
        let scorer = ScorerConfig {
            gate,
            ..ScorerConfig::default()
        }
        .validate()?;

        let ranker = RankerConfig {
            exclusion_floor: args.exclusion_floor,
        }
        .validate()?;

        Ok(Self {
            catalog,
            profile,
            limit: args.limit.unwrap_or(DEFAULT_LIMIT),
            scorer,
            ranker,
            output: args.output,
        })
    }
}

/// One line of the JSON report.
#[derive(Debug, Serialize)]
struct RankedPlan<'a> {
    rank: usize,
    tier: MatchTier,
    #[serde(flatten)]
    recommendation: &'a PlanRecommendation,
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_recommend_config(args)?;
    let recommendations = execute_recommend(&config)?;
    match &config.output {
        Some(path) => {
            let mut file = create_utf8_file(path).map_err(|source| CliError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            write_recommendations(&mut file, &recommendations)
        }
        None => write_recommendations(writer, &recommendations),
    }
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    log::debug!("resolved recommend configuration: {config:?}");
    Ok(config)
}

fn execute_recommend(config: &RecommendConfig) -> Result<Vec<PlanRecommendation>, CliError> {
    let catalog: Vec<PlanTemplate> = load_json(&config.catalog, ARG_CATALOG)?;
    let profile: UserProfile = load_json(&config.profile, ARG_PROFILE)?;
    let scorer = WeightedScorer::with_config(config.scorer)?;
    let recommender = RankingRecommender::with_config(scorer, config.ranker)?;
    let recommendations = recommender.recommend(&profile, &catalog, config.limit)?;
    log::debug!(
        "{} of {} templates recommended",
        recommendations.len(),
        catalog.len()
    );
    Ok(recommendations)
}

/// Loads a JSON-encoded input file from disk.
pub(super) fn load_json<T>(path: &Utf8Path, field: &'static str) -> Result<T, CliError>
where
    T: DeserializeOwned,
{
    let contents = read_utf8_to_string(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

fn write_recommendations(
    writer: &mut dyn Write,
    recommendations: &[PlanRecommendation],
) -> Result<(), CliError> {
    let report: Vec<RankedPlan<'_>> = recommendations
        .iter()
        .enumerate()
        .map(|(index, recommendation)| RankedPlan {
            rank: index.saturating_add(1),
            tier: recommendation.tier(),
            recommendation,
        })
        .collect();
    let payload = serde_json::to_string_pretty(&report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
