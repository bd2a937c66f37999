//! `match` and `recommend` subcommands: score players against one requirement.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rosterfit_core::{Requirement, RequirementId, RosterSnapshot, RosterStore};
use rosterfit_scorer::weights::recommend::DEFAULT_TOP_N;
use rosterfit_scorer::{MatchResult, Recommendation, match_players, recommend};
use serde::{Deserialize, Serialize};

use crate::output::write_json;
use crate::roster::{load_roster, require_existing};
use crate::{
    ARG_REQUIREMENT, ARG_ROSTER, ARG_TOP, CliError, ENV_MATCH_REQUIREMENT, ENV_MATCH_ROSTER,
    ENV_RECOMMEND_REQUIREMENT, ENV_RECOMMEND_ROSTER,
};

/// CLI arguments for the `match` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every player in the roster against one requirement \
                  using fixed points for sport, position, experience, \
                  skills and rating. Players scoring zero are omitted.",
    about = "Match players to a requirement"
)]
#[ortho_config(prefix = "ROSTERFIT")]
pub(crate) struct MatchArgs {
    /// Path to the JSON roster snapshot.
    #[arg(long = ARG_ROSTER, value_name = "path")]
    #[serde(default)]
    pub(crate) roster: Option<Utf8PathBuf>,
    /// Identifier of the requirement to match against.
    #[arg(long = ARG_REQUIREMENT, value_name = "id")]
    #[serde(default)]
    pub(crate) requirement: Option<RequirementId>,
}

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Blend skill overlap, sport, position, experience, rating, \
                  social proof and location into a recommendation score and \
                  print the strongest candidates with a breakdown.",
    about = "Recommend candidates for a requirement"
)]
#[ortho_config(prefix = "ROSTERFIT")]
pub(crate) struct RecommendArgs {
    /// Path to the JSON roster snapshot.
    #[arg(long = ARG_ROSTER, value_name = "path")]
    #[serde(default)]
    pub(crate) roster: Option<Utf8PathBuf>,
    /// Identifier of the requirement to recommend for.
    #[arg(long = ARG_REQUIREMENT, value_name = "id")]
    #[serde(default)]
    pub(crate) requirement: Option<RequirementId>,
    /// Maximum number of recommendations (default 5).
    #[arg(long = ARG_TOP, value_name = "count")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
}

/// Resolved `match` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MatchConfig {
    pub(crate) roster: Utf8PathBuf,
    pub(crate) requirement: RequirementId,
}

/// Resolved `recommend` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) roster: Utf8PathBuf,
    pub(crate) requirement: RequirementId,
    pub(crate) top: usize,
}

impl TryFrom<MatchArgs> for MatchConfig {
    type Error = CliError;

    fn try_from(args: MatchArgs) -> Result<Self, Self::Error> {
        let roster = args.roster.ok_or(CliError::MissingArgument {
            field: ARG_ROSTER,
            env: ENV_MATCH_ROSTER,
        })?;
        let requirement = args.requirement.ok_or(CliError::MissingArgument {
            field: ARG_REQUIREMENT,
            env: ENV_MATCH_REQUIREMENT,
        })?;
        Ok(Self {
            roster,
            requirement,
        })
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let roster = args.roster.ok_or(CliError::MissingArgument {
            field: ARG_ROSTER,
            env: ENV_RECOMMEND_ROSTER,
        })?;
        let requirement = args.requirement.ok_or(CliError::MissingArgument {
            field: ARG_REQUIREMENT,
            env: ENV_RECOMMEND_REQUIREMENT,
        })?;
        Ok(Self {
            roster,
            requirement,
            top: args.top.unwrap_or(DEFAULT_TOP_N),
        })
    }
}

#[derive(Debug, Serialize)]
struct MatchReport<'a> {
    requirement: &'a Requirement,
    matches: Vec<MatchResult<'a>>,
}

#[derive(Debug, Serialize)]
struct RecommendReport<'a> {
    requirement: &'a Requirement,
    recommendations: Vec<Recommendation<'a>>,
}

pub(crate) fn run_match(args: MatchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = MatchConfig::try_from(merged)?;
    require_existing(&config.roster, ARG_ROSTER)?;
    let roster = load_roster(&config.roster)?;
    let requirement = find_requirement(&roster, config.requirement)?;
    let report = MatchReport {
        requirement,
        matches: match_players(requirement, roster.players()),
    };
    info!(
        "requirement {} matched {} players",
        requirement.id,
        report.matches.len()
    );
    write_json(writer, &report)
}

pub(crate) fn run_recommend(args: RecommendArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_recommend_config(args)?;
    let roster = load_roster(&config.roster)?;
    let requirement = find_requirement(&roster, config.requirement)?;
    let interests = roster.interest_counts();
    let report = RecommendReport {
        requirement,
        recommendations: recommend(requirement, roster.players(), &interests, config.top),
    };
    info!(
        "requirement {} has {} recommendations",
        requirement.id,
        report.recommendations.len()
    );
    write_json(writer, &report)
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = RecommendConfig::try_from(merged)?;
    require_existing(&config.roster, ARG_ROSTER)?;
    Ok(config)
}

fn find_requirement(roster: &RosterSnapshot, id: RequirementId) -> Result<&Requirement, CliError> {
    roster
        .requirement(id)
        .ok_or(CliError::UnknownRequirement { id })
}

#[cfg(test)]
pub(crate) fn recommend_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
