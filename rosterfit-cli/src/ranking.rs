//! `leaderboard` and `compare` subcommands.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::{info, warn};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rosterfit_core::{PlayerId, RosterStore};
use rosterfit_scorer::{Comparison, LeaderboardEntry, available_sports, compare_players, leaderboard};
use serde::{Deserialize, Serialize};

use crate::output::write_json;
use crate::roster::{load_roster, require_existing};
use crate::{
    ARG_FIRST, ARG_ROSTER, ARG_SECOND, ARG_SPORT, CliError, ENV_COMPARE_ROSTER,
    ENV_LEADERBOARD_ROSTER,
};

/// CLI arguments for the `leaderboard` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Rank players by composite score")]
#[ortho_config(prefix = "ROSTERFIT")]
pub(crate) struct LeaderboardArgs {
    /// Path to the JSON roster snapshot.
    #[arg(long = ARG_ROSTER, value_name = "path")]
    #[serde(default)]
    pub(crate) roster: Option<Utf8PathBuf>,
    /// Keep only sports containing this text, ignoring case.
    #[arg(long = ARG_SPORT, value_name = "sport")]
    #[serde(default)]
    pub(crate) sport: Option<String>,
}

/// CLI arguments for the `compare` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Compare two players' skills and scores. When either \
                  identifier is missing or unknown, or both name the same \
                  player, the comparison is printed as null.",
    about = "Compare two players"
)]
#[ortho_config(prefix = "ROSTERFIT")]
pub(crate) struct CompareArgs {
    /// Path to the JSON roster snapshot.
    #[arg(long = ARG_ROSTER, value_name = "path")]
    #[serde(default)]
    pub(crate) roster: Option<Utf8PathBuf>,
    /// First player's identifier.
    #[arg(long = ARG_FIRST, value_name = "id")]
    #[serde(default)]
    pub(crate) first: Option<PlayerId>,
    /// Second player's identifier.
    #[arg(long = ARG_SECOND, value_name = "id")]
    #[serde(default)]
    pub(crate) second: Option<PlayerId>,
}

/// Resolved `leaderboard` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LeaderboardConfig {
    pub(crate) roster: Utf8PathBuf,
    pub(crate) sport: Option<String>,
}

/// Resolved `compare` configuration; absent identifiers are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompareConfig {
    pub(crate) roster: Utf8PathBuf,
    pub(crate) first: Option<PlayerId>,
    pub(crate) second: Option<PlayerId>,
}

impl TryFrom<LeaderboardArgs> for LeaderboardConfig {
    type Error = CliError;

    fn try_from(args: LeaderboardArgs) -> Result<Self, Self::Error> {
        let roster = args.roster.ok_or(CliError::MissingArgument {
            field: ARG_ROSTER,
            env: ENV_LEADERBOARD_ROSTER,
        })?;
        Ok(Self {
            roster,
            sport: args.sport,
        })
    }
}

impl TryFrom<CompareArgs> for CompareConfig {
    type Error = CliError;

    fn try_from(args: CompareArgs) -> Result<Self, Self::Error> {
        let roster = args.roster.ok_or(CliError::MissingArgument {
            field: ARG_ROSTER,
            env: ENV_COMPARE_ROSTER,
        })?;
        Ok(Self {
            roster,
            first: args.first,
            second: args.second,
        })
    }
}

#[derive(Debug, Serialize)]
struct LeaderboardReport<'a> {
    sports: Vec<String>,
    entries: Vec<LeaderboardEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct CompareReport<'a> {
    comparison: Option<Comparison<'a>>,
}

pub(crate) fn run_leaderboard(args: LeaderboardArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = LeaderboardConfig::try_from(merged)?;
    require_existing(&config.roster, ARG_ROSTER)?;
    let roster = load_roster(&config.roster)?;
    let report = LeaderboardReport {
        sports: available_sports(roster.players()),
        entries: leaderboard(roster.players(), config.sport.as_deref()),
    };
    info!("leaderboard lists {} players", report.entries.len());
    write_json(writer, &report)
}

pub(crate) fn run_compare(args: CompareArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = CompareConfig::try_from(merged)?;
    require_existing(&config.roster, ARG_ROSTER)?;
    let roster = load_roster(&config.roster)?;
    let comparison = compare_players(roster.players(), config.first, config.second);
    if comparison.is_none() {
        warn!(
            "select two distinct players to compare (got {:?} and {:?})",
            config.first, config.second
        );
    }
    write_json(writer, &CompareReport { comparison })
}
