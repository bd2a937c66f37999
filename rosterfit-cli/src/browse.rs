//! `players` and `requirements` subcommands: filtered roster listings.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rosterfit_core::{Player, PlayerFilter, Requirement, RequirementFilter, RosterStore};
use serde::{Deserialize, Serialize};

use crate::output::write_json;
use crate::roster::{load_roster, require_existing};
use crate::{
    ARG_LOCATION, ARG_POSITION, ARG_ROSTER, ARG_SKILL, ARG_SPORT, CliError, ENV_PLAYERS_ROSTER,
    ENV_REQUIREMENTS_ROSTER,
};

/// CLI arguments for the `players` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List players in roster order. Each filter keeps players \
                  whose field contains the given text, ignoring case; blank \
                  filters are ignored.",
    about = "List players matching browse filters"
)]
#[ortho_config(prefix = "ROSTERFIT")]
pub(crate) struct PlayersArgs {
    /// Path to the JSON roster snapshot.
    #[arg(long = ARG_ROSTER, value_name = "path")]
    #[serde(default)]
    pub(crate) roster: Option<Utf8PathBuf>,
    /// Text the player's sport must contain.
    #[arg(long = ARG_SPORT, value_name = "text")]
    #[serde(default)]
    pub(crate) sport: Option<String>,
    /// Text the player's position must contain.
    #[arg(long = ARG_POSITION, value_name = "text")]
    #[serde(default)]
    pub(crate) position: Option<String>,
    /// Text the player's skill list must contain.
    #[arg(long = ARG_SKILL, value_name = "text")]
    #[serde(default)]
    pub(crate) skill: Option<String>,
    /// Text the player's location must contain.
    #[arg(long = ARG_LOCATION, value_name = "text")]
    #[serde(default)]
    pub(crate) location: Option<String>,
}

/// CLI arguments for the `requirements` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List team requirements, newest first")]
#[ortho_config(prefix = "ROSTERFIT")]
pub(crate) struct RequirementsArgs {
    /// Path to the JSON roster snapshot.
    #[arg(long = ARG_ROSTER, value_name = "path")]
    #[serde(default)]
    pub(crate) roster: Option<Utf8PathBuf>,
    /// Text the requirement's sport must contain.
    #[arg(long = ARG_SPORT, value_name = "text")]
    #[serde(default)]
    pub(crate) sport: Option<String>,
    /// Text the requirement's position must contain.
    #[arg(long = ARG_POSITION, value_name = "text")]
    #[serde(default)]
    pub(crate) position: Option<String>,
    /// Text the requirement's location must contain.
    #[arg(long = ARG_LOCATION, value_name = "text")]
    #[serde(default)]
    pub(crate) location: Option<String>,
}

/// Resolved `players` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlayersConfig {
    pub(crate) roster: Utf8PathBuf,
    pub(crate) filter: PlayerFilter,
}

/// Resolved `requirements` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RequirementsConfig {
    pub(crate) roster: Utf8PathBuf,
    pub(crate) filter: RequirementFilter,
}

impl TryFrom<PlayersArgs> for PlayersConfig {
    type Error = CliError;

    fn try_from(args: PlayersArgs) -> Result<Self, Self::Error> {
        let roster = args.roster.ok_or(CliError::MissingArgument {
            field: ARG_ROSTER,
            env: ENV_PLAYERS_ROSTER,
        })?;
        Ok(Self {
            roster,
            filter: PlayerFilter {
                sport: args.sport,
                position: args.position,
                skill: args.skill,
                location: args.location,
            },
        })
    }
}

impl TryFrom<RequirementsArgs> for RequirementsConfig {
    type Error = CliError;

    fn try_from(args: RequirementsArgs) -> Result<Self, Self::Error> {
        let roster = args.roster.ok_or(CliError::MissingArgument {
            field: ARG_ROSTER,
            env: ENV_REQUIREMENTS_ROSTER,
        })?;
        Ok(Self {
            roster,
            filter: RequirementFilter {
                sport: args.sport,
                position: args.position,
                location: args.location,
            },
        })
    }
}

#[derive(Debug, Serialize)]
struct PlayersReport<'a> {
    players: Vec<&'a Player>,
}

#[derive(Debug, Serialize)]
struct RequirementsReport<'a> {
    requirements: Vec<&'a Requirement>,
}

pub(crate) fn run_players(args: PlayersArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = PlayersConfig::try_from(merged)?;
    require_existing(&config.roster, ARG_ROSTER)?;
    let roster = load_roster(&config.roster)?;
    let report = PlayersReport {
        players: config.filter.apply(roster.players()).collect(),
    };
    info!(
        "{} of {} players pass the filters",
        report.players.len(),
        roster.players().len()
    );
    write_json(writer, &report)
}

pub(crate) fn run_requirements(
    args: RequirementsArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = RequirementsConfig::try_from(merged)?;
    require_existing(&config.roster, ARG_ROSTER)?;
    let roster = load_roster(&config.roster)?;
    let report = RequirementsReport {
        requirements: config.filter.apply(roster.requirements()),
    };
    info!(
        "{} of {} requirements pass the filters",
        report.requirements.len(),
        roster.requirements().len()
    );
    write_json(writer, &report)
}
