//! `analytics` subcommand: player or team dashboards.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rosterfit_core::{PlayerId, Requirement, RosterStore};
use rosterfit_scorer::{player_summary, team_summary};
use serde::{Deserialize, Serialize};

use crate::output::write_json;
use crate::roster::{load_roster, require_existing};
use crate::{
    ARG_PLAYER, ARG_ROSTER, ARG_TEAM, CliError, ENV_ANALYTICS_PLAYER, ENV_ANALYTICS_ROSTER,
    ENV_ANALYTICS_TEAM,
};

/// CLI arguments for the `analytics` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Summarise interest, matches and ratings for one player, \
                  or interest across a team's requirements when --team is \
                  given instead.",
    about = "Summarise player or team activity"
)]
#[ortho_config(prefix = "ROSTERFIT")]
pub(crate) struct AnalyticsArgs {
    /// Path to the JSON roster snapshot.
    #[arg(long = ARG_ROSTER, value_name = "path")]
    #[serde(default)]
    pub(crate) roster: Option<Utf8PathBuf>,
    /// Player to summarise.
    #[arg(long = ARG_PLAYER, value_name = "id", conflicts_with = ARG_TEAM)]
    #[serde(default)]
    pub(crate) player: Option<PlayerId>,
    /// Team name whose requirements are summarised.
    #[arg(long = ARG_TEAM, value_name = "name")]
    #[serde(default)]
    pub(crate) team: Option<String>,
}

/// Who the dashboard describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AnalyticsTarget {
    Player(PlayerId),
    Team(String),
}

/// Resolved `analytics` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnalyticsConfig {
    pub(crate) roster: Utf8PathBuf,
    pub(crate) target: AnalyticsTarget,
}

impl TryFrom<AnalyticsArgs> for AnalyticsConfig {
    type Error = CliError;

    fn try_from(args: AnalyticsArgs) -> Result<Self, Self::Error> {
        let roster = args.roster.ok_or(CliError::MissingArgument {
            field: ARG_ROSTER,
            env: ENV_ANALYTICS_ROSTER,
        })?;
        // A player takes precedence when layering supplies both.
        let target = match (args.player, args.team) {
            (Some(id), _) => AnalyticsTarget::Player(id),
            (None, Some(team)) => AnalyticsTarget::Team(team),
            (None, None) => {
                return Err(CliError::MissingTarget {
                    player_field: ARG_PLAYER,
                    player_env: ENV_ANALYTICS_PLAYER,
                    team_field: ARG_TEAM,
                    team_env: ENV_ANALYTICS_TEAM,
                });
            }
        };
        Ok(Self { roster, target })
    }
}

pub(crate) fn run_analytics(args: AnalyticsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = AnalyticsConfig::try_from(merged)?;
    require_existing(&config.roster, ARG_ROSTER)?;
    let roster = load_roster(&config.roster)?;
    match config.target {
        AnalyticsTarget::Player(id) => {
            let player = roster.player(id).ok_or(CliError::UnknownPlayer { id })?;
            write_json(writer, &player_summary(player, &roster))
        }
        AnalyticsTarget::Team(team) => {
            let requirements: Vec<Requirement> = roster
                .requirements()
                .iter()
                .filter(|requirement| requirement.team_name.trim() == team.trim())
                .cloned()
                .collect();
            write_json(
                writer,
                &team_summary(&requirements, roster.interests(), roster.players()),
            )
        }
    }
}
