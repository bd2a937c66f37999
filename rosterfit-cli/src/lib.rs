//! Command-line interface for scoring a roster snapshot.
//!
//! Every subcommand reads a JSON roster (players, requirements and interests),
//! runs one scoring operation and prints the result as pretty JSON.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod analytics;
mod browse;
mod error;
mod matching;
mod output;
mod ranking;
mod roster;

pub use error::CliError;

use analytics::AnalyticsArgs;
use browse::{PlayersArgs, RequirementsArgs};
use matching::{MatchArgs, RecommendArgs};
use ranking::{CompareArgs, LeaderboardArgs};

pub(crate) const ARG_ROSTER: &str = "roster";
pub(crate) const ARG_REQUIREMENT: &str = "requirement";
pub(crate) const ARG_TOP: &str = "top";
pub(crate) const ARG_SPORT: &str = "sport";
pub(crate) const ARG_FIRST: &str = "first";
pub(crate) const ARG_SECOND: &str = "second";
pub(crate) const ARG_PLAYER: &str = "player";
pub(crate) const ARG_TEAM: &str = "team";
pub(crate) const ARG_POSITION: &str = "position";
pub(crate) const ARG_SKILL: &str = "skill";
pub(crate) const ARG_LOCATION: &str = "location";
pub(crate) const ENV_MATCH_ROSTER: &str = "ROSTERFIT_CMDS_MATCH_ROSTER";
pub(crate) const ENV_MATCH_REQUIREMENT: &str = "ROSTERFIT_CMDS_MATCH_REQUIREMENT";
pub(crate) const ENV_RECOMMEND_ROSTER: &str = "ROSTERFIT_CMDS_RECOMMEND_ROSTER";
pub(crate) const ENV_RECOMMEND_REQUIREMENT: &str = "ROSTERFIT_CMDS_RECOMMEND_REQUIREMENT";
pub(crate) const ENV_LEADERBOARD_ROSTER: &str = "ROSTERFIT_CMDS_LEADERBOARD_ROSTER";
pub(crate) const ENV_COMPARE_ROSTER: &str = "ROSTERFIT_CMDS_COMPARE_ROSTER";
pub(crate) const ENV_ANALYTICS_ROSTER: &str = "ROSTERFIT_CMDS_ANALYTICS_ROSTER";
pub(crate) const ENV_ANALYTICS_PLAYER: &str = "ROSTERFIT_CMDS_ANALYTICS_PLAYER";
pub(crate) const ENV_ANALYTICS_TEAM: &str = "ROSTERFIT_CMDS_ANALYTICS_TEAM";
pub(crate) const ENV_PLAYERS_ROSTER: &str = "ROSTERFIT_CMDS_PLAYERS_ROSTER";
pub(crate) const ENV_REQUIREMENTS_ROSTER: &str = "ROSTERFIT_CMDS_REQUIREMENTS_ROSTER";

/// Run the rosterfit CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// roster cannot be loaded, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Match(args) => matching::run_match(args, writer),
        Command::Recommend(args) => matching::run_recommend(args, writer),
        Command::Leaderboard(args) => ranking::run_leaderboard(args, writer),
        Command::Compare(args) => ranking::run_compare(args, writer),
        Command::Analytics(args) => analytics::run_analytics(args, writer),
        Command::Players(args) => browse::run_players(args, writer),
        Command::Requirements(args) => browse::run_requirements(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "rosterfit",
    about = "Match, rank and compare players from a roster snapshot",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score every player against one requirement with fixed points.
    Match(MatchArgs),
    /// Recommend the best candidates for one requirement.
    Recommend(RecommendArgs),
    /// Rank players on the composite leaderboard score.
    Leaderboard(LeaderboardArgs),
    /// Compare two players head to head.
    Compare(CompareArgs),
    /// Summarise a player's or a team's activity.
    Analytics(AnalyticsArgs),
    /// List players matching browse filters.
    Players(PlayersArgs),
    /// List requirements matching browse filters, newest first.
    Requirements(RequirementsArgs),
}

#[cfg(test)]
mod tests;
