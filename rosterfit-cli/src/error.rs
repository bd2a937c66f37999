//! Error types emitted by the rosterfit CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use rosterfit_core::{PlayerId, RequirementId, SnapshotError};
use thiserror::Error;

/// Errors emitted by the rosterfit CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// Analytics was given neither a player nor a team to summarise.
    #[error(
        "missing analytics target (set --{player_field} or {player_env} for a player, \
         --{team_field} or {team_env} for a team)"
    )]
    MissingTarget {
        /// Flag selecting a player.
        player_field: &'static str,
        /// Environment variable selecting a player.
        player_env: &'static str,
        /// Flag selecting a team.
        team_field: &'static str,
        /// Environment variable selecting a team.
        team_env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Reading the roster file failed.
    #[error("failed to open roster at {path:?}: {source}")]
    OpenRoster {
        /// Roster path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Roster JSON could not be decoded.
    #[error("failed to parse roster JSON at {path:?}: {source}")]
    ParseRoster {
        /// Roster path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The roster decoded but failed validation.
    #[error("roster in {path:?} failed validation: {source}")]
    InvalidRoster {
        /// Roster path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: SnapshotError,
    },
    /// No requirement in the roster carries the requested identifier.
    #[error("requirement {id} is not in the roster")]
    UnknownRequirement {
        /// Requested identifier.
        id: RequirementId,
    },
    /// No player in the roster carries the requested identifier.
    #[error("player {id} is not in the roster")]
    UnknownPlayer {
        /// Requested identifier.
        id: PlayerId,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
