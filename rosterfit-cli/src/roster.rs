//! Locating, decoding and validating the roster document.

use camino::Utf8Path;
use log::debug;
use rosterfit_core::RosterSnapshot;

use crate::CliError;

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match rosterfit_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
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

/// Load and validate a JSON-encoded [`RosterSnapshot`] from disk.
pub(crate) fn load_roster(path: &Utf8Path) -> Result<RosterSnapshot, CliError> {
    let contents =
        rosterfit_fs::read_utf8_to_string(path).map_err(|source| CliError::OpenRoster {
            path: path.to_path_buf(),
            source,
        })?;
    let roster: RosterSnapshot =
        serde_json::from_str(&contents).map_err(|source| CliError::ParseRoster {
            path: path.to_path_buf(),
            source,
        })?;
    roster.validate().map_err(|source| CliError::InvalidRoster {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "loaded roster {path}: {} players, {} requirements, {} interests",
        roster.players.len(),
        roster.requirements.len(),
        roster.interests.len()
    );
    Ok(roster)
}
