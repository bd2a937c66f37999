//! Test helpers for writing roster fixtures to a scratch directory.

use camino::{Utf8Path, Utf8PathBuf};
use rosterfit_core::test_support::sample_snapshot;
use rosterfit_core::{Interest, RosterSnapshot};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Sample roster with players 1 and 2 interested in requirement 100.
pub(super) fn roster_with_interests() -> RosterSnapshot {
    let mut roster = sample_snapshot();
    roster.interests = vec![Interest::new(1, 100), Interest::new(2, 100)];
    roster
}

/// Scratch directory holding `roster.json`.
pub(super) struct RosterFiles {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl RosterFiles {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn roster_path(&self) -> Utf8PathBuf {
        self.root.join("roster.json")
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn write_roster(&self, roster: &RosterSnapshot) -> Utf8PathBuf {
        let path = self.roster_path();
        let payload = serde_json::to_string_pretty(roster).expect("serialise roster");
        write_utf8(&path, payload.as_bytes());
        path
    }
}
