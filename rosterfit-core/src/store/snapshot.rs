//! In-memory roster store loaded in one piece.

use std::collections::BTreeSet;

use log::warn;
use thiserror::Error;

use crate::{Interest, Player, PlayerId, Requirement, RequirementId, RosterStore};

/// Errors raised by [`RosterSnapshot::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    /// Two player records share an identifier.
    #[error("player id {id} appears more than once")]
    DuplicatePlayer {
        /// Repeated identifier.
        id: PlayerId,
    },
    /// Two requirement records share an identifier.
    #[error("requirement id {id} appears more than once")]
    DuplicateRequirement {
        /// Repeated identifier.
        id: RequirementId,
    },
}

/// Players, requirements and interests captured at one point in time.
///
/// # Examples
/// ```
/// use rosterfit_core::{Interest, Player, Requirement, RosterSnapshot, RosterStore};
///
/// let snapshot = RosterSnapshot {
///     players: vec![Player::new(1, "Soccer", "Striker")],
///     requirements: vec![Requirement::new(10, "Soccer", "Striker")],
///     interests: vec![Interest::new(1, 10)],
/// };
/// assert!(snapshot.validate().is_ok());
/// assert_eq!(snapshot.interest_counts().count(1), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RosterSnapshot {
    /// Player profiles in store order.
    pub players: Vec<Player>,
    /// Posted requirements.
    pub requirements: Vec<Requirement>,
    /// Interest expressions.
    pub interests: Vec<Interest>,
}

impl RosterSnapshot {
    /// Check identifier uniqueness.
    ///
    /// Interests that reference unknown players or requirements are kept but
    /// logged, as they still count towards social proof.
    ///
    /// # Errors
    /// Returns [`SnapshotError`] for the first duplicated identifier.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let mut player_ids = BTreeSet::new();
        for player in &self.players {
            if !player_ids.insert(player.id) {
                return Err(SnapshotError::DuplicatePlayer { id: player.id });
            }
        }
        let mut requirement_ids = BTreeSet::new();
        for requirement in &self.requirements {
            if !requirement_ids.insert(requirement.id) {
                return Err(SnapshotError::DuplicateRequirement { id: requirement.id });
            }
        }
        for interest in &self.interests {
            if !player_ids.contains(&interest.player_id) {
                warn!(
                    "interest references unknown player {}",
                    interest.player_id
                );
            }
            if !requirement_ids.contains(&interest.requirement_id) {
                warn!(
                    "interest references unknown requirement {}",
                    interest.requirement_id
                );
            }
        }
        Ok(())
    }
}

impl RosterStore for RosterSnapshot {
    fn players(&self) -> &[Player] {
        &self.players
    }

    fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    fn interests(&self) -> &[Interest] {
        &self.interests
    }
}
