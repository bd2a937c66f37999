//! Data access traits for roster records.
//!
//! The `RosterStore` trait defines a read-only interface for retrieving the
//! players, requirements and interests that the scoring functions consume.
//! Each scoring call reads one consistent snapshot; nothing is written back.

use crate::{Interest, InterestCounts, Player, PlayerId, Requirement, RequirementId};

mod snapshot;

pub use snapshot::{RosterSnapshot, SnapshotError};

/// Read-only access to a consistent view of roster records.
///
/// Implementations must be `Send + Sync` so independent scoring calls can run
/// across threads against the same store.
///
/// # Examples
///
/// ```rust
/// use rosterfit_core::{Interest, Player, Requirement, RosterStore};
///
/// struct FixedStore {
///     players: Vec<Player>,
/// }
///
/// impl RosterStore for FixedStore {
///     fn players(&self) -> &[Player] {
///         &self.players
///     }
///
///     fn requirements(&self) -> &[Requirement] {
///         &[]
///     }
///
///     fn interests(&self) -> &[Interest] {
///         &[]
///     }
/// }
///
/// let store = FixedStore {
///     players: vec![Player::new(4, "Hockey", "Goalie")],
/// };
/// assert_eq!(store.player(4).map(|p| p.position.as_str()), Some("Goalie"));
/// assert!(store.player(5).is_none());
/// ```
pub trait RosterStore: Send + Sync {
    /// All player profiles in store iteration order.
    fn players(&self) -> &[Player];

    /// All posted requirements.
    fn requirements(&self) -> &[Requirement];

    /// All interest records.
    fn interests(&self) -> &[Interest];

    /// Look up a player by identifier.
    fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players().iter().find(|player| player.id == id)
    }

    /// Look up a requirement by identifier.
    fn requirement(&self, id: RequirementId) -> Option<&Requirement> {
        self.requirements()
            .iter()
            .find(|requirement| requirement.id == id)
    }

    /// Interest totals per player across every requirement.
    fn interest_counts(&self) -> InterestCounts {
        InterestCounts::from_interests(self.interests().iter().copied())
    }
}
