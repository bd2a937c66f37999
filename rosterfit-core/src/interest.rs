//! Interest expressions used as a social-proof signal.

use std::collections::{BTreeMap, BTreeSet};

use crate::{PlayerId, RequirementId};

/// A player's expressed interest in a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interest {
    /// Interested player.
    pub player_id: PlayerId,
    /// Requirement the player is interested in.
    pub requirement_id: RequirementId,
}

impl Interest {
    /// Pair a player with a requirement.
    #[must_use]
    pub const fn new(player_id: PlayerId, requirement_id: RequirementId) -> Self {
        Self {
            player_id,
            requirement_id,
        }
    }
}

/// Number of interests per player across every requirement.
///
/// Duplicate `(player, requirement)` pairs are counted once.
///
/// # Examples
/// ```
/// use rosterfit_core::{Interest, InterestCounts};
///
/// let counts = InterestCounts::from_interests([
///     Interest::new(1, 10),
///     Interest::new(1, 11),
///     Interest::new(1, 11),
///     Interest::new(2, 10),
/// ]);
/// assert_eq!(counts.count(1), 2);
/// assert_eq!(counts.count(2), 1);
/// assert_eq!(counts.count(3), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InterestCounts {
    counts: BTreeMap<PlayerId, u32>,
}

impl InterestCounts {
    /// Tally interests per player.
    pub fn from_interests<I>(interests: I) -> Self
    where
        I: IntoIterator<Item = Interest>,
    {
        let unique: BTreeSet<Interest> = interests.into_iter().collect();
        let mut counts = BTreeMap::new();
        for interest in unique {
            let entry: &mut u32 = counts.entry(interest.player_id).or_default();
            *entry = entry.saturating_add(1);
        }
        Self { counts }
    }

    /// Interests recorded for `player_id`, `0` when none.
    #[must_use]
    pub fn count(&self, player_id: PlayerId) -> u32 {
        self.counts.get(&player_id).copied().unwrap_or(0)
    }

    /// Total number of distinct interests.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts
            .values()
            .fold(0_u32, |acc, count| acc.saturating_add(*count))
    }
}

impl FromIterator<Interest> for InterestCounts {
    fn from_iter<I: IntoIterator<Item = Interest>>(iter: I) -> Self {
        Self::from_interests(iter)
    }
}
