//! Dashboard aggregates built on top of the matcher and interest records.

use std::collections::BTreeSet;

use log::debug;
use rosterfit_core::{Interest, Player, PlayerId, Requirement, RequirementId, RosterStore};
use serde::Serialize;

use crate::match_players;

/// Interest tally for one requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementInterest {
    /// Requirement identifier.
    pub requirement_id: RequirementId,
    /// Position the requirement advertises.
    pub position: String,
    /// Distinct players interested in it.
    pub count: u32,
}

/// Number of interested players per sport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SportCount {
    /// Sport label as stored on the player.
    pub sport: String,
    /// Interested players in that sport.
    pub count: u32,
}

/// Aggregates over one team's requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSummary {
    /// Interests across every requirement.
    pub total_interests: u32,
    /// Interests per requirement, in requirement order.
    pub per_requirement: Vec<RequirementInterest>,
    /// Sports of interested players, most common first.
    pub sport_distribution: Vec<SportCount>,
}

/// Aggregates for a single player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    /// Player identifier.
    pub player_id: PlayerId,
    /// Requirements the player has expressed interest in.
    pub interest_count: u32,
    /// Requirements whose match results include the player.
    pub match_count: u32,
    /// Mean rating.
    pub avg_rating: f64,
    /// Ratings received.
    pub rating_count: u32,
    /// Lifetime profile views.
    pub total_views: u32,
}

/// Count the requirements whose match results include `player_id`.
///
/// The matcher runs once per requirement.
#[must_use]
pub fn match_count(player_id: PlayerId, requirements: &[Requirement], players: &[Player]) -> u32 {
    let count = requirements
        .iter()
        .filter(|requirement| {
            match_players(requirement, players)
                .iter()
                .any(|result| result.player.id == player_id)
        })
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Summarise interest in a team's requirements.
///
/// Duplicate `(player, requirement)` pairs count once. Interests from players
/// missing from `players` count towards the totals but not the sport
/// distribution. Sports with equal counts keep the order in which
/// `interests` first mentions them.
#[must_use]
pub fn team_summary(
    team_requirements: &[Requirement],
    interests: &[Interest],
    players: &[Player],
) -> TeamSummary {
    let mut seen: BTreeSet<Interest> = BTreeSet::new();
    let mut per_requirement: Vec<RequirementInterest> = team_requirements
        .iter()
        .map(|requirement| RequirementInterest {
            requirement_id: requirement.id,
            position: requirement.position.clone(),
            count: 0,
        })
        .collect();
    let mut sport_distribution: Vec<SportCount> = Vec::new();
    let mut total_interests = 0_u32;

    for interest in interests {
        if !seen.insert(*interest) {
            continue;
        }
        let Some(entry) = per_requirement
            .iter_mut()
            .find(|entry| entry.requirement_id == interest.requirement_id)
        else {
            continue;
        };
        entry.count = entry.count.saturating_add(1);
        total_interests = total_interests.saturating_add(1);
        let Some(player) = players.iter().find(|player| player.id == interest.player_id) else {
            continue;
        };
        match sport_distribution
            .iter_mut()
            .find(|known| known.sport == player.sport)
        {
            Some(tally) => tally.count = tally.count.saturating_add(1),
            None => sport_distribution.push(SportCount {
                sport: player.sport.clone(),
                count: 1,
            }),
        }
    }

    sport_distribution.sort_by(|left, right| right.count.cmp(&left.count));
    debug!(
        "team summary over {} requirements: {total_interests} interests",
        team_requirements.len()
    );
    TeamSummary {
        total_interests,
        per_requirement,
        sport_distribution,
    }
}

/// Summarise one player's standing against everything in `store`.
#[must_use]
pub fn player_summary<S>(player: &Player, store: &S) -> PlayerSummary
where
    S: RosterStore + ?Sized,
{
    PlayerSummary {
        player_id: player.id,
        interest_count: store.interest_counts().count(player.id),
        match_count: match_count(player.id, store.requirements(), store.players()),
        avg_rating: player.avg_rating(),
        rating_count: player.ratings.count(),
        total_views: player.profile_views,
    }
}
