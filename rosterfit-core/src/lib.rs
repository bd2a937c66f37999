//! Core domain types for the rosterfit scoring engine.
//!
//! These value types describe players, team requirements and interest
//! records as plain in-memory data. Parsing is forgiving where the input is
//! free text (skill lists, locations) and strict where a range is implied
//! (star ratings), surfacing invalid input through `Result`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod filter;
pub mod interest;
pub mod player;
pub mod rating;
pub mod requirement;
pub mod rounding;
pub mod skills;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use filter::{PlayerFilter, RequirementFilter};
pub use interest::{Interest, InterestCounts};
pub use player::{Player, PlayerId};
pub use rating::{MAX_STARS, MIN_STARS, RatingError, RatingSummary};
pub use requirement::{Requirement, RequirementId};
pub use rounding::{round_to_tenth, round_to_whole, whole_points};
pub use skills::SkillSet;
pub use store::{RosterSnapshot, RosterStore, SnapshotError};
