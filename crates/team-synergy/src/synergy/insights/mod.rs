//! Rule-based translation of score breakdowns into fixed-vocabulary prose.

mod candidate;
mod gaps;
mod team;
pub mod views;

pub use candidate::{candidate_reasoning, candidate_traits};
pub use gaps::identify_gaps;
pub use team::generate_insights;
pub use views::{CandidateTraits, GapKind, GapSeverity, TeamGap, TeamInsights};
