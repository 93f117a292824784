//! AI difficulty tiers.

use serde::{Deserialize, Serialize};

/// How hard the AI tries.
///
/// Chosen per player by the caller and passed into every move request.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty square.
    Easy,
    /// Win, block, center, corner, anything.
    #[serde(alias = "normal")]
    #[strum(to_string = "medium", serialize = "normal")]
    Medium,
    /// Full minimax search.
    #[default]
    Hard,
}
