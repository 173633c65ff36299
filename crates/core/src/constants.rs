//! Relevance scoring weights for the query engine.

/// Relevance weight for a free-text match on the food name.
pub const SCORE_NAME: u32 = 10;
/// Relevance weight for a match on the short description.
pub const SCORE_SHORT_DESCRIPTION: u32 = 5;
/// Relevance weight per matching tag.
pub const SCORE_TAG: u32 = 3;
/// Relevance weight per benefit whose category matches.
pub const SCORE_BENEFIT_CATEGORY: u32 = 4;
/// Relevance weight per benefit whose description matches.
pub const SCORE_BENEFIT_DESCRIPTION: u32 = 2;
/// Relevance weight for a match against the joined vitamin key names.
pub const SCORE_VITAMIN_KEYS: u32 = 3;
/// Relevance weight for a match against the joined mineral key names.
pub const SCORE_MINERAL_KEYS: u32 = 3;
