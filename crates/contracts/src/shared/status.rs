use serde::{Deserialize, Serialize};

/// Visual category for a status badge.
///
/// Every per-entity status enum maps into this closed set; unrecognized
/// wire values land on `Neutral`, except payments, which render them as
/// `Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusTone {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}
