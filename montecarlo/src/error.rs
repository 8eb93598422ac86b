use crate::face::Face;

/// Errors for die construction, weighting, play, and analysis.
///
/// Every variant is a caller-correctable usage error surfaced at the point of
/// the offending call; no operation mutates state before its validation
/// passes.
#[derive(Debug, thiserror::Error)]
pub enum DiceError {
    /// A face collection mixes numeric and text values, or contains an
    /// unsupported value (NaN, empty set).
    #[error("unsupported face values: {0}")]
    TypeKind(String),

    /// A face collection contains a repeated value.
    #[error("duplicate face: {0}")]
    DuplicateFace(Face),

    /// A weight change targeted a face the die does not have.
    #[error("unknown face: {0}")]
    UnknownFace(Face),

    /// A weight is negative, non-finite, or leaves no valid distribution.
    #[error("invalid weight: {0}")]
    InvalidWeight(String),

    /// A roll or play count was zero.
    #[error("count must be a positive integer")]
    InvalidCount,

    /// A results-form selector other than "wide" or "narrow".
    #[error("unknown results form '{0}' (expected 'wide' or 'narrow')")]
    InvalidForm(String),

    /// Results were requested from a game that has never been played.
    #[error("the game has not been played yet")]
    NotPlayed,

    /// A game was built from an empty die list.
    #[error("a game needs at least one die")]
    EmptyGame,

    /// Dice in a game must share one face set.
    #[error("die {0} does not share the first die's face set")]
    MismatchedDice(usize),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
