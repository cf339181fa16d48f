//! Error types for the palletizer.
//!
//! Validation failures are never raised to the caller of a solver: each
//! violated condition becomes one [`Error`] whose `Display` text is stored in
//! the result's `errors` list.

use thiserror::Error;

use crate::geometry::Axis;

/// Result type alias for fallible palletizer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while planning a pallet load.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A pallet dimension is not a positive finite number.
    #[error("Pallet {0} must be greater than 0.")]
    InvalidPallet(Axis),

    /// A box dimension is not a positive finite number.
    #[error("Box {0} must be greater than 0.")]
    InvalidBox(Axis),

    /// Maximum total height is not a positive finite number.
    #[error("Maximum total height must be greater than 0.")]
    InvalidMaxHeight,

    /// Overhang is negative or not finite.
    #[error("Overhang cannot be negative.")]
    NegativeOverhang,

    /// A multi-type request without any box type.
    #[error("At least one box type is required to build a load.")]
    NoBoxTypes,

    /// A box type dimension is not a positive finite number.
    /// `position` is 1-based within the input sequence.
    #[error("Type {position}: invalid {axis}.")]
    InvalidBoxType {
        /// 1-based position of the type in the input sequence.
        position: usize,
        /// Offending axis.
        axis: Axis,
    },

    /// A box type requests fewer than one unit.
    #[error("Type {0}: units must be an integer greater than or equal to 1.")]
    InvalidUnits(usize),

    /// The height budget leaves no room above the pallet.
    #[error("Max height must exceed pallet height to stack boxes.")]
    HeightBudget,

    /// Malformed request at an outer boundary (JSON, FFI).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Serialization error.
    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl Error {
    /// Returns true for errors that short-circuit a solve to the zeroed result.
    ///
    /// [`Error::HeightBudget`] is the only non-fatal validation message: the
    /// solver still reports orientation and per-layer capacity.
    pub fn is_structural(&self) -> bool {
        !matches!(self, Error::HeightBudget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::InvalidPallet(Axis::Length).to_string(),
            "Pallet length must be greater than 0."
        );
        assert_eq!(
            Error::InvalidBoxType {
                position: 2,
                axis: Axis::Height
            }
            .to_string(),
            "Type 2: invalid height."
        );
        assert_eq!(
            Error::InvalidUnits(3).to_string(),
            "Type 3: units must be an integer greater than or equal to 1."
        );
    }

    #[test]
    fn test_structural() {
        assert!(Error::NegativeOverhang.is_structural());
        assert!(Error::NoBoxTypes.is_structural());
        assert!(!Error::HeightBudget.is_structural());
    }
}
