use crate::geometry::GeometryKind;
use thiserror::Error;

/// Errors returned by clipping, correction, cut and predicate operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipError {
    /// A ring has fewer than 3 distinct points.
    #[error("ring has {count} distinct points, at least 3 are required")]
    TooFewPoints { count: usize },
    /// The operation is not implemented for the geometry kinds given.
    #[error("{op} is not supported between {first} and {second}")]
    Unsupported {
        op: &'static str,
        first: GeometryKind,
        second: GeometryKind,
    },
    /// A correction loop was stopped by its control hook.
    #[error("operation cancelled")]
    Cancelled,
}

impl ClipError {
    /// Returns true for errors caused by the input given, which retrying cannot fix.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ClipError::TooFewPoints { .. } | ClipError::Unsupported { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = ClipError::Unsupported {
            op: "covers",
            first: GeometryKind::Point,
            second: GeometryKind::Polygon,
        };
        assert_eq!(err.to_string(), "covers is not supported between Point and Polygon");
        assert!(err.is_invalid_input());
        assert!(!ClipError::Cancelled.is_invalid_input());
        assert_eq!(
            ClipError::TooFewPoints { count: 2 }.to_string(),
            "ring has 2 distinct points, at least 3 are required"
        );
    }
}
