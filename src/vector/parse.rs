//! Strict vector parsing with a two-tier failure policy.
//!
//! The text form is `left + x + sep + y + sep + z + right` with the
//! delimiters supplied by a [`VectorFormat`] and the fields written as
//! integer literals. Parsing distinguishes two kinds of bad input:
//!
//! - **Structural mismatch** — the string does not start and end with the
//!   configured delimiters, or is too short to hold any content. This is the
//!   absence of a vector, not an error: the parser returns `Ok(None)`.
//! - **Malformed inner content** — the outer shape matched but a field is
//!   not a valid integer, or there are fewer than three fields. This is an
//!   explicit error carrying the offending detail.
//!
//! The lenient constructor [`Vector3d::from_text`] maps `Ok(None)` to the
//! zero vector but lets inner-content errors through untouched, so a caller
//! passing `"{1,x,3}"` through the lenient path still sees the error.
//!
//! ```
//! use spatial_core::{parse_vector, Vector3d, VectorFormat};
//!
//! let fmt = VectorFormat::default();
//!
//! // Success
//! let v = parse_vector("{1,2,3}", &fmt).unwrap();
//! assert_eq!(v, Some(Vector3d::new(1.0, 2.0, 3.0)));
//!
//! // Structural mismatch: no vector, no error
//! assert_eq!(parse_vector("1,2,3", &fmt).unwrap(), None);
//!
//! // Malformed field: explicit error
//! assert!(parse_vector("{1,x,3}", &fmt).is_err());
//! ```

use super::core::Vector3d;
use super::format::VectorFormat;
use crate::{VectorError, VectorResult};

/// Minimum length of a structurally plausible vector string.
///
/// A short-circuit heuristic, not a field-count check: `"{1}"` is rejected
/// here, but `"{1,2}"` passes and fails later with a field-count error.
const MIN_PLAUSIBLE_LEN: usize = 4;

/// Parses a vector from its delimited text form.
///
/// Returns `Ok(Some(vector))` on success, `Ok(None)` when the outer shape
/// does not match (see module docs), and `Err` when the outer shape matches
/// but the inner content is malformed. Every separator-delimited field must
/// parse as an integer; when more than three fields are present the first
/// three are used.
///
/// # Errors
///
/// - [`VectorError::InvalidComponent`] if a field is not a valid integer
///   literal, carrying the offending substring.
/// - [`VectorError::ComponentCount`] if fewer than three fields are present.
pub fn parse_vector(s: &str, format: &VectorFormat) -> VectorResult<Option<Vector3d>> {
    if !s.starts_with(&format.left) || !s.ends_with(&format.right) {
        return Ok(None);
    }
    if s.len() < MIN_PLAUSIBLE_LEN {
        return Ok(None);
    }
    // Delimiters overlapping in the middle would make the slice below
    // backwards; treat that as structurally absent too.
    if s.len() < format.left.len() + format.right.len() {
        return Ok(None);
    }

    let inner = &s[format.left.len()..s.len() - format.right.len()];

    let mut components: Vec<i32> = Vec::new();
    for field in inner.split(format.separator.as_str()) {
        let value: i32 = field
            .parse()
            .map_err(|_| VectorError::invalid_component(field))?;
        components.push(value);
    }

    if components.len() < 3 {
        return Err(VectorError::component_count(components.len()));
    }

    Ok(Some(Vector3d::new(
        components[0] as f64,
        components[1] as f64,
        components[2] as f64,
    )))
}
