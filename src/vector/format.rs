//! Vector formatting with configurable delimiters.
//!
//! The canonical text form is `{x,y,z}`. The three delimiter strings (left
//! brace, right brace, field separator) are injected through
//! [`VectorFormat`]; the defaults match the canonical form.
//!
//! # Round-trip asymmetry
//!
//! Formatting writes the `f64` components directly, so the output carries
//! decimal points (`{1.0,2.0,3.0}`), while the parser accepts only integer
//! literals. Formatted output is therefore not generally re-parseable; this
//! asymmetry is part of the contract.
//!
//! ```
//! use spatial_core::{Vector3d, VectorFormat};
//!
//! let fmt = VectorFormat::default();
//! let v = Vector3d::new(1.0, 2.0, 3.0);
//! assert_eq!(fmt.format(&v), "{1.0,2.0,3.0}");
//!
//! // Display uses the default delimiters
//! assert_eq!(format!("{}", v), "{1.0,2.0,3.0}");
//!
//! // Custom delimiters
//! let angled = VectorFormat::new("<", ">", ";");
//! assert_eq!(angled.format(&v), "<1.0;2.0;3.0>");
//! ```

use super::core::Vector3d;
use super::parse::parse_vector;
use crate::VectorResult;
use core::fmt;

/// Delimiter configuration for the textual vector form.
///
/// Supplies the three strings consumed by [`format`](Self::format) and
/// [`parse`](Self::parse): left delimiter, right delimiter, and field
/// separator. The strings are treated as opaque; no escaping is performed.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorFormat {
    pub left: String,
    pub right: String,
    pub separator: String,
}

impl Default for VectorFormat {
    /// The canonical brace/comma form: `{x,y,z}`.
    fn default() -> Self {
        Self::new("{", "}", ",")
    }
}

impl VectorFormat {
    /// Creates a format from its three delimiter strings.
    pub fn new(left: &str, right: &str, separator: &str) -> Self {
        Self {
            left: left.to_string(),
            right: right.to_string(),
            separator: separator.to_string(),
        }
    }

    /// Formats a vector as `left + x + sep + y + sep + z + right`.
    ///
    /// Components are written in their full `f64` form.
    pub fn format(&self, v: &Vector3d) -> String {
        format!(
            "{}{:?}{}{:?}{}{:?}{}",
            self.left, v.x, self.separator, v.y, self.separator, v.z, self.right
        )
    }

    /// Parses a vector with this format's delimiters.
    ///
    /// The strict three-way entry point; see [`parse_vector`] for the full
    /// failure contract.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidComponent`](crate::VectorError::InvalidComponent)
    /// or [`VectorError::ComponentCount`](crate::VectorError::ComponentCount)
    /// for malformed inner content.
    #[inline]
    pub fn parse(&self, s: &str) -> VectorResult<Option<Vector3d>> {
        parse_vector(s, self)
    }
}

impl fmt::Display for Vector3d {
    /// Formats the vector in the canonical `{x,y,z}` form with default
    /// delimiters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:?},{:?},{:?}}}", self.x, self.y, self.z)
    }
}
