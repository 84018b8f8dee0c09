mod compare;
mod core;
mod format;
mod ops;
mod parse;
#[cfg(feature = "serde")]
mod serde_;

pub use self::compare::magnitude_cmp;
pub use self::core::Vector3d;
pub use self::format::VectorFormat;
pub use self::parse::parse_vector;
