//! Core seams for nestval: the sanitizer and newtype-access traits plus the
//! shared validation error. Value types themselves live in the facade crate's
//! `base` module.

pub mod error;
pub mod traits;

pub use error::InvalidValue;

///
/// Prelude
///
/// Domain vocabulary only; no helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        error::InvalidValue,
        traits::{Inner, Sanitizer},
    };
}
