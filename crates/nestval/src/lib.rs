//! ## Crate layout
//! - `base`: builtin sanitizers and the value types composed from them.
//! - `core`: trait seams and the shared validation error.
//!
//! The `prelude` module mirrors the surface used by model code holding these
//! value types.

pub use nestval_core as core;

pub mod base;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use core::InvalidValue;

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        base::types::Name,
        core::{
            InvalidValue,
            traits::{Inner as _, Sanitizer as _},
        },
    };
    pub use serde::{Deserialize, Serialize};
}
