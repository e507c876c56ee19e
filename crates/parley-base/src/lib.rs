//! Stock field validators for parley entities.

pub mod validator;

pub use parley_core as core;

///
/// Prelude
///

pub mod prelude {
    pub use crate::validator::{len, num, record, text};
    pub use parley_core::prelude::*;
}
