//! Parley: a small messaging backend's entities, validation and store.
//!
//! `User` and `Message` are each declared once; their Create, Edit and Get
//! shapes are synthesized from that declaration by `parley-core`, checked
//! with the `parley-base` validators, and persisted by [`db::Db`].

pub mod db;
pub mod error;
pub mod schema;

pub use error::Error;

// re-exports
pub use parley_base as base;
pub use parley_config as config;
pub use parley_core as core;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        db::Db,
        error::{Error, ErrorKind},
        schema::{MESSAGE, USER},
    };
    pub use parley_config::{Config, StoreConfig};
    pub use parley_core::prelude::*;
}
