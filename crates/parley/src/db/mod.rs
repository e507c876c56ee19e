//! In-memory store for users and messages.
//!
//! Rows are plain records holding the persisted columns only. Everything
//! that enters goes through a Create or Edit shape; everything that leaves
//! as a view goes through a Get shape.

mod message;
mod user;


use parley_config::StoreConfig;
use parley_core::{
    model::InteractionKind,
    shape::{EntitySchema, Shape},
    value::{Record, Value},
};
use std::{collections::BTreeMap, sync::Arc};
use thiserror::Error as ThisError;

///
/// StoreError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum StoreError {
    #[error("{entity}: {reason}")]
    Conflict { entity: &'static str, reason: String },

    #[error("{entity} '{key}' is not found")]
    NotFound { entity: &'static str, key: String },

    #[error("expected a {expected} shape, got {found}")]
    ShapeMismatch { expected: String, found: String },
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}

///
/// Db
///
/// Owned store; callers share it behind whatever lock their runtime uses.
/// Ids are assigned sequentially from 1 and never reused.
///

#[derive(Debug)]
pub struct Db {
    config: StoreConfig,
    users: BTreeMap<i64, Record>,
    messages: BTreeMap<i64, Record>,
    next_user_id: i64,
    next_message_id: i64,
}

impl Db {
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            config: config.clone(),
            users: BTreeMap::new(),
            messages: BTreeMap::new(),
            next_user_id: 1,
            next_message_id: 1,
        }
    }

    /// Turn on `[debug]` logging regardless of configuration.
    #[must_use]
    pub const fn debug(mut self) -> Self {
        self.config.debug = true;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn debug_log(&self, s: impl Into<String>) {
        if self.config.debug {
            println!("[debug] {}", s.into());
        }
    }
}

impl Default for Db {
    fn default() -> Self {
        Self::new(&StoreConfig::default())
    }
}

// Writes only accept shapes built from the matching model.
fn expect_shape(
    shape: &Shape,
    schema: &EntitySchema,
    kind: InteractionKind,
) -> Result<(), StoreError> {
    let expected = schema.shape(kind);
    if Arc::ptr_eq(shape.model(), expected) {
        Ok(())
    } else {
        Err(StoreError::ShapeMismatch {
            expected: expected.name().to_string(),
            found: shape.name().to_string(),
        })
    }
}

// Keep only the persisted columns of a view.
fn columns(view: &Shape, names: &[&str]) -> Record {
    names
        .iter()
        .map(|name| (*name, view.get(name).cloned().unwrap_or_default()))
        .collect()
}

fn int_column(row: &Record, name: &str) -> Option<i64> {
    row.get(name).and_then(Value::as_int)
}
