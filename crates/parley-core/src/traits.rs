use crate::value::Value;
use std::collections::{BTreeMap, HashMap};

///
/// FieldSource
///
/// Anything that exposes named field values.
/// Implemented by shapes and by plain persistence records, which is what
/// lets projection build a shape from either.
///

pub trait FieldSource {
    /// Value of `name`, or `None` when the source has no such field.
    fn get_field(&self, name: &str) -> Option<Value>;
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn get_field(&self, name: &str) -> Option<Value> {
        (**self).get_field(name)
    }
}

impl FieldSource for BTreeMap<String, Value> {
    fn get_field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl<S: std::hash::BuildHasher> FieldSource for HashMap<String, Value, S> {
    fn get_field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}
