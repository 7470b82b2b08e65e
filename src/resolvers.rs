//! Resolver function contract, the (type, field) resolver table, and the
//! structural default resolver.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

use async_graphql::Value;

use crate::errors::AuthError;
use crate::types::{FieldInfo, RequestContext};

/// A field resolution function: (parent value, arguments, request context,
/// field metadata) → value or error.
///
/// Stateless and shareable; the host engine may call one entry concurrently
/// from many requests.
pub type FieldResolverFn = Arc<
    dyn Fn(&Value, &Value, &RequestContext, &FieldInfo) -> Result<Value, AuthError> + Send + Sync,
>;

/// Resolver table keyed by (type name, field name).
///
/// Cloning is cheap: entries are shared `Arc`s.
#[derive(Clone, Default)]
pub struct ResolverMap {
    entries: HashMap<(String, String), FieldResolverFn>,
}

impl ResolverMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, type_name: &str, field_name: &str, resolver: FieldResolverFn) {
        self.entries
            .insert((type_name.to_string(), field_name.to_string()), resolver);
    }

    pub fn get(&self, type_name: &str, field_name: &str) -> Option<&FieldResolverFn> {
        self.entries
            .get(&(type_name.to_string(), field_name.to_string()))
    }

    pub fn contains(&self, type_name: &str, field_name: &str) -> bool {
        self.get(type_name, field_name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(String, String), &FieldResolverFn)> {
        self.entries.iter()
    }

    /// Sorted, deduplicated type names present in the table.
    pub fn types(&self) -> BTreeSet<&str> {
        self.entries.keys().map(|(t, _)| t.as_str()).collect()
    }
}

impl fmt::Debug for ResolverMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverMap")
            .field("fields", &self.entries.len())
            .finish()
    }
}

/// Structural default resolution: the property of the parent object named by
/// the field, `null` when the parent is not an object or has no such property.
pub fn default_field_resolver(parent: &Value, info: &FieldInfo) -> Value {
    match parent {
        Value::Object(map) => map
            .get(info.field_name.as_str())
            .cloned()
            .unwrap_or(Value::Null),
        _ => Value::Null,
    }
}
