//! Application models built on a [`Record`].
//!
//! A model owns a record and declares a stable [`Model::TYPE_NAME`]. It gets
//! restricted assignment ([`Model::assign`], [`Model::set_properties`]) and a
//! per-type shared instance ([`Model::instance`]) for free.

use std::fmt;
use std::sync::{Arc, RwLock};

use crate::keys::public_entries;
use crate::record::Record;
use crate::registry;
use crate::value::{Map, Value};

/// Field transform callback: `(incoming value, field name, all incoming
/// values) -> value to store`. Returning `None` leaves the field untouched.
pub type TransformFn = fn(Value, &str, &Map) -> Option<Value>;

/// A transform applied by [`Model::assign`] to one field.
#[derive(Clone, Copy)]
pub struct FieldTransform {
    pub field: &'static str,
    pub apply: TransformFn,
}

impl FieldTransform {
    pub const fn new(field: &'static str, apply: TransformFn) -> Self {
        Self { field, apply }
    }
}

impl fmt::Debug for FieldTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldTransform")
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

/// A type backed by a [`Record`].
///
/// Distinct model types are distinct singletons, even when one wraps the
/// other.
pub trait Model: Default + Send + Sync + 'static {
    /// Stable, unique name of this model type.
    const TYPE_NAME: &'static str;

    fn record(&self) -> &Record;

    fn record_mut(&mut self) -> &mut Record;

    /// Field transforms applied by [`Model::assign`].
    fn transforms() -> &'static [FieldTransform] {
        &[]
    }

    /// Assign the public keys of `values` that already exist on the record,
    /// running the declared field transform first.
    ///
    /// Keys the record does not hold are ignored. Values are stored
    /// directly, not merged. A non-object `values` is ignored.
    fn assign(&mut self, values: &Value) -> &mut Self {
        let Some(incoming) = values.entries() else {
            return self;
        };
        let transforms = Self::transforms();
        let record = self.record_mut();
        for (field, value) in public_entries(incoming) {
            if !record.contains_key(field) {
                continue;
            }
            let value = match transforms.iter().find(|t| t.field == field) {
                Some(transform) => (transform.apply)(value.clone(), field, incoming),
                None => Some(value.clone()),
            };
            if let Some(value) = value {
                record.insert(field, value);
            }
        }
        self
    }

    /// Like [`Model::assign`] but without field transforms.
    fn set_properties(&mut self, values: &Value) -> &mut Self {
        let Some(incoming) = values.entries() else {
            return self;
        };
        let record = self.record_mut();
        for (field, value) in public_entries(incoming) {
            if record.contains_key(field) {
                record.insert(field, value.clone());
            }
        }
        self
    }

    /// The shared instance of this type, created with `Default` on first use.
    fn instance() -> Arc<RwLock<Self>> {
        registry::global().instance::<Self>()
    }

    /// `[class TYPE_NAME]`.
    fn describe(&self) -> String {
        format!("[class {}]", Self::TYPE_NAME)
    }
}

impl Model for Record {
    const TYPE_NAME: &'static str = "Record";

    fn record(&self) -> &Record {
        self
    }

    fn record_mut(&mut self) -> &mut Record {
        self
    }
}
