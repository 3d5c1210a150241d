//! Models that announce their mutations.
//!
//! [`Observed`] wraps a [`Model`] together with an [`Emitter`]. Every
//! mutation made through the wrapper is followed by a lifecycle event:
//!
//! | event      | payload                          |
//! |------------|----------------------------------|
//! | `"merge"`  | the merged source                |
//! | `"assign"` | the assigned values              |
//! | `"set"`    | `{"path": ..., "value": ...}`    |
//! | `"remove"` | `{"path": ..., "removed": ...}`  |
//!
//! With the default configuration every event is also delivered on the
//! `"*"` channel.

use std::ops::Deref;

use mrec_events::{Emitter, EmitterConfig, ListenerId};

use crate::model::Model;
use crate::value::{Map, Value};

pub const MERGE: &str = "merge";
pub const ASSIGN: &str = "assign";
pub const SET: &str = "set";
pub const REMOVE: &str = "remove";

/// A model paired with an event emitter.
///
/// Reads go through `Deref`; mutations must use the wrapper's methods so
/// that listeners are notified.
#[derive(Debug)]
pub struct Observed<M: Model> {
    model: M,
    events: Emitter<Value>,
}

impl<M: Model> Observed<M> {
    pub fn new(model: M) -> Self {
        Self::with_config(model, EmitterConfig::default())
    }

    pub fn with_config(model: M, config: EmitterConfig) -> Self {
        Self {
            model,
            events: Emitter::with_config(config),
        }
    }

    pub fn events(&self) -> &Emitter<Value> {
        &self.events
    }

    pub fn into_inner(self) -> M {
        self.model
    }

    pub fn on<F>(&self, channel: &str, handler: F) -> ListenerId
    where
        F: Fn(&str, &Value) + Send + Sync + 'static,
    {
        self.events.on(channel, handler)
    }

    pub fn once<F>(&self, channel: &str, handler: F) -> ListenerId
    where
        F: Fn(&str, &Value) + Send + Sync + 'static,
    {
        self.events.once(channel, handler)
    }

    pub fn off(&self, id: ListenerId) -> bool {
        self.events.off(id)
    }

    /// Emit a custom event.
    pub fn emit(&self, name: &str, payload: &Value) -> usize {
        self.events.emit(name, payload)
    }

    pub fn merge(&mut self, source: &Value) -> &mut Self {
        self.model.record_mut().merge(source);
        self.events.emit(MERGE, source);
        self
    }

    pub fn assign(&mut self, values: &Value) -> &mut Self {
        self.model.assign(values);
        self.events.emit(ASSIGN, values);
        self
    }

    /// Restricted assignment without field transforms. Emits `"assign"`,
    /// the same event as [`Observed::assign`].
    pub fn set_properties(&mut self, values: &Value) -> &mut Self {
        self.model.set_properties(values);
        self.events.emit(ASSIGN, values);
        self
    }

    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        self.model.record_mut().set(path, value.clone());
        self.events.emit(SET, &payload(path, "value", value));
        self
    }

    /// Remove the value at `path`. The `"remove"` event only fires when
    /// something was removed.
    pub fn remove(&mut self, path: &str) -> bool {
        match self.model.record_mut().take(path) {
            Some(removed) => {
                self.events.emit(REMOVE, &payload(path, "removed", removed));
                true
            }
            None => false,
        }
    }
}

impl<M: Model> Deref for Observed<M> {
    type Target = M;

    fn deref(&self) -> &M {
        &self.model
    }
}

impl<M: Model> Default for Observed<M> {
    fn default() -> Self {
        Self::new(M::default())
    }
}

fn payload(path: &str, field: &str, value: Value) -> Value {
    let entries: Map = [
        ("path".to_string(), Value::from(path)),
        (field.to_string(), value),
    ]
    .into_iter()
    .collect();
    Value::Object(entries)
}
