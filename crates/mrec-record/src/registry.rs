//! Per-type shared instances.
//!
//! Instances are keyed by [`TypeId`], so every concrete model type gets its
//! own slot. The registry is filled lazily and never cleared.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, RwLock};

use tracing::debug;

use crate::model::Model;

type Instance = Arc<dyn Any + Send + Sync>;

static GLOBAL: LazyLock<SingletonRegistry> = LazyLock::new(SingletonRegistry::new);

/// The process-wide registry used by [`Model::instance`].
pub fn global() -> &'static SingletonRegistry {
    &GLOBAL
}

/// A map from model type to its shared instance.
#[derive(Debug, Default)]
pub struct SingletonRegistry {
    instances: Mutex<HashMap<TypeId, Instance>>,
}

impl SingletonRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared instance of `M`, constructing it on first request.
    ///
    /// The instance is built outside the registry lock, so a `Default` impl
    /// may itself request other singletons. If two threads race on the first
    /// request, the first one to insert wins and the other value is dropped.
    pub fn instance<M: Model>(&self) -> Arc<RwLock<M>> {
        let key = TypeId::of::<M>();
        if let Some(existing) = self.lookup(key) {
            return downcast(existing);
        }

        let created: Instance = Arc::new(RwLock::new(M::default()));
        let stored = {
            let mut instances = self.instances.lock().expect("singleton registry poisoned");
            Arc::clone(instances.entry(key).or_insert_with(|| {
                debug!(type_name = M::TYPE_NAME, "singleton created");
                created
            }))
        };
        downcast(stored)
    }

    /// Returns `true` if an instance of `M` has been created.
    pub fn contains<M: Model>(&self) -> bool {
        self.lookup(TypeId::of::<M>()).is_some()
    }

    /// Number of instantiated types.
    pub fn len(&self) -> usize {
        self.instances
            .lock()
            .expect("singleton registry poisoned")
            .len()
    }

    /// Returns `true` if no instance has been created yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, key: TypeId) -> Option<Instance> {
        self.instances
            .lock()
            .expect("singleton registry poisoned")
            .get(&key)
            .cloned()
    }
}

fn downcast<M: Model>(instance: Instance) -> Arc<RwLock<M>> {
    match instance.downcast::<RwLock<M>>() {
        Ok(typed) => typed,
        Err(_) => unreachable!("singleton slot for {} holds another type", M::TYPE_NAME),
    }
}
