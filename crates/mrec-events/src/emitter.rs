//! The listener registry and synchronous event delivery.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use crate::config::EmitterConfig;

/// A listener callback. Receives the event name and the payload.
pub type Handler<P> = Arc<dyn Fn(&str, &P) + Send + Sync>;

/// Handle returned by [`Emitter::on`] / [`Emitter::once`], used to remove the
/// listener again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

struct Listener<P> {
    id: ListenerId,
    channel: String,
    once: bool,
    handler: Handler<P>,
}

/// Synchronous publish/subscribe emitter.
///
/// Listeners run in registration order on the emitting thread. The listener
/// list is never locked while a handler runs, so handlers may register,
/// remove, or emit re-entrantly.
pub struct Emitter<P> {
    config: EmitterConfig,
    listeners: RwLock<Vec<Listener<P>>>,
    next_id: AtomicU64,
}

impl<P> Emitter<P> {
    /// Create an emitter with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Create an emitter with an explicit configuration.
    pub fn with_config(config: EmitterConfig) -> Self {
        Self {
            config,
            listeners: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// The configuration this emitter was built with.
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Register a listener for `channel`.
    pub fn on<F>(&self, channel: &str, handler: F) -> ListenerId
    where
        F: Fn(&str, &P) + Send + Sync + 'static,
    {
        self.register(channel, false, Arc::new(handler))
    }

    /// Register a listener for `channel` that is removed after its first
    /// invocation.
    pub fn once<F>(&self, channel: &str, handler: F) -> ListenerId
    where
        F: Fn(&str, &P) + Send + Sync + 'static,
    {
        self.register(channel, true, Arc::new(handler))
    }

    /// Remove a listener. Returns `true` if it was registered.
    pub fn off(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.write().expect("listener lock poisoned");
        let before = listeners.len();
        listeners.retain(|l| l.id != id);
        listeners.len() != before
    }

    /// Remove every listener on `channel`. Returns how many were removed.
    pub fn clear(&self, channel: &str) -> usize {
        let mut listeners = self.listeners.write().expect("listener lock poisoned");
        let before = listeners.len();
        listeners.retain(|l| l.channel != channel);
        before - listeners.len()
    }

    /// Number of listeners registered on `channel`.
    pub fn listener_count(&self, channel: &str) -> usize {
        self.listeners
            .read()
            .expect("listener lock poisoned")
            .iter()
            .filter(|l| l.channel == channel)
            .count()
    }

    /// Emit `name` with `payload`.
    ///
    /// Listeners on `name` run first, then wildcard listeners (when the
    /// wildcard channel is enabled and differs from `name`). Returns the
    /// number of handlers invoked.
    pub fn emit(&self, name: &str, payload: &P) -> usize {
        let handlers = {
            let mut listeners = self.listeners.write().expect("listener lock poisoned");
            let mut handlers = take_handlers(&mut listeners, name);
            if let Some(wildcard) = self.config.wildcard.as_deref() {
                if wildcard != name {
                    handlers.extend(take_handlers(&mut listeners, wildcard));
                }
            }
            handlers
        };

        debug!(event = name, listeners = handlers.len(), "event emitted");
        for handler in &handlers {
            handler(name, payload);
        }
        handlers.len()
    }

    fn register(&self, channel: &str, once: bool, handler: Handler<P>) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut listeners = self.listeners.write().expect("listener lock poisoned");
        listeners.push(Listener {
            id,
            channel: channel.to_string(),
            once,
            handler,
        });

        let count = listeners.iter().filter(|l| l.channel == channel).count();
        let max = self.config.max_listeners;
        if max > 0 && count > max {
            warn!(
                channel,
                count, max, "possible listener leak: too many listeners on channel"
            );
        }
        id
    }
}

/// Collect the handlers for `channel` in registration order, dropping the
/// once-listeners among them.
fn take_handlers<P>(listeners: &mut Vec<Listener<P>>, channel: &str) -> Vec<Handler<P>> {
    let handlers = listeners
        .iter()
        .filter(|l| l.channel == channel)
        .map(|l| Arc::clone(&l.handler))
        .collect();
    listeners.retain(|l| !(l.once && l.channel == channel));
    handlers
}

impl<P> Default for Emitter<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for Emitter<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self
            .listeners
            .read()
            .map(|l| l.len())
            .unwrap_or_default();
        f.debug_struct("Emitter")
            .field("config", &self.config)
            .field("listeners", &count)
            .finish()
    }
}
