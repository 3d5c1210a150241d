//! Synchronous event emitter.
//!
//! [`Emitter`] delivers named events to listeners registered with
//! [`Emitter::on`] or [`Emitter::once`]. When a wildcard channel is
//! configured (`"*"` by default) every emitted event is also delivered to the
//! wildcard listeners, which receive the emitted event name first and then
//! the payload.

pub mod config;
pub mod emitter;

pub use config::EmitterConfig;
pub use emitter::{Emitter, Handler, ListenerId};
