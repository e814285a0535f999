//! Change notification for the stockroom: events, envelopes and a pub/sub bus.
//!
//! The inventory store publishes one envelope per applied stock mutation;
//! consumer views subscribe instead of relying on any ambient re-render system.

pub mod bus;
pub mod envelope;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use envelope::EventEnvelope;
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
