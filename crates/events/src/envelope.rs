use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockroom_core::StoreId;

use crate::event::Event;

/// Envelope for an event, carrying the store and ordering metadata.
///
/// `sequence_number` is the store version *after* the wrapped mutation was
/// applied, so it increases by exactly one per envelope. A subscriber that sees
/// a gap knows it missed a notification and should re-read the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    store_id: StoreId,

    /// Monotonically increasing position in the store's change stream.
    sequence_number: u64,

    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(event_id: Uuid, store_id: StoreId, sequence_number: u64, payload: E) -> Self {
        Self {
            event_id,
            store_id,
            sequence_number,
            payload,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn store_id(&self) -> StoreId {
        self.store_id
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}

impl<E: Event> EventEnvelope<E> {
    /// Wrap `payload` with a fresh time-ordered event id.
    pub fn wrap(store_id: StoreId, sequence_number: u64, payload: E) -> Self {
        Self::new(Uuid::now_v7(), store_id, sequence_number, payload)
    }

    pub fn event_type(&self) -> &'static str {
        self.payload.event_type()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct Pinged {
        at: DateTime<Utc>,
    }

    impl Event for Pinged {
        fn event_type(&self) -> &'static str {
            "test.pinged"
        }

        fn version(&self) -> u32 {
            1
        }

        fn occurred_at(&self) -> DateTime<Utc> {
            self.at
        }
    }

    #[test]
    fn wrap_keeps_metadata_and_payload() {
        let store_id = StoreId::new();
        let payload = Pinged { at: Utc::now() };
        let env = EventEnvelope::wrap(store_id, 7, payload.clone());

        assert_eq!(env.store_id(), store_id);
        assert_eq!(env.sequence_number(), 7);
        assert_eq!(env.event_type(), "test.pinged");
        assert_eq!(env.into_payload(), payload);
    }

    #[test]
    fn envelope_serializes_as_json() {
        let env = EventEnvelope::wrap(StoreId::new(), 1, Pinged { at: Utc::now() });
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["sequence_number"], 1);
        let back: EventEnvelope<Pinged> = serde_json::from_value(json).unwrap();
        assert_eq!(back, env);
    }
}
