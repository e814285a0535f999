//! `stockroom-core`: domain building blocks shared by the stockroom crates.
//!
//! Pure domain primitives only: identifiers, the domain error model and the
//! entity/value-object vocabulary. No IO, no locking, no logging.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ProductId, StoreId};
pub use value_object::ValueObject;
