//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: two values with the same attributes are the
/// same value. In this workspace that covers things like a normalised lookup
/// key or a stock-status badge, as opposed to a `Product`, which is an entity.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct NameKey(String);
///
/// impl ValueObject for NameKey {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
