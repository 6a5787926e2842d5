//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. A product code or a warranty policy is a value object, a
//! product or an issued warranty is an entity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by value. To "modify" one, build a
/// new one. Implementors must be `Clone + PartialEq + Debug`.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct ProductCode(String);
///
/// impl ValueObject for ProductCode {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
