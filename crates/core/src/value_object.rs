//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity**: they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (`Amount` of 100 equals any other `Amount` of 100)
/// - **Entity**: Has identity (two `Account`s with the same number are the same account,
///   whatever their balances say)
///
/// Value objects are **immutable**. To "modify" one, compute a new one
/// (`balance.checked_add(deposit)`).
///
/// ```
/// use bankacct_core::{Amount, ValueObject};
///
/// fn assert_value_object<T: ValueObject>() {}
/// assert_value_object::<Amount>();
///
/// assert_eq!(Amount::from(100), Amount::from(100));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
