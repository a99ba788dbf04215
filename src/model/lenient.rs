//! Lenient deserialization for numeric request fields.
//!
//! The browser frontend posts form input values verbatim, so numbers arrive either as
//! JSON numbers or as strings (`"12"`, `" 4 "`, `""`). Query strings only ever carry
//! strings. Both shapes funnel through [`deserialize_optional`].

use serde::de::{self, Deserializer, Visitor};
use std::{fmt, marker::PhantomData, str::FromStr};

/// Deserializes an optional number from a JSON number, a numeric string, or null.
///
/// Blank strings and null become `None`. Anything else that does not parse as `T`
/// is a deserialization error.
pub fn deserialize_optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    deserializer.deserialize_any(LenientVisitor(PhantomData))
}

struct LenientVisitor<T>(PhantomData<T>);

impl<T> LenientVisitor<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn parse<E: de::Error>(value: &str) -> Result<Option<T>, E> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        trimmed
            .parse::<T>()
            .map(Some)
            .map_err(|e| E::custom(format!("invalid number '{}': {}", trimmed, e)))
    }
}

impl<'de, T> Visitor<'de> for LenientVisitor<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Value = Option<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, a numeric string, or null")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Self::parse(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Self::parse(&value.to_string())
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Self::parse(&value.to_string())
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Self::parse(&value.to_string())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserialize_optional(deserializer)
    }
}
