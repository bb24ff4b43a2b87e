use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Stable identity of a list item, used to pick a row out of a page
pub trait Keyed {
    fn key(&self) -> i64;
}

/// Payload of a registration call that only echoes the new id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedId {
    pub id: i64,
}

/// Parses an enum from its wire name, ignoring case
pub(crate) fn parse_wire<T: Copy>(value: &str, variants: &[(&str, T)]) -> Option<T> {
    let value = value.trim();
    variants
        .iter()
        .find(|(wire, _)| wire.eq_ignore_ascii_case(value))
        .map(|(_, variant)| *variant)
}

/// Error for a value that names no variant of a wire enum
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Common surface of the enums declared with `wire_enum!`
pub trait WireEnum: Copy + FromStr {
    fn as_str(&self) -> &'static str;
    fn label(&self) -> &'static str;
}

/// Wire enum as read from a response.
///
/// Values this client does not know are kept verbatim instead of failing
/// the whole payload. Requests and filters use the strict enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Lenient<T> {
    Known(T),
    Unknown(String),
}

impl<T: WireEnum> Lenient<T> {
    pub fn known(&self) -> Option<T> {
        match self {
            Lenient::Known(value) => Some(*value),
            Lenient::Unknown(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Lenient::Known(value) => value.as_str(),
            Lenient::Unknown(raw) => raw,
        }
    }

    /// Korean label, or the raw wire value when unknown
    pub fn label(&self) -> &str {
        match self {
            Lenient::Known(value) => value.label(),
            Lenient::Unknown(raw) => raw,
        }
    }
}

impl<T> From<T> for Lenient<T> {
    fn from(value: T) -> Self {
        Lenient::Known(value)
    }
}

impl<T: WireEnum> fmt::Display for Lenient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: WireEnum> Serialize for Lenient<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, T: WireEnum> Deserialize<'de> for Lenient<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.parse::<T>() {
            Ok(value) => Lenient::Known(value),
            Err(_) => Lenient::Unknown(raw),
        })
    }
}

/// Declares a closed set of values exchanged with the API as upper-case strings.
///
/// Parsing ignores case. A `fallback` variant, when given, absorbs unknown
/// values during deserialization.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:literal $(, fallback = $fallback:ident)?) {
            $($variant:ident => $wire:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Name used on the wire
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Korean display label
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl $crate::models::WireEnum for $name {
            fn as_str(&self) -> &'static str {
                $name::as_str(self)
            }

            fn label(&self) -> &'static str {
                $name::label(self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::models::parse_wire(s, &[$(($wire, $name::$variant),)+]).ok_or_else(|| {
                    $crate::models::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    }
                })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                wire_enum!(@parse $name, raw $(, $fallback)?)
            }
        }
    };
    (@parse $name:ident, $raw:ident) => {
        $raw.parse::<$name>().map_err(serde::de::Error::custom)
    };
    (@parse $name:ident, $raw:ident, $fallback:ident) => {
        Ok($raw.parse::<$name>().unwrap_or($name::$fallback))
    };
}

pub mod auth;
pub mod consultation;
pub mod contract;
pub mod customer;
pub mod property;
pub mod sms;
