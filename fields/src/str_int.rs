//! Integer fields.

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! str_int {
    ($(#[$meta:meta])* $name:ident, $int:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(pub $int);

        impl $name {
            /// Returns the wrapped value.
            pub fn value(&self) -> $int {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl From<$int> for $name {
            fn from(v: $int) -> Self {
                Self(v)
            }
        }

        impl From<$name> for $int {
            fn from(v: $name) -> Self {
                v.0
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i64(i64::from(self.0))
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct IntVisitor;

                impl<'de> Visitor<'de> for IntVisitor {
                    type Value = $name;

                    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        write!(
                            formatter,
                            "an integer or a quoted integer in range of {}",
                            stringify!($int)
                        )
                    }

                    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                        <$int>::try_from(v)
                            .map($name)
                            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
                    }

                    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                        <$int>::try_from(v)
                            .map($name)
                            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                        v.parse()
                            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
                    }
                }

                deserializer.deserialize_any(IntVisitor)
            }
        }
    };
}

str_int!(
    /// A 32-bit integer that decodes from `255` or `"255"` and encodes as
    /// `255`.
    StrInt,
    i32
);

str_int!(
    /// A 64-bit integer that decodes from `255` or `"255"` and encodes as
    /// `255`.
    StrInt64,
    i64
);
