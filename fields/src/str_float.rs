//! Floating-point fields.

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

/// Decimal exponents at or above this switch to exponent notation.
const EXP_LIMIT: i32 = 6;

/// Writes a finite value given in Rust's shortest `{:e}` form (`d.ddde-N`)
/// using the shortest `%g` layout: plain decimal when the exponent lies in
/// `-4..EXP_LIMIT`, otherwise `d.ddde±NN`.
fn write_shortest(f: &mut fmt::Formatter<'_>, sci: &str) -> fmt::Result {
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return f.write_str(sci);
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return f.write_str(sci);
    };

    if !(-4..EXP_LIMIT).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        return write!(f, "{}e{}{:02}", mantissa, sign, exp.unsigned_abs());
    }

    let (neg, mantissa) = match mantissa.strip_prefix('-') {
        Some(m) => (true, m),
        None => (false, mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    if neg {
        f.write_str("-")?;
    }

    // The decimal point sits after `point` digits.
    let point = exp + 1;
    if point <= 0 {
        f.write_str("0.")?;
        for _ in 0..-point {
            f.write_str("0")?;
        }
        f.write_str(&digits)
    } else {
        let point = point as usize;
        if point >= digits.len() {
            f.write_str(&digits)?;
            for _ in digits.len()..point {
                f.write_str("0")?;
            }
            Ok(())
        } else {
            write!(f, "{}.{}", &digits[..point], &digits[point..])
        }
    }
}

macro_rules! str_float {
    ($(#[$meta:meta])* $name:ident, $float:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
        pub struct $name(pub $float);

        impl $name {
            /// Returns the wrapped value.
            pub fn value(&self) -> $float {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.0.is_nan() {
                    f.write_str("NaN")
                } else if self.0.is_infinite() {
                    f.write_str(if self.0 > 0.0 { "+Inf" } else { "-Inf" })
                } else {
                    write_shortest(f, &format!("{:e}", self.0))
                }
            }
        }

        impl FromStr for $name {
            type Err = ParseFloatError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl From<$float> for $name {
            fn from(v: $float) -> Self {
                Self(v)
            }
        }

        impl From<$name> for $float {
            fn from(v: $name) -> Self {
                v.0
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct FloatVisitor;

                impl<'de> Visitor<'de> for FloatVisitor {
                    type Value = $name;

                    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        formatter.write_str("a number or a quoted decimal number")
                    }

                    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                        Ok($name(v as $float))
                    }

                    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                        Ok($name(v as $float))
                    }

                    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                        Ok($name(v as $float))
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                        v.parse()
                            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
                    }
                }

                deserializer.deserialize_any(FloatVisitor)
            }
        }
    };
}

str_float!(
    /// A 32-bit float that decodes from `1.5` or `"1.5"` and encodes as
    /// `"1.5"`.
    ///
    /// Large and tiny magnitudes encode in exponent form (`"1e+21"`,
    /// `"1e-05"`). Quoted input parses straight to 32 bits; a bare JSON
    /// number arrives as an `f64` from the deserializer and is then narrowed,
    /// which can differ from direct parsing in the last bit for inputs that
    /// lie almost exactly halfway between two `f32` values.
    StrFloat,
    f32
);

str_float!(
    /// A 64-bit float that decodes from `1.5` or `"1.5"` and encodes as
    /// `"1.5"`, or in exponent form outside `1e-4..1e6`.
    StrFloat64,
    f64
);
