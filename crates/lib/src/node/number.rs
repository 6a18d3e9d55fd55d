//! Numeric payload of [`Node::Number`](super::Node::Number).

use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// A number, keeping the numeric kind it was built from.
///
/// Equality and hashing compare mathematical values, not kinds:
/// `Int(3)`, `UInt(3)` and `Float(3.0)` are all equal and hash alike.
/// `-0.0` equals `0`, and every NaN equals every other NaN so that `Eq`
/// stays reflexive.
///
/// ```
/// # use jsonnode::Number;
/// assert_eq!(Number::Int(3), Number::Float(3.0));
/// assert_eq!(Number::UInt(3).to_string(), Number::Float(3.0).to_string());
/// assert_ne!(Number::Int(3), Number::Float(3.5));
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Signed integer
    Int(i64),
    /// Unsigned integer (kept separate so values above `i64::MAX` survive)
    UInt(u64),
    /// Floating point
    Float(f64),
}

/// Kind-independent form used for equality and hashing.
#[derive(PartialEq, Eq, Hash)]
enum Canonical {
    Integral(i128),
    Fractional(u64),
    NaN,
}

impl Number {
    fn canonical(&self) -> Canonical {
        match *self {
            Number::Int(n) => Canonical::Integral(n as i128),
            Number::UInt(n) => Canonical::Integral(n as i128),
            Number::Float(f) if f.is_nan() => Canonical::NaN,
            Number::Float(f) => {
                // Integral floats inside the u64/i64 range compare as integers
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f < u64::MAX as f64 {
                    Canonical::Integral(f as i128)
                } else {
                    Canonical::Fractional(f.to_bits())
                }
            }
        }
    }

    /// Returns the kind name: `"int"`, `"uint"` or `"float"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Number::Int(_) => "int",
            Number::UInt(_) => "uint",
            Number::Float(_) => "float",
        }
    }

    /// Returns true if the value has no fractional part.
    pub fn is_integral(&self) -> bool {
        matches!(self.canonical(), Canonical::Integral(_))
    }

    /// Returns the value as `i64` if it is integral and fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self.canonical() {
            Canonical::Integral(n) => i64::try_from(n).ok(),
            _ => None,
        }
    }

    /// Returns the value as `u64` if it is integral, non-negative and fits.
    pub fn as_u64(&self) -> Option<u64> {
        match self.canonical() {
            Canonical::Integral(n) => u64::try_from(n).ok(),
            _ => None,
        }
    }

    /// Returns the value as `f64`, rounding large integers.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(n) => n as f64,
            Number::UInt(n) => n as f64,
            Number::Float(f) => f,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::UInt(n) => write!(f, "{n}"),
            // f64 Display already drops the fraction of integral values
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

macro_rules! number_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(value: $t) -> Self {
                Number::Int(value as i64)
            }
        })*
    };
}

macro_rules! number_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(value: $t) -> Self {
                Number::UInt(value as u64)
            }
        })*
    };
}

number_from_signed!(i8, i16, i32, i64, isize);
number_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}
