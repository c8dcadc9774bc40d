use std::{cmp::Ordering, fmt};

/// The number type used in Vellum value graphs
///
/// The number is represented as either an `f64` or an `i64` depending on how it was produced.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug)]
pub enum Number {
    F64(f64),
    I64(i64),
}

impl Number {
    /// Returns true if the number is represented by an `f64`
    pub fn is_f64(self) -> bool {
        matches!(self, Self::F64(_))
    }

    /// Returns true if the number is represented by an `i64`
    pub fn is_i64(self) -> bool {
        matches!(self, Self::I64(_))
    }

    /// Returns true if the number is not NaN or infinity
    pub fn is_finite(self) -> bool {
        match self {
            Self::F64(n) => n.is_finite(),
            Self::I64(_) => true,
        }
    }

    /// Returns true if the number is NaN
    pub fn is_nan(self) -> bool {
        match self {
            Self::F64(n) => n.is_nan(),
            Self::I64(_) => false,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::F64(n) => {
                // Whole floats keep a fractional digit so that the integer/float distinction
                // survives a round trip through parsed text
                if n.is_finite() && n.fract() == 0.0 {
                    write!(f, "{n:.1}")
                } else {
                    write!(f, "{n}")
                }
            }
            Number::I64(n) => write!(f, "{n}"),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        use Number::*;

        match (self, other) {
            (F64(a), F64(b)) => a == b,
            (I64(a), I64(b)) => a == b,
            (F64(a), I64(b)) => *a == *b as f64,
            (I64(a), F64(b)) => *a as f64 == *b,
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use Number::*;

        match (self, other) {
            (F64(a), F64(b)) => a.partial_cmp(b),
            (I64(a), I64(b)) => a.partial_cmp(b),
            (F64(a), I64(b)) => a.partial_cmp(&(*b as f64)),
            (I64(a), F64(b)) => (*a as f64).partial_cmp(b),
        }
    }
}

impl From<Number> for f64 {
    fn from(value: Number) -> Self {
        match value {
            Number::F64(n) => n,
            Number::I64(n) => n as f64,
        }
    }
}

impl From<&Number> for f64 {
    fn from(value: &Number) -> Self {
        f64::from(*value)
    }
}

impl From<Number> for i64 {
    fn from(value: Number) -> Self {
        match value {
            Number::F64(n) => n as i64,
            Number::I64(n) => n,
        }
    }
}

impl From<&Number> for i64 {
    fn from(value: &Number) -> Self {
        i64::from(*value)
    }
}

macro_rules! number_from_float {
    ($type:ty) => {
        impl From<$type> for Number {
            fn from(n: $type) -> Number {
                Number::F64(n as f64)
            }
        }
    };
}

macro_rules! number_from_int {
    ($type:ty) => {
        impl From<$type> for Number {
            fn from(n: $type) -> Number {
                Number::I64(n as i64)
            }
        }
    };
}

number_from_float!(f32);
number_from_float!(f64);
number_from_int!(i8);
number_from_int!(i16);
number_from_int!(i32);
number_from_int!(i64);
number_from_int!(u8);
number_from_int!(u16);
number_from_int!(u32);
number_from_int!(usize);
