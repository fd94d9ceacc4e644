//! Single-value string coercion.

use rust_decimal::Decimal;

use crate::error::CoerceError;

/// Decodes one raw parameter value into a field type.
///
/// Implemented for the primitive types, `String`, and
/// [`rust_decimal::Decimal`]. Date and JSON fields are not `FromParam`
/// because their decode takes extra input (a format pattern, an element
/// type); those get explicit methods on [`Field`](super::Field).
pub trait FromParam: Sized {
    fn from_param(raw: &str) -> Result<Self, CoerceError>;
}

impl FromParam for String {
    fn from_param(raw: &str) -> Result<Self, CoerceError> {
        Ok(raw.to_owned())
    }
}

/// Exact-precision parse; `"1.10"` keeps its trailing zero and inputs
/// that would lose digits are rejected rather than rounded.
impl FromParam for Decimal {
    fn from_param(raw: &str) -> Result<Self, CoerceError> {
        Decimal::from_str_exact(raw).map_err(CoerceError::from)
    }
}

macro_rules! from_str_param {
    ($($ty:ty),* $(,)?) => {$(
        impl FromParam for $ty {
            fn from_param(raw: &str) -> Result<Self, CoerceError> {
                raw.parse().map_err(CoerceError::from)
            }
        }
    )*};
}

from_str_param!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
