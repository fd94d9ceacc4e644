//! The parameter map and the declarative field-binding table.
//!
//! [`ParamMap`] is the raw request view (`key -> [values]`, repeated
//! keys preserved in order). [`Field`] is one row of a binding table:
//! source key, default, required flag, and a terminal decode method.
//! [`BindParams`] ties a target struct to its table.

mod coerce;
mod field;
mod map;

pub use coerce::FromParam;
pub use field::{BindParams, Field, DEFAULT_DATETIME_FORMAT};
pub use map::ParamMap;
