//! Typed request-parameter binding for axum handlers.
//!
//! Query and form parameters arrive as a flat `key -> [values]` map.
//! This crate turns that map into plain structs through a declarative
//! per-field table instead of derive magic: each field of the target
//! names its source key, default, required flag, and exactly one decode
//! rule, all checked at compile time.
//!
//! ```
//! use apikit_web::{BindParams, BindError, ParamMap};
//!
//! #[derive(Debug, Default)]
//! struct SearchQuery {
//!     q: String,
//!     page: u32,
//!     tags: Vec<String>,
//! }
//!
//! impl BindParams for SearchQuery {
//!     fn bind(p: &ParamMap) -> Result<Self, BindError> {
//!         Ok(Self {
//!             q: p.field("q").required().get()?,
//!             page: p.field("page").default_value("1").get()?,
//!             tags: p.field("tags").list()?,
//!         })
//!     }
//! }
//!
//! let p = ParamMap::parse("q=rust&tags=a&tags=b");
//! let query = SearchQuery::bind(&p).unwrap();
//! assert_eq!(query.page, 1);
//! assert_eq!(query.tags, ["a", "b"]);
//! ```
//!
//! In a handler, [`Params`] (query string), [`FormParams`] (query plus
//! urlencoded body), or [`ValidParams`] (bind then `validator::Validate`)
//! do the extraction; a failed bind rejects the request with a 400 JSON
//! body. [`valid::field_errors_to_map`] flattens validation outcomes
//! into a `field -> message` map for client-facing reporting.

pub mod error;
pub mod extract;
pub mod params;
pub mod valid;

pub use error::{BindError, CoerceError};
pub use extract::{FormParams, ParamRejection, Params, ValidParams};
pub use params::{BindParams, Field, FromParam, ParamMap, DEFAULT_DATETIME_FORMAT};
