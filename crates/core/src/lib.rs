//! Core handler helper types shared across apikit services.
//!
//! Currently this is the response envelope, [`ApiResult`]. Web-framework
//! glue (extractors, rejections) lives in `apikit-web`; enabling the
//! `axum` feature here adds only the `IntoResponse` impl for the
//! envelope itself.

pub mod result;

pub use result::ApiResult;
