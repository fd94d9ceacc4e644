//! Axum extractors over [`BindParams`].
//!
//! There is no resolver registration: naming one of these types in a
//! handler signature is the wiring. A failed bind rejects the request
//! before the handler runs, with a 400 JSON body naming the field.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::{header, request::Parts, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use validator::Validate;

use crate::error::BindError;
use crate::params::{BindParams, ParamMap};
use crate::valid::field_errors_to_map;

/// Binds `T` from the URI query string.
///
/// ```ignore
/// async fn search(Params(query): Params<SearchQuery>) -> ... { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Params<T>(pub T);

impl<S, T> FromRequestParts<S> for Params<T>
where
    T: BindParams,
    S: Send + Sync,
{
    type Rejection = ParamRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let map = ParamMap::parse(parts.uri.query().unwrap_or(""));
        T::bind(&map).map(Params).map_err(ParamRejection::from)
    }
}

/// Binds `T` from the query string merged with an
/// `application/x-www-form-urlencoded` body, the way servlet-style
/// parameter maps merge both sources. Query values come first, body
/// values append after them under the same key.
#[derive(Debug, Clone, Copy)]
pub struct FormParams<T>(pub T);

impl<S, T> FromRequest<S> for FormParams<T>
where
    T: BindParams,
    S: Send + Sync,
{
    type Rejection = ParamRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut map = ParamMap::parse(req.uri().query().unwrap_or(""));
        if is_urlencoded_form(req.headers()) {
            let body = Bytes::from_request(req, state)
                .await
                .map_err(|_| ParamRejection::UnreadableBody)?;
            map.extend_urlencoded(&body);
        }
        T::bind(&map).map(FormParams).map_err(ParamRejection::from)
    }
}

/// Binds `T` like [`Params`], then runs `validator::Validate`. A
/// validation failure rejects with the flattened `field -> message`
/// map in the response body.
#[derive(Debug, Clone, Copy)]
pub struct ValidParams<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidParams<T>
where
    T: BindParams + Validate,
    S: Send + Sync,
{
    type Rejection = ParamRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Params(value) = Params::<T>::from_request_parts(parts, state).await?;
        value
            .validate()
            .map_err(|errors| ParamRejection::Validation(field_errors_to_map(Some(&errors))))?;
        Ok(ValidParams(value))
    }
}

fn is_urlencoded_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| {
            ct.trim_start()
                .to_ascii_lowercase()
                .starts_with("application/x-www-form-urlencoded")
        })
}

/// Rejection produced by the parameter extractors.
///
/// Responds 400 with the `{"error", "code"}` JSON shape used across
/// the apikit services; validation rejections add a `"fields"` object.
#[derive(Debug, thiserror::Error)]
pub enum ParamRejection {
    #[error(transparent)]
    Bind(#[from] BindError),

    #[error("request body could not be read")]
    UnreadableBody,

    #[error("validation failed")]
    Validation(HashMap<String, String>),
}

impl IntoResponse for ParamRejection {
    fn into_response(self) -> Response {
        let code = match &self {
            ParamRejection::Bind(_) => "BIND_ERROR",
            ParamRejection::UnreadableBody => "BAD_REQUEST",
            ParamRejection::Validation(_) => "VALIDATION_ERROR",
        };
        let message = self.to_string();
        tracing::debug!(code, error = %message, "rejecting request parameters");

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let ParamRejection::Validation(fields) = &self {
            body["fields"] = json!(fields);
        }
        (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
    }
}
