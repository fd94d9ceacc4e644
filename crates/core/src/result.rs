//! Shared response envelope for API handlers.
//!
//! Every handler returns an [`ApiResult`]: a success carrying a typed
//! payload, or a failure carrying a business code and message. The
//! envelope serializes to the flat wire shape
//! `{"success": bool, "code": int, "message": str, "data": ...}` with
//! `data: null` on failure, so clients parse one shape everywhere.
//!
//! Failures always travel inside the body; the HTTP status stays 200
//! when the envelope itself is the response (see the `axum` feature).

use std::borrow::Cow;
use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Business code reported on the default success path.
pub const CODE_SUCCESS: i32 = 0;
/// Business code reported when no more specific failure code applies.
pub const CODE_FAILURE: i32 = -1;
/// Message reported on the default success path.
pub const MESSAGE_SUCCESS: &str = "success";
/// Message reported when no more specific failure message applies.
pub const MESSAGE_FAILURE: &str = "unknown error";

/// Success-or-failure response envelope.
///
/// A failure never carries a payload, so "failed with data" is
/// unrepresentable. Messages are `Cow<'static, str>` and the canonical
/// constructors ([`ApiResult::ok`], [`ApiResult::failure`]) are `const`,
/// so the common no-payload cases allocate nothing.
///
/// # Example
///
/// ```
/// use apikit_core::ApiResult;
///
/// let r = ApiResult::success(21).map(|n| n * 2);
/// assert_eq!(r.data(), Some(&42));
/// assert_eq!(r.code(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResult<T> {
    /// The handler succeeded; `data` is the payload.
    Success {
        code: i32,
        message: Cow<'static, str>,
        data: T,
    },
    /// The handler failed; `code`/`message` describe why.
    Failure {
        code: i32,
        message: Cow<'static, str>,
    },
}

impl ApiResult<()> {
    /// The canonical no-payload success (`code` 0, `"success"`).
    pub const fn ok() -> Self {
        ApiResult::Success {
            code: CODE_SUCCESS,
            message: Cow::Borrowed(MESSAGE_SUCCESS),
            data: (),
        }
    }
}

impl<T> ApiResult<T> {
    /// Success wrapping `data`, with the default code and message.
    pub fn success(data: T) -> Self {
        ApiResult::Success {
            code: CODE_SUCCESS,
            message: Cow::Borrowed(MESSAGE_SUCCESS),
            data,
        }
    }

    /// The canonical generic failure (`code` -1, `"unknown error"`).
    pub const fn failure() -> Self {
        ApiResult::Failure {
            code: CODE_FAILURE,
            message: Cow::Borrowed(MESSAGE_FAILURE),
        }
    }

    /// Failure with a specific business code and the default message.
    pub fn failure_code(code: i32) -> Self {
        ApiResult::Failure {
            code,
            message: Cow::Borrowed(MESSAGE_FAILURE),
        }
    }

    /// Failure with the default code and a specific message.
    pub fn failure_message(message: impl Into<Cow<'static, str>>) -> Self {
        ApiResult::Failure {
            code: CODE_FAILURE,
            message: message.into(),
        }
    }

    /// Failure with both a specific code and message.
    pub fn failure_with(code: i32, message: impl Into<Cow<'static, str>>) -> Self {
        ApiResult::Failure {
            code,
            message: message.into(),
        }
    }

    /// Failure derived from an error's rendered message (`code` -1).
    pub fn from_error<E: fmt::Display>(err: &E) -> Self {
        ApiResult::Failure {
            code: CODE_FAILURE,
            message: Cow::Owned(err.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success { .. })
    }

    pub fn code(&self) -> i32 {
        match self {
            ApiResult::Success { code, .. } | ApiResult::Failure { code, .. } => *code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiResult::Success { message, .. } | ApiResult::Failure { message, .. } => message,
        }
    }

    /// The payload, if this is a success.
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResult::Success { data, .. } => Some(data),
            ApiResult::Failure { .. } => None,
        }
    }

    /// Consumes the envelope and returns the payload, if any.
    pub fn into_data(self) -> Option<T> {
        match self {
            ApiResult::Success { data, .. } => Some(data),
            ApiResult::Failure { .. } => None,
        }
    }

    /// Transforms the payload of a success, preserving code and message.
    ///
    /// On a failure `f` is never invoked and the code/message carry over
    /// unchanged.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResult<U> {
        match self {
            ApiResult::Success {
                code,
                message,
                data,
            } => ApiResult::Success {
                code,
                message,
                data: f(data),
            },
            ApiResult::Failure { code, message } => ApiResult::Failure { code, message },
        }
    }
}

impl<T: Serialize> Serialize for ApiResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ApiResult", 4)?;
        match self {
            ApiResult::Success {
                code,
                message,
                data,
            } => {
                s.serialize_field("success", &true)?;
                s.serialize_field("code", code)?;
                s.serialize_field("message", message)?;
                s.serialize_field("data", data)?;
            }
            ApiResult::Failure { code, message } => {
                s.serialize_field("success", &false)?;
                s.serialize_field("code", code)?;
                s.serialize_field("message", message)?;
                s.serialize_field("data", &None::<()>)?;
            }
        }
        s.end()
    }
}

/// Responds HTTP 200 with the JSON envelope; failure is signalled in the
/// body, not the status line.
#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for ApiResult<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_wraps_payload_with_default_code() {
        let r = ApiResult::success("payload");
        assert!(r.is_success());
        assert_eq!(r.code(), CODE_SUCCESS);
        assert_eq!(r.message(), MESSAGE_SUCCESS);
        assert_eq!(r.data(), Some(&"payload"));
    }

    #[test]
    fn ok_is_const_and_empty() {
        const OK: ApiResult<()> = ApiResult::ok();
        assert!(OK.is_success());
        assert_eq!(OK.data(), Some(&()));
    }

    #[test]
    fn failure_message_keeps_default_code() {
        let r = ApiResult::<()>::failure_message("boom");
        assert!(!r.is_success());
        assert_eq!(r.code(), CODE_FAILURE);
        assert_eq!(r.message(), "boom");
        assert_eq!(r.data(), None);
    }

    #[test]
    fn failure_code_keeps_default_message() {
        let r = ApiResult::<()>::failure_code(404);
        assert_eq!(r.code(), 404);
        assert_eq!(r.message(), MESSAGE_FAILURE);
    }

    #[test]
    fn from_error_uses_rendered_message() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let r = ApiResult::<u8>::from_error(&err);
        assert_eq!(r.code(), CODE_FAILURE);
        assert_eq!(r.message(), "disk on fire");
    }

    #[test]
    fn map_applies_transform_exactly_once_on_success() {
        let mut calls = 0;
        let r = ApiResult::failure_with(7, "seven").map(|n: u8| n + 1);
        assert_eq!(r, ApiResult::failure_with(7, "seven"));

        let r = ApiResult::success(20).map(|n| {
            calls += 1;
            n * 2
        });
        assert_eq!(calls, 1);
        assert_eq!(r.into_data(), Some(40));
    }

    #[test]
    fn map_on_failure_never_invokes_transform() {
        let r = ApiResult::<u8>::failure_with(3, "nope").map(|_| panic!("must not run"));
        assert!(!r.is_success());
        assert_eq!(r.code(), 3);
        assert_eq!(r.message(), "nope");
        assert_eq!(r.data(), None::<&()>);
    }

    #[test]
    fn serializes_flat_success_shape() {
        let json = serde_json::to_value(ApiResult::success(vec![1, 2])).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "code": 0,
                "message": "success",
                "data": [1, 2],
            })
        );
    }

    #[test]
    fn serializes_null_data_on_failure() {
        let json = serde_json::to_value(ApiResult::<String>::failure_with(42, "bad")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "code": 42,
                "message": "bad",
                "data": null,
            })
        );
    }
}
