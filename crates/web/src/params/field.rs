//! One row of a binding table: key, default, required flag, decode.

use std::borrow::Cow;

use chrono::{NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;

use super::{FromParam, ParamMap};
use crate::error::{BindError, CoerceError};

/// Pattern used by [`Field::datetime`] when a field declares none.
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A target shape that can be populated from a [`ParamMap`].
///
/// The impl is the binding table: one `field(..)` row per struct field,
/// ending in exactly one decode call. Rows are evaluated in the order
/// written, so the first offending field is the one reported.
pub trait BindParams: Sized {
    fn bind(params: &ParamMap) -> Result<Self, BindError>;
}

/// Accessor for a single field's values, created by
/// [`ParamMap::field`].
///
/// Modifiers ([`key`](Self::key), [`default_value`](Self::default_value),
/// [`required`](Self::required)) select and guard the raw values;
/// terminal methods ([`get`](Self::get), [`opt`](Self::opt),
/// [`list`](Self::list), the date and JSON decoders) coerce them.
///
/// Resolution order, for every terminal:
/// 1. values supplied under the lookup key win;
/// 2. otherwise the default, split on `"&"` into a value sequence;
/// 3. otherwise a required field fails with
///    [`BindError::MissingRequired`], an optional one decodes as absent.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    map: &'a ParamMap,
    name: &'static str,
    key: &'static str,
    default: Option<&'static str>,
    required: bool,
}

impl<'a> Field<'a> {
    pub(super) fn new(map: &'a ParamMap, name: &'static str) -> Self {
        Self {
            map,
            name,
            key: name,
            default: None,
            required: false,
        }
    }

    /// Look the field up under `key` instead of its own name. Errors
    /// still name the field, not the key.
    pub fn key(mut self, key: &'static str) -> Self {
        self.key = key;
        self
    }

    /// Fallback applied when the key is absent. `"&"` separates
    /// multiple values, so `"1&2"` defaults a list field to two
    /// elements.
    pub fn default_value(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    /// Fail the whole bind if the key is absent and no default applies.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Scalar decode, absent fields falling back to the type's zero
    /// value.
    pub fn get<T: FromParam + Default>(&self) -> Result<T, BindError> {
        Ok(self.opt()?.unwrap_or_default())
    }

    /// Scalar decode keeping absence visible as `None`.
    pub fn opt<T: FromParam>(&self) -> Result<Option<T>, BindError> {
        self.single(|raw| T::from_param(raw).map_err(|source| self.coerce_err(raw, source)))
    }

    /// Element-wise decode of the whole value sequence; absent fields
    /// become an empty `Vec`.
    pub fn list<T: FromParam>(&self) -> Result<Vec<T>, BindError> {
        let Some(values) = self.resolve()? else {
            return Ok(Vec::new());
        };
        values
            .iter()
            .map(|raw| T::from_param(raw).map_err(|source| self.coerce_err(raw, source)))
            .collect()
    }

    /// `NaiveDateTime` via [`DEFAULT_DATETIME_FORMAT`].
    pub fn datetime(&self) -> Result<Option<NaiveDateTime>, BindError> {
        self.datetime_fmt(DEFAULT_DATETIME_FORMAT)
    }

    /// `NaiveDateTime` via an explicit chrono format pattern.
    pub fn datetime_fmt(&self, format: &str) -> Result<Option<NaiveDateTime>, BindError> {
        self.single(|raw| {
            NaiveDateTime::parse_from_str(raw, format)
                .map_err(|source| self.coerce_err(raw, source.into()))
        })
    }

    /// `NaiveDate` via an explicit chrono format pattern.
    pub fn date_fmt(&self, format: &str) -> Result<Option<NaiveDate>, BindError> {
        self.single(|raw| {
            NaiveDate::parse_from_str(raw, format)
                .map_err(|source| self.coerce_err(raw, source.into()))
        })
    }

    /// Decode a JSON-encoded object value into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<Option<T>, BindError> {
        self.single(|raw| {
            serde_json::from_str(raw).map_err(|source| BindError::Json {
                field: self.name,
                source,
            })
        })
    }

    /// Decode a JSON-encoded array value into `Vec<T>`; absent fields
    /// become an empty `Vec`.
    pub fn json_list<T: DeserializeOwned>(&self) -> Result<Vec<T>, BindError> {
        Ok(self.json()?.unwrap_or_default())
    }

    /// Raw value sequence after default resolution and the required
    /// check. `None` means the field stays at its zero value.
    fn resolve(&self) -> Result<Option<Cow<'a, [String]>>, BindError> {
        if let Some(values) = self.map.values(self.key) {
            return Ok(Some(Cow::Borrowed(values)));
        }
        if let Some(default) = self.default {
            let values = default.split('&').map(str::to_owned).collect();
            return Ok(Some(Cow::Owned(values)));
        }
        if self.required {
            return Err(BindError::MissingRequired { field: self.name });
        }
        Ok(None)
    }

    /// Cardinality guard for scalar terminals: exactly one value may be
    /// decoded, more is a [`BindError::MultipleValues`], and an empty
    /// sequence counts as absent.
    fn single<T>(
        &self,
        decode: impl FnOnce(&str) -> Result<T, BindError>,
    ) -> Result<Option<T>, BindError> {
        let Some(values) = self.resolve()? else {
            return Ok(None);
        };
        match values.as_ref() {
            [] => Ok(None),
            [one] => decode(one).map(Some),
            many => Err(BindError::MultipleValues {
                field: self.name,
                count: many.len(),
            }),
        }
    }

    fn coerce_err(&self, raw: &str, source: CoerceError) -> BindError {
        BindError::Coerce {
            field: self.name,
            value: raw.to_owned(),
            source,
        }
    }
}
