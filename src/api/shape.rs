//! Schema validation boundary
//!
//! A [`Shape`] turns a raw JSON value into a typed value or a
//! [`ValidationError`]. The pipeline only knows this trait; serde is the
//! default backing through [`Schema`], and the combinators cover the few
//! loosely-typed answers the backend gives (numeric strings, `""` for
//! "nothing", bare text).

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ValidationError;

/// Validation capability used by the request pipeline
pub trait Shape: Send + Sync {
    /// Typed value produced on success
    type Output: Send;

    /// Validate `raw` and produce the typed value
    fn parse(&self, raw: &Value) -> Result<Self::Output, ValidationError>;
}

/// Extra rules checked after deserialization (see [`Checked`])
pub trait Validate {
    /// Check the rules, reporting the first violation
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Serde-backed shape for any deserializable type
pub struct Schema<T>(PhantomData<fn() -> T>);

impl<T> Schema<T> {
    /// Shape for `T`
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Clone for Schema<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Schema<T> {}

impl<T> Default for Schema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Schema<{}>", std::any::type_name::<T>())
    }
}

impl<T: DeserializeOwned + Send> Shape for Schema<T> {
    type Output = T;

    fn parse(&self, raw: &Value) -> Result<T, ValidationError> {
        Ok(T::deserialize(raw)?)
    }
}

/// Serde-backed shape that also runs [`Validate`] rules
pub struct Checked<T>(PhantomData<fn() -> T>);

impl<T> Checked<T> {
    /// Shape for `T`
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Clone for Checked<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Checked<T> {}

impl<T> Default for Checked<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Checked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Checked<{}>", std::any::type_name::<T>())
    }
}

impl<T: DeserializeOwned + Validate + Send> Shape for Checked<T> {
    type Output = T;

    fn parse(&self, raw: &Value) -> Result<T, ValidationError> {
        let value = T::deserialize(raw)?;
        value.validate()?;
        Ok(value)
    }
}

/// Accepts any JSON value unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnyShape;

impl Shape for AnyShape {
    type Output = Value;

    fn parse(&self, raw: &Value) -> Result<Value, ValidationError> {
        Ok(raw.clone())
    }
}

/// Accepts only a JSON string (e.g. CSV downloads, raw text answers)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Text;

impl Shape for Text {
    type Output = String;

    fn parse(&self, raw: &Value) -> Result<String, ValidationError> {
        raw.as_str()
            .map(String::from)
            .ok_or_else(|| ValidationError::new(format!("expected a string, received {raw}")))
    }
}

/// Accepts a JSON number or a numeric string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Number;

impl Shape for Number {
    type Output = f64;

    fn parse(&self, raw: &Value) -> Result<f64, ValidationError> {
        match raw {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| ValidationError::new(format!("number out of range: {n}"))),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|_| ValidationError::new(format!("expected a number, received \"{s}\""))),
            other => Err(ValidationError::new(format!(
                "expected a number, received {other}"
            ))),
        }
    }
}

/// `null` or the inner shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nullable<S>(pub S);

impl<S: Shape> Shape for Nullable<S> {
    type Output = Option<S::Output>;

    fn parse(&self, raw: &Value) -> Result<Self::Output, ValidationError> {
        if raw.is_null() {
            Ok(None)
        } else {
            self.0.parse(raw).map(Some)
        }
    }
}

/// The literal empty string (meaning "none") or the inner shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrEmpty<S>(pub S);

impl<S: Shape> Shape for OrEmpty<S> {
    type Output = Option<S::Output>;

    fn parse(&self, raw: &Value) -> Result<Self::Output, ValidationError> {
        if raw.as_str() == Some("") {
            Ok(None)
        } else {
            self.0.parse(raw).map(Some)
        }
    }
}

/// A JSON array whose items all match the inner shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrayOf<S>(pub S);

impl<S: Shape> Shape for ArrayOf<S> {
    type Output = Vec<S::Output>;

    fn parse(&self, raw: &Value) -> Result<Self::Output, ValidationError> {
        let items = raw
            .as_array()
            .ok_or_else(|| ValidationError::new(format!("expected an array, received {raw}")))?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                self.0
                    .parse(item)
                    .map_err(|e| ValidationError::at(&i.to_string(), e.message()))
            })
            .collect()
    }
}

/// Multipart form that must carry the named parts
///
/// Parses the value produced by `MultipartForm::describe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormShape {
    /// Part names that must be present
    pub required: &'static [&'static str],
}

impl FormShape {
    /// Form requiring `required` parts
    #[must_use]
    pub const fn new(required: &'static [&'static str]) -> Self {
        Self { required }
    }
}

impl Shape for FormShape {
    type Output = Value;

    fn parse(&self, raw: &Value) -> Result<Value, ValidationError> {
        let parts = raw
            .as_object()
            .ok_or_else(|| ValidationError::new("expected a multipart form"))?;
        if let Some(missing) = self.required.iter().find(|name| !parts.contains_key(**name)) {
            return Err(ValidationError::at(missing, "Required"));
        }
        Ok(raw.clone())
    }
}
