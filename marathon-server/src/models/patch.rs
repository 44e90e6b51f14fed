//! Tri-state field for partial updates
//!
//! A `Patch<T>` distinguishes a field that was left out of the request
//! body from one that was sent as `null` and one that carries a value.
//! Struct fields must be annotated with `#[serde(default)]` so that an
//! absent key deserializes to `Patch::Missing`.

use serde::{Deserialize, Deserializer};

use super::ValidationError;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T> {
    /// Key absent from the body; column left untouched
    #[default]
    Missing,
    /// Key present with `null`; column cleared
    Null,
    /// Key present with a value; column overwritten
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Reject an explicit null for a NOT NULL column.
    pub fn require_non_null(&self, field: &'static str) -> Result<(), ValidationError> {
        match self {
            Self::Null => Err(ValidationError::Null { field }),
            _ => Ok(()),
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|opt| match opt {
            Some(v) => Self::Value(v),
            None => Self::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default)]
        name: Patch<String>,
        #[serde(default)]
        level: Patch<i16>,
    }

    #[test]
    fn absent_null_and_value() {
        let body: Body = serde_json::from_str(r#"{"level": null}"#).unwrap();
        assert_eq!(body.name, Patch::Missing);
        assert_eq!(body.level, Patch::Null);

        let body: Body = serde_json::from_str(r#"{"name": "Ada", "level": 3}"#).unwrap();
        assert_eq!(body.name, Patch::Value("Ada".to_string()));
        assert_eq!(body.level.as_value(), Some(&3));
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(serde_json::from_str::<Body>(r#"{"level": "high"}"#).is_err());
    }

    #[test]
    fn require_non_null() {
        assert!(Patch::<String>::Missing.require_non_null("x").is_ok());
        assert!(Patch::Value(1).require_non_null("x").is_ok());
        assert_eq!(
            Patch::<String>::Null.require_non_null("x"),
            Err(ValidationError::Null { field: "x" })
        );
    }
}
