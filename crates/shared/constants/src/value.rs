use crate::key::ErrorKind;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// A single registry value.
///
/// Serialized untagged, so the export reads `"GST": 10`, `"PICA_LABEL": "PICA (Online Sales)"`
/// and `"ERRORS": { "NETWORK": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstantValue {
    Integer(i64),
    Text(Cow<'static, str>),
    /// The nested `ERRORS` mapping, resolved at read time.
    Group(BTreeMap<ErrorKind, Cow<'static, str>>),
}

impl ConstantValue {
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::Text(_) | Self::Group(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(&**v),
            Self::Integer(_) | Self::Group(_) => None,
        }
    }

    #[must_use]
    pub const fn as_group(&self) -> Option<&BTreeMap<ErrorKind, Cow<'static, str>>> {
        match self {
            Self::Group(v) => Some(v),
            Self::Integer(_) | Self::Text(_) => None,
        }
    }

    /// Name of the variant, used in type mismatch errors.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Text(_) => "string",
            Self::Group(_) => "mapping",
        }
    }

    pub(crate) const fn same_type(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Integer(_), Self::Integer(_))
                | (Self::Text(_), Self::Text(_))
                | (Self::Group(_), Self::Group(_))
        )
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Group(v) => {
                for (i, (kind, message)) in v.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{kind}: {message}")?;
                }
                Ok(())
            },
        }
    }
}

impl From<i64> for ConstantValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<&'static str> for ConstantValue {
    fn from(v: &'static str) -> Self {
        Self::Text(Cow::Borrowed(v))
    }
}

impl From<String> for ConstantValue {
    fn from(v: String) -> Self {
        Self::Text(Cow::Owned(v))
    }
}

impl From<BTreeMap<ErrorKind, Cow<'static, str>>> for ConstantValue {
    fn from(v: BTreeMap<ErrorKind, Cow<'static, str>>) -> Self {
        Self::Group(v)
    }
}
