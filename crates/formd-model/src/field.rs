//! Field vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fields that carry field-specific normalization in the default rule set.
///
/// Field names are matched exactly (snake_case, case-sensitive); anything
/// else is [`FieldKind::Other`] and passes through after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    State,
    ZipCode,
    PhoneNumber,
    IssuerName,
    City,
    Other,
}

impl FieldKind {
    /// Resolve a field name to its kind.
    pub fn from_name(name: &str) -> Self {
        match name {
            "state" => Self::State,
            "zip_code" => Self::ZipCode,
            "phone_number" => Self::PhoneNumber,
            "issuer_name" => Self::IssuerName,
            "city" => Self::City,
            _ => Self::Other,
        }
    }

    /// Canonical field name, or `None` for [`FieldKind::Other`].
    pub const fn field_name(&self) -> Option<&'static str> {
        match self {
            Self::State => Some("state"),
            Self::ZipCode => Some("zip_code"),
            Self::PhoneNumber => Some("phone_number"),
            Self::IssuerName => Some("issuer_name"),
            Self::City => Some("city"),
            Self::Other => None,
        }
    }

    /// All kinds with a canonical field name.
    pub const fn known() -> &'static [FieldKind] {
        &[
            Self::State,
            Self::ZipCode,
            Self::PhoneNumber,
            Self::IssuerName,
            Self::City,
        ]
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name().unwrap_or("other"))
    }
}
