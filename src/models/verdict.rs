use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Form field a string is checked as
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldKind {
    Email,
    Phone,
    #[value(alias = "url")]
    Website,
}

impl FieldKind {
    pub const ALL: [FieldKind; 3] = [FieldKind::Email, FieldKind::Phone, FieldKind::Website];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Phone => "phone",
            FieldKind::Website => "website",
        }
    }

    /// Message shown when the input matches the field's pattern
    pub fn valid_message(self) -> &'static str {
        match self {
            FieldKind::Email => "Valid Email!",
            FieldKind::Phone => "Valid Phone Number!",
            FieldKind::Website => "Valid Website URL!",
        }
    }

    /// Message shown when the input does not match
    pub fn invalid_message(self) -> &'static str {
        match self {
            FieldKind::Email => "Invalid Email!",
            FieldKind::Phone => "Invalid Phone Number! Must be exactly 10 digits.",
            FieldKind::Website => "Invalid Website URL!",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    Invalid,
}

impl From<bool> for Outcome {
    fn from(matched: bool) -> Self {
        if matched {
            Outcome::Valid
        } else {
            Outcome::Invalid
        }
    }
}

/// Result of checking one input against one field's pattern.
///
/// Serialized as `{"valid": bool, "message": string}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "VerdictBody")]
pub struct Verdict {
    pub field: FieldKind,
    pub outcome: Outcome,
}

impl Verdict {
    pub fn new(field: FieldKind, outcome: Outcome) -> Self {
        Self { field, outcome }
    }

    pub fn is_valid(&self) -> bool {
        self.outcome == Outcome::Valid
    }

    pub fn message(&self) -> &'static str {
        match self.outcome {
            Outcome::Valid => self.field.valid_message(),
            Outcome::Invalid => self.field.invalid_message(),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Wire shape of a verdict
#[derive(Debug, Serialize)]
pub struct VerdictBody {
    pub valid: bool,
    pub message: &'static str,
}

impl From<Verdict> for VerdictBody {
    fn from(verdict: Verdict) -> Self {
        Self {
            valid: verdict.is_valid(),
            message: verdict.message(),
        }
    }
}

/// A partially filled form; absent fields are not checked
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FormInput {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub url: Option<String>,
}

impl FormInput {
    pub fn get(&self, field: FieldKind) -> Option<&str> {
        match field {
            FieldKind::Email => self.email.as_deref(),
            FieldKind::Phone => self.phone.as_deref(),
            FieldKind::Website => self.url.as_deref(),
        }
    }
}

/// Verdicts for the fields supplied in a [`FormInput`]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FormReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Verdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Verdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<Verdict>,
}

impl FormReport {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none() && self.website.is_none()
    }

    pub fn insert(&mut self, verdict: Verdict) {
        let slot = match verdict.field {
            FieldKind::Email => &mut self.email,
            FieldKind::Phone => &mut self.phone,
            FieldKind::Website => &mut self.website,
        };
        *slot = Some(verdict);
    }
}
