use thiserror::Error;

/// Errors surfaced by the model's parsing entry points.
#[derive(Debug, Error)]
pub enum FhirError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    DateTime(#[from] DateTimeParseError),

    #[error("invalid FHIR decimal `{0}`")]
    Decimal(String),

    #[error("unknown code `{code}` for code system {system}")]
    UnknownCode { system: &'static str, code: String },
}

/// A date, dateTime, instant or time literal that does not match the FHIR
/// lexical rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid FHIR {kind} `{input}`: {reason}")]
pub struct DateTimeParseError {
    pub kind: &'static str,
    pub input: String,
    pub reason: &'static str,
}

impl DateTimeParseError {
    pub(crate) fn new(kind: &'static str, input: &str, reason: &'static str) -> Self {
        Self {
            kind,
            input: input.to_string(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, FhirError>;
