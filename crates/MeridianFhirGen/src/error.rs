use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading definitions or writing the generated model.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("StructureDefinition {type_name} has no snapshot element `{path}`")]
    MissingElement { type_name: String, path: String },

    #[error("unknown type `{0}` requested")]
    UnknownType(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl GeneratorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeneratorError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
