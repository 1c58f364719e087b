//! Command line and environment configuration.

use std::path::PathBuf;

use clap::Parser;
use meridian_fhir_lib::FhirVersion;

use crate::error::{GeneratorError, Result};

/// Generate the Meridian FHIR model from FHIR definition files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding the FHIR definition JSON (profiles-types.json,
    /// profiles-resources.json, valuesets.json or individual resources).
    #[arg(long, short, env = "MERIDIAN_FHIR_DEFINITIONS")]
    pub definitions: PathBuf,

    /// Source directory of the model crate; the release module directory
    /// (e.g. `r4/`) is created below it.
    #[arg(
        long,
        short,
        env = "MERIDIAN_FHIR_OUTPUT",
        default_value = "crates/MeridianFhir/src"
    )]
    pub output: PathBuf,

    /// FHIR release the definitions belong to.
    #[arg(long, value_enum, default_value_t = FhirVersion::default())]
    pub fhir_version: FhirVersion,

    /// Only generate these types (comma separated) and the types they reach.
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short)]
    pub verbose: bool,
}

/// Resolved settings for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub definitions: PathBuf,
    pub output: PathBuf,
    pub fhir_version: FhirVersion,
    pub only: Vec<String>,
}

impl GeneratorConfig {
    /// The directory the release module is written to, e.g. `src/r4`.
    pub fn module_dir(&self) -> PathBuf {
        self.output.join(self.fhir_version.module_name())
    }
}

impl TryFrom<Args> for GeneratorConfig {
    type Error = GeneratorError;

    fn try_from(args: Args) -> Result<Self> {
        let only: Vec<String> = args
            .only
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        if let Some(bad) = only.iter().find(|name| !name.starts_with(|c: char| c.is_ascii_uppercase())) {
            return Err(GeneratorError::Config(format!(
                "--only expects type names such as Patient, got `{bad}`"
            )));
        }
        Ok(GeneratorConfig {
            definitions: args.definitions,
            output: args.output,
            fhir_version: args.fhir_version,
            only,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_as_comma_separated_list() {
        let args = Args::parse_from([
            "meridian-fhir-gen",
            "--definitions",
            "defs",
            "--only",
            "Patient, CarePlan",
        ]);
        let config = GeneratorConfig::try_from(args).unwrap();
        assert_eq!(config.only, vec!["Patient", "CarePlan"]);
        assert_eq!(config.output, PathBuf::from("crates/MeridianFhir/src"));
        assert_eq!(config.module_dir(), PathBuf::from("crates/MeridianFhir/src/r4"));
    }

    #[test]
    fn rejects_lowercase_type_names() {
        let args = Args::parse_from(["meridian-fhir-gen", "-d", "defs", "--only", "patient"]);
        let error = GeneratorConfig::try_from(args).unwrap_err();
        assert!(matches!(error, GeneratorError::Config(_)));
    }
}
