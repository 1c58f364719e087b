//! # FHIR Generator CLI
//!
//! ```bash
//! # Regenerate the checked-in R4 model
//! meridian-fhir-gen --definitions definitions/r4 \
//!     --only Bundle,CarePlan,Condition,Coverage,MedicationRequest,Observation,Organization,Patient,Practitioner,StructureDefinition,Money,SampledData
//!
//! # Everything in the definitions, with debug logging
//! MERIDIAN_FHIR_DEFINITIONS=definitions/r4 meridian-fhir-gen --verbose
//! ```

use anyhow::Context;
use clap::Parser;
use meridian_fhir_generator::{Args, GeneratorConfig, generate};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = GeneratorConfig::try_from(args).context("invalid generator arguments")?;
    let summary = generate(&config).with_context(|| {
        format!(
            "failed to generate the {} model from {}",
            config.fhir_version,
            config.definitions.display()
        )
    })?;

    tracing::info!(
        resources = summary.resources,
        complex_types = summary.complex_types,
        code_systems = summary.code_systems,
        files_written = summary.written.len(),
        "done"
    );
    Ok(())
}
