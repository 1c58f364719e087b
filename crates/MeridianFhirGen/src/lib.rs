//! # Meridian FHIR Generator
//!
//! Generates the typed model in `meridian-fhir-lib` from the FHIR
//! definition files published with each release.
//!
//! ## Pipeline
//!
//! 1. [`loader`] reads every JSON definition file below a directory.
//! 2. [`lower`] turns StructureDefinitions into a [`ir::TypeRegistry`]:
//!    one struct per complex type, resource and backbone element, choice
//!    groups for `[x]` elements and code system enums for required
//!    bindings.
//! 3. The registry is optionally narrowed to a set of types, then
//!    [`cycles`] boxes fields that would make a struct infinitely sized.
//! 4. [`render`] produces the source text and [`output`] writes it.

pub mod bootstrap;
pub mod config;
pub mod cycles;
pub mod error;
pub mod format_helpers;
pub mod ir;
pub mod loader;
pub mod lower;
pub mod output;
pub mod render;

use std::path::PathBuf;

use tracing::info;

pub use config::{Args, GeneratorConfig};
pub use error::{GeneratorError, Result};

use crate::ir::{TypeKind, TypeRegistry};
use crate::loader::DefinitionSet;

/// What a generator run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub resources: usize,
    pub complex_types: usize,
    pub code_systems: usize,
    pub written: Vec<PathBuf>,
}

/// Builds the final registry from loaded definitions: lowering, the
/// `--only` filter, pruning and cycle boxing.
pub fn build_model(definitions: &DefinitionSet, only: &[String]) -> Result<TypeRegistry> {
    let mut registry = lower::build_registry(definitions)?;
    if !only.is_empty() {
        registry.retain_reachable(only)?;
    }
    registry.prune();
    cycles::box_cycles(&mut registry);
    Ok(registry)
}

/// Runs the whole pipeline for one configuration.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationSummary> {
    info!(
        definitions = %config.definitions.display(),
        version = %config.fhir_version,
        "generating FHIR model"
    );
    let definitions = loader::load_definitions(&config.definitions)?;
    let registry = build_model(&definitions, &config.only)?;
    let files = render::render_model(&registry, config.fhir_version);
    let written = output::write_files(&config.module_dir(), &files)?;

    Ok(GenerationSummary {
        resources: registry.roots(TypeKind::Resource).len(),
        complex_types: registry.roots(TypeKind::ComplexType).len(),
        code_systems: registry.code_systems.len(),
        written,
    })
}
