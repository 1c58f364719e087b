//! Discovery and parsing of definition files.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::bootstrap::{CodeSystem, DefinitionResource, StructureDefinition, ValueSet};
use crate::error::{GeneratorError, Result};

/// Every conformance resource read from the definitions directory.
#[derive(Debug, Default)]
pub struct DefinitionSet {
    pub structure_definitions: Vec<StructureDefinition>,
    /// Keyed by canonical URL.
    pub value_sets: BTreeMap<String, ValueSet>,
    /// Keyed by canonical URL.
    pub code_systems: BTreeMap<String, CodeSystem>,
}

impl DefinitionSet {
    /// Adds a parsed resource, unpacking bundles.
    pub fn add(&mut self, resource: DefinitionResource) {
        match resource {
            DefinitionResource::Bundle(bundle) => {
                for resource in bundle.entry.into_iter().filter_map(|entry| entry.resource) {
                    self.add(resource);
                }
            }
            DefinitionResource::StructureDefinition(definition) => {
                self.structure_definitions.push(*definition);
            }
            DefinitionResource::ValueSet(value_set) => {
                self.value_sets.insert(value_set.url.clone(), value_set);
            }
            DefinitionResource::CodeSystem(code_system) => {
                self.code_systems.insert(code_system.url.clone(), code_system);
            }
            DefinitionResource::Other => {}
        }
    }
}

/// Recursively collects the JSON files below `dir`, sorted so that repeated
/// runs read definitions in the same order.
///
/// Concept maps and example bundles are skipped; they carry nothing the
/// generator uses.
pub fn visit_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut json_files = Vec::new();
    let entries = std::fs::read_dir(dir).map_err(|e| GeneratorError::io(dir, e))?;
    for entry in entries {
        let path = entry.map_err(|e| GeneratorError::io(dir, e))?.path();
        if path.is_dir() {
            json_files.extend(visit_dirs(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "json") {
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            if !filename.contains("conceptmap") && !filename.contains("example") {
                json_files.push(path);
            }
        }
    }
    json_files.sort();
    Ok(json_files)
}

/// Parses one definitions file: a Bundle or a single conformance resource.
pub fn parse_definition_file(path: &Path) -> Result<DefinitionResource> {
    let file = File::open(path).map_err(|e| GeneratorError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| GeneratorError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads every definition file below `dir`.
pub fn load_definitions(dir: &Path) -> Result<DefinitionSet> {
    if !dir.is_dir() {
        return Err(GeneratorError::Config(format!(
            "definitions directory {} does not exist",
            dir.display()
        )));
    }

    let mut definitions = DefinitionSet::default();
    for path in visit_dirs(dir)? {
        debug!(path = %path.display(), "reading definitions");
        definitions.add(parse_definition_file(&path)?);
    }
    info!(
        structure_definitions = definitions.structure_definitions.len(),
        value_sets = definitions.value_sets.len(),
        code_systems = definitions.code_systems.len(),
        "loaded definitions"
    );
    Ok(definitions)
}
