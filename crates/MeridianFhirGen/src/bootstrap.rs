//! Minimal serde models of the conformance resources the generator reads.
//!
//! These are deliberately loose: only the elements that drive code
//! generation are modeled and everything else in the definition files is
//! ignored. The generated model in `meridian-fhir-lib` cannot be used here,
//! since it is the output of this crate.

use serde::{de, Deserialize, Deserializer};

/// Any resource found in a definitions file, tagged by `resourceType`.
#[derive(Debug)]
pub enum DefinitionResource {
    Bundle(Bundle),
    StructureDefinition(Box<StructureDefinition>),
    ValueSet(ValueSet),
    CodeSystem(CodeSystem),
    Other,
}

// Dispatches through `serde_json::Value`: serde's internally tagged enums
// buffer numbers in a way `arbitrary_precision` cannot read back.
impl<'de> Deserialize<'de> for DefinitionResource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let resource_type = value
            .get("resourceType")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| de::Error::missing_field("resourceType"))?
            .to_string();
        let resource = match resource_type.as_str() {
            "Bundle" => serde_json::from_value(value).map(DefinitionResource::Bundle),
            "StructureDefinition" => serde_json::from_value(value)
                .map(|definition| DefinitionResource::StructureDefinition(Box::new(definition))),
            "ValueSet" => serde_json::from_value(value).map(DefinitionResource::ValueSet),
            "CodeSystem" => serde_json::from_value(value).map(DefinitionResource::CodeSystem),
            _ => Ok(DefinitionResource::Other),
        };
        resource.map_err(de::Error::custom)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Bundle {
    #[serde(default)]
    pub entry: Vec<BundleEntry>,
}

#[derive(Debug, Deserialize)]
pub struct BundleEntry {
    pub resource: Option<DefinitionResource>,
}

/// Bootstrap representation of a FHIR StructureDefinition.
///
/// `kind`, `abstract` and `derivation` decide whether a definition becomes a
/// struct, a primitive alias, a constrained alias or nothing at all. Only the
/// snapshot is read; it already carries the inherited envelope elements
/// (`id`, `meta`, `extension`, ...) in order.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureDefinition {
    pub url: String,
    pub name: String,
    pub description: Option<String>,
    pub kind: String,
    #[serde(rename = "abstract")]
    pub r#abstract: bool,
    #[serde(rename = "type")]
    pub r#type: String,
    pub base_definition: Option<String>,
    pub derivation: Option<String>,
    pub snapshot: Option<Snapshot>,
}

impl StructureDefinition {
    /// Snapshot elements, or an empty slice for definitions without one.
    pub fn elements(&self) -> &[ElementDefinition] {
        self.snapshot
            .as_ref()
            .map(|snapshot| snapshot.element.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub element: Vec<ElementDefinition>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDefinition {
    pub path: String,
    pub short: Option<String>,
    pub definition: Option<String>,
    pub min: Option<u32>,
    pub max: Option<String>,
    pub content_reference: Option<String>,
    #[serde(rename = "type")]
    pub r#type: Option<Vec<ElementType>>,
    pub binding: Option<ElementBinding>,
}

impl ElementDefinition {
    /// The last path segment, without any `[x]` suffix.
    pub fn name(&self) -> &str {
        let last = self.path.rsplit('.').next().unwrap_or(&self.path);
        last.strip_suffix("[x]").unwrap_or(last)
    }

    pub fn is_choice(&self) -> bool {
        self.path.ends_with("[x]")
    }

    pub fn is_prohibited(&self) -> bool {
        self.max.as_deref() == Some("0")
    }

    pub fn is_repeating(&self) -> bool {
        self.max.as_deref().is_some_and(|max| max != "0" && max != "1")
    }

    pub fn type_codes(&self) -> impl Iterator<Item = &str> {
        self.r#type.iter().flatten().map(|ty| ty.code.as_str())
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ElementType {
    pub code: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementBinding {
    pub strength: String,
    pub value_set: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ValueSet {
    pub url: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub compose: Option<ValueSetCompose>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ValueSetCompose {
    #[serde(default)]
    pub include: Vec<ValueSetInclude>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ValueSetInclude {
    pub system: Option<String>,
    #[serde(default)]
    pub concept: Vec<ValueSetConcept>,
    #[serde(default, rename = "valueSet")]
    pub value_set: Vec<String>,
    #[serde(default)]
    pub filter: Vec<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ValueSetConcept {
    pub code: String,
    pub display: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CodeSystem {
    pub url: String,
    pub name: Option<String>,
    #[serde(default)]
    pub concept: Vec<CodeSystemConcept>,
}

/// A code system concept; hierarchical systems nest children under
/// `concept`.
#[derive(Debug, Default, Deserialize)]
pub struct CodeSystemConcept {
    pub code: String,
    pub display: Option<String>,
    pub definition: Option<String>,
    #[serde(default)]
    pub concept: Vec<CodeSystemConcept>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_bundle_of_mixed_resources() {
        let json = r#"{
            "resourceType": "Bundle",
            "entry": [
                {"resource": {"resourceType": "CodeSystem", "url": "http://example.org/cs", "concept": [{"code": "a"}]}},
                {"resource": {"resourceType": "SearchParameter", "url": "http://example.org/sp"}},
                {"fullUrl": "urn:uuid:1"}
            ]
        }"#;
        let DefinitionResource::Bundle(bundle) = serde_json::from_str(json).unwrap() else {
            panic!("expected a bundle");
        };
        assert_eq!(bundle.entry.len(), 3);
        assert!(matches!(
            bundle.entry[0].resource,
            Some(DefinitionResource::CodeSystem(_))
        ));
        assert!(matches!(
            bundle.entry[1].resource,
            Some(DefinitionResource::Other)
        ));
        assert!(bundle.entry[2].resource.is_none());
    }

    #[test]
    fn reads_numeric_cardinality_inside_bundle() {
        let json = r#"{
            "resourceType": "Bundle",
            "entry": [{"resource": {
                "resourceType": "StructureDefinition",
                "url": "http://example.org/sd",
                "name": "Thing",
                "kind": "resource",
                "abstract": false,
                "type": "Thing",
                "snapshot": {"element": [{"path": "Thing.code", "min": 1, "max": "1"}]}
            }}]
        }"#;
        let DefinitionResource::Bundle(bundle) = serde_json::from_str(json).unwrap() else {
            panic!("expected a bundle");
        };
        let Some(DefinitionResource::StructureDefinition(definition)) = &bundle.entry[0].resource
        else {
            panic!("expected a structure definition");
        };
        assert_eq!(definition.elements()[0].min, Some(1));
    }

    #[test]
    fn missing_resource_type_is_an_error() {
        let error = serde_json::from_str::<DefinitionResource>(r#"{"url": "x"}"#).unwrap_err();
        assert!(error.to_string().contains("resourceType"));
    }

    #[test]
    fn element_name_strips_choice_suffix() {
        let element = ElementDefinition {
            path: "Observation.value[x]".to_string(),
            max: Some("1".to_string()),
            ..ElementDefinition::default()
        };
        assert_eq!(element.name(), "value");
        assert!(element.is_choice());
        assert!(!element.is_repeating());
    }
}
