//! Naming and text helpers shared by lowering and rendering.

use heck::{ToSnakeCase, ToUpperCamelCase};

const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe",
    "unsized", "use", "virtual", "where", "while", "yield",
];

/// Converts a FHIR element name into a Rust field identifier.
///
/// Names are snake cased; keywords become raw identifiers and the few
/// keywords that cannot be raw get a trailing underscore.
///
/// # Examples
///
/// - "implicitRules" → "implicit_rules"
/// - "type" → "r#type"
/// - "self" → "self_"
pub fn make_rust_safe(input: &str) -> String {
    let snake_case = input.to_snake_case();
    match snake_case.as_str() {
        "self" | "super" | "crate" => format!("{snake_case}_"),
        keyword if RUST_KEYWORDS.contains(&keyword) => format!("r#{keyword}"),
        _ => snake_case,
    }
}

pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Generates a Rust type name from a FHIR element path by concatenating the
/// capitalized segments.
///
/// # Examples
///
/// - "Patient" → "Patient"
/// - "CarePlan.activity.detail" → "CarePlanActivityDetail"
pub fn generate_type_name(path: &str) -> String {
    path.split('.').map(capitalize_first_letter).collect()
}

/// The element path a `contentReference` points at.
///
/// - "#Observation.referenceRange" → "Observation.referenceRange"
/// - "http://example.org/StructureDefinition/X#X.part" → "X.part"
/// - "invalid-ref" → ""
pub fn extract_content_reference_id(content_ref: &str) -> &str {
    content_ref
        .split_once('#')
        .map(|(_, fragment)| fragment)
        .unwrap_or_default()
}

/// The file stem a type's module is written to.
pub fn module_file_stem(type_name: &str) -> String {
    type_name.to_snake_case()
}

/// A Rust enum variant for a code, or `None` when neither the code nor its
/// display yields a usable identifier.
///
/// Symbolic codes such as `<=` fall back to the display text.
pub fn code_variant_name(code: &str, display: Option<&str>) -> Option<String> {
    let source = if code.chars().any(char::is_alphanumeric) {
        code
    } else {
        display?
    };
    let name = source.to_upper_camel_case();
    is_identifier(&name).then_some(name)
}

/// True for a plain (non-raw) Rust identifier that starts with a letter.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|first| first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Normalizes definition text for a `///` comment and returns one entry per
/// line.
pub fn escape_doc_comment(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines: Vec<String> = normalized
        .lines()
        .map(|line| {
            line.trim_end()
                .replace("[x]", "\\[x\\]")
                .replace("*/", "*\\/")
                .replace("/*", "/\\*")
        })
        .collect();
    lines.dedup_by(|next, previous| next.is_empty() && previous.is_empty());
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Renders text as `///` lines at the given indentation.
pub fn doc_comment(text: &str, indent: &str) -> String {
    escape_doc_comment(text)
        .iter()
        .map(|line| {
            if line.is_empty() {
                format!("{indent}///\n")
            } else {
                format!("{indent}/// {line}\n")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_follow_rust_conventions() {
        assert_eq!(make_rust_safe("implicitRules"), "implicit_rules");
        assert_eq!(make_rust_safe("fhirVersion"), "fhir_version");
        assert_eq!(make_rust_safe("type"), "r#type");
        assert_eq!(make_rust_safe("abstract"), "r#abstract");
        assert_eq!(make_rust_safe("class"), "class");
        assert_eq!(make_rust_safe("self"), "self_");
    }

    #[test]
    fn type_names_concatenate_path_segments() {
        assert_eq!(generate_type_name("CarePlan.activity.detail"), "CarePlanActivityDetail");
        assert_eq!(
            generate_type_name(extract_content_reference_id("#Bundle.link")),
            "BundleLink"
        );
        assert_eq!(extract_content_reference_id("no-fragment"), "");
    }

    #[test]
    fn code_variants_fall_back_to_display_for_symbols() {
        assert_eq!(code_variant_name("entered-in-error", None).as_deref(), Some("EnteredInError"));
        assert_eq!(code_variant_name("<=", Some("Less or Equal to")).as_deref(), Some("LessOrEqualTo"));
        assert_eq!(code_variant_name("4.0.1", Some("4.0.1")), None);
        assert_eq!(code_variant_name("<", None), None);
    }

    #[test]
    fn doc_comments_escape_choice_brackets() {
        assert_eq!(doc_comment("Value of value[x]", "    "), "    /// Value of value\\[x\\]\n");
        assert_eq!(doc_comment("One\r\n\r\n\r\nTwo\n", ""), "/// One\n///\n/// Two\n");
    }
}
