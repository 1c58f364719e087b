use std::fmt;

/// The FHIR releases this crate can model, one per Cargo feature.
///
/// Also used as a command line value by the generator (`--fhir-version R4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum FhirVersion {
    /// FHIR 4.0.1
    #[cfg(feature = "R4")]
    #[value(name = "R4")]
    R4,
}

impl FhirVersion {
    /// The short name used for module and feature names.
    pub fn as_str(&self) -> &'static str {
        match self {
            #[cfg(feature = "R4")]
            FhirVersion::R4 => "R4",
        }
    }

    /// The full release number published by HL7.
    pub fn release(&self) -> &'static str {
        match self {
            #[cfg(feature = "R4")]
            FhirVersion::R4 => "4.0.1",
        }
    }

    /// The Rust module the generated model lives in.
    pub fn module_name(&self) -> &'static str {
        match self {
            #[cfg(feature = "R4")]
            FhirVersion::R4 => "r4",
        }
    }
}

impl fmt::Display for FhirVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "R4")]
impl Default for FhirVersion {
    fn default() -> Self {
        FhirVersion::R4
    }
}
