/// Declares a code system enum for a required binding.
///
/// Each variant is written on the wire as its FHIR code. Decoding an unknown
/// code fails.
///
/// ```ignore
/// code_system! {
///     /// How a name is used.
///     NameUse, system = "http://hl7.org/fhir/name-use" {
///         Usual => ("usual", "Usual"),
///         Official => ("official", "Official"),
///     }
/// }
/// ```
macro_rules! code_system {
    (
        $(#[$meta:meta])*
        $name:ident, system = $system:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => ($code:literal, $display:literal)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $code)]
                $variant,
            )*
        }

        impl $crate::FhirCode for $name {
            const SYSTEM: &'static str = $system;

            fn as_code(&self) -> &'static str {
                match self {
                    $( Self::$variant => $code, )*
                }
            }

            fn display(&self) -> &'static str {
                match self {
                    $( Self::$variant => $display, )*
                }
            }

            fn from_code(code: &str) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$variant), )*
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::FhirCode::as_code(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::FhirError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as $crate::FhirCode>::from_code(s).ok_or_else(|| $crate::FhirError::UnknownCode {
                    system: $system,
                    code: s.to_string(),
                })
            }
        }
    };
}

/// Declares the polymorphic `Resource` enum over the listed resource types.
///
/// Encoding delegates to the inner record, which writes its own
/// `resourceType`. Decoding reads `resourceType` first and then decodes the
/// matching record from the buffered object.
macro_rules! resource_enum {
    ($($name:ident),* $(,)?) => {
        /// Any resource of this release, discriminated on the wire by
        /// `resourceType`. Used for `contained` resources, bundle entries and
        /// documents of unknown type.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Resource {
            $( $name($name), )*
        }

        impl Resource {
            /// The `resourceType` of every variant, in declaration order.
            pub const RESOURCE_TYPES: &'static [&'static str] = &[$( stringify!($name) ),*];

            pub fn resource_type(&self) -> &'static str {
                match self {
                    $( Resource::$name(_) => <$name as $crate::FhirResource>::RESOURCE_TYPE, )*
                }
            }

            pub fn id(&self) -> Option<&str> {
                match self {
                    $( Resource::$name(resource) => $crate::FhirResource::id(resource), )*
                }
            }
        }

        $(
            impl From<$name> for Resource {
                fn from(resource: $name) -> Self {
                    Resource::$name(resource)
                }
            }

            impl TryFrom<Resource> for $name {
                type Error = Resource;

                fn try_from(resource: Resource) -> ::core::result::Result<Self, Self::Error> {
                    match resource {
                        Resource::$name(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        )*

        impl serde::Serialize for Resource {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                match self {
                    $( Resource::$name(resource) => serde::Serialize::serialize(resource, serializer), )*
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for Resource {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                use serde::de::Error;

                let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                let resource_type = value
                    .get("resourceType")
                    .and_then(serde_json::Value::as_str)
                    .ok_or_else(|| D::Error::missing_field("resourceType"))?
                    .to_string();
                tracing::trace!(resource_type = %resource_type, "decoding polymorphic resource");
                match resource_type.as_str() {
                    $(
                        stringify!($name) => serde_json::from_value::<$name>(value)
                            .map(Resource::$name)
                            .map_err(D::Error::custom),
                    )*
                    other => Err(D::Error::unknown_variant(other, Resource::RESOURCE_TYPES)),
                }
            }
        }
    };
}

pub(crate) use code_system;
pub(crate) use resource_enum;
