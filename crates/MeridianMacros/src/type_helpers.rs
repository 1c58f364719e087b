use syn::{GenericArgument, Path, PathArguments, Type, TypePath};

/// Returns `T` when `ty` is written as `<Wrapper><T>` (matching the last path
/// segment only, so `std::option::Option<T>` is recognised too).
fn get_wrapped_type<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    if let Type::Path(TypePath {
        path: Path { segments, .. },
        ..
    }) = ty
        && let Some(segment) = segments.last()
        && segment.ident == wrapper
        && let PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(GenericArgument::Type(inner_ty)) = args.args.first()
    {
        return Some(inner_ty);
    }
    None
}

/// Extracts `T` from `Option<T>`.
///
/// ```rust,ignore
/// // Option<Vec<HumanName>> -> Some(Vec<HumanName>)
/// // Reference              -> None
/// ```
pub(crate) fn get_option_inner_type(ty: &Type) -> Option<&Type> {
    get_wrapped_type(ty, "Option")
}

/// Extracts `T` from `Vec<T>`.
pub(crate) fn get_vec_inner_type(ty: &Type) -> Option<&Type> {
    get_wrapped_type(ty, "Vec")
}
