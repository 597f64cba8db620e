use syn::Path;

/// Derives copied from the declaration onto its grouped models.
///
/// Only derives that hold for any record of derivable fields are forwarded.
/// `Serialize` is always emitted separately through the runtime path.
pub const FORWARDED_DERIVES: &[&str] = &[
    "Debug",
    "Clone",
    "Copy",
    "PartialEq",
    "Eq",
    "Hash",
    "PartialOrd",
    "Ord",
    "Default",
    "Deserialize",
];

/// Whether a derive path should be repeated on the grouped models
pub fn is_forwarded(path: &Path) -> bool {
    path.segments
        .last()
        .is_some_and(|segment| FORWARDED_DERIVES.iter().any(|name| segment.ident == name))
}

/// Derives of `derives` to forward, in their original order
pub fn forwarded(derives: &[Path]) -> Vec<&Path> {
    derives.iter().filter(|path| is_forwarded(path)).collect()
}
