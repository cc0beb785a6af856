//! Identifier derivation for generated projects.
//!
//! Every artifact that refers to "the application" goes through these
//! functions, so the artifact id, package segment and class names are
//! byte-identical across the whole bundle.

/// Convert an application name to a build artifact id.
///
/// Lowercases the input and replaces every character outside `[a-z0-9-]`
/// with `-`, one for one (runs are not collapsed).
///
/// ```
/// use evadapt_core::to_artifact_id;
///
/// assert_eq!(to_artifact_id("My App!! 2.0"), "my-app---2-0");
/// ```
pub fn to_artifact_id(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Convert an artifact id to a package path segment by dropping every `-`.
pub fn to_package_segment(artifact_id: &str) -> String {
    artifact_id.chars().filter(|c| *c != '-').collect()
}

/// Build a class name from an application name and a role suffix.
///
/// Keeps only ASCII letters and digits, preserving case, then appends `suffix`.
pub fn to_class_name(name: &str, suffix: &str) -> String {
    let mut class_name: String = name.chars().filter(char::is_ascii_alphanumeric).collect();
    class_name.push_str(suffix);
    class_name
}
