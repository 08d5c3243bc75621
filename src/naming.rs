//! Fixture naming convention.
//!
//! Maps a (type, version) pair to the file name of its fixture artifact:
//! `<SimpleTypeName>-<version>.ser`. Both store paths resolve names through
//! this module; read and write must never diverge or round-tripping breaks.

/// File extension shared by every fixture artifact.
pub const FIXTURE_EXTENSION: &str = "ser";

/// Strip any namespace qualifier from a type name.
///
/// Handles Rust paths (`jobs::Trigger` -> `Trigger`) and dotted namespaces
/// (`org.example.Foo` -> `Foo`); the last separator of either kind wins.
/// A name with no separator is already simple.
pub fn simple_type_name(full: &str) -> &str {
    let after_path = full.rsplit("::").next().unwrap_or(full);
    after_path.rsplit('.').next().unwrap_or(after_path)
}

/// Simple name of `T` from its compile-time type name.
///
/// Generic parameters are dropped before stripping: a fixture is keyed by
/// the outer type, and angle brackets do not belong in a file name.
pub fn simple_name_of<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    simple_type_name(full.split('<').next().unwrap_or(full))
}

/// Compute the fixture file name for a type name and version.
pub fn fixture_file_name(type_name: &str, version: &str) -> String {
    format!(
        "{}-{}.{}",
        simple_type_name(type_name),
        version,
        FIXTURE_EXTENSION
    )
}

/// Compute the fixture file name for `T` at `version`.
pub fn fixture_file_name_for<T>(version: &str) -> String {
    format!("{}-{}.{}", simple_name_of::<T>(), version, FIXTURE_EXTENSION)
}
