//! Exposure policy.
//!
//! Decides which methods are advertised to remote callers. This is separate
//! from dispatchability (see `CallableObject::has_method`): an excluded method
//! is hidden from requests and stubs but the dispatcher still runs it when
//! asked directly.

/// Prefix reserved for lifecycle and catch-all hooks (`__construct`, `__call`).
pub const MAGIC_PREFIX: &str = "__";

/// Whether `method` starts with the reserved magic prefix.
///
/// The bare prefix itself (`"__"`) is not considered magic.
pub fn is_magic(method: &str) -> bool {
    method.len() > MAGIC_PREFIX.len() && method.starts_with(MAGIC_PREFIX)
}

/// Whether `method` on a class named `class_name` may be exposed.
///
/// Rules, first match decides: magic methods, constructor-by-name, and
/// explicitly excluded names (case-sensitive) are ineligible.
pub fn is_eligible<S: AsRef<str>>(class_name: &str, method: &str, excluded: &[S]) -> bool {
    if is_magic(method) {
        return false;
    }
    if method == class_name {
        return false;
    }
    !excluded.iter().any(|e| e.as_ref() == method)
}

/// Exposure predicate. Counterpart of `CallableObject::has_method`.
pub fn is_exposable<S: AsRef<str>>(class_name: &str, method: &str, excluded: &[S]) -> bool {
    is_eligible(class_name, method, excluded)
}
