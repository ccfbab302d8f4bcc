//! Method introspection.
//!
//! Rust has no runtime reflection, so an object opts into exposure by
//! implementing [`MethodIntrospectable`]. Most types do that through a
//! [`MethodTable`], which pairs each public method name with a plain
//! function pointer:
//!
//! ```ignore
//! struct Widget { renders: u32 }
//!
//! impl MethodIntrospectable for Widget {
//!     fn public_methods(&self) -> Vec<String> {
//!         Self::table().names()
//!     }
//!
//!     fn invoke(&mut self, method: &str, args: Vec<Value>) -> Result<Value, InvocationError> {
//!         Self::table().invoke(self, method, args)
//!     }
//! }
//! ```

use std::borrow::Cow;

use serde_json::Value;

use crate::error::InvocationError;

/// Catch-all hook receiving calls to undeclared methods.
pub const FALLBACK_HOOK: &str = "__call";

/// Capability trait for objects whose methods can be enumerated and invoked
/// by name.
pub trait MethodIntrospectable {
    /// Fully qualified type name, e.g. `app::ui::Widget`.
    ///
    /// Defaults to the compiler's type name for `Self`.
    fn qualified_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(std::any::type_name::<Self>())
    }

    /// Every publicly invocable method, in a stable order.
    fn public_methods(&self) -> Vec<String>;

    /// Whether the object declares `method` itself.
    fn has_method(&self, method: &str) -> bool {
        self.public_methods().iter().any(|m| m == method)
    }

    /// Invoke a declared method with positional arguments.
    fn invoke(&mut self, method: &str, args: Vec<Value>) -> Result<Value, InvocationError>;

    /// Whether the object handles calls to methods it does not declare.
    ///
    /// Declaring [`FALLBACK_HOOK`] is enough.
    fn has_fallback_handler(&self) -> bool {
        self.has_method(FALLBACK_HOOK)
    }

    /// Catch-all hook for undeclared methods.
    ///
    /// By default the declared [`FALLBACK_HOOK`] receives `[method, args]`.
    fn invoke_fallback(&mut self, method: &str, args: Vec<Value>) -> Result<Value, InvocationError> {
        if !self.has_method(FALLBACK_HOOK) {
            return Err(InvocationError::NoFallback(method.to_string()));
        }
        self.invoke(
            FALLBACK_HOOK,
            vec![Value::String(method.to_string()), Value::Array(args)],
        )
    }
}

/// List the public methods of `target`.
///
/// An object with no surface yields an empty list rather than an error.
pub fn list_public_methods<T: MethodIntrospectable + ?Sized>(target: &T) -> Vec<String> {
    target.public_methods()
}

/// Strip the module path and any generic arguments from a qualified name.
///
/// Both `::` and `\` are accepted as path separators.
pub fn short_name(qualified: &str) -> &str {
    let base = match qualified.find('<') {
        Some(idx) => &qualified[..idx],
        None => qualified,
    };
    let after_colons = base.rsplit("::").next().unwrap_or(base);
    after_colons.rsplit('\\').next().unwrap_or(after_colons)
}

/// Handler stored in a [`MethodTable`].
pub type MethodFn<T> = fn(&mut T, Vec<Value>) -> Result<Value, InvocationError>;

/// Ordered name → handler table for a concrete type.
pub struct MethodTable<T> {
    entries: Vec<(&'static str, MethodFn<T>)>,
}

impl<T> MethodTable<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a method. Registering a name twice replaces the handler but
    /// keeps the original position.
    pub fn method(mut self, name: &'static str, handler: MethodFn<T>) -> Self {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = handler,
            None => self.entries.push((name, handler)),
        }
        self
    }

    /// Method names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| n.to_string()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| *n == name)
    }

    pub fn invoke(
        &self,
        target: &mut T,
        name: &str,
        args: Vec<Value>,
    ) -> Result<Value, InvocationError> {
        let handler = self
            .entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, h)| *h)
            .ok_or_else(|| InvocationError::UnknownMethod(name.to_string()))?;
        handler(target, args)
    }
}

impl<T> Default for MethodTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch positional argument `index` as an `i64`.
pub fn arg_i64(args: &[Value], index: usize) -> Result<i64, InvocationError> {
    args.get(index)
        .and_then(Value::as_i64)
        .ok_or_else(|| InvocationError::InvalidArguments(format!("argument {} must be an integer", index)))
}

/// Fetch positional argument `index` as a string slice.
pub fn arg_str(args: &[Value], index: usize) -> Result<&str, InvocationError> {
    args.get(index)
        .and_then(Value::as_str)
        .ok_or_else(|| InvocationError::InvalidArguments(format!("argument {} must be a string", index)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Counter {
        count: i64,
    }

    impl Counter {
        fn table() -> MethodTable<Self> {
            MethodTable::<Self>::new()
                .method("add", |c, args| {
                    c.count += arg_i64(&args, 0)?;
                    Ok(json!(c.count))
                })
                .method("reset", |c, _| {
                    c.count = 0;
                    Ok(Value::Null)
                })
        }
    }

    impl MethodIntrospectable for Counter {
        fn public_methods(&self) -> Vec<String> {
            Self::table().names()
        }

        fn invoke(&mut self, method: &str, args: Vec<Value>) -> Result<Value, InvocationError> {
            Self::table().invoke(self, method, args)
        }
    }

    struct Opaque;

    impl MethodIntrospectable for Opaque {
        fn public_methods(&self) -> Vec<String> {
            Vec::new()
        }

        fn invoke(&mut self, method: &str, _args: Vec<Value>) -> Result<Value, InvocationError> {
            Err(InvocationError::UnknownMethod(method.to_string()))
        }
    }

    #[test]
    fn test_lists_methods_in_registration_order() {
        let counter = Counter { count: 0 };
        assert_eq!(list_public_methods(&counter), vec!["add", "reset"]);
    }

    #[test]
    fn test_empty_surface_is_not_an_error() {
        assert!(list_public_methods(&Opaque).is_empty());
    }

    #[test]
    fn test_table_invoke() {
        let mut counter = Counter { count: 1 };
        let result = counter.invoke("add", vec![json!(4)]).unwrap();
        assert_eq!(result, json!(5));
        assert!(matches!(
            counter.invoke("add", vec![json!("x")]),
            Err(InvocationError::InvalidArguments(_))
        ));
        assert!(matches!(
            counter.invoke("missing", vec![]),
            Err(InvocationError::UnknownMethod(_))
        ));
    }

    #[test]
    fn test_duplicate_registration_keeps_position() {
        let table = MethodTable::<Counter>::new()
            .method("a", |_, _| Ok(json!(1)))
            .method("b", |_, _| Ok(json!(2)))
            .method("a", |_, _| Ok(json!(3)));
        assert_eq!(table.names(), vec!["a", "b"]);
        let mut counter = Counter { count: 0 };
        assert_eq!(table.invoke(&mut counter, "a", vec![]).unwrap(), json!(3));
    }

    #[test]
    fn test_default_fallback_is_absent() {
        let mut counter = Counter { count: 0 };
        assert!(!counter.has_fallback_handler());
        assert!(matches!(
            counter.invoke_fallback("x", vec![]),
            Err(InvocationError::NoFallback(_))
        ));
    }

    struct Hooked;

    impl Hooked {
        fn table() -> MethodTable<Self> {
            MethodTable::<Self>::new().method("__call", |_, args| {
                Ok(json!({ "name": arg_str(&args, 0)?, "args": args[1] }))
            })
        }
    }

    impl MethodIntrospectable for Hooked {
        fn public_methods(&self) -> Vec<String> {
            Self::table().names()
        }

        fn invoke(&mut self, method: &str, args: Vec<Value>) -> Result<Value, InvocationError> {
            Self::table().invoke(self, method, args)
        }
    }

    #[test]
    fn test_declared_hook_is_the_fallback() {
        let mut hooked = Hooked;
        assert!(hooked.has_fallback_handler());
        let result = hooked.invoke_fallback("missing", vec![json!(1), json!(2)]).unwrap();
        assert_eq!(result, json!({ "name": "missing", "args": [1, 2] }));
    }

    #[test]
    fn test_short_name() {
        assert_eq!(short_name("app::ui::Widget"), "Widget");
        assert_eq!(short_name("Widget"), "Widget");
        assert_eq!(short_name("App\\Ui\\Widget"), "Widget");
        assert_eq!(short_name("app::Holder<app::Inner>"), "Holder");
    }

    #[test]
    fn test_default_qualified_name() {
        let counter = Counter { count: 0 };
        assert_eq!(short_name(&counter.qualified_name()), "Counter");
    }
}
