//! The callable object registry.
//!
//! `CallableObject` wraps one object and turns its public methods into a
//! remote surface: request descriptors and client stubs for the methods the
//! exposure policy allows, and name-based dispatch for inbound calls.
//!
//! # Example
//!
//! ```ignore
//! let mut object = CallableObject::new(Widget::default());
//! object.configure("", "classpath", "app.ui");
//! object.configure("*", "mode", "'synchronous'");
//!
//! let script = object.generate_client_script("xajax_");
//!
//! let mut responses = ResponseManager::new();
//! object.call("render", vec![json!(1), json!(2)], &mut responses)?;
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::error::InvocationError;
use crate::introspect::{self, MethodIntrospectable};
use crate::options::MethodOptions;
use crate::policy;
use crate::request::Request;
use crate::response::ResponseSink;
use crate::script::{self, ScriptTokens};

/// Separator appended to a configured classpath.
pub const CLASSPATH_SEPARATOR: char = '.';

/// Configuration option names intercepted by [`CallableObject::configure`].
pub const OPTION_CLASSPATH: &str = "classpath";
pub const OPTION_EXCLUDED: &str = "excluded";

/// A value passed to [`CallableObject::configure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Text(String),
    List(Vec<String>),
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Text(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Text(s)
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(list: Vec<String>) -> Self {
        ConfigValue::List(list)
    }
}

impl From<Vec<&str>> for ConfigValue {
    fn from(list: Vec<&str>) -> Self {
        ConfigValue::List(list.into_iter().map(String::from).collect())
    }
}

/// How an inbound call was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The declared method ran and its result was appended.
    Invoked,
    /// The fallback handler ran and its result was appended.
    Fallback,
    /// Nothing could handle the call; nothing was appended.
    Skipped,
}

/// Registry wrapping one callable object.
///
/// Not synchronized: configure it fully before sharing, and guard it
/// externally if several threads dispatch through it.
pub struct CallableObject<T: MethodIntrospectable> {
    target: T,
    qualified_name: Cow<'static, str>,
    classpath: String,
    excluded: Vec<String>,
    options: MethodOptions,
    tokens: ScriptTokens,
}

impl<T: MethodIntrospectable> CallableObject<T> {
    pub fn new(target: T) -> Self {
        let qualified_name = target.qualified_name();
        Self {
            target,
            qualified_name,
            classpath: String::new(),
            excluded: Vec::new(),
            options: MethodOptions::new(),
            tokens: ScriptTokens::default(),
        }
    }

    /// Qualified type name of the wrapped object.
    pub fn name(&self) -> &str {
        &self.qualified_name
    }

    /// Type name without its module path.
    pub fn class_name(&self) -> &str {
        introspect::short_name(&self.qualified_name)
    }

    /// Configured classpath, including its trailing separator when set.
    pub fn classpath(&self) -> &str {
        &self.classpath
    }

    /// Class value sent by the stubs: `classpath + Class`.
    pub fn call_class(&self) -> String {
        format!("{}{}", self.classpath, self.class_name())
    }

    pub fn excluded_methods(&self) -> &[String] {
        &self.excluded
    }

    pub fn options(&self) -> &MethodOptions {
        &self.options
    }

    pub fn tokens(&self) -> &ScriptTokens {
        &self.tokens
    }

    pub fn set_tokens(&mut self, tokens: ScriptTokens) {
        self.tokens = tokens;
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }

    /// Every public method of the wrapped object, exposed or not.
    pub fn methods(&self) -> Vec<String> {
        introspect::list_public_methods(&self.target)
    }

    /// Public methods that pass the exposure policy, in introspection order.
    pub fn exposed_methods(&self) -> Vec<String> {
        let class = self.class_name();
        self.methods()
            .into_iter()
            .filter(|m| policy::is_exposable(class, m, self.excluded.as_slice()))
            .collect()
    }

    /// Set a configuration or call option.
    ///
    /// `classpath` and `excluded` configure the registry itself; any other
    /// name becomes a call option for `method` (or every method when `method`
    /// is `*`). Values of the wrong shape are ignored.
    pub fn configure(&mut self, method: &str, name: &str, value: impl Into<ConfigValue>) {
        let value = value.into();
        match (name, value) {
            (OPTION_CLASSPATH, ConfigValue::Text(path)) => {
                if !path.is_empty() {
                    self.classpath = format!("{}{}", path, CLASSPATH_SEPARATOR);
                }
            }
            (OPTION_EXCLUDED, ConfigValue::List(list)) => {
                self.excluded = list;
            }
            (OPTION_CLASSPATH | OPTION_EXCLUDED, other) => {
                tracing::debug!(
                    "[Callable] Ignoring {} value of unexpected shape: {:?}",
                    name,
                    other
                );
            }
            (_, ConfigValue::Text(text)) => {
                self.options.set(method, name, text);
            }
            (_, ConfigValue::List(list)) => {
                tracing::debug!(
                    "[Callable] Ignoring list value for option '{}' on '{}': {:?}",
                    name,
                    method,
                    list
                );
            }
        }
    }

    /// Build one request descriptor per exposed method, keyed by lowercase
    /// method name.
    ///
    /// Methods whose names differ only by case collide; the later one in
    /// introspection order wins.
    pub fn generate_requests(&self, prefix: &str) -> BTreeMap<String, Request> {
        let class = self.class_name();
        let mut requests = BTreeMap::new();
        for method in self.exposed_methods() {
            let target = format!("{}{}{}.{}", prefix, self.classpath, class, method);
            tracing::trace!("[Callable] request {}", target);
            requests.insert(method.to_lowercase(), Request::new(target));
        }
        requests
    }

    /// Write the client stubs for every exposed method.
    pub fn write_client_script<W: fmt::Write>(&self, prefix: &str, out: &mut W) -> fmt::Result {
        let namespace = format!("{}{}{}", prefix, self.classpath, self.class_name());
        let call_class = self.call_class();
        script::write_namespace(out, &namespace)?;
        for method in self.exposed_methods() {
            tracing::trace!("[Callable] stub {}.{}", namespace, method);
            script::write_stub(out, &self.tokens, &namespace, &call_class, &method, &self.options)?;
        }
        Ok(())
    }

    /// The client stubs as a string.
    pub fn generate_client_script(&self, prefix: &str) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_client_script(prefix, &mut out);
        out
    }

    /// Whether `class` is the qualified name of the wrapped object.
    pub fn is_class(&self, class: &str) -> bool {
        self.qualified_name == class
    }

    /// Whether `method` is dispatchable: declared by the object, or
    /// handled by its fallback. Exposure policy does not apply here.
    pub fn has_method(&self, method: &str) -> bool {
        self.target.has_method(method) || self.target.has_fallback_handler()
    }

    /// Invoke `method` with positional `args` and append the result to `sink`.
    ///
    /// A call nothing can handle is skipped silently. Errors raised by the
    /// method are returned as-is and nothing is appended.
    pub fn call(
        &mut self,
        method: &str,
        args: Vec<Value>,
        sink: &mut dyn ResponseSink,
    ) -> Result<Dispatch, InvocationError> {
        if self.target.has_method(method) {
            let value = self.target.invoke(method, args)?;
            sink.append(value);
            return Ok(Dispatch::Invoked);
        }
        if self.target.has_fallback_handler() {
            let value = self.target.invoke_fallback(method, args)?;
            sink.append(value);
            return Ok(Dispatch::Fallback);
        }
        tracing::debug!(
            "[Callable] {} has no method '{}', skipping call",
            self.qualified_name,
            method
        );
        Ok(Dispatch::Skipped)
    }
}

impl<T: MethodIntrospectable> fmt::Debug for CallableObject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallableObject")
            .field("name", &self.qualified_name)
            .field("classpath", &self.classpath)
            .field("excluded", &self.excluded)
            .field("options", &self.options)
            .finish()
    }
}
