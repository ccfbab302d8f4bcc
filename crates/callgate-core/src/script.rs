//! Client stub emission.
//!
//! Each exposed method becomes one line of client script:
//!
//! ```text
//! xajax_app.Widget = {};
//! xajax_app.Widget.render = function() { return xajax.request( { xjxcls: 'app.Widget', xjxmthd: 'render' }, { parameters: arguments, readonly: true } ); };
//! ```
//!
//! Option values are expression text and are written without quoting or
//! escaping. No syntax validation happens here.

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::options::MethodOptions;

/// Fixed identifiers shared with the client-side transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptTokens {
    /// Function the stubs call to issue a remote request.
    pub entry: String,
    /// Key carrying the class in the call-target object.
    pub class_key: String,
    /// Key carrying the method in the call-target object.
    pub method_key: String,
}

impl Default for ScriptTokens {
    fn default() -> Self {
        Self {
            entry: "xajax.request".into(),
            class_key: "xjxcls".into(),
            method_key: "xjxmthd".into(),
        }
    }
}

/// Write the namespace line: `<ns> = {};`
pub fn write_namespace<W: Write>(out: &mut W, namespace: &str) -> fmt::Result {
    writeln!(out, "{} = {{}};", namespace)
}

/// Write one stub line for `method`.
///
/// `call_class` is the class value sent to the server (`classpath + Class`),
/// which differs from `namespace` by the caller's prefix.
pub fn write_stub<W: Write>(
    out: &mut W,
    tokens: &ScriptTokens,
    namespace: &str,
    call_class: &str,
    method: &str,
    options: &MethodOptions,
) -> fmt::Result {
    write!(out, "{}.{} = function() {{ ", namespace, method)?;
    write!(out, "return {}( ", tokens.entry)?;
    write!(
        out,
        "{{ {}: '{}', {}: '{}' }}, ",
        tokens.class_key, call_class, tokens.method_key, method
    )?;
    out.write_str("{ parameters: arguments")?;
    for (name, value) in options.merged(method) {
        write!(out, ", {}: {}", name, value)?;
    }
    out.write_str(" } ); ")?;
    out.write_str("};\n")
}
