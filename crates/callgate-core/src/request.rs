//! Request descriptors.
//!
//! A `Request` names one remotely invocable method by its fully qualified
//! call target (`prefix + classpath + Class + "." + method`). Server-side code
//! uses it to render links or inline calls to the generated stubs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A positional argument baked into a rendered request call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum RequestParameter {
    /// A string literal, rendered single-quoted.
    Quoted(String),
    /// A number, rendered as-is.
    Numeric(f64),
    /// A raw client-side expression, rendered verbatim.
    Js(String),
}

impl fmt::Display for RequestParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestParameter::Quoted(s) => {
                f.write_str("'")?;
                for c in s.chars() {
                    match c {
                        '\'' => f.write_str("\\'")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        _ => write!(f, "{}", c)?,
                    }
                }
                f.write_str("'")
            }
            RequestParameter::Numeric(n) => write!(f, "{}", n),
            RequestParameter::Js(expr) => f.write_str(expr),
        }
    }
}

/// Descriptor for one exposed method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    target: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    parameters: Vec<RequestParameter>,
}

impl Request {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            parameters: Vec::new(),
        }
    }

    /// The fully qualified call target.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn parameters(&self) -> &[RequestParameter] {
        &self.parameters
    }

    pub fn add_parameter(&mut self, parameter: RequestParameter) -> &mut Self {
        self.parameters.push(parameter);
        self
    }

    pub fn clear_parameters(&mut self) {
        self.parameters.clear();
    }

    /// Render as a client-side call expression, e.g. `app.Widget.render('a', 2)`.
    pub fn script(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.target)?;
        for (i, p) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", p)?;
        }
        f.write_str(")")
    }
}
