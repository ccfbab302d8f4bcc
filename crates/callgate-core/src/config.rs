//! Configuration documents for callable objects.
//!
//! A YAML (or JSON) document describing how one object is exposed:
//!
//! ```yaml
//! classpath: "app.ui"
//! excluded:
//!   - debugDump
//! tokens:
//!   entry: "xajax.request"
//! options:
//!   "*":
//!     mode: "'synchronous'"
//!   render:
//!     readonly: "true"
//! ```
//!
//! Applying a document routes every entry through
//! [`CallableObject::configure`], so the same rules hold as for direct calls.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::callable::{CallableObject, ConfigValue, OPTION_CLASSPATH, OPTION_EXCLUDED};
use crate::error::ConfigError;
use crate::introspect::MethodIntrospectable;
use crate::options::WILDCARD;
use crate::script::ScriptTokens;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallableConfig {
    /// Dotted namespace placed before the class name.
    #[serde(default)]
    pub classpath: Option<String>,

    /// Methods never exposed to clients.
    #[serde(default)]
    pub excluded: Option<Vec<String>>,

    /// Transport identifiers used in generated stubs.
    #[serde(default)]
    pub tokens: Option<ScriptTokens>,

    /// Method name (or `*`) → option name → expression text, in document
    /// order.
    #[serde(default)]
    pub options: Ordered<Ordered<OptionValue>>,
}

/// A string-keyed map that keeps the order its entries were written in.
#[derive(Debug, Clone, PartialEq)]
pub struct Ordered<V> {
    entries: Vec<(String, V)>,
}

impl<V> Ordered<V> {
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for Ordered<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V: Serialize> Serialize for Ordered<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Ordered<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedVisitor<V> {
            type Value = Ordered<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, V)> = Vec::new();
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    // A repeated key replaces the value in place.
                    match entries.iter_mut().find(|(k, _)| *k == key) {
                        Some(entry) => entry.1 = value,
                        None => entries.push((key, value)),
                    }
                }
                Ok(Ordered { entries })
            }
        }

        deserializer.deserialize_map(OrderedVisitor(PhantomData))
    }
}

/// Option values may be written as YAML scalars; they are kept as the
/// expression text they spell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl OptionValue {
    pub fn to_expression(&self) -> String {
        match self {
            OptionValue::Bool(b) => b.to_string(),
            OptionValue::Number(n) => n.to_string(),
            OptionValue::Text(s) => s.clone(),
        }
    }
}

impl CallableConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from a file; `.json` files are parsed as JSON, anything else as YAML.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        if path.ends_with(".json") {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Apply this document to `object`.
    ///
    /// Wildcard options are applied before method-specific ones.
    pub fn apply<T: MethodIntrospectable>(&self, object: &mut CallableObject<T>) {
        if let Some(classpath) = &self.classpath {
            object.configure(WILDCARD, OPTION_CLASSPATH, classpath.as_str());
        }
        if let Some(excluded) = &self.excluded {
            object.configure(WILDCARD, OPTION_EXCLUDED, ConfigValue::List(excluded.clone()));
        }
        if let Some(tokens) = &self.tokens {
            object.set_tokens(tokens.clone());
        }

        let wildcard = self.options.get(WILDCARD).into_iter().map(|o| (WILDCARD, o));
        let specific = self.options.iter().filter(|(m, _)| *m != WILDCARD);
        for (method, options) in wildcard.chain(specific) {
            for (name, value) in options.iter() {
                object.configure(method, name, value.to_expression());
            }
        }
        tracing::debug!("[Config] Applied configuration to {}", object.name());
    }
}
