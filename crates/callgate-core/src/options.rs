//! Per-method call options.
//!
//! Options are keyed by lowercase method name, or `*` for options applied to
//! every stub. Values are expression fragments emitted verbatim into the
//! generated client script, so `"true"`, `"10"`, and `"'async'"` are all
//! meaningful and distinct.

/// Method key whose options apply to every method.
pub const WILDCARD: &str = "*";

/// Insertion-ordered option name → value list for one method.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    entries: Vec<(String, String)>,
}

impl OptionSet {
    /// Set an option. An existing option keeps its position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All configured call options for one callable object.
#[derive(Debug, Clone, Default)]
pub struct MethodOptions {
    methods: Vec<(String, OptionSet)>,
}

impl MethodOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `method` (case-insensitive) and `name`.
    pub fn set(&mut self, method: &str, name: impl Into<String>, value: impl Into<String>) {
        let key = method.to_lowercase();
        let idx = match self.methods.iter().position(|(m, _)| *m == key) {
            Some(idx) => idx,
            None => {
                self.methods.push((key, OptionSet::default()));
                self.methods.len() - 1
            }
        };
        self.methods[idx].1.set(name, value);
    }

    /// Options configured for `method` itself, without wildcard ones.
    pub fn for_method(&self, method: &str) -> Option<&OptionSet> {
        let key = method.to_lowercase();
        self.methods
            .iter()
            .find(|(m, _)| *m == key)
            .map(|(_, set)| set)
    }

    pub fn wildcard(&self) -> Option<&OptionSet> {
        self.for_method(WILDCARD)
    }

    /// Wildcard options followed by method-specific ones.
    ///
    /// Both are yielded even when a name repeats; the later entry wins at the
    /// receiving call site.
    pub fn merged<'a>(&'a self, method: &str) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        let wildcard = self.wildcard().into_iter().flat_map(OptionSet::iter);
        let specific = if method == WILDCARD {
            None
        } else {
            self.for_method(method)
        };
        wildcard.chain(specific.into_iter().flat_map(OptionSet::iter))
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
