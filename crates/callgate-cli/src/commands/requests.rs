//! `callgate requests` — Print the request descriptor for each exposed method.

use callgate_core::{CallableObject, MethodIntrospectable};
use serde_json::{json, Map, Value};

use super::print_json;

/// Lowercase method name → call target and rendered call.
pub fn collect<T: MethodIntrospectable>(object: &CallableObject<T>, prefix: &str) -> Value {
    let targets: Map<String, Value> = object
        .generate_requests(prefix)
        .into_iter()
        .map(|(name, request)| {
            let entry = json!({ "target": request.target(), "script": request.script() });
            (name, entry)
        })
        .collect();
    Value::Object(targets)
}

pub fn run<T: MethodIntrospectable>(object: &CallableObject<T>, prefix: &str) -> Result<(), String> {
    print_json(&collect(object, prefix));
    Ok(())
}
