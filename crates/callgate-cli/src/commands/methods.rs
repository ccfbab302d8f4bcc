//! `callgate methods` — Show which methods are exposed and which are hidden.

use callgate_core::{CallableObject, MethodIntrospectable};
use serde_json::{json, Value};

use super::print_json;

pub fn summary<T: MethodIntrospectable>(object: &CallableObject<T>) -> Value {
    let exposed = object.exposed_methods();
    let hidden: Vec<String> = object
        .methods()
        .into_iter()
        .filter(|m| !exposed.contains(m))
        .collect();
    json!({
        "name": object.name(),
        "class": object.call_class(),
        "exposed": exposed,
        "hidden": hidden,
    })
}

pub fn run<T: MethodIntrospectable>(object: &CallableObject<T>) -> Result<(), String> {
    print_json(&summary(object));
    Ok(())
}
