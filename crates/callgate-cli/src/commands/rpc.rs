//! `callgate rpc` — Raw JSON-RPC invocation against the demo object.

use callgate_core::{CallableObject, MethodIntrospectable};
use callgate_rpc::CallableRouter;
use serde_json::Value;

use super::print_json;

pub fn invoke<T: MethodIntrospectable>(
    object: CallableObject<T>,
    method: &str,
    params_str: &str,
) -> Result<Value, String> {
    let params: Value =
        serde_json::from_str(params_str).map_err(|e| format!("Invalid JSON params: {}", e))?;

    let mut router = CallableRouter::new(object);
    Ok(router.handle_value(serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": method,
        "params": params
    })))
}

pub fn call<T: MethodIntrospectable>(
    object: CallableObject<T>,
    method: &str,
    params_str: &str,
) -> Result<(), String> {
    let response = invoke(object, method, params_str)?;
    print_json(&response);
    Ok(())
}
