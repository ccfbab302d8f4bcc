//! CLI command implementations.
//!
//! Each submodule corresponds to a top-level CLI command. All of them work
//! on the built-in demo object, configured from an optional config file.

pub mod methods;
pub mod requests;
pub mod rpc;
pub mod script;

use callgate_core::{CallableConfig, CallableObject};

use crate::demo::Calculator;

/// Build the demo callable object, applying the config file when given.
pub fn init_object(config_path: Option<&str>) -> Result<CallableObject<Calculator>, String> {
    let mut object = CallableObject::new(Calculator::default());
    if let Some(path) = config_path {
        let config = CallableConfig::from_file(path).map_err(|e| e.to_string())?;
        config.apply(&mut object);
        tracing::info!("[Config] Loaded '{}'", path);
    }
    Ok(object)
}

/// Pretty-print a JSON value to stdout.
pub fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    );
}
