//! Integration tests for the callgate-cli commands.
//!
//! These exercise the same code paths as the binary against the demo
//! calculator, with config files written to temporary directories.

use std::io::Write;

use callgate_cli::commands;
use serde_json::json;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp config");
    file
}

#[test]
fn test_methods_without_config() {
    let object = commands::init_object(None).unwrap();
    let summary = commands::methods::summary(&object);
    assert_eq!(summary["class"], "Calculator");
    assert_eq!(
        summary["exposed"],
        json!(["add", "subtract", "multiply", "divide", "store", "recall"])
    );
    assert_eq!(summary["hidden"], json!(["__construct", "Calculator"]));
}

#[test]
fn test_script_with_config() {
    let config = write_config(
        r#"
classpath: "tools"
excluded: [store, recall]
options:
  "*":
    mode: "'synchronous'"
  divide:
    readonly: true
"#,
    );
    let object = commands::init_object(config.path().to_str()).unwrap();
    let script = commands::script::render(&object, "xajax_");
    let lines: Vec<&str> = script.lines().collect();

    assert_eq!(lines[0], "xajax_tools.Calculator = {};");
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[1],
        "xajax_tools.Calculator.add = function() { return xajax.request( \
         { xjxcls: 'tools.Calculator', xjxmthd: 'add' }, \
         { parameters: arguments, mode: 'synchronous' } ); };"
    );
    assert!(lines[4].ends_with("{ parameters: arguments, mode: 'synchronous', readonly: true } ); };"));
    assert!(!script.contains("recall"));
}

#[test]
fn test_requests() {
    let object = commands::init_object(None).unwrap();
    let requests = commands::requests::collect(&object, "xajax_");
    assert_eq!(requests["add"]["target"], "xajax_Calculator.add");
    assert_eq!(requests["add"]["script"], "xajax_Calculator.add()");
    assert!(requests.get("calculator").is_none());
    assert_eq!(requests.as_object().unwrap().len(), 6);
}

#[test]
fn test_rpc_dispatch() {
    let object = commands::init_object(None).unwrap();
    let response = commands::rpc::invoke(object, "Calculator.multiply", "[6, 7]").unwrap();
    assert_eq!(response["result"], 42);
}

#[test]
fn test_rpc_method_error() {
    let object = commands::init_object(None).unwrap();
    let response = commands::rpc::invoke(object, "Calculator.divide", "[1, 0]").unwrap();
    assert_eq!(response["error"]["code"], callgate_rpc::INTERNAL_ERROR);
    assert_eq!(response["error"]["message"], "Method failed: division by zero");
}

#[test]
fn test_rpc_overflow_is_a_method_error() {
    let cases = [
        ("Calculator.add", format!("[{}, 1]", i64::MAX)),
        ("Calculator.subtract", format!("[{}, 1]", i64::MIN)),
        ("Calculator.multiply", format!("[{}, 2]", i64::MAX)),
        ("Calculator.divide", format!("[{}, -1]", i64::MIN)),
    ];
    for (method, params) in cases {
        let object = commands::init_object(None).unwrap();
        let response = commands::rpc::invoke(object, method, &params).unwrap();
        assert_eq!(response["error"]["code"], callgate_rpc::INTERNAL_ERROR, "{}", method);
        assert_eq!(response["error"]["message"], "Method failed: overflow", "{}", method);
    }
}

#[test]
fn test_rpc_invalid_params_json() {
    let object = commands::init_object(None).unwrap();
    let err = commands::rpc::invoke(object, "Calculator.add", "[1,").unwrap_err();
    assert!(err.starts_with("Invalid JSON params"));
}

#[test]
fn test_missing_config_file() {
    let err = commands::init_object(Some("/nonexistent/callgate.yaml")).unwrap_err();
    assert!(err.contains("Failed to read config file"));
}
