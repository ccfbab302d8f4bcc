//! Integration tests for `CallableRouter`, driving a small object through
//! raw JSON-RPC requests the way a transport would.

use callgate_core::introspect::{arg_i64, arg_str, MethodTable};
use callgate_core::{CallableObject, InvocationError, MethodIntrospectable};
use callgate_rpc::{CallableRouter, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR};
use serde_json::{json, Value};

#[derive(Default)]
struct Widget {
    greeted: Vec<String>,
}

impl Widget {
    fn table() -> MethodTable<Self> {
        MethodTable::<Self>::new()
            .method("render", |_, args| Ok(json!(arg_i64(&args, 0)? * arg_i64(&args, 1)?)))
            .method("greet", |w, args| {
                let name = arg_str(&args, 0)?.to_string();
                w.greeted.push(name.clone());
                Ok(json!(format!("hello {}", name)))
            })
            .method("secret", |_, _| Ok(json!("hidden")))
            .method("__construct", |_, _| Ok(Value::Null))
    }
}

impl MethodIntrospectable for Widget {
    fn qualified_name(&self) -> std::borrow::Cow<'static, str> {
        "app::ui::Widget".into()
    }

    fn public_methods(&self) -> Vec<String> {
        Self::table().names()
    }

    fn invoke(&mut self, method: &str, args: Vec<Value>) -> Result<Value, InvocationError> {
        Self::table().invoke(self, method, args)
    }
}

fn router() -> CallableRouter<Widget> {
    let mut object = CallableObject::new(Widget::default());
    object.configure("", "classpath", "app");
    object.configure("", "excluded", vec!["secret"]);
    CallableRouter::new(object)
}

fn call(router: &mut CallableRouter<Widget>, method: &str, params: Value) -> Value {
    router.handle_value(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": method,
        "params": params
    }))
}

#[test]
fn test_call_returns_method_result() {
    let mut router = router();
    let response = call(&mut router, "app.Widget.render", json!([6, 7]));
    assert_eq!(response["result"], json!(42));
    assert_eq!(response["id"], json!(1));
    assert!(response.get("error").is_none());
}

#[test]
fn test_call_mutates_target() {
    let mut router = router();
    call(&mut router, "app.Widget.greet", json!(["ada"]));
    assert_eq!(router.object().target().greeted, vec!["ada".to_string()]);
}

#[test]
fn test_qualified_class_is_accepted() {
    let mut router = router();
    let response = call(&mut router, "app::ui::Widget.render", json!([2, 3]));
    assert_eq!(response["result"], json!(6));
}

#[test]
fn test_missing_method() {
    let mut router = router();
    let response = call(&mut router, "app.Widget.missing", json!([]));
    assert_eq!(response["error"]["code"], json!(METHOD_NOT_FOUND));
}

#[test]
fn test_wrong_class() {
    let mut router = router();
    let response = call(&mut router, "Other.render", json!([1, 1]));
    assert_eq!(response["error"]["code"], json!(METHOD_NOT_FOUND));
    let response = call(&mut router, "render", json!([1, 1]));
    assert_eq!(response["error"]["code"], json!(METHOD_NOT_FOUND));
}

#[test]
fn test_excluded_method_still_dispatches() {
    let mut router = router();
    assert!(!router.method_list().contains(&"app.Widget.secret".to_string()));
    let response = call(&mut router, "app.Widget.secret", json!([]));
    assert_eq!(response["result"], json!("hidden"));
}

#[test]
fn test_bad_arguments_map_to_invalid_params() {
    let mut router = router();
    let response = call(&mut router, "app.Widget.render", json!(["x", 1]));
    assert_eq!(response["error"]["code"], json!(INVALID_PARAMS));
    let response = call(&mut router, "app.Widget.render", json!({ "a": 1 }));
    assert_eq!(response["error"]["code"], json!(INVALID_PARAMS));
}

#[test]
fn test_protocol_errors() {
    let mut router = router();
    let raw = router.handle_request("{ not json");
    let response: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(response["error"]["code"], json!(PARSE_ERROR));

    let response = router.handle_value(json!({ "jsonrpc": "1.0", "id": 2, "method": "app.Widget.render" }));
    assert_eq!(response["error"]["code"], json!(INVALID_REQUEST));

    let response = router.handle_value(json!([{ "jsonrpc": "2.0", "id": 3, "method": "app.Widget.render" }]));
    assert_eq!(response["error"]["code"], json!(INVALID_REQUEST));
}

#[test]
fn test_raw_request_round_trip() {
    let mut router = router();
    let raw = router.handle_request(r#"{"jsonrpc":"2.0","id":"a","method":"app.Widget.greet","params":["bob"]}"#);
    let response: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(response["result"], json!("hello bob"));
    assert_eq!(response["id"], json!("a"));
}

#[test]
fn test_method_list() {
    let router = router();
    assert_eq!(
        router.method_list(),
        vec!["app.Widget.render".to_string(), "app.Widget.greet".to_string()]
    );
}
