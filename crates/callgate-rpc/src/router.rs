//! Transport-agnostic JSON-RPC 2.0 dispatcher for one callable object.
//!
//! Call names pair the class and method the generated stubs send:
//! `<classpath><Class>.<method>`. Params are positional and passed through to
//! the object unchanged.

use callgate_core::{CallableObject, Dispatch, MethodIntrospectable, ResponseManager};
use serde_json::Value;

use crate::error::RpcError;
use crate::types::*;

/// JSON-RPC front for a [`CallableObject`].
///
/// # Usage
///
/// ```ignore
/// let mut router = CallableRouter::new(CallableObject::new(Widget::default()));
///
/// let response_json = router.handle_request(
///     r#"{"jsonrpc":"2.0","id":1,"method":"Widget.render","params":[1,2]}"#,
/// );
/// ```
pub struct CallableRouter<T: MethodIntrospectable> {
    object: CallableObject<T>,
}

impl<T: MethodIntrospectable> CallableRouter<T> {
    pub fn new(object: CallableObject<T>) -> Self {
        Self { object }
    }

    pub fn object(&self) -> &CallableObject<T> {
        &self.object
    }

    pub fn object_mut(&mut self) -> &mut CallableObject<T> {
        &mut self.object
    }

    /// Handle a raw JSON string and return the serialized response.
    pub fn handle_request(&mut self, raw: &str) -> String {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                return serde_json::to_string(&JsonRpcResponse::error(
                    None,
                    PARSE_ERROR,
                    format!("Parse error: {}", e),
                ))
                .unwrap_or_default();
            }
        };

        let response = self.handle_value(value);
        serde_json::to_string(&response).unwrap_or_else(|_| {
            r#"{"jsonrpc":"2.0","error":{"code":-32603,"message":"Failed to serialize response"},"id":null}"#.into()
        })
    }

    /// Handle a pre-parsed `serde_json::Value`.
    pub fn handle_value(&mut self, value: Value) -> Value {
        if value.is_array() {
            return serde_json::to_value(
                RpcError::BadRequest("Batch requests are not supported".into()).to_response(None),
            )
            .unwrap_or_default();
        }

        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(req) => req,
            Err(e) => {
                return serde_json::to_value(JsonRpcResponse::error(
                    None,
                    INVALID_REQUEST,
                    format!("Invalid request: {}", e),
                ))
                .unwrap_or_default();
            }
        };

        let response = self.dispatch(request);
        serde_json::to_value(response).unwrap_or_default()
    }

    /// Dispatch a parsed JSON-RPC request to the wrapped object.
    pub fn dispatch(&mut self, req: JsonRpcRequest) -> JsonRpcResponse {
        if !req.has_valid_version() {
            return JsonRpcResponse::error(
                req.id,
                INVALID_REQUEST,
                "Invalid JSON-RPC version, expected \"2.0\"",
            );
        }

        let id = req.id.clone();
        match self.route(&req.method, req.params) {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(err) => {
                tracing::debug!("[RPC] {} failed: {}", req.method, err);
                err.to_response(id)
            }
        }
    }

    fn route(&mut self, call: &str, params: Option<Value>) -> Result<Value, RpcError> {
        let (class, method) = call
            .rsplit_once('.')
            .ok_or_else(|| RpcError::MethodNotFound(call.to_string()))?;
        if class != self.object.call_class() && !self.object.is_class(class) {
            return Err(RpcError::MethodNotFound(call.to_string()));
        }

        let args = parse_args(params)?;
        let mut responses = ResponseManager::new();
        match self.object.call(method, args, &mut responses)? {
            Dispatch::Skipped => Err(RpcError::MethodNotFound(call.to_string())),
            Dispatch::Invoked | Dispatch::Fallback => {
                Ok(responses.last().cloned().unwrap_or(Value::Null))
            }
        }
    }

    /// Call names for every exposed method.
    pub fn method_list(&self) -> Vec<String> {
        let class = self.object.call_class();
        self.object
            .exposed_methods()
            .into_iter()
            .map(|m| format!("{}.{}", class, m))
            .collect()
    }
}

/// Positional params only; omitted params mean no arguments.
fn parse_args(params: Option<Value>) -> Result<Vec<Value>, RpcError> {
    match params {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(args)) => Ok(args),
        Some(other) => Err(RpcError::InvalidParams(format!(
            "expected positional params array, got {}",
            other
        ))),
    }
}
