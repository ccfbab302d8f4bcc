//! RPC error type that bridges `InvocationError` to JSON-RPC errors.

use callgate_core::InvocationError;

use crate::types;

#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Invocation(#[from] InvocationError),
}

impl RpcError {
    /// Convert to a JSON-RPC error code.
    pub fn code(&self) -> i64 {
        match self {
            RpcError::MethodNotFound(_) => types::METHOD_NOT_FOUND,
            RpcError::InvalidParams(_) => types::INVALID_PARAMS,
            RpcError::BadRequest(_) => types::INVALID_REQUEST,
            RpcError::Invocation(InvocationError::InvalidArguments(_)) => types::INVALID_PARAMS,
            RpcError::Invocation(InvocationError::UnknownMethod(_))
            | RpcError::Invocation(InvocationError::NoFallback(_)) => types::METHOD_NOT_FOUND,
            RpcError::Invocation(InvocationError::Failed(_)) => types::INTERNAL_ERROR,
        }
    }

    /// Convert to a JSON-RPC error response.
    pub fn to_response(&self, id: Option<serde_json::Value>) -> types::JsonRpcResponse {
        types::JsonRpcResponse::error(id, self.code(), self.to_string())
    }
}
