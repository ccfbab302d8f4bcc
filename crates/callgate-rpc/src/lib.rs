//! Callgate RPC — JSON-RPC 2.0 bridge over a single callable object.
//!
//! The generated client stubs send a class/method pair; this crate accepts
//! the same pair as a JSON-RPC call name and dispatches it through
//! [`callgate_core::CallableObject::call`]. It has no transport of its own.
//!
//! | Request                                   | Outcome                          |
//! |-------------------------------------------|----------------------------------|
//! | `app.Widget.render` with `[1, 2]`         | result of `render(1, 2)`         |
//! | `app.Widget.missing`, no fallback         | `METHOD_NOT_FOUND`               |
//! | `Other.render`                            | `METHOD_NOT_FOUND`               |
//! | params given as an object                 | `INVALID_PARAMS`                 |
//! | a batch (JSON array)                      | `INVALID_REQUEST`                |

pub mod error;
pub mod router;
pub mod types;

pub use error::RpcError;
pub use router::CallableRouter;
pub use types::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, INTERNAL_ERROR, INVALID_PARAMS,
    INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
};
