//! Callgate Core — expose an object's methods as a remote call surface.
//!
//! Wraps one object in a [`CallableObject`] registry, which:
//!
//! - lists the object's public methods through [`MethodIntrospectable`],
//! - filters them with the exposure [`policy`] (magic hooks, constructors,
//!   explicit exclusions),
//! - builds [`Request`] descriptors and client-side stub script for the
//!   exposed methods, carrying per-method call [`options`],
//! - dispatches inbound calls by name and appends the results to a
//!   [`ResponseSink`].
//!
//! Nothing here touches a transport. The `callgate-rpc` crate layers a
//! JSON-RPC 2.0 adapter on top.

pub mod callable;
pub mod config;
pub mod error;
pub mod introspect;
pub mod options;
pub mod policy;
pub mod request;
pub mod response;
pub mod script;

// Convenience re-exports
pub use callable::{CallableObject, ConfigValue, Dispatch};
pub use config::CallableConfig;
pub use error::{ConfigError, InvocationError};
pub use introspect::{MethodIntrospectable, MethodTable};
pub use request::{Request, RequestParameter};
pub use response::{ResponseManager, ResponseSink};
pub use script::ScriptTokens;
