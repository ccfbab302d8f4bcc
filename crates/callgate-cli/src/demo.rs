//! Built-in demo object served by the CLI.

use serde_json::{json, Value};

use callgate_core::introspect::{arg_i64, MethodTable};
use callgate_core::{InvocationError, MethodIntrospectable};

/// A small integer calculator with a memory register.
#[derive(Debug, Default)]
pub struct Calculator {
    memory: i64,
}

impl Calculator {
    fn table() -> MethodTable<Self> {
        MethodTable::<Self>::new()
            .method("__construct", |_, _| Ok(Value::Null))
            .method("Calculator", |_, _| Ok(Value::Null))
            .method("add", |_, args| binary(&args, i64::checked_add))
            .method("subtract", |_, args| binary(&args, i64::checked_sub))
            .method("multiply", |_, args| binary(&args, i64::checked_mul))
            .method("divide", |_, args| {
                if arg_i64(&args, 1)? == 0 {
                    return Err(InvocationError::Failed("division by zero".into()));
                }
                binary(&args, i64::checked_div)
            })
            .method("store", |calc, args| {
                calc.memory = arg_i64(&args, 0)?;
                Ok(json!(calc.memory))
            })
            .method("recall", |calc, _| Ok(json!(calc.memory)))
    }

    pub fn memory(&self) -> i64 {
        self.memory
    }
}

/// Apply `op` to the first two integer arguments, failing on overflow.
fn binary(args: &[Value], op: fn(i64, i64) -> Option<i64>) -> Result<Value, InvocationError> {
    op(arg_i64(args, 0)?, arg_i64(args, 1)?)
        .map(|n| json!(n))
        .ok_or_else(|| InvocationError::Failed("overflow".into()))
}

impl MethodIntrospectable for Calculator {
    fn qualified_name(&self) -> std::borrow::Cow<'static, str> {
        "callgate::demo::Calculator".into()
    }

    fn public_methods(&self) -> Vec<String> {
        Self::table().names()
    }

    fn has_method(&self, method: &str) -> bool {
        Self::table().contains(method)
    }

    fn invoke(&mut self, method: &str, args: Vec<Value>) -> Result<Value, InvocationError> {
        Self::table().invoke(self, method, args)
    }
}
