//! `callgate script` — Print the client stub script.

use callgate_core::{CallableObject, MethodIntrospectable};

pub fn render<T: MethodIntrospectable>(object: &CallableObject<T>, prefix: &str) -> String {
    object.generate_client_script(prefix)
}

pub fn run<T: MethodIntrospectable>(object: &CallableObject<T>, prefix: &str) -> Result<(), String> {
    print!("{}", render(object, prefix));
    Ok(())
}
