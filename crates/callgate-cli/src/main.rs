//! Callgate CLI — inspect and exercise a callable object from the shell.
//!
//! Serves the built-in demo calculator so the generated stubs, request
//! descriptors, and dispatch path can be checked without a host application.

use clap::{Parser, Subcommand};

use callgate_cli::commands;

/// Callgate CLI — expose object methods as remote calls
#[derive(Parser)]
#[command(name = "callgate", version, about = "Callgate CLI — expose object methods as remote calls")]
pub struct Cli {
    /// Path to a YAML or JSON callable configuration file
    #[arg(long, env = "CALLGATE_CONFIG")]
    config: Option<String>,

    /// Prefix prepended to generated client names
    #[arg(long, default_value = "xajax_")]
    prefix: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the client stub script
    Script,

    /// Print request descriptors for exposed methods
    Requests,

    /// List exposed and hidden methods
    Methods,

    /// Send a raw JSON-RPC request to the object
    Rpc {
        /// Call name (e.g. "Calculator.add")
        #[arg(long)]
        method: String,
        /// Positional params as a JSON array
        #[arg(long, default_value = "[]")]
        params: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "callgate_core=warn,callgate_rpc=warn,callgate_cli=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = commands::init_object(cli.config.as_deref()).and_then(|object| match cli.command {
        Commands::Script => commands::script::run(&object, &cli.prefix),
        Commands::Requests => commands::requests::run(&object, &cli.prefix),
        Commands::Methods => commands::methods::run(&object),
        Commands::Rpc { method, params } => commands::rpc::call(object, &method, &params),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
