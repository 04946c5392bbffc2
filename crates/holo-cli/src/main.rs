//! `holo` command-line entry point.
//!
//! # Usage
//!
//! ```bash
//! holo encode --label cat --dim 512 > cat.json
//! holo encode --label agent --dim 512 > agent.json
//! holo bind agent.json cat.json > bound.json
//! holo unbind bound.json agent.json > recovered.json
//! holo similarity recovered.json cat.json
//! ```

use tracing_subscriber::EnvFilter;

fn main() {
    // stdout carries JSON results; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = holo_cli::parse_args(&args).and_then(|invocation| holo_cli::run(&invocation));

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("ERROR: {e}");
            eprintln!("Use --help for usage.");
            std::process::exit(1);
        }
    }
}
