//! sprite-labels binary
//!
//! Usage: sprite-labels [--config scene.toml] [--label TEXT]...

use clap::Parser;
use sprite_labels_shell::{Cli, ShellError};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = Cli::parse()
        .into_config()
        .map_err(ShellError::from)
        .and_then(sprite_labels_shell::run);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
