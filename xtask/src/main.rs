//! Workspace tasks: regenerate the options JSON schema and write the default
//! options preset.
//!
//! ```text
//! cargo run -p camrig-xtask -- schema --out assets/options.schema.json
//! cargo run -p camrig-xtask -- preset --out assets/presets/default.toml
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use camrig::options::Options;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "xtask")]
#[command(about = "camrig workspace tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand, Debug)]
enum Task {
    /// Write the JSON schema describing the options file.
    Schema {
        /// Destination file.
        #[arg(long, default_value = "options.schema.json")]
        out: PathBuf,
    },
    /// Write the default options as a TOML preset.
    Preset {
        /// Destination file.
        #[arg(long, default_value = "default.toml")]
        out: PathBuf,
    },
}

fn write_schema(out: &Path) -> anyhow::Result<()> {
    let schema = serde_json::to_string_pretty(&Options::json_schema())
        .context("serializing options schema")?;
    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(out, schema + "\n")
        .with_context(|| format!("writing {}", out.display()))?;
    log::info!("wrote options schema to {}", out.display());
    Ok(())
}

fn write_preset(out: &Path) -> anyhow::Result<()> {
    Options::default()
        .save(out)
        .with_context(|| format!("writing {}", out.display()))?;
    log::info!("wrote default preset to {}", out.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    match Cli::parse().task {
        Task::Schema { out } => write_schema(&out),
        Task::Preset { out } => write_preset(&out),
    }
}
