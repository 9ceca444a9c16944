//! Build automation for the Muon support libraries.
//!
//! Usage:
//!   cargo xtask test                 - Run host-side tests for all crates
//!   cargo xtask check                - Type-check the workspace
//!   cargo xtask check --freestanding - Also type-check the engine for a bare metal target
//!   cargo xtask clippy               - Run clippy lints
//!   cargo xtask doc                  - Generate documentation

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use xshell::{Shell, cmd};

/// Crates that compile and pass tests on the host toolchain.
const HOST_TESTABLE_CRATES: &[&str] = &["muon-mem"];

/// Bare metal target used to prove the engine builds without std.
const FREESTANDING_TARGET: &str = "x86_64-unknown-none";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for the Muon support libraries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run host-side tests
    Test {
        /// Package to test (default: every host-testable crate)
        #[arg(short, long)]
        package: Option<String>,
    },

    /// Type-check the workspace
    Check {
        /// Also type-check the engine crates for a bare metal target
        #[arg(long)]
        freestanding: bool,
    },

    /// Run clippy lints on the workspace
    Clippy,

    /// Generate documentation for the library crates
    Doc {
        /// Open documentation in browser after building
        #[arg(long)]
        open: bool,
    },
}

fn workspace_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask manifest has no parent directory")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;
    sh.change_dir(workspace_root()?);

    match cli.command {
        Commands::Test { package } => {
            let packages: Vec<&str> = match &package {
                Some(name) => vec![name.as_str()],
                None => HOST_TESTABLE_CRATES.to_vec(),
            };
            for crate_name in packages {
                println!("Testing {crate_name}...");
                cmd!(sh, "cargo test -p {crate_name}")
                    .run()
                    .map_err(|e| anyhow::anyhow!("cargo test -p {crate_name} failed: {e}"))?;
            }
            println!("All host-side tests passed.");
        }

        Commands::Check { freestanding } => {
            cmd!(sh, "cargo check --workspace").run()?;
            if freestanding {
                for crate_name in HOST_TESTABLE_CRATES {
                    println!("Checking {crate_name} for {FREESTANDING_TARGET}...");
                    cmd!(
                        sh,
                        "cargo check -p {crate_name} --target {FREESTANDING_TARGET}"
                    )
                    .run()?;
                }
            }
        }

        Commands::Clippy => {
            cmd!(sh, "cargo clippy --workspace --all-targets").run()?;
        }

        Commands::Doc { open } => {
            let mut args: Vec<String> = vec![
                "doc".into(),
                "--workspace".into(),
                "--exclude".into(),
                "xtask".into(),
            ];
            if open {
                args.push("--open".into());
            }
            cmd!(sh, "cargo {args...}").run()?;
        }
    }

    Ok(())
}
