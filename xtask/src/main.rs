use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for touchform")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run fmt, clippy, tests, and doc, then replay the recorded scripts
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates
    Clippy,
    /// Run all tests
    Test,
    /// Build rustdoc for the workspace
    Doc,
    /// Run the interpreter benchmark
    Bench,
    /// Replay every script under scripts/ through the CLI
    Replay,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            fmt()?;
            clippy()?;
            test()?;
            doc()?;
            replay()?;
        }
        Commands::Fmt => fmt()?,
        Commands::Clippy => clippy()?,
        Commands::Test => test()?,
        Commands::Doc => doc()?,
        Commands::Bench => cargo("bench", &["bench", "-p", "touchform-kernel"])?,
        Commands::Replay => replay()?,
    }

    Ok(())
}

fn cargo(label: &str, args: &[&str]) -> Result<()> {
    println!("==> Running cargo {label}");
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("cargo {label} failed");
    }
    Ok(())
}

fn fmt() -> Result<()> {
    cargo("fmt --check", &["fmt", "--all", "--", "--check"])
}

fn clippy() -> Result<()> {
    cargo(
        "clippy",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
    )
}

fn test() -> Result<()> {
    cargo("test", &["test", "--workspace"])
}

fn doc() -> Result<()> {
    cargo("doc", &["doc", "--workspace", "--no-deps"])
}

/// Input scripts are any `scripts/*.yaml` with a top-level `frames:` key;
/// the rest are gesture configs.
fn replay() -> Result<()> {
    let mut scripts = Vec::new();
    for entry in std::fs::read_dir(Path::new("scripts"))? {
        let path = entry?.path();
        if path.extension().is_some_and(|e| e == "yaml")
            && std::fs::read_to_string(&path)?
                .lines()
                .any(|l| l.starts_with("frames:"))
        {
            scripts.push(path);
        }
    }
    scripts.sort();

    for script in &scripts {
        let script = script.to_string_lossy();
        cargo(
            &format!("replay {script}"),
            &["run", "-q", "-p", "touchform-cli", "--", "replay", &script],
        )?;
    }
    Ok(())
}
