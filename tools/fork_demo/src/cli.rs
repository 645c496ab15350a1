// tools/fork_demo/src/cli.rs
use clap::Parser;

/// Prints PID/PPID at each stage of a small fork tree, plus the TID of one
/// worker thread per process that reaches it.
///
/// Debug output goes to stderr and is enabled with `RUST_LOG=debug`.
#[derive(Debug, Parser)]
#[command(name = "fork-demo", version, about, long_about = None, ignore_errors = true)]
pub struct Cli {}
