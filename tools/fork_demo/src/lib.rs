//! # fork-demo
//!
//! Shows how process identity evolves across nested `fork(2)` calls and what
//! a spawned thread observes.
//!
//! ```text
//!  START ── fork ──┬── (original) ───────────────────── fork ─┬─ FINAL
//!                  │                                          └─ FINAL
//!                  └── (copy) CHILD1 ── fork ─┬─ CHILD2 ─ THREAD ─ fork ─┬─ FINAL
//!                                             │                          └─ FINAL
//!                                             └─ CHILD2 ─ THREAD ─ fork ─┬─ FINAL
//!                                                                        └─ FINAL
//! ```
//!
//! The flow is the [`PROGRAM`] op list. [`run`] executes it against a
//! [`Host`] ([`System`] for the real thing) and [`Census`] enumerates the
//! processes it creates without forking.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fork_demo::{run, System, PROGRAM};
//!
//! run(PROGRAM, &mut System);
//! ```

pub mod census;
pub mod cli;
pub mod console;
pub mod error;
pub mod host;
pub mod process;
pub mod program;
pub mod thread;

pub use census::{Census, Trace};
pub use cli::Cli;
pub use console::Line;
pub use error::{Error, Result};
pub use host::{run, Host, System};
pub use process::{Branch, Pid, ProcessInfo};
pub use program::{Effect, Machine, Op, Stage, PROGRAM};
pub use thread::Tid;
