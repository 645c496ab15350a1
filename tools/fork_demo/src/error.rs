// tools/fork_demo/src/error.rs
use std::io;

use thiserror::Error;

/// Type de résultat standard pour fork-demo
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the OS calls the demo makes.
///
/// None of these reach stdout or the exit status: the host logs them and
/// carries on as if the call had produced no copy, thread or line.
#[derive(Debug, Error)]
pub enum Error {
    /// fork(2) refused to duplicate the process
    #[error("fork failed: {0}")]
    Fork(#[source] nix::Error),

    /// The worker thread could not be created
    #[error("failed to spawn thread `{name}`: {source}")]
    Spawn {
        name: &'static str,
        #[source]
        source: io::Error,
    },

    /// The worker thread panicked before it could be joined cleanly
    #[error("thread `{0}` panicked")]
    Join(&'static str),

    /// Writing a line to stdout failed
    #[error("failed to write to stdout: {0}")]
    Write(#[source] io::Error),
}
