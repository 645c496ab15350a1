// tools/fork_demo/src/console.rs
use std::fmt;
use std::io::{self, Write};

use crate::error::{Error, Result};
use crate::process::{Pid, ProcessInfo};
use crate::program::Stage;
use crate::thread::Tid;

/// Une ligne de sortie de la démo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// PID/PPID of the reporting process
    Process { stage: Stage, info: ProcessInfo },
    /// PID of the enclosing process and the reporting thread's handle
    Thread { stage: Stage, pid: Pid, tid: Tid },
}

impl Line {
    pub fn stage(&self) -> Stage {
        match *self {
            Line::Process { stage, .. } | Line::Thread { stage, .. } => stage,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Line::Process { stage, info } => {
                write!(
                    f,
                    "{}PID={}, PPID={}",
                    stage.prefix(),
                    info.pid,
                    info.parent_pid
                )?;
                if let Some(note) = stage.note() {
                    write!(f, " {}", note)?;
                }
                Ok(())
            }
            Line::Thread { stage, pid, tid } => {
                write!(f, "{}PID={}, TID={}", stage.prefix(), pid, tid)
            }
        }
    }
}

/// Écrit une ligne sur stdout
///
/// The whole line goes out in one write and is flushed immediately, so
/// nothing is left buffered when the process forks and a line from one
/// process is never split by another writer on the same pipe.
pub fn emit(line: &Line) -> Result<()> {
    let text = format!("{}\n", line);
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes()).map_err(Error::Write)?;
    out.flush().map_err(Error::Write)
}
