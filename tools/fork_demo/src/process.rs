// tools/fork_demo/src/process.rs
use std::io::{self, Write};

use nix::unistd::{self, ForkResult};

use crate::error::{Error, Result};

/// ID de processus
pub type Pid = i32;

/// Informations sur un processus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessInfo {
    pub pid: Pid,
    pub parent_pid: Pid,
}

/// Obtient les informations sur le processus courant
pub fn current() -> ProcessInfo {
    ProcessInfo {
        pid: unistd::getpid().as_raw(),
        parent_pid: unistd::getppid().as_raw(),
    }
}

/// Côté d'un fork dans lequel se trouve l'appelant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Processus d'origine, `child` est le PID de la copie
    Parent { child: Pid },
    /// La copie fraîchement créée
    Child,
    /// Le fork a échoué : aucune copie, on continue comme l'original
    Failed,
}

impl Branch {
    /// `true` uniquement dans la copie
    pub fn is_child(self) -> bool {
        matches!(self, Branch::Child)
    }
}

/// Duplique le processus courant
///
/// Must only be called while the process has a single thread.
pub fn fork() -> Result<Branch> {
    // Anything left in the buffer would be written again by the copy.
    if let Err(e) = io::stdout().flush() {
        log::debug!("stdout flush before fork failed: {}", e);
    }

    // SAFETY: the demo never forks while another thread is alive, so the
    // child cannot inherit a lock held by a thread that no longer exists.
    match unsafe { unistd::fork() } {
        Ok(ForkResult::Parent { child }) => Ok(Branch::Parent {
            child: child.as_raw(),
        }),
        Ok(ForkResult::Child) => Ok(Branch::Child),
        Err(errno) => Err(Error::Fork(errno)),
    }
}
