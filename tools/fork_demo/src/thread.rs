// tools/fork_demo/src/thread.rs
use std::thread;

use crate::error::{Error, Result};

/// ID de thread
///
/// The raw `pthread_t` of the thread. Only meaningful inside the owning
/// process and while the thread is alive.
pub type Tid = u64;

/// Obtient l'ID du thread courant
pub fn current_id() -> Tid {
    // SAFETY: pthread_self has no preconditions and always succeeds.
    let raw = unsafe { nix::libc::pthread_self() };
    raw as usize as Tid
}

/// Lance `f` dans un nouveau thread et attend sa fin
///
/// The caller stays blocked for the whole lifetime of the thread, so the
/// process is single-threaded again once this returns.
pub fn spawn_and_join<F>(name: &'static str, f: F) -> Result<()>
where
    F: FnOnce() + Send + 'static,
{
    let handle = thread::Builder::new()
        .name(name.to_string())
        .spawn(f)
        .map_err(|source| Error::Spawn { name, source })?;

    log::trace!("spawned thread `{}`", name);

    handle.join().map_err(|_| Error::Join(name))
}
