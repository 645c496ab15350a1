// tools/fork_demo/src/host.rs
use crate::console::{self, Line};
use crate::process::{self, Branch};
use crate::program::{Effect, Machine, Op, Stage};
use crate::thread;

/// Name given to the thread spawned by [`Effect::Worker`]
pub const WORKER_NAME: &str = "worker";

/// Ce que le programme demande au système
pub trait Host {
    /// Print the identity line of the current process
    fn report(&mut self, stage: Stage);

    /// Duplicate the current process. Failures come back as [`Branch::Failed`].
    fn fork(&mut self) -> Branch;

    /// Run a thread that prints its identity line and wait for it
    fn worker(&mut self, stage: Stage);
}

/// Exécute le programme jusqu'au bout
///
/// After a successful fork this returns once in each process.
pub fn run<H: Host>(program: &[Op], host: &mut H) {
    let mut machine = Machine::new(program);

    while let Some(effect) = machine.next_effect() {
        match effect {
            Effect::Report(stage) => host.report(stage),
            Effect::Fork => {
                let branch = host.fork();
                machine.forked(branch);
            }
            Effect::Worker(stage) => host.worker(stage),
        }
    }
}

/// The real host: fork(2), a pthread, and stdout.
///
/// Every failure is logged at debug level and otherwise dropped, so a failing
/// call only ever shows up as missing output.
#[derive(Debug, Default)]
pub struct System;

impl Host for System {
    fn report(&mut self, stage: Stage) {
        let line = Line::Process {
            stage,
            info: process::current(),
        };
        if let Err(e) = console::emit(&line) {
            log::debug!("{} line dropped: {}", stage.tag(), e);
        }
    }

    fn fork(&mut self) -> Branch {
        match process::fork() {
            Ok(branch) => {
                log::debug!("pid {}: fork -> {:?}", process::current().pid, branch);
                branch
            }
            Err(e) => {
                log::debug!("{}, continuing without a copy", e);
                Branch::Failed
            }
        }
    }

    fn worker(&mut self, stage: Stage) {
        let spawned = thread::spawn_and_join(WORKER_NAME, move || {
            let line = Line::Thread {
                stage,
                pid: process::current().pid,
                tid: thread::current_id(),
            };
            if let Err(e) = console::emit(&line) {
                log::debug!("{} line dropped: {}", stage.tag(), e);
            }
        });

        match spawned {
            Ok(()) => log::debug!("thread `{}` joined", WORKER_NAME),
            Err(e) => log::debug!("{}", e),
        }
    }
}
