//! The demo flow as a tiny program of operations.
//!
//! Writing the flow down as data lets the same sequence be executed for real
//! by [`crate::host::run`] and enumerated offline by [`crate::census`], so
//! the expected output counts follow from where each fork sits rather than
//! from a fork-count formula.

use crate::process::Branch;

/// Stage label printed at the start of each line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Start,
    Child1,
    Child2,
    Thread,
    Final,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Start,
        Stage::Child1,
        Stage::Child2,
        Stage::Thread,
        Stage::Final,
    ];

    /// Bracketed tag, e.g. `[CHILD1]`
    pub fn tag(self) -> &'static str {
        match self {
            Stage::Start => "[START]",
            Stage::Child1 => "[CHILD1]",
            Stage::Child2 => "[CHILD2]",
            Stage::Thread => "[THREAD]",
            Stage::Final => "[FINAL]",
        }
    }

    /// Tag plus the column padding used on the console
    pub fn prefix(self) -> &'static str {
        match self {
            Stage::Start => "[START]    ",
            Stage::Child1 => "[CHILD1]  ",
            Stage::Child2 => "[CHILD2]  ",
            Stage::Thread => "[THREAD]   ",
            Stage::Final => "[FINAL]    ",
        }
    }

    /// Trailing remark, if the stage has one
    pub fn note(self) -> Option<&'static str> {
        match self {
            Stage::Child1 => Some("(after first fork)"),
            Stage::Child2 => Some("(after second fork)"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Print the process identity line for a stage
    Report(Stage),
    /// Duplicate the process. Only a captured result is visible to
    /// [`Op::SkipUnlessChild`].
    Fork { capture: bool },
    /// Skip the next `n` ops unless the last captured fork returned in the copy
    SkipUnlessChild(usize),
    /// Spawn a thread that prints the stage line, then join it
    Worker(Stage),
}

/// START, fork (kept), [CHILD1, fork, CHILD2, worker] in the copy only,
/// then one more fork in every process and FINAL.
pub const PROGRAM: &[Op] = &[
    Op::Report(Stage::Start),
    Op::Fork { capture: true },
    Op::SkipUnlessChild(4),
    Op::Report(Stage::Child1),
    Op::Fork { capture: false },
    Op::Report(Stage::Child2),
    Op::Worker(Stage::Thread),
    Op::Fork { capture: false },
    Op::Report(Stage::Final),
];

/// Something the host has to do for the machine to make progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Report(Stage),
    Fork,
    Worker(Stage),
}

/// Resumable interpreter over a program.
///
/// After an [`Effect::Fork`] the driver must hand the outcome back through
/// [`Machine::forked`] before asking for the next effect.
#[derive(Debug, Clone)]
pub struct Machine<'p> {
    program: &'p [Op],
    pc: usize,
    captured: Option<Branch>,
    pending_capture: Option<bool>,
}

impl<'p> Machine<'p> {
    pub fn new(program: &'p [Op]) -> Self {
        Machine {
            program,
            pc: 0,
            captured: None,
            pending_capture: None,
        }
    }

    /// Advance to the next effect, or `None` once the program has ended
    pub fn next_effect(&mut self) -> Option<Effect> {
        debug_assert!(
            self.pending_capture.is_none(),
            "fork outcome was not recorded"
        );

        loop {
            let op = *self.program.get(self.pc)?;
            self.pc += 1;

            match op {
                Op::Report(stage) => return Some(Effect::Report(stage)),
                Op::Worker(stage) => return Some(Effect::Worker(stage)),
                Op::Fork { capture } => {
                    self.pending_capture = Some(capture);
                    return Some(Effect::Fork);
                }
                Op::SkipUnlessChild(n) => {
                    if !self.captured.is_some_and(Branch::is_child) {
                        self.pc = self.pc.saturating_add(n);
                    }
                }
            }
        }
    }

    /// Record the outcome of the fork just returned by [`Machine::next_effect`]
    pub fn forked(&mut self, branch: Branch) {
        if self.pending_capture.take() == Some(true) {
            self.captured = Some(branch);
        }
    }

    /// Outcome of the last captured fork
    pub fn captured(&self) -> Option<Branch> {
        self.captured
    }
}
