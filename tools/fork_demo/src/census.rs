//! Offline enumeration of every process a program creates.
//!
//! Each fork clones the interpreter: the original continues on the parent
//! side and the clone is queued on the child side. Nothing is executed, so
//! the result is what a run with no failing OS call prints.

use std::fmt;

use crate::process::{Branch, Pid};
use crate::program::{Effect, Machine, Op, Stage};

/// Ce qu'un processus simulé a affiché
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    /// Creation order, 0 is the starting process
    pub id: usize,
    /// Process that forked this one
    pub parent: Option<usize>,
    /// Lines printed by this process after it came to life, in order
    pub stages: Vec<Stage>,
}

impl Trace {
    /// Position of the first line of `stage`, if printed
    pub fn position(&self, stage: Stage) -> Option<usize> {
        self.stages.iter().position(|s| *s == stage)
    }
}

#[derive(Debug, Clone)]
pub struct Census {
    traces: Vec<Trace>,
}

impl Census {
    pub fn of(program: &[Op]) -> Census {
        let mut traces = vec![Trace {
            id: 0,
            parent: None,
            stages: Vec::new(),
        }];
        let mut pending = vec![(0, Machine::new(program))];

        while let Some((id, mut machine)) = pending.pop() {
            while let Some(effect) = machine.next_effect() {
                match effect {
                    Effect::Report(stage) | Effect::Worker(stage) => {
                        traces[id].stages.push(stage);
                    }
                    Effect::Fork => {
                        let copy_id = traces.len();
                        traces.push(Trace {
                            id: copy_id,
                            parent: Some(id),
                            stages: Vec::new(),
                        });

                        let mut copy = machine.clone();
                        copy.forked(Branch::Child);
                        pending.push((copy_id, copy));

                        machine.forked(Branch::Parent {
                            child: copy_id as Pid,
                        });
                    }
                }
            }
        }

        Census { traces }
    }

    /// Number of lines printed with `stage` across all processes
    pub fn count(&self, stage: Stage) -> usize {
        self.traces
            .iter()
            .flat_map(|t| t.stages.iter())
            .filter(|s| **s == stage)
            .count()
    }

    /// Number of processes, the starting one included
    pub fn processes(&self) -> usize {
        self.traces.len()
    }

    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} processes", self.processes())?;
        for stage in Stage::ALL {
            write!(f, ", {}={}", stage.tag(), self.count(stage))?;
        }
        Ok(())
    }
}
