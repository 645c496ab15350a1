//! Runs the built binary and checks its output against the census.
//!
//! `Command::output` only returns once every process holding the stdout pipe
//! has exited, so the whole tree is captured, not just the first process.

use std::collections::{BTreeSet, HashMap};
use std::process::{Command, Output};

use anyhow::{bail, Context, Result};
use fork_demo::{Census, Stage, PROGRAM};

fn run_demo() -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_fork-demo"))
        .env_remove("RUST_LOG")
        .output()
        .context("failed to run fork-demo")
}

/// Splits a line into its stage and `KEY=value` numeric fields
fn parse(line: &str) -> Result<(Stage, HashMap<String, u64>)> {
    let stage = Stage::ALL
        .into_iter()
        .find(|s| line.starts_with(s.prefix()))
        .with_context(|| format!("unknown stage in {:?}", line))?;

    let mut fields = HashMap::new();
    for part in line[stage.prefix().len()..].split([',', ' ']) {
        if let Some((key, value)) = part.split_once('=') {
            fields.insert(key.to_string(), value.parse()?);
        }
    }
    if !fields.contains_key("PID") {
        bail!("no PID in {:?}", line);
    }
    Ok((stage, fields))
}

fn lines(output: &Output) -> Result<Vec<(Stage, HashMap<String, u64>)>> {
    String::from_utf8(output.stdout.clone())?
        .lines()
        .map(parse)
        .collect()
}

#[test]
fn test_exits_cleanly() -> Result<()> {
    let output = run_demo()?;

    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
    Ok(())
}

#[test]
fn test_start_is_first_and_unique() -> Result<()> {
    let output = run_demo()?;
    let lines = lines(&output)?;

    assert_eq!(lines.first().map(|(s, _)| *s), Some(Stage::Start));
    assert_eq!(lines.iter().filter(|(s, _)| *s == Stage::Start).count(), 1);
    Ok(())
}

#[test]
fn test_counts_match_census() -> Result<()> {
    let output = run_demo()?;
    let lines = lines(&output)?;
    let census = Census::of(PROGRAM);

    for stage in Stage::ALL {
        let seen = lines.iter().filter(|(s, _)| *s == stage).count();
        assert_eq!(seen, census.count(stage), "{}", stage.tag());
    }
    assert_eq!(lines.iter().filter(|(s, _)| *s == Stage::Final).count(), 6);
    Ok(())
}

#[test]
fn test_final_pids_are_distinct() -> Result<()> {
    let output = run_demo()?;
    let pids: BTreeSet<u64> = lines(&output)?
        .iter()
        .filter(|(s, _)| *s == Stage::Final)
        .map(|(_, f)| f["PID"])
        .collect();

    assert_eq!(pids.len(), 6);
    Ok(())
}

#[test]
fn test_thread_follows_child2_in_same_process() -> Result<()> {
    let output = run_demo()?;
    let lines = lines(&output)?;

    let position = |stage: Stage, pid: u64| {
        lines
            .iter()
            .position(|(s, f)| *s == stage && f["PID"] == pid)
    };

    let child1_pid = lines
        .iter()
        .find(|(s, _)| *s == Stage::Child1)
        .map(|(_, f)| f["PID"])
        .context("no CHILD1 line")?;

    let mut child2_pids = BTreeSet::new();
    for (stage, fields) in &lines {
        if *stage != Stage::Thread {
            continue;
        }
        let pid = fields["PID"];
        assert!(fields.contains_key("TID"));

        let child2 = position(Stage::Child2, pid).context("THREAD without CHILD2")?;
        let thread = position(Stage::Thread, pid).context("THREAD vanished")?;
        let last = position(Stage::Final, pid).context("THREAD without FINAL")?;
        assert!(child2 < thread && thread < last);
        child2_pids.insert(pid);
    }

    // One of the two CHILD2 processes is the one that printed CHILD1.
    assert_eq!(child2_pids.len(), 2);
    assert!(child2_pids.contains(&child1_pid));
    Ok(())
}

#[test]
fn test_arguments_do_not_change_output() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_fork-demo"))
        .arg("unused")
        .env_remove("RUST_LOG")
        .output()?;

    assert!(output.status.success());
    let finals = lines(&output)?
        .iter()
        .filter(|(s, _)| *s == Stage::Final)
        .count();
    assert_eq!(finals, 6);
    Ok(())
}
