//! Helpers to run the solver binary in integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::ffi::OsStr;
use std::io::Read;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

#[derive(Debug)]
pub(crate) struct SolverOutput {
    pub(crate) status: ExitStatus,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

impl SolverOutput {
    /// The lines printed to stdout, which are the verdicts unless statistics are logged.
    pub(crate) fn verdicts(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .filter(|line| !line.starts_with("c "))
            .collect()
    }
}

pub(crate) fn instance_path(instance_name: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}/tests/cnf/{instance_name}.cnf",
        env!("CARGO_MANIFEST_DIR")
    ))
}

pub(crate) fn run_solver<Arg: AsRef<OsStr>>(
    args: impl IntoIterator<Item = Arg>,
    stdin_contents: Option<&str>,
) -> SolverOutput {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let solver = PathBuf::from(env!("CARGO_BIN_EXE_dpll-cli"));

    let stdin = if stdin_contents.is_some() {
        Stdio::piped()
    } else {
        Stdio::null()
    };

    let mut child = Command::new(solver)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .stdin(stdin)
        .spawn()
        .expect("Failed to run solver.");

    if let Some(contents) = stdin_contents {
        // Dropping the handle closes stdin for the solver.
        let mut solver_stdin = child.stdin.take().expect("stdin is piped");
        solver_stdin
            .write_all(contents.as_bytes())
            .expect("Failed to write the instance to the solver.");
    }

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => {
            let _ = child.kill();
            panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs())
        }
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting solver: {e}"),
    };

    let mut stdout = String::new();
    let _ = child
        .stdout
        .take()
        .expect("stdout is piped")
        .read_to_string(&mut stdout)
        .expect("Failed to read the solver output.");

    let mut stderr = String::new();
    let _ = child
        .stderr
        .take()
        .expect("stderr is piped")
        .read_to_string(&mut stderr)
        .expect("Failed to read the solver error output.");

    SolverOutput {
        status,
        stdout,
        stderr,
    }
}
