//! External command execution.
//!
//! Every call to the secret store goes through a [`CommandRunner`], which is
//! passed in explicitly so tests and alternative transports can replace it.
//!
//! ## Adding a New Runner
//!
//! 1. Implement the `CommandRunner` trait
//! 2. Hand it to [`Gh::new`](crate::core::gh::Gh::new) or
//!    [`Reconciler::new`](crate::core::reconcile::Reconciler::new)

use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::trace;

/// Captured result of one finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Human-readable exit status, e.g. `exit status: 1`.
    pub status: String,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    /// A successful output with the given stdout.
    pub fn ok(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            success: true,
            status: "exit status: 0".to_string(),
            stdout: stdout.into(),
            stderr: Vec::new(),
        }
    }

    /// A failed output with the given exit code and stderr.
    pub fn failed(code: i32, stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            success: false,
            status: format!("exit status: {}", code),
            stdout: Vec::new(),
            stderr: stderr.into(),
        }
    }

    /// Stderr as trimmed, lossily-decoded text.
    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim().to_string()
    }
}

/// Runs one external command to completion.
///
/// Implementations must be shareable across threads: the executor dispatches
/// operations concurrently.
pub trait CommandRunner: Send + Sync + std::fmt::Debug {
    /// Run `program` with `args`, writing `stdin` to the child if given.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the process cannot be spawned or awaited. A
    /// non-zero exit is not an error here; it is reported in the output.
    fn run(&self, program: &str, args: &[&str], stdin: Option<&[u8]>)
        -> std::io::Result<CommandOutput>;
}

/// Runner that spawns real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Resolve a program name to a path on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns the `which` error if the program cannot be found.
    pub fn locate(program: &str) -> Result<PathBuf, which::Error> {
        which::which(program)
    }
}

impl CommandRunner for SystemRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        stdin: Option<&[u8]>,
    ) -> std::io::Result<CommandOutput> {
        // argv only; stdin may carry a secret value
        trace!(program, ?args, "spawning");

        let mut child = Command::new(program)
            .args(args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let written = match (stdin, child.stdin.take()) {
            // the pipe drops at the end of the arm, closing the child's stdin
            (Some(input), Some(mut pipe)) => pipe.write_all(input),
            _ => Ok(()),
        };

        // reap the child even when the write failed
        let output = child.wait_with_output()?;

        if let Err(e) = written {
            // a child that exits without draining stdin breaks the pipe; its
            // exit status is reported below
            if e.kind() != ErrorKind::BrokenPipe {
                return Err(e);
            }
            trace!(program, "child closed stdin early");
        }

        trace!(program, status = %output.status, "finished");

        Ok(CommandOutput {
            success: output.status.success(),
            status: output.status.to_string(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
