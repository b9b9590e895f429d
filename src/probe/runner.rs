//! External command execution for probes.
//!
//! Probes never spawn processes directly: they go through the
//! [`CommandRunner`] held by the [`ProbeContext`](super::ProbeContext), so
//! tests can replace the real system with a [`ScriptedRunner`].

use crate::error::{CheckerError, Result};
use std::collections::HashMap;
use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

/// How often a running child is polled for completion.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Create a successful output with the given stdout.
    pub fn success(stdout: &str) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    /// Create a failed output with the given exit code and stderr.
    pub fn failure(exit_code: i32, stderr: &str) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

    /// Whether the command exited with code 0.
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Last non-empty line of stderr, for absent-component reasons.
    pub fn stderr_summary(&self) -> Option<&str> {
        self.stderr
            .lines()
            .map(str::trim)
            .rfind(|line| !line.is_empty())
    }
}

/// Runs external programs on behalf of detectors.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, waiting at most `timeout`.
    ///
    /// A command that starts and exits non-zero is still `Ok`; errors mean
    /// the command could not be started or did not finish in time.
    fn run(&self, program: &str, args: &[&str], timeout: Duration) -> Result<CommandOutput>;
}

/// Runs commands on the host system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], timeout: Duration) -> Result<CommandOutput> {
        let display = display_command(program, args);

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|_| CheckerError::CommandFailed {
                command: display.clone(),
                code: None,
            })?;

        // Drain pipes on their own threads so a chatty child can't block on a full pipe.
        // A background grandchild may hold a pipe open past the child's exit, so
        // collecting the output is bounded by the same deadline as the wait.
        let (tx, rx) = mpsc::channel();
        spawn_reader(Pipe::Stdout, child.stdout.take(), tx.clone());
        spawn_reader(Pipe::Stderr, child.stderr.take(), tx);

        let deadline = Instant::now() + timeout;
        let timed_out = || CheckerError::CommandTimedOut {
            command: display.clone(),
            seconds: timeout.as_secs(),
        };

        let status = match wait_until(&mut child, deadline) {
            Ok(Some(status)) => status,
            Ok(None) => {
                reap(&mut child);
                return Err(timed_out());
            }
            Err(e) => {
                reap(&mut child);
                return Err(e);
            }
        };

        let mut stdout = None;
        let mut stderr = None;
        while stdout.is_none() || stderr.is_none() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match rx.recv_timeout(remaining) {
                Ok((Pipe::Stdout, text)) => stdout = Some(text),
                Ok((Pipe::Stderr, text)) => stderr = Some(text),
                Err(RecvTimeoutError::Timeout) => return Err(timed_out()),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        Ok(CommandOutput {
            exit_code: status.code(),
            stdout: stdout.unwrap_or_default(),
            stderr: stderr.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum Pipe {
    Stdout,
    Stderr,
}

fn spawn_reader<R: Read + Send + 'static>(
    which: Pipe,
    pipe: Option<R>,
    tx: mpsc::Sender<(Pipe, String)>,
) {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        let _ = tx.send((which, String::from_utf8_lossy(&buf).to_string()));
    });
}

fn wait_until(child: &mut Child, deadline: Instant) -> Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Kill and reap a child we are giving up on.
fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

/// Render a program and its arguments for messages and logs.
pub fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// A runner that answers from a fixed script instead of spawning processes.
///
/// Commands are keyed by their full display form (`program arg1 arg2`).
/// Unscripted commands fail as if the program were not installed.
///
/// # Example
///
/// ```
/// use segcheck::probe::{CommandOutput, CommandRunner, ScriptedRunner};
/// use std::time::Duration;
///
/// let runner = ScriptedRunner::new().with("gcc -dumpversion", CommandOutput::success("9.4.0\n"));
/// let out = runner.run("gcc", &["-dumpversion"], Duration::from_secs(1)).unwrap();
/// assert_eq!(out.stdout.trim(), "9.4.0");
/// assert!(runner.run("clang", &["--version"], Duration::from_secs(1)).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedRunner {
    outputs: HashMap<String, CommandOutput>,
    timeouts: Vec<String>,
}

impl ScriptedRunner {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command`, or any longer command line starting with it, with `output`.
    ///
    /// The longest matching key wins. Prefix keys keep python probes
    /// scriptable without spelling out their inline script.
    pub fn with(mut self, command: &str, output: CommandOutput) -> Self {
        self.outputs.insert(command.to_string(), output);
        self
    }

    /// Make `command` behave as if it never finished.
    pub fn with_timeout(mut self, command: &str) -> Self {
        self.timeouts.push(command.to_string());
        self
    }

    fn lookup(&self, command: &str) -> Option<&CommandOutput> {
        self.outputs.get(command).or_else(|| {
            self.outputs
                .iter()
                .filter(|(key, _)| command.starts_with(key.as_str()))
                .max_by_key(|(key, _)| key.len())
                .map(|(_, output)| output)
        })
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str], timeout: Duration) -> Result<CommandOutput> {
        let command = display_command(program, args);
        if self.timeouts.iter().any(|t| command.starts_with(t.as_str())) {
            return Err(CheckerError::CommandTimedOut {
                command,
                seconds: timeout.as_secs(),
            });
        }
        self.lookup(&command)
            .cloned()
            .ok_or(CheckerError::CommandFailed {
                command,
                code: None,
            })
    }
}
