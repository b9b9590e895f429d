//! Command-based detection.

use super::context::ProbeContext;
use super::detector::{extract_version, Detection, Detector};
use super::runner::display_command;

/// Detects a component by running an executable that reports its version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDetector {
    program: String,
    args: Vec<String>,
}

impl CommandDetector {
    /// Create a new command detector.
    pub fn new(program: &str, args: Vec<String>) -> Self {
        Self {
            program: program.to_string(),
            args,
        }
    }

    /// Create from a full command string (`gcc -dumpversion`).
    pub fn from_string(cmd: &str) -> Self {
        let mut parts = cmd.split_whitespace();
        let program = parts.next().unwrap_or(cmd).to_string();
        Self {
            program,
            args: parts.map(str::to_string).collect(),
        }
    }

    fn args(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

impl Detector for CommandDetector {
    fn kind(&self) -> &'static str {
        "command"
    }

    fn describe(&self) -> String {
        format!("command '{}'", display_command(&self.program, &self.args()))
    }

    fn detect(&self, ctx: &ProbeContext) -> Detection {
        let args = self.args();
        match ctx.run(&self.program, &args) {
            Ok(output) if output.succeeded() => {
                // Many tools (python2 among them) print their banner on stderr.
                let text = format!("{}\n{}", output.stdout, output.stderr);
                match extract_version(&text) {
                    Some(version) => Detection::found(&version),
                    None => {
                        let first_line = text
                            .lines()
                            .map(str::trim)
                            .find(|line| !line.is_empty())
                            .unwrap_or("unknown");
                        Detection::found(first_line)
                    }
                }
            }
            Ok(output) => Detection::absent(format!(
                "{} exited with code {:?}",
                display_command(&self.program, &args),
                output.exit_code
            )),
            Err(e) => Detection::absent(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::runner::{CommandOutput, ScriptedRunner};

    #[test]
    fn command_detector_from_string() {
        let detector = CommandDetector::from_string("gcc -dumpversion");
        assert_eq!(detector.program, "gcc");
        assert_eq!(detector.args, vec!["-dumpversion"]);
    }

    #[test]
    fn extracts_version_from_stdout() {
        let ctx = ProbeContext::synthetic(ScriptedRunner::new().with(
            "cmake --version",
            CommandOutput::success("cmake version 3.16.3\n\nCMake suite maintained by Kitware"),
        ));
        let detector = CommandDetector::from_string("cmake --version");
        assert_eq!(detector.detect(&ctx), Detection::found("3.16.3"));
    }

    #[test]
    fn reads_version_from_stderr() {
        let ctx = ProbeContext::synthetic(ScriptedRunner::new().with(
            "python2 --version",
            CommandOutput {
                exit_code: Some(0),
                stdout: String::new(),
                stderr: "Python 2.7.5\n".to_string(),
            },
        ));
        let detector = CommandDetector::from_string("python2 --version");
        assert_eq!(detector.detect(&ctx), Detection::found("2.7.5"));
    }

    #[test]
    fn unversioned_output_is_found_verbatim() {
        let ctx = ProbeContext::synthetic(
            ScriptedRunner::new().with("tool --version", CommandOutput::success("development build\n")),
        );
        let detector = CommandDetector::from_string("tool --version");
        assert_eq!(detector.detect(&ctx), Detection::found("development build"));
    }

    #[test]
    fn non_zero_exit_is_absent() {
        let ctx = ProbeContext::synthetic(
            ScriptedRunner::new().with("tool --version", CommandOutput::failure(127, "")),
        );
        let detector = CommandDetector::from_string("tool --version");
        assert!(!detector.detect(&ctx).is_found());
    }

    #[test]
    fn missing_program_is_absent() {
        let ctx = ProbeContext::synthetic(ScriptedRunner::new());
        let detector = CommandDetector::from_string("this-command-does-not-exist-12345");
        assert!(!detector.detect(&ctx).is_found());
    }
}
