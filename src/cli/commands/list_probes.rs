//! `segcheck --list-probes` prints the components the registry knows how
//! to detect, and how.

use std::io::Write;

use crate::error::Result;
use crate::probe::ProbeRegistry;

use super::dispatcher::{Command, CommandResult};

/// The list-probes command implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListProbesCommand;

impl Command for ListProbesCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let registry = ProbeRegistry::new();
        let width = registry.names().map(str::len).max().unwrap_or(0);

        for name in registry.names() {
            if let Some(spec) = registry.get(name) {
                writeln!(out, "{:width$}  {}", name, spec.build().describe(), width = width)?;
            }
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_builtin_components() {
        let mut out = Vec::new();
        let result = ListProbesCommand.execute(&mut out).unwrap();
        assert_eq!(result.exit_code, 0);

        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().any(|l| l.starts_with("python ") && l.ends_with("python interpreter")));
        assert!(text
            .lines()
            .any(|l| l.starts_with("pillow") && l.ends_with("python module 'PIL'")));
    }
}
