use std::process::{Command, Output};

use crate::errors::CranlockError;

/// Builder for constructing and executing external processes.
///
/// Provides a fluent API for setting the program and its arguments.
pub struct CommandBuilder {
    program: String,
    args: Vec<String>,
}

impl CommandBuilder {
    /// Create a new builder for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    /// Execute the command and return its output.
    pub fn exec(&self) -> Result<Output, CranlockError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        tracing::debug!("Running {self}");
        cmd.output().map_err(|e| CranlockError::Process {
            message: format!("failed to start `{}`: {e}", self.program),
        })
    }

    /// Execute the command and return its stdout, failing on a non-zero exit.
    ///
    /// The child's stderr is included in the error message.
    pub fn exec_stdout(&self) -> Result<String, CranlockError> {
        let output = self.exec()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CranlockError::Process {
                message: format!(
                    "`{}` exited with {}: {}",
                    self.program,
                    output.status,
                    stderr.trim()
                ),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl std::fmt::Display for CommandBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
