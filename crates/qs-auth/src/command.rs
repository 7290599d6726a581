use std::process::Stdio;

use async_trait::async_trait;

use crate::error::AuthError;
use crate::provider::TokenProvider;
use crate::token::BearerToken;

/// Acquire tokens by running an external identity command.
///
/// In interactive mode the command inherits stdin and stderr so the identity
/// system can show its own consent prompt. Otherwise stdin is closed and
/// stderr is captured into the error message.
#[derive(Debug, Clone)]
pub struct CommandTokenProvider {
    program: String,
    args: Vec<String>,
    interactive: bool,
}

impl CommandTokenProvider {
    /// Split a command line on whitespace into program and arguments.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotConfigured` if the command line is blank.
    pub fn parse(command_line: &str) -> Result<Self, AuthError> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(AuthError::NotConfigured)?;
        Ok(Self {
            program,
            args: parts.collect(),
            interactive: true,
        })
    }

    #[must_use]
    pub const fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }
}

#[async_trait]
impl TokenProvider for CommandTokenProvider {
    async fn get_token(&self) -> Result<BearerToken, AuthError> {
        let mut command = tokio::process::Command::new(&self.program);
        command.args(&self.args).stdout(Stdio::piped());
        if self.interactive {
            command.stdin(Stdio::inherit()).stderr(Stdio::inherit());
        } else {
            command.stdin(Stdio::null()).stderr(Stdio::piped());
        }

        tracing::debug!(program = %self.program, interactive = self.interactive, "requesting bearer token");
        let output = command
            .output()
            .await
            .map_err(|e| AuthError::Unavailable(format!("{}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let reason = if stderr.is_empty() {
                format!("{} exited with {}", self.program, output.status)
            } else {
                stderr
            };
            return Err(AuthError::Denied(reason));
        }

        let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if token.is_empty() {
            return Err(AuthError::Denied(format!(
                "{} printed no token",
                self.program
            )));
        }
        Ok(BearerToken::new(token))
    }
}
