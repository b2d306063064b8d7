use std::collections::VecDeque;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::process::{ChildStderr, Command, Stdio};

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRunner};

/// Number of stderr lines kept for failure reports.
pub const STDERR_TAIL_LINES: usize = 20;

/// Runs commands as child processes attached to the user's terminal.
///
/// The command string is split with shell quoting rules but no shell is
/// involved, so operators such as `&&`, `|` or `>` reach the program as
/// plain arguments. A generator needing them must spell out `sh -c '...'`.
///
/// stdin and stdout are inherited; stderr is forwarded line by line so the
/// user still sees it live, and the last lines are kept. There is no timeout:
/// a command that never exits blocks the run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellCommandRunner;

impl ShellCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ShellCommandRunner {
    fn run(&self, command: &str, working_dir: &Path) -> Result<CommandOutput, AppError> {
        let args = shell_words::split(command).map_err(|e| {
            AppError::config_error(format!("Failed to parse command '{}': {}", command, e))
        })?;
        let Some((program, rest)) = args.split_first() else {
            return Err(AppError::config_error(format!("Command is empty: '{}'", command)));
        };

        tracing::debug!(%command, dir = %working_dir.display(), "spawning command");
        let mut child = Command::new(program)
            .args(rest)
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()?;

        let tail = match child.stderr.take() {
            Some(stderr) => forward_stderr(stderr),
            None => VecDeque::new(),
        };

        let status = child.wait()?;
        tracing::debug!(%command, code = ?status.code(), "command exited");
        Ok(CommandOutput { exit_code: status.code(), stderr_tail: tail.into_iter().collect() })
    }
}

/// Echo stderr to the terminal line by line and return the last lines.
///
/// Bytes that are not UTF-8 are replaced rather than rejected. A read error
/// stops forwarding but never the caller's wait on the child.
fn forward_stderr(stderr: ChildStderr) -> VecDeque<String> {
    let mut reader = BufReader::new(stderr);
    let mut tail = VecDeque::with_capacity(STDERR_TAIL_LINES);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf).trim_end_matches(['\n', '\r']).to_string();
                eprintln!("{}", line);
                if tail.len() == STDERR_TAIL_LINES {
                    tail.pop_front();
                }
                tail.push_back(line);
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                tracing::warn!(error = %e, "stopped reading command stderr");
                break;
            }
        }
    }
    tail
}
