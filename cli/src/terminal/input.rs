#[cfg(test)]
use std::collections::VecDeque;
use std::io::{self, BufRead};

use anyhow::Context;
use console::Term;

/// Source of the lines typed at the menu prompts.
pub trait LineReader {
    /// Shows `prompt` and reads one line without its line ending.
    ///
    /// Returns `None` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

/// Prompts on the terminal and reads from standard input.
pub struct TerminalInput {
    term: Term,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl LineReader for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        self.term
            .write_str(prompt)
            .context("failed to write prompt")?;
        self.term.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("failed to read from stdin")?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Replays a fixed list of answers, for driving the shell without a terminal.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
impl LineReader for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> anyhow::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
