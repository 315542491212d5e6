// Console layer: line-based prompting behind a small trait so the menu
// can run on the process stdio or from a fixed script.

use crate::error::{AppError, Result};
use dialoguer::theme::{SimpleTheme, Theme};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// What the menu needs from a console: ask for one line, print one line.
pub trait Console {
    /// Show `prompt` and return the line the user typed, without the
    /// trailing newline. Validation is left to the caller.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Print one line of output.
    fn print(&mut self, line: &str);
}

/// Console on the process stdio. Prompts are rendered with dialoguer's
/// theme on stderr; answers are read as plain lines from stdin, so piped
/// input and Ctrl-D behave like any line-oriented tool.
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Terminal
    }
}

impl Console for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let mut rendered = String::new();
        SimpleTheme
            .format_input_prompt(&mut rendered, prompt, None)
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "failed to render prompt"))?;

        let mut stderr = io::stderr();
        stderr.write_all(rendered.as_bytes())?;
        stderr.flush()?;

        read_line_from(&mut io::stdin().lock())
    }

    fn print(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Read one line from `reader` with the line ending stripped.
/// A reader already at end of input yields `AppError::EndOfInput`.
pub fn read_line_from(reader: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(AppError::EndOfInput);
    }
    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(line)
}

/// Console fed from a prepared list of lines. Everything printed is kept,
/// as are the prompts that were shown.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedConsole {
            input: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            output: Vec::new(),
        }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Whether some printed line equals `line` exactly.
    pub fn printed(&self, line: &str) -> bool {
        self.output.iter().any(|l| l == line)
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.input.pop_front().ok_or(AppError::EndOfInput)
    }

    fn print(&mut self, line: &str) {
        self.output.push(line.to_string());
    }
}
