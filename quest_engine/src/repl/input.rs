//! Terminal input for the quest driver.
//!
//! Uses `rustyline` (history and command completion) when stdin is a terminal and a plain
//! line reader otherwise, so scripted runs can pipe commands in.

use std::io::{self, IsTerminal, Write};

use lazy_static::lazy_static;
use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Outcome of reading a line from the prompt.
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

const COMMAND_WORDS: &[&str] = &[
    "tick", "wait", "hit", "attack", "kill", "slay", "recover", "rest", "remove", "despawn", "click item", "click npc", "talk to",
    "take", "get", "drop", "status", "tasks", "help", "quit", "exit",
];

lazy_static! {
    static ref COMMAND_TERMS: Vec<String> = {
        let mut terms: Vec<String> = COMMAND_WORDS.iter().map(ToString::to_string).collect();
        terms.sort_unstable();
        terms.dedup();
        terms
    };
}

type QuestEditor = rustyline::Editor<QuestHelper, DefaultHistory>;

#[derive(Default)]
struct QuestHelper;

impl Helper for QuestHelper {}

impl Completer for QuestHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_prefix(line, pos);
        Ok((start, completions(&prefix)))
    }
}

impl Hinter for QuestHelper {
    type Hint = String;
}

impl Highlighter for QuestHelper {}

impl Validator for QuestHelper {}

fn current_prefix(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let trimmed = slice.trim_start_matches(char::is_whitespace);
    let start = pos - trimmed.len();
    (start, trimmed.to_lowercase())
}

fn completions(prefix: &str) -> Vec<Pair> {
    if prefix.is_empty() {
        return Vec::new();
    }
    COMMAND_TERMS
        .iter()
        .filter(|term| term.starts_with(prefix))
        .map(|term| Pair {
            display: term.clone(),
            replacement: term.clone(),
        })
        .collect()
}

/// Chooses between the interactive and the plain stdin backend.
pub struct InputManager {
    backend: Backend,
}

impl InputManager {
    pub fn new() -> Self {
        let backend = if io::stdin().is_terminal() {
            match QuestEditor::new() {
                Ok(mut editor) => {
                    editor.set_helper(Some(QuestHelper));
                    info!("using rustyline-backed input");
                    Backend::Rustyline(Box::new(editor))
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                    Backend::Plain(String::new())
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            Backend::Plain(String::new())
        };
        Self { backend }
    }

    /// Read one line. If the interactive backend fails, switch to plain stdin and retry once.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt) {
            Ok(event) => Ok(event),
            Err(err) if matches!(self.backend, Backend::Rustyline(_)) => {
                warn!("rustyline input failed: {err} -- switching to basic stdin");
                self.backend = Backend::Plain(String::new());
                self.backend.read_line(prompt)
            },
            Err(err) => Err(err),
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

enum Backend {
    Rustyline(Box<QuestEditor>),
    Plain(String),
}

impl Backend {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            Backend::Rustyline(editor) => match editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty()
                        && let Err(err) = editor.add_history_entry(line.as_str())
                    {
                        warn!("failed to append to history: {err}");
                    }
                    Ok(InputEvent::Line(line))
                },
                Err(err) => convert_readline_error(err),
            },
            Backend::Plain(buffer) => {
                print!("{prompt}");
                io::stdout().flush()?;
                buffer.clear();
                if io::stdin().read_line(buffer)? == 0 {
                    return Ok(InputEvent::Eof);
                }
                Ok(InputEvent::Line(buffer.trim_end_matches(['\n', '\r']).to_string()))
            },
        }
    }
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}
