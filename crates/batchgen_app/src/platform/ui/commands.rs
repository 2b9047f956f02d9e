use std::path::PathBuf;

use batchgen_core::ThemePreference;
use thiserror::Error;

/// A console command, one per input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    AddLine(String),
    ClearBatch,
    LoadBatch(PathBuf),
    LoadPrompt(PathBuf),
    ResetPrompt,
    Submit,
    /// Zero-based index of the item to flip.
    Toggle(usize),
    ToggleAll,
    Theme(ThemePreference),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum CommandError {
    #[error("unknown command {0:?}; type `help` for a list")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("item numbers start at 1, got {0:?}")]
    BadIndex(String),
    #[error(transparent)]
    Theme(#[from] batchgen_core::UnknownTheme),
}

/// Command words and their help text, in the order `help` lists them.
pub(crate) const COMMANDS: &[(&str, &str)] = &[
    ("add <title>", "append one line to the batch"),
    ("clear", "empty the batch"),
    ("batch <path>", "replace the batch with a file's lines"),
    ("prompt <path>", "replace the system prompt with a file"),
    ("reset-prompt", "restore the default system prompt"),
    ("submit", "send the batch"),
    ("toggle <n>", "show or hide result n"),
    ("toggle-all", "show or hide every result, following result 1"),
    ("theme <system|light|dark>", "choose the colour theme"),
    ("show", "print the current view"),
    ("help", "list commands"),
    ("quit", "exit"),
];

/// Parses one input line. Blank lines yield `None`.
pub(crate) fn parse(line: &str) -> Option<Result<Command, CommandError>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    Some(parse_word(word, rest))
}

fn parse_word(word: &str, rest: &str) -> Result<Command, CommandError> {
    let command = match word {
        "add" => Command::AddLine(required(rest, "add")?.to_string()),
        "clear" => Command::ClearBatch,
        "batch" => Command::LoadBatch(PathBuf::from(required(rest, "batch")?)),
        "prompt" => Command::LoadPrompt(PathBuf::from(required(rest, "prompt")?)),
        "reset-prompt" => Command::ResetPrompt,
        "submit" => Command::Submit,
        "toggle" => Command::Toggle(parse_index(required(rest, "toggle")?)?),
        "toggle-all" => Command::ToggleAll,
        "theme" => Command::Theme(required(rest, "theme")?.parse()?),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(command)
}

fn required<'a>(rest: &'a str, word: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(word))
    } else {
        Ok(rest)
    }
}

fn parse_index(raw: &str) -> Result<usize, CommandError> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::BadIndex(raw.to_string())),
    }
}

pub(crate) fn help_text() -> String {
    let width = COMMANDS.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
    COMMANDS
        .iter()
        .map(|(usage, about)| format!("  {usage:<width$}  {about}"))
        .collect::<Vec<_>>()
        .join("\n")
}
