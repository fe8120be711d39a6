use std::io::{stdin, stdout, BufRead, Write};

use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use quickpick_core::error::Result;
use quickpick_core::switch::SwitchInteraction;

/// Prints `message` in `color` on stdout.
pub fn print_colored(color: Color, message: &str) -> Result<()> {
    execute!(stdout(), SetForegroundColor(color), Print(message), ResetColor)?;
    Ok(())
}

/// Interprets a yes/no answer. Blank means `default`; anything unrecognised is `None`.
#[must_use]
pub fn parse_answer(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Asks a yes/no question until it gets an answer.
///
/// End of input counts as "no".
pub fn confirm<R: BufRead>(reader: &mut R, question: &str, default: bool) -> Result<bool> {
    let choices = if default { "Y/n" } else { "y/N" };

    loop {
        print_colored(Color::Yellow, &format!("{question} ({choices}): "))?;
        stdout().flush()?;

        let mut input = String::new();
        if reader.read_line(&mut input)? == 0 {
            println!();
            return Ok(false);
        }

        if let Some(answer) = parse_answer(&input, default) {
            return Ok(answer);
        }
    }
}

/// The branch switcher's prompts and progress messages, on the real terminal.
pub struct TerminalPrompt {
    stash_by_default: bool,
    ask: bool,
}

impl TerminalPrompt {
    /// With `ask` unset, the stash question is answered with `stash_by_default`.
    #[must_use]
    pub fn new(stash_by_default: bool, ask: bool) -> Self {
        Self {
            stash_by_default,
            ask,
        }
    }
}

impl SwitchInteraction for TerminalPrompt {
    fn confirm_stash(&mut self) -> Result<bool> {
        print_colored(
            Color::Red,
            "\nYour working directory has uncommitted changes.\n",
        )?;

        if !self.ask {
            return Ok(self.stash_by_default);
        }

        confirm(
            &mut stdin().lock(),
            "Stash changes before switching?",
            self.stash_by_default,
        )
    }

    fn stashing(&mut self) {
        let _ = print_colored(Color::Blue, "\nStashing changes...\n");
    }

    fn switching(&mut self, branch: &str) {
        let _ = print_colored(Color::Green, &format!("\nSwitching to branch: {branch}...\n"));
    }
}
