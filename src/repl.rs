use std::io::{self, BufRead, Write};

use crate::{eval_line, util::num::format_number};

/// A session command, recognized before arithmetic parsing is attempted.
///
/// Command lines never reach the parser: the loop matches them first, so an
/// input of `clear` clears the screen instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Clears the terminal screen.
    Clear,
    /// Ends the session.
    Exit,
    /// Prints the help text again.
    Help,
}

impl Command {
    /// Matches an input line against the session command literals.
    ///
    /// The line is trimmed and matched case-insensitively; `exit` and `quit`
    /// are synonyms. Anything that is not a command returns `None` and is
    /// left to the arithmetic pipeline.
    ///
    /// ## Example
    /// ```
    /// use tally::repl::Command;
    ///
    /// assert_eq!(Command::from_input("QUIT"), Some(Command::Exit));
    /// assert_eq!(Command::from_input("3 + 4"), None);
    /// ```
    #[must_use]
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "clear" => Some(Self::Clear),
            "exit" | "quit" => Some(Self::Exit),
            "help" => Some(Self::Help),
            _ => None,
        }
    }
}

/// Runs the interactive read-evaluate-print loop over stdin/stdout.
///
/// Each line is processed to completion before the next is read: session
/// commands are dispatched first, everything else goes through parse and
/// evaluate. Errors are printed and the loop continues; only `exit`, `quit`
/// or end of input terminate the session.
///
/// # Errors
/// Returns an error only if reading from stdin or writing to stdout fails.
pub fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("tally - a simple CLI calculator");
    print_help();

    let mut line = String::new();
    loop {
        stdout.write_all(b"> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            println!("\nExiting.");
            return Ok(());
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match Command::from_input(input) {
            Some(Command::Exit) => {
                println!("Goodbye.");
                return Ok(());
            },
            Some(Command::Clear) => clear_screen(&mut stdout)?,
            Some(Command::Help) => print_help(),
            None => match eval_line(input) {
                Ok(value) => println!("{}", format_number(value)),
                Err(e) => println!("Error: {e}"),
            },
        }
    }
}

/// Clears the terminal by writing the ANSI clear-and-home sequence.
fn clear_screen(stdout: &mut io::Stdout) -> io::Result<()> {
    stdout.write_all(b"\x1b[2J\x1b[1;1H")?;
    stdout.flush()
}

fn print_help() {
    println!("Commands:");
    println!("  Type an expression like: 12 + 3");
    println!("  Supported operators: +  -  *  /");
    println!("  clear  : clear the screen");
    println!("  help   : print this help");
    println!("  exit   : quit the program");
    println!("  --test : run built-in tests and exit");
}
