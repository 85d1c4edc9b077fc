use std::io::{BufRead, Write};
use tracing::debug;
use crate::console::controller::dispatch;
use crate::console::menu::{MenuCommand, MenuOption, MENU, SELECT_PROMPT};
use crate::core::domain::OutputFormat;
use crate::core::library::LibraryResult;
use crate::library::system::LibrarySystem;

/// Line-oriented console bound to an input and an output stream.
///
/// Menu and prompts are only written in text mode, so JSON output stays one
/// reply per line. End of input at any point ends the session like option 0.
pub struct Console<R, W> {
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, format: OutputFormat) -> Self {
        Self {
            input,
            output,
            format,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self, system: &mut LibrarySystem) -> LibraryResult<()> {
        loop {
            if self.format == OutputFormat::Text {
                write!(self.output, "{}", MENU)?;
            }
            let command = match self.prompt(SELECT_PROMPT)? {
                None => MenuCommand::Exit,
                Some(line) => match MenuOption::parse(line.as_str()) {
                    None => MenuCommand::Invalid { input: line },
                    Some(option) => self.collect(option, system)?.unwrap_or(MenuCommand::Exit),
                },
            };
            debug!("dispatching {:?}", command);
            let reply = dispatch(system, command);
            let rendered = reply.render(self.format)?;
            if !rendered.is_empty() {
                writeln!(self.output, "{}", rendered)?;
            }
            self.output.flush()?;
            if reply.is_exit() {
                return Ok(());
            }
        }
    }

    // Reads the fields an option needs; None when input ends mid-command.
    fn collect(&mut self, option: MenuOption, system: &LibrarySystem) -> LibraryResult<Option<MenuCommand>> {
        let command = match option {
            MenuOption::AddBook => {
                let Some(title) = self.prompt("Enter title: ")? else { return Ok(None) };
                let Some(author) = self.prompt("Enter author: ")? else { return Ok(None) };
                let Some(isbn) = self.prompt("Enter ISBN: ")? else { return Ok(None) };
                MenuCommand::AddBook { title, author, isbn }
            }
            MenuOption::Search => {
                let Some(query) = self.prompt("Enter ISBN or Title: ")? else { return Ok(None) };
                MenuCommand::Search { query }
            }
            MenuOption::UpdateBook => {
                let Some(isbn) = self.prompt("Enter ISBN to update: ")? else { return Ok(None) };
                let Some(title) = self.prompt("New title: ")? else { return Ok(None) };
                let Some(author) = self.prompt("New author: ")? else { return Ok(None) };
                MenuCommand::UpdateBook { isbn, title, author }
            }
            MenuOption::Borrow => {
                let Some(user_id) = self.prompt("Enter User ID: ")? else { return Ok(None) };
                // an unknown user is reported before the isbn is asked for
                let isbn = if system.find_patron(user_id.as_str()).is_ok() {
                    let Some(isbn) = self.prompt("Enter ISBN to borrow: ")? else { return Ok(None) };
                    isbn
                } else {
                    String::new()
                };
                MenuCommand::Borrow { user_id, isbn }
            }
            MenuOption::Return => {
                let Some(user_id) = self.prompt("Enter User ID: ")? else { return Ok(None) };
                let isbn = if system.find_patron(user_id.as_str()).is_ok() {
                    let Some(isbn) = self.prompt("Enter ISBN to return: ")? else { return Ok(None) };
                    isbn
                } else {
                    String::new()
                };
                MenuCommand::Return { user_id, isbn }
            }
            MenuOption::ListBooks => MenuCommand::ListBooks,
            MenuOption::ListUsers => MenuCommand::ListUsers,
            MenuOption::Exit => MenuCommand::Exit,
        };
        Ok(Some(command))
    }

    fn prompt(&mut self, text: &str) -> LibraryResult<Option<String>> {
        if self.format == OutputFormat::Text {
            write!(self.output, "{}", text)?;
            self.output.flush()?;
        }
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(|c| c == '\n' || c == '\r').to_string()))
    }
}

pub fn run<R: BufRead, W: Write>(system: &mut LibrarySystem, format: OutputFormat, input: R, output: W) -> LibraryResult<()> {
    Console::new(input, output, format).run(system)
}
