//! Interactive session shell.
//!
//! Reads one menu selector per iteration and delegates to the session. Input comes
//! through a [`Prompter`] so the loop can be driven by a terminal or by a script.

use crate::error::{ApiError, TreeError};
use crate::session::Session;
use crate::tooling::format::{
    format_menu, format_numbered_files, format_search_results, format_section_heading,
    format_stats, format_tree, format_visible_directories,
};
use crate::types::{DirectoryType, Role};
use std::io::{self, Write};
use tracing::debug;

/// Source of user input.
pub trait Prompter {
    /// Read one line of input; `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ApiError>;
}

/// Terminal prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ApiError> {
        use dialoguer::Input;

        match Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => Ok(Some(line)),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(ApiError::Input(format!("Failed to get user input: {}", e))),
        }
    }
}

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateFile,
    CreateSubdirectory,
    DisplayTree,
    DeleteFile,
    SearchFile,
    Statistics,
    ListDirectories,
    Exit,
}

impl MenuChoice {
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            1 => Some(MenuChoice::CreateFile),
            2 => Some(MenuChoice::CreateSubdirectory),
            3 => Some(MenuChoice::DisplayTree),
            4 => Some(MenuChoice::DeleteFile),
            5 => Some(MenuChoice::SearchFile),
            6 => Some(MenuChoice::Statistics),
            7 => Some(MenuChoice::ListDirectories),
            8 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    EndOfInput,
}

pub struct Shell<'a, P: Prompter, W: Write> {
    prompter: &'a mut P,
    out: &'a mut W,
}

impl<'a, P: Prompter, W: Write> Shell<'a, P, W> {
    pub fn new(prompter: &'a mut P, out: &'a mut W) -> Self {
        Self { prompter, out }
    }

    /// Ask for the session role. Anything but "2" logs in as Student.
    pub fn login(&mut self) -> Result<Role, ApiError> {
        let input = self
            .prompter
            .read_line("Login as: 1) Student  2) Teacher")?
            .unwrap_or_default();
        Ok(Role::from_login_choice(&input))
    }

    /// Run the command loop until Exit or end of input, then tear the tree down.
    ///
    /// The tree is torn down even when the loop fails; the loop's error is returned
    /// afterwards. Returns the number of directories released.
    pub fn run(&mut self, mut session: Session) -> Result<usize, ApiError> {
        let outcome = self.command_loop(&mut session);
        let notice = writeln!(self.out, "Cleaning up memory...");
        let released = session.end(|node| debug!(directory = node.name(), "Released directory"));
        outcome?;
        notice?;
        writeln!(self.out, "Exiting program.")?;
        Ok(released)
    }

    fn command_loop(&mut self, session: &mut Session) -> Result<(), ApiError> {
        loop {
            writeln!(self.out, "{}", format_menu(session.role()))?;
            let Some(line) = self.prompter.read_line("Enter your choice")? else {
                break;
            };
            let selector = match line.trim().parse::<i64>() {
                Ok(selector) => selector,
                Err(_) => {
                    writeln!(self.out, "Invalid input!")?;
                    continue;
                }
            };
            let flow = match MenuChoice::from_selector(selector) {
                Some(MenuChoice::Exit) => break,
                Some(choice) => self.dispatch(session, choice)?,
                None => {
                    writeln!(self.out, "Invalid choice! Please try again.")?;
                    Flow::Continue
                }
            };
            if let Flow::EndOfInput = flow {
                break;
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, session: &mut Session, choice: MenuChoice) -> Result<Flow, ApiError> {
        match choice {
            MenuChoice::CreateFile => self.create_file(session),
            MenuChoice::CreateSubdirectory => self.create_subdirectory(session),
            MenuChoice::DisplayTree => {
                writeln!(
                    self.out,
                    "\n{}\n{}",
                    format_section_heading("Directory Structure"),
                    format_tree(&session.display())
                )?;
                Ok(Flow::Continue)
            }
            MenuChoice::DeleteFile => self.delete_file(session),
            MenuChoice::SearchFile => self.search_file(session),
            MenuChoice::Statistics => {
                writeln!(self.out, "\n{}", format_stats(&session.stats()))?;
                Ok(Flow::Continue)
            }
            MenuChoice::ListDirectories => {
                writeln!(
                    self.out,
                    "\n{}\n{}",
                    format_section_heading("All Visible Directories"),
                    format_visible_directories(&session.list_visible())
                )?;
                Ok(Flow::Continue)
            }
            MenuChoice::Exit => Ok(Flow::EndOfInput),
        }
    }

    fn report(&mut self, err: &TreeError) -> Result<(), ApiError> {
        writeln!(self.out, "{}!", err)?;
        Ok(())
    }

    fn show_directories(&mut self, session: &Session, heading: &str) -> Result<(), ApiError> {
        writeln!(
            self.out,
            "\n{}\n{}",
            heading,
            format_visible_directories(&session.list_visible())
        )?;
        Ok(())
    }

    fn create_file(&mut self, session: &mut Session) -> Result<Flow, ApiError> {
        self.show_directories(session, "Available directories (you can read):")?;
        let Some(dir) = self
            .prompter
            .read_line("Enter directory name where you want to add the file")?
        else {
            return Ok(Flow::EndOfInput);
        };
        let directory = match session.directory_accepting_files(&dir) {
            Ok(node) => node.name().to_string(),
            Err(e) => {
                self.report(&e)?;
                return Ok(Flow::Continue);
            }
        };
        let Some(file) = self.prompter.read_line("Enter file name")? else {
            return Ok(Flow::EndOfInput);
        };
        match session.add_file(&dir, &file) {
            Ok(stored) => writeln!(
                self.out,
                "File '{}' added to directory '{}' successfully!",
                stored, directory
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn create_subdirectory(&mut self, session: &mut Session) -> Result<Flow, ApiError> {
        self.show_directories(
            session,
            "Available parent directories (you can write in those that allow it):",
        )?;
        let Some(parent) = self.prompter.read_line("Enter parent directory name")? else {
            return Ok(Flow::EndOfInput);
        };
        let parent_dir = match session.writable_directory(&parent) {
            Ok(node) => node.name().to_string(),
            Err(e) => {
                self.report(&e)?;
                return Ok(Flow::Continue);
            }
        };
        let Some(child) = self.prompter.read_line("Enter new subdirectory name")? else {
            return Ok(Flow::EndOfInput);
        };
        writeln!(self.out, "Select directory type:")?;
        for (selector, directory_type) in DirectoryType::ALL.iter().enumerate() {
            writeln!(self.out, "{}. {}", selector, directory_type.label())?;
        }
        let Some(type_input) = self.prompter.read_line("Enter choice")? else {
            return Ok(Flow::EndOfInput);
        };
        let directory_type = type_input
            .trim()
            .parse::<i64>()
            .map(DirectoryType::from_selector)
            .unwrap_or_default();
        match session.add_subdirectory(&parent, &child, directory_type) {
            Ok(id) => {
                let created = session.tree().node(id).map(|n| n.name()).unwrap_or_default();
                writeln!(
                    self.out,
                    "Subdirectory '{}' created under '{}' successfully!",
                    created, parent_dir
                )?
            }
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete_file(&mut self, session: &mut Session) -> Result<Flow, ApiError> {
        self.show_directories(session, "Available directories (you can read):")?;
        let Some(dir) = self.prompter.read_line("Enter directory name")? else {
            return Ok(Flow::EndOfInput);
        };
        let listing = match session.writable_files(&dir) {
            Ok(files) => format_numbered_files(dir.trim(), files),
            Err(e) => {
                self.report(&e)?;
                return Ok(Flow::Continue);
            }
        };
        writeln!(self.out, "\n{}", listing)?;
        let Some(file) = self.prompter.read_line("Enter file name to delete")? else {
            return Ok(Flow::EndOfInput);
        };
        match session.delete_file(&dir, &file) {
            Ok(removed) => writeln!(self.out, "File '{}' deleted successfully!", removed)?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn search_file(&mut self, session: &mut Session) -> Result<Flow, ApiError> {
        let Some(file) = self.prompter.read_line("Enter file name to search")? else {
            return Ok(Flow::EndOfInput);
        };
        let hits = session.search_file(&file);
        writeln!(self.out, "\n{}", format_search_results(file.trim(), &hits))?;
        Ok(Flow::Continue)
    }
}
