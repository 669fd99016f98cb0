//! Interactive console menu.
//!
//! # Responsibility
//! - Print options, read one selection, dispatch to `PetController`.
//! - Parse user-typed fields (ids, kinds, dates, command lists).
//!
//! # Invariants
//! - The menu starts `Running` and `Stopped` is terminal.
//! - Input EOF behaves like choosing exit.
//! - Only I/O failures escape `run()`; every domain failure is printed.

use super::controller::{ActionResponse, PetController, PetDraft, PetPatch};
use crate::model::entity::EntityId;
use crate::model::pet::{Pet, PetKind};
use crate::repo::Repository;
use chrono::NaiveDate;
use log::info;
use std::io::{self, BufRead, Write};

const DATE_FORMAT: &str = "%Y-%m-%d";
const KIND_PROMPT: &str = "Kind (dog/cat/hamster/horse/camel/donkey)";
const DATE_PROMPT: &str = "Birth date (YYYY-MM-DD)";

/// Menu lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Stopped,
}

/// Menu entries in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    List,
    Show,
    Update,
    Delete,
    ShowCommands,
    TeachCommand,
    ListByBirthDate,
    Count,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 10] = [
        MenuAction::Add,
        MenuAction::List,
        MenuAction::Show,
        MenuAction::Update,
        MenuAction::Delete,
        MenuAction::ShowCommands,
        MenuAction::TeachCommand,
        MenuAction::ListByBirthDate,
        MenuAction::Count,
        MenuAction::Exit,
    ];

    /// Key the user types to pick this entry.
    pub fn key(self) -> &'static str {
        match self {
            Self::Add => "1",
            Self::List => "2",
            Self::Show => "3",
            Self::Update => "4",
            Self::Delete => "5",
            Self::ShowCommands => "6",
            Self::TeachCommand => "7",
            Self::ListByBirthDate => "8",
            Self::Count => "9",
            Self::Exit => "0",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Add a pet",
            Self::List => "List all pets",
            Self::Show => "Show a pet",
            Self::Update => "Update a pet",
            Self::Delete => "Delete a pet",
            Self::ShowCommands => "Show commands a pet knows",
            Self::TeachCommand => "Teach a pet a new command",
            Self::ListByBirthDate => "List pets by birth date",
            Self::Count => "Count pets",
            Self::Exit => "Exit",
        }
    }

    pub fn from_selection(selection: &str) -> Option<Self> {
        let selection = selection.trim();
        Self::ALL.into_iter().find(|action| action.key() == selection)
    }
}

/// Outcome of a single field prompt.
enum Field<T> {
    Value(T),
    Blank,
    Abort,
}

/// Read-dispatch-display loop over any line-based input and output.
pub struct ConsoleMenu<'c, R, I, O>
where
    R: Repository<Pet>,
    I: BufRead,
    O: Write,
{
    controller: &'c mut PetController<R>,
    input: I,
    output: O,
    state: MenuState,
}

impl<'c, R, I, O> ConsoleMenu<'c, R, I, O>
where
    R: Repository<Pet>,
    I: BufRead,
    O: Write,
{
    pub fn new(controller: &'c mut PetController<R>, input: I, output: O) -> Self {
        Self {
            controller,
            input,
            output,
            state: MenuState::Running,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Runs until the user exits or input is exhausted.
    pub fn run(&mut self) -> io::Result<()> {
        info!("event=menu_start module=menu status=ok");
        while self.step()? == MenuState::Running {}
        info!("event=menu_stop module=menu status=ok");
        Ok(())
    }

    /// Executes one read-dispatch-display iteration.
    pub fn step(&mut self) -> io::Result<MenuState> {
        if self.state == MenuState::Stopped {
            return Ok(self.state);
        }

        self.print_options()?;
        let Some(selection) = self.ask("Select an option")? else {
            return Ok(self.state);
        };

        match MenuAction::from_selection(&selection) {
            Some(action) => self.dispatch(action)?,
            None => writeln!(
                self.output,
                "Unknown option `{}`; choose 0-9.",
                selection.trim()
            )?,
        }
        Ok(self.state)
    }

    fn dispatch(&mut self, action: MenuAction) -> io::Result<()> {
        match action {
            MenuAction::Add => self.add_pet(),
            MenuAction::List => {
                let response = self.controller.list_pets();
                self.respond(&response)
            }
            MenuAction::Show => {
                let Some(id) = self.ask_id()? else {
                    return Ok(());
                };
                let response = self.controller.show_pet(id);
                self.respond(&response)
            }
            MenuAction::Update => self.update_pet(),
            MenuAction::Delete => {
                let Some(id) = self.ask_id()? else {
                    return Ok(());
                };
                let response = self.controller.delete_pet(id);
                self.respond(&response)
            }
            MenuAction::ShowCommands => {
                let Some(id) = self.ask_id()? else {
                    return Ok(());
                };
                let response = self.controller.show_commands(id);
                self.respond(&response)
            }
            MenuAction::TeachCommand => {
                let Some(id) = self.ask_id()? else {
                    return Ok(());
                };
                let Some(command) = self.ask("New command")? else {
                    return Ok(());
                };
                let response = self.controller.teach_command(id, &command);
                self.respond(&response)
            }
            MenuAction::ListByBirthDate => {
                let response = self.controller.list_by_birth_date();
                self.respond(&response)
            }
            MenuAction::Count => {
                let response = self.controller.count_pets();
                self.respond(&response)
            }
            MenuAction::Exit => {
                self.state = MenuState::Stopped;
                writeln!(self.output, "Goodbye.")
            }
        }
    }

    fn add_pet(&mut self) -> io::Result<()> {
        let name = match self.ask_field("Name", parse_text)? {
            Field::Value(name) => name,
            Field::Blank => return self.required("Name"),
            Field::Abort => return Ok(()),
        };
        let kind = match self.ask_field(KIND_PROMPT, parse_kind)? {
            Field::Value(kind) => kind,
            Field::Blank => return self.required("Kind"),
            Field::Abort => return Ok(()),
        };
        let birth_date = match self.ask_field(DATE_PROMPT, parse_date)? {
            Field::Value(date) => date,
            Field::Blank => return self.required("Birth date"),
            Field::Abort => return Ok(()),
        };
        let commands = match self.ask_field("Commands (comma-separated)", parse_commands)? {
            Field::Value(commands) => commands,
            Field::Blank => Vec::new(),
            Field::Abort => return Ok(()),
        };

        let response = self.controller.create_pet(PetDraft {
            name,
            kind,
            birth_date,
            commands,
        });
        self.respond(&response)
    }

    fn update_pet(&mut self) -> io::Result<()> {
        let Some(id) = self.ask_id()? else {
            return Ok(());
        };
        let current = self.controller.show_pet(id);
        self.respond(&current)?;
        if !current.ok {
            return Ok(());
        }
        writeln!(self.output, "Leave a field blank to keep its current value.")?;

        let mut patch = PetPatch::default();
        match self.ask_field("Name", parse_text)? {
            Field::Value(name) => patch.name = Some(name),
            Field::Blank => {}
            Field::Abort => return Ok(()),
        }
        match self.ask_field(KIND_PROMPT, parse_kind)? {
            Field::Value(kind) => patch.kind = Some(kind),
            Field::Blank => {}
            Field::Abort => return Ok(()),
        }
        match self.ask_field(DATE_PROMPT, parse_date)? {
            Field::Value(date) => patch.birth_date = Some(date),
            Field::Blank => {}
            Field::Abort => return Ok(()),
        }
        match self.ask_field("Commands (replaces all)", parse_commands)? {
            Field::Value(commands) => patch.commands = Some(commands),
            Field::Blank => {}
            Field::Abort => return Ok(()),
        }

        let response = self.controller.update_pet(id, patch);
        self.respond(&response)
    }

    fn print_options(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Pet Farm ===")?;
        for action in MenuAction::ALL {
            writeln!(self.output, "{}. {}", action.key(), action.label())?;
        }
        Ok(())
    }

    fn respond(&mut self, response: &ActionResponse) -> io::Result<()> {
        writeln!(self.output, "{}", response.message)
    }

    fn required(&mut self, label: &str) -> io::Result<()> {
        writeln!(self.output, "{label} is required.")
    }

    /// Prompts for one line; `None` means input is exhausted and the menu stopped.
    fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            self.state = MenuState::Stopped;
            info!("event=menu_input_closed module=menu status=ok");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn ask_field<T>(
        &mut self,
        label: &str,
        parse: fn(&str) -> Result<T, String>,
    ) -> io::Result<Field<T>> {
        let Some(raw) = self.ask(label)? else {
            return Ok(Field::Abort);
        };
        if raw.trim().is_empty() {
            return Ok(Field::Blank);
        }
        match parse(&raw) {
            Ok(value) => Ok(Field::Value(value)),
            Err(message) => {
                writeln!(self.output, "{message}")?;
                Ok(Field::Abort)
            }
        }
    }

    fn ask_id(&mut self) -> io::Result<Option<EntityId>> {
        match self.ask_field("Pet id", parse_id)? {
            Field::Value(id) => Ok(Some(id)),
            Field::Blank => {
                self.required("Pet id")?;
                Ok(None)
            }
            Field::Abort => Ok(None),
        }
    }
}

fn parse_text(raw: &str) -> Result<String, String> {
    Ok(raw.trim().to_string())
}

fn parse_id(raw: &str) -> Result<EntityId, String> {
    raw.trim()
        .parse::<EntityId>()
        .map_err(|_| format!("`{}` is not a valid pet id.", raw.trim()))
}

fn parse_kind(raw: &str) -> Result<PetKind, String> {
    raw.parse::<PetKind>().map_err(|err| format!("{err}."))
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| format!("`{}` is not a date in YYYY-MM-DD form.", raw.trim()))
}

fn parse_commands(raw: &str) -> Result<Vec<String>, String> {
    Ok(raw
        .split(',')
        .map(str::trim)
        .filter(|command| !command.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{parse_commands, parse_date, parse_id, MenuAction};

    #[test]
    fn selections_map_to_actions() {
        assert_eq!(MenuAction::from_selection(" 0 "), Some(MenuAction::Exit));
        assert_eq!(MenuAction::from_selection("7"), Some(MenuAction::TeachCommand));
        assert_eq!(MenuAction::from_selection("10"), None);
    }

    #[test]
    fn parse_commands_splits_and_drops_blanks() {
        assert_eq!(
            parse_commands(" sit, , paw ,").expect("command lists always parse"),
            vec!["sit".to_string(), "paw".to_string()]
        );
    }

    #[test]
    fn parse_helpers_report_bad_input() {
        assert!(parse_id("-3")
            .expect_err("negative ids are rejected")
            .contains("not a valid pet id"));
        assert!(parse_date("2020/01/01")
            .expect_err("slash dates are rejected")
            .contains("YYYY-MM-DD"));
    }
}
