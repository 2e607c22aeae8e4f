//! Terminal display and interactive session.
//!
//! [`TerminalUi`] implements every display port over a line reader and a
//! writer: the form and table live in memory, field errors and alerts are
//! printed as they happen, and confirmations are `[y/N]` prompts.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use crate::controller::{Controller, Dialogs, Event, Outcome};
use crate::error::{Error, Result};
use crate::form::{FormModel, FormPort, SubmitButton};
use crate::record::Field;
use crate::render::{RowView, ScrollMode, TableModel, TablePort};
use crate::storage::SlotStore;
use crate::validation::FieldError;

/// Display over a terminal.
pub struct TerminalUi<R, W> {
    form: FormModel,
    table: TableModel,
    input: R,
    output: W,
    assume_yes: bool,
}

impl<R, W> fmt::Debug for TerminalUi<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalUi")
            .field("form", &self.form)
            .field("table", &self.table)
            .field("assume_yes", &self.assume_yes)
            .finish_non_exhaustive()
    }
}

impl<R: BufRead, W: Write> TerminalUi<R, W> {
    /// A terminal display whose table shows `visible_rows` rows.
    pub fn new(input: R, output: W, visible_rows: usize) -> Self {
        Self {
            form: FormModel::new(),
            table: TableModel::new(visible_rows),
            input,
            output,
            assume_yes: false,
        }
    }

    /// Answer every confirmation with yes without reading input.
    #[must_use]
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// The form state.
    pub fn form(&self) -> &FormModel {
        &self.form
    }

    /// The table state.
    pub fn table(&self) -> &TableModel {
        &self.table
    }

    /// The writer.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Write `text` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn println(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Print the rendered table.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn print_table(&mut self) -> Result<()> {
        let text = self.table.to_text();
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Print the form inputs, the submit button and any shown errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn print_form(&mut self) -> Result<()> {
        for field in Field::ALL {
            let value = self.form.value(field);
            match self.form.error(field) {
                Some(error) => writeln!(
                    self.output,
                    "  {:<12} {value:?}  ! {error}",
                    field.label()
                )?,
                None => writeln!(self.output, "  {:<12} {value:?}", field.label())?,
            }
        }
        let button = self.form.submit_button();
        writeln!(
            self.output,
            "  [{}]{}",
            button.label(),
            if button.is_editing() { " (editing)" } else { "" }
        )?;
        self.output.flush()?;
        Ok(())
    }

    /// Show a prompt and read one line; `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead, W: Write> Dialogs for TerminalUi<R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            let _ = writeln!(self.output, "{message} [y/N] y");
            return true;
        }
        match self.read_line(&format!("{message} [y/N] ")) {
            Ok(Some(answer)) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(err) => {
                debug!(error = %err, "Confirmation prompt failed, treating as declined");
                false
            }
        }
    }

    fn alert(&mut self, message: &str) {
        let _ = writeln!(self.output, "{message}");
        let _ = self.output.flush();
    }
}

impl<R, W: Write> FormPort for TerminalUi<R, W> {
    fn value(&self, field: Field) -> String {
        self.form.value(field)
    }

    fn set_value(&mut self, field: Field, value: &str) {
        self.form.set_value(field, value);
    }

    fn clear_values(&mut self) {
        self.form.clear_values();
    }

    fn show_error(&mut self, error: &FieldError) {
        let _ = writeln!(self.output, "  {}: {error}", error.field.label());
        self.form.show_error(error);
    }

    fn clear_error(&mut self, field: Field) {
        self.form.clear_error(field);
    }

    fn set_submit_button(&mut self, button: SubmitButton) {
        self.form.set_submit_button(button);
    }

    fn scroll_into_view(&mut self) {
        self.form.scroll_into_view();
    }

    fn focus(&mut self, field: Field) {
        self.form.focus(field);
    }
}

impl<R, W> TablePort for TerminalUi<R, W> {
    fn clear_rows(&mut self) {
        self.table.clear_rows();
    }

    fn append_row(&mut self, row: RowView) {
        self.table.append_row(row);
    }

    fn set_empty_message_visible(&mut self, visible: bool) {
        self.table.set_empty_message_visible(visible);
    }

    fn set_count(&mut self, count: usize) {
        self.table.set_count(count);
    }

    fn content_overflows(&self) -> bool {
        self.table.content_overflows()
    }

    fn set_scroll_mode(&mut self, mode: ScrollMode) {
        self.table.set_scroll_mode(mode);
    }
}

/// Help text for the interactive session.
pub const SESSION_HELP: &str = "\
Commands:
  set <field> <value>   type into a field (name, studentId, email, contact)
  submit                add the record, or update the one being edited
  reset                 clear the form and leave edit mode
  edit <index>          load a record into the form
  delete <index>        delete a record after confirmation
  show                  print the table and the form
  help                  print this help
  quit                  leave the session";

/// One line of the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Type a value into a field, then leave it.
    Set(Field, String),
    /// Submit the form.
    Submit,
    /// Reset the form.
    Reset,
    /// Edit the record at an index.
    Edit(usize),
    /// Delete the record at an index.
    Delete(usize),
    /// Print table and form.
    Show,
    /// Print help.
    Help,
    /// End the session.
    Quit,
}

fn parse_index(arg: Option<&str>) -> Result<usize> {
    let arg = arg.ok_or_else(|| Error::invalid_command("expected a row index"))?;
    arg.trim()
        .parse()
        .map_err(|_| Error::invalid_command(format!("'{arg}' is not a row index")))
}

impl FromStr for SessionCommand {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, Some(rest)),
            None => (line, None),
        };

        match word.to_ascii_lowercase().as_str() {
            "set" => {
                let rest = rest.ok_or_else(|| Error::invalid_command("expected a field name"))?;
                let rest = rest.trim_start();
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Ok(Self::Set(field.parse()?, value.to_string()))
            }
            "submit" => Ok(Self::Submit),
            "reset" => Ok(Self::Reset),
            "edit" => Ok(Self::Edit(parse_index(rest)?)),
            "delete" => Ok(Self::Delete(parse_index(rest)?)),
            "show" | "list" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(Error::invalid_command(format!("unknown command '{other}'"))),
        }
    }
}

/// Drive a controller from session commands until `quit` or end of input.
///
/// Bad commands are reported and the session continues.
///
/// # Errors
///
/// Returns an error if terminal I/O fails.
pub fn run_session<S, R, W>(controller: &mut Controller<S, TerminalUi<R, W>>) -> Result<()>
where
    S: SlotStore,
    R: BufRead,
    W: Write,
{
    controller.ui_mut().print_table()?;
    controller.ui_mut().println("Type 'help' for commands.")?;

    loop {
        let prompt = match controller.mode().edit_index() {
            Some(index) => format!("edit {index}> "),
            None => "studreg> ".to_string(),
        };
        let Some(line) = controller.ui_mut().read_line(&prompt)? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(err) => {
                controller.ui_mut().println(&err.to_string())?;
                continue;
            }
        };

        let outcome = match command {
            SessionCommand::Set(field, value) => {
                controller.ui_mut().set_value(field, &value);
                controller.handle(Event::Blur(field))
            }
            SessionCommand::Submit => controller.handle(Event::Submit),
            SessionCommand::Reset => controller.handle(Event::Reset),
            SessionCommand::Edit(index) => controller.handle(Event::Edit(index)),
            SessionCommand::Delete(index) => controller.handle(Event::Delete(index)),
            SessionCommand::Show => {
                controller.ui_mut().print_table()?;
                controller.ui_mut().print_form()?;
                continue;
            }
            SessionCommand::Help => {
                controller.ui_mut().println(SESSION_HELP)?;
                continue;
            }
            SessionCommand::Quit => break,
        };

        match outcome {
            Outcome::Added { .. }
            | Outcome::Updated { .. }
            | Outcome::Deleted { .. }
            | Outcome::StaleEdit { .. } => controller.ui_mut().print_table()?,
            Outcome::EditStarted { .. } => controller.ui_mut().print_form()?,
            Outcome::Ignored => controller.ui_mut().println("No student at that index.")?,
            Outcome::Rejected(_)
            | Outcome::DeleteDeclined { .. }
            | Outcome::Reset
            | Outcome::FieldChecked { .. } => {}
        }
    }

    Ok(())
}
