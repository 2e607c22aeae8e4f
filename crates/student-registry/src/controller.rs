//! The registration controller.
//!
//! The [`Controller`] owns the record list and the form mode, reacts to form
//! [`Event`]s, keeps the durable slot in step with the list, and redraws the
//! table through the [`Ui`] ports after every mutation. Handlers run to
//! completion one at a time; nothing is queued.
//!
//! # Example
//!
//! ```
//! use student_registry::controller::{Controller, Event, Outcome};
//! use student_registry::controller::testing::ScriptedUi;
//! use student_registry::form::FormPort;
//! use student_registry::record::Field;
//! use student_registry::storage::{MemorySlotStore, Persistence};
//!
//! let mut controller = Controller::start(Persistence::new(MemorySlotStore::new()), ScriptedUi::new(10));
//!
//! let ui = controller.ui_mut();
//! ui.form.set_value(Field::Name, "John Smith");
//! ui.form.set_value(Field::StudentId, "123");
//! ui.form.set_value(Field::Email, "j@x.com");
//! ui.form.set_value(Field::Contact, "1234567890");
//!
//! assert_eq!(controller.handle(Event::Submit), Outcome::Added { index: 0 });
//! assert_eq!(controller.records().len(), 1);
//! ```

use tracing::{debug, info, warn};

use crate::form::{FormMode, FormPort, SubmitButton};
use crate::record::{Field, StudentRecord};
use crate::render::{render_table, TablePort};
use crate::storage::{Persistence, SlotStore};
use crate::validation::{self, FieldError};

/// Alert shown when the list could not be saved.
pub const SAVE_FAILED_MESSAGE: &str = "Error saving data. Please try again.";

/// Blocking confirmation and notification.
pub trait Dialogs {
    /// Ask a yes/no question; `true` means confirmed.
    fn confirm(&mut self, message: &str) -> bool;

    /// Show a message the user has to acknowledge.
    fn alert(&mut self, message: &str);
}

/// Everything the controller drives: form, table and dialogs.
pub trait Ui: FormPort + TablePort + Dialogs {}

impl<T: FormPort + TablePort + Dialogs> Ui for T {}

/// A user interaction with the form or the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The form was submitted.
    Submit,
    /// The reset button was pressed.
    Reset,
    /// An input lost focus.
    Blur(Field),
    /// Edit was clicked on the row with this index.
    Edit(usize),
    /// Delete was clicked on the row with this index.
    Delete(usize),
}

/// What handling an [`Event`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A record was appended at `index`.
    Added {
        /// Position of the new record.
        index: usize,
    },
    /// The record at `index` was replaced.
    Updated {
        /// Position of the replaced record.
        index: usize,
    },
    /// Submission was blocked by input errors; nothing changed.
    Rejected(Vec<FieldError>),
    /// The record being edited no longer exists; nothing changed.
    StaleEdit {
        /// The edit target that went missing.
        index: usize,
    },
    /// The form now edits the record at `index`.
    EditStarted {
        /// Position of the record being edited.
        index: usize,
    },
    /// The record at `index` was removed.
    Deleted {
        /// Former position of the record.
        index: usize,
        /// The removed record.
        record: StudentRecord,
    },
    /// The user declined to delete the record at `index`.
    DeleteDeclined {
        /// Position of the record that was kept.
        index: usize,
    },
    /// The form was returned to create mode.
    Reset,
    /// A field was re-checked after losing focus.
    FieldChecked {
        /// The checked field.
        field: Field,
        /// The error now shown, if any.
        error: Option<FieldError>,
    },
    /// The event referred to a row that does not exist.
    Ignored,
}

/// Process-wide state: the record list and the form mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Records in display order.
    pub records: Vec<StudentRecord>,
    /// Current form mode.
    pub mode: FormMode,
}

/// Form controller over a slot store `S` and a display `U`.
#[derive(Debug)]
pub struct Controller<S, U> {
    state: AppState,
    persistence: Persistence<S>,
    ui: U,
}

impl<S: SlotStore, U: Ui> Controller<S, U> {
    /// Load the stored list and draw it.
    pub fn start(persistence: Persistence<S>, ui: U) -> Self {
        let records = persistence.load();
        let mut controller = Self {
            state: AppState {
                records,
                mode: FormMode::Create,
            },
            persistence,
            ui,
        };
        controller.render();
        info!(
            count = controller.state.records.len(),
            "Student registry initialized"
        );
        controller
    }

    /// The current records.
    #[must_use]
    pub fn records(&self) -> &[StudentRecord] {
        &self.state.records
    }

    /// The current form mode.
    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.state.mode
    }

    /// The full application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The display.
    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Mutable access to the display, e.g. to type into the form.
    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    /// The persistence adapter.
    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    /// Dispatch one event.
    pub fn handle(&mut self, event: Event) -> Outcome {
        debug!(?event, mode = ?self.state.mode, "Handling event");
        match event {
            Event::Submit => self.submit(),
            Event::Reset => {
                self.reset_form();
                Outcome::Reset
            }
            Event::Blur(field) => self.blur(field),
            Event::Edit(index) => self.edit(index),
            Event::Delete(index) => self.delete(index),
        }
    }

    fn submit(&mut self) -> Outcome {
        self.clear_all_errors();

        let record = StudentRecord::from_fields(|field| self.ui.value(field));
        let errors = validation::validate_record(&record);
        if !errors.is_empty() {
            for error in &errors {
                self.ui.show_error(error);
            }
            debug!(failed = errors.len(), "Form validation failed");
            return Outcome::Rejected(errors);
        }

        let outcome = match self.state.mode {
            FormMode::Create => {
                let message = format!("Student \"{}\" added successfully!", record.name);
                self.state.records.push(record);
                let index = self.state.records.len() - 1;
                self.commit();
                info!(index, "Student added");
                self.ui.alert(&message);
                Outcome::Added { index }
            }
            FormMode::Edit(index) if index < self.state.records.len() => {
                let message = format!("Student \"{}\" updated successfully!", record.name);
                self.state.records[index] = record;
                self.commit();
                info!(index, "Student updated");
                self.ui.alert(&message);
                Outcome::Updated { index }
            }
            FormMode::Edit(index) => {
                warn!(index, "Edited student no longer exists, discarding update");
                self.ui.alert("This student record no longer exists.");
                Outcome::StaleEdit { index }
            }
        };

        self.reset_form();
        outcome
    }

    fn blur(&mut self, field: Field) -> Outcome {
        let error = validation::check_on_blur(field, &self.ui.value(field));
        match &error {
            Some(err) => self.ui.show_error(err),
            None => self.ui.clear_error(field),
        }
        Outcome::FieldChecked { field, error }
    }

    fn edit(&mut self, index: usize) -> Outcome {
        let Some(record) = self.state.records.get(index) else {
            warn!(index, "Edit requested for a missing row");
            return Outcome::Ignored;
        };

        for field in Field::ALL {
            self.ui.set_value(field, record.get(field));
        }
        self.state.mode = FormMode::Edit(index);
        self.ui.set_submit_button(SubmitButton::Update);
        self.ui.scroll_into_view();
        self.ui.focus(Field::Name);

        debug!(index, "Editing student");
        Outcome::EditStarted { index }
    }

    fn delete(&mut self, index: usize) -> Outcome {
        let Some(record) = self.state.records.get(index) else {
            warn!(index, "Delete requested for a missing row");
            return Outcome::Ignored;
        };

        let question = format!("Are you sure you want to delete {}?", record.name);
        if !self.ui.confirm(&question) {
            debug!(index, "Delete declined");
            return Outcome::DeleteDeclined { index };
        }

        let record = self.state.records.remove(index);
        self.commit();
        info!(index, "Student deleted");

        match self.state.mode {
            FormMode::Edit(target) if target == index => self.reset_form(),
            FormMode::Edit(target) if target > index => {
                self.state.mode = FormMode::Edit(target - 1);
            }
            _ => {}
        }

        Outcome::Deleted { index, record }
    }

    fn reset_form(&mut self) {
        self.ui.clear_values();
        self.state.mode = FormMode::Create;
        self.ui.set_submit_button(SubmitButton::Add);
        self.clear_all_errors();
        debug!("Form reset");
    }

    fn clear_all_errors(&mut self) {
        for field in Field::ALL {
            self.ui.clear_error(field);
        }
    }

    /// Persist then redraw. A failed save is reported and otherwise ignored.
    fn commit(&mut self) {
        if self.persistence.save(&self.state.records).is_err() {
            self.ui.alert(SAVE_FAILED_MESSAGE);
        }
        self.render();
    }

    fn render(&mut self) {
        render_table(&mut self.ui, &self.state.records);
    }
}

/// In-memory [`Ui`] for tests and examples.
pub mod testing {
    use std::collections::VecDeque;

    use super::Dialogs;
    use crate::form::{FormModel, FormPort, SubmitButton};
    use crate::record::Field;
    use crate::render::{RowView, ScrollMode, TableModel, TablePort};
    use crate::validation::FieldError;

    /// A display made of a [`FormModel`], a [`TableModel`] and scripted dialogs.
    ///
    /// Confirmations pop answers from `answers`; when it runs out they are
    /// declined. Every dialog message is recorded.
    #[derive(Debug, Clone)]
    pub struct ScriptedUi {
        /// The form.
        pub form: FormModel,
        /// The table.
        pub table: TableModel,
        /// Pending confirmation answers.
        pub answers: VecDeque<bool>,
        /// Questions asked, in order.
        pub confirmations: Vec<String>,
        /// Alerts shown, in order.
        pub alerts: Vec<String>,
    }

    impl ScriptedUi {
        /// A fresh display whose table shows `visible_rows` rows.
        #[must_use]
        pub fn new(visible_rows: usize) -> Self {
            Self {
                form: FormModel::new(),
                table: TableModel::new(visible_rows),
                answers: VecDeque::new(),
                confirmations: Vec::new(),
                alerts: Vec::new(),
            }
        }

        /// Queue an answer for the next confirmation.
        #[must_use]
        pub fn answering(mut self, answer: bool) -> Self {
            self.answers.push_back(answer);
            self
        }
    }

    impl Dialogs for ScriptedUi {
        fn confirm(&mut self, message: &str) -> bool {
            self.confirmations.push(message.to_string());
            self.answers.pop_front().unwrap_or(false)
        }

        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }
    }

    impl FormPort for ScriptedUi {
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

    impl TablePort for ScriptedUi {
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
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedUi;
    use super::*;
    use crate::error::{Error, Result};
    use crate::logging::init_test_logging;
    use crate::storage::{MemorySlotStore, RECORDS_SLOT};
    use crate::validation::FieldErrorKind;

    type TestController = Controller<MemorySlotStore, ScriptedUi>;

    fn start_with(store: MemorySlotStore, ui: ScriptedUi) -> TestController {
        init_test_logging();
        Controller::start(Persistence::new(store), ui)
    }

    fn start_empty() -> TestController {
        start_with(MemorySlotStore::new(), ScriptedUi::new(10))
    }

    fn fill(controller: &mut TestController, values: [&str; 4]) {
        for (field, value) in Field::ALL.into_iter().zip(values) {
            controller.ui_mut().set_value(field, value);
        }
    }

    fn john() -> [&'static str; 4] {
        ["John Smith", "123", "j@x.com", "1234567890"]
    }

    fn writes(controller: &TestController) -> usize {
        controller.persistence().store().write_count()
    }

    #[test]
    fn test_start_renders_empty_list() {
        let controller = start_empty();
        assert!(controller.records().is_empty());
        assert!(controller.ui().table.is_empty_message_visible());
        assert_eq!(controller.ui().table.count(), 0);
        assert_eq!(controller.mode(), FormMode::Create);
    }

    #[test]
    fn test_start_loads_stored_records() {
        let raw = r#"[{"name":"Ada Lovelace","studentId":"7","email":"ada@example.org","contact":"5551234567"}]"#;
        let controller = start_with(
            MemorySlotStore::new().with_slot(RECORDS_SLOT, raw),
            ScriptedUi::new(10),
        );

        assert_eq!(controller.records().len(), 1);
        assert_eq!(controller.ui().table.count(), 1);
        assert_eq!(controller.ui().table.rows()[0].cells[0].value, "Ada Lovelace");
    }

    #[test]
    fn test_start_with_invalid_slot_is_empty() {
        let controller = start_with(
            MemorySlotStore::new().with_slot(RECORDS_SLOT, "{{{ not json"),
            ScriptedUi::new(10),
        );
        assert!(controller.records().is_empty());
        assert!(controller.ui().alerts.is_empty());
    }

    #[test]
    fn test_submit_valid_record_appends() {
        let mut controller = start_empty();
        fill(&mut controller, john());

        assert_eq!(controller.handle(Event::Submit), Outcome::Added { index: 0 });
        assert_eq!(
            controller.records(),
            [StudentRecord::new("John Smith", "123", "j@x.com", "1234567890")]
        );
        assert_eq!(controller.ui().table.count(), 1);
        assert_eq!(controller.mode(), FormMode::Create);
        assert_eq!(
            controller.ui().alerts,
            ["Student \"John Smith\" added successfully!"]
        );
        for field in Field::ALL {
            assert_eq!(controller.ui().value(field), "");
        }
        assert_eq!(writes(&controller), 1);
    }

    #[test]
    fn test_submit_trims_values() {
        let mut controller = start_empty();
        fill(&mut controller, ["  John Smith ", " 123", "j@x.com  ", "1234567890 "]);

        controller.handle(Event::Submit);
        assert_eq!(controller.records()[0].name, "John Smith");
        assert_eq!(controller.records()[0].student_id, "123");
    }

    #[test]
    fn test_submit_empty_name_is_required_error() {
        let mut controller = start_empty();
        fill(&mut controller, ["", "123", "j@x.com", "1234567890"]);

        let outcome = controller.handle(Event::Submit);
        assert_eq!(
            outcome,
            Outcome::Rejected(vec![FieldError::required(Field::Name)])
        );

        let shown = controller.ui().form.error(Field::Name).unwrap();
        assert_eq!(shown.message(), "Student name is required");
        assert!(controller.records().is_empty());
        assert_eq!(writes(&controller), 0);
        // Other inputs keep what was typed.
        assert_eq!(controller.ui().value(Field::Email), "j@x.com");
    }

    #[test]
    fn test_submit_reports_every_failing_field() {
        let mut controller = start_empty();
        fill(&mut controller, ["J0hn", "", "a@b", "12345"]);

        let Outcome::Rejected(errors) = controller.handle(Event::Submit) else {
            panic!("expected rejection");
        };
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0].kind, FieldErrorKind::Invalid);
        assert_eq!(errors[1].kind, FieldErrorKind::Required);
        assert_eq!(controller.ui().form.errors().count(), 4);
    }

    #[test]
    fn test_submit_clears_previous_errors() {
        let mut controller = start_empty();
        fill(&mut controller, ["", "", "", ""]);
        controller.handle(Event::Submit);
        assert_eq!(controller.ui().form.errors().count(), 4);

        fill(&mut controller, ["John Smith", "123", "", "1234567890"]);
        controller.handle(Event::Submit);
        let remaining: Vec<Field> = controller.ui().form.errors().map(|e| e.field).collect();
        assert_eq!(remaining, [Field::Email]);
    }

    #[test]
    fn test_duplicate_ids_are_accepted() {
        let mut controller = start_empty();
        fill(&mut controller, john());
        controller.handle(Event::Submit);
        fill(&mut controller, john());
        controller.handle(Event::Submit);

        assert_eq!(controller.records().len(), 2);
    }

    #[test]
    fn test_edit_populates_form() {
        let mut controller = start_empty();
        fill(&mut controller, john());
        controller.handle(Event::Submit);

        assert_eq!(
            controller.handle(Event::Edit(0)),
            Outcome::EditStarted { index: 0 }
        );
        let form = &controller.ui().form;
        assert_eq!(form.value(Field::Contact), "1234567890");
        assert_eq!(form.submit_button(), SubmitButton::Update);
        assert_eq!(form.focused(), Some(Field::Name));
        assert_eq!(form.scroll_requests(), 1);
        assert_eq!(controller.mode(), FormMode::Edit(0));
    }

    #[test]
    fn test_edit_then_submit_replaces_in_place() {
        let mut controller = start_empty();
        fill(&mut controller, john());
        controller.handle(Event::Submit);
        fill(&mut controller, ["Ada Lovelace", "7", "ada@example.org", "5551234567"]);
        controller.handle(Event::Submit);

        controller.handle(Event::Edit(0));
        controller.ui_mut().set_value(Field::Email, "john@new.org");

        assert_eq!(controller.handle(Event::Submit), Outcome::Updated { index: 0 });
        assert_eq!(controller.records().len(), 2);
        assert_eq!(
            controller.records()[0],
            StudentRecord::new("John Smith", "123", "john@new.org", "1234567890")
        );
        assert_eq!(controller.records()[1].name, "Ada Lovelace");
        assert_eq!(controller.mode(), FormMode::Create);
        assert_eq!(controller.ui().form.submit_button(), SubmitButton::Add);
        assert_eq!(
            controller.ui().alerts.last().unwrap(),
            "Student \"John Smith\" updated successfully!"
        );
    }

    #[test]
    fn test_invalid_edit_submit_stays_in_edit_mode() {
        let mut controller = start_empty();
        fill(&mut controller, john());
        controller.handle(Event::Submit);
        controller.handle(Event::Edit(0));
        controller.ui_mut().set_value(Field::Contact, "123");

        assert!(matches!(
            controller.handle(Event::Submit),
            Outcome::Rejected(_)
        ));
        assert_eq!(controller.mode(), FormMode::Edit(0));
        assert_eq!(controller.records()[0].contact, "1234567890");
    }

    #[test]
    fn test_edit_missing_row_is_ignored() {
        let mut controller = start_empty();
        assert_eq!(controller.handle(Event::Edit(3)), Outcome::Ignored);
        assert_eq!(controller.mode(), FormMode::Create);
    }

    #[test]
    fn test_reset_leaves_edit_mode() {
        let mut controller = start_empty();
        fill(&mut controller, john());
        controller.handle(Event::Submit);
        controller.handle(Event::Edit(0));
        controller.ui_mut().show_error(&FieldError::invalid(Field::Email));

        assert_eq!(controller.handle(Event::Reset), Outcome::Reset);
        assert_eq!(controller.mode(), FormMode::Create);
        assert_eq!(controller.ui().form.submit_button(), SubmitButton::Add);
        assert_eq!(controller.ui().form.errors().count(), 0);
        assert_eq!(controller.ui().value(Field::Name), "");
        assert_eq!(controller.records().len(), 1);
    }

    #[test]
    fn test_delete_confirmed_removes_and_saves() {
        let mut controller = start_with(MemorySlotStore::new(), ScriptedUi::new(10).answering(true));
        fill(&mut controller, john());
        controller.handle(Event::Submit);

        let outcome = controller.handle(Event::Delete(0));
        assert!(matches!(outcome, Outcome::Deleted { index: 0, .. }));
        assert!(controller.records().is_empty());
        assert_eq!(
            controller.ui().confirmations,
            ["Are you sure you want to delete John Smith?"]
        );
        assert_eq!(writes(&controller), 2);
        assert!(controller.ui().table.is_empty_message_visible());
        assert_eq!(controller.ui().table.count(), 0);
    }

    #[test]
    fn test_delete_declined_changes_nothing() {
        let mut controller = start_with(MemorySlotStore::new(), ScriptedUi::new(10).answering(false));
        fill(&mut controller, john());
        controller.handle(Event::Submit);
        let before = writes(&controller);

        assert_eq!(
            controller.handle(Event::Delete(0)),
            Outcome::DeleteDeclined { index: 0 }
        );
        assert_eq!(controller.records().len(), 1);
        assert_eq!(writes(&controller), before);
    }

    #[test]
    fn test_delete_missing_row_does_not_ask() {
        let mut controller = start_empty();
        assert_eq!(controller.handle(Event::Delete(0)), Outcome::Ignored);
        assert!(controller.ui().confirmations.is_empty());
    }

    #[test]
    fn test_delete_of_edited_record_resets_form() {
        let mut controller = start_with(MemorySlotStore::new(), ScriptedUi::new(10).answering(true));
        fill(&mut controller, john());
        controller.handle(Event::Submit);
        controller.handle(Event::Edit(0));

        controller.handle(Event::Delete(0));
        assert_eq!(controller.mode(), FormMode::Create);
        assert_eq!(controller.ui().value(Field::Name), "");
    }

    #[test]
    fn test_delete_before_edited_record_shifts_target() {
        let mut controller = start_with(MemorySlotStore::new(), ScriptedUi::new(10).answering(true));
        fill(&mut controller, john());
        controller.handle(Event::Submit);
        fill(&mut controller, ["Ada Lovelace", "7", "ada@example.org", "5551234567"]);
        controller.handle(Event::Submit);

        controller.handle(Event::Edit(1));
        controller.handle(Event::Delete(0));
        assert_eq!(controller.mode(), FormMode::Edit(0));

        controller.ui_mut().set_value(Field::StudentId, "8");
        assert_eq!(controller.handle(Event::Submit), Outcome::Updated { index: 0 });
        assert_eq!(controller.records()[0].student_id, "8");
    }

    #[test]
    fn test_blur_sets_and_clears_error() {
        let mut controller = start_empty();
        controller.ui_mut().set_value(Field::Contact, "12345");

        let outcome = controller.handle(Event::Blur(Field::Contact));
        assert_eq!(
            outcome,
            Outcome::FieldChecked {
                field: Field::Contact,
                error: Some(FieldError::invalid(Field::Contact)),
            }
        );
        assert!(controller.ui().form.error(Field::Contact).is_some());

        controller.ui_mut().set_value(Field::Contact, "1234567890");
        controller.handle(Event::Blur(Field::Contact));
        assert!(controller.ui().form.error(Field::Contact).is_none());
    }

    #[test]
    fn test_blur_on_empty_field_clears_error() {
        let mut controller = start_empty();
        controller.handle(Event::Submit);
        assert!(controller.ui().form.error(Field::Name).is_some());

        controller.handle(Event::Blur(Field::Name));
        assert!(controller.ui().form.error(Field::Name).is_none());
    }

    #[test]
    fn test_render_overflow_switches_scroll_mode() {
        let mut controller = start_with(MemorySlotStore::new(), ScriptedUi::new(1));
        fill(&mut controller, john());
        controller.handle(Event::Submit);
        assert_eq!(controller.ui().table.scroll_mode(), crate::render::ScrollMode::Auto);

        fill(&mut controller, john());
        controller.handle(Event::Submit);
        assert_eq!(controller.ui().table.scroll_mode(), crate::render::ScrollMode::Scroll);
    }

    #[derive(Debug, Default)]
    struct FailingStore;

    impl SlotStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::internal("disk full"))
        }
    }

    #[test]
    fn test_save_failure_alerts_and_keeps_memory() {
        init_test_logging();
        let mut controller = Controller::start(Persistence::new(FailingStore), ScriptedUi::new(10));
        for (field, value) in Field::ALL.into_iter().zip(john()) {
            controller.ui_mut().set_value(field, value);
        }

        assert_eq!(controller.handle(Event::Submit), Outcome::Added { index: 0 });
        assert_eq!(controller.records().len(), 1);
        assert_eq!(controller.ui().table.count(), 1);
        assert_eq!(
            controller.ui().alerts,
            [
                SAVE_FAILED_MESSAGE.to_string(),
                "Student \"John Smith\" added successfully!".to_string(),
            ]
        );
    }

    #[test]
    fn test_quota_failure_is_non_fatal() {
        init_test_logging();
        let persistence = Persistence::new(MemorySlotStore::new()).with_quota(Some(10));
        let mut controller = Controller::start(persistence, ScriptedUi::new(10));
        for (field, value) in Field::ALL.into_iter().zip(john()) {
            controller.ui_mut().set_value(field, value);
        }

        controller.handle(Event::Submit);
        assert_eq!(controller.records().len(), 1);
        assert_eq!(controller.ui().alerts[0], SAVE_FAILED_MESSAGE);
        assert_eq!(controller.persistence().store().write_count(), 0);
    }

    #[test]
    fn test_records_survive_restart() {
        let mut controller = start_empty();
        fill(&mut controller, john());
        controller.handle(Event::Submit);

        let store = controller.persistence().store().clone();
        let restarted = start_with(store, ScriptedUi::new(10));
        assert_eq!(restarted.records(), controller.records());
    }
}
