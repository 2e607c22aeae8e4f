//! Records table rendering.
//!
//! [`render_table`] rebuilds the whole table from the record list through a
//! [`TablePort`]. Rendering is not incremental: every call clears the rows
//! first, so rendering the same list twice gives the same table.

use std::fmt::Write as _;

use crate::record::{Field, StudentRecord};

/// Message shown in place of the rows when the list is empty.
pub const EMPTY_MESSAGE: &str = "No students registered yet.";

/// Vertical scrollbar behaviour of the table wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollMode {
    /// Show a scrollbar only when needed.
    #[default]
    Auto,
    /// Always show a scrollbar.
    Scroll,
}

/// A per-row action control, bound to the row's index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Open the record in the form.
    Edit,
    /// Delete the record after confirmation.
    Delete,
}

impl RowAction {
    /// Button text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Delete => "Delete",
        }
    }

    /// Style classes of the button.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Edit => "action-btn edit-btn",
            Self::Delete => "action-btn delete-btn",
        }
    }
}

/// One labelled table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Column label (`data-label`).
    pub label: &'static str,
    /// Cell text.
    pub value: String,
}

/// One table row: the four field cells plus the actions cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Position of the record in the list; the actions act on it.
    pub index: usize,
    /// Cells in [`Field::ALL`] order.
    pub cells: Vec<Cell>,
    /// Action controls, Edit then Delete.
    pub actions: [RowAction; 2],
}

impl RowView {
    /// Build the row for the record at `index`.
    #[must_use]
    pub fn from_record(index: usize, record: &StudentRecord) -> Self {
        let cells = Field::ALL
            .iter()
            .map(|&field| Cell {
                label: field.label(),
                value: record.get(field).to_string(),
            })
            .collect();

        Self {
            index,
            cells,
            actions: [RowAction::Edit, RowAction::Delete],
        }
    }
}

/// The table part of the display.
pub trait TablePort {
    /// Remove every row from the table body.
    fn clear_rows(&mut self);

    /// Append a row to the table body.
    fn append_row(&mut self, row: RowView);

    /// Show or hide the empty-state message.
    fn set_empty_message_visible(&mut self, visible: bool);

    /// Update the record count display.
    fn set_count(&mut self, count: usize);

    /// Whether the wrapper's content is taller than its visible area.
    fn content_overflows(&self) -> bool;

    /// Set the wrapper's vertical scrollbar behaviour.
    fn set_scroll_mode(&mut self, mode: ScrollMode);
}

/// Rebuild the table from `records`.
pub fn render_table<T: TablePort + ?Sized>(port: &mut T, records: &[StudentRecord]) {
    port.clear_rows();
    port.set_empty_message_visible(records.is_empty());

    for (index, record) in records.iter().enumerate() {
        port.append_row(RowView::from_record(index, record));
    }

    port.set_count(records.len());

    let mode = if port.content_overflows() {
        ScrollMode::Scroll
    } else {
        ScrollMode::Auto
    };
    port.set_scroll_mode(mode);
}

/// In-memory table with a plain-text rendering.
///
/// The wrapper is `visible_rows` rows tall; more rows overflow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
    rows: Vec<RowView>,
    empty_message_visible: bool,
    count: usize,
    scroll_mode: ScrollMode,
    visible_rows: usize,
}

impl TableModel {
    /// An empty, not yet rendered table.
    #[must_use]
    pub fn new(visible_rows: usize) -> Self {
        Self {
            rows: Vec::new(),
            empty_message_visible: false,
            count: 0,
            scroll_mode: ScrollMode::Auto,
            visible_rows,
        }
    }

    /// The rendered rows.
    #[must_use]
    pub fn rows(&self) -> &[RowView] {
        &self.rows
    }

    /// The count display.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the empty-state message is shown.
    #[must_use]
    pub fn is_empty_message_visible(&self) -> bool {
        self.empty_message_visible
    }

    /// Current scrollbar behaviour.
    #[must_use]
    pub fn scroll_mode(&self) -> ScrollMode {
        self.scroll_mode
    }

    /// Render as an aligned text table followed by the count line.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        if self.empty_message_visible || self.rows.is_empty() {
            out.push_str(EMPTY_MESSAGE);
            out.push('\n');
        } else {
            let actions = format!("{}/{}", RowAction::Edit.label(), RowAction::Delete.label());
            let mut header: Vec<&str> = vec!["#"];
            header.extend(Field::ALL.iter().map(|f| f.label()));
            header.push("Actions");

            let lines: Vec<Vec<String>> = self
                .rows
                .iter()
                .map(|row| {
                    let mut line = vec![row.index.to_string()];
                    line.extend(row.cells.iter().map(|c| c.value.clone()));
                    line.push(actions.clone());
                    line
                })
                .collect();

            let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
            for line in &lines {
                for (width, value) in widths.iter_mut().zip(line) {
                    *width = (*width).max(value.chars().count());
                }
            }

            push_line(&mut out, header.iter().copied(), &widths);
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            push_line(&mut out, rule.iter().map(String::as_str), &widths);
            for line in &lines {
                push_line(&mut out, line.iter().map(String::as_str), &widths);
            }
        }

        let _ = writeln!(out, "Total students: {}", self.count);
        if self.scroll_mode == ScrollMode::Scroll {
            let _ = writeln!(
                out,
                "({} rows, {} visible at a time)",
                self.rows.len(),
                self.visible_rows
            );
        }
        out
    }
}

fn push_line<'a>(out: &mut String, values: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let cells: Vec<String> = values
        .zip(widths)
        .map(|(value, &width)| format!("{value:<width$}"))
        .collect();
    out.push_str(cells.join("  ").trim_end());
    out.push('\n');
}

impl TablePort for TableModel {
    fn clear_rows(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, row: RowView) {
        self.rows.push(row);
    }

    fn set_empty_message_visible(&mut self, visible: bool) {
        self.empty_message_visible = visible;
    }

    fn set_count(&mut self, count: usize) {
        self.count = count;
    }

    fn content_overflows(&self) -> bool {
        self.rows.len() > self.visible_rows
    }

    fn set_scroll_mode(&mut self, mode: ScrollMode) {
        self.scroll_mode = mode;
    }
}
