//! `student-registry` - A validated register of student records
//!
//! This library provides the record model, field validation, persistence of
//! the record list to a single storage slot, table rendering, and the
//! add/edit/delete controller that ties them to a display.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod logging;
pub mod record;
pub mod render;
pub mod storage;
pub mod terminal;
pub mod validation;

pub use config::Config;
pub use controller::{Controller, Dialogs, Event, Outcome, Ui};
pub use error::{Error, Result};
pub use form::{FormMode, FormModel, FormPort};
pub use logging::init_logging;
pub use record::{Field, StudentRecord};
pub use render::{render_table, TableModel, TablePort};
pub use storage::{MemorySlotStore, Persistence, SlotStore, SqliteSlotStore, StorageStats};
pub use terminal::TerminalUi;
pub use validation::FieldError;
