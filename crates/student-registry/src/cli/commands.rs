//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::record::Field;

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output the stored records as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Add command arguments.
///
/// Omitted values are submitted empty and reported as required.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Student name (letters and spaces)
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Student ID (digits)
    #[arg(short = 'i', long, default_value = "")]
    pub student_id: String,

    /// Email address
    #[arg(short, long, default_value = "")]
    pub email: String,

    /// Contact number (10 or more digits)
    #[arg(short = 'p', long, default_value = "")]
    pub contact: String,
}

impl AddCommand {
    /// The value typed into a field.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::StudentId => &self.student_id,
            Field::Email => &self.email,
            Field::Contact => &self.contact,
        }
    }
}

/// Edit command arguments.
#[derive(Debug, Args)]
pub struct EditCommand {
    /// Row index of the record to edit
    pub index: usize,

    /// New name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New student ID
    #[arg(short = 'i', long)]
    pub student_id: Option<String>,

    /// New email address
    #[arg(short, long)]
    pub email: Option<String>,

    /// New contact number
    #[arg(short = 'p', long)]
    pub contact: Option<String>,
}

impl EditCommand {
    /// The replacement for a field, if one was given.
    #[must_use]
    pub fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::StudentId => self.student_id.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Contact => self.contact.as_deref(),
        }
    }
}

/// Delete command arguments.
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Row index of the record to delete
    pub index: usize,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
