//! Record list persistence on a single durable slot.

use tracing::{debug, error, info};

use crate::error::{Error, Result};
use crate::record::StudentRecord;

use super::SlotStore;

/// Key of the slot holding the serialized record list.
pub const RECORDS_SLOT: &str = "studentRecords";

/// Saves and loads the whole record list as one JSON array.
///
/// Failures are logged here. A failed save leaves the caller's list untouched;
/// a failed load yields an empty list, discarding whatever was stored.
#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
    quota: Option<usize>,
}

impl<S: SlotStore> Persistence<S> {
    /// Wrap a slot store, with no size limit.
    pub fn new(store: S) -> Self {
        Self { store, quota: None }
    }

    /// Limit the serialized size accepted by [`save`](Self::save).
    #[must_use]
    pub fn with_quota(mut self, quota: Option<usize>) -> Self {
        self.quota = quota;
        self
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the underlying store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Overwrite the slot with `records`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails, the value exceeds the quota,
    /// or the store rejects the write. The error has already been logged.
    pub fn save(&mut self, records: &[StudentRecord]) -> Result<()> {
        match self.write(records) {
            Ok(bytes) => {
                debug!(count = records.len(), bytes, "Saved student records");
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "Error saving student records");
                Err(err)
            }
        }
    }

    fn write(&mut self, records: &[StudentRecord]) -> Result<usize> {
        let encoded = serde_json::to_string(records)?;
        if let Some(limit) = self.quota {
            if encoded.len() > limit {
                return Err(Error::QuotaExceeded {
                    size: encoded.len(),
                    limit,
                });
            }
        }
        self.store.set(RECORDS_SLOT, &encoded)?;
        Ok(encoded.len())
    }

    /// Read the slot, falling back to an empty list on any failure.
    #[must_use]
    pub fn load(&self) -> Vec<StudentRecord> {
        match self.try_load() {
            Ok(records) => {
                info!(count = records.len(), "Loaded student records");
                records
            }
            Err(err) => {
                error!(error = %err, "Error loading student records, starting empty");
                Vec::new()
            }
        }
    }

    /// Read the slot; an absent slot is an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or the stored text is not a list
    /// of records.
    pub fn try_load(&self) -> Result<Vec<StudentRecord>> {
        match self.store.get(RECORDS_SLOT)? {
            None => Ok(Vec::new()),
            Some(text) => Ok(serde_json::from_str(&text)?),
        }
    }
}
