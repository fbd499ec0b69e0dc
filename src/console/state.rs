//! Session state for the operator console.

use crate::config::{ConfigLoader, PayRates};
use crate::store::RecordStore;

/// Resources shared by every console workflow.
///
/// The record collection itself is not held here: each workflow loads it
/// fresh from the store and saves it back on commit.
#[derive(Debug, Clone)]
pub struct AppState {
    store: RecordStore,
    rates: PayRates,
    page_size: usize,
}

impl AppState {
    /// Creates state from a loaded configuration.
    pub fn new(config: &ConfigLoader) -> Self {
        Self {
            store: RecordStore::new(&config.storage().data_file),
            rates: config.rates().clone(),
            page_size: config.storage().page_size,
        }
    }

    /// Creates state around an explicit store, with the other settings
    /// taken from `config`.
    pub fn with_store(store: RecordStore, config: &ConfigLoader) -> Self {
        Self {
            store,
            ..Self::new(config)
        }
    }

    /// Returns the record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Returns the pay rates.
    pub fn rates(&self) -> &PayRates {
        &self.rates
    }

    /// Returns the number of rows listed before pausing.
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}
