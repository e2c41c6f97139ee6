//! Core of the needboard: the list of needed items a care facility asks donors for, the
//! shared-secret gate in front of the admin screens, and the screen state machine that ties
//! them together.
//!
//! Front-ends (the desktop gui and the cli) own a [`Session`] and feed it [`Intent`]s. All
//! persistent state goes through the [`Storage`] trait; [`Db`] is the on-disk implementation.

use thiserror::Error;

pub mod config;
pub mod fs;
pub mod gate;
pub mod session;
pub mod storage;
pub mod store;
pub mod view;

pub use session::{Intent, Prompt, Session};
pub use storage::{Db, Storage};
pub use store::{NeedDraft, NeedRecord, RecordStore};
pub use view::{LoginOutcome, View, ViewController};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] storage::Error),
    #[error("Failed to serialize records: {0}")]
    Serialization(#[from] serde_json::Error),
}
