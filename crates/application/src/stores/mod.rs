//! In-memory stores owned by the workspace
//!
//! Each store is plain data with synchronous, total operations. The
//! [`Workspace`](crate::Workspace) façade owns one of each behind a lock.

mod collection_manager;
mod environment_store;
mod history_log;
mod tab_store;

pub use collection_manager::CollectionManager;
pub use environment_store::EnvironmentStore;
pub use history_log::HistoryLog;
pub use tab_store::TabStore;
