pub mod activity;
pub mod calendar;
pub mod config;
pub mod date_input;
pub mod date_key;
pub mod draft;
pub mod journal;
pub mod keywords;
pub mod navigation;
pub mod paths;
pub mod selector;
pub mod storage;
pub mod timer;

#[cfg(test)]
mod tests;

pub use activity::{ActivityCatalog, ActivitySelection};
pub use calendar::CalendarMonth;
pub use config::Config;
pub use date_key::DateKey;
pub use draft::DraftStore;
pub use journal::{CalendarResult, Journal, QueryError};
pub use navigation::{NavigationEvent, Navigator, Route};
pub use selector::DateSelector;
pub use storage::{DraftStorage, FileStorage, MemoryStorage};
