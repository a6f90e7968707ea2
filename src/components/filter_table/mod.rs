mod catalog;
mod committed;
mod component;
mod state;

pub use catalog::{COLUMN_OPTIONS, ColumnOption, DEFAULT_COMMITTED_COLUMNS, lookup};
pub use committed::CommittedColumns;
pub use component::{Checkbox, FilterTable};
pub use state::FilterSelection;
