pub mod loaders;
pub mod worksheet;

pub use loaders::{load_all_toml_files, load_toml_to_worksheet, WorksheetDocument};
pub use worksheet::{ExportOptions, Question, Section, Worksheet};
