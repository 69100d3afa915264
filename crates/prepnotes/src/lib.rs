pub mod batch;
pub mod config;
pub mod enhancer;
pub mod error;
pub mod hardness;
pub mod material;
pub mod notes;
pub mod sanitize;
pub mod store;

pub use batch::{BatchConfig, BatchReport, BatchRunner, ChangeReporter, ConsoleReporter, NoopReporter};
pub use config::{load_config, Config};
pub use enhancer::{enhance, Enhancement};
pub use error::{ConfigError, PrepNotesError, Result, TableError};
pub use hardness::{classify, HardnessCategory};
pub use material::{MaterialCategory, MaterialRecord, Stage};
pub use notes::{is_brief, parse_sequence};
pub use store::Table;
