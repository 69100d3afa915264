pub mod csv;
pub mod table;

pub use csv::LineEnding;
pub use table::{Table, TableFormat};
