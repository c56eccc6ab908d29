pub mod consts;
pub mod errors;
pub mod course;
pub mod key;
pub mod table;
pub mod config;

pub use config::TableConfig;
pub use course::CourseRecord;
pub use errors::{CourseError, Result};
pub use key::{bucket_index, parse_key, parse_key_strict, KeyPolicy};
pub use table::{CourseTable, Entries, Iter, TableStats};
