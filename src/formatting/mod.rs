pub mod date;

pub use date::{format_numeric, normalize, parse_slash_date, DateFormatError};
