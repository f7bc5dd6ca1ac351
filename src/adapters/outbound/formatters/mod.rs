/// Formatter adapters - report output representations
pub mod csv_formatter;
pub mod json_formatter;

pub use csv_formatter::CsvFormatter;
pub use json_formatter::JsonFormatter;
