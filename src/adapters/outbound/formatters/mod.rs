pub mod json_formatter;
pub mod table_formatter;

pub use json_formatter::JsonReportFormatter;
pub use table_formatter::TableReportFormatter;
