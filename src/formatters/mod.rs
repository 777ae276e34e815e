pub mod dot;
pub mod json_compact;
pub mod report;

pub use dot::DotFormatter;
pub use json_compact::JsonCompactFormatter;
pub use report::ReportFormatter;
