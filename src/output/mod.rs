pub mod color;
pub mod formatter;
pub mod summary_formatter;
