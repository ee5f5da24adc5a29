pub mod csv;
pub mod report_writer;
