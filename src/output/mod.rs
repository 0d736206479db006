pub mod result_logger;

pub use result_logger::{format_record, LogRecord, ResultLogger};
