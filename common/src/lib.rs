pub mod file_utils;
pub mod log_setup;
pub mod test_utils;

pub use file_utils::{files_with_extensions, has_extension};
pub use log_setup::setup_logging;
