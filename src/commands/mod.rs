pub mod config_cmd;
pub mod format_cmd;

pub use config_cmd::execute_config;
pub use format_cmd::execute_format;
