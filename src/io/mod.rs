pub mod config_io;
pub mod fetch;
pub mod output;
