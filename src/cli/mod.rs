//! CLI module - table I/O and the operator login step

pub mod login;
pub mod tables;

pub use login::{wait_for_login, LOGIN_URL};
pub use tables::{read_url_column, write_leads, write_messages};
