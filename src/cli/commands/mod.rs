mod command_result;
pub mod helper;
pub mod init;
pub mod parse;
pub mod search;

pub use command_result::*;
