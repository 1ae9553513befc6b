mod command_result;
pub mod helper;
pub mod init;
pub mod prune;
pub mod sync;
pub mod update;

pub use command_result::*;
