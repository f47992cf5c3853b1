//! Interactive command shell

pub mod command;
pub mod session;

pub use command::{Command, UnknownCommand};
pub use session::{Flow, Session};
