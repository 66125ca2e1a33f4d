use std::convert::From;
use std::error;
use std::fmt;
use std::io;
use std::result;

use crate::pagination::PageIntent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    Noop,
    PrevMonth,
    NextMonth,
    GoToMonth { year: i32, month: i32 },
    Today,
    Page(PageIntent),
    EnterCommand,
    Exit,
}

pub type CmdResult = result::Result<Cmd, CmdError>;

#[derive(Debug, Clone)]
pub struct CmdError {
    message: Option<String>,
    kind: io::ErrorKind,
}

impl CmdError {
    pub fn new(message: String) -> Self {
        CmdError {
            message: Some(message),
            kind: io::ErrorKind::Other,
        }
    }
}

impl fmt::Display for CmdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}", msg),
            None => write!(f, "Error executing command: {:?}", self.kind),
        }
    }
}

impl error::Error for CmdError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

impl From<crate::error::Error> for CmdError {
    fn from(error: crate::error::Error) -> Self {
        CmdError::new(error.to_string())
    }
}
