//! Calendar grid and pagination engines with a small terminal showcase.
//!
//! [`calendar`] lays out months and moves a month cursor, [`pagination`]
//! resolves and applies page navigation over a set of page controls. Both
//! are pure and independent of each other; [`ui`] wires them into a
//! terminal shell.

pub mod calendar;
pub mod cmds;
pub mod config;
pub mod error;
pub mod events;
pub mod pagination;
pub mod ui;
