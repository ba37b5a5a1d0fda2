//! Subcommand implementations.
//!
//! Each named operator command maps onto one handler here; all of them end
//! in [`send::execute`] or [`build::execute`].

pub mod build;
pub mod list;
pub mod sample;
pub mod send;
pub mod verify;
