//! CLI commands

pub mod index;
pub mod init;
pub mod list;
pub mod new;
pub mod render;
