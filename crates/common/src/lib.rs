//! Pieces shared by every crate in the workspace: logging setup and
//! small response types.

pub mod types;
pub mod utils;
