//! Command handlers for CLI subcommands

mod docs;
mod validate;

pub use docs::handle_docs;
pub use validate::handle_validate;
