// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs parses arguments
// and dispatches to these handlers.

pub mod inspect;
pub mod interactive;
pub mod route;
