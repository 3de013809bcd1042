// Application layer: session state machine and result rendering for the CLI.

pub mod render;
pub mod session;
