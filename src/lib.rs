//! TUI Snake (workspace facade crate).
//!
//! This package keeps a stable `tui_snake::{core,input,store,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_store as store;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
