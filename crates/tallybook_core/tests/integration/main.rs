//! Single integration test binary: all integration tests as modules.
//!
//! Run: `cargo test -p tallybook_core --test integration`
//! Filter by module: `cargo test -p tallybook_core --test integration crud_flow::`

mod common;
mod crud_flow;
mod filters;
mod forms;
mod routing;
