//! Client handles used to talk to the service tasks.

#[macro_use]
mod macros;
mod inventory_client;

pub use inventory_client::*;
