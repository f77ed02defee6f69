//! The service task that owns the inventory and serves requests against it.

pub mod service;

pub use service::*;
