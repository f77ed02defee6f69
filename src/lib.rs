//! # Inventory Tracker
//!
//! In-memory, single-user inventory of named products.
//!
//! - **Domain** - [`domain::Product`] (validated price and quantity) and
//!   [`domain::Inventory`] (ordered collection, case-insensitive lookup,
//!   total value)
//! - **Service** - [`inventory_actor::InventoryService`] owns the inventory and
//!   serves typed [`messages::InventoryRequest`]s one at a time
//! - **Client** - [`clients::InventoryClient`], a cloneable handle with one
//!   async method per request
//! - **System** - [`app_system::InventorySystem`] for startup and shutdown,
//!   plus config and tracing setup
//! - **Shell** - [`shell::Shell`], the text menu that parses input and
//!   re-prompts on errors

pub mod app_system;
pub mod clients;
pub mod domain;
pub mod error;
pub mod inventory_actor;
pub mod messages;
pub mod shell;

#[cfg(test)]
mod log_capture;
#[cfg(test)]
mod mock_framework;
