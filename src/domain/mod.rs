//! Domain Layer
//!
//! The category explorer core - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Categories, the category tree, rankings
//! - `value_objects/` - Search keys and parsed commands
//! - `services/` - The navigator state machine
//! - `ports/` - Interfaces for the catalog listing and ranking lookup

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
