//! # Game Records
//!
//! The record domain of the interaction icon patcher. Holds source keys, record
//! references, the flora/activator record shape, the fixed harvest-sound and
//! keyword catalog, and the load order used to resolve record overrides.
//!
//! This crate contains no classification logic; it only describes what a
//! record looks like once every override in the load order has been merged.

pub mod catalog;
pub mod error;
pub mod load_order;
pub mod records;

pub use catalog::*;
pub use error::*;
pub use load_order::*;
pub use records::*;
