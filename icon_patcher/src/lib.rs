//! # Icon Patcher
//!
//! Classifies flora and activator records into interaction icons and packages
//! them as string-override entries for the string distributor. This crate
//! consumes records from `game_records` and never modifies them.
//!
//! ## Core Components
//!
//! - **text**: null-safe, case-insensitive predicates over record text
//! - **color**: icon colors, ambient color mining, and color precedence
//! - **filter**: which sources are eligible for classification
//! - **baseline**: skipping records unchanged from their upstream definition
//! - **classifier**: ordered first-match rule tables for flora and activators
//! - **package**: output keys and icon markup
//! - **pipeline**: the per-source fold tying the above together
//! - **output**: JSON documents on disk
//!
//! ## Design Philosophy
//!
//! - **Data-Driven Rules**: rule priority is a table, not control flow
//! - **Resolved Up Front**: the ambient color is computed once and passed in
//! - **Total Classification**: every record yields an icon or a suppression

pub mod baseline;
pub mod classifier;
pub mod color;
pub mod config;
pub mod error;
pub mod filter;
pub mod output;
pub mod package;
pub mod pipeline;
pub mod text;

pub use baseline::*;
pub use classifier::*;
pub use color::*;
pub use config::*;
pub use error::*;
pub use filter::*;
pub use output::*;
pub use package::*;
pub use pipeline::*;
