//! Core types and utilities shared by the backdrop simulations.

pub mod cell_set;
pub mod config;
pub mod error;
pub mod steppable;
pub mod types;
pub mod viewport;

pub use cell_set::CellSet;
pub use config::*;
pub use error::{Error, Result};
pub use steppable::Steppable;
pub use types::*;
pub use viewport::Viewport;
