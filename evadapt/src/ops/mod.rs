//! Core operations.
//!
//! This module contains the business logic for evadapt commands,
//! separated from CLI argument parsing and output rendering.

pub mod bake;
pub mod check;
pub mod generate;
pub mod info;
pub mod preview;
pub mod set;
pub mod stage;

pub use bake::bake;
pub use check::check;
pub use generate::generate;
pub use info::info;
pub use preview::preview;
pub use set::set;
pub use stage::stage;
