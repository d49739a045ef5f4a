//! Shared primitives: error taxonomy, geometry and color types.

pub(crate) mod color;
pub(crate) mod core;
pub(crate) mod error;
