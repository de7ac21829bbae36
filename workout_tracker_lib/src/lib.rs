pub mod config;
pub mod controller;
pub mod error;
pub mod list_view;
pub mod map;
pub mod marker_layer;
pub mod registry;
pub mod workout;

#[cfg(test)]
pub(crate) mod test_map;

pub use error::{Error, Field, Result};
