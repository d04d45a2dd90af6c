//! Navigation
//!
//! The route table that selects which view a path shows.

pub mod table;

pub use table::{RouteTable, View};
