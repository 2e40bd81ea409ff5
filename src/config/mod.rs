//! Grammar registry types and the data source loader

pub mod grammar;
pub mod loader;

pub use grammar::{GrammarFragment, GrammarRegistry};
pub use loader::DataLoader;
