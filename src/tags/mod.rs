pub mod handler;
pub mod models;
pub mod repository;
pub mod service;
pub mod value_type;

#[cfg(test)]
mod tests;

// make it easier to just use models
pub use models::*;

pub use value_type::ValueType;
