//! Loader module.
//!
//! Reads the sensor CSV format into a typed [`crate::types::Dataset`]:
//!
//! - [`schema`]: column names, dtypes and their fixed order
//! - [`DataLoader`]: file reading and row conversion

mod reader;
pub mod schema;

pub use reader::DataLoader;
