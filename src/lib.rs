// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod error;
pub mod core;
pub mod records;
pub mod dataset;
pub mod tsv;
pub mod specs;
pub mod session;
pub mod client;

pub mod gui;

pub use client::{DynClient, NeisClient};
pub use config::{options::{SchoolFilter, SchoolKind}, Config};
pub use error::{ConfigError, QueryError};
pub use records::{MealRecord, Record, SchoolRecord};
pub use session::{MealQueryKey, SearchOutcome, Session};
