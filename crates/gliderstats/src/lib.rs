//! `gliderstats` - Reporting over a gliding flight dataset
//!
//! This library provides the building blocks for the `glstats` binary:
//! scanning a line-delimited JSON dataset of gliding flights, computing
//! aggregate statistics, and rendering or writing reports.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod badges;
pub mod cli;
pub mod collect;
pub mod config;
pub mod embed;
pub mod error;
pub mod flight;
pub mod logging;
pub mod reader;
pub mod report;
pub mod scoring;
pub mod select;
pub mod taskcheck;
pub mod verify;

pub use config::Config;
pub use error::{Error, Result};
pub use flight::Flight;
pub use logging::init_logging;
pub use reader::{read_flights, Scan};
