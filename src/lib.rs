// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub mod average;
pub mod progress;
pub mod roster;
pub mod runner;
pub mod scrape;
pub mod tally;
