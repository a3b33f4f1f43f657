// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod gui;
pub mod scrape;
pub mod session;
pub mod teams;
