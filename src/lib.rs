pub mod cli;
pub mod config;
pub mod deck;
pub mod generation;
pub mod logging;
pub mod ui;
