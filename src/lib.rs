pub mod browser;
pub mod config;
pub mod display;
pub mod grid;
pub mod parser;
pub mod saved;
pub mod schedule;
pub mod web;
