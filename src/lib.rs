//! Miner-local library - Local web server for the Bitcoin mining simulator.

pub mod app;
pub mod cli;
pub mod colors;
pub mod config;
pub mod handlers;
pub mod listener;
pub mod middleware;
pub mod state;
