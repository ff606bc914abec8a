//! Driving adapters: the command line and the HTTP proxy.

pub mod cli;
pub mod http;
