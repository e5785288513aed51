//! Implementation blocks for the manager.

pub mod connection_manager;
