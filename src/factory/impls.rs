//! Implementation blocks for the factory.

pub mod connection_factory;
