//! Implementation blocks for the bundled filesystems.

pub mod null_filesystem;

pub mod memory_filesystem;
