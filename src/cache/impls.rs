//! Implementation blocks for cache structures.

pub mod cache_operation;

pub mod cache_error;

pub mod cache_options;

pub mod cache_entry;

pub mod cached_filesystem;

pub mod cache_repository_filesystem;

pub mod cache_service;

pub mod memory_cache_repository;

pub mod log_cache_observer;
