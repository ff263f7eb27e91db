//! # reel-core
//!
//! Core types, ID prefixes, and error types for reel.
//!
//! This crate provides the foundational types shared across all reel crates:
//! - Entity structs for the curriculum hierarchy (classes, subjects, topics)
//!   plus usage records and produced videos
//! - The video status enum with its state machine
//! - Catalog and selection value types consumed by the topic rotation scheduler
//! - ID prefix constants
//! - Cross-cutting error types

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
