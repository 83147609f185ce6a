//! Core types shared across textdiff facilities
//!
//! This crate provides the canonical schema constants used by both the
//! error facility and the logging facility, so field keys and event names
//! stay identical between emitters and test assertions.

pub mod schema;
