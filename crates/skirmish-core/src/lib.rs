//! Core types and definitions for the skirmish battle simulator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! unit data, archetype statistics, setup configuration, notifications,
//! snapshots, and constants. It has no dependency on any runtime or
//! rendering framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
