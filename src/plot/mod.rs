//! Chart specification types consumed by the compiler core
//!
//! This module contains the typed inputs that the layout resolver and the
//! value-reference synthesizer read: encoding channels and their definitions,
//! marks, stacks, scales, and configuration.
//!
//! # Architecture
//!
//! The module is organized into submodules:
//!
//! - `channel` - Encoding channels (x, y, x2, color, ...)
//! - `channeldef` - Field/datum/value/signal channel definitions and field naming
//! - `bin` - Bin specifications
//! - `aggregate` - Aggregate operations
//! - `mark` - Mark types and mark definitions
//! - `stack` - Stack descriptors
//! - `scale` - Scale types and resolved scale components
//! - `config` - View and mark configuration

pub mod aggregate;
pub mod bin;
pub mod channel;
pub mod channeldef;
pub mod config;
pub mod mark;
pub mod scale;
pub mod stack;

// Re-export all types for convenience
pub use aggregate::*;
pub use bin::*;
pub use channel::*;
pub use channeldef::*;
pub use config::*;
pub use mark::*;
pub use scale::*;
pub use stack::*;
