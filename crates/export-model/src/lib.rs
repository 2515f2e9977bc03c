//! MediaPress Export Model
//!
//! Defines the core data contracts for MediaPress exports:
//! - **Quality:** The closed set of quality tiers an export can target
//! - **Payload:** The opaque media stand-in handed to codec exporters
//!
//! The quality tier is the single input that determines which codec pair
//! an export uses; everything else in the pipeline derives from it.

pub mod payload;
pub mod quality;

pub use payload::*;
pub use quality::*;
