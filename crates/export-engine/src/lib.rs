//! MediaPress Export Engine
//!
//! Export pipeline that resolves a quality tier to a matched pair of
//! codec exporters and runs the two-step export sequence.
//!
//! # Pipeline Architecture
//!
//! ```text
//! quality tier ──► ExporterFactory ──┬── VideoExporter ──┐
//!                                    │                   ├── prepare()
//!                                    └── AudioExporter ──┘      │
//!                                                               ▼
//!                                                          export(dest)
//! ```
//!
//! Every exporter operation is a status-line emitter; no media is encoded
//! and the destination folder is never created or written to.

pub mod audio;
pub mod factory;
pub mod session;
pub mod video;

pub use audio::*;
pub use factory::*;
pub use session::*;
pub use video::*;
