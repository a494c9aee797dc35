//! Core rendering abstractions for graph output backends.
//!
//! This crate defines the contract between a layout host and its output
//! plugins:
//! - `RenderEngine` trait with one callback per graphical primitive
//! - `RenderJob` session context (sink, page geometry, object-state stack)
//! - `RenderFeatures` capability descriptor and the format `Registry`
//! - Shared services backends rely on: XML escaping, printf-style float
//!   formatting, and the compressible output `Sink`
//!
//! The host walks a pre-computed layout and invokes engine callbacks in
//! order; backends own no layout logic and keep no state across jobs.

mod engine;
mod error;
mod features;
mod job;
mod registry;
mod sink;
mod text;

pub mod fmt;
pub mod xml;

pub use engine::RenderEngine;
pub use error::RenderError;
pub use features::{ColorSpace, RenderFeatures, RenderFlags};
pub use job::{JobConfig, JobInfo, ObjState, PEN_WIDTH_NORMAL, PenStyle, RenderJob};
pub use registry::{EngineFactory, FormatRecord, Registry};
pub use sink::{Compression, Sink};
pub use text::{FontAlias, Justification, TextSpan};
