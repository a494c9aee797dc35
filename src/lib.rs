//! Vellum renders finished graph drawings into output documents.
//!
//! The crate is a thin facade over the workspace members:
//!
//! - `vellum-types`: colors and geometry shared across the pipeline.
//! - `vellum-render-core`: the [`RenderEngine`] trait, the [`RenderJob`]
//!   context with its graphics-state stack, and the format [`Registry`].
//! - `vellum-render-vml`: the VML backend, re-exported as [`vml`].
//!
//! Drivers walk a laid-out drawing once, feeding shapes, text runs, and
//! anchors to an engine selected from the registry by format name.
//!
//! ```
//! use vellum::{default_registry, JobConfig, JobInfo, RenderEngine, RenderJob};
//!
//! let registry = default_registry::<Vec<u8>>();
//! let record = registry.select("vml")?;
//! let mut engine = record.create();
//!
//! let mut config = JobConfig::new("demo", 100.0, 200.0);
//! config.format = record.id;
//! let mut job = RenderJob::new(config, JobInfo::default(), Vec::new());
//!
//! engine.begin_job(&mut job)?;
//! engine.begin_graph(&mut job)?;
//! engine.end_graph(&mut job)?;
//!
//! let html = job.finish()?;
//! assert!(html.starts_with(b"<?xml"));
//! # Ok::<(), vellum::RenderError>(())
//! ```

use std::io::Write;

pub use vellum_render_core::{
    ColorSpace, Compression, EngineFactory, FontAlias, FormatRecord, JobConfig, JobInfo,
    Justification, ObjState, PEN_WIDTH_NORMAL, PenStyle, Registry, RenderEngine, RenderError,
    RenderFeatures, RenderFlags, RenderJob, Sink, TextSpan,
};
pub use vellum_render_core::{fmt, xml};
pub use vellum_render_vml as vml;
pub use vellum_types::{Color, Pointf, Size};

/// A registry with every built-in format installed.
pub fn default_registry<W: Write>() -> Registry<W> {
    let mut registry = Registry::new();
    registry.install_all(vml::formats());
    registry
}
