//! The per-render job context shared between the driver and a backend.
//!
//! A `RenderJob` bundles everything one rendering pass needs: the document
//! parameters, the identity banner of the producing tool, the output sink,
//! and the current graphics state. The driver mutates the graphics state
//! (colors, pen, anchor metadata) between callbacks; the backend reads it
//! when emitting shapes.

use crate::error::RenderError;
use crate::sink::Sink;
use serde::{Deserialize, Serialize};
use std::io::Write;
use vellum_types::Color;

/// Line width treated as "unset"; backends skip emitting an explicit
/// stroke weight at this value.
pub const PEN_WIDTH_NORMAL: f64 = 1.0;

/// Stroke patterns a driver can select.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PenStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Identity of the producing tool, emitted into document banners.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobInfo {
    pub tool: String,
    pub version: String,
    pub build: String,
    pub user: String,
}

/// Parameters of a single rendering pass.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobConfig {
    /// Registered format id selected for this job.
    #[serde(default)]
    pub format: u32,
    #[serde(default)]
    pub graph_name: String,
    /// Drawing width in layout units.
    pub width: f64,
    /// Drawing height in layout units.
    pub height: f64,
    #[serde(default = "default_pages")]
    pub pages_x: u32,
    #[serde(default = "default_pages")]
    pub pages_y: u32,
}

fn default_pages() -> u32 {
    1
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            format: 0,
            graph_name: String::new(),
            width: 0.0,
            height: 0.0,
            pages_x: 1,
            pages_y: 1,
        }
    }
}

impl JobConfig {
    pub fn new(graph_name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            graph_name: graph_name.into(),
            width,
            height,
            ..Default::default()
        }
    }

    pub fn pages(&self) -> u32 {
        self.pages_x * self.pages_y
    }
}

/// Graphics state for the object currently being drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjState {
    pub pen_color: Color,
    pub fill_color: Color,
    pub pen_style: PenStyle,
    pub pen_width: f64,
}

impl Default for ObjState {
    fn default() -> Self {
        Self {
            pen_color: Color::default(),
            fill_color: Color::default(),
            pen_style: PenStyle::Solid,
            pen_width: PEN_WIDTH_NORMAL,
        }
    }
}

pub struct RenderJob<W: Write> {
    config: JobConfig,
    info: JobInfo,
    sink: Sink<W>,
    obj: ObjState,
    saved: Vec<ObjState>,
}

impl<W: Write> RenderJob<W> {
    pub fn new(config: JobConfig, info: JobInfo, writer: W) -> Self {
        Self {
            config,
            info,
            sink: Sink::new(writer),
            obj: ObjState::default(),
            saved: Vec::new(),
        }
    }

    pub fn config(&self) -> &JobConfig {
        &self.config
    }

    pub fn info(&self) -> &JobInfo {
        &self.info
    }

    /// Format id the driver selected for this job.
    pub fn format(&self) -> u32 {
        self.config.format
    }

    pub fn obj(&self) -> &ObjState {
        &self.obj
    }

    pub fn obj_mut(&mut self) -> &mut ObjState {
        &mut self.obj
    }

    /// Save the current graphics state before entering a nested object.
    /// The new current state starts as a copy of the parent's.
    pub fn push_obj(&mut self) {
        self.saved.push(self.obj.clone());
    }

    /// Restore the graphics state saved by the matching `push_obj`.
    pub fn pop_obj(&mut self) {
        match self.saved.pop() {
            Some(obj) => self.obj = obj,
            None => log::warn!("graphics state pop without matching push"),
        }
    }

    pub fn out(&mut self) -> &mut Sink<W> {
        &mut self.sink
    }

    /// Borrow the sink and the current graphics state at once, for
    /// emission paths that write while consulting pen and fill.
    pub fn out_and_obj(&mut self) -> (&mut Sink<W>, &ObjState) {
        (&mut self.sink, &self.obj)
    }

    pub fn out_and_config(&mut self) -> (&mut Sink<W>, &JobConfig) {
        (&mut self.sink, &self.config)
    }

    pub fn out_and_info(&mut self) -> (&mut Sink<W>, &JobInfo) {
        (&mut self.sink, &self.info)
    }

    /// Consume the job and return the underlying writer, finishing any
    /// live compression stream.
    pub fn finish(self) -> Result<W, RenderError> {
        self.sink.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> RenderJob<Vec<u8>> {
        RenderJob::new(
            JobConfig::new("g", 100.0, 200.0),
            JobInfo::default(),
            Vec::new(),
        )
    }

    #[test]
    fn push_and_pop_restore_graphics_state() {
        let mut job = job();
        job.obj_mut().pen_color = Color::named("red");
        job.push_obj();
        job.obj_mut().pen_color = Color::named("blue");
        job.obj_mut().pen_width = 3.0;
        job.pop_obj();
        assert_eq!(job.obj().pen_color, Color::named("red"));
        assert_eq!(job.obj().pen_width, PEN_WIDTH_NORMAL);
    }

    #[test]
    fn pop_without_push_keeps_current_state() {
        let mut job = job();
        job.obj_mut().fill_color = Color::named("green");
        job.pop_obj();
        assert_eq!(job.obj().fill_color, Color::named("green"));
    }

    #[test]
    fn split_borrow_allows_writing_while_reading_state() {
        let mut job = job();
        job.obj_mut().pen_width = 2.0;
        let (out, obj) = job.out_and_obj();
        out.put_str(&format!("w={}", obj.pen_width)).unwrap();
        assert_eq!(job.finish().unwrap(), b"w=2");
    }

    #[test]
    fn default_config_is_a_single_page() {
        let config = JobConfig::default();
        assert_eq!(config.pages(), 1);
    }

    #[test]
    fn config_deserializes_with_page_defaults() {
        let json = r#"{"graphName":"g","width":10.0,"height":20.0}"#;
        let config: JobConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.pages_x, 1);
        assert_eq!(config.pages_y, 1);
        assert_eq!(config.format, 0);
    }
}
