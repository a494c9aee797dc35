//! The backend trait a concrete output format implements.
//!
//! The driver walks the document once and calls these hooks in a fixed
//! order: `begin_job`, `begin_graph`, then per page `begin_page`, the
//! clusters, nodes, and edges with their shapes and labels, and the
//! matching `end_*` calls in reverse. Before each `begin_cluster`,
//! `begin_node`, or `begin_edge` the driver pushes the graphics state and
//! fills [`RenderJob::obj_mut`] with the object's colors, pen, and anchor
//! metadata; after the matching `end_*` it pops.
//!
//! Every hook defaults to doing nothing, so a backend only implements the
//! events its format can express.

use crate::error::RenderError;
use crate::job::RenderJob;
use crate::text::TextSpan;
use std::io::Write;
use vellum_types::Pointf;

pub trait RenderEngine<W: Write> {
    fn begin_job(&mut self, _job: &mut RenderJob<W>) -> Result<(), RenderError> {
        Ok(())
    }

    fn end_job(&mut self, _job: &mut RenderJob<W>) -> Result<(), RenderError> {
        Ok(())
    }

    fn begin_graph(&mut self, _job: &mut RenderJob<W>) -> Result<(), RenderError> {
        Ok(())
    }

    fn end_graph(&mut self, _job: &mut RenderJob<W>) -> Result<(), RenderError> {
        Ok(())
    }

    fn begin_layer(
        &mut self,
        _job: &mut RenderJob<W>,
        _name: &str,
        _index: usize,
        _count: usize,
    ) -> Result<(), RenderError> {
        Ok(())
    }

    fn end_layer(&mut self, _job: &mut RenderJob<W>) -> Result<(), RenderError> {
        Ok(())
    }

    fn begin_page(&mut self, _job: &mut RenderJob<W>) -> Result<(), RenderError> {
        Ok(())
    }

    fn end_page(&mut self, _job: &mut RenderJob<W>) -> Result<(), RenderError> {
        Ok(())
    }

    fn begin_cluster(&mut self, _job: &mut RenderJob<W>) -> Result<(), RenderError> {
        Ok(())
    }

    fn end_cluster(&mut self, _job: &mut RenderJob<W>) -> Result<(), RenderError> {
        Ok(())
    }

    fn begin_node(&mut self, _job: &mut RenderJob<W>) -> Result<(), RenderError> {
        Ok(())
    }

    fn end_node(&mut self, _job: &mut RenderJob<W>) -> Result<(), RenderError> {
        Ok(())
    }

    fn begin_edge(&mut self, _job: &mut RenderJob<W>) -> Result<(), RenderError> {
        Ok(())
    }

    fn end_edge(&mut self, _job: &mut RenderJob<W>) -> Result<(), RenderError> {
        Ok(())
    }

    /// Open a hyperlink region. Absent parts are simply not emitted.
    fn begin_anchor(
        &mut self,
        _job: &mut RenderJob<W>,
        _href: Option<&str>,
        _tooltip: Option<&str>,
        _target: Option<&str>,
    ) -> Result<(), RenderError> {
        Ok(())
    }

    fn end_anchor(&mut self, _job: &mut RenderJob<W>) -> Result<(), RenderError> {
        Ok(())
    }

    /// Draw one run of text anchored at `pos` per its justification.
    fn text_span(
        &mut self,
        _job: &mut RenderJob<W>,
        _pos: Pointf,
        _span: &TextSpan,
    ) -> Result<(), RenderError> {
        Ok(())
    }

    /// Draw an axis-aligned ellipse given its center and one bounding-box
    /// corner.
    fn ellipse(
        &mut self,
        _job: &mut RenderJob<W>,
        _center: Pointf,
        _corner: Pointf,
        _filled: bool,
    ) -> Result<(), RenderError> {
        Ok(())
    }

    fn polygon(
        &mut self,
        _job: &mut RenderJob<W>,
        _points: &[Pointf],
        _filled: bool,
    ) -> Result<(), RenderError> {
        Ok(())
    }

    /// Draw a cubic bezier path: one start point followed by control-point
    /// triples. Arrow flags describe arrowheads the driver already drew as
    /// polygons; backends that cannot attach arrowheads ignore them.
    fn bezier(
        &mut self,
        _job: &mut RenderJob<W>,
        _points: &[Pointf],
        _arrow_at_start: bool,
        _arrow_at_end: bool,
        _filled: bool,
    ) -> Result<(), RenderError> {
        Ok(())
    }

    fn polyline(&mut self, _job: &mut RenderJob<W>, _points: &[Pointf]) -> Result<(), RenderError> {
        Ok(())
    }

    /// Emit a comment into the output where the format supports one.
    fn comment(&mut self, _job: &mut RenderJob<W>, _text: &str) -> Result<(), RenderError> {
        Ok(())
    }
}
