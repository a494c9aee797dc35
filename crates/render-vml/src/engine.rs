//! The VML serializer.
//!
//! Output is an XHTML page whose drawing lives in one absolutely
//! positioned `<div>`; every shape is a `<v:*>` element carrying the same
//! style/coordsize/coordorigin attribute trio as the container so legacy
//! viewers agree on the coordinate system. Path data flips the y axis
//! sign instead of translating it; the negative `coordorigin` compensates.
//!
//! Emission is byte-stable: fragment order, whitespace, and number
//! formatting are part of the format contract, so helpers write fragments
//! in source order rather than assembling attribute maps.

use std::io::Write;

use vellum_render_core::fmt::G;
use vellum_render_core::xml;
use vellum_render_core::{
    Compression, Justification, ObjState, PEN_WIDTH_NORMAL, PenStyle, RenderEngine, RenderError,
    RenderJob, Sink, TextSpan,
};
use vellum_types::{Color, Pointf};

#[cfg(feature = "vmlz")]
use crate::FORMAT_VMLZ;
use crate::coords;

/// Render engine for the `vml` and `vmlz` formats. One instance serves
/// one job.
#[derive(Default)]
pub struct VmlEngine {
    /// Attribute trio computed at `begin_graph` and repeated on every
    /// shape element.
    graph_coords: String,
}

impl VmlEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Write a color token: `none` for transparent, `#rrggbb` for resolved
/// channels, the bare name otherwise.
fn put_color<W: Write>(out: &mut Sink<W>, color: &Color) -> Result<(), RenderError> {
    if color.is_transparent() {
        return out.put_str("none");
    }
    match color {
        Color::Named(name) => out.put_str(name),
        Color::Rgba(r, g, b, _) => {
            write!(out, "#{r:02x}{g:02x}{b:02x}")?;
            Ok(())
        }
    }
}

/// Stroke weight and dash pattern, emitted only when they differ from the
/// defaults. Each fragment starts with the closing quote of the previous
/// attribute value.
fn put_pen_attrs<W: Write>(out: &mut Sink<W>, obj: &ObjState) -> Result<(), RenderError> {
    if obj.pen_width != PEN_WIDTH_NORMAL {
        write!(out, "\" stroke-weight=\"{}", G(obj.pen_width))?;
    }
    match obj.pen_style {
        PenStyle::Dashed => out.put_str("\" dashstyle=\"dash")?,
        PenStyle::Dotted => out.put_str("\" dashstyle=\"dot")?,
        PenStyle::Solid => {}
    }
    Ok(())
}

fn stroke_element<W: Write>(
    out: &mut Sink<W>,
    obj: &ObjState,
    filled: bool,
) -> Result<(), RenderError> {
    out.put_str("<v:stroke fillcolor=\"")?;
    if filled {
        put_color(out, &obj.fill_color)?;
    } else {
        out.put_str("none")?;
    }
    out.put_str("\" strokecolor=\"")?;
    put_color(out, &obj.pen_color)?;
    put_pen_attrs(out, obj)?;
    out.put_str("\" />")
}

/// Stroke attributes attached directly to a shape element.
fn stroke_attr<W: Write>(out: &mut Sink<W>, obj: &ObjState) -> Result<(), RenderError> {
    out.put_str(" strokecolor=\"")?;
    put_color(out, &obj.pen_color)?;
    put_pen_attrs(out, obj)?;
    out.put_str("\"")
}

fn fill_element<W: Write>(
    out: &mut Sink<W>,
    obj: &ObjState,
    filled: bool,
) -> Result<(), RenderError> {
    out.put_str("<v:fill color=\"")?;
    if filled {
        put_color(out, &obj.fill_color)?;
    } else {
        out.put_str("none")?;
    }
    out.put_str("\" />")
}

impl<W: Write> RenderEngine<W> for VmlEngine {
    fn begin_job(&mut self, job: &mut RenderJob<W>) -> Result<(), RenderError> {
        log::debug!("starting vml job, format id {}", job.format());
        let compression = match job.format() {
            #[cfg(feature = "vmlz")]
            FORMAT_VMLZ => Compression::Zlib,
            _ => Compression::None,
        };
        job.out().start_compression(compression)?;

        let (out, info) = job.out_and_info();
        out.put_str("<?xml version=\"1.1\" encoding=\"UTF-8\" ?>\n")?;
        out.put_str("<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.1//EN\" ")?;
        out.put_str("\"http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd\">\n")?;
        out.put_str("<html xml:lang=\"en\" xmlns=\"http://www.w3.org/1999/xhtml\" ")?;
        out.put_str("xmlns:v=\"urn:schemas-microsoft-com:vml\"")?;
        out.put_str(">")?;

        write!(
            out,
            "\n<!-- Generated by {} version {} ({})\n     For user: {} -->\n",
            xml::escape(&info.tool),
            xml::escape(&info.version),
            xml::escape(&info.build),
            xml::escape(&info.user)
        )?;
        Ok(())
    }

    fn begin_graph(&mut self, job: &mut RenderJob<W>) -> Result<(), RenderError> {
        log::debug!("rendering graph {:?}", job.config().graph_name);
        self.graph_coords = coords::graph_coords(job.config().width, job.config().height);

        let (out, config) = job.out_and_config();
        out.put_str("<head>")?;
        if !config.graph_name.is_empty() {
            write!(out, "<title>{}</title>", xml::escape(&config.graph_name))?;
        }
        write!(out, "<!-- Pages: {} -->\n</head>\n", config.pages())?;

        write!(out, "<body>\n<div class=\"graph\" {}>\n", self.graph_coords)?;
        out.put_str(
            "<style type=\"text/css\">\nv\\:* {\nbehavior: url(#default#VML);display:inline-block;position: absolute; left: 0px; top: 0px;\n}\n</style>\n",
        )
    }

    fn end_graph(&mut self, job: &mut RenderJob<W>) -> Result<(), RenderError> {
        job.out().put_str("</div>\n</body>\n")?;
        job.out().finish_compression()
    }

    fn begin_anchor(
        &mut self,
        job: &mut RenderJob<W>,
        href: Option<&str>,
        tooltip: Option<&str>,
        target: Option<&str>,
    ) -> Result<(), RenderError> {
        let out = job.out();
        out.put_str("      <a")?;
        if let Some(href) = href.filter(|s| !s.is_empty()) {
            write!(out, " href=\"{}\"", xml::escape(href))?;
        }
        if let Some(tooltip) = tooltip.filter(|s| !s.is_empty()) {
            write!(out, " title=\"{}\"", xml::escape(tooltip))?;
        }
        if let Some(target) = target.filter(|s| !s.is_empty()) {
            write!(out, " target=\"{}\"", xml::escape(target))?;
        }
        out.put_str(">\n")
    }

    fn end_anchor(&mut self, job: &mut RenderJob<W>) -> Result<(), RenderError> {
        job.out().put_str("      </a>\n")
    }

    fn text_span(
        &mut self,
        job: &mut RenderJob<W>,
        pos: Pointf,
        span: &TextSpan,
    ) -> Result<(), RenderError> {
        let height = job.config().height;
        let (out, obj) = job.out_and_obj();

        out.put_str("        <div")?;
        match span.justification {
            Justification::Left => out.put_str(" style=\"text-align: left; ")?,
            Justification::Right => out.put_str(" style=\"text-align: right; ")?,
            Justification::Center => out.put_str(" style=\"text-align: center; ")?,
        }
        write!(
            out,
            "position: absolute; left: {}px; top: {}px;",
            G(coords::text_left(pos.x)),
            G(coords::text_top(height, pos.y))
        )?;

        match &span.alias {
            Some(alias) => {
                write!(out, " font-family: '{}';", alias.family)?;
                if let Some(weight) = &alias.weight {
                    write!(out, " font-weight: {weight};")?;
                }
                if let Some(stretch) = &alias.stretch {
                    write!(out, " font-stretch: {stretch};")?;
                }
                if let Some(style) = &alias.style {
                    write!(out, " font-style: {style};")?;
                }
            }
            None => write!(out, " font-family: '{}';", span.font_name)?,
        }
        write!(
            out,
            " font-size: {:.2}pt;",
            span.font_size * coords::FONT_SIZE_SCALE
        )?;

        // Black text is the document default and stays implicit.
        match &obj.pen_color {
            Color::Named(name) => {
                if !name.eq_ignore_ascii_case("black") {
                    write!(out, "color:{name};")?;
                }
            }
            Color::Rgba(r, g, b, _) => write!(out, "color:#{r:02x}{g:02x}{b:02x};")?,
        }

        out.put_str("\">")?;
        out.put_str(&xml::escape(&span.text))?;
        out.put_str("</div>\n")
    }

    fn ellipse(
        &mut self,
        job: &mut RenderJob<W>,
        center: Pointf,
        corner: Pointf,
        filled: bool,
    ) -> Result<(), RenderError> {
        let height = job.config().height;
        let (out, obj) = job.out_and_obj();

        out.put_str("        <v:oval")?;
        stroke_attr(out, obj)?;
        out.put_str(" style=\"position: absolute;")?;
        write!(
            out,
            " left:  {}pt; top:    {}pt;",
            G(coords::oval_left(center.x, corner.x)),
            G(coords::oval_top(height, corner.y))
        )?;
        write!(
            out,
            " width: {}pt; height: {}pt;",
            G(2.0 * (corner.x - center.x)),
            G(2.0 * (corner.y - center.y))
        )?;
        out.put_str("\">")?;
        stroke_element(out, obj, filled)?;
        fill_element(out, obj, filled)?;
        out.put_str("</v:oval>\n")
    }

    fn polygon(
        &mut self,
        job: &mut RenderJob<W>,
        points: &[Pointf],
        filled: bool,
    ) -> Result<(), RenderError> {
        let (out, obj) = job.out_and_obj();

        out.put_str("        <v:shape")?;
        stroke_attr(out, obj)?;
        write!(out, " {}><!-- polygon --><v:path", self.graph_coords)?;
        out.put_str(" v=\"")?;
        for (i, point) in points.iter().enumerate() {
            if i == 0 {
                out.put_str("m ")?;
            }
            write!(out, "{:.0},{:.0} ", point.x, -point.y)?;
            if i == 0 {
                out.put_str("l ")?;
            }
            if i == points.len() - 1 {
                out.put_str("x e ")?;
            }
        }
        out.put_str("\">")?;
        stroke_element(out, obj, filled)?;
        out.put_str("</v:path>")?;
        fill_element(out, obj, filled)?;
        out.put_str("</v:shape>\n")
    }

    fn bezier(
        &mut self,
        job: &mut RenderJob<W>,
        points: &[Pointf],
        _arrow_at_start: bool,
        _arrow_at_end: bool,
        filled: bool,
    ) -> Result<(), RenderError> {
        let (out, obj) = job.out_and_obj();

        write!(out, "        <v:shape {}><!-- bezier --><v:path", self.graph_coords)?;
        out.put_str(" v=\"")?;
        for (i, point) in points.iter().enumerate() {
            let prefix = match i {
                0 => "m ",
                1 => "c ",
                _ => "",
            };
            write!(out, "{}{:.0},{:.0} ", prefix, point.x, -point.y)?;
        }
        out.put_str("\" />")?;
        stroke_element(out, obj, filled)?;
        out.put_str("</v:path>")?;
        fill_element(out, obj, filled)?;
        out.put_str("</v:shape>\n")
    }

    fn polyline(&mut self, job: &mut RenderJob<W>, points: &[Pointf]) -> Result<(), RenderError> {
        let (out, obj) = job.out_and_obj();

        write!(out, "        <v:shape {}><!-- polyline --><v:path", self.graph_coords)?;
        out.put_str(" v=\"")?;
        for (i, point) in points.iter().enumerate() {
            if i == 0 {
                out.put_str(" m ")?;
            }
            write!(out, "{:.0},{:.0} ", point.x, -point.y)?;
            if i == 0 {
                out.put_str(" l ")?;
            }
            if i == points.len() - 1 {
                out.put_str(" e ")?;
            }
        }
        out.put_str("\">")?;
        stroke_element(out, obj, false)?;
        out.put_str("</v:path>")?;
        out.put_str("</v:shape>\n")
    }

    fn comment(&mut self, job: &mut RenderJob<W>, text: &str) -> Result<(), RenderError> {
        let out = job.out();
        out.put_str("      <!-- ")?;
        out.put_str(&xml::escape(text))?;
        out.put_str(" -->\n")
    }
}
