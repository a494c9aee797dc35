//! VML output backend.
//!
//! Serializes finished drawings as Vector Markup Language embedded in an
//! XHTML page, the vector dialect legacy Internet Explorer renders
//! natively. Two formats are provided: `vml` writes plain markup and
//! `vmlz` (behind the `vmlz` feature) wraps the same bytes in a gzip
//! stream.
//!
//! The backend draws shapes, text runs, and hyperlink anchors. It
//! advertises [`RenderFlags::TRANSFORM`], so drivers hand it raw layout
//! coordinates and the engine does its own mapping onto the page.

use std::io::Write;

use vellum_render_core::{ColorSpace, FormatRecord, RenderFeatures, RenderFlags};
use vellum_types::Size;

pub mod colors;
mod coords;
mod engine;

pub use engine::VmlEngine;

/// Record id of the plain markup format.
pub const FORMAT_VML: u32 = 0;
/// Record id of the gzip-compressed format.
#[cfg(feature = "vmlz")]
pub const FORMAT_VMLZ: u32 = 1;

/// Static capability descriptor shared by both formats.
pub static VML_FEATURES: RenderFeatures = RenderFeatures {
    flags: RenderFlags::TRUE_COLOR
        .union(RenderFlags::Y_GOES_DOWN)
        .union(RenderFlags::TRANSFORM)
        .union(RenderFlags::LABELS)
        .union(RenderFlags::MAPS)
        .union(RenderFlags::TARGETS)
        .union(RenderFlags::TOOLTIPS),
    default_margin: 0.0,
    default_pad: 4.0,
    default_page: Size {
        width: 0.0,
        height: 0.0,
    },
    default_dpi: Size {
        width: 96.0,
        height: 96.0,
    },
    color_space: ColorSpace::RgbaByte,
    known_colors: colors::KNOWN_COLORS,
    loader_name: "vml",
};

/// Format records this backend provides, ready to install into a
/// [`Registry`](vellum_render_core::Registry).
pub fn formats<W: Write>() -> Vec<FormatRecord<W>> {
    let mut records = vec![FormatRecord {
        id: FORMAT_VML,
        name: "vml",
        quality: 1,
        engine: || Box::new(VmlEngine::new()),
        features: &VML_FEATURES,
    }];
    #[cfg(feature = "vmlz")]
    records.push(FormatRecord {
        id: FORMAT_VMLZ,
        name: "vmlz",
        quality: 1,
        engine: || Box::new(VmlEngine::new()),
        features: &VML_FEATURES,
    });
    records
}
