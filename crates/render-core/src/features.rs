//! Static capability descriptors for render backends.
//!
//! The driver consults a backend's `RenderFeatures` before the job starts
//! to decide what to hand it: which color representation, whether labels
//! and anchor metadata should be routed to it at all, and which defaults
//! apply when the host document does not pin margins or resolution.

use bitflags::bitflags;
use vellum_types::Size;

bitflags! {
    /// Capability switches a backend advertises to the driver.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RenderFlags: u32 {
        /// Accepts arbitrary 24-bit color rather than an indexed palette.
        const TRUE_COLOR = 1 << 0;
        /// Device origin is top-left with y growing downward.
        const Y_GOES_DOWN = 1 << 1;
        /// Backend performs its own coordinate transform; the driver must
        /// pass layout coordinates through untouched.
        const TRANSFORM = 1 << 2;
        /// Text labels should be routed to the backend.
        const LABELS = 1 << 3;
        /// Hyperlink regions should be routed to the backend.
        const MAPS = 1 << 4;
        /// Anchor target windows are honored.
        const TARGETS = 1 << 5;
        /// Anchor tooltips are honored.
        const TOOLTIPS = 1 << 6;
    }
}

/// How colors are resolved before being handed to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    /// Resolve every color to 8-bit RGBA channels.
    RgbaByte,
    /// Pass color names through unresolved.
    NamedString,
}

/// A backend's static self-description, registered alongside its factory.
#[derive(Debug)]
pub struct RenderFeatures {
    pub flags: RenderFlags,
    /// Default page margin in points when the host sets none.
    pub default_margin: f64,
    /// Default padding around the drawing in layout units.
    pub default_pad: f64,
    /// Default page size in points; zero means unpaginated.
    pub default_page: Size,
    /// Default resolution in dots per inch.
    pub default_dpi: Size,
    pub color_space: ColorSpace,
    /// Color names the backend understands natively. Names outside this
    /// table are resolved per `color_space` before emission.
    pub known_colors: &'static [&'static str],
    /// Loader identifier recorded in diagnostics.
    pub loader_name: &'static str,
}

impl RenderFeatures {
    pub const fn has(&self, flags: RenderFlags) -> bool {
        self.flags.contains(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_FEATURES: RenderFeatures = RenderFeatures {
        flags: RenderFlags::Y_GOES_DOWN
            .union(RenderFlags::LABELS)
            .union(RenderFlags::MAPS),
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
        known_colors: &["black", "white"],
        loader_name: "test",
    };

    #[test]
    fn feature_flags_are_queryable() {
        assert!(TEST_FEATURES.has(RenderFlags::Y_GOES_DOWN));
        assert!(TEST_FEATURES.has(RenderFlags::LABELS.union(RenderFlags::MAPS)));
        assert!(!TEST_FEATURES.has(RenderFlags::TRUE_COLOR));
    }

    #[test]
    fn descriptor_is_const_constructible() {
        assert_eq!(TEST_FEATURES.default_dpi.width, 96.0);
        assert_eq!(TEST_FEATURES.known_colors.len(), 2);
    }
}
