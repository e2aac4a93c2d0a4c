//! Guide layers and their styles.

use std::fmt;

use gyre_layout::OrbitGeometry;

/// An 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha, 0 = fully transparent.
    pub a: u8,
}

impl Rgba {
    /// `#FF0000`
    pub const RED: Rgba = Rgba::opaque(0xFF, 0x00, 0x00);
    /// `#00FF00`
    pub const GREEN: Rgba = Rgba::opaque(0x00, 0xFF, 0x00);
    /// `#0000FF`
    pub const BLUE: Rgba = Rgba::opaque(0x00, 0x00, 0xFF);
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0 };

    /// A fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 0xFF {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

/// Stroke and fill of a guide circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuideStyle {
    /// Outline color.
    pub stroke: Rgba,
    /// Outline width.
    pub stroke_width: f64,
    /// Interior color.
    pub fill: Rgba,
}

impl GuideStyle {
    /// Default outline width for every layer.
    pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

    /// Outline-only style in `stroke`.
    pub const fn outline(stroke: Rgba) -> Self {
        Self {
            stroke,
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
            fill: Rgba::TRANSPARENT,
        }
    }
}

/// Which orbit radius a guide layer traces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuideLayer {
    /// Inner boundary (previous orbit plus padding).
    Inner,
    /// Circle through object centers.
    Center,
    /// Outer boundary.
    Outer,
}

impl GuideLayer {
    /// Every layer, innermost radius first.
    pub const ALL: [GuideLayer; 3] = [GuideLayer::Inner, GuideLayer::Center, GuideLayer::Outer];

    /// Default style: red inner, green center, blue outer.
    pub fn default_style(self) -> GuideStyle {
        match self {
            GuideLayer::Inner => GuideStyle::outline(Rgba::RED),
            GuideLayer::Center => GuideStyle::outline(Rgba::GREEN),
            GuideLayer::Outer => GuideStyle::outline(Rgba::BLUE),
        }
    }

    /// The radius this layer traces for `orbit`.
    pub fn radius_of(self, orbit: &OrbitGeometry) -> f64 {
        match self {
            GuideLayer::Inner => orbit.inner_radius,
            GuideLayer::Center => orbit.center_radius,
            GuideLayer::Outer => orbit.radius,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            GuideLayer::Inner => 0,
            GuideLayer::Center => 1,
            GuideLayer::Outer => 2,
        }
    }
}

impl fmt::Display for GuideLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuideLayer::Inner => write!(f, "inner"),
            GuideLayer::Center => write!(f, "center"),
            GuideLayer::Outer => write!(f, "outer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gyre_core::OrbitId;
    use gyre_layout::OrbitKind;

    #[test]
    fn default_styles() {
        let inner = GuideLayer::Inner.default_style();
        assert_eq!(inner.stroke.to_string(), "#FF0000");
        assert_eq!(inner.stroke_width, 2.0);
        assert_eq!(inner.fill, Rgba::TRANSPARENT);
        assert_eq!(GuideLayer::Center.default_style().stroke.to_string(), "#00FF00");
        assert_eq!(GuideLayer::Outer.default_style().stroke.to_string(), "#0000FF");
        assert_eq!(Rgba::TRANSPARENT.to_string(), "#00000000");
    }

    #[test]
    fn layers_trace_their_radius() {
        let orbit = OrbitGeometry {
            id: OrbitId::next(),
            index: 1,
            kind: OrbitKind::Ring,
            inner_radius: 10.0,
            center_radius: 15.0,
            radius: 20.0,
            object_count: 3,
        };
        let radii: Vec<f64> = GuideLayer::ALL.iter().map(|l| l.radius_of(&orbit)).collect();
        assert_eq!(radii, vec![10.0, 15.0, 20.0]);
    }
}
