use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use tracing::debug;

use crate::complex::{canonical_bits, Complex};
use crate::config::ViewportConfig;
use crate::error::CoreError;

/// A rectangular window onto the complex plane.
///
/// The camera maps normalized screen coordinates `(tx, ty)` to complex-plane
/// points. The rectangle is described by a `center` and two direction
/// vectors: `width` along the real axis and `height` along the imaginary
/// axis, with `height = width / aspect_ratio`.
///
/// The aspect ratio is kept as given so the constructor arguments can be
/// recovered bit for bit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "ViewportConfig", into = "ViewportConfig")]
pub struct Viewport {
    center: Complex,
    width: Complex,
    height: Complex,
    aspect_ratio: f64,
}

impl Viewport {
    /// Create a viewport centred on `center_re + center_im·i`.
    ///
    /// `aspect_ratio` is display width over display height. No validation is
    /// performed: a zero aspect ratio gives non-finite height components and
    /// a negative width mirrors the view. Use [`try_new`](Self::try_new) to
    /// reject such inputs.
    pub const fn new(center_re: f64, center_im: f64, width: f64, aspect_ratio: f64) -> Self {
        Self {
            center: Complex::new(center_re, center_im),
            width: Complex::from_real(width),
            height: Complex::new(0.0, width / aspect_ratio),
            aspect_ratio,
        }
    }

    /// Create a viewport, rejecting degenerate parameters.
    pub fn try_new(
        center_re: f64,
        center_im: f64,
        width: f64,
        aspect_ratio: f64,
    ) -> crate::Result<Self> {
        if !center_re.is_finite() || !center_im.is_finite() {
            return Err(CoreError::InvalidViewport {
                reason: format!("center must be finite, got ({center_re}, {center_im})"),
            });
        }
        if width <= 0.0 || !width.is_finite() {
            return Err(CoreError::InvalidViewport {
                reason: format!("width must be positive and finite, got {width}"),
            });
        }
        if aspect_ratio == 0.0 || !aspect_ratio.is_finite() {
            return Err(CoreError::InvalidViewport {
                reason: format!("aspect ratio must be non-zero and finite, got {aspect_ratio}"),
            });
        }
        let viewport = Self::new(center_re, center_im, width, aspect_ratio);
        if !viewport.height.is_finite() {
            return Err(CoreError::InvalidViewport {
                reason: format!("height {width} / {aspect_ratio} overflows"),
            });
        }
        debug!(
            center = %viewport.center,
            width,
            aspect_ratio,
            "Created viewport"
        );
        Ok(viewport)
    }

    /// Map a normalized position to a point on the complex plane.
    ///
    /// `tx` runs from 0 (left edge) to 1 (right edge) and is centred at 0.5.
    /// `ty` scales the height vector from the centre line, so `ty = 0` stays
    /// on the centre's imaginary coordinate. Values outside `[0, 1]` are
    /// extrapolated linearly; callers needing clipping must clamp first.
    #[inline]
    pub fn to_complex(&self, tx: f64, ty: f64) -> Complex {
        self.center + self.width.scale(tx - 0.5) + self.height.scale(ty)
    }

    /// Centre of the viewport in the complex plane.
    pub fn center(&self) -> Complex {
        self.center
    }

    /// Real-axis direction vector spanning the full width.
    pub fn width_vector(&self) -> Complex {
        self.width
    }

    /// Imaginary-axis direction vector spanning the full height.
    pub fn height_vector(&self) -> Complex {
        self.height
    }

    /// The horizontal extent in complex-plane units.
    pub fn complex_width(&self) -> f64 {
        self.width.re
    }

    /// The vertical extent in complex-plane units.
    pub fn complex_height(&self) -> f64 {
        self.height.im
    }

    /// The aspect ratio (width / height) this viewport was built with.
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }
}

impl PartialEq for Viewport {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center
            && self.width == other.width
            && self.height == other.height
            && canonical_bits(self.aspect_ratio) == canonical_bits(other.aspect_ratio)
    }
}

impl Eq for Viewport {}

impl Hash for Viewport {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.center.hash(state);
        self.width.hash(state);
        self.height.hash(state);
        canonical_bits(self.aspect_ratio).hash(state);
    }
}
