use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::viewport::Viewport;

// ---------------------------------------------------------------------------
// Viewport description
// ---------------------------------------------------------------------------

/// The four constructor arguments of a [`Viewport`], in serialisable form.
///
/// This is the on-disk shape of a viewport (`Viewport` itself serialises
/// through it). Reading and writing files is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    pub center_re: f64,
    pub center_im: f64,
    pub width: f64,
    /// Display width over display height. Defaults to 4:3 when absent.
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: f64,
}

pub const DEFAULT_ASPECT_RATIO: f64 = 4.0 / 3.0;

fn default_aspect_ratio() -> f64 {
    DEFAULT_ASPECT_RATIO
}

impl ViewportConfig {
    /// Parse a config from JSON. The values are not validated until
    /// [`build`](Self::build).
    pub fn from_json(json: &str) -> crate::Result<Self> {
        match serde_json::from_str::<Self>(json) {
            Ok(config) => {
                debug!(?config, "Parsed viewport config");
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse viewport config: {e}");
                Err(e.into())
            }
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate and construct the described viewport.
    pub fn build(&self) -> crate::Result<Viewport> {
        let built =
            Viewport::try_new(self.center_re, self.center_im, self.width, self.aspect_ratio);
        built.inspect_err(|e| warn!("Rejected viewport config: {e}"))
    }
}

impl From<&Viewport> for ViewportConfig {
    fn from(vp: &Viewport) -> Self {
        let center = vp.center();
        Self {
            center_re: center.re,
            center_im: center.im,
            width: vp.complex_width(),
            aspect_ratio: vp.aspect_ratio(),
        }
    }
}

impl From<Viewport> for ViewportConfig {
    fn from(vp: Viewport) -> Self {
        Self::from(&vp)
    }
}

impl TryFrom<ViewportConfig> for Viewport {
    type Error = CoreError;

    fn try_from(config: ViewportConfig) -> crate::Result<Self> {
        config.build()
    }
}

// ---------------------------------------------------------------------------
// Named views
// ---------------------------------------------------------------------------

/// A viewport description with a display name, as stored in a list of
/// saved views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedViewport {
    pub name: String,
    #[serde(flatten)]
    pub config: ViewportConfig,
}

/// Parse a JSON array of named views and build every viewport.
///
/// Fails on the first entry that does not describe a valid viewport.
pub fn views_from_json(json: &str) -> crate::Result<Vec<(String, Viewport)>> {
    let entries: Vec<NamedViewport> = serde_json::from_str(json).inspect_err(|e| {
        warn!("Failed to parse view list: {e}");
    })?;
    let views = entries
        .into_iter()
        .map(|entry| {
            let vp = entry.config.build().map_err(|e| CoreError::InvalidViewport {
                reason: format!("view {:?}: {e}", entry.name),
            })?;
            Ok((entry.name, vp))
        })
        .collect::<crate::Result<Vec<_>>>()?;
    debug!(count = views.len(), "Loaded named views");
    Ok(views)
}
