//! Gallery configuration parameters.

use serde::{Deserialize, Serialize};

use crate::path::PathParams;

/// Gallery configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Seed for layout and particle randomness.
    /// `None` scatters cards differently on every mount.
    pub seed: Option<u64>,

    /// Pixels of empty space below the last card.
    pub bottom_padding: f64,

    /// Alt text for cards that do not define their own.
    pub default_alt: String,

    /// Shape of the connecting path.
    pub path: PathParams,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            seed: None,
            bottom_padding: 200.0,
            default_alt: "Valentine photo".to_owned(),
            path: PathParams::default(),
        }
    }
}

impl GalleryConfig {
    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the bottom padding.
    #[must_use]
    pub fn with_bottom_padding(mut self, padding: f64) -> Self {
        self.bottom_padding = padding;
        self
    }

    /// Set the fallback alt text.
    #[must_use]
    pub fn with_default_alt(mut self, alt: impl Into<String>) -> Self {
        self.default_alt = alt.into();
        self
    }

    /// Set the path shape.
    #[must_use]
    pub fn with_path_params(mut self, params: PathParams) -> Self {
        self.path = params;
        self
    }
}
