//! Image preloading seam.
//!
//! The gallery asks for the image a card will show on its next click before
//! the click happens. Preloading is fire-and-forget: the gallery never waits
//! on it and never learns whether it succeeded.

/// Warms the host's image cache.
pub trait ImagePreloader {
    /// Start loading `image`. Must not block.
    fn preload(&mut self, image: &str);
}

/// Preloader that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopPreloader;

impl ImagePreloader for NoopPreloader {
    fn preload(&mut self, _image: &str) {}
}

/// Preloader that records every request in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingPreloader {
    requests: Vec<String>,
}

impl RecordingPreloader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> &[String] {
        &self.requests
    }

    /// Take and reset the recorded requests.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.requests)
    }
}

impl ImagePreloader for RecordingPreloader {
    fn preload(&mut self, image: &str) {
        self.requests.push(image.to_owned());
    }
}
