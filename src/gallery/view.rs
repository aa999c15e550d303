//! The top-level gallery view.
//!
//! `Gallery` owns every piece of mutable state and is driven by four
//! events: resize, click, clock advance, teardown. Each event is handled
//! to completion before the next, so a resize always leaves the config,
//! positions and path consistent with each other.

use crate::cards::{CardCatalog, CardId, RevealBoard, RevealTransition};
use crate::core::{GalleryError, LayoutRng, Result, TimerQueue};
use crate::layout::{generate_positions, remap_positions, BreakpointTable, LayoutConfig, Position, ResponsiveLayout};
use crate::particles::{BurstTask, Particle, ParticleBurst};
use crate::path::{build_path_with, card_centers, view_box, CurvePath};

use super::config::GalleryConfig;
use super::frame::{CardFace, CardView, ParticleOverlay, RenderFrame};
use super::preload::{ImagePreloader, NoopPreloader};

/// Interactive flip-card gallery.
///
/// ## Example
///
/// ```
/// use flipcard_gallery::cards::{CardCatalog, CardDefinition, CardId};
/// use flipcard_gallery::gallery::{Gallery, GalleryConfig};
/// use flipcard_gallery::layout::BreakpointTable;
///
/// let catalog = CardCatalog::new(vec![
///     CardDefinition::new(CardId::new("1"), "🎮").with_images(["a.jpeg", "b.jpeg"]),
///     CardDefinition::new(CardId::new("2"), "💝").with_image("c.jpeg"),
/// ])
/// .unwrap();
///
/// let mut gallery = Gallery::new(catalog, BreakpointTable::default(), 800.0, GalleryConfig::default().with_seed(1));
/// assert_eq!(gallery.path().segment_count(), 1);
///
/// let transition = gallery.click(&CardId::new("1"), 0).unwrap();
/// assert!(transition.is_reveal());
///
/// gallery.advance(300);
/// assert!(!gallery.particles(0).is_empty());
/// ```
#[derive(Debug)]
pub struct Gallery<P: ImagePreloader = NoopPreloader> {
    catalog: CardCatalog,
    layout: ResponsiveLayout,
    positions: Vec<Position>,
    path: CurvePath,
    reveal: RevealBoard,
    /// Last preloaded "next image" per card.
    upcoming: Vec<usize>,
    bursts: Vec<ParticleBurst>,
    timers: TimerQueue<BurstTask>,
    layout_rng: LayoutRng,
    particle_rng: LayoutRng,
    preloader: P,
    config: GalleryConfig,
    now_ms: u64,
}

impl Gallery<NoopPreloader> {
    /// Mount a gallery without image preloading.
    #[must_use]
    pub fn new(catalog: CardCatalog, table: BreakpointTable, viewport_width: f64, config: GalleryConfig) -> Self {
        Self::with_preloader(catalog, table, viewport_width, config, NoopPreloader)
    }
}

impl<P: ImagePreloader> Gallery<P> {
    /// Mount a gallery.
    ///
    /// Scatters the cards once, builds the path, and preloads every card's
    /// first image.
    pub fn with_preloader(
        catalog: CardCatalog,
        table: BreakpointTable,
        viewport_width: f64,
        config: GalleryConfig,
        preloader: P,
    ) -> Self {
        let root = config.seed.map_or_else(LayoutRng::from_entropy, LayoutRng::new);
        let mut layout_rng = root.for_context("positions");
        let particle_rng = root.for_context("particles");

        let layout = ResponsiveLayout::new(table, viewport_width);
        let positions = generate_positions(catalog.len(), &layout.current(), &mut layout_rng);

        let bursts = catalog
            .iter()
            .enumerate()
            .map(|(i, card)| ParticleBurst::new(i, card.emoji.clone()))
            .collect();

        let mut gallery = Self {
            reveal: RevealBoard::new(catalog.len()),
            upcoming: vec![0; catalog.len()],
            catalog,
            layout,
            positions,
            path: CurvePath::default(),
            bursts,
            timers: TimerQueue::new(),
            layout_rng,
            particle_rng,
            preloader,
            config,
            now_ms: 0,
        };
        gallery.rebuild_path();

        for card in gallery.catalog.iter() {
            if let Some(image) = card.image(0) {
                gallery.preloader.preload(image);
            }
        }

        tracing::debug!(
            cards = gallery.catalog.len(),
            viewport_width,
            columns = gallery.layout.current().columns.count(),
            "gallery mounted"
        );
        gallery
    }

    /// Handle a viewport resize.
    ///
    /// Returns `true` if a breakpoint was crossed and positions moved.
    pub fn resize(&mut self, viewport_width: f64) -> bool {
        let old = self.layout.current();
        let Some(new) = self.layout.observe(viewport_width) else {
            return false;
        };

        self.positions = remap_positions(&self.positions, &old, &new, &mut self.layout_rng);
        self.rebuild_path();
        true
    }

    /// Scatter the cards again under the current config.
    pub fn reshuffle(&mut self) {
        let config = self.layout.current();
        self.positions = generate_positions(self.catalog.len(), &config, &mut self.layout_rng);
        self.rebuild_path();
    }

    /// Click the card with `id` at time `now_ms`.
    ///
    /// # Errors
    ///
    /// [`GalleryError::UnknownCard`] if no card has that id.
    pub fn click(&mut self, id: &CardId, now_ms: u64) -> Result<RevealTransition> {
        let index = self
            .catalog
            .index_of(id)
            .ok_or_else(|| GalleryError::UnknownCard(id.to_string()))?;
        self.click_index(index, now_ms)
    }

    /// Click the card at catalog position `index` at time `now_ms`.
    ///
    /// Tasks due by `now_ms` fire first.
    ///
    /// # Errors
    ///
    /// [`GalleryError::UnknownCard`] if `index` is out of range.
    pub fn click_index(&mut self, index: usize, now_ms: u64) -> Result<RevealTransition> {
        let card = self
            .catalog
            .get(index)
            .ok_or_else(|| GalleryError::UnknownCard(format!("#{index}")))?;
        let image_count = card.image_count();

        self.advance(now_ms);

        let Some((board, transition)) = self.reveal.reduce(index, image_count) else {
            return Err(GalleryError::UnknownCard(format!("#{index}")));
        };
        self.reveal = board;
        let state = self.reveal.get(index).unwrap_or_default();
        tracing::trace!(index, ?transition, image = state.image_index, "card clicked");

        let config = self.layout.current();
        self.bursts[index].observe(state.face_up, self.now_ms, config.card_width, config.card_height, &mut self.timers);

        let upcoming = state.upcoming_image(image_count);
        if upcoming != self.upcoming[index] {
            self.upcoming[index] = upcoming;
            if let Some(image) = self.catalog.get(index).and_then(|c| c.image(upcoming)) {
                tracing::trace!(index, image, "preloading next image");
                self.preloader.preload(image);
            }
        }

        Ok(transition)
    }

    /// Move the clock to `now_ms` and fire every task that came due.
    ///
    /// The clock never moves backwards. Returns the number of tasks applied.
    pub fn advance(&mut self, now_ms: u64) -> usize {
        self.now_ms = self.now_ms.max(now_ms);

        let mut applied = 0;
        for (handle, task) in self.timers.pop_due(self.now_ms) {
            if let Some(burst) = self.bursts.get_mut(task.card) {
                if burst.handle(handle, &task, &mut self.particle_rng) {
                    applied += 1;
                }
            }
        }
        applied
    }

    /// Cancel every pending task and drop all particles.
    pub fn teardown(&mut self) {
        for burst in &mut self.bursts {
            burst.teardown(&mut self.timers);
        }
        self.timers.clear();
        tracing::debug!("gallery torn down");
    }

    fn rebuild_path(&mut self) {
        let centers = card_centers(&self.positions, self.layout.current().card_height);
        self.path = build_path_with(&centers, &self.config.path);
    }

    /// Container height: last card's top + card height + bottom padding.
    #[must_use]
    pub fn container_height(&self) -> f64 {
        let last_y = self.positions.last().map_or(0.0, |p| p.y);
        last_y + self.layout.current().card_height + self.config.bottom_padding
    }

    /// Snapshot of everything the presentation layer draws.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        let config = self.layout.current();
        let container_height = self.container_height();

        let cards = self
            .catalog
            .iter()
            .zip(&self.positions)
            .zip(self.reveal.iter())
            .map(|((card, pos), state)| {
                let face = match state.visible_image() {
                    Some(index) => CardFace::Front {
                        image: card.image(index).unwrap_or_default().to_owned(),
                        index,
                        alt: card.alt_or(&self.config.default_alt).to_owned(),
                        fit: card.fit_mode(),
                    },
                    None => CardFace::Back {
                        emoji: card.emoji.clone(),
                    },
                };
                CardView {
                    id: card.id.clone(),
                    left_percent: pos.x,
                    top_px: pos.y,
                    width: config.card_width,
                    height: config.card_height,
                    face,
                }
            })
            .collect();

        let overlays = self
            .catalog
            .iter()
            .zip(&self.bursts)
            .filter(|(_, burst)| !burst.particles().is_empty())
            .map(|(card, burst)| ParticleOverlay {
                card: card.id.clone(),
                generation: burst.generation(),
                particles: burst.particles().to_vec(),
            })
            .collect();

        RenderFrame {
            container_height,
            view_box: view_box(container_height),
            cards,
            path: self.path.clone(),
            path_d: self.path.to_svg_d(),
            overlays,
        }
    }

    /// The card catalog.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Active layout config.
    #[must_use]
    pub fn layout_config(&self) -> LayoutConfig {
        self.layout.current()
    }

    /// Current card positions, in catalog order.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Current connecting path.
    #[must_use]
    pub fn path(&self) -> &CurvePath {
        &self.path
    }

    /// Reveal state of every card.
    #[must_use]
    pub fn reveal_board(&self) -> &RevealBoard {
        &self.reveal
    }

    /// Live particles above card `index`.
    #[must_use]
    pub fn particles(&self, index: usize) -> &[Particle] {
        self.bursts
            .get(index)
            .map(ParticleBurst::particles)
            .unwrap_or_default()
    }

    /// Number of pending burst tasks.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.timers.len()
    }

    /// The image preloader.
    #[must_use]
    pub fn preloader(&self) -> &P {
        &self.preloader
    }

    /// Gallery configuration.
    #[must_use]
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }
}
