//! Particle bursts played when a card is revealed.

pub mod burst;
pub mod spawner;

pub use burst::{BurstAction, BurstTask, ParticleBurst, CLEANUP_AFTER_MS, SPAWN_DELAY_MS};
pub use spawner::{
    particle_count_range, spawn_particles, Particle, EDGE_BAND, MAX_COUNT_SCALE, REFERENCE_WIDTH,
};
