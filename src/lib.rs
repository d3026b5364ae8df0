/*
 * Pipe Descaling Animation - Module Definitions
 *
 * This file defines the module structure for the descaling animation.
 * The scene and animation modules hold the particle state machine; the
 * remaining modules form the nannou application shell around it.
 */

// Re-export key components for easier access
pub use agent::DescalingAgent;
pub use animation::{Animation, Element};
pub use bond::Bond;
pub use camera::Camera;
pub use debug::DebugInfo;
pub use params::AnimationParams;
pub use scale::{Layer, ScaleParticle, Wall};
pub use scene::Scene;
pub use spatial_grid::SpatialGrid;

// Define modules
pub mod agent;
pub mod animation;
pub mod app;
pub mod bond;
pub mod camera;
pub mod debug;
pub mod fonts;
pub mod input;
pub mod params;
pub mod renderer;
pub mod scale;
pub mod scene;
pub mod spatial_grid;
pub mod ui;

// World bounds shown in the window (world units)
pub const WORLD_LEFT: f32 = -0.5;
pub const WORLD_RIGHT: f32 = 10.5;
pub const WORLD_BOTTOM: f32 = 0.0;
pub const WORLD_TOP: f32 = 4.0;

// Pipe geometry
pub const PIPE_START: f32 = 0.0;
pub const PIPE_LENGTH: f32 = 10.0;
pub const PIPE_WALL_THICKNESS: f32 = 0.2;
pub const PIPE_TOP_WALL_Y: f32 = 3.0;
pub const PIPE_BOTTOM_WALL_Y: f32 = 1.0;

// Scale particle size
pub const SCALE_RADIUS: f32 = 0.04;
