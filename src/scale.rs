/*
 * Scale Module
 *
 * This module defines the scale particles that cling to the pipe walls.
 * Scale is deposited in three layers:
 * 1. Outer: closest to the wall, removed last
 * 2. Mid: between the other two
 * 3. Inner: closest to the flow, removed first
 */

use nannou::prelude::*;
use rand::Rng;

use crate::{PIPE_BOTTOM_WALL_Y, PIPE_TOP_WALL_Y, PIPE_WALL_THICKNESS, SCALE_RADIUS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Outer,
    Mid,
    Inner,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Outer, Layer::Mid, Layer::Inner];

    pub fn index(self) -> usize {
        match self {
            Layer::Outer => 0,
            Layer::Mid => 1,
            Layer::Inner => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Layer> {
        Layer::ALL.get(index).copied()
    }

    // Darker brown the deeper the deposit
    pub fn color(self) -> Rgb<u8> {
        match self {
            Layer::Outer => rgb(0xcd, 0x85, 0x3f),
            Layer::Mid => rgb(0xb8, 0x86, 0x0b),
            Layer::Inner => rgb(0x8b, 0x45, 0x13),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Layer::Outer => "Outer scale",
            Layer::Mid => "Middle scale",
            Layer::Inner => "Inner scale",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wall {
    Top,
    Bottom,
}

impl Wall {
    pub const BOTH: [Wall; 2] = [Wall::Top, Wall::Bottom];

    /// Base y coordinate of a scale layer on this wall. Deeper layers sit
    /// further from the wall, toward the pipe center.
    pub fn layer_y(self, layer: Layer, layer_spacing: f32) -> f32 {
        let offset = layer.index() as f32 * layer_spacing;
        match self {
            Wall::Top => PIPE_TOP_WALL_Y - PIPE_WALL_THICKNESS - offset,
            Wall::Bottom => PIPE_BOTTOM_WALL_Y + PIPE_WALL_THICKNESS + offset,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScaleParticle {
    pub position: Point2,
    pub radius: f32,
    pub color: Rgb<u8>,
    layer: Layer,
    pub wall: Wall,
    pub attached: bool,
    // Grid point the particle is jittered around
    pub anchor: Point2,
    pub original_position: Point2,
    pub carrying_agent: Option<usize>,
    pub bonds: Vec<usize>,
}

impl ScaleParticle {
    pub fn new(position: Point2, anchor: Point2, layer: Layer, wall: Wall) -> Self {
        Self {
            position,
            radius: SCALE_RADIUS,
            color: layer.color(),
            layer,
            wall,
            attached: true,
            anchor,
            original_position: position,
            carrying_agent: None,
            bonds: Vec::new(),
        }
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Sample a position around the anchor using the scene jitter ranges.
    pub fn jitter<R: Rng>(rng: &mut R, anchor: Point2, anchor_jitter: f32, wall_jitter: f32) -> Point2 {
        pt2(
            anchor.x + rng.gen_range(-anchor_jitter..=anchor_jitter),
            anchor.y + rng.gen_range(-wall_jitter..=wall_jitter),
        )
    }

    // Release the particle to the agent that dissolved it
    pub fn detach(&mut self, agent: usize) {
        self.attached = false;
        self.carrying_agent = Some(agent);
    }

    pub fn reattach(&mut self, position: Point2) {
        self.position = position;
        self.original_position = position;
        self.attached = true;
        self.carrying_agent = None;
    }

    /// Place the particle at a random point on a circle around `center`.
    pub fn orbit<R: Rng>(&mut self, rng: &mut R, center: Point2, radius: f32) {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        self.position = pt2(center.x + radius * angle.cos(), center.y + radius * angle.sin());
    }
}
