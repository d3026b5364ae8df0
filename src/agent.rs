/*
 * Descaling Agent Module
 *
 * The agent is the active chemical carried by the flow. It is drawn as a
 * cyan core with a pulsing glow and travels left to right through the pipe.
 */

use nannou::prelude::*;

pub const AGENT_RADIUS: f32 = 0.3;
pub const AGENT_ALPHA: f32 = 0.6;
pub const GLOW_RADIUS: f32 = 0.4;
pub const GLOW_ALPHA: f32 = 0.2;

pub fn agent_color() -> Rgb<u8> {
    rgb(0x00, 0xff, 0xff)
}

#[derive(Debug, Clone)]
pub struct DescalingAgent {
    pub position: Point2,
    pub radius: f32,
    pub glow_radius: f32,
}

impl DescalingAgent {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: pt2(x, y),
            radius: AGENT_RADIUS,
            glow_radius: GLOW_RADIUS,
        }
    }

    // Main circle and glow share the position
    pub fn move_to(&mut self, position: Point2) {
        self.position = position;
    }

    pub fn advance(&mut self, step: f32) {
        self.position.x += step;
    }

    pub fn pulse(&mut self, frame: u32, amplitude: f32, rate: f32) {
        self.glow_radius = GLOW_RADIUS + amplitude * (frame as f32 * rate).sin();
    }
}
