/*
 * Camera Module
 *
 * This module defines the Camera struct that maps the fixed world rectangle
 * of the pipe scene onto the window. The world is scaled uniformly so it
 * keeps its aspect ratio and stays centered when the window is resized.
 */

use nannou::prelude::*;

use crate::{WORLD_BOTTOM, WORLD_LEFT, WORLD_RIGHT, WORLD_TOP};

pub struct Camera {
    pub world: Rect,
    // Fraction of the window kept free around the world
    pub margin: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            world: Rect::from_corners(pt2(WORLD_LEFT, WORLD_BOTTOM), pt2(WORLD_RIGHT, WORLD_TOP)),
            margin: 0.1,
        }
    }

    /// Screen pixels per world unit for the given window.
    pub fn zoom(&self, window_rect: Rect) -> f32 {
        let usable = 1.0 - self.margin;
        let zoom_x = window_rect.w() * usable / self.world.w();
        let zoom_y = window_rect.h() * usable / self.world.h();
        zoom_x.min(zoom_y)
    }

    // Convert a point from world space to screen space
    pub fn world_to_screen(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        (point - self.world.xy()) * self.zoom(window_rect) + window_rect.xy()
    }

    /// Convert a world length (radius, line width) to pixels.
    pub fn scale(&self, length: f32, window_rect: Rect) -> f32 {
        length * self.zoom(window_rect)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
