/*
 * Bond Module
 *
 * A bond is the van der Waals link drawn between two neighbouring scale
 * particles of the same layer. Once either end comes loose the bond starts
 * breaking: it fades out and flashes briefly before disappearing.
 */

use nannou::prelude::*;

pub const BOND_ALPHA: f32 = 0.2;
pub const BOND_WIDTH: f32 = 0.5;
pub const FLASH_WIDTH: f32 = 1.0;
pub const FLASH_ALPHA: f32 = 0.9;

pub fn bond_color() -> Rgb<u8> {
    rgb(0xff, 0xff, 0xff)
}

pub fn flash_color() -> Rgb<u8> {
    rgb(0xff, 0xff, 0xff)
}

#[derive(Debug, Clone)]
pub struct Bond {
    pub a: usize,
    pub b: usize,
    pub original_distance: f32,
    pub breaking: bool,
    pub break_progress: f32,
    pub alpha: f32,
    pub color: Rgb<u8>,
    pub width: f32,
}

impl Bond {
    pub fn new(a: usize, b: usize, original_distance: f32) -> Self {
        Self {
            a,
            b,
            original_distance,
            breaking: false,
            break_progress: 0.0,
            alpha: BOND_ALPHA,
            color: bond_color(),
            width: BOND_WIDTH,
        }
    }

    pub fn endpoints(&self) -> (usize, usize) {
        (self.a, self.b)
    }

    /// Advance the break animation by one frame.
    ///
    /// The alpha decays linearly to zero. While the progress lies inside
    /// `flash_range` the line is drawn wider in the flash color.
    pub fn advance_break(&mut self, step: f32, flash_range: (f32, f32)) {
        if !self.breaking {
            return;
        }

        self.break_progress += step;
        self.alpha = (BOND_ALPHA - self.break_progress).max(0.0);

        if self.is_flashing(flash_range) {
            self.color = flash_color();
            self.width = FLASH_WIDTH;
        } else if self.break_progress > flash_range.1 {
            self.color = bond_color();
            self.width = BOND_WIDTH;
        }
    }

    pub fn is_flashing(&self, flash_range: (f32, f32)) -> bool {
        self.breaking && self.break_progress >= flash_range.0 && self.break_progress <= flash_range.1
    }

    // Opacity actually used for drawing; the flash overrides the faded alpha
    pub fn draw_alpha(&self, flash_range: (f32, f32)) -> f32 {
        if self.is_flashing(flash_range) {
            FLASH_ALPHA
        } else {
            self.alpha
        }
    }

    pub fn reset(&mut self) {
        self.breaking = false;
        self.break_progress = 0.0;
        self.alpha = BOND_ALPHA;
        self.color = bond_color();
        self.width = BOND_WIDTH;
    }
}
