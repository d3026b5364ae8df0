/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and per-tick statistics displayed in the UI and the debug overlay.
 *
 * Includes metrics for:
 * - FPS (frames per second)
 * - Frame time
 * - Animation ticks run during the last update
 * - Elements redrawn by the last tick
 */

use std::time::Duration;

use crate::animation::Element;

#[derive(Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks_per_update: usize,
    pub changed_agents: usize,
    pub changed_particles: usize,
    pub changed_bonds: usize,
}

impl DebugInfo {
    // Tally the elements reported by the last tick
    pub fn record_changes(&mut self, changed: &[Element]) {
        self.changed_agents = 0;
        self.changed_particles = 0;
        self.changed_bonds = 0;

        for element in changed {
            match element {
                Element::Agent(_) => self.changed_agents += 1,
                Element::Particle(_) => self.changed_particles += 1,
                Element::Bond(_) => self.changed_bonds += 1,
            }
        }
    }
}
