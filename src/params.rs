/*
 * Animation Parameters Module
 *
 * This module defines the AnimationParams struct that contains all the
 * tunable values for the descaling animation: timing, detachment and bond
 * behavior, randomness and the UI toggles. Some of them can be modified
 * through the UI while the animation runs.
 */

use std::time::Duration;

// Parameters for the animation that can be adjusted via UI
#[derive(Debug, Clone)]
pub struct AnimationParams {
    // Timing
    pub frames_per_cycle: u32,
    pub cycles: u32,
    pub tick_interval_ms: f32,
    pub max_ticks_per_update: u32,
    // Restart instead of wrapping when a pass ends
    pub restart_on_loop: bool,

    // Scene layout
    pub grid_points: usize,
    pub jitter_per_point: usize,
    pub anchor_jitter: f32,
    pub wall_jitter: f32,
    pub layer_spacing: f32,
    pub agent_count: usize,

    // Descaling agent motion
    pub agent_start_x: f32,
    pub agent_exit_x: f32,
    pub agent_step: f32,
    pub agent_y_range: (f32, f32),
    pub glow_pulse: f32,
    pub glow_pulse_rate: f32,

    // Detachment
    pub detach_radius: f32,
    pub carry_radius: f32,
    pub carry_radius_per_layer: f32,

    // Bonds
    pub bond_threshold: f32,
    pub break_step: f32,
    pub flash_range: (f32, f32),
    pub enable_spatial_grid: bool,

    // Reproducibility; None draws a seed from the OS
    pub seed: Option<u64>,

    // UI toggles
    pub show_debug: bool,
    pub pause_animation: bool,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            frames_per_cycle: 150,
            cycles: 4,
            tick_interval_ms: 50.0,
            max_ticks_per_update: 4,
            restart_on_loop: false,
            grid_points: 30,
            jitter_per_point: 4,
            anchor_jitter: 0.1,
            wall_jitter: 0.05,
            layer_spacing: 0.15,
            agent_count: 2,
            agent_start_x: -2.0,
            agent_exit_x: 10.0,
            agent_step: 0.08,
            agent_y_range: (1.5, 2.5),
            glow_pulse: 0.05,
            glow_pulse_rate: 0.1,
            detach_radius: 0.8,
            carry_radius: 0.4,
            carry_radius_per_layer: 0.1,
            bond_threshold: 0.15,
            break_step: 0.1,
            flash_range: (0.2, 0.4),
            enable_spatial_grid: false,
            seed: None,
            show_debug: false,
            pause_animation: false,
        }
    }
}

impl AnimationParams {
    /// Total number of frames in one pass of the animation.
    pub fn total_frames(&self) -> u32 {
        self.frames_per_cycle * self.cycles
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_micros((self.tick_interval_ms * 1000.0).round() as u64)
    }

    /// Radius at which a detached particle of the given layer orbits its agent.
    pub fn carry_radius_for(&self, layer_index: usize) -> f32 {
        self.carry_radius + layer_index as f32 * self.carry_radius_per_layer
    }

    // Get parameter ranges for UI sliders
    pub fn get_tick_interval_range() -> std::ops::RangeInclusive<f32> {
        10.0..=200.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing() {
        let params = AnimationParams::default();
        assert_eq!(params.total_frames(), 600);
        assert_eq!(params.tick_interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_carry_radius_grows_with_layer() {
        let params = AnimationParams::default();
        assert!((params.carry_radius_for(0) - 0.4).abs() < 1e-6);
        assert!((params.carry_radius_for(2) - 0.6).abs() < 1e-6);
    }
}
