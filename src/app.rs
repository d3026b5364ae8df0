/*
 * Application Module
 *
 * This module defines the main application model and the update loop for the
 * descaling animation. Animation frames run on a fixed interval: elapsed
 * time is accumulated and one animation tick is run per full interval,
 * independent of the display refresh rate.
 */

use nannou::prelude::*;
use nannou::text::Font;
use nannou_egui::Egui;
use std::time::Duration;

use crate::animation::Animation;
use crate::camera::Camera;
use crate::debug::DebugInfo;
use crate::fonts;
use crate::input::{key_pressed, raw_window_event};
use crate::params::AnimationParams;
use crate::renderer::view;
use crate::ui;

pub const WINDOW_TITLE: &str = "Pipe Descaling Process";

/// Fixed-interval tick source fed with the time elapsed between updates.
#[derive(Debug, Clone)]
pub struct TickTimer {
    accumulator: Duration,
    step: Duration,
    max_ticks: u32,
}

impl TickTimer {
    pub fn new(step: Duration, max_ticks: u32) -> Self {
        Self {
            accumulator: Duration::ZERO,
            step,
            max_ticks,
        }
    }

    pub fn set_step(&mut self, step: Duration) {
        self.step = step;
    }

    /// Add elapsed time and return how many ticks are due. At most
    /// `max_ticks` are returned; a longer backlog is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.step.is_zero() {
            return 0;
        }

        self.accumulator += elapsed;
        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_ticks {
            self.accumulator -= self.step;
            ticks += 1;
        }

        if self.accumulator >= self.step {
            self.accumulator = Duration::ZERO;
        }
        ticks
    }

    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

// Main model for the application
pub struct Model {
    pub animation: Animation,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub camera: Camera,
    pub font: Option<Font>,
    pub timer: TickTimer,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let monitor = app.primary_monitor().expect("Failed to get primary monitor");
    let monitor_size = monitor.size();

    // 80% of the monitor width, keeping the 12:5 scene proportions
    let window_width = monitor_size.width as f32 * 0.8;
    let window_height = (window_width * 5.0 / 12.0).min(monitor_size.height as f32 * 0.8);

    let window_id = app
        .new_window()
        .title(WINDOW_TITLE)
        .size(window_width as u32, window_height as u32)
        .view(view)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .expect("Failed to create window");

    let window = app.window(window_id).expect("Window closed during setup");
    let egui = Egui::from_window(&window);

    let params = AnimationParams::default();
    let timer = TickTimer::new(params.tick_interval(), params.max_ticks_per_update);
    let animation = Animation::new(params);

    Model {
        animation,
        egui,
        debug_info: DebugInfo::default(),
        camera: Camera::new(),
        font: fonts::resolve_font(),
        timer,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let actions = ui::update_ui(&mut model.egui, &mut model.animation, &model.debug_info);

    if actions.interval_changed {
        model.timer.set_step(model.animation.params().tick_interval());
    }

    if actions.restart {
        restart_animation(model);
    }

    if model.animation.params().pause_animation {
        model.debug_info.ticks_per_update = 0;
        return;
    }

    let ticks = model.timer.advance(update.since_last);
    for _ in 0..ticks {
        let changed = model.animation.tick();
        model.debug_info.record_changes(&changed);
    }
    model.debug_info.ticks_per_update = ticks as usize;
}

// Restart from frame zero, dropping any time already accumulated
pub fn restart_animation(model: &mut Model) {
    model.animation.restart();
    model.timer.reset();
}
