/*
 * Input Module
 *
 * This module handles user input events for the descaling animation.
 *
 * Features:
 * - R restarts the animation
 * - Space pauses and resumes
 * - Forwarding window events to the egui panel
 */

use nannou::prelude::*;

use crate::app::{restart_animation, Model};

// Key pressed event handler
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    // Keys typed into the UI belong to the UI
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match key {
        Key::R => restart_animation(model),
        Key::Space => {
            let params = model.animation.params_mut();
            params.pause_animation = !params.pause_animation;
            log::debug!("Pause toggled: {}", params.pause_animation);
        }
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
