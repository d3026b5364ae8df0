/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides the restart control, playback settings and
 * a readout of how far the descaling has progressed.
 */

use nannou_egui::{egui, Egui};

use crate::animation::{target_layers, Animation};
use crate::debug::DebugInfo;
use crate::params::AnimationParams;
use crate::scale::Layer;

// Actions requested through the UI during this frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UiActions {
    pub restart: bool,
    pub interval_changed: bool,
}

pub fn update_ui(egui: &mut Egui, animation: &mut Animation, debug_info: &DebugInfo) -> UiActions {
    let mut actions = UiActions::default();

    // Read the progress readout before borrowing the params mutably
    let frame = animation.frame();
    let total_frames = animation.params().total_frames();
    let cycle = animation.cycle();
    let targets = target_layers(cycle)
        .iter()
        .map(|layer| layer.label())
        .collect::<Vec<_>>()
        .join(", ");
    let scene = animation.scene();
    let attached: Vec<(Layer, usize)> = Layer::ALL
        .iter()
        .map(|&layer| (layer, scene.attached_count(layer)))
        .collect();
    let broken_bonds = scene.broken_bond_count();
    let total_bonds = scene.bonds.len();

    let params = animation.params_mut();
    let previous_interval = params.tick_interval_ms;

    let ctx = egui.begin_frame();

    egui::Window::new("Animation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            if ui.button("Restart").clicked() {
                actions.restart = true;
            }
            ui.checkbox(&mut params.pause_animation, "Pause Animation");
            ui.checkbox(&mut params.restart_on_loop, "Restart On Loop");
            ui.add(
                egui::Slider::new(&mut params.tick_interval_ms, AnimationParams::get_tick_interval_range())
                    .text("Tick Interval (ms)"),
            );

            ui.collapsing("Progress", |ui| {
                ui.label(format!("Frame: {} / {}", frame, total_frames));
                ui.label(format!("Cycle: {} (removing {})", cycle + 1, targets));
                for (layer, count) in &attached {
                    ui.label(format!("{} attached: {}", layer.label(), count));
                }
                ui.label(format!("Bonds broken: {} / {}", broken_bonds, total_bonds));
            });

            ui.collapsing("Performance", |ui| {
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Ticks last update: {}", debug_info.ticks_per_update));
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
        });

    actions.interval_changed = params.tick_interval_ms != previous_interval;
    actions
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect, frame: u32) {
    // Create a background panel in the bottom-right corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * 6.0 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.bottom() + panel_height / 2.0 + 40.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.right() - panel_width + margin;
    let text_y = panel_y + panel_height / 2.0 - margin;

    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Animation frame: {}", frame),
        format!("Agents redrawn: {}", debug_info.changed_agents),
        format!("Scale redrawn: {}", debug_info.changed_particles),
        format!("Bonds redrawn: {}", debug_info.changed_bonds),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge
        draw.text(text)
            .x_y(text_x + 80.0, y)
            .w(180.0)
            .left_justify()
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
