/*
 * Renderer Module
 *
 * This module handles the rendering of the descaling animation.
 * It draws, back to front: the background grid, the pipe walls, the bonds,
 * the scale particles, the descaling agents with their glow, and finally
 * the title, legend, caption and optional debug overlay.
 */

use nannou::draw::primitive::Text;
use nannou::draw::Drawing;
use nannou::prelude::*;
use nannou::text::Font;

use crate::agent::{agent_color, AGENT_ALPHA, GLOW_ALPHA};
use crate::app::Model;
use crate::camera::Camera;
use crate::scale::Layer;
use crate::ui;
use crate::{PIPE_BOTTOM_WALL_Y, PIPE_LENGTH, PIPE_START, PIPE_TOP_WALL_Y, PIPE_WALL_THICKNESS};

pub const TITLE: &str = "How the Descaling Agent Works";
pub const CAPTION: &str = "The descaling agent flows with the water from left to right, breaking the \
                           van der Waals bonds between scale particles and carrying the scale away";
pub const AGENT_LABEL: &str = "Descaling agent";

const SCALE_ALPHA: f32 = 0.8;
// Pixels per unit of bond width
const LINE_SCALE: f32 = 1.5;

pub fn background_color() -> Rgb<u8> {
    rgb(0x1a, 0x1a, 0x1a)
}

fn pipe_color() -> Rgb<u8> {
    rgb(0x4a, 0x4a, 0x4a)
}

fn pipe_edge_color() -> Rgb<u8> {
    rgb(0x6a, 0x6a, 0x6a)
}

pub fn with_alpha(color: Rgb<u8>, alpha: f32) -> Rgba {
    rgba(
        color.red as f32 / 255.0,
        color.green as f32 / 255.0,
        color.blue as f32 / 255.0,
        alpha,
    )
}

// Start a text drawing, using the resolved font when there is one
fn label<'a>(draw: &'a Draw, text: &str, font: Option<&Font>) -> Drawing<'a, Text> {
    let drawing = draw.text(text);
    match font {
        Some(font) => drawing.font(font.clone()),
        None => drawing,
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(background_color());

    let window_rect = app.window_rect();
    let camera = &model.camera;
    let scene = model.animation.scene();
    let flash_range = model.animation.params().flash_range;

    draw_grid(&draw, camera, window_rect);
    draw_pipe(&draw, camera, window_rect);

    for bond in &scene.bonds {
        let alpha = bond.draw_alpha(flash_range);
        if alpha <= 0.0 {
            continue;
        }

        let (a, b) = bond.endpoints();
        let start = camera.world_to_screen(scene.particles[a].position, window_rect);
        let end = camera.world_to_screen(scene.particles[b].position, window_rect);
        draw.line()
            .start(start)
            .end(end)
            .weight(bond.width * LINE_SCALE)
            .color(with_alpha(bond.color, alpha));
    }

    for particle in &scene.particles {
        draw.ellipse()
            .xy(camera.world_to_screen(particle.position, window_rect))
            .radius(camera.scale(particle.radius, window_rect))
            .color(with_alpha(particle.color, SCALE_ALPHA));
    }

    for agent in &scene.agents {
        let center = camera.world_to_screen(agent.position, window_rect);
        draw.ellipse()
            .xy(center)
            .radius(camera.scale(agent.glow_radius, window_rect))
            .color(with_alpha(agent_color(), GLOW_ALPHA));
        draw.ellipse()
            .xy(center)
            .radius(camera.scale(agent.radius, window_rect))
            .color(with_alpha(agent_color(), AGENT_ALPHA));
    }

    let font = model.font.as_ref();
    draw_title(&draw, window_rect, font);
    draw_legend(&draw, window_rect, font);
    draw_caption(&draw, window_rect, font);

    if model.animation.params().show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect, model.animation.frame());
    }

    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}

// Faint grid, one line per world unit
fn draw_grid(draw: &Draw, camera: &Camera, window_rect: Rect) {
    let world = camera.world;
    let color = rgba(1.0, 1.0, 1.0, 0.05);

    let mut x = world.left().ceil();
    while x <= world.right() {
        draw.line()
            .start(camera.world_to_screen(pt2(x, world.bottom()), window_rect))
            .end(camera.world_to_screen(pt2(x, world.top()), window_rect))
            .weight(1.0)
            .color(color);
        x += 1.0;
    }

    let mut y = world.bottom().ceil();
    while y <= world.top() {
        draw.line()
            .start(camera.world_to_screen(pt2(world.left(), y), window_rect))
            .end(camera.world_to_screen(pt2(world.right(), y), window_rect))
            .weight(1.0)
            .color(color);
        y += 1.0;
    }
}

fn draw_pipe(draw: &Draw, camera: &Camera, window_rect: Rect) {
    for wall_y in [PIPE_TOP_WALL_Y, PIPE_BOTTOM_WALL_Y] {
        let wall = Rect::from_corners(
            pt2(PIPE_START, wall_y),
            pt2(PIPE_START + PIPE_LENGTH, wall_y + PIPE_WALL_THICKNESS),
        );
        draw.rect()
            .xy(camera.world_to_screen(wall.xy(), window_rect))
            .wh(wall.wh() * camera.zoom(window_rect))
            .color(pipe_color())
            .stroke(pipe_edge_color())
            .stroke_weight(1.0);
    }
}

fn draw_title(draw: &Draw, window_rect: Rect, font: Option<&Font>) {
    label(draw, TITLE, font)
        .x_y(0.0, window_rect.top() - 30.0)
        .w(window_rect.w())
        .color(WHITE)
        .font_size(22);
}

fn draw_legend(draw: &Draw, window_rect: Rect, font: Option<&Font>) {
    let entries: Vec<(Rgba, f32, &str)> = std::iter::once((with_alpha(agent_color(), AGENT_ALPHA), 9.0, AGENT_LABEL))
        .chain(Layer::ALL.iter().map(|layer| (with_alpha(layer.color(), SCALE_ALPHA), 5.0, layer.label())))
        .collect();

    let line_height = 22.0;
    let panel_width = 190.0;
    let panel_height = line_height * entries.len() as f32 + 40.0;
    let panel_x = window_rect.right() - panel_width / 2.0 - 10.0;
    let panel_y = window_rect.top() - panel_height / 2.0 - 60.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(rgb(0x2a_u8, 0x2a, 0x2a))
        .stroke(pipe_color())
        .stroke_weight(1.0);

    let left = panel_x - panel_width / 2.0 + 20.0;
    let top = panel_y + panel_height / 2.0 - 18.0;

    label(draw, "Legend", font)
        .x_y(panel_x, top)
        .w(panel_width)
        .color(WHITE)
        .font_size(14);

    for (i, (color, radius, text)) in entries.iter().enumerate() {
        let y = top - line_height * (i as f32 + 1.0);
        draw.ellipse().x_y(left, y).radius(*radius).color(*color);
        label(draw, text, font)
            .x_y(left + 20.0 + 65.0, y)
            .w(130.0)
            .left_justify()
            .color(WHITE)
            .font_size(12);
    }
}

fn draw_caption(draw: &Draw, window_rect: Rect, font: Option<&Font>) {
    label(draw, CAPTION, font)
        .x_y(0.0, window_rect.bottom() + 20.0)
        .w(window_rect.w() - 40.0)
        .color(WHITE)
        .font_size(13);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha_scales_channels() {
        let color = with_alpha(rgb(255, 0, 51), 0.25);
        assert!((color.red - 1.0).abs() < 1e-6);
        assert_eq!(color.green, 0.0);
        assert!((color.blue - 0.2).abs() < 1e-6);
        assert_eq!(color.alpha, 0.25);
    }

    #[test]
    fn test_label_accepts_a_resolved_font() {
        let draw = Draw::new();
        let font = nannou::text::font::default_notosans();
        label(&draw, TITLE, Some(&font)).font_size(22);
        label(&draw, CAPTION, None).font_size(13);
    }
}
