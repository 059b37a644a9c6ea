// ui.rs - eframe/egui front end: window, input translation and painting

use std::time::Duration;

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use tracing::info;

use crate::config::{CanvasConfig, Variant};
use crate::error::{ConfigError, RunError};
use crate::interaction::{Flow, FrameInput, InputEvent, InteractionLoop, Key, PointerButton};
use crate::render::{PixelRect, RenderTarget, Rgb};

/// Open the editor window for `variant` and block until it is closed.
pub fn run(variant: Variant) -> Result<(), RunError> {
    let config = CanvasConfig::DEFAULT;
    let app = LifeApp::new(variant, config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width as f32, config.height as f32])
            .with_resizable(false),
        ..Default::default()
    };

    info!(?variant, "opening window");
    eframe::run_native(variant.title(), options, Box::new(move |_cc| Box::new(app)))?;
    Ok(())
}

pub struct LifeApp {
    interaction: InteractionLoop,
}

impl LifeApp {
    pub fn new(variant: Variant, config: CanvasConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            interaction: InteractionLoop::new(variant, config)?,
        })
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // No margins: panel pixel (0, 0) is grid pixel (0, 0)
        let panel = egui::Frame::none().fill(Color32::BLACK);

        let flow = egui::CentralPanel::default()
            .frame(panel)
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;
                let input = ctx.input(|i| frame_input(i, origin));

                let mut target = PainterTarget {
                    painter: ui.painter(),
                    origin,
                };
                self.interaction.frame(&input, &mut target)
            })
            .inner;

        match flow {
            Flow::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            Flow::Continue => {
                if let Some(fps) = self.interaction.variant().frame_cap() {
                    ctx.request_repaint_after(Duration::from_secs_f64(1.0 / fps as f64));
                }
            }
        }
    }
}

/// Collect this frame's pointer position and discrete events, both relative to `origin`.
fn frame_input(input: &egui::InputState, origin: Pos2) -> FrameInput {
    FrameInput {
        pointer: input.pointer.hover_pos().map(|pos| canvas_pos(pos, origin)),
        events: input
            .events
            .iter()
            .filter_map(|event| translate_event(event, origin))
            .collect(),
    }
}

fn canvas_pos(pos: Pos2, origin: Pos2) -> (f32, f32) {
    let offset = pos - origin;
    (offset.x, offset.y)
}

fn translate_event(event: &egui::Event, origin: Pos2) -> Option<InputEvent> {
    match event {
        egui::Event::Key {
            key,
            pressed: true,
            repeat: false,
            ..
        } => Some(InputEvent::KeyDown(translate_key(*key))),
        egui::Event::PointerButton {
            pos,
            button,
            pressed,
            ..
        } => {
            let button = translate_button(*button)?;
            Some(if *pressed {
                InputEvent::PointerDown(button, canvas_pos(*pos, origin))
            } else {
                InputEvent::PointerUp(button)
            })
        }
        _ => None,
    }
}

fn translate_key(key: egui::Key) -> Key {
    match key {
        egui::Key::Space => Key::Space,
        egui::Key::P => Key::P,
        egui::Key::C => Key::C,
        _ => Key::Other,
    }
}

fn translate_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

/// Draws grid commands with an egui painter, offset by the panel origin.
struct PainterTarget<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
}

impl PainterTarget<'_> {
    fn rect(&self, rect: PixelRect) -> Rect {
        Rect::from_min_size(
            self.origin + Vec2::new(rect.x as f32, rect.y as f32),
            Vec2::new(rect.width as f32, rect.height as f32),
        )
    }
}

fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

impl RenderTarget for PainterTarget<'_> {
    fn clear(&mut self, rgb: Rgb) {
        self.painter.rect_filled(self.painter.clip_rect(), 0.0, color(rgb));
    }

    fn stroke_rect(&mut self, rect: PixelRect, rgb: Rgb, width: f32) {
        self.painter
            .rect_stroke(self.rect(rect), 0.0, Stroke::new(width, color(rgb)));
    }

    fn fill_rect(&mut self, rect: PixelRect, rgb: Rgb) {
        self.painter.rect_filled(self.rect(rect), 0.0, color(rgb));
    }
}
