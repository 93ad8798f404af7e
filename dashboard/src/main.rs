//! Plant Watering Dashboard
//!
//! A garden scene with two interactive pull-up sheets: an info sheet with
//! watering details and a "plants ready" sheet hosting the weekly chart.
//! Both are driven by drag gestures through the interaction core in the
//! shared crate: drags scrub the open/close transitions and the release
//! velocity decides which endpoint they run to.

mod drawing;
mod ui;

use std::time::Instant;

use nannou::prelude::*;
use nannou_egui::{self, Egui};
use serde::{Deserialize, Serialize};
use shared::{
    Curve, DragEvent, DragRecognizer, Sheet, SheetPair, SheetParams, SheetState, TrackKind,
    TrackSpec, WateringCounter, YAxisEntrance,
};

use crate::drawing::Layout;

const DEFAULT_WINDOW_W: u32 = 420;
const DEFAULT_WINDOW_H: u32 = 760;

/// Sheet offsets along the drag axis (screen-down positive, so closed
/// positions sink below the button bar).
const INFO_CLOSED_OFFSET: f32 = -230.0;
const INFO_OPEN_OFFSET: f32 = 0.0;
const PLANTS_CLOSED_OFFSET: f32 = -170.0;
const PLANTS_OPEN_OFFSET: f32 = 130.0;

/// Natural duration of a sheet transition in seconds.
const TRANSITION_DURATION: f32 = 1.0;

fn main() {
    nannou::app(model).update(update).run();
}

/// Persisted configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Config {
    reduced_motion: bool,
    window_width: u32,
    window_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            window_width: DEFAULT_WINDOW_W,
            window_height: DEFAULT_WINDOW_H,
        }
    }
}

/// Which sheet the active drag gesture is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelId {
    Info,
    Plants,
}

/// Application state
struct Model {
    /// Info sheet (primary) and plants-ready sheet (secondary).
    sheets: SheetPair,
    info_drag: DragRecognizer,
    plants_drag: DragRecognizer,
    /// Sheet the in-flight gesture routes to, if any.
    active_drag: Option<PanelId>,
    /// Timestamp of the previous pointer event, for velocity estimation.
    last_pointer_event: Instant,
    counter: WateringCounter,
    chart_entrance: YAxisEntrance,
    /// Chart shows only once the plants sheet has finished opening.
    chart_visible: bool,
    reduced_motion: bool,
    /// egui integration
    egui: Egui,
}

fn info_sheet() -> Sheet {
    Sheet::new(SheetParams {
        closed_offset: INFO_CLOSED_OFFSET,
        open_offset: INFO_OPEN_OFFSET,
        duration: TRANSITION_DURATION,
        tracks: vec![
            TrackSpec {
                kind: TrackKind::Position,
                opening_curve: Curve::EaseInOut,
                closing_curve: Curve::EaseInOut,
            },
            // Content fades in quickly at the end of an open and out
            // quickly at the start of a close.
            TrackSpec {
                kind: TrackKind::Fade,
                opening_curve: Curve::EaseIn,
                closing_curve: Curve::EaseOut,
            },
        ],
    })
}

fn plants_sheet() -> Sheet {
    Sheet::new(SheetParams {
        closed_offset: PLANTS_CLOSED_OFFSET,
        open_offset: PLANTS_OPEN_OFFSET,
        duration: TRANSITION_DURATION,
        tracks: vec![TrackSpec {
            kind: TrackKind::Position,
            opening_curve: Curve::EaseInOut,
            closing_curve: Curve::EaseInOut,
        }],
    })
}

fn save_config(model: &Model, window_rect: Rect) {
    let config = Config {
        reduced_motion: model.reduced_motion,
        window_width: window_rect.w() as u32,
        window_height: window_rect.h() as u32,
    };
    if let Err(e) = shared::save_config(&config) {
        eprintln!("Failed to save config: {}", e);
    }
}

fn model(app: &App) -> Model {
    // Load configuration
    let config: Config = shared::load_config().ok().flatten().unwrap_or_default();

    // Create window
    let window_id = app
        .new_window()
        .title("Plant Watering Dashboard")
        .size(config.window_width, config.window_height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .mouse_moved(mouse_moved)
        .mouse_released(mouse_released)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    Model {
        sheets: SheetPair::new(info_sheet(), plants_sheet()),
        info_drag: DragRecognizer::new(),
        plants_drag: DragRecognizer::new(),
        active_drag: None,
        last_pointer_event: Instant::now(),
        counter: WateringCounter::new(),
        chart_entrance: YAxisEntrance::default(),
        chart_visible: false,
        reduced_motion: config.reduced_motion,
        egui,
    }
}

fn layout(app: &App, model: &Model) -> Layout {
    Layout::calculate(
        app.window_rect(),
        model.sheets.primary.offset(),
        model.sheets.secondary.offset(),
        model.sheets.secondary.openness(TrackKind::Position),
    )
}

/// Position along the drag axis: screen-down positive, so dragging toward
/// the closed position yields positive translation and velocity.
fn axis_position(pos: Point2) -> f32 {
    -pos.y
}

fn update(app: &App, model: &mut Model, update: Update) {
    let dt = update.since_last.as_secs_f32();

    let events = model.sheets.tick(dt);
    model.counter.tick(dt);
    model.chart_entrance.tick(dt);

    // The chart hides for the whole duration of a closing transition and
    // reappears (with a fresh y-axis entrance) when an open commits.
    if model.sheets.secondary.transition_target() == Some(SheetState::Closed) {
        model.chart_visible = false;
    }
    if events.secondary_committed == Some(SheetState::Open) {
        model.chart_visible = true;
        model.chart_entrance.restart();
    }

    // Begin egui frame
    model.egui.set_elapsed_time(update.since_start);
    let ctx = model.egui.begin_frame();

    ui::draw_status_bar(&ctx, model.counter.count());
    let mut reduced_motion = model.reduced_motion;
    let settings = ui::draw_settings_panel(&ctx, &mut reduced_motion, model.counter.is_running());

    drop(ctx);

    if settings.reduced_motion_changed {
        model.reduced_motion = reduced_motion;
        save_config(model, app.window_rect());
    }
    if settings.reset_counter {
        model.counter.reset();
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();
    let layout = layout(app, model);

    draw.background().color(drawing::colors::SKY_TOP);

    // Background zoom slaved to the sheets' position tracks.
    let info_t = model
        .sheets
        .primary
        .openness(TrackKind::Position)
        .clamp(0.0, 1.0);
    let plants_t = model
        .sheets
        .secondary
        .openness(TrackKind::Position)
        .clamp(0.0, 1.0);
    let scale = if model.reduced_motion {
        vec2(1.0, 1.0)
    } else {
        vec2(
            (1.0 + 0.1 * info_t) * (1.0 - 0.1 * plants_t),
            (1.0 + 0.1 * info_t) * (1.0 - 0.05 * plants_t),
        )
    };
    drawing::draw_garden_scene(&draw, window_rect, scale);

    drawing::draw_plants_sheet(
        &draw,
        layout.plants_panel,
        model.chart_visible,
        model.chart_entrance.progress(),
    );

    let fade = model.sheets.primary.openness(TrackKind::Fade);
    drawing::draw_info_sheet(&draw, layout.info_panel, fade, &ui::today_line());

    drawing::draw_button_bar(&draw, &layout, &model.counter);

    // Render to frame
    draw.to_frame(app, &frame).unwrap();

    // Render egui on top
    model.egui.draw_to_frame(&frame).unwrap();
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    let pos = app.mouse.position();
    let layout = layout(app, model);
    model.last_pointer_event = Instant::now();

    // The button is excluded from the drag surfaces.
    if layout.watered_button.contains(pos) {
        watered_pressed(model);
        return;
    }

    if layout.info_panel.contains(pos) {
        if model.info_drag.press(axis_position(pos)) == Some(DragEvent::Began) {
            model.active_drag = Some(PanelId::Info);
            model.sheets.primary_drag_began();
        }
    } else if layout.plants_panel.contains(pos) {
        if model.plants_drag.press(axis_position(pos)) == Some(DragEvent::Began) {
            model.active_drag = Some(PanelId::Plants);
            model.sheets.secondary.drag_began();
        }
    }
}

fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    let Some(panel) = model.active_drag else {
        return;
    };
    let dt = model.last_pointer_event.elapsed().as_secs_f32();
    model.last_pointer_event = Instant::now();

    let (recognizer, sheet) = match panel {
        PanelId::Info => (&mut model.info_drag, &mut model.sheets.primary),
        PanelId::Plants => (&mut model.plants_drag, &mut model.sheets.secondary),
    };
    if let Some(DragEvent::Changed(sample)) = recognizer.moved(axis_position(pos), dt) {
        sheet.drag_changed(sample.translation);
    }
}

fn mouse_released(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    let Some(panel) = model.active_drag.take() else {
        return;
    };
    let pos = app.mouse.position();

    let (recognizer, sheet) = match panel {
        PanelId::Info => (&mut model.info_drag, &mut model.sheets.primary),
        PanelId::Plants => (&mut model.plants_drag, &mut model.sheets.secondary),
    };
    if let Some(DragEvent::Ended(sample)) = recognizer.release(axis_position(pos)) {
        sheet.drag_ended(sample.velocity);
    }
}

/// "Watered" button: closes the info sheet if open and starts the
/// day-counter cycle. Disabled while a cycle is running.
fn watered_pressed(model: &mut Model) {
    if !model.counter.button_enabled() {
        return;
    }
    if model.sheets.primary.state() == SheetState::Open {
        model
            .sheets
            .primary_transition(SheetState::Closed, TRANSITION_DURATION);
    }
    model.counter.start();
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        // Space toggles the info sheet
        Key::Space => {
            let target = model.sheets.primary.state().opposite();
            model.sheets.primary_transition(target, TRANSITION_DURATION);
        }
        // P toggles the plants-ready sheet
        Key::P => {
            let target = model.sheets.secondary.state().opposite();
            model
                .sheets
                .secondary
                .start_transition(target, TRANSITION_DURATION);
        }
        // Escape closes whichever sheet is open
        Key::Escape => {
            if model.sheets.primary.state() == SheetState::Open {
                model
                    .sheets
                    .primary_transition(SheetState::Closed, TRANSITION_DURATION);
            }
            if model.sheets.secondary.state() == SheetState::Open {
                model
                    .sheets
                    .secondary
                    .start_transition(SheetState::Closed, TRANSITION_DURATION);
            }
        }
        // R toggles reduced motion
        Key::R => {
            model.reduced_motion = !model.reduced_motion;
            save_config(model, app.window_rect());
        }
        _ => {}
    }
}

fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Let egui handle raw events for keyboard and mouse input
    model.egui.handle_raw_event(event);
}
