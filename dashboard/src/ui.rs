//! UI module - egui settings overlay and status bar
//!
//! Provides the interactive UI components using nannou_egui.

use chrono::{Duration, Local};
use nannou_egui::egui;

/// Result of settings panel interactions
#[derive(Default)]
pub struct SettingsResult {
    /// If true, the reduced motion setting changed
    pub reduced_motion_changed: bool,
    /// If true, reset the watering counter
    pub reset_counter: bool,
}

/// Draw the settings panel
pub fn draw_settings_panel(
    ctx: &egui::Context,
    reduced_motion: &mut bool,
    counter_running: bool,
) -> SettingsResult {
    let mut result = SettingsResult::default();

    egui::Window::new("Settings")
        .collapsible(true)
        .resizable(false)
        .default_width(200.0)
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 40.0])
        .show(ctx, |ui| {
            if ui.checkbox(reduced_motion, "Reduced Motion").changed() {
                result.reduced_motion_changed = true;
            }
            ui.label("Disables the background zoom");
            ui.separator();
            ui.add_enabled_ui(counter_running, |ui| {
                if ui.button("Reset counter").clicked() {
                    result.reset_counter = true;
                }
            });
            ui.separator();
            ui.label("Space Info · P Plants · R Motion · Esc Close");
        });

    result
}

/// Draw the top status bar with today's date and the next watering day.
pub fn draw_status_bar(ctx: &egui::Context, days_until_watering: u32) {
    let today = Local::now();
    let next = today + Duration::days(days_until_watering as i64);
    let text = format!(
        "{} · next watering {}",
        today.format("%a, %b %-d"),
        next.format("%a, %b %-d"),
    );

    egui::TopBottomPanel::top("status_bar")
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(text);
            });
        });
}

/// A single line describing today, shown on the info sheet.
pub fn today_line() -> String {
    Local::now().format("Today · %A, %B %-d").to_string()
}
