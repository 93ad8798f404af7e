//! Drawing module - garden scene, sheet panels, and chart rendering
//!
//! Renders the dashboard's visual elements using nannou's Draw API. All
//! animated values (sheet offsets, fades, background scale) are sampled
//! from the interaction core by main.rs and passed in here.

use nannou::prelude::*;
use shared::{
    axis_label, WateringCounter, LIMIT_LINE_X, WEEKLY_POINTS, Y_AXIS_GRANULARITY, Y_AXIS_MAX,
};

/// Height of the always-visible bottom button bar.
pub const BAR_HEIGHT: f32 = 56.0;
/// Full height of the info sheet panel.
pub const INFO_PANEL_HEIGHT: f32 = 300.0;
/// Height of the plants-ready panel while closed.
pub const PLANTS_PANEL_HEIGHT: f32 = 470.0;
/// Gap kept above the plants-ready panel when fully open.
const PLANTS_TOP_MARGIN: f32 = 20.0;

/// Color palette for the garden theme
pub mod colors {
    use nannou::prelude::*;

    pub const SKY_TOP: Srgb<u8> = Srgb {
        red: 18,
        green: 48,
        blue: 58,
        standard: std::marker::PhantomData,
    };
    pub const SKY_BOTTOM: Srgb<u8> = Srgb {
        red: 36,
        green: 92,
        blue: 82,
        standard: std::marker::PhantomData,
    };
    pub const GROUND: Srgb<u8> = Srgb {
        red: 30,
        green: 64,
        blue: 48,
        standard: std::marker::PhantomData,
    };
    pub const LEAF: Srgb<u8> = Srgb {
        red: 64,
        green: 150,
        blue: 96,
        standard: std::marker::PhantomData,
    };
    pub const PANEL: Srgb<u8> = Srgb {
        red: 28,
        green: 36,
        blue: 40,
        standard: std::marker::PhantomData,
    };
    pub const PANEL_HANDLE: Srgb<u8> = Srgb {
        red: 90,
        green: 104,
        blue: 110,
        standard: std::marker::PhantomData,
    };
    pub const TEXT_PRIMARY: Srgb<u8> = Srgb {
        red: 240,
        green: 240,
        blue: 240,
        standard: std::marker::PhantomData,
    };
    pub const TEXT_SECONDARY: Srgb<u8> = Srgb {
        red: 150,
        green: 164,
        blue: 160,
        standard: std::marker::PhantomData,
    };
    pub const ACCENT: Srgb<u8> = Srgb {
        red: 0,
        green: 204,
        blue: 170,
        standard: std::marker::PhantomData,
    };
    pub const BAR: Srgb<u8> = Srgb {
        red: 22,
        green: 28,
        blue: 32,
        standard: std::marker::PhantomData,
    };
    pub const BUTTON_DISABLED: Srgb<u8> = Srgb {
        red: 60,
        green: 70,
        blue: 72,
        standard: std::marker::PhantomData,
    };
    pub const LIMIT_LINE: Srgb<u8> = Srgb {
        red: 82,
        green: 82,
        blue: 82,
        standard: std::marker::PhantomData,
    };
}

/// Layout rectangles for the dashboard, derived from the window rect and
/// the sheets' current offsets.
pub struct Layout {
    pub bar: Rect,
    pub watered_button: Rect,
    pub counter_readout: Rect,
    pub info_panel: Rect,
    pub plants_panel: Rect,
}

impl Layout {
    /// `info_offset` and `plants_offset` are the sheets' current positions
    /// along the drag axis (negative = sunk below the bar); `plants_rise`
    /// is the plants sheet's position-track openness used to stretch its
    /// top edge toward the window top.
    pub fn calculate(
        window_rect: Rect,
        info_offset: f32,
        plants_offset: f32,
        plants_rise: f32,
    ) -> Self {
        let bar = Rect::from_x_y_w_h(
            window_rect.x(),
            window_rect.bottom() + BAR_HEIGHT / 2.0,
            window_rect.w(),
            BAR_HEIGHT,
        );

        let button_w = 120.0;
        let watered_button = Rect::from_x_y_w_h(
            window_rect.right() - button_w / 2.0 - 16.0,
            bar.y(),
            button_w,
            BAR_HEIGHT - 16.0,
        );
        let counter_readout = Rect::from_x_y_w_h(
            window_rect.left() + 70.0,
            bar.y(),
            140.0,
            BAR_HEIGHT - 16.0,
        );

        let info_bottom = bar.top() + info_offset;
        let info_panel = Rect::from_corners(
            pt2(window_rect.left(), info_bottom),
            pt2(window_rect.right(), info_bottom + INFO_PANEL_HEIGHT),
        );

        let plants_bottom = bar.top() + plants_offset;
        let closed_top = plants_bottom + PLANTS_PANEL_HEIGHT;
        let open_top = window_rect.top() - PLANTS_TOP_MARGIN;
        let plants_top = closed_top + (open_top - closed_top) * plants_rise.clamp(0.0, 1.0);
        let plants_panel = Rect::from_corners(
            pt2(window_rect.left() + 12.0, plants_bottom),
            pt2(window_rect.right() - 12.0, plants_top),
        );

        Self {
            bar,
            watered_button,
            counter_readout,
            info_panel,
            plants_panel,
        }
    }
}

/// Draw the garden scene background, scaled about the window center as the
/// sheets open and close.
pub fn draw_garden_scene(draw: &Draw, window_rect: Rect, scale: Vec2) {
    let scaled = draw.scale_axes(vec3(scale.x, scale.y, 1.0));

    // Sky gradient as horizontal bands.
    let bands = 40;
    let band_h = window_rect.h() / bands as f32;
    for i in 0..bands {
        let t = i as f32 / (bands - 1) as f32;
        let color = lerp_srgb(colors::SKY_TOP, colors::SKY_BOTTOM, t);
        scaled.rect().x_y(
            window_rect.x(),
            window_rect.top() - (i as f32 + 0.5) * band_h,
        )
        .w_h(window_rect.w() + 4.0, band_h + 1.0)
        .color(color);
    }

    // Ground band.
    let ground_h = window_rect.h() * 0.30;
    scaled
        .rect()
        .x_y(window_rect.x(), window_rect.bottom() + ground_h / 2.0)
        .w_h(window_rect.w() + 4.0, ground_h)
        .color(colors::GROUND);

    // A few stylized plants: stem plus leaf ellipses.
    let ground_top = window_rect.bottom() + ground_h;
    for (i, &x_frac) in [0.2f32, 0.45, 0.72, 0.9].iter().enumerate() {
        let x = window_rect.left() + window_rect.w() * x_frac;
        let height = 60.0 + (i as f32 * 17.0) % 50.0;
        scaled
            .line()
            .start(pt2(x, ground_top - 6.0))
            .end(pt2(x, ground_top + height))
            .weight(3.0)
            .color(colors::LEAF);
        for side in [-1.0f32, 1.0] {
            scaled
                .ellipse()
                .x_y(x + side * 12.0, ground_top + height * 0.6)
                .w_h(26.0, 10.0)
                .rotate(side * 0.5)
                .color(colors::LEAF);
        }
        scaled
            .ellipse()
            .x_y(x, ground_top + height)
            .w_h(14.0, 14.0)
            .color(colors::ACCENT);
    }
}

/// Draw one sheet panel chrome: body and grab handle.
fn draw_panel_body(draw: &Draw, rect: Rect) {
    draw.rect().xy(rect.xy()).wh(rect.wh()).color(colors::PANEL);
    // Grab handle pill near the top edge.
    draw.rect()
        .x_y(rect.x(), rect.top() - 10.0)
        .w_h(44.0, 5.0)
        .color(colors::PANEL_HANDLE);
}

/// Draw the info sheet with its fading content.
///
/// `fade` is the content opacity from the sheet's fade track; the title row
/// stays visible in the closed peek strip.
pub fn draw_info_sheet(draw: &Draw, rect: Rect, fade: f32, today_line: &str) {
    draw_panel_body(draw, rect);

    draw.text("Watering")
        .x_y(rect.x(), rect.top() - 34.0)
        .color(colors::TEXT_PRIMARY)
        .font_size(20)
        .w(rect.w() - 32.0);

    let alpha = (fade.clamp(0.0, 1.0) * 255.0) as u8;
    if alpha == 0 {
        return;
    }
    let primary = with_alpha(colors::TEXT_PRIMARY, alpha);
    let secondary = with_alpha(colors::TEXT_SECONDARY, alpha);

    draw.text(today_line)
        .x_y(rect.x(), rect.top() - 62.0)
        .color(secondary)
        .font_size(14)
        .w(rect.w() - 32.0);

    // Watering info rows.
    let rows = [
        ("Soil moisture", "64%"),
        ("Sunlight", "6 h / day"),
        ("Water used this week", "46 L"),
    ];
    for (i, (label, value)) in rows.iter().enumerate() {
        let y = rect.top() - 100.0 - i as f32 * 28.0;
        draw.text(label)
            .x_y(rect.left() + rect.w() * 0.27, y)
            .color(secondary)
            .font_size(14)
            .w(rect.w() * 0.5)
            .left_justify();
        draw.text(value)
            .x_y(rect.right() - rect.w() * 0.2, y)
            .color(primary)
            .font_size(14)
            .w(rect.w() * 0.3)
            .right_justify();
    }

    // Plants info rows.
    draw.text("Plants")
        .x_y(rect.left() + rect.w() * 0.18, rect.top() - 196.0)
        .color(primary)
        .font_size(16)
        .w(rect.w() * 0.3)
        .left_justify();
    let plants = ["Monstera · thriving", "Basil · needs light", "Fern · watered"];
    for (i, line) in plants.iter().enumerate() {
        draw.text(line)
            .x_y(rect.x(), rect.top() - 222.0 - i as f32 * 22.0)
            .color(secondary)
            .font_size(13)
            .w(rect.w() - 48.0)
            .left_justify();
    }
}

/// Draw the plants-ready sheet; hosts the weekly chart while open.
pub fn draw_plants_sheet(
    draw: &Draw,
    rect: Rect,
    chart_visible: bool,
    chart_growth: f32,
) {
    draw_panel_body(draw, rect);

    draw.text("Plants ready for watering")
        .x_y(rect.x(), rect.top() - 34.0)
        .color(colors::TEXT_PRIMARY)
        .font_size(18)
        .w(rect.w() - 32.0);

    let ready = ["Basil", "Snake plant", "Rosemary"];
    for (i, name) in ready.iter().enumerate() {
        let y = rect.top() - 70.0 - i as f32 * 24.0;
        draw.ellipse()
            .x_y(rect.left() + 28.0, y)
            .w_h(8.0, 8.0)
            .color(colors::ACCENT);
        draw.text(name)
            .x_y(rect.x(), y)
            .color(colors::TEXT_SECONDARY)
            .font_size(14)
            .w(rect.w() - 80.0)
            .left_justify();
    }

    if chart_visible {
        let chart_rect = Rect::from_x_y_w_h(
            rect.x(),
            rect.bottom() + rect.h() * 0.32,
            rect.w() - 56.0,
            rect.h() * 0.42,
        );
        draw_weekly_chart(draw, chart_rect, chart_growth);
    }
}

/// Draw the weekly watering line chart with gradient fill, weekday axis
/// labels, and the mid-week limit line. `growth` scales the y values for
/// the entrance animation.
pub fn draw_weekly_chart(draw: &Draw, rect: Rect, growth: f32) {
    let growth = growth.clamp(0.0, 1.0);
    let x_for = |day: f32| rect.left() + (day - 1.0) / 6.0 * rect.w();
    let y_for = |value: f32| rect.bottom() + (value * growth / Y_AXIS_MAX) * rect.h();

    // Horizontal gridline labels on the left axis.
    let mut level = Y_AXIS_GRANULARITY;
    while level <= Y_AXIS_MAX {
        draw.text(&format!("{:.0}", level))
            .x_y(rect.left() - 18.0, rect.bottom() + level / Y_AXIS_MAX * rect.h())
            .color(colors::TEXT_SECONDARY)
            .font_size(11)
            .w(30.0);
        level += Y_AXIS_GRANULARITY;
    }

    // Mid-week limit line.
    draw.line()
        .start(pt2(x_for(LIMIT_LINE_X), rect.bottom()))
        .end(pt2(x_for(LIMIT_LINE_X), rect.top()))
        .weight(3.0)
        .color(colors::LIMIT_LINE);

    // Gradient fill under the curve: transparent at the baseline rising to
    // the accent color.
    let mut fill: Vec<(Point2, Srgba<u8>)> = Vec::with_capacity(WEEKLY_POINTS.len() + 2);
    fill.push((pt2(x_for(1.0), rect.bottom()), srgba(0, 204, 170, 0)));
    for &(day, value) in WEEKLY_POINTS.iter() {
        let y = y_for(value);
        let t = ((y - rect.bottom()) / rect.h()).clamp(0.0, 1.0);
        let alpha = (40.0 + t * 180.0) as u8;
        fill.push((pt2(x_for(day), y), srgba(0, 204, 170, alpha)));
    }
    fill.push((pt2(x_for(7.0), rect.bottom()), srgba(0, 204, 170, 0)));
    draw.polygon().points_colored(fill);

    // The line itself.
    let line: Vec<Point2> = WEEKLY_POINTS
        .iter()
        .map(|&(day, value)| pt2(x_for(day), y_for(value)))
        .collect();
    draw.polyline()
        .weight(1.5)
        .color(WHITE)
        .points(line);

    // Weekday labels along the bottom.
    for &(day, _) in WEEKLY_POINTS.iter() {
        draw.text(&axis_label(day as f64))
            .x_y(x_for(day), rect.bottom() - 16.0)
            .color(colors::TEXT_PRIMARY)
            .font_size(11)
            .w(40.0);
    }
}

/// Draw the bottom button bar with the day counter readout and the
/// "Watered" button.
pub fn draw_button_bar(draw: &Draw, layout: &Layout, counter: &WateringCounter) {
    draw.rect()
        .xy(layout.bar.xy())
        .wh(layout.bar.wh())
        .color(colors::BAR);

    let readout = format!("{} {}", counter.count(), counter.unit_label());
    draw.text(&readout)
        .xy(layout.counter_readout.xy())
        .color(colors::TEXT_PRIMARY)
        .font_size(18)
        .w(layout.counter_readout.w())
        .left_justify();
    draw.text("until next watering")
        .x_y(
            layout.counter_readout.x() + 4.0,
            layout.counter_readout.y() - 16.0,
        )
        .color(colors::TEXT_SECONDARY)
        .font_size(10)
        .w(layout.counter_readout.w())
        .left_justify();

    let button_color = if counter.button_enabled() {
        colors::ACCENT
    } else {
        colors::BUTTON_DISABLED
    };
    draw.rect()
        .xy(layout.watered_button.xy())
        .wh(layout.watered_button.wh())
        .color(button_color);
    draw.text("Watered")
        .xy(layout.watered_button.xy())
        .color(colors::BAR)
        .font_size(16)
        .w(layout.watered_button.w());
}

fn with_alpha(color: Srgb<u8>, alpha: u8) -> Srgba<u8> {
    srgba(color.red, color.green, color.blue, alpha)
}

fn lerp_srgb(a: Srgb<u8>, b: Srgb<u8>, t: f32) -> Srgb<u8> {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t) as u8;
    srgb(
        mix(a.red, b.red),
        mix(a.green, b.green),
        mix(a.blue, b.blue),
    )
}
