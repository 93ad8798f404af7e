//! Weekly watering chart data and axis formatting.
//!
//! The chart itself is a rendering collaborator; this module holds the data
//! set, the weekday axis label formatter, and the y-axis entrance animation
//! re-triggered each time the plants-ready sheet finishes opening.

/// Fixed weekly data set: (day index, liters used).
pub const WEEKLY_POINTS: [(f32, f32); 7] = [
    (1.0, 5.0),
    (2.0, 2.0),
    (3.0, 8.0),
    (4.0, 10.0),
    (5.0, 15.0),
    (6.0, 5.0),
    (7.0, 1.0),
];

/// Upper bound of the y axis.
pub const Y_AXIS_MAX: f32 = 20.0;
/// Spacing between y axis gridline labels.
pub const Y_AXIS_GRANULARITY: f32 = 5.0;
/// Vertical limit line marking the middle of the week.
pub const LIMIT_LINE_X: f32 = 4.0;

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// X-axis label for a data value.
///
/// Values in [1, 8) map to short weekday names by truncation; anything else
/// falls back to the numeric value with at least one decimal place, so 0.0
/// renders as "0.0" and 8.0 as "8.0".
pub fn axis_label(value: f64) -> String {
    if (1.0..8.0).contains(&value) {
        return WEEKDAY_LABELS[value as usize - 1].to_string();
    }
    if value == value.trunc() {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Entrance animation that grows the chart's y values from the baseline
/// when the hosting sheet opens.
#[derive(Debug, Clone)]
pub struct YAxisEntrance {
    elapsed: f32,
    duration: f32,
    active: bool,
}

impl YAxisEntrance {
    pub fn new(duration: f32) -> Self {
        // Starts settled so a chart shown without a trigger draws at full
        // height.
        Self {
            elapsed: duration,
            duration,
            active: false,
        }
    }

    /// Re-triggers the entrance from the baseline.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        self.active = true;
    }

    pub fn tick(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.active = false;
        }
    }

    /// Eased growth factor in [0, 1] (ease-out cubic).
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        let inv = 1.0 - t;
        1.0 - inv * inv * inv
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Default for YAxisEntrance {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_labels_by_truncation() {
        assert_eq!(axis_label(1.0), "Mon");
        assert_eq!(axis_label(2.0), "Tue");
        assert_eq!(axis_label(3.0), "Wed");
        assert_eq!(axis_label(4.5), "Thu");
        assert_eq!(axis_label(5.0), "Fri");
        assert_eq!(axis_label(6.0), "Sat");
        assert_eq!(axis_label(7.0), "Sun");
        assert_eq!(axis_label(7.9), "Sun");
    }

    #[test]
    fn test_out_of_range_values_fall_back_to_numbers() {
        assert_eq!(axis_label(0.0), "0.0");
        assert_eq!(axis_label(8.0), "8.0");
        assert_eq!(axis_label(-3.0), "-3.0");
        assert_eq!(axis_label(8.25), "8.25");
        // Sub-1 values also fall back rather than indexing off the front
        // of the label table.
        assert_eq!(axis_label(0.5), "0.5");
    }

    #[test]
    fn test_entrance_grows_then_settles() {
        let mut entrance = YAxisEntrance::new(1.0);
        assert_eq!(entrance.progress(), 1.0);
        assert!(!entrance.is_active());

        entrance.restart();
        assert_eq!(entrance.progress(), 0.0);
        entrance.tick(0.5);
        let mid = entrance.progress();
        assert!(mid > 0.0 && mid < 1.0);
        entrance.tick(0.6);
        assert_eq!(entrance.progress(), 1.0);
        assert!(!entrance.is_active());
    }

    #[test]
    fn test_weekly_points_cover_the_week() {
        assert_eq!(WEEKLY_POINTS.len(), 7);
        assert!(WEEKLY_POINTS.iter().all(|&(_, y)| y <= Y_AXIS_MAX));
        assert_eq!(WEEKLY_POINTS[0], (1.0, 5.0));
        assert_eq!(WEEKLY_POINTS[6], (7.0, 1.0));
    }
}
