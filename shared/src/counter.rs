//! Watering-days counter.
//!
//! A two-phase tick-driven counter started by the "Watered" button: the day
//! count climbs to the schedule ceiling one step per 0.10 s, holds for a
//! second, then winds back down to 1 one step per 0.20 s. The button stays
//! disabled until the countdown finishes. No real timers; the app drives it
//! from its update loop with `tick`.

/// Lowest day count, where the counter rests.
pub const DAYS_FLOOR: u32 = 1;
/// Day count at which the climb pauses before winding down.
pub const DAYS_CEILING: u32 = 7;

const STEP_UP_SECS: f32 = 0.10;
const HOLD_SECS: f32 = 1.0;
const STEP_DOWN_SECS: f32 = 0.20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Increasing,
    Holding,
    Decreasing,
}

/// The day counter shown on the info sheet.
#[derive(Debug)]
pub struct WateringCounter {
    phase: Phase,
    count: u32,
    elapsed: f32,
}

impl WateringCounter {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            count: DAYS_FLOOR,
            elapsed: 0.0,
        }
    }

    /// Begins the climb phase. Ignored while a cycle is already running.
    pub fn start(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        self.phase = Phase::Increasing;
        self.elapsed = 0.0;
    }

    /// Stops the cycle and rests at the floor.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.count = DAYS_FLOOR;
        self.elapsed = 0.0;
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// "day" at 1, "days" otherwise.
    pub fn unit_label(&self) -> &'static str {
        if self.count == DAYS_FLOOR {
            "day"
        } else {
            "days"
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Whether the "Watered" button is enabled.
    pub fn button_enabled(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Advances the counter by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if self.phase == Phase::Idle {
            return;
        }
        self.elapsed += dt;
        loop {
            match self.phase {
                Phase::Idle => break,
                Phase::Increasing => {
                    if self.elapsed < STEP_UP_SECS {
                        break;
                    }
                    self.elapsed -= STEP_UP_SECS;
                    self.count += 1;
                    if self.count == DAYS_CEILING {
                        self.phase = Phase::Holding;
                        self.elapsed = 0.0;
                    }
                }
                Phase::Holding => {
                    if self.elapsed < HOLD_SECS {
                        break;
                    }
                    self.elapsed -= HOLD_SECS;
                    self.phase = Phase::Decreasing;
                }
                Phase::Decreasing => {
                    if self.elapsed < STEP_DOWN_SECS {
                        break;
                    }
                    self.elapsed -= STEP_DOWN_SECS;
                    self.count -= 1;
                    if self.count == DAYS_FLOOR {
                        self.phase = Phase::Idle;
                        self.elapsed = 0.0;
                    }
                }
            }
        }
    }
}

impl Default for WateringCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_floor_and_idle() {
        let counter = WateringCounter::new();
        assert_eq!(counter.count(), 1);
        assert_eq!(counter.unit_label(), "day");
        assert!(counter.button_enabled());
    }

    #[test]
    fn test_climbs_to_ceiling_then_holds() {
        let mut counter = WateringCounter::new();
        counter.start();
        assert!(!counter.button_enabled());

        // Six steps of 0.10 s climb from 1 to 7.
        counter.tick(0.61);
        assert_eq!(counter.count(), 7);
        assert_eq!(counter.unit_label(), "days");
        assert!(counter.is_running());

        // Count holds at the ceiling during the pause.
        counter.tick(0.5);
        assert_eq!(counter.count(), 7);
    }

    #[test]
    fn test_winds_down_and_reenables_button() {
        let mut counter = WateringCounter::new();
        counter.start();
        // Climb (0.6 s) + hold (1.0 s) + wind-down (6 * 0.2 s).
        counter.tick(0.61);
        counter.tick(1.0);
        counter.tick(1.25);
        assert_eq!(counter.count(), 1);
        assert_eq!(counter.unit_label(), "day");
        assert!(counter.button_enabled());
    }

    #[test]
    fn test_start_while_running_is_ignored() {
        let mut counter = WateringCounter::new();
        counter.start();
        counter.tick(0.35);
        let mid = counter.count();
        counter.start();
        assert_eq!(counter.count(), mid);
        assert!(counter.is_running());
    }

    #[test]
    fn test_small_ticks_accumulate() {
        let mut counter = WateringCounter::new();
        counter.start();
        for _ in 0..14 {
            counter.tick(0.05);
        }
        assert_eq!(counter.count(), 7);
    }

    #[test]
    fn test_reset_returns_to_floor() {
        let mut counter = WateringCounter::new();
        counter.start();
        counter.tick(0.3);
        counter.reset();
        assert_eq!(counter.count(), 1);
        assert!(counter.button_enabled());
    }
}
