//! Shared interaction core for the watering dashboard
//!
//! Pure, tick-driven logic with no windowing or rendering dependencies: the
//! interactive sheet machinery (state machine, animation coordinator,
//! gesture bridge), the instant-begin drag recognizer, the watering-days
//! counter, the weekly chart data, and config persistence.

pub mod chart;
pub mod config;
pub mod counter;
pub mod gesture;
pub mod sheet;

pub use chart::{axis_label, YAxisEntrance, LIMIT_LINE_X, WEEKLY_POINTS, Y_AXIS_GRANULARITY, Y_AXIS_MAX};
pub use config::{config_dir, config_path, load_config, save_config, ConfigError};
pub use counter::{WateringCounter, DAYS_CEILING, DAYS_FLOOR};
pub use gesture::{DragEvent, DragRecognizer, DragSample};
pub use sheet::{
    Curve, PairTick, Sheet, SheetPair, SheetParams, SheetState, TrackKind, TrackSpec,
    FORCE_CLOSE_DURATION,
};
