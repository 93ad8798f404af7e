//! Interactive sheet core - sheet state machine, animation coordinator, and
//! gesture-to-animation bridge.
//!
//! A `Sheet` is one pull-up panel with two stable states (closed and open).
//! Transitions between them are interruptible: a drag gesture can grab an
//! in-flight transition, scrub it by fractional progress, and release it with
//! a velocity that decides which endpoint it runs to. All logic here is pure
//! and time-stepped; the app drives it from its per-frame update with `tick`.

/// Duration used when the primary sheet force-closes the secondary.
pub const FORCE_CLOSE_DURATION: f32 = 2.0;

/// Stable state of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetState {
    Closed,
    Open,
}

impl SheetState {
    pub fn opposite(self) -> Self {
        match self {
            SheetState::Closed => SheetState::Open,
            SheetState::Open => SheetState::Closed,
        }
    }
}

/// Timing curve applied when sampling a track's visual progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Curve {
    /// Eased value for a completion fraction.
    ///
    /// Fractions outside the unit range extrapolate linearly so that a
    /// scrubbed overshoot still moves the sampled attributes.
    pub fn value(self, t: f32) -> f32 {
        if !(0.0..=1.0).contains(&t) {
            return t;
        }
        match self {
            Curve::Linear => t,
            Curve::EaseIn => t * t,
            Curve::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv
            }
            Curve::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// Which animated attribute a track drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    /// Panel offset along the drag axis (and any transform slaved to it).
    Position,
    /// Opacity of the sheet's inner content.
    Fade,
}

/// Static description of one animation track a sheet creates per transition.
#[derive(Debug, Clone, Copy)]
pub struct TrackSpec {
    pub kind: TrackKind,
    /// Curve used when the transition targets the open state.
    pub opening_curve: Curve,
    /// Curve used when the transition targets the closed state.
    pub closing_curve: Curve,
}

/// Configuration for one sheet instance.
#[derive(Debug, Clone)]
pub struct SheetParams {
    /// Offset along the drag axis when closed (screen-down positive).
    pub closed_offset: f32,
    /// Offset along the drag axis when open.
    pub open_offset: f32,
    /// Natural transition duration in seconds.
    pub duration: f32,
    /// Tracks created for every transition, in a fixed order.
    pub tracks: Vec<TrackSpec>,
}

impl SheetParams {
    /// Total drag distance between the two stable positions.
    pub fn travel(&self) -> f32 {
        (self.closed_offset - self.open_offset).abs()
    }
}

/// One scrubbable animation within a transition.
#[derive(Debug, Clone)]
struct Track {
    kind: TrackKind,
    curve: Curve,
    fraction: f32,
}

/// An in-flight transition between the two stable states.
///
/// Direction is a single explicit flag on the transition record rather than
/// a property read off any individual track, so an empty or reordered track
/// list can never misreport it.
#[derive(Debug)]
struct Transition {
    /// The stable state originally requested.
    target: SheetState,
    /// When set, the transition runs back toward its origin and commits the
    /// opposite of `target`.
    reversed: bool,
    /// False while a drag gesture holds the transition paused for scrubbing.
    running: bool,
    duration: f32,
    tracks: Vec<Track>,
    /// Per-track completion fractions captured at drag-begin, parallel to
    /// `tracks`.
    baselines: Vec<f32>,
}

/// One interactive pull-up panel.
pub struct Sheet {
    params: SheetParams,
    state: SheetState,
    transition: Option<Transition>,
}

impl Sheet {
    pub fn new(params: SheetParams) -> Self {
        Self {
            params,
            state: SheetState::Closed,
            transition: None,
        }
    }

    pub fn params(&self) -> &SheetParams {
        &self.params
    }

    /// The stable state. Only ever updated by transition completion.
    pub fn state(&self) -> SheetState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.transition.is_none()
    }

    /// Target of the in-flight transition, if any.
    pub fn transition_target(&self) -> Option<SheetState> {
        self.transition.as_ref().map(|tr| tr.target)
    }

    /// Begins a transition toward `target` unless one is already in flight.
    ///
    /// At most one transition exists per sheet; a redundant call is a strict
    /// no-op so overlapping gesture and button triggers cannot stack
    /// conflicting animation sets.
    pub fn start_transition(&mut self, target: SheetState, duration: f32) {
        if self.transition.is_some() {
            return;
        }
        let tracks: Vec<Track> = self
            .params
            .tracks
            .iter()
            .map(|spec| Track {
                kind: spec.kind,
                curve: match target {
                    SheetState::Open => spec.opening_curve,
                    SheetState::Closed => spec.closing_curve,
                },
                fraction: 0.0,
            })
            .collect();
        let baselines = vec![0.0; tracks.len()];
        self.transition = Some(Transition {
            target,
            reversed: false,
            running: true,
            duration,
            tracks,
            baselines,
        });
    }

    /// Freezes all running tracks at their current fractions.
    pub fn pause(&mut self) {
        if let Some(tr) = &mut self.transition {
            tr.running = false;
        }
    }

    /// Sets every track's completion fraction to `fraction` plus the
    /// baseline captured at drag-begin. Values may overshoot the unit range;
    /// sampling extrapolates and completion snaps back.
    pub fn scrub(&mut self, fraction: f32) {
        if let Some(tr) = &mut self.transition {
            for (track, baseline) in tr.tracks.iter_mut().zip(&tr.baselines) {
                track.fraction = fraction + baseline;
            }
        }
    }

    /// Continues the transition at natural speed, flipping its direction
    /// first when `reversed` differs from the current flag.
    pub fn resume(&mut self, reversed: bool) {
        if let Some(tr) = &mut self.transition {
            tr.reversed = reversed;
            tr.running = true;
            // Overshoot from scrubbing ends here; natural playback runs
            // inside the unit range.
            for track in &mut tr.tracks {
                track.fraction = track.fraction.clamp(0.0, 1.0);
            }
        }
    }

    /// Advances running tracks by `dt` seconds.
    ///
    /// Returns the committed stable state when the transition finishes. A
    /// reversed transition finishes at its origin, which commits the
    /// opposite of the originally requested target. The track list is
    /// cleared atomically with the commit, re-enabling `start_transition`.
    pub fn tick(&mut self, dt: f32) -> Option<SheetState> {
        let tr = self.transition.as_mut()?;
        if !tr.running {
            return None;
        }
        let step = if tr.duration > 0.0 {
            dt / tr.duration
        } else {
            1.0
        };
        let endpoint = if tr.reversed { 0.0 } else { 1.0 };
        let mut done = true;
        for track in &mut tr.tracks {
            if tr.reversed {
                track.fraction = (track.fraction - step).max(0.0);
            } else {
                track.fraction = (track.fraction + step).min(1.0);
            }
            if track.fraction != endpoint {
                done = false;
            }
        }
        if !done {
            return None;
        }
        let committed = if tr.reversed {
            tr.target.opposite()
        } else {
            tr.target
        };
        self.state = committed;
        // Dropping the transition snaps sampling back to the exact stable
        // values, absorbing any float drift accumulated while scrubbing.
        self.transition = None;
        Some(committed)
    }

    /// Eased progress toward the open state for one track, in [0, 1] while
    /// settled and possibly beyond while a scrub overshoots.
    pub fn openness(&self, kind: TrackKind) -> f32 {
        let settled = match self.state {
            SheetState::Open => 1.0,
            SheetState::Closed => 0.0,
        };
        let Some(tr) = &self.transition else {
            return settled;
        };
        let Some(track) = tr.tracks.iter().find(|t| t.kind == kind) else {
            return settled;
        };
        let eased = track.curve.value(track.fraction);
        match tr.target {
            SheetState::Open => eased,
            SheetState::Closed => 1.0 - eased,
        }
    }

    /// Current offset along the drag axis, interpolated by the position
    /// track.
    pub fn offset(&self) -> f32 {
        let t = self.openness(TrackKind::Position);
        self.params.closed_offset + (self.params.open_offset - self.params.closed_offset) * t
    }

    // --- Gesture-to-animation bridge -----------------------------------

    /// Drag-begin: start (or grab) the transition toward the opposite
    /// stable state, pause it, and record each track's fraction as the
    /// scrub baseline.
    pub fn drag_began(&mut self) {
        self.start_transition(self.state.opposite(), self.params.duration);
        self.pause();
        if let Some(tr) = &mut self.transition {
            tr.baselines = tr.tracks.iter().map(|t| t.fraction).collect();
        }
    }

    /// Drag-changed: convert a translation along the screen-down axis into
    /// a completion fraction and scrub all tracks in lock-step.
    pub fn drag_changed(&mut self, translation: f32) {
        let Some(tr) = &self.transition else {
            return;
        };
        let travel = self.params.travel();
        if travel <= 0.0 {
            return;
        }
        let mut fraction = -translation / travel;
        // Open-to-closed drags run in the opposite visual direction.
        if self.state == SheetState::Open {
            fraction = -fraction;
        }
        // Compensate for an earlier velocity-triggered direction flip.
        if tr.reversed {
            fraction = -fraction;
        }
        self.scrub(fraction);
    }

    /// Drag-ended: resolve the final direction from the release velocity
    /// (screen-down positive, so positive velocity means closing) and let
    /// the transition run to completion.
    pub fn drag_ended(&mut self, velocity: f32) {
        let Some(tr) = &mut self.transition else {
            return;
        };
        // No motion at release: keep whatever direction is already implied.
        if velocity == 0.0 {
            let reversed = tr.reversed;
            self.resume(reversed);
            return;
        }
        let should_close = velocity > 0.0;
        let reversed = match self.state {
            SheetState::Open => {
                if should_close && tr.reversed {
                    false
                } else if !should_close && !tr.reversed {
                    true
                } else {
                    tr.reversed
                }
            }
            SheetState::Closed => {
                if should_close && !tr.reversed {
                    true
                } else if !should_close && tr.reversed {
                    false
                } else {
                    tr.reversed
                }
            }
        };
        self.resume(reversed);
    }
}

/// Outcome of ticking a [`SheetPair`] for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PairTick {
    /// Stable state the primary sheet committed this frame, if any.
    pub primary_committed: Option<SheetState>,
    /// Stable state the secondary sheet committed this frame, if any.
    pub secondary_committed: Option<SheetState>,
}

/// The two sheets of the dashboard, coupled by an exclusivity rule: opening
/// the primary sheet first force-closes the secondary if it is open.
pub struct SheetPair {
    pub primary: Sheet,
    pub secondary: Sheet,
}

impl SheetPair {
    pub fn new(primary: Sheet, secondary: Sheet) -> Self {
        Self { primary, secondary }
    }

    fn enforce_exclusivity(&mut self, target: SheetState) {
        if target == SheetState::Open && self.secondary.state() == SheetState::Open {
            self.secondary
                .start_transition(SheetState::Closed, FORCE_CLOSE_DURATION);
        }
    }

    /// Programmatic transition of the primary sheet.
    pub fn primary_transition(&mut self, target: SheetState, duration: f32) {
        self.enforce_exclusivity(target);
        self.primary.start_transition(target, duration);
    }

    /// Drag-begin on the primary sheet's surface.
    pub fn primary_drag_began(&mut self) {
        self.enforce_exclusivity(self.primary.state().opposite());
        self.primary.drag_began();
    }

    pub fn tick(&mut self, dt: f32) -> PairTick {
        PairTick {
            primary_committed: self.primary.tick(dt),
            secondary_committed: self.secondary.tick(dt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_params() -> SheetParams {
        SheetParams {
            closed_offset: -230.0,
            open_offset: 0.0,
            duration: 1.0,
            tracks: vec![
                TrackSpec {
                    kind: TrackKind::Position,
                    opening_curve: Curve::EaseInOut,
                    closing_curve: Curve::EaseInOut,
                },
                TrackSpec {
                    kind: TrackKind::Fade,
                    opening_curve: Curve::EaseIn,
                    closing_curve: Curve::EaseOut,
                },
            ],
        }
    }

    fn run_to_completion(sheet: &mut Sheet) -> SheetState {
        for _ in 0..600 {
            if let Some(state) = sheet.tick(1.0 / 60.0) {
                return state;
            }
        }
        panic!("transition never completed");
    }

    #[test]
    fn test_natural_open_then_close_round_trip() {
        let mut sheet = Sheet::new(test_params());
        let closed_offset = sheet.offset();

        sheet.start_transition(SheetState::Open, 1.0);
        assert_eq!(run_to_completion(&mut sheet), SheetState::Open);
        assert_eq!(sheet.state(), SheetState::Open);
        assert!(sheet.is_idle());
        assert_eq!(sheet.offset(), 0.0);
        assert_eq!(sheet.openness(TrackKind::Fade), 1.0);

        sheet.start_transition(SheetState::Closed, 1.0);
        assert_eq!(run_to_completion(&mut sheet), SheetState::Closed);
        assert_eq!(sheet.offset(), closed_offset);
        assert_eq!(sheet.openness(TrackKind::Fade), 0.0);
    }

    #[test]
    fn test_start_transition_is_idempotent_while_in_flight() {
        let mut sheet = Sheet::new(test_params());
        sheet.start_transition(SheetState::Open, 1.0);
        sheet.tick(0.25);
        let offset_before = sheet.offset();
        // A redundant start must not recreate tracks or reset progress.
        sheet.start_transition(SheetState::Closed, 5.0);
        assert_eq!(sheet.transition_target(), Some(SheetState::Open));
        assert_eq!(sheet.offset(), offset_before);
    }

    #[test]
    fn test_drag_from_closed_commits_open() {
        // The full drag scenario: closed sheet, baselines [0, 0], raw
        // fraction 0.3, released with upward (negative) velocity.
        let mut sheet = Sheet::new(test_params());
        sheet.drag_began();
        assert!(!sheet.is_idle());

        // Dragging up 30% of the travel distance scrubs both tracks to 0.3.
        sheet.drag_changed(-0.3 * sheet.params().travel());
        let tr = sheet.transition.as_ref().unwrap();
        assert_eq!(tr.baselines, vec![0.0, 0.0]);
        for track in &tr.tracks {
            assert!((track.fraction - 0.3).abs() < 1e-6);
        }

        sheet.drag_ended(-400.0);
        assert!(!sheet.transition.as_ref().unwrap().reversed);
        assert_eq!(run_to_completion(&mut sheet), SheetState::Open);
        assert!(sheet.is_idle());
    }

    #[test]
    fn test_drag_from_closed_flung_down_stays_closed() {
        let mut sheet = Sheet::new(test_params());
        sheet.drag_began();
        sheet.drag_changed(-0.6 * sheet.params().travel());
        // Positive velocity along the screen-down axis means closing, so
        // the opening transition flips to reversed and finishes at its
        // origin.
        sheet.drag_ended(500.0);
        assert!(sheet.transition.as_ref().unwrap().reversed);
        assert_eq!(run_to_completion(&mut sheet), SheetState::Closed);
        assert_eq!(sheet.state(), SheetState::Closed);
        assert_eq!(sheet.offset(), -230.0);
    }

    #[test]
    fn test_drag_from_open_commits_closed() {
        let mut sheet = Sheet::new(test_params());
        sheet.start_transition(SheetState::Open, 1.0);
        run_to_completion(&mut sheet);

        sheet.drag_began();
        // From open, a downward drag is a positive translation.
        sheet.drag_changed(0.4 * sheet.params().travel());
        let tr = sheet.transition.as_ref().unwrap();
        assert!((tr.tracks[0].fraction - 0.4).abs() < 1e-6);
        sheet.drag_ended(300.0);
        assert!(!sheet.transition.as_ref().unwrap().reversed);
        assert_eq!(run_to_completion(&mut sheet), SheetState::Closed);
    }

    #[test]
    fn test_drag_from_open_flung_up_stays_open() {
        let mut sheet = Sheet::new(test_params());
        sheet.start_transition(SheetState::Open, 1.0);
        run_to_completion(&mut sheet);

        sheet.drag_began();
        sheet.drag_changed(0.2 * sheet.params().travel());
        sheet.drag_ended(-250.0);
        assert!(sheet.transition.as_ref().unwrap().reversed);
        assert_eq!(run_to_completion(&mut sheet), SheetState::Open);
    }

    #[test]
    fn test_zero_velocity_release_keeps_direction() {
        let mut sheet = Sheet::new(test_params());
        sheet.drag_began();
        sheet.drag_changed(-0.5 * sheet.params().travel());
        sheet.drag_ended(0.0);
        let tr = sheet.transition.as_ref().unwrap();
        assert!(!tr.reversed);
        assert!(tr.running);
        // Still resolves to a terminal state by natural completion.
        assert_eq!(run_to_completion(&mut sheet), SheetState::Open);
    }

    #[test]
    fn test_grabbing_a_running_transition_records_baselines() {
        let mut sheet = Sheet::new(test_params());
        sheet.start_transition(SheetState::Open, 1.0);
        sheet.tick(0.5);
        let mid = sheet.transition.as_ref().unwrap().tracks[0].fraction;
        assert!(mid > 0.0 && mid < 1.0);

        // Grabbing mid-flight pauses in place instead of restarting.
        sheet.drag_began();
        let tr = sheet.transition.as_ref().unwrap();
        assert!(!tr.running);
        assert_eq!(tr.baselines[0], mid);

        // Scrubbing is then relative to the grabbed progress.
        sheet.drag_changed(-0.1 * sheet.params().travel());
        let tr = sheet.transition.as_ref().unwrap();
        assert!((tr.tracks[0].fraction - (mid + 0.1)).abs() < 1e-6);
    }

    #[test]
    fn test_reversed_flip_negates_drag_fraction() {
        let mut sheet = Sheet::new(test_params());
        sheet.drag_began();
        sheet.drag_changed(-0.5 * sheet.params().travel());
        // Fling down: transition reverses toward closed.
        sheet.drag_ended(500.0);

        // Grab it again before it lands and keep dragging.
        sheet.drag_began();
        let baseline = sheet.transition.as_ref().unwrap().tracks[0].fraction;
        sheet.drag_changed(-0.2 * sheet.params().travel());
        let tr = sheet.transition.as_ref().unwrap();
        // The raw fraction 0.2 is negated for the reversed transition.
        assert!((tr.tracks[0].fraction - (baseline - 0.2)).abs() < 1e-6);
    }

    #[test]
    fn test_scrub_overshoot_is_clamped_on_resume() {
        let mut sheet = Sheet::new(test_params());
        sheet.drag_began();
        sheet.drag_changed(-1.4 * sheet.params().travel());
        let tr = sheet.transition.as_ref().unwrap();
        assert!(tr.tracks[0].fraction > 1.0);
        // Sampling extrapolates past the open position while overshot.
        assert!(sheet.offset() > 0.0);

        sheet.drag_ended(-100.0);
        let state = run_to_completion(&mut sheet);
        assert_eq!(state, SheetState::Open);
        assert_eq!(sheet.offset(), 0.0);
    }

    #[test]
    fn test_pair_exclusivity_forces_secondary_closed() {
        let primary = Sheet::new(test_params());
        let mut secondary = Sheet::new(SheetParams {
            closed_offset: -170.0,
            open_offset: 130.0,
            duration: 1.0,
            tracks: vec![TrackSpec {
                kind: TrackKind::Position,
                opening_curve: Curve::EaseInOut,
                closing_curve: Curve::EaseInOut,
            }],
        });
        secondary.start_transition(SheetState::Open, 1.0);
        run_to_completion(&mut secondary);

        let mut pair = SheetPair::new(primary, secondary);
        pair.primary_transition(SheetState::Open, 1.0);
        // The secondary's close starts before the primary's open resolves.
        assert_eq!(pair.secondary.transition_target(), Some(SheetState::Closed));

        let mut primary_done = None;
        let mut secondary_done = None;
        for _ in 0..600 {
            let events = pair.tick(1.0 / 60.0);
            primary_done = primary_done.or(events.primary_committed);
            secondary_done = secondary_done.or(events.secondary_committed);
        }
        assert_eq!(primary_done, Some(SheetState::Open));
        assert_eq!(secondary_done, Some(SheetState::Closed));
    }

    #[test]
    fn test_pair_leaves_closed_secondary_alone() {
        let pair_params = test_params();
        let mut pair = SheetPair::new(
            Sheet::new(pair_params.clone()),
            Sheet::new(pair_params),
        );
        pair.primary_drag_began();
        assert!(pair.secondary.is_idle());
        assert_eq!(pair.secondary.state(), SheetState::Closed);
    }

    #[test]
    fn test_curve_extrapolates_outside_unit_range() {
        assert_eq!(Curve::EaseInOut.value(-0.25), -0.25);
        assert_eq!(Curve::EaseIn.value(1.5), 1.5);
        assert_eq!(Curve::EaseInOut.value(0.0), 0.0);
        assert_eq!(Curve::EaseInOut.value(1.0), 1.0);
    }
}
