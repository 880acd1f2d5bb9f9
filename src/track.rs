use crate::{
    config::Config,
    error::TrackError,
    note::Note,
    surface::{NoteId, Rect, Slot, Surface},
};

/// Fraction of the track width the target line sits at.
const TARGET_RATIO: f32 = 0.85;

/// Seconds a note stays alive past its scheduled arrival.
const GRACE: f32 = 0.3;

/// Width of the masking sentinel past the track's trailing edge.
const CULLER_W: f32 = 200.0;

/// The scrolling track: geometry, the active note collection, and elapsed
/// time. Driven from outside, one `update(dt)` + `draw()` per tick; never
/// initiates its own timing.
pub struct Track {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    target_x: f32,
    display_w: f32,
    scroll_speed: f32,
    t: f32,
    t_max: f32,
    hidden: bool,
    notes: Vec<Note>,
}

impl Track {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            x,
            y,
            w,
            h,
            target_x: 0.0,
            display_w: 0.0,
            scroll_speed: 0.0,
            t: 0.0,
            t_max: 0.0,
            hidden: true,
            notes: Vec::new(),
        }
    }

    /// Rebuilds the track from a fresh config. Validates before mutating
    /// anything, so a failed reset leaves the previous run intact.
    ///
    /// Each note is born at `target_x - v * end`, so pure Euler advancement
    /// puts its trailing edge on the target line exactly at `end`.
    pub fn reset(&mut self, config: &Config, surface: &mut impl Surface) -> Result<(), TrackError> {
        if config.ranges.is_empty() {
            return Err(TrackError::EmptyRanges);
        }

        if !(config.scroll_speed > 0.0) || !config.scroll_speed.is_finite() {
            return Err(TrackError::InvalidSpeed(config.scroll_speed));
        }

        // target_x ignores the gutter: the reserved margin shortens the
        // visible strip, not the arrival line
        self.target_x = self.x + (self.w * TARGET_RATIO).floor();
        self.display_w = if config.gutter {
            self.w
        } else {
            (self.w * TARGET_RATIO).floor()
        };

        surface.place(Slot::Frame, Rect::new(self.x, self.y, self.display_w, self.h));
        surface.place(Slot::Target, Rect::new(self.target_x, self.y, 0.0, self.h));
        surface.place(
            Slot::Culler,
            Rect::new(self.x + self.display_w, self.y, CULLER_W, self.h),
        );
        surface.set_visible(true);

        self.t = 0.0;
        self.scroll_speed = config.scroll_speed;
        self.hidden = false;

        self.t_max = config
            .ranges
            .iter()
            .map(|span| span.end + config.offset)
            .fold(f32::NEG_INFINITY, f32::max)
            + 1.0;

        self.notes.clear();
        for (id, span) in config.ranges.iter().enumerate() {
            let start = span.start + config.offset;
            let end = span.end + config.offset;

            self.notes.push(Note::new(
                id,
                self.target_x - self.scroll_speed * end,
                self.y,
                (end - start) * self.scroll_speed,
                self.h,
                self.scroll_speed,
                end,
            ));
        }

        Ok(())
    }

    /// Advances simulated time by `dt` seconds: one atomic pass that moves
    /// every active note and drops the ones past their grace window. Past
    /// `t_max` the elapsed clock keeps accumulating but notes are left alone.
    pub fn update(&mut self, dt: f32) -> Result<(), TrackError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(TrackError::InvalidTick(dt));
        }

        self.t += dt;

        if self.t > self.t_max || self.notes.is_empty() {
            return Ok(());
        }

        let deadline = self.t - GRACE;

        for note in &mut self.notes {
            note.update(dt);
        }
        self.notes.retain(|note| note.end_time() >= deadline);

        Ok(())
    }

    /// Places every live on-screen note into its identity-keyed slot; hides
    /// the surface once the collection drains.
    pub fn draw(&mut self, surface: &mut impl Surface) {
        if self.notes.is_empty() {
            if !self.hidden {
                surface.set_visible(false);
                self.hidden = true;
            }
            return;
        }

        let placed: Vec<(NoteId, Rect)> = self
            .notes
            .iter()
            .filter(|note| !note.off_screen())
            .map(|note| (note.id(), note.rect()))
            .collect();

        surface.place_notes(&placed);
    }

    pub const fn target_x(&self) -> f32 {
        self.target_x
    }

    pub const fn display_w(&self) -> f32 {
        self.display_w
    }

    pub const fn elapsed(&self) -> f32 {
        self.t
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }
}
