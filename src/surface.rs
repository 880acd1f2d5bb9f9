/// Identity of a note's placement slot, stable for one reset cycle.
pub type NoteId = usize;

/// Axis-aligned placement rectangle in pixel units. Kept in floats so the
/// simulation never accumulates rounding; the renderer rounds at the edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Fixed rectangle roles placed once per reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// The track outline.
    Frame,
    /// The zero-width line notes must cross at their scheduled instant.
    Target,
    /// Sentinel zone past the visible edge that masks scrolled-out notes.
    Culler,
}

/// What the track needs from a renderer. Placements are absolute and
/// idempotent; the surface retains the last rect per slot. Note slots are
/// keyed by note identity and replaced wholesale each frame, so a culled
/// note's rectangle never lingers.
pub trait Surface {
    fn place(&mut self, slot: Slot, rect: Rect);
    fn place_notes(&mut self, notes: &[(NoteId, Rect)]);
    fn set_visible(&mut self, visible: bool);
}
