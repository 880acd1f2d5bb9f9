use crate::surface::{NoteId, Rect};

// notes move in the +x direction at constant velocity
pub struct Note {
    id: NoteId,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    v: f32,
    end_time: f32,
}

impl Note {
    pub const fn new(id: NoteId, x: f32, y: f32, w: f32, h: f32, v: f32, end_time: f32) -> Self {
        Self { id, x, y, w, h, v, end_time }
    }

    /// Pure Euler step. No clamping, no acceleration.
    pub const fn update(&mut self, dt: f32) {
        self.x += dt * self.v;
    }

    /// Fully scrolled past the origin, nothing left to place.
    pub const fn off_screen(&self) -> bool {
        self.x + self.w < 0.0
    }

    pub const fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    pub const fn id(&self) -> NoteId {
        self.id
    }

    pub const fn x(&self) -> f32 {
        self.x
    }

    pub const fn end_time(&self) -> f32 {
        self.end_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn euler_step() {
        let mut note = Note::new(0, -10.0, 0.0, 5.0, 8.0, 100.0, 1.0);
        note.update(0.05);
        assert_approx_eq!(f32, note.x(), -5.0);
        note.update(0.05);
        assert_approx_eq!(f32, note.x(), 0.0);
    }

    #[test]
    fn off_screen_boundary() {
        let mut note = Note::new(0, -6.0, 0.0, 5.0, 8.0, 100.0, 1.0);
        assert!(note.off_screen());

        note.update(0.01);
        assert!(!note.off_screen());
    }
}
