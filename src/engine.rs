use crate::{
    strerr::Strerr,
    surface::{NoteId, Rect, Slot, Surface},
};
use sdl2::{
    EventPump, Sdl,
    pixels::Color,
    rect::Rect as SdlRect,
    render::Canvas,
    video::Window,
};

const COLOR_BACKGROUND: Color = Color::RGB(0x10, 0x10, 0x14);
const COLOR_FRAME: Color = Color::RGB(0x22, 0x2A, 0x36);
const COLOR_NOTE: Color = Color::RGB(0x00, 0x6A, 0x67);
const COLOR_TARGET: Color = Color::RGB(0xFF, 0xFF, 0xFF);

/// Minimum drawn width for hairline rects. The target marker is placed with
/// zero width but still has to be visible.
const HAIRLINE: f32 = 2.0;

/// SDL front end for the track: owns the window and canvas, retains the
/// last placed rect per slot, and repaints them every frame.
pub struct Engine {
    pub sdl_context: Sdl,
    canvas: Canvas<Window>,
    frame: Option<Rect>,
    target: Option<Rect>,
    culler: Option<Rect>,
    notes: Vec<(NoteId, Rect)>,
    visible: bool,
}

impl Engine {
    pub fn new(title: &str, (width, height): (u32, u32)) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .strerr()?;

        let canvas = window
            .into_canvas()
            .present_vsync()
            .accelerated()
            .build()
            .strerr()?;

        Ok(Self {
            sdl_context,
            canvas,
            frame: None,
            target: None,
            culler: None,
            notes: Vec::new(),
            visible: false,
        })
    }

    pub fn event_pump(&self) -> Result<EventPump, String> {
        self.sdl_context.event_pump()
    }

    pub fn set_title(&mut self, title: impl AsRef<str>) -> Result<(), String> {
        self.canvas.window_mut().set_title(title.as_ref()).strerr()
    }

    pub fn clear(&mut self) {
        self.canvas.set_draw_color(COLOR_BACKGROUND);
        self.canvas.clear();
    }

    /// Repaints the retained slots. Notes go under the culler so anything
    /// past the track's trailing edge is masked back to the background, and
    /// the target hairline stays on top.
    pub fn render(&mut self) -> Result<(), String> {
        if !self.visible {
            return Ok(());
        }

        if let Some(rect) = self.frame {
            self.fill(rect, COLOR_FRAME)?;
        }

        let notes = std::mem::take(&mut self.notes);
        for &(_, rect) in &notes {
            self.fill(rect, COLOR_NOTE)?;
        }
        self.notes = notes;

        if let Some(rect) = self.culler {
            self.fill(rect, COLOR_BACKGROUND)?;
        }

        if let Some(rect) = self.target {
            self.fill(rect, COLOR_TARGET)?;
        }

        Ok(())
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }

    fn fill(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        let w = rect.w.max(HAIRLINE).round() as u32;
        let h = rect.h.max(0.0).round() as u32;

        self.canvas.set_draw_color(color);
        self.canvas
            .fill_rect(SdlRect::new(rect.x.round() as i32, rect.y.round() as i32, w, h))
    }
}

impl Surface for Engine {
    fn place(&mut self, slot: Slot, rect: Rect) {
        match slot {
            Slot::Frame => self.frame = Some(rect),
            Slot::Target => self.target = Some(rect),
            Slot::Culler => self.culler = Some(rect),
        }
    }

    fn place_notes(&mut self, notes: &[(NoteId, Rect)]) {
        self.notes.clear();
        self.notes.extend_from_slice(notes);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
