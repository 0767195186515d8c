//! Draw batches sent to the display sink.
//!
//! A [`Frame`] is one atomic visual update. Sinks that speak a
//! begin/draw/end protocol can walk [`Frame::commands`].

use super::body::Body;
use super::engine::{Engine, Tick};
use super::grid::{Grid, Position};

/// 24-bit colours used by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
    Red,
    Green,
    Blue,
}

impl Color {
    /// `0xRRGGBB`
    pub const fn rgb(self) -> u32 {
        match self {
            Self::White => 0xFF_FF_FF,
            Self::Black => 0x00_00_00,
            Self::Red => 0xFF_00_00,
            Self::Green => 0x00_FF_00,
            Self::Blue => 0x00_00_FF,
        }
    }
}

/// Text drawn at a pixel position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub text: String,
    pub x: u32,
    pub y: u32,
    pub fg: Color,
    pub bg: Color,
    pub scale: u8,
}

/// One step of the begin/draw/end protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawCmd<'a> {
    Begin,
    Text(&'a Glyph),
    End,
}

/// Ordered glyphs making up a single frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    glyphs: Vec<Glyph>,
}

impl Frame {
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The frame bracketed by `Begin` and `End`.
    pub fn commands(&self) -> impl Iterator<Item = DrawCmd<'_>> + '_ {
        std::iter::once(DrawCmd::Begin)
            .chain(self.glyphs.iter().map(DrawCmd::Text))
            .chain(std::iter::once(DrawCmd::End))
    }
}

const SEGMENT: &str = "o";
const APPLE: &str = "a";
const BORDER: &str = "*";
const DEAD: &str = "x";

/// Turns simulation state into frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Renderer {
    cell_px: u32,
    scale: u8,
}

impl Renderer {
    pub fn new(cell_px: u32, scale: u8) -> Self {
        Self { cell_px, scale }
    }

    /// Frame emitted after a `Moved` or `Grew` tick.
    pub fn tick_frame(&self, engine: &Engine, tick: &Tick) -> Frame {
        let mut frame = FrameBuilder::new(self);
        let body = engine.body();

        frame.cell(APPLE, engine.apple().position(), Color::Green);
        if let Some(vacated) = tick.vacated {
            frame.cell_on(SEGMENT, vacated, Color::White, Color::White);
        }
        for segment in body.trailing() {
            frame.cell(SEGMENT, segment, Color::Blue);
        }
        frame.cell(SEGMENT, body.head(), Color::Black);
        self.border(&mut frame, engine.grid());
        frame.text(
            format!("snake size: {}", body.len()),
            0,
            (engine.grid().height() + 1) * self.cell_px,
            Color::Blue,
        );

        frame.finish()
    }

    /// Frame emitted on entering the dead state.
    pub fn death_frame(&self, body: &Body) -> Frame {
        let mut frame = FrameBuilder::new(self);
        for segment in body.iter() {
            frame.cell(DEAD, segment, Color::Red);
        }
        frame.finish()
    }

    fn border(&self, frame: &mut FrameBuilder<'_>, grid: &Grid) {
        for x in 0..=grid.width() {
            frame.cell(BORDER, Position::new(x, grid.height()), Color::Red);
        }
        for y in 0..=grid.height() {
            frame.cell(BORDER, Position::new(grid.width(), y), Color::Red);
        }
    }
}

struct FrameBuilder<'r> {
    renderer: &'r Renderer,
    glyphs: Vec<Glyph>,
}

impl<'r> FrameBuilder<'r> {
    fn new(renderer: &'r Renderer) -> Self {
        Self {
            renderer,
            glyphs: Vec::new(),
        }
    }

    fn cell(&mut self, text: &str, pos: Position, fg: Color) {
        self.cell_on(text, pos, fg, Color::White);
    }

    fn cell_on(&mut self, text: &str, pos: Position, fg: Color, bg: Color) {
        let px = self.renderer.cell_px;
        self.push(text.to_string(), pos.x * px, pos.y * px, fg, bg);
    }

    fn text(&mut self, text: String, x: u32, y: u32, fg: Color) {
        self.push(text, x, y, fg, Color::White);
    }

    fn push(&mut self, text: String, x: u32, y: u32, fg: Color, bg: Color) {
        self.glyphs.push(Glyph {
            text,
            x,
            y,
            fg,
            bg,
            scale: self.renderer.scale,
        });
    }

    fn finish(self) -> Frame {
        Frame {
            glyphs: self.glyphs,
        }
    }
}
