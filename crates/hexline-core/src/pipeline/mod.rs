//! Decode -> lookup -> rasterize driver for one text line.
//!
//! A [`RenderSession`] moves through
//! `Ready -> Decoding -> LookingUp -> Rasterizing -> Ready` once per codepoint
//! and ends in `Completed` or `Halted`. Any error halts the session; the
//! canvas keeps every glyph placed before it.

use line_canvas::{Canvas, WIDTH};
use log::{debug, trace, warn};

use crate::{
    config::RenderConfig,
    error::RenderError,
    font::GlyphSource,
    raster,
    utf8::Utf8Decoder,
};

/// Where and why a render stopped early.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Halt {
    pub error: RenderError,
    /// Byte index of the sequence whose codepoint failed.
    pub byte_offset: usize,
    /// Cursor at the time of the failure.
    pub cursor: usize,
}

/// Phase of a [`RenderSession`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PipelineState {
    Ready,
    Decoding,
    LookingUp,
    Rasterizing,
    Completed,
    Halted(Halt),
}

impl PipelineState {
    /// Whether the session has stopped for good.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Halted(_))
    }
}

/// Result of one [`RenderSession::step`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    /// A glyph was written with its left edge at `column`.
    Placed { codepoint: u32, column: usize },
    Completed,
    Halted(Halt),
}

/// How a finished render ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RenderStatus {
    Completed,
    Halted(Halt),
}

/// Canvas plus how the render ended. Always fully sized.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderOutput {
    pub canvas: Canvas,
    pub cursor: usize,
    /// Glyphs successfully placed.
    pub glyphs: usize,
    pub status: RenderStatus,
}

impl RenderOutput {
    /// Whether every codepoint of the input was placed.
    pub fn is_complete(&self) -> bool {
        self.status == RenderStatus::Completed
    }

    /// The halt record, if the render stopped early.
    pub fn halt(&self) -> Option<Halt> {
        match self.status {
            RenderStatus::Completed => None,
            RenderStatus::Halted(halt) => Some(halt),
        }
    }

    /// The error that stopped the render, if any.
    pub fn error(&self) -> Option<RenderError> {
        self.halt().map(|halt| halt.error)
    }
}

/// Renders lines against a borrowed glyph source.
#[derive(Debug)]
pub struct LineRenderer<'s, S: GlyphSource + ?Sized> {
    source: &'s S,
    config: RenderConfig,
}

impl<S: GlyphSource + ?Sized> Clone for LineRenderer<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: GlyphSource + ?Sized> Copy for LineRenderer<'_, S> {}

impl<'s, S: GlyphSource + ?Sized> LineRenderer<'s, S> {
    /// Creates a renderer that looks glyphs up in `source`.
    pub const fn new(source: &'s S, config: RenderConfig) -> Self {
        Self { source, config }
    }

    /// Settings applied to every session.
    pub fn config(&self) -> RenderConfig {
        self.config
    }

    /// Starts a step-wise render of `text`.
    pub fn session<'t>(&self, text: &'t [u8]) -> RenderSession<'s, 't, S> {
        RenderSession {
            source: self.source,
            config: self.config,
            decoder: Utf8Decoder::with_policy(text, self.config.decode),
            canvas: Canvas::new(),
            cursor: 0,
            glyphs: 0,
            state: PipelineState::Ready,
        }
    }

    /// Renders `text` to completion or to the first error.
    pub fn render(&self, text: &[u8]) -> RenderOutput {
        if text.first().is_none_or(|&b| b == 0) {
            warn!("render: empty input, returning blank canvas");
        }

        self.session(text).finish()
    }
}

/// Renders `text` with [`RenderConfig::default`].
pub fn render<S: GlyphSource + ?Sized>(text: &[u8], source: &S) -> RenderOutput {
    LineRenderer::new(source, RenderConfig::default()).render(text)
}

/// One in-progress render.
pub struct RenderSession<'s, 't, S: GlyphSource + ?Sized> {
    source: &'s S,
    config: RenderConfig,
    decoder: Utf8Decoder<'t>,
    canvas: Canvas,
    cursor: usize,
    glyphs: usize,
    state: PipelineState,
}

impl<S: GlyphSource + ?Sized> RenderSession<'_, '_, S> {
    /// Current phase.
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Column where the next glyph goes.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Canvas with every glyph placed so far.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Processes one codepoint.
    ///
    /// Once terminal, keeps returning the terminal step without doing work.
    pub fn step(&mut self) -> Step {
        match self.state {
            PipelineState::Completed => return Step::Completed,
            PipelineState::Halted(halt) => return Step::Halted(halt),
            _ => {}
        }

        self.state = PipelineState::Decoding;
        let offset = self.decoder.position();
        let decoded = match self.decoder.next() {
            None => {
                self.state = PipelineState::Completed;
                debug!(
                    "render: completed glyphs={} cursor={}",
                    self.glyphs, self.cursor
                );
                return Step::Completed;
            }
            Some(Err(error)) => return self.halt(error.into(), offset),
            Some(Ok(decoded)) => decoded,
        };
        let codepoint = decoded.codepoint;

        self.state = PipelineState::LookingUp;
        let glyph = match self.source.lookup(codepoint) {
            Ok(glyph) => glyph,
            Err(error) => {
                return self.halt(RenderError::Lookup { codepoint, error }, decoded.offset);
            }
        };

        self.state = PipelineState::Rasterizing;
        let column = self.cursor;
        match raster::blit(&glyph, column, &mut self.canvas) {
            Ok(next) => {
                self.cursor = next
                    .saturating_add(usize::from(self.config.glyph_spacing))
                    .min(WIDTH);
                self.glyphs += 1;
                self.state = PipelineState::Ready;
                trace!(
                    "render: placed U+{:04X} column={} next={}",
                    codepoint, column, self.cursor
                );
                Step::Placed { codepoint, column }
            }
            Err(error) => self.halt(RenderError::Raster { codepoint, error }, decoded.offset),
        }
    }

    /// Runs to a terminal state.
    pub fn finish(mut self) -> RenderOutput {
        while !self.state.is_terminal() {
            self.step();
        }

        let status = match self.state {
            PipelineState::Halted(halt) => RenderStatus::Halted(halt),
            _ => RenderStatus::Completed,
        };

        RenderOutput {
            canvas: self.canvas,
            cursor: self.cursor,
            glyphs: self.glyphs,
            status,
        }
    }

    fn halt(&mut self, error: RenderError, byte_offset: usize) -> Step {
        let halt = Halt {
            error,
            byte_offset,
            cursor: self.cursor,
        };
        warn!(
            "render: halted byte={} cursor={} glyphs={} err={}",
            byte_offset, self.cursor, self.glyphs, error
        );
        self.state = PipelineState::Halted(halt);
        Step::Halted(halt)
    }
}
