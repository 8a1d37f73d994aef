#![cfg_attr(not(test), no_std)]

//! Text-line rasterization: UTF-8 decoding, Unifont `.hex` glyph lookup,
//! and 1bpp glyph blitting into a 256x16 ARGB [`Canvas`].

pub mod config;
pub mod error;
pub mod font;
pub mod pipeline;
pub mod raster;
pub mod utf8;

pub use config::{DecodePolicy, RenderConfig};
pub use error::{DecodeError, LookupError, RasterError, RenderError};
pub use font::{GlyphBitmap, GlyphSource, GlyphWidth, HexGlyphTable};
pub use line_canvas::Canvas;
pub use pipeline::{LineRenderer, RenderOutput, RenderStatus, render};
