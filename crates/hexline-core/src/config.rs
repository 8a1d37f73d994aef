//! Render-time knobs.

/// Optional UTF-8 strictness beyond the baseline lead/continuation checks.
///
/// Both checks are off by default, so surrogate codepoints and overlong
/// multi-byte forms decode to whatever value their bits assemble to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DecodePolicy {
    /// Reject codepoints in `0xD800..=0xDFFF`.
    pub reject_surrogates: bool,
    /// Reject multi-byte sequences whose value fits a shorter encoding.
    pub reject_overlong: bool,
}

impl DecodePolicy {
    /// Accepts surrogates and overlong forms; only the lead and continuation
    /// checks apply.
    pub const fn baseline() -> Self {
        Self {
            reject_surrogates: false,
            reject_overlong: false,
        }
    }

    /// Rejects both surrogates and overlong forms.
    pub const fn strict() -> Self {
        Self {
            reject_surrogates: true,
            reject_overlong: true,
        }
    }
}

impl Default for DecodePolicy {
    fn default() -> Self {
        Self::baseline()
    }
}

/// Per-render settings shared by every session a renderer starts.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RenderConfig {
    /// Extra pixels added to the cursor after each glyph.
    pub glyph_spacing: u8,
    /// Strictness applied while decoding the text.
    pub decode: DecodePolicy,
}

impl RenderConfig {
    /// Returns a copy with `glyph_spacing` replaced.
    pub const fn with_glyph_spacing(mut self, glyph_spacing: u8) -> Self {
        self.glyph_spacing = glyph_spacing;
        self
    }

    /// Returns a copy with the decode policy replaced.
    pub const fn with_decode_policy(mut self, decode: DecodePolicy) -> Self {
        self.decode = decode;
        self
    }
}
