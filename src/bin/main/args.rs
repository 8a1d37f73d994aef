use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "hexline", about = "Render one line of text with a Unifont .hex table")]
pub(super) struct CliArgs {
    /// Unifont `.hex` table to load.
    #[arg(long, value_name = "PATH", env = "HEXLINE_FONT")]
    pub(super) font: PathBuf,

    /// Extra pixels added after each glyph.
    #[arg(long, value_name = "PX", default_value_t = 0)]
    pub(super) spacing: u8,

    /// Reject surrogate codepoints and overlong encodings.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub(super) strict: bool,

    /// Also write the canvas as raw ARGB8888 bytes.
    #[arg(long, value_name = "PATH")]
    pub(super) raw: Option<PathBuf>,

    /// Words to render, joined with single spaces.
    #[arg(required = true, value_name = "TEXT")]
    pub(super) text: Vec<OsString>,
}

impl CliArgs {
    /// Text as raw bytes, so invalid UTF-8 reaches the decoder untouched.
    pub(super) fn text_bytes(&self) -> Vec<u8> {
        self.text
            .iter()
            .map(|word| word.as_encoded_bytes())
            .collect::<Vec<_>>()
            .join(&b' ')
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, error::ErrorKind};

    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("hexline").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn text_words_are_joined_with_spaces() {
        let args = parse(&["--font", "u.hex", "abcd", "¢", "가나"]).unwrap();

        assert_eq!(args.font, PathBuf::from("u.hex"));
        assert_eq!(args.text_bytes(), "abcd ¢ 가나".as_bytes());
        assert_eq!(args.spacing, 0);
        assert!(!args.strict);
        assert_eq!(args.raw, None);
    }

    #[test]
    fn flags_are_parsed() {
        let args = parse(&[
            "--font", "f.hex", "--spacing", "1", "--strict", "--raw", "out.argb", "--",
            "--literal",
        ])
        .unwrap();

        assert_eq!(args.spacing, 1);
        assert!(args.strict);
        assert_eq!(args.raw, Some(PathBuf::from("out.argb")));
        assert_eq!(args.text_bytes(), b"--literal");
    }

    #[test]
    fn bad_invocations_are_rejected() {
        let kind = |args: &[&str]| parse(args).map(|_| ()).unwrap_err().kind();

        assert_eq!(kind(&["--font", "f.hex"]), ErrorKind::MissingRequiredArgument);
        assert_eq!(kind(&["--font"]), ErrorKind::InvalidValue);
        assert_eq!(
            kind(&["--font", "f.hex", "--spacing", "wide", "x"]),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            kind(&["--font", "f.hex", "--spacing", "300", "x"]),
            ErrorKind::ValueValidation
        );
        assert_eq!(kind(&["--font", "f.hex", "--bold", "x"]), ErrorKind::UnknownArgument);
    }
}
