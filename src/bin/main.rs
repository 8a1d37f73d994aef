//! Host-side display sink: renders one line of text with a Unifont `.hex`
//! table and prints the canvas to the terminal.

use std::{fs, process::ExitCode};

use clap::Parser;
use env_logger::Env;
use hexline_core::{
    DecodePolicy, HexGlyphTable, LineRenderer, RenderConfig, pipeline::RenderStatus,
};
use line_canvas::format;
use log::{error, info, warn};

use args::CliArgs;

#[path = "main/args.rs"]
mod args;
#[path = "main/preview.rs"]
mod preview;

const LOG_ENV: &str = "HEXLINE_LOG";
const PREVIEW_MARGIN_PX: usize = 8;

const EXIT_IO: u8 = 1;
const EXIT_HALTED: u8 = 3;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::new().filter_or(LOG_ENV, "info")).init();

    // Usage errors exit with code 2 from clap.
    let args = CliArgs::parse();

    let font = match fs::read(&args.font) {
        Ok(font) => font,
        Err(err) => {
            error!("font: read failed path={} err={}", args.font.display(), err);
            return ExitCode::from(EXIT_IO);
        }
    };
    info!(
        "font: loaded path={} bytes={}",
        args.font.display(),
        font.len()
    );

    let decode = if args.strict {
        DecodePolicy::strict()
    } else {
        DecodePolicy::default()
    };
    let config = RenderConfig::default()
        .with_glyph_spacing(args.spacing)
        .with_decode_policy(decode);

    let table = HexGlyphTable::new(&font);
    let output = LineRenderer::new(&table, config).render(&args.text_bytes());

    print!(
        "{}",
        preview::ascii(&output.canvas, output.cursor + PREVIEW_MARGIN_PX)
    );

    if let Some(path) = &args.raw {
        let mut frame = vec![0u8; format::FRAME_BYTES];
        let written = output.canvas.write_argb8888(&mut frame).unwrap_or(0);
        if let Err(err) = fs::write(path, &frame[..written]) {
            error!("sink: raw dump failed path={} err={}", path.display(), err);
            return ExitCode::from(EXIT_IO);
        }
        info!("sink: wrote argb8888 path={} bytes={}", path.display(), written);
    }

    match output.status {
        RenderStatus::Completed => {
            info!("render: {} glyphs, {} px", output.glyphs, output.cursor);
            ExitCode::SUCCESS
        }
        RenderStatus::Halted(halt) => {
            warn!(
                "render: partial line glyphs={} byte={} err={}",
                output.glyphs, halt.byte_offset, halt.error
            );
            ExitCode::from(EXIT_HALTED)
        }
    }
}
