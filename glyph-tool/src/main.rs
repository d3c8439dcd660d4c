use std::path::{Path, PathBuf};

use glyph_raster::{pen::SvgPen, trace, Outline, Palette, Rgb};
use glyph_tool::{build_cache, render_text, ErrorReport, GlyphSource, Layout, DEMO_TEXT};
use miette::miette;

#[derive(clap::Parser, Debug)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Render a block of text to a PNG file
    Render {
        /// SVG font, JSON glyph set or OpenType font
        font: PathBuf,
        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,
        /// Read the text to draw from a file
        #[arg(long, conflicts_with = "lines")]
        text_file: Option<PathBuf>,
        /// A line of text to draw (may be repeated)
        #[arg(long = "line")]
        lines: Vec<String>,
        /// Glyph height in pixels
        #[arg(long, default_value_t = 48)]
        size: u32,
        /// Canvas width in pixels
        #[arg(long, default_value_t = 1270)]
        width: u32,
        /// Canvas height in pixels
        #[arg(long, default_value_t = 720)]
        height: u32,
        /// Color for digits
        #[arg(long, default_value_t = Rgb::YELLOW)]
        digit_color: Rgb,
        /// Color for all other characters
        #[arg(long, default_value_t = Rgb::WHITE)]
        text_color: Rgb,
    },
    /// Print the resolved outline of a single glyph
    Outline {
        /// SVG font, JSON glyph set or OpenType font
        font: PathBuf,
        /// The character to inspect
        ch: char,
        /// Digits after the decimal point in the printed path
        #[arg(long)]
        precision: Option<usize>,
        /// Glyph height in pixels used to count flattened segments
        #[arg(long, default_value_t = 48)]
        size: u32,
    },
}

fn main() -> miette::Result<()> {
    env_logger::init();
    use clap::Parser as _;
    let args = Args::parse_from(wild::args());

    match args.command {
        Command::Render {
            font,
            output,
            text_file,
            lines,
            size,
            width,
            height,
            digit_color,
            text_color,
        } => {
            let source = load_source(&font)?;
            let text = match text_file {
                Some(path) => read_lines(&path)?,
                None if !lines.is_empty() => lines,
                None => DEMO_TEXT.iter().map(|line| line.to_string()).collect(),
            };
            let palette = Palette {
                digit: digit_color,
                text: text_color,
            };
            let cache = build_cache(&source, size, &palette);
            let layout = Layout {
                width,
                height,
                ..Default::default()
            };
            let image = render_text(&cache, &text, &layout);
            image
                .save(&output)
                .map_err(|e| miette!("error writing '{}': {e}", output.display()))?;
            log::info!("wrote {}", output.display());
        }
        Command::Outline {
            font,
            ch,
            precision,
            size,
        } => {
            let source = load_source(&font)?;
            let commands = source
                .glyph(ch)
                .ok_or_else(|| ErrorReport::message(format!("no glyph for {ch:?}")))?;
            let mut pen = match precision {
                Some(precision) => SvgPen::with_precision(precision),
                None => SvgPen::new(),
            };
            trace(commands, &mut pen);
            let scale = source.metrics().scale_for_height(size);
            let outline = Outline::build(commands, scale);
            println!("{pen}");
            println!("{} segments at {size}px", outline.len());
        }
    }
    Ok(())
}

fn load_source(path: &Path) -> Result<GlyphSource, ErrorReport> {
    GlyphSource::load(path).map_err(ErrorReport::from)
}

fn read_lines(path: &Path) -> miette::Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ErrorReport::message(format!("error reading '{}': {e}", path.display()))
    })?;
    Ok(text.lines().map(str::to_owned).collect())
}
