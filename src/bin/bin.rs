use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use bitmap_editor::{render_glyph, Config, PixelValue, Session, Zoom};
use clap::{ArgAction, Parser, Subcommand};
use log::info;

#[derive(Parser, Debug)]
#[command(version, about = "Edit raw binary data as a monochrome bitmap", long_about = None)]
struct Args {
    /// TOML file with width, glyph layout and preview settings
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Row width in pixels, overrides the config file
    #[arg(short, long, global = true)]
    width: Option<usize>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a raw .bin file into an image (TIFF unless the output says otherwise)
    Decode {
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Convert an image back into the raw format
    Encode {
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Set pixels in a raw file
    Edit {
        input: PathBuf,
        /// Pixel to paint white, as X,Y (repeatable)
        #[arg(long, value_parser = parse_point)]
        white: Vec<(usize, usize)>,
        /// Pixel to paint black, as X,Y (repeatable)
        #[arg(long, value_parser = parse_point)]
        black: Vec<(usize, usize)>,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print pixel intensities as a table
    Table {
        input: PathBuf,
        #[arg(short, long, default_value_t = 16)]
        columns: usize,
    },
    /// Render a zoomed preview, optionally with grid lines
    Preview {
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        /// Zoom in percent
        #[arg(long)]
        zoom: Option<f32>,
        #[arg(long)]
        grid: bool,
        /// Grid line colour as R,G,B
        #[arg(long)]
        grid_color: Option<String>,
    },
    /// Render one glyph of a fixed size glyph table
    Glyph {
        table: PathBuf,
        /// Hex code such as 8041
        code: String,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long)]
        scale: Option<u32>,
    },
}

fn parse_point(s: &str) -> std::result::Result<(usize, usize), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x = x.trim().parse::<usize>().map_err(|e| format!("bad x '{}': {}", x, e))?;
    let y = y.trim().parse::<usize>().map_err(|e| format!("bad y '{}': {}", y, e))?;
    Ok((x, y))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    config.validate()?;
    Ok(config)
}

fn open(session: &mut Session, input: &Path) -> Result<()> {
    session
        .open(input)
        .with_context(|| format!("failed to open {}", input.display()))?;
    Ok(())
}

fn print_table(rows: &[Vec<Option<u8>>]) {
    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(value) => format!("{:>3}", value),
                None => "   ".to_string(),
            })
            .collect();
        println!("{}", cells.join(" ").trim_end());
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = load_config(&args)?;

    match args.command {
        Command::Decode { input, output } => {
            let mut session = Session::new(config);
            open(&mut session, &input)?;
            let output = output.unwrap_or_else(|| input.with_extension("tiff"));
            session.export_image(&output)?;
        }
        Command::Encode { input, output } => {
            let mut session = Session::new(config);
            session
                .import_image(&input)
                .with_context(|| format!("failed to import {}", input.display()))?;
            session.save_bin(&output)?;
        }
        Command::Edit {
            input,
            white,
            black,
            output,
        } => {
            if white.is_empty() && black.is_empty() {
                bail!("nothing to edit, pass --white or --black");
            }
            let mut session = Session::new(config);
            open(&mut session, &input)?;
            for (x, y) in white {
                session.set_pixel(x, y, PixelValue::White)?;
            }
            for (x, y) in black {
                session.set_pixel(x, y, PixelValue::Black)?;
            }
            session.save_bin(&output)?;
        }
        Command::Table { input, columns } => {
            let mut session = Session::new(config);
            open(&mut session, &input)?;
            print_table(&session.pixel_table(columns)?);
        }
        Command::Preview {
            input,
            output,
            zoom,
            grid,
            grid_color,
        } => {
            config.preview.grid |= grid;
            if let Some(color) = grid_color {
                config.preview.grid_color = color;
            }
            let mut session = Session::new(config);
            open(&mut session, &input)?;
            if let Some(percent) = zoom {
                session.set_zoom(Zoom::from_percent(percent));
            }
            session.preview()?.save(&output)?;
            info!("wrote preview to {}", output.display());
        }
        Command::Glyph {
            table,
            code,
            output,
            scale,
        } => {
            let scale = scale.unwrap_or(config.preview.glyph_scale);
            let mut session = Session::new(config);
            let glyph = session
                .glyph(&code, &table)
                .with_context(|| {
                    format!("failed to read glyph {} from {}", code, table.display())
                })?;
            render_glyph(glyph, scale).save(&output)?;
            info!("wrote glyph {} to {}", code, output.display());
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(args)
}
