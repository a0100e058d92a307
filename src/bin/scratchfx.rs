use std::{fs, path::PathBuf, time::Instant};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use minifb::{Key, MouseMode, Window, WindowOptions};

use scratchfx::{
    BoundRect, CardConfig, LabelStyle, Playback, Point, PointerEvent, PreparedFont,
    PreparedTexture, ScratchCard, ScratchResult, Surface, SurfaceSize, decode_texture, load_font,
    over, paint_cover,
};

#[derive(Parser, Debug)]
#[command(name = "scratchfx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Paint the scratch cover for a texture and write it as a PNG.
    Cover(CoverArgs),
    /// Interactive preview: move the mouse over the window to scratch the
    /// cover off an underlying image (standing in for the video).
    Scratch(ScratchArgs),
}

#[derive(Parser, Debug)]
struct CoverArgs {
    /// Cover texture image path.
    #[arg(long)]
    texture: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Cover width in pixels.
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Cover height in pixels.
    #[arg(long, default_value_t = 400)]
    height: u32,

    /// TTF/OTF font for the label; omitting it skips the label.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Label text.
    #[arg(long)]
    label: Option<String>,
}

#[derive(Parser, Debug)]
struct ScratchArgs {
    /// Cover texture image path.
    #[arg(long)]
    texture: PathBuf,

    /// Underlying image revealed by scratching.
    #[arg(long)]
    under: PathBuf,

    /// TTF/OTF font for the label; omitting it skips the label.
    #[arg(long)]
    font: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Cover(args) => cmd_cover(args),
        Command::Scratch(args) => cmd_scratch(args),
    }
}

fn read_texture(path: &PathBuf) -> anyhow::Result<PreparedTexture> {
    let bytes = fs::read(path).with_context(|| format!("read texture '{}'", path.display()))?;
    Ok(decode_texture(&bytes)?)
}

fn read_font(path: Option<&PathBuf>) -> anyhow::Result<Option<PreparedFont>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let bytes = fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
    Ok(Some(load_font(&bytes)?))
}

fn cmd_cover(args: CoverArgs) -> anyhow::Result<()> {
    let texture = read_texture(&args.texture)?;
    let font = read_font(args.font.as_ref())?;

    let mut label = LabelStyle::default();
    if let Some(text) = args.label {
        label.text = text;
    }

    let mut surface = Surface::new(SurfaceSize::new(args.width, args.height)?)?;
    paint_cover(&mut surface, &texture, &label, font.as_ref())?;

    if let Some(parent) = args.out.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        surface.data(),
        surface.width(),
        surface.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

/// Demo playback: the real media element lives in a host page, so the demo
/// just reports that playback would start.
struct StubPlayback;

impl Playback for StubPlayback {
    fn play(&mut self) -> ScratchResult<()> {
        eprintln!("revealed: underlying video would start playing now");
        Ok(())
    }
}

fn file_name_of(path: &PathBuf) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "asset".to_owned())
}

fn cmd_scratch(args: ScratchArgs) -> anyhow::Result<()> {
    let under = read_texture(&args.under)?;
    let texture = read_texture(&args.texture)?;
    let font = read_font(args.font.as_ref())?;

    let size = SurfaceSize::new(under.width, under.height)?;
    let config = CardConfig::new(file_name_of(&args.under), file_name_of(&args.texture));
    let mut card = ScratchCard::mount(config, size, Box::new(StubPlayback))?;
    card.apply_texture(texture, font)?;

    let (w, h) = (size.width as usize, size.height as usize);
    let mut window = Window::new("scratchfx: scratch me", w, h, WindowOptions::default())
        .map_err(|e| anyhow::anyhow!("create window: {e}"))?;
    window.set_target_fps(60);

    // The window client area is the element: its bounding rect starts at
    // the origin and window-relative mouse coordinates are already client
    // coordinates.
    let rect = BoundRect::new(Point::ZERO, w as f64, h as f64)?;
    let mut frame = vec![0u32; w * h];

    while window.is_open() && !window.is_key_down(Key::Escape) {
        // Scratching happens on plain pointer movement, no button
        // required.
        if let Some((mx, my)) = window.get_mouse_pos(MouseMode::Discard) {
            card.on_pointer_move(
                PointerEvent::Mouse {
                    client: Point::new(f64::from(mx), f64::from(my)),
                },
                rect,
            );
        }

        let opacity = card.overlay_opacity(Instant::now()) as f32;
        let overlay = card.surface().data();
        for (i, (base, top)) in under
            .rgba8_premul
            .chunks_exact(4)
            .zip(overlay.chunks_exact(4))
            .enumerate()
        {
            let px = over(
                [base[0], base[1], base[2], base[3]],
                [top[0], top[1], top[2], top[3]],
                opacity,
            );
            frame[i] =
                (u32::from(px[0]) << 16) | (u32::from(px[1]) << 8) | u32::from(px[2]);
        }

        window
            .update_with_buffer(&frame, w, h)
            .map_err(|e| anyhow::anyhow!("present frame: {e}"))?;
    }

    card.unmount();
    Ok(())
}
