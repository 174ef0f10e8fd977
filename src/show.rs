// Vitrine STORY-008: Backdrop driver loop
//
// Drives one animation engine against the terminal: tick the stepper,
// rasterize, repaint, once per frame, forever (or until Ctrl-C / --for).
// The drifting scene re-queries the terminal extent every frame and
// rebuilds its particle set when it changes.

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::io::{self, Write};
use std::time::{Duration, Instant};

use vitrine_ui::animation::{AnimationEngine, BurstField, DriftField, TypingBanner};
use vitrine_ui::render::Surface;
use vitrine_utils::Profile;

/// Scene units covered by one terminal cell. Cells are roughly twice as
/// tall as they are wide, so the two constants keep circles circular.
const CELL_W: f32 = 8.0;
const CELL_H: f32 = 16.0;

/// The burst badge renders on a fixed grid, like its fixed 200x200 scene
const BURST_COLS: usize = 40;
const BURST_ROWS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scene {
    /// Full-screen drifting particle web
    Drift,
    /// Fixed-size radial sparkle badge
    Burst,
    /// Typing banner cycling the portfolio roles
    Banner,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Which scene to run
    #[clap(long, value_enum, default_value = "drift")]
    scene: Scene,

    /// Frames per second
    #[clap(long, default_value_t = 30)]
    fps: u32,

    /// Seed the particle RNG for reproducible runs
    #[clap(long)]
    seed: Option<u64>,

    /// Stop after this long (e.g. "30s", "2m"); default runs until Ctrl-C
    #[clap(long = "for", value_parser = humantime::parse_duration)]
    duration: Option<Duration>,

    /// Run the burst scene hovered (1.5x particle speed)
    #[clap(long)]
    hover: bool,

    /// Terminal columns to draw (defaults to $COLUMNS, then 80)
    #[clap(long)]
    cols: Option<usize>,

    /// Terminal rows to draw (defaults to $LINES, then 24)
    #[clap(long)]
    rows: Option<usize>,
}

pub async fn run(args: ShowArgs) -> Result<()> {
    match args.scene {
        Scene::Drift => run_drift(args).await,
        Scene::Burst => run_burst(args).await,
        Scene::Banner => run_banner(args).await,
    }
}

async fn run_drift(args: ShowArgs) -> Result<()> {
    let (cols, rows) = grid_extent(&args);
    let mut field =
        DriftField::new(cols as f32 * CELL_W, rows as f32 * CELL_H).with_fps(args.fps);
    if let Some(seed) = args.seed {
        field = field.with_seed(seed);
    }

    let mut surface = Surface::new(cols, rows);
    drive(&mut field, &mut surface, &args, true).await
}

async fn run_burst(args: ShowArgs) -> Result<()> {
    let mut field = BurstField::new().with_fps(args.fps);
    if let Some(seed) = args.seed {
        field = field.with_seed(seed);
    }
    field.set_hover(args.hover);

    let mut surface = Surface::new(BURST_COLS, BURST_ROWS);
    drive(&mut field, &mut surface, &args, false).await
}

/// The shared frame loop: stepper, then renderer, then yield to the host
/// scheduler until the next frame is due.
async fn drive<E>(
    engine: &mut E,
    surface: &mut Surface,
    args: &ShowArgs,
    track_resize: bool,
) -> Result<()>
where
    E: AnimationEngine + Resizable,
{
    let mut ticker = tokio::time::interval(engine.frame_duration());
    let deadline = args.duration.map(|d| Instant::now() + d);
    let mut out = io::stdout();

    enter_screen(&mut out)?;
    let result = loop {
        tokio::select! {
            _ = ticker.tick() => {
                if track_resize {
                    let (cols, rows) = grid_extent(args);
                    if cols != surface.cols() || rows != surface.rows() {
                        surface.resize(cols, rows);
                        engine.rescale(cols as f32 * CELL_W, rows as f32 * CELL_H);
                    }
                }

                match engine.next_frame() {
                    Some(frame) => {
                        surface.paint(&frame);
                        if let Err(err) = repaint(&mut out, surface) {
                            break Err(err.into());
                        }
                    }
                    None => break Ok(()),
                }

                if deadline.map_or(false, |d| Instant::now() >= d) {
                    break Ok(());
                }
            }
            _ = tokio::signal::ctrl_c() => {
                log::info!("interrupted, leaving the scene");
                break Ok(());
            }
        }
    };
    leave_screen(&mut out)?;
    result
}

async fn run_banner(args: ShowArgs) -> Result<()> {
    let profile = Profile::builtin();
    let mut banner = TypingBanner::new(profile.roles.clone());
    let deadline = args.duration.map(|d| Instant::now() + d);
    let mut out = io::stdout();

    loop {
        tokio::select! {
            _ = tokio::time::sleep(banner.delay()) => {
                banner.tick();
                write!(out, "\r\x1b[2K  {}▌", banner.current())?;
                out.flush()?;
                if deadline.map_or(false, |d| Instant::now() >= d) {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Engines that can be told their scene was resized
pub trait Resizable {
    fn rescale(&mut self, width: f32, height: f32);
}

impl Resizable for DriftField {
    fn rescale(&mut self, width: f32, height: f32) {
        self.resize(width, height);
    }
}

impl Resizable for BurstField {
    // The badge scene is fixed-size; resize is a no-op
    fn rescale(&mut self, _width: f32, _height: f32) {}
}

/// Current drawing grid: explicit flags, then the environment, then 80x24.
/// Re-queried every frame so a changed terminal propagates.
fn grid_extent(args: &ShowArgs) -> (usize, usize) {
    let cols = args.cols.or_else(|| env_dim("COLUMNS")).unwrap_or(80).max(8);
    let rows = args
        .rows
        .or_else(|| env_dim("LINES"))
        .unwrap_or(24)
        .saturating_sub(1)
        .max(4);
    (cols, rows)
}

fn env_dim(name: &str) -> Option<usize> {
    std::env::var(name).ok()?.trim().parse().ok()
}

fn enter_screen(out: &mut impl Write) -> io::Result<()> {
    // Alternate screen, hidden cursor
    write!(out, "\x1b[?1049h\x1b[?25l")?;
    out.flush()
}

fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    write!(out, "\x1b[?25h\x1b[?1049l")?;
    out.flush()
}

fn repaint(out: &mut impl Write, surface: &Surface) -> io::Result<()> {
    // Home the cursor and overwrite in place; no scrollback spam
    write!(out, "\x1b[H{}", surface.to_ansi())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(cols: Option<usize>, rows: Option<usize>) -> ShowArgs {
        ShowArgs {
            scene: Scene::Drift,
            fps: 30,
            seed: None,
            duration: None,
            hover: false,
            cols,
            rows,
        }
    }

    #[test]
    fn test_grid_extent_prefers_flags() {
        let (cols, rows) = grid_extent(&args_with(Some(120), Some(40)));
        assert_eq!(cols, 120);
        assert_eq!(rows, 39); // one row reserved for the shell prompt
    }

    #[test]
    fn test_grid_extent_has_floors() {
        let (cols, rows) = grid_extent(&args_with(Some(1), Some(1)));
        assert_eq!(cols, 8);
        assert_eq!(rows, 4);
    }

    #[test]
    fn test_burst_rescale_is_noop() {
        let mut field = BurstField::new().with_seed(1);
        let before: Vec<_> = field.particles().to_vec();
        field.rescale(999.0, 999.0);
        assert_eq!(before, field.particles().to_vec());
    }
}
