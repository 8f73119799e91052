//! Terminal playground for the sheet controller.
//!
//! Drag the panel with the left mouse button and let go to watch it settle.
//! Run with `--trace <DISTANCE>` to print a headless pull-and-release run.

mod app;
mod ui;

use std::io::{self, stderr, Write};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, widgets::Paragraph, Terminal};
use sheet_drag::config::{config_path, PlaygroundConfig};
use sheet_drag::{GestureSample, SheetController};
use tokio::time::MissedTickBehavior;

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::ui::{
    layout::AppLayout,
    sheet_widget::{RestGutter, SheetGeometry, SheetWidget},
    spinner::MotionIndicator,
    theme::Theme,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Draggable sheet playground")]
struct Cli {
    /// Content extent (overrides the config file).
    #[arg(long)]
    content: Option<f64>,

    /// Container extent (overrides the config file).
    #[arg(long)]
    container: Option<f64>,

    /// Rubber-band resistance constant, strictly between 0 and 1.
    #[arg(long)]
    resistance: Option<f64>,

    /// Frames per second while the sheet moves.
    #[arg(long)]
    fps: Option<u32>,

    /// Print the effective configuration and exit.
    #[arg(long = "print-config")]
    print_config: bool,

    /// Write the effective configuration to the config file and exit.
    #[arg(long = "write-config")]
    write_config: bool,

    /// Headless: drag by DISTANCE from rest, release, and print one offset
    /// per frame until the sheet settles.
    #[arg(long, value_name = "DISTANCE", allow_hyphen_values = true)]
    trace: Option<f64>,
}

impl Cli {
    fn apply(&self, config: &mut PlaygroundConfig) {
        if let Some(v) = self.content {
            config.sheet.content_extent = v;
        }
        if let Some(v) = self.container {
            config.sheet.container_extent = v;
        }
        if let Some(v) = self.resistance {
            config.sheet.resistance_constant = v;
        }
        if let Some(v) = self.fps {
            config.frame_rate = v.clamp(10, 240);
        }
    }
}

// ───────────────────────────────────────── trace ─────────────

/// Upper bound on frames printed by `--trace`.
const TRACE_FRAME_LIMIT: usize = 10_000;

fn run_trace(mut sheet: SheetController, distance: f64) -> Result<()> {
    let mut out = io::stdout().lock();

    sheet.ingest(GestureSample::began(0.0));
    sheet.ingest(GestureSample::active(distance));
    let mut frame = 0;
    writeln!(out, "{frame}\tdrag\t{:.3}", sheet.tick())?;

    sheet.ingest(GestureSample::ended(distance, 0.0));
    while sheet.needs_frame() && frame < TRACE_FRAME_LIMIT {
        frame += 1;
        let offset = sheet.tick();
        let phase = if sheet.is_animating() { "settle" } else { "rest" };
        writeln!(out, "{frame}\t{phase}\t{offset:.3}")?;
    }
    Ok(())
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only in debug builds / when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();
    let mut config = PlaygroundConfig::load();
    cli.apply(&mut config);

    if cli.print_config {
        print!("{}", config.serialise());
        return Ok(());
    }
    if cli.write_config {
        config.sheet.validate()?;
        config.save()?;
        println!("{}", config_path().display());
        return Ok(());
    }

    let sheet = SheetController::new(config.sheet)?;

    if let Some(distance) = cli.trace {
        return run_trace(sheet, distance);
    }

    let mut state = AppState::new(sheet, &config);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(
        stderr_handle,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    // ── async channels ────────────────────────────────────────
    let mut events = spawn_event_reader();
    let mut frames = tokio::time::interval(state.frame_interval());
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // ── event loop ────────────────────────────────────────────
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            state.terminal_area = area;
            let layout = AppLayout::from_area(area);
            let stage = layout.stage_area;

            let sheet = &state.sheet;
            let container = sheet.config().container_extent;
            let geometry =
                SheetGeometry::new(sheet.offset(), container, state.units_per_row, stage);
            let upper = SheetGeometry::new(sheet.bounds().upper(), container, state.units_per_row, stage);

            frame.render_widget(
                RestGutter {
                    rest_rows: (0, upper.top),
                    current_top: geometry.top,
                },
                layout.gutter_area,
            );
            frame.render_widget(
                SheetWidget {
                    geometry,
                    units_per_row: state.units_per_row,
                    dragging: sheet.is_dragging(),
                },
                stage,
            );
            frame.render_widget(
                MotionIndicator {
                    visible: sheet.is_animating(),
                    frame: state.motion_frames,
                },
                stage,
            );

            let hint = state.status_message.as_deref().unwrap_or("drag the panel, q: quit");
            let status_text = format!(
                "offset {:>8.2} | {:<9} | clock {} | {hint}",
                sheet.offset(),
                sheet.last_phase().label(),
                if sheet.is_animating() { "running" } else { "stopped" },
            );
            let status = Paragraph::new(status_text).style(Theme::status_bar_style());
            frame.render_widget(status, layout.status_area);
        })?;

        let wants_frame = state.sheet.needs_frame();

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(&mut state, k),
                    AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
                    AppEvent::FocusLost => handler::handle_focus_lost(&mut state),
                    AppEvent::Resize => {}
                }
            }

            _ = frames.tick(), if wants_frame => state.tick(),

            else => break,
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    Ok(())
}
