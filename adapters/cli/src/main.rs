#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the arena layout editor.

mod layout_transfer;

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use arena_layout_core::{Command, EditMode, Event};
use arena_layout_rendering::{FrameInput, Presentation, PrintSheet, RenderingBackend, Scene};
use arena_layout_rendering_text::{draw_print_sheet, ColorMode, TextBackend};
use arena_layout_system_bootstrap::Bootstrap;
use arena_layout_system_editor::{Editor, EditorInput};
use arena_layout_world::{self as world, query, World};
use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;

use crate::layout_transfer::ArenaLayoutSnapshot;

/// Lay out floor tiles and hazards for the battlebot arena.
#[derive(Debug, Parser)]
#[command(name = "arena-layout", version)]
struct CliArgs {
    /// Edit mode active when the editor opens.
    #[arg(long, value_enum, default_value_t = ModeArg::Hazards)]
    mode: ModeArg,
    /// Write the printable layout sheet to stdout and exit.
    #[arg(long, conflicts_with = "export")]
    print: bool,
    /// Write the single-line layout transfer string to stdout and exit.
    #[arg(long)]
    export: bool,
    /// When to paint hazard tokens in their palette colors.
    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    color: ColorArg,
    /// Log every board transition to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Move hazards between floor tiles.
    Hazards,
    /// Add and remove floor tiles.
    Floor,
}

impl From<ModeArg> for EditMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Hazards => Self::HazardPlacement,
            ModeArg::Floor => Self::FloorEdit,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ColorArg {
    /// Color only when stdout is a terminal.
    Auto,
    /// Always emit color escapes.
    Always,
    /// Never emit color escapes.
    Never,
}

impl ColorArg {
    fn resolve(self, terminal: bool) -> ColorMode {
        match self {
            Self::Always => ColorMode::Truecolor,
            Self::Auto if terminal => ColorMode::Truecolor,
            Self::Auto | Self::Never => ColorMode::Plain,
        }
    }
}

/// Entry point for the arena layout command-line interface.
fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let stdout = io::stdout();
    let color = args.color.resolve(stdout.is_terminal());
    run(&args, color, io::stdin().lock(), stdout.lock())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// Seeds the reference board and serves the action selected by `args`.
fn run<R, W>(args: &CliArgs, color: ColorMode, input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session::open(args.mode.into())?;

    if args.export {
        let encoded = ArenaLayoutSnapshot::capture(&session.board)
            .encode()
            .context("failed to encode the arena layout")?;
        return writeln!(output, "{encoded}").context("failed to write the layout string");
    }

    let scene = session.scene()?;
    if args.print {
        let sheet = draw_print_sheet(&PrintSheet::from_scene(&scene), color);
        return output
            .write_all(sheet.as_bytes())
            .context("failed to write the print sheet");
    }

    let banner = session.banner;
    TextBackend::new(input, output)
        .with_color(color)
        .run(Presentation::new(banner, scene), move |frame, scene| {
            session.step(frame);
            match session.scene() {
                Ok(next) => *scene = next,
                Err(error) => tracing::error!(error = %error, "keeping previous scene"),
            }
        })
}

/// Editor session that owns the board and routes frames through the editor.
#[derive(Debug)]
struct Session {
    banner: &'static str,
    board: World,
    editor: Editor,
    events: Vec<Event>,
    commands: Vec<Command>,
}

impl Session {
    /// Seeds the reference layout and enters `mode`.
    ///
    /// The events of the initial mode switch are kept so the editor learns
    /// the starting mode on the first frame.
    fn open(mode: EditMode) -> Result<Self> {
        let bootstrap = Bootstrap;
        let layout = bootstrap
            .reference_layout()
            .context("failed to load the reference arena layout")?;
        let mut board = bootstrap.seed_world(layout);

        let mut events = Vec::new();
        world::apply(&mut board, Command::SetEditMode { mode }, &mut events);

        Ok(Self {
            banner: bootstrap.welcome_banner(),
            board,
            editor: Editor::new(),
            events,
            commands: Vec::new(),
        })
    }

    /// Routes one frame of input into board commands and applies them.
    fn step(&mut self, frame: FrameInput) {
        self.commands.clear();
        self.editor
            .handle(&self.events, editor_input(frame), &mut self.commands);
        self.events.clear();
        for command in self.commands.iter().cloned() {
            world::apply(&mut self.board, command, &mut self.events);
        }
        tracing::debug!(
            commands = self.commands.len(),
            events = self.events.len(),
            "frame applied"
        );
    }

    fn scene(&self) -> Result<Scene> {
        Scene::from_board(self.banner, &query::board_view(&self.board))
            .context("failed to build the scene")
    }
}

/// Bridges the rendering adapter's frame input into the editor system's input.
fn editor_input(input: FrameInput) -> EditorInput {
    EditorInput::new(
        input.mode_request,
        input.activated_cell,
        input.picked_hazard,
        input.deselect,
    )
}
