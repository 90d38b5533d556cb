#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Terminal rendering adapter for the arena layout editor.
//!
//! The backend redraws the scene as text after every frame and reads one
//! command per input line. Parsing lives in `input`, drawing in `draw`;
//! neither knows about the board world.

mod draw;
mod input;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use arena_layout_rendering::{FrameInput, Presentation, PrintSheet, RenderingBackend, Scene};

pub use self::draw::{draw_print_sheet, draw_scene, ColorMode};
pub use self::input::{parse_line, InputError, LineCommand};

const PROMPT: &str = "> ";

/// Rendering backend that talks to a terminal through line-buffered streams.
#[derive(Debug)]
pub struct TextBackend<R, W> {
    input: R,
    output: W,
    color: ColorMode,
}

impl<R, W> TextBackend<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a backend reading commands from `input` and drawing plain text to `output`.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: ColorMode::Plain,
        }
    }

    /// Selects how hazard tokens are coloured.
    #[must_use]
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    fn draw(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .context("failed to write frame")?;
        self.output.flush().context("failed to flush frame")
    }

    fn dispatch<F>(
        &mut self,
        frame: FrameInput,
        scene: &mut Scene,
        update_scene: &mut F,
    ) -> Result<()>
    where
        F: FnMut(FrameInput, &mut Scene),
    {
        if let Some(cell) = frame.activated_cell {
            if !scene.contains(cell) {
                let message = format!(
                    "cell ({}, {}) lies outside the {}x{} grid\n",
                    cell.column(),
                    cell.row(),
                    scene.columns,
                    scene.rows
                );
                return self.draw(&message);
            }
        }

        update_scene(frame, scene);
        self.draw(&draw_scene(scene, self.color))
    }
}

impl<R, W> RenderingBackend for TextBackend<R, W>
where
    R: BufRead,
    W: Write,
{
    fn run<F>(mut self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(FrameInput, &mut Scene),
    {
        let Presentation {
            window_title,
            mut scene,
        } = presentation;

        self.draw(&format!("{window_title}\ntype `help` for commands\n\n"))?;
        self.draw(&draw_scene(&scene, self.color))?;

        let mut line = String::new();
        loop {
            self.draw(PROMPT)?;
            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read command")?;
            if read == 0 {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match parse_line(&line) {
                Ok(LineCommand::Quit) => break,
                Ok(LineCommand::Help) => self.draw(&format!("{}\n", input::HELP))?,
                Ok(LineCommand::Print) => {
                    let sheet = PrintSheet::from_scene(&scene);
                    self.draw(&draw_print_sheet(&sheet, self.color))?;
                }
                Ok(LineCommand::Frame(frame)) => {
                    self.dispatch(frame, &mut scene, &mut update_scene)?;
                }
                Err(error) => self.draw(&format!("{error}; type `help` for commands\n"))?,
            }
        }

        Ok(())
    }
}
