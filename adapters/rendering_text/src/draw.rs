//! Plain-text drawing of scenes and print sheets.
//!
//! Every cell is three characters wide. Floor tiles are drawn as brackets,
//! void cells as a dot, and the selected token is wrapped in angle brackets.
//! With [`ColorMode::Truecolor`] token symbols are painted in their hazard
//! palette using 24-bit ANSI escapes.

use std::fmt::Write as _;

use arena_layout_core::EditMode;
use arena_layout_rendering::{
    CellPresentation, CellSurface, Color, HazardStyle, ManifestEntry, PrintSheet, Scene,
    SidePanel,
};

/// Fraction by which dimmed tokens fade towards white.
const DIMMED_LIGHTEN: f32 = 0.5;

const RESET: &str = "\x1b[0m";

/// How token symbols are coloured in drawn output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Bare characters only.
    #[default]
    Plain,
    /// Symbols painted with 24-bit ANSI foreground and background escapes.
    Truecolor,
}

impl ColorMode {
    fn paint(self, symbol: char, style: &HazardStyle, dimmed: bool) -> String {
        match self {
            Self::Plain => symbol.to_string(),
            Self::Truecolor if dimmed => {
                let foreground = style.foreground.lighten(DIMMED_LIGHTEN);
                format!("{}{symbol}{RESET}", escape(38, foreground))
            }
            Self::Truecolor => format!(
                "{}{}{symbol}{RESET}",
                escape(38, style.foreground),
                escape(48, style.background)
            ),
        }
    }
}

fn escape(layer: u8, color: Color) -> String {
    let (red, green, blue) = color.to_rgb_u8();
    format!("\x1b[{layer};2;{red};{green};{blue}m")
}

/// Draws the interactive view: header, grid, legend and side panel.
#[must_use]
pub fn draw_scene(scene: &Scene, color: ColorMode) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} | {}", scene.title, scene.layout_title);
    let _ = writeln!(out, "{}", scene.status);
    out.push('\n');

    push_column_header(&mut out, scene.columns);
    for (row, cells) in scene
        .cells
        .chunks(row_width(scene.columns))
        .enumerate()
    {
        let _ = write!(out, "{row:>2} ");
        for cell in cells {
            out.push_str(&draw_cell(cell, scene.mode, color));
        }
        out.push('\n');
    }
    out.push_str(match scene.mode {
        EditMode::HazardPlacement => "[ ] floor tile   .  void   <X> selected hazard\n",
        EditMode::FloorEdit => "[ ] floor tile   +  void, click to add a tile\n",
    });
    out.push('\n');

    match &scene.side_panel {
        SidePanel::FloorEditor => {
            out.push_str("Floor Editor Active\n");
            out.push_str("Click grid cells to add or remove VEX IQ floor tiles.\n");
        }
        SidePanel::HazardDetails(details) => {
            let _ = writeln!(
                out,
                "[{}] {} ({})",
                color.paint(details.style.symbol, &details.style, false),
                details.name,
                details.style.glyph_name
            );
            let _ = writeln!(out, "    {}", details.description);
            let _ = writeln!(
                out,
                "    Height: {} | Difficulty: {}",
                details.height, details.difficulty
            );
            out.push_str("    click an empty tile to move it, or `deselect`\n");
        }
        SidePanel::HazardList(entries) => {
            out.push_str("Select a hazard on the map\n");
            for entry in entries {
                let _ = writeln!(
                    out,
                    "{:>4} [{}] {}",
                    entry.id.get(),
                    color.paint(entry.style.symbol, &entry.style, false),
                    entry.name
                );
            }
        }
    }

    out
}

/// Draws the printable layout sheet: full grid and hazard manifest.
#[must_use]
pub fn draw_print_sheet(sheet: &PrintSheet, color: ColorMode) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", sheet.title);
    let _ = writeln!(out, "{}", sheet.subtitle);
    let _ = writeln!(out, "{}", sheet.layout_title);
    out.push('\n');

    push_column_header(&mut out, sheet.columns);
    for (row, cells) in sheet.cells.chunks(row_width(sheet.columns)).enumerate() {
        let _ = write!(out, "{row:>2} ");
        for cell in cells {
            let symbol = cell
                .token
                .map(|style| color.paint(style.symbol, &style, false));
            let text = match (cell.surface, symbol) {
                (CellSurface::Floor, Some(symbol)) => format!("[{symbol}]"),
                (CellSurface::Floor, None) => "[ ]".to_owned(),
                (CellSurface::Void, Some(symbol)) => format!(" {symbol} "),
                (CellSurface::Void, None) => "   ".to_owned(),
            };
            out.push_str(&text);
        }
        out.push('\n');
    }
    out.push_str("\n[ ] floor tile\n\n");

    out.push_str("Hazard Manifest\n");
    for entry in &sheet.manifest {
        push_manifest_entry(&mut out, entry, color);
    }

    out
}

fn row_width(columns: u32) -> usize {
    usize::try_from(columns).unwrap_or(usize::MAX).max(1)
}

fn push_column_header(out: &mut String, columns: u32) {
    out.push_str("   ");
    for column in 0..columns {
        let _ = write!(out, "{column:^3}");
    }
    out.push('\n');
}

fn draw_cell(cell: &CellPresentation, mode: EditMode, color: ColorMode) -> String {
    let symbol = cell.token.map(|token| {
        let symbol = if token.dimmed {
            token.style.symbol.to_ascii_lowercase()
        } else {
            token.style.symbol
        };
        color.paint(symbol, &token.style, token.dimmed)
    });

    match (cell.surface, symbol) {
        (_, Some(symbol)) if cell.highlighted => format!("<{symbol}>"),
        (CellSurface::Floor, Some(symbol)) => format!("[{symbol}]"),
        (CellSurface::Floor, None) => "[ ]".to_owned(),
        (CellSurface::Void, Some(symbol)) => format!(" {symbol} "),
        (CellSurface::Void, None) if mode == EditMode::FloorEdit => " + ".to_owned(),
        (CellSurface::Void, None) => " . ".to_owned(),
    }
}

fn push_manifest_entry(out: &mut String, entry: &ManifestEntry, color: ColorMode) {
    let _ = writeln!(
        out,
        "[{}] {}",
        color.paint(entry.style.symbol, &entry.style, false),
        entry.name
    );
    let _ = writeln!(out, "    {}", entry.description);
    let _ = writeln!(
        out,
        "    Height: {}  Diff: {}",
        entry.height, entry.difficulty
    );
}
