#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for arena layout adapters.

use anyhow::Result as AnyResult;
use arena_layout_core::{
    BoardView, CellCoord, EditMode, Hazard, HazardGlyph, HazardId, HazardPalette,
};
use std::{error::Error, fmt};

/// Title printed at the top of the print sheet.
pub const PRINT_TITLE: &str = "Battlebot Arena Layout";

/// Subtitle printed below the print sheet title.
pub const PRINT_SUBTITLE: &str = "Hazard & Floor Configuration Plan";

/// Opaque RGB color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
}

impl Color {
    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
        }
    }

    /// Returns a new color lightened towards white by the provided amount.
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);

        Self {
            red: lighten_channel(self.red, amount),
            green: lighten_channel(self.green, amount),
            blue: lighten_channel(self.blue, amount),
        }
    }

    /// Converts the color into byte RGB channels.
    #[must_use]
    pub fn to_rgb_u8(self) -> (u8, u8, u8) {
        (
            channel_to_u8(self.red),
            channel_to_u8(self.green),
            channel_to_u8(self.blue),
        )
    }
}

fn lighten_channel(channel: f32, amount: f32) -> f32 {
    channel + (1.0 - channel) * amount
}

fn channel_to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Background tint applied to hazard tokens relative to their foreground.
const TOKEN_BACKGROUND_LIGHTEN: f32 = 0.8;

/// Concrete drawable resolved from a hazard's glyph and palette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HazardStyle {
    /// Single character used by text renderers.
    pub symbol: char,
    /// Short name of the icon.
    pub glyph_name: &'static str,
    /// Icon color.
    pub foreground: Color,
    /// Token fill color.
    pub background: Color,
}

/// Resolves the tagged glyph and palette of a hazard into a drawable style.
#[must_use]
pub fn hazard_style(glyph: HazardGlyph, palette: HazardPalette) -> HazardStyle {
    let (symbol, glyph_name) = match glyph {
        HazardGlyph::ZigZag => ('Z', "zig-zag"),
        HazardGlyph::StopSign => ('X', "stop sign"),
        HazardGlyph::Cave => ('C', "cave"),
        HazardGlyph::Tower => ('T', "tower"),
        HazardGlyph::Spinner => ('S', "spinner"),
        HazardGlyph::Bars => ('#', "bars"),
        HazardGlyph::Anchor => ('A', "anchor"),
        HazardGlyph::Stack => ('L', "stack"),
        HazardGlyph::Step => ('^', "step"),
    };
    let foreground = match palette {
        HazardPalette::Yellow => Color::from_rgb_u8(234, 179, 8),
        HazardPalette::Red => Color::from_rgb_u8(239, 68, 68),
        HazardPalette::Slate => Color::from_rgb_u8(51, 65, 85),
        HazardPalette::Purple => Color::from_rgb_u8(147, 51, 234),
        HazardPalette::Blue => Color::from_rgb_u8(59, 130, 246),
        HazardPalette::Orange => Color::from_rgb_u8(234, 88, 12),
        HazardPalette::Crimson => Color::from_rgb_u8(185, 28, 28),
        HazardPalette::Pink => Color::from_rgb_u8(236, 72, 153),
        HazardPalette::Green => Color::from_rgb_u8(22, 163, 74),
        HazardPalette::Indigo => Color::from_rgb_u8(99, 102, 241),
    };

    HazardStyle {
        symbol,
        glyph_name,
        foreground,
        background: foreground.lighten(TOKEN_BACKGROUND_LIGHTEN),
    }
}

fn style_of(hazard: &Hazard) -> HazardStyle {
    hazard_style(hazard.glyph, hazard.palette)
}

/// Ground beneath a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellSurface {
    /// A floor tile is present.
    Floor,
    /// No floor tile.
    Void,
}

/// Hazard token drawn inside a cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TokenPresentation {
    /// Hazard represented by the token.
    pub hazard: HazardId,
    /// Drawable style of the token.
    pub style: HazardStyle,
    /// Whether the token is the current selection.
    pub selected: bool,
    /// Whether the token is faded because the floor editor is active.
    pub dimmed: bool,
}

/// Render-ready description of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellPresentation {
    /// Cell described by the presentation.
    pub cell: CellCoord,
    /// Ground beneath the cell.
    pub surface: CellSurface,
    /// Token occupying the cell, if any.
    pub token: Option<TokenPresentation>,
    /// Whether the cell carries the selection ring.
    pub highlighted: bool,
}

/// Full descriptive record of the selected hazard.
#[derive(Clone, Debug, PartialEq)]
pub struct HazardDetails {
    /// Identifier of the hazard.
    pub id: HazardId,
    /// Display name.
    pub name: String,
    /// Free text description.
    pub description: String,
    /// Height classification.
    pub height: String,
    /// Difficulty label.
    pub difficulty: &'static str,
    /// Drawable style.
    pub style: HazardStyle,
}

/// Entry of the browsable hazard list.
#[derive(Clone, Debug, PartialEq)]
pub struct HazardListEntry {
    /// Identifier used when picking the entry.
    pub id: HazardId,
    /// Display name.
    pub name: String,
    /// Drawable style.
    pub style: HazardStyle,
}

/// Content of the panel shown beside the grid.
#[derive(Clone, Debug, PartialEq)]
pub enum SidePanel {
    /// The floor editor is active; the panel shows usage hints.
    FloorEditor,
    /// A hazard is selected; the panel shows its record.
    HazardDetails(HazardDetails),
    /// Nothing is selected; the panel lists every hazard.
    HazardList(Vec<HazardListEntry>),
}

/// Hazard entry printed in the manifest.
#[derive(Clone, Debug, PartialEq)]
pub struct ManifestEntry {
    /// Identifier of the hazard.
    pub id: HazardId,
    /// Display name.
    pub name: String,
    /// Free text description.
    pub description: String,
    /// Height classification.
    pub height: String,
    /// Difficulty label.
    pub difficulty: &'static str,
    /// Drawable style.
    pub style: HazardStyle,
}

impl ManifestEntry {
    fn from_hazard(hazard: &Hazard) -> Self {
        Self {
            id: hazard.id,
            name: hazard.name.clone(),
            description: hazard.description.clone(),
            height: hazard.height.clone(),
            difficulty: hazard.difficulty.label(),
            style: style_of(hazard),
        }
    }
}

/// Scene description combining the grid, side panel and hazard manifest.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Application header.
    pub title: String,
    /// Title of the loaded layout.
    pub layout_title: String,
    /// Status line naming the active mode.
    pub status: String,
    /// Active edit mode.
    pub mode: EditMode,
    /// Number of grid columns.
    pub columns: u32,
    /// Number of grid rows.
    pub rows: u32,
    /// One presentation per grid cell in row-major order.
    pub cells: Vec<CellPresentation>,
    /// Panel shown beside the grid.
    pub side_panel: SidePanel,
    /// Every hazard in display order.
    pub manifest: Vec<ManifestEntry>,
}

impl Scene {
    /// Builds a scene from a board snapshot.
    pub fn from_board<T>(title: T, board: &BoardView) -> Result<Self, RenderingError>
    where
        T: Into<String>,
    {
        let expected = board.grid.cell_count();
        if board.cells.len() != expected {
            return Err(RenderingError::MalformedBoard {
                expected,
                actual: board.cells.len(),
            });
        }

        let placing = board.mode == EditMode::HazardPlacement;
        let cells = board
            .cells
            .iter()
            .map(|view| {
                let token = view
                    .hazard
                    .and_then(|id| board.hazard(id))
                    .map(|hazard| TokenPresentation {
                        hazard: hazard.id,
                        style: style_of(hazard),
                        selected: view.selected,
                        dimmed: !placing,
                    });
                CellPresentation {
                    cell: view.cell,
                    surface: if view.is_tile {
                        CellSurface::Floor
                    } else {
                        CellSurface::Void
                    },
                    token,
                    highlighted: view.selected && placing,
                }
            })
            .collect();

        let side_panel = if !placing {
            SidePanel::FloorEditor
        } else if let Some(hazard) = board.selected_hazard() {
            SidePanel::HazardDetails(HazardDetails {
                id: hazard.id,
                name: hazard.name.clone(),
                description: hazard.description.clone(),
                height: hazard.height.clone(),
                difficulty: hazard.difficulty.label(),
                style: style_of(hazard),
            })
        } else {
            SidePanel::HazardList(
                board
                    .hazards
                    .iter()
                    .map(|hazard| HazardListEntry {
                        id: hazard.id,
                        name: hazard.name.clone(),
                        style: style_of(hazard),
                    })
                    .collect(),
            )
        };

        Ok(Self {
            title: title.into(),
            layout_title: board.title.clone(),
            status: format!("Mode: {}", board.mode.label()),
            mode: board.mode,
            columns: board.grid.columns(),
            rows: board.grid.rows(),
            cells,
            side_panel,
            manifest: board.hazards.iter().map(ManifestEntry::from_hazard).collect(),
        })
    }

    /// Reports whether the cell lies within the scene grid.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column() < self.columns && cell.row() < self.rows
    }

    /// Presentation of a single cell, if it lies within the grid.
    #[must_use]
    pub fn cell(&self, cell: CellCoord) -> Option<&CellPresentation> {
        if !self.contains(cell) {
            return None;
        }
        let row = usize::try_from(cell.row()).ok()?;
        let column = usize::try_from(cell.column()).ok()?;
        let width = usize::try_from(self.columns).ok()?;
        self.cells.get(row * width + column)
    }
}

/// Cell printed on the layout sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrintCell {
    /// Cell described by the entry.
    pub cell: CellCoord,
    /// Ground beneath the cell.
    pub surface: CellSurface,
    /// Style of the token drawn in the cell, if any.
    pub token: Option<HazardStyle>,
}

/// Read-only print view of the board: the full grid and hazard manifest.
#[derive(Clone, Debug, PartialEq)]
pub struct PrintSheet {
    /// Sheet heading.
    pub title: &'static str,
    /// Sheet subheading.
    pub subtitle: &'static str,
    /// Title of the printed layout.
    pub layout_title: String,
    /// Number of grid columns.
    pub columns: u32,
    /// Number of grid rows.
    pub rows: u32,
    /// Printed cells in row-major order.
    pub cells: Vec<PrintCell>,
    /// Hazard manifest in display order.
    pub manifest: Vec<ManifestEntry>,
}

impl PrintSheet {
    /// Derives the print view from the current scene, dropping transient UI state.
    #[must_use]
    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            title: PRINT_TITLE,
            subtitle: PRINT_SUBTITLE,
            layout_title: scene.layout_title.clone(),
            columns: scene.columns,
            rows: scene.rows,
            cells: scene
                .cells
                .iter()
                .map(|cell| PrintCell {
                    cell: cell.cell,
                    surface: cell.surface,
                    token: cell.token.map(|token| token.style),
                })
                .collect(),
            manifest: scene.manifest.clone(),
        }
    }
}

/// Input snapshot gathered by adapters before updating the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Mode button pressed on this frame.
    pub mode_request: Option<EditMode>,
    /// Grid cell activated on this frame, already validated against the scene grid.
    pub activated_cell: Option<CellCoord>,
    /// Hazard picked from the side-panel list on this frame.
    pub picked_hazard: Option<HazardId>,
    /// Whether the side-panel deselect button was pressed on this frame.
    pub deselect: bool,
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window or terminal banner.
    pub window_title: String,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(window_title: T, scene: Scene) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            scene,
        }
    }
}

/// Rendering backend capable of presenting arena layout scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    ///
    /// The provided `update_scene` closure receives the input captured for a
    /// frame and replaces the scene before it is drawn again.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(FrameInput, &mut Scene);
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, PartialEq, Eq)]
pub enum RenderingError {
    /// The board snapshot does not describe exactly one view per grid cell.
    MalformedBoard {
        /// Cell count implied by the grid dimensions.
        expected: usize,
        /// Cell views present in the snapshot.
        actual: usize,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedBoard { expected, actual } => {
                write!(
                    f,
                    "board snapshot holds {actual} cells but the grid needs {expected}"
                )
            }
        }
    }
}

impl Error for RenderingError {}
