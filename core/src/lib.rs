#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the arena layout editor.
//!
//! Adapters translate user input into [`Command`] values, the board world
//! executes them through its `apply` entry point and reports what changed as
//! [`Event`] values. Presentation code never touches the world directly; it
//! consumes the immutable [`BoardView`] snapshot instead.

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the editor boots.
pub const WELCOME_BANNER: &str = "VEX IQ Battlebot Arena";

/// Number of columns in the reference arena grid.
pub const DEFAULT_COLUMNS: u32 = 10;

/// Number of rows in the reference arena grid.
pub const DEFAULT_ROWS: u32 = 8;

/// Exclusive editing mode that decides what a cell activation does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditMode {
    /// Clicks select hazards and move them between floor tiles.
    #[default]
    HazardPlacement,
    /// Clicks add or remove floor tiles.
    FloorEdit,
}

impl EditMode {
    /// Human readable description of the mode used by status lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HazardPlacement => "Hazard Placement",
            Self::FloorEdit => "Floor Layout Editor",
        }
    }
}

/// Commands that express all permissible board mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Switches the active edit mode and drops any selection.
    SetEditMode {
        /// Mode the board should activate.
        mode: EditMode,
    },
    /// Adds a floor tile at the cell, or removes the one already there.
    ToggleTile {
        /// Cell whose floor tile flips.
        cell: CellCoord,
    },
    /// Reports that the user activated a grid cell.
    ActivateCell {
        /// Cell the user clicked.
        cell: CellCoord,
    },
    /// Selects a hazard by identifier, as picked from the hazard list.
    SelectHazard {
        /// Hazard to select.
        hazard: HazardId,
    },
    /// Drops the current selection, if any.
    ClearSelection,
}

/// Events broadcast by the board after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Announces that the board entered a new edit mode.
    EditModeChanged {
        /// Mode that became active.
        mode: EditMode,
    },
    /// Confirms that a floor tile was added.
    TileAdded {
        /// Cell that gained a tile.
        cell: CellCoord,
    },
    /// Confirms that a floor tile was removed.
    TileRemoved {
        /// Cell that lost its tile.
        cell: CellCoord,
    },
    /// Reports a hazard left without a floor tile underneath it.
    HazardStranded {
        /// Hazard that is now off the floor.
        hazard: HazardId,
        /// Cell the hazard occupies.
        cell: CellCoord,
    },
    /// Confirms that a hazard became the selection.
    HazardSelected {
        /// Newly selected hazard.
        hazard: HazardId,
    },
    /// Confirms that the selection was dropped.
    SelectionCleared,
    /// Confirms that a hazard moved between cells.
    HazardMoved {
        /// Hazard that moved.
        hazard: HazardId,
        /// Cell the hazard occupied before the move.
        from: CellCoord,
        /// Cell the hazard occupies after the move.
        to: CellCoord,
    },
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Dimensions of the arena grid measured in whole cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    columns: u32,
    rows: u32,
}

impl GridSize {
    /// Creates a grid size from explicit dimensions.
    #[must_use]
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells in the grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        usize::try_from(u64::from(self.columns) * u64::from(self.rows)).unwrap_or(0)
    }

    /// Reports whether the cell lies inside the grid.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column() < self.columns && cell.row() < self.rows
    }

    /// Iterates every cell of the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> {
        let columns = self.columns;
        (0..self.rows)
            .flat_map(move |row| (0..columns).map(move |column| CellCoord::new(column, row)))
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS, DEFAULT_ROWS)
    }
}

/// Unique identifier assigned to a hazard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HazardId(u32);

impl HazardId {
    /// Creates a new hazard identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Visual kind of a hazard token, resolved to a drawable by renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HazardGlyph {
    /// Zig-zag activity trace.
    ZigZag,
    /// Octagonal stop sign.
    StopSign,
    /// Closed box or covered tunnel.
    Cave,
    /// Upward arrow for tall structures.
    Tower,
    /// Circular arrows for rotating parts.
    Spinner,
    /// Grid of bars.
    Bars,
    /// Hanging anchor.
    Anchor,
    /// Stacked layers.
    Stack,
    /// Single upward chevron for a raised step.
    Step,
}

/// Color family used to tint a hazard token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HazardPalette {
    /// Yellow token.
    Yellow,
    /// Red token.
    Red,
    /// Dark slate token.
    Slate,
    /// Purple token.
    Purple,
    /// Blue token.
    Blue,
    /// Orange token.
    Orange,
    /// Deep red token.
    Crimson,
    /// Pink token.
    Pink,
    /// Green token.
    Green,
    /// Indigo token.
    Indigo,
}

/// Difficulty classification attached to a hazard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    /// Trivial to clear.
    Easy,
    /// Moderate challenge.
    Medium,
    /// Demanding challenge.
    Hard,
    /// Requires dedicated mechanisms.
    VeryHard,
    /// Hardest classification.
    Extreme,
}

impl Difficulty {
    /// Display label for the difficulty.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::VeryHard => "Very Hard",
            Self::Extreme => "Extreme",
        }
    }
}

/// Named obstacle token placed on the arena floor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hazard {
    /// Identifier unique across the hazard set.
    pub id: HazardId,
    /// Display name.
    pub name: String,
    /// Visual kind used for the token.
    pub glyph: HazardGlyph,
    /// Color family used for the token.
    pub palette: HazardPalette,
    /// Cell currently occupied by the hazard.
    pub cell: CellCoord,
    /// Free text description.
    pub description: String,
    /// Height classification, such as "Ground" or "12 inches".
    pub height: String,
    /// Difficulty classification.
    pub difficulty: Difficulty,
}

/// Startup data a board is seeded from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Title of the layout.
    pub title: String,
    /// Grid dimensions.
    pub grid: GridSize,
    /// Initial floor tiles.
    pub tiles: Vec<CellCoord>,
    /// Initial hazards in display order.
    pub hazards: Vec<Hazard>,
}

/// Render-ready description of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView {
    /// Cell described by the view.
    pub cell: CellCoord,
    /// Whether a floor tile exists at the cell.
    pub is_tile: bool,
    /// Hazard occupying the cell, if any.
    pub hazard: Option<HazardId>,
    /// Whether the occupying hazard is the current selection.
    pub selected: bool,
}

/// Immutable snapshot of the whole board used by presentation layers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardView {
    /// Title of the loaded layout.
    pub title: String,
    /// Grid dimensions.
    pub grid: GridSize,
    /// Active edit mode.
    pub mode: EditMode,
    /// Selected hazard, if any.
    pub selected: Option<HazardId>,
    /// All hazards in display order.
    pub hazards: Vec<Hazard>,
    /// One view per grid cell in row-major order.
    pub cells: Vec<CellView>,
}

impl BoardView {
    /// Looks up a hazard record by identifier.
    #[must_use]
    pub fn hazard(&self, id: HazardId) -> Option<&Hazard> {
        self.hazards.iter().find(|hazard| hazard.id == id)
    }

    /// Returns the full record of the selected hazard, if any.
    #[must_use]
    pub fn selected_hazard(&self) -> Option<&Hazard> {
        self.selected.and_then(|id| self.hazard(id))
    }
}
