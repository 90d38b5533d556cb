#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Bootstrap system that loads startup layouts and seeds the board.

use std::collections::HashSet;

use arena_layout_core::{
    CellCoord, Difficulty, GridSize, Hazard, HazardGlyph, HazardId, HazardPalette, Layout,
    WELCOME_BANNER,
};
use arena_layout_world::World;
use serde::Deserialize;
use thiserror::Error;

const REFERENCE_LAYOUT: &str = include_str!("../layouts/switchback.toml");

/// Reasons a layout description may be rejected.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The layout source is not valid TOML or misses required fields.
    #[error("could not parse layout: {0}")]
    Parse(#[from] toml::de::Error),
    /// The grid has no cells.
    #[error("grid dimensions {columns}x{rows} must both be positive")]
    EmptyGrid {
        /// Configured column count.
        columns: u32,
        /// Configured row count.
        rows: u32,
    },
    /// A tile lies outside the grid.
    #[error("tile ({column}, {row}) lies outside the grid")]
    TileOutOfBounds {
        /// Column of the offending tile.
        column: u32,
        /// Row of the offending tile.
        row: u32,
    },
    /// The same tile is listed twice.
    #[error("tile ({column}, {row}) is listed more than once")]
    DuplicateTile {
        /// Column of the duplicated tile.
        column: u32,
        /// Row of the duplicated tile.
        row: u32,
    },
    /// Two hazards share an identifier.
    #[error("hazard id {0} is used more than once")]
    DuplicateHazardId(u32),
    /// A hazard lies outside the grid.
    #[error("hazard {id} at ({column}, {row}) lies outside the grid")]
    HazardOutOfBounds {
        /// Identifier of the offending hazard.
        id: u32,
        /// Column of the hazard.
        column: u32,
        /// Row of the hazard.
        row: u32,
    },
    /// Two hazards occupy the same cell.
    #[error("hazards {first} and {second} both occupy ({column}, {row})")]
    SharedCell {
        /// Hazard listed first.
        first: u32,
        /// Hazard listed second.
        second: u32,
        /// Column of the shared cell.
        column: u32,
        /// Row of the shared cell.
        row: u32,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LayoutFile {
    title: String,
    columns: u32,
    rows: u32,
    #[serde(default)]
    tiles: Vec<[u32; 2]>,
    #[serde(default)]
    hazards: Vec<HazardEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HazardEntry {
    id: u32,
    name: String,
    glyph: HazardGlyph,
    palette: HazardPalette,
    at: [u32; 2],
    #[serde(default)]
    description: String,
    height: String,
    difficulty: Difficulty,
}

/// Produces the startup data the editor needs.
#[derive(Debug, Default)]
pub struct Bootstrap;

impl Bootstrap {
    /// Banner shown when the editor starts.
    #[must_use]
    pub fn welcome_banner(&self) -> &'static str {
        WELCOME_BANNER
    }

    /// Loads the built-in "Switchback" arena layout.
    pub fn reference_layout(&self) -> Result<Layout, LayoutError> {
        self.parse_layout(REFERENCE_LAYOUT)
    }

    /// Parses and validates a TOML layout description.
    pub fn parse_layout(&self, source: &str) -> Result<Layout, LayoutError> {
        let file: LayoutFile = toml::from_str(source)?;
        if file.columns == 0 || file.rows == 0 {
            return Err(LayoutError::EmptyGrid {
                columns: file.columns,
                rows: file.rows,
            });
        }
        let grid = GridSize::new(file.columns, file.rows);

        let mut tiles = Vec::with_capacity(file.tiles.len());
        let mut seen_tiles = HashSet::new();
        for [column, row] in file.tiles {
            let cell = CellCoord::new(column, row);
            if !grid.contains(cell) {
                return Err(LayoutError::TileOutOfBounds { column, row });
            }
            if !seen_tiles.insert(cell) {
                return Err(LayoutError::DuplicateTile { column, row });
            }
            tiles.push(cell);
        }

        let mut hazards: Vec<Hazard> = Vec::with_capacity(file.hazards.len());
        for entry in file.hazards {
            let [column, row] = entry.at;
            let cell = CellCoord::new(column, row);
            if hazards.iter().any(|hazard| hazard.id.get() == entry.id) {
                return Err(LayoutError::DuplicateHazardId(entry.id));
            }
            if !grid.contains(cell) {
                return Err(LayoutError::HazardOutOfBounds {
                    id: entry.id,
                    column,
                    row,
                });
            }
            if let Some(occupant) = hazards.iter().find(|hazard| hazard.cell == cell) {
                return Err(LayoutError::SharedCell {
                    first: occupant.id.get(),
                    second: entry.id,
                    column,
                    row,
                });
            }
            if !seen_tiles.contains(&cell) {
                tracing::warn!(
                    hazard = entry.id,
                    column,
                    row,
                    "hazard seeded without a floor tile"
                );
            }
            hazards.push(Hazard {
                id: HazardId::new(entry.id),
                name: entry.name,
                glyph: entry.glyph,
                palette: entry.palette,
                cell,
                description: entry.description,
                height: entry.height,
                difficulty: entry.difficulty,
            });
        }

        Ok(Layout {
            title: file.title,
            grid,
            tiles,
            hazards,
        })
    }

    /// Seeds a fresh board from the provided layout.
    #[must_use]
    pub fn seed_world(&self, layout: Layout) -> World {
        tracing::info!(
            title = %layout.title,
            tiles = layout.tiles.len(),
            hazards = layout.hazards.len(),
            "seeding arena board"
        );
        World::from_layout(layout)
    }
}
