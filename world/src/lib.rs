#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative board state for the arena layout editor.

use std::collections::BTreeSet;

use arena_layout_core::{
    CellCoord, Command, EditMode, Event, GridSize, Hazard, HazardId, Layout,
};

/// Represents the authoritative arena board.
#[derive(Debug)]
pub struct World {
    title: String,
    grid: GridSize,
    tiles: BTreeSet<CellCoord>,
    hazards: Vec<Hazard>,
    selected: Option<HazardId>,
    edit_mode: EditMode,
}

impl World {
    /// Creates an empty board using the reference grid dimensions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: String::new(),
            grid: GridSize::default(),
            tiles: BTreeSet::new(),
            hazards: Vec::new(),
            selected: None,
            edit_mode: EditMode::default(),
        }
    }

    /// Seeds a board from startup data.
    ///
    /// Duplicate tiles collapse into one. Hazards keep the order they were
    /// supplied in; identifier uniqueness is the caller's responsibility.
    #[must_use]
    pub fn from_layout(layout: Layout) -> Self {
        Self {
            title: layout.title,
            grid: layout.grid,
            tiles: layout.tiles.into_iter().collect(),
            hazards: layout.hazards,
            selected: None,
            edit_mode: EditMode::default(),
        }
    }

    fn hazard_index_at(&self, cell: CellCoord) -> Option<usize> {
        self.hazards.iter().position(|hazard| hazard.cell == cell)
    }

    fn hazard_mut(&mut self, id: HazardId) -> Option<&mut Hazard> {
        self.hazards.iter_mut().find(|hazard| hazard.id == id)
    }

    fn clear_selection(&mut self, out_events: &mut Vec<Event>) {
        if self.selected.take().is_some() {
            out_events.push(Event::SelectionCleared);
        }
    }

    fn select(&mut self, hazard: HazardId, out_events: &mut Vec<Event>) {
        self.selected = Some(hazard);
        tracing::debug!(hazard = hazard.get(), "hazard selected");
        out_events.push(Event::HazardSelected { hazard });
    }

    fn toggle_tile(&mut self, cell: CellCoord, out_events: &mut Vec<Event>) {
        if self.tiles.remove(&cell) {
            tracing::debug!(column = cell.column(), row = cell.row(), "tile removed");
            out_events.push(Event::TileRemoved { cell });
            if let Some(index) = self.hazard_index_at(cell) {
                let hazard = self.hazards[index].id;
                tracing::warn!(
                    hazard = hazard.get(),
                    column = cell.column(),
                    row = cell.row(),
                    "hazard left without a floor tile"
                );
                out_events.push(Event::HazardStranded { hazard, cell });
            }
        } else {
            let _ = self.tiles.insert(cell);
            tracing::debug!(column = cell.column(), row = cell.row(), "tile added");
            out_events.push(Event::TileAdded { cell });
        }
    }

    fn activate_cell(&mut self, cell: CellCoord, out_events: &mut Vec<Event>) {
        if self.edit_mode == EditMode::FloorEdit {
            self.toggle_tile(cell, out_events);
            return;
        }

        let tile_here = self.tiles.contains(&cell);
        let hazard_here = self
            .hazard_index_at(cell)
            .map(|index| self.hazards[index].id);

        match (self.selected, hazard_here) {
            (Some(selected), None) if tile_here => {
                if let Some(hazard) = self.hazard_mut(selected) {
                    let from = hazard.cell;
                    hazard.cell = cell;
                    tracing::debug!(
                        hazard = selected.get(),
                        column = cell.column(),
                        row = cell.row(),
                        "hazard moved"
                    );
                    out_events.push(Event::HazardMoved {
                        hazard: selected,
                        from,
                        to: cell,
                    });
                }
                self.clear_selection(out_events);
            }
            (_, Some(hazard)) => self.select(hazard, out_events),
            (Some(_), None) => self.clear_selection(out_events),
            (None, None) => {}
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the board, reporting changes as events.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::SetEditMode { mode } => {
            world.clear_selection(out_events);
            world.edit_mode = mode;
            tracing::debug!(mode = mode.label(), "edit mode changed");
            out_events.push(Event::EditModeChanged { mode });
        }
        Command::ToggleTile { cell } => world.toggle_tile(cell, out_events),
        Command::ActivateCell { cell } => world.activate_cell(cell, out_events),
        Command::SelectHazard { hazard } => {
            if world.edit_mode != EditMode::HazardPlacement {
                return;
            }
            if world.hazards.iter().any(|candidate| candidate.id == hazard) {
                world.select(hazard, out_events);
            }
        }
        Command::ClearSelection => world.clear_selection(out_events),
    }
}

/// Query functions that provide read-only access to the board state.
pub mod query {
    use arena_layout_core::{
        BoardView, CellCoord, CellView, EditMode, GridSize, Hazard, HazardId,
    };

    use super::World;

    /// Title of the loaded layout.
    #[must_use]
    pub fn title(world: &World) -> &str {
        &world.title
    }

    /// Grid dimensions of the board.
    #[must_use]
    pub fn grid(world: &World) -> GridSize {
        world.grid
    }

    /// Active edit mode.
    #[must_use]
    pub fn edit_mode(world: &World) -> EditMode {
        world.edit_mode
    }

    /// Reports whether a floor tile exists at the cell.
    #[must_use]
    pub fn is_tile_at(world: &World, cell: CellCoord) -> bool {
        world.tiles.contains(&cell)
    }

    /// Floor tiles ordered by column, then row.
    pub fn tiles(world: &World) -> impl Iterator<Item = CellCoord> + '_ {
        world.tiles.iter().copied()
    }

    /// Hazard occupying the cell, if any.
    #[must_use]
    pub fn hazard_at(world: &World, cell: CellCoord) -> Option<&Hazard> {
        world.hazards.iter().find(|hazard| hazard.cell == cell)
    }

    /// All hazards in display order.
    #[must_use]
    pub fn hazards(world: &World) -> &[Hazard] {
        &world.hazards
    }

    /// Looks up a hazard by identifier.
    #[must_use]
    pub fn hazard(world: &World, id: HazardId) -> Option<&Hazard> {
        world.hazards.iter().find(|hazard| hazard.id == id)
    }

    /// Identifier of the selected hazard, if any.
    #[must_use]
    pub fn selected_hazard_id(world: &World) -> Option<HazardId> {
        world.selected
    }

    /// Full record of the selected hazard, if any.
    #[must_use]
    pub fn selected_hazard(world: &World) -> Option<&Hazard> {
        world.selected.and_then(|id| hazard(world, id))
    }

    /// Hazards whose cell has no floor tile beneath it.
    #[must_use]
    pub fn stranded_hazards(world: &World) -> Vec<HazardId> {
        world
            .hazards
            .iter()
            .filter(|hazard| !world.tiles.contains(&hazard.cell))
            .map(|hazard| hazard.id)
            .collect()
    }

    /// Render-ready description of a single cell.
    #[must_use]
    pub fn cell_view(world: &World, cell: CellCoord) -> CellView {
        let hazard = hazard_at(world, cell).map(|hazard| hazard.id);
        CellView {
            cell,
            is_tile: is_tile_at(world, cell),
            hazard,
            selected: hazard.is_some() && hazard == world.selected,
        }
    }

    /// Captures an immutable snapshot of the whole board.
    #[must_use]
    pub fn board_view(world: &World) -> BoardView {
        BoardView {
            title: world.title.clone(),
            grid: world.grid,
            mode: world.edit_mode,
            selected: world.selected,
            hazards: world.hazards.clone(),
            cells: world
                .grid
                .cells()
                .map(|cell| cell_view(world, cell))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use arena_layout_core::{Difficulty, HazardGlyph, HazardPalette};

    use super::*;

    fn hazard(id: u32, column: u32, row: u32) -> Hazard {
        Hazard {
            id: HazardId::new(id),
            name: format!("Hazard {id}"),
            glyph: HazardGlyph::ZigZag,
            palette: HazardPalette::Yellow,
            cell: CellCoord::new(column, row),
            description: String::new(),
            height: "Ground".to_owned(),
            difficulty: Difficulty::Medium,
        }
    }

    fn world_with(tiles: &[(u32, u32)], hazards: Vec<Hazard>) -> World {
        World::from_layout(Layout {
            title: "Test".to_owned(),
            grid: GridSize::default(),
            tiles: tiles
                .iter()
                .map(|&(column, row)| CellCoord::new(column, row))
                .collect(),
            hazards,
        })
    }

    #[test]
    fn new_world_is_empty_reference_grid_in_hazard_mode() {
        let world = World::new();
        assert_eq!(query::grid(&world), GridSize::new(10, 8));
        assert_eq!(query::edit_mode(&world), EditMode::HazardPlacement);
        assert_eq!(query::tiles(&world).count(), 0);
        assert!(query::hazards(&world).is_empty());
        assert!(query::selected_hazard_id(&world).is_none());
    }

    #[test]
    fn from_layout_collapses_duplicate_tiles() {
        let world = world_with(&[(1, 1), (1, 1), (2, 1)], Vec::new());
        assert_eq!(query::tiles(&world).count(), 2);
    }

    #[test]
    fn set_edit_mode_reports_cleared_selection_before_mode_change() {
        let mut world = world_with(&[(3, 2)], vec![hazard(1, 3, 2)]);
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::ActivateCell {
                cell: CellCoord::new(3, 2),
            },
            &mut events,
        );
        events.clear();

        apply(
            &mut world,
            Command::SetEditMode {
                mode: EditMode::FloorEdit,
            },
            &mut events,
        );

        assert_eq!(
            events,
            vec![
                Event::SelectionCleared,
                Event::EditModeChanged {
                    mode: EditMode::FloorEdit,
                },
            ]
        );
    }

    #[test]
    fn activating_selected_hazard_reconfirms_selection() {
        let mut world = world_with(&[(3, 2)], vec![hazard(1, 3, 2)]);
        let mut events = Vec::new();
        let cell = CellCoord::new(3, 2);

        apply(&mut world, Command::ActivateCell { cell }, &mut events);
        apply(&mut world, Command::ActivateCell { cell }, &mut events);

        assert_eq!(query::selected_hazard_id(&world), Some(HazardId::new(1)));
        assert_eq!(
            events,
            vec![
                Event::HazardSelected {
                    hazard: HazardId::new(1),
                },
                Event::HazardSelected {
                    hazard: HazardId::new(1),
                },
            ]
        );
    }

    #[test]
    fn cell_view_marks_only_the_selected_hazard() {
        let mut world = world_with(&[(3, 2), (4, 2)], vec![hazard(1, 3, 2), hazard(2, 4, 2)]);
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::SelectHazard {
                hazard: HazardId::new(2),
            },
            &mut events,
        );

        let first = query::cell_view(&world, CellCoord::new(3, 2));
        let second = query::cell_view(&world, CellCoord::new(4, 2));
        let empty = query::cell_view(&world, CellCoord::new(0, 0));

        assert!(first.is_tile && !first.selected);
        assert!(second.selected);
        assert_eq!(second.hazard, Some(HazardId::new(2)));
        assert!(!empty.is_tile && empty.hazard.is_none() && !empty.selected);
    }

    #[test]
    fn board_view_covers_every_cell_in_row_major_order() {
        let world = world_with(&[(9, 7)], vec![hazard(1, 9, 7)]);
        let view = query::board_view(&world);

        assert_eq!(view.cells.len(), 80);
        assert_eq!(view.cells[0].cell, CellCoord::new(0, 0));
        let last = view.cells[79];
        assert_eq!(last.cell, CellCoord::new(9, 7));
        assert!(last.is_tile);
        assert_eq!(last.hazard, Some(HazardId::new(1)));
        assert_eq!(view.title, "Test");
    }
}
