#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure editor system that routes per-frame adapter input into board commands.

use arena_layout_core::{CellCoord, Command, EditMode, Event, HazardId};

/// Input snapshot distilled from adapter-provided frame input data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditorInput {
    /// Mode button pressed on this frame, if any.
    pub mode_request: Option<EditMode>,
    /// Grid cell the user activated on this frame.
    pub activated_cell: Option<CellCoord>,
    /// Hazard picked from the side-panel list on this frame.
    pub picked_hazard: Option<HazardId>,
    /// Indicates whether the side-panel deselect button was pressed.
    pub deselect: bool,
}

impl EditorInput {
    /// Creates a new input descriptor with explicit field values.
    #[must_use]
    pub const fn new(
        mode_request: Option<EditMode>,
        activated_cell: Option<CellCoord>,
        picked_hazard: Option<HazardId>,
        deselect: bool,
    ) -> Self {
        Self {
            mode_request,
            activated_cell,
            picked_hazard,
            deselect,
        }
    }
}

/// Editor system that translates input into board commands.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    edit_mode: EditMode,
}

impl Editor {
    /// Creates a new editor system instance.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            edit_mode: EditMode::HazardPlacement,
        }
    }

    /// Mode the editor last observed from board events.
    #[must_use]
    pub const fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    /// Consumes board events and adapter-derived input to emit commands.
    ///
    /// Side-panel actions only exist while placing hazards, so picks and
    /// deselects are dropped in floor editing. Cell activations always pass
    /// through; the board decides what they mean in each mode.
    pub fn handle(&mut self, events: &[Event], input: EditorInput, out: &mut Vec<Command>) {
        for event in events {
            if let Event::EditModeChanged { mode } = event {
                self.edit_mode = *mode;
            }
        }

        let effective_mode = input.mode_request.unwrap_or(self.edit_mode);
        if let Some(mode) = input.mode_request {
            out.push(Command::SetEditMode { mode });
        }

        if effective_mode == EditMode::HazardPlacement {
            if let Some(hazard) = input.picked_hazard {
                out.push(Command::SelectHazard { hazard });
            }
            if input.deselect {
                out.push(Command::ClearSelection);
            }
        }

        if let Some(cell) = input.activated_cell {
            out.push(Command::ActivateCell { cell });
        }
    }
}
