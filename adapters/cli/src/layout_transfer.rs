use arena_layout_core::{CellCoord, HazardId};
use arena_layout_world::{query, World};
use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use serde::Serialize;

/// Identifier prefix emitted before the encoded snapshot payload.
pub(crate) const SNAPSHOT_HEADER: &str = "arena:v1";

/// Snapshot of the floor and hazard placement of an arena board.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct ArenaLayoutSnapshot {
    /// Number of columns contained in the grid.
    pub columns: u32,
    /// Number of rows contained in the grid.
    pub rows: u32,
    /// Floor tiles in row-major order.
    pub tiles: Vec<CellCoord>,
    /// Hazard positions in display order.
    pub hazards: Vec<HazardPlacement>,
}

impl ArenaLayoutSnapshot {
    /// Captures the current floor and hazard positions of the board.
    #[must_use]
    pub(crate) fn capture(world: &World) -> Self {
        let grid = query::grid(world);
        let mut tiles: Vec<_> = query::tiles(world).collect();
        tiles.sort_by_key(|cell| (cell.row(), cell.column()));
        Self {
            columns: grid.columns(),
            rows: grid.rows(),
            tiles,
            hazards: query::hazards(world)
                .iter()
                .map(|hazard| HazardPlacement {
                    id: hazard.id,
                    cell: hazard.cell,
                })
                .collect(),
        }
    }

    /// Encodes the snapshot into a single-line string suitable for clipboard transfer.
    pub(crate) fn encode(&self) -> serde_json::Result<String> {
        let payload = SerializablePayload {
            tiles: &self.tiles,
            hazards: &self.hazards,
        };
        let json = serde_json::to_vec(&payload)?;
        let encoded = STANDARD_NO_PAD.encode(json);
        Ok(format!(
            "{SNAPSHOT_HEADER}:{}x{}:{encoded}",
            self.columns, self.rows
        ))
    }
}

/// Hazard position captured within a layout snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub(crate) struct HazardPlacement {
    /// Hazard described by the entry.
    pub id: HazardId,
    /// Cell the hazard occupies.
    pub cell: CellCoord,
}

#[derive(Serialize)]
struct SerializablePayload<'a> {
    tiles: &'a [CellCoord],
    hazards: &'a [HazardPlacement],
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_layout_core::{
        Command, Difficulty, GridSize, Hazard, HazardGlyph, HazardPalette, Layout,
    };
    use arena_layout_world as world;

    fn decode_payload(encoded: &str) -> serde_json::Value {
        let payload = encoded.rsplit(':').next().expect("payload segment");
        let bytes = STANDARD_NO_PAD
            .decode(payload.as_bytes())
            .expect("valid base64");
        serde_json::from_slice(&bytes).expect("valid json")
    }

    fn board() -> World {
        World::from_layout(Layout {
            title: "Export".to_owned(),
            grid: GridSize::new(10, 8),
            tiles: vec![
                CellCoord::new(4, 2),
                CellCoord::new(3, 2),
                CellCoord::new(1, 1),
            ],
            hazards: vec![Hazard {
                id: HazardId::new(1),
                name: "Zig-Zag".to_owned(),
                glyph: HazardGlyph::ZigZag,
                palette: HazardPalette::Yellow,
                cell: CellCoord::new(3, 2),
                description: String::new(),
                height: "Ground".to_owned(),
                difficulty: Difficulty::Medium,
            }],
        })
    }

    #[test]
    fn capture_orders_tiles_row_major() {
        let snapshot = ArenaLayoutSnapshot::capture(&board());

        assert_eq!(
            snapshot.tiles,
            vec![
                CellCoord::new(1, 1),
                CellCoord::new(3, 2),
                CellCoord::new(4, 2),
            ]
        );
        assert_eq!((snapshot.columns, snapshot.rows), (10, 8));
    }

    #[test]
    fn encode_writes_header_dimensions_and_positions() {
        let mut board = board();
        let mut events = Vec::new();
        for cell in [CellCoord::new(3, 2), CellCoord::new(4, 2)] {
            world::apply(&mut board, Command::ActivateCell { cell }, &mut events);
        }

        let encoded = ArenaLayoutSnapshot::capture(&board)
            .encode()
            .expect("snapshot encodes");

        assert!(encoded.starts_with(&format!("{SNAPSHOT_HEADER}:10x8:")));
        assert!(!encoded.contains('\n'));
        let payload = decode_payload(&encoded);
        assert_eq!(payload["tiles"].as_array().map(Vec::len), Some(3));
        assert_eq!(payload["hazards"][0]["id"], 1);
        assert_eq!(payload["hazards"][0]["cell"]["column"], 4);
        assert_eq!(payload["hazards"][0]["cell"]["row"], 2);
    }
}
