use arena_layout_core::{CellCoord, Difficulty, GridSize, HazardGlyph, HazardId};
use arena_layout_system_bootstrap::{Bootstrap, LayoutError};
use arena_layout_world::query;

#[test]
fn reference_layout_matches_switchback_arena() {
    let layout = Bootstrap
        .reference_layout()
        .expect("embedded layout must parse");

    assert_eq!(layout.title, "The Switchback");
    assert_eq!(layout.grid, GridSize::new(10, 8));
    assert_eq!(layout.tiles.len(), 14);
    assert_eq!(layout.hazards.len(), 10);

    let tower = layout
        .hazards
        .iter()
        .find(|hazard| hazard.id == HazardId::new(4))
        .expect("tower hazard present");
    assert_eq!(tower.name, "12in Tower");
    assert_eq!(tower.glyph, HazardGlyph::Tower);
    assert_eq!(tower.cell, CellCoord::new(5, 3));
    assert_eq!(tower.difficulty, Difficulty::VeryHard);
}

#[test]
fn reference_layout_places_every_hazard_on_a_tile() {
    let bootstrap = Bootstrap;
    let layout = bootstrap.reference_layout().expect("embedded layout");
    let world = bootstrap.seed_world(layout);

    assert!(query::stranded_hazards(&world).is_empty());
    assert_eq!(query::title(&world), "The Switchback");
    assert!(query::selected_hazard_id(&world).is_none());
}

#[test]
fn welcome_banner_names_the_arena() {
    assert_eq!(Bootstrap.welcome_banner(), "VEX IQ Battlebot Arena");
}

#[test]
fn rejects_empty_grid() {
    let error = Bootstrap
        .parse_layout("title = \"x\"\ncolumns = 0\nrows = 4\n")
        .expect_err("zero columns must be rejected");

    assert!(matches!(
        error,
        LayoutError::EmptyGrid {
            columns: 0,
            rows: 4
        }
    ));
}

#[test]
fn rejects_tiles_outside_grid_and_duplicates() {
    let outside = Bootstrap
        .parse_layout("title = \"x\"\ncolumns = 2\nrows = 2\ntiles = [[2, 0]]\n")
        .expect_err("tile outside grid");
    assert!(matches!(
        outside,
        LayoutError::TileOutOfBounds { column: 2, row: 0 }
    ));

    let duplicate = Bootstrap
        .parse_layout("title = \"x\"\ncolumns = 2\nrows = 2\ntiles = [[1, 1], [1, 1]]\n")
        .expect_err("duplicate tile");
    assert!(matches!(
        duplicate,
        LayoutError::DuplicateTile { column: 1, row: 1 }
    ));
}

const TWO_HAZARDS: &str = r#"
title = "pair"
columns = 4
rows = 4
tiles = [[0, 0], [1, 0]]

[[hazards]]
id = 1
name = "First"
glyph = "cave"
palette = "slate"
at = [0, 0]
height = "Ground"
difficulty = "easy"

[[hazards]]
id = ID
name = "Second"
glyph = "spinner"
palette = "blue"
at = AT
height = "Ground"
difficulty = "hard"
"#;

fn second_hazard(id: &str, at: &str) -> String {
    TWO_HAZARDS.replace("ID", id).replace("AT", at)
}

#[test]
fn rejects_duplicate_hazard_ids() {
    let error = Bootstrap
        .parse_layout(&second_hazard("1", "[1, 0]"))
        .expect_err("duplicate id");

    assert!(matches!(error, LayoutError::DuplicateHazardId(1)));
}

#[test]
fn rejects_hazards_sharing_a_cell() {
    let error = Bootstrap
        .parse_layout(&second_hazard("2", "[0, 0]"))
        .expect_err("shared cell");

    assert!(matches!(
        error,
        LayoutError::SharedCell {
            first: 1,
            second: 2,
            column: 0,
            row: 0
        }
    ));
}

#[test]
fn rejects_hazards_outside_grid() {
    let error = Bootstrap
        .parse_layout(&second_hazard("2", "[4, 1]"))
        .expect_err("hazard outside grid");

    assert!(matches!(
        error,
        LayoutError::HazardOutOfBounds {
            id: 2,
            column: 4,
            row: 1
        }
    ));
}

#[test]
fn accepts_hazards_without_floor_tile() {
    let layout = Bootstrap
        .parse_layout(&second_hazard("2", "[3, 3]"))
        .expect("off-tile hazards are permitted");
    let world = Bootstrap.seed_world(layout);

    assert_eq!(query::stranded_hazards(&world), vec![HazardId::new(2)]);
}

#[test]
fn reports_malformed_toml() {
    let error = Bootstrap
        .parse_layout("title = ")
        .expect_err("malformed toml");

    assert!(matches!(error, LayoutError::Parse(_)));
    assert!(error.to_string().starts_with("could not parse layout"));
}
