//! Gate location on whole tracks.

use trackline_core::{CellKind, Coordinate, Direction, TrackError};
use trackline_grid::{cast_ray, locate_finish_line, locate_gate_forward, locate_start_line, Grid};

fn c(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

const OPEN: &str = "
    02220
    01110
    01110
    01110
    03330
";

const RING: &str = "
    000000000000
    011132111110
    011132111110
    011132111110
    011100001110
    011100001110
    011111111110
    011111111110
    011111111110
    000000000000
";

#[test]
fn open_start_row_heads_south() {
    let g = Grid::parse(OPEN).unwrap();
    let gate = locate_gate_forward(CellKind::StartGate, CellKind::FinishGate, &g).unwrap();
    assert_eq!(gate.coordinate, c(1, 0));
    assert_eq!(gate.heading, Direction::South);
    assert_eq!(gate.kind, CellKind::StartGate);
}

#[test]
fn open_start_line_is_ordered_and_complete() {
    let g = Grid::parse(OPEN).unwrap();
    let line = locate_start_line(&g).unwrap();
    let coords: Vec<_> = line.iter().map(|p| p.coordinate).collect();
    assert_eq!(coords, vec![c(3, 0), c(2, 0), c(1, 0)]);
    assert!(line.iter().all(|p| p.heading == Direction::South));
}

#[test]
fn open_finish_line_faces_the_track() {
    let g = Grid::parse(OPEN).unwrap();
    let line = locate_finish_line(&g).unwrap();
    let coords: Vec<_> = line.iter().map(|p| p.coordinate).collect();
    assert_eq!(coords, vec![c(1, 4), c(2, 4), c(3, 4)]);
    assert!(line.iter().all(|p| p.heading == Direction::North));
}

#[test]
fn open_start_ray_reaches_finish_row() {
    let g = Grid::parse(OPEN).unwrap();
    let line = locate_start_line(&g).unwrap();
    let trace = cast_ray(CellKind::Traversable, line[1], &g).unwrap();
    assert_eq!(trace.len(), 3);
    assert_eq!(trace.boundary.coordinate, c(2, 4));
    assert_eq!(trace.boundary.kind, CellKind::FinishGate);
}

#[test]
fn ring_gates_face_apart() {
    let g = Grid::parse(RING).unwrap();
    let start = locate_start_line(&g).unwrap();
    let finish = locate_finish_line(&g).unwrap();
    assert_eq!(start.len(), 3);
    assert_eq!(finish.len(), 3);
    assert!(start.iter().all(|p| p.heading == Direction::East && p.coordinate.x == 5));
    assert!(finish.iter().all(|p| p.heading == Direction::West && p.coordinate.x == 4));
    // heading east, the clockwise side is south: rows run top to bottom
    let rows: Vec<_> = start.iter().map(|p| p.coordinate.y).collect();
    assert_eq!(rows, vec![1, 2, 3]);
}

#[test]
fn missing_gate_is_not_found() {
    let g = Grid::parse("000\n010\n030").unwrap();
    assert_eq!(
        locate_start_line(&g),
        Err(TrackError::NotFound {
            kind: CellKind::StartGate,
            from_index: 0
        })
    );
}

#[test]
fn walled_in_gate_cannot_be_oriented() {
    let g = Grid::parse("000\n020\n000\n010\n030").unwrap();
    assert_eq!(
        locate_start_line(&g),
        Err(TrackError::GateOrientationNotFound {
            kind: CellKind::StartGate,
            coord: c(1, 1)
        })
    );
}
