//! Text rendering of a route over its grid.
//!
//! One character per cell: `#` boundary, `.` track, `S` start gate,
//! `F` finish gate, `*` track cells the route passes through. Gate cells
//! keep their letter even when the route stands on them.

use trackline_core::CellKind;
use trackline_engine::Route;
use trackline_grid::Grid;

fn glyph(kind: CellKind) -> char {
    match kind {
        CellKind::Boundary => '#',
        CellKind::Traversable => '.',
        CellKind::StartGate => 'S',
        CellKind::FinishGate => 'F',
    }
}

/// Render `grid` with `route` overlaid, one line per row.
pub fn render_route(grid: &Grid, route: &Route) -> String {
    let mut canvas: Vec<char> = grid.rows().flatten().copied().map(glyph).collect();
    for position in route.positions() {
        if position.kind != CellKind::Traversable {
            continue;
        }
        if let Some(index) = grid.index_of(position.coordinate) {
            canvas[index] = '*';
        }
    }

    let stride = grid.stride();
    let mut out = String::with_capacity(canvas.len() + grid.height() as usize);
    for row in canvas.chunks(stride) {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// Render `grid` alone.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.cell_count() + grid.height() as usize);
    for row in grid.rows() {
        out.extend(row.iter().copied().map(glyph));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackline_engine::compute_route;

    const LOOP: &str = "
        0000000000
        0111321110
        0111321110
        0111000110
        0111111110
        0111111110
        0000000000
    ";

    #[test]
    fn grid_glyphs() {
        let g = Grid::parse("020\n131").unwrap();
        assert_eq!(render_grid(&g), "#S#\n.F.\n");
    }

    #[test]
    fn route_overlay_unpadded() {
        let g = Grid::parse(LOOP).unwrap();
        let route = compute_route(0, &g).unwrap();
        assert!(route.is_complete());
        let expected = "\
##########
#***FS...#
#*..FS***#
#*..###.*#
#*......*#
#********#
##########
";
        assert_eq!(render_route(&g, &route), expected);
    }

    #[test]
    fn overlay_keeps_dimensions() {
        let g = Grid::parse(LOOP).unwrap();
        let route = compute_route(1, &g).unwrap();
        let picture = render_route(&g, &route);
        let lines: Vec<&str> = picture.lines().collect();
        assert_eq!(lines.len(), g.height() as usize);
        assert!(lines.iter().all(|l| l.chars().count() == g.width() as usize));
        assert_eq!(picture.matches('S').count(), g.count(CellKind::StartGate));
    }
}
