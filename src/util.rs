//! Small parsing and formatting helpers.

use crate::geometry::Coord;

/// Parses a `"x,y"` centre argument into a coordinate.
pub fn parse_centre(s: &str) -> Result<Coord, String> {
    let mut parts = s.split(',').map(str::trim);
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("'{s}': expected 'x,y'"));
    };
    let x: f64 = x.parse().map_err(|_| format!("'{x}' is not a number"))?;
    let y: f64 = y.parse().map_err(|_| format!("'{y}' is not a number"))?;
    Ok(Coord::new(x, y))
}

/// Formats a coordinate for log and status output.
pub fn format_coord(c: Coord) -> String {
    format!("({:.4}, {:.4})", c.x, c.y)
}
