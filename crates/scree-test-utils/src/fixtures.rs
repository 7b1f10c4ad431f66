//! Reusable octile map texts.

/// The 3x2 demo map used throughout the parser tests:
///
/// ```text
/// .@.
/// .G.
/// ```
///
/// Five free tiles, one obstacle at `(1, 0)`.
pub const DEMO_MAP: &str = "type octile\nheight 2\nwidth 3\nmap\n.@.\n.G.\n";

/// Assemble a complete map text from literal tile rows.
///
/// Dimensions are inferred: `height` is the row count, `width` the
/// symbol count of the first row. Rows are emitted verbatim, so a
/// deliberately short or over-long row reaches the parser unchanged.
pub fn from_rows(rows: &[&str]) -> String {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.chars().count());
    let mut text = header(height, width);
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text
}

/// An all-ground `width x height` arena.
pub fn open_arena(width: usize, height: usize) -> String {
    let mut text = header(height, width);
    for _ in 0..height {
        text.extend(std::iter::repeat('.').take(width));
        text.push('\n');
    }
    text
}

/// A `width x height` arena with an `@` border and a ground interior.
///
/// Both dimensions should be at least 2; smaller arenas are all border.
pub fn bordered_arena(width: usize, height: usize) -> String {
    let mut text = header(height, width);
    for y in 0..height {
        for x in 0..width {
            let edge = y == 0 || y + 1 == height || x == 0 || x + 1 == width;
            text.push(if edge { '@' } else { '.' });
        }
        text.push('\n');
    }
    text
}

fn header(height: usize, width: usize) -> String {
    format!("type octile\nheight {height}\nwidth {width}\nmap\n")
}
