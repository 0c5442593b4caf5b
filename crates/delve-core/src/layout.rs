//! Levels drawn as text.
//!
//! A [`Layout`] parses an ASCII drawing into a rectangle of characters that
//! can be drawn into a [`Level`] through a legend. Handy for hand-made
//! rooms and for tests.

use std::fmt;

use crate::geom::Point;
use crate::level::Level;
use crate::map::Terrain;

/// The standard legend.
///
/// | rune | terrain |
/// |---|---|
/// | `#` | wall |
/// | `+` | closed door |
/// | `~` | water |
/// | `^` | fire |
/// | `%` | gas cloud |
/// | `:` | chasm |
/// | `?` | unknown |
///
/// Anything else is floor, so letters can mark positions of interest.
pub fn legend(ch: char) -> Terrain {
    match ch {
        '#' => Terrain::Wall,
        '+' => Terrain::Door,
        '~' => Terrain::Water,
        '^' => Terrain::Fire,
        '%' => Terrain::GasCloud,
        ':' => Terrain::Chasm,
        '?' => Terrain::Unknown,
        _ => Terrain::Floor,
    }
}

/// A rectangular ASCII drawing.
///
/// Lines are separated by `'\n'` and must all have the same width.
#[derive(Debug, Clone)]
pub struct Layout {
    rows: Vec<Vec<char>>,
    size: Point,
}

impl Layout {
    /// Parse a drawing. Any character is allowed.
    pub fn new(s: &str) -> Result<Self, LayoutError> {
        Self::with_runes(s, "")
    }

    /// Parse a drawing, rejecting characters not in `runes`. An empty
    /// `runes` allows everything.
    ///
    /// Leading and trailing whitespace is trimmed from the whole string but
    /// not from individual lines.
    pub fn with_runes(s: &str, runes: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        let mut rows: Vec<Vec<char>> = Vec::new();
        for (y, line) in s.split('\n').enumerate() {
            let row: Vec<char> = line.chars().collect();
            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(LayoutError::InconsistentSize(s.to_string()));
                }
            }
            if !runes.is_empty() {
                if let Some(x) = row.iter().position(|&ch| !runes.contains(ch)) {
                    return Err(LayoutError::InvalidRune {
                        ch: row[x],
                        pos: Point::new(x as i32, y as i32),
                        content: s.to_string(),
                    });
                }
            }
            rows.push(row);
        }
        let width = rows.first().map_or(0, |r| r.len()) as i32;
        let height = if width == 0 { 0 } else { rows.len() as i32 };
        Ok(Self {
            rows,
            size: Point::new(width, height),
        })
    }

    /// Return the (width, height) size of the drawing in cells.
    pub fn size(&self) -> Point {
        self.size
    }

    /// The character at `p`, if inside the drawing.
    pub fn at(&self, p: Point) -> Option<char> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        self.rows.get(p.y as usize)?.get(p.x as usize).copied()
    }

    /// Iterate over all positions and their characters, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Point, char)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &ch)| (Point::new(x as i32, y as i32), ch))
        })
    }

    /// All positions holding `ch`, row-major.
    pub fn positions_of(&self, ch: char) -> Vec<Point> {
        self.iter()
            .filter_map(|(p, c)| (c == ch).then_some(p))
            .collect()
    }

    /// Draw the layout into `level` with its top-left corner at `offset`.
    /// Parts falling outside the level are dropped.
    pub fn draw(&self, level: &mut Level, offset: Point, f: impl Fn(char) -> Terrain) {
        for (p, ch) in self.iter() {
            level.set_terrain(p + offset, f(ch));
        }
    }

    /// Build a level of exactly the layout's size.
    pub fn to_level(&self, depth: i32, f: impl Fn(char) -> Terrain) -> Level {
        let mut level = Level::new(depth, self.size.x.max(1), self.size.y.max(1));
        self.draw(&mut level, Point::ZERO, f);
        level
    }
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone)]
pub enum LayoutError {
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A character not in the allowed set was found.
    InvalidRune {
        ch: char,
        pos: Point,
        content: String,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize(s) => write!(f, "layout: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos, content } => {
                write!(
                    f,
                    "layout contains invalid rune \u{201c}{ch}\u{201d} at ({}, {}):\n{content}",
                    pos.x, pos.y
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {}
