//! The eight winning lines.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Three cells that win the game when they hold the same marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// Rows top-to-bottom, then columns left-to-right, then the main
    /// diagonal and the anti-diagonal. The evaluator reports the first
    /// complete line in this order.
    pub const ALL: [Line; 8] = [
        // Rows
        Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
        Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
        // Columns
        Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
        Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
        Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
        // Diagonals
        Line([Position::TopLeft, Position::Center, Position::BottomRight]),
        Line([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three `(row, col)` pairs of this line, for highlighting.
    pub fn coords(&self) -> [(usize, usize); 3] {
        self.0.map(Position::coords)
    }

    /// True if `pos` is part of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}, {}, {}", a, b, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lines_are_distinct() {
        let unique: HashSet<_> = Line::ALL.iter().collect();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn test_every_line_is_straight() {
        for line in Line::ALL {
            let [(r0, c0), (r1, c1), (r2, c2)] = line.coords();
            let dr = r1 as isize - r0 as isize;
            let dc = c1 as isize - c0 as isize;
            assert_eq!(r2 as isize - r1 as isize, dr);
            assert_eq!(c2 as isize - c1 as isize, dc);
        }
    }

    #[test]
    fn test_center_lies_on_four_lines() {
        let through_center = Line::ALL
            .iter()
            .filter(|l| l.contains(Position::Center))
            .count();
        assert_eq!(through_center, 4);
    }
}
