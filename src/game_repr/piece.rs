//! Piece and color types for the checkers rules engine.

/// The two sides. Red starts on rows 5-7 and moves toward decreasing row;
/// Black starts on rows 0-2 and moves toward increasing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

const RED_DIRECTIONS: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
const BLACK_DIRECTIONS: [(i8, i8); 2] = [(1, -1), (1, 1)];
const KING_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }

    /// Row delta of a forward move for this color.
    pub fn forward(&self) -> i8 {
        match self {
            Self::Red => -1,
            Self::Black => 1,
        }
    }

    /// The row this color's men start from (back rank).
    pub fn home_row(&self) -> i8 {
        match self {
            Self::Red => 7,
            Self::Black => 0,
        }
    }

    /// The opponent's back rank; a man landing here becomes a king.
    pub fn crowning_row(&self) -> i8 {
        match self {
            Self::Red => 0,
            Self::Black => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub king: bool,
}

impl Piece {
    pub fn new(color: Color) -> Self {
        Self { color, king: false }
    }

    pub fn king(color: Color) -> Self {
        Self { color, king: true }
    }

    pub fn is(&self, color: Color) -> bool {
        self.color == color
    }

    /// Diagonal directions this piece may move or jump along. Men only go
    /// forward; kings go all four ways.
    pub fn directions(&self) -> &'static [(i8, i8)] {
        if self.king {
            &KING_DIRECTIONS
        } else {
            match self.color {
                Color::Red => &RED_DIRECTIONS,
                Color::Black => &BLACK_DIRECTIONS,
            }
        }
    }
}
