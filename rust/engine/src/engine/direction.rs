// rust/engine/src/engine/direction.rs
#![forbid(unsafe_code)]

/// Move vocabulary.
///
/// `ALL` fixes the priority order (UP, DOWN, LEFT, RIGHT) used for legality
/// scans and greedy tie-breaks.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DirectionType {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl DirectionType {
    pub const ALL: [DirectionType; 4] = [
        DirectionType::Up,
        DirectionType::Down,
        DirectionType::Left,
        DirectionType::Right,
    ];

    /// Unit vector as (d_column, d_row). Rows grow downwards.
    #[inline]
    pub fn offset(self) -> Option<(i64, i64)> {
        match self {
            DirectionType::None => None,
            DirectionType::Up => Some((0, -1)),
            DirectionType::Down => Some((0, 1)),
            DirectionType::Left => Some((-1, 0)),
            DirectionType::Right => Some((1, 0)),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u" | "up" => Some(DirectionType::Up),
            "d" | "down" => Some(DirectionType::Down),
            "l" | "left" => Some(DirectionType::Left),
            "r" | "right" => Some(DirectionType::Right),
            "n" | "none" | "." => Some(DirectionType::None),
            _ => None,
        }
    }

    /// Parses a compact move script such as `"ddrru"`; unknown letters are skipped.
    pub fn parse_script(s: &str) -> Vec<Self> {
        s.chars()
            .filter_map(|c| Self::parse(&c.to_string()))
            .collect()
    }

    pub fn glyph(self) -> char {
        match self {
            DirectionType::None => '.',
            DirectionType::Up => '^',
            DirectionType::Down => 'v',
            DirectionType::Left => '<',
            DirectionType::Right => '>',
        }
    }
}
