//! The eight orientations a Hilbert cell can take.

use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

/// Direction the curve opens towards, and the side it is entered from.
///
/// `UpLeft` is the "∪" shape: entered at the upper left quadrant, it runs down
/// and across before exiting at the upper right. The orientation of a
/// cell decides both the rank of each quadrant along the curve and the
/// orientation handed to each child cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Opens up, entered from the left.
    #[default]
    UpLeft,
    /// Opens up, entered from the right.
    UpRight,
    /// Opens down, entered from the left.
    DownLeft,
    /// Opens down, entered from the right.
    DownRight,
    /// Opens left, entered from the top.
    LeftTop,
    /// Opens left, entered from the bottom.
    LeftBottom,
    /// Opens right, entered from the top.
    RightTop,
    /// Opens right, entered from the bottom.
    RightBottom,
}

impl Orientation {
    /// Every orientation, in table row order.
    pub const ALL: [Self; 8] = [
        Self::UpLeft,
        Self::UpRight,
        Self::DownLeft,
        Self::DownRight,
        Self::LeftTop,
        Self::LeftBottom,
        Self::RightTop,
        Self::RightBottom,
    ];

    /// Row of this orientation in the lookup tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Kebab-case name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::UpLeft => "up-left",
            Self::UpRight => "up-right",
            Self::DownLeft => "down-left",
            Self::DownRight => "down-right",
            Self::LeftTop => "left-top",
            Self::LeftBottom => "left-bottom",
            Self::RightTop => "right-top",
            Self::RightBottom => "right-bottom",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = Error;

    /// Accepts kebab-case, snake_case or CamelCase names in any letter case.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|o| o.name().replace('-', "") == key)
            .ok_or_else(|| Error::UnknownOrientation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_all() {
        for (i, o) in Orientation::ALL.iter().enumerate() {
            assert_eq!(o.index(), i);
        }
    }

    #[test]
    fn parse() -> Result<()> {
        assert_eq!("up-left".parse::<Orientation>()?, Orientation::UpLeft);
        assert_eq!("RightBottom".parse::<Orientation>()?, Orientation::RightBottom);
        assert_eq!("left_top".parse::<Orientation>()?, Orientation::LeftTop);
        assert!(matches!(
            "sideways".parse::<Orientation>(),
            Err(Error::UnknownOrientation(_))
        ));
        for o in Orientation::ALL {
            assert_eq!(o.to_string().parse::<Orientation>()?, o);
        }
        Ok(())
    }
}
