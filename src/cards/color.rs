//! Property colors, set sizes and rent tables.

use serde::{Deserialize, Serialize};

/// A property color group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    DarkBlue,
    Railroad,
    Utility,
}

impl Color {
    /// Every color, in board order.
    pub const ALL: [Color; 10] = [
        Color::Brown,
        Color::LightBlue,
        Color::Pink,
        Color::Orange,
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::DarkBlue,
        Color::Railroad,
        Color::Utility,
    ];

    /// Rent owed for 1, 2, ... cards of this color. The length is the set size.
    #[must_use]
    pub const fn rent_table(self) -> &'static [u32] {
        match self {
            Color::Brown => &[1, 2],
            Color::LightBlue => &[1, 2, 3],
            Color::Pink => &[1, 2, 4],
            Color::Orange => &[1, 3, 5],
            Color::Red => &[2, 3, 6],
            Color::Yellow => &[2, 4, 6],
            Color::Green => &[2, 4, 7],
            Color::DarkBlue => &[3, 8],
            Color::Railroad => &[1, 2, 3, 4],
            Color::Utility => &[1, 2],
        }
    }

    /// Number of cards that make a complete set.
    #[must_use]
    pub const fn set_size(self) -> usize {
        self.rent_table().len()
    }

    /// Rent for `count` cards, capped at a full set. Zero for no cards.
    ///
    /// ```
    /// use monopoly_deal::cards::Color;
    ///
    /// assert_eq!(Color::Green.rent(2), 4);
    /// assert_eq!(Color::DarkBlue.rent(5), 8);
    /// assert_eq!(Color::Brown.rent(0), 0);
    /// ```
    #[must_use]
    pub fn rent(self, count: usize) -> u32 {
        match count {
            0 => 0,
            n => self.rent_table()[n.min(self.set_size()) - 1],
        }
    }

    /// Houses and hotels can be added to complete sets of this color.
    #[must_use]
    pub const fn allows_buildings(self) -> bool {
        !matches!(self, Color::Railroad | Color::Utility)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Brown => "Brown",
            Color::LightBlue => "Light Blue",
            Color::Pink => "Pink",
            Color::Orange => "Orange",
            Color::Red => "Red",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::DarkBlue => "Dark Blue",
            Color::Railroad => "Railroad",
            Color::Utility => "Utility",
        };
        f.write_str(name)
    }
}

/// The colors a wild property or a rent card can stand for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorChoice {
    /// One of exactly two colors.
    Pair(Color, Color),
    /// Any color.
    Any,
}

impl ColorChoice {
    /// Check whether `color` is one of the choices.
    #[must_use]
    pub fn allows(self, color: Color) -> bool {
        match self {
            ColorChoice::Pair(a, b) => color == a || color == b,
            ColorChoice::Any => true,
        }
    }

    /// The allowed colors, in board order for `Any`.
    #[must_use]
    pub fn colors(self) -> Vec<Color> {
        match self {
            ColorChoice::Pair(a, b) => vec![a, b],
            ColorChoice::Any => Color::ALL.to_vec(),
        }
    }

    /// The color a card of this choice takes when no color is specified.
    #[must_use]
    pub fn first(self) -> Color {
        match self {
            ColorChoice::Pair(a, _) => a,
            ColorChoice::Any => Color::ALL[0],
        }
    }
}

impl std::fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorChoice::Pair(a, b) => write!(f, "{}/{}", a, b),
            ColorChoice::Any => f.write_str("Any Color"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_sizes() {
        assert_eq!(Color::Brown.set_size(), 2);
        assert_eq!(Color::DarkBlue.set_size(), 2);
        assert_eq!(Color::Utility.set_size(), 2);
        assert_eq!(Color::Railroad.set_size(), 4);
        for color in [Color::LightBlue, Color::Pink, Color::Orange, Color::Red, Color::Yellow, Color::Green] {
            assert_eq!(color.set_size(), 3, "{}", color);
        }
    }

    #[test]
    fn test_rent_is_capped_at_full_set() {
        assert_eq!(Color::Railroad.rent(1), 1);
        assert_eq!(Color::Railroad.rent(4), 4);
        assert_eq!(Color::Railroad.rent(6), 4);
        assert_eq!(Color::Orange.rent(3), 5);
    }

    #[test]
    fn test_buildings_not_on_railroad_or_utility() {
        assert!(!Color::Railroad.allows_buildings());
        assert!(!Color::Utility.allows_buildings());
        assert!(Color::DarkBlue.allows_buildings());
    }

    #[test]
    fn test_color_choice() {
        let pair = ColorChoice::Pair(Color::Red, Color::Yellow);
        assert!(pair.allows(Color::Yellow));
        assert!(!pair.allows(Color::Green));
        assert_eq!(pair.first(), Color::Red);
        assert_eq!(pair.colors(), vec![Color::Red, Color::Yellow]);

        assert!(ColorChoice::Any.allows(Color::Utility));
        assert_eq!(ColorChoice::Any.colors().len(), 10);
    }

    #[test]
    fn test_display() {
        assert_eq!(ColorChoice::Pair(Color::LightBlue, Color::Brown).to_string(), "Light Blue/Brown");
    }
}
