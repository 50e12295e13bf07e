//! Color alphabet, color sets and complete colorings.
//!
//! Colors are indices into a fixed 36-symbol alphabet (`0-9` then `a-z`). A set of colors
//! fits in one `u64` bitset, which keeps neighbor-color collection and distinct-color
//! counting allocation-free.

use std::fmt;

/// The ordered color symbols.
pub const ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h',
    'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Number of available colors.
pub const ALPHABET_LEN: usize = ALPHABET.len();

// ============================================================================
// Color
// ============================================================================

/// A color: an index into [`ALPHABET`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(u8);

impl Color {
    /// Returns the color at `index`, or `None` past the end of the alphabet.
    #[inline]
    pub fn new(index: usize) -> Option<Self> {
        (index < ALPHABET_LEN).then_some(Color(index as u8))
    }

    /// The first color of the alphabet.
    pub const FIRST: Color = Color(0);

    /// Alphabet position.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Display symbol.
    #[inline]
    pub fn symbol(self) -> char {
        ALPHABET[self.index()]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ============================================================================
// ColorSet
// ============================================================================

/// A set of colors stored as a bitset over alphabet positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorSet(u64);

impl ColorSet {
    /// The empty set.
    pub const EMPTY: ColorSet = ColorSet(0);

    /// Mask of every alphabet position.
    const FULL: u64 = (1u64 << ALPHABET_LEN) - 1;

    /// Adds `color`.
    #[inline(always)]
    pub fn insert(&mut self, color: Color) {
        self.0 |= 1u64 << color.index();
    }

    /// Returns whether `color` is present.
    #[inline(always)]
    pub fn contains(self, color: Color) -> bool {
        (self.0 >> color.index()) & 1 != 0
    }

    /// Number of colors in the set.
    #[inline(always)]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set holds no colors.
    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Lowest-index alphabet color not in the set; `None` once all 36 are taken.
    #[inline]
    pub fn first_absent(self) -> Option<Color> {
        let free = !self.0 & Self::FULL;
        if free == 0 {
            None
        } else {
            Some(Color(free.trailing_zeros() as u8))
        }
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut set = ColorSet::EMPTY;
        for c in iter {
            set.insert(c);
        }
        set
    }
}

// ============================================================================
// Coloring
// ============================================================================

/// A complete assignment of one color per vertex, indexed by vertex.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coloring {
    colors: Vec<Color>,
}

impl Coloring {
    /// Wraps a per-vertex color vector.
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Builds a coloring from raw alphabet digits.
    ///
    /// Returns `None` if any digit is outside the alphabet.
    pub fn from_digits(digits: &[u8]) -> Option<Self> {
        digits
            .iter()
            .map(|&d| Color::new(d as usize))
            .collect::<Option<Vec<_>>>()
            .map(Self::new)
    }

    /// Number of colored vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if no vertex is colored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color of vertex `v`.
    #[inline]
    pub fn color(&self, v: usize) -> Color {
        self.colors[v]
    }

    /// All colors in vertex order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The set of colors used.
    pub fn used(&self) -> ColorSet {
        self.colors.iter().copied().collect()
    }

    /// Number of distinct colors used (the chromatic value of this coloring).
    pub fn distinct_colors(&self) -> usize {
        self.used().len()
    }
}

impl fmt::Display for Coloring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.colors {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_symbols_are_distinct() {
        let set: std::collections::HashSet<char> = ALPHABET.iter().copied().collect();
        assert_eq!(set.len(), ALPHABET_LEN);
        assert_eq!(ALPHABET_LEN, 36);
    }

    #[test]
    fn color_bounds() {
        assert_eq!(Color::new(0), Some(Color::FIRST));
        assert_eq!(Color::new(35).map(Color::symbol), Some('z'));
        assert_eq!(Color::new(36), None);
    }

    #[test]
    fn first_absent_skips_taken_colors() {
        let mut set = ColorSet::EMPTY;
        assert_eq!(set.first_absent(), Some(Color::FIRST));
        set.insert(Color::FIRST);
        set.insert(Color::new(1).unwrap());
        set.insert(Color::new(3).unwrap());
        assert_eq!(set.first_absent().map(Color::index), Some(2));
        assert_eq!(set.len(), 3);
        assert!(set.contains(Color::new(3).unwrap()));
        assert!(!set.contains(Color::new(2).unwrap()));
    }

    #[test]
    fn full_set_has_no_absent_color() {
        let set: ColorSet = (0..ALPHABET_LEN).filter_map(Color::new).collect();
        assert_eq!(set.len(), ALPHABET_LEN);
        assert_eq!(set.first_absent(), None);
    }

    #[test]
    fn coloring_counts_distinct_and_displays() {
        let coloring = Coloring::from_digits(&[0, 1, 0, 11, 1]).unwrap();
        assert_eq!(coloring.distinct_colors(), 3);
        assert_eq!(coloring.to_string(), "010b1");
        assert!(Coloring::from_digits(&[0, 36]).is_none());
    }
}
