//! Stable element identifiers.

use rand::Rng;

/// A stable identifier for a generated element (node, edge, bar, city).
///
/// Identifiers never encode position: a bar keeps its id while its value is
/// swapped around, so a renderer can key its primitives on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Id(pub u64);

impl Id {
    /// Draw a fresh random identifier.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen())
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_fixed_width_hex() {
        assert_eq!(Id(0xab).to_string(), "00000000000000ab");
    }
}
