use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Catalog identifier of an artwork.
/// 作品在目录中的唯一标识
///
/// Stable across page fetches; the selection ledger keys on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(u64);

impl ArtworkId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Display for ArtworkId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ArtworkId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for ArtworkId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artwork_id_display_is_plain_number() {
        let id = ArtworkId::new(27992);
        assert_eq!(format!("{}", id), "27992");
    }

    #[test]
    fn test_artwork_id_from_str() {
        let id: ArtworkId = " 129884 ".parse().unwrap();
        assert_eq!(id.value(), 129884);
        assert!("abc".parse::<ArtworkId>().is_err());
    }

    #[test]
    fn test_artwork_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&ArtworkId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
