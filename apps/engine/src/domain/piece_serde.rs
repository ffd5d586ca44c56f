//! Serde for pieces, using the same "NAME_COLOR" tokens as `Display`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::pieces::Piece;

impl Serialize for Piece {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Piece {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::custom(format!("Invalid piece: {s}")))
    }
}
