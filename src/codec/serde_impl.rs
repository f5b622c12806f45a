// ============================================================================
// Serde Support
// Rationals serialize as their default-style string ("3/4", "-2", "1/0")
// ============================================================================

use crate::numeric::{Rational, Word};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<T: Word> Serialize for Rational<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T: Word> Deserialize<'de> for Rational<T> {
    /// Parsing goes through `FromStr`, so the value is reduced on the way in.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}
