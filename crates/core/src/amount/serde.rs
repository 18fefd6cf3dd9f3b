//! String codec for [`CurrencyAmount`].
//!
//! Amounts travel as plain decimal strings (`"12.34"`, `"0"`), never as
//! JSON numbers, so no reader can round-trip them through a binary float.
//! Decoding reuses the [`FromStr`](std::str::FromStr) grammar: a
//! symbol-bearing or otherwise malformed string is a hard error, never a
//! silent default.

use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use super::CurrencyAmount;

impl Serialize for CurrencyAmount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CurrencyAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::from_str(&value).map_err(de::Error::custom)
    }
}
