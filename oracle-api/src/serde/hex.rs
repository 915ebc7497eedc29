use serde::Deserialize;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    let s = String::deserialize(deserializer)?;
    hex::decode(s.trim()).map_err(de::Error::custom)
}

pub fn serialize<S: Serializer>(v: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(v))
}
