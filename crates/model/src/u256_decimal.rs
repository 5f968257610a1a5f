//! Serialization of [`U256`] amounts as decimal strings.
//!
//! The default serde representation of [`U256`] is hexadecimal; amounts and
//! scores are exchanged as decimal strings instead.

use {
    alloy::primitives::U256,
    serde::{Deserializer, Serializer, de},
    serde_with::{DeserializeAs, SerializeAs},
    std::fmt,
};

pub struct DecimalU256;

impl<'de> DeserializeAs<'de, U256> for DecimalU256 {
    fn deserialize_as<D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize(deserializer)
    }
}

impl SerializeAs<U256> for DecimalU256 {
    fn serialize_as<S>(source: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize(source, serializer)
    }
}

pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    struct Visitor {}
    impl de::Visitor<'_> for Visitor {
        type Value = U256;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            write!(formatter, "a u256 encoded as a decimal encoded string")
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            U256::from_str_radix(s, 10).map_err(|err| {
                de::Error::custom(format!("failed to decode {s:?} as decimal u256: {err}"))
            })
        }
    }

    deserializer.deserialize_str(Visitor {})
}

#[cfg(test)]
mod tests {
    use {super::*, serde::Deserialize, serde_json::json};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Amount(#[serde(with = "super")] U256);

    #[test]
    fn deserializes_decimal_strings() {
        assert_eq!(
            serde_json::from_value::<Amount>(json!("42")).unwrap(),
            Amount(U256::from(42)),
        );
    }

    #[test]
    fn rejects_json_numbers_and_hex() {
        assert!(serde_json::from_value::<Amount>(json!(42)).is_err());
        assert!(serde_json::from_value::<Amount>(json!("0x2a")).is_err());
    }

    #[test]
    fn serializes_as_decimal_string() {
        let mut serialized = Vec::new();
        let mut serializer = serde_json::Serializer::new(&mut serialized);
        serialize(&U256::from(1337), &mut serializer).unwrap();
        assert_eq!(serialized, b"\"1337\"");
    }
}
