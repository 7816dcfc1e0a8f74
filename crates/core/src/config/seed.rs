use derive_more::Display;
use rand::{distributions::Alphanumeric, Rng};
use serde::{de::Visitor, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Seed for the random stream that drives map generation. Any string works,
/// including the empty string.
///
/// When deserializing, this type supports a few options:
/// - If it's a string, use it as-is
/// - If it's an integer (e.g. an old timestamp-based seed), use its decimal
///   representation
/// - If it's anything else (float, array, etc.), error
///
/// Regardless of how the seed value is input, it will always be serialized
/// as a **string**. `42` and `"42"` are the same seed.
#[derive(Clone, Debug, Display, PartialEq, Eq, Hash)]
pub struct Seed(String);

impl Seed {
    /// Length of seeds made by [Seed::random]
    const RANDOM_LEN: usize = 8;

    /// Generate a new random alphanumeric seed. This is the only place where
    /// non-deterministic randomness is used; the seed itself is then recorded
    /// with the map.
    pub fn random() -> Self {
        let seed = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::RANDOM_LEN)
            .map(char::from)
            .collect();
        Self(seed)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Seed {
    fn from(seed: &str) -> Self {
        Self(seed.into())
    }
}

impl From<String> for Seed {
    fn from(seed: String) -> Self {
        Self(seed)
    }
}

impl From<u64> for Seed {
    fn from(seed: u64) -> Self {
        Self(seed.to_string())
    }
}

impl Serialize for Seed {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

// Custom deserialization to handle both int and string input
impl<'de> Deserialize<'de> for Seed {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        // We can deserialize from a bunch of different types so we can't give
        // a type hint here
        deserializer.deserialize_any(SeedVisitor)
    }
}

/// Macro to make it easier to implement visit logic for different types
macro_rules! impl_visit {
    ($fname:ident, $type:ty) => {
        fn $fname<E>(self, value: $type) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Seed(value.to_string()))
        }
    };
}

struct SeedVisitor;

impl<'de> Visitor<'de> for SeedVisitor {
    type Value = Seed;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or string")
    }

    // yay for metaprogramming
    impl_visit!(visit_u8, u8);
    impl_visit!(visit_u16, u16);
    impl_visit!(visit_u32, u32);
    impl_visit!(visit_u64, u64);
    impl_visit!(visit_i8, i8);
    impl_visit!(visit_i16, i16);
    impl_visit!(visit_i32, i32);
    impl_visit!(visit_i64, i64);

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(value.into())
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{
        assert_de_tokens, assert_de_tokens_error, assert_ser_tokens,
        assert_tokens, Token,
    };

    #[test]
    fn test_random() {
        let seed = Seed::random();
        assert_eq!(seed.as_str().len(), 8);
        assert!(seed.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    /// Test serialization of seeds
    #[test]
    fn test_serialize() {
        assert_tokens(&Seed::from("test"), &[Token::Str("test")]);
        assert_tokens(&Seed::from(""), &[Token::Str("")]);
        // Ints get stringified
        assert_ser_tokens(
            &Seed::from(1_700_000_000_000u64),
            &[Token::Str("1700000000000")],
        );
    }

    /// Test deserialization of seeds
    #[test]
    fn test_deserialize() {
        assert_de_tokens(
            &Seed::from("Default Map"),
            &[Token::String("Default Map")],
        );
        // Int -> same seed as its decimal string
        assert_de_tokens(
            &Seed::from("1700000000000"),
            &[Token::U64(1_700_000_000_000)],
        );
        assert_de_tokens(&Seed::from("-1"), &[Token::I32(-1)]);

        // Invalid input type -> error
        assert_de_tokens_error::<Seed>(
            &[Token::Bool(false)],
            "invalid type: boolean `false`, expected an integer or string",
        );
    }
}
