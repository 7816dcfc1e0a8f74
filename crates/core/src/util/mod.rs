pub mod random;

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took at the given level (`Debug` by default),
/// and evaluates to the value of the expression.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

// Serialize an optional biome as its name, with `None` written as the
// "Unexplored" placeholder that the map format uses for ungenerated hexes.
pub mod serde_biome {
    use crate::world::Biome;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    /// Name stored in place of a biome for hexes that haven't been generated
    pub const UNEXPLORED: &str = "Unexplored";

    pub fn serialize<S: Serializer>(
        biome: &Option<Biome>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match biome {
            Some(biome) => biome.serialize(serializer),
            None => serializer.serialize_str(UNEXPLORED),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Biome>, D::Error> {
        let name = String::deserialize(deserializer)?;
        if name == UNEXPLORED {
            Ok(None)
        } else {
            name.parse().map(Some).map_err(|_| {
                de::Error::custom(format!("unknown biome: {}", name))
            })
        }
    }
}
