// Lossless serde representation for metric floats
//
// JSON has no infinity or NaN. Finite values are written as numbers and
// non-finite ones as the tokens "inf", "-inf" and "NaN"; both forms are
// accepted when reading back. Use with `#[serde(with = "serde_float")]`.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serializer};

const POS_INF: &str = "inf";
const NEG_INF: &str = "-inf";
const NAN: &str = "NaN";

pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_nan() {
        serializer.serialize_str(NAN)
    } else if *value == f64::INFINITY {
        serializer.serialize_str(POS_INF)
    } else if *value == f64::NEG_INFINITY {
        serializer.serialize_str(NEG_INF)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FloatRepr {
    Number(f64),
    Token(String),
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match FloatRepr::deserialize(deserializer)? {
        FloatRepr::Number(value) => Ok(value),
        FloatRepr::Token(token) => match token.as_str() {
            POS_INF => Ok(f64::INFINITY),
            NEG_INF => Ok(f64::NEG_INFINITY),
            NAN => Ok(f64::NAN),
            other => Err(de::Error::custom(format!(
                "expected a number, \"{}\", \"{}\" or \"{}\", got \"{}\"",
                POS_INF, NEG_INF, NAN, other
            ))),
        },
    }
}
