pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// serializer writes naive utc timestamps in DATE_FMT and reads them back from the same format
pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time.format(DATE_FMT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)
    }
}
