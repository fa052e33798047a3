use egui::Color32;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Schedule health of a project or task.
///
/// Persisted as the small integer returned by [`Status::code`]. Any code that
/// is not one of the known values reads back as [`Status::OnTime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    OnTime,
    RunningBehind,
    Completed,
}

/// The fixed display color of a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Yellow,
    Red,
    Green,
}

impl StatusColor {
    pub fn color32(self) -> Color32 {
        match self {
            StatusColor::Yellow => Color32::from_rgb(245, 200, 40),
            StatusColor::Red => Color32::from_rgb(230, 70, 60),
            StatusColor::Green => Color32::from_rgb(70, 190, 100),
        }
    }
}

impl Status {
    pub fn all() -> &'static [Status] {
        &[Status::OnTime, Status::RunningBehind, Status::Completed]
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::OnTime => "On Time",
            Status::RunningBehind => "Running Behind",
            Status::Completed => "Completed",
        }
    }

    pub fn color(self) -> StatusColor {
        match self {
            Status::OnTime => StatusColor::Yellow,
            Status::RunningBehind => StatusColor::Red,
            Status::Completed => StatusColor::Green,
        }
    }

    /// Stored integer code for this status.
    pub fn code(self) -> i16 {
        match self {
            Status::OnTime => 0,
            Status::RunningBehind => 1,
            Status::Completed => 2,
        }
    }

    /// Map a stored code back to a status. Unknown codes become `OnTime`.
    pub fn from_stored(code: i64) -> Self {
        match code {
            1 => Status::RunningBehind,
            2 => Status::Completed,
            _ => Status::OnTime,
        }
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i16(self.code())
    }
}

/// Accepts any stored integer, signed or unsigned, of any width.
struct StatusCodeVisitor;

impl<'de> Visitor<'de> for StatusCodeVisitor {
    type Value = Status;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("an integer status code")
    }

    fn visit_i64<E: de::Error>(self, code: i64) -> Result<Status, E> {
        Ok(Status::from_stored(code))
    }

    fn visit_u64<E: de::Error>(self, code: u64) -> Result<Status, E> {
        Ok(i64::try_from(code).map_or(Status::OnTime, Status::from_stored))
    }

    fn visit_i128<E: de::Error>(self, code: i128) -> Result<Status, E> {
        Ok(i64::try_from(code).map_or(Status::OnTime, Status::from_stored))
    }

    fn visit_u128<E: de::Error>(self, code: u128) -> Result<Status, E> {
        Ok(i64::try_from(code).map_or(Status::OnTime, Status::from_stored))
    }

    // Integers wider than u64 reach us as floats.
    fn visit_f64<E: de::Error>(self, code: f64) -> Result<Status, E> {
        if code.fract() == 0.0 && code.abs() <= i64::MAX as f64 {
            Ok(Status::from_stored(code as i64))
        } else {
            Ok(Status::OnTime)
        }
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_i64(StatusCodeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_their_variant() {
        assert_eq!(Status::from_stored(0), Status::OnTime);
        assert_eq!(Status::from_stored(1), Status::RunningBehind);
        assert_eq!(Status::from_stored(2), Status::Completed);
    }

    #[test]
    fn unknown_codes_fall_back_to_on_time() {
        for code in [-1, 3, 7, i16::MAX as i64, i64::MIN, i64::MAX] {
            assert_eq!(Status::from_stored(code), Status::OnTime, "code {code}");
        }
    }

    #[test]
    fn codes_survive_a_store_cycle() {
        for status in Status::all() {
            assert_eq!(Status::from_stored(status.code() as i64), *status);
        }
    }

    #[test]
    fn labels_and_colors_are_fixed() {
        assert_eq!(Status::OnTime.label(), "On Time");
        assert_eq!(Status::RunningBehind.label(), "Running Behind");
        assert_eq!(Status::Completed.label(), "Completed");
        assert_eq!(Status::OnTime.color(), StatusColor::Yellow);
        assert_eq!(Status::RunningBehind.color(), StatusColor::Red);
        assert_eq!(Status::Completed.color(), StatusColor::Green);
    }

    #[test]
    fn serializes_as_integer_code() {
        assert_eq!(serde_json::to_string(&Status::RunningBehind).unwrap(), "1");
        let parsed: Status = serde_json::from_str("42").unwrap();
        assert_eq!(parsed, Status::OnTime);
        let parsed: Status = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, Status::Completed);
    }

    #[test]
    fn out_of_range_stored_integers_read_as_on_time() {
        for raw in [
            "18446744073709551615",
            "9223372036854775808",
            "-9223372036854775808",
            "100000000000000000000000",
        ] {
            let parsed: Status = serde_json::from_str(raw).unwrap();
            assert_eq!(parsed, Status::OnTime, "{raw}");
        }
    }
}
