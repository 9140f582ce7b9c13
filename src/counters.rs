// Room and guest counters for the booking form
// Every transition returns a new snapshot; decrement never goes below the field's floor

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CountError {
    #[error("{field} must be at least {floor}, got {value}")]
    BelowFloor {
        field: CounterField,
        floor: u32,
        value: u32,
    },

    #[error("Unknown counter field: {0}")]
    UnknownField(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterField {
    Rooms,
    Adults,
    Children,
}

impl CounterField {
    pub const ALL: [CounterField; 3] = [
        CounterField::Rooms,
        CounterField::Adults,
        CounterField::Children,
    ];

    // Minimum permitted value
    pub fn floor(self) -> u32 {
        match self {
            CounterField::Rooms | CounterField::Adults => 1,
            CounterField::Children => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CounterField::Rooms => "rooms",
            CounterField::Adults => "adults",
            CounterField::Children => "children",
        }
    }
}

impl fmt::Display for CounterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CounterField {
    type Err = CountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rooms" => Ok(CounterField::Rooms),
            "adults" => Ok(CounterField::Adults),
            "children" => Ok(CounterField::Children),
            other => Err(CountError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Deserialize)]
struct RawGuestCounts {
    rooms: u32,
    adults: u32,
    children: u32,
}

/// Rooms, adults and children requested for a stay.
///
/// Fields are private so the floors (`rooms >= 1`, `adults >= 1`) cannot be
/// bypassed; deserialization goes through the same check as [`GuestCounts::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGuestCounts")]
pub struct GuestCounts {
    rooms: u32,
    adults: u32,
    children: u32,
}

impl Default for GuestCounts {
    fn default() -> Self {
        Self {
            rooms: CounterField::Rooms.floor(),
            adults: CounterField::Adults.floor(),
            children: CounterField::Children.floor(),
        }
    }
}

impl TryFrom<RawGuestCounts> for GuestCounts {
    type Error = CountError;

    fn try_from(raw: RawGuestCounts) -> Result<Self, Self::Error> {
        GuestCounts::new(raw.rooms, raw.adults, raw.children)
    }
}

impl GuestCounts {
    pub fn new(rooms: u32, adults: u32, children: u32) -> Result<Self, CountError> {
        let counts = Self {
            rooms,
            adults,
            children,
        };
        for field in CounterField::ALL {
            let value = counts.get(field);
            if value < field.floor() {
                return Err(CountError::BelowFloor {
                    field,
                    floor: field.floor(),
                    value,
                });
            }
        }
        Ok(counts)
    }

    pub fn rooms(&self) -> u32 {
        self.rooms
    }

    pub fn adults(&self) -> u32 {
        self.adults
    }

    pub fn children(&self) -> u32 {
        self.children
    }

    pub fn get(&self, field: CounterField) -> u32 {
        match field {
            CounterField::Rooms => self.rooms,
            CounterField::Adults => self.adults,
            CounterField::Children => self.children,
        }
    }

    // Adults plus children, widened so it cannot overflow
    pub fn total_guests(&self) -> u64 {
        u64::from(self.adults) + u64::from(self.children)
    }

    pub fn increment(self, field: CounterField) -> Self {
        let value = self.get(field).saturating_add(1);
        self.with_value(field, value)
    }

    pub fn decrement(self, field: CounterField) -> Self {
        let value = self.get(field).saturating_sub(1).max(field.floor());
        self.with_value(field, value)
    }

    fn with_value(mut self, field: CounterField, value: u32) -> Self {
        match field {
            CounterField::Rooms => self.rooms = value,
            CounterField::Adults => self.adults = value,
            CounterField::Children => self.children = value,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_default_counts_sit_at_floor() {
        let counts = GuestCounts::default();
        assert_eq!(counts.rooms(), 1);
        assert_eq!(counts.adults(), 1);
        assert_eq!(counts.children(), 0);
    }

    #[test_case(0, 1, 0, CounterField::Rooms; "#1 zero rooms")]
    #[test_case(1, 0, 2, CounterField::Adults; "#2 zero adults")]
    fn test_new_rejects_below_floor(rooms: u32, adults: u32, children: u32, field: CounterField) {
        let err = GuestCounts::new(rooms, adults, children).unwrap_err();
        assert_eq!(
            err,
            CountError::BelowFloor {
                field,
                floor: 1,
                value: 0
            }
        );
    }

    #[test_case(CounterField::Rooms; "#1 rooms")]
    #[test_case(CounterField::Adults; "#2 adults")]
    #[test_case(CounterField::Children; "#3 children")]
    fn test_decrement_is_idempotent_at_floor(field: CounterField) {
        let mut counts = GuestCounts::default();
        for _ in 0..5 {
            counts = counts.decrement(field);
            assert_eq!(counts.get(field), field.floor());
        }
    }

    #[test]
    fn test_repeated_adult_decrement_stays_at_one() {
        let mut counts = GuestCounts::new(1, 1, 0).unwrap();
        for _ in 0..5 {
            counts = counts.decrement(CounterField::Adults);
            assert_eq!(counts.adults(), 1);
        }
    }

    #[test_case(CounterField::Rooms; "#1 rooms")]
    #[test_case(CounterField::Adults; "#2 adults")]
    #[test_case(CounterField::Children; "#3 children")]
    fn test_increment_adds_exactly_one(field: CounterField) {
        let mut counts = GuestCounts::new(3, 4, 5).unwrap();
        for _ in 0..50 {
            let before = counts.get(field);
            counts = counts.increment(field);
            assert_eq!(counts.get(field), before + 1);
        }
    }

    #[test]
    fn test_increment_leaves_other_fields_alone() {
        let counts = GuestCounts::new(2, 2, 1)
            .unwrap()
            .increment(CounterField::Children);
        assert_eq!(counts.rooms(), 2);
        assert_eq!(counts.adults(), 2);
        assert_eq!(counts.children(), 2);
    }

    #[test]
    fn test_decrement_above_floor() {
        let counts = GuestCounts::new(3, 2, 2)
            .unwrap()
            .decrement(CounterField::Rooms)
            .decrement(CounterField::Children);
        assert_eq!(counts.rooms(), 2);
        assert_eq!(counts.children(), 1);
    }

    #[test]
    fn test_total_guests() {
        let counts = GuestCounts::new(1, 2, 1).unwrap();
        assert_eq!(counts.total_guests(), 3);

        let big = GuestCounts::new(1, u32::MAX, u32::MAX).unwrap();
        assert_eq!(big.total_guests(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!("rooms".parse::<CounterField>().unwrap(), CounterField::Rooms);
        assert_eq!(
            "children".parse::<CounterField>().unwrap(),
            CounterField::Children
        );
        assert!(matches!(
            "pets".parse::<CounterField>(),
            Err(CountError::UnknownField(_))
        ));
    }

    #[test]
    fn test_deserialize_enforces_floor() {
        let ok: GuestCounts =
            serde_json::from_str(r#"{"rooms":2,"adults":3,"children":0}"#).unwrap();
        assert_eq!(ok, GuestCounts::new(2, 3, 0).unwrap());

        let bad = serde_json::from_str::<GuestCounts>(r#"{"rooms":0,"adults":3,"children":0}"#);
        assert!(bad.is_err());
    }
}
