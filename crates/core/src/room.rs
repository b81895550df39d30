//! Room catalog seam.
//!
//! The catalog itself (which rooms sit where on each floor) lives outside this
//! workspace; these types describe what it hands to the rest of the system.

use serde::{Deserialize, Serialize};

use crate::constants::FLOOR_RANGE;
use crate::fixture::FixtureRecord;

/// Commercial category of a room. `Service` marks non-bookable spaces (lifts, corridors).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoomType {
    Pvm,
    Premium,
    Standard,
    Service,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pvm => "PVM",
            Self::Premium => "PREMIUM",
            Self::Standard => "STANDARD",
            Self::Service => "SERVICE",
        }
    }
}

impl std::str::FromStr for RoomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PVM" => Ok(Self::Pvm),
            "PREMIUM" => Ok(Self::Premium),
            "STANDARD" => Ok(Self::Standard),
            "SERVICE" => Ok(Self::Service),
            other => Err(format!("unknown room type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BedPosition {
    Top,
    Bottom,
    Left,
    Right,
}

/// A room as provided by the catalog, with fixture fields merged in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Stable identifier; observations are keyed by this
    pub id: String,
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_accessible: Option<bool>,
    /// Display label for service spaces ("PASILLO", "ASCENSOR")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headboard: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bed_position: Option<BedPosition>,
}

impl Room {
    #[must_use]
    pub fn new(floor: u8, number: impl Into<String>, room_type: RoomType) -> Self {
        let number = number.into();
        Self {
            id: room_id(floor, &number),
            number,
            room_type,
            is_accessible: None,
            label: None,
            headboard: None,
            tv: None,
            safe: None,
            bed_position: None,
        }
    }

    /// Overlays the present fields of a fixture record.
    #[must_use]
    pub fn with_fixtures(mut self, fixtures: &FixtureRecord) -> Self {
        if let Some(headboard) = &fixtures.headboard {
            self.headboard = Some(headboard.clone());
        }
        if let Some(tv) = &fixtures.tv {
            self.tv = Some(tv.clone());
        }
        if let Some(safe) = &fixtures.safe {
            self.safe = Some(safe.clone());
        }
        self
    }

    #[must_use]
    pub fn is_service(&self) -> bool {
        self.room_type == RoomType::Service
    }
}

/// Stable room id composed from floor and room number.
#[must_use]
pub fn room_id(floor: u8, number: &str) -> String {
    format!("{floor}-{number}")
}

/// Floor encoded in a room number: every digit but the last two (`"926"` -> 9).
///
/// Returns `None` for non-numeric numbers or floors outside the catalog range.
#[must_use]
pub fn floor_of(number: &str) -> Option<u8> {
    if number.len() < 3 || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let floor: u8 = number[..number.len() - 2].parse().ok()?;
    FLOOR_RANGE.contains(&floor).then_some(floor)
}

/// Rooms of one floor as arranged on the diagram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlan {
    pub top_rooms: Vec<Room>,
    pub left_rooms: Vec<Room>,
    pub right_rooms: Vec<Room>,
}

impl FloorPlan {
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.top_rooms.iter().chain(&self.left_rooms).chain(&self.right_rooms)
    }

    #[must_use]
    pub fn find(&self, number: &str) -> Option<&Room> {
        self.rooms().find(|room| room.number == number)
    }
}

/// Source of floor plans, keyed by floor number.
pub trait RoomCatalog {
    /// Floor plan for `floor`, or `None` outside the served floors.
    fn floor_plan(&self, floor: u8) -> Option<FloorPlan>;
}
