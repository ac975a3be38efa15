//! Rooms, room types, and subject-room-type preferences.
//!
//! Rooms are the contended resource pool of the assignment layer. Room
//! types classify them (standard classroom, lab, gymnasium) and subjects
//! rank those types through preference rows the scorer consumes.

use serde::{Deserialize, Serialize};

/// A classification of rooms (e.g., "Science Lab", "Gymnasium").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomType {
    /// Unique room type identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Display color.
    pub color: String,
    /// Default capacity for rooms of this type.
    pub default_capacity: u32,
    /// Feature tags rooms of this type typically carry.
    pub features: Vec<String>,
}

/// A physical classroom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique room identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Short code, unique across rooms.
    pub code: String,
    /// Room type. A dangling reference is a data-integrity conflict.
    pub room_type_id: String,
    /// Seating capacity.
    pub capacity: u32,
    /// Building name.
    pub building: String,
    /// Floor number.
    pub floor: i32,
    /// Feature tags (e.g., "Projector", "Whiteboard").
    pub features: Vec<String>,
    /// Equipment items (e.g., "Bunsen burners").
    pub equipment: Vec<String>,
    /// Whether the room is available for assignment.
    pub is_active: bool,
    /// Free-text notes.
    pub notes: String,
}

/// How strongly a subject prefers a room type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreferencePriority {
    /// First choice.
    Preferred,
    /// Acceptable fallback.
    Acceptable,
    /// Last resort.
    LastResort,
}

impl PreferencePriority {
    /// Score contribution of a matching room type: `(4 − priority) × 30`.
    pub fn weight(self) -> i32 {
        match self {
            PreferencePriority::Preferred => 90,
            PreferencePriority::Acceptable => 60,
            PreferencePriority::LastResort => 30,
        }
    }

    /// Label used in scoring explanations.
    pub fn label(self) -> &'static str {
        match self {
            PreferencePriority::Preferred => "preferred",
            PreferencePriority::Acceptable => "acceptable",
            PreferencePriority::LastResort => "last-resort",
        }
    }
}

/// A subject's ranking of a room type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomPreference {
    /// Subject expressing the preference.
    pub subject_id: String,
    /// Room type being ranked.
    pub room_type_id: String,
    /// Preference strength.
    pub priority: PreferencePriority,
    /// Whether the subject requires this room type.
    pub is_required: bool,
}

/// Collection of subject-room-type preference rows.
///
/// Invariant: at most one row per (subject, room type) pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomPreferences {
    preferences: Vec<RoomPreference>,
}

impl RoomType {
    /// Creates a new room type.
    pub fn new(id: impl Into<String>, default_capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            description: String::new(),
            color: String::new(),
            default_capacity,
            features: Vec::new(),
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a feature tag.
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }
}

impl Classroom {
    /// Creates a new active classroom.
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        room_type_id: impl Into<String>,
        capacity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            code: code.into(),
            room_type_id: room_type_id.into(),
            capacity,
            building: String::new(),
            floor: 0,
            features: Vec::new(),
            equipment: Vec::new(),
            is_active: true,
            notes: String::new(),
        }
    }

    /// Sets the room name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, building: impl Into<String>, floor: i32) -> Self {
        self.building = building.into();
        self.floor = floor;
        self
    }

    /// Adds a feature tag.
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    /// Adds an equipment item.
    pub fn with_equipment(mut self, item: impl Into<String>) -> Self {
        self.equipment.push(item.into());
        self
    }

    /// Marks the room inactive (excluded from assignment).
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Sets free-text notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Whether the room carries a feature tag.
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}

impl RoomPreference {
    /// Creates a preference row.
    pub fn new(
        subject_id: impl Into<String>,
        room_type_id: impl Into<String>,
        priority: PreferencePriority,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            room_type_id: room_type_id.into(),
            priority,
            is_required: false,
        }
    }

    /// Marks the room type as required for the subject.
    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }
}

impl RoomPreferences {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the row for (subject, room type).
    pub fn upsert(&mut self, preference: RoomPreference) {
        match self.preferences.iter_mut().find(|p| {
            p.subject_id == preference.subject_id && p.room_type_id == preference.room_type_id
        }) {
            Some(existing) => *existing = preference,
            None => self.preferences.push(preference),
        }
    }

    /// All preference rows for a subject, in insertion order.
    pub fn for_subject(&self, subject_id: &str) -> Vec<RoomPreference> {
        self.preferences
            .iter()
            .filter(|p| p.subject_id == subject_id)
            .cloned()
            .collect()
    }

    /// The row for (subject, room type), if any.
    pub fn get(&self, subject_id: &str, room_type_id: &str) -> Option<&RoomPreference> {
        self.preferences
            .iter()
            .find(|p| p.subject_id == subject_id && p.room_type_id == room_type_id)
    }

    /// Iterates all rows.
    pub fn iter(&self) -> impl Iterator<Item = &RoomPreference> {
        self.preferences.iter()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.preferences.len()
    }

    /// Whether the collection has no rows.
    pub fn is_empty(&self) -> bool {
        self.preferences.is_empty()
    }
}
