use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::{DomainError, ImageRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DestinationId {
    Camera,
    CatchLog,
    Reference,
    Settings,
}

impl DestinationId {
    pub const ALL: [DestinationId; 4] = [
        DestinationId::Camera,
        DestinationId::CatchLog,
        DestinationId::Reference,
        DestinationId::Settings,
    ];

    pub const DEFAULT: DestinationId = DestinationId::Reference;

    /// Stable key used wherever a destination crosses an untyped boundary.
    pub fn key(self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::CatchLog => "catch_log",
            Self::Reference => "reference",
            Self::Settings => "settings",
        }
    }
}

impl FromStr for DestinationId {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|id| id.key() == normalized)
            .ok_or_else(|| DomainError::InvalidDestination(value.to_string()))
    }
}

impl Display for DestinationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorGlyph {
    CameraAlt,
    AutoStories,
    Settings,
}

impl VectorGlyph {
    pub fn name(self) -> &'static str {
        match self {
            Self::CameraAlt => "camera_alt",
            Self::AutoStories => "auto_stories",
            Self::Settings => "settings",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationIcon {
    Vector(VectorGlyph),
    Raster(ImageRef),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub id: DestinationId,
    pub label: String,
    pub icon: DestinationIcon,
}

impl Destination {
    pub fn new(id: DestinationId, label: impl Into<String>, icon: DestinationIcon) -> Self {
        Self {
            id,
            label: label.into(),
            icon,
        }
    }
}

/// Ordered, immutable set of destinations offered by the navigation chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationTable {
    entries: Vec<Destination>,
}

impl DestinationTable {
    pub fn new(entries: Vec<Destination>) -> Result<Self, DomainError> {
        if entries.is_empty() {
            return Err(DomainError::EmptyDestinationTable);
        }
        for (index, entry) in entries.iter().enumerate() {
            if entries[..index].iter().any(|earlier| earlier.id == entry.id) {
                return Err(DomainError::DuplicateDestination(entry.id));
            }
        }
        if !entries.iter().any(|entry| entry.id == DestinationId::DEFAULT) {
            return Err(DomainError::MissingDefaultDestination(
                DestinationId::DEFAULT,
            ));
        }
        Ok(Self { entries })
    }

    pub fn standard() -> Self {
        Self {
            entries: vec![
                Destination::new(
                    DestinationId::Camera,
                    "Camera",
                    DestinationIcon::Vector(VectorGlyph::CameraAlt),
                ),
                Destination::new(
                    DestinationId::CatchLog,
                    "Catch Log",
                    DestinationIcon::Vector(VectorGlyph::AutoStories),
                ),
                Destination::new(
                    DestinationId::Reference,
                    "Reference",
                    DestinationIcon::Raster(ImageRef::from_static("reference_icon.png")),
                ),
                Destination::new(
                    DestinationId::Settings,
                    "Settings",
                    DestinationIcon::Vector(VectorGlyph::Settings),
                ),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Destination> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: DestinationId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: DestinationId) -> Option<&Destination> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Resolves an untyped key to a destination present in this table.
    pub fn resolve_key(&self, key: &str) -> Result<DestinationId, DomainError> {
        let id = key.parse::<DestinationId>()?;
        if !self.contains(id) {
            return Err(DomainError::InvalidDestination(key.to_string()));
        }
        Ok(id)
    }
}
