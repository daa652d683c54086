use serde::{Deserialize, Serialize};

use crate::{DestinationId, DestinationTable, DomainError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    selected: DestinationId,
}

impl NavigationState {
    pub fn initial() -> Self {
        Self {
            selected: DestinationId::DEFAULT,
        }
    }

    pub fn selected(&self) -> DestinationId {
        self.selected
    }

    pub fn is_selected(&self, id: DestinationId) -> bool {
        self.selected == id
    }

    /// Returns the state with `id` selected. `self` is left untouched on error.
    pub fn select(self, id: DestinationId, table: &DestinationTable) -> Result<Self, DomainError> {
        if !table.contains(id) {
            return Err(DomainError::InvalidDestination(id.key().to_string()));
        }
        Ok(Self { selected: id })
    }

    pub fn save(&self) -> SavedNavigation {
        SavedNavigation {
            selected: self.selected.key().to_string(),
        }
    }

    pub fn restore(saved: &SavedNavigation, table: &DestinationTable) -> Result<Self, DomainError> {
        let selected = table.resolve_key(&saved.selected)?;
        Ok(Self { selected })
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Serialized form of [`NavigationState`] kept across view reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedNavigation {
    pub selected: String,
}
