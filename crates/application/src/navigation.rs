use std::collections::HashMap;

use neptune_domain::{
    DestinationIcon, DestinationId, DestinationTable, DomainError, NavigationState,
};
use tracing::{debug, info};

use crate::{
    ApplicationError, DestinationContent, NavigationStore, PersistNavigationCommand,
    RenderScheduler, RestoreNavigationCommand, SelectByKeyCommand, SelectDestinationCommand,
    ViewDescription,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeItem {
    pub id: DestinationId,
    pub label: String,
    pub icon: DestinationIcon,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRoute {
    Catalog,
    External(ViewDescription),
}

pub struct NavigationController {
    table: DestinationTable,
    contents: HashMap<DestinationId, Box<dyn DestinationContent>>,
    scheduler: Box<dyn RenderScheduler>,
    store: Box<dyn NavigationStore>,
}

impl NavigationController {
    pub fn new(
        table: DestinationTable,
        scheduler: Box<dyn RenderScheduler>,
        store: Box<dyn NavigationStore>,
    ) -> Self {
        Self {
            table,
            contents: HashMap::new(),
            scheduler,
            store,
        }
    }

    pub fn with_content(
        mut self,
        destination: DestinationId,
        content: Box<dyn DestinationContent>,
    ) -> Self {
        self.contents.insert(destination, content);
        self
    }

    pub fn destinations(&self) -> &DestinationTable {
        &self.table
    }

    pub fn initialize(&self) -> NavigationState {
        NavigationState::initial()
    }

    pub fn select_destination(
        &self,
        state: &NavigationState,
        command: SelectDestinationCommand,
    ) -> Result<NavigationState, ApplicationError> {
        let target = command.destination;
        if state.is_selected(target) {
            debug!(destination = %target, "destination already selected");
            return Ok(*state);
        }

        let next = state.select(target, &self.table)?;
        info!(from = %state.selected(), to = %target, "destination selected");
        self.scheduler.request_render(target);
        Ok(next)
    }

    pub fn select_by_key(
        &self,
        state: &NavigationState,
        command: SelectByKeyCommand,
    ) -> Result<NavigationState, ApplicationError> {
        let destination = self.table.resolve_key(&command.key)?;
        self.select_destination(state, SelectDestinationCommand { destination })
    }

    pub fn is_selected(&self, state: &NavigationState, destination: DestinationId) -> bool {
        state.is_selected(destination)
    }

    pub fn chrome(&self, state: &NavigationState) -> Vec<ChromeItem> {
        self.table
            .iter()
            .map(|destination| ChromeItem {
                id: destination.id,
                label: destination.label.clone(),
                icon: destination.icon.clone(),
                selected: state.is_selected(destination.id),
            })
            .collect()
    }

    pub fn route(&self, state: &NavigationState) -> Result<ContentRoute, ApplicationError> {
        let selected = state.selected();
        if !self.table.contains(selected) {
            return Err(DomainError::InvalidDestination(selected.key().to_string()).into());
        }
        if selected == DestinationId::Reference {
            return Ok(ContentRoute::Catalog);
        }
        self.contents
            .get(&selected)
            .map(|content| ContentRoute::External(content.render()))
            .ok_or_else(|| {
                ApplicationError::NotFound(format!("no content registered for {selected}"))
            })
    }

    pub fn restore(
        &self,
        _command: RestoreNavigationCommand,
    ) -> Result<NavigationState, ApplicationError> {
        match self.store.load()? {
            Some(saved) => {
                let state = NavigationState::restore(&saved, &self.table)?;
                debug!(destination = %state.selected(), "navigation restored");
                Ok(state)
            }
            None => Ok(self.initialize()),
        }
    }

    pub fn persist(&self, command: PersistNavigationCommand) -> Result<(), ApplicationError> {
        self.store.save(&command.state.save())
    }
}
