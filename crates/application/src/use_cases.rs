use neptune_domain::{DestinationId, NavigationState};

#[derive(Debug, Clone, Copy)]
pub struct SelectDestinationCommand {
    pub destination: DestinationId,
}

#[derive(Debug, Clone)]
pub struct SelectByKeyCommand {
    pub key: String,
}

#[derive(Debug, Clone, Default)]
pub struct RestoreNavigationCommand;

#[derive(Debug, Clone, Copy)]
pub struct PersistNavigationCommand {
    pub state: NavigationState,
}

#[derive(Debug, Clone, Default)]
pub struct LoadCatalogCommand;
