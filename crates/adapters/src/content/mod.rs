use neptune_application::{DestinationContent, ViewDescription};
use neptune_domain::DestinationId;

/// Static label standing in for a destination that has no screen of its own yet.
#[derive(Debug, Clone)]
pub struct PlaceholderContent {
    heading: String,
    body: String,
}

impl PlaceholderContent {
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
        }
    }

    pub fn for_destination(destination: DestinationId) -> Option<Self> {
        let (heading, body) = match destination {
            DestinationId::Camera => ("Camera", "Point the camera at your catch to identify it."),
            DestinationId::CatchLog => ("Catch Log", "Your logged catches will appear here."),
            DestinationId::Settings => ("Settings", "Nothing to configure yet."),
            DestinationId::Reference => return None,
        };
        Some(Self::new(heading, body))
    }
}

impl DestinationContent for PlaceholderContent {
    fn render(&self) -> ViewDescription {
        ViewDescription {
            heading: self.heading.clone(),
            body: self.body.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_non_catalog_destination_has_placeholder() {
        for destination in DestinationId::ALL {
            let content = PlaceholderContent::for_destination(destination);
            assert_eq!(content.is_none(), destination == DestinationId::Reference);
        }
        let view = PlaceholderContent::for_destination(DestinationId::CatchLog)
            .expect("catch log")
            .render();
        assert_eq!(view.heading, "Catch Log");
    }
}
