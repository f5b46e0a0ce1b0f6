use serde::{Deserialize, Serialize};
use tracing::trace;

/// Fixed event vocabulary published by the tooltip component.
///
/// The tooltip is the only publisher and the series component the only
/// subscriber; a hovered tooltip row highlights the matching series dot
/// and leaving it clears the highlight again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DotEvent {
    Show {
        series_index: usize,
        category_index: usize,
    },
    Hide {
        series_index: usize,
        category_index: usize,
    },
}

/// Subscriber half of the tooltip-to-series wiring.
pub trait DotEventListener {
    fn on_show_dot(&mut self, series_index: usize, category_index: usize);
    fn on_hide_dot(&mut self, series_index: usize, category_index: usize);
}

/// Routes tooltip-origin dot events to a single subscribed listener.
///
/// The route is fixed at chart composition time; dispatch just unpacks the
/// event into the matching listener hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBridge {
    publisher: String,
    subscriber: String,
}

impl EventBridge {
    #[must_use]
    pub fn connect(publisher: &str, subscriber: &str) -> Self {
        Self {
            publisher: publisher.to_owned(),
            subscriber: subscriber.to_owned(),
        }
    }

    #[must_use]
    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    #[must_use]
    pub fn subscriber(&self) -> &str {
        &self.subscriber
    }

    pub fn dispatch(&self, event: DotEvent, listener: &mut dyn DotEventListener) {
        trace!(
            publisher = %self.publisher,
            subscriber = %self.subscriber,
            ?event,
            "dispatching dot event"
        );
        match event {
            DotEvent::Show {
                series_index,
                category_index,
            } => listener.on_show_dot(series_index, category_index),
            DotEvent::Hide {
                series_index,
                category_index,
            } => listener.on_hide_dot(series_index, category_index),
        }
    }
}
