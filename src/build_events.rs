//! Collects the `structure` field of every event emitted while building.

use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

#[derive(Clone, Default)]
struct StructureNames(Arc<Mutex<Vec<String>>>);

struct StructureField(Option<String>);

impl Visit for StructureField {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "structure" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
}

impl<S: Subscriber> Layer<S> for StructureNames {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut field = StructureField(None);
        event.record(&mut field);

        if let Some(name) = field.0 {
            self.0.lock().unwrap().push(name);
        }
    }
}

/// Runs `build` under a recording subscriber and returns the structure
/// names it logged, in order.
pub(crate) fn logged_structures<F: FnOnce()>(build: F) -> Vec<String> {
    let names = StructureNames::default();
    let subscriber = tracing_subscriber::registry().with(names.clone());

    tracing::subscriber::with_default(subscriber, build);

    let logged = names.0.lock().unwrap().clone();
    logged
}
