//! Live annotation of a single rendered field.

use crate::transformer::annotate_field;
use jarb_store::{ConstraintsStore, Subscription};
use jarb_types::{ConstraintMap, FieldDescriptor};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Keeps one field annotated with the latest constraints of an entity.
///
/// The rule is applied as soon as the watcher is created (if constraints are
/// already loaded) and again every time the store's constraints change, until
/// [`detach`](Self::detach) is called.
pub struct FieldWatcher {
    field: Arc<Mutex<FieldDescriptor>>,
    subscription: Subscription,
}

impl FieldWatcher {
    pub fn watch(
        store: &ConstraintsStore,
        entity_name: impl Into<String>,
        field: Arc<Mutex<FieldDescriptor>>,
    ) -> Self {
        let entity_name = entity_name.into();

        // Subscribe before reading the snapshot so a concurrent update is not missed.
        let subscription = store.on_constraints_changed({
            let field = Arc::clone(&field);
            let entity_name = entity_name.clone();
            move |constraints: &Arc<ConstraintMap>| refresh(&field, constraints, &entity_name)
        });
        if let Some(constraints) = store.get_constraints() {
            refresh(&field, &constraints, &entity_name);
        }

        debug!(
            "Watching field {} of {} as {}",
            field.lock().unwrap_or_else(PoisonError::into_inner).key,
            entity_name,
            subscription.id()
        );
        Self {
            field,
            subscription,
        }
    }

    /// The watched field, shared with the renderer.
    pub fn field(&self) -> &Arc<Mutex<FieldDescriptor>> {
        &self.field
    }

    /// A copy of the field as currently annotated.
    pub fn snapshot(&self) -> FieldDescriptor {
        self.field
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Stops following constraint changes; the field keeps its current options.
    pub fn detach(self) -> Arc<Mutex<FieldDescriptor>> {
        self.subscription.deregister();
        self.field
    }
}

fn refresh(field: &Mutex<FieldDescriptor>, constraints: &ConstraintMap, entity_name: &str) {
    if entity_name.is_empty() {
        return;
    }
    let mut field = field.lock().unwrap_or_else(PoisonError::into_inner);
    annotate_field(&mut field, Some(constraints), entity_name);
}
