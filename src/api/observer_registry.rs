use crate::core::SlideTransition;
use crate::error::{CarouselError, CarouselResult};
use crate::extensions::{IndicatorSnapshot, SlideObserver};
use crate::render::RenderSync;

use super::CarouselEngine;

impl<R: RenderSync> CarouselEngine<R> {
    /// Registers a slide observer with a unique identifier.
    ///
    /// The observer immediately receives the collection size and active slide.
    pub fn register_observer(&mut self, mut observer: Box<dyn SlideObserver>) -> CarouselResult<()> {
        self.ensure_active()?;
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(CarouselError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.core.runtime.observers.contains_key(&observer_id) {
            return Err(CarouselError::InvalidData(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        observer.on_slides_reset(self.core.model.slides.len(), self.core.model.current_index());
        self.core.runtime.observers.insert(observer_id, observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        self.core
            .runtime
            .observers
            .shift_remove(observer_id)
            .is_some()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.core.runtime.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.core.runtime.observers.contains_key(observer_id)
    }

    /// Marker state of every observer that draws one, in registration order.
    #[must_use]
    pub fn indicator_snapshots(&self) -> Vec<IndicatorSnapshot> {
        self.core
            .runtime
            .observers
            .values()
            .filter_map(|observer| observer.indicator_snapshot())
            .collect()
    }

    pub(super) fn notify_slide_observers(&mut self, transition: SlideTransition) {
        for observer in self.core.runtime.observers.values_mut() {
            observer.on_slide_changed(transition);
        }
    }
}
