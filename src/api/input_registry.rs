use tracing::{debug, warn};

use crate::error::{CarouselError, CarouselResult};
use crate::interaction::InputSource;
use crate::render::RenderSync;

use super::CarouselEngine;

impl<R: RenderSync> CarouselEngine<R> {
    /// Attaches an input source owned by this instance.
    ///
    /// The source is only stored when `attach` succeeds; it is detached again
    /// by [`Self::detach_input_source`] or [`Self::destroy`].
    pub fn attach_input_source(&mut self, mut source: Box<dyn InputSource>) -> CarouselResult<()> {
        self.ensure_active()?;
        let source_id = source.id().to_owned();
        if source_id.is_empty() {
            return Err(CarouselError::InvalidData(
                "input source id must not be empty".to_owned(),
            ));
        }
        if self.core.runtime.input_sources.contains_key(&source_id) {
            return Err(CarouselError::InvalidData(format!(
                "input source with id `{source_id}` is already attached"
            )));
        }
        if let Err(err) = source.attach() {
            warn!(source = %source_id, error = %err, "input source failed to attach");
            return Err(err);
        }
        debug!(source = %source_id, "input source attached");
        self.core.runtime.input_sources.insert(source_id, source);
        Ok(())
    }

    /// Detaches and drops a source by id. Returns `true` when it was attached.
    pub fn detach_input_source(&mut self, source_id: &str) -> bool {
        match self.core.runtime.input_sources.shift_remove(source_id) {
            Some(mut source) => {
                source.detach();
                debug!(source = %source_id, "input source detached");
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn input_source_count(&self) -> usize {
        self.core.runtime.input_sources.len()
    }
}
