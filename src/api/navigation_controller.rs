use tracing::{debug, trace};

use crate::core::{
    NavigationCause, NavigationDirection, SlideIndex, SlideTransition, advance_slide_index,
    resolve_slide_index,
};
use crate::error::CarouselResult;
use crate::render::RenderSync;

use super::CarouselEngine;

impl<R: RenderSync> CarouselEngine<R> {
    pub fn next(&mut self) -> CarouselResult<Option<SlideTransition>> {
        self.navigate_by(NavigationDirection::Next, NavigationCause::Api)
    }

    pub fn prev(&mut self) -> CarouselResult<Option<SlideTransition>> {
        self.navigate_by(NavigationDirection::Previous, NavigationCause::Api)
    }

    /// Navigates to `index`, wrapping or clamping out-of-range targets
    /// according to the `cycle` option.
    ///
    /// Returns `Ok(None)` while the collection is empty.
    pub fn go_to_slide(&mut self, index: isize) -> CarouselResult<Option<SlideTransition>> {
        self.ensure_active()?;
        let total = self.core.model.slides.len();
        let Some(resolved) = resolve_slide_index(index, total, self.core.config.cycle) else {
            trace!(index, "go_to_slide on empty carousel");
            return Ok(None);
        };
        Ok(Some(self.apply_slide_transition(resolved, NavigationCause::Api)))
    }

    pub(super) fn navigate_by(
        &mut self,
        direction: NavigationDirection,
        cause: NavigationCause,
    ) -> CarouselResult<Option<SlideTransition>> {
        self.ensure_active()?;
        let Some(current) = self.core.model.current_index() else {
            trace!(?direction, "navigation on empty carousel");
            return Ok(None);
        };
        let total = self.core.model.slides.len();
        let resolved = advance_slide_index(current, direction, total, self.core.config.cycle);
        Ok(resolved.map(|resolved| self.apply_slide_transition(resolved, cause)))
    }

    /// Runs one slide change to completion: index update, autoplay reset,
    /// view sync, then zoom reset and target swap.
    pub(super) fn apply_slide_transition(
        &mut self,
        resolved: usize,
        cause: NavigationCause,
    ) -> SlideTransition {
        let index = self
            .core
            .model
            .index
            .map_or_else(|| SlideIndex::new(resolved), |index| index.moved_to(resolved));
        self.core.model.index = Some(index);

        if self.core.runtime.autoplay.is_running() {
            let now = self.now();
            self.core.runtime.autoplay.reset(now);
        }

        let transition = SlideTransition {
            previous: index.previous(),
            current: index.current(),
            cause,
        };
        self.render_sync
            .on_slide_changed(transition.previous, transition.current);
        self.notify_slide_observers(transition);

        self.reset_zoom_for_slide_change();

        debug!(
            previous = transition.previous,
            current = transition.current,
            ?cause,
            "slide changed"
        );
        transition
    }
}
