use tracing::debug;

use crate::core::{SlideCollection, SlideIndex, Viewport};
use crate::error::CarouselResult;
use crate::extensions::IndicatorStrip;
use crate::interaction::ZoomPanState;
use crate::render::RenderSync;
use crate::scheduling::{Clock, MonotonicClock};

use super::{
    CarouselConfig, CarouselEngine, carousel_model::CarouselModel,
    carousel_runtime::CarouselRuntimeState, engine_core::EngineCore, validation::validate_config,
};

impl<R: RenderSync> CarouselEngine<R> {
    /// Creates an engine driven by the wall clock.
    pub fn new(render_sync: R, viewport: Viewport, config: CarouselConfig) -> CarouselResult<Self> {
        Self::with_clock(render_sync, viewport, config, MonotonicClock::default())
    }

    /// Creates an engine whose timers are polled against `clock`.
    pub fn with_clock(
        render_sync: R,
        viewport: Viewport,
        config: CarouselConfig,
        clock: impl Clock + 'static,
    ) -> CarouselResult<Self> {
        validate_config(&config)?;
        let viewport = viewport.validated()?;

        let slides = SlideCollection::from_sources(config.images.iter().cloned());
        let index = (!slides.is_empty()).then(|| SlideIndex::new(0));
        let model = CarouselModel {
            viewport,
            slides,
            index,
            zoom: ZoomPanState::identity(config.zoom_limits()),
            zoom_target: None,
            controls_visible: false,
            fullscreen: false,
        };
        let runtime = CarouselRuntimeState::from_config(&config);

        let mut engine = Self {
            render_sync,
            clock: Box::new(clock),
            core: EngineCore {
                config,
                model,
                runtime,
            },
        };

        let config = &engine.core.config;
        let thumbnails = config.show_thumbnails.then(|| {
            IndicatorStrip::thumbnails(config.thumbnail_fit_mode, config.thumbnail_alignment)
        });
        let bullets = config.show_bullets.then(IndicatorStrip::bullets);
        for strip in [thumbnails, bullets].into_iter().flatten() {
            engine.register_observer(Box::new(strip))?;
        }

        if engine.core.config.autoplay {
            let now = engine.now();
            engine.core.runtime.autoplay.start(now);
        }

        debug!(
            slides = engine.core.model.slides.len(),
            cycle = engine.core.config.cycle,
            autoplay = engine.core.config.autoplay,
            "carousel initialized"
        );
        Ok(engine)
    }
}
