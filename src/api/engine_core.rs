use super::{CarouselConfig, carousel_model::CarouselModel, carousel_runtime::CarouselRuntimeState};

/// Internal engine core state used by the public facade (`CarouselEngine`).
pub(super) struct EngineCore {
    pub(super) config: CarouselConfig,
    pub(super) model: CarouselModel,
    pub(super) runtime: CarouselRuntimeState,
}
