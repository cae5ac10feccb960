use serde::{Deserialize, Serialize};

use crate::core::SlideTransition;

use super::SlideObserver;

pub const THUMBNAILS_OBSERVER_ID: &str = "thumbnails";
pub const BULLETS_OBSERVER_ID: &str = "bullets";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThumbnailFitMode {
    /// Thumbnail image covers its cell.
    #[default]
    CropFit,
    /// Thumbnail image is contained in its cell.
    Fit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThumbnailAlignment {
    Left,
    Center,
    Right,
    #[default]
    SpaceEvenly,
    SpaceBetween,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorKind {
    Thumbnails {
        fit_mode: ThumbnailFitMode,
        alignment: ThumbnailAlignment,
    },
    Bullets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub kind: IndicatorKind,
    pub total: usize,
    pub active: Option<usize>,
}

/// Row of per-slide markers (thumbnails or bullets) with one active entry.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorStrip {
    id: String,
    kind: IndicatorKind,
    total: usize,
    active: Option<usize>,
}

impl IndicatorStrip {
    #[must_use]
    pub fn new(id: impl Into<String>, kind: IndicatorKind) -> Self {
        Self {
            id: id.into(),
            kind,
            total: 0,
            active: None,
        }
    }

    #[must_use]
    pub fn thumbnails(fit_mode: ThumbnailFitMode, alignment: ThumbnailAlignment) -> Self {
        Self::new(
            THUMBNAILS_OBSERVER_ID,
            IndicatorKind::Thumbnails {
                fit_mode,
                alignment,
            },
        )
    }

    #[must_use]
    pub fn bullets() -> Self {
        Self::new(BULLETS_OBSERVER_ID, IndicatorKind::Bullets)
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }
}

impl SlideObserver for IndicatorStrip {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_slides_reset(&mut self, total: usize, current: Option<usize>) {
        self.total = total;
        self.active = current.filter(|index| *index < total);
    }

    fn on_slide_changed(&mut self, transition: SlideTransition) {
        if transition.current < self.total {
            self.active = Some(transition.current);
        }
    }

    fn indicator_snapshot(&self) -> Option<IndicatorSnapshot> {
        Some(IndicatorSnapshot {
            kind: self.kind,
            total: self.total,
            active: self.active,
        })
    }
}
