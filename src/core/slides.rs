use serde::{Deserialize, Serialize};

use crate::core::types::Size;
use crate::error::{CarouselError, CarouselResult};

/// One image entry of the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub source: String,
    pub loaded: bool,
}

impl Slide {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            loaded: false,
        }
    }

    /// Last path segment of the source without its extension.
    #[must_use]
    pub fn caption(&self) -> &str {
        filename_without_extension(&self.source)
    }
}

#[must_use]
pub fn filename_without_extension(source: &str) -> &str {
    let filename = source.rsplit('/').next().unwrap_or(source);
    filename.split('.').next().unwrap_or(filename)
}

/// Ordered slide descriptors plus the measured size of loaded images.
///
/// Insertion order is display order. Sources never change after
/// construction; only the loaded state does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideCollection {
    slides: Vec<Slide>,
    image_sizes: Vec<Option<Size>>,
}

impl SlideCollection {
    #[must_use]
    pub fn from_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slides: Vec<Slide> = sources.into_iter().map(Slide::new).collect();
        let image_sizes = vec![None; slides.len()];
        Self {
            slides,
            image_sizes,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Measured on-screen image size, present once the slide has loaded.
    #[must_use]
    pub fn image_size(&self, index: usize) -> Option<Size> {
        self.image_sizes.get(index).copied().flatten()
    }

    /// Marks a slide loaded and stores its on-screen size at scale 1.
    ///
    /// Calling this again for a loaded slide updates the measured size.
    pub fn mark_loaded(&mut self, index: usize, image_size: Size) -> CarouselResult<()> {
        if !image_size.is_valid() {
            return Err(CarouselError::InvalidData(
                "slide image size must be finite and > 0".to_owned(),
            ));
        }
        let len = self.slides.len();
        let slide = self
            .slides
            .get_mut(index)
            .ok_or(CarouselError::SlideOutOfRange { index, len })?;
        slide.loaded = true;
        self.image_sizes[index] = Some(image_size);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.slides.clear();
        self.image_sizes.clear();
    }
}
