use std::time::Duration;

use carousel_rs::CarouselError;
use carousel_rs::api::{CarouselConfig, CarouselEngine, TransitionEffect};
use carousel_rs::core::Viewport;
use carousel_rs::extensions::{ThumbnailAlignment, ThumbnailFitMode};
use carousel_rs::render::NullRenderSync;

#[test]
fn empty_json_object_yields_defaults() {
    let config = CarouselConfig::from_json_str("{}").expect("defaults");
    assert_eq!(config, CarouselConfig::default());
    assert!(config.images.is_empty());
    assert!(!config.autoplay);
    assert_eq!(config.autoplay_interval(), Duration::from_millis(3_000));
    assert!(config.cycle);
    assert_eq!(config.zoom_limits().min_scale, 1.0);
    assert_eq!(config.zoom_limits().max_scale, 4.0);
    assert_eq!(config.swipe_tuning().threshold_px, 50.0);
    assert_eq!(config.swipe_tuning().cooldown, Duration::from_millis(250));
    assert_eq!(config.wheel_debounce(), Duration::from_millis(16));
    assert!(config.show_controls);
    assert!(config.show_thumbnails);
    assert!(!config.show_bullets);
    assert_eq!(config.transition_effect, TransitionEffect::Fade);
}

#[test]
fn json_keys_use_widget_option_names() {
    let config = CarouselConfig::from_json_str(
        r#"{
            "images": ["https://cdn.example/one.jpg", "two.png"],
            "autoplay": true,
            "autoplayInterval": 1500,
            "cycle": false,
            "maxScale": 3.0,
            "zoomStep": 0.25,
            "showBullets": true,
            "showFilenames": true,
            "transitionEffect": "slide",
            "thumbnailFitMode": "fit",
            "thumbnailAlignment": "space-between"
        }"#,
    )
    .expect("config");

    assert_eq!(config.images.len(), 2);
    assert!(config.autoplay);
    assert_eq!(config.autoplay_interval_ms, 1_500);
    assert!(!config.cycle);
    assert_eq!(config.max_scale, 3.0);
    assert_eq!(config.zoom_step, 0.25);
    assert!(config.show_bullets);
    assert!(config.show_filenames);
    assert_eq!(config.transition_effect, TransitionEffect::Slide);
    assert_eq!(config.thumbnail_fit_mode, ThumbnailFitMode::Fit);
    assert_eq!(config.thumbnail_alignment, ThumbnailAlignment::SpaceBetween);
}

#[test]
fn wrongly_typed_options_are_rejected() {
    for input in [
        r#"{"images": "one.jpg"}"#,
        r#"{"images": [1, 2]}"#,
        r#"{"autoplay": "yes"}"#,
        r#"{"cycle": 1}"#,
        r#"{"autoplayInterval": -5}"#,
        r#"{"transitionEffect": "zoom"}"#,
        "not json",
    ] {
        let err = CarouselConfig::from_json_str(input).expect_err(input);
        assert!(
            matches!(err, CarouselError::InvalidConfig(_)),
            "unexpected error for {input}: {err:?}"
        );
    }
}

#[test]
fn semantically_invalid_options_are_rejected() {
    for input in [
        r#"{"autoplayInterval": 0}"#,
        r#"{"minScale": 0}"#,
        r#"{"minScale": 2, "maxScale": 1.5}"#,
        r#"{"zoomStep": 0}"#,
        r#"{"zoomStep": 1.5}"#,
        r#"{"swipeMinVelocity": -1}"#,
    ] {
        let err = CarouselConfig::from_json_str(input).expect_err(input);
        assert!(matches!(err, CarouselError::InvalidConfig(_)), "{input}");
    }
}

#[test]
fn image_sources_only_need_to_be_strings() {
    let config = CarouselConfig::from_json_str(r#"{"images": ["a.jpg", "", "  "]}"#)
        .expect("string sources");
    assert_eq!(config.images.len(), 3);

    let engine = CarouselEngine::new(
        NullRenderSync::default(),
        Viewport::new(800.0, 600.0),
        config,
    )
    .expect("engine init");
    assert_eq!(engine.slide_count(), 3);
}

#[test]
fn engine_rejects_invalid_config_and_viewport() {
    let bad_config = CarouselConfig::new(["a.jpg"]).with_zoom_step(-0.1);
    let err = CarouselEngine::new(
        NullRenderSync::default(),
        Viewport::new(800.0, 600.0),
        bad_config,
    )
    .err()
    .expect("invalid config");
    assert!(matches!(err, CarouselError::InvalidConfig(_)));

    let err = CarouselEngine::new(
        NullRenderSync::default(),
        Viewport::new(f64::NAN, 600.0),
        CarouselConfig::new(["a.jpg"]),
    )
    .err()
    .expect("invalid viewport");
    assert!(matches!(err, CarouselError::InvalidViewport { .. }));
}

#[test]
fn config_serializes_back_to_option_names() {
    let json = serde_json::to_string(&CarouselConfig::new(["a.jpg"]).with_autoplay(2_000))
        .expect("serialize");
    assert!(json.contains("\"autoplayInterval\":2000"));
    assert!(json.contains("\"showThumbnails\":true"));
    let parsed = CarouselConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed.autoplay_interval_ms, 2_000);
}
