use std::cell::RefCell;
use std::rc::Rc;

use carousel_rs::CarouselError;
use carousel_rs::api::{CarouselConfig, CarouselEngine};
use carousel_rs::core::{NavigationCause, SlideTransition, Viewport};
use carousel_rs::extensions::{
    BULLETS_OBSERVER_ID, IndicatorKind, IndicatorSnapshot, SlideObserver, THUMBNAILS_OBSERVER_ID,
    ThumbnailAlignment, ThumbnailFitMode,
};
use carousel_rs::render::NullRenderSync;
use carousel_rs::scheduling::ManualClock;

#[derive(Default)]
struct Recorded {
    resets: Vec<(usize, Option<usize>)>,
    transitions: Vec<SlideTransition>,
}

struct RecordingObserver {
    id: String,
    recorded: Rc<RefCell<Recorded>>,
}

impl RecordingObserver {
    fn new(id: &str) -> (Self, Rc<RefCell<Recorded>>) {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        (
            Self {
                id: id.to_owned(),
                recorded: Rc::clone(&recorded),
            },
            recorded,
        )
    }
}

impl SlideObserver for RecordingObserver {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_slides_reset(&mut self, total: usize, current: Option<usize>) {
        self.recorded.borrow_mut().resets.push((total, current));
    }

    fn on_slide_changed(&mut self, transition: SlideTransition) {
        self.recorded.borrow_mut().transitions.push(transition);
    }
}

fn build_engine(config: CarouselConfig) -> CarouselEngine<NullRenderSync> {
    CarouselEngine::with_clock(
        NullRenderSync::default(),
        Viewport::new(900.0, 600.0),
        config,
        ManualClock::new(),
    )
    .expect("engine init")
}

fn four_slides() -> CarouselConfig {
    CarouselConfig::new(["a.jpg", "b.jpg", "c.jpg", "d.jpg"])
}

#[test]
fn default_config_registers_thumbnail_strip_only() {
    let engine = build_engine(four_slides());
    assert!(engine.has_observer(THUMBNAILS_OBSERVER_ID));
    assert!(!engine.has_observer(BULLETS_OBSERVER_ID));
    assert_eq!(
        engine.indicator_snapshots(),
        vec![IndicatorSnapshot {
            kind: IndicatorKind::Thumbnails {
                fit_mode: ThumbnailFitMode::CropFit,
                alignment: ThumbnailAlignment::SpaceEvenly,
            },
            total: 4,
            active: Some(0),
        }]
    );
}

#[test]
fn indicators_follow_every_transition() {
    let mut engine = build_engine(four_slides().with_indicators(true, true));
    assert_eq!(engine.observer_count(), 2);

    engine.go_to_slide(2).expect("go to");
    engine.prev().expect("prev");
    let actives: Vec<_> = engine
        .indicator_snapshots()
        .into_iter()
        .map(|snapshot| snapshot.active)
        .collect();
    assert_eq!(actives, vec![Some(1), Some(1)]);
}

#[test]
fn disabled_indicators_register_nothing() {
    let engine = build_engine(four_slides().with_indicators(false, false));
    assert_eq!(engine.observer_count(), 0);
    assert!(engine.indicator_snapshots().is_empty());
}

#[test]
fn custom_observer_sees_reset_then_transitions_in_order() {
    let mut engine = build_engine(four_slides().with_indicators(false, false));
    let (observer, recorded) = RecordingObserver::new("audit");
    engine.register_observer(Box::new(observer)).expect("register");

    engine.next().expect("next");
    engine.go_to_slide(-1).expect("go to");

    let recorded = recorded.borrow();
    assert_eq!(recorded.resets, vec![(4, Some(0))]);
    assert_eq!(
        recorded.transitions,
        vec![
            SlideTransition {
                previous: 0,
                current: 1,
                cause: NavigationCause::Api,
            },
            SlideTransition {
                previous: 1,
                current: 3,
                cause: NavigationCause::Api,
            },
        ]
    );
}

#[test]
fn observer_ids_must_be_unique_and_non_empty() {
    let mut engine = build_engine(four_slides());
    let (duplicate, _) = RecordingObserver::new(THUMBNAILS_OBSERVER_ID);
    let err = engine
        .register_observer(Box::new(duplicate))
        .expect_err("duplicate id");
    assert!(matches!(err, CarouselError::InvalidData(_)));

    let (anonymous, _) = RecordingObserver::new("");
    assert!(engine.register_observer(Box::new(anonymous)).is_err());
    assert_eq!(engine.observer_count(), 1);
}

#[test]
fn unregistered_observer_stops_receiving_transitions() {
    let mut engine = build_engine(four_slides());
    let (observer, recorded) = RecordingObserver::new("audit");
    engine.register_observer(Box::new(observer)).expect("register");
    engine.next().expect("next");

    assert!(engine.unregister_observer("audit"));
    assert!(!engine.unregister_observer("audit"));
    engine.next().expect("next");
    assert_eq!(recorded.borrow().transitions.len(), 1);
}

#[test]
fn indicators_on_empty_carousel_have_no_active_entry() {
    let engine = build_engine(CarouselConfig::default().with_indicators(true, true));
    for snapshot in engine.indicator_snapshots() {
        assert_eq!(snapshot.total, 0);
        assert_eq!(snapshot.active, None);
    }
}
