use std::cell::RefCell;
use std::rc::Rc;

use carousel_rs::api::{CarouselConfig, CarouselEngine};
use carousel_rs::core::{Size, Viewport};
use carousel_rs::interaction::{ControlAction, InputEvent, InputSource};
use carousel_rs::render::NullRenderSync;
use carousel_rs::scheduling::ManualClock;
use carousel_rs::{CarouselError, CarouselResult};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct SourceLog {
    attached: usize,
    detached: usize,
}

struct FakeSource {
    id: &'static str,
    fail_attach: bool,
    log: Rc<RefCell<SourceLog>>,
}

impl FakeSource {
    fn boxed(id: &'static str, log: &Rc<RefCell<SourceLog>>) -> Box<dyn InputSource> {
        Box::new(Self {
            id,
            fail_attach: false,
            log: Rc::clone(log),
        })
    }
}

impl InputSource for FakeSource {
    fn id(&self) -> &str {
        self.id
    }

    fn attach(&mut self) -> CarouselResult<()> {
        if self.fail_attach {
            return Err(CarouselError::InvalidData(format!(
                "{} has no event target",
                self.id
            )));
        }
        self.log.borrow_mut().attached += 1;
        Ok(())
    }

    fn detach(&mut self) {
        self.log.borrow_mut().detached += 1;
    }
}

fn build_engine(config: CarouselConfig) -> (CarouselEngine<NullRenderSync>, ManualClock) {
    let clock = ManualClock::new();
    let engine = CarouselEngine::with_clock(
        NullRenderSync::default(),
        Viewport::new(800.0, 450.0),
        config,
        clock.clone(),
    )
    .expect("engine init");
    (engine, clock)
}

fn three_slides() -> CarouselConfig {
    CarouselConfig::new(["x/1.jpg", "x/2.jpg", "x/3.jpg"])
}

#[test]
fn destroy_detaches_every_attached_source() {
    let (mut engine, _clock) = build_engine(three_slides());
    let log = Rc::new(RefCell::new(SourceLog::default()));
    engine
        .attach_input_source(FakeSource::boxed("pointer", &log))
        .expect("attach");
    engine
        .attach_input_source(FakeSource::boxed("keyboard", &log))
        .expect("attach");
    assert_eq!(engine.input_source_count(), 2);

    engine.destroy();
    assert_eq!(
        *log.borrow(),
        SourceLog {
            attached: 2,
            detached: 2,
        }
    );
    assert_eq!(engine.input_source_count(), 0);
}

#[test]
fn two_instances_own_their_sources_independently() {
    let (mut first, _) = build_engine(three_slides());
    let (mut second, _) = build_engine(three_slides());
    let first_log = Rc::new(RefCell::new(SourceLog::default()));
    let second_log = Rc::new(RefCell::new(SourceLog::default()));
    first
        .attach_input_source(FakeSource::boxed("keyboard", &first_log))
        .expect("attach");
    second
        .attach_input_source(FakeSource::boxed("keyboard", &second_log))
        .expect("attach");

    first.destroy();
    assert_eq!(first_log.borrow().detached, 1);
    assert_eq!(second_log.borrow().detached, 0);
    assert_eq!(second.input_source_count(), 1);
    second.next().expect("next");
}

#[test]
fn failed_attach_is_reported_and_not_stored() {
    let (mut engine, _clock) = build_engine(three_slides());
    let log = Rc::new(RefCell::new(SourceLog::default()));
    let failing = Box::new(FakeSource {
        id: "touch",
        fail_attach: true,
        log: Rc::clone(&log),
    });
    assert!(matches!(
        engine.attach_input_source(failing),
        Err(CarouselError::InvalidData(_))
    ));
    assert_eq!(engine.input_source_count(), 0);

    engine.destroy();
    assert_eq!(*log.borrow(), SourceLog::default());
}

#[test]
fn duplicate_source_ids_are_rejected_without_attaching() {
    let (mut engine, _clock) = build_engine(three_slides());
    let log = Rc::new(RefCell::new(SourceLog::default()));
    engine
        .attach_input_source(FakeSource::boxed("wheel", &log))
        .expect("attach");
    assert!(
        engine
            .attach_input_source(FakeSource::boxed("wheel", &log))
            .is_err()
    );
    assert_eq!(log.borrow().attached, 1);

    assert!(engine.detach_input_source("wheel"));
    assert!(!engine.detach_input_source("wheel"));
    assert_eq!(log.borrow().detached, 1);
}

#[test]
fn no_timer_fires_after_destroy() {
    let (mut engine, clock) = build_engine(three_slides().with_autoplay(1_000));
    engine
        .mark_slide_loaded(0, Size::new(800.0, 450.0))
        .expect("loaded");
    engine
        .handle_input(InputEvent::Wheel { delta_y: -1.0 })
        .expect("wheel");
    engine.handle_input(InputEvent::TouchEnd).expect("touch");

    engine.destroy();
    let sync_before = engine.render_sync().clone();
    clock.advance_ms(60_000);

    assert_eq!(engine.tick(), Err(CarouselError::Destroyed));
    assert_eq!(engine.render_sync(), &sync_before);
    assert!(!engine.is_autoplay_running());
}

#[test]
fn every_operation_reports_destroyed_after_teardown() {
    let (mut engine, _clock) = build_engine(three_slides());
    engine.destroy();
    assert!(engine.is_destroyed());

    assert_eq!(engine.prev(), Err(CarouselError::Destroyed));
    assert_eq!(engine.zoom_in(), Err(CarouselError::Destroyed));
    assert_eq!(engine.pan_by(1.0, 1.0), Err(CarouselError::Destroyed));
    assert_eq!(engine.reset_zoom(), Err(CarouselError::Destroyed));
    assert_eq!(engine.start_autoplay(), Err(CarouselError::Destroyed));
    assert_eq!(
        engine.resize(Viewport::new(10.0, 10.0)),
        Err(CarouselError::Destroyed)
    );
    assert_eq!(
        engine.handle_input(InputEvent::PointerUp),
        Err(CarouselError::Destroyed)
    );
    assert_eq!(
        engine.press_control(ControlAction::Next),
        Err(CarouselError::Destroyed)
    );
    assert!(engine.snapshot().is_err());

    let log = Rc::new(RefCell::new(SourceLog::default()));
    assert_eq!(
        engine.attach_input_source(FakeSource::boxed("late", &log)),
        Err(CarouselError::Destroyed)
    );
    assert_eq!(log.borrow().attached, 0);
}

#[test]
fn destroy_is_idempotent_and_clears_state() {
    let (mut engine, _clock) = build_engine(three_slides());
    engine.destroy();
    engine.destroy();
    assert_eq!(engine.slide_count(), 0);
    assert_eq!(engine.current_index(), None);
    assert_eq!(engine.zoom_target(), None);
    assert_eq!(engine.observer_count(), 0);
}
