use crate::*;

use carousel::{
    AutoplayState, Carousel, CarouselOptions, Key, Measurements, PointerInput, PointerKind,
    SlideGeometry, Testimonial,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::vec::Vec;

fn options() -> CarouselOptions {
    let items: Vec<Testimonial> = ["A", "B", "C"]
        .iter()
        .map(|name| Testimonial::new(*name, "Role", "Quote"))
        .collect();
    CarouselOptions::new(items).with_autoplay_interval_ms(1_000)
}

fn uniform(cursor: usize) -> Option<Measurements> {
    Some(Measurements {
        container_width: 600.0,
        active_slide: SlideGeometry {
            left: cursor as f32 * 300.0,
            width: 300.0,
        },
    })
}

fn touch(x: f32) -> PointerInput {
    PointerInput {
        pointer_id: 3,
        kind: PointerKind::Touch,
        x,
    }
}

#[test]
fn controller_dispatches_events() {
    let mut c = Controller::new(options());
    assert!(c.mount(0).request_frame);
    c.on_frame(0, uniform);

    let out = c.handle(Event::FocusIn, 10);
    assert_eq!(out, EventOutcome::default());
    assert_eq!(c.carousel().autoplay_state(), AutoplayState::Stopped);

    let out = c.handle(Event::KeyDown(Key::ArrowRight), 20);
    assert!(out.prevent_default);
    assert!(out.moved);
    assert_eq!(out.focus_heading, Some(4));
    assert!(out.request_frame);

    let out = c.handle(Event::KeyDown(Key::Other), 30);
    assert!(!out.prevent_default);

    c.handle(Event::FocusOut, 40);
    assert_eq!(c.carousel().autoplay_state(), AutoplayState::Running);

    let out = c.handle(Event::Activate(Control::Dot(2)), 50);
    assert!(out.moved);
    assert_eq!(c.carousel().logical_index(), 2);
}

#[test]
fn controller_reports_pointer_capture() {
    let mut c = Controller::new(options());
    c.mount(0);

    let out = c.handle(Event::PointerDown(touch(100.0)), 10);
    assert_eq!(out.capture_pointer, Some(3));
    let out = c.handle(Event::PointerMove(touch(40.0)), 20);
    assert!(out.moved);
    assert_eq!(out.focus_heading, None);
    let out = c.handle(Event::PointerUp { pointer_id: 3 }, 30);
    assert_eq!(out.release_pointer, Some(3));
    assert_eq!(c.carousel().logical_index(), 1);
    assert_eq!(c.carousel().autoplay_state(), AutoplayState::Running);

    let mouse = PointerInput {
        kind: PointerKind::Mouse,
        ..touch(0.0)
    };
    assert_eq!(c.handle(Event::PointerDown(mouse), 40).capture_pointer, None);
}

#[test]
fn controller_captures_only_the_drag_owner() {
    let mut c = Controller::new(options());
    c.mount(0);

    let first = c.handle(Event::PointerDown(touch(100.0)), 10);
    assert_eq!(first.capture_pointer, Some(3));
    let second = PointerInput {
        pointer_id: 9,
        ..touch(100.0)
    };
    assert_eq!(c.handle(Event::PointerDown(second), 20).capture_pointer, None);

    assert_eq!(c.handle(Event::PointerUp { pointer_id: 9 }, 30).release_pointer, None);
    assert_eq!(c.handle(Event::PointerUp { pointer_id: 3 }, 40).release_pointer, Some(3));
    assert_eq!(c.carousel().autoplay_state(), AutoplayState::Running);
}

#[test]
fn controller_tweens_offset_to_target() {
    let mut c = Controller::new(options());
    c.mount(0);
    assert_eq!(c.on_frame(0, uniform), Some(-750.0));
    c.sample(DEFAULT_TRANSITION_MS);
    assert!(!c.is_animating());
    assert_eq!(c.displayed_offset(), -750.0);

    c.handle(Event::Activate(Control::Next), 1_000);
    assert_eq!(c.on_frame(1_000, uniform), Some(-1_050.0));
    assert!(c.is_animating());

    let mut last = c.displayed_offset();
    for now_ms in [1_000u64, 1_100, 1_300, 1_500, 1_700, 1_800] {
        let off = c.sample(now_ms);
        assert!(off <= last);
        last = off;
    }
    assert!(!c.is_animating());
    assert_eq!(c.displayed_offset(), -1_050.0);
}

#[test]
fn reduced_motion_applies_offset_immediately() {
    let mut c = Controller::new(options().with_reduced_motion(true));
    c.mount(0);
    assert_eq!(c.on_frame(0, uniform), Some(-750.0));
    assert!(!c.is_animating());
    assert_eq!(c.displayed_offset(), -750.0);

    c.handle(Event::ReducedMotionChange { reduced_motion: false }, 10);
    c.handle(Event::Activate(Control::Next), 20);
    c.on_frame(20, uniform);
    assert!(c.is_animating());

    c.handle(Event::ReducedMotionChange { reduced_motion: true }, 30);
    assert!(!c.is_animating());
    assert_eq!(c.displayed_offset(), -1_050.0);
}

#[test]
fn controller_tick_runs_autoplay() {
    let mut c = Controller::new(options());
    c.mount(0);
    assert!(!c.tick(500).moved);
    let out = c.tick(1_000);
    assert!(out.moved);
    assert!(out.request_frame);

    c.handle(Event::VisibilityChange { visible: false }, 1_100);
    assert!(!c.tick(2_000).moved);
    c.handle(Event::VisibilityChange { visible: true }, 2_100);
    assert!(c.tick(3_100).moved);
}

#[test]
fn dropping_controller_unmounts() {
    let unmounted = Arc::new(AtomicBool::new(false));
    let opts = options().with_on_change(Some({
        let unmounted = Arc::clone(&unmounted);
        move |c: &Carousel| {
            if !c.is_mounted() && c.autoplay_timer().is_none() {
                unmounted.store(true, Ordering::SeqCst);
            }
        }
    }));
    {
        let mut c = Controller::new(opts);
        c.mount(0);
        c.handle(Event::MouseEnter, 10);
        assert!(!unmounted.load(Ordering::SeqCst));
    }
    assert!(unmounted.load(Ordering::SeqCst));
}

#[test]
fn tween_retarget_starts_from_current_sample() {
    let mut t = Tween::new(0.0, 100.0, 0, 100, Easing::Linear);
    assert_eq!(t.sample(50), 50.0);
    t.retarget(50, -100.0, 100);
    assert_eq!(t.from, 50.0);
    assert_eq!(t.sample(50), 50.0);
    assert_eq!(t.sample(150), -100.0);
    assert!(t.is_done(150));
}
