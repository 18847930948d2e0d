// Host-side tests for mount/unmount lifecycle and visual state wiring.

mod common;

use common::{FakeDocument, Harness};
use cursor_core::*;

const FRAME_MS: f64 = 16.0;

#[test]
fn mount_attaches_everything() {
    let h = Harness::new();
    let holders = RootPointerLease::holders();
    let cursor = h.mount(CursorConfig::default());

    assert!(cursor.is_mounted());
    assert_eq!(h.input.listener_count(), 1);
    assert_eq!(cursor.hover_target_count(), 2); // a, button
    assert_eq!(h.document.total_hover_listeners(), 2);
    assert!(h.document.element("a").is_suppressed());
    assert!(!h.document.element("div").is_suppressed());
    assert!(h.document.root.is_suppressed());
    assert_eq!(RootPointerLease::holders(), holders + 1);
    assert_eq!(cursor.loop_state(), LoopState::Running);

    // the initial row is applied once, hidden until the pointer shows up
    let visuals = h.renderer.borrow().visuals();
    assert_eq!(visuals.len(), 1);
    assert!(visuals[0].is_hidden());
}

#[test]
fn hover_query_includes_fixed_and_extra_selectors_once() {
    let h = Harness::new();
    let config = CursorConfig {
        extra_no_cursor_selectors: vec!["div".into()],
        ..CursorConfig::default()
    };
    let cursor = h.mount(config);
    assert_eq!(cursor.hover_target_count(), 3);
    let queries = h.document.queries.borrow().clone();
    assert_eq!(queries.len(), 1);
    for sel in [".c-cursor-hover", "a", "input", "button", "label", "select", "textarea", "div"] {
        assert!(queries[0].split(", ").any(|s| s == sel), "missing {}", sel);
    }
}

#[test]
fn class_tagged_element_is_a_hover_target() {
    let mut h = Harness::new();
    h.document = FakeDocument::with_tags(&[".c-cursor-hover"]);
    let cursor = h.mount(CursorConfig::default());
    assert_eq!(cursor.hover_target_count(), 1);

    let tagged = h.document.element(".c-cursor-hover");
    assert!(tagged.is_suppressed());
    h.input.emit(CursorEvent::PointerOver);
    tagged.enter();
    let v = cursor.visual_state().expect("visual state applied");
    assert_eq!(v.marker_radius, 24.0);
    assert_eq!(v.blend_mode, Some(BlendMode::Difference));

    cursor.unmount();
    assert!(!tagged.is_suppressed());
}

#[test]
fn overlapping_mounts_restore_hover_elements_per_mount() {
    let h = Harness::new();
    let first = h.mount(CursorConfig::default());
    let second = h.mount(CursorConfig::default());
    first.unmount();
    // hover elements are not shared through the root lease; the first
    // unmount restores the native pointer while the second mount is live
    assert!(!h.document.element("a").is_suppressed());
    assert!(h.document.root.is_suppressed());
    assert_eq!(h.document.total_hover_listeners(), 2);
    second.unmount();
    assert_eq!(h.document.total_hover_listeners(), 0);
}

#[test]
fn unmount_twice_leaves_nothing_behind() {
    let h = Harness::new();
    let holders = RootPointerLease::holders();
    let cursor = h.mount(CursorConfig::default());
    h.input.move_to(10.0, 10.0);
    h.scheduler.step_frames(3, FRAME_MS);

    cursor.unmount();
    cursor.unmount();

    assert!(!cursor.is_mounted());
    assert_eq!(cursor.loop_state(), LoopState::Idle);
    assert_eq!(h.input.listener_count(), 0);
    assert_eq!(h.document.total_hover_listeners(), 0);
    assert_eq!(h.scheduler.pending_frames(), 0);
    assert_eq!(h.scheduler.pending_timers(), 0);
    assert!(!h.document.element("a").is_suppressed());
    assert!(!h.document.root.is_suppressed());
    assert_eq!(RootPointerLease::holders(), holders);
}

#[test]
fn drop_unmounts() {
    let h = Harness::new();
    {
        let _cursor = h.mount(CursorConfig::default());
        assert_eq!(h.input.listener_count(), 1);
    }
    assert_eq!(h.input.listener_count(), 0);
    assert_eq!(h.scheduler.pending_frames(), 0);
    assert!(!h.document.root.is_suppressed());
}

#[test]
fn click_radius_sequence() {
    let h = Harness::new();
    let cursor = h.mount(CursorConfig::default());
    h.input.emit(CursorEvent::PointerOver);
    h.input.emit(CursorEvent::PointerDown);
    h.input.emit(CursorEvent::PointerUp);

    let radii: Vec<f64> = h
        .renderer
        .borrow()
        .visuals()
        .iter()
        .skip(1) // hidden row from mount
        .map(|v| v.dot_radius)
        .collect();
    assert_eq!(radii, vec![8.0, 6.0, 8.0]);
    assert!(!cursor.interaction().clicked);
}

#[test]
fn hidden_pointer_zeroes_opacity_regardless_of_other_flags() {
    let h = Harness::new();
    let cursor = h.mount(CursorConfig::default());
    h.input.emit(CursorEvent::PointerOver);
    h.input.emit(CursorEvent::PointerDown);
    h.document.element("a").enter();
    h.input.emit(CursorEvent::PointerOut);

    let v = cursor.visual_state().expect("visual state applied");
    assert_eq!(v.dot_opacity, 0.0);
    assert_eq!(v.line_opacity, 0.0);
    assert_eq!(v.marker_opacity, 0.0);
    assert_eq!(v.marker_radius, 0.0);
}

#[test]
fn hovering_shows_marker_and_leaving_restores() {
    let h = Harness::new();
    let cursor = h.mount(CursorConfig::default());
    h.input.emit(CursorEvent::PointerOver);
    h.document.element("button").enter();

    let v = cursor.visual_state().expect("visual state applied");
    assert_eq!(v.marker_radius, 24.0);
    assert_eq!(v.dot_radius, 0.0);
    assert_eq!(v.dot_opacity, 0.0);
    assert_eq!(v.blend_mode, Some(BlendMode::Difference));

    // click while hovered keeps the marker row
    h.input.emit(CursorEvent::PointerDown);
    assert_eq!(cursor.visual_state().map(|v| v.marker_radius), Some(24.0));

    h.document.element("button").leave();
    let v = cursor.visual_state().expect("visual state applied");
    assert_eq!(v.marker_radius, 0.0);
    assert_eq!(v.dot_radius, 6.0);
    assert_eq!(v.blend_mode, None);
}

#[test]
fn unchanged_rows_are_not_reapplied() {
    let h = Harness::new();
    let _cursor = h.mount(CursorConfig::default());
    h.input.emit(CursorEvent::PointerOver);
    h.input.emit(CursorEvent::PointerOver);
    h.input.move_to(5.0, 5.0);
    assert_eq!(h.renderer.borrow().visuals().len(), 2);
}

#[test]
fn pointer_move_rearms_after_debounce() {
    let h = Harness::new();
    let cursor = h.mount(CursorConfig::default());
    h.scheduler.advance(1_000.0);
    assert_eq!(cursor.loop_state(), LoopState::Idle);

    h.input.move_to(50.0, 60.0);
    assert_eq!(cursor.loop_state(), LoopState::Running);
    h.scheduler.step_frames(30, FRAME_MS);
    let s = cursor.smoothed();
    assert!((s.px - 50.0).abs() < 1e-6);
    assert!((s.py - 60.0).abs() < 1e-6);
    assert_eq!(cursor.trail().len(), 12);
}

#[test]
fn events_after_unmount_are_ignored() {
    let h = Harness::new();
    let cursor = h.mount(CursorConfig::default());
    let element = h.document.element("a");
    cursor.unmount();
    element.enter();
    h.input.emit(CursorEvent::PointerOver);
    assert_eq!(cursor.interaction(), InteractionState::default());
    assert_eq!(h.scheduler.pending_frames(), 0);
}

#[test]
fn static_dot_when_frames_are_unavailable() {
    let h = Harness::with_scheduler(ManualScheduler::without_frames());
    let cursor = h.mount(CursorConfig::default());
    assert_eq!(cursor.loop_state(), LoopState::Idle);
    h.input.emit(CursorEvent::PointerOver);
    h.input.move_to(33.0, 44.0);
    assert_eq!(h.renderer.borrow().dots().last(), Some(&(33.0, 44.0, 8.0)));
    cursor.unmount();
    assert_eq!(h.input.listener_count(), 0);
}

#[test]
fn concurrent_mounts_share_the_root_pointer() {
    let h = Harness::new();
    let first = h.mount(CursorConfig::default());
    let second = CursorEffectController::mount(CursorConfig::default(), h.env());
    assert!(h.document.root.is_suppressed());

    first.unmount();
    assert!(h.document.root.is_suppressed());
    assert!(second.is_mounted());

    second.unmount();
    assert!(!h.document.root.is_suppressed());
}

#[test]
fn remount_with_new_config_replaces_behavior() {
    let h = Harness::new();
    let first = h.mount(CursorConfig::default());
    first.unmount();
    let second = h.mount(CursorConfig {
        dot_size: 20.0,
        ..CursorConfig::default()
    });
    h.input.emit(CursorEvent::PointerOver);
    assert_eq!(second.visual_state().map(|v| v.dot_radius), Some(20.0));
    assert_eq!(second.config().dot_size, 20.0);
    assert_eq!(h.input.listener_count(), 1);
}
