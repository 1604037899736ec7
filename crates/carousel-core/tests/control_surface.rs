use std::time::{Duration, Instant};

use carousel_core::{
    AppConfig, Control, ControlState, FixedSurface, KeyOutcome, MissingPart, Slider, SliderKey,
    SliderOptions,
};

fn mounted(viewport: f64) -> Slider<FixedSurface> {
    let surface = FixedSurface::from_offsets(&[0.0, 100.0, 220.0, 340.0], 340.0, viewport);
    let mut slider = Slider::mount(surface, SliderOptions::default());
    assert!(slider.on_frame());
    slider
}

fn offset(slider: &Slider<FixedSurface>) -> f64 {
    slider.state().map(|s| s.current_offset()).unwrap_or(f64::NAN)
}

#[test]
fn walks_the_track_with_controls_and_keys() {
    let mut slider = mounted(150.0);
    assert_eq!(
        slider.controls(),
        ControlState {
            current_index: 0,
            prev_disabled: true,
            next_disabled: false,
        }
    );

    slider.activate(Control::Next);
    assert_eq!(slider.handle_key(SliderKey::ArrowRight, true), KeyOutcome::Handled);
    assert_eq!(slider.controls().current_index, 2);
    assert_eq!(offset(&slider), 190.0);
    assert!(slider.controls().next_disabled);

    slider.activate(Control::Next);
    assert_eq!(slider.controls().current_index, 2);

    slider.go_to_index(0, true);
    assert_eq!(offset(&slider), 0.0);
    assert!(slider.controls().prev_disabled);
}

#[test]
fn resize_burst_reconciles_once_after_quiet_window() {
    let start = Instant::now();
    let mut slider = mounted(150.0);
    slider.go_to_index(1, true);

    slider.surface_mut().set_viewport_width(220.0);
    slider.notify_resize(start);
    slider.surface_mut().set_viewport_width(300.0);
    slider.notify_resize(start + Duration::from_millis(60));

    assert_eq!(slider.resize_deadline(), Some(start + Duration::from_millis(180)));
    assert!(!slider.poll_resize(start + Duration::from_millis(150)));
    assert!(slider.poll_resize(start + Duration::from_millis(180)));

    assert_eq!(offset(&slider), 40.0);
    assert_eq!(slider.controls().current_index, 0);
    assert!(slider.surface().transition_suppressed());
    assert_eq!(slider.resize_deadline(), None);
}

#[test]
fn debounce_window_comes_from_config() {
    let config = AppConfig::from_toml("[slider]\nresize_debounce_ms = 400").unwrap();
    let surface = FixedSurface::uniform(5, 30.0, 2.0, 50.0);
    let mut slider = Slider::mount(surface, SliderOptions::from(&config.slider));

    let start = Instant::now();
    slider.notify_resize(start);
    assert_eq!(slider.resize_deadline(), Some(start + Duration::from_millis(400)));
}

#[test]
fn inert_slider_swallows_everything() {
    let surface = FixedSurface::uniform(3, 30.0, 0.0, 50.0).with_missing(MissingPart::Viewport);
    let mut slider = Slider::mount(surface, SliderOptions::default());

    slider.activate(Control::Next);
    slider.next();
    slider.reconcile();
    assert!(!slider.poll_resize(Instant::now()));

    assert!(slider.is_inert());
    assert_eq!(slider.slide_count(), 0);
    assert_eq!(slider.controls(), ControlState::inert());
    assert_eq!(slider.surface().writes(), 0);
}

#[test]
fn reduced_motion_never_animates() {
    let surface = FixedSurface::uniform(6, 30.0, 2.0, 50.0).with_reduced_motion(true);
    let mut slider = Slider::mount(surface, SliderOptions::default());
    slider.on_frame();

    slider.next();
    assert!(slider.surface().transition_suppressed());
    slider.go_to_index(4, true);
    assert!(slider.surface().transition_suppressed());
    slider.apply(10.0, true);
    assert!(slider.surface().transition_suppressed());
}
