#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Easing ---

#[test]
fn default_pose_is_identity() {
    assert_eq!(Pose::default(), Pose::IDENTITY);
}

#[test]
fn divisor_one_snaps_to_target() {
    let mut p = Pose::IDENTITY;
    let target = Pose { scale: 1.8, rotate_x: 12.0, rotate_y: -7.0 };
    p.ease_toward(&target, 1.0, 1.0);
    assert_eq!(p, target);
}

#[test]
fn easing_converges_geometrically_without_overshoot() {
    let divisor = 9.0;
    let target = Pose { scale: 1.8, rotate_x: 20.0, rotate_y: -20.0 };
    let mut p = Pose::IDENTITY;
    let initial = target.scale - p.scale;
    let mut last_err = initial;
    for n in 1..=40 {
        p.ease_toward(&target, divisor, divisor);
        let err = target.scale - p.scale;
        assert!(err > 0.0, "overshot at tick {n}");
        assert!(err < last_err, "not monotonic at tick {n}");
        let expected = initial * (1.0 - 1.0 / divisor).powi(n);
        assert!(approx_eq(err, expected), "tick {n}: {err} vs {expected}");
        assert!(p.rotate_x < target.rotate_x);
        assert!(p.rotate_y > target.rotate_y);
        last_err = err;
    }
}

#[test]
fn fields_ease_independently() {
    let mut p = Pose::IDENTITY;
    let target = Pose { scale: 2.0, rotate_x: 10.0, rotate_y: 10.0 };
    p.ease_toward(&target, 2.0, 1.0);
    assert_eq!(p.scale, 1.5);
    assert_eq!(p.rotate_x, 10.0);
    assert_eq!(p.rotate_y, 10.0);
}

#[test]
fn easing_at_target_is_stable() {
    let target = Pose { scale: 1.3, rotate_x: 4.0, rotate_y: 2.0 };
    let mut p = target;
    p.ease_toward(&target, 9.0, 3.0);
    assert_eq!(p, target);
}

// --- Projection ---

/// Numeric tokens in a CSS value, in order.
fn numbers(css: &str) -> Vec<f64> {
    css.split(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == 'e'))
        .filter_map(|tok| tok.trim_start_matches('e').parse::<f64>().ok())
        .collect()
}

fn assert_numbers(css: &str, expected: &[f64]) {
    let got = numbers(css);
    assert_eq!(got.len(), expected.len(), "{css}");
    for (g, e) in got.iter().zip(expected) {
        assert!(approx_eq(*g, *e), "{css}: {g} vs {e}");
    }
}

#[test]
fn transform_lists_functions_in_order() {
    let t = card_transform(&Pose::IDENTITY, 400.0);
    let names: Vec<&str> = t.split(' ').map(|f| f.split('(').next().unwrap_or("")).collect();
    assert_eq!(names, ["translateZ", "rotateX", "rotateY", "translateX", "translateY"]);
}

#[test]
fn identity_transform_has_no_depth_or_tilt() {
    assert_numbers(&card_transform(&Pose::IDENTITY, 400.0), &[0.0, 0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn transform_depth_and_compensation() {
    let p = Pose { scale: 2.0, rotate_x: 10.0, rotate_y: -5.0 };
    assert_numbers(&card_transform(&p, 400.0), &[200.0, 10.0, -5.0, 5.0, -10.0]);
}

#[test]
fn background_parallax_is_seventy_percent() {
    let p = Pose { scale: 1.0, rotate_x: 10.0, rotate_y: 10.0 };
    let bg = background_transform(&p);
    assert!(bg.ends_with("scale(1.2)"));
    assert_numbers(&bg, &[-7.0, 7.0, 1.2]);
}

#[test]
fn shadow_scales_with_pose() {
    let p = Pose { scale: 2.0, rotate_x: 0.0, rotate_y: 0.0 };
    let shadow = box_shadow(&p);
    assert!(shadow.starts_with("0 "));
    assert!(shadow.contains("rgba(0,0,0,"));
    assert_numbers(&shadow, &[0.0, 10.0, 8.0, 0.0, 0.0, 0.0, 0.4]);
}

#[test]
fn brightness_tracks_rotate_x() {
    let flat = brightness(&Pose::IDENTITY, 20.0);
    assert!(approx_eq(flat, 1.0 + BRIGHTNESS_BIAS));
    let up = Pose { rotate_x: 20.0, ..Pose::IDENTITY };
    assert!(approx_eq(brightness(&up, 20.0), 2.0 + BRIGHTNESS_BIAS));
    let down = Pose { rotate_x: -20.0, ..Pose::IDENTITY };
    assert!(approx_eq(brightness(&down, 20.0), BRIGHTNESS_BIAS));
}

#[test]
fn inactive_filter_is_slightly_desaturated() {
    assert_eq!(filter(&Pose::IDENTITY, false, 20.0), "saturate(90%)");
}

#[test]
fn active_filter_includes_brightness() {
    let f = filter(&Pose::IDENTITY, true, 20.0);
    assert!(f.starts_with("saturate(100%) brightness("));
}

#[test]
fn pose_style_uses_config_perspective() {
    let p = Pose { scale: 2.0, rotate_x: 0.0, rotate_y: 0.0 };
    let config = CardsConfig { perspective: 800.0, ..CardsConfig::default() };
    assert!(pose_style(&p, &config).transform.starts_with("translateZ(400px)"));
}
