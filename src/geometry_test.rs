#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// --- Rect construction ---

#[test]
fn rect_new_keeps_edges_consistent() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.right, 40.0);
    assert_eq!(r.bottom, 60.0);
    assert_eq!(r.width, 30.0);
    assert_eq!(r.height, 40.0);
}

#[test]
fn rect_center_is_midpoint() {
    let r = Rect::new(0.0, 0.0, 100.0, 50.0);
    assert_eq!(r.center(), pt(50.0, 25.0));
}

// --- squared_distance ---

#[test]
fn squared_distance_three_four_five() {
    assert_eq!(squared_distance(pt(0.0, 0.0), pt(3.0, 4.0)), 25.0);
}

#[test]
fn squared_distance_is_symmetric() {
    let a = pt(-2.0, 7.5);
    let b = pt(4.0, -1.0);
    assert_eq!(squared_distance(a, b), squared_distance(b, a));
}

#[test]
fn squared_distance_same_point_is_zero() {
    let a = pt(12.0, 12.0);
    assert_eq!(squared_distance(a, a), 0.0);
}

// --- scale ---

#[test]
fn scale_by_one_is_identity() {
    let r = Rect::new(3.0, 4.0, 5.0, 6.0);
    assert_eq!(scale(r, 1.0), r);
}

#[test]
fn scale_keeps_center() {
    let r = Rect::new(0.0, 0.0, 100.0, 100.0);
    let s = scale(r, 1.8);
    assert!(approx_eq(s.center().x, 50.0));
    assert!(approx_eq(s.center().y, 50.0));
}

#[test]
fn scale_multiplies_area_by_factor_squared() {
    let r = Rect::new(5.0, -5.0, 40.0, 20.0);
    for f in [0.5, 1.8, 3.0] {
        let s = scale(r, f);
        assert!(approx_eq(s.width * s.height, r.width * r.height * f * f));
    }
}

#[test]
fn scale_recomputes_edges() {
    let s = scale(Rect::new(0.0, 0.0, 100.0, 100.0), 1.8);
    assert!(approx_eq(s.left, -40.0));
    assert!(approx_eq(s.right, 140.0));
    assert!(approx_eq(s.top, -40.0));
    assert!(approx_eq(s.bottom, 140.0));
    assert!(approx_eq(s.right - s.left, s.width));
}

#[test]
fn scale_does_not_mutate_input() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    let _scaled = r.scaled(2.0);
    assert_eq!(r, Rect::new(0.0, 0.0, 10.0, 10.0));
}

#[test]
fn scale_down_shrinks_about_center() {
    let s = scale(Rect::new(0.0, 0.0, 100.0, 60.0), 0.5);
    assert!(approx_eq(s.left, 25.0));
    assert!(approx_eq(s.top, 15.0));
    assert!(approx_eq(s.width, 50.0));
    assert!(approx_eq(s.height, 30.0));
}

// --- contains_point ---

#[test]
fn contains_interior_point() {
    let r = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert!(contains_point(&r, pt(50.0, 50.0)));
}

#[test]
fn contains_excludes_every_edge() {
    let r = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert!(!contains_point(&r, pt(0.0, 50.0)));
    assert!(!contains_point(&r, pt(100.0, 50.0)));
    assert!(!contains_point(&r, pt(50.0, 0.0)));
    assert!(!contains_point(&r, pt(50.0, 100.0)));
}

#[test]
fn contains_excludes_outside() {
    let r = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert!(!r.contains(pt(-1.0, 50.0)));
    assert!(!r.contains(pt(50.0, 101.0)));
}

#[test]
fn empty_rect_contains_nothing() {
    let r = Rect::new(10.0, 10.0, 0.0, 0.0);
    assert!(!r.contains(pt(10.0, 10.0)));
}
