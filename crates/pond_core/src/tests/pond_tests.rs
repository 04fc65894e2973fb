use rand::{rngs::StdRng, SeedableRng};

use super::{Pond, BUBBLE_VISIBLE_SECS, MAX_X, MIN_Y, SWIM_TICK_SECS};
use crate::variant::DuckVariant;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Pond with hand-set position and velocity, swim tick due at `t = 1.0`,
/// quack timer pushed out of the way.
fn pond_at(x: f32, y: f32, vx: f32, vy: f32) -> Pond {
    let mut pond = Pond::new(0.0, &mut rng());
    pond.x = x;
    pond.y = y;
    pond.vx = vx;
    pond.vy = vy;
    pond.next_swim_at = 1.0;
    pond.next_quack_at = 1_000.0;
    pond
}

#[test]
fn bounce_off_right_edge_reflects_horizontal_velocity() {
    let mut rng = rng();
    let mut pond = pond_at(479.0, 150.0, 2.0, 1.0);

    pond.advance(1.0, DuckVariant::Mallard, &mut rng);
    assert_eq!(pond.position(), (MAX_X, 151.0));
    assert_eq!(pond.velocity(), (-2.0, 1.0));

    // Next tick moves back into the interior.
    pond.advance(1.0 + SWIM_TICK_SECS, DuckVariant::Mallard, &mut rng);
    assert_eq!(pond.position(), (478.0, 152.0));
}

#[test]
fn bounce_off_top_edge_reflects_vertical_velocity() {
    let mut rng = rng();
    let mut pond = pond_at(100.0, 11.0, -1.0, -2.0);

    pond.advance(1.0, DuckVariant::Redhead, &mut rng);
    assert_eq!(pond.position(), (99.0, MIN_Y));
    assert_eq!(pond.velocity(), (-1.0, 2.0));
}

#[test]
fn position_stays_in_bounds_across_many_ticks() {
    let mut rng = rng();
    let mut pond = pond_at(476.0, 276.0, 3.0, 2.0);
    for step in 0..2_000 {
        pond.advance(1.0 + step as f64 * SWIM_TICK_SECS, DuckVariant::Decoy, &mut rng);
        let (x, y) = pond.position();
        assert!((10.0..=480.0).contains(&x), "x = {x} at step {step}");
        assert!((10.0..=280.0).contains(&y), "y = {y} at step {step}");
    }
}

#[test]
fn quack_timer_shows_bubble_then_hides_after_delay() {
    let mut rng = rng();
    let mut pond = Pond::new(0.0, &mut rng);
    pond.next_swim_at = f64::MAX;
    pond.next_quack_at = 5.0;

    pond.advance(5.0, DuckVariant::Rubber, &mut rng);
    let bubble = pond.bubble().expect("bubble visible after firing");
    assert_eq!(bubble.text, "Squeak!");

    pond.advance(5.0 + BUBBLE_VISIBLE_SECS / 2.0, DuckVariant::Rubber, &mut rng);
    assert!(pond.bubble().is_some(), "bubble still visible mid-delay");

    pond.advance(5.0 + BUBBLE_VISIBLE_SECS, DuckVariant::Rubber, &mut rng);
    assert!(pond.bubble().is_none(), "bubble hidden once the delay elapses");
}

#[test]
fn quack_interval_is_rerolled_after_each_firing() {
    let mut rng = rng();
    let mut pond = Pond::new(0.0, &mut rng);
    pond.next_swim_at = f64::MAX;
    pond.next_quack_at = 2.0;

    pond.advance(2.0, DuckVariant::Decoy, &mut rng);
    let next = pond.next_quack_at;
    assert!((4.0..7.0).contains(&next), "rerolled deadline = {next}");

    pond.advance(next, DuckVariant::Decoy, &mut rng);
    let bubble = pond.bubble().expect("second firing replaces bubble");
    assert_eq!(bubble.text, "...");
    assert!((next + 2.0..next + 5.0).contains(&pond.next_quack_at));
}

#[test]
fn reset_recenters_and_rolls_sane_randoms() {
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut pond = Pond::new(0.0, &mut rng);
        pond.advance(1.0, DuckVariant::Mallard, &mut rng);
        pond.reset(10.0, &mut rng);

        assert_eq!(pond.position(), (250.0, 150.0));
        let (vx, vy) = pond.velocity();
        assert!((1.0..=3.0).contains(&vx.abs()), "vx = {vx}");
        assert!((1.0..=2.0).contains(&vy.abs()), "vy = {vy}");
        assert!((12.0..15.0).contains(&pond.next_quack_at));
        assert!(pond.bubble().is_none());
    }
}

#[test]
fn swim_timer_resyncs_after_a_stall() {
    let mut rng = rng();
    let mut pond = pond_at(250.0, 150.0, 1.0, 1.0);

    // A long gap fires a single step, not a backlog of them.
    pond.advance(60.0, DuckVariant::Mallard, &mut rng);
    assert_eq!(pond.position(), (251.0, 151.0));
    assert_eq!(pond.next_swim_at, 60.0 + SWIM_TICK_SECS);
}
