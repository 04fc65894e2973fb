use rand::Rng;
use tracing::debug;

use crate::variant::DuckVariant;

/// Pond surface dimensions, in logical pixels.
pub const POND_WIDTH: f32 = 500.0;
pub const POND_HEIGHT: f32 = 300.0;

// Interior the duck glyph may occupy; crossing an edge bounces.
const MIN_X: f32 = 10.0;
const MAX_X: f32 = 480.0;
const MIN_Y: f32 = 10.0;
const MAX_Y: f32 = 280.0;

const CENTER_X: f32 = 250.0;
const CENTER_Y: f32 = 150.0;

/// Swim timer cadence.
pub const SWIM_TICK_SECS: f64 = 0.03;
/// How long the quack bubble stays visible after a quack timer firing.
pub const BUBBLE_VISIBLE_SECS: f64 = 1.0;
// Whole-second range for the rerolled quack interval, upper bound exclusive.
const QUACK_DELAY_MIN_SECS: u64 = 2;
const QUACK_DELAY_MAX_SECS: u64 = 5;

/// Transient speech bubble shown next to the duck after a quack firing.
#[derive(Debug, Clone)]
pub struct QuackBubble {
    pub text: &'static str,
    pub(crate) hide_at: f64,
}

/// Animated pond state: a position advanced by a velocity vector on a fixed
/// cadence, plus a randomized quack timer and its bubble. Timers are
/// modelled as absolute deadlines on a caller-supplied monotonic seconds
/// timeline, fired by [`Pond::advance`].
#[derive(Debug)]
pub struct Pond {
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) vx: f32,
    pub(crate) vy: f32,
    pub(crate) next_swim_at: f64,
    pub(crate) next_quack_at: f64,
    pub(crate) bubble: Option<QuackBubble>,
}

impl Pond {
    pub(crate) fn new(now: f64, rng: &mut impl Rng) -> Self {
        let mut pond = Self {
            x: CENTER_X,
            y: CENTER_Y,
            vx: 0.0,
            vy: 0.0,
            next_swim_at: now + SWIM_TICK_SECS,
            next_quack_at: now,
            bubble: None,
        };
        pond.reset(now, rng);
        pond
    }

    /// Recenter the duck and reroll its velocity and quack deadline. Runs on
    /// every selection change.
    pub(crate) fn reset(&mut self, now: f64, rng: &mut impl Rng) {
        self.x = CENTER_X;
        self.y = CENTER_Y;
        self.vx = roll_velocity(rng, 3);
        self.vy = roll_velocity(rng, 2);
        self.next_swim_at = now + SWIM_TICK_SECS;
        self.next_quack_at = now + roll_quack_delay(rng);
        self.bubble = None;
    }

    /// Fire every timer that has come due at `now`.
    pub(crate) fn advance(&mut self, now: f64, duck: DuckVariant, rng: &mut impl Rng) {
        if now >= self.next_swim_at {
            self.step();
            self.next_swim_at += SWIM_TICK_SECS;
            // Resync after a stall (hidden window) instead of replaying the
            // missed ticks.
            if self.next_swim_at < now {
                self.next_swim_at = now + SWIM_TICK_SECS;
            }
        }

        if now >= self.next_quack_at {
            debug!(duck = duck.label(), sound = duck.quack(), "quack timer fired");
            self.bubble = Some(QuackBubble {
                text: duck.quack(),
                hide_at: now + BUBBLE_VISIBLE_SECS,
            });
            self.next_quack_at = now + roll_quack_delay(rng);
        }

        if let Some(bubble) = &self.bubble {
            if now >= bubble.hide_at {
                self.bubble = None;
            }
        }
    }

    fn step(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        // Inclusive bounce: clamp onto the edge and reflect the velocity
        // component, so the position never leaves the interior.
        if self.x <= MIN_X || self.x >= MAX_X {
            self.x = self.x.clamp(MIN_X, MAX_X);
            self.vx = -self.vx;
            debug!(x = self.x, vx = self.vx, "bounced off pond edge");
        }
        if self.y <= MIN_Y || self.y >= MAX_Y {
            self.y = self.y.clamp(MIN_Y, MAX_Y);
            self.vy = -self.vy;
            debug!(y = self.y, vy = self.vy, "bounced off pond edge");
        }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.vx, self.vy)
    }

    pub fn bubble(&self) -> Option<&QuackBubble> {
        self.bubble.as_ref()
    }
}

/// Integer velocity with magnitude in `1..=max` and random sign.
fn roll_velocity(rng: &mut impl Rng, max: i32) -> f32 {
    loop {
        let v = rng.gen_range(-max..=max);
        if v != 0 {
            return v as f32;
        }
    }
}

fn roll_quack_delay(rng: &mut impl Rng) -> f64 {
    rng.gen_range(QUACK_DELAY_MIN_SECS..QUACK_DELAY_MAX_SECS) as f64
}

#[cfg(test)]
#[path = "tests/pond_tests.rs"]
mod tests;
