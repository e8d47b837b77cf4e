// motion.rs - Per-particle update steps
//
// Applied in this order each frame: repel, integrate, damp, nudge, reflect.

use super::Particles;
use crate::config::{DAMPING, NUDGE_SPAN, NUDGE_THRESHOLD, REPEL_RADIUS, REPEL_STRENGTH};
use crate::rng::Rng;

/// Push away from the pointer, stronger when closer.
/// Returns false if out of range or exactly on top of the pointer.
pub fn repel(p: &mut Particles, i: usize, pointer: (f64, f64)) -> bool {
    let dx = p.x[i] - pointer.0;
    let dy = p.y[i] - pointer.1;
    let dist = dx.hypot(dy);

    // No direction to push in at zero distance
    if dist >= REPEL_RADIUS || dist == 0.0 { return false; }

    let force = (REPEL_RADIUS - dist) / REPEL_RADIUS * REPEL_STRENGTH;
    p.vx[i] += dx / dist * force;
    p.vy[i] += dy / dist * force;
    true
}

#[inline]
pub fn integrate(p: &mut Particles, i: usize) {
    p.x[i] += p.vx[i];
    p.y[i] += p.vy[i];
}

#[inline]
pub fn damp(p: &mut Particles, i: usize) {
    p.vx[i] *= DAMPING;
    p.vy[i] *= DAMPING;
}

/// Jiggle near-still components so the field never freezes.
/// Soft: nothing guarantees the speed ends up above `floor`.
pub fn nudge(p: &mut Particles, i: usize, floor: f64, rng: &mut Rng) {
    if p.speed(i) >= floor { return; }
    if p.vx[i].abs() < NUDGE_THRESHOLD {
        p.vx[i] += (rng.unit() - 0.5) * NUDGE_SPAN;
    }
    if p.vy[i].abs() < NUDGE_THRESHOLD {
        p.vy[i] += (rng.unit() - 0.5) * NUDGE_SPAN;
    }
}

/// Clamp into [0,w] x [0,h], flipping velocity on the axis that hit.
pub fn reflect(p: &mut Particles, i: usize, w: f64, h: f64) {
    if p.x[i] < 0.0 {
        p.x[i] = 0.0;
        p.vx[i] = -p.vx[i];
    } else if p.x[i] > w {
        p.x[i] = w;
        p.vx[i] = -p.vx[i];
    }

    if p.y[i] < 0.0 {
        p.y[i] = 0.0;
        p.vy[i] = -p.vy[i];
    } else if p.y[i] > h {
        p.y[i] = h;
        p.vy[i] = -p.vy[i];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one(x: f64, y: f64, vx: f64, vy: f64) -> Particles {
        let mut p = Particles::new();
        p.push(x, y, vx, vy, 2.0);
        p
    }

    #[test]
    fn integrate_adds_velocity_exactly() {
        let mut p = one(10.5, 20.25, 0.125, -3.5);
        integrate(&mut p, 0);
        assert_eq!(p.pos(0), (10.5 + 0.125, 20.25 - 3.5));
    }

    #[test]
    fn damping_scales_both_components() {
        let mut p = one(0.0, 0.0, 1.0, -2.0);
        damp(&mut p, 0);
        assert_eq!((p.vx[0], p.vy[0]), (0.98, -1.96));
    }

    #[test]
    fn repel_pushes_away_with_linear_falloff() {
        let mut p = one(100.0, 0.0, 0.0, 0.0);
        assert!(repel(&mut p, 0, (0.0, 0.0)));
        let want = (150.0 - 100.0) / 150.0 * 0.6;
        assert!((p.vx[0] - want).abs() < 1e-12);
        assert_eq!(p.vy[0], 0.0);
    }

    #[test]
    fn repel_ignores_far_and_coincident_pointer() {
        let mut p = one(150.0, 0.0, 0.0, 0.0);
        assert!(!repel(&mut p, 0, (0.0, 0.0)));
        let mut p = one(5.0, 5.0, 0.1, 0.1);
        assert!(!repel(&mut p, 0, (5.0, 5.0)));
        assert_eq!((p.vx[0], p.vy[0]), (0.1, 0.1));
        assert!(p.vx[0].is_finite());
    }

    #[test]
    fn nudge_bounded_and_only_when_slow() {
        let mut rng = Rng::new(3);
        for _ in 0..1000 {
            let mut p = one(0.0, 0.0, 0.0, 0.0);
            nudge(&mut p, 0, 0.3, &mut rng);
            assert!(p.vx[0].abs() <= 0.025 && p.vy[0].abs() <= 0.025);
        }

        let mut p = one(0.0, 0.0, 0.5, 0.0);
        nudge(&mut p, 0, 0.3, &mut rng);
        assert_eq!((p.vx[0], p.vy[0]), (0.5, 0.0));
    }

    #[test]
    fn nudge_leaves_fast_component_alone() {
        let mut rng = Rng::new(9);
        let mut p = one(0.0, 0.0, 0.2, 0.0);
        nudge(&mut p, 0, 0.3, &mut rng);
        assert_eq!(p.vx[0], 0.2);
        assert_ne!(p.vy[0], 0.0);
    }

    #[test]
    fn reflect_each_edge() {
        let (w, h) = (100.0, 50.0);

        let mut p = one(-1.0, 10.0, -2.0, 0.5);
        reflect(&mut p, 0, w, h);
        assert_eq!((p.x[0], p.vx[0]), (0.0, 2.0));

        let mut p = one(101.0, 10.0, 2.0, 0.5);
        reflect(&mut p, 0, w, h);
        assert_eq!((p.x[0], p.vx[0]), (100.0, -2.0));

        let mut p = one(10.0, -0.5, 0.5, -1.0);
        reflect(&mut p, 0, w, h);
        assert_eq!((p.y[0], p.vy[0]), (0.0, 1.0));

        let mut p = one(10.0, 51.0, 0.5, 1.0);
        reflect(&mut p, 0, w, h);
        assert_eq!((p.y[0], p.vy[0]), (50.0, -1.0));
        assert_eq!(p.vx[0], 0.5);
    }

    #[test]
    fn reflect_inside_is_noop() {
        let mut p = one(50.0, 25.0, 1.0, 1.0);
        reflect(&mut p, 0, 100.0, 50.0);
        assert_eq!((p.x[0], p.y[0], p.vx[0], p.vy[0]), (50.0, 25.0, 1.0, 1.0));
    }
}
