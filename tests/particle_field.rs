use backdrop_engine::config::{MAX_PARTICLES, POINTER_LINK_ALPHA};
use backdrop_engine::particle::{integrate, link_alpha, particle_count, reflect, Particles};
use backdrop_engine::rng::Rng;
use backdrop_engine::{ParticleConfig, ParticleField, Recorder, Viewport};

fn dist(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

/// Sized but unpopulated, so tests can place particles by hand.
fn empty_field(w: f64, h: f64) -> ParticleField {
    let mut field = ParticleField::new(ParticleConfig::default(), Rng::new(1234));
    field.resize(Viewport::new(w, h));
    field
}

#[test]
fn desktop_population_is_capped() {
    let mut field = ParticleField::new(ParticleConfig::default(), Rng::new(99));
    field.initialize(Viewport::new(1920.0, 1080.0));

    assert_eq!(field.height(), 850.0);
    assert_eq!(field.config().count, 80);
    assert_eq!(field.particles().n, MAX_PARTICLES);
}

#[test]
fn created_particles_fit_the_surface() {
    for (w, h) in [(375.0, 667.0), (1024.0, 768.0), (1366.0, 900.0)] {
        let mut field = ParticleField::new(ParticleConfig::default(), Rng::new(7));
        field.initialize(Viewport::new(w, h));

        let h = h.min(850.0);
        let p = field.particles();
        assert_eq!(p.n, particle_count(w, h));
        assert_eq!(p.n, ((w * h / 12000.0).floor() as usize).min(80));

        let half = field.config().speed / 2.0;
        for i in 0..p.n {
            assert!((0.0..=w).contains(&p.x[i]) && (0.0..=h).contains(&p.y[i]));
            assert!(p.vx[i].abs() <= half && p.vy[i].abs() <= half);
            assert!(p.r[i] >= 1.0 && p.r[i] < 3.0);
        }
    }
}

#[test]
fn integrate_is_exact_before_reflection() {
    let mut p = Particles::new();
    p.push(3.0, 4.0, -5.25, 0.75, 1.0);
    integrate(&mut p, 0);
    assert_eq!(p.pos(0), (3.0 - 5.25, 4.0 + 0.75));

    reflect(&mut p, 0, 100.0, 100.0);
    assert_eq!(p.pos(0), (0.0, 4.75));
    assert_eq!(p.vx[0], 5.25);
}

#[test]
fn pointer_line_opacity() {
    assert!((link_alpha(100.0, 200.0, POINTER_LINK_ALPHA).unwrap() - 0.1).abs() < 1e-12);

    let mut field = empty_field(800.0, 600.0);
    field.particles_mut().push(400.0, 300.0, 0.0, 0.0, 2.0);
    field.set_pointer(500.0, 300.0);

    let mut rec = Recorder::new();
    field.render_frame(&mut rec);

    let strokes = rec.strokes();
    assert_eq!(strokes.len(), 1);
    let line = &strokes[0];
    assert_eq!(line.to, (500.0, 300.0));
    assert_eq!(line.from, field.particles().pos(0));

    let d = dist(line.from, line.to);
    let want = (1.0 - d / 200.0) * 0.2;
    assert!((line.color.a - want).abs() < 1e-12);
    assert_eq!((line.color.r, line.color.g, line.color.b), (99, 102, 241));
}

#[test]
fn pointer_pushes_particle_away() {
    let mut field = empty_field(800.0, 600.0);
    field.particles_mut().push(400.0, 300.0, 0.0, 0.0, 2.0);
    field.set_pointer(450.0, 300.0);
    field.step(0);
    assert!(field.particles().x[0] < 400.0);
}

#[test]
fn leaving_pointer_removes_its_line() {
    let mut field = empty_field(800.0, 600.0);
    field.particles_mut().push(400.0, 300.0, 0.0, 0.0, 2.0);
    field.set_pointer(420.0, 300.0);
    field.clear_pointer();

    let mut rec = Recorder::new();
    field.render_frame(&mut rec);
    assert!(rec.strokes().is_empty());
    assert_eq!(field.particles().pos(0).0.round(), 400.0);
}

#[test]
fn connection_fades_with_distance() {
    let mut last = f64::INFINITY;
    for gap in [10.0, 40.0, 80.0, 110.0] {
        let mut field = empty_field(800.0, 600.0);
        let p = field.particles_mut();
        p.push(200.0, 300.0, 0.0, 0.0, 1.0);
        p.push(200.0 + gap, 300.0, 0.0, 0.0, 1.0);

        let mut rec = Recorder::new();
        field.render_frame(&mut rec);

        let strokes = rec.strokes();
        assert_eq!(strokes.len(), 1, "gap {gap}");
        let a = strokes[0].color.a;
        let d = dist(strokes[0].from, strokes[0].to);
        assert!((a - (1.0 - d / 120.0) * 0.15).abs() < 1e-12);
        assert!(a < last);
        last = a;
    }
}

#[test]
fn no_connection_at_or_beyond_limit() {
    let mut field = empty_field(800.0, 600.0);
    let p = field.particles_mut();
    p.push(100.0, 300.0, 0.0, 0.0, 1.0);
    p.push(300.0, 300.0, 0.0, 0.0, 1.0);

    let mut rec = Recorder::new();
    field.render_frame(&mut rec);
    assert!(rec.strokes().is_empty());
    assert_eq!(rec.circles().len(), 2);
}

#[test]
fn pairs_are_linked_once() {
    let mut field = empty_field(800.0, 600.0);
    let p = field.particles_mut();
    for k in 0..4 {
        p.push(300.0 + k as f64 * 10.0, 300.0, 0.0, 0.0, 1.0);
    }

    let mut rec = Recorder::new();
    field.render_frame(&mut rec);
    assert_eq!(rec.strokes().len(), 6);
}

#[test]
fn particle_driven_past_each_edge_bounces_back() {
    let mut field = empty_field(200.0, 100.0);
    let p = field.particles_mut();
    p.push(1.0, 50.0, -3.0, 0.0, 1.0);
    p.push(199.0, 50.0, 3.0, 0.0, 1.0);
    p.push(100.0, 1.0, 0.0, -3.0, 1.0);
    p.push(100.0, 99.0, 0.0, 3.0, 1.0);

    for i in 0..4 {
        field.step(i);
    }

    let p = field.particles();
    assert_eq!(p.x[0], 0.0);
    assert!(p.vx[0] > 0.0);
    assert_eq!(p.x[1], 200.0);
    assert!(p.vx[1] < 0.0);
    assert_eq!(p.y[2], 0.0);
    assert!(p.vy[2] > 0.0);
    assert_eq!(p.y[3], 100.0);
    assert!(p.vy[3] < 0.0);
}
