//! Unit tests for dp-boundary.
//!
//! Resolution is a single degree-valued knob used both as a longitude step
//! and as a latitude tolerance.  Distance checks therefore allow a slack of
//! `2 * deg_to_m(step)`, which is a known approximation rather than a metric
//! guarantee.

#[cfg(test)]
mod helpers {
    use dp_core::{GeoPoint, Polygon, deg_to_m};

    pub fn init_logging() {
        env_logger::builder().is_test(true).try_init().ok();
    }

    /// Assert every point is within `d` of `center` and no more than
    /// `2 * deg_to_m(step)` short of it.
    pub fn assert_on_circle(poly: &Polygon, center: GeoPoint, d: f64, step: f64) {
        let slack = 2.0 * deg_to_m(step);
        for p in poly {
            let got = center.distance_m(*p);
            assert!(got <= d, "{p} is {got} m from {center}, beyond {d} m");
            assert!(
                (got - d).abs() <= slack,
                "{p} is {got} m from {center}, more than {slack} m short of {d} m"
            );
        }
    }
}

// ── Latitude bisection ────────────────────────────────────────────────────────

#[cfg(test)]
mod bisect {
    use dp_core::{BoundaryConfig, GeoPoint, deg_to_m};

    use crate::{BoundaryError, SearchDirection, bisect_latitude};

    #[test]
    fn one_degree_north_at_equator() {
        let center = GeoPoint::new(0.0, 0.0);
        let cfg = BoundaryConfig::new(0.01);
        let lat = bisect_latitude(center, 111_320.0, 0.0, SearchDirection::North, &cfg).unwrap();
        assert!((lat - 1.0).abs() <= 0.02, "got {lat}");
        assert!(center.distance_m(GeoPoint::new(0.0, lat)) <= 111_320.0);
    }

    #[test]
    fn one_degree_south_at_equator() {
        let center = GeoPoint::new(0.0, 0.0);
        let cfg = BoundaryConfig::new(0.01);
        let lat = bisect_latitude(center, 111_320.0, 0.0, SearchDirection::South, &cfg).unwrap();
        assert!((lat + 1.0).abs() <= 0.02, "got {lat}");
    }

    #[test]
    fn result_is_inside_and_next_step_is_outside() {
        let center = GeoPoint::new(-88.04, 30.69);
        let cfg = BoundaryConfig::new(1e-4);
        let d = 5_000.0;
        for lon in [-88.04, -88.02, -88.0] {
            let lat = bisect_latitude(center, d, lon, SearchDirection::North, &cfg).unwrap();
            assert!(center.within(GeoPoint::new(lon, lat), d));
            assert!(!center.within(GeoPoint::new(lon, lat + 2.0 * cfg.step_deg), d));
        }
    }

    #[test]
    fn converges_to_pole_when_distance_encloses_it() {
        let center = GeoPoint::new(0.0, 89.9);
        let cfg = BoundaryConfig::new(1e-3);
        let lat = bisect_latitude(center, deg_to_m(1.0), 0.0, SearchDirection::North, &cfg).unwrap();
        assert!(lat <= 90.0);
        assert!(90.0 - lat <= cfg.step_deg, "got {lat}");
    }

    #[test]
    fn iteration_cap_surfaces_non_convergence() {
        let center = GeoPoint::new(0.0, 0.0);
        let cfg = BoundaryConfig::new(1e-3).with_max_bisect_iters(3);
        let err = bisect_latitude(center, 111_320.0, 0.0, SearchDirection::North, &cfg).unwrap_err();
        assert_eq!(err, BoundaryError::NonConvergence { lon: 0.0, iterations: 3 });
    }

    #[test]
    fn sub_ulp_tolerance_surfaces_non_convergence() {
        let center = GeoPoint::new(0.0, 0.0);
        let cfg = BoundaryConfig::new(1e-20).with_max_bisect_iters(10_000);
        let err = bisect_latitude(center, 111_320.0, 0.0, SearchDirection::North, &cfg).unwrap_err();
        match err {
            BoundaryError::NonConvergence { iterations, .. } => assert!(iterations < 10_000),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn center_on_pole_returns_immediately() {
        let center = GeoPoint::new(0.0, 90.0);
        let cfg = BoundaryConfig::new(1e-3).with_max_bisect_iters(1);
        let lat = bisect_latitude(center, 1_000.0, 0.0, SearchDirection::North, &cfg).unwrap();
        assert_eq!(lat, 90.0);
    }
}

// ── Circle boundary ───────────────────────────────────────────────────────────

#[cfg(test)]
mod circle {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use dp_core::{BoundaryConfig, GeoError, GeoPoint, deg_to_m};

    use super::helpers::{assert_on_circle, init_logging};
    use crate::{BoundaryError, circle_arcs, circle_boundary};

    #[test]
    fn ring_is_closed() {
        init_logging();
        let ring = circle_boundary(GeoPoint::new(-88.04, 30.69), 2_000.0, &BoundaryConfig::new(1e-3)).unwrap();
        assert!(ring.len() > 3);
        assert_eq!(ring.first().unwrap(), ring.last().unwrap());
        assert!(ring.is_closed());
        assert!(!ring.is_degenerate());
    }

    #[test]
    fn one_degree_circle_at_origin() {
        init_logging();
        let center = GeoPoint::new(0.0, 0.0);
        let cfg = BoundaryConfig::new(0.01);
        let arcs = circle_arcs(center, 111_320.0, &cfg).unwrap();

        // Rightmost sample at exactly +1° (100 steps); 201 samples per arc.
        assert_eq!(arcs.upper.len(), 201);
        assert_eq!(arcs.lower.len(), 201);
        assert!((arcs.upper[0].lon - 1.0).abs() < 1e-9, "{}", arcs.upper[0]);

        // Crest of the upper arc, on the center's meridian.
        let crest = arcs.upper.iter().find(|p| p.lon == 0.0).unwrap();
        assert!((crest.lat - 1.0).abs() <= 0.02, "{crest}");
        let trough = arcs.lower.iter().find(|p| p.lon == 0.0).unwrap();
        assert!((trough.lat + 1.0).abs() <= 0.02, "{trough}");

        let ring = arcs.into_polygon();
        assert_eq!(ring.len(), 403);
        assert_on_circle(&ring, center, 111_320.0, cfg.step_deg);
    }

    #[test]
    fn arcs_run_east_to_west_then_west_to_east() {
        let center = GeoPoint::new(10.0, 45.0);
        let arcs = circle_arcs(center, 5_000.0, &BoundaryConfig::new(1e-3)).unwrap();
        assert!(arcs.upper.windows(2).all(|w| w[0].lon > w[1].lon));
        assert!(arcs.lower.windows(2).all(|w| w[0].lon < w[1].lon));
        assert!(arcs.upper.iter().all(|p| p.lat >= center.lat));
        assert!(arcs.lower.iter().all(|p| p.lat <= center.lat));
        assert_eq!(arcs.upper.first().unwrap().lon, arcs.lower.last().unwrap().lon);
        assert_eq!(arcs.upper.last().unwrap().lon, arcs.lower.first().unwrap().lon);
    }

    #[test]
    fn random_centers_stay_on_circle() {
        init_logging();
        let mut rng = SmallRng::seed_from_u64(2024);
        let cfg = BoundaryConfig::new(1e-3);
        for _ in 0..8 {
            let center = GeoPoint::new(rng.gen_range(-170.0..170.0), rng.gen_range(-60.0..60.0));
            let d = rng.gen_range(2_000.0..30_000.0);
            let ring = circle_boundary(center, d, &cfg).unwrap();
            assert!(ring.is_closed());
            assert_on_circle(&ring, center, d, cfg.step_deg);
        }
    }

    #[test]
    fn sub_step_radius_is_degenerate_but_closed() {
        init_logging();
        // 1 m is smaller than one 1e-5° step (~1.1 m) of longitude.
        let ring = circle_boundary(GeoPoint::new(0.0, 0.0), 1.0, &BoundaryConfig::new(1e-5)).unwrap();
        assert!(ring.len() > 2);
        assert!(ring.is_closed());
        assert!(ring.is_degenerate());
        assert!(ring.iter().all(|p| p.lon == 0.0));
    }

    #[test]
    fn non_positive_distance_is_rejected() {
        let cfg = BoundaryConfig::new(1e-3);
        for d in [-5.0, 0.0, f64::NAN] {
            let err = circle_boundary(GeoPoint::new(0.0, 0.0), d, &cfg).unwrap_err();
            assert!(matches!(err, BoundaryError::Geo(GeoError::InvalidInput(_))), "d = {d}: {err}");
        }
    }

    #[test]
    fn center_outside_domain_is_rejected() {
        let cfg = BoundaryConfig::new(1e-3);
        for center in [
            GeoPoint::new(0.0, 120.0),
            GeoPoint::new(0.0, -90.5),
            GeoPoint::new(181.0, 0.0),
            GeoPoint::new(f64::NAN, 0.0),
            GeoPoint::new(0.0, f64::INFINITY),
        ] {
            let err = circle_boundary(center, 5_000.0, &cfg).unwrap_err();
            assert!(matches!(err, BoundaryError::Geo(GeoError::InvalidInput(_))), "{center}: {err}");
        }
    }

    #[test]
    fn antimeridian_crossing_is_not_wrapped() {
        let center = GeoPoint::new(179.99, 0.0);
        let cfg = BoundaryConfig::new(1e-3);
        let ring = circle_boundary(center, 5_000.0, &cfg).unwrap();
        let (lo, hi) = ring.bounds().unwrap();
        assert!(hi.lon > 180.0, "{hi}");
        assert!(lo.lon < center.lon);
        assert!(ring.is_closed());
        assert_on_circle(&ring, center, 5_000.0, cfg.step_deg);
    }

    #[test]
    fn non_positive_step_is_rejected() {
        let err = circle_boundary(GeoPoint::new(0.0, 0.0), 1_000.0, &BoundaryConfig::new(0.0)).unwrap_err();
        assert!(matches!(err, BoundaryError::Geo(GeoError::InvalidInput(_))));
    }

    #[test]
    fn pole_enclosing_circle_is_best_effort() {
        init_logging();
        let center = GeoPoint::new(0.0, 89.9);
        let cfg = BoundaryConfig::new(0.05);
        let d = deg_to_m(0.5);
        let arcs = circle_arcs(center, d, &cfg).unwrap();

        // Every longitude is in range, so the scan stops after half a turn
        // each way.
        let half_turn = (180.0 / cfg.step_deg).floor() as usize;
        assert_eq!(arcs.upper.len(), 2 * half_turn + 1);
        assert!(arcs.upper.iter().all(|p| 90.0 - p.lat <= cfg.step_deg));
        assert!(arcs.lower.iter().all(|p| center.within(*p, d)));
        assert!(arcs.into_polygon().is_closed());
    }
}

// ── Rectangle boundary ────────────────────────────────────────────────────────

#[cfg(test)]
mod rect {
    use dp_core::{BoundaryConfig, GeoError, GeoPoint, deg_to_m, m_to_deg, translate};

    use crate::{BoundaryError, rectangle_boundary};

    #[test]
    fn outline_at_equator() {
        let center = GeoPoint::new(0.0, 0.0);
        let d = 1_000.0;
        let outline = rectangle_boundary(center, d, &BoundaryConfig::new(1e-3)).unwrap();

        // Half-span ≈ 0.00898°, so 18 samples per edge and 4 edges.
        assert_eq!(outline.len(), 72);
        assert!(!outline.is_closed());

        let half = m_to_deg(d);
        let first = outline.first().unwrap();
        assert!((first.lon + half).abs() < 1e-9 && (first.lat + half).abs() < 1e-12, "{first}");
    }

    #[test]
    fn points_lie_on_the_edges() {
        let center = GeoPoint::new(10.0, 45.0);
        let d = 2_000.0;
        let cfg = BoundaryConfig::new(5e-4);
        let sw = translate(center, -d, -d).unwrap();
        let ne = translate(center, d, d).unwrap();
        let outline = rectangle_boundary(center, d, &cfg).unwrap();

        let eps = 1e-9;
        let on_edge = |p: &GeoPoint| {
            (p.lon - sw.lon).abs() < eps
                || (p.lon - ne.lon).abs() < eps
                || (p.lat - sw.lat).abs() < eps
                || (p.lat - ne.lat).abs() < eps
        };
        assert!(outline.iter().all(on_edge));

        let (lo, hi) = outline.bounds().unwrap();
        assert!((lo.lon - sw.lon).abs() < eps && (lo.lat - sw.lat).abs() < eps);
        assert!(hi.lon <= ne.lon + eps && hi.lat <= ne.lat + eps);
    }

    #[test]
    fn halves_mirror_each_other() {
        let outline = rectangle_boundary(GeoPoint::new(0.0, 0.0), 1_000.0, &BoundaryConfig::new(1e-3)).unwrap();
        let pts = outline.points();
        let (a, b) = pts.split_at(pts.len() / 2);
        for (p, q) in a.iter().zip(b) {
            assert!((p.lon + q.lon).abs() < 1e-12, "{p} / {q}");
            assert!((p.lat + q.lat).abs() < 1e-12, "{p} / {q}");
        }
    }

    #[test]
    fn corner_on_pole_is_an_error() {
        let center = GeoPoint::new(0.0, 89.0);
        let err = rectangle_boundary(center, deg_to_m(1.0), &BoundaryConfig::new(1e-2)).unwrap_err();
        assert!(matches!(err, BoundaryError::Geo(GeoError::PoleSingularity { .. })), "{err}");
    }

    #[test]
    fn center_outside_domain_is_rejected() {
        let cfg = BoundaryConfig::new(1e-3);
        for center in [GeoPoint::new(0.0, 120.0), GeoPoint::new(f64::NAN, f64::NAN)] {
            let err = rectangle_boundary(center, 1_000.0, &cfg).unwrap_err();
            assert!(matches!(err, BoundaryError::Geo(GeoError::InvalidInput(_))), "{center}: {err}");
        }
    }

    #[test]
    fn negative_distance_is_rejected() {
        let err = rectangle_boundary(GeoPoint::new(0.0, 0.0), -5.0, &BoundaryConfig::new(1e-3)).unwrap_err();
        assert!(matches!(err, BoundaryError::Geo(GeoError::InvalidInput(_))));
    }
}

// ── Shape selector ────────────────────────────────────────────────────────────

#[cfg(test)]
mod shape {
    use dp_core::{BoundaryConfig, GeoPoint};

    use crate::Shape;

    #[test]
    fn dispatch_matches_closure_convention() {
        let cfg = BoundaryConfig::new(1e-3);
        let center = GeoPoint::new(0.0, 0.0);
        for shape in [Shape::Circle, Shape::Rectangle] {
            let poly = shape.generate(center, 1_000.0, &cfg).unwrap();
            assert_eq!(poly.is_closed(), shape.is_closed(), "{shape}");
        }
    }

    #[test]
    fn display() {
        assert_eq!(Shape::Circle.to_string(), "circle");
        assert_eq!(Shape::Rectangle.to_string(), "rectangle");
        assert_eq!(Shape::default(), Shape::Circle);
    }
}
