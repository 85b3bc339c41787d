use super::*;
use crate::core::curve::{CurveSampler, CurveType};
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn positions(n: usize) -> Vec<Vec3> {
    (0..n)
        .map(|i| Vec3::new(i as f32 * 10.0, (i % 3) as f32 * 5.0, -(i as f32)))
        .collect()
}

fn set_with(n: usize) -> SplinePointSet {
    SplinePointSet::from_positions(positions(n), ARC_SEGMENTS, CurveSettings::default())
        .expect("gültige Startpositionen")
}

// ── Konstruktion ──

#[test]
fn test_new_uses_default_positions() {
    let set = SplinePointSet::new();
    assert_eq!(set.count(), MIN_POINTS);
    assert_eq!(set.positions(), &DEFAULT_POSITIONS);
    assert_eq!(set.outline().len(), ARC_SEGMENTS);
    assert_eq!(set.attached(), None);
}

#[test]
fn test_from_positions_keeps_count() {
    for n in [4usize, 5, 9, 40] {
        let set = set_with(n);
        assert_eq!(set.count(), n);
    }
}

#[test]
fn test_from_positions_rejects_too_few_points() {
    let result = SplinePointSet::from_positions(positions(3), ARC_SEGMENTS, CurveSettings::default());
    assert!(result.is_err());
}

#[test]
fn test_from_positions_rejects_tiny_resolution() {
    let result = SplinePointSet::from_positions(positions(4), 1, CurveSettings::default());
    assert!(result.is_err());
}

// ── add / remove ──

#[test]
fn test_remove_at_minimum_is_noop() {
    let mut set = set_with(4);
    let before = set.positions().to_vec();
    let revision = set.outline_revision();

    assert!(!set.remove_point());
    assert!(!set.remove_point());

    assert_eq!(set.count(), 4);
    assert_eq!(set.positions(), before.as_slice());
    assert_eq!(set.outline_revision(), revision);
}

#[test]
fn test_add_then_remove_restores_prior_state() {
    let mut set = set_with(6);
    let before = set.positions().to_vec();

    let index = set.add_point(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(index, 6);
    assert_eq!(set.count(), 7);

    assert!(set.remove_point());
    assert_eq!(set.count(), 6);
    assert_eq!(set.positions(), before.as_slice());
}

#[test]
fn test_add_random_point_stays_inside_bounds() {
    let mut set = SplinePointSet::new();
    let mut rng = StdRng::seed_from_u64(7);
    let bounds = SpawnBounds::default();

    for _ in 0..50 {
        let index = set.add_random_point(&mut rng, &bounds);
        let p = set.positions()[index];
        assert!(p.cmpge(bounds.min).all(), "{:?} unter Minimum", p);
        assert!(p.cmplt(bounds.max).all(), "{:?} über Maximum", p);
    }
    assert_eq!(set.count(), MIN_POINTS + 50);
}

#[test]
fn test_spawn_bounds_with_empty_axis_returns_min() {
    let bounds = SpawnBounds {
        min: Vec3::new(5.0, 0.0, 1.0),
        max: Vec3::new(5.0, 10.0, 1.0),
    };
    let mut rng = StdRng::seed_from_u64(1);
    let p = bounds.sample(&mut rng);
    assert_eq!(p.x, 5.0);
    assert_eq!(p.z, 1.0);
    assert!((0.0..10.0).contains(&p.y));
}

#[test]
fn test_spawn_bounds_with_overflowing_span_returns_min() {
    let bounds = SpawnBounds {
        min: Vec3::new(-3.0e38, 0.0, 0.0),
        max: Vec3::new(3.0e38, 1.0, 1.0),
    };
    assert!(!bounds.is_valid());
    assert!(SpawnBounds::default().is_valid());

    let mut rng = StdRng::seed_from_u64(3);
    let p = bounds.sample(&mut rng);
    assert_eq!(p.x, -3.0e38);
    assert!((0.0..1.0).contains(&p.y));
}

#[test]
fn test_add_remove_outline_is_bit_identical() {
    let mut set = SplinePointSet::new();
    let initial_points = set.positions().to_vec();
    let initial_outline = set.outline().to_vec();
    let mut rng = StdRng::seed_from_u64(42);

    set.add_random_point(&mut rng, &SpawnBounds::default());
    assert_eq!(set.count(), 5);
    assert_ne!(set.outline(), initial_outline.as_slice());

    let revision = set.outline_revision();
    assert!(set.remove_point());
    assert_eq!(set.outline_revision(), revision + 1);

    assert_eq!(set.positions(), initial_points.as_slice());
    assert_eq!(set.outline(), initial_outline.as_slice());
}

// ── Handle-Bindung ──

#[test]
fn test_removing_attached_point_detaches_handle() {
    let mut set = set_with(5);
    assert!(set.attach_handle(4));
    set.set_dragging(true);

    assert!(set.remove_point());
    assert_eq!(set.attached(), None);
    assert!(!set.handle().is_dragging());
}

#[test]
fn test_removing_other_point_keeps_attachment() {
    let mut set = set_with(6);
    assert!(set.attach_handle(1));
    assert!(set.remove_point());
    assert_eq!(set.attached(), Some(1));
}

#[test]
fn test_attach_out_of_range_is_ignored() {
    let mut set = set_with(4);
    assert!(!set.attach_handle(4));
    assert_eq!(set.attached(), None);
}

#[test]
fn test_translate_attached_moves_point_and_regenerates() {
    let mut set = set_with(4);
    let revision = set.outline_revision();

    assert!(!set.translate_attached(Vec3::X));
    assert_eq!(set.outline_revision(), revision);

    set.attach_handle(0);
    let before = set.positions()[0];
    assert!(set.translate_attached(Vec3::new(1.0, -2.0, 0.5)));
    assert_eq!(set.positions()[0], before + Vec3::new(1.0, -2.0, 0.5));
    assert_eq!(set.outline_revision(), revision + 1);
    assert_eq!(set.outline()[0], set.positions()[0]);
}

#[test]
fn test_point_mut_requires_notification() {
    let mut set = set_with(4);
    let stale = set.outline().to_vec();

    if let Some(p) = set.point_mut(0) {
        *p = Vec3::new(-100.0, 0.0, 0.0);
    }
    assert_eq!(set.outline(), stale.as_slice());

    set.notify_point_changed();
    assert_eq!(set.outline()[0], Vec3::new(-100.0, 0.0, 0.0));
}

#[test]
fn test_set_point_out_of_range() {
    let mut set = set_with(4);
    let revision = set.outline_revision();
    assert!(!set.set_point(10, Vec3::ONE));
    assert_eq!(set.outline_revision(), revision);
    assert!(set.set_point(3, Vec3::ONE));
    assert_eq!(set.positions()[3], Vec3::ONE);
}

// ── load ──

#[test]
fn test_load_grows_to_target() {
    let mut set = SplinePointSet::new();
    let target = positions(6);

    set.load(&target);

    assert_eq!(set.count(), 6);
    assert_eq!(set.positions(), target.as_slice());
}

#[test]
fn test_load_shrinks_to_target() {
    let mut set = set_with(9);
    let target = positions(5)
        .into_iter()
        .map(|p| p + Vec3::splat(0.5))
        .collect::<Vec<_>>();

    set.load(&target);

    assert_eq!(set.count(), 5);
    assert_eq!(set.positions(), target.as_slice());
}

#[test]
fn test_load_same_length_regenerates_once() {
    let mut set = set_with(5);
    let revision = set.outline_revision();
    let target: Vec<Vec3> = positions(5).into_iter().map(|p| p * 2.0).collect();

    set.load(&target);

    assert_eq!(set.outline_revision(), revision + 1);
    assert_eq!(set.positions(), target.as_slice());
}

#[test]
fn test_load_different_length_regenerates_once() {
    let mut set = set_with(8);
    let revision = set.outline_revision();

    set.load(&positions(4));
    assert_eq!(set.outline_revision(), revision + 1);

    set.load(&positions(12));
    assert_eq!(set.outline_revision(), revision + 2);
}

#[test]
fn test_load_below_minimum_floors_at_minimum() {
    let mut set = set_with(7);
    let before = set.positions().to_vec();
    let target = vec![Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 2.0, 2.0)];

    set.load(&target);

    assert_eq!(set.count(), MIN_POINTS);
    assert_eq!(&set.positions()[..2], target.as_slice());
    assert_eq!(&set.positions()[2..], &before[2..MIN_POINTS]);
}

#[test]
fn test_load_empty_keeps_minimum() {
    let mut set = set_with(4);
    let before = set.positions().to_vec();
    set.load(&[]);
    assert_eq!(set.positions(), before.as_slice());
}

#[test]
fn test_load_shrinking_detaches_removed_handle() {
    let mut set = set_with(8);
    set.attach_handle(6);
    set.load(&positions(5));
    assert_eq!(set.attached(), None);

    set.attach_handle(2);
    set.load(&positions(4));
    assert_eq!(set.attached(), Some(2));
}

// ── Outline ──

#[test]
fn test_outline_length_is_constant() {
    let mut set = set_with(4);
    for n in [4usize, 10, 100, 5] {
        set.load(&positions(n));
        assert_eq!(set.outline().len(), ARC_SEGMENTS, "n={}", n);
    }
}

#[test]
fn test_outline_endpoints_match_first_and_last_point() {
    let set = set_with(7);
    let first = set.positions()[0];
    let last = set.positions()[6];
    let outline = set.outline();

    assert_eq!(outline[0], first);
    let end = outline[ARC_SEGMENTS - 1];
    assert_relative_eq!(end.x, last.x, epsilon = 1e-3);
    assert_relative_eq!(end.y, last.y, epsilon = 1e-3);
    assert_relative_eq!(end.z, last.z, epsilon = 1e-3);
}

#[test]
fn test_outline_samples_match_curve() {
    let set = set_with(5);
    let curve = set.curve();
    for (i, sample) in set.outline().iter().enumerate() {
        let t = i as f32 / (ARC_SEGMENTS - 1) as f32;
        assert_eq!(*sample, curve.point_at(t));
    }
}

#[test]
fn test_custom_resolution() {
    let set = SplinePointSet::from_positions(positions(4), 17, CurveSettings::default())
        .expect("gültige Startpositionen");
    assert_eq!(set.outline().len(), 17);
    assert_eq!(set.resolution(), 17);
}

#[test]
fn test_curve_settings_change_regenerates() {
    let mut set = set_with(5);
    let revision = set.outline_revision();
    let uniform_outline = set.outline().to_vec();

    set.set_curve_settings(CurveSettings::default());
    assert_eq!(set.outline_revision(), revision);

    set.set_curve_settings(CurveSettings {
        curve_type: CurveType::Chordal,
        ..CurveSettings::default()
    });
    assert_eq!(set.outline_revision(), revision + 1);
    assert_ne!(set.outline(), uniform_outline.as_slice());
}

#[test]
fn test_regeneration_is_deterministic() {
    let mut a = set_with(6);
    let b = set_with(6);
    a.regenerate_outline();
    a.regenerate_outline();
    assert_eq!(a.outline(), b.outline());
}

// ── Export ──

#[test]
fn test_export_lists_every_point() {
    let set = SplinePointSet::new();
    let text = set.export_points();
    assert_eq!(text.matches("Vec3::new(").count(), MIN_POINTS);
    assert!(text.starts_with("vec!["));
    assert!(text.ends_with(']'));
}
