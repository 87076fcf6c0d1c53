// Host-side tests for mesh primitives and the clock scene builder.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod clock {
    include!("../src/core/clock.rs");
}
mod color {
    include!("../src/core/color.rs");
}
mod config {
    include!("../src/core/config.rs");
}
mod constants {
    include!("../src/core/constants.rs");
}
mod dial {
    include!("../src/core/dial.rs");
}
mod error {
    include!("../src/core/error.rs");
}
mod mesh {
    include!("../src/core/mesh.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}

use clock::*;
use config::ClockConfig;
use glam::Vec3;
use mesh::*;
use scene::{NodeKind, Scene};
use std::f32::consts::{FRAC_PI_2, TAU};

const TOL: f32 = 1e-4;

fn assert_indices_in_range(m: &MeshData) {
    assert_eq!(m.indices.len() % 3, 0);
    let n = m.vertex_count() as u32;
    assert!(m.indices.iter().all(|&i| i < n), "index out of range");
}

#[test]
fn cylinder_counts_and_bounds() {
    let m = cylinder(1.0, 1.0, 2.0, 8);
    assert_eq!(m.vertex_count(), 4 * 8 + 6);
    assert_eq!(m.triangle_count(), 4 * 8);
    assert_indices_in_range(&m);
    let (min, max) = m.bounds().unwrap();
    assert!((min[1] + 1.0).abs() < TOL && (max[1] - 1.0).abs() < TOL);
    for p in &m.positions {
        assert!(p[0].hypot(p[2]) <= 1.0 + TOL);
    }
}

#[test]
fn cuboid_extents_follow_arguments() {
    let m = cuboid(1.0, 2.0, 3.0);
    assert_eq!(m.vertex_count(), 8);
    assert_eq!(m.triangle_count(), 12);
    assert_indices_in_range(&m);
    let (min, max) = m.bounds().unwrap();
    assert_eq!(min, [-0.5, -1.0, -1.5]);
    assert_eq!(max, [0.5, 1.0, 1.5]);
}

#[test]
fn sphere_vertices_lie_on_radius() {
    let m = uv_sphere(2.0, 8, 6);
    assert_eq!(m.vertex_count(), 9 * 7);
    assert_eq!(m.triangle_count(), 8 * (2 * 6 - 2));
    assert_indices_in_range(&m);
    for p in &m.positions {
        let r = Vec3::from_array(*p).length();
        assert!((r - 2.0).abs() < TOL, "r={r}");
    }
}

#[test]
fn lathe_revolves_profile_around_y() {
    let profile = [[1.0, 0.0], [2.0, 1.0], [1.5, 2.0]];
    let m = lathe(&profile, 16);
    assert_eq!(m.vertex_count(), 17 * 3);
    assert_eq!(m.triangle_count(), 16 * 2 * 2);
    assert_indices_in_range(&m);
    for (i, p) in m.positions.iter().enumerate() {
        let src = profile[i % 3];
        assert!((p[0].hypot(p[2]) - src[0]).abs() < TOL);
        assert!((p[1] - src[1]).abs() < TOL);
    }
}

#[test]
fn lathe_needs_two_points() {
    assert_eq!(lathe(&[[1.0, 0.0]], 16), MeshData::default());
    assert!(MeshData::default().bounds().is_none());
}

#[test]
fn ticks_sit_on_their_circle() {
    let cfg = ClockConfig::default();
    for i in 0..60 {
        let t = tick_placement(&cfg, i);
        let dims = if t.big { cfg.big_tick } else { cfg.small_tick };
        let r = cfg.radius - dims.height / 2.0;
        let (x, z) = (t.position.x, t.position.z);
        assert!((x.hypot(z) - r).abs() < TOL, "tick {i} off circle");

        let a = -(TAU * i as f32 / 60.0) + FRAC_PI_2;
        assert!((x / r - a.cos()).abs() < TOL);
        assert!((-z / r - a.sin()).abs() < TOL);
        assert!((t.rotation_y + TAU * i as f32 / 60.0).abs() < TOL);
        assert!((t.position.y - (cfg.depth / 2.0 + dims.depth / 2.0)).abs() < TOL);
    }
}

#[test]
fn every_fifth_tick_is_big_and_only_zero_is_special() {
    let cfg = ClockConfig::default();
    let ticks: Vec<_> = (0..60).map(|i| tick_placement(&cfg, i)).collect();
    assert_eq!(ticks.iter().filter(|t| t.big).count(), 12);
    assert_eq!(ticks.iter().filter(|t| t.special).count(), 1);
    assert!(ticks[0].big && ticks[0].special);
    assert!(ticks[5].big && !ticks[5].special);
    assert!(!ticks[7].big);
    // twelve o'clock points at -z
    assert!(ticks[0].position.x.abs() < TOL);
    assert!((ticks[0].position.z + (cfg.radius - cfg.big_tick.height / 2.0)).abs() < TOL);
}

#[test]
fn ring_profile_is_a_closed_l() {
    let cfg = ClockConfig::default();
    let p = ring_profile(&cfg);
    assert_eq!(p[0], p[4]);
    assert!((p[0][0] - 30.05).abs() < TOL);
    assert!((p[2][0] - 32.05).abs() < TOL);
    assert!((p[1][1] - 2.0).abs() < TOL);
    assert!((p[3][1] + 1.0).abs() < TOL);
}

#[test]
fn hands_are_stacked_upwards() {
    let cfg = ClockConfig::default();
    let [h, m, s] = hand_heights(&cfg);
    assert!(h > cfg.depth / 2.0);
    assert!(h < m && m < s);
    assert!((h - 1.375).abs() < TOL);
    assert!((m - 2.0).abs() < TOL);
    assert!((s - 2.375).abs() < TOL);
}

#[test]
fn built_clock_has_expected_structure() {
    let cfg = ClockConfig {
        segments: 16,
        ..ClockConfig::default()
    };
    let mut scene = Scene::new();
    let c = build_clock(&mut scene, &cfg);
    assert_eq!(scene.roots(), &[c.root]);
    // 60 ticks, hands group, blob, ring
    assert_eq!(scene.node(c.root).children().len(), 63);
    assert_eq!(
        scene.node(c.hands.group).children(),
        &[c.hands.hour, c.hands.minute, c.hands.second]
    );
    assert!(matches!(scene.node(c.hands.group).kind, NodeKind::Group));
    assert_eq!(scene.mesh_node_count(), 66);
    assert_eq!(scene.meshes().len(), 6);

    let hour = scene.transform(c.hands.hour);
    assert_eq!(hour.scale, Vec3::new(0.5, 0.375, 7.5));
    let second = scene.transform(c.hands.second);
    assert_eq!(second.scale, Vec3::ONE);
}

#[test]
fn twin_is_flipped_below_and_shares_meshes() {
    let cfg = ClockConfig {
        segments: 16,
        ..ClockConfig::default()
    };
    let mut scene = Scene::new();
    let first = build_clock(&mut scene, &cfg);
    let meshes_before = scene.meshes().len();
    let twin = spawn_twin(&mut scene, &first, &cfg);

    assert_eq!(scene.meshes().len(), meshes_before);
    assert_eq!(scene.roots().len(), 2);
    assert_eq!(scene.mesh_node_count(), 132);
    assert_ne!(twin.hands.hour, first.hands.hour);

    // blob sits on the face: y = depth/2 locally, mirrored under the twin
    let blob = scene.node(twin.root).children()[61];
    let p = scene.world_matrix(blob).transform_point3(Vec3::ZERO);
    assert!((p - Vec3::new(0.0, -1.5 * cfg.depth, 0.0)).length() < TOL, "{p:?}");

    let original_blob = scene.node(first.root).children()[61];
    let q = scene.world_matrix(original_blob).transform_point3(Vec3::ZERO);
    assert!((q - Vec3::new(0.0, cfg.depth / 2.0, 0.0)).length() < TOL);
}
