// Clock scene builder.
//
// A clock is a body cylinder that parents its ticks, the hands group, the
// blob and the outer ring. The second clock is a clone of the first, moved
// below it and flipped upside down.

use super::config::{ClockConfig, Dims};
use super::constants::{BIG_TICK_EVERY, TICK_COUNT};
use super::dial::{dial_angle, face_point};
use super::mesh;
use super::scene::{Material, NodeId, NodeMap, Scene, Transform};
use chrono_tz::Tz;
use glam::{Quat, Vec3};
use std::f32::consts::PI;

/// Handles to the three hands and the group that holds them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandHandles {
    pub group: NodeId,
    pub hour: NodeId,
    pub minute: NodeId,
    pub second: NodeId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockHandles {
    pub root: NodeId,
    pub hands: HandHandles,
}

impl ClockHandles {
    /// Translate handles through a clone mapping.
    pub fn remap(&self, map: &NodeMap) -> Option<Self> {
        Some(Self {
            root: map.get(self.root)?,
            hands: HandHandles {
                group: map.get(self.hands.group)?,
                hour: map.get(self.hands.hour)?,
                minute: map.get(self.hands.minute)?,
                second: map.get(self.hands.second)?,
            },
        })
    }
}

/// A clock subtree bound to the zone it displays.
#[derive(Clone, Debug)]
pub struct ClockInstance {
    pub handles: ClockHandles,
    pub time_zone: Tz,
}

/// Where one tick sits on the face and which geometry it uses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickPlacement {
    pub big: bool,
    pub special: bool,
    pub position: Vec3,
    pub rotation_y: f32,
}

pub fn tick_placement(cfg: &ClockConfig, index: u32) -> TickPlacement {
    let big = index % BIG_TICK_EVERY == 0;
    let dims = if big { cfg.big_tick } else { cfg.small_tick };
    let angle = dial_angle(index, TICK_COUNT);
    let (x, z) = face_point(angle, cfg.radius - dims.height / 2.0);
    TickPlacement {
        big,
        special: index == 0,
        position: Vec3::new(x, cfg.depth / 2.0 + dims.depth / 2.0, z),
        rotation_y: -angle,
    }
}

/// The "L" cross-section swept around the body to form the outer ring.
pub fn ring_profile(cfg: &ClockConfig) -> [[f32; 2]; 5] {
    let inner = cfg.radius + cfg.delta;
    let outer = cfg.radius + cfg.outer_ring.thickness + cfg.delta;
    let half = cfg.depth / 2.0;
    [
        [inner, -half],
        [inner, half + cfg.outer_ring.protrusion],
        [outer, half],
        [outer, -half],
        [inner, -half],
    ]
}

/// Resting heights of the hour, minute and second hands. Each hand sits on
/// top of the previous one.
pub fn hand_heights(cfg: &ClockConfig) -> [f32; 3] {
    let face = cfg.depth / 2.0;
    let hd = cfg.hour_hand.dims.depth;
    let md = cfg.minute_hand.dims.depth;
    let sd = cfg.second_hand.dims.depth;
    [face + hd / 2.0, face + hd + md / 2.0, face + hd + md + sd / 2.0]
}

#[inline]
fn half_extents(d: Dims) -> Vec3 {
    // unit sphere stretched so its long axis lies along z
    Vec3::new(d.width / 2.0, d.depth / 2.0, d.height / 2.0)
}

/// Build one clock as a new scene root.
pub fn build_clock(scene: &mut Scene, cfg: &ClockConfig) -> ClockHandles {
    let seg = cfg.segments;

    let body_mesh = scene.add_mesh(mesh::cylinder(cfg.radius, cfg.radius, cfg.depth, seg));
    let root = scene.add_mesh_node(
        None,
        body_mesh,
        Material {
            color: cfg.body_color,
        },
        Transform::IDENTITY,
    );

    let small_tick = scene.add_mesh(mesh::cuboid(
        cfg.small_tick.width,
        cfg.small_tick.depth,
        cfg.small_tick.height,
    ));
    let big_tick = scene.add_mesh(mesh::cuboid(
        cfg.big_tick.width,
        cfg.big_tick.depth,
        cfg.big_tick.height,
    ));
    for i in 0..TICK_COUNT {
        let t = tick_placement(cfg, i);
        let color = if t.special {
            cfg.special_tick_color
        } else {
            cfg.simple_tick_color
        };
        scene.add_mesh_node(
            Some(root),
            if t.big { big_tick } else { small_tick },
            Material { color },
            Transform::from_translation(t.position).with_rotation(Quat::from_rotation_y(t.rotation_y)),
        );
    }

    let sphere = scene.add_mesh(mesh::uv_sphere(1.0, seg, seg));
    let sd = cfg.second_hand.dims;
    let second_mesh = scene.add_mesh(mesh::cuboid(sd.width, sd.depth, sd.height));
    let [hour_y, minute_y, second_y] = hand_heights(cfg);

    let group = scene.add_group(Some(root), Transform::IDENTITY);
    let hour = scene.add_mesh_node(
        Some(group),
        sphere,
        Material {
            color: cfg.hour_hand.color,
        },
        Transform::from_translation(Vec3::new(0.0, hour_y, 0.0))
            .with_scale(half_extents(cfg.hour_hand.dims)),
    );
    let minute = scene.add_mesh_node(
        Some(group),
        sphere,
        Material {
            color: cfg.minute_hand.color,
        },
        Transform::from_translation(Vec3::new(0.0, minute_y, 0.0))
            .with_scale(half_extents(cfg.minute_hand.dims)),
    );
    let second = scene.add_mesh_node(
        Some(group),
        second_mesh,
        Material {
            color: cfg.second_hand.color,
        },
        Transform::from_translation(Vec3::new(0.0, second_y, 0.0)),
    );

    scene.add_mesh_node(
        Some(root),
        sphere,
        Material {
            color: cfg.blob.color,
        },
        Transform::from_translation(Vec3::new(0.0, cfg.depth / 2.0, 0.0))
            .with_scale(half_extents(cfg.blob.dims)),
    );

    let ring = scene.add_mesh(mesh::lathe(&ring_profile(cfg), seg));
    scene.add_mesh_node(
        Some(root),
        ring,
        Material {
            color: cfg.outer_ring.color,
        },
        Transform::IDENTITY,
    );

    log::debug!(
        "[clock] built root={:?} nodes={} meshes={}",
        root,
        scene.node_count(),
        scene.meshes().len()
    );

    ClockHandles {
        root,
        hands: HandHandles {
            group,
            hour,
            minute,
            second,
        },
    }
}

/// Clone `first` and place the copy under it, flipped half a turn about z.
pub fn spawn_twin(scene: &mut Scene, first: &ClockHandles, cfg: &ClockConfig) -> ClockHandles {
    let (_, map) = scene.clone_subtree(first.root);
    // every handle of `first` is inside the cloned subtree
    let twin = first.remap(&map).unwrap_or(*first);
    let t = scene.transform_mut(twin.root);
    t.translation.y = -cfg.depth;
    t.rotation = Quat::from_rotation_z(PI);
    twin
}

/// Build both clocks and bind them to their zones.
pub fn build_clock_pair(scene: &mut Scene, cfg: &ClockConfig, zones: [Tz; 2]) -> [ClockInstance; 2] {
    let first = build_clock(scene, cfg);
    let second = spawn_twin(scene, &first, cfg);
    [
        ClockInstance {
            handles: first,
            time_zone: zones[0],
        },
        ClockInstance {
            handles: second,
            time_zone: zones[1],
        },
    ]
}
