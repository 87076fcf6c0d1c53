// Procedural triangle meshes for the clock parts.
//
// Conventions follow the usual scene-graph primitives: round shapes revolve
// around +Y, a revolution angle of 0 points along +Z and x = r·sin(θ).

use std::f32::consts::{PI, TAU};

/// Indexed triangle list in object space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds as `(min, max)`; `None` for an empty mesh.
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let first = *self.positions.first()?;
        let mut min = first;
        let mut max = first;
        for p in &self.positions[1..] {
            for k in 0..3 {
                min[k] = min[k].min(p[k]);
                max[k] = max[k].max(p[k]);
            }
        }
        Some((min, max))
    }

    fn push(&mut self, p: [f32; 3]) -> u32 {
        self.positions.push(p);
        (self.positions.len() - 1) as u32
    }

    fn tri(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }
}

/// Capped cylinder centered on the origin with its axis along +Y.
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> MeshData {
    let seg = radial_segments.max(3);
    let half = height / 2.0;
    let mut mesh = MeshData::default();

    // side wall: row 0 on top, row 1 at the bottom
    for (y, r) in [(half, radius_top), (-half, radius_bottom)] {
        for i in 0..=seg {
            let theta = i as f32 / seg as f32 * TAU;
            mesh.push([r * theta.sin(), y, r * theta.cos()]);
        }
    }
    let row = seg + 1;
    for i in 0..seg {
        let a = i;
        let b = i + row;
        let c = i + 1 + row;
        let d = i + 1;
        mesh.tri(a, b, d);
        mesh.tri(b, c, d);
    }

    for (y, r, top) in [(half, radius_top, true), (-half, radius_bottom, false)] {
        let center = mesh.push([0.0, y, 0.0]);
        let start = center + 1;
        for i in 0..=seg {
            let theta = i as f32 / seg as f32 * TAU;
            mesh.push([r * theta.sin(), y, r * theta.cos()]);
        }
        for i in 0..seg {
            if top {
                mesh.tri(center, start + i, start + i + 1);
            } else {
                mesh.tri(center, start + i + 1, start + i);
            }
        }
    }
    mesh
}

/// Axis-aligned box centered on the origin: x = width, y = height, z = depth.
pub fn cuboid(width: f32, height: f32, depth: f32) -> MeshData {
    let (hx, hy, hz) = (width / 2.0, height / 2.0, depth / 2.0);
    let mut mesh = MeshData::default();
    for i in 0..8u32 {
        let x = if i & 1 == 0 { -hx } else { hx };
        let y = if i & 2 == 0 { -hy } else { hy };
        let z = if i & 4 == 0 { -hz } else { hz };
        mesh.push([x, y, z]);
    }
    // corner index = x | y<<1 | z<<2
    const FACES: [[u32; 4]; 6] = [
        [1, 3, 7, 5], // +x
        [0, 4, 6, 2], // -x
        [2, 6, 7, 3], // +y
        [0, 1, 5, 4], // -y
        [4, 5, 7, 6], // +z
        [0, 2, 3, 1], // -z
    ];
    for [a, b, c, d] in FACES {
        mesh.tri(a, b, c);
        mesh.tri(a, c, d);
    }
    mesh
}

/// Latitude/longitude sphere centered on the origin.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = MeshData::default();
    for iy in 0..=hs {
        let phi = iy as f32 / hs as f32 * PI;
        for ix in 0..=ws {
            let theta = ix as f32 / ws as f32 * TAU;
            mesh.push([
                -radius * theta.cos() * phi.sin(),
                radius * phi.cos(),
                radius * theta.sin() * phi.sin(),
            ]);
        }
    }
    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // the pole rows collapse to a single triangle per quad
            if iy != 0 {
                mesh.tri(a, b, d);
            }
            if iy != hs - 1 {
                mesh.tri(b, c, d);
            }
        }
    }
    mesh
}

/// Revolve a 2D profile (x = distance from the axis, y = height) a full turn
/// around +Y.
pub fn lathe(profile: &[[f32; 2]], segments: u32) -> MeshData {
    let seg = segments.max(3);
    let n = profile.len() as u32;
    let mut mesh = MeshData::default();
    if n < 2 {
        return mesh;
    }
    for i in 0..=seg {
        let phi = i as f32 / seg as f32 * TAU;
        let (s, c) = phi.sin_cos();
        for p in profile {
            mesh.push([p[0] * s, p[1], p[0] * c]);
        }
    }
    for i in 0..seg {
        for j in 0..n - 1 {
            let base = j + i * n;
            let a = base;
            let b = base + n;
            let c = base + n + 1;
            let d = base + 1;
            mesh.tri(a, b, d);
            mesh.tri(c, d, b);
        }
    }
    mesh
}
