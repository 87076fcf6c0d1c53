// Retained-mode scene graph.
//
// Nodes live in an arena and are addressed by typed handles handed out at
// construction time. Mesh data is stored once and shared by every node that
// references it, so cloning a subtree only copies transforms and materials.

use super::color::Color;
use super::mesh::MeshData;
use glam::{Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshId(usize);

impl MeshId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Unlit, single-color surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
}

/// Local translation/rotation/scale, applied as T · R · S.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    #[inline]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeKind {
    Group,
    Mesh { mesh: MeshId, material: Material },
}

#[derive(Clone, Debug)]
pub struct Node {
    pub transform: Transform,
    pub kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Old-to-new handle mapping produced by [`Scene::clone_subtree`].
#[derive(Clone, Debug, Default)]
pub struct NodeMap {
    pairs: Vec<(NodeId, NodeId)>,
}

impl NodeMap {
    pub fn get(&self, old: NodeId) -> Option<NodeId> {
        self.pairs.iter().find(|(o, _)| *o == old).map(|(_, n)| *n)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    nodes: Vec<Node>,
    meshes: Vec<MeshData>,
    roots: Vec<NodeId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_mesh(&mut self, mesh: MeshData) -> MeshId {
        self.meshes.push(mesh);
        MeshId(self.meshes.len() - 1)
    }

    pub fn meshes(&self) -> &[MeshData] {
        &self.meshes
    }

    pub fn mesh(&self, id: MeshId) -> &MeshData {
        &self.meshes[id.0]
    }

    pub fn add_group(&mut self, parent: Option<NodeId>, transform: Transform) -> NodeId {
        self.insert(parent, transform, NodeKind::Group)
    }

    pub fn add_mesh_node(
        &mut self,
        parent: Option<NodeId>,
        mesh: MeshId,
        material: Material,
        transform: Transform,
    ) -> NodeId {
        self.insert(parent, transform, NodeKind::Mesh { mesh, material })
    }

    fn insert(&mut self, parent: Option<NodeId>, transform: Transform, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            transform,
            kind,
            parent,
            children: Vec::new(),
        });
        self.attach(id, parent);
        id
    }

    fn attach(&mut self, id: NodeId, parent: Option<NodeId>) {
        self.nodes[id.0].parent = parent;
        match parent {
            Some(p) => self.nodes[p.0].children.push(id),
            None => self.roots.push(id),
        }
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn transform(&self, id: NodeId) -> &Transform {
        &self.nodes[id.0].transform
    }

    pub fn transform_mut(&mut self, id: NodeId) -> &mut Transform {
        &mut self.nodes[id.0].transform
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of mesh nodes reachable from the roots, i.e. draws per frame.
    pub fn mesh_node_count(&self) -> usize {
        let mut n = 0;
        self.visit_meshes(|_, _, _| n += 1);
        n
    }

    /// Deep-copy the subtree rooted at `id` as a new top-level root. Meshes
    /// are shared with the original.
    pub fn clone_subtree(&mut self, id: NodeId) -> (NodeId, NodeMap) {
        let mut map = NodeMap::default();
        let new_root = self.clone_rec(id, None, &mut map);
        (new_root, map)
    }

    fn clone_rec(&mut self, src: NodeId, parent: Option<NodeId>, map: &mut NodeMap) -> NodeId {
        let (transform, kind, children) = {
            let n = &self.nodes[src.0];
            (n.transform, n.kind, n.children.clone())
        };
        let dst = self.insert(parent, transform, kind);
        map.pairs.push((src, dst));
        for child in children {
            self.clone_rec(child, Some(dst), map);
        }
        dst
    }

    /// Product of the local matrices from the root down to `id`.
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let mut m = self.nodes[id.0].transform.matrix();
        let mut cur = self.nodes[id.0].parent;
        while let Some(p) = cur {
            m = self.nodes[p.0].transform.matrix() * m;
            cur = self.nodes[p.0].parent;
        }
        m
    }

    /// Depth-first walk over every mesh node with its world matrix.
    pub fn visit_meshes(&self, mut f: impl FnMut(Mat4, MeshId, Material)) {
        let mut stack: Vec<(NodeId, Mat4)> = self
            .roots
            .iter()
            .rev()
            .map(|r| (*r, Mat4::IDENTITY))
            .collect();
        while let Some((id, parent_world)) = stack.pop() {
            let node = &self.nodes[id.0];
            let world = parent_world * node.transform.matrix();
            if let NodeKind::Mesh { mesh, material } = node.kind {
                f(world, mesh, material);
            }
            for child in node.children.iter().rev() {
                stack.push((*child, world));
            }
        }
    }
}
