//! # Mesh Data Structure
//!
//! Boundary mesh: an ordered vertex list plus an ordered triangle list.
//! Triangle order is significant; `i0 → i1 → i2` defines the outward normal
//! by the right-hand rule.

use std::collections::HashMap;

use glam::DVec3;

use crate::error::{MeshError, Result};

/// A triangle mesh with vertices and indices.
///
/// Duplicated vertices are legal until [`crate::cleanup`] runs. A watertight
/// mesh is a target, not an invariant: slot channels are open on purpose.
///
/// # Example
///
/// ```rust
/// use joinery_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions in millimeters
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Vertex normals, filled in by cleanup validation
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            normals: None,
        }
    }

    /// Creates a mesh from raw arrays without checking indices.
    ///
    /// Use [`Mesh::check_indices`] (or cleanup, which calls it) before
    /// trusting the result.
    pub fn from_parts(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
            normals: None,
        }
    }

    /// Consumes the mesh and returns its vertex and triangle arrays.
    pub fn into_parts(self) -> (Vec<DVec3>, Vec<[u32; 3]>) {
        (self.vertices, self.triangles)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles ("no feature").
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Adds a quad `a → b → c → d` as two triangles with fresh vertices.
    ///
    /// With `outward` the quad keeps the winding of `a → b → c`; otherwise
    /// both triangles are reversed.
    pub fn add_quad(&mut self, quad: [DVec3; 4], outward: bool) {
        let base = self.add_vertex(quad[0]);
        for corner in &quad[1..] {
            self.add_vertex(*corner);
        }
        if outward {
            self.add_triangle(base, base + 1, base + 2);
            self.add_triangle(base, base + 2, base + 3);
        } else {
            self.add_triangle(base, base + 2, base + 1);
            self.add_triangle(base, base + 3, base + 2);
        }
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns the vertex normals, if computed.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes area-weighted vertex normals.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for (index, tri) in self.triangles.iter().enumerate() {
            let normal = self.face_normal(index);
            for &v in tri {
                normals[v as usize] += normal;
            }
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Unnormalized face normal (length is twice the triangle area).
    pub fn face_normal(&self, index: usize) -> DVec3 {
        let [a, b, c] = self.corners(index);
        (b - a).cross(c - a)
    }

    /// Area of one triangle.
    pub fn triangle_area(&self, index: usize) -> f64 {
        0.5 * self.face_normal(index).length()
    }

    /// Centroid of one triangle.
    pub fn triangle_centroid(&self, index: usize) -> DVec3 {
        let [a, b, c] = self.corners(index);
        (a + b + c) / 3.0
    }

    /// Total surface area.
    pub fn surface_area(&self) -> f64 {
        (0..self.triangles.len()).map(|i| self.triangle_area(i)).sum()
    }

    /// Signed enclosed volume (positive for a closed, outward-wound solid).
    pub fn signed_volume(&self) -> f64 {
        (0..self.triangles.len())
            .map(|i| {
                let [a, b, c] = self.corners(i);
                a.dot(b.cross(c)) / 6.0
            })
            .sum()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Returns a translated copy.
    pub fn translated(mut self, offset: DVec3) -> Self {
        self.translate(offset);
        self
    }

    /// Merges another mesh into this one.
    ///
    /// Normals are dropped: they describe the old vertex set.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
        self.normals = None;
    }

    /// Concatenates meshes in order.
    pub fn concatenate(parts: impl IntoIterator<Item = Mesh>) -> Mesh {
        let mut out = Mesh::new();
        for part in parts {
            out.merge(&part);
        }
        out
    }

    /// Reverses the winding of every triangle.
    pub fn flip_winding(&mut self) {
        for tri in &mut self.triangles {
            tri.swap(1, 2);
        }
        if let Some(normals) = &mut self.normals {
            for n in normals {
                *n = -*n;
            }
        }
    }

    /// Verifies that every triangle index refers to an existing vertex.
    pub fn check_indices(&self) -> Result<()> {
        let vertex_count = self.vertices.len();
        for (triangle, tri) in self.triangles.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::IndexViolation {
                    triangle,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// Returns true if every undirected edge is shared by exactly two
    /// triangles that traverse it in opposite directions.
    ///
    /// Works on indices, so run cleanup first to weld coincident vertices.
    pub fn is_watertight(&self) -> bool {
        if self.triangles.is_empty() {
            return false;
        }

        let mut directed: HashMap<(u32, u32), u32> = HashMap::new();
        for tri in &self.triangles {
            for k in 0..3 {
                *directed.entry((tri[k], tri[(k + 1) % 3])).or_insert(0) += 1;
            }
        }

        directed
            .iter()
            .all(|(&(a, b), &count)| count == 1 && directed.get(&(b, a)) == Some(&1))
    }

    fn corners(&self, index: usize) -> [DVec3; 3] {
        let tri = self.triangles[index];
        [
            self.vertices[tri[0] as usize],
            self.vertices[tri[1] as usize],
            self.vertices[tri[2] as usize],
        ]
    }
}
