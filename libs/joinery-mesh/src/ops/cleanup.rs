//! # Mesh Cleanup
//!
//! Portable sanitation pass run on every generator output before export.
//!
//! The pass is an ordered list of independently-failable steps. Each step
//! works on a copy of the current mesh; if it fails, the failure is logged
//! and the previous mesh carries on to the next step. The only error
//! `cleanup` returns is an out-of-range triangle index, which is checked
//! before any step runs.
//!
//! Applying `cleanup` twice gives the same mesh as applying it once.

use std::collections::{HashMap, HashSet};

use config::params::Tolerances;
use glam::DVec3;

use crate::error::{MeshError, Result};
use crate::mesh::Mesh;

type Step = fn(Mesh, &Tolerances) -> Result<Mesh>;

/// Steps in execution order. Merging can collapse triangles, so the
/// degenerate and duplicate passes run again after it.
const STEPS: &[(&str, Step)] = &[
    ("remove_degenerate", remove_degenerate),
    ("remove_duplicates", remove_duplicates),
    ("merge_vertices", merge_vertices),
    ("remove_degenerate", remove_degenerate),
    ("remove_duplicates", remove_duplicates),
    ("remove_unreferenced", remove_unreferenced),
    ("validate", validate),
];

/// Sanitizes a mesh: drops degenerate and duplicate triangles, welds
/// coincident vertices, drops unreferenced vertices and computes normals.
///
/// # Errors
///
/// [`MeshError::IndexViolation`] if any triangle references a missing vertex.
///
/// # Example
///
/// ```rust
/// use config::params::Tolerances;
/// use joinery_mesh::{cleanup, Mesh};
///
/// let cleaned = cleanup(Mesh::new(), &Tolerances::default()).unwrap();
/// assert!(cleaned.is_empty());
/// ```
pub fn cleanup(mesh: Mesh, tolerances: &Tolerances) -> Result<Mesh> {
    mesh.check_indices()?;

    let input_vertices = mesh.vertex_count();
    let input_triangles = mesh.triangle_count();

    let mut current = mesh;
    for (name, step) in STEPS {
        match step(current.clone(), tolerances) {
            Ok(next) => current = next,
            Err(err) => tracing::warn!(step = *name, error = %err, "cleanup step skipped"),
        }
    }

    tracing::debug!(
        vertices_in = input_vertices,
        triangles_in = input_triangles,
        vertices = current.vertex_count(),
        triangles = current.triangle_count(),
        "cleanup finished"
    );

    Ok(current)
}

/// Drops triangles whose area is below `degenerate_area`.
pub fn remove_degenerate(mesh: Mesh, tolerances: &Tolerances) -> Result<Mesh> {
    let keep: Vec<bool> = (0..mesh.triangle_count())
        .map(|i| {
            let tri = mesh.triangle(i);
            let repeated = tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2];
            !repeated && !(mesh.triangle_area(i) < tolerances.degenerate_area)
        })
        .collect();

    let (vertices, triangles) = mesh.into_parts();
    let triangles = triangles
        .into_iter()
        .zip(keep)
        .filter_map(|(tri, keep)| keep.then_some(tri))
        .collect();
    Ok(Mesh::from_parts(vertices, triangles))
}

/// Keeps only the first triangle of each vertex-index set, whatever its
/// rotation or winding.
pub fn remove_duplicates(mesh: Mesh, _tolerances: &Tolerances) -> Result<Mesh> {
    let (vertices, triangles) = mesh.into_parts();
    let mut seen = HashSet::with_capacity(triangles.len());
    let triangles = triangles
        .into_iter()
        .filter(|tri| {
            let mut key = *tri;
            key.sort_unstable();
            seen.insert(key)
        })
        .collect();
    Ok(Mesh::from_parts(vertices, triangles))
}

/// Welds vertices closer than `merge_distance` and remaps triangle indices.
///
/// Vertices are visited in order. A vertex with no earlier representative
/// within the tolerance becomes one and keeps its position; every later
/// vertex within the tolerance maps onto it. Representatives are therefore
/// more than `merge_distance` apart, which makes the step idempotent.
/// Non-finite vertices are never welded.
pub fn merge_vertices(mesh: Mesh, tolerances: &Tolerances) -> Result<Mesh> {
    let tolerance = tolerances.merge_distance;
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(MeshError::cleanup_step(
            "merge_vertices",
            format!("merge distance must be positive, got {tolerance}"),
        ));
    }

    let (vertices, triangles) = mesh.into_parts();

    let cell_of = |p: DVec3| -> (i64, i64, i64) {
        let c = (p / tolerance).floor();
        (c.x as i64, c.y as i64, c.z as i64)
    };

    let mut grid: HashMap<(i64, i64, i64), Vec<u32>> = HashMap::new();
    let mut merged: Vec<DVec3> = Vec::with_capacity(vertices.len());
    let mut remap: Vec<u32> = Vec::with_capacity(vertices.len());

    for &p in &vertices {
        // A non-finite vertex has no cell; it stays its own representative.
        if !p.is_finite() {
            remap.push(merged.len() as u32);
            merged.push(p);
            continue;
        }

        let (cx, cy, cz) = cell_of(p);
        let mut found = None;
        'search: for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    if let Some(candidates) = grid.get(&(cx + dx, cy + dy, cz + dz)) {
                        if let Some(&rep) = candidates
                            .iter()
                            .find(|&&rep| merged[rep as usize].distance(p) <= tolerance)
                        {
                            found = Some(rep);
                            break 'search;
                        }
                    }
                }
            }
        }

        let index = match found {
            Some(rep) => rep,
            None => {
                let rep = merged.len() as u32;
                merged.push(p);
                grid.entry((cx, cy, cz)).or_default().push(rep);
                rep
            }
        };
        remap.push(index);
    }

    let triangles = triangles
        .into_iter()
        .map(|tri| tri.map(|i| remap[i as usize]))
        .collect();
    Ok(Mesh::from_parts(merged, triangles))
}

/// Drops vertices no triangle references, keeping the order of the rest.
pub fn remove_unreferenced(mesh: Mesh, _tolerances: &Tolerances) -> Result<Mesh> {
    let (vertices, triangles) = mesh.into_parts();

    let mut used = vec![false; vertices.len()];
    for tri in &triangles {
        for &i in tri {
            used[i as usize] = true;
        }
    }

    let mut remap = vec![u32::MAX; vertices.len()];
    let mut kept = Vec::with_capacity(vertices.len());
    for (i, v) in vertices.into_iter().enumerate() {
        if used[i] {
            remap[i] = kept.len() as u32;
            kept.push(v);
        }
    }

    let triangles = triangles
        .into_iter()
        .map(|tri| tri.map(|i| remap[i as usize]))
        .collect();
    Ok(Mesh::from_parts(kept, triangles))
}

/// Checks that positions and bounds are finite, then recomputes vertex normals.
///
/// An empty mesh is valid.
pub fn validate(mut mesh: Mesh, _tolerances: &Tolerances) -> Result<Mesh> {
    if !mesh.vertices().iter().all(|v| v.is_finite()) {
        return Err(MeshError::cleanup_step("validate", "vertex positions are not finite"));
    }
    let (min, max) = mesh.bounding_box();
    if !(min.is_finite() && max.is_finite()) {
        return Err(MeshError::cleanup_step("validate", "mesh bounds are not finite"));
    }

    mesh.compute_normals();
    Ok(mesh)
}
