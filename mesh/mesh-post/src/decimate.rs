//! Quadric edge-collapse decimation.
//!
//! Classic greedy simplification: every vertex accumulates the quadric of
//! its incident triangle planes, candidate edges go into a min-heap keyed by
//! collapse cost, and collapses proceed cheapest-first until the triangle
//! budget is met. Stale heap entries are skipped via per-vertex version
//! counters rather than removed eagerly.

#![allow(clippy::cast_possible_truncation)]

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::collections::BinaryHeap;
use std::hash::BuildHasherDefault;

use hashbrown::HashSet;
use mesh_types::{Point3, TriMesh};

/// Deterministic hasher so set iteration order (and thus heap tie-breaking)
/// is identical across runs.
type DetHasher = BuildHasherDefault<DefaultHasher>;

use crate::error::{PostprocessError, PostprocessResult};
use crate::params::DecimateParams;
use crate::quadric::Quadric;
use crate::result::DecimationResult;

/// Decimate `mesh` down to `params.target_ratio` of its triangles.
///
/// The input is left untouched; the simplified mesh is returned inside the
/// result. Meshes already at or below the target come back unchanged.
pub fn decimate(mesh: &TriMesh, params: &DecimateParams) -> PostprocessResult<DecimationResult> {
    params.validate()?;
    let original = mesh.triangle_count();
    let target = params.target_triangles(original);
    if original <= target {
        return Ok(DecimationResult {
            mesh: mesh.clone(),
            original_triangles: original,
            final_triangles: original,
            collapses_performed: 0,
            collapses_rejected: 0,
        });
    }

    let mut state = State::new(mesh);
    let (performed, rejected) = state.collapse_until(target);
    let simplified = state.rebuild();

    if simplified.triangle_count() == 0 {
        return Err(PostprocessError::Degenerate { remaining: 0 });
    }

    let final_triangles = simplified.triangle_count();
    Ok(DecimationResult {
        mesh: simplified,
        original_triangles: original,
        final_triangles,
        collapses_performed: performed,
        collapses_rejected: rejected,
    })
}

/// A potential edge collapse. Ordered as a min-heap on cost; entries are
/// stale once either endpoint's version moved past the recorded pair.
struct Candidate {
    cost: f64,
    v0: u32,
    v1: u32,
    position: Point3<f64>,
    versions: (u32, u32),
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cost.total_cmp(&other.cost).is_eq()
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost)
    }
}

struct State {
    positions: Vec<Point3<f64>>,
    triangles: Vec<[u32; 3]>,
    alive: Vec<bool>,
    live_count: usize,
    incident: Vec<HashSet<usize, DetHasher>>,
    neighbors: Vec<HashSet<u32, DetHasher>>,
    quadrics: Vec<Quadric>,
    versions: Vec<u32>,
    heap: BinaryHeap<Candidate>,
}

impl State {
    fn new(mesh: &TriMesh) -> Self {
        let vertex_count = mesh.vertex_count();
        let mut incident = vec![HashSet::default(); vertex_count];
        let mut neighbors: Vec<HashSet<u32, DetHasher>> = vec![HashSet::default(); vertex_count];
        let mut quadrics = vec![Quadric::default(); vertex_count];

        for (t, tri) in mesh.triangles.iter().enumerate() {
            for &v in tri {
                incident[v as usize].insert(t);
            }
            for (a, b) in [(0, 1), (1, 2), (2, 0)] {
                neighbors[tri[a] as usize].insert(tri[b]);
                neighbors[tri[b] as usize].insert(tri[a]);
            }

            let p0 = mesh.positions[tri[0] as usize];
            let edge1 = mesh.positions[tri[1] as usize] - p0;
            let edge2 = mesh.positions[tri[2] as usize] - p0;
            let normal = edge1.cross(&edge2);
            let area2 = normal.norm();
            // Degenerate triangles contribute no plane
            if area2 > 1e-12 {
                let q = Quadric::from_plane(normal / area2, p0);
                for &v in tri {
                    quadrics[v as usize] += q;
                }
            }
        }

        let mut state = Self {
            positions: mesh.positions.clone(),
            triangles: mesh.triangles.clone(),
            alive: vec![true; mesh.triangle_count()],
            live_count: mesh.triangle_count(),
            incident,
            neighbors,
            quadrics,
            versions: vec![0; vertex_count],
            heap: BinaryHeap::new(),
        };

        for v in 0..vertex_count as u32 {
            let nbrs: Vec<u32> = state.neighbors[v as usize]
                .iter()
                .copied()
                .filter(|&n| n > v)
                .collect();
            for n in nbrs {
                state.push_candidate(v, n);
            }
        }
        state
    }

    fn push_candidate(&mut self, a: u32, b: u32) {
        let (v0, v1) = if a < b { (a, b) } else { (b, a) };
        let combined = self.quadrics[v0 as usize] + self.quadrics[v1 as usize];
        let position = combined.minimizer().unwrap_or_else(|| {
            let p0 = self.positions[v0 as usize];
            let p1 = self.positions[v1 as usize];
            Point3::from((p0.coords + p1.coords) * 0.5)
        });
        self.heap.push(Candidate {
            cost: combined.error(position).max(0.0),
            v0,
            v1,
            position,
            versions: (self.versions[v0 as usize], self.versions[v1 as usize]),
        });
    }

    /// Run collapses until `target` live triangles remain or no valid
    /// candidate is left. Returns (performed, rejected) counts.
    fn collapse_until(&mut self, target: usize) -> (usize, usize) {
        let mut performed = 0;
        let mut rejected = 0;

        while self.live_count > target {
            let Some(cand) = self.heap.pop() else { break };
            let (i0, i1) = (cand.v0 as usize, cand.v1 as usize);
            if cand.versions != (self.versions[i0], self.versions[i1]) {
                continue;
            }
            if !self.neighbors[i0].contains(&cand.v1) {
                continue;
            }
            // More than two shared neighbors means the collapse would pinch
            // the surface into a non-manifold configuration.
            let shared = self.neighbors[i0].intersection(&self.neighbors[i1]).count();
            if shared > 2 {
                rejected += 1;
                continue;
            }

            self.collapse(&cand);
            performed += 1;
        }
        (performed, rejected)
    }

    /// Collapse `v1` into `v0`, which moves to the candidate position.
    fn collapse(&mut self, cand: &Candidate) {
        let (i0, i1) = (cand.v0 as usize, cand.v1 as usize);
        self.positions[i0] = cand.position;
        let q1 = self.quadrics[i1];
        self.quadrics[i0] += q1;
        self.versions[i0] += 1;
        self.versions[i1] += 1;

        let v1_triangles: Vec<usize> = self.incident[i1].iter().copied().collect();
        for t in v1_triangles {
            if !self.alive[t] {
                continue;
            }
            for idx in &mut self.triangles[t] {
                if *idx == cand.v1 {
                    *idx = cand.v0;
                }
            }
            let tri = self.triangles[t];
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                self.alive[t] = false;
                self.live_count -= 1;
                for &v in &tri {
                    self.incident[v as usize].remove(&t);
                }
            } else {
                self.incident[i0].insert(t);
            }
        }
        self.incident[i1].clear();

        let v1_neighbors: Vec<u32> = self.neighbors[i1].iter().copied().collect();
        self.neighbors[i1].clear();
        for n in v1_neighbors {
            self.neighbors[n as usize].remove(&cand.v1);
            if n != cand.v0 {
                self.neighbors[n as usize].insert(cand.v0);
                self.neighbors[i0].insert(n);
            }
        }
        self.neighbors[i0].remove(&cand.v1);

        let refresh: Vec<u32> = self.neighbors[i0].iter().copied().collect();
        for n in refresh {
            self.push_candidate(cand.v0, n);
        }
    }

    /// Compact surviving triangles and the vertices they reference.
    fn rebuild(&self) -> TriMesh {
        let mut remap = vec![u32::MAX; self.positions.len()];
        let mut positions = Vec::new();
        let mut triangles = Vec::with_capacity(self.live_count);

        for (t, tri) in self.triangles.iter().enumerate() {
            if !self.alive[t] {
                continue;
            }
            let mut mapped = [0_u32; 3];
            for (k, &v) in tri.iter().enumerate() {
                let slot = &mut remap[v as usize];
                if *slot == u32::MAX {
                    *slot = positions.len() as u32;
                    positions.push(self.positions[v as usize]);
                }
                mapped[k] = *slot;
            }
            triangles.push(mapped);
        }
        TriMesh::from_parts(positions, triangles)
    }
}
