// src/generator.rs

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::geometry::{Point2, Triangle};

/// Supplies the vertex index used for each midpoint step.
///
/// Values outside `0..3` are reduced modulo 3 by the generator.
pub trait IndexSource {
    fn next_index(&mut self) -> usize;
}

impl<F: FnMut() -> usize> IndexSource for F {
    fn next_index(&mut self) -> usize {
        self()
    }
}

/// Uniform indices drawn from a `rand` generator.
pub struct RngIndexSource<R> {
    rng: R,
}

impl<R: Rng> RngIndexSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngIndexSource<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngIndexSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> IndexSource for RngIndexSource<R> {
    fn next_index(&mut self) -> usize {
        self.rng.gen_range(0..3)
    }
}

/// Replays a fixed list of indices, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct CyclicIndexSource {
    indices: Vec<usize>,
    cursor: usize,
}

impl CyclicIndexSource {
    /// An empty list behaves like `[0]`.
    pub fn new(indices: &[usize]) -> Self {
        let mut indices = indices.to_vec();
        if indices.is_empty() {
            indices.push(0);
        }
        Self { indices, cursor: 0 }
    }
}

impl IndexSource for CyclicIndexSource {
    fn next_index(&mut self) -> usize {
        let j = self.indices[self.cursor];
        self.cursor = (self.cursor + 1) % self.indices.len();
        j
    }
}

/// The generated points, in generation (and draw) order. Read-only once built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSequence {
    points: Vec<Point2>,
}

impl PointSequence {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point2> {
        self.points.first().copied()
    }

    pub fn as_slice(&self) -> &[Point2] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2> {
        self.points.iter()
    }

    /// Interleaved `x, y, x, y, ...` view.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.points)
    }

    /// Raw bytes for a vertex buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.points)
    }
}

impl<'a> IntoIterator for &'a PointSequence {
    type Item = &'a Point2;
    type IntoIter = std::slice::Iter<'a, Point2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Interior starting point: the midpoint of the midpoints of edges
/// (V0, V1) and (V0, V2).
pub fn seed_point(triangle: &Triangle) -> Point2 {
    let [v0, v1, v2] = *triangle.vertices();
    let u = Point2::midpoint(v0, v1);
    let v = Point2::midpoint(v0, v2);
    Point2::midpoint(u, v)
}

/// Produces exactly `count` points. The seed is the first point and counts
/// toward `count`, so `count == 0` yields an empty sequence.
pub fn generate(triangle: &Triangle, count: usize, source: &mut impl IndexSource) -> PointSequence {
    let mut points = Vec::with_capacity(count);
    if count == 0 {
        return PointSequence { points };
    }

    let mut p = seed_point(triangle);
    points.push(p);

    while points.len() < count {
        let j = source.next_index() % 3;
        p = Point2::midpoint(p, triangle.vertex(j));
        points.push(p);
    }

    PointSequence { points }
}

/// Binds a triangle to an index source.
pub struct GasketGenerator<S> {
    triangle: Triangle,
    source: S,
}

impl GasketGenerator<RngIndexSource<ThreadRng>> {
    pub fn with_thread_rng(triangle: Triangle) -> Self {
        Self::new(triangle, RngIndexSource::thread())
    }
}

impl<S: IndexSource> GasketGenerator<S> {
    pub fn new(triangle: Triangle, source: S) -> Self {
        Self { triangle, source }
    }

    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    pub fn generate(&mut self, count: usize) -> PointSequence {
        generate(&self.triangle, count, &mut self.source)
    }
}
