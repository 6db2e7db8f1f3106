//! A balanced k-d tree over 3D-positioned entities, supporting radius range queries.
//!
//! Construction stable-sorts the slice along the current depth's axis and recurses on the two
//! halves around the median, and `range_search` prunes descent by comparing the probe's axis
//! coordinate against the node's axis value plus or minus the search radius before testing the
//! true Euclidean distance. The tree owns its elements and is immutable after construction, so
//! `range_search` only ever borrows.

use rin_geom::Vec3;

/// Anything that can be placed in a [`KdTree`] by its 3D position.
pub trait Positioned {
    fn position(&self) -> Vec3;
}

struct Node<T> {
    value: T,
    axis: usize,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

/// A k-d tree over `K = 3` dimensions, storing owned copies of its elements.
pub struct KdTree<T> {
    root: Option<Box<Node<T>>>,
}

impl<T: Positioned + Clone> KdTree<T> {
    /// Builds a balanced tree from `elements`. An empty slice yields an empty (but valid) tree.
    pub fn build(elements: &[T]) -> KdTree<T> {
        let mut owned: Vec<T> = elements.to_vec();
        let root = build_rec(&mut owned, 0);
        KdTree { root }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// All elements within Euclidean distance `radius` (inclusive) of `probe`.
    pub fn range_search(&self, probe: &Vec3, radius: f64) -> Vec<&T> {
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            range_search_rec(root, probe, radius, &mut out);
        }
        out
    }
}

fn build_rec<T: Positioned + Clone>(elements: &mut [T], depth: usize) -> Option<Box<Node<T>>> {
    if elements.is_empty() {
        return None;
    }
    let axis = depth % 3;
    elements.sort_by(|a, b| {
        a.position()[axis]
            .partial_cmp(&b.position()[axis])
            .expect("NaN coordinate in spatial index")
    });
    let median = elements.len() / 2;
    let (left, rest) = elements.split_at_mut(median);
    let (mid, right) = rest.split_first_mut().expect("median index is in bounds");
    Some(Box::new(Node {
        value: mid.clone(),
        axis,
        left: build_rec(left, depth + 1),
        right: build_rec(right, depth + 1),
    }))
}

fn range_search_rec<'a, T: Positioned>(
    node: &'a Node<T>,
    probe: &Vec3,
    radius: f64,
    out: &mut Vec<&'a T>,
) {
    let node_pos = node.value.position();
    if node_pos.distance_to(probe) <= radius {
        out.push(&node.value);
    }

    let delta = node_pos[node.axis] - probe[node.axis];
    // The probe's axis-aligned cube extends `radius` either side; only descend into a child
    // whose half-space the cube could possibly reach.
    if delta >= -radius {
        if let Some(left) = &node.left {
            range_search_rec(left, probe, radius, out);
        }
    }
    if delta <= radius {
        if let Some(right) = &node.right {
            range_search_rec(right, probe, radius, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Point(Vec3);

    impl Positioned for Point {
        fn position(&self) -> Vec3 {
            self.0
        }
    }

    fn pts(coords: &[[f64; 3]]) -> Vec<Point> {
        coords
            .iter()
            .map(|c| Point(Vec3::new(c[0], c[1], c[2])))
            .collect()
    }

    #[test]
    fn empty_tree_returns_no_neighbors() {
        let tree: KdTree<Point> = KdTree::build(&[]);
        assert!(tree.is_empty());
        assert!(tree.range_search(&Vec3::zero(), 10.0).is_empty());
    }

    #[test]
    fn range_search_finds_only_points_within_radius() {
        let data = pts(&[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [5.0, 0.0, 0.0],
            [0.0, 5.0, 0.0],
        ]);
        let tree = KdTree::build(&data);
        let found = tree.range_search(&Vec3::zero(), 1.5);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn threshold_distance_is_inclusive() {
        let data = pts(&[[3.0, 4.0, 0.0]]); // distance 5 from origin
        let tree = KdTree::build(&data);
        assert_eq!(tree.range_search(&Vec3::zero(), 5.0).len(), 1);
        assert_eq!(tree.range_search(&Vec3::zero(), 4.999).len(), 0);
    }

    #[test]
    fn range_search_matches_brute_force_on_random_like_grid() {
        let mut coords = vec![];
        for i in 0..6 {
            for j in 0..6 {
                coords.push([i as f64, j as f64, 0.0]);
            }
        }
        let data = pts(&coords);
        let tree = KdTree::build(&data);
        let probe = Vec3::new(2.5, 2.5, 0.0);
        let radius = 2.0;
        let mut expected: Vec<Point> = data
            .iter()
            .filter(|p| p.position().distance_to(&probe) <= radius)
            .cloned()
            .collect();
        let mut got: Vec<Point> = tree.range_search(&probe, radius).into_iter().cloned().collect();
        expected.sort_by(|a, b| a.0.x.partial_cmp(&b.0.x).unwrap().then(a.0.y.partial_cmp(&b.0.y).unwrap()));
        got.sort_by(|a, b| a.0.x.partial_cmp(&b.0.x).unwrap().then(a.0.y.partial_cmp(&b.0.y).unwrap()));
        assert_eq!(expected, got);
    }
}
