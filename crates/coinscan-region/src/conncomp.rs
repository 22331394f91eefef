//! Connected component labeling
//!
//! Two-pass labeling over a binary raster with a union-find structure
//! for label equivalences. Labels are assigned 1..N in row-major order
//! of first appearance; 0 is background.

use coinscan_core::{BinaryRaster, LabelRaster};

/// Connectivity for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (edge-sharing neighbors only)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

/// Union-find over provisional labels 1..=n.
struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn new() -> Self {
        // Index 0 is unused; provisional labels start at 1.
        Self { parent: vec![0] }
    }

    fn make_set(&mut self) -> u32 {
        let label = self.parent.len() as u32;
        self.parent.push(label);
        label
    }

    fn find(&mut self, x: u32) -> u32 {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        // Path compression
        let mut cur = x;
        while self.parent[cur as usize] != root {
            let next = self.parent[cur as usize];
            self.parent[cur as usize] = root;
            cur = next;
        }
        root
    }

    fn union(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            // Attach the higher root under the lower so the first-seen
            // provisional label survives as representative.
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi as usize] = lo;
        }
    }
}

/// Label the foreground components of a binary raster.
///
/// Returns the labeled raster and the number of components. Each
/// component gets a unique label in 1..=N, stable within one call.
pub fn label_components(pix: &BinaryRaster, connectivity: ConnectivityType) -> (LabelRaster, u32) {
    let w = pix.width() as usize;
    let h = pix.height() as usize;
    let src = pix.data();

    let mut uf = UnionFind::new();
    let mut provisional = vec![0u32; w * h];

    // First pass: provisional labels from already-visited neighbors.
    for y in 0..h {
        let row = y * w;
        for x in 0..w {
            let i = row + x;
            if !src[i] {
                continue;
            }

            // Already-visited neighbors: left, up, and for 8-way the
            // two upper diagonals.
            let mut neighbors = [0u32; 4];
            let mut n = 0;
            if x > 0 {
                neighbors[n] = provisional[i - 1];
                n += 1;
            }
            if y > 0 {
                neighbors[n] = provisional[i - w];
                n += 1;
                if connectivity == ConnectivityType::EightWay {
                    if x > 0 {
                        neighbors[n] = provisional[i - w - 1];
                        n += 1;
                    }
                    if x + 1 < w {
                        neighbors[n] = provisional[i - w + 1];
                        n += 1;
                    }
                }
            }

            let mut first = 0u32;
            for &label in &neighbors[..n] {
                if label == 0 {
                    continue;
                }
                if first == 0 {
                    first = label;
                } else {
                    uf.union(first, label);
                }
            }

            provisional[i] = if first == 0 { uf.make_set() } else { first };
        }
    }

    // Second pass: collapse equivalences and renumber components in
    // order of first appearance.
    let mut remap = vec![0u32; uf.parent.len()];
    let mut labels = vec![0u32; w * h];
    let mut count = 0u32;
    for (i, &p) in provisional.iter().enumerate() {
        if p == 0 {
            continue;
        }
        let root = uf.find(p);
        if remap[root as usize] == 0 {
            count += 1;
            remap[root as usize] = count;
        }
        labels[i] = remap[root as usize];
    }

    let labeled = LabelRaster::from_vec(pix.width(), pix.height(), labels)
        .expect("label buffer matches input dimensions");
    (labeled, count)
}

/// Pixel area of each component of a labeled raster.
///
/// The returned vector is indexed by `label - 1`; the background label
/// 0 is excluded.
pub fn component_sizes(labels: &LabelRaster, count: u32) -> Vec<u64> {
    let mut sizes = vec![0u64; count as usize];
    for &label in labels.data() {
        if label > 0 {
            sizes[label as usize - 1] += 1;
        }
    }
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinscan_test::{binary_block, binary_from_points};

    #[test]
    fn test_labels_three_components() {
        let pix = binary_from_points(10, 10, &[(0, 0), (1, 0), (5, 5), (6, 5), (8, 8)]);
        let (labeled, count) = label_components(&pix, ConnectivityType::FourWay);
        assert_eq!(count, 3);
        assert_eq!(labeled.sample(0, 0), labeled.sample(1, 0));
        assert_ne!(labeled.sample(0, 0), labeled.sample(5, 5));
        assert_eq!(labeled.sample(2, 0), 0);
    }

    #[test]
    fn test_labels_in_scan_order() {
        let pix = binary_from_points(10, 10, &[(7, 1), (2, 4), (5, 8)]);
        let (labeled, count) = label_components(&pix, ConnectivityType::FourWay);
        assert_eq!(count, 3);
        assert_eq!(labeled.sample(7, 1), 1);
        assert_eq!(labeled.sample(2, 4), 2);
        assert_eq!(labeled.sample(5, 8), 3);
    }

    #[test]
    fn test_u_shape_merges() {
        // A U shape forces a label equivalence: the two arms get
        // different provisional labels that merge at the bottom.
        let pix = binary_from_points(
            7,
            7,
            &[(1, 1), (4, 1), (1, 2), (4, 2), (1, 3), (2, 3), (3, 3), (4, 3)],
        );
        let (labeled, count) = label_components(&pix, ConnectivityType::FourWay);
        assert_eq!(count, 1);
        assert_eq!(labeled.sample(1, 1), 1);
        assert_eq!(labeled.sample(4, 1), 1);
    }

    #[test]
    fn test_diagonal_connectivity() {
        let pix = binary_from_points(6, 6, &[(1, 1), (2, 2)]);
        let (_, four) = label_components(&pix, ConnectivityType::FourWay);
        let (_, eight) = label_components(&pix, ConnectivityType::EightWay);
        assert_eq!(four, 2);
        assert_eq!(eight, 1);
    }

    #[test]
    fn test_empty_raster() {
        let pix = BinaryRaster::new(10, 10).unwrap();
        let (labeled, count) = label_components(&pix, ConnectivityType::FourWay);
        assert_eq!(count, 0);
        assert!(labeled.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_component_sizes() {
        let mut pix = BinaryRaster::new(12, 12).unwrap();
        binary_block(&mut pix, 1, 1, 3, 3);
        binary_block(&mut pix, 6, 6, 2, 5);
        let (labeled, count) = label_components(&pix, ConnectivityType::FourWay);
        let sizes = component_sizes(&labeled, count);
        assert_eq!(sizes, vec![9, 10]);
    }
}
