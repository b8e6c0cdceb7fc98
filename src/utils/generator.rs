//! Random graph descriptions for exercising the search algorithms.

use rand::Rng;

use crate::types::record::{BranchRecord, GraphRecord};

/// Name of the `index`-th generated location.
pub fn location_name(index: usize) -> String {
    format!("L{}", index)
}

/// Generates a description of `node_count` locations joined by up to
/// `edge_count` random roads.
///
/// Distances are whole metres in `1..=max_distance`, so sums of them are
/// exact in `f64`. Roads are listed by their first endpoint only; the
/// same pair may be drawn twice, the graph builder keeps the first.
/// No self-loops are generated.
pub fn generate_records<R: Rng>(
    rng: &mut R,
    node_count: usize,
    edge_count: usize,
    max_distance: u32,
) -> Vec<GraphRecord> {
    let mut records: Vec<GraphRecord> = (0..node_count)
        .map(|index| GraphRecord {
            node: location_name(index),
            branch: Vec::new(),
        })
        .collect();
    if node_count < 2 {
        return records;
    }

    for _ in 0..edge_count {
        let from = rng.gen_range(0..node_count);
        let mut to = rng.gen_range(0..node_count - 1);
        if to >= from {
            to += 1;
        }
        let distance = rng.gen_range(1..=max_distance.max(1));
        records[from].branch.push(BranchRecord {
            node: location_name(to),
            distance: f64::from(distance),
        });
    }
    records
}
