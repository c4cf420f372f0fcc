pub mod builder;
pub mod indexed;
pub mod prune;
pub mod scale;

pub use builder::{build_raw_graph, RawGraph};
pub use indexed::IndexedGraph;
pub use prune::prune_graph;
pub use scale::{scale_graph, Scaling};

/// The four bases in the fixed order every edge array uses.
pub const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

pub fn base_index(base: u8) -> usize {
    match base {
        b'A' => 0,
        b'C' => 1,
        b'G' => 2,
        b'T' => 3,
        other => panic!("base {other} outside the A/C/G/T alphabet"),
    }
}
