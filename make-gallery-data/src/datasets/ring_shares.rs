//! Fixed share quantities for the nested pie renderings

use crate::output::RingLayer;

/// Returns the 3x4 share matrix behind the flat nested pie
///
/// The outer ring of the chart shows the twelve flattened leaves; the inner
/// disc shows the three row sums.
pub fn share_matrix() -> Vec<Vec<u32>> {
    vec![vec![1, 2, 3, 4], vec![2, 3, 4, 5], vec![3, 4, 5, 6]]
}

/// Returns the ring geometry for the polar pie rendering
///
/// Each layer divides the full circle into equal segments and occupies the
/// radial band `bottom..bottom + height`.
pub fn ring_layers() -> Vec<RingLayer> {
    vec![
        RingLayer {
            segments: 6,
            height: 5.0,
            bottom: 0.0,
        },
        RingLayer {
            segments: 12,
            height: 2.0,
            bottom: 5.0,
        },
        RingLayer {
            segments: 9,
            height: 3.0,
            bottom: 7.0,
        },
    ]
}
