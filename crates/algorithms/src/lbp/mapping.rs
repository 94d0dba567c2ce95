//! Rotation-invariant uniform pattern mapping
//!
//! A code is *uniform* when its circular bit string has at most two 0/1
//! transitions. Uniform codes map to their number of set bits, which is
//! invariant under rotation; every other code shares the catch-all bin
//! `neighbours + 1`.

use crate::maybe_rayon::*;
use mrelbp_core::params::MAX_NEIGHBOURS;
use mrelbp_core::{Error, Result};

/// Lookup table from raw `neighbours`-bit codes to mapped bins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable {
    neighbours: usize,
    bins: Vec<u32>,
}

impl MappingTable {
    /// Build the table for `neighbours`-bit codes
    pub fn build(neighbours: usize) -> Result<Self> {
        if neighbours == 0 || neighbours > MAX_NEIGHBOURS {
            return Err(Error::InvalidParameter {
                name: "neighbours",
                value: neighbours.to_string(),
                reason: format!("must be in 1..={MAX_NEIGHBOURS}"),
            });
        }

        let non_uniform = neighbours as u32 + 1;
        let bins: Vec<u32> = (0..1u32 << neighbours)
            .into_par_iter()
            .map(|code| {
                if transitions(code, neighbours) <= 2 {
                    code.count_ones()
                } else {
                    non_uniform
                }
            })
            .collect();

        Ok(Self { neighbours, bins })
    }

    /// Bit width of the codes this table maps
    pub fn neighbours(&self) -> usize {
        self.neighbours
    }

    /// Number of codes, `2^neighbours`
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Largest bin value, the non-uniform bin
    pub fn max_bin(&self) -> u32 {
        self.neighbours as u32 + 1
    }

    /// Mapped bin for `code`.
    ///
    /// # Panics
    /// If `code` has bits at or above position `neighbours`.
    pub fn map(&self, code: u32) -> u32 {
        self.bins[code as usize]
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.bins
    }
}

/// Number of positions where `code` differs from its one-bit left rotation
/// within a `neighbours`-bit word.
pub fn transitions(code: u32, neighbours: usize) -> u32 {
    if neighbours == 0 {
        return 0;
    }
    let mask = if neighbours >= 32 {
        u32::MAX
    } else {
        (1u32 << neighbours) - 1
    };
    let code = code & mask;
    let rotated = ((code << 1) | (code >> (neighbours - 1))) & mask;
    (code ^ rotated).count_ones()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_neighbours() {
        let table = MappingTable::build(8).unwrap();
        assert_eq!(table.len(), 256);
        assert_eq!(table.max_bin(), 9);

        assert_eq!(table.map(0b0000_0000), 0);
        assert_eq!(table.map(0b1111_1111), 8);
        assert_eq!(table.map(0b0000_0111), 3);
        assert_eq!(table.map(0b1000_0011), 3);
        assert_eq!(table.map(0b0111_1110), 6);
        assert_eq!(table.map(0b0000_0101), 9);
        assert_eq!(table.map(0b1010_1010), 9);
        assert_eq!(table.map(0b1000_0001), 2);
    }

    #[test]
    fn test_uniform_codes_map_to_popcount() {
        let table = MappingTable::build(8).unwrap();
        let mut uniform = 0;
        for code in 0..256u32 {
            let bin = table.map(code);
            if transitions(code, 8) <= 2 {
                uniform += 1;
                assert_eq!(bin, code.count_ones(), "code {:08b}", code);
            } else {
                assert_eq!(bin, 9, "code {:08b}", code);
            }
        }
        // 2 constant codes + 8 * 7 rotations of runs of ones
        assert_eq!(uniform, 58);
    }

    #[test]
    fn test_rotation_invariance() {
        let n = 12;
        let table = MappingTable::build(n).unwrap();
        let mask = (1u32 << n) - 1;
        for code in (0..1u32 << n).step_by(37) {
            let rotated = ((code << 3) | (code >> (n - 3))) & mask;
            assert_eq!(table.map(code), table.map(rotated));
        }
    }

    #[test]
    fn test_transitions() {
        assert_eq!(transitions(0b0000, 4), 0);
        assert_eq!(transitions(0b0110, 4), 2);
        assert_eq!(transitions(0b0101, 4), 4);
        assert_eq!(transitions(0b1, 1), 0);
    }

    #[test]
    fn test_single_neighbour() {
        let table = MappingTable::build(1).unwrap();
        assert_eq!(table.as_slice(), &[0, 1]);
        assert_eq!(table.max_bin(), 2);
    }

    #[test]
    fn test_out_of_range_neighbours() {
        assert!(MappingTable::build(0).is_err());
        assert!(MappingTable::build(MAX_NEIGHBOURS + 1).is_err());
    }
}
