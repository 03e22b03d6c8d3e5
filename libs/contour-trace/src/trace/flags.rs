//! Bit-packed per-cell flags of the tracing lattice.
//!
//! Each lattice cell `ij` describes point `ij`, zone `ij` (upper-right
//! corner at the point), the i-edge from point `ij - nx` up to `ij`, and the
//! j-edge from point `ij - 1` across to `ij`.

bitflags::bitflags! {
    /// Flags for one lattice cell. Rebuilt for every level pair and mutated
    /// by both tracing passes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub(crate) struct CellFlags: u16 {
        /// Point value lies between the levels (band 1).
        const BETWEEN = 0x0001;
        /// Point value lies above the upper level (band 2).
        const ABOVE = 0x0002;
        /// Zone exists.
        const ZONE_EX = 0x0004;
        /// The i-edge is a mesh, region or chunk boundary.
        const I_BNDY = 0x0008;
        /// The j-edge is a mesh, region or chunk boundary.
        const J_BNDY = 0x0010;
        /// The i-edge starts a curve into the zone on its left.
        const I0_START = 0x0020;
        /// The i-edge starts a curve into the zone on its right.
        const I1_START = 0x0040;
        /// The j-edge starts a curve into the zone below.
        const J0_START = 0x0080;
        /// The j-edge starts a curve into the zone above.
        const J1_START = 0x0100;
        /// The next start point lies in this row (second-pass scan).
        const START_ROW = 0x0200;
        /// The i-edge begins a slit upstroke.
        const SLIT_UP = 0x0400;
        /// The i-edge begins a slit downstroke.
        const SLIT_DN = 0x0800;
        /// Single-level start whose curve runs into a boundary.
        const OPEN_END = 0x1000;
        /// Final start point; the second pass stops here.
        const ALL_DONE = 0x2000;
        /// Slit downstroke already walked past on the second pass.
        const SLIT_DN_VISITED = 0x4000;

        /// Mask of the band bits.
        const Z_VALUE = Self::BETWEEN.bits() | Self::ABOVE.bits();
        /// Any of the four start marks.
        const ANY_START = Self::I0_START.bits()
            | Self::I1_START.bits()
            | Self::J0_START.bits()
            | Self::J1_START.bits();
    }
}

/// Point below the lower level.
pub(crate) const BAND_BELOW: u8 = 0;
/// Point between the levels.
pub(crate) const BAND_BETWEEN: u8 = 1;
/// Point above the upper level.
pub(crate) const BAND_ABOVE: u8 = 2;

impl CellFlags {
    /// Band of the point: [`BAND_BELOW`], [`BAND_BETWEEN`] or [`BAND_ABOVE`].
    #[inline]
    pub(crate) fn band(self) -> u8 {
        (self & Self::Z_VALUE).bits() as u8
    }

    /// Clears `marks` and returns how many of them were set.
    #[inline]
    pub(crate) fn take(&mut self, marks: CellFlags) -> usize {
        let present = *self & marks;
        self.remove(present);
        present.bits().count_ones() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_ignores_other_bits() {
        let flags = CellFlags::ABOVE | CellFlags::ZONE_EX | CellFlags::I_BNDY;
        assert_eq!(flags.band(), BAND_ABOVE);
        assert_eq!((CellFlags::BETWEEN | CellFlags::ALL_DONE).band(), BAND_BETWEEN);
        assert_eq!(CellFlags::ANY_START.band(), BAND_BELOW);
    }

    #[test]
    fn test_take_clears_and_counts() {
        let mut flags = CellFlags::I0_START | CellFlags::J1_START | CellFlags::ZONE_EX;
        assert_eq!(flags.take(CellFlags::I0_START | CellFlags::I1_START), 1);
        assert!(!flags.contains(CellFlags::I0_START));
        assert!(flags.contains(CellFlags::ZONE_EX));
        assert_eq!(flags.take(CellFlags::I0_START), 0);
    }
}
