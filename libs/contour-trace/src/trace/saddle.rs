//! Saddle-zone decisions.
//!
//! A zone whose diagonal corners agree is ambiguous: the curve may turn
//! either way. The choice follows the zone-centre value and is cached so
//! both passes (and both levels of a band) resolve the zone identically.

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct SaddleFlags: u8 {
        /// Decision made.
        const SET = 0x1;
        /// Centre above the lower level.
        const GT0 = 0x2;
        /// Centre above the upper level.
        const GT1 = 0x4;
    }
}

/// Per-zone cache of saddle decisions, zeroed with every new lattice.
#[derive(Debug, Clone)]
pub(crate) struct SaddleTable {
    zones: Vec<SaddleFlags>,
}

impl SaddleTable {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            zones: vec![SaddleFlags::empty(); len],
        }
    }

    /// Whether the centre of `zone` lies above the level being traced.
    ///
    /// `corners` is only read the first time a zone is asked about.
    pub(crate) fn centre_above(
        &mut self,
        zone: usize,
        corners: impl FnOnce() -> [f64; 4],
        lower: f64,
        upper: Option<f64>,
        upper_level: bool,
    ) -> bool {
        let Some(entry) = self.zones.get_mut(zone) else {
            return false;
        };
        if !entry.contains(SaddleFlags::SET) {
            let [a, b, c, d] = corners();
            let centre = (a + b + c + d) / 4.0;
            *entry = SaddleFlags::SET;
            if centre > lower {
                *entry |= SaddleFlags::GT0;
                if upper.is_some_and(|upper| centre > upper) {
                    *entry |= SaddleFlags::GT1;
                }
            }
        }
        if upper_level {
            entry.contains(SaddleFlags::GT1)
        } else {
            entry.contains(SaddleFlags::GT0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_is_cached() {
        let mut table = SaddleTable::new(4);
        assert!(table.centre_above(2, || [1.0, 3.0, 1.0, 3.0], 1.5, None, false));
        // Different corners are ignored once the zone is decided
        assert!(table.centre_above(2, || [0.0; 4], 1.5, None, false));
        assert!(!table.centre_above(1, || [0.0; 4], 1.5, None, false));
    }

    #[test]
    fn test_upper_level_needs_both_bits() {
        let mut table = SaddleTable::new(2);
        // Centre 2.0 sits inside the band (1, 3)
        assert!(table.centre_above(0, || [0.0, 4.0, 0.0, 4.0], 1.0, Some(3.0), false));
        assert!(!table.centre_above(0, || [0.0; 4], 1.0, Some(3.0), true));
        assert!(table.centre_above(1, || [4.0; 4], 1.0, Some(3.0), true));
    }
}
