//! Flag lattice initialization.
//!
//! One sweep over the mesh assigns every point its band, copies zone
//! existence, marks region and chunk boundaries, and places the start marks
//! that guarantee every curve is found exactly once by the row scan.

use super::flags::{CellFlags, BAND_BETWEEN};
use crate::existence::{lattice_len, ExistenceMap};
use crate::levels::LevelPair;
use crate::mesh::QuadMesh;

/// Freshly classified lattice for one level pair.
#[derive(Debug, Clone)]
pub(crate) struct Classification {
    pub(crate) flags: Vec<CellFlags>,
    /// Number of start marks placed.
    pub(crate) start_count: usize,
}

/// Classifies `mesh` against `levels`.
///
/// `chunks` holds the resolved `(i, j)` chunk sizes in zones. Chunk edges
/// become boundaries even between existing zones.
pub(crate) fn classify(
    mesh: &QuadMesh,
    existence: &ExistenceMap,
    levels: LevelPair,
    chunks: (usize, usize),
) -> Classification {
    let nx = mesh.nx();
    let ny = mesh.ny();
    let points = nx * ny;
    let z = mesh.z();
    let filled = levels.is_filled();
    let (i_chunk_size, j_chunk_size) = chunks;

    let band_of = |value: f64| -> CellFlags {
        if value > levels.lower() {
            if filled && value > levels.upper() {
                CellFlags::ABOVE
            } else {
                CellFlags::BETWEEN
            }
        } else {
            CellFlags::empty()
        }
    };
    let ex = |ij: usize| existence.exists(ij);

    let mut data = vec![CellFlags::empty(); lattice_len(nx, ny)];
    let mut count = 0usize;
    let mut row_marked = false;

    data[0] = band_of(z[0]);

    let mut ij = 0usize;
    let mut j_chunk = 0usize;
    for j in 0..ny {
        let mut i_chunk = 0usize;
        let mut i_was_chunk = false;

        for i in 0..nx {
            // Zone ahead of the sweep; its band bits are filled in a row later.
            data[ij + nx + 1] = if ex(ij + nx + 1) {
                CellFlags::ZONE_EX
            } else {
                CellFlags::empty()
            };
            if ij < nx {
                data[ij + 1] = CellFlags::empty();
            }
            if ij + 1 < points {
                data[ij + 1] |= band_of(z[ij + 1]);
            }

            let i_bndy = i == i_chunk || ex(ij) != ex(ij + 1);
            let j_bndy = j == j_chunk || ex(ij) != ex(ij + nx);
            if i_bndy {
                data[ij] |= CellFlags::I_BNDY;
            }
            if j_bndy {
                data[ij] |= CellFlags::J_BNDY;
            }

            let v0 = data[ij].band();

            if j > 0 {
                let vb = data[ij - nx].band();
                if v0 != vb {
                    if i_bndy {
                        if ex(ij) {
                            data[ij] |= CellFlags::I0_START;
                            count += 1;
                        }
                        if ex(ij + 1) {
                            data[ij] |= CellFlags::I1_START;
                            count += 1;
                        }
                    } else {
                        let va = data[ij - 1].band();
                        let vc = data[ij + 1].band();
                        let vd = data[ij - nx + 1].band();
                        if v0 != BAND_BETWEEN && va != v0 && (vc != v0 || vd != v0) && ex(ij) {
                            data[ij] |= CellFlags::I0_START;
                            count += 1;
                        }
                        if vb != BAND_BETWEEN
                            && va == vb
                            && (vc == vb || vd == vb)
                            && ex(ij + 1)
                        {
                            data[ij] |= CellFlags::I1_START;
                            count += 1;
                        }
                    }
                }
            }

            if i > 0 && j_bndy {
                let va = data[ij - 1].band();
                if v0 != va {
                    if ex(ij + nx) {
                        data[ij] |= CellFlags::J1_START;
                        count += 1;
                    }
                    if ex(ij) {
                        data[ij] |= CellFlags::J0_START;
                        count += 1;
                    }
                } else if filled && v0 == BAND_BETWEEN {
                    // Boundary edge wholly inside the band.
                    if ex(ij + nx) {
                        if i_was_chunk || !ex(ij + nx - 1) {
                            data[ij] |= CellFlags::J1_START;
                            count += 1;
                        }
                    } else if ex(ij) && ex(ij + nx - 1) {
                        data[ij] |= CellFlags::J0_START;
                        count += 1;
                    }
                }
            }

            i_was_chunk = i == i_chunk;
            if i_was_chunk {
                i_chunk += i_chunk_size;
            }
            ij += 1;
        }

        if j == j_chunk {
            j_chunk += j_chunk_size;
        }
        if count > 0 && !row_marked {
            data[ij - nx] |= CellFlags::START_ROW;
            row_marked = true;
        }
    }

    if count == 0 {
        data[0] |= CellFlags::ALL_DONE;
    }

    Classification {
        flags: data,
        start_count: count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::flags::{BAND_ABOVE, BAND_BELOW};

    fn classified(nx: usize, ny: usize, z: Vec<f64>, lower: f64, upper: f64) -> Classification {
        let mesh = QuadMesh::from_values(nx, ny, z).unwrap();
        let existence = ExistenceMap::build(nx, ny, None);
        let levels = LevelPair::new(lower, upper).unwrap();
        classify(&mesh, &existence, levels, (nx - 1, ny - 1))
    }

    #[test]
    fn test_bands_follow_levels() {
        let c = classified(3, 2, vec![0.0, 1.5, 3.0, 1.0, 2.0, 2.5], 1.0, 2.0);
        let bands: Vec<u8> = (0..6).map(|ij| c.flags[ij].band()).collect();
        // 1.0 is not above the lower level; 2.0 is not above the upper one
        assert_eq!(
            bands,
            vec![BAND_BELOW, BAND_BETWEEN, BAND_ABOVE, BAND_BELOW, BAND_BETWEEN, BAND_ABOVE]
        );
    }

    #[test]
    fn test_flat_mesh_has_no_starts() {
        let c = classified(4, 4, vec![0.0; 16], 1.0, 1.0);
        assert_eq!(c.start_count, 0);
        assert!(c.flags[0].contains(CellFlags::ALL_DONE));
    }

    #[test]
    fn test_single_peak_has_one_start() {
        let mut z = vec![0.0; 9];
        z[4] = 2.0;
        let c = classified(3, 3, z, 1.0, 1.0);
        assert_eq!(c.start_count, 1);
        // Entered from the east side of the i-edge below the peak
        assert!(c.flags[4].contains(CellFlags::I1_START));
        // The first row holding a start is row 1, marked at its first cell
        assert!(c.flags[3].contains(CellFlags::START_ROW));
    }

    #[test]
    fn test_mesh_edges_are_boundaries() {
        let c = classified(3, 3, vec![0.0; 9], 1.0, 1.0);
        for j in 0..3 {
            assert!(c.flags[j * 3].contains(CellFlags::I_BNDY));
            assert!(c.flags[j * 3 + 2].contains(CellFlags::I_BNDY));
        }
        for i in 0..3 {
            assert!(c.flags[i].contains(CellFlags::J_BNDY));
            assert!(c.flags[6 + i].contains(CellFlags::J_BNDY));
        }
        assert!(!c.flags[4].contains(CellFlags::I_BNDY));
        assert!(!c.flags[4].contains(CellFlags::J_BNDY));
    }

    #[test]
    fn test_chunk_edges_become_boundaries() {
        let mesh = QuadMesh::from_values(5, 5, vec![1.5; 25]).unwrap();
        let existence = ExistenceMap::build(5, 5, None);
        let levels = LevelPair::new(1.0, 2.0).unwrap();
        let c = classify(&mesh, &existence, levels, (2, 2));
        // Interior chunk lines at i == 2 and j == 2
        assert!(c.flags[5 * 2 + 2].contains(CellFlags::I_BNDY));
        assert!(c.flags[5 * 2 + 1].contains(CellFlags::J_BNDY));
        assert!(!c.flags[5 * 1 + 1].contains(CellFlags::I_BNDY));
        // Band interior on every chunk: each chunk starts one boundary walk
        assert_eq!(c.start_count, 4);
    }
}
