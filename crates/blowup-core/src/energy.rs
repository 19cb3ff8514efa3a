//! Energy diffusion: accumulate the decaying outward expansion of every hole.

use crate::cells::Cell;

/// Compute the energy array for a cell sequence, index-aligned with it.
///
/// Every `Hole(d)` radiates a triangular profile peaking at d′ (d rounded up
/// to even) and decaying by one per step, clipped at both ends of the
/// sequence. An odd hole is its own single center; an even hole shares its
/// peak with the placeholder that follows it, so both center cells receive
/// the full d′. Profiles from overlapping holes are summed, literals
/// included — a literal next to a strong enough hole is simply overtaken.
pub fn diffuse<S>(cells: &[Cell<S>]) -> Vec<u64> {
    let m = cells.len();
    let mut energy = vec![0u64; m];

    for (p, cell) in cells.iter().enumerate() {
        let Cell::Hole(d) = cell else { continue };
        let d = u64::from(*d);
        let peak = d + (d & 1);

        // Backward sweep, center included, clipped at the left edge.
        let reach = peak.min(p as u64 + 1) as usize;
        for j in 0..reach {
            energy[p - j] += peak - j as u64;
        }

        // Forward sweep. An odd hole's center is already counted, so it
        // starts one step out; an even hole restarts at full peak on the
        // placeholder at p+1.
        let (base, start) = if d % 2 == 1 { (p, 1) } else { (p + 1, 0) };
        let reach = peak.min((m - base) as u64) as usize;
        for j in start..reach {
            energy[base + j] += peak - j as u64;
        }
    }

    energy
}
