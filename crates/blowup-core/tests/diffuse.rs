//! Energy accumulation: decay profiles, parity, clipping, overlap.

use blowup_core::cells::Cell;
use blowup_core::energy::diffuse;
use blowup_core::gaps::annotate;

fn cells_of(input: &str) -> Vec<Cell<char>> {
    let symbols: Vec<char> = input.chars().collect();
    annotate(&symbols).unwrap()
}

#[test]
fn test_no_holes_no_energy() {
    let cells = cells_of("ABC");
    assert_eq!(diffuse(&cells), vec![0, 0, 0]);
}

#[test]
fn test_energy_is_index_aligned_with_cells() {
    for input in ["", "A", "AC", "AD", "Hello", "banana"] {
        let cells = cells_of(input);
        assert_eq!(diffuse(&cells).len(), cells.len());
    }
}

#[test]
fn test_odd_hole_single_center() {
    // d = 3 rounds up to peak 4 on the hole itself, decaying both ways.
    let cells = cells_of("AE");
    assert_eq!(diffuse(&cells), vec![3, 4, 3]);
}

#[test]
fn test_even_hole_two_centers() {
    // d = 4: the hole and its placeholder both carry the full peak.
    let cells = cells_of("AF");
    assert_eq!(diffuse(&cells), vec![3, 4, 4, 3]);
}

#[test]
fn test_profile_clipped_at_both_edges() {
    // d = 24 would reach 24 cells either way; the sequence only has 4.
    let cells = cells_of("AZ");
    assert_eq!(diffuse(&cells), vec![23, 24, 24, 23]);
}

#[test]
fn test_overlapping_holes_sum() {
    // Two unit holes meet on the shared literal 'C': 1 + 1.
    let cells = cells_of("ACE");
    assert_eq!(diffuse(&cells), vec![1, 2, 2, 2, 1]);
}

#[test]
fn test_literal_overtaken_by_energy() {
    // 'D' sits inside the hole's profile and ends up nonzero.
    let cells = cells_of("ADA");
    let energy = diffuse(&cells);
    assert_eq!(energy, vec![1, 2, 2, 1, 0]);
    assert!(matches!(cells[3], Cell::Literal('D')));
    assert!(energy[3] > 0);
}

#[test]
fn test_placeholder_energy_at_least_two() {
    // Smallest positive even magnitude is 2, so every placeholder gets ≥ 2.
    for input in ["AD", "ADAD", "AF", "AZ", "Hello", "HZa", "aeiou"] {
        let cells = cells_of(input);
        let energy = diffuse(&cells);
        for (cell, e) in cells.iter().zip(&energy) {
            if matches!(cell, Cell::Placeholder) {
                assert!(*e >= 2, "placeholder in {input:?} has energy {e}");
            }
        }
    }
}

#[test]
fn test_hole_always_carries_its_own_peak() {
    for input in ["AC", "AD", "AE", "AZ", "HZa", "main"] {
        let cells = cells_of(input);
        let energy = diffuse(&cells);
        for (cell, e) in cells.iter().zip(&energy) {
            if let Cell::Hole(d) = cell {
                let peak = u64::from(d + (d & 1));
                assert!(*e >= peak, "hole in {input:?} has energy {e} < peak {peak}");
            }
        }
    }
}
