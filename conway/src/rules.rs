// rules.rs - Conway's B3/S23 transition rule

/// Column/row offsets of the 8 surrounding cells
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Next state of a cell given its current state and live neighbor count.
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Under/overpopulation or stays dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cell_table() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive with {n} neighbors");
        }
    }

    #[test]
    fn dead_cell_table() {
        for n in 0..=8 {
            assert_eq!(next_state(false, n), n == 3, "dead with {n} neighbors");
        }
    }

    #[test]
    fn offsets_exclude_center_and_are_unique() {
        assert!(!NEIGHBOR_OFFSETS.contains(&(0, 0)));
        for (i, a) in NEIGHBOR_OFFSETS.iter().enumerate() {
            for b in &NEIGHBOR_OFFSETS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
