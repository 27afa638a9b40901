// rule.rs - Conway's transition rule (B3/S23)

/// Next state of a single cell given its current state and live-neighbor count.
///
/// Total over every `(alive, count)` pair: counts outside `0..=8` never occur,
/// and anything that is neither survival nor birth is a dead cell.
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true,  // Survival
        (false, 3)            => true,  // Birth
        _                     => false, // Death or stays dead
    }
}
