// Host-side tests for pure keyboard functions.
// The main crate is wasm-only, so we re-implement the pure mapping here.

#[inline]
fn mode_for_digit(key: &str) -> Option<i32> {
    match key {
        "1" => Some(0), // Radial
        "2" => Some(1), // Orbital
        "3" => Some(2), // Spectral wave
        _ => None,
    }
}

#[test]
fn digits_map_to_the_three_modes() {
    assert_eq!(mode_for_digit("1"), Some(0));
    assert_eq!(mode_for_digit("2"), Some(1));
    assert_eq!(mode_for_digit("3"), Some(2));
}

#[test]
fn other_keys_do_not_select_a_mode() {
    for key in ["0", "4", "9", "a", "m", "d", " ", "Enter", "ArrowUp", ""] {
        assert_eq!(mode_for_digit(key), None, "key {key:?} should not map");
    }
}

#[test]
fn mapped_values_are_contiguous_from_zero() {
    let mut modes: Vec<i32> = ["1", "2", "3"]
        .iter()
        .filter_map(|k| mode_for_digit(k))
        .collect();
    modes.sort_unstable();
    assert_eq!(modes, vec![0, 1, 2]);
}
