use flight_network::connection::{canonical_token, ConnectionIndex};

#[test]
fn test_token_is_ordered_and_uppercase() {
    assert_eq!(canonical_token("SCL", "LIM"), "LIM-SCL");
    assert_eq!(canonical_token("lim", "scl"), "LIM-SCL");
    assert_eq!(canonical_token("Mex", "bog"), "BOG-MEX");
}

#[test]
fn test_add_is_idempotent_across_direction_and_case() {
    let mut index = ConnectionIndex::new();
    index.add_connection("SCL", "LIM");
    index.add_connection("LIM", "SCL");
    index.add_connection("scl", "lim");

    assert_eq!(index.len(), 1);
    assert_eq!(index.render(), "LIM-SCL");
}

#[test]
fn test_self_connection_is_ignored() {
    let mut index = ConnectionIndex::new();
    index.add_connection("SCL", "SCL");
    assert!(index.is_empty());
    assert_eq!(index.render(), "");
}

#[test]
fn test_render_sorted_without_trailing_separator() {
    let mut index = ConnectionIndex::new();
    index.add_connection("SCL", "MEX");
    index.add_connection("BOG", "LIM");
    index.add_connection("SCL", "LIM");

    assert_eq!(index.render(), "BOG-LIM,+LIM-SCL,+MEX-SCL");
}

#[test]
fn test_remove_connection() {
    let mut index = ConnectionIndex::new();
    index.add_connection("SCL", "LIM");
    index.add_connection("LIM", "BOG");

    index.remove_connection("lim", "SCL");
    assert!(!index.contains("SCL", "LIM"));
    assert_eq!(index.render(), "BOG-LIM");

    // Removing again, or removing something never added, changes nothing
    index.remove_connection("SCL", "LIM");
    index.remove_connection("NYC", "WAS");
    assert_eq!(index.render(), "BOG-LIM");
}
