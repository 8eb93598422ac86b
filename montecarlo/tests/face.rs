use montecarlo::Face;

#[test]
fn numeric_faces_order_numerically() {
    assert!(Face::from(2) < Face::from(10));
    assert!(Face::from(-1.5) < Face::from(0));
}

#[test]
fn text_faces_order_lexicographically() {
    assert!(Face::from("apple") < Face::from("banana"));
    assert!(Face::from("10") < Face::from("2"));
}

#[test]
fn mixed_kinds_order_by_display_string() {
    // "10" < "2" as strings, so the numeric 10 sorts before the text "2".
    assert!(Face::from(10) < Face::from("2"));
    assert!(Face::from("1") > Face::from(0));
}

#[test]
fn mixed_order_is_deterministic_for_equal_strings() {
    // Same rendering, different kinds: numeric sorts first, never equal.
    let num = Face::from(3);
    let text = Face::from("3");
    assert!(num < text);
    assert_ne!(num, text);
}

#[test]
fn integer_and_float_inputs_compare_equal() {
    assert_eq!(Face::from(3), Face::from(3.0));
    assert_eq!(Face::from(0.0), Face::from(-0.0));
}

#[test]
fn whole_numerics_display_without_fraction() {
    assert_eq!(Face::from(3.0).to_string(), "3");
    assert_eq!(Face::from(2.5).to_string(), "2.5");
    assert_eq!(Face::from("six").to_string(), "six");
}
