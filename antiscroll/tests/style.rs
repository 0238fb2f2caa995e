use antiscroll::{matrix_position, parse_px, px, resolve_transform};

#[test]
fn test_matrix_position_takes_last_two_arguments() {
    assert_eq!(matrix_position("matrix(1, 0, 0, 1, 40, 12)"), (40.0, 12.0));
    assert_eq!(matrix_position("matrix(1,0,0,1,-7.5,3)"), (-7.5, 3.0));
}

#[test]
fn test_matrix_position_without_function_is_origin() {
    assert_eq!(matrix_position("none"), (0.0, 0.0));
    assert_eq!(matrix_position(""), (0.0, 0.0));
    assert_eq!(matrix_position("garbage"), (0.0, 0.0));
}

#[test]
fn test_matrix_position_single_argument() {
    assert_eq!(matrix_position("translateX(25)"), (25.0, 0.0));
}

#[test]
fn test_matrix_position_non_numeric_argument_counts_as_zero() {
    assert_eq!(matrix_position("matrix(1, 0, 0, 1, abc, 9)"), (0.0, 9.0));
}

#[test]
fn test_resolve_transform() {
    assert_eq!(resolve_transform(""), "none");
    assert_eq!(resolve_transform("translateX(49px)"), "matrix(1, 0, 0, 1, 49, 0)");
    assert_eq!(resolve_transform("translateY(12.5px)"), "matrix(1, 0, 0, 1, 0, 12.5)");
    assert_eq!(resolve_transform("translate(3px, 4px)"), "matrix(1, 0, 0, 1, 3, 4)");
    assert_eq!(resolve_transform("rotate(45deg)"), "rotate(45deg)");
}

#[test]
fn test_resolved_translation_reads_back() {
    let computed = resolve_transform("translateY(73px)");
    assert_eq!(matrix_position(&computed), (0.0, 73.0));
}

#[test]
fn test_px() {
    assert_eq!(px(98.0), "98px");
    assert_eq!(px(-200.0), "-200px");
    assert_eq!(parse_px("214px"), Some(214.0));
    assert_eq!(parse_px(" 12 "), Some(12.0));
    assert_eq!(parse_px("auto"), None);
}
