//! Save/load round-trips through real files.

use ordinate::data::{load_points, save_table, Column, DataPoint, DataTable, ROW_CAPACITY};

#[test]
fn round_trip_preserves_every_slot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("points.json");

    let mut table = DataTable::new();
    table.set_cell(0, Column::X, Some(1.0));
    table.set_cell(0, Column::Y, Some(2.0));
    table.set_cell(7, Column::X, Some(-3.25));
    // A partial row: only the y cell is filled.
    table.set_cell(12, Column::Y, Some(0.0));

    save_table(&path, &table).unwrap();
    let points = load_points(&path).unwrap();

    assert_eq!(points.len(), ROW_CAPACITY);
    assert_eq!(points, table.rows());
}

#[test]
fn round_trip_of_an_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");

    let table = DataTable::new();
    save_table(&path, &table).unwrap();

    let points = load_points(&path).unwrap();
    assert_eq!(points.len(), ROW_CAPACITY);
    assert!(points.iter().all(DataPoint::is_empty));
}

#[test]
fn loading_more_points_than_capacity_keeps_the_first_thirty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("many.json");

    let objects: Vec<String> = (0..35)
        .map(|i| format!(r#"{{"x": {}.0, "y": {}.0}}"#, i, i * 2))
        .collect();
    std::fs::write(&path, format!("[{}]", objects.join(","))).unwrap();

    let points = load_points(&path).unwrap();
    assert_eq!(points.len(), 35);

    let mut table = DataTable::new();
    table.replace_all(&points);
    assert_eq!(table.valid_points().len(), ROW_CAPACITY);
    assert_eq!(table.cell(0, Column::X), Some(0.0));
    assert_eq!(table.cell(29, Column::X), Some(29.0));
    assert_eq!(table.cell(29, Column::Y), Some(58.0));
}

#[test]
fn loading_fewer_points_than_capacity_leaves_the_tail_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("few.json");
    std::fs::write(
        &path,
        r#"[{"x": 1.0, "y": 1.0}, {"x": 2.0, "y": 2.0}, {"x": null, "y": 3.0},
           {"x": 4.0, "y": 4.0}, {"x": 5.0, "y": 5.0}]"#,
    )
    .unwrap();

    let mut table = DataTable::new();
    table.set_cell(20, Column::X, Some(99.0));
    table.replace_all(&load_points(&path).unwrap());

    assert_eq!(table.cell(2, Column::X), None);
    assert_eq!(table.cell(2, Column::Y), Some(3.0));
    for row in 5..ROW_CAPACITY {
        assert!(table.rows()[row].is_empty(), "row {} should be empty", row);
    }
}

#[test]
fn an_empty_array_clears_the_grid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cleared.json");
    std::fs::write(&path, "[]").unwrap();

    let mut table = DataTable::new();
    table.set_cell(0, Column::X, Some(1.0));
    table.set_cell(0, Column::Y, Some(2.0));
    table.replace_all(&load_points(&path).unwrap());

    assert!(table.valid_points().is_empty());
    assert!(table.rows().iter().all(DataPoint::is_empty));
}

#[test]
fn malformed_files_fail_without_touching_the_table() {
    let dir = tempfile::tempdir().unwrap();

    let truncated = dir.path().join("truncated.json");
    std::fs::write(&truncated, r#"[{"x": 1.0, "y":"#).unwrap();
    assert!(load_points(&truncated).unwrap_err().is_format());

    let not_an_array = dir.path().join("object.json");
    std::fs::write(&not_an_array, r#"{"points": []}"#).unwrap();
    assert!(load_points(&not_an_array).unwrap_err().is_format());

    let wrong_shape = dir.path().join("numbers.json");
    std::fs::write(&wrong_shape, "[1, 2, 3]").unwrap();
    assert!(load_points(&wrong_shape).unwrap_err().is_format());

    let missing = dir.path().join("absent.json");
    let err = load_points(&missing).unwrap_err();
    assert!(!err.is_format());
}
