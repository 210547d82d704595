use rankledger_engine::cell::CellValue;
use rankledger_engine::sheet::Sheet;
use rankledger_recon::{merge, parse_results, resolve_schedule, ReconcileConfig};

fn lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// "Points Lookup" sheet with the documented Regional schedule.
fn lookup_sheet() -> Sheet {
    let mut sheet = Sheet::new("Points Lookup");
    sheet.set_value(0, 0, "Nr");
    sheet.set_value(0, 1, "Comment");
    sheet.set_value(0, 2, "Level");
    for (i, bracket) in [1, 2, 3, 4, 5, 9, 17, 33, 65, 129].iter().enumerate() {
        sheet.set_value(0, 3 + i, &bracket.to_string());
    }

    sheet.set_number(1, 0, 1.0);
    sheet.set_value(1, 2, "Regional");
    for (i, points) in [100, 80, 65, 50, 40, 20, 10, 5, 2, 1].iter().enumerate() {
        sheet.set_number(1, 3 + i, *points as f64);
    }

    sheet.set_number(2, 0, 2.0);
    sheet.set_value(2, 2, "Local");
    for (i, points) in [50, 40, 30, 25, 20, 10, 5, 2, 1, 0].iter().enumerate() {
        sheet.set_number(2, 3 + i, *points as f64);
    }

    sheet
}

/// Category sheet in the production layout: header row, reserved rows 2-5,
/// players from row 6 with two historical tournament columns (I and J).
fn category_sheet(players: &[&str]) -> Sheet {
    let mut sheet = Sheet::new("Men");
    sheet.set_value(0, 0, "Nr");
    sheet.set_value(0, 1, "Player");
    sheet.set_value(0, 8, "Spring Open");
    sheet.set_value(0, 9, "City Cup");
    sheet.set_value(3, 1, "last updated");

    for (i, name) in players.iter().enumerate() {
        let row = 5 + i;
        sheet.set_number(row, 0, (i + 1) as f64);
        sheet.set_value(row, 1, name);
        sheet.set_number(row, 8, (10 * (i + 1)) as f64);
        sheet.set_number(row, 9, 5.0);
    }
    sheet
}

#[test]
fn full_run_regional() {
    let config = ReconcileConfig::default();
    let results = lines(
        "1.Alice|Bob
         Carol
         3.Dave
         5.Eve",
    );

    let placements = parse_results(&results).unwrap();
    assert_eq!(placements.len(), 4);

    let schedule = resolve_schedule(&lookup_sheet(), "Regional", &config.lookup).unwrap();

    let mut sheet = category_sheet(&["Alice", "Bob", "Carol", "Dave"]);
    let report = merge(&mut sheet, &placements, &schedule, &config.ledger).unwrap();

    // Two historical columns end at J (0-based 9); the new column is K.
    assert_eq!(report.new_column, 10);
    assert_eq!(report.existing_rows, 4);
    assert_eq!(report.updated.len(), 4);
    assert_eq!(report.added.len(), 1);

    // Alice, Bob and tied Carol all score bracket 1; Dave scores bracket 3.
    assert_eq!(sheet.value(5, 10), &CellValue::Number(100.0));
    assert_eq!(sheet.value(6, 10), &CellValue::Number(100.0));
    assert_eq!(sheet.value(7, 10), &CellValue::Number(100.0));
    assert_eq!(sheet.value(8, 10), &CellValue::Number(65.0));

    // Eve is new: appended at row 10 (0-based 9) with sequential index 5,
    // bracket-5 points, and zero backfill across both historical columns.
    assert_eq!(sheet.value(9, 0), &CellValue::Number(5.0));
    assert_eq!(sheet.display(9, 1), "Eve");
    assert_eq!(sheet.value(9, 8), &CellValue::Number(0.0));
    assert_eq!(sheet.value(9, 9), &CellValue::Number(0.0));
    assert_eq!(sheet.value(9, 10), &CellValue::Number(40.0));

    // Pre-existing rows and values untouched.
    assert_eq!(sheet.value(5, 8), &CellValue::Number(10.0));
    assert_eq!(sheet.value(8, 9), &CellValue::Number(5.0));
}

#[test]
fn level_selects_its_own_schedule() {
    let config = ReconcileConfig::default();
    let placements = parse_results(&lines("1.Alice")).unwrap();
    let schedule = resolve_schedule(&lookup_sheet(), "Local", &config.lookup).unwrap();

    let mut sheet = category_sheet(&["Alice"]);
    merge(&mut sheet, &placements, &schedule, &config.ledger).unwrap();

    assert_eq!(sheet.value(5, 10), &CellValue::Number(50.0));
}

#[test]
fn failed_run_commits_nothing() {
    let config = ReconcileConfig::default();
    // Rank 7 sits between bracket starts 5 and 9.
    let placements = parse_results(&lines("1.Alice\n7.Bob")).unwrap();
    let schedule = resolve_schedule(&lookup_sheet(), "Regional", &config.lookup).unwrap();

    let mut sheet = category_sheet(&["Alice", "Bob"]);
    let before = sheet.clone();

    assert!(merge(&mut sheet, &placements, &schedule, &config.ledger).is_err());
    assert_eq!(sheet.cell_count(), before.cell_count());
    assert_eq!(sheet.max_used_col(), before.max_used_col());
}

#[test]
fn custom_layout_shifts_every_position() {
    let config = ReconcileConfig::from_toml(
        r#"
[ledger]
header_row = 0
first_player_row = 1
index_col = 0
name_col = 1
backfill_start_col = 2

[lookup]
points_start_col = 3
"#,
    )
    .unwrap();

    let mut ledger = Sheet::new("Compact");
    ledger.set_value(0, 0, "Nr");
    ledger.set_value(0, 1, "Player");
    ledger.set_number(1, 0, 1.0);
    ledger.set_value(1, 1, "Alice");
    ledger.set_number(1, 2, 7.0);

    let placements = parse_results(&lines("1.Alice|Bob")).unwrap();
    let schedule = resolve_schedule(&lookup_sheet(), "Regional", &config.lookup).unwrap();
    let report = merge(&mut ledger, &placements, &schedule, &config.ledger).unwrap();

    assert_eq!(report.new_column, 3);
    assert_eq!(ledger.value(1, 3), &CellValue::Number(100.0));
    // Bob appended right below Alice with backfill in the lone history column.
    assert_eq!(ledger.value(2, 0), &CellValue::Number(2.0));
    assert_eq!(ledger.display(2, 1), "Bob");
    assert_eq!(ledger.value(2, 2), &CellValue::Number(0.0));
    assert_eq!(ledger.value(2, 3), &CellValue::Number(100.0));
}
