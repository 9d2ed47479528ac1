use chrono::{Datelike, Days, NaiveDate, Weekday};
use ordercal::calendar::grid::{end_of_month, GridBuilder};
use ordercal::{build_month_grid, DateSet, MonthGrid};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn months(from_year: i32, to_year: i32) -> impl Iterator<Item = NaiveDate> {
    (from_year..=to_year).flat_map(|y| (1..=12).map(move |m| date(y, m, 1)))
}

fn keys(grid: &MonthGrid) -> Vec<NaiveDate> {
    grid.cells().map(|c| c.date().unwrap()).collect()
}

#[test]
fn test_every_grid_is_whole_weeks() {
    let empty = DateSet::new();
    for anchor in months(1999, 2032) {
        let grid = build_month_grid(anchor, &empty, &empty, anchor);
        assert!(
            (4..=6).contains(&grid.weeks.len()),
            "{} has {} weeks",
            anchor,
            grid.weeks.len()
        );
        assert_eq!(grid.cells().count(), grid.weeks.len() * 7);
        assert_eq!(grid.first().unwrap().date().unwrap().weekday(), Weekday::Mon);
        assert_eq!(grid.last().unwrap().date().unwrap().weekday(), Weekday::Sun);
    }
}

#[test]
fn test_dates_are_consecutive() {
    let empty = DateSet::new();
    for anchor in months(2020, 2025) {
        let grid = build_month_grid(anchor, &empty, &empty, anchor);
        let dates = keys(&grid);
        for pair in dates.windows(2) {
            assert_eq!(pair[0] + Days::new(1), pair[1], "gap in grid for {}", anchor);
        }
    }
}

#[test]
fn test_current_month_count_matches_month_length() {
    let empty = DateSet::new();
    for anchor in months(2023, 2025) {
        let grid = build_month_grid(anchor, &empty, &empty, anchor);
        let current: Vec<_> = grid.cells().filter(|c| c.is_current_month).collect();
        assert_eq!(current.len() as u32, end_of_month(anchor).day(), "month {}", anchor);
        assert!(current.iter().all(|c| {
            let d = c.date().unwrap();
            d.year() == anchor.year() && d.month() == anchor.month()
        }));
    }
}

#[test]
fn test_today_flag() {
    let empty = DateSet::new();
    let today = date(2024, 3, 15);

    let grid = build_month_grid(today, &empty, &empty, today);
    assert_eq!(grid.cells().filter(|c| c.is_today).count(), 1);

    // April's grid starts on 2024-04-01, after the 15th of March
    let april = build_month_grid(date(2024, 4, 1), &empty, &empty, today);
    assert_eq!(april.cells().filter(|c| c.is_today).count(), 0);

    // today in the leading partial week of the next month is still flagged
    let end_of_feb = date(2024, 2, 27);
    let march = build_month_grid(date(2024, 3, 1), &empty, &empty, end_of_feb);
    let flagged: Vec<_> = march.cells().filter(|c| c.is_today).collect();
    assert_eq!(flagged.len(), 1);
    assert!(!flagged[0].is_current_month);
}

#[test]
fn test_march_2024_example() {
    let offers: DateSet = ["2024-03-10"].into_iter().collect();
    let grid = build_month_grid(date(2024, 3, 1), &offers, &DateSet::new(), date(2024, 3, 1));

    assert_eq!(grid.weeks.len(), 5);
    assert_eq!(grid.cells().count(), 35);
    let first = grid.first().unwrap();
    assert_eq!(first.iso_date, "2024-02-26");
    assert!(!first.is_current_month);
    assert!(grid.cell("2024-03-01").unwrap().is_current_month);

    let tenth = grid.cell("2024-03-10").unwrap();
    assert!(tenth.has_offer && !tenth.has_order && tenth.is_selectable());
    assert!(!grid.cell("2024-03-11").unwrap().is_selectable());
}

#[test]
fn test_anchor_day_is_irrelevant() {
    let empty = DateSet::new();
    let today = date(2024, 1, 1);
    let from_first = build_month_grid(date(2024, 2, 1), &empty, &empty, today);
    let from_last = build_month_grid(date(2024, 2, 29), &empty, &empty, today);
    assert_eq!(from_first, from_last);
}

#[test]
fn test_leap_february() {
    let empty = DateSet::new();
    let grid = build_month_grid(date(2024, 2, 1), &empty, &empty, date(2024, 2, 1));
    assert!(grid.cell("2024-02-29").unwrap().is_current_month);

    let grid = build_month_grid(date(2023, 2, 1), &empty, &empty, date(2023, 2, 1));
    assert!(grid.cell("2023-02-29").is_none());
}

#[test]
fn test_supported_range_edges() {
    let empty = DateSet::new();
    let first = build_month_grid(date(1, 1, 1), &empty, &empty, date(2024, 1, 1));
    assert!(first.cell("0001-01-01").unwrap().is_current_month);

    let last = build_month_grid(date(9999, 11, 30), &empty, &empty, date(2024, 1, 1));
    assert!(last.cell("9999-11-30").unwrap().is_current_month);

    // December 9999 would end in year 10000
    let beyond = build_month_grid(date(9999, 12, 31), &empty, &empty, date(2024, 1, 1));
    assert_eq!(beyond.month, date(9999, 11, 1));
    assert!(beyond.cells().all(|c| c.iso_date.len() == 10 && !c.iso_date.starts_with('+')));
}

#[test]
fn test_sunday_first_builder() {
    let empty = DateSet::new();
    let builder = GridBuilder::with_week_start(Weekday::Sun);
    for anchor in months(2024, 2024) {
        let grid = builder.build(anchor, &empty, &empty, anchor);
        assert_eq!(grid.first().unwrap().date().unwrap().weekday(), Weekday::Sun);
        assert_eq!(grid.last().unwrap().date().unwrap().weekday(), Weekday::Sat);
    }
}
