//! Rokuyō cycle properties.

use kyureki::{rokuyou, Rokuyou};

#[test]
fn first_six_days_of_first_month_produce_all_labels_in_order() {
    let labels: Vec<Rokuyou> = (1..=6).map(|day| rokuyou::from_month_day(1, day)).collect();
    assert_eq!(labels, Rokuyou::CYCLE);

    let names: Vec<&str> = labels.iter().map(Rokuyou::name).collect();
    assert_eq!(names, ["先勝", "友引", "先負", "仏滅", "大安", "赤口"]);
}

#[test]
fn label_is_periodic_with_period_six() {
    for month in 1..=12 {
        for day in 1..=30 {
            assert_eq!(
                rokuyou::from_month_day(month, day),
                rokuyou::from_month_day(month, day + 6),
                "month {month} day {day}"
            );
        }
    }
}

#[test]
fn labels_restart_at_each_month_head() {
    // The cycle index advances by one per month number, so each month head
    // picks up one label later than the previous month's head.
    for month in 1..=11 {
        let head = rokuyou::from_month_day(month, 1);
        let next_head = rokuyou::from_month_day(month + 1, 1);
        let position = Rokuyou::CYCLE.iter().position(|&r| r == head).unwrap();
        assert_eq!(next_head, Rokuyou::CYCLE[(position + 1) % 6]);
    }
}
