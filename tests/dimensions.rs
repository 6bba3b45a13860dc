use chrono::NaiveDate;
use vacation_canvas::{compose, Employee, Holiday, RenderConfig, RenderRequest, Vacation};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn team(n: u64) -> Vec<Employee> {
    (1..=n).map(|id| Employee::new(id, format!("Employee {}", id), "#336699")).collect()
}

fn height(req: &RenderRequest) -> f32 {
    compose(req, &RenderConfig::default()).unwrap().layout.height
}

#[test]
fn height_never_shrinks_as_vacations_are_added() {
    for (from, to) in [(d(2025, 6, 1), d(2025, 6, 20)), (d(2025, 1, 1), d(2025, 12, 31))] {
        let mut previous = 0.0;
        for count in 0..12u64 {
            let vacations = (0..count)
                .map(|i| Vacation::new(i, i % 4 + 1, d(2025, 6, 2 + i as u32), d(2025, 6, 3 + i as u32)))
                .collect();
            let req = RenderRequest::new(from, to).employees(team(4)).vacations(vacations);
            let h = height(&req);
            assert!(h >= previous, "{} vacations: {} < {}", count, h, previous);
            previous = h;
        }
    }
}

#[test]
fn height_never_shrinks_as_holidays_are_added() {
    let mut previous = 0.0;
    for count in 0..10u32 {
        let holidays = (0..count).map(|i| Holiday::new(d(2025, 6, 1 + i), format!("Holiday {}", i))).collect();
        let req = RenderRequest::new(d(2025, 6, 1), d(2025, 6, 30)).holidays(holidays);
        let h = height(&req);
        assert!(h >= previous);
        previous = h;
    }
}

#[test]
fn canvas_never_drops_below_minimum() {
    let cfg = RenderConfig::default();
    let short = compose(&RenderRequest::new(d(2025, 6, 1), d(2025, 6, 1)), &cfg).unwrap();
    assert_eq!(short.layout.width, cfg.timeline.min_width);
    assert_eq!(short.layout.height, cfg.timeline.min_height);

    let long = compose(&RenderRequest::new(d(2025, 6, 1), d(2025, 7, 15)), &cfg).unwrap();
    assert!(long.layout.width >= cfg.monthly.min_width);
    assert!(long.layout.height >= cfg.monthly.min_height);
}

#[test]
fn timeline_grows_with_days_and_employees() {
    let cfg = RenderConfig::default();
    let req = RenderRequest::new(d(2025, 6, 1), d(2025, 6, 30)).employees(team(10));
    let layout = compose(&req, &cfg).unwrap().layout;
    assert_eq!(layout.width, 150.0 + 30.0 * 30.0 + 20.0);
    assert_eq!(layout.height, 60.0 + 50.0 + 10.0 * 40.0 + 20.0);
}
