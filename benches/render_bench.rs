use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vacation_canvas::{compose, fonts, render_with_fonts, Employee, Holiday, RenderConfig, RenderRequest, Vacation};

fn team_request(from: NaiveDate, to: NaiveDate, employees: u64) -> RenderRequest {
    let roster: Vec<Employee> = (1..=employees)
        .map(|id| Employee::new(id, format!("Employee {}", id), format!("#{:06x}", id * 0x0a1b2c % 0xffffff)))
        .collect();
    let vacations: Vec<Vacation> = (1..=employees)
        .map(|id| {
            let start = from.checked_add_days(Days::new(id * 3 % 28)).unwrap();
            Vacation::new(id, id, start, start.checked_add_days(Days::new(id % 5)).unwrap())
        })
        .collect();
    let holidays = vec![
        Holiday::new(from.checked_add_days(Days::new(8)).unwrap(), "Bench Day"),
        Holiday::new(from.checked_add_days(Days::new(20)).unwrap(), "Second Bench Day"),
    ];
    RenderRequest::new(from, to)
        .employees(roster)
        .vacations(vacations)
        .holidays(holidays)
        .country_label("Benchland")
}

fn bench_compose(c: &mut Criterion) {
    let cfg = RenderConfig::default();
    let d = |m, day| NaiveDate::from_ymd_opt(2025, m, day).unwrap();

    let timeline = team_request(d(1, 1), d(1, 31), 50);
    c.bench_function("compose_timeline_31d_50e", |b| {
        b.iter(|| compose(black_box(&timeline), &cfg).unwrap())
    });

    let year = team_request(d(1, 1), d(12, 31), 50);
    c.bench_function("compose_monthly_12m_50e", |b| {
        b.iter(|| compose(black_box(&year), &cfg).unwrap())
    });
}

fn bench_render_png(c: &mut Criterion) {
    let cfg = RenderConfig::default();
    let db = fonts::database(&cfg.fonts);
    let d = |m, day| NaiveDate::from_ymd_opt(2025, m, day).unwrap();

    let timeline = team_request(d(1, 1), d(1, 31), 50);
    c.bench_function("render_timeline_31d_50e", |b| {
        b.iter(|| render_with_fonts(black_box(&timeline), &cfg, db.clone()).unwrap())
    });

    let year = team_request(d(1, 1), d(12, 31), 50);
    c.bench_function("render_monthly_12m_50e", |b| {
        b.iter(|| render_with_fonts(black_box(&year), &cfg, db.clone()).unwrap())
    });
}

criterion_group!(benches, bench_compose, bench_render_png);
criterion_main!(benches);
