use chrono::NaiveDate;
use vacation_canvas::rendering::paint::{Layer, PaintCommand};
use vacation_canvas::{compose, Employee, Holiday, RenderConfig, RenderRequest, Rgb, Vacation};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn alice_request() -> RenderRequest {
    RenderRequest::new(d(2025, 6, 1), d(2025, 6, 10))
        .employees(vec![Employee::new(1, "Alice", "#FF0000")])
        .vacations(vec![Vacation::new(1, 1, d(2025, 6, 5), d(2025, 6, 7))])
}

fn rect_x(cmd: &PaintCommand) -> f32 {
    match cmd {
        PaintCommand::Rect { x, .. } => *x,
        other => panic!("expected a rect, got {:?}", other),
    }
}

#[test]
fn single_vacation_draws_one_bar_over_its_days() {
    let composition = compose(&alice_request(), &RenderConfig::default()).unwrap();
    let scene = &composition.scene;

    let bars: Vec<_> = scene.layer(Layer::VacationBar).collect();
    assert_eq!(bars.len(), 1);
    let PaintCommand::Rect { x, y, width, height, fill, .. } = bars[0] else {
        panic!("bar should be a rect");
    };
    // offsets 4..=6, inset by 2px on each side
    assert_eq!(*x, 150.0 + 4.0 * 30.0 + 2.0);
    assert_eq!(*width, 3.0 * 30.0 - 4.0);
    assert_eq!(*y, 60.0 + 50.0 + 5.0);
    assert_eq!(*height, 30.0);
    assert_eq!(*fill, Rgb::new(255, 0, 0));

    assert_eq!(scene.texts(Layer::RowLabel), vec!["Alice"]);
    assert_eq!(scene.texts(Layer::LegendText), vec!["Alice  Jun 5 - Jun 7"]);
    assert_eq!(scene.texts(Layer::LegendTitle), vec!["Vacations"]);
    assert_eq!(scene.texts(Layer::Title), vec!["Team Vacation Calendar"]);
}

#[test]
fn weekend_shading_covers_saturday_and_sunday_columns() {
    let composition = compose(&alice_request(), &RenderConfig::default()).unwrap();
    let xs: Vec<f32> = composition.scene.layer(Layer::WeekendShade).map(rect_x).collect();
    // 2025-06-01 is a Sunday, 06-07 and 06-08 are the next weekend
    assert_eq!(xs, vec![150.0, 150.0 + 6.0 * 30.0, 150.0 + 7.0 * 30.0]);
}

#[test]
fn holiday_shading_is_drawn_after_weekends() {
    let req = alice_request()
        .holidays(vec![Holiday::new(d(2025, 6, 9), "Whit Monday")])
        .country_label("Germany");
    let composition = compose(&req, &RenderConfig::default()).unwrap();
    let scene = &composition.scene;

    let shade: Vec<f32> = scene.layer(Layer::HolidayShade).map(rect_x).collect();
    assert_eq!(shade, vec![150.0 + 8.0 * 30.0]);
    assert_eq!(scene.count(Layer::HolidayAccent), 1);
    assert!(scene.last_index(Layer::WeekendShade).unwrap() < scene.first_index(Layer::HolidayShade).unwrap());
    assert!(scene.last_index(Layer::HolidayShade).unwrap() < scene.first_index(Layer::VacationBar).unwrap());

    assert_eq!(
        scene.texts(Layer::LegendTitle),
        vec!["Vacations", "Public Holidays (Germany)"]
    );
    assert_eq!(
        scene.texts(Layer::LegendText).last().map(String::as_str),
        Some("Jun 9  Whit Monday")
    );
}

#[test]
fn vacations_outside_the_window_draw_nothing() {
    let req = alice_request().vacations(vec![
        Vacation::new(1, 1, d(2025, 5, 1), d(2025, 5, 31)),
        Vacation::new(2, 1, d(2025, 6, 11), d(2025, 6, 20)),
    ]);
    let composition = compose(&req, &RenderConfig::default()).unwrap();
    assert_eq!(composition.scene.count(Layer::VacationBar), 0);
    assert!(composition.layout.vacation_legend.is_none());
    assert_eq!(composition.scene.count(Layer::LegendText), 0);
}

#[test]
fn partial_overlap_is_clipped_to_the_window() {
    let req = alice_request().vacations(vec![
        Vacation::new(1, 1, d(2025, 5, 28), d(2025, 6, 2)).with_description("Long weekend"),
    ]);
    let composition = compose(&req, &RenderConfig::default()).unwrap();
    let scene = &composition.scene;
    let bar = scene.layer(Layer::VacationBar).next().unwrap();
    let PaintCommand::Rect { x, width, .. } = bar else {
        panic!("bar should be a rect");
    };
    assert_eq!(*x, 152.0);
    assert_eq!(*width, 2.0 * 30.0 - 4.0);
    assert_eq!(
        scene.texts(Layer::LegendText),
        vec!["Alice  Jun 1 - Jun 2  - Long weekend"]
    );
}

#[test]
fn unknown_employee_is_listed_but_has_no_row() {
    let req = alice_request().vacations(vec![
        Vacation::new(1, 1, d(2025, 6, 5), d(2025, 6, 7)),
        Vacation::new(2, 99, d(2025, 6, 2), d(2025, 6, 3)),
    ]);
    let composition = compose(&req, &RenderConfig::default()).unwrap();
    let scene = &composition.scene;
    assert_eq!(scene.count(Layer::VacationBar), 1);
    assert_eq!(scene.texts(Layer::RowLabel), vec!["Alice"]);

    let legend = scene.texts(Layer::LegendText);
    assert_eq!(legend.len(), 2);
    assert_eq!(legend[1], "Unknown  Jun 2 - Jun 3");
    let badges: Vec<_> = scene.layer(Layer::LegendBadge).collect();
    let PaintCommand::Rect { fill, .. } = badges[1] else {
        panic!("timeline legend badges are rects");
    };
    assert_eq!(*fill, Rgb::DEFAULT);
}

#[test]
fn malformed_color_falls_back_to_default_blue() {
    let req = alice_request().employees(vec![Employee::new(1, "Alice", "notacolor")]);
    let composition = compose(&req, &RenderConfig::default()).unwrap();
    let bar = composition.scene.layer(Layer::VacationBar).next().unwrap();
    let PaintCommand::Rect { fill, .. } = bar else {
        panic!("bar should be a rect");
    };
    assert_eq!(*fill, Rgb::new(0x34, 0x98, 0xdb));
}
