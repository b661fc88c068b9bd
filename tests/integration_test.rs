use std::path::PathBuf;
use vacstats::buckets::DEFAULT_YEARS;
use vacstats::driver::{self, DriverArgs};
use vacstats::output::{Statistics, YearStats};
use vacstats::report;

fn init() {
    let _ = pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

fn path(filename: &str) -> PathBuf {
    let dir = env!("CARGO_MANIFEST_DIR");
    let mut path = PathBuf::from(dir);
    path.push(filename);
    path
}

fn calc(title_filter: &str) -> Statistics {
    let records = driver::read_file(path("sample-data/vacancies.csv")).unwrap();
    assert_eq!(records.len(), 5);
    let args = DriverArgs {
        title_filter,
        years: DEFAULT_YEARS,
    };
    driver::calc(&args, &records).unwrap()
}

fn names<T>(stats: &[(String, T)]) -> Vec<&str> {
    stats.iter().map(|(l, _)| l.as_str()).collect()
}

#[test]
fn test_basic() {
    init();
    let stats = calc("Программист");
    // Minsk: (1000 + 2001) / 2 * 60.66 = 91020.33
    assert_eq!(
        stats.year_salary,
        YearStats::from([(2020, 50000), (2021, 55000), (2022, 80340)])
    );
    assert_eq!(
        stats.year_count,
        YearStats::from([(2020, 1), (2021, 1), (2022, 3)])
    );
    assert_eq!(
        stats.year_salary_filtered,
        YearStats::from([(2020, 50000), (2021, 55000), (2022, 91020)])
    );
    assert_eq!(
        stats.year_count_filtered,
        YearStats::from([(2020, 1), (2021, 1), (2022, 1)])
    );
    assert_eq!(
        stats.location_salary,
        [
            ("Минск".to_owned(), 91020),
            ("Москва".to_owned(), 87500),
            ("Казань".to_owned(), 40000),
        ]
    );
    assert_eq!(names(&stats.location_share), ["Москва", "Казань", "Минск"]);
    let shares: Vec<f64> = stats.location_share.iter().map(|(_, s)| *s).collect();
    for (got, expected) in shares.iter().zip([0.4, 0.4, 0.2]) {
        assert!((got - expected).abs() < 1e-12, "{got} vs {expected}");
    }
}

#[test]
fn test_no_match() {
    init();
    let stats = calc("Дизайнер");
    assert_eq!(stats.year_salary_filtered, YearStats::from([(2022, 0)]));
    assert_eq!(stats.year_count_filtered, YearStats::from([(2022, 0)]));
    assert_eq!(stats.year_count.values().sum::<u64>(), 5);
}

#[test]
fn test_report() {
    init();
    let stats = calc("");
    assert_eq!(stats.year_salary, stats.year_salary_filtered);
    let mut workbook = report::build_workbook("", &stats).unwrap();
    let buf = workbook.save_to_buffer().unwrap();
    assert!(buf.starts_with(b"PK"));
}

#[test]
fn test_json() {
    init();
    let stats = calc("Rust");
    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["year_count_filtered"]["2022"], 1);
    assert_eq!(json["location_salary"][0][0], "Минск");
}
