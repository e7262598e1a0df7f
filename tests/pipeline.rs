use grade_lens::data::{AnalysisResult, ErrorKind, RawInput, Statistics, analyze};

fn kind_of(text: &str) -> Option<ErrorKind> {
    analyze(&RawInput::csv(text)).error().map(|e| e.kind())
}

fn stats_of(text: &str) -> Statistics {
    match analyze(&RawInput::csv(text)) {
        AnalysisResult::Success { stats, .. } => stats,
        AnalysisResult::Failure(err) => panic!("expected success, got {err}"),
    }
}

#[test]
fn two_students() {
    let stats = stats_of("Name,Grade\nAlice,90\nBob,80\n");
    assert_eq!(stats.count, 2);
    assert_eq!(stats.min, 80.0);
    assert_eq!(stats.max, 90.0);
    assert_eq!(format!("{:.2}", stats.mean), "85.00");
    assert_eq!(format!("{:.2}", stats.stddev), "5.00");
}

#[test]
fn missing_grade_column() {
    assert_eq!(kind_of("Name,Score\nAlice,90\n"), Some(ErrorKind::MissingColumn));
}

#[test]
fn non_numeric_grade() {
    assert_eq!(kind_of("Name,Grade\nAlice,ninety\n"), Some(ErrorKind::NonNumericGrade));
}

#[test]
fn header_only_is_empty_dataset() {
    assert_eq!(kind_of("Name,Grade\n"), Some(ErrorKind::EmptyDataset));
}

#[test]
fn unterminated_quote_is_malformed() {
    assert_eq!(kind_of("Name,Grade\n\"unterminated"), Some(ErrorKind::MalformedFormat));
}

#[test]
fn count_matches_row_count() {
    for n in [1usize, 2, 7, 50, 301] {
        let mut text = String::from("Id,Grade,Note\n");
        for i in 0..n {
            text.push_str(&format!("{i},{},\"row {i}\"\n", (i * 37 % 101) as f64 / 2.0));
        }
        let stats = stats_of(&text);
        assert_eq!(stats.count, n);
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
    }
}

#[test]
fn identical_grades_have_zero_stddev() {
    let stats = stats_of("Grade\n64.5\n64.5\n 64.5\n+64.5\n6.45e1\n");
    assert_eq!(stats.count, 5);
    assert_eq!(stats.stddev, 0.0);
}

#[test]
fn analyze_is_deterministic() {
    let raw = RawInput::csv("Name,Grade\nA,91.3\nB,47.25\nC,-3\nD,1e2\nE,66.6\n");
    let first = analyze(&raw);
    let second = analyze(&raw);
    assert_eq!(first, second);
    if let (AnalysisResult::Success { stats: a, .. }, AnalysisResult::Success { stats: b, .. }) =
        (&first, &second)
    {
        assert_eq!(a.mean.to_bits(), b.mean.to_bits());
        assert_eq!(a.stddev.to_bits(), b.stddev.to_bits());
    } else {
        panic!("expected success");
    }

    let bad = RawInput::csv("Name,Grade\nA,x\n");
    assert_eq!(analyze(&bad), analyze(&bad));
}

#[test]
fn other_columns_are_kept_for_display() {
    let result = analyze(&RawInput::csv("Name,Grade,Class\nAlice,90,\nBob,80,B\n"));
    let (table, _) = result.into_result().unwrap();
    let names: Vec<&str> = table.column_names().collect();
    assert_eq!(names, vec!["Name", "Grade", "Class"]);
    let class = table.column("Class").unwrap();
    assert_eq!(class.data.display(0).as_deref(), Some(""));
    assert_eq!(class.data.display(1).as_deref(), Some("B"));
}

#[test]
fn duplicate_grade_headers_use_the_first() {
    let stats = stats_of("Grade,Grade\n10,x\n20,y\n");
    assert_eq!(stats.mean, 15.0);
}

#[test]
fn identical_inexact_decimals_have_zero_stddev() {
    let stats = stats_of("Grade\n0.1\n0.1\n0.1\n");
    assert_eq!(stats.count, 3);
    assert!(stats.min <= stats.mean && stats.mean <= stats.max);
    assert_eq!(stats.mean, 0.1);
    assert_eq!(stats.stddev, 0.0);
}

#[test]
fn very_large_grades_stay_finite() {
    let stats = stats_of("Grade\n1e308\n1e308\n");
    assert_eq!(stats.mean, 1e308);
    assert_eq!(stats.stddev, 0.0);

    let stats = stats_of("Grade\n1e308\n1.5e308\n");
    assert!(stats.mean.is_finite() && stats.stddev.is_finite());
    assert!(stats.min <= stats.mean && stats.mean <= stats.max);
}

#[test]
fn out_of_range_literal_is_non_numeric() {
    assert_eq!(kind_of("Grade\n1e400\n"), Some(ErrorKind::NonNumericGrade));
    assert_eq!(kind_of("Grade\n90\n-1e999\n"), Some(ErrorKind::NonNumericGrade));
}

#[test]
fn stray_quote_inside_unquoted_field_is_accepted() {
    let stats = stats_of("Name,Grade\nO\"Brien,90\n");
    assert_eq!(stats.count, 1);
    assert_eq!(stats.mean, 90.0);
}
