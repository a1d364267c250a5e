// tests/unit_model.rs
use junit_tidy::error::TidyError;
use junit_tidy::model::{Failure, TestCase, TestSuite, TestSuites};

fn case(name: &str) -> TestCase {
    TestCase {
        classname: "pkg.Class".to_string(),
        name: name.to_string(),
        time: 0.1,
        assertions: None,
        failure: None,
    }
}

fn suite(name: &str, cases: Vec<TestCase>) -> TestSuite {
    TestSuite {
        tests: cases.len() as u32,
        failures: 0,
        time: 1.0,
        name: name.to_string(),
        cases,
    }
}

fn tree(suites: Vec<TestSuite>) -> TestSuites {
    TestSuites {
        suites,
        ..TestSuites::default()
    }
}

#[test]
fn test_aggregate_preserves_order() {
    let mut target = tree(vec![suite("a", vec![]), suite("b", vec![])]);
    target.aggregate(tree(vec![suite("c", vec![])]));

    let names: Vec<&str> = target.suites.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn test_aggregate_is_associative_in_suite_order() {
    // [A, B] then [C]
    let mut left = tree(vec![suite("a", vec![]), suite("b", vec![])]);
    left.aggregate(tree(vec![suite("c", vec![])]));

    // [A] then [B, C]
    let mut right = tree(vec![suite("a", vec![])]);
    right.aggregate(tree(vec![suite("b", vec![]), suite("c", vec![])]));

    let l: Vec<&str> = left.suites.iter().map(|s| s.name.as_str()).collect();
    let r: Vec<&str> = right.suites.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(l, r);
}

#[test]
fn test_aggregate_empty_incoming_is_noop() {
    let mut target = tree(vec![suite("a", vec![case("t1")])]);
    let before = target.clone();
    target.aggregate(TestSuites::default());
    assert_eq!(target, before);
}

#[test]
fn test_rename_namespaces_cases() {
    let mut suites = tree(vec![suite("orig", vec![case("t1"), case("t2")])]);
    suites.set_suite_name("new").unwrap();

    assert_eq!(suites.suites[0].name, "new");
    assert_eq!(suites.suites[0].cases[0].name, "new/t1");
    assert_eq!(suites.suites[0].cases[1].name, "new/t2");
}

#[test]
fn test_rename_rejects_zero_suites() {
    let mut suites = TestSuites::default();
    let before = suites.clone();

    let err = suites.set_suite_name("new").unwrap_err();
    assert!(matches!(err, TidyError::InvalidState(_)));
    assert_eq!(suites, before, "rejection must not mutate the tree");
}

#[test]
fn test_rename_rejects_multiple_suites() {
    let mut suites = tree(vec![
        suite("a", vec![case("t1")]),
        suite("b", vec![case("t2")]),
    ]);
    let before = suites.clone();

    let err = suites.set_suite_name("new").unwrap_err();
    assert!(matches!(err, TidyError::InvalidState(_)));
    assert_eq!(suites, before, "rejection must not mutate the tree");
}

#[test]
fn test_is_passed() {
    let passed = case("ok");
    assert!(passed.is_passed());

    let failed = TestCase {
        failure: Some(Failure {
            message: "boom".to_string(),
            failure_type: "assert".to_string(),
            content: "stack trace".to_string(),
        }),
        ..case("bad")
    };
    assert!(!failed.is_passed());
}

#[test]
fn test_case_count_spans_suites() {
    let suites = tree(vec![
        suite("a", vec![case("t1"), case("t2")]),
        suite("b", vec![case("t3")]),
    ]);
    assert_eq!(suites.case_count(), 3);
}
