//! Course filtering tests

use course_pilot::{CourseFilter, CourseMatcher, FileConfigLoader, cmp_course};
use rstest::rstest;

#[rstest]
#[case("math101", &["math101", "phys201"], true)]
#[case("phys201", &["math101", "phys201"], true)]
#[case("chem301", &["math101", "phys201"], false)]
#[case("x", &[], false)]
#[case("math101 ", &["math101"], false)]
fn test_course_matcher(#[case] identifier: &str, #[case] list: &[&str], #[case] expected: bool) {
    assert_eq!(CourseMatcher::matches(identifier, list), expected);
    assert_eq!(cmp_course(identifier, list), expected);
}

#[test]
fn test_matcher_does_not_mutate_input() {
    let list = vec!["b".to_string(), "a".to_string()];
    assert!(CourseMatcher::matches("a", &list));
    assert_eq!(list, vec!["b", "a"]);
}

#[test]
fn test_filter_from_loaded_config() {
    let json = r#"
{
  "users": [{
    "account": "alice",
    "coursesCustom": {
      "excludeCourses": ["chem301"],
      "includeCourses": ["math101", "chem301"],
      "coursesSettings": [
        {"name": "math101", "includeExams": ["quiz1", "quiz2"], "excludeExams": ["quiz2"]}
      ]
    }
  }]
}
"#;
    let config = FileConfigLoader::new().load_from_str(json).unwrap();
    let filter = CourseFilter::new(&config.users[0].courses_custom);

    assert!(filter.admits_course("math101"));
    assert!(!filter.admits_course("chem301"));
    assert!(!filter.admits_course("phys201"));

    assert_eq!(filter.rule_for("math101").map(|r| r.name.as_str()), Some("math101"));
    assert!(filter.rule_for("phys201").is_none());

    assert!(filter.admits_exam("math101", "quiz1"));
    assert!(!filter.admits_exam("math101", "quiz2"));
    assert!(!filter.admits_exam("math101", "final"));
    assert!(filter.admits_exam("phys201", "final"));
}
