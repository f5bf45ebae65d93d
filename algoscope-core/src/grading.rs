//! Problem Grading
//!
//! Pure scoring rules applied to results coming back from the external
//! code-execution service. Matching is deliberately lenient: program output
//! passes a test case when it *contains* the expected text, or matches it
//! once brackets and whitespace are ignored.

use serde::{Deserialize, Serialize};

/// A test case attached to a practice problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub input: String,
    pub expected: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Outcome of one test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub passed: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeReport {
    /// True when every case passed. Vacuously true with no cases.
    pub all_passed: bool,
    pub results: Vec<TestResult>,
}

impl GradeReport {
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// Percentage of passing cases, rounded down. 100 with no cases.
    pub fn score(&self) -> u32 {
        if self.results.is_empty() {
            return 100;
        }
        (self.passed_count() * 100 / self.results.len()) as u32
    }
}

/// Whether program output satisfies an expected answer.
pub fn output_matches(actual: &str, expected: &str) -> bool {
    let actual = actual.trim();
    let expected = expected.trim();

    actual.contains(expected)
        || strip_brackets_and_space(actual) == strip_brackets_and_space(expected)
}

fn strip_brackets_and_space(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '[' | ']') && !c.is_whitespace())
        .collect()
}

/// Grade a single program output against every test case.
pub fn grade(output: &str, cases: &[TestCase]) -> GradeReport {
    let actual = output.trim();
    let results: Vec<TestResult> = cases
        .iter()
        .map(|case| TestResult {
            input: case.input.clone(),
            expected: case.expected.trim().to_string(),
            actual: actual.to_string(),
            passed: output_matches(actual, &case.expected),
            description: case.description.clone(),
        })
        .collect();

    GradeReport {
        all_passed: results.iter().all(|r| r.passed),
        results,
    }
}

/// Points and completion derived from a topic score out of 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicScore {
    pub score: u32,
    /// One point per full ten percent.
    pub points: u32,
    /// Only a perfect score completes a topic.
    pub completed: bool,
}

impl TopicScore {
    pub fn new(score: u32) -> Self {
        let score = score.min(100);
        Self {
            score,
            points: score / 10,
            completed: score == 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(input: &str, expected: &str) -> TestCase {
        TestCase {
            input: input.to_string(),
            expected: expected.to_string(),
            description: None,
        }
    }

    #[test]
    fn matching_rules() {
        assert!(output_matches("true\n", "true"));
        assert!(output_matches("result: 42 done", "42"));
        assert!(output_matches("[1, 2, 3]", "1,2,3"));
        assert!(output_matches("[1,2,3]", "[1, 2, 3]"));
        assert!(output_matches("[7]", "7"));
        assert!(!output_matches("false", "true"));
        assert!(!output_matches("1 2", "1,2"));
    }

    #[test]
    fn substring_matching_is_lenient() {
        // "12" contains "1", so it passes: matching is containment, not equality.
        assert!(output_matches("12", "1"));
    }

    #[test]
    fn grade_reports_each_case() {
        let report = grade(
            "  true  ",
            &[case("()", "true"), case("(]", "false"), case("{}", "true")],
        );
        assert!(!report.all_passed);
        assert_eq!(report.passed_count(), 2);
        assert_eq!(report.score(), 66);
        assert_eq!(report.results[1].actual, "true");
        assert!(!report.results[1].passed);
    }

    #[test]
    fn no_cases_is_a_pass() {
        let report = grade("anything", &[]);
        assert!(report.all_passed);
        assert_eq!(report.score(), 100);
    }

    #[test]
    fn report_serializes_camel_case() {
        let report = grade("ok", &[case("x", "ok")]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["allPassed"], true);
        assert_eq!(json["results"][0]["passed"], true);
    }

    #[test]
    fn topic_points() {
        assert_eq!(TopicScore::new(100), TopicScore { score: 100, points: 10, completed: true });
        let partial = TopicScore::new(85);
        assert_eq!(partial.points, 8);
        assert!(!partial.completed);
        assert_eq!(TopicScore::new(5).points, 0);
        assert_eq!(TopicScore::new(250).score, 100);
    }
}
