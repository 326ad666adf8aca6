/// Test case loader for the RFC 3986 parsing and resolution suite
///
/// Cases live in `cases.json`: an array of objects, with plain strings
/// between them as section comments. Only the fields present in a case
/// are checked.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)]
pub enum TestCase {
    /// A parse (no `base`) or join (with `base`) case
    UrlTest {
        input: String,
        #[serde(default)]
        base: Option<String>,
        #[serde(default)]
        href: Option<String>,
        #[serde(default)]
        scheme: Option<String>,
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        port: Option<String>,
        #[serde(default)]
        path: Option<String>,
        #[serde(default)]
        query: Option<String>,
        #[serde(default)]
        fragment: Option<String>,
        #[serde(default)]
        failure: Option<bool>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct TestResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<Failure>,
}

#[derive(Debug, Clone)]
pub struct Failure {
    pub test_num: usize,
    pub input: String,
    pub base: Option<String>,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

impl TestResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

/// Load every case from `cases.json`
pub fn load_cases() -> Vec<TestCase> {
    serde_json::from_str(include_str!("cases.json")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cases() {
        let cases = load_cases();
        assert!(cases.len() > 80);
        assert!(matches!(cases[0], TestCase::Comment(_)));
        assert!(
            cases
                .iter()
                .any(|case| matches!(case, TestCase::UrlTest { base: Some(_), .. }))
        );
    }
}
