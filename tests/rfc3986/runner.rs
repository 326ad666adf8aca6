use super::loader::{Failure, TestCase, TestResult, load_cases};
/// Runs the RFC 3986 cases against `nsurl::Url`
use nsurl::{Result, Url};

fn resolve(input: &str, base: Option<&str>) -> Result<Url> {
    match base {
        Some(base) => Url::parse(base)?.join(input),
        None => Url::parse(input),
    }
}

/// Run the cases and collect every mismatching field
pub fn run_cases(tests: Vec<TestCase>) -> TestResult {
    let mut result = TestResult::default();
    let mut test_num = 0;

    for test in tests {
        let TestCase::UrlTest {
            input,
            base,
            href,
            scheme,
            host,
            port,
            path,
            query,
            fragment,
            failure,
        } = test
        else {
            continue;
        };
        test_num += 1;

        let mut fail = |field: &'static str, expected: &str, actual: &str| {
            result.failures.push(Failure {
                test_num,
                input: input.clone(),
                base: base.clone(),
                field,
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        };

        let url = match (resolve(&input, base.as_deref()), failure == Some(true)) {
            (Ok(url), false) => url,
            (Err(_), true) => {
                result.passed += 1;
                continue;
            }
            (Ok(url), true) => {
                fail("parsing", "failure", url.as_str());
                result.failed += 1;
                continue;
            }
            (Err(e), false) => {
                fail("parsing", "success", &e.to_string());
                result.failed += 1;
                continue;
            }
        };

        let checks = [
            ("href", href.as_deref(), Some(url.as_str())),
            ("scheme", scheme.as_deref(), Some(url.scheme())),
            ("host", host.as_deref(), url.host()),
            ("port", port.as_deref(), url.port()),
            ("path", path.as_deref(), url.path()),
            ("query", query.as_deref(), url.query()),
            ("fragment", fragment.as_deref(), url.fragment()),
        ];

        let mut test_passed = true;
        for (field, expected, actual) in checks {
            let Some(expected) = expected else {
                continue;
            };
            if actual != Some(expected) {
                fail(field, expected, actual.unwrap_or("<none>"));
                test_passed = false;
            }
        }

        // The canonical form must parse back to the same URL
        if base.is_none() {
            match Url::parse(url.as_str()) {
                Ok(again) if again == url => {}
                Ok(again) => {
                    fail("reparse", url.as_str(), again.as_str());
                    test_passed = false;
                }
                Err(e) => {
                    fail("reparse", url.as_str(), &e.to_string());
                    test_passed = false;
                }
            }
        }

        if test_passed {
            result.passed += 1;
        } else {
            result.failed += 1;
        }
    }

    result
}

#[test]
fn test_rfc3986_suite() {
    let tests = load_cases();
    let total = tests.len();
    let result = run_cases(tests);

    println!("\nRan {total} entries: {}", result.summary());
    for failure in &result.failures {
        println!("  Test #{}: {}", failure.test_num, failure.field);
        println!("    Input: {:?}", failure.input);
        if let Some(ref base) = failure.base {
            println!("    Base: {base}");
        }
        println!("    Expected: {}", failure.expected);
        println!("    Actual: {}", failure.actual);
    }

    assert_eq!(
        result.failed,
        0,
        "RFC 3986 suite failed. Run with `cargo test test_rfc3986_suite -- --nocapture` for details."
    );
    assert!(result.passed >= 70, "Expected at least 70 cases, ran {}", result.passed);
}
