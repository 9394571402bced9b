// Copyright 2025 ReductSoftware UG
// Licensed under the Business Source License 1.1

//! String predicates behind the text rules.
//!
//! Every predicate takes the normalized answer `val` and the rule parameter `x`.
//! The case-insensitive ones fold both sides with [`str::to_lowercase`] and do
//! no other normalization.

use crate::classifier::Normalizer;

/// Normalizer to use for reader answers.
pub const DEFAULT_NORMALIZER: Normalizer = Normalizer::String;

/// The given value should be equal to `x`, ignoring case.
pub fn equals(val: &str, x: &str) -> bool {
    val.to_lowercase() == x.to_lowercase()
}

/// The given value should be equal to `x`. This is case-sensitive.
pub fn case_sensitive_equals(val: &str, x: &str) -> bool {
    val == x
}

/// The given string should start with `x`.
pub fn starts_with(val: &str, x: &str) -> bool {
    val.to_lowercase().starts_with(&x.to_lowercase())
}

/// The given string should contain `x`.
pub fn contains(val: &str, x: &str) -> bool {
    val.to_lowercase().contains(&x.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn samples() -> Vec<&'static str> {
        vec![
            "",
            " ",
            "a",
            "A",
            "Cat",
            "cat",
            "CAT ",
            "Hello World",
            "hello world",
            "Ünïcödé",
            "ünïcödé",
            "ß",
        ]
    }

    mod equals {
        use super::*;

        #[rstest]
        #[case("Hello", "hello", true)]
        #[case("hello", "hello", true)]
        #[case("HELLO", "hElLo", true)]
        #[case("Hello", "Hello ", false)]
        #[case("Ünïcödé", "üNÏCÖDÉ", true)]
        #[case("", "", true)]
        #[case("", "a", false)]
        #[case("a", "", false)]
        fn test_logic(#[case] val: &str, #[case] x: &str, #[case] expected: bool) {
            assert_eq!(equals(val, x), expected);
        }

        #[rstest]
        fn reflexive(samples: Vec<&str>) {
            for s in samples {
                assert!(equals(s, s), "{:?}", s);
            }
        }

        #[rstest]
        fn symmetric(samples: Vec<&str>) {
            for a in &samples {
                for b in &samples {
                    assert_eq!(equals(a, b), equals(b, a), "{:?} {:?}", a, b);
                }
            }
        }
    }

    mod case_sensitive_equals {
        use super::*;

        #[rstest]
        #[case("Hello", "hello", false)]
        #[case("Hello", "Hello", true)]
        #[case("Cat", "cat", false)]
        #[case("", "", true)]
        #[case("", " ", false)]
        fn test_logic(#[case] val: &str, #[case] x: &str, #[case] expected: bool) {
            assert_eq!(case_sensitive_equals(val, x), expected);
        }

        #[rstest]
        fn implies_equals(samples: Vec<&str>) {
            for a in &samples {
                for b in &samples {
                    if case_sensitive_equals(a, b) {
                        assert!(equals(a, b), "{:?} {:?}", a, b);
                    }
                }
            }
        }

        #[rstest]
        fn is_stricter_than_equals() {
            assert!(equals("Cat", "cat"));
            assert!(!case_sensitive_equals("Cat", "cat"));
        }
    }

    mod starts_with {
        use super::*;

        #[rstest]
        #[case("Hello World", "hello", true)]
        #[case("Hello World", "HELLO WORLD", true)]
        #[case("Hello World", "world", false)]
        #[case("Hello", "Hello World", false)]
        #[case("", "a", false)]
        fn test_logic(#[case] val: &str, #[case] x: &str, #[case] expected: bool) {
            assert_eq!(starts_with(val, x), expected);
        }

        #[rstest]
        fn empty_prefix(samples: Vec<&str>) {
            for s in samples {
                assert!(starts_with(s, ""), "{:?}", s);
            }
        }

        #[rstest]
        fn implies_contains(samples: Vec<&str>) {
            for val in &samples {
                for x in &samples {
                    if starts_with(val, x) {
                        assert!(contains(val, x), "{:?} {:?}", val, x);
                    }
                }
            }
        }
    }

    mod contains {
        use super::*;

        #[rstest]
        #[case("Hello World", "o Wo", true)]
        #[case("Hello World", "O WO", true)]
        #[case("Hello World", "world", true)]
        #[case("Hello", "xyz", false)]
        #[case("Hello", "Hello!", false)]
        #[case("", "a", false)]
        fn test_logic(#[case] val: &str, #[case] x: &str, #[case] expected: bool) {
            assert_eq!(contains(val, x), expected);
        }

        #[rstest]
        fn empty_substring(samples: Vec<&str>) {
            for s in samples {
                assert!(contains(s, ""), "{:?}", s);
            }
        }

        #[rstest]
        fn contains_itself(samples: Vec<&str>) {
            for s in samples.into_iter().filter(|s| !s.is_empty()) {
                assert!(contains(s, s), "{:?}", s);
            }
        }
    }

    #[rstest]
    fn default_normalizer() {
        assert_eq!(DEFAULT_NORMALIZER, Normalizer::String);
    }
}
