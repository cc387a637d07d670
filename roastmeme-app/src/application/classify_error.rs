use crate::domain::{Caption, CaptionKind};
use crate::infrastructure::random::RandomSource;

/// A roast that fires when any keyword occurs in the lower-cased report.
pub struct RoastRule {
    pub keywords: &'static [&'static str],
    pub caption: Caption,
}

impl RoastRule {
    fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|kw| normalized.contains(kw))
    }
}

/// Evaluated top to bottom; first match wins.
pub const ROAST_RULES: &[RoastRule] = &[
    RoastRule {
        keywords: &["syntax error", "unexpected token"],
        caption: Caption::new(
            CaptionKind::Syntax,
            "One does not simply forget their semicolons and brackets.",
        ),
    },
    RoastRule {
        keywords: &["undefined", "null"],
        caption: Caption::new(
            CaptionKind::NullReference,
            "Your variables are like my social life - undefined.",
        ),
    },
    RoastRule {
        keywords: &["permission", "access denied"],
        caption: Caption::new(
            CaptionKind::Permission,
            "Access denied: even your code doesn't want to work with you.",
        ),
    },
    RoastRule {
        keywords: &["memory", "heap"],
        caption: Caption::new(
            CaptionKind::Memory,
            "Your memory management is worse than my ability to remember birthdays.",
        ),
    },
    RoastRule {
        keywords: &["timeout", "timed out"],
        caption: Caption::new(
            CaptionKind::Timeout,
            "Your code is so slow, Internet Explorer feels sorry for it.",
        ),
    },
    RoastRule {
        keywords: &["404", "not found"],
        caption: Caption::new(CaptionKind::NotFound, "404: Developer skills not found."),
    },
];

pub const GENERIC_ROASTS: &[Caption] = &[
    Caption::new(
        CaptionKind::Generic,
        "One does not simply fix this bug without crying first.",
    ),
    Caption::new(
        CaptionKind::Generic,
        "Your code is so broken, even Stack Overflow is laughing.",
    ),
    Caption::new(
        CaptionKind::Generic,
        "This isn't a bug, it's a feature... said no one ever about THIS monstrosity.",
    ),
    Caption::new(
        CaptionKind::Generic,
        "I've seen better error handling in a calculator from the 90s.",
    ),
    Caption::new(
        CaptionKind::Generic,
        "Your bug is so obvious, even a junior dev would spot it... after laughing for 5 minutes.",
    ),
    Caption::new(
        CaptionKind::Generic,
        "This code looks like it was written during a power outage.",
    ),
    Caption::new(
        CaptionKind::Generic,
        "Not even ChatGPT could make sense of this error.",
    ),
    Caption::new(
        CaptionKind::Generic,
        "Have you tried turning it off and never turning it back on again?",
    ),
    Caption::new(
        CaptionKind::Generic,
        "This bug is older than some programming languages.",
    ),
    Caption::new(
        CaptionKind::Generic,
        "Your error handling strategy: pretend it doesn't exist.",
    ),
];

/// Maps free-form error text to a roast caption. Total: every input gets one.
pub fn classify(text: &str, rng: &dyn RandomSource) -> Caption {
    let normalized = text.to_lowercase();

    ROAST_RULES
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map(|rule| rule.caption)
        .unwrap_or_else(|| generic_roast(rng))
}

fn generic_roast(rng: &dyn RandomSource) -> Caption {
    let index = rng.pick_index(GENERIC_ROASTS.len());
    GENERIC_ROASTS
        .get(index)
        .copied()
        .unwrap_or(GENERIC_ROASTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::random::{FixedRandom, ThreadRandom};
    use std::collections::HashSet;

    fn kind_of(text: &str) -> CaptionKind {
        classify(text, &FixedRandom(0)).kind()
    }

    #[test]
    fn test_each_rule_matches_its_keywords() {
        assert_eq!(kind_of("SyntaxError: Syntax error near line 3"), CaptionKind::Syntax);
        assert_eq!(kind_of("Unexpected token '}' in JSON"), CaptionKind::Syntax);
        assert_eq!(kind_of("Cannot read property of undefined"), CaptionKind::NullReference);
        assert_eq!(kind_of("NullPointerException"), CaptionKind::NullReference);
        assert_eq!(kind_of("EACCES: permission denied"), CaptionKind::Permission);
        assert_eq!(kind_of("ACCESS DENIED for user root"), CaptionKind::Permission);
        assert_eq!(kind_of("java.lang.OutOfMemoryError"), CaptionKind::Memory);
        assert_eq!(kind_of("JavaScript heap exhausted"), CaptionKind::Memory);
        assert_eq!(kind_of("Gateway Timeout"), CaptionKind::Timeout);
        assert_eq!(kind_of("connection timed out after 30s"), CaptionKind::Timeout);
        assert_eq!(kind_of("GET /favicon.ico 404"), CaptionKind::NotFound);
        assert_eq!(kind_of("module not found: left-pad"), CaptionKind::NotFound);
    }

    #[test]
    fn test_syntax_error_wins_over_later_rules() {
        let text = "Syntax Error: null heap timeout 404 permission not found undefined";
        for _ in 0..100 {
            assert_eq!(
                classify(text, &ThreadRandom).text(),
                "One does not simply forget their semicolons and brackets."
            );
        }
    }

    #[test]
    fn test_rule_order_breaks_ties() {
        assert_eq!(kind_of("undefined permission"), CaptionKind::NullReference);
        assert_eq!(kind_of("permission: out of memory"), CaptionKind::Permission);
        assert_eq!(kind_of("heap timeout"), CaptionKind::Memory);
        assert_eq!(kind_of("timed out: 404"), CaptionKind::Timeout);
    }

    #[test]
    fn test_null_reference_caption_text() {
        assert_eq!(
            classify("TypeError: undefined is not a function", &ThreadRandom).text(),
            "Your variables are like my social life - undefined."
        );
    }

    #[test]
    fn test_unmatched_input_comes_from_generic_pool() {
        let inputs = ["", "segfault", "¯\\_(ツ)_/¯", "\u{0}\u{1}\u{2}", "ERROR ERROR ERROR"];
        for input in inputs {
            for _ in 0..50 {
                let caption = classify(input, &ThreadRandom);
                assert_eq!(caption.kind(), CaptionKind::Generic);
                assert!(GENERIC_ROASTS.contains(&caption));
            }
        }
    }

    #[test]
    fn test_unmatched_input_varies_across_calls() {
        let seen: HashSet<&str> = (0..1000)
            .map(|_| classify("segmentation fault", &ThreadRandom).text())
            .collect();
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_generic_pick_follows_random_source() {
        assert_eq!(classify("segfault", &FixedRandom(0)), GENERIC_ROASTS[0]);
        assert_eq!(classify("segfault", &FixedRandom(7)), GENERIC_ROASTS[7]);
        assert_eq!(
            classify("segfault", &FixedRandom(usize::MAX)),
            GENERIC_ROASTS[GENERIC_ROASTS.len() - 1]
        );
    }

    #[test]
    fn test_captions_never_empty() {
        let long_input = "x".repeat(100_000);
        let inputs = ["", " ", "null", long_input.as_str()];
        for input in inputs {
            assert!(!classify(input, &ThreadRandom).text().is_empty());
        }
        assert!(GENERIC_ROASTS.len() >= 10);
        assert!(ROAST_RULES.iter().all(|r| !r.caption.text().is_empty()));
    }
}
