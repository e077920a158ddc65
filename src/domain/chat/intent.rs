//! Intent classification over free-text reports.
//!
//! An ordered rule table is evaluated top to bottom; the first matching
//! rule wins and remaining rules are not evaluated. The order is a design
//! contract: a message containing both "gelombang" and "korban" classifies
//! as [`Intent::HighWaveReport`] because that rule comes first.

use serde::{Deserialize, Serialize};

use super::matcher::matches_any;

/// Classified category of a user message.
///
/// Drives which response template is rendered for the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Request for the current weather advisory.
    WeatherInfo,
    /// Request for shelter locations.
    EvacuationInfo,
    /// Report of high waves.
    HighWaveReport,
    /// Report of a person swept away or missing.
    VictimReport,
    /// Follow-up on a previously issued report number.
    StatusCheck,
    /// Fallback when no rule matches.
    Default,
}

/// One entry of the classification rule table.
struct IntentRule {
    intent: Intent,
    keywords: &'static [&'static str],
}

/// The rule table, in strictly ascending priority order.
///
/// Process-wide static configuration, immutable after initialization and
/// safely shared by all sessions.
const RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::WeatherInfo,
        keywords: &["cuaca", "info"],
    },
    IntentRule {
        intent: Intent::EvacuationInfo,
        keywords: &["pengungsian", "lokasi aman"],
    },
    IntentRule {
        intent: Intent::HighWaveReport,
        keywords: &["gelombang", "ombak"],
    },
    IntentRule {
        intent: Intent::VictimReport,
        keywords: &["korban", "terseret"],
    },
    IntentRule {
        intent: Intent::StatusCheck,
        keywords: &["status #"],
    },
];

/// Classifies a message into exactly one intent.
///
/// Stateless and deterministic: the same text always yields the same
/// intent, with no memory of prior turns. Falls back to
/// [`Intent::Default`] when no rule matches.
pub fn classify(text: &str) -> Intent {
    RULES
        .iter()
        .find(|rule| matches_any(text, rule.keywords))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_keywords_classify_as_weather_info() {
        assert_eq!(classify("bagaimana cuaca hari ini"), Intent::WeatherInfo);
        assert_eq!(classify("minta info terkini"), Intent::WeatherInfo);
    }

    #[test]
    fn evacuation_keywords_classify_as_evacuation_info() {
        assert_eq!(classify("di mana pengungsian"), Intent::EvacuationInfo);
        assert_eq!(classify("cari lokasi aman"), Intent::EvacuationInfo);
    }

    #[test]
    fn wave_keywords_classify_as_high_wave_report() {
        assert_eq!(classify("gelombang tinggi di pantai"), Intent::HighWaveReport);
        assert_eq!(classify("ombak besar sekali"), Intent::HighWaveReport);
    }

    #[test]
    fn victim_keywords_classify_as_victim_report() {
        assert_eq!(classify("ada korban di pantai"), Intent::VictimReport);
        assert_eq!(classify("orang terseret arus"), Intent::VictimReport);
    }

    #[test]
    fn status_hash_classifies_as_status_check() {
        assert_eq!(classify("status #2024005"), Intent::StatusCheck);
    }

    #[test]
    fn unmatched_text_falls_back_to_default() {
        assert_eq!(classify("halo selamat pagi"), Intent::Default);
    }

    #[test]
    fn earlier_rule_wins_over_later_rule() {
        // Contains both wave and victim keywords; wave rule has priority.
        assert_eq!(
            classify("gelombang tinggi dan ada korban"),
            Intent::HighWaveReport
        );
    }

    #[test]
    fn weather_rule_shadows_everything_below_it() {
        // "info" matches rule 1 even though "korban" is present.
        assert_eq!(classify("info korban terseret"), Intent::WeatherInfo);
    }

    #[test]
    fn classification_ignores_case() {
        assert_eq!(classify("GELOMBANG TINGGI"), Intent::HighWaveReport);
        assert_eq!(classify("Status #123"), Intent::StatusCheck);
    }

    #[test]
    fn classification_is_deterministic() {
        let text = "tolong ada korban terseret";
        let first = classify(text);
        for _ in 0..10 {
            assert_eq!(classify(text), first);
        }
        assert_eq!(first, Intent::VictimReport);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn classify_never_panics_and_is_stable(text in ".{0,200}") {
                let first = classify(&text);
                prop_assert_eq!(classify(&text), first);
            }

            #[test]
            fn classify_is_case_insensitive(text in "[a-zA-Z #]{0,80}") {
                prop_assert_eq!(classify(&text), classify(&text.to_uppercase()));
            }

            #[test]
            // Filler alphabet cannot spell any higher-priority keyword.
            fn wave_rule_always_beats_victim_rule(prefix in "[xyz ]{0,40}", suffix in "[xyz ]{0,40}") {
                let text = format!("{prefix} gelombang korban {suffix}");
                prop_assert_eq!(classify(&text), Intent::HighWaveReport);
            }
        }
    }
}
