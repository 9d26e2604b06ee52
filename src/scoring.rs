//! Screening scoring
//!
//! Banded screenings are scored by summing the per-question answer values
//! and scanning the screening's bands in declared order; the first band
//! whose inclusive `[min, max]` range contains the sum wins. A sum that no
//! band contains is a hard error, never a silent clamp.
//!
//! Trait-based quizzes (no bands) are summarized per trait instead.
//!
//! `analyze_bands` audits a screening's bands against its producible sum
//! range; `bloom verify` uses it to flag gaps, overlaps, and unreachable
//! bands in the catalog.

use thiserror::Error;

use crate::catalog::screenings::{Screening, ScoringBand};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("expected {expected} answers, got {got}")]
    AnswerCount { expected: usize, got: usize },

    #[error("answer {value} is not a valid option for question {index}")]
    InvalidAnswer { index: usize, value: u32 },

    #[error("score {sum} falls outside every scoring band")]
    OutOfRange { sum: u32 },

    #[error("'{id}' is a trait-based quiz with no scoring bands")]
    NotBanded { id: String },

    #[error("'{id}' is a banded screening, not a trait-based quiz")]
    NotTraitBased { id: String },
}

/// The result of scoring a banded screening
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningOutcome {
    pub screening: &'static Screening,
    pub score: u32,
    pub band: &'static ScoringBand,
}

/// Per-trait summary for trait-based quizzes
#[derive(Debug, Clone)]
pub struct TraitScore {
    pub trait_label: &'static str,
    pub score: u32,
    /// Largest score the trait's questions can produce
    pub max: u32,
}

/// Score a banded screening from per-question answer values
pub fn score(screening: &'static Screening, answers: &[u32]) -> Result<ScreeningOutcome, ScoreError> {
    if screening.is_trait_based() {
        return Err(ScoreError::NotBanded { id: screening.id.to_string() });
    }
    let sum = validated_sum(screening, answers)?;

    let band = screening
        .scoring
        .iter()
        .find(|b| b.contains(sum))
        .ok_or(ScoreError::OutOfRange { sum })?;

    Ok(ScreeningOutcome { screening, score: sum, band })
}

/// Summarize a trait-based quiz into per-trait scores, in first-seen order
pub fn trait_profile(
    screening: &'static Screening,
    answers: &[u32],
) -> Result<Vec<TraitScore>, ScoreError> {
    if !screening.is_trait_based() {
        return Err(ScoreError::NotTraitBased { id: screening.id.to_string() });
    }
    validated_sum(screening, answers)?;

    let mut traits: Vec<TraitScore> = Vec::new();
    for (question, answer) in screening.questions.iter().zip(answers) {
        let label = question.trait_label.unwrap_or("General");
        let max = question.options.iter().map(|o| o.value).max().unwrap_or(0);
        match traits.iter_mut().find(|t| t.trait_label == label) {
            Some(t) => {
                t.score += answer;
                t.max += max;
            }
            None => traits.push(TraitScore { trait_label: label, score: *answer, max }),
        }
    }
    Ok(traits)
}

/// Validate answer count and option membership, returning the sum
fn validated_sum(screening: &'static Screening, answers: &[u32]) -> Result<u32, ScoreError> {
    if answers.len() != screening.questions.len() {
        return Err(ScoreError::AnswerCount {
            expected: screening.questions.len(),
            got: answers.len(),
        });
    }
    for (index, (question, answer)) in screening.questions.iter().zip(answers).enumerate() {
        if !question.options.iter().any(|o| o.value == *answer) {
            return Err(ScoreError::InvalidAnswer { index, value: *answer });
        }
    }
    Ok(answers.iter().sum())
}

/// Coverage audit of a screening's bands over its producible sum range
#[derive(Debug, Clone, Default)]
pub struct BandCoverage {
    /// Inclusive sum ranges no band covers
    pub gaps: Vec<(u32, u32)>,
    /// Sums covered by more than one band
    pub overlaps: Vec<u32>,
    /// Band levels whose entire range lies above the max producible sum
    pub unreachable: Vec<&'static str>,
}

impl BandCoverage {
    pub fn is_clean(&self) -> bool {
        self.gaps.is_empty() && self.overlaps.is_empty() && self.unreachable.is_empty()
    }
}

/// Audit a banded screening's coverage of `0..=max_sum`
pub fn analyze_bands(screening: &'static Screening) -> BandCoverage {
    let mut coverage = BandCoverage::default();
    if screening.is_trait_based() {
        return coverage;
    }
    let max_sum = screening.max_sum();

    let mut gap_start: Option<u32> = None;
    for sum in 0..=max_sum {
        let hits = screening.scoring.iter().filter(|b| b.contains(sum)).count();
        if hits == 0 {
            gap_start.get_or_insert(sum);
        } else {
            if let Some(start) = gap_start.take() {
                coverage.gaps.push((start, sum - 1));
            }
            if hits > 1 {
                coverage.overlaps.push(sum);
            }
        }
    }
    if let Some(start) = gap_start {
        coverage.gaps.push((start, max_sum));
    }

    for band in screening.scoring {
        if band.min > max_sum {
            coverage.unreachable.push(band.level);
        }
    }

    coverage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::screenings::{ScreeningCategory, SCREENINGS};

    fn get(id: &str) -> &'static Screening {
        Screening::get(id).unwrap()
    }

    #[test]
    fn test_phq9_moderate() {
        // 9 answers summing to 12 -> Moderate Depression [10, 14]
        let answers = [2, 2, 2, 2, 2, 1, 1, 0, 0];
        let outcome = score(get("depression-phq9"), &answers).unwrap();
        assert_eq!(outcome.score, 12);
        assert_eq!(outcome.band.level, "Moderate Depression");
        assert_eq!(outcome.band.min, 10);
        assert_eq!(outcome.band.max, 14);
        assert!(outcome.band.interpretation.contains("moderate symptoms of depression"));
    }

    #[test]
    fn test_band_boundaries() {
        let gad7 = get("anxiety-gad7");
        // 4 -> Minimal, 5 -> Mild
        assert_eq!(score(gad7, &[1, 1, 1, 1, 0, 0, 0]).unwrap().band.level, "Minimal Anxiety");
        assert_eq!(score(gad7, &[1, 1, 1, 1, 1, 0, 0]).unwrap().band.level, "Mild Anxiety");
        // Max sum lands in the top band
        assert_eq!(score(gad7, &[3; 7]).unwrap().band.level, "Severe Anxiety");
    }

    #[test]
    fn test_answer_validation() {
        let gad7 = get("anxiety-gad7");
        assert_eq!(
            score(gad7, &[1, 1]),
            Err(ScoreError::AnswerCount { expected: 7, got: 2 })
        );
        // 5 is not an option value on the frequency scale
        assert_eq!(
            score(gad7, &[5, 0, 0, 0, 0, 0, 0]),
            Err(ScoreError::InvalidAnswer { index: 0, value: 5 })
        );
    }

    #[test]
    fn test_attachment_gap_is_rejected() {
        // Agreeing with only the first statement sums to 1; no band covers it
        let attachment = get("attachment-style");
        assert_eq!(
            score(attachment, &[1, 0, 0, 0, 0, 0]),
            Err(ScoreError::OutOfRange { sum: 1 })
        );
        // A clean dismissive-avoidant profile still scores
        let outcome = score(attachment, &[0, 0, 3, 0, 3, 0]).unwrap();
        assert_eq!(outcome.band.level, "Dismissive-Avoidant");
    }

    #[test]
    fn test_trait_profile() {
        let quiz = get("asd-short");
        // Two questions per trait, agree strongly with the sensory pair only
        let answers = [0, 0, 0, 0, 0, 0, 3, 3];
        let profile = trait_profile(quiz, &answers).unwrap();
        let sensory = profile.iter().find(|t| t.trait_label == "Sensory").unwrap();
        assert_eq!(sensory.score, 6);
        assert_eq!(sensory.max, 6);
        let social = profile.iter().find(|t| t.trait_label == "Social").unwrap();
        assert_eq!(social.score, 0);
    }

    #[test]
    fn test_trait_and_banded_do_not_cross() {
        assert!(matches!(
            trait_profile(get("anxiety-gad7"), &[0; 7]),
            Err(ScoreError::NotTraitBased { .. })
        ));
        assert!(matches!(
            score(get("asd-short"), &[0; 8]),
            Err(ScoreError::NotBanded { .. })
        ));
    }

    #[test]
    fn test_clinical_and_wellness_bands_are_gapless() {
        // Every clinical/wellness screening must cover its full sum range
        // with no overlaps. (The attachment-style quiz is the known gap
        // case; the abbreviated OCD screen keeps the full-scale band tops,
        // which read as unreachable, not as gaps.)
        for screening in SCREENINGS.iter().filter(|s| !s.is_trait_based()) {
            if screening.category == ScreeningCategory::Personality {
                continue;
            }
            let coverage = analyze_bands(screening);
            assert!(coverage.gaps.is_empty(), "{}: gaps {:?}", screening.id, coverage.gaps);
            assert!(
                coverage.overlaps.is_empty(),
                "{}: overlaps {:?}",
                screening.id,
                coverage.overlaps
            );
        }
    }

    #[test]
    fn test_attachment_coverage_flags_gaps() {
        let coverage = analyze_bands(get("attachment-style"));
        assert!(!coverage.gaps.is_empty());
        // Sums 0..=1 precede the first band
        assert_eq!(coverage.gaps[0], (0, 1));
    }

    #[test]
    fn test_ocd_unreachable_bands() {
        // Five-question screen, full-scale bands: top bands are unreachable
        let coverage = analyze_bands(get("ocd-y-bocs"));
        assert_eq!(coverage.unreachable, vec!["Moderate", "Severe"]);
        assert!(coverage.gaps.is_empty());
    }
}
