use std::collections::{HashMap, HashSet};
use std::fmt;

// Weighted lexicon, 1 (mild) to 3 (strong)
const POSITIVE_WORDS: &[(&str, f32)] = &[
    ("excellent", 3.0), ("super", 3.0), ("great", 3.0), ("perfect", 3.0), ("exceptional", 3.0),
    ("good", 2.0), ("pleasant", 2.0), ("satisfied", 2.0), ("fast", 2.0), ("efficient", 2.0),
    ("professional", 2.0), ("quality", 2.0), ("recommend", 3.0), ("thanks", 1.0), ("bravo", 2.0),
    ("happy", 2.0), ("delighted", 2.0), ("impressive", 3.0), ("fantastic", 3.0),
    ("remarkable", 2.0), ("perfectly", 2.0), ("ideal", 2.0), ("optimistic", 1.0),
    ("congratulations", 2.0), ("extra", 2.0), ("wonderful", 3.0), ("top", 2.0), ("best", 3.0),
];

const NEGATIVE_WORDS: &[(&str, f32)] = &[
    ("bad", 3.0), ("horrible", 3.0), ("useless", 3.0), ("disappointed", 3.0), ("disappointing", 3.0),
    ("slow", 2.0), ("expensive", 2.0), ("complicated", 2.0), ("problem", 2.0), ("bug", 2.0),
    ("error", 2.0), ("unsatisfied", 3.0), ("disappointment", 3.0), ("painful", 2.0),
    ("catastrophe", 3.0), ("inefficient", 2.0), ("mediocre", 2.0), ("insufficient", 2.0),
    ("unacceptable", 3.0), ("unpleasant", 2.0), ("frustrating", 2.0), ("shameful", 3.0),
    ("critical", 2.0), ("lamentable", 3.0), ("disaster", 3.0), ("poor", 2.0),
    ("unbearable", 3.0), ("defective", 2.0), ("incomplete", 2.0), ("unsuitable", 2.0),
];

// Flip the polarity of a scored word up to NEGATION_WINDOW words later
const NEGATIONS: &[&str] = &["not", "no", "nor", "neither", "none", "never", "without", "cannot"];
const NEGATION_WINDOW: usize = 2;

// Multiply the weight of the word right after them
const INTENSIFIERS: &[(&str, f32)] = &[
    ("very", 1.5), ("really", 1.5), ("extremely", 2.0), ("totally", 1.7), ("absolutely", 1.8),
    ("completely", 1.6), ("particularly", 1.4), ("strongly", 1.5), ("so", 1.5), ("exceptionally", 1.8),
];

const POSITIVE_RATIO: f32 = 0.7;
const NEGATIVE_RATIO: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

/// A lexicon word found in the text, with the weight it contributed.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub word: String,
    pub weight: f32,
    pub negated: bool,
    pub intensified: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence: f32, // 0 to 100
    pub positive: f32,
    pub negative: f32,
    pub positive_hits: Vec<Hit>,
    pub negative_hits: Vec<Hit>,
}

impl Analysis {
    pub fn total(&self) -> f32 {
        self.positive + self.negative
    }

    pub fn report(&self, verbose: bool) -> String {
        let mut out = format!(
            "Text: \"{}\"\nSentiment: {}\nConfidence: {:.1}%\nPositive score: {:.2}\nNegative score: {:.2}\nTotal score: {:.2}\n",
            self.text,
            self.sentiment,
            self.confidence,
            self.positive,
            self.negative,
            self.total()
        );
        if verbose {
            for (title, hits) in [("Positive words", &self.positive_hits), ("Negative words", &self.negative_hits)] {
                if hits.is_empty() {
                    continue;
                }
                out.push_str(&format!("{title}:\n"));
                for hit in hits {
                    let negated = if hit.negated { "(negated) " } else { "" };
                    let intensified = if hit.intensified { "(intensified) " } else { "" };
                    out.push_str(&format!("  - {negated}{intensified}{}: {:.2}\n", hit.word, hit.weight));
                }
            }
        }
        out
    }
}

/// Counts over several analyses.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub mean_confidence: f32,
}

impl Summary {
    pub fn of(analyses: &[Analysis]) -> Option<Self> {
        if analyses.is_empty() {
            return None;
        }
        let count = |sentiment| analyses.iter().filter(|a| a.sentiment == sentiment).count();
        Some(Self {
            total: analyses.len(),
            positive: count(Sentiment::Positive),
            negative: count(Sentiment::Negative),
            neutral: count(Sentiment::Neutral),
            mean_confidence: analyses.iter().map(|a| a.confidence).sum::<f32>() / analyses.len() as f32,
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let share = |n: usize| n as f32 / self.total as f32 * 100.0;
        writeln!(f, "Analyses: {}", self.total)?;
        writeln!(f, "Positive: {} ({:.1}%)", self.positive, share(self.positive))?;
        writeln!(f, "Negative: {} ({:.1}%)", self.negative, share(self.negative))?;
        writeln!(f, "Neutral: {} ({:.1}%)", self.neutral, share(self.neutral))?;
        writeln!(f, "Mean confidence: {:.1}%", self.mean_confidence)
    }
}

pub struct Analyzer {
    positive: HashMap<&'static str, f32>,
    negative: HashMap<&'static str, f32>,
    negations: HashSet<&'static str>,
    intensifiers: HashMap<&'static str, f32>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().copied().collect(),
            negative: NEGATIVE_WORDS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    pub fn analyze(&self, text: &str) -> Analysis {
        let words = tokenize(text);
        let mut positive = 0.0;
        let mut negative = 0.0;
        let mut positive_hits = Vec::new();
        let mut negative_hits = Vec::new();

        for (i, word) in words.iter().enumerate() {
            let (base, is_positive) = if let Some(weight) = self.positive.get(word.as_str()) {
                (*weight, true)
            } else if let Some(weight) = self.negative.get(word.as_str()) {
                (*weight, false)
            } else {
                continue;
            };

            let negated = words[i.saturating_sub(NEGATION_WINDOW)..i]
                .iter()
                .any(|previous| self.negations.contains(previous.as_str()));
            let factor = i
                .checked_sub(1)
                .and_then(|previous| self.intensifiers.get(words[previous].as_str()))
                .copied();

            let hit = Hit {
                word: word.clone(),
                weight: base * factor.unwrap_or(1.0),
                negated,
                intensified: factor.is_some(),
            };
            if is_positive != negated {
                positive += hit.weight;
                positive_hits.push(hit);
            } else {
                negative += hit.weight;
                negative_hits.push(hit);
            }
        }

        let total = positive + negative;
        let (sentiment, confidence) = if total == 0.0 {
            (Sentiment::Neutral, 0.0)
        } else {
            let ratio = positive / total;
            let sentiment = if ratio > POSITIVE_RATIO {
                Sentiment::Positive
            } else if ratio < NEGATIVE_RATIO {
                Sentiment::Negative
            } else {
                Sentiment::Neutral
            };
            (sentiment, (f32::abs(positive - negative) * 10.0).min(100.0))
        };

        Analysis {
            text: text.to_string(),
            sentiment,
            confidence,
            positive,
            negative,
            positive_hits,
            negative_hits,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

// Lowercase words, punctuation splits words apart
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::page::content::PageContent;

    #[test]
    fn tokenizer_drops_punctuation() {
        assert_eq!(tokenize("Fast, SIMPLE... and good!"), vec!["fast", "simple", "and", "good"]);
        assert!(tokenize(" -- ").is_empty());
    }

    #[test]
    fn weighted_and_intensified_words() {
        let analysis = Analyzer::new().analyze("The support is excellent and very fast.");
        assert_eq!(analysis.sentiment, Sentiment::Positive);
        assert_eq!(analysis.positive, 6.0);
        assert_eq!(analysis.negative, 0.0);
        assert_eq!(analysis.confidence, 60.0);
        assert_eq!(
            analysis.positive_hits[1],
            Hit { word: "fast".into(), weight: 3.0, negated: false, intensified: true }
        );
    }

    #[test]
    fn negation_flips_polarity_within_two_words() {
        let analyzer = Analyzer::new();

        let analysis = analyzer.analyze("not good");
        assert_eq!(analysis.sentiment, Sentiment::Negative);
        assert_eq!(analysis.negative, 2.0);
        assert!(analysis.negative_hits[0].negated);

        assert_eq!(analyzer.analyze("never really bad").sentiment, Sentiment::Positive);
        // Three words back is out of reach
        assert_eq!(analyzer.analyze("not at all good").sentiment, Sentiment::Positive);
    }

    #[test]
    fn balanced_or_empty_text_is_neutral() {
        let analyzer = Analyzer::new();

        let mixed = analyzer.analyze("good but slow");
        assert_eq!(mixed.sentiment, Sentiment::Neutral);
        assert_eq!(mixed.confidence, 0.0);

        let plain = analyzer.analyze("The dashboard has charts.");
        assert_eq!(plain.sentiment, Sentiment::Neutral);
        assert_eq!(plain.total(), 0.0);
    }

    #[test]
    fn confidence_is_capped() {
        let analysis = Analyzer::new().analyze("excellent perfect fantastic best great wonderful");
        assert_eq!(analysis.confidence, 100.0);
    }

    #[test]
    fn summary_counts_each_sentiment() {
        let analyzer = Analyzer::new();
        let analyses: Vec<Analysis> = ["great", "bad", "fine", "good"].iter().map(|t| analyzer.analyze(t)).collect();
        let summary = Summary::of(&analyses).unwrap();

        assert_eq!((summary.total, summary.positive, summary.negative, summary.neutral), (4, 2, 1, 1));
        assert_eq!(summary.mean_confidence, (30.0 + 30.0 + 0.0 + 20.0) / 4.0);
        assert!(summary.to_string().contains("Positive: 2 (50.0%)"));
        assert_eq!(Summary::of(&[]), None);
    }

    #[test]
    fn verbose_report_lists_matched_words() {
        let analysis = Analyzer::new().analyze("not slow");
        let report = analysis.report(true);
        assert!(report.contains("Sentiment: positive"));
        assert!(report.contains("(negated) slow: 2.00"));
        assert!(!analysis.report(false).contains("slow: 2.00"));
    }

    #[test]
    fn bundled_testimonials_read_as_positive() {
        let content = PageContent::load(None).unwrap();
        let analyzer = Analyzer::new();
        for slide in content.testimonials.slides.iter() {
            assert_eq!(analyzer.analyze(&slide.quote).sentiment, Sentiment::Positive, "{}", slide.quote);
        }
    }
}
