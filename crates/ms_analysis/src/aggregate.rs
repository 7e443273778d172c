//! Batch scoring of news articles and the breakdown/comparison summary.

use ms_core::{RawArticle, ScoredArticle, SentimentLabel, SourceType};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::injury::InjuryDetector;
use crate::sentiment::SentimentAnalyzer;
use crate::sources::SourceClassifier;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakdownBucket {
    pub count: usize,
    /// Share of the batch, rounded to one decimal.
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: BreakdownBucket,
    pub neutral: BreakdownBucket,
    pub negative: BreakdownBucket,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallSentiment {
    /// Mean article score, rounded to two decimals.
    pub score: f64,
    pub label: SentimentLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSentiment {
    pub count: usize,
    pub avg_sentiment: f64,
    pub label: SentimentLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourceComparison {
    pub national: SourceSentiment,
    pub local: SourceSentiment,
    /// Local average minus national average, rounded to two decimals.
    pub difference: f64,
}

impl SourceComparison {
    /// The difference only says something when both sides have coverage.
    pub fn is_meaningful(&self) -> bool {
        self.national.count > 0 && self.local.count > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateAnalysis {
    pub total: usize,
    pub breakdown: SentimentBreakdown,
    pub overall_sentiment: OverallSentiment,
    pub source_comparison: SourceComparison,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub articles: Vec<ScoredArticle>,
    /// `None` for an empty batch.
    pub analysis: Option<AggregateAnalysis>,
}

#[derive(Debug, Clone, Default)]
pub struct ArticleAggregator {
    scorer: SentimentAnalyzer,
    sources: SourceClassifier,
    injury: InjuryDetector,
}

impl ArticleAggregator {
    pub fn new(scorer: SentimentAnalyzer, sources: SourceClassifier, injury: InjuryDetector) -> Self {
        Self { scorer, sources, injury }
    }

    pub fn injury_detector(&self) -> &InjuryDetector {
        &self.injury
    }

    pub fn score_article(&self, article: &RawArticle) -> ScoredArticle {
        let text = article.text();
        let sentiment = self.scorer.analyze(&text);
        let source_type = self.sources.classify(&article.source.name);
        let has_injury_keywords = self.injury.has_injury_keywords(&text);
        debug!(
            title = %article.title,
            score = sentiment.score,
            source_type = %source_type,
            has_injury_keywords,
            "Scored article"
        );

        ScoredArticle {
            title: article.title.clone(),
            description: article.description.clone(),
            source: article.source.name.clone(),
            source_type,
            url: article.url.clone(),
            published_at: article.published_at,
            sentiment,
            has_injury_keywords,
        }
    }

    pub fn aggregate(&self, articles: &[RawArticle]) -> AggregateResult {
        let scored: Vec<ScoredArticle> = articles.iter().map(|a| self.score_article(a)).collect();
        let analysis = summarize(&scored);
        if let Some(analysis) = &analysis {
            info!(
                total = analysis.total,
                overall = analysis.overall_sentiment.score,
                label = %analysis.overall_sentiment.label,
                "Aggregated article batch"
            );
        }
        AggregateResult { articles: scored, analysis }
    }
}

/// Breakdown, overall average and national/local comparison over already
/// scored articles. Buckets follow the sign of the integer score, so a score
/// of exactly zero is always neutral.
pub fn summarize(articles: &[ScoredArticle]) -> Option<AggregateAnalysis> {
    if articles.is_empty() {
        return None;
    }
    let total = articles.len();

    let count_where = |pred: fn(i32) -> bool| articles.iter().filter(|a| pred(a.sentiment.score)).count();
    let bucket = |count: usize| BreakdownBucket {
        count,
        percentage: round_to(count as f64 / total as f64 * 100.0, 1),
    };

    let breakdown = SentimentBreakdown {
        positive: bucket(count_where(|s| s > 0)),
        neutral: bucket(count_where(|s| s == 0)),
        negative: bucket(count_where(|s| s < 0)),
    };

    let average = mean_score(articles.iter());
    let national_avg = mean_score(articles.iter().filter(|a| a.source_type == SourceType::National));
    let local_avg = mean_score(articles.iter().filter(|a| a.source_type == SourceType::Local));

    let side = |source_type: SourceType, avg: f64| SourceSentiment {
        count: articles.iter().filter(|a| a.source_type == source_type).count(),
        avg_sentiment: round_to(avg, 2),
        label: SentimentLabel::from_average(avg),
    };

    Some(AggregateAnalysis {
        total,
        breakdown,
        overall_sentiment: OverallSentiment {
            score: round_to(average, 2),
            label: SentimentLabel::from_average(average),
        },
        source_comparison: SourceComparison {
            national: side(SourceType::National, national_avg),
            local: side(SourceType::Local, local_avg),
            difference: round_to(local_avg - national_avg, 2),
        },
    })
}

/// Mean integer score, 0 for an empty selection.
fn mean_score<'a>(articles: impl Iterator<Item = &'a ScoredArticle>) -> f64 {
    let (sum, n) = articles.fold((0i64, 0usize), |(sum, n), a| (sum + i64::from(a.sentiment.score), n + 1));
    if n == 0 {
        0.0
    } else {
        sum as f64 / n as f64
    }
}

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let rounded = (value * factor).round() / factor;
    // avoid serializing -0.0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_core::{ArticleSource, SentimentScore};

    fn scored(score: i32, source_type: SourceType) -> ScoredArticle {
        ScoredArticle {
            title: format!("score {}", score),
            description: None,
            source: source_type.to_string(),
            source_type,
            url: String::new(),
            published_at: None,
            sentiment: SentimentScore {
                score,
                label: SentimentLabel::from_score(score),
                ..SentimentScore::neutral()
            },
            has_injury_keywords: false,
        }
    }

    fn raw(title: &str, description: Option<&str>, source: &str) -> RawArticle {
        RawArticle {
            title: title.to_string(),
            description: description.map(str::to_string),
            source: ArticleSource { id: None, name: source.to_string() },
            url: format!("https://example.com/{}", title.len()),
            published_at: None,
        }
    }

    #[test]
    fn test_empty_batch_has_no_analysis() {
        let result = ArticleAggregator::default().aggregate(&[]);
        assert!(result.articles.is_empty());
        assert!(result.analysis.is_none());
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_national_vs_local_example() {
        let analysis = summarize(&[scored(3, SourceType::National), scored(-1, SourceType::Local)]).unwrap();
        assert_eq!(analysis.total, 2);
        assert_eq!(analysis.overall_sentiment.score, 1.0);
        assert_eq!(analysis.overall_sentiment.label, SentimentLabel::Positive);
        assert_eq!(analysis.source_comparison.national.avg_sentiment, 3.0);
        assert_eq!(analysis.source_comparison.national.label, SentimentLabel::VeryPositive);
        assert_eq!(analysis.source_comparison.local.avg_sentiment, -1.0);
        assert_eq!(analysis.source_comparison.difference, -4.0);
        assert!(analysis.source_comparison.is_meaningful());
    }

    #[test]
    fn test_zero_scores_are_neutral() {
        let analysis = summarize(&[
            scored(0, SourceType::Other),
            scored(0, SourceType::Other),
            scored(2, SourceType::Other),
            scored(-4, SourceType::Other),
        ])
        .unwrap();
        assert_eq!(analysis.breakdown.neutral.count, 2);
        assert_eq!(analysis.breakdown.positive.count, 1);
        assert_eq!(analysis.breakdown.negative.count, 1);
        assert_eq!(analysis.breakdown.neutral.percentage, 50.0);
        assert_eq!(analysis.overall_sentiment.score, -0.5);
        assert_eq!(analysis.overall_sentiment.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_breakdown_sums() {
        for n in 1..=13usize {
            let articles: Vec<_> = (0..n)
                .map(|i| scored((i as i32 % 3) - 1, SourceType::Other))
                .collect();
            let b = summarize(&articles).unwrap().breakdown;
            assert_eq!(b.positive.count + b.neutral.count + b.negative.count, n);
            let sum = b.positive.percentage + b.neutral.percentage + b.negative.percentage;
            assert!((sum - 100.0).abs() <= 0.1 + 1e-9, "n={} sum={}", n, sum);
        }
    }

    #[test]
    fn test_missing_side_averages_zero() {
        let analysis = summarize(&[scored(2, SourceType::National), scored(4, SourceType::Other)]).unwrap();
        assert_eq!(analysis.source_comparison.local.count, 0);
        assert_eq!(analysis.source_comparison.local.avg_sentiment, 0.0);
        assert_eq!(analysis.source_comparison.local.label, SentimentLabel::Neutral);
        assert_eq!(analysis.source_comparison.difference, -2.0);
        assert!(!analysis.source_comparison.is_meaningful());
    }

    #[test]
    fn test_aggregate_scores_and_classifies() {
        let aggregator = ArticleAggregator::default();
        let result = aggregator.aggregate(&[
            raw("Great win for the team", Some("An amazing night"), "ESPN"),
            raw("Star tore his ACL", None, "Chicago Tribune"),
            raw("Practice report", None, "Some Blog"),
        ]);
        let articles = &result.articles;
        assert_eq!(articles.len(), 3);
        assert_eq!(articles[0].source_type, SourceType::National);
        assert_eq!(articles[0].sentiment.score, 11);
        assert!(!articles[0].has_injury_keywords);
        assert_eq!(articles[1].source_type, SourceType::Local);
        assert!(articles[1].has_injury_keywords);
        assert_eq!(articles[2].source_type, SourceType::Other);
        assert_eq!(articles[2].sentiment.score, 0);

        let analysis = result.analysis.unwrap();
        assert_eq!(analysis.total, 3);
        assert_eq!(analysis.breakdown.positive.count, 1);
        assert_eq!(analysis.breakdown.neutral.count, 2);
        assert_eq!(analysis.breakdown.positive.percentage, 33.3);
    }
}
