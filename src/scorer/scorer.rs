// src/scorer/scorer.rs

use crate::domain::{Listing, Preferences, ScoredListing, Weights};
use crate::utils::round2;
use chrono::Datelike;
use tracing::warn;

/// The point of interest the location criterion measures distance to.
pub const LOCATION_POI: &str = "downtown";

/// Component value substituted when a listing lacks the attribute an active
/// criterion scores on. Neutral on the 0-100 scale; never 0, and the listing
/// is never dropped for it.
const NEUTRAL_COMPONENT: f64 = 50.0;

/// Year assumed for listings that do not report `year_built`. Old enough to
/// score worst on the age axis.
const DEFAULT_YEAR_BUILT: i32 = 1900;

/// Whether a smaller raw value earns a higher component score.
#[derive(Debug, Clone, Copy)]
enum Direction {
    LowerIsBetter,
    HigherIsBetter,
}

/// Scores and ranks listings against user preferences: hard-constraint
/// filtering, min-max normalized component scores per criterion, weighted
/// combination, dense ranking.
///
/// Pure and request-scoped: `score` takes a snapshot of listings plus one
/// set of preferences and returns an independent result, so concurrent
/// callers need no coordination.
#[derive(Debug, Clone)]
pub struct Scorer {
    /// Year the age criterion measures against; defaults to the current
    /// calendar year.
    reference_year: i32,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer {
    pub fn new() -> Self {
        Self {
            reference_year: chrono::Utc::now().year(),
        }
    }

    /// Pins the age criterion's reference year, for reproducible results.
    pub fn with_reference_year(year: i32) -> Self {
        Self {
            reference_year: year,
        }
    }

    /// Scores `listings` against `prefs` and returns them sorted by
    /// descending score with dense ranks (ties share a rank, rank 1 is
    /// best). Listings failing a hard constraint are excluded; an empty
    /// result is valid, never an error.
    pub fn score(&self, listings: &[Listing], prefs: &Preferences) -> Vec<ScoredListing> {
        warn_on_unnormalized_weights(&prefs.weights);

        let kept: Vec<&Listing> = listings
            .iter()
            .filter(|l| passes_hard_filter(l, prefs))
            .collect();
        if kept.is_empty() {
            return Vec::new();
        }

        let weights = &prefs.weights;
        // The bedroom criterion rewards a close fit to the user's minimum,
        // not raw count; it shares the filter's default of zero.
        let target_beds = prefs.min_beds.unwrap_or(0.0);
        // The 1900 default for an unreported build year only kicks in once
        // the attribute exists somewhere in the kept set; otherwise the age
        // criterion must stay inactive like any other absent attribute.
        let has_year_built = kept.iter().any(|l| l.year_built.is_some());

        // Raw per-listing values for each criterion. None means the listing
        // does not carry the attribute.
        let criteria: [(f64, Vec<Option<f64>>, Direction); 5] = [
            (
                weights.price,
                kept.iter().map(|l| l.price).collect(),
                Direction::LowerIsBetter,
            ),
            (
                weights.location,
                kept.iter().map(|l| l.distance_to(LOCATION_POI)).collect(),
                Direction::LowerIsBetter,
            ),
            (
                weights.size,
                kept.iter().map(|l| l.sqft).collect(),
                Direction::HigherIsBetter,
            ),
            (
                weights.bedrooms,
                kept.iter()
                    .map(|l| l.beds.map(|b| (b - target_beds).abs()))
                    .collect(),
                Direction::LowerIsBetter,
            ),
            (
                weights.age,
                kept.iter()
                    .map(|l| {
                        has_year_built.then(|| {
                            f64::from(
                                self.reference_year - l.year_built.unwrap_or(DEFAULT_YEAR_BUILT),
                            )
                        })
                    })
                    .collect(),
                Direction::LowerIsBetter,
            ),
        ];

        let mut totals = vec![0.0_f64; kept.len()];
        for (weight, values, direction) in &criteria {
            // A criterion is active only with a positive weight and the
            // attribute present on at least one kept listing.
            if *weight <= 0.0 || values.iter().all(Option::is_none) {
                continue;
            }
            for (total, component) in totals.iter_mut().zip(component_scores(values, *direction))
            {
                *total += component.unwrap_or(NEUTRAL_COMPONENT) * weight;
            }
        }

        let mut scored: Vec<ScoredListing> = kept
            .into_iter()
            .zip(totals)
            .map(|(listing, total)| ScoredListing {
                listing: listing.clone(),
                score: round2(total),
                rank: 0,
            })
            .collect();

        // Stable sort: tied scores keep their input order.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        assign_dense_ranks(&mut scored);
        scored
    }
}

/// All three hard constraints must hold. A listing missing `price`, `beds`,
/// or `baths` fails outright, even when the bound was not supplied: an
/// unevaluable comparison is a failed comparison.
fn passes_hard_filter(listing: &Listing, prefs: &Preferences) -> bool {
    let (Some(price), Some(beds), Some(baths)) = (listing.price, listing.beds, listing.baths)
    else {
        return false;
    };
    price <= prefs.max_price.unwrap_or(f64::INFINITY)
        && beds >= prefs.min_beds.unwrap_or(0.0)
        && baths >= prefs.min_baths.unwrap_or(0.0)
}

/// 0-100 component scores over one criterion's raw values. Absent values
/// stay absent; the caller substitutes the neutral fallback.
fn component_scores(values: &[Option<f64>], direction: Direction) -> Vec<Option<f64>> {
    normalize(values)
        .into_iter()
        .map(|n| {
            n.map(|n| match direction {
                Direction::LowerIsBetter => 100.0 * (1.0 - n),
                Direction::HigherIsBetter => 100.0 * n,
            })
        })
        .collect()
}

/// Min-max normalizes the present values into [0, 1]. A zero range (constant
/// values, or a single listing) normalizes every present value to 0.0, so
/// the criterion contributes the same component score to every listing.
fn normalize(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    let Some(&min) = present
        .iter()
        .min_by(|a, b| a.total_cmp(b))
    else {
        return vec![None; values.len()];
    };
    let max = present.iter().copied().fold(min, f64::max);
    let range = max - min;

    values
        .iter()
        .map(|v| {
            v.map(|v| if range == 0.0 { 0.0 } else { (v - min) / range })
        })
        .collect()
}

/// Dense ranks over an already score-descending slice: equal scores share a
/// rank, the next distinct score gets the previous rank plus one.
fn assign_dense_ranks(scored: &mut [ScoredListing]) {
    let mut rank = 0_u32;
    let mut previous: Option<f64> = None;
    for entry in scored.iter_mut() {
        if previous != Some(entry.score) {
            rank += 1;
            previous = Some(entry.score);
        }
        entry.rank = rank;
    }
}

/// Weights are raw multipliers by design: no renormalization ever happens,
/// and the final score range scales with their sum. Worth flagging when the
/// sum is off 1, since that is usually unintended.
fn warn_on_unnormalized_weights(weights: &Weights) {
    let sum = weights.sum();
    if sum > 0.0 && (sum - 1.0).abs() > 1e-9 {
        warn!(
            weight_sum = sum,
            "criterion weights do not sum to 1; final scores scale with the sum"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, price: f64, beds: f64, baths: f64) -> Listing {
        Listing {
            id: id.to_string(),
            price: Some(price),
            beds: Some(beds),
            baths: Some(baths),
            ..Default::default()
        }
    }

    #[test]
    fn normalize_spreads_values_over_unit_range() {
        let normalized = normalize(&[Some(350_000.0), Some(400_000.0), Some(450_000.0)]);
        assert_eq!(normalized, vec![Some(0.0), Some(0.5), Some(1.0)]);
    }

    #[test]
    fn normalize_zero_range_yields_zero_for_all() {
        let normalized = normalize(&[Some(7.0), Some(7.0), None]);
        assert_eq!(normalized, vec![Some(0.0), Some(0.0), None]);

        // Single element is the same degenerate case.
        assert_eq!(normalize(&[Some(42.0)]), vec![Some(0.0)]);
    }

    #[test]
    fn normalize_all_absent_stays_absent() {
        assert_eq!(normalize(&[None, None]), vec![None, None]);
    }

    #[test]
    fn component_scores_invert_for_lower_is_better() {
        let scores = component_scores(
            &[Some(3.0), Some(5.0), Some(8.0)],
            Direction::LowerIsBetter,
        );
        assert_eq!(scores, vec![Some(100.0), Some(60.0), Some(0.0)]);
    }

    #[test]
    fn hard_filter_rejects_missing_numeric_fields() {
        let prefs = Preferences::default(); // fully permissive bounds
        let mut l = listing("1", 100_000.0, 3.0, 2.0);
        assert!(passes_hard_filter(&l, &prefs));

        l.price = None;
        assert!(!passes_hard_filter(&l, &prefs));

        let mut l = listing("2", 100_000.0, 3.0, 2.0);
        l.beds = None;
        assert!(!passes_hard_filter(&l, &prefs));

        let mut l = listing("3", 100_000.0, 3.0, 2.0);
        l.baths = None;
        assert!(!passes_hard_filter(&l, &prefs));
    }

    #[test]
    fn hard_filter_bounds_are_inclusive() {
        let prefs = Preferences {
            max_price: Some(500_000.0),
            min_beds: Some(3.0),
            min_baths: Some(2.0),
            weights: Weights::default(),
        };
        assert!(passes_hard_filter(&listing("1", 500_000.0, 3.0, 2.0), &prefs));
        assert!(!passes_hard_filter(
            &listing("2", 500_000.01, 3.0, 2.0),
            &prefs
        ));
        assert!(!passes_hard_filter(&listing("3", 500_000.0, 2.0, 2.0), &prefs));
        assert!(!passes_hard_filter(&listing("4", 500_000.0, 3.0, 1.5), &prefs));
    }

    #[test]
    fn negative_max_price_filters_everything_without_error() {
        let prefs = Preferences {
            max_price: Some(-1.0),
            ..Default::default()
        };
        let listings = vec![listing("1", 100_000.0, 3.0, 2.0)];
        assert!(Scorer::new().score(&listings, &prefs).is_empty());
    }

    #[test]
    fn dense_ranks_share_and_step_by_one() {
        let mut scored: Vec<ScoredListing> = [90.0, 90.0, 75.5, 75.5, 10.0]
            .iter()
            .enumerate()
            .map(|(i, &score)| ScoredListing {
                listing: listing(&i.to_string(), 1.0, 1.0, 1.0),
                score,
                rank: 0,
            })
            .collect();
        assign_dense_ranks(&mut scored);
        let ranks: Vec<u32> = scored.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![1, 1, 2, 2, 3]);
    }
}
