use super::*;
use assert_float_eq::*;
use scorecast::factorial;

fn create_test_4x4_scoregrid() -> Matrix {
    let mut scoregrid = Matrix::allocate(4, 4);
    let rows = [
        [0.04, 0.03, 0.02, 0.01],
        [0.08, 0.06, 0.04, 0.02],
        [0.12, 0.09, 0.06, 0.03],
        [0.16, 0.12, 0.08, 0.04],
    ];
    for (row, values) in rows.iter().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            scoregrid[(row, col)] = value;
        }
    }
    scoregrid
}

fn poisson_scoregrid(home_rate: f64, away_rate: f64) -> Matrix {
    let mut scoregrid = allocate(DEFAULT_MAX_GOALS);
    from_univariate_poisson(home_rate, away_rate, &factorial::Lookup::default(), &mut scoregrid);
    scoregrid
}

#[test]
pub fn allocate_covers_zero_to_max() {
    let scoregrid = allocate(DEFAULT_MAX_GOALS);
    assert_eq!(11, scoregrid.rows());
    assert_eq!(11, scoregrid.cols());
    assert_eq!(0.0, scoregrid.flatten().sum());
}

#[test]
pub fn accumulate_buckets() {
    let buckets = OutcomeBuckets::accumulate(&create_test_4x4_scoregrid());
    assert_float_absolute_eq!(0.65, buckets.home_win);
    assert_float_absolute_eq!(0.2, buckets.draw);
    assert_float_absolute_eq!(0.15, buckets.away_win);
    assert_float_absolute_eq!(1.0, buckets.total());
}

#[test]
pub fn percentages_of_test_grid() {
    let percentages = OutcomeBuckets::accumulate(&create_test_4x4_scoregrid()).to_percentages();
    assert_eq!(
        OutcomePercentages {
            home_win: 65.0,
            draw: 20.0,
            away_win: 15.0,
        },
        percentages
    );
    assert_eq!(Side::Home, percentages.favourite());
    assert_eq!(65.0, percentages.max());
    assert!(!percentages.is_degenerate());
}

#[test]
pub fn percentages_renormalise_truncated_mass() {
    let buckets = OutcomeBuckets {
        home_win: 0.3,
        draw: 0.1,
        away_win: 0.1,
    };
    let percentages = buckets.to_percentages();
    assert_eq!(60.0, percentages.home_win);
    assert_eq!(20.0, percentages.draw);
    assert_eq!(20.0, percentages.away_win);
}

#[test]
pub fn poisson_grid_sums_to_one() {
    let scoregrid = poisson_scoregrid(1.5, 1.1);
    assert_float_absolute_eq!(1.0, scoregrid.flatten().sum(), 1e-6);
    assert_float_relative_eq!(
        (-2.6f64).exp(),
        scoregrid[(0, 0)]
    );
}

#[test]
pub fn poisson_percentages_sum_to_hundred() {
    for (home_rate, away_rate) in [(1.5, 1.1), (0.4, 3.2), (2.0, 2.0), (0.05, 0.05), (6.0, 0.3)] {
        let percentages = OutcomeBuckets::accumulate(&poisson_scoregrid(home_rate, away_rate)).to_percentages();
        let sum = percentages.as_array().sum();
        assert_float_absolute_eq!(100.0, sum, 0.1 + 1e-9);
        for pct in percentages.as_array() {
            assert!((0.0..=100.0).contains(&pct), "{pct} out of bounds");
        }
    }
}

#[test]
pub fn equal_rates_are_bit_symmetric() {
    for rate in [0.3, 1.0, 1.37, 2.9] {
        let buckets = OutcomeBuckets::accumulate(&poisson_scoregrid(rate, rate));
        assert_eq!(buckets.home_win.to_bits(), buckets.away_win.to_bits());
        let percentages = buckets.to_percentages();
        assert_eq!(percentages.home_win, percentages.away_win);
    }
}

#[test]
pub fn swapped_rates_mirror_outcomes() {
    let forward = OutcomeBuckets::accumulate(&poisson_scoregrid(1.8, 0.9)).to_percentages();
    let reverse = OutcomeBuckets::accumulate(&poisson_scoregrid(0.9, 1.8)).to_percentages();
    assert_eq!(forward.home_win, reverse.away_win);
    assert_eq!(forward.away_win, reverse.home_win);
    assert_eq!(forward.draw, reverse.draw);
}

#[test]
pub fn zero_rates_are_degenerate() {
    for (home_rate, away_rate) in [(0.0, 0.0), (-1.0, 0.0), (-1.0, -0.5)] {
        let mut scoregrid = allocate(DEFAULT_MAX_GOALS);
        scoregrid.fill(0.3);
        from_univariate_poisson(home_rate, away_rate, &factorial::Lookup::default(), &mut scoregrid);
        let percentages = OutcomeBuckets::accumulate(&scoregrid).to_percentages();
        assert_eq!(OutcomePercentages::default(), percentages);
        assert!(percentages.is_degenerate());
        for pct in percentages.as_array() {
            assert!(!pct.is_nan());
        }
        assert!(likely_scores(&scoregrid, 5).is_empty());
    }
}

#[test]
pub fn likely_scores_from_test_grid() {
    let likely = likely_scores(&create_test_4x4_scoregrid(), 3);
    assert_eq!(
        vec![
            ProbableScore {
                score: Score::new(3, 0),
                probability: 16.0
            },
            ProbableScore {
                score: Score::new(2, 0),
                probability: 12.0
            },
            ProbableScore {
                score: Score::new(3, 1),
                probability: 12.0
            },
        ],
        likely
    );
}

#[test]
pub fn likely_scores_ordered_and_bounded() {
    let scoregrid = poisson_scoregrid(1.6, 1.2);
    let likely = likely_scores(&scoregrid, 5);
    assert_eq!(5, likely.len());
    assert_eq!(Score::new(1, 1), likely[0].score);
    for pair in likely.windows(2) {
        assert!(pair[0].probability >= pair[1].probability, "{pair:?}");
    }
    for probable in &likely {
        assert!((0.0..=100.0).contains(&probable.probability));
    }
    assert_eq!(121, likely_scores(&scoregrid, usize::MAX).len());
    assert!(likely_scores(&scoregrid, 0).is_empty());
}

#[test]
pub fn outcome_win_gather() {
    let scoregrid = create_test_4x4_scoregrid();
    assert_float_absolute_eq!(0.65, Outcome::Win(Side::Home).gather(&scoregrid));
    assert_float_absolute_eq!(0.15, Outcome::Win(Side::Away).gather(&scoregrid));
    assert_float_absolute_eq!(0.2, Outcome::Draw.gather(&scoregrid));
}

#[test]
pub fn outcome_goals_gather() {
    let scoregrid = create_test_4x4_scoregrid();
    assert_float_absolute_eq!(0.65, Outcome::Over(2).gather(&scoregrid));
    assert_float_absolute_eq!(0.35, Outcome::Under(3).gather(&scoregrid));
    assert_float_absolute_eq!(1.0, Outcome::Over(0).gather(&scoregrid) + Outcome::Under(1).gather(&scoregrid));
}

#[test]
pub fn outcome_both_score_gather() {
    let scoregrid = create_test_4x4_scoregrid();
    assert_float_absolute_eq!(0.54, Outcome::BothScore.gather(&scoregrid));
    assert_float_absolute_eq!(0.46, Outcome::NotBothScore.gather(&scoregrid));
}

#[test]
pub fn outcome_correct_score_gather() {
    let scoregrid = create_test_4x4_scoregrid();
    assert_float_absolute_eq!(0.16, Outcome::CorrectScore(Score::new(3, 0)).gather(&scoregrid));
    assert_float_absolute_eq!(0.01, Outcome::CorrectScore(Score::new(0, 3)).gather(&scoregrid));
    assert_eq!(0.0, Outcome::CorrectScore(Score::new(5, 0)).gather(&scoregrid));
}

#[test]
pub fn one_sided_zero_rate_keeps_the_other_side() {
    let scoregrid = poisson_scoregrid(0.0, 1.4);
    for home_goals in 1..scoregrid.rows() {
        assert!(scoregrid.row_slice(home_goals).iter().all(|&prob| prob == 0.0));
    }
    let percentages = OutcomeBuckets::accumulate(&scoregrid).to_percentages();
    assert!(!percentages.is_degenerate());
    assert_eq!(0.0, percentages.home_win);
    assert_float_absolute_eq!(24.7, percentages.draw, 1e-9);
    assert_float_absolute_eq!(75.3, percentages.away_win, 1e-9);
    assert_eq!(Side::Away, percentages.favourite());

    let likely = likely_scores(&scoregrid, 5);
    assert_eq!(5, likely.len());
    assert_eq!(Score::new(0, 1), likely[0].score);
    assert!(likely.iter().all(|probable| probable.score.home == 0));

    let mirrored = OutcomeBuckets::accumulate(&poisson_scoregrid(1.4, -2.0)).to_percentages();
    assert_eq!(percentages.away_win, mirrored.home_win);
    assert_eq!(percentages.draw, mirrored.draw);
    assert_eq!(0.0, mirrored.away_win);
}
