//! Conversions between probabilities and decimal odds, and margin removal for bookmaker books.

use thiserror::Error;
use tracing::trace;

use crate::probs::{round, SliceExt};

/// Decimal places kept on a fair price.
const PRICE_DECIMALS: u8 = 2;

pub trait MarketPrice {
    fn decimal(&self) -> f64;
}

impl MarketPrice for f64 {
    fn decimal(&self) -> f64 {
        *self
    }
}

/// The break-even decimal price of an outcome whose probability is given as a percentage,
/// rounded to two decimal places. Zero when the percentage lies outside `(0, 100]`.
pub fn fair_price(percent: f64) -> f64 {
    if percent > 0.0 && percent <= 100.0 {
        round(100.0 / percent, PRICE_DECIMALS)
    } else {
        0.0
    }
}

/// The probability (in `0..=1`) implied by a decimal price. Zero for a non-positive price.
pub fn implied_probability(price: &impl MarketPrice) -> f64 {
    let decimal = price.decimal();
    if decimal > 0.0 && decimal.is_finite() {
        1.0 / decimal
    } else {
        0.0
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidBook {
    #[error("a book requires at least two prices")]
    TooFewPrices,

    #[error("price {price} at index {index} is not a valid decimal price")]
    InvalidPrice { index: usize, price: f64 },
}

/// A book of decimal prices covering mutually exclusive outcomes, together with the
/// margin-free probabilities recovered from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Market {
    pub prices: Vec<f64>,
    pub probs: Vec<f64>,
    pub overround: f64,
}
impl Market {
    /// Removes the bookmaker's margin by scaling the implied probabilities proportionally so
    /// that they sum to one. The overround is the implied booksum.
    pub fn fit_multiplicative(prices: Vec<f64>) -> Result<Self, InvalidBook> {
        if prices.len() < 2 {
            return Err(InvalidBook::TooFewPrices);
        }
        if let Some((index, &price)) = prices
            .iter()
            .enumerate()
            .find(|&(_, &price)| price <= 1.0 || !price.is_finite())
        {
            return Err(InvalidBook::InvalidPrice { index, price });
        }

        let mut probs = prices.iter().map(|price| implied_probability(price)).collect::<Vec<_>>();
        let overround = probs.normalise(1.0);
        trace!("fitted prices {prices:?} to probabilities {probs:?} with overround {overround:.4}");
        Ok(Self {
            prices,
            probs,
            overround,
        })
    }

    /// The margin expressed as a percentage of the stake.
    pub fn margin_percent(&self) -> f64 {
        (self.overround - 1.0) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;
    use scorecast_testing::assert_slice_f64_relative;

    #[test]
    fn fair_price_inverts_percentage() {
        assert_eq!(2.0, fair_price(50.0));
        assert_eq!(3.33, fair_price(30.0));
        assert_eq!(1.0, fair_price(100.0));
        assert_eq!(12.5, fair_price(8.0));
    }

    #[test]
    fn fair_price_outside_range() {
        assert_eq!(0.0, fair_price(0.0));
        assert_eq!(0.0, fair_price(-5.0));
        assert_eq!(0.0, fair_price(100.1));
        assert_eq!(0.0, fair_price(f64::NAN));
    }

    #[test]
    fn implied_probability_of_price() {
        assert_float_absolute_eq!(0.4, implied_probability(&2.5), 1e-12);
        assert_eq!(0.0, implied_probability(&0.0));
        assert_eq!(0.0, implied_probability(&-3.0));
    }

    #[test]
    fn fit_fair_book() {
        let market = Market::fit_multiplicative(vec![2.0, 4.0, 4.0]).unwrap();
        assert_slice_f64_relative(&[0.5, 0.25, 0.25], &market.probs, 1e-9);
        assert_float_absolute_eq!(1.0, market.overround, 1e-9);
        assert_float_absolute_eq!(0.0, market.margin_percent(), 1e-9);
    }

    #[test]
    fn fit_book_with_margin() {
        let market = Market::fit_multiplicative(vec![2.7, 2.87, 2.87]).unwrap();
        assert_float_absolute_eq!(1.0672, market.overround, 0.0001);
        assert_float_absolute_eq!(1.0, market.probs.sum(), 1e-9);
        assert!(market.probs[0] > market.probs[1]);
        assert_float_absolute_eq!(6.72, market.margin_percent(), 0.01);
    }

    #[test]
    fn fit_rejects_invalid_books() {
        assert_eq!(
            Err(InvalidBook::TooFewPrices),
            Market::fit_multiplicative(vec![1.5])
        );
        assert_eq!(
            "price 1 at index 1 is not a valid decimal price",
            Market::fit_multiplicative(vec![2.0, 1.0, 3.0])
                .unwrap_err()
                .to_string()
        );
    }
}
