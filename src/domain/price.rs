// src/domain/price.rs

use crate::domain::kind::Kind;
use serde::{Serialize, Serializer};
use std::fmt;

pub const NOT_AVAILABLE: &str = "N/A";
pub const NEGOTIABLE: &str = "Negotiable";
pub const NOT_NEGOTIABLE: &str = "Not negotiable";

/// Headline price of a listing: an amount, or "N/A" when no source carried one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Price {
    Amount(f64),
    NotAvailable,
}

impl Price {
    /// First usable candidate wins. Zero and non-finite values count as absent.
    pub fn first_of<I>(candidates: I) -> Price
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        candidates
            .into_iter()
            .flatten()
            .find(|amount| amount.is_finite() && *amount != 0.0)
            .map(Price::Amount)
            .unwrap_or(Price::NotAvailable)
    }

    pub fn amount(&self) -> Option<f64> {
        match self {
            Price::Amount(amount) => Some(*amount),
            Price::NotAvailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Price::Amount(_))
    }

    /// Amount with thousands separators, e.g. `2,500,000`.
    pub fn grouped(&self) -> String {
        match self {
            Price::NotAvailable => NOT_AVAILABLE.to_string(),
            Price::Amount(_) => {
                let plain = self.to_string();
                let (int_part, frac_part) = match plain.split_once('.') {
                    Some((i, f)) => (i.to_string(), Some(f.to_string())),
                    None => (plain, None),
                };
                let (sign, digits) = match int_part.strip_prefix('-') {
                    Some(rest) => ("-", rest.to_string()),
                    None => ("", int_part),
                };

                let mut grouped = String::new();
                for (i, ch) in digits.chars().enumerate() {
                    if i > 0 && (digits.len() - i) % 3 == 0 {
                        grouped.push(',');
                    }
                    grouped.push(ch);
                }

                match frac_part {
                    Some(frac) => format!("{sign}{grouped}.{frac}"),
                    None => format!("{sign}{grouped}"),
                }
            }
        }
    }
}

fn integral(amount: f64) -> Option<i64> {
    if amount.fract() == 0.0 && amount.abs() < i64::MAX as f64 {
        Some(amount as i64)
    } else {
        None
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::NotAvailable => write!(f, "{NOT_AVAILABLE}"),
            Price::Amount(amount) => match integral(*amount) {
                Some(whole) => write!(f, "{whole}"),
                None => write!(f, "{amount}"),
            },
        }
    }
}

/// Serialized as a JSON number, or the string `"N/A"`.
impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Price::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
            Price::Amount(amount) => match integral(*amount) {
                Some(whole) => serializer.serialize_i64(whole),
                None => serializer.serialize_f64(*amount),
            },
        }
    }
}

pub fn negotiable_label(is_negotiable: Option<bool>) -> String {
    if is_negotiable.unwrap_or(false) {
        NEGOTIABLE.to_string()
    } else {
        NOT_NEGOTIABLE.to_string()
    }
}

/// Which price source applies to a (category, listing) pair.
///
/// Every pair maps to at most one rule; pairs with no rule price as "N/A".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRule {
    /// `price.expectedPrice`, then `rent.expectedRent`; labelled by negotiability.
    AgricultureSaleOrRent,
    /// `leaseTerms.leaseAmount.amount`.
    AgricultureLease,
    /// `rentalTerms.rentDetails.expectedRent`, labelled by `rentType`.
    Rent,
    /// `pricingDetails.propertyPrice`, `.totalPrice`, `.pricePerSqFt`, labelled by `priceType`.
    Sell,
    /// `leaseTerms.leaseAmount.amount`, labelled by `amountType`.
    Lease,
}

impl PriceRule {
    pub fn for_kind(kind: &Kind) -> Option<PriceRule> {
        match (kind.is_agriculture(), kind.listing) {
            (true, "sell") | (true, "rent") => Some(PriceRule::AgricultureSaleOrRent),
            (true, "lease") => Some(PriceRule::AgricultureLease),
            (false, "rent") => Some(PriceRule::Rent),
            (false, "sell") => Some(PriceRule::Sell),
            (false, "lease") => Some(PriceRule::Lease),
            _ => None,
        }
    }

    /// JSON pointers of the amount sources, in the order they are tried.
    pub fn amount_pointers(&self) -> &'static [&'static str] {
        match self {
            PriceRule::AgricultureSaleOrRent => &["/price/expectedPrice", "/rent/expectedRent"],
            PriceRule::AgricultureLease | PriceRule::Lease => &["/leaseTerms/leaseAmount/amount"],
            PriceRule::Rent => &["/rentalTerms/rentDetails/expectedRent"],
            PriceRule::Sell => &[
                "/pricingDetails/propertyPrice",
                "/pricingDetails/totalPrice",
                "/pricingDetails/pricePerSqFt",
            ],
        }
    }

    /// JSON pointers the label is read from. Agriculture sale/rent reads a negotiability flag.
    pub fn label_pointers(&self) -> &'static [&'static str] {
        match self {
            PriceRule::AgricultureSaleOrRent => &["/price/isNegotiable", "/rent/isNegotiable"],
            PriceRule::AgricultureLease | PriceRule::Lease => {
                &["/leaseTerms/leaseAmount/amountType"]
            }
            PriceRule::Rent => &["/rentalTerms/rentDetails/rentType"],
            PriceRule::Sell => &["/pricingDetails/priceType"],
        }
    }
}
