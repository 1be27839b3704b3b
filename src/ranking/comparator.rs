// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Comparators over cooked Poffins.
//!
//! A comparator answers one question: is `a` strictly better than `b`? The
//! relation must be a strict weak ordering (irreflexive, transitive, with
//! transitive incomparability), otherwise Top-K selection is not
//! well-defined.
//!
//! # Ordering syntax
//!
//! [`OrderingComparator`] parses a comma-separated precedence list of sort
//! keys. Each key is a `+`-separated sum of optionally weighted fields,
//! followed by an optional direction (default `desc`):
//!
//! ```text
//! level:desc,2*spicy+sweet:desc,smoothness:asc
//! ```

use crate::error::{Result, SearchError};
use crate::model::{Flavor, Outcome};
use std::cmp::Ordering;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

pub trait Comparator: Send + Sync {
    /// True if `a` ranks strictly ahead of `b`.
    fn is_better(&self, a: &Outcome, b: &Outcome) -> bool;

    /// Total order view, best first: `Less` means `a` ranks ahead.
    fn ordering(&self, a: &Outcome, b: &Outcome) -> Ordering {
        if self.is_better(a, b) {
            Ordering::Less
        } else if self.is_better(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<F> Comparator for F
where
    F: Fn(&Outcome, &Outcome) -> bool + Send + Sync,
{
    fn is_better(&self, a: &Outcome, b: &Outcome) -> bool {
        self(a, b)
    }
}

/// Higher level, then lower smoothness, then earlier category.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultComparator;

impl Comparator for DefaultComparator {
    fn is_better(&self, a: &Outcome, b: &Outcome) -> bool {
        (b.level(), a.smoothness(), a.category()) < (a.level(), b.smoothness(), b.category())
    }
}

/// A numeric property of an outcome usable in a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Field {
    Level,
    SecondLevel,
    Smoothness,
    Category,
    Spicy,
    Dry,
    Sweet,
    Bitter,
    Sour,
    FlavorTotal,
}

impl Field {
    pub fn value(self, outcome: &Outcome) -> i64 {
        match self {
            Field::Level => outcome.level() as i64,
            Field::SecondLevel => outcome.second_level() as i64,
            Field::Smoothness => outcome.smoothness() as i64,
            Field::Category => outcome.category().ordinal() as i64,
            Field::Spicy => outcome.flavor(Flavor::Spicy) as i64,
            Field::Dry => outcome.flavor(Flavor::Dry) as i64,
            Field::Sweet => outcome.flavor(Flavor::Sweet) as i64,
            Field::Bitter => outcome.flavor(Flavor::Bitter) as i64,
            Field::Sour => outcome.flavor(Flavor::Sour) as i64,
            Field::FlavorTotal => outcome.flavor_total() as i64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    Asc,
    Desc,
}

/// Largest weight magnitude accepted in a parsed sort term.
pub const MAX_WEIGHT: i64 = 1_000_000;

/// A weighted sum of fields with a direction.
#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
    terms: Vec<(i64, Field)>,
    direction: Direction,
}

impl SortKey {
    pub fn new(terms: Vec<(i64, Field)>, direction: Direction) -> Self {
        Self { terms, direction }
    }

    /// Unweighted key on a single field.
    pub fn field(field: Field, direction: Direction) -> Self {
        Self::new(vec![(1, field)], direction)
    }

    /// Weighted sum, saturating at the bounds of `i64`.
    pub fn value(&self, outcome: &Outcome) -> i64 {
        self.terms.iter().fold(0i64, |total, &(weight, field)| {
            total.saturating_add(weight.saturating_mul(field.value(outcome)))
        })
    }

    fn parse_term(term: &str) -> Result<(i64, Field)> {
        let (weight, name) = match term.split_once('*') {
            Some((weight, name)) => {
                let weight = weight.trim().parse::<i64>().map_err(|_| {
                    SearchError::Config(format!("Invalid weight in sort term '{}'", term))
                })?;
                if weight.unsigned_abs() > MAX_WEIGHT.unsigned_abs() {
                    return Err(SearchError::Config(format!(
                        "Weight in sort term '{}' exceeds {}",
                        term, MAX_WEIGHT
                    )));
                }
                (weight, name)
            }
            None => (1, term),
        };
        let field = Field::from_str(name.trim())
            .map_err(|_| SearchError::Config(format!("Unknown sort field '{}'", name.trim())))?;
        Ok((weight, field))
    }
}

impl FromStr for SortKey {
    type Err = SearchError;

    fn from_str(text: &str) -> Result<Self> {
        let (expression, direction) = match text.rsplit_once(':') {
            Some((expression, direction)) => {
                let direction = Direction::from_str(direction.trim()).map_err(|_| {
                    SearchError::Config(format!("Unknown sort direction '{}'", direction.trim()))
                })?;
                (expression, direction)
            }
            None => (text, Direction::Desc),
        };

        let terms = expression
            .split('+')
            .map(Self::parse_term)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(terms, direction))
    }
}

/// Lexicographic precedence list of sort keys.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderingComparator {
    keys: Vec<SortKey>,
}

impl OrderingComparator {
    pub fn new(keys: Vec<SortKey>) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }
}

impl FromStr for OrderingComparator {
    type Err = SearchError;

    fn from_str(text: &str) -> Result<Self> {
        let keys = text
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(SortKey::from_str)
            .collect::<Result<Vec<_>>>()?;
        if keys.is_empty() {
            return Err(SearchError::Config(format!("Empty ordering '{}'", text)));
        }
        Ok(Self::new(keys))
    }
}

impl Comparator for OrderingComparator {
    fn is_better(&self, a: &Outcome, b: &Outcome) -> bool {
        for key in &self.keys {
            let (va, vb) = (key.value(a), key.value(b));
            if va != vb {
                return match key.direction {
                    Direction::Desc => va > vb,
                    Direction::Asc => va < vb,
                };
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefers_level_then_smoothness() {
        let strong = Outcome::new([30, 0, 0, 0, 0], 40);
        let weak = Outcome::new([20, 0, 0, 0, 0], 10);
        let smooth = Outcome::new([30, 0, 0, 0, 0], 20);

        let cmp = DefaultComparator;
        assert!(cmp.is_better(&strong, &weak));
        assert!(cmp.is_better(&smooth, &strong));
        assert!(!cmp.is_better(&strong, &strong));
        assert_eq!(cmp.ordering(&weak, &strong), Ordering::Greater);
    }

    #[test]
    fn test_default_falls_back_to_category() {
        let single = Outcome::new([0, 20, 0, 0, 0], 20);
        let double = Outcome::new([0, 20, 5, 0, 0], 20);
        assert!(DefaultComparator.is_better(&single, &double));
        assert!(!DefaultComparator.is_better(&double, &single));
    }

    #[test]
    fn test_parse_ordering() {
        let cmp: OrderingComparator = "level:desc, 2*spicy+sweet:desc ,smoothness:asc".parse().unwrap();
        assert_eq!(cmp.keys().len(), 3);
        assert_eq!(
            cmp.keys()[1],
            SortKey::new(vec![(2, Field::Spicy), (1, Field::Sweet)], Direction::Desc)
        );
        assert_eq!(cmp.keys()[2], SortKey::field(Field::Smoothness, Direction::Asc));
    }

    #[test]
    fn test_direction_defaults_to_desc() {
        let cmp: OrderingComparator = "second_level".parse().unwrap();
        assert_eq!(cmp.keys()[0], SortKey::field(Field::SecondLevel, Direction::Desc));
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<OrderingComparator>().is_err());
        assert!("umami:desc".parse::<OrderingComparator>().is_err());
        assert!("level:sideways".parse::<OrderingComparator>().is_err());
        assert!("x*level".parse::<OrderingComparator>().is_err());
    }

    #[test]
    fn test_oversized_weights_rejected() {
        let err = "100000000000000000*level"
            .parse::<OrderingComparator>()
            .unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
        assert!("-1000001*sweet:asc".parse::<OrderingComparator>().is_err());

        let cmp: OrderingComparator = "1000000*level+-1000000*smoothness".parse().unwrap();
        let a = Outcome::new([100, 0, 0, 0, 0], 0);
        let b = Outcome::new([99, 0, 0, 0, 0], 0);
        assert!(cmp.is_better(&a, &b));
    }

    #[test]
    fn test_programmatic_weights_saturate() {
        let key = SortKey::new(vec![(i64::MAX, Field::Level), (i64::MAX, Field::Dry)], Direction::Desc);
        let outcome = Outcome::new([0, 100, 0, 0, 0], 0);
        assert_eq!(key.value(&outcome), i64::MAX);

        let cmp = OrderingComparator::new(vec![key]);
        let weaker = Outcome::new([0, 1, 0, 0, 0], 0);
        // Both saturate, so neither ranks ahead; no panic either way
        assert!(!cmp.is_better(&outcome, &weaker));
    }

    #[test]
    fn test_weighted_key() {
        let cmp: OrderingComparator = "2*spicy+sweet".parse().unwrap();
        let a = Outcome::new([10, 0, 0, 0, 0], 0); // 20
        let b = Outcome::new([0, 0, 15, 0, 0], 0); // 15
        assert!(cmp.is_better(&a, &b));
        assert!(!cmp.is_better(&b, &a));
    }

    #[test]
    fn test_ties_fall_through_keys() {
        let cmp: OrderingComparator = "level,smoothness:asc".parse().unwrap();
        let rough = Outcome::new([0, 0, 0, 12, 0], 30);
        let smooth = Outcome::new([0, 0, 0, 12, 0], 25);
        assert!(cmp.is_better(&smooth, &rough));
        assert_eq!(cmp.ordering(&rough, &rough), Ordering::Equal);
    }

    #[test]
    fn test_closure_comparator() {
        let by_sour = |a: &Outcome, b: &Outcome| a.flavor(Flavor::Sour) > b.flavor(Flavor::Sour);
        let a = Outcome::new([0, 0, 0, 0, 9], 0);
        let b = Outcome::new([40, 0, 0, 0, 3], 0);
        assert!(by_sour.is_better(&a, &b));
        let dynamic: &dyn Comparator = &by_sour;
        assert_eq!(dynamic.ordering(&b, &a), Ordering::Greater);
    }
}
