// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Configuration.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. An optional TOML file (`[search]`, `[plan]`, `[logging]` tables)
//! 3. Environment variables `POFFIN__<SECTION>__<KEY>`, for example
//!    `POFFIN__SEARCH__TOP_K=25`
//!
//! The merged configuration is validated before it is returned.

use crate::cooking::CookingParams;
use crate::enumerate::{MAX_COMBINATION, MIN_COMBINATION};
use crate::error::{InvalidArgument, Result};
use crate::logging::LoggingConfig;
use crate::model::ItemId;
use crate::plan::ScoringConfig;
use crate::ranking::{AllOf, Comparator, DefaultComparator, MaxSmoothness, MinLevel, OrderingComparator, PruningPredicate};
use crate::search::{EnumerationStrategy, Execution, SearchRequest};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "POFFIN";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub plan: ScoringConfig,
    pub logging: LoggingConfig,
}

/// Search settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Combination size.
    pub k: usize,
    pub top_k: usize,
    pub duration: u8,
    pub errors: u8,
    pub bonus: u8,
    /// 1 runs sequentially; 0 uses every available core.
    pub workers: usize,
    pub strategy: EnumerationStrategy,
    /// Precompute raw sums when searching the whole item table.
    pub precompute: bool,
    pub with_recipes: bool,
    /// Ordering such as `level:desc,smoothness:asc`; the default ordering
    /// when absent.
    pub ordering: Option<String>,
    pub min_level: Option<u8>,
    pub max_smoothness: Option<u8>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            k: 2,
            top_k: SearchRequest::DEFAULT_TOP_K,
            duration: CookingParams::REFERENCE_DURATION,
            errors: 0,
            bonus: 0,
            workers: 1,
            strategy: EnumerationStrategy::default(),
            precompute: false,
            with_recipes: true,
            ordering: None,
            min_level: None,
            max_smoothness: None,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_COMBINATION..=MAX_COMBINATION).contains(&self.k) {
            return Err(InvalidArgument::CombinationSize {
                k: self.k,
                min: MIN_COMBINATION,
                max: MAX_COMBINATION,
            }
            .into());
        }
        if self.top_k == 0 {
            return Err(InvalidArgument::ZeroTopK.into());
        }
        self.params().validate()?;
        self.comparator().map(|_| ())
    }

    pub fn params(&self) -> CookingParams {
        CookingParams::new(self.duration, self.errors, self.bonus)
    }

    pub fn execution(&self) -> Execution {
        if self.workers == 1 {
            Execution::Sequential
        } else {
            Execution::Parallel {
                workers: self.workers,
            }
        }
    }

    /// Request over `pool` with these settings.
    pub fn request(&self, pool: Vec<ItemId>) -> SearchRequest {
        SearchRequest::new(pool, self.k)
            .top_k(self.top_k)
            .params(self.params())
            .with_recipes(self.with_recipes)
            .execution(self.execution())
            .strategy(self.strategy)
    }

    pub fn comparator(&self) -> Result<Box<dyn Comparator>> {
        match &self.ordering {
            Some(ordering) => Ok(Box::new(ordering.parse::<OrderingComparator>()?)),
            None => Ok(Box::new(DefaultComparator)),
        }
    }

    /// Filter built from the level and smoothness limits, if any are set.
    pub fn predicate(&self) -> Option<Box<dyn PruningPredicate>> {
        let mut parts: Vec<Box<dyn PruningPredicate>> = Vec::new();
        if let Some(min) = self.min_level {
            parts.push(Box::new(MinLevel(min)));
        }
        if let Some(max) = self.max_smoothness {
            parts.push(Box::new(MaxSmoothness(max)));
        }
        match parts.len() {
            0 => None,
            1 => parts.pop(),
            _ => Some(Box::new(AllOf::new(parts))),
        }
    }
}

impl AppConfig {
    /// Load defaults, then `path` (if given), then the environment.
    ///
    /// # Errors
    ///
    /// Fails if the file is missing or malformed, or the merged values do
    /// not validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&AppConfig::default())?);
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(?path, "Loaded configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;
        self.plan.validate()?;
        self.logging.validate()
    }
}
