use crate::{
    error::ConfigError,
    generators::{GeneratorParams, Method},
    markers::ProblemType,
};

/// Everything needed to produce one layout.
///
/// Dimensions are in cells; the rendered layout is `2 * width + 1` tiles wide
/// and `2 * height + 1` tiles tall.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub width: i64,
    pub height: i64,
    pub method: Method,
    pub seed: u64,
    pub problem_type: ProblemType,
    /// Used by [`Method::Random`].
    pub wall_probability: Option<f64>,
    /// Used by [`Method::Dfs`].
    pub cycle_probability: Option<f64>,
    /// Used by [`ProblemType::Food`].
    pub max_food: Option<usize>,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            method: Method::Dfs,
            seed: 0,
            problem_type: ProblemType::Search,
            wall_probability: None,
            cycle_probability: None,
            max_food: None,
        }
    }
}

/// A request that passed validation, with dimensions narrowed to their
/// storage types and defaults filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRequest {
    pub width: u8,
    pub height: u8,
    pub method: Method,
    pub seed: u64,
    pub problem_type: ProblemType,
    pub params: GeneratorParams,
    pub max_food: Option<usize>,
}

impl GenerationRequest {
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_problem_type(mut self, problem_type: ProblemType) -> Self {
        self.problem_type = problem_type;
        self
    }

    pub fn with_wall_probability(mut self, wall_probability: f64) -> Self {
        self.wall_probability = Some(wall_probability);
        self
    }

    pub fn with_cycle_probability(mut self, cycle_probability: f64) -> Self {
        self.cycle_probability = Some(cycle_probability);
        self
    }

    pub fn with_max_food(mut self, max_food: usize) -> Self {
        self.max_food = Some(max_food);
        self
    }

    /// Rejects invalid configurations before any generation work is done.
    pub fn validate(&self) -> Result<ValidRequest, ConfigError> {
        let width = dimension("width", self.width)?;
        let height = dimension("height", self.height)?;
        if (width as usize * height as usize) < 2 {
            return Err(ConfigError::TooFewCells { width, height });
        }

        let defaults = GeneratorParams::default();
        let params = GeneratorParams {
            wall_probability: probability(
                "wall probability",
                self.wall_probability.unwrap_or(defaults.wall_probability),
            )?,
            cycle_probability: probability(
                "cycle probability",
                self.cycle_probability.unwrap_or(defaults.cycle_probability),
            )?,
        };

        if self.max_food == Some(0) {
            return Err(ConfigError::ZeroMaxFood);
        }

        if self.wall_probability.is_some() && self.method != Method::Random {
            tracing::warn!("[config] wall probability is ignored by the {} method", self.method.name());
        }
        if self.cycle_probability.is_some() && self.method != Method::Dfs {
            tracing::warn!("[config] cycle probability is ignored by the {} method", self.method.name());
        }
        if self.max_food.is_some() && self.problem_type != ProblemType::Food {
            tracing::warn!("[config] max food is ignored by the {} problem", self.problem_type);
        }

        Ok(ValidRequest {
            width,
            height,
            method: self.method,
            seed: self.seed,
            problem_type: self.problem_type,
            params,
            max_food: self.max_food,
        })
    }
}

fn dimension(name: &'static str, value: i64) -> Result<u8, ConfigError> {
    if value <= 0 {
        return Err(ConfigError::NonPositiveDimension { name, value });
    }
    u8::try_from(value).map_err(|_| ConfigError::DimensionTooLarge {
        name,
        value,
        max: u8::MAX,
    })
}

fn probability(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    // NaN fails the range check too
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}
