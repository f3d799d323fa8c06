use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Informational and economic parameters of the affected region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: String,
    /// Average age of the population (years)
    #[serde(with = "rust_decimal::serde::float")]
    pub avg_age: Decimal,
    /// Average daily income per earner (currency units)
    #[serde(rename = "avgDailyIncomeInUSD", with = "rust_decimal::serde::float")]
    pub avg_daily_income_in_usd: Decimal,
    /// Fraction of the population earning a daily income (0.0 - 1.0)
    #[serde(with = "rust_decimal::serde::float")]
    pub avg_daily_income_population: Decimal,
}

impl Region {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avg_age: Decimal::ZERO,
            avg_daily_income_in_usd: Decimal::ZERO,
            avg_daily_income_population: Decimal::ZERO,
        }
    }

    pub fn with_avg_age(mut self, avg_age: Decimal) -> Self {
        self.avg_age = avg_age;
        self
    }

    /// Set daily income and the fraction of the population earning it
    pub fn with_daily_income(mut self, income_in_usd: Decimal, earning_fraction: Decimal) -> Self {
        self.avg_daily_income_in_usd = income_in_usd;
        self.avg_daily_income_population = earning_fraction;
        self
    }

    /// Income generated per infected person per day
    ///
    /// Never exceeds the daily income once the earning fraction is within [0, 1].
    pub fn daily_income_per_capita(&self) -> Decimal {
        self.avg_daily_income_in_usd * self.avg_daily_income_population
    }
}
