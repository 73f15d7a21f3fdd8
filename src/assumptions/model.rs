//! Fixed model constants: benefit rates and the tiered subscription price

/// Per-employee subscription price by contract year
#[derive(Debug, Clone, PartialEq)]
pub struct PricingSchedule {
    /// Annual price per employee by contract year (1-indexed)
    rates: Vec<f64>,
}

impl PricingSchedule {
    /// Build a schedule from per-year rates. An empty table prices every
    /// year at zero.
    pub fn from_rates(rates: &[f64]) -> Self {
        Self {
            rates: rates.to_vec(),
        }
    }

    /// Published declining price table
    pub fn standard() -> Self {
        Self {
            rates: vec![
                500.0, // Year 1
                475.0, // Year 2
                450.0, // Year 3
                425.0, // Year 4
                400.0, // Year 5 and beyond
            ],
        }
    }

    /// Price per employee for a contract year.
    ///
    /// The index is clamped into the table: year 0 reads the first tier and
    /// any year past the end keeps the last published tier.
    pub fn rate_for_year(&self, contract_year: u32) -> f64 {
        if self.rates.is_empty() {
            return 0.0;
        }
        let last = self.rates.len() - 1;
        let idx = (contract_year as usize).saturating_sub(1).min(last);
        self.rates[idx]
    }

    /// Number of published tiers
    pub fn tier_count(&self) -> usize {
        self.rates.len()
    }
}

impl Default for PricingSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

/// Constants of the ROI model. Not user-configurable; reproduced exactly so
/// every consumer sees the same figures.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConstants {
    /// Productivity uplift as a share of payroll
    pub productivity_boost_rate: f64,

    /// Reduction applied to turnover-driven replacement cost
    pub turnover_reduction_rate: f64,

    /// Training hours saved per employee per year
    pub training_hours_saved_per_employee: f64,

    pub working_hours_per_year: f64,

    /// Tiered annual price per employee
    pub pricing: PricingSchedule,
}

impl Default for ModelConstants {
    fn default() -> Self {
        Self {
            productivity_boost_rate: 0.05,   // 5% of payroll
            turnover_reduction_rate: 0.20,   // 20% fewer replacements
            training_hours_saved_per_employee: 10.0,
            working_hours_per_year: 2080.0,
            pricing: PricingSchedule::standard(),
        }
    }
}

impl ModelConstants {
    /// Hourly cost of an employee at the given annual salary
    pub fn hourly_rate(&self, salary: f64) -> f64 {
        if self.working_hours_per_year > 0.0 {
            salary / self.working_hours_per_year
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_tiers() {
        let pricing = PricingSchedule::standard();

        assert_eq!(pricing.rate_for_year(1), 500.0);
        assert_eq!(pricing.rate_for_year(3), 450.0);
        assert_eq!(pricing.rate_for_year(5), 400.0);
        assert_eq!(pricing.tier_count(), 5);
    }

    #[test]
    fn test_pricing_holds_last_tier() {
        let pricing = PricingSchedule::standard();

        assert_eq!(pricing.rate_for_year(6), 400.0);
        assert_eq!(pricing.rate_for_year(40), 400.0);
        assert_eq!(pricing.rate_for_year(u32::MAX), 400.0);
        assert_eq!(pricing.rate_for_year(0), 500.0);
    }

    #[test]
    fn test_empty_schedule_is_free() {
        let pricing = PricingSchedule::from_rates(&[]);
        assert_eq!(pricing.rate_for_year(1), 0.0);
    }

    #[test]
    fn test_hourly_rate() {
        let constants = ModelConstants::default();
        assert_eq!(constants.hourly_rate(20_800.0), 10.0);
    }
}
