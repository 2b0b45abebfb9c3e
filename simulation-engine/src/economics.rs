//! Economic identity models
//!
//! Taylor rule, Phillips curve, IS-LM equilibrium, and the money
//! multiplier, adapted for CBDC adoption effects.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Natural rate of unemployment assumed by the Phillips curve
const NATURAL_UNEMPLOYMENT: f64 = 0.05;

/// Phillips curve unemployment-gap slope
const PHILLIPS_SLOPE: f64 = 0.5;

// IS curve parameters
const AUTONOMOUS_SPENDING: f64 = 1000.0;
const MARGINAL_PROPENSITY_CONSUME: f64 = 0.8;
const INVESTMENT_SENSITIVITY: f64 = 50.0;

// LM curve parameters
const MONEY_DEMAND_SENSITIVITY: f64 = 0.5;
const MONEY_DEMAND_AUTONOMOUS: f64 = 500.0;

/// CBDC adoption lift on money demand
const CBDC_MONEY_DEMAND_IMPACT: f64 = 0.2;

/// Per-period CBDC adoption increment in the impact simulation
const ADOPTION_STEP: f64 = 0.01;

/// Parameters for economic models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicParameters {
    /// Natural rate of interest
    pub natural_rate: f64,

    /// Inflation target
    pub inflation_target: f64,

    /// Output gap weight in the Taylor rule
    pub output_gap_weight: f64,

    /// Inflation weight in the Taylor rule
    pub inflation_weight: f64,

    /// Money velocity
    pub money_velocity: f64,

    /// Fiscal multiplier
    pub fiscal_multiplier: f64,
}

impl Default for EconomicParameters {
    fn default() -> Self {
        Self {
            natural_rate: 0.02,
            inflation_target: 0.02,
            output_gap_weight: 0.5,
            inflation_weight: 1.5,
            money_velocity: 1.5,
            fiscal_multiplier: 1.0,
        }
    }
}

/// Initial conditions for the monetary impact simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonetaryConditions {
    /// Policy interest rate
    pub interest_rate: f64,

    /// Inflation rate
    pub inflation: f64,

    /// Actual output
    pub output: f64,

    /// Potential output (must be non-zero)
    pub potential_output: f64,

    /// Unemployment rate
    pub unemployment: f64,

    /// CBDC adoption rate (0-1)
    pub cbdc_adoption: f64,

    /// Reserve requirement ratio
    pub reserve_ratio: f64,

    /// Currency-to-deposit ratio
    pub currency_ratio: f64,
}

/// One period of the monetary impact simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonetaryImpactPoint {
    /// Simulation period index
    pub period: u32,

    /// Policy rate after shock pass-through
    pub interest_rate: f64,

    /// Inflation rate
    pub inflation: f64,

    /// Output gap
    pub output_gap: f64,

    /// CBDC adoption rate
    pub cbdc_adoption: f64,

    /// Money multiplier
    pub money_multiplier: f64,
}

/// Economic models over an immutable parameter set
pub struct EconomicModels {
    params: EconomicParameters,
}

impl EconomicModels {
    /// Create models with the given parameters
    pub fn new(params: EconomicParameters) -> Self {
        Self { params }
    }

    /// Recommended policy rate under the Taylor rule
    ///
    /// Uses the configured natural rate unless one is supplied.
    pub fn taylor_rule(
        &self,
        inflation_rate: f64,
        output_gap: f64,
        natural_rate: Option<f64>,
    ) -> f64 {
        let natural_rate = natural_rate.unwrap_or(self.params.natural_rate);

        natural_rate
            + self.params.inflation_weight * (inflation_rate - self.params.inflation_target)
            + self.params.output_gap_weight * output_gap
    }

    /// Inflation under a simplified expectations-augmented Phillips curve
    pub fn phillips_curve(
        &self,
        unemployment_rate: f64,
        expected_inflation: f64,
        supply_shock: f64,
    ) -> f64 {
        expected_inflation - PHILLIPS_SLOPE * (unemployment_rate - NATURAL_UNEMPLOYMENT)
            + supply_shock
    }

    /// IS-LM equilibrium with CBDC-adjusted money demand
    ///
    /// Returns `(equilibrium output, equilibrium interest rate)`.
    pub fn is_lm(
        &self,
        interest_rate: f64,
        government_spending: f64,
        money_supply: f64,
        cbdc_adoption: f64,
    ) -> Result<(f64, f64)> {
        let cbdc_impact = 1.0 + CBDC_MONEY_DEMAND_IMPACT * cbdc_adoption;

        // IS curve: Y = C + I + G
        let is_output = AUTONOMOUS_SPENDING
            + MARGINAL_PROPENSITY_CONSUME * government_spending
            - INVESTMENT_SENSITIVITY * interest_rate;

        let lm_denominator = MONEY_DEMAND_SENSITIVITY * is_output;
        if lm_denominator == 0.0 {
            return Err(Error::InvalidInput(
                "IS output is zero; LM equilibrium undefined".to_string(),
            ));
        }

        // LM curve: M/P = L(Y, r)
        let lm_interest = (money_supply / cbdc_impact - MONEY_DEMAND_AUTONOMOUS) / lm_denominator;

        Ok((is_output, lm_interest))
    }

    /// Money multiplier extended with a CBDC-to-deposit ratio
    pub fn money_multiplier(
        &self,
        reserve_ratio: f64,
        currency_ratio: f64,
        cbdc_ratio: f64,
    ) -> Result<f64> {
        let denominator = reserve_ratio + currency_ratio + cbdc_ratio;
        if denominator <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "Money multiplier denominator must be positive, got {}",
                denominator
            )));
        }
        Ok(1.0 / denominator)
    }

    /// Multi-period monetary policy impact with gradual CBDC adoption
    pub fn monetary_impact(
        &self,
        initial: &MonetaryConditions,
        policy_shock: f64,
        periods: u32,
    ) -> Result<Vec<MonetaryImpactPoint>> {
        if initial.potential_output == 0.0 {
            return Err(Error::InvalidInput(
                "Potential output must be non-zero".to_string(),
            ));
        }

        let mut results = Vec::with_capacity(periods as usize);
        let mut interest_rate = initial.interest_rate;
        let mut inflation = initial.inflation;
        let mut cbdc_adoption = initial.cbdc_adoption;

        for period in 0..periods {
            // Shock passes through with exponential decay
            interest_rate += policy_shock * (1.0 - (-f64::from(period) / 3.0).exp());

            let output_gap =
                (initial.output - initial.potential_output) / initial.potential_output;
            inflation = self.phillips_curve(initial.unemployment, inflation, 0.0);

            cbdc_adoption = (cbdc_adoption + ADOPTION_STEP).min(1.0);

            let money_multiplier = self.money_multiplier(
                initial.reserve_ratio,
                initial.currency_ratio,
                cbdc_adoption,
            )?;

            results.push(MonetaryImpactPoint {
                period,
                interest_rate,
                inflation,
                output_gap,
                cbdc_adoption,
                money_multiplier,
            });
        }

        Ok(results)
    }
}

impl Default for EconomicModels {
    fn default() -> Self {
        Self::new(EconomicParameters::default())
    }
}
