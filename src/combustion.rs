//! Coal combustion stoichiometry
//!
//! Pure mass-balance arithmetic for complete combustion of coal: oxygen
//! demand, theoretical minimum air, flue gas yield, and excess air. All
//! functions of the current cycle's inputs only — nothing is cached between
//! cycles.

/// Oxygen consumed per unit mass of carbon (C + O2 → CO2).
const O2_PER_CARBON: f32 = 8.0 / 3.0;
/// Oxygen consumed per unit mass of hydrogen (2H2 + O2 → 2H2O).
const O2_PER_HYDROGEN: f32 = 8.0;
/// Air required per unit mass of oxygen (air is 23% O2 by mass).
const AIR_PER_O2: f32 = 100.0 / 23.0;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Coal composition by mass, as dimensionless decimal fractions.
///
/// Values are taken from the operator verbatim — negative or >1 fractions
/// are accepted and flow straight through the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelComposition {
    pub carbon: f32,
    pub hydrogen: f32,
    pub sulphur: f32,
    pub oxygen: f32,
    pub nitrogen: f32,
}

/// One cycle's worth of operator input: fuel makeup plus the two flows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleInput {
    pub fuel: FuelComposition,
    /// Total coal supplied to the boiler (tonnes/hour).
    pub coal_tph: f32,
    /// Total combustion air supplied (tonnes/hour).
    pub air_tph: f32,
}

// ---------------------------------------------------------------------------
// Derived quantities
// ---------------------------------------------------------------------------

/// Derived flow quantities for one cycle (all tonnes/hour).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombustionResult {
    /// Oxygen required for complete combustion at the current coal rate.
    pub oxygen_required_tph: f32,
    /// Theoretical minimum air to deliver that oxygen.
    pub minimum_air_tph: f32,
    /// Flue gas produced per unit mass of coal.
    pub flue_gas_tph: f32,
    /// Supplied air minus theoretical minimum (negative = deficit).
    pub excess_air_tph: f32,
}

/// Evaluate the full combustion balance for one cycle.
pub fn evaluate(input: &CycleInput) -> CombustionResult {
    let oxygen_required_tph = oxygen_required(&input.fuel) * input.coal_tph;
    let minimum_air_tph = minimum_air(oxygen_required_tph);

    CombustionResult {
        oxygen_required_tph,
        minimum_air_tph,
        flue_gas_tph: flue_gas(&input.fuel),
        excess_air_tph: input.air_tph - minimum_air_tph,
    }
}

/// Oxygen required per unit mass of coal for complete combustion.
/// Fuel-bound oxygen offsets the demand.
pub fn oxygen_required(fuel: &FuelComposition) -> f32 {
    O2_PER_CARBON * fuel.carbon + O2_PER_HYDROGEN * fuel.hydrogen + fuel.sulphur - fuel.oxygen
}

/// Theoretical minimum air for a given oxygen demand.
pub fn minimum_air(oxygen_needed: f32) -> f32 {
    AIR_PER_O2 * oxygen_needed
}

/// Flue gas produced per unit mass of coal.
pub fn flue_gas(fuel: &FuelComposition) -> f32 {
    (11.0 / 3.0) * fuel.carbon + 9.0 * fuel.hydrogen + 2.0 * fuel.sulphur + fuel.nitrogen
}

// ---------------------------------------------------------------------------
// Air balance classification
// ---------------------------------------------------------------------------

/// Three-way classification of supplied air against the theoretical minimum.
///
/// Stateless — re-derived every cycle with no hysteresis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirBalance {
    /// Supplied air is below the minimum — more combustion air needed.
    Deficit,
    /// Supplied air exceeds the minimum.
    Excess,
    /// Supplied air exactly matches the minimum.
    Balanced,
}

impl AirBalance {
    /// Classify supplied air against the theoretical minimum.
    ///
    /// Comparisons that are neither `<` nor `>` (including NaN operands,
    /// which unvalidated input can produce) map to `Balanced` — the state
    /// that stops the damper motor.
    pub fn classify(air_supplied_tph: f32, minimum_air_tph: f32) -> Self {
        if air_supplied_tph < minimum_air_tph {
            Self::Deficit
        } else if air_supplied_tph > minimum_air_tph {
            Self::Excess
        } else {
            Self::Balanced
        }
    }
}
