//! Physical constants of the reactor model.
//!
//! Units follow the textbook problem the diagram is built on: volumes in dm³,
//! energies in cal, concentrations in mol/dm³.

/// Volumetric flow rate (dm³/s)
pub const FLOW_RATE: f64 = 100.0;

/// Density of the reacting mixture (kg/dm³)
pub const DENSITY: f64 = 0.8;

/// Heat capacity of the reacting mixture (cal/(g·K))
pub const HEAT_CAPACITY: f64 = 2.0;

/// Heat transfer area of the cooling jacket (dm²)
pub const HEAT_TRANSFER_AREA: f64 = 8.94;

/// Heat of reaction (cal/mol); exothermic
pub const HEAT_OF_REACTION: f64 = -15000.0;

/// Coolant temperature (K)
pub const COOLANT_TEMP: f64 = 310.0;

/// Pre-exponential factor of the forward reaction (1/s)
pub const FORWARD_PREEXPONENTIAL: f64 = 1.0e11;

/// Activation energy of the forward reaction (cal/mol)
pub const FORWARD_ACTIVATION_ENERGY: f64 = 20000.0;

/// Activation energy of the reverse reaction (cal/mol)
pub const REVERSE_ACTIVATION_ENERGY: f64 = 24000.0;

/// Gas constant (cal/(mol·K))
pub const GAS_CONSTANT_CAL: f64 = 1.987;

/// Feed concentration of the reactant (mol/dm³)
pub const FEED_CONCENTRATION: f64 = 0.01;

/// mol/dm³ to mmol/dm³
pub const MILLIMOLAR: f64 = 1000.0;
