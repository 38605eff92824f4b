//! Self-contained interactive islands of the home page.

pub mod orbit;
pub mod magnetic;
pub mod calculator;

pub use calculator::{compute, CalculatorResult, CostRates, RoiCalculator};
pub use magnetic::{MagneticButton, MagneticConfig, PointerOffset};
pub use orbit::{OrbitError, OrbitNode, OrbitSelector, OrbitState};
