//! ROI calculator: roof area in square feet against two per-square-foot rates.
//!
//! `removal = area × 9`, `coating = area × 4.5`, `savings = removal − coating`.
//! The result is hidden until the visitor asks for it and hidden again
//! whenever the area changes.

use log::debug;
use serde::Serialize;

use crate::format::format_currency;

pub const AREA_MIN: u32 = 1_000;
pub const AREA_MAX: u32 = 50_000;
pub const AREA_STEP: u32 = 500;
pub const AREA_DEFAULT: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostRates {
    /// Tear-off and replacement, $/sq ft.
    pub removal: f64,
    /// Restoration coating, $/sq ft.
    pub coating: f64,
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            removal: 9.0,
            coating: 4.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculatorResult {
    pub area: u32,
    pub removal_cost: f64,
    pub coating_cost: f64,
    pub savings: f64,
}

impl CalculatorResult {
    pub fn removal_label(&self) -> String {
        format_currency(self.removal_cost)
    }

    pub fn coating_label(&self) -> String {
        format_currency(self.coating_cost)
    }

    pub fn savings_label(&self) -> String {
        format_currency(self.savings)
    }
}

fn clamp_area(area: u32) -> u32 {
    area.clamp(AREA_MIN, AREA_MAX)
}

/// Clamp then snap to the nearest step above the minimum.
pub fn snap_area(area: u32) -> u32 {
    let clamped = clamp_area(area);
    let steps = (clamped - AREA_MIN + AREA_STEP / 2) / AREA_STEP;
    clamp_area(AREA_MIN + steps * AREA_STEP)
}

/// Pure cost model. Out-of-range areas are clamped first.
pub fn compute(area: u32, rates: &CostRates) -> CalculatorResult {
    let area = clamp_area(area);
    let sq_ft = area as f64;
    let removal_cost = sq_ft * rates.removal;
    let coating_cost = sq_ft * rates.coating;
    CalculatorResult {
        area,
        removal_cost,
        coating_cost,
        savings: removal_cost - coating_cost,
    }
}

#[derive(Debug, Clone)]
pub struct RoiCalculator {
    area: u32,
    rates: CostRates,
    revealed: bool,
}

impl Default for RoiCalculator {
    fn default() -> Self {
        Self::new(CostRates::default())
    }
}

impl RoiCalculator {
    pub fn new(rates: CostRates) -> Self {
        Self {
            area: AREA_DEFAULT,
            rates,
            revealed: false,
        }
    }

    pub fn area(&self) -> u32 {
        self.area
    }

    pub fn rates(&self) -> &CostRates {
        &self.rates
    }

    /// Slider input. Hides the result only if the snapped value moved.
    pub fn set_area(&mut self, area: u32) -> u32 {
        let snapped = snap_area(area);
        if snapped != self.area {
            self.area = snapped;
            if self.revealed {
                debug!("calculator: area changed to {snapped}, hiding result");
            }
            self.revealed = false;
        }
        self.area
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Always current, regardless of reveal.
    pub fn result(&self) -> CalculatorResult {
        compute(self.area, &self.rates)
    }

    pub fn visible_result(&self) -> Option<CalculatorResult> {
        self.revealed.then(|| self.result())
    }
}
