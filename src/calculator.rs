//! MgO Dosing Calculator
//!
//! Mass of MgO to weigh so the dosing pump delivers the target Mg:P molar
//! ratio against the phosphate load of the incoming digestate.

const MOLAR_MASS_PO4: f64 = 94.9714;
const MOLAR_MASS_MGO: f64 = 40.3044;

/// PO₄ expressed as P → PO₄
const PO4_PER_P: f64 = 3.066;

pub const DEFAULT_MG_RATIO: &str = "1.2";
pub const DEFAULT_MGO_PURITY: &str = "98.3";

/// How the PO₄ concentration was reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Po4Basis {
    /// mg/L as PO₄³⁻
    #[default]
    Phosphate,
    /// mg/L as P
    Phosphorus,
}

impl Po4Basis {
    pub fn from_value(value: &str) -> Self {
        match value {
            "po4p" => Po4Basis::Phosphorus,
            _ => Po4Basis::Phosphate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DosingInput {
    /// mL/min
    pub flow_digestate: f64,
    /// mg/L
    pub po4_concentration: f64,
    pub po4_basis: Po4Basis,
    /// mL/min
    pub flow_mgo: f64,
    pub mg_ratio: f64,
    /// mL
    pub prep_volume: f64,
    /// %
    pub mgo_purity: f64,
    /// %, `NaN` when not given
    pub efficiency: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DosingResult {
    /// mmol/min
    pub molar_flow_po4: f64,
    /// mmol/min
    pub required_molar_flow_mgo: f64,
    /// g/L
    pub required_conc_mgo: f64,
    /// g, after purity and efficiency
    pub final_mass: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    InvalidInput,
    InvalidPurity,
}

/// Browser-style number parsing: blank or non-numeric input is `NaN`
pub fn parse_number(text: &str) -> f64 {
    text.trim().replace(',', ".").parse().unwrap_or(f64::NAN)
}

pub fn compute(input: &DosingInput) -> Result<DosingResult, CalcError> {
    let required = [
        input.flow_digestate,
        input.po4_concentration,
        input.flow_mgo,
        input.mg_ratio,
        input.prep_volume,
        input.mgo_purity,
    ];
    if required.iter().any(|v| v.is_nan()) {
        return Err(CalcError::InvalidInput);
    }
    if input.mgo_purity <= 0.0 || input.mgo_purity > 100.0 {
        return Err(CalcError::InvalidPurity);
    }

    let po4 = match input.po4_basis {
        Po4Basis::Phosphate => input.po4_concentration,
        Po4Basis::Phosphorus => input.po4_concentration * PO4_PER_P,
    };

    let molar_flow_po4 = (po4 / MOLAR_MASS_PO4) * (input.flow_digestate / 1000.0);
    let required_molar_flow_mgo = molar_flow_po4 * input.mg_ratio;
    let required_conc_mmol = required_molar_flow_mgo / (input.flow_mgo / 1000.0);
    let required_conc_mgo = required_conc_mmol * MOLAR_MASS_MGO / 1000.0;
    let pure_mass = required_conc_mgo * (input.prep_volume / 1000.0);

    let mut final_mass = pure_mass / (input.mgo_purity / 100.0);
    let efficiency = if input.efficiency.is_nan() || input.efficiency <= 0.0 {
        1.0
    } else {
        input.efficiency / 100.0
    };
    if efficiency < 1.0 {
        final_mass /= efficiency;
    }

    if !required_conc_mgo.is_finite() || !final_mass.is_finite() {
        return Err(CalcError::InvalidInput);
    }
    Ok(DosingResult {
        molar_flow_po4,
        required_molar_flow_mgo,
        required_conc_mgo,
        final_mass,
    })
}

impl DosingResult {
    /// Worked steps shown under the result
    pub fn steps(&self) -> [String; 4] {
        [
            format!("1. Flujo molar PO₄³⁻: {:.4} mmol/min", self.molar_flow_po4),
            format!("2. Flujo molar MgO req.: {:.4} mmol/min", self.required_molar_flow_mgo),
            format!("3. Concentración MgO req.: {:.4} g/L", self.required_conc_mgo),
            format!("4. Masa Final a Pesar: {:.4} g", self.final_mass),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> DosingInput {
        DosingInput {
            flow_digestate: 100.0,
            po4_concentration: 949.714,
            po4_basis: Po4Basis::Phosphate,
            flow_mgo: 10.0,
            mg_ratio: 1.0,
            prep_volume: 1000.0,
            mgo_purity: 100.0,
            efficiency: f64::NAN,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_reference_case() {
        let result = compute(&input()).unwrap();
        // 10 mmol/L of PO4 at 0.1 L/min -> 1 mmol/min
        assert!(close(result.molar_flow_po4, 1.0));
        assert!(close(result.required_molar_flow_mgo, 1.0));
        // 1 mmol/min into 0.01 L/min -> 100 mmol/L -> 4.03044 g/L
        assert!(close(result.required_conc_mgo, 4.03044));
        assert!(close(result.final_mass, 4.03044));
    }

    #[test]
    fn test_purity_and_efficiency_increase_mass() {
        let mut dosing = input();
        dosing.mgo_purity = 50.0;
        assert!(close(compute(&dosing).unwrap().final_mass, 8.06088));

        dosing.efficiency = 50.0;
        assert!(close(compute(&dosing).unwrap().final_mass, 16.12176));

        // Full or nonsensical efficiency is ignored
        dosing.efficiency = 120.0;
        assert!(close(compute(&dosing).unwrap().final_mass, 8.06088));
        dosing.efficiency = 0.0;
        assert!(close(compute(&dosing).unwrap().final_mass, 8.06088));
    }

    #[test]
    fn test_phosphorus_basis() {
        let mut dosing = input();
        dosing.po4_basis = Po4Basis::Phosphorus;
        assert!(close(compute(&dosing).unwrap().molar_flow_po4, 3.066));
    }

    #[test]
    fn test_invalid_inputs() {
        let mut dosing = input();
        dosing.flow_mgo = parse_number("");
        assert_eq!(compute(&dosing), Err(CalcError::InvalidInput));

        let mut dosing = input();
        dosing.mgo_purity = 100.5;
        assert_eq!(compute(&dosing), Err(CalcError::InvalidPurity));
        dosing.mgo_purity = 0.0;
        assert_eq!(compute(&dosing), Err(CalcError::InvalidPurity));

        let mut dosing = input();
        dosing.flow_mgo = 0.0;
        assert_eq!(compute(&dosing), Err(CalcError::InvalidInput));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 1.5 "), 1.5);
        assert_eq!(parse_number("98,3"), 98.3);
        assert!(parse_number("abc").is_nan());
    }

    #[test]
    fn test_steps() {
        let steps = compute(&input()).unwrap().steps();
        assert_eq!(steps[3], "4. Masa Final a Pesar: 4.0304 g");
    }
}
