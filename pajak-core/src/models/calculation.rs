use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

code_enum! {
    /// Statutory tax type handled by one calculator.
    pub enum TaxKind: "tax type" {
        Pph21 => "pph21",
        Pph17 => "pph17",
        Pph17Nppn => "pph17-nppn",
        Pph22 => "pph22",
        Pph23 => "pph23",
        Ppn => "ppn",
        PphFinalUmkm => "pph-final-umkm",
        Pph26 => "pph26",
        Pph15 => "pph15",
    }
}

impl TaxKind {
    /// Title shown above a calculation result.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Pph21 => "PPh Pasal 21",
            Self::Pph17 => "PPh Pasal 17",
            Self::Pph17Nppn => "PPh Pasal 17 dengan NPPN",
            Self::Pph22 => "PPh Pasal 22",
            Self::Pph23 => "PPh Pasal 23",
            Self::Ppn => "PPN",
            Self::PphFinalUmkm => "PPh Final UMKM",
            Self::Pph26 => "PPh Pasal 26",
            Self::Pph15 => "PPh Pasal 15",
        }
    }
}

/// One labelled line of the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationStep {
    pub label: String,
    pub value: Decimal,
}

/// A named final amount, e.g. the monthly and the annual PPh 21.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxOutput {
    pub name: String,
    pub amount: Decimal,
}

/// Outcome of one calculator: the named amounts plus the ordered trace
/// that produced them.
///
/// The trace is informational; nothing downstream recomputes from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub tax: TaxKind,
    pub outputs: Vec<TaxOutput>,
    pub steps: Vec<CalculationStep>,
}

impl CalculationResult {
    pub(crate) fn new(tax: TaxKind) -> Self {
        Self {
            tax,
            outputs: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub(crate) fn push_step(
        &mut self,
        label: impl Into<String>,
        value: Decimal,
    ) {
        self.steps.push(CalculationStep {
            label: label.into(),
            value,
        });
    }

    pub(crate) fn push_output(
        &mut self,
        name: impl Into<String>,
        amount: Decimal,
    ) {
        self.outputs.push(TaxOutput {
            name: name.into(),
            amount,
        });
    }

    /// The primary amount: the first output of the calculator.
    pub fn amount(&self) -> Decimal {
        self.outputs
            .first()
            .map_or(Decimal::ZERO, |output| output.amount)
    }

    /// Looks up an output by name.
    pub fn output(
        &self,
        name: &str,
    ) -> Option<Decimal> {
        self.outputs
            .iter()
            .find(|output| output.name == name)
            .map(|output| output.amount)
    }

    /// Looks up the first trace step with the given label.
    pub fn step(
        &self,
        label: &str,
    ) -> Option<Decimal> {
        self.steps
            .iter()
            .find(|step| step.label == label)
            .map(|step| step.value)
    }
}
