#[macro_use]
mod code;

mod calculation;
mod classification;
mod norm_category;
mod ptkp_status;
mod tax_bracket;

pub use calculation::{CalculationResult, CalculationStep, TaxKind, TaxOutput};
pub use classification::{Pph15Business, Pph22Transaction, Pph23Income, Pph26Income, PpnSupply};
pub use code::{ClosedCode, UnknownCodeError};
pub use norm_category::NormCategory;
pub use ptkp_status::PtkpStatus;
pub use tax_bracket::TaxBracket;
