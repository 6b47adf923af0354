//! Statutory flat rates, one table per tax type.
//!
//! | Tax type       | Classification                                   | Rate  | Strips VAT |
//! |----------------|--------------------------------------------------|-------|------------|
//! | PPh 22         | import                                           | 7.5%  | yes        |
//! |                | export                                           | 0.25% | no         |
//! |                | other                                            | 1.5%  | yes        |
//! | PPh 23         | royalty, dividend, prize                         | 15%   | no         |
//! |                | service, management, consulting, other_service   | 2%    | no         |
//! | PPN            | domestic, import                                 | 10%   | no         |
//! |                | export                                           | 0%    | no         |
//! | PPh Final UMKM | gross turnover                                   | 0.5%  | no         |
//! | PPh 26         | any                                              | 20%   | no         |
//! | PPh 15         | shipping / insurance / buildoperate / other      | 1.2% / 1% / 6% / 3% | no |

use rust_decimal::Decimal;

use crate::calculations::flat_rate::FlatRated;
use crate::models::{Pph15Business, Pph22Transaction, Pph23Income, Pph26Income, PpnSupply};

/// Final tax on small-business gross turnover.
pub fn umkm_final_rate() -> Decimal {
    Decimal::new(5, 3)
}

impl FlatRated for Pph22Transaction {
    fn rate(&self) -> Decimal {
        match self {
            Self::Import => Decimal::new(75, 3),
            Self::Export => Decimal::new(25, 4),
            Self::Other => Decimal::new(15, 3),
        }
    }

    fn strips_included_vat(&self) -> bool {
        matches!(self, Self::Import | Self::Other)
    }
}

impl FlatRated for Pph23Income {
    fn rate(&self) -> Decimal {
        if self.is_capital_income() {
            Decimal::new(15, 2)
        } else {
            Decimal::new(2, 2)
        }
    }
}

impl FlatRated for PpnSupply {
    fn rate(&self) -> Decimal {
        match self {
            Self::Domestic | Self::Import => Decimal::new(10, 2),
            Self::Export => Decimal::ZERO,
        }
    }
}

impl FlatRated for Pph26Income {
    fn rate(&self) -> Decimal {
        Decimal::new(20, 2)
    }
}

impl FlatRated for Pph15Business {
    fn rate(&self) -> Decimal {
        match self {
            Self::Shipping => Decimal::new(12, 3),
            Self::Insurance => Decimal::new(1, 2),
            Self::BuildOperate => Decimal::new(6, 2),
            Self::Other => Decimal::new(3, 2),
        }
    }
}
