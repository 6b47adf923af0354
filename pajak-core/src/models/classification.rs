//! Sub-classifications that select a flat rate within one tax type.
//!
//! Each enum documents its fallback: an unrecognised code resolves to the
//! [`Default`] variant, which is the catch-all rate of that tax type.

code_enum! {
    /// PPh 22 transaction kind.
    pub enum Pph22Transaction: "PPh 22 transaction" {
        Import => "import",
        Export => "export",
        Other => "other",
    }
}

impl Default for Pph22Transaction {
    fn default() -> Self {
        Self::Other
    }
}

code_enum! {
    /// PPh 23 income kind: passive capital income or a service fee.
    pub enum Pph23Income: "PPh 23 income" {
        Royalty => "royalty",
        Dividend => "dividend",
        Prize => "prize",
        Service => "service",
        Management => "management",
        Consulting => "consulting",
        OtherService => "other_service",
    }
}

impl Default for Pph23Income {
    fn default() -> Self {
        Self::OtherService
    }
}

impl Pph23Income {
    /// Whether the income is capital income (15%) rather than a service fee (2%).
    pub fn is_capital_income(&self) -> bool {
        matches!(self, Self::Royalty | Self::Dividend | Self::Prize)
    }
}

code_enum! {
    /// Kind of supply subject to value-added tax.
    pub enum PpnSupply: "PPN supply" {
        Domestic => "domestic",
        Import => "import",
        Export => "export",
    }
}

impl Default for PpnSupply {
    fn default() -> Self {
        Self::Domestic
    }
}

code_enum! {
    /// Income paid to a non-resident. Treaty relief is not modelled, so
    /// every kind carries the same rate.
    pub enum Pph26Income: "PPh 26 income" {
        Dividend => "dividend",
        Interest => "interest",
        Royalty => "royalty",
        Service => "service",
        Salary => "salary",
        Prize => "prize",
        Other => "other",
    }
}

impl Default for Pph26Income {
    fn default() -> Self {
        Self::Other
    }
}

code_enum! {
    /// Business taxed on a deemed-profit basis under PPh 15.
    pub enum Pph15Business: "PPh 15 business" {
        Shipping => "shipping",
        Insurance => "insurance",
        BuildOperate => "buildoperate",
        Other => "other",
    }
}

impl Default for Pph15Business {
    fn default() -> Self {
        Self::Other
    }
}
