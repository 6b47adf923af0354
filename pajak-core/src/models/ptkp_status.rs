code_enum! {
    /// Personal status used to select the non-taxable allowance (PTKP).
    ///
    /// `TK` is unmarried (*tidak kawin*), `K` is married (*kawin*); the
    /// number is the count of dependents, capped at three.
    pub enum PtkpStatus: "PTKP status" {
        Tk0 => "TK/0",
        Tk1 => "TK/1",
        Tk2 => "TK/2",
        Tk3 => "TK/3",
        K0 => "K/0",
        K1 => "K/1",
        K2 => "K/2",
        K3 => "K/3",
    }
}

impl PtkpStatus {
    pub fn is_married(&self) -> bool {
        matches!(self, Self::K0 | Self::K1 | Self::K2 | Self::K3)
    }

    pub fn dependents(&self) -> u8 {
        match self {
            Self::Tk0 | Self::K0 => 0,
            Self::Tk1 | Self::K1 => 1,
            Self::Tk2 | Self::K2 => 2,
            Self::Tk3 | Self::K3 => 3,
        }
    }

    /// Indonesian description as shown on the allowance form.
    pub fn description(&self) -> String {
        let marital = if self.is_married() {
            "Kawin"
        } else {
            "Tidak Kawin"
        };
        format!("{marital}, {} Tanggungan", self.dependents())
    }
}

/// Unmarried with no dependents, the base allowance tier.
impl Default for PtkpStatus {
    fn default() -> Self {
        Self::Tk0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{ClosedCode, UnknownCodeError};

    #[test]
    fn parse_accepts_every_statutory_code() {
        for status in PtkpStatus::all() {
            assert_eq!(PtkpStatus::parse(status.as_str()), Some(*status));
        }
    }

    #[test]
    fn parse_ignores_surrounding_whitespace() {
        assert_eq!(PtkpStatus::parse("  K/2 "), Some(PtkpStatus::K2));
    }

    #[test]
    fn from_str_rejects_unknown_code() {
        let result = "K/4".parse::<PtkpStatus>();

        assert_eq!(result, Err(UnknownCodeError::new("PTKP status", "K/4")));
    }

    #[test]
    fn parse_or_default_falls_back_to_tk0() {
        assert_eq!(PtkpStatus::parse_or_default("HB/0"), PtkpStatus::Tk0);
        assert_eq!(PtkpStatus::parse_or_default("K/3"), PtkpStatus::K3);
    }

    #[test]
    fn married_and_dependents_are_derived_from_code() {
        assert!(PtkpStatus::K1.is_married());
        assert!(!PtkpStatus::Tk3.is_married());
        assert_eq!(PtkpStatus::K2.dependents(), 2);
        assert_eq!(PtkpStatus::Tk0.dependents(), 0);
    }

    #[test]
    fn description_reads_like_the_form_option() {
        assert_eq!(PtkpStatus::Tk1.description(), "Tidak Kawin, 1 Tanggungan");
        assert_eq!(PtkpStatus::K3.description(), "Kawin, 3 Tanggungan");
    }

    #[test]
    fn display_matches_code() {
        assert_eq!(PtkpStatus::K0.to_string(), "K/0");
    }
}
