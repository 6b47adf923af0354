code_enum! {
    /// Business category selecting the deemed net-income norm (NPPN) for
    /// taxpayers without full bookkeeping.
    pub enum NormCategory: "NPPN category" {
        Retail => "retail",
        Manufacturing => "manufacturing",
        Service => "service",
        Professional => "professional",
        Agriculture => "agriculture",
        Other => "other",
    }
}

impl Default for NormCategory {
    fn default() -> Self {
        Self::Other
    }
}

impl NormCategory {
    /// Indonesian business description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Retail => "Perdagangan Eceran",
            Self::Manufacturing => "Industri Pengolahan",
            Self::Service => "Jasa Umum",
            Self::Professional => "Jasa Profesional",
            Self::Agriculture => "Pertanian",
            Self::Other => "Lainnya",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::ClosedCode;

    #[test]
    fn unknown_category_defaults_to_other() {
        assert_eq!(NormCategory::parse_or_default("mining"), NormCategory::Other);
    }

    #[test]
    fn codes_round_trip_through_parse() {
        for category in NormCategory::all() {
            assert_eq!(category.as_str().parse::<NormCategory>(), Ok(*category));
        }
    }
}
