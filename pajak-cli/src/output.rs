//! Plain-text rendering of results and rate tables.

use pajak_core::calculations::allowance::allowance;
use pajak_core::calculations::common::{percent, round_rupiah};
use pajak_core::calculations::flat_rate::FlatRated;
use pajak_core::calculations::norm::norm_ratio;
use pajak_core::calculations::progressive::ProgressiveSchedule;
use pajak_core::calculations::rates::umkm_final_rate;
use pajak_core::{
    CalculationResult, ClosedCode, NormCategory, Pph15Business, Pph22Transaction, Pph23Income,
    Pph26Income, PpnSupply, PtkpStatus, TaxKind,
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use separator::Separatable;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

/// Formats an amount the Indonesian way, rounded to whole rupiah.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pajak_cli::output::format_rupiah;
///
/// assert_eq!(format_rupiah(dec!(1234567)), "Rp 1.234.567");
/// ```
pub fn format_rupiah(amount: Decimal) -> String {
    let rounded = round_rupiah(amount);
    // Separatable groups with commas; rupiah uses dots.
    let digits = match rounded.abs().to_u64() {
        Some(whole) => whole.separated_string().replace(',', "."),
        None => rounded.abs().to_string(),
    };

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-Rp {digits}")
    } else {
        format!("Rp {digits}")
    }
}

#[derive(Tabled)]
struct AmountRow {
    #[tabled(rename = "Keterangan")]
    label: String,
    #[tabled(rename = "Jumlah")]
    amount: String,
}

#[derive(Tabled)]
struct RateRow {
    #[tabled(rename = "Objek")]
    subject: String,
    #[tabled(rename = "Tarif")]
    rate: String,
}

#[derive(Tabled)]
struct CodeRow {
    #[tabled(rename = "Kode")]
    code: &'static str,
    #[tabled(rename = "Keterangan")]
    description: String,
    #[tabled(rename = "Nilai")]
    value: String,
}

/// Rounded table with the last (numeric) column right-aligned.
fn table<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(T::LENGTH - 1..)).with(Alignment::right()))
        .to_string()
}

fn amount_rows<'a>(pairs: impl Iterator<Item = (&'a str, Decimal)>) -> Vec<AmountRow> {
    pairs
        .map(|(label, amount)| AmountRow {
            label: label.to_string(),
            amount: format_rupiah(amount),
        })
        .collect()
}

/// Named outputs first, then the calculation steps.
pub fn render_result(result: &CalculationResult) -> String {
    let outputs = amount_rows(result.outputs.iter().map(|o| (o.name.as_str(), o.amount)));
    let steps = amount_rows(result.steps.iter().map(|s| (s.label.as_str(), s.value)));

    format!(
        "{}\n{}\n\nRincian Perhitungan\n{}\n",
        result.tax.title(),
        table(outputs),
        table(steps),
    )
}

fn rate(value: Decimal) -> String {
    format!("{}%", percent(value))
}

fn rate_rows<C: ClosedCode + FlatRated>() -> Vec<RateRow> {
    C::all()
        .iter()
        .map(|c| RateRow {
            subject: c.as_str().to_string(),
            rate: rate(c.rate()),
        })
        .collect()
}

fn section(
    sections: &mut Vec<String>,
    title: &str,
    body: String,
) {
    sections.push(format!("{title}\n{body}\n"));
}

/// Every statutory table the calculators use.
pub fn render_rates() -> String {
    let mut sections = Vec::new();

    let ptkp = PtkpStatus::all().iter().map(|s| CodeRow {
        code: s.as_str(),
        description: s.description(),
        value: format_rupiah(allowance(*s)),
    });
    section(&mut sections, "PTKP (Penghasilan Tidak Kena Pajak)", table(ptkp));

    let brackets = ProgressiveSchedule::pph17().brackets().iter().map(|b| {
        let subject = match b.upper_bound {
            Some(upper) => format!(
                "{} s.d. {}",
                format_rupiah(b.lower_bound),
                format_rupiah(upper)
            ),
            None => format!("di atas {}", format_rupiah(b.lower_bound)),
        };
        RateRow {
            subject,
            rate: rate(b.rate),
        }
    });
    section(&mut sections, TaxKind::Pph17.title(), table(brackets));

    let norms = NormCategory::all().iter().map(|c| CodeRow {
        code: c.as_str(),
        description: c.description().to_string(),
        value: rate(norm_ratio(*c)),
    });
    section(&mut sections, "Norma Penghitungan Penghasilan Neto", table(norms));

    section(&mut sections, TaxKind::Pph22.title(), table(rate_rows::<Pph22Transaction>()));
    section(&mut sections, TaxKind::Pph23.title(), table(rate_rows::<Pph23Income>()));
    section(&mut sections, TaxKind::Ppn.title(), table(rate_rows::<PpnSupply>()));
    section(&mut sections, TaxKind::Pph26.title(), table(rate_rows::<Pph26Income>()));
    section(&mut sections, TaxKind::Pph15.title(), table(rate_rows::<Pph15Business>()));
    section(
        &mut sections,
        TaxKind::PphFinalUmkm.title(),
        table([RateRow {
            subject: "peredaran bruto".to_string(),
            rate: rate(umkm_final_rate()),
        }]),
    );

    sections.join("\n")
}

#[cfg(test)]
mod tests {
    use pajak_core::{pph21, pph23};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =====================================================================
    // format_rupiah
    // =====================================================================

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_rupiah(dec!(0)), "Rp 0");
        assert_eq!(format_rupiah(dec!(999)), "Rp 999");
        assert_eq!(format_rupiah(dec!(1000)), "Rp 1.000");
        assert_eq!(format_rupiah(dec!(54000000)), "Rp 54.000.000");
        assert_eq!(format_rupiah(dec!(123456789012)), "Rp 123.456.789.012");
    }

    #[test]
    fn fractions_round_half_away_from_zero() {
        assert_eq!(format_rupiah(dec!(1234.5)), "Rp 1.235");
        assert_eq!(format_rupiah(dec!(100000000.0)), "Rp 100.000.000");
    }

    #[test]
    fn negative_amount_keeps_sign() {
        assert_eq!(format_rupiah(dec!(-1500)), "-Rp 1.500");
        assert_eq!(format_rupiah(dec!(-0.4)), "Rp 0");
    }

    #[test]
    fn amount_beyond_u64_falls_back_to_plain_digits() {
        assert_eq!(format_rupiah(Decimal::MAX), format!("Rp {}", Decimal::MAX));
    }

    // =====================================================================
    // Tables
    // =====================================================================

    fn split_sections(rendered: &str) -> (&str, &str) {
        rendered
            .split_once("Rincian Perhitungan")
            .expect("steps heading present")
    }

    #[test]
    fn result_lists_outputs_before_steps() {
        let rendered = render_result(&pph23(dec!(10000000), Pph23Income::Royalty));
        let (outputs, steps) = split_sections(&rendered);

        assert!(outputs.starts_with("PPh Pasal 23\n"));
        assert!(outputs.contains("Keterangan"));
        assert!(outputs.contains("Rp 1.500.000"));
        assert!(!outputs.contains("Dasar Pengenaan Pajak"));
        assert!(steps.contains("Dasar Pengenaan Pajak"));
        assert!(steps.contains("Rp 10.000.000"));
        assert!(steps.contains("Tarif PPh 23 (15%)"));
    }

    #[test]
    fn amounts_are_right_aligned() {
        let rendered = render_result(&pph23(dec!(10000000), Pph23Income::Royalty));
        let (_, steps) = split_sections(&rendered);

        let tax_line = steps
            .lines()
            .find(|l| l.contains("Tarif PPh 23"))
            .expect("rate step row");
        assert!(tax_line.ends_with("  Rp 1.500.000 │"), "{tax_line}");
    }

    #[test]
    fn tables_use_rounded_borders() {
        let rendered = render_result(&pph23(dec!(1000), Pph23Income::Royalty));

        assert!(rendered.contains('╭'));
        assert!(rendered.contains('╯'));
    }

    #[test]
    fn pph21_result_shows_both_periods() {
        let rendered = render_result(&pph21(dec!(10000000), PtkpStatus::Tk0));

        assert!(rendered.contains("PPh 21 Bulanan"));
        assert!(rendered.contains("Rp 408.333"));
        assert!(rendered.contains("Rp 4.900.000"));
        assert!(rendered.contains("Lapisan 1 (5%)"));
    }

    #[test]
    fn rates_cover_every_table() {
        let rendered = render_rates();

        let ptkp_row = rendered
            .lines()
            .find(|l| l.contains("K/3"))
            .expect("K/3 row");
        assert!(ptkp_row.contains("Kawin, 3 Tanggungan"));
        assert!(ptkp_row.contains("Rp 72.000.000"));
        assert!(rendered.contains("Rp 72.000.000"));
        assert!(rendered.contains("di atas Rp 500.000.000"));
        assert!(rendered.contains("Jasa Profesional"));
        assert!(rendered.contains("buildoperate"));
        assert!(rendered.contains("0.25%"));
        assert!(rendered.contains("peredaran bruto"));
        for &kind in TaxKind::all() {
            if !matches!(kind, TaxKind::Pph21 | TaxKind::Pph17Nppn) {
                assert!(rendered.contains(kind.title()), "missing {kind}");
            }
        }
    }
}
