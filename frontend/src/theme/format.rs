//! Locale-aware display formatting for chart labels and tooltips.

use num_format::{Locale, ToFormattedString};

const LOCALE: Locale = Locale::en_ZA;

/// Rounds to at most `max_frac` fraction digits, grouping the integer part
/// with the locale separator and trimming trailing fraction zeros.
pub fn number(value: f64, max_frac: u32) -> String {
    let factor = 10f64.powi(max_frac as i32) as i128;
    let scaled = (value.abs() * factor as f64).round() as i128;
    let int_part = scaled / factor;
    let frac_part = scaled % factor;

    let mut out = String::new();
    if value < 0.0 && scaled != 0 {
        out.push_str(LOCALE.minus_sign());
    }
    out.push_str(&int_part.to_formatted_string(&LOCALE));
    if frac_part != 0 {
        let digits = format!("{:0width$}", frac_part, width = max_frac as usize);
        let digits = digits.trim_end_matches('0');
        out.push_str(LOCALE.decimal());
        out.push_str(digits);
    }
    out
}

/// Rand amounts, e.g. `R1 234,50`.
pub fn currency(value: f64, max_frac: u32) -> String {
    format!("R{}", number(value, max_frac))
}

/// Percentage of a unit fraction: `0.125` renders as `12,5%`.
pub fn percent(value: f64, max_frac: u32) -> String {
    format!("{}%", number(value * 100.0, max_frac))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sep() -> &'static str {
        LOCALE.separator()
    }

    fn dec() -> &'static str {
        LOCALE.decimal()
    }

    #[test]
    fn number_groups_the_integer_part() {
        assert_eq!(number(1234567.0, 0), format!("1{s}234{s}567", s = sep()));
    }

    #[test]
    fn number_rounds_to_max_fraction_digits() {
        assert_eq!(number(1234.567, 2), format!("1{}234{}57", sep(), dec()));
        assert_eq!(number(1234.567, 0), format!("1{}235", sep()));
    }

    #[test]
    fn number_trims_trailing_fraction_zeros() {
        assert_eq!(number(12.5, 2), format!("12{}5", dec()));
        assert_eq!(number(12.0, 2), "12");
    }

    #[test]
    fn number_keeps_the_sign_out_of_the_grouping() {
        assert_eq!(
            number(-1234.5, 1),
            format!("{m}1{s}234{d}5", m = LOCALE.minus_sign(), s = sep(), d = dec())
        );
    }

    #[test]
    fn currency_prefixes_the_rand_symbol() {
        assert_eq!(currency(1500.0, 0), format!("R1{}500", sep()));
    }

    #[test]
    fn percent_scales_unit_fractions() {
        assert_eq!(percent(0.125, 1), format!("12{}5%", dec()));
        assert_eq!(percent(0.4, 0), "40%");
    }
}
