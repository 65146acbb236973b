//! Printed body markings for disc capacitors: the three digit EIA
//! capacitance code plus an optional tolerance letter.

/// A capacitance parsed down to picofarads.
///
/// Accepts the usual suffix forms ("22pF", "100nF", "4.7uF", "4.7µF");
/// bare numbers without a unit are rejected rather than guessed at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacitorValue {
    pf: f64,
    valid: bool,
}

impl CapacitorValue {
    pub fn parse(text: &str) -> CapacitorValue {
        let invalid = CapacitorValue { pf: 0.0, valid: false };

        let s = text.trim().to_lowercase().replace(' ', "").replace('µ', "u");

        let (digits, factor) = if let Some(d) = s.strip_suffix("pf") {
            (d.to_owned(), 1.0)
        } else if let Some(d) = s.strip_suffix("nf") {
            (d.to_owned(), 1.0e3)
        } else if let Some(d) = s.strip_suffix("uf") {
            (d.to_owned(), 1.0e6)
        } else if let Some(d) = s.strip_suffix("mf") {
            (d.to_owned(), 1.0e9)
        } else {
            return invalid;
        };

        let Ok(value) = digits.parse::<f64>() else {
            return invalid;
        };

        let pf = value * factor;
        if !pf.is_finite() || pf < 0.0 {
            return invalid;
        }

        CapacitorValue { pf, valid: true }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn picofarads(&self) -> f64 {
        self.pf
    }

    /// The printed body code.
    ///
    /// Below 10 pF the literal value is printed (one decimal at most);
    /// from 10 pF up it is the standard two-significant-digits-plus-
    /// multiplier code, so 47 pF is "470" and 4.7 nF is "472".
    pub fn eia_code(&self) -> Option<String> {
        if !self.valid {
            return None;
        }

        let pf = self.pf;

        if pf < 10.0 {
            if (pf - pf.round()).abs() < 0.05 {
                return Some(format!("{}", pf.round() as i64));
            }
            let text = format!("{pf:.1}");
            let text = text.trim_end_matches('0').trim_end_matches('.');
            return Some(text.to_owned());
        }

        let value = pf.round();
        if value < 100.0 {
            return Some(format!("{:02}0", value as i64));
        }

        let mut exp = value.log10().floor() as i32;
        let mut scale = 10.0_f64.powi(exp - 1);
        let mut sig = (value / scale).round() as i64;
        while sig >= 100 {
            exp += 1;
            scale *= 10.0;
            sig = (value / scale).round() as i64;
        }

        let mult = exp - 1;
        if (0..=9).contains(&mult) {
            Some(format!("{sig:02}{mult}"))
        } else {
            None
        }
    }
}

/// Map a tolerance string onto its EIA letter, e.g. "±5%" to 'J'.
pub fn tolerance_letter(tolerance: &str) -> Option<char> {
    let key = tolerance
        .trim()
        .to_lowercase()
        .replace(' ', "")
        .replace('±', "+-")
        .replace('µ', "u")
        .replace('％', "%")
        .replace('−', "-")
        .replace("--", "-");

    match key.as_str() {
        "+-0.25pf" => Some('C'),
        "+-0.5pf" => Some('D'),
        "+-1pf" => Some('E'),
        "+-1%" => Some('F'),
        "+-2%" => Some('G'),
        "+-5%" => Some('J'),
        "+-10%" => Some('K'),
        "+-20%" => Some('M'),
        "+80%-20%" => Some('Z'),
        _ => None,
    }
}

/// Full body marking for a disc capacitor, or `None` when the
/// capacitance is missing or unusable.
pub fn disc_marking(capacitance: Option<&str>, tolerance: Option<&str>) -> Option<String> {
    let code = CapacitorValue::parse(capacitance?).eia_code()?;
    match tolerance.and_then(tolerance_letter) {
        Some(letter) => Some(format!("{code}{letter}")),
        None => Some(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== parsing tests ====================

    #[test]
    fn unit_suffixes_scale_to_picofarads() {
        assert_eq!(CapacitorValue::parse("22pF").picofarads(), 22.0);
        assert_eq!(CapacitorValue::parse("100nF").picofarads(), 100_000.0);
        assert_eq!(CapacitorValue::parse("4.7uF").picofarads(), 4_700_000.0);
        assert_eq!(CapacitorValue::parse("4.7µF").picofarads(), 4_700_000.0);
        assert_eq!(CapacitorValue::parse(" 10 nF ").picofarads(), 10_000.0);
    }

    #[test]
    fn unitless_and_junk_inputs_are_invalid() {
        assert!(!CapacitorValue::parse("100").is_valid());
        assert!(!CapacitorValue::parse("").is_valid());
        assert!(!CapacitorValue::parse("pf").is_valid());
        assert!(!CapacitorValue::parse("abcnf").is_valid());
        assert!(!CapacitorValue::parse("-5pf").is_valid());
    }

    // ==================== code tests ====================

    #[test]
    fn small_values_print_literally() {
        assert_eq!(CapacitorValue::parse("4pF").eia_code().as_deref(), Some("4"));
        assert_eq!(CapacitorValue::parse("4.7pF").eia_code().as_deref(), Some("4.7"));
        assert_eq!(CapacitorValue::parse("0.5pF").eia_code().as_deref(), Some("0.5"));
    }

    #[test]
    fn three_digit_codes() {
        assert_eq!(CapacitorValue::parse("22pF").eia_code().as_deref(), Some("220"));
        assert_eq!(CapacitorValue::parse("47pF").eia_code().as_deref(), Some("470"));
        assert_eq!(CapacitorValue::parse("68pF").eia_code().as_deref(), Some("680"));
        assert_eq!(CapacitorValue::parse("100pF").eia_code().as_deref(), Some("101"));
        assert_eq!(CapacitorValue::parse("4.7nF").eia_code().as_deref(), Some("472"));
        assert_eq!(CapacitorValue::parse("100nF").eia_code().as_deref(), Some("104"));
        assert_eq!(CapacitorValue::parse("2.2uF").eia_code().as_deref(), Some("225"));
    }

    #[test]
    fn invalid_values_have_no_code() {
        assert_eq!(CapacitorValue::parse("watt").eia_code(), None);
    }

    // ==================== tolerance tests ====================

    #[test]
    fn tolerance_spellings_normalise() {
        assert_eq!(tolerance_letter("±5%"), Some('J'));
        assert_eq!(tolerance_letter("+-5%"), Some('J'));
        assert_eq!(tolerance_letter(" +- 10 % "), Some('K'));
        assert_eq!(tolerance_letter("±0.25pF"), Some('C'));
        assert_eq!(tolerance_letter("+80%-20%"), Some('Z'));
        assert_eq!(tolerance_letter("1.5%"), None);
    }

    #[test]
    fn marking_combines_code_and_letter() {
        assert_eq!(disc_marking(Some("47nF"), Some("5%")).as_deref(), Some("473"));
        assert_eq!(disc_marking(Some("47nF"), Some("±5%")).as_deref(), Some("473J"));
        assert_eq!(disc_marking(Some("47nF"), None).as_deref(), Some("473"));
        assert_eq!(disc_marking(None, Some("±5%")), None);
        assert_eq!(disc_marking(Some("x"), None), None);
    }
}
