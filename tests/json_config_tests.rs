#![cfg(feature = "json")]

use rust_decimal_macros::dec;
use vat_calculator::*;

fn config(json: &str) -> JsonConfig {
    JsonConfig::from_json(json).unwrap()
}

#[test]
fn override_from_document() {
    let cfg = config(r#"{"vat_calculator": {"rules": {"DE": 0.50}}}"#);
    let mut calc = VatCalculator::new(cfg);

    assert_eq!(calc.calculate(dec!(24.00), Some("DE"), None).unwrap(), dec!(36.00));
    assert_eq!(calc.tax_rate(), dec!(0.50));
    assert_eq!(calc.last_calculation().unwrap().source, RateSource::Configuration);
}

#[test]
fn missing_rule_falls_back_to_table() {
    let cfg = config(r#"{"vat_calculator": {"rules": {"FR": "0.055"}}}"#);
    let mut calc = VatCalculator::new(cfg);

    assert_eq!(calc.calculate(dec!(24.00), Some("DE"), None).unwrap(), dec!(28.56));
    assert_eq!(calc.calculate(dec!(100.00), Some("FR"), None).unwrap(), dec!(105.50));
}

#[test]
fn empty_document_uses_table() {
    let calc = VatCalculator::new(config("{}"));
    assert_eq!(calc.get_tax_rate_for_country("NL", false).unwrap(), dec!(0.21));
}

#[test]
fn null_rule_counts_as_present() {
    // The key exists, so the table is skipped and the default of zero applies.
    let calc = VatCalculator::new(config(r#"{"vat_calculator": {"rules": {"DE": null}}}"#));
    assert_eq!(calc.get_tax_rate_for_country("DE", false).unwrap(), dec!(0));
}

#[test]
fn invalid_rate_propagates() {
    let cfg = config(r#"{"vat_calculator": {"rules": {"DE": "nineteen"}}}"#);
    let mut calc = VatCalculator::new(cfg);

    let err = calc.calculate(dec!(24.00), Some("DE"), None).unwrap_err();
    match err {
        CalculateError::Config(ConfigError::InvalidRate { key, value }) => {
            assert_eq!(key, "vat_calculator.rules.DE");
            assert_eq!(value, "nineteen");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(calc.last_calculation().is_none());
}

#[test]
fn boolean_rate_rejected() {
    let cfg = config(r#"{"vat_calculator": {"rules": {"DE": true}}}"#);
    let err = VatCalculator::new(cfg)
        .get_tax_rate_for_country("DE", false)
        .unwrap_err();
    assert_eq!(err.to_string(), "invalid rate for 'vat_calculator.rules.DE': true");
}

#[test]
fn malformed_document() {
    let err = JsonConfig::from_json("{\"vat_calculator\":").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn company_skips_broken_document() {
    let cfg = config(r#"{"vat_calculator": {"rules": {"DE": "nineteen"}}}"#);
    let mut calc = VatCalculator::new(cfg);
    assert_eq!(calc.calculate(dec!(24.00), Some("DE"), Some(true)).unwrap(), dec!(24.00));
}

#[test]
fn from_value() {
    let cfg = JsonConfig::from_value(serde_json::json!({
        "vat_calculator": { "rules": { "AT": 0.1 } }
    }));
    let calc = VatCalculator::new(cfg);
    assert_eq!(calc.get_tax_rate_for_country("AT", false).unwrap(), dec!(0.1));
}
