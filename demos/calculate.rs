use rust_decimal_macros::dec;
use vat_calculator::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Built-in Rates ===\n");

    let mut calc = VatCalculator::new(Rules::new());
    for country in ["DE", "AT", "HU", "US"] {
        let gross = calc.calculate(dec!(24.00), Some(country), None).unwrap_or_default();
        println!(
            "  {country}: net=24.00 rate={} tax={} gross={gross}",
            calc.tax_rate(),
            calc.tax_value()
        );
    }

    println!("\n=== Configuration Override ===\n");

    let config = JsonConfig::from_json(r#"{"vat_calculator": {"rules": {"DE": 0.50}}}"#)?;
    let mut calc = VatCalculator::new(config);
    calc.set_country_code("DE");
    let gross = calc.calculate(dec!(24.00), None, None)?;
    println!("  DE: rate={} tax={} gross={gross}", calc.tax_rate(), calc.tax_value());

    println!("\n=== Reverse Charge ===\n");

    let gross = calc.calculate(dec!(24.00), None, Some(true))?;
    println!("  DE (company): rate={} tax={} gross={gross}", calc.tax_rate(), calc.tax_value());

    if let Some(last) = calc.last_calculation() {
        println!("\n  last calculation source: {}", last.source);
    }

    Ok(())
}
