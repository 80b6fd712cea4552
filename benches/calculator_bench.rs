use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use vat_calculator::*;

fn bench_built_in(c: &mut Criterion) {
    let mut calc = VatCalculator::new(Rules::new());
    c.bench_function("calculate_built_in_rate", |b| {
        b.iter(|| calc.calculate(black_box(dec!(24.00)), Some("DE"), None))
    });
}

fn bench_override(c: &mut Criterion) {
    let mut calc = VatCalculator::new(Rules::new().with_rule("DE", dec!(0.50)));
    c.bench_function("calculate_configuration_override", |b| {
        b.iter(|| calc.calculate(black_box(dec!(24.00)), Some("DE"), None))
    });
}

fn bench_json_override(c: &mut Criterion) {
    let cfg = JsonConfig::from_json(r#"{"vat_calculator": {"rules": {"DE": 0.50}}}"#).unwrap();
    let mut calc = VatCalculator::new(cfg);
    c.bench_function("calculate_json_override", |b| {
        b.iter(|| calc.calculate(black_box(dec!(24.00)), Some("DE"), None))
    });
}

fn bench_unknown_country(c: &mut Criterion) {
    let calc = VatCalculator::new(Rules::new());
    c.bench_function("rate_for_unknown_country", |b| {
        b.iter(|| calc.get_tax_rate_for_country(black_box("US"), false))
    });
}

criterion_group!(
    benches,
    bench_built_in,
    bench_override,
    bench_json_override,
    bench_unknown_country
);
criterion_main!(benches);
