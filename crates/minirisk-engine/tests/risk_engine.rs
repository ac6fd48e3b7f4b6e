//! End-to-end engine tests over feed files on disk.

use std::fs;
use std::path::PathBuf;

use approx::assert_relative_eq;
use minirisk_engine::prelude::*;
use minirisk_ext_file::{Observation, SpotQuote, Trade};
use proptest::prelude::*;
use tempfile::TempDir;

// =============================================================================
// FIXTURES
// =============================================================================

const RATES: &str = "\
# market data
IR.1M.EUR 0.02
IR.2M.EUR 0.025
IR.1D.USD 0.0102
IR.1M.USD 0.0125
IR.1Y.USD 0.0155
IR.10Y.USD 0.0232
IR.1Y.GBP 0.0045
IR.1Y.JPY -0.001
IR.1Y.CHF 0.003
IR.3Q.USD 0.01
FX.SPOT.EUR 1.1213
FX.SPOT.GBP 1.2950
FX.SPOT.JPY 0.0089
this line is junk
";

const PORTFOLIO: &str = "\
#id;notional;ccy;date;
1;000186a0;USD;43300;
2;00030d40;USD;43660;
3;000f4240;EUR;42970;
4;00002710;EUR;42970;
5;0007a120;EUR;43500;
6;00061a80;GBP;43300;
7;00000064;CAD;43300;
8;00000064;USD;42000;
9;zzzz;USD;43300;
";

struct Fixture {
    _dir: TempDir,
    rates: PathBuf,
    portfolio: PathBuf,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let rates = dir.path().join("rates.txt");
    let portfolio = dir.path().join("portfolio.txt");
    fs::write(&rates, RATES).unwrap();
    fs::write(&portfolio, PORTFOLIO).unwrap();
    Fixture {
        _dir: dir,
        rates,
        portfolio,
    }
}

fn engine() -> RiskEngine {
    let f = fixture();
    RiskEngine::from_files(EngineConfig::default(), &f.rates, &f.portfolio).unwrap()
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

#[test]
fn rejected_lines_are_counted_not_fatal() {
    let summary = engine().summary();
    // CHF is outside G5, 3Q has no unit, plus one junk line.
    assert_eq!(summary.market.accepted, 11);
    assert_eq!(summary.market.rejected, 3);
    // Negative effective tenor and a bad hex notional.
    assert_eq!(summary.trades.accepted, 7);
    assert_eq!(summary.trades.rejected, 2);
}

#[test]
fn missing_feed_is_fatal() {
    let f = fixture();
    let missing = f.rates.with_file_name("nope.txt");

    let err = RiskEngine::from_files(EngineConfig::default(), &missing, &f.portfolio).unwrap_err();
    assert!(matches!(err, RiskError::Feed(_)));
    assert!(err.is_fatal());

    let err = RiskEngine::from_files(EngineConfig::default(), &f.rates, &missing).unwrap_err();
    assert!(matches!(err, RiskError::Feed(_)));
}

#[test]
fn currencies_follow_universe_order() {
    assert_eq!(
        engine().currencies(),
        vec![
            Currency::EUR,
            Currency::GBP,
            Currency::USD,
            Currency::CAD,
            Currency::JPY
        ]
    );
}

#[test]
fn g10_universe_accepts_chf() {
    let f = fixture();
    let config = EngineConfig::default().with_currencies(CurrencyUniverse::g10());
    let engine = RiskEngine::from_files(config, &f.rates, &f.portfolio).unwrap();
    assert_eq!(engine.tenors(Currency::CHF), vec![360]);
}

// =============================================================================
// DISCOUNT FACTORS
// =============================================================================

#[test]
fn discount_factor_boundaries() {
    let engine = engine();

    let df30 = engine.discount_factor(Currency::EUR, 30).unwrap();
    assert_relative_eq!(df30, (-0.02_f64 * 30.0 / 360.0).exp(), epsilon = 1e-15);

    // Pinned to zero at day 0 before the first pillar.
    let r20 = 0.02 * 20.0 / 30.0;
    let df20 = engine.discount_factor(Currency::EUR, 20).unwrap();
    assert_relative_eq!(df20, (-r20 * 20.0 / 360.0_f64).exp(), epsilon = 1e-15);

    let r45 = (0.02 * 15.0 + 0.025 * 15.0) / 30.0;
    let df45 = engine.discount_factor(Currency::EUR, 45).unwrap();
    assert_relative_eq!(df45, (-r45 * 45.0 / 360.0_f64).exp(), epsilon = 1e-15);

    let df9999 = engine.discount_factor(Currency::EUR, 9999).unwrap();
    assert_relative_eq!(df9999, (-0.025_f64 * 9999.0 / 360.0).exp(), epsilon = 1e-15);
}

#[test]
fn missing_curve_and_negative_tenor() {
    let engine = engine();
    assert!(matches!(
        engine.discount_factor(Currency::CAD, 30),
        Err(RiskError::NoCurve(Currency::CAD))
    ));
    assert!(matches!(
        engine.discount_factor(Currency::EUR, -1),
        Err(RiskError::NegativeTenor(-1))
    ));
    assert!(engine.tenors(Currency::CAD).is_empty());
}

// =============================================================================
// FX
// =============================================================================

#[test]
fn fx_crosses() {
    let engine = engine();
    assert_eq!(engine.fx_spot(Currency::EUR, Currency::USD).unwrap(), 1.1213);
    assert_relative_eq!(
        engine.fx_spot(Currency::USD, Currency::JPY).unwrap(),
        1.0 / 0.0089,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        engine.fx_spot(Currency::EUR, Currency::JPY).unwrap(),
        1.1213 / 0.0089,
        max_relative = 1e-12
    );
    assert_eq!(engine.fx_spot(Currency::USD, Currency::USD).unwrap(), 1.0);
    assert!(matches!(
        engine.fx_spot(Currency::USD, Currency::CAD),
        Err(RiskError::NoSpot(Currency::CAD))
    ));
}

// =============================================================================
// TENORS AND MATURITIES
// =============================================================================

#[test]
fn tenors_and_maturities() {
    let engine = engine();
    assert_eq!(engine.tenors(Currency::USD), vec![1, 30, 360, 3600]);

    let mut maturities = engine.maturities(Currency::EUR);
    maturities.sort_unstable();
    assert_eq!(maturities, vec![42_970, 43_500]);
    assert_eq!(engine.ledger(Currency::EUR).unwrap().notional(42_970), Some(1_010_000));

    // The early USD trade was skipped.
    let mut usd = engine.maturities(Currency::USD);
    usd.sort_unstable();
    assert_eq!(usd, vec![43_300, 43_660]);
}

// =============================================================================
// DV01
// =============================================================================

#[test]
fn dv01_is_positive_for_long_positions() {
    let mut engine = engine();
    let tenor = engine.dv01_tenor(Currency::USD, 360).unwrap();
    let parallel = engine.dv01(Currency::USD).unwrap();
    assert!(tenor > 0.0);
    assert!(parallel > tenor);

    // 100k at 1Y plus 200k at 2Y, the latter loading 8/9 onto the 1Y pillar:
    // about 10 + 34 per basis point.
    assert!(tenor > 40.0 && tenor < 50.0, "{tenor}");
}

#[test]
fn dv01_leaves_curves_untouched() {
    let mut engine = engine();
    let probes = [0, 1, 15, 30, 200, 360, 1000, 3600, 9999];
    let before: Vec<u64> = probes
        .iter()
        .map(|&t| engine.discount_factor(Currency::USD, t).unwrap().to_bits())
        .collect();

    engine.dv01_tenor(Currency::USD, 360).unwrap();
    engine.dv01(Currency::USD).unwrap();
    engine.dv01_profile(Currency::USD).unwrap();
    let _ = engine.dv01_tenor(Currency::USD, 45);

    let after: Vec<u64> = probes
        .iter()
        .map(|&t| engine.discount_factor(Currency::USD, t).unwrap().to_bits())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn dv01_reports_missing_inputs() {
    let mut engine = engine();
    assert!(matches!(
        engine.dv01_tenor(Currency::USD, 45),
        Err(RiskError::TenorNotFound { tenor: 45, .. })
    ));
    assert!(matches!(
        engine.dv01(Currency::CAD),
        Err(RiskError::NoCurve(Currency::CAD))
    ));
}

#[test]
fn dv01_requires_a_spot() {
    let mut engine = RiskEngine::new(EngineConfig::default()).unwrap();
    engine
        .ingest(Observation::Trade(Trade::new(1, 1_000, Currency::CAD, 43_300)))
        .unwrap();
    let rate = minirisk_ext_file::RateQuote::new(Currency::CAD, 360, 0.02);
    engine.ingest(Observation::Rate(rate)).unwrap();

    assert!(matches!(
        engine.dv01(Currency::CAD),
        Err(RiskError::NoSpot(Currency::CAD))
    ));
    engine
        .ingest(Observation::Spot(SpotQuote::new(Currency::CAD, 0.75)))
        .unwrap();
    assert!(engine.dv01(Currency::CAD).unwrap() > 0.0);
}

#[test]
fn profile_sums_to_parallel_for_pillar_cash_flows() {
    // Spot rates are linear in the pillar rates, so key rates add up.
    let mut engine = engine();
    let parallel = engine.dv01(Currency::USD).unwrap();
    let total: f64 = engine
        .dv01_profile(Currency::USD)
        .unwrap()
        .into_iter()
        .map(|(_, dv01)| dv01)
        .sum();
    assert_relative_eq!(total, parallel, max_relative = 1e-6);
}

#[test]
fn dv01_scales_with_bump_size() {
    let f = fixture();
    let mut small = RiskEngine::from_files(EngineConfig::default(), &f.rates, &f.portfolio).unwrap();
    let config = EngineConfig::default().with_bump_size(1e-3);
    let mut large = RiskEngine::from_files(config, &f.rates, &f.portfolio).unwrap();
    // DV01 is per bump, not per unit rate.
    assert_relative_eq!(
        small.dv01(Currency::EUR).unwrap() * 10.0,
        large.dv01(Currency::EUR).unwrap(),
        max_relative = 1e-4
    );
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn valuation_date_moves_effective_tenors() {
    let f = fixture();
    let date = chrono::NaiveDate::from_ymd_opt(2017, 8, 25).unwrap();
    let config = EngineConfig::default().with_valuation_date(date);
    let engine = RiskEngine::from_files(config, &f.rates, &f.portfolio).unwrap();
    assert_eq!(engine.valuation_delta(), 42_970);
    // The EUR trades on 42970 now mature today and are still kept.
    assert!(engine.maturities(Currency::EUR).contains(&42_970));
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn self_cross_is_identity(spot in 1e-6f64..1e6, pick in 0usize..5) {
        let ccy = CurrencyUniverse::g5().iter().nth(pick).unwrap();
        let mut engine = RiskEngine::new(EngineConfig::default()).unwrap();
        engine.ingest(Observation::Spot(SpotQuote::new(ccy, spot))).unwrap();
        prop_assert_eq!(engine.fx_spot(ccy, ccy).unwrap(), 1.0);
    }

    #[test]
    fn positive_notionals_give_positive_dv01(
        rate in 0.001f64..0.1,
        notionals in prop::collection::vec((1i32..7200, 1i64..10_000_000), 1..10),
    ) {
        let mut engine = RiskEngine::new(EngineConfig::default()).unwrap();
        engine
            .ingest(Observation::Rate(minirisk_ext_file::RateQuote::new(Currency::USD, 360, rate)))
            .unwrap();
        for (i, &(tenor, notional)) in notionals.iter().enumerate() {
            let trade = Trade::new(i as u64, notional, Currency::USD, 42_940 + tenor);
            engine.ingest(Observation::Trade(trade)).unwrap();
        }
        prop_assert!(engine.dv01(Currency::USD).unwrap() > 0.0);
    }
}
