//! Tests for the `minirisk` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const RATES: &str = "\
# market data
IR.1M.EUR 0.02
IR.2M.EUR 0.025
IR.1Y.USD 0.02
FX.SPOT.EUR 1.25
IR.1Y.XYZ 0.01
";

const PORTFOLIO: &str = "\
#id;notional;ccy;date;
1;000f4240;USD;43300;
2;00000064;EUR;43000;
3;00000064;EUR;43000;
";

struct Feeds {
    dir: TempDir,
    rates: PathBuf,
    portfolio: PathBuf,
}

impl Feeds {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let rates = dir.path().join("rates.txt");
        let portfolio = dir.path().join("portfolio.txt");
        fs::write(&rates, RATES).unwrap();
        fs::write(&portfolio, PORTFOLIO).unwrap();
        Self {
            dir,
            rates,
            portfolio,
        }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("minirisk").unwrap();
        cmd.env_remove("RUST_LOG")
            .arg("--rates")
            .arg(&self.rates)
            .arg("--portfolio")
            .arg(&self.portfolio);
        cmd
    }
}

#[test]
fn discount_minimal_prints_the_number() {
    let feeds = Feeds::new();
    let expected = (-0.02_f64).exp();
    let output = feeds
        .cmd()
        .args(["discount", "USD", "360", "--format", "minimal", "--quiet"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: f64 = String::from_utf8(output.stdout).unwrap().trim().parse().unwrap();
    assert!((value - expected).abs() < 1e-12);
}

#[test]
fn fx_self_cross_is_one() {
    Feeds::new()
        .cmd()
        .args(["-q", "fx", "eur", "eur", "--format", "minimal"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn missing_curve_fails_with_message() {
    Feeds::new()
        .cmd()
        .args(["-q", "discount", "CAD", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no interest rate curve for CAD"));
}

#[test]
fn missing_feed_fails() {
    let feeds = Feeds::new();
    let mut cmd = Command::cargo_bin("minirisk").unwrap();
    cmd.arg("--rates")
        .arg(feeds.path().join("absent.txt"))
        .arg("--portfolio")
        .arg(&feeds.portfolio)
        .args(["-q", "tenors", "USD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.txt"));
}

#[test]
fn tenors_and_maturities_are_sorted() {
    let feeds = Feeds::new();
    feeds
        .cmd()
        .args(["-q", "tenors", "EUR", "--format", "minimal"])
        .assert()
        .success()
        .stdout("30 60\n");
    feeds
        .cmd()
        .args(["-q", "maturities", "EUR", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("43000"));
}

#[test]
fn dv01_is_positive() {
    let feeds = Feeds::new();
    for extra in [&[][..], &["--tenor", "360"][..]] {
        let output = feeds
            .cmd()
            .args(["-q", "dv01", "USD", "--format", "minimal"])
            .args(extra)
            .output()
            .unwrap();
        assert!(output.status.success());
        let value: f64 = String::from_utf8(output.stdout).unwrap().trim().parse().unwrap();
        assert!(value > 0.0, "{value}");
    }
}

#[test]
fn dv01_unknown_tenor_fails() {
    Feeds::new()
        .cmd()
        .args(["-q", "dv01", "USD", "--tenor", "45"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tenor 45"));
}

#[test]
fn rejected_lines_warn_unless_quiet() {
    let feeds = Feeds::new();
    feeds
        .cmd()
        .args(["tenors", "USD"])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipped"));
    feeds
        .cmd()
        .args(["--quiet", "tenors", "USD"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn report_json_lists_currencies() {
    let output = Feeds::new()
        .cmd()
        .args(["-q", "report", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(report["valuation_delta"], 42_940);
    assert_eq!(report["valuation_date"], "2017-07-26");
    assert_eq!(report["summary"]["market"]["rejected"], 1);
    let codes: Vec<_> = report["currencies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["currency"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(codes, vec!["EUR", "USD"]);
    assert_eq!(report["currencies"][1]["name"], "United States Dollar");
}

#[test]
fn eur_reference_currency_converts_usd_dv01() {
    let feeds = Feeds::new();
    let config = feeds.path().join("eur.toml");
    fs::write(&config, "reference_currency = \"EUR\"\n").unwrap();

    let output = feeds
        .cmd()
        .arg("--config")
        .arg(&config)
        .args(["-q", "report", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["reference_currency"], "EUR");

    let usd = &report["currencies"][1];
    assert_eq!(usd["currency"], "USD");
    let fx = usd["fx"].as_f64().unwrap();
    assert!((fx - 1.0 / 1.25).abs() < 1e-12, "{fx}");
    assert!(usd["dv01"].as_f64().unwrap() > 0.0);

    feeds
        .cmd()
        .arg("--config")
        .arg(&config)
        .args(["-q", "fx", "EUR", "USD", "--format", "minimal"])
        .assert()
        .success()
        .stdout("1.25\n");
}

#[test]
fn config_file_and_flag_overrides() {
    let feeds = Feeds::new();
    let config = feeds.path().join("minirisk.toml");
    fs::write(&config, "valuation_delta = 42000\nbump_size = 0.001\n").unwrap();

    // The USD trade is 1300 days out at the configured delta.
    let output = feeds
        .cmd()
        .arg("--config")
        .arg(&config)
        .args(["-q", "report", "--format", "json"])
        .output()
        .unwrap();
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["valuation_delta"], 42_000);

    let output = feeds
        .cmd()
        .arg("--config")
        .arg(&config)
        .args(["--valuation-date", "2017-08-25", "-q", "report", "--format", "json"])
        .output()
        .unwrap();
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["valuation_delta"], 42_970);
}

#[test]
fn bad_config_fails() {
    let feeds = Feeds::new();
    let config = feeds.path().join("bad.toml");
    fs::write(&config, "bump_size = -1.0\n").unwrap();
    feeds
        .cmd()
        .arg("--config")
        .arg(&config)
        .args(["-q", "report"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bump size"));
}
