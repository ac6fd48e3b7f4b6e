//! The risk engine: per-currency curves, spots and ledgers behind one query API.

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use tracing::{debug, info, warn};

use minirisk_core::{Currency, Days};
use minirisk_curves::{BumpTarget, CurveError, FxSpot, InterestRateCurve};
use minirisk_ext_file::{
    read_market_feed, read_trade_feed, FeedKind, FeedReader, Observation, RateQuote, SpotQuote,
    Trade, SPOT_QUOTE_CURRENCY,
};
use minirisk_portfolio::PortfolioLedger;

use crate::config::EngineConfig;
use crate::error::{RiskError, RiskResult};
use crate::summary::IngestSummary;

/// Interest-rate risk engine.
///
/// Curves, spots and ledgers are created lazily per currency as data
/// arrives, and are independent of each other: a currency may have trades
/// but no curve, or a spot but no trades. Every query checks for the data
/// it needs and reports what is missing.
///
/// DV01 queries bump a curve in place, so they take `&mut self`; the bump
/// is undone before the query returns, whatever the outcome.
#[derive(Debug, Clone)]
pub struct RiskEngine {
    config: EngineConfig,
    delta: Days,
    curves: HashMap<Currency, InterestRateCurve>,
    spots: HashMap<Currency, FxSpot>,
    ledgers: HashMap<Currency, PortfolioLedger>,
    summary: IngestSummary,
}

impl RiskEngine {
    /// Creates an engine with no data beyond the unit spot of the feed's
    /// quote currency, USD.
    ///
    /// The reference currency only selects what DV01s are reported in; it
    /// needs a spot of its own unless it is USD.
    ///
    /// # Errors
    ///
    /// [`RiskError::Config`] if the configuration does not validate.
    pub fn new(config: EngineConfig) -> RiskResult<Self> {
        config.validate()?;
        let delta = config.effective_delta()?;
        let mut spots = HashMap::new();
        spots.insert(SPOT_QUOTE_CURRENCY, FxSpot::default());

        debug!(
            delta,
            reference = %config.reference_currency,
            currencies = config.currencies.len(),
            "created risk engine"
        );
        Ok(Self {
            config,
            delta,
            curves: HashMap::new(),
            spots,
            ledgers: HashMap::new(),
            summary: IngestSummary::default(),
        })
    }

    /// Builds an engine from a rate/FX feed file and a trade feed file.
    ///
    /// Both files are opened before either is read. Lines that fail to parse
    /// are logged and skipped.
    ///
    /// # Errors
    ///
    /// [`RiskError::Feed`] if either file cannot be opened or read.
    pub fn from_files(
        config: EngineConfig,
        rates: impl AsRef<Path>,
        portfolio: impl AsRef<Path>,
    ) -> RiskResult<Self> {
        let mut engine = Self::new(config)?;
        let market = read_market_feed(rates, &engine.config.currencies)?;
        let trades = read_trade_feed(portfolio, &engine.config.currencies)?;
        engine.load(market)?;
        engine.load(trades)?;
        engine.log_summary();
        Ok(engine)
    }

    /// Builds an engine from any two buffered sources.
    pub fn from_readers<R1, R2>(config: EngineConfig, rates: R1, portfolio: R2) -> RiskResult<Self>
    where
        R1: BufRead,
        R2: BufRead,
    {
        let mut engine = Self::new(config)?;
        let universe = engine.config.currencies.clone();
        engine.load(FeedReader::new(rates, FeedKind::Market, universe.clone()))?;
        engine.load(FeedReader::new(portfolio, FeedKind::Trade, universe))?;
        engine.log_summary();
        Ok(engine)
    }

    fn load<R: BufRead>(&mut self, feed: FeedReader<R>) -> RiskResult<()> {
        let kind = feed.kind();
        let source = feed.source().to_path_buf();
        for (line, item) in feed {
            let accepted = match item {
                Ok(obs) => match self.ingest(obs) {
                    Ok(()) => true,
                    Err(err) => {
                        warn!(source = %source.display(), line, error = %err, "skipping record");
                        false
                    }
                },
                Err(err) if err.is_fatal() => return Err(err.into()),
                Err(err) => {
                    warn!(source = %source.display(), line, error = %err, "skipping line");
                    false
                }
            };
            if !accepted {
                match kind {
                    FeedKind::Market => self.summary.market.record(false),
                    FeedKind::Trade => self.summary.trades.record(false),
                }
            }
        }
        Ok(())
    }

    fn log_summary(&self) {
        info!(
            rates_accepted = self.summary.market.accepted,
            rates_rejected = self.summary.market.rejected,
            trades_accepted = self.summary.trades.accepted,
            trades_rejected = self.summary.trades.rejected,
            delta = self.delta,
            "loaded feeds"
        );
    }

    /// Applies one observation, creating the target model on first use.
    ///
    /// # Errors
    ///
    /// - [`RiskError::UnsupportedCurrency`] for currencies outside the universe
    /// - [`RiskError::NegativeTenor`] for rate points before day 0 and trades
    ///   maturing before the valuation date
    /// - [`RiskError::InvalidSpot`] for non-positive spots
    /// - [`RiskError::Portfolio`] when a trade overflows its maturity bucket
    /// - [`RiskError::UnsupportedObservation`] for observation kinds the
    ///   engine does not model
    pub fn ingest(&mut self, obs: Observation) -> RiskResult<()> {
        let currency = obs.currency();
        if !self.config.currencies.contains(currency) {
            return Err(RiskError::UnsupportedCurrency(currency));
        }
        match obs {
            Observation::Rate(quote) => self.ingest_rate(quote),
            Observation::Spot(quote) => self.ingest_spot(quote),
            Observation::Trade(trade) => self.ingest_trade(trade),
            other => Err(RiskError::UnsupportedObservation(format!("{other:?}"))),
        }
    }

    fn ingest_rate(&mut self, quote: RateQuote) -> RiskResult<()> {
        if quote.tenor < 0 {
            return Err(RiskError::NegativeTenor(quote.tenor));
        }
        debug!(ccy = %quote.currency, tenor = quote.tenor, rate = quote.rate, "rate");
        self.curves
            .entry(quote.currency)
            .or_default()
            .add_rate(quote.tenor, quote.rate);
        self.summary.market.record(true);
        Ok(())
    }

    fn ingest_spot(&mut self, quote: SpotQuote) -> RiskResult<()> {
        if !(quote.spot.is_finite() && quote.spot > 0.0) {
            return Err(RiskError::InvalidSpot {
                currency: quote.currency,
                spot: quote.spot,
            });
        }
        debug!(ccy = %quote.currency, spot = quote.spot, "fx spot");
        self.spots
            .entry(quote.currency)
            .or_default()
            .set_spot(quote.spot);
        self.summary.market.record(true);
        Ok(())
    }

    fn ingest_trade(&mut self, trade: Trade) -> RiskResult<()> {
        let tenor = trade.maturity.saturating_sub(self.delta);
        if tenor < 0 {
            return Err(RiskError::NegativeTenor(tenor));
        }
        debug!(
            id = trade.id,
            ccy = %trade.currency,
            tenor,
            notional = trade.notional,
            "trade"
        );
        let delta = self.delta;
        self.ledgers
            .entry(trade.currency)
            .or_insert_with(|| PortfolioLedger::with_delta(delta))
            .add_trade(trade.maturity, trade.notional)?;
        self.summary.trades.record(true);
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The configuration the engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Serial day of the valuation date.
    pub fn valuation_delta(&self) -> Days {
        self.delta
    }

    /// The currency DV01s are reported in.
    pub fn reference_currency(&self) -> Currency {
        self.config.reference_currency
    }

    /// Counts of accepted and rejected records.
    pub fn summary(&self) -> IngestSummary {
        self.summary
    }

    /// The curve for `ccy`, if any rate was loaded.
    pub fn curve(&self, ccy: Currency) -> Option<&InterestRateCurve> {
        self.curves.get(&ccy)
    }

    /// The spot for `ccy` in USD per unit, if loaded. USD itself is always 1.0.
    pub fn spot(&self, ccy: Currency) -> Option<f64> {
        self.spots.get(&ccy).map(FxSpot::spot)
    }

    /// The ledger for `ccy`, if any trade was loaded.
    pub fn ledger(&self, ccy: Currency) -> Option<&PortfolioLedger> {
        self.ledgers.get(&ccy)
    }

    /// Universe members with a curve, a spot or a ledger, in universe order.
    ///
    /// USD is always listed when it is in the universe, since its spot is seeded.
    pub fn currencies(&self) -> Vec<Currency> {
        self.config
            .currencies
            .iter()
            .filter(|ccy| {
                self.curves.contains_key(ccy)
                    || self.spots.contains_key(ccy)
                    || self.ledgers.contains_key(ccy)
            })
            .collect()
    }

    fn require_curve(&self, ccy: Currency) -> RiskResult<&InterestRateCurve> {
        self.curves.get(&ccy).ok_or_else(|| query_failed(RiskError::NoCurve(ccy)))
    }

    fn require_spot(&self, ccy: Currency) -> RiskResult<&FxSpot> {
        self.spots.get(&ccy).ok_or_else(|| query_failed(RiskError::NoSpot(ccy)))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Discount factor for `ccy` at `tenor` days.
    ///
    /// # Errors
    ///
    /// [`RiskError::NegativeTenor`] for `tenor < 0`, [`RiskError::NoCurve`]
    /// if no rate was loaded for `ccy`.
    pub fn discount_factor(&self, ccy: Currency, tenor: Days) -> RiskResult<f64> {
        if tenor < 0 {
            return Err(query_failed(RiskError::NegativeTenor(tenor)));
        }
        let curve = self.require_curve(ccy)?;
        let df = curve.discount_factor(tenor).map_err(|e| curve_failed(ccy, e))?;
        debug!(%ccy, tenor, df, "discount factor");
        Ok(df)
    }

    /// Units of `term` per unit of `base`: `spot(base) / spot(term)`.
    ///
    /// # Errors
    ///
    /// [`RiskError::NoSpot`] naming whichever side has no spot.
    pub fn fx_spot(&self, base: Currency, term: Currency) -> RiskResult<f64> {
        let cross = self.require_spot(base)?.cross(self.require_spot(term)?);
        debug!(%base, %term, cross, "fx cross");
        Ok(cross)
    }

    /// Stored curve tenors for `ccy`, ascending; empty without a curve.
    pub fn tenors(&self, ccy: Currency) -> Vec<Days> {
        self.curves
            .get(&ccy)
            .map(|curve| curve.tenors().collect())
            .unwrap_or_default()
    }

    /// Trade maturity dates for `ccy`, unordered; empty without trades.
    pub fn maturities(&self, ccy: Currency) -> Vec<Days> {
        self.ledgers
            .get(&ccy)
            .map(|ledger| ledger.maturities().collect())
            .unwrap_or_default()
    }

    /// Present value of the `ccy` ledger in `ccy`, on the unbumped curve.
    ///
    /// Zero when there are no trades.
    pub fn book_value(&self, ccy: Currency) -> RiskResult<f64> {
        let curve = self.require_curve(ccy)?;
        match self.ledgers.get(&ccy) {
            Some(ledger) => ledger
                .book_value(|t| curve.discount_factor(t))
                .map_err(|e| curve_failed(ccy, e)),
            None => Ok(0.0),
        }
    }

    /// DV01 for a bump of the single rate point at `tenor`, in the reference currency.
    ///
    /// # Errors
    ///
    /// [`RiskError::NoCurve`], [`RiskError::TenorNotFound`] or
    /// [`RiskError::NoSpot`] (for `ccy` or the reference currency) when the
    /// inputs are missing.
    pub fn dv01_tenor(&mut self, ccy: Currency, tenor: Days) -> RiskResult<f64> {
        if !self.require_curve(ccy)?.has_tenor(tenor) {
            return Err(query_failed(RiskError::TenorNotFound {
                currency: ccy,
                tenor,
            }));
        }
        self.sensitivity(ccy, BumpTarget::Tenor(tenor))
    }

    /// DV01 for a parallel bump of the whole `ccy` curve, in the reference currency.
    ///
    /// # Errors
    ///
    /// [`RiskError::NoCurve`] or [`RiskError::NoSpot`] (for `ccy` or the
    /// reference currency) when the inputs are missing.
    pub fn dv01(&mut self, ccy: Currency) -> RiskResult<f64> {
        self.require_curve(ccy)?;
        self.sensitivity(ccy, BumpTarget::Parallel)
    }

    /// Key-rate DV01s: one `(tenor, dv01)` per stored tenor, ascending.
    pub fn dv01_profile(&mut self, ccy: Currency) -> RiskResult<Vec<(Days, f64)>> {
        let tenors = self.require_curve(ccy)?.tenors().collect::<Vec<_>>();
        tenors
            .into_iter()
            .map(|tenor| self.dv01_tenor(ccy, tenor).map(|dv01| (tenor, dv01)))
            .collect()
    }

    /// `fx(reference, ccy) · -(v(+ε) - v(-ε)) / 2` with each bumped value
    /// taken under its own scoped bump.
    fn sensitivity(&mut self, ccy: Currency, target: BumpTarget) -> RiskResult<f64> {
        let fx = self.fx_spot(self.config.reference_currency, ccy)?;
        let eps = self.config.bump_size;

        let Some(ledger) = self.ledgers.get(&ccy) else {
            debug!(%ccy, bump = ?target, "no trades, zero DV01");
            return Ok(0.0);
        };
        let curve = self
            .curves
            .get_mut(&ccy)
            .ok_or_else(|| query_failed(RiskError::NoCurve(ccy)))?;

        let up = bumped_value(curve, ledger, target, eps).map_err(|e| curve_failed(ccy, e))?;
        let down = bumped_value(curve, ledger, target, -eps).map_err(|e| curve_failed(ccy, e))?;
        let dv01 = fx * -(up - down) / 2.0;

        debug!(%ccy, bump = ?target, eps, up, down, fx, dv01, "dv01");
        Ok(dv01)
    }
}

/// Book value with the curve bumped; the bump is released on return.
fn bumped_value(
    curve: &mut InterestRateCurve,
    ledger: &PortfolioLedger,
    target: BumpTarget,
    amount: f64,
) -> Result<f64, CurveError> {
    let bumped = match target {
        BumpTarget::Tenor(tenor) => curve.bump_tenor(tenor, amount)?,
        BumpTarget::Parallel => curve.bump_curve(amount),
    };
    ledger.book_value(|t| bumped.discount_factor(t))
}

fn query_failed(err: RiskError) -> RiskError {
    warn!(error = %err, "query failed");
    err
}

fn curve_failed(ccy: Currency, err: CurveError) -> RiskError {
    let err = match err {
        CurveError::EmptyCurve => RiskError::NoCurve(ccy),
        CurveError::TenorNotFound { tenor } => RiskError::TenorNotFound {
            currency: ccy,
            tenor,
        },
    };
    query_failed(err)
}
