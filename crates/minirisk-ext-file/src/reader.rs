//! Iterating feeds line by line.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use minirisk_core::CurrencyUniverse;

use crate::error::{FeedError, FeedResult};
use crate::observation::Observation;
use crate::parse::{parse_market_line, parse_trade_line};

/// Which line grammar a feed uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    /// Rate points and FX spots.
    Market,
    /// Trades.
    Trade,
}

impl FeedKind {
    fn parse(self, line: &str, universe: &CurrencyUniverse) -> FeedResult<Option<Observation>> {
        match self {
            Self::Market => parse_market_line(line, universe),
            Self::Trade => parse_trade_line(line, universe),
        }
    }
}

/// Yields `(line number, observation or error)` for every non-skipped line.
///
/// Line numbers are 1-based. A read failure other than bad UTF-8 is
/// yielded once as [`FeedError::Io`] and ends the iteration.
pub struct FeedReader<R> {
    lines: Lines<R>,
    kind: FeedKind,
    universe: CurrencyUniverse,
    source: PathBuf,
    line_no: usize,
    done: bool,
}

impl<R: BufRead> FeedReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R, kind: FeedKind, universe: CurrencyUniverse) -> Self {
        Self {
            lines: reader.lines(),
            kind,
            universe,
            source: PathBuf::from("<input>"),
            line_no: 0,
            done: false,
        }
    }

    /// Names the source in I/O errors.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    /// The feed grammar.
    pub fn kind(&self) -> FeedKind {
        self.kind
    }

    /// The source name used in errors.
    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl<R: BufRead> Iterator for FeedReader<R> {
    type Item = (usize, FeedResult<Observation>);

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                    self.line_no += 1;
                    return Some((self.line_no, Err(FeedError::unrecognized("<invalid UTF-8>"))));
                }
                Err(source) => {
                    self.done = true;
                    let path = self.source.clone();
                    return Some((self.line_no + 1, Err(FeedError::Io { path, source })));
                }
            };
            self.line_no += 1;
            match self.kind.parse(&line, &self.universe) {
                Ok(None) => {}
                Ok(Some(obs)) => {
                    trace!(line = self.line_no, ?obs, "parsed");
                    return Some((self.line_no, Ok(obs)));
                }
                Err(err) => return Some((self.line_no, Err(err))),
            }
        }
        None
    }
}

fn open(path: &Path, kind: FeedKind, universe: &CurrencyUniverse) -> FeedResult<FeedReader<BufReader<File>>> {
    let file = File::open(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), ?kind, "opened feed");
    Ok(FeedReader::new(BufReader::new(file), kind, universe.clone()).with_source(path))
}

/// Opens a rate/FX feed.
///
/// # Errors
///
/// [`FeedError::Io`] if the file cannot be opened.
pub fn read_market_feed(
    path: impl AsRef<Path>,
    universe: &CurrencyUniverse,
) -> FeedResult<FeedReader<BufReader<File>>> {
    open(path.as_ref(), FeedKind::Market, universe)
}

/// Opens a trade feed.
///
/// # Errors
///
/// [`FeedError::Io`] if the file cannot be opened.
pub fn read_trade_feed(
    path: impl AsRef<Path>,
    universe: &CurrencyUniverse,
) -> FeedResult<FeedReader<BufReader<File>>> {
    open(path.as_ref(), FeedKind::Trade, universe)
}
