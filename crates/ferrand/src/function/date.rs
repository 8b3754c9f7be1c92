use crate::{
    Argument, Arity, Context, Error, FunctionDescriptor, RandSource, RandomFunction, Result,
    TimeSource, function::interface::arity_error,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Calendar format accepted for `RandomDate(start, end)`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Output format for every `RandomDate` result: UTC, millisecond precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Window used by `RandomDate()`: 365 days, in seconds.
pub const DEFAULT_WINDOW_SECS: i64 = 365 * 86_400;

/// Earliest formattable instant, `0000-01-01T00:00:00.000Z`, in ms since epoch.
pub const MIN_TIMESTAMP_MILLIS: i64 = -62_167_219_200_000;

/// Latest formattable instant, `9999-12-31T23:59:59.999Z`, in ms since epoch.
pub const MAX_TIMESTAMP_MILLIS: i64 = 253_402_300_799_999;

const DESCRIPTOR: FunctionDescriptor = FunctionDescriptor {
    key: "RandomDate",
    arity: Arity::between(0, 2),
    usage: &[
        "Random date in last X seconds, e.g. RandomDate(x)",
        "RandomDate()          - a timestamp within the last 365 days",
        "RandomDate(seconds)   - a timestamp within the last `seconds` seconds",
        "RandomDate(start,end) - a timestamp in [start, end), dates as YYYY-MM-DD",
    ],
};

/// Draws a random UTC timestamp, formatted as `YYYY-MM-DDTHH:mm:ss.SSSZ`.
///
/// - no arguments: within the last 365 days, ending now
/// - `(seconds)`: within the last `seconds` seconds, ending now
/// - `(start, end)`: whole seconds in `[start, end)`, where both are
///   `YYYY-MM-DD` dates taken at midnight UTC
///
/// The trailing-window shapes have millisecond resolution; the explicit range
/// has one-second resolution.
///
/// # Example
/// ```
/// use ferrand::{Context, RandomDate, RandomFunction, SharedRandom, SystemClock, arguments};
///
/// let date = RandomDate::new(SharedRandom::new(), SystemClock);
/// let bound = date.bind(arguments(["2020-01-01", "2020-01-02"])).unwrap();
/// let ts = bound.evaluate(&Context::default()).unwrap();
/// assert!(ts.starts_with("2020-01-01T"));
/// assert!(ts.ends_with("Z"));
/// ```
#[derive(Debug, Clone)]
pub struct RandomDate<R, T> {
    rng: R,
    clock: T,
}

impl<R, T> RandomDate<R, T>
where
    R: RandSource<i64>,
    T: TimeSource<i64>,
{
    /// Creates a new generator drawing from `rng`, with "now" read from
    /// `clock`.
    pub fn new(rng: R, clock: T) -> Self {
        Self { rng, clock }
    }

    fn within_last(&self, seconds: i64) -> Result<String> {
        let window = seconds.checked_mul(1000).ok_or_else(|| Error::OutOfRange {
            value: format!("{seconds} seconds"),
        })?;
        let now = self.clock.current_millis();
        // The whole window must be formattable.
        match now.checked_sub(window) {
            Some(earliest) if earliest >= MIN_TIMESTAMP_MILLIS => {}
            _ => {
                return Err(Error::OutOfRange {
                    value: format!("{seconds} seconds before {now}ms"),
                });
            }
        }
        let offset = if window == 0 {
            0
        } else {
            self.rng.rand_range(0..window)?
        };
        let millis = now - offset;
        #[cfg(feature = "tracing")]
        tracing::debug!(seconds, millis, "random date in trailing window");
        format_millis(millis)
    }

    fn between(&self, start: NaiveDate, end: NaiveDate) -> Result<String> {
        if end <= start {
            return Err(Error::invalid_range(start, end));
        }
        let low = start.and_time(NaiveTime::MIN).and_utc().timestamp();
        let high = end.and_time(NaiveTime::MIN).and_utc().timestamp();
        if low * 1000 < MIN_TIMESTAMP_MILLIS || high * 1000 > MAX_TIMESTAMP_MILLIS + 1 {
            return Err(Error::OutOfRange {
                value: format!("[{start}, {end})"),
            });
        }
        let seconds = self.rng.rand_range(low..high)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(%start, %end, seconds, "random date between");
        format_millis(seconds * 1000)
    }
}

fn parse_date(arg: &Argument<'_>) -> Result<NaiveDate> {
    let raw = arg.resolve()?;
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| Error::DateParse {
        value: raw,
        expected: DATE_FORMAT,
    })
}

fn parse_window(arg: &Argument<'_>) -> Result<i64> {
    let raw = arg.resolve()?;
    let seconds: i64 = raw.trim().parse().map_err(|e| Error::parse(&raw, e))?;
    if seconds < 0 {
        return Err(Error::parse(&raw, "window must be a non-negative number of seconds"));
    }
    Ok(seconds)
}

/// Formats milliseconds since the Unix epoch with [`TIMESTAMP_FORMAT`].
///
/// # Errors
/// - [`Error::OutOfRange`] if `millis` falls outside
///   [`MIN_TIMESTAMP_MILLIS`]`..=`[`MAX_TIMESTAMP_MILLIS`], where the year no
///   longer fits in four digits.
pub fn format_millis(millis: i64) -> Result<String> {
    if !(MIN_TIMESTAMP_MILLIS..=MAX_TIMESTAMP_MILLIS).contains(&millis) {
        return Err(Error::OutOfRange {
            value: format!("{millis}ms since epoch"),
        });
    }
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
        .ok_or_else(|| Error::OutOfRange {
            value: format!("{millis}ms since epoch"),
        })
}

impl<R, T> RandomFunction for RandomDate<R, T>
where
    R: RandSource<i64>,
    T: TimeSource<i64>,
{
    fn descriptor(&self) -> &'static FunctionDescriptor {
        &DESCRIPTOR
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all))]
    fn execute(&self, args: &[Argument<'_>], _ctx: &Context) -> Result<String> {
        match args {
            [] => self.within_last(DEFAULT_WINDOW_SECS),
            [seconds] => self.within_last(parse_window(seconds)?),
            [start, end] => {
                let start = parse_date(start)?;
                let end = parse_date(end)?;
                self.between(start, end)
            }
            _ => Err(arity_error(&DESCRIPTOR, args.len())),
        }
    }
}
