//! A progress bar and all utilities.

use crossterm::style::Print;
use crossterm::QueueableCommand;
use std::fmt::{Display, Formatter};
use std::io::{self, stdout, Write};

use crate::error::{Error, Result};
use crate::format::{self, Segments, DEFAULT_TEMPLATE};
use crate::style::Style;

/// Parameters fixed when a progress bar is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Symbol drawn for every completed cell
    pub fill: char,
    /// Number of cells between the caps
    pub width: usize,
    /// The value representing 100%
    pub total: i64,
}

impl Config {
    /// Create a new progress bar config.
    pub fn new(fill: char, width: usize, total: i64) -> Self {
        Self { fill, width, total }
    }

    /// Check that a bar can be rendered from this config.
    ///
    /// # Errors
    /// [`Error::InvalidConfiguration`] if `total` isn't positive.
    pub fn validate(&self) -> Result<()> {
        if self.total <= 0 {
            return Err(Error::InvalidConfiguration(format!(
                "total must be positive, got {}",
                self.total
            )));
        }
        Ok(())
    }
}

/// The progress bar
///
/// A bar renders into one line of text, laid out by a template:
///
/// ```
/// use tallybar::TallyBar;
///
/// let mut pb = TallyBar::new('#', 10, 10)?
///     .with_percentage(true)
///     .with_counter(true);
/// pb.update(5);
///
/// assert_eq!(pb.render(), "[#####     ] 50% 5/10");
/// # Ok::<(), tallybar::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyBar {
    fill: char,
    caps: (char, char),
    width: usize,
    total: i64,
    current: i64,
    show_percentage: bool,
    show_counter: bool,
    template: String,
}

impl TallyBar {
    /// Create a new progress bar
    ///
    /// # Errors
    /// Fails with [`Error::InvalidConfiguration`] when `total <= 0`.
    ///
    /// # Examples
    /// ```
    /// use tallybar::TallyBar;
    ///
    /// let pb = TallyBar::new('#', 20, 1000).unwrap();
    /// assert!(TallyBar::new('#', 20, 0).is_err());
    /// ```
    pub fn new(fill: char, width: usize, total: i64) -> Result<Self> {
        Self::from_config(Config::new(fill, width, total))
    }

    /// Create a new progress bar from a [`Config`]
    pub fn from_config(config: Config) -> Result<Self> {
        if let Err(err) = config.validate() {
            log::warn!("rejected progress bar config {:?}: {}", config, err);
            return Err(err);
        }
        log::debug!(
            "new progress bar: width={} total={}",
            config.width,
            config.total
        );

        Ok(Self {
            fill: config.fill,
            caps: ('[', ']'),
            width: config.width,
            total: config.total,
            current: 0,
            show_percentage: false,
            show_counter: false,
            template: DEFAULT_TEMPLATE.to_string(),
        })
    }

    /// Show or hide the `{percent}` segment
    pub fn set_show_percentage(&mut self, show: bool) -> &mut Self {
        self.show_percentage = show;
        self
    }

    /// Show or hide the `{count}` segment
    pub fn set_show_counter(&mut self, show: bool) -> &mut Self {
        self.show_counter = show;
        self
    }

    /// Set the characters bracketing the bar, `[` and `]` by default
    pub fn set_caps(&mut self, start: char, end: char) -> &mut Self {
        self.caps = (start, end);
        self
    }

    /// Set the output template.
    ///
    /// `{bar}`, `{percent}` and `{count}` are replaced wherever they appear,
    /// any number of times. Everything else is printed as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use tallybar::TallyBar;
    ///
    /// let mut pb = TallyBar::new('=', 4, 8)?;
    /// pb.set_template("({count}) {bar}")
    ///     .set_show_counter(true)
    ///     .update(4);
    /// assert_eq!(pb.render(), "(4/8) [==  ]");
    /// # Ok::<(), tallybar::Error>(())
    /// ```
    pub fn set_template(&mut self, template: impl ToString) -> &mut Self {
        self.template = template.to_string();
        self
    }

    /// Set the style of a progress bar, replacing its fill symbol.
    ///
    /// See available styles in [`Style`]
    pub fn set_style(&mut self, style: Style) -> &mut Self {
        self.fill = style.fill();
        self
    }

    /// Builder-like function for a progress bar with the percent segment
    pub fn with_percentage(mut self, show: bool) -> Self {
        self.set_show_percentage(show);
        self
    }

    /// Builder-like function for a progress bar with the counter segment
    pub fn with_counter(mut self, show: bool) -> Self {
        self.set_show_counter(show);
        self
    }

    /// Builder-like function for a progress bar with caps
    pub fn with_caps(mut self, start: char, end: char) -> Self {
        self.set_caps(start, end);
        self
    }

    /// Builder-like function for a progress bar with a template
    pub fn with_template(mut self, template: impl ToString) -> Self {
        self.set_template(template);
        self
    }

    /// Builder-like function for a progress bar with style
    pub fn with_style(mut self, style: Style) -> Self {
        self.set_style(style);
        self
    }

    /// Set the progress to `value`. Out of range values are kept as is.
    pub fn update(&mut self, value: i64) -> &mut Self {
        self.current = value;
        self
    }

    /// Advance the progress bar by one step
    ///
    /// # Examples
    /// ```
    /// use tallybar::TallyBar;
    ///
    /// let mut pb = TallyBar::new('#', 10, 3)?;
    /// pb.tick().tick();
    /// assert_eq!(pb.current(), 2);
    /// # Ok::<(), tallybar::Error>(())
    /// ```
    pub fn tick(&mut self) -> &mut Self {
        self.current = self.current.wrapping_add(1);
        self
    }

    /// Current progress
    pub fn current(&self) -> i64 {
        self.current
    }

    /// The value representing 100%
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Number of cells between the caps
    pub fn width(&self) -> usize {
        self.width
    }

    /// Symbol of completed cells
    pub fn fill(&self) -> char {
        self.fill
    }

    /// Start and end caps
    pub fn caps(&self) -> (char, char) {
        self.caps
    }

    /// Output template
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Number of filled cells, `current * width / total` truncated toward zero.
    ///
    /// Computed apart from [`percent`](Self::percent), so the two are truncated
    /// separately and don't always describe the same fraction.
    pub fn scaled_fill(&self) -> i64 {
        let cells = i128::from(self.current).saturating_mul(self.width as i128);
        saturate(cells / i128::from(self.total))
    }

    /// Completion percentage, `current * 100 / total` truncated toward zero.
    pub fn percent(&self) -> i64 {
        saturate(i128::from(self.current) * 100 / i128::from(self.total))
    }

    /// Whether the percentage has reached 100
    pub fn is_complete(&self) -> bool {
        self.percent() >= 100
    }

    /// Render the progress bar into a line of text, without a terminator.
    pub fn render(&self) -> String {
        let bar = format::format_bar(self.fill, self.caps, self.width, self.scaled_fill());
        let percent = if self.show_percentage {
            format::format_percent(self.percent())
        } else {
            String::new()
        };
        let count = if self.show_counter {
            format::format_count(self.current, self.total)
        } else {
            String::new()
        };

        format::substitute(
            &self.template,
            &Segments {
                bar: &bar,
                percent: &percent,
                count: &count,
            },
        )
    }

    /// Draw the progress bar onto stdout.
    ///
    /// The line ends with `\r` while in progress, so the next call overwrites
    /// it, and with `\n` once complete.
    pub fn display(&self) -> io::Result<()> {
        self.display_to(&mut stdout().lock())
    }

    /// Draw the progress bar onto `target`, see [`display`](Self::display).
    pub fn display_to<W: Write + ?Sized>(&self, target: &mut W) -> io::Result<()> {
        let line = self.render();
        log::trace!("drawing {:?}", line);

        target.queue(Print(line))?;
        target.queue(Print(if self.is_complete() { "\n" } else { "\r" }))?;
        target.flush()
    }
}

impl Display for TallyBar {
    /// Convert a progress bar into human readable format.
    fn fmt(&self, fmt: &mut Formatter<'_>) -> std::fmt::Result {
        fmt.write_str(&self.render())
    }
}

/// Narrow a wide intermediate back to `i64`
fn saturate(n: i128) -> i64 {
    i64::try_from(n).unwrap_or(if n < 0 { i64::MIN } else { i64::MAX })
}
