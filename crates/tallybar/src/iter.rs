//! A wrapped iterator that shows progress

use std::io::{self, stdout, Write};

use crate::{bar::TallyBar, Error, Result};

/// An iterator wrapper that shows a progress bar
///
/// The bar is closed when the iterator is dropped, so an unfinished bar
/// isn't overwritten by whatever is printed next.
#[derive(Debug)]
pub struct TallyIter<Iter> {
    pub(crate) iter: Iter,
    pub(crate) bar: TallyBar,
    /// A line ending in `\r` may be on screen
    pub(crate) open: bool,
}

/// Wrap an iterator to display its progress
pub trait TallyIterator
where
    Self: Sized + Iterator,
{
    /// Wrap an iterator, ticking and drawing `bar` for every item yielded.
    ///
    /// # Examples
    ///
    /// ```
    /// use tallybar::{TallyBar, TallyIterator};
    ///
    /// let bar = TallyBar::new('#', 20, 100)?.with_percentage(true);
    /// for _ in (0..100).tally(bar) {
    ///     // ...
    /// }
    /// # Ok::<(), tallybar::Error>(())
    /// ```
    fn tally(self, bar: TallyBar) -> TallyIter<Self> {
        TallyIter {
            iter: self,
            bar,
            open: false,
        }
    }

    /// Wrap an iterator, using the upper bound of its size as the total
    /// length of the progress bar.
    ///
    /// # Errors
    /// [`Error::InvalidConfiguration`] if the iterator is unbounded or empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tallybar::TallyIterator;
    ///
    /// let iter = (0..50).tally_hint('=', 25)?;
    /// assert_eq!(iter.bar().total(), 50);
    ///
    /// assert!((0..).tally_hint('=', 25).is_err());
    /// # Ok::<(), tallybar::Error>(())
    /// ```
    fn tally_hint(self, fill: char, width: usize) -> Result<TallyIter<Self>> {
        let total = self.size_hint().1.ok_or_else(|| {
            Error::InvalidConfiguration("iterator has no upper size bound".to_string())
        })?;
        let total = i64::try_from(total).map_err(|_| {
            Error::InvalidConfiguration(format!("iterator length {} is too large", total))
        })?;

        Ok(self.tally(TallyBar::new(fill, width, total)?))
    }
}

// Implement TallyIterator trait for all Iterator types
impl<Iter: Iterator> TallyIterator for Iter {}

impl<Iter> TallyIter<Iter> {
    /// The progress bar driven by this iterator
    pub fn bar(&self) -> &TallyBar {
        &self.bar
    }

    /// Manually stop the progress bar. Usually users don't have to call this
    /// method directly, as a progress bar will close automatically when dropped.
    ///
    /// Ends the line of a bar left below 100%. Closing twice does nothing.
    pub fn close(&mut self) {
        if let Err(err) = self.close_to(&mut stdout().lock()) {
            log::debug!("failed to close progress bar: {}", err);
        }
    }

    fn close_to<W: Write + ?Sized>(&mut self, target: &mut W) -> io::Result<()> {
        if !std::mem::replace(&mut self.open, false) || self.bar.is_complete() {
            return Ok(());
        }
        writeln!(target)?;
        target.flush()
    }

    /// Tick and draw the bar. A failed draw must not interrupt the iteration.
    fn advance(&mut self) {
        self.open = true;
        if let Err(err) = self.bar.tick().display() {
            log::debug!("failed to draw progress bar: {}", err);
        }
    }
}

impl<Iter> Drop for TallyIter<Iter> {
    /// Automatically close a progress bar when it's dropped.
    fn drop(&mut self) {
        self.close();
    }
}

impl<Iter: Iterator> Iterator for TallyIter<Iter> {
    type Item = Iter::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.iter.next()?;
        self.advance();
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<Iter: ExactSizeIterator> ExactSizeIterator for TallyIter<Iter> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<Iter: DoubleEndedIterator> DoubleEndedIterator for TallyIter<Iter> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let next = self.iter.next_back()?;
        self.advance();
        Some(next)
    }
}
