#![warn(missing_docs)]

//! tallybar is a small rust library that draws a one-line progress bar
//! in command line applications. The line is laid out by a template, and is
//! rewritten in place until the work is complete.
//!
//! # Progress Bar
//!
//! [`TallyBar`] holds a fill symbol, a width and a total, plus a few
//! display options. Rendering is a pure function of that state.
//!
//! ```
//! use tallybar::TallyBar;
//!
//! let mut pb = TallyBar::new('#', 10, 10)?
//!     .with_percentage(true)
//!     .with_counter(true);
//!
//! for _ in 0..10 {
//!     // ...
//!     pb.tick().display()?;
//! }
//! assert_eq!(pb.render(), "[##########] 100% 10/10");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! You're able to adjust the caps, style and layout of a progress bar.
//! ```
//! use tallybar::{Style, TallyBar};
//!
//! let mut pb = TallyBar::new('#', 8, 4)?
//!     .with_style(Style::Balloon)
//!     .with_caps('|', '|')
//!     .with_template("{percent} {bar}")
//!     .with_percentage(true);
//!
//! pb.update(1);
//! assert_eq!(pb.render(), "25% |**      |");
//! # Ok::<(), tallybar::Error>(())
//! ```
//!
//! ## Behaviors:
//! - A progress bar only draws when [`display`](TallyBar::display) is called.
//! - The drawn line ends with `\r` below 100% and with `\n` from 100% on.
//! - Values below zero or above the total aren't rejected, they render as computed.
//! - A total of zero or less is rejected at construction.
//!
//! # Iterator
//!
//! Progress bar can also be associated with an iterator.
//!
//! ```
//! use tallybar::TallyIterator;
//!
//! for _ in (0..100).tally_hint('#', 40)? {
//!     // ...
//! }
//! # Ok::<(), tallybar::Error>(())
//! ```

pub mod bar;
pub mod error;
pub mod format;
pub mod iter;
pub mod style;

#[doc(inline)]
pub use bar::{Config, TallyBar};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use iter::{TallyIter, TallyIterator};
#[doc(inline)]
pub use style::Style;
