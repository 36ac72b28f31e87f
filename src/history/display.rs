use crate::{Entry, Format, History};
use core::fmt::{self, Write};

/// Configurable display formatting for the [`History`].
///
/// Snapshots are listed newest first, each with its position.
///
/// # Examples
/// ```
/// # use memento::History;
/// let mut history = History::new();
/// history.push("a");
/// history.push("b");
/// history.undo();
///
/// let mut display = history.display();
/// display.detailed(false);
/// # #[cfg(feature = "colored")]
/// # let _ = display.colored(false);
/// assert_eq!(display.to_string(), "* 1 b\n* 0 [HEAD] a\n");
/// ```
pub struct Display<'a, T, S> {
    history: &'a History<T, S>,
    format: Format,
}

impl<T, S> Display<'_, T, S> {
    /// Show colored output (on by default).
    ///
    /// Requires the `colored` feature to be enabled.
    #[cfg(feature = "colored")]
    pub fn colored(&mut self, on: bool) -> &mut Self {
        self.format.colored = on;
        self
    }

    /// Show detailed output (on by default).
    pub fn detailed(&mut self, on: bool) -> &mut Self {
        self.format.detailed = on;
        self
    }

    /// Show the active snapshot in the output (on by default).
    pub fn head(&mut self, on: bool) -> &mut Self {
        self.format.head = on;
        self
    }
}

impl<T: fmt::Display, S> Display<'_, T, S> {
    fn fmt_list(&self, f: &mut fmt::Formatter, at: usize, entry: &Entry<T>) -> fmt::Result {
        self.format.mark(f)?;
        self.format.position(f, at)?;

        #[cfg(feature = "chrono")]
        if self.format.detailed {
            self.format.timestamp(f, entry.timestamp())?;
        }

        self.format.labels(f, at, self.history.cursor())?;

        if self.format.detailed {
            writeln!(f)?;
            self.format.message(f, entry)
        } else {
            f.write_char(' ')?;
            self.format.message(f, entry)?;
            writeln!(f)
        }
    }
}

impl<'a, T, S> From<&'a History<T, S>> for Display<'a, T, S> {
    fn from(history: &'a History<T, S>) -> Self {
        Display {
            history,
            format: Format::default(),
        }
    }
}

impl<T: fmt::Display, S> fmt::Display for Display<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, entry) in self.history.entries.iter().enumerate().rev() {
            self.fmt_list(f, i, entry)?;
        }
        Ok(())
    }
}
