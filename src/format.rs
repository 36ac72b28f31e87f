#![cfg_attr(not(feature = "colored"), allow(unused_variables))]

#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};
#[cfg(feature = "colored")]
use colored::Colorize;
use core::fmt::{self, Write};

#[derive(Copy, Clone, Debug)]
pub(crate) struct Format {
    #[cfg(feature = "colored")]
    pub colored: bool,
    pub detailed: bool,
    pub head: bool,
}

impl Default for Format {
    fn default() -> Self {
        Format {
            #[cfg(feature = "colored")]
            colored: true,
            detailed: true,
            head: true,
        }
    }
}

impl Format {
    pub fn message(self, f: &mut fmt::Formatter, msg: &impl ToString) -> fmt::Result {
        let msg = msg.to_string();
        let lines = msg.lines();
        if self.detailed {
            for line in lines {
                self.edge(f)?;
                writeln!(f, " {}", line.trim())?;
            }
        } else if let Some(line) = lines.map(str::trim).find(|s| !s.is_empty()) {
            f.write_str(line)?;
        }
        Ok(())
    }

    pub fn mark(self, f: &mut fmt::Formatter) -> fmt::Result {
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, "{} ", "*".cyan());
        }
        f.write_str("* ")
    }

    pub fn edge(self, f: &mut fmt::Formatter) -> fmt::Result {
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, "{}", "|".cyan());
        }
        f.write_char('|')
    }

    pub fn position(self, f: &mut fmt::Formatter, index: usize) -> fmt::Result {
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, "{}", index.to_string().yellow().bold());
        }
        write!(f, "{index}")
    }

    pub fn labels(self, f: &mut fmt::Formatter, at: usize, cursor: Option<usize>) -> fmt::Result {
        if !(self.head && cursor == Some(at)) {
            return Ok(());
        }
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(
                f,
                " {}{}{}",
                "[".yellow(),
                "HEAD".cyan().bold(),
                "]".yellow()
            );
        }
        f.write_str(" [HEAD]")
    }

    #[cfg(feature = "chrono")]
    pub fn timestamp(self, f: &mut fmt::Formatter, at: DateTime<Utc>) -> fmt::Result {
        let text = at.format("%H:%M:%S%.3f").to_string();
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, " {}", text.yellow());
        }
        write!(f, " {text}")
    }
}
