//! As-you-type digit grouping
//!
//! A [`GroupingFormatter`] receives one character at a time and answers with
//! the best formatted rendering of everything seen since the last reset.

use std::sync::Arc;

use crate::classify::{classify, CharClass};
use crate::region::Region;

/// National digits needed before a grouping rule is chosen
pub const MIN_LEADING_DIGITS_LENGTH: usize = 3;

/// Incremental formatter for one region
pub trait GroupingFormatter: Send {
    /// Forget all input
    fn reset(&mut self);

    /// Feed one character and return the current best rendering
    fn input_digit(&mut self, ch: char) -> String;
}

/// Template-driven grouping formatter
///
/// A leading `+` switches to international mode, where the region's calling
/// code is consumed before national digits are grouped and the output reads
/// `+<cc> <grouped national>`. Anything the grammar cannot represent makes
/// the formatter give up and echo the raw input until the next reset.
#[derive(Debug, Clone)]
pub struct AsYouTypeFormatter {
    region: Arc<Region>,
    calling_code: String,
    accrued: String,
    pending_code: String,
    national: String,
    international: bool,
    code_extracted: bool,
    able_to_format: bool,
}

impl AsYouTypeFormatter {
    /// Create a formatter for `region`
    pub fn new(region: Arc<Region>) -> Self {
        let calling_code = region.calling_code().to_string();
        Self {
            region,
            calling_code,
            accrued: String::new(),
            pending_code: String::new(),
            national: String::new(),
            international: false,
            code_extracted: false,
            able_to_format: true,
        }
    }

    fn advance(&mut self, ch: char) -> String {
        if !self.able_to_format {
            return self.accrued.clone();
        }

        match classify(ch) {
            CharClass::Plus if self.accrued.len() == 1 => {
                self.international = true;
                return self.accrued.clone();
            }
            CharClass::Digit => {}
            _ => return self.abandon(),
        }

        if self.international && !self.code_extracted {
            self.pending_code.push(ch);
            if self.pending_code == self.calling_code {
                self.code_extracted = true;
            } else if !self.calling_code.starts_with(&self.pending_code) {
                return self.abandon();
            }
            return self.accrued.clone();
        }

        self.national.push(ch);
        self.format_national()
    }

    fn format_national(&mut self) -> String {
        let grouped = if self.national.len() < MIN_LEADING_DIGITS_LENGTH {
            Some(self.national.clone())
        } else {
            self.region
                .select_format(&self.national)
                .map(|format| format.fill(&self.national))
        };

        match grouped {
            Some(grouped) if self.international => format!("+{} {grouped}", self.calling_code),
            Some(grouped) => grouped,
            None => self.abandon(),
        }
    }

    fn abandon(&mut self) -> String {
        self.able_to_format = false;
        self.accrued.clone()
    }
}

impl GroupingFormatter for AsYouTypeFormatter {
    fn reset(&mut self) {
        self.accrued.clear();
        self.pending_code.clear();
        self.national.clear();
        self.international = false;
        self.code_extracted = false;
        self.able_to_format = true;
    }

    fn input_digit(&mut self, ch: char) -> String {
        self.accrued.push(ch);
        self.advance(ch)
    }
}
