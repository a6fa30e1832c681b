//! Reformat engine
//!
//! Reacts to every change of a phone number field: regroups the digits,
//! keeps the cursor on the same logical digit and writes the result back.
//!
//! # Self-change precondition
//!
//! Writing the buffer makes the host raise another change notification
//! synchronously. [`ReformatEngine::on_change`] checks the
//! [`SelfChangeGuard`] before anything else and ignores notifications raised
//! while the engine itself is writing; [`ReformatEngine::apply`] engages the
//! guard around its write. Hosts that write the buffer on their own must do
//! the same, or the echo is treated as a user edit.

use std::sync::Arc;

use phonetype_core::{has_separator, normalize_digits_only, RegionRegistry};

use crate::buffer::TextBuffer;
use crate::change::{char_len, Edit, Reaction, TextChange};
use crate::cursor::remap_cursor;
use crate::error::Result;
use crate::session::{FormatterSession, FormattingConfig};
use crate::state::{EngineMode, SelfChangeGuard};

/// Edit-reaction state machine for one text field
#[derive(Debug)]
pub struct ReformatEngine {
    session: FormatterSession,
    mode: EngineMode,
    guard: SelfChangeGuard,
    renormalizing: bool,
    last_formatted: Option<String>,
}

impl ReformatEngine {
    /// Create an engine over the embedded region grammars
    pub fn new(region_code: &str, calling_code: u16) -> Result<Self> {
        Ok(Self::with_session(FormatterSession::new(
            region_code,
            calling_code,
        )?))
    }

    /// Create an engine over a custom registry
    pub fn with_registry(
        registry: Arc<RegionRegistry>,
        region_code: &str,
        calling_code: u16,
    ) -> Result<Self> {
        Ok(Self::with_session(FormatterSession::with_registry(
            registry,
            region_code,
            calling_code,
        )?))
    }

    /// Create an engine around an existing session
    pub fn with_session(session: FormatterSession) -> Self {
        Self {
            session,
            mode: EngineMode::Active,
            guard: SelfChangeGuard::default(),
            renormalizing: false,
            last_formatted: None,
        }
    }

    /// Current mode
    pub fn mode(&self) -> EngineMode {
        self.mode
    }

    /// Whether the engine is writing the buffer right now
    pub fn is_self_change(&self) -> bool {
        self.guard.is_engaged()
    }

    /// Text produced by the latest reformat pass
    pub fn last_formatted(&self) -> Option<&str> {
        self.last_formatted.as_deref()
    }

    /// Current formatting configuration
    pub fn config(&self) -> &FormattingConfig {
        self.session.config()
    }

    /// Underlying session
    pub fn session(&self) -> &FormatterSession {
        &self.session
    }

    /// Mutable access to the underlying session
    pub fn session_mut(&mut self) -> &mut FormatterSession {
        &mut self.session
    }

    /// Switch region and regroup what the buffer already holds
    ///
    /// Existing content is rewritten to its digits and run through the
    /// engine under the new region. Separators removed by that rewrite do
    /// not stop formatting.
    pub fn configure<B: TextBuffer + ?Sized>(
        &mut self,
        buffer: &mut B,
        region_code: &str,
        calling_code: u16,
    ) -> Result<()> {
        self.session.configure(region_code, calling_code)?;

        if buffer.text().is_empty() {
            return Ok(());
        }

        let digits = normalize_digits_only(buffer.text());
        self.renormalizing = true;
        let change = buffer.replace_all(&digits);
        self.apply(buffer, &change);
        self.renormalizing = false;

        Ok(())
    }

    /// React to a change and write the result into `buffer`
    ///
    /// The write happens with the self-change guard engaged; the buffer's
    /// own notification for it is passed back through
    /// [`on_change`](Self::on_change) and ignored there.
    pub fn apply<B: TextBuffer + ?Sized>(&mut self, buffer: &mut B, change: &TextChange) -> Reaction {
        let reaction = self.on_change(change);

        if let Reaction::Replace(edit) = &reaction {
            self.guard.engage();
            if buffer.text() != edit.text {
                let echo = buffer.replace_all(&edit.text);
                let nested = self.on_change(&echo);
                debug_assert!(nested.is_noop(), "self change was reformatted");
            }
            self.guard.release();
            buffer.set_cursor(edit.cursor);
        }

        reaction
    }

    /// React to a change of the buffer
    ///
    /// Returns the text and cursor the buffer should hold, or
    /// [`Reaction::NoOp`] when it should stay as the host left it.
    pub fn on_change(&mut self, change: &TextChange) -> Reaction {
        if self.guard.is_engaged() {
            return Reaction::NoOp;
        }

        if self.mode == EngineMode::Active && self.touches_separator(change) {
            self.stop();
        }

        if self.mode == EngineMode::Stopped {
            if !change.new_text.is_empty() {
                return Reaction::NoOp;
            }
            log::debug!("Buffer cleared, formatting resumed");
            self.mode = EngineMode::Active;
        }

        let text = change.new_text.as_str();
        let selection = change.cursor.min(char_len(text));
        let at_end = selection == char_len(text);

        let formatted = self.format(text);
        let cursor = remap_cursor(text, selection, &formatted, at_end);
        log::trace!("Reformatted {text:?} -> {formatted:?}, cursor {selection} -> {cursor}");

        self.last_formatted = Some(formatted.clone());

        if formatted == text && cursor == change.cursor {
            Reaction::NoOp
        } else {
            Reaction::Replace(Edit {
                text: formatted,
                cursor,
            })
        }
    }

    /// Whether the edit inserted or removed a separator
    fn touches_separator(&self, change: &TextChange) -> bool {
        let removed =
            !self.renormalizing && change.removed > 0 && has_separator(change.removed_text());
        let inserted = change.inserted > 0 && has_separator(change.inserted_text());
        removed || inserted
    }

    fn stop(&mut self) {
        log::debug!("Separator edited by the user, formatting stopped");
        self.mode = EngineMode::Stopped;
        self.session.clear();
    }

    /// Group the digits of `text`, correcting once for the parsed reading
    /// and capping at the expected national length
    fn format(&mut self, text: &str) -> String {
        let mut formatted = self.session.reformat_international(text);

        match self
            .session
            .parse_national_number(&normalize_digits_only(&formatted))
        {
            Ok(number) if number != normalize_digits_only(text) => {
                log::trace!("National number reads as {number}, regrouping");
                formatted = self.session.reformat_international(&number);
            }
            Ok(_) => {}
            Err(e) => log::trace!("Skipping stabilization: {e}"),
        }

        let limit = self.session.expected_national_digits();
        if limit > 0 && !has_separator(&formatted) && char_len(&formatted) > limit {
            let truncated: String = formatted.chars().take(limit).collect();
            formatted = self.session.reformat_international(&truncated);
        }

        formatted
    }
}
