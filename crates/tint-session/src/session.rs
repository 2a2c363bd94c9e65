//! Conversion session
//!
//! The state a color-convert front end binds to: the input text, the three
//! derived outputs, copy prefix/suffix and the history store. Every input
//! change recomputes the outputs from scratch.

use tint_color::{
    ColorParser, ColorResolver, CssColorResolver, FormatEncoder, FormatKind, FormattedColor,
    normalize_punctuation,
};
use tint_history::{AppendOutcome, DisplayEntry, FileBackend, HistoryBackend, HistoryStore};

use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::SessionError;

/// One user's conversion session
pub struct Session<R = CssColorResolver, B = FileBackend> {
    config: Config,
    parser: ColorParser<R>,
    encoder: FormatEncoder,
    store: HistoryStore<B>,
    input: String,
    output: Option<FormattedColor>,
    prefix: String,
    suffix: String,
}

impl Session<CssColorResolver, FileBackend> {
    /// CSS color resolver plus file-backed history at `config.storage_path`
    pub fn open(config: Config) -> Self {
        let backend = FileBackend::new(config.storage_path.clone());
        let store = HistoryStore::open(backend, config.history_capacity);
        Self::new(config, CssColorResolver::new(), store)
    }
}

impl<R: ColorResolver, B: HistoryBackend> Session<R, B> {
    pub fn new(config: Config, resolver: R, store: HistoryStore<B>) -> Self {
        tracing::debug!(
            "Session started with {} history entries (capacity {})",
            store.list().len(),
            store.capacity()
        );
        Self {
            config,
            parser: ColorParser::new(resolver),
            encoder: FormatEncoder::new(),
            store,
            input: String::new(),
            output: None,
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    /// Replace the input text and recompute the outputs.
    ///
    /// Empty or unrecognized input clears all three outputs.
    pub fn set_input(&mut self, raw: &str) {
        self.input = normalize_punctuation(raw).into_owned();
        self.output = self
            .parser
            .parse(&self.input)
            .map(|color| self.encoder.encode(&color));

        if self.output.is_none() && !self.input.is_empty() {
            tracing::trace!("No conversion for {:?}", self.input);
        }
    }

    /// Input as stored, after punctuation normalization
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> Option<&FormattedColor> {
        self.output.as_ref()
    }

    /// Empty the input and all outputs
    pub fn clear(&mut self) {
        self.input.clear();
        self.output = None;
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    pub fn set_suffix(&mut self, suffix: impl Into<String>) {
        self.suffix = suffix.into();
    }

    /// `prefix + value + suffix` for one output, as displayed and copied
    pub fn decorated(&self, kind: FormatKind) -> Option<String> {
        let value = self.output.as_ref()?.get(kind);
        Some(format!("{}{}{}", self.prefix, value, self.suffix))
    }

    /// Copy one output to the clipboard, then record the input in history.
    ///
    /// The history write waits for the clipboard write to finish and then for
    /// the configured debounce delay. A failed copy leaves history untouched.
    /// Returns the text that was copied.
    pub async fn copy<C: Clipboard>(
        &mut self,
        kind: FormatKind,
        clipboard: &C,
    ) -> Result<String, SessionError> {
        let text = self.decorated(kind).ok_or(SessionError::NothingToCopy)?;
        // Entry is the input at copy time, not whatever it becomes later
        let entry = self.input.clone();

        if let Err(e) = clipboard.write_text(&text) {
            tracing::warn!("Copy of {} value failed: {}", kind, e);
            return Err(e.into());
        }
        tracing::debug!("Copied {:?}", text);

        if !self.config.copy_debounce.is_zero() {
            smol::Timer::after(self.config.copy_debounce).await;
        }

        self.record(&entry)?;
        Ok(text)
    }

    /// Add an input to history directly, bypassing the clipboard
    pub fn record(&mut self, entry: &str) -> Result<AppendOutcome, SessionError> {
        Ok(self.store.append(entry, self.parser.resolver())?)
    }

    /// History newest first, with recency weights
    pub fn history(&self) -> Vec<DisplayEntry<'_>> {
        self.store.display()
    }

    /// Put a history entry back into the input, by display position.
    /// Returns `false` when the index is out of range.
    pub fn recall(&mut self, display_index: usize) -> bool {
        let list = self.store.list();
        let Some(entry) = list
            .len()
            .checked_sub(display_index)
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| list.get(i))
            .map(str::to_string)
        else {
            return false;
        };

        self.set_input(&entry);
        true
    }

    pub fn store(&self) -> &HistoryStore<B> {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
