use crate::builder::{build_codec, CodecBuilder};
use crate::config::{ConfigLookup, HUFFMAN_KEY, HUFFMAN_VALUE};
use crate::directive::{validate, Column, EncodingDirective, StorageLayout};
use crate::error::{HuffmanError, Result};
use log::{debug, warn};
use std::mem;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LifecycleState {
    Closed,
    Opening,
    Open,
    Closing,
}

/// One codec slot. An `AliasOf` slot borrows the codec held by the named
/// column and is never released on its own.
#[derive(Debug)]
pub enum CodecSlot<C> {
    Empty,
    Owned(C),
    AliasOf(Column),
}
impl<C> CodecSlot<C> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, CodecSlot::Empty)
    }
    fn take(&mut self) -> Self {
        mem::replace(self, CodecSlot::Empty)
    }
}

/// What to do about the value column once the key column is settled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValuePlan {
    Skip,
    ShareKey,
    Build,
}

/// Decides whether the value codec can reuse the key codec. Two English
/// directives share regardless of case; file directives share only when
/// their text is byte-for-byte identical.
#[must_use]
pub fn resolve_value_plan(key: &EncodingDirective, value: &EncodingDirective) -> ValuePlan {
    if value.is_empty() {
        ValuePlan::Skip
    } else if key.is_empty() {
        ValuePlan::Build
    } else if key.is_english() {
        if value.is_english() {
            ValuePlan::ShareKey
        } else {
            ValuePlan::Build
        }
    } else if key.as_str().as_bytes() == value.as_str().as_bytes() {
        ValuePlan::ShareKey
    } else {
        ValuePlan::Build
    }
}

/// Huffman codecs of one open table.
///
/// Callers serialize `open` and `close`; both take `&mut self`. Dropping
/// the descriptor closes it.
pub struct HuffmanCodecs<B: CodecBuilder> {
    builder: B,
    state: LifecycleState,
    key: CodecSlot<B::Codec>,
    value: CodecSlot<B::Codec>,
}
impl<B: CodecBuilder> HuffmanCodecs<B> {
    pub fn new(builder: B) -> Self {
        Self {
            builder,
            state: LifecycleState::Closed,
            key: CodecSlot::Empty,
            value: CodecSlot::Empty,
        }
    }
    pub fn state(&self) -> LifecycleState {
        self.state
    }
    pub fn key_codec(&self) -> Option<&B::Codec> {
        self.codec(Column::Key)
    }
    /// Resolves through an alias, so a shared codec shows up in both columns.
    pub fn value_codec(&self) -> Option<&B::Codec> {
        self.codec(Column::Value)
    }
    pub fn value_is_shared(&self) -> bool {
        matches!(self.value, CodecSlot::AliasOf(Column::Key))
    }
    fn slot(&self, column: Column) -> &CodecSlot<B::Codec> {
        match column {
            Column::Key => &self.key,
            Column::Value => &self.value,
        }
    }
    fn codec(&self, column: Column) -> Option<&B::Codec> {
        match self.slot(column) {
            CodecSlot::Empty => None,
            CodecSlot::Owned(codec) => Some(codec),
            CodecSlot::AliasOf(target) if *target != column => match self.slot(*target) {
                CodecSlot::Owned(codec) => Some(codec),
                _ => None,
            },
            CodecSlot::AliasOf(_) => None,
        }
    }

    /// Reads `huffman_key` / `huffman_value` from `config` and opens.
    pub fn open<C: ConfigLookup + ?Sized>(
        &mut self,
        config: &C,
        layout: StorageLayout,
    ) -> Result<()> {
        let key = EncodingDirective::from_config(config, HUFFMAN_KEY);
        let value = EncodingDirective::from_config(config, HUFFMAN_VALUE);
        self.open_with(&key, &value, layout)
    }

    /// Builds the key codec, then the value codec unless it can share the
    /// key's. On failure nothing stays built and the first error is returned.
    pub fn open_with(
        &mut self,
        key: &EncodingDirective,
        value: &EncodingDirective,
        layout: StorageLayout,
    ) -> Result<()> {
        if self.state != LifecycleState::Closed {
            return Err(HuffmanError::invalid_config(
                "Huffman codecs are already open for this table",
            ));
        }
        self.state = LifecycleState::Opening;
        match self.build_slots(key, value, layout) {
            Ok(()) => {
                self.state = LifecycleState::Open;
                Ok(())
            }
            Err(e) => {
                if !self.key.is_empty() || !self.value.is_empty() {
                    warn!("Releasing partially built Huffman codecs: {e}");
                }
                self.release_slots();
                self.state = LifecycleState::Closed;
                Err(e)
            }
        }
    }

    fn build_slots(
        &mut self,
        key: &EncodingDirective,
        value: &EncodingDirective,
        layout: StorageLayout,
    ) -> Result<()> {
        validate(key, value, layout)?;
        if key.is_empty() && value.is_empty() {
            return Ok(());
        }
        if let Some(codec) = build_codec(&self.builder, key)? {
            debug!("Built Huffman key codec from {key}");
            self.key = CodecSlot::Owned(codec);
        }
        match resolve_value_plan(key, value) {
            ValuePlan::Skip => {}
            ValuePlan::ShareKey => {
                debug!("Huffman value codec shares the key codec ({value})");
                self.value = CodecSlot::AliasOf(Column::Key);
            }
            ValuePlan::Build => {
                if let Some(codec) = build_codec(&self.builder, value)? {
                    debug!("Built Huffman value codec from {value}");
                    self.value = CodecSlot::Owned(codec);
                }
            }
        }
        Ok(())
    }

    /// Releases every distinct codec once. Safe to call repeatedly.
    pub fn close(&mut self) {
        if self.state == LifecycleState::Closed && self.key.is_empty() && self.value.is_empty() {
            return;
        }
        self.state = LifecycleState::Closing;
        self.release_slots();
        self.state = LifecycleState::Closed;
    }

    fn release_slots(&mut self) {
        if let CodecSlot::AliasOf(_) = self.value {
            self.value = CodecSlot::Empty;
        }
        if let CodecSlot::Owned(codec) = self.key.take() {
            debug!("Releasing Huffman key codec");
            self.builder.release(codec);
        }
        if let CodecSlot::Owned(codec) = self.value.take() {
            debug!("Releasing Huffman value codec");
            self.builder.release(codec);
        }
    }
}

impl<B: CodecBuilder> Drop for HuffmanCodecs<B> {
    fn drop(&mut self) {
        self.close();
    }
}
