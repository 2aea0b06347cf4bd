//! Low-level tokenizer for the pict diagram language.
//!
//! This crate performs raw tokenization only: it classifies byte runs into
//! [`RawToken`]s carrying a [`RawTag`] and a byte length, with no keyword
//! recognition, no literal decoding, and no allocation per token. The
//! higher-level `pict_lexer` crate cooks raw tokens into full tokens with
//! decoded values and line numbers.
//!
//! # Architecture
//!
//! - [`SourceBuffer`]: owns a sentinel-terminated copy of the source so the
//!   scanner never bounds-checks in its hot loop.
//! - [`Cursor`]: a `Copy` position over the buffer with single-byte and
//!   memchr-accelerated movement.
//! - [`RawScanner`]: the dispatch loop. Total over all byte values; lexical
//!   problems come back as error tags, never panics.
//!
//! # Standalone
//!
//! This crate has no `pict_*` dependencies, so external tools (syntax
//! highlighters, formatters) can use it without the rest of the compiler.

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{raw_tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
