// Copyright 2026 the `argot` developers
//
// This file is part of the `argot` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Optstring compilation
//!
//! An *optstring* is POSIX's compact declaration syntax for short options, extended with the GNU
//! conventions: `"vf:o::"` declares `v` as a flag, `f` as requiring a data value and `o` as
//! optionally taking one (within the same argument only).
//!
//! Up to three mode characters may lead the string, each at most once, in any order:
//!
//! - `+` — stop option interpretation at the first non-option argument;
//! - `-` — yield non-option arguments in place, as pseudo-options named [`NONOPT`];
//! - `:` — silent mode: problems are still yielded through the iterator, but no diagnostic is
//!   written to the parser's sink.
//!
//! If both `+` and `-` are given, the last one wins. Absent either, non-options are *permuted*:
//! shuffled behind the options so that, when iteration completes, the remaining arguments form a
//! contiguous tail of the argument list.
//!
//! [`NONOPT`]: ../parser/constant.NONOPT.html

use crate::errors::OptstringError;
use crate::options::{is_graphic, HasArg, ShortOpt};

/// The three POSIX ordering modes, governing treatment of non-option arguments
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Ordering {
    /// Stop option interpretation at the first non-option (optstring prefix `+`, or
    /// `POSIXLY_CORRECT` in the environment)
    RequireOrder,
    /// Reorder arguments so that all options are processed, with the non-options accumulating as
    /// a contiguous tail (the GNU default)
    Permute,
    /// Yield each non-option in place as a pseudo-option named `"1"` (optstring prefix `-`)
    ReturnInOrder,
}

impl Default for Ordering {
    fn default() -> Self {
        Ordering::Permute
    }
}

/// A compiled optstring: short option table plus global parse mode flags
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptString {
    pub(crate) shorts: Vec<ShortOpt>,
    pub(crate) ordering: Ordering,
    pub(crate) silent: bool,
}

impl OptString {
    /// Compile an optstring
    ///
    /// Leading mode characters are consumed first. Each remaining character declares a short
    /// option; a following `:` marks its data value as required and `::` as optional. A duplicate
    /// declaration of a character overwrites the earlier one.
    ///
    /// The characters `-`, `:` and `;` cannot name options, and option characters must be graphic;
    /// anything else fails compilation.
    pub fn compile(spec: &str) -> Result<Self, OptstringError> {
        let mut iter = spec.chars().peekable();

        let mut ordering = Ordering::default();
        let mut silent = false;
        let (mut seen_plus, mut seen_dash, mut seen_colon) = (false, false, false);
        loop {
            match iter.peek() {
                Some('+') if !seen_plus => {
                    seen_plus = true;
                    ordering = Ordering::RequireOrder;
                },
                Some('-') if !seen_dash => {
                    seen_dash = true;
                    ordering = Ordering::ReturnInOrder;
                },
                Some(':') if !seen_colon => {
                    seen_colon = true;
                    silent = true;
                },
                _ => break,
            }
            let _ = iter.next();
        }

        let mut shorts: Vec<ShortOpt> = Vec::new();
        while let Some(ch) = iter.next() {
            if ch == '-' || ch == ':' || ch == ';' {
                return Err(OptstringError::ForbiddenChar(ch));
            }
            if !is_graphic(ch) {
                return Err(OptstringError::NotGraphic(ch));
            }
            let has_arg = match iter.peek() {
                Some(':') => {
                    let _ = iter.next();
                    match iter.peek() {
                        Some(':') => {
                            let _ = iter.next();
                            HasArg::Optional
                        },
                        _ => HasArg::Required,
                    }
                },
                _ => HasArg::No,
            };
            match shorts.iter_mut().find(|s| s.ch == ch) {
                Some(existing) => { existing.has_arg = has_arg; },
                None => { shorts.push(ShortOpt { ch, has_arg }); },
            }
        }

        Ok(Self { shorts, ordering, silent })
    }

    /// The declared short options, in declaration order
    #[inline]
    pub fn shorts(&self) -> &[ShortOpt] {
        &self.shorts
    }

    /// The ordering mode in force
    #[inline]
    pub fn ordering(&self) -> Ordering {
        self.ordering
    }

    /// Whether silent error mode (`:` prefix) was requested
    #[inline]
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// Find the declaration for the given option character, if any
    #[inline]
    pub fn lookup(&self, ch: char) -> Option<&ShortOpt> {
        self.shorts.iter().find(|s| s.ch == ch)
    }
}
