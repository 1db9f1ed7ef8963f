// Copyright 2026 the `argot` developers
//
// This file is part of the `argot` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Error types
//!
//! Errors are values, not control-flow panics. Parse problems are yielded through the iterator
//! alongside successfully matched options, one per step, and the consumer decides whether to
//! continue after receiving one.
//!
//! The `Display` form of [`ParseError`] is the familiar GNU getopt diagnostic text, minus the
//! leading program-name prefix; the parser prepends the program name when writing a diagnostic to
//! its sink (see [`Parser::set_diagnostic_sink`]).
//!
//! [`ParseError`]: enum.ParseError.html
//! [`Parser::set_diagnostic_sink`]: ../parser/struct.Parser.html#method.set_diagnostic_sink

use std::fmt;
use thiserror::Error;

/// A problem encountered while parsing an argument list
///
/// Recoverable problems (unknown options, unexpected data) leave the cursor past the offending
/// token, so iteration can simply continue. A missing argument can only occur at the end of the
/// input, so it is always the final item yielded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Unrecognised short option character
    #[error("invalid option -- '{0}'")]
    UnknownShort(char),
    /// Looked like a long option, but matched no declaration (neither exactly nor by unique
    /// abbreviation). Carries the name as given, without prefix or data component.
    #[error("unrecognized option '--{0}'")]
    UnknownLong(String),
    /// Short option requires an argument, but none was available
    #[error("option requires an argument -- '{0}'")]
    ShortMissingArg(char),
    /// Long option requires an argument, but none was available
    #[error("option '--{0}' requires an argument")]
    LongMissingArg(String),
    /// Long option takes no argument, but one was supplied with `=`
    #[error("option '--{0}' doesn't allow an argument")]
    UnexpectedArg(String),
    /// Abbreviated long option name matched multiple declarations. The candidates are listed in
    /// declaration order.
    #[error("option '--{name}' is ambiguous; possibilities:{candidates}")]
    Ambiguous {
        /// The (abbreviated) name as given
        name: String,
        /// All declared names the abbreviation matched
        candidates: Candidates,
    },
}

/// List of candidate long option names for an ambiguous abbreviation
///
/// Displays as ` --<a> --<b> …`, ready for direct use in the ambiguity diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Candidates(pub Vec<String>);

impl fmt::Display for Candidates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for candidate in &self.0 {
            write!(f, " --{}", candidate)?;
        }
        Ok(())
    }
}

/// A problem with a supplied optstring, reported at parser construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptstringError {
    /// The character has reserved meaning and cannot name a short option
    #[error("optstring cannot use '{0}' as an option character")]
    ForbiddenChar(char),
    /// Option characters must be graphic (not whitespace, not a control character)
    #[error("optstring option characters must be graphic, found {0:?}")]
    NotGraphic(char),
}

/// A problem registering or resolving a command in the parser tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Registering the command would make the parser tree cyclic
    #[error("registering command '{0}' would create a cycle")]
    CommandCycle(String),
    /// The name is already registered and refers to a different parser, or the child is already
    /// registered under another parent
    #[error("command '{0}' is already registered to a different parser")]
    CommandConflict(String),
    /// No command registered under the given name
    #[error("no command '{0}' has been registered")]
    UnknownCommand(String),
}
