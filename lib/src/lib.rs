// Copyright 2026 the `argot` developers
//
// This file is part of the `argot` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! A command line argument parsing library implementing the full POSIX `getopt(3)` and GNU
//! `getopt_long(3)` / `getopt_long_only(3)` contracts, extended with a tree of sub-parsers for
//! subcommand dispatch with option inheritance.
//!
//! Parsers are built with the [`getopt`], [`getopt_long`] and [`getopt_long_only`] factory
//! functions, which compile a POSIX *optstring* (e.g. `"+:vf:o::"`) and an optional table of
//! [`LongOpt`] declarations. Parsing is pull-based: [`Parser::opts`] returns an iterator yielding
//! one [`Opt`] (or [`ParseError`]) per recognised option; once iteration terminates the remaining
//! non-option arguments are available from [`Parser::args`].
//!
//! Subcommand based programs register child parsers with [`Parser::add_cmd`], optionally with
//! aliases. When iteration stops at a recognised command name, the matched child can be obtained
//! with fresh state via [`Parser::execute_command`], and long/short options declared on ancestor
//! parsers remain matchable from within child parsers.
//!
//! [`getopt`]: parser/fn.getopt.html
//! [`getopt_long`]: parser/fn.getopt_long.html
//! [`getopt_long_only`]: parser/fn.getopt_long_only.html
//! [`LongOpt`]: options/struct.LongOpt.html
//! [`Opt`]: parser/struct.Opt.html
//! [`ParseError`]: errors/enum.ParseError.html
//! [`Parser::opts`]: parser/struct.Parser.html#method.opts
//! [`Parser::args`]: parser/struct.Parser.html#method.args
//! [`Parser::add_cmd`]: parser/struct.Parser.html#method.add_cmd
//! [`Parser::execute_command`]: parser/struct.Parser.html#method.execute_command

#![deny(bare_trait_objects)]

mod commands;
mod engine;
mod macros;
mod matching;
pub mod errors;
pub mod options;
pub mod optstring;
pub mod parser;

pub use crate::errors::{OptstringError, ParseError, TreeError};
pub use crate::options::{HasArg, LongOpt, LongOptSet, ShortOpt};
pub use crate::parser::{getopt, getopt_long, getopt_long_only, Opt, OptIter, Parser, NONOPT};
