// Copyright 2026 the `argot` developers
//
// This file is part of the `argot` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! The parser & its factories
//!
//! A [`Parser`] owns a duplicated copy of the argument list it walks, the compiled optstring and
//! long option declarations to match against, and the registry of subcommand parsers, and provides
//! the iterator that drives parsing.
//!
//! # Construction
//!
//! Parsers are built with the [`getopt`] (short options only), [`getopt_long`] (plus `--name`
//! style long options) and [`getopt_long_only`] (long options matched with a single dash)
//! factories. Each compiles the given optstring up front, reporting invalid declarations before
//! any parsing begins. If `POSIXLY_CORRECT` is set (non-empty) in the environment at construction,
//! the default ordering mode is promoted from permuting to stop-at-first-non-option; an explicit
//! `-` optstring prefix still wins.
//!
//! # Parsing style
//!
//! Parsing is pull-based and single-pass: [`opts`] returns an iterator yielding one
//! `Result<Opt, ParseError>` per recognised option. The iterator owns no state of its own — it
//! drives the parser it came from, so abandoning it and asking the parser for [`args`] later is
//! well defined (see [`finalize`]). Problems are yielded as values; in non-silent mode a
//! GNU-format diagnostic is also written to the parser's sink (standard error unless replaced)
//! before the error is yielded.
//!
//! [`Parser`]: struct.Parser.html
//! [`getopt`]: fn.getopt.html
//! [`getopt_long`]: fn.getopt_long.html
//! [`getopt_long_only`]: fn.getopt_long_only.html
//! [`opts`]: struct.Parser.html#method.opts
//! [`args`]: struct.Parser.html#method.args
//! [`finalize`]: struct.Parser.html#method.finalize

use std::cell::RefCell;
use std::env;
use std::fmt;
use std::io::{self, Write};
use std::rc::{Rc, Weak};
use crate::commands::CommandEntry;
use crate::engine;
use crate::errors::{OptstringError, ParseError};
use crate::options::LongOptSet;
use crate::optstring::{OptString, Ordering};

/// The name under which non-option arguments are yielded in return-in-order mode (optstring
/// prefix `-`), mirroring the character code `1` that `getopt` returns for them.
pub const NONOPT: &str = "1";

/// Program name placeholder used in diagnostics until [`Parser::set_prog`] is called.
///
/// [`Parser::set_prog`]: struct.Parser.html#method.set_prog
const PROG_PLACEHOLDER: &str = "program";

/// An option extracted from the argument list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opt {
    /// Option name: the single-character string for a short option; the declared long name (or
    /// its `val` normalisation) for a long option; [`NONOPT`] for a non-option yielded in
    /// return-in-order mode.
    ///
    /// [`NONOPT`]: constant.NONOPT.html
    pub name: String,
    /// Data value, if one was supplied. `Some("")` records an explicitly supplied empty value
    /// (e.g. `--name=`), distinct from `None` (no value).
    pub arg: Option<String>,
}

impl Opt {
    /// Whether a data value was supplied (an explicitly empty one counts)
    #[inline]
    pub fn has_arg(&self) -> bool {
        self.arg.is_some()
    }

    pub(crate) fn short(ch: char, arg: Option<String>) -> Self {
        Self { name: ch.to_string(), arg }
    }
}

/// The parser
///
/// `Parser` is a shared handle: cloning it yields another handle onto the same parse state, which
/// is how parsers are held both by user code and, for subcommand parsers, by their parent's
/// command registry. Parse state lives behind `Rc`, making a parser strictly single-threaded —
/// parsing never blocks and always runs on the caller's thread.
#[derive(Clone)]
pub struct Parser {
    pub(crate) state: Rc<RefCell<State>>,
}

/// The parse state owned by a [`Parser`](struct.Parser.html) handle
pub(crate) struct State {
    /// Program name used in diagnostics
    pub(crate) prog: String,
    /// The argument list being walked; duplicated from the caller's input at construction, since
    /// permuting reorders it in place
    pub(crate) args: Vec<String>,
    /// Index of the next argument to consider
    pub(crate) optind: usize,
    /// Byte offset inside a short option cluster; `0` when not mid-cluster
    pub(crate) subind: usize,
    /// Start of the block of not-yet-relocated non-options (permute mode bookkeeping)
    pub(crate) first_nonopt: usize,
    /// End (exclusive) of the block of not-yet-relocated non-options
    pub(crate) last_nonopt: usize,
    /// Compiled short option table and mode flags; immutable once constructed
    pub(crate) optstring: Rc<OptString>,
    /// Long option declarations; immutable once constructed
    pub(crate) longopts: Rc<LongOptSet>,
    /// Whether single-dash arguments are first tried as long options
    pub(crate) long_only: bool,
    /// The non-option arguments left over once iteration has terminated
    pub(crate) residual: Vec<String>,
    /// Set exactly once, when iteration reaches a terminal state
    pub(crate) terminated: bool,
    /// Recorded when iteration terminated by recognising a command name
    pub(crate) dispatch: Option<Dispatch>,
    /// Registered subcommand parsers; aliases are separate entries sharing a child handle
    pub(crate) commands: Vec<CommandEntry>,
    /// Back-reference for inherited option lookup; never keeps the parent alive
    pub(crate) parent: Option<Weak<RefCell<State>>>,
    /// Where diagnostics get written; a no-op sink in silent mode
    pub(crate) sink: Rc<RefCell<dyn Write>>,
}

/// Record of iteration having stopped at a recognised command name
pub(crate) struct Dispatch {
    /// The command name as matched (an alias stays as typed)
    pub(crate) name: String,
    /// The arguments following the command name, forming the child's argument list
    pub(crate) argv: Vec<String>,
}

/// Short options only: compile `optstring` and return a parser over a copy of `args`
///
/// ```rust
/// let parser = argot::getopt([ "-ab", "-c", "arg" ], "ab:c").unwrap();
/// ```
pub fn getopt<I, S>(args: I, optstring: &str) -> Result<Parser, OptstringError>
    where I: IntoIterator<Item = S>, S: Into<String>
{
    Parser::new(args, optstring, LongOptSet::new(), false)
}

/// Short and long options: as [`getopt`](fn.getopt.html), with a set of long option declarations
/// matched against `--name` / `--name=value` style arguments
pub fn getopt_long<I, S>(args: I, optstring: &str, longopts: LongOptSet)
    -> Result<Parser, OptstringError>
    where I: IntoIterator<Item = S>, S: Into<String>
{
    Parser::new(args, optstring, longopts, false)
}

/// As [`getopt_long`](fn.getopt_long.html), except that single-dash arguments with names longer
/// than one character are first tried as long options, falling back to short option cluster
/// interpretation only when no long match exists
pub fn getopt_long_only<I, S>(args: I, optstring: &str, longopts: LongOptSet)
    -> Result<Parser, OptstringError>
    where I: IntoIterator<Item = S>, S: Into<String>
{
    Parser::new(args, optstring, longopts, true)
}

impl Parser {
    fn new<I, S>(args: I, optstring: &str, longopts: LongOptSet, long_only: bool)
        -> Result<Parser, OptstringError>
        where I: IntoIterator<Item = S>, S: Into<String>
    {
        let mut compiled = OptString::compile(optstring)?;
        if compiled.ordering == Ordering::Permute && posixly_correct() {
            compiled.ordering = Ordering::RequireOrder;
        }
        debug_assert!(longopts.is_valid());

        let sink: Rc<RefCell<dyn Write>> = match compiled.silent {
            true => Rc::new(RefCell::new(io::sink())),
            false => Rc::new(RefCell::new(io::stderr())),
        };

        Ok(Parser {
            state: Rc::new(RefCell::new(State {
                prog: PROG_PLACEHOLDER.to_owned(),
                args: args.into_iter().map(Into::into).collect(),
                optind: 0,
                subind: 0,
                first_nonopt: 0,
                last_nonopt: 0,
                optstring: Rc::new(compiled),
                longopts: Rc::new(longopts),
                long_only,
                residual: Vec::new(),
                terminated: false,
                dispatch: None,
                commands: Vec::new(),
                parent: None,
                sink,
            })),
        })
    }

    /// Gives an iterator extracting the options from the argument list
    ///
    /// Each iteration consumes one (or sometimes two) input arguments (except with a short option
    /// cluster, where one short option in the cluster is consumed), yielding a single matched
    /// option or problem. The iterator drives `self`: a subsequent call to `opts` continues from
    /// wherever the previous iterator left off.
    #[inline]
    pub fn opts(&self) -> OptIter {
        OptIter { state: Rc::clone(&self.state) }
    }

    /// The residual non-option arguments
    ///
    /// Once iteration has terminated this is the definitive list of leftover arguments (in permute
    /// mode: all non-options, input order preserved; otherwise: the unprocessed tail). Before
    /// termination it holds only the non-options accumulated so far; use
    /// [`finalize`](#method.finalize) after abandoning iteration early to get a complete answer.
    pub fn args(&self) -> Vec<String> {
        let st = self.state.borrow();
        match st.terminated {
            true => st.residual.clone(),
            false => st.args[st.first_nonopt..st.last_nonopt].to_vec(),
        }
    }

    /// Stop parsing where it stands and compute the residual arguments
    ///
    /// For use after abandoning iteration early: any pending permutation is completed and all
    /// arguments not yet consumed (from the abandonment point on) become the residual, available
    /// from [`args`](#method.args). Does nothing if iteration already terminated.
    pub fn finalize(&self) {
        engine::finalize(&mut self.state.borrow_mut());
    }

    /// Whether iteration has reached a terminal state
    ///
    /// Termination is reported exactly once; after it, iterators yield nothing further.
    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.state.borrow().terminated
    }

    /// Index into the argument list of the next argument to consider
    ///
    /// After termination this points at the first residual argument (or one past the end).
    #[inline]
    pub fn optind(&self) -> usize {
        self.state.borrow().optind
    }

    /// The program name used in diagnostics
    #[inline]
    pub fn prog(&self) -> String {
        self.state.borrow().prog.clone()
    }

    /// Set the program name used in diagnostics
    ///
    /// Defaults to a placeholder; callers wanting GNU-identical diagnostics should inject their
    /// `argv[0]` here.
    pub fn set_prog(&self, prog: &str) {
        self.state.borrow_mut().prog = prog.to_owned();
    }

    /// Replace the diagnostic sink
    ///
    /// Diagnostics default to standard error, or to a no-op sink in silent mode (`:` optstring
    /// prefix). The sink is shared, so a caller can retain a handle to inspect what was written.
    pub fn set_diagnostic_sink(&self, sink: Rc<RefCell<dyn Write>>) {
        self.state.borrow_mut().sink = sink;
    }

    /// The compiled optstring in use
    #[inline]
    pub fn optstring(&self) -> Rc<OptString> {
        Rc::clone(&self.state.borrow().optstring)
    }

    /// The long option declarations in use
    #[inline]
    pub fn longopts(&self) -> Rc<LongOptSet> {
        Rc::clone(&self.state.borrow().longopts)
    }

    /// Reset parse state over a fresh argument list, keeping declarations and registry
    pub(crate) fn reset_with_args(&self, args: Vec<String>) {
        let mut st = self.state.borrow_mut();
        st.args = args;
        st.optind = 0;
        st.subind = 0;
        st.first_nonopt = 0;
        st.last_nonopt = 0;
        st.residual = Vec::new();
        st.terminated = false;
        st.dispatch = None;
    }

    /// Whether two handles refer to the same parser
    #[inline]
    pub fn same_as(&self, other: &Parser) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let st = self.state.borrow();
        f.debug_struct("Parser")
            .field("prog", &st.prog)
            .field("args", &st.args)
            .field("optind", &st.optind)
            .field("subind", &st.subind)
            .field("terminated", &st.terminated)
            .finish()
    }
}

/// An argument list parsing iterator
///
/// Created by the [`opts`] method of [`Parser`]. Yields `Ok` for each matched option and `Err`
/// for each problem; returns `None` once the parser reaches a terminal state (end of arguments,
/// `--` consumed, ordering-mode stop, or a recognised command name).
///
/// [`opts`]: struct.Parser.html#method.opts
/// [`Parser`]: struct.Parser.html
pub struct OptIter {
    state: Rc<RefCell<State>>,
}

impl Iterator for OptIter {
    type Item = Result<Opt, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut st = self.state.borrow_mut();
        let item = engine::next_opt(&mut st);
        if let Some(Err(problem)) = &item {
            let sink = Rc::clone(&st.sink);
            let _ = writeln!(&mut *sink.borrow_mut(), "{}: {}", st.prog, problem);
        }
        item
    }
}

/// Whether `POSIXLY_CORRECT` is set (to anything non-empty) in the environment
fn posixly_correct() -> bool {
    env::var_os("POSIXLY_CORRECT").map_or(false, |v| !v.is_empty())
}
