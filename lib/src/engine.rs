// Copyright 2026 the `argot` developers
//
// This file is part of the `argot` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! The parse engine
//!
//! One call to [`next_opt`] classifies and consumes the next piece of input: a whole argument for
//! long options and non-options, one character of a cluster for short options. Tokens are
//! classified as one of: short option cluster, long option, the `--` early terminator, or
//! non-option. What happens to non-options depends on the ordering mode:
//!
//! - require-order: parsing stops, the rest of the list is the residual;
//! - permute: the non-option block is remembered and later rotated behind the options, so the
//!   residual ends up a contiguous tail with relative order preserved;
//! - return-in-order: each non-option is yielded in place as a `"1"` pseudo-option.
//!
//! The permute bookkeeping (`first_nonopt`/`last_nonopt` delimiting the pending non-option block,
//! exchanged with the consumed-option block that follows it) is the classic GNU getopt scheme,
//! with the exchange done as a slice rotation.

use crate::errors::{Candidates, ParseError};
use crate::options::{HasArg, LongOpt, ShortOpt};
use crate::optstring::Ordering;
use crate::parser::{Dispatch, Opt, State, NONOPT};

/// Outcome of resolving a long option body against the own and ancestor declaration tables
enum LongResolution {
    /// Resolved; `value` is the data component supplied within the same argument, if any
    Matched { opt: LongOpt, value: Option<String> },
    /// Abbreviation matched several declarations
    Ambiguous { name: String, candidates: Vec<String> },
    /// No declaration matched
    NoMatch,
}

/// Parse the next option from the argument list, if any
///
/// Returns `None` once a terminal state is reached (and records the residual arguments at that
/// point); before that, each call yields one matched option or problem.
pub(crate) fn next_opt(st: &mut State) -> Option<Result<Opt, ParseError>> {
    if st.terminated {
        return None;
    }

    // Continue a partially consumed short option cluster?
    if st.subind > 0 {
        return Some(next_in_cluster(st));
    }

    let argc = st.args.len();

    if st.optstring.ordering == Ordering::Permute {
        // If we processed options since the pending non-option block was delimited, rotate the
        // block behind them, then skip over any non-options that directly follow.
        if st.first_nonopt != st.last_nonopt && st.last_nonopt != st.optind {
            exchange(st);
        }
        else if st.last_nonopt != st.optind {
            st.first_nonopt = st.optind;
        }
        while st.optind < argc && is_nonoption(&st.args[st.optind]) {
            st.optind += 1;
        }
        st.last_nonopt = st.optind;
    }

    // The `--` terminator: consumed, then everything remaining is residual
    if st.optind < argc && st.args[st.optind] == "--" {
        st.optind += 1;
        if st.optstring.ordering == Ordering::Permute && st.first_nonopt != st.last_nonopt {
            if st.last_nonopt != st.optind {
                exchange(st);
            }
            st.optind = st.first_nonopt;
        }
        return finish(st, false);
    }

    if st.optind == argc {
        // In permute mode a pending non-option block at the very end has not been relocated;
        // point at it and it is the residual.
        if st.first_nonopt != st.last_nonopt {
            st.optind = st.first_nonopt;
            return finish(st, true);
        }
        return finish(st, false);
    }

    if is_nonoption(&st.args[st.optind]) {
        // Unreachable in permute mode (skipped over above)
        return match st.optstring.ordering {
            Ordering::ReturnInOrder => {
                let tok = st.args[st.optind].clone();
                st.optind += 1;
                Some(Ok(Opt { name: NONOPT.to_owned(), arg: Some(tok) }))
            },
            _ => finish(st, true),
        };
    }

    let tok = st.args[st.optind].clone();
    if let Some(body) = after_prefix(&tok, "--") {
        return Some(long_option(st, body));
    }

    // Single dash: in long-only mode, names of two or more characters are first tried as long
    // options, falling back to cluster interpretation when nothing matches.
    let body = &tok[1..];
    if st.long_only && body.chars().count() >= 2 {
        match resolve_long(st, body) {
            LongResolution::NoMatch => {},
            resolution => return Some(matched_long(st, body, resolution)),
        }
    }

    st.subind = 1;
    Some(next_in_cluster(st))
}

/// Stop parsing where it stands: complete any pending permutation and record the residual
pub(crate) fn finalize(st: &mut State) {
    if st.terminated {
        return;
    }
    if st.optstring.ordering == Ordering::Permute && st.first_nonopt != st.last_nonopt {
        if st.last_nonopt != st.optind {
            exchange(st);
        }
        st.optind = st.first_nonopt;
    }
    st.subind = 0;
    st.terminated = true;
    st.residual = st.args[st.optind..].to_vec();
}

/// Enter the terminal state, checking the argument at the cursor against the command registry
/// first where permitted
fn finish(st: &mut State, dispatch_allowed: bool) -> Option<Result<Opt, ParseError>> {
    st.terminated = true;
    if dispatch_allowed && st.optind < st.args.len() {
        let tok = &st.args[st.optind];
        if st.commands.iter().any(|e| e.name == *tok) {
            st.dispatch = Some(Dispatch {
                name: tok.clone(),
                argv: st.args[st.optind + 1..].to_vec(),
            });
            st.residual = Vec::new();
            return None;
        }
    }
    st.residual = st.args[st.optind..].to_vec();
    None
}

/// Rotate the pending non-option block `[first_nonopt, last_nonopt)` behind the consumed option
/// block `[last_nonopt, optind)`, preserving the relative order within both blocks
fn exchange(st: &mut State) {
    let (first, last, cursor) = (st.first_nonopt, st.last_nonopt, st.optind);
    st.args[first..cursor].rotate_left(last - first);
    st.first_nonopt = first + (cursor - last);
    st.last_nonopt = cursor;
}

/// A non-option argument: anything not beginning with `-`, plus `-` itself (the conventional
/// stdin placeholder)
#[inline]
fn is_nonoption(arg: &str) -> bool {
    !arg.starts_with('-') || arg == "-"
}

/// The part of `arg` following `prefix`, requiring it to be non-empty (equal length is no good)
#[inline]
fn after_prefix<'a>(arg: &'a str, prefix: &str) -> Option<&'a str> {
    match arg.starts_with(prefix) && arg.len() > prefix.len() {
        true => Some(&arg[prefix.len()..]),
        false => None,
    }
}

/// Process one character of a short option cluster
///
/// `subind` is the byte offset of the character within the argument (the leading `-` occupying
/// byte 0), maintained across calls until the cluster is exhausted or a data value consumes its
/// remainder.
fn next_in_cluster(st: &mut State) -> Result<Opt, ParseError> {
    let tok = st.args[st.optind].clone();
    let ch = match tok[st.subind..].chars().next() {
        Some(ch) => ch,
        None => unreachable!(), // `subind` always lies strictly within the cluster
    };
    let next_sub = st.subind + ch.len_utf8();
    let at_end = next_sub >= tok.len();

    let spec = match resolve_short(st, ch) {
        Some(spec) => spec,
        None => {
            advance_cluster(st, at_end, next_sub);
            return Err(ParseError::UnknownShort(ch));
        },
    };

    match spec.has_arg {
        HasArg::No => {
            advance_cluster(st, at_end, next_sub);
            Ok(Opt::short(ch, None))
        },
        HasArg::Required => {
            if !at_end {
                // Remainder of the cluster is the data value
                let value = tok[next_sub..].to_owned();
                st.optind += 1;
                st.subind = 0;
                Ok(Opt::short(ch, Some(value)))
            }
            else if st.optind + 1 < st.args.len() {
                let value = st.args[st.optind + 1].clone();
                st.optind += 2;
                st.subind = 0;
                Ok(Opt::short(ch, Some(value)))
            }
            else {
                st.optind += 1;
                st.subind = 0;
                Err(ParseError::ShortMissingArg(ch))
            }
        },
        HasArg::Optional => {
            // Only the remainder of the same argument can supply the value; the next argument is
            // never consumed.
            let value = match at_end {
                true => None,
                false => Some(tok[next_sub..].to_owned()),
            };
            st.optind += 1;
            st.subind = 0;
            Ok(Opt::short(ch, value))
        },
    }
}

fn advance_cluster(st: &mut State, at_end: bool, next_sub: usize) {
    match at_end {
        true => {
            st.optind += 1;
            st.subind = 0;
        },
        false => {
            st.subind = next_sub;
        },
    }
}

/// Process a long option argument, `body` being the portion after the `--` prefix
fn long_option(st: &mut State, body: &str) -> Result<Opt, ParseError> {
    // This occurs with `--=` or `--=foo`: an empty name can match nothing
    if body.starts_with('=') {
        st.optind += 1;
        return Err(ParseError::UnknownLong(String::new()));
    }
    let resolution = resolve_long(st, body);
    matched_long(st, body, resolution)
}

/// Apply a long option resolution: extract or consume the data value as the disposition demands,
/// advance the cursor, and build the yielded item
fn matched_long(st: &mut State, body: &str, resolution: LongResolution)
    -> Result<Opt, ParseError>
{
    let (opt, value) = match resolution {
        LongResolution::NoMatch => {
            st.optind += 1;
            return Err(ParseError::UnknownLong(name_component(body).to_owned()));
        },
        LongResolution::Ambiguous { name, candidates } => {
            st.optind += 1;
            return Err(ParseError::Ambiguous { name, candidates: Candidates(candidates) });
        },
        LongResolution::Matched { opt, value } => (opt, value),
    };

    // Yield under the full declared name, or the short identifier it normalises to
    let yielded = match opt.val {
        Some(ch) => ch.to_string(),
        None => opt.name.clone(),
    };

    match opt.has_arg {
        HasArg::No => {
            st.optind += 1;
            match value {
                // The `=` form was used where none is allowed; the value (even an empty one)
                // cannot be accepted
                Some(_) => Err(ParseError::UnexpectedArg(opt.name)),
                None => Ok(Opt { name: yielded, arg: None }),
            }
        },
        HasArg::Required => {
            match value {
                // In-same-argument value; an empty string is accepted
                Some(value) => {
                    st.optind += 1;
                    Ok(Opt { name: yielded, arg: Some(value) })
                },
                None if st.optind + 1 < st.args.len() => {
                    let value = st.args[st.optind + 1].clone();
                    st.optind += 2;
                    Ok(Opt { name: yielded, arg: Some(value) })
                },
                None => {
                    st.optind += 1;
                    Err(ParseError::LongMissingArg(opt.name))
                },
            }
        },
        HasArg::Optional => {
            // Only the `=` form supplies a value; the next argument is never consumed
            st.optind += 1;
            Ok(Opt { name: yielded, arg: value })
        },
    }
}

/// Resolve a long option body against the own declarations (exact, then `=`-boundary, then
/// unique abbreviation), falling back to the ancestor chain (exact and `=`-boundary forms only —
/// abbreviations do not reach across parsers, to avoid ambiguity between levels)
fn resolve_long(st: &State, body: &str) -> LongResolution {
    use crate::matching::{match_long, LongMatch};

    match match_long(&st.longopts, body, true) {
        LongMatch::Exact(opt) =>
            return LongResolution::Matched { opt: opt.clone(), value: None },
        LongMatch::WithValue(opt, value) =>
            return LongResolution::Matched { opt: opt.clone(), value: Some(value.to_owned()) },
        LongMatch::Abbrev(opt, value) =>
            return LongResolution::Matched {
                opt: opt.clone(),
                value: value.map(str::to_owned),
            },
        LongMatch::Ambiguous(candidates) =>
            return LongResolution::Ambiguous {
                name: name_component(body).to_owned(),
                candidates: candidates.iter().map(|n| (*n).to_owned()).collect(),
            },
        LongMatch::NoMatch => {},
    }

    let mut parent = st.parent.as_ref().and_then(|weak| weak.upgrade());
    while let Some(ancestor) = parent {
        let anc = ancestor.borrow();
        match match_long(&anc.longopts, body, false) {
            LongMatch::Exact(opt) =>
                return LongResolution::Matched { opt: opt.clone(), value: None },
            LongMatch::WithValue(opt, value) =>
                return LongResolution::Matched {
                    opt: opt.clone(),
                    value: Some(value.to_owned()),
                },
            _ => {},
        }
        let next = anc.parent.as_ref().and_then(|weak| weak.upgrade());
        drop(anc);
        parent = next;
    }
    LongResolution::NoMatch
}

/// Resolve a short option character against the own optstring, falling back to the ancestor chain
fn resolve_short(st: &State, ch: char) -> Option<ShortOpt> {
    if let Some(spec) = st.optstring.lookup(ch) {
        return Some(*spec);
    }
    let mut parent = st.parent.as_ref().and_then(|weak| weak.upgrade());
    while let Some(ancestor) = parent {
        let anc = ancestor.borrow();
        if let Some(spec) = anc.optstring.lookup(ch) {
            return Some(*spec);
        }
        let next = anc.parent.as_ref().and_then(|weak| weak.upgrade());
        drop(anc);
        parent = next;
    }
    None
}

/// The name component of a long option body: the part before the first `=`
#[inline]
fn name_component(body: &str) -> &str {
    match body.find('=') {
        Some(i) => &body[..i],
        None => body,
    }
}
