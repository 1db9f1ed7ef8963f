// Copyright 2026 the `argot` developers
//
// This file is part of the `argot` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Item matching components
//!
//! This module contains components to do with finding matches for a given item.

use crate::options::{LongOpt, LongOptSet};

/// Result of matching the body of a long option argument (prefix already stripped) against a set
/// of declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LongMatch<'a> {
    /// The whole body matched a declared name exactly; no data value was supplied. This is also
    /// how a declared name containing `=` matches when given in full.
    Exact(&'a LongOpt),
    /// A declared name followed immediately by `=` led the body; the remainder is the data value
    /// (possibly empty).
    WithValue(&'a LongOpt, &'a str),
    /// The name component was an abbreviation uniquely identifying one declaration.
    Abbrev(&'a LongOpt, Option<&'a str>),
    /// The name component was an abbreviation of several declarations; their names are listed in
    /// declaration order.
    Ambiguous(Vec<&'a str>),
    /// Nothing matched.
    NoMatch,
}

/// Match the body of a long option argument against a declaration set
///
/// Matching tries, in order:
///
/// 1. an exact match of the whole body against a declared name (this lets a declared name that
///    itself contains `=` win over the usual split);
/// 2. the longest declared name that leads the body and is immediately followed by `=`, the
///    remainder being the data value — for ordinary names this is exactly the
///    split-at-first-`=` of `getopt_long`;
/// 3. when `abbreviations` is `true`, a unique-prefix match of the name component (the part
///    before the first `=`), reporting ambiguity when several declarations share the prefix.
pub(crate) fn match_long<'a>(set: &'a LongOptSet, body: &'a str, abbreviations: bool)
    -> LongMatch<'a>
{
    // Exact, whole-body
    if let Some(opt) = set.opts.iter().find(|o| o.name == body) {
        return LongMatch::Exact(opt);
    }

    // Longest declared name at an `=` boundary
    let mut best: Option<&LongOpt> = None;
    for candidate in &set.opts {
        let name = candidate.name.as_str();
        if body.len() > name.len() && body.starts_with(name)
            && body.as_bytes()[name.len()] == b'='
        {
            match best {
                Some(prev) if prev.name.len() >= name.len() => {},
                _ => { best = Some(candidate); },
            }
        }
    }
    if let Some(opt) = best {
        return LongMatch::WithValue(opt, &body[opt.name.len()+1..]);
    }

    if !abbreviations {
        return LongMatch::NoMatch;
    }

    // Unique-prefix (abbreviated) match of the name component
    let (head, value) = match body.find('=') {
        Some(i) => (&body[..i], Some(&body[i+1..])),
        None => (body, None),
    };
    let mut candidates: Vec<&LongOpt> = Vec::new();
    for candidate in &set.opts {
        if candidate.name.len() > head.len() && candidate.name.starts_with(head) {
            candidates.push(candidate);
        }
    }
    match candidates.len() {
        0 => LongMatch::NoMatch,
        1 => LongMatch::Abbrev(candidates[0], value),
        _ => LongMatch::Ambiguous(candidates.iter().map(|o| o.name.as_str()).collect()),
    }
}

/// Find the best matching name (long option or command) for the given string
///
/// Uses the `jaro_winkler` algorithm from the `strsim` crate; candidates with a metric below `0.8`
/// are filtered out, and the first candidate with the highest metric is returned.
#[cfg(feature = "suggestions")]
pub(crate) fn suggest<'a, T>(unknown: &str, haystack: impl Iterator<Item = &'a T>,
    get_name: fn(&'a T) -> &'a str) -> Option<&'a str>
{
    let mut best: Option<(&str, f64)> = None;
    for candidate in haystack {
        let cand_name = get_name(candidate);
        let metric = strsim::jaro_winkler(unknown, cand_name);
        if metric >= 0.8 {
            match best {
                Some((_, best_metric)) if metric <= best_metric => {},
                _ => { best = Some((cand_name, metric)); },
            }
        }
    }
    best.map(|(name, _)| name)
}
