// Copyright 2026 the `argot` developers
//
// This file is part of the `argot` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Option description components
//!
//! This module contains components to do with describing the *options* “available” within a given
//! program, i.e. those that an argument list will be parsed against. Short options are normally
//! declared compactly through an optstring (see the [`optstring`](../optstring/index.html)
//! module); the types here describe *long* options and the argument dispositions shared by both
//! kinds.

/// Argument disposition of an option (whether it takes a data value)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HasArg {
    /// A simple flag style option (takes no data value)
    No,
    /// A data-value taking option, where providing a value is mandatory
    ///
    /// The data value can be provided within the same argument, but if not provided there then the
    /// next argument is consumed as the data value. In the latter scenario, if no next argument
    /// exists, then a missing-argument problem is reported.
    Required,
    /// An option where providing a data value is optional
    ///
    /// One restriction with this type is that to avoid parsing ambiguity, a data value can only be
    /// provided within the same argument, never the next argument. If a data value is not provided
    /// within the same argument as the option character/name, then it is considered to be without
    /// one.
    Optional,
}

/// Description of an available short option
///
/// These are normally produced by the optstring compiler rather than constructed directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ShortOpt {
    /// Short option character
    pub ch: char,
    /// Argument disposition
    pub has_arg: HasArg,
}

/// Description of an available long option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongOpt {
    /// Long option name, excluding the `--` prefix
    pub name: String,
    /// Argument disposition
    pub has_arg: HasArg,
    /// Optional single-character identifier that the yielded option is normalised to, for programs
    /// that want a long option to come out of the parser under its short option identifier.
    pub val: Option<char>,
}

/// Extendible long option set
///
/// Used to supply the set of information about available long options to match against.
///
/// Note, the add methods panic (debug only) with invalid identifiers, as documented, however you
/// must understand that the validation checks only do the bare minimum of checking for the most
/// crucial problems that could cause issues when parsing. It is up to you to otherwise ensure that
/// identifiers are sensibly chosen.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct LongOptSet {
    /* NOTE: left public to allow creation via macros */
    pub opts: Vec<LongOpt>,
}

/// Description of a validation issue within an option in a [`LongOptSet`](struct.LongOptSet.html)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LongOptFlaw<'a> {
    /// Long option name is empty string
    EmptyName,
    /// Long option name begins with a dash, which would clash with prefix recognition
    LeadingDash(&'a str),
    /// Long option name contains a non-graphic `char`
    NotGraphic(&'a str, char),
    /// Duplicate long option found
    Dup(&'a str),
}

impl ShortOpt {
    /// Create a new short option descriptor
    ///
    /// Panics (debug only) if the given `char` is invalid.
    #[inline]
    pub fn new(ch: char, has_arg: HasArg) -> Self {
        debug_assert!(ch != '-' && ch != ':' && ch != ';' && is_graphic(ch));
        Self { ch, has_arg }
    }
}

impl LongOpt {
    /// Create a new long option descriptor
    ///
    /// Panics (debug only) if the given name is invalid.
    #[inline]
    pub fn new(name: &str, has_arg: HasArg) -> Self {
        debug_assert!(Self::validate(name).is_ok());
        Self { name: name.to_owned(), has_arg, val: None }
    }

    /// Assign a single-character identifier to normalise the yielded option name to
    ///
    /// Panics (debug only) on an invalid `char` choice.
    #[inline]
    pub fn with_val(mut self, ch: char) -> Self {
        debug_assert!(ch != '-' && is_graphic(ch));
        self.val = Some(ch);
        self
    }

    /// Validate a given name as a possible long option
    ///
    /// Returns the first flaw identified, if any.
    ///
    /// Note, a name is permitted to contain `=`; such a declaration is matched against the whole
    /// of a supplied `--name=value` style argument before any splitting at the `=` is considered.
    ///
    /// Note, only the most crucial problems that could cause issues when parsing are checked for.
    /// Passing validation is not a confirmation that a given identifier is sensible, or entirely
    /// free of issues.
    #[must_use]
    fn validate(name: &str) -> Result<(), LongOptFlaw<'_>> {
        if name.is_empty() {
            return Err(LongOptFlaw::EmptyName);
        }
        if name.starts_with('-') {
            return Err(LongOptFlaw::LeadingDash(name));
        }
        for c in name.chars() {
            if !is_graphic(c) {
                return Err(LongOptFlaw::NotGraphic(name, c));
            }
        }
        Ok(())
    }
}

impl LongOptSet {
    /// Create a new object
    ///
    /// You can alternatively use [`with_capacity`](#method.with_capacity) for more efficient `Vec`
    /// creation.
    #[inline(always)]
    pub fn new() -> Self {
        Default::default()
    }

    /// Create a new object, with size estimation
    #[inline]
    pub fn with_capacity(count_est: usize) -> Self {
        Self { opts: Vec::with_capacity(count_est) }
    }

    /// Checks if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.opts.is_empty()
    }

    /// Add a long option
    ///
    /// Panics (debug only) on invalid name.
    #[inline]
    pub fn add(&mut self, name: &str, has_arg: HasArg) -> &mut Self {
        self.opts.push(LongOpt::new(name, has_arg));
        self
    }

    /// Add a long option normalised to a single-character identifier
    ///
    /// Panics (debug only) on invalid name or character.
    #[inline]
    pub fn add_with_val(&mut self, name: &str, has_arg: HasArg, val: char) -> &mut Self {
        self.opts.push(LongOpt::new(name, has_arg).with_val(val));
        self
    }

    /// Add an existing (ready-made) long option
    ///
    /// No validation is performed here; the item given should be valid though.
    #[inline]
    pub fn add_existing(&mut self, opt: LongOpt) -> &mut Self {
        self.opts.push(opt);
        self
    }

    /// Find the declaration exactly matching the given name, if any
    ///
    /// With duplicate declarations the first wins, matching parse behaviour.
    #[inline]
    pub fn find(&self, name: &str) -> Option<&LongOpt> {
        self.opts.iter().find(|o| o.name == name)
    }

    /// Checks validity of the option set
    ///
    /// Returns `true` if valid.
    ///
    /// Note, only the most crucial problems that could cause issues when parsing are checked for.
    /// Passing validation is not a confirmation that the identifiers used are sensible, or
    /// entirely free of issues.
    ///
    /// See also the [`validate`](#method.validate) method.
    #[inline]
    pub fn is_valid(&self) -> bool {
        validation::validate_set(self, false).is_ok()
    }

    /// Checks validity of the option set, returning details of any problems
    ///
    /// Note, only the most crucial problems that could cause issues when parsing are checked for.
    /// Passing validation is not a confirmation that the identifiers used are sensible, or
    /// entirely free of issues.
    #[inline]
    pub fn validate(&self) -> Result<(), Vec<LongOptFlaw<'_>>> {
        validation::validate_set(self, true)
    }

    /// Find the best matching long option for the given string
    ///
    /// This is intended to be used when an unknown long option is encountered, to give users a
    /// hint when displaying the error to them. I.e.:
    ///
    /// > “Error: Unknown option ‘*x*’, did you mean ‘*y*’?”
    ///
    /// Specifically, this uses the `jaro_winkler` algorithm from the `strsim` crate; It filters
    /// out any options with a metric calculated as less than `0.8`, and returns the first option
    /// with the highest metric.
    #[cfg(feature = "suggestions")]
    pub fn suggest(&self, unknown: &str) -> Option<&str> {
        crate::matching::suggest(unknown, self.opts.iter(), |o| o.name.as_str())
    }
}

/// A graphic character: something that occupies space when printed
///
/// The ASCII subset of these is exactly what POSIX permits as option characters; the check extends
/// naturally to the rest of Unicode.
#[inline]
pub(crate) fn is_graphic(ch: char) -> bool {
    !ch.is_whitespace() && !ch.is_control()
}

/// Long option set validation
pub(crate) mod validation {
    use super::{LongOpt, LongOptFlaw, LongOptSet};

    /// Checks validity of a long option set, optionally returning details of any problems
    ///
    /// If no problems are found, it returns `Ok(())`, otherwise `Err(_)`.
    ///
    /// If `detail` is `false`, it returns early on encountering a problem (with an empty `Vec`),
    /// useful for quick `is_valid` checks. Otherwise it builds up and provides a complete list of
    /// flaws.
    #[must_use]
    pub fn validate_set(set: &LongOptSet, detail: bool) -> Result<(), Vec<LongOptFlaw<'_>>> {
        let mut flaws: Vec<LongOptFlaw<'_>> = Vec::new();

        for candidate in &set.opts {
            if let Err(f) = LongOpt::validate(&candidate.name) {
                match detail {
                    true => { flaws.push(f); },
                    false => { return Err(flaws); },
                }
            }
        }

        let mut dupes = false;
        find_duplicates(set, &mut flaws, detail, &mut dupes);
        if !detail && dupes {
            return Err(flaws);
        }

        match flaws.is_empty() {
            true => Ok(()),
            false => Err(flaws),
        }
    }

    fn find_duplicates<'a>(set: &'a LongOptSet, flaws: &mut Vec<LongOptFlaw<'a>>, detail: bool,
        found: &mut bool)
    {
        let opts = &set.opts;
        if opts.is_empty() { return; }
        let mut duplicates = Vec::new();
        for (i, long) in opts[..opts.len()-1].iter().enumerate() {
            let name = long.name.as_str();
            if !duplicates.contains(&LongOptFlaw::Dup(name)) {
                for long2 in opts[i+1..].iter() {
                    if name == long2.name {
                        match detail {
                            true => {
                                duplicates.push(LongOptFlaw::Dup(name));
                                break;
                            },
                            false => { *found = true; return; },
                        }
                    }
                }
            }
        }
        if !duplicates.is_empty() {
            flaws.append(&mut duplicates);
        }
    }
}
