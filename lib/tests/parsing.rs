// Copyright 2026 the `argot` developers
//
// This file is part of the `argot` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Parsing behaviour tests

#[allow(unused_macros)]
#[allow(dead_code)] //Mod shared across test crates
#[macro_use]
mod common;

use std::cell::RefCell;
use std::rc::Rc;
use argot::errors::ParseError;
use argot::parser::Opt;
use argot::{getopt, getopt_long, getopt_long_only};
use common::{base_longopts, collect};

////////////////////////////////////////////////////////////////////////////////////////////////////
// Basic option handling
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Some general, basic argument handling
#[test]
fn basic() {
    let args = arg_list!(
        "-h",       // Known short option
        "-b",       // Unknown short option
        "-bxs",     // Short cluster, two unknown, one known (`x`)
        "--help",   // Known long option
        "--xxx",    // Unknown long option
        "---yy",    // Extra dash should be taken as part of the long option name
        "abc",      // Non-option
    );
    let parser = getopt_long(args, "hxo:", argot::longopts!([ "help" ], [ "hah", required ]))
        .unwrap();
    assert_eq!(collect(&parser), vec![
        expected_opt!("h"),
        expected_err!(UnknownShort, 'b'),
        expected_err!(UnknownShort, 'b'),
        expected_err!(UnknownShort, 'x'),
        expected_err!(UnknownShort, 's'),
        expected_opt!("help"),
        expected_err!(UnknownLong, "xxx"),
        expected_err!(UnknownLong, "-yy"),
    ]);
    assert_eq!(parser.args(), vec![ "abc" ]);
}

/// An unknown option does not halt the cluster it sits in
#[test]
fn cluster_continues_past_unknown() {
    let parser = getopt(arg_list!("-bxs"), "x").unwrap();
    assert_eq!(collect(&parser), vec![
        expected_err!(UnknownShort, 'b'),
        expected_opt!("x"),
        expected_err!(UnknownShort, 's'),
    ]);
}

/// Option matching is case sensitive
#[test]
fn case_sensitivity() {
    let parser = getopt_long(arg_list!("--Foo", "-O"), "o", argot::longopts!([ "foo" ])).unwrap();
    assert_eq!(collect(&parser), vec![
        expected_err!(UnknownLong, "Foo"),
        expected_err!(UnknownShort, 'O'),
    ]);
}

/// Each repetition comes out in its own right
#[test]
fn repetition() {
    let parser = getopt(arg_list!("-h", "-h", "-hhh"), "h").unwrap();
    assert_eq!(collect(&parser), vec![
        expected_opt!("h"), expected_opt!("h"),
        expected_opt!("h"), expected_opt!("h"), expected_opt!("h"),
    ]);
}

/// A lone dash is the conventional stdin placeholder: a non-option
#[test]
fn lone_dash() {
    let parser = getopt(arg_list!("-v", "-", "-v"), "v").unwrap();
    assert_eq!(collect(&parser), vec![ expected_opt!("v"), expected_opt!("v") ]);
    assert_eq!(parser.args(), vec![ "-" ]);
}

/// An empty string argument is a non-option
#[test]
fn empty_arg() {
    let parser = getopt(arg_list!("", "-v"), "v").unwrap();
    assert_eq!(collect(&parser), vec![ expected_opt!("v") ]);
    assert_eq!(parser.args(), vec![ "" ]);
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Short option data values
////////////////////////////////////////////////////////////////////////////////////////////////////

mod short_data {
    use super::*;

    /// Required: in same argument, or consuming the next
    #[test]
    fn required() {
        let parser = getopt(arg_list!("-fx", "-f", "y", "-vf", "z"), "vf:").unwrap();
        assert_eq!(collect(&parser), vec![
            expected_opt!("f", "x"),
            expected_opt!("f", "y"),
            expected_opt!("v"),
            expected_opt!("f", "z"),
        ]);
    }

    /// An empty next argument is a legitimate value
    #[test]
    fn required_empty_next() {
        let parser = getopt(arg_list!("-f", ""), "f:").unwrap();
        assert_eq!(collect(&parser), vec![ expected_opt!("f", "") ]);
    }

    /// Required with nothing following is a problem, and a terminal one
    #[test]
    fn required_missing() {
        let parser = getopt(arg_list!("-v", "-f"), ":vf:").unwrap();
        assert_eq!(collect(&parser), vec![
            expected_opt!("v"),
            expected_err!(ShortMissingArg, 'f'),
        ]);
        assert!(parser.is_terminated());
        assert!(parser.args().is_empty());
    }

    /// Optional: only the remainder of the same argument ever supplies the value; the next
    /// argument is not consumed, which is what distinguishes optional from required
    #[test]
    fn optional() {
        let parser = getopt(arg_list!("-ox", "-o", "next"), "o::").unwrap();
        assert_eq!(collect(&parser), vec![
            expected_opt!("o", "x"),
            expected_opt!("o"),
        ]);
        assert_eq!(parser.args(), vec![ "next" ]);
    }

    /// A data-taking option mid-cluster swallows the cluster remainder
    #[test]
    fn mid_cluster() {
        let parser = getopt(arg_list!("-adbc", "-ad"), "ad::b").unwrap();
        assert_eq!(collect(&parser), vec![
            expected_opt!("a"),
            expected_opt!("d", "bc"),
            expected_opt!("a"),
            expected_opt!("d"),
        ]);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Long option handling
////////////////////////////////////////////////////////////////////////////////////////////////////

mod long {
    use super::*;

    #[test]
    fn flags_and_data() {
        let args = arg_list!(
            "--verbose",            // Flag
            "--file", "input.txt",  // Data in next argument
            "--file=direct",        // Data in same argument
            "--file=",              // Explicitly empty data, accepted for a required value
            "--output",             // Optional value, none supplied
            "--output=x",           // Optional value, supplied
            "--output=",            // Optional value, explicitly empty
        );
        let parser = getopt_long(args, "", base_longopts()).unwrap();
        assert_eq!(collect(&parser), vec![
            expected_opt!("verbose"),
            expected_opt!("file", "input.txt"),
            expected_opt!("file", "direct"),
            expected_opt!("file", ""),
            expected_opt!("output"),
            expected_opt!("output", "x"),
            expected_opt!("output", ""),
        ]);
    }

    /// The data payload is preserved bit-exact, embedded `=` included, with only the separator
    /// stripped
    #[test]
    fn data_preserves_equals() {
        let parser = getopt_long(arg_list!("--file=a=b=c"), "", base_longopts()).unwrap();
        assert_eq!(collect(&parser), vec![ expected_opt!("file", "a=b=c") ]);
    }

    /// Using the `=` form against a flag is a problem, empty value or not
    #[test]
    fn unexpected_data() {
        let parser = getopt_long(arg_list!("--verbose=x", "--verbose=", "--verbose"), "",
            base_longopts()).unwrap();
        assert_eq!(collect(&parser), vec![
            expected_err!(UnexpectedArg, "verbose"),
            expected_err!(UnexpectedArg, "verbose"),
            expected_opt!("verbose"),
        ]);
    }

    /// Missing required data is terminal at end of input
    #[test]
    fn missing_data() {
        let parser = getopt_long(arg_list!("--file"), "", base_longopts()).unwrap();
        assert_eq!(collect(&parser), vec![ expected_err!(LongMissingArg, "file") ]);
    }

    /// `--=` and `--=foo`: a name was not actually specified
    #[test]
    fn no_name() {
        let parser = getopt_long(arg_list!("--=", "--=foo"), "", base_longopts()).unwrap();
        assert_eq!(collect(&parser), vec![
            expected_err!(UnknownLong, ""),
            expected_err!(UnknownLong, ""),
        ]);
    }

    /// The problem item for an unknown long given with data carries the name component only
    #[test]
    fn unknown_with_data() {
        let parser = getopt_long(arg_list!("--blah=x"), "", base_longopts()).unwrap();
        assert_eq!(collect(&parser), vec![ expected_err!(UnknownLong, "blah") ]);
    }

    /// A `val` assignment normalises the yielded name to the short identifier
    #[test]
    fn val_normalisation() {
        let opts = argot::longopts!([ "file", required, @val 'f' ], [ "verbose", @val 'v' ]);
        let parser = getopt_long(arg_list!("--file", "x", "--verbose"), "", opts).unwrap();
        assert_eq!(collect(&parser), vec![
            expected_opt!("f", "x"),
            expected_opt!("v"),
        ]);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Abbreviated long option matching
////////////////////////////////////////////////////////////////////////////////////////////////////

mod abbreviations {
    use super::*;

    /// Every unique abbreviation resolves, normalised to the full declared name
    #[test]
    fn unique_prefixes() {
        let opts = argot::longopts!([ "abc" ]);
        let parser = getopt_long(arg_list!("--a", "--ab", "--abc"), "", opts).unwrap();
        assert_eq!(collect(&parser), vec![
            expected_opt!("abc"),
            expected_opt!("abc"),
            expected_opt!("abc"),
        ]);
    }

    /// An exact match overrules being a prefix of something longer
    #[test]
    fn exact_overrules() {
        let opts = argot::longopts!([ "enable-bob" ], [ "enable-bobadufoo" ]);
        let parser = getopt_long(arg_list!("--enable-bob"), "", opts).unwrap();
        assert_eq!(collect(&parser), vec![ expected_opt!("enable-bob") ]);
    }

    /// Ambiguity lists every candidate, in declaration order
    #[test]
    fn ambiguous() {
        let parser = getopt_long(arg_list!("--ver", "--verb"), "", base_longopts()).unwrap();
        assert_eq!(collect(&parser), vec![
            expected_err!(Ambiguous, "ver", [ "verbose", "version" ]),
            expected_opt!("verbose"),
        ]);
    }

    /// Abbreviation composes with a data value
    #[test]
    fn with_data() {
        let parser = getopt_long(arg_list!("--fil=x", "--fil", "y"), "", base_longopts()).unwrap();
        assert_eq!(collect(&parser), vec![
            expected_opt!("file", "x"),
            expected_opt!("file", "y"),
        ]);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Declared names containing `=`
////////////////////////////////////////////////////////////////////////////////////////////////////

mod equals_in_names {
    use super::*;

    /// With only `config` declared, everything after the first `=` is the value
    #[test]
    fn plain_split() {
        let opts = argot::longopts!([ "config", required ]);
        let parser = getopt_long(arg_list!("--config=env=production"), "", opts).unwrap();
        assert_eq!(collect(&parser), vec![ expected_opt!("config", "env=production") ]);
    }

    /// A declared name containing `=` matches in full, in preference to the split
    #[test]
    fn declared_name_wins() {
        let parser = getopt_long(
            arg_list!("--config=env", "--config=env=prod", "--config=other"),
            "", base_longopts()).unwrap();
        assert_eq!(collect(&parser), vec![
            expected_opt!("config=env"),            // exact, whole argument
            expected_opt!("config=env", "prod"),    // longest declared name at an `=` boundary
            expected_opt!("config", "other"),       // ordinary split
        ]);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Ordering modes
////////////////////////////////////////////////////////////////////////////////////////////////////

mod ordering {
    use super::*;

    /// Permute (the default): options may follow non-options; the residual comes out as a
    /// contiguous tail preserving the non-options' relative order
    #[test]
    fn permute() {
        let parser = getopt(arg_list!("a", "-v", "b", "c", "-x", "d"), "vx").unwrap();
        assert_eq!(collect(&parser), vec![ expected_opt!("v"), expected_opt!("x") ]);
        assert_eq!(parser.args(), vec![ "a", "b", "c", "d" ]);
    }

    /// Options separated from their values still pair up across an intervening non-option block
    #[test]
    fn permute_with_data() {
        let parser = getopt(arg_list!("a", "b", "-f", "x", "c"), "f:").unwrap();
        assert_eq!(collect(&parser), vec![ expected_opt!("f", "x") ]);
        assert_eq!(parser.args(), vec![ "a", "b", "c" ]);
    }

    /// Require-order (`+` prefix): the first non-option stops everything; the residual is the
    /// unprocessed suffix, verbatim
    #[test]
    fn require_order() {
        let parser = getopt(arg_list!("-v", "file.txt", "-f", "input.txt"), "+vf:").unwrap();
        assert_eq!(collect(&parser), vec![ expected_opt!("v") ]);
        assert_eq!(parser.args(), vec![ "file.txt", "-f", "input.txt" ]);
    }

    /// Return-in-order (`-` prefix): non-options are yielded in place under the pseudo-name `"1"`
    #[test]
    fn return_in_order() {
        let parser = getopt(arg_list!("-v", "a", "-x", "b"), "-vx").unwrap();
        assert_eq!(collect(&parser), vec![
            expected_opt!("v"),
            expected_opt!(argot::NONOPT, "a"),
            expected_opt!("x"),
            expected_opt!(argot::NONOPT, "b"),
        ]);
        assert!(parser.args().is_empty());
    }

    /// `--` stops even return-in-order treatment
    #[test]
    fn return_in_order_terminator() {
        let parser = getopt(arg_list!("a", "--", "b"), "-v").unwrap();
        assert_eq!(collect(&parser), vec![ expected_opt!(argot::NONOPT, "a") ]);
        assert_eq!(parser.args(), vec![ "b" ]);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// The `--` early terminator
////////////////////////////////////////////////////////////////////////////////////////////////////

mod early_term {
    use super::*;

    /// Everything after `--` is residual, however option-like, including further `--`s; the
    /// terminator itself is consumed
    #[test]
    fn basic() {
        let parser = getopt(arg_list!("-v", "--", "-x", "--", "-v"), "vx").unwrap();
        assert_eq!(collect(&parser), vec![ expected_opt!("v") ]);
        assert_eq!(parser.args(), vec![ "-x", "--", "-v" ]);
    }

    /// Under permute, non-options seen before `--` still end up ahead of those after it, order
    /// preserved
    #[test]
    fn with_pending_nonoptions() {
        let parser = getopt(arg_list!("a", "-v", "b", "--", "-x"), "vx").unwrap();
        assert_eq!(collect(&parser), vec![ expected_opt!("v") ]);
        assert_eq!(parser.args(), vec![ "a", "b", "-x" ]);
    }

    /// A required value consumes a following `--` as data, not as a terminator
    #[test]
    fn as_data() {
        let parser = getopt(arg_list!("-f", "--", "--", "x"), "f:").unwrap();
        assert_eq!(collect(&parser), vec![ expected_opt!("f", "--") ]);
        assert_eq!(parser.args(), vec![ "x" ]);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Long-only mode
////////////////////////////////////////////////////////////////////////////////////////////////////

mod long_only {
    use super::*;

    /// Single-dash names of two or more characters are tried as long options first, falling back
    /// to cluster interpretation when nothing matches; single characters go straight to short
    /// matching
    #[test]
    fn basic() {
        let opts = argot::longopts!([ "verbose" ], [ "file", required ]);
        let parser = getopt_long_only(arg_list!("-verbose", "-file", "input.txt", "-v"), "vf:",
            opts).unwrap();
        assert_eq!(collect(&parser), vec![
            expected_opt!("verbose"),
            expected_opt!("file", "input.txt"),
            expected_opt!("v"),
        ]);
        assert!(parser.args().is_empty());
    }

    /// No long match at all: the token is reinterpreted as a short option cluster
    #[test]
    fn fallback_to_cluster() {
        let opts = argot::longopts!([ "verbose" ]);
        let parser = getopt_long_only(arg_list!("-vx"), "vx", opts).unwrap();
        assert_eq!(collect(&parser), vec![ expected_opt!("v"), expected_opt!("x") ]);
    }

    /// Double-dash still works, and abbreviation applies on both forms
    #[test]
    fn double_dash_unaffected() {
        let opts = argot::longopts!([ "verbose" ]);
        let parser = getopt_long_only(arg_list!("--verb", "-verb"), "", opts).unwrap();
        assert_eq!(collect(&parser), vec![
            expected_opt!("verbose"),
            expected_opt!("verbose"),
        ]);
    }

    /// An ambiguous single-dash match is a problem, not a cluster fallback
    #[test]
    fn ambiguity_no_fallback() {
        let opts = argot::longopts!([ "verbose" ], [ "version" ]);
        let parser = getopt_long_only(arg_list!("-ver"), "ver", opts).unwrap();
        assert_eq!(collect(&parser), vec![
            expected_err!(Ambiguous, "ver", [ "verbose", "version" ]),
        ]);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// End-to-end scenarios
////////////////////////////////////////////////////////////////////////////////////////////////////

mod scenarios {
    use super::*;

    /// Cluster, data values, optional value not consuming the next argument, `--`
    #[test]
    fn short_mix() {
        let args = arg_list!("-vf", "input.txt", "-o", "output.txt", "--", "extra", "args");
        let parser = getopt(args, "vf:o::").unwrap();
        assert_eq!(collect(&parser), vec![
            expected_opt!("v"),
            expected_opt!("f", "input.txt"),
            expected_opt!("o"),
        ]);
        // `-o` takes its value in-argument only, so `output.txt` is a non-option, permuted in
        // front of the post-terminator arguments with order preserved
        assert_eq!(parser.args(), vec![ "output.txt", "extra", "args" ]);
    }

    /// Long and short mixed
    #[test]
    fn long_mix() {
        let args = arg_list!("--verbose", "--file", "input.txt", "-o", "output.txt");
        let parser = getopt_long(args, "vf:o::", base_longopts()).unwrap();
        assert_eq!(collect(&parser), vec![
            expected_opt!("verbose"),
            expected_opt!("file", "input.txt"),
            expected_opt!("o"),
        ]);
        assert_eq!(parser.args(), vec![ "output.txt" ]);
    }

    /// Silent mode: problems still come through the iterator
    #[test]
    fn silent_problems() {
        let parser = getopt(arg_list!("-v", "-x", "-f"), ":vf:").unwrap();
        assert_eq!(collect(&parser), vec![
            expected_opt!("v"),
            expected_err!(UnknownShort, 'x'),
            expected_err!(ShortMissingArg, 'f'),
        ]);
        assert!(parser.args().is_empty());
    }

    /// The longest of two nested declarations wins for input naming it in full
    #[test]
    fn nested_declarations() {
        let opts = argot::longopts!([ "enable-bob" ], [ "enable-bobadufoo" ]);
        let parser = getopt_long(arg_list!("--enable-bobadufoo", "advanced"), "", opts).unwrap();
        assert_eq!(collect(&parser), vec![ expected_opt!("enable-bobadufoo") ]);
        assert_eq!(parser.args(), vec![ "advanced" ]);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Repeatability, abandonment, residual re-parsing
////////////////////////////////////////////////////////////////////////////////////////////////////

mod lifecycle {
    use super::*;

    /// The same input yields the identical sequence across repeated constructions
    #[test]
    fn repeatable() {
        let args = arg_list!("a", "-vf", "x", "--blah", "b");
        let first = getopt(args.clone(), ":vf:").unwrap();
        let second = getopt(args, ":vf:").unwrap();
        assert_eq!(collect(&first), collect(&second));
        assert_eq!(first.args(), second.args());
    }

    /// Iteration after termination yields nothing further
    #[test]
    fn terminates_once() {
        let parser = getopt(arg_list!("-v"), "v").unwrap();
        assert_eq!(collect(&parser), vec![ expected_opt!("v") ]);
        assert!(parser.is_terminated());
        assert_eq!(parser.opts().next(), None);
        assert_eq!(parser.opts().next(), None);
    }

    /// Feeding the permute-mode residual back through a fresh parser yields no options at all
    #[test]
    fn residual_reparse() {
        let parser = getopt(arg_list!("a", "-v", "b", "-f", "x", "c"), "vf:").unwrap();
        let _ = collect(&parser);
        let residual = parser.args();
        assert_eq!(residual, vec![ "a", "b", "c" ]);

        let reparse = getopt(residual.clone(), "vf:").unwrap();
        assert!(collect(&reparse).is_empty());
        assert_eq!(reparse.args(), residual);
    }

    /// Abandoned iteration: `args` reflects only what accumulated; `finalize` completes the
    /// pending permutation and freezes the rest as residual
    #[test]
    fn abandonment() {
        let parser = getopt(arg_list!("a", "-v", "b", "-x", "c"), "vx").unwrap();
        let first = parser.opts().next();
        assert_eq!(first, Some(expected_opt!("v")));
        assert!(!parser.is_terminated());
        assert_eq!(parser.args(), vec![ "a" ]);

        parser.finalize();
        assert!(parser.is_terminated());
        assert_eq!(parser.args(), vec![ "a", "b", "-x", "c" ]);

        // Finalizing is idempotent, and iteration now yields nothing
        parser.finalize();
        assert_eq!(parser.opts().next(), None);
    }

    /// A fresh `opts()` iterator continues where an abandoned one left off
    #[test]
    fn resumed_iteration() {
        let parser = getopt(arg_list!("-v", "-x"), "vx").unwrap();
        assert_eq!(parser.opts().next(), Some(expected_opt!("v")));
        assert_eq!(parser.opts().next(), Some(expected_opt!("x")));
        assert_eq!(parser.opts().next(), None);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Diagnostics
////////////////////////////////////////////////////////////////////////////////////////////////////

mod diagnostics {
    use super::*;

    /// Problems write a GNU-format diagnostic to the sink before being yielded
    #[test]
    fn format() {
        let parser = getopt_long(arg_list!("-z", "--blah", "--ver", "--file"), "vf:",
            base_longopts()).unwrap();
        parser.set_prog("mytool");
        let sink: Rc<RefCell<Vec<u8>>> = Rc::new(RefCell::new(Vec::new()));
        parser.set_diagnostic_sink(sink.clone());

        let items = collect(&parser);
        assert_eq!(items.iter().filter(|i| i.is_err()).count(), 4);

        let written = String::from_utf8(sink.borrow().clone()).unwrap();
        assert_eq!(written, "\
mytool: invalid option -- 'z'
mytool: unrecognized option '--blah'
mytool: option '--ver' is ambiguous; possibilities: --verbose --version
mytool: option '--file' requires an argument
");
    }

    /// The program name defaults to a placeholder until injected
    #[test]
    fn default_prog() {
        let parser = getopt(arg_list!("-z"), "v").unwrap();
        assert_eq!(parser.prog(), "program");
        let sink: Rc<RefCell<Vec<u8>>> = Rc::new(RefCell::new(Vec::new()));
        parser.set_diagnostic_sink(sink.clone());
        let _ = collect(&parser);
        assert_eq!(String::from_utf8(sink.borrow().clone()).unwrap(),
            "program: invalid option -- 'z'\n");
    }

    /// Silent mode routes diagnostics to a no-op sink at construction
    #[test]
    fn silent() {
        let parser = getopt(arg_list!("-z"), ":v").unwrap();
        assert!(parser.optstring().is_silent());
        // The problem is still yielded; nothing observable is written anywhere
        assert_eq!(collect(&parser), vec![ expected_err!(UnknownShort, 'z') ]);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Factory failures
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Optstring compilation problems surface from the factory, before any parsing
#[test]
fn invalid_optstring() {
    use argot::errors::OptstringError;
    assert_eq!(getopt(arg_list!("-v"), "a-b").unwrap_err(), OptstringError::ForbiddenChar('-'));
    assert_eq!(getopt(arg_list!("-v"), "a;").unwrap_err(), OptstringError::ForbiddenChar(';'));
    assert_eq!(getopt(arg_list!("-v"), "a b").unwrap_err(), OptstringError::NotGraphic(' '));
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Utf-8 character handling
////////////////////////////////////////////////////////////////////////////////////////////////////

mod utf8 {
    use super::*;

    /// Multi-byte short options cluster and take data like any other
    #[test]
    fn short() {
        let parser = getopt(arg_list!("-❤x", "-éabc", "-é", "next"), "❤é:x").unwrap();
        assert_eq!(collect(&parser), vec![
            expected_opt!("❤"),
            expected_opt!("x"),
            expected_opt!("é", "abc"),
            expected_opt!("é", "next"),
        ]);
    }

    /// Multi-byte long option names and values
    #[test]
    fn long() {
        let opts = argot::longopts!([ "ábc" ], [ "ƒƒ", required ]);
        let parser = getopt_long(arg_list!("--ábc", "--ƒƒ=€€€"), "", opts).unwrap();
        assert_eq!(collect(&parser), vec![
            expected_opt!("ábc"),
            expected_opt!("ƒƒ", "€€€"),
        ]);
    }
}
