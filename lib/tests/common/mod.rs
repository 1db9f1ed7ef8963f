// Copyright 2026 the `argot` developers
//
// This file is part of the `argot` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Shared stuff

use argot::errors::ParseError;
use argot::options::LongOptSet;
use argot::parser::{Opt, Parser};

/// Used for cleaner creation of a set of test arguments
#[macro_export]
macro_rules! arg_list {
    ( $($e:expr),* $(,)? ) => { vec![ $($e),* ] };
}

/// Construct an expected `Ok` iteration item
///
/// The first param is the option name; the optional second param is the data value (omitted
/// meaning none was supplied).
macro_rules! expected_opt {
    ( $name:expr ) => {
        Ok(Opt { name: $name.to_string(), arg: None })
    };
    ( $name:expr, $arg:expr ) => {
        Ok(Opt { name: $name.to_string(), arg: Some($arg.to_string()) })
    };
}

/// Construct an expected `Err` iteration item
macro_rules! expected_err {
    ( UnknownShort, $c:expr ) => { Err(ParseError::UnknownShort($c)) };
    ( UnknownLong, $n:expr ) => { Err(ParseError::UnknownLong($n.to_string())) };
    ( ShortMissingArg, $c:expr ) => { Err(ParseError::ShortMissingArg($c)) };
    ( LongMissingArg, $n:expr ) => { Err(ParseError::LongMissingArg($n.to_string())) };
    ( UnexpectedArg, $n:expr ) => { Err(ParseError::UnexpectedArg($n.to_string())) };
    ( Ambiguous, $n:expr, [ $($c:expr),* ] ) => {
        Err(ParseError::Ambiguous {
            name: $n.to_string(),
            candidates: argot::errors::Candidates(vec![ $($c.to_string()),* ]),
        })
    };
}

/// A base set of long options for common usage in tests
pub fn base_longopts() -> LongOptSet {
    argot::longopts!(
        [ "help" ],
        [ "verbose" ],
        [ "version" ],
        [ "file", required ],
        [ "output", optional ],
        [ "foobar" ],
        [ "config", required ],     // For `=`-containing value checking
        [ "config=env", required ], // A name containing `=` (permitted, unlike GNU)
    )
}

/// Drive the given parser to termination, collecting every yielded item
pub fn collect(parser: &Parser) -> Vec<Result<Opt, ParseError>> {
    parser.opts().collect()
}

/// Drive the given parser to termination, asserting no problems, collecting matched options only
pub fn collect_ok(parser: &Parser) -> Vec<Opt> {
    parser.opts().map(|item| item.expect("unexpected parse problem")).collect()
}
