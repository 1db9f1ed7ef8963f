// Copyright 2026 the `argot` developers
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Basic example for the `argot` library
//!
//! This example demonstrates use of:
//!
//!  - Iterative style parsing using a match block
//!  - A small option set declared through an optstring and the `longopts!` macro
//!  - A fixed string help text (for maximum efficiency)

use argot::longopts;

// A static help text string, for efficiency - no need to waste resources generating one dynamically
static HELP_TEXT: &str = "\
Simple example for the `argot` argument parser.

OPTIONS:
    -h, --help        Outputs this usage info.
    -V, --version     Outputs the version number of this example.
    -f, --file FILE   Names a file to pretend to work on.";

// Our program entry point
fn main() {
    // Collect our arguments, skipping the program name
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Setup our parser; the long options normalise onto their short identifiers, halving the
    // match arms below
    let opts = longopts!(
        [ "help", @val 'h' ],
        [ "version", @val 'V' ],
        [ "file", required, @val 'f' ],
    );
    let parser = argot::getopt_long(args, "hVf:", opts).expect("optstring is valid");
    parser.set_prog("basic");

    // Handle the results, iteratively
    //
    // Note how here we react to options like `--help` immediately upon encountering them,
    // disregarding any problem items that occur in subsequent arguments. It of course would be
    // trivial to remodel this.
    for item in parser.opts() {
        match item {
            Ok(opt) => match (opt.name.as_str(), opt.arg) {
                ("h", _) => {
                    println!("{}", HELP_TEXT);
                    return;
                },
                ("V", _) => {
                    println!("{}", env!("CARGO_PKG_VERSION"));
                    return;
                },
                ("f", Some(file)) => {
                    println!("Would work on file {:?}", file);
                },
                _ => unreachable!(), // All declared options covered above
            },
            // A diagnostic already went to stderr; the yielded value decides control flow
            Err(_problem) => {
                std::process::exit(2);
            },
        }
    }

    match parser.args().len() {
        0 => println!("Hello, World!"),
        n => println!("Hello, World! (and your {} extra argument(s))", n),
    }
}
