// Copyright 2026 the `argot` developers
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-APACHE and LICENSE-MIT files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Test program for the `argot` library
//!
//! This test program takes user supplied command args, processes them with the library against an
//! example set of available options and commands, and outputs a description of the results
//! generated by the processing library.
//!
//! The analysis is output in color, where supported and applicable.
//!
//! See the `README.md` file for instructions.

use term_ctrl::predefined::*;
use argot::longopts;
use argot::parser::Parser;

const COL_HEADER: &str = colours::fg::MAGENTA;
const COL_O: &str = colours::fg::GREEN;  //okay
const COL_E: &str = colours::fg::RED;    //error
const COL_CMD: &str = colours::fg::CYAN; //command dispatch
const COL_DATA: &str = colours::fg::YELLOW;

/// Config: Used for holding state of stdout formatting support
pub mod config {
    use std::sync::Once;
    use term_ctrl::support::use_fmt_stdout;

    static mut FORMATTED_STDOUT: bool = false;
    static INIT: Once = Once::new();

    pub fn init() {
        unsafe {
            INIT.call_once(|| {
                FORMATTED_STDOUT = use_fmt_stdout(cfg!(feature = "color"));
            });
        }
    }

    pub fn formatted_stdout() -> bool {
        unsafe { FORMATTED_STDOUT }
    }
}

// Color? Filter the provided 'formatted-stdout-ctrl-seq' string
macro_rules! c {
    ( $code:expr ) => { if config::formatted_stdout() { $code } else { "" } };
}

/// The optstring the example parsers are built over
const OPTSTRING: &str = "hVf:c::";

fn build_parser(args: Vec<String>) -> Parser {
    let opts = longopts!(
        [ "help", @val 'h' ],
        [ "version" ],
        [ "file", required ],
        [ "color", optional ],
        [ "config", required ],
        [ "config=env", required ], // A name containing `=` is permitted, try it!
    );

    #[cfg(not(feature = "long_only"))]
    let parser = argot::getopt_long(args, OPTSTRING, opts)
        .expect("the example optstring is valid");
    #[cfg(feature = "long_only")]
    let parser = argot::getopt_long_only(args, OPTSTRING, opts)
        .expect("the example optstring is valid");

    parser.set_prog("argot-playground");
    parser
}

fn main() {
    config::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let parser = build_parser(args.clone());

    // A little command tree, so dispatch can be played with too
    let build = argot::getopt_long(Vec::<String>::new(), "+j:",
        longopts!([ "release" ], [ "jobs", required, @val 'j' ])).unwrap();
    let clean = argot::getopt_long(Vec::<String>::new(), "+n", longopts!([ "dry-run" ])).unwrap();
    parser.add_cmd("build", build).unwrap();
    parser.add_cmd("clean", clean).unwrap();
    parser.add_alias("b", "build").unwrap();

    println!("\n[ {}Mode{} ]\n", c!(COL_HEADER), c!(RESET));

    #[cfg(not(feature = "long_only"))]
    println!("STANDARD = Short options with single dash prefix and long options with double dash \
              prefix; compile with the `long_only` feature for `long-only` mode.\n");
    #[cfg(feature = "long_only")]
    println!("LONG-ONLY = Single dash arguments of two or more characters are first tried as long \
              options.\n");

    println!("[ {}Available options for test{} ]\n", c!(COL_HEADER), c!(RESET));

    println!("OPTSTRING {}", OPTSTRING);
    for item in parser.longopts().opts.iter() {
        use argot::options::HasArg;
        match item.has_arg {
            HasArg::No => println!("LONG {}", item.name),
            HasArg::Required =>
                println!("LONG {} {}[expects data!]{}", item.name, c!(COL_DATA), c!(RESET)),
            HasArg::Optional =>
                println!("LONG {} {}[optionally takes data]{}", item.name, c!(COL_DATA), c!(RESET)),
        }
    }
    for (name, _) in parser.list_commands() {
        println!("COMMAND {}", name);
    }

    println!("\n[ {}Your input arguments{} ]\n", c!(COL_HEADER), c!(RESET));

    match args.len() {
        0 => println!("None!"),
        _ => for (i, arg) in args.iter().enumerate() {
            println!("[{}]: {}", i, arg);
        },
    }

    println!("\n[ {}Analysis{} ]\n", c!(COL_HEADER), c!(RESET));

    describe(&parser);
}

/// Print each item a parser yields, then its dispatch/residual state, recursing into dispatched
/// commands
fn describe(parser: &Parser) {
    for item in parser.opts() {
        match item {
            Ok(opt) => match opt.arg {
                Some(data) => {
                    println!("{}Opt{}: {}", c!(COL_O), c!(RESET), opt.name);
                    match data.is_empty() {
                        true => println!("    {}empty-data{}", c!(effects::ITALIC), c!(RESET)),
                        false => println!("    data: {}", data),
                    }
                },
                None => println!("{}Opt{}: {}", c!(COL_O), c!(RESET), opt.name),
            },
            Err(problem) => {
                println!("{}Problem{}: {}", c!(COL_E), c!(RESET), problem);
            },
        }
    }

    if let Some((name, rest)) = parser.dispatch() {
        println!("{}Command{}: {} (taking {} argument(s))", c!(COL_CMD), c!(RESET), name,
            rest.len());
        let child = parser.execute_command(&name, rest).expect("dispatch names are registered");
        describe(&child);
        return;
    }

    let residual = parser.args();
    match residual.len() {
        0 => println!("Residual: none"),
        _ => {
            println!("Residual:");
            for (i, arg) in residual.iter().enumerate() {
                println!("[{}]: {}", i, arg);
            }
        },
    }
}
