// Copyright 2026 the `argot` developers
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Command dispatch example for the `argot` library
//!
//! This example demonstrates use of:
//!
//!  - A tree of sub-parsers with aliases (`fetch`/`f`, `clean`)
//!  - Dispatch driven from the iteration loop
//!  - An option (`--verbose`) declared once on the root and inherited by every subcommand

use argot::longopts;
use argot::parser::Parser;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // `+` so that options following the command name are the command's business, not ours
    let root = argot::getopt_long(args, "+v", longopts!([ "verbose", @val 'v' ]))
        .expect("optstring is valid");
    root.set_prog("commands");

    let fetch = argot::getopt_long(Vec::<String>::new(), "+a",
        longopts!([ "all", @val 'a' ], [ "depth", required ])).unwrap();
    let clean = argot::getopt_long(Vec::<String>::new(), "+n",
        longopts!([ "dry-run", @val 'n' ])).unwrap();
    root.add_cmd("fetch", fetch).unwrap();
    root.add_alias("f", "fetch").unwrap();
    root.add_cmd("clean", clean).unwrap();

    let mut verbose = false;
    for item in root.opts() {
        match item {
            Ok(opt) if opt.name == "v" => { verbose = true; },
            Ok(_) => {},
            Err(_) => std::process::exit(2),
        }
    }

    match root.dispatch() {
        Some((name, rest)) => {
            let sub = root.execute_command(&name, rest).unwrap();
            run_command(&name, &sub, verbose);
        },
        None => {
            eprintln!("commands: expected a command (one of: fetch, f, clean)");
            std::process::exit(2);
        },
    }
}

fn run_command(name: &str, sub: &Parser, verbose: bool) {
    for item in sub.opts() {
        match item {
            Ok(opt) => {
                if verbose {
                    match &opt.arg {
                        Some(data) => println!("[{}] option {} = {:?}", name, opt.name, data),
                        None => println!("[{}] option {}", name, opt.name),
                    }
                }
            },
            Err(_) => std::process::exit(2),
        }
    }
    println!("[{}] would run over {:?}", name, sub.args());
}
