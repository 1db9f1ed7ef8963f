// Copyright 2026 the `argot` developers
//
// This file is part of the `argot` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! The parser tree
//!
//! Subcommand based programs register one parser per command, each with its own optstring and
//! long option declarations, forming a tree: `git push origin` style input dispatches from the
//! root parser through the `push` parser, with `origin` left for `push` to see.
//!
//! Registration happens before iteration begins and the tree is not mutated during parsing. A
//! command name may have any number of aliases; an alias is indistinguishable from the canonical
//! name at dispatch time. The parent link is a non-owning back-reference used for inherited
//! option lookup: an option declared on an ancestor parser can be given on a child's command
//! line without re-declaring it at every level.
//!
//! Dispatch itself is driven by iteration: when the option scan stops at a non-option argument
//! that names a registered command, iteration terminates with the match recorded (see
//! [`Parser::dispatch`]); the driver then typically calls [`Parser::execute_command`] to obtain
//! the child with fresh state over the remaining arguments and continues with it.
//!
//! [`Parser::dispatch`]: ../parser/struct.Parser.html#method.dispatch
//! [`Parser::execute_command`]: ../parser/struct.Parser.html#method.execute_command

use std::cell::RefCell;
use std::rc::Rc;
use crate::errors::TreeError;
use crate::options::{LongOpt, ShortOpt};
use crate::parser::{Parser, State};

/// A command registry entry: one name (canonical or alias) mapping to a child parser
///
/// Aliases are separate entries sharing the same child handle.
pub(crate) struct CommandEntry {
    pub(crate) name: String,
    pub(crate) child: Parser,
}

impl Parser {
    /// Register `child` as the parser for the command `name`
    ///
    /// The child gains a (non-owning) back-reference to `self`, through which option lookups fall
    /// back to this parser's declarations during the child's parsing.
    ///
    /// Fails with [`CommandConflict`] if `name` is already registered here for a different
    /// parser, or if `child` is already registered under some other parent; registering the same
    /// child under the same name again is a no-op. Fails with [`CommandCycle`] if `child`'s
    /// subtree contains `self` (including `child` being `self`).
    ///
    /// [`CommandConflict`]: ../errors/enum.TreeError.html#variant.CommandConflict
    /// [`CommandCycle`]: ../errors/enum.TreeError.html#variant.CommandCycle
    pub fn add_cmd(&self, name: &str, child: Parser) -> Result<(), TreeError> {
        {
            let st = self.state.borrow();
            if let Some(entry) = st.commands.iter().find(|e| e.name == name) {
                return match entry.child.same_as(&child) {
                    true => Ok(()),
                    false => Err(TreeError::CommandConflict(name.to_owned())),
                };
            }
        }
        if self.same_as(&child) || subtree_contains(&child, &self.state) {
            return Err(TreeError::CommandCycle(name.to_owned()));
        }
        {
            // A child may carry several names under one parent, but never two parents
            let child_st = child.state.borrow();
            if let Some(existing) = child_st.parent.as_ref().and_then(|weak| weak.upgrade()) {
                if !Rc::ptr_eq(&existing, &self.state) {
                    return Err(TreeError::CommandConflict(name.to_owned()));
                }
            }
        }
        child.state.borrow_mut().parent = Some(Rc::downgrade(&self.state));
        self.state.borrow_mut().commands.push(CommandEntry {
            name: name.to_owned(),
            child,
        });
        Ok(())
    }

    /// Register `alias` as an additional name for the command already registered as `existing`
    ///
    /// At dispatch time an alias behaves identically to the canonical name.
    pub fn add_alias(&self, alias: &str, existing: &str) -> Result<(), TreeError> {
        let target = {
            let st = self.state.borrow();
            match st.commands.iter().find(|e| e.name == existing) {
                Some(entry) => entry.child.clone(),
                None => return Err(TreeError::UnknownCommand(existing.to_owned())),
            }
        };
        {
            let st = self.state.borrow();
            if let Some(entry) = st.commands.iter().find(|e| e.name == alias) {
                return match entry.child.same_as(&target) {
                    true => Ok(()),
                    false => Err(TreeError::CommandConflict(alias.to_owned())),
                };
            }
        }
        self.state.borrow_mut().commands.push(CommandEntry {
            name: alias.to_owned(),
            child: target,
        });
        Ok(())
    }

    /// The full command mapping, aliases included, in registration order
    pub fn list_commands(&self) -> Vec<(String, Parser)> {
        self.state.borrow().commands.iter()
            .map(|e| (e.name.clone(), e.child.clone()))
            .collect()
    }

    /// Every registered name (canonical and alias) referring to the given parser, in registration
    /// order
    pub fn aliases_of(&self, parser: &Parser) -> Vec<String> {
        self.state.borrow().commands.iter()
            .filter(|e| e.child.same_as(parser))
            .map(|e| e.name.clone())
            .collect()
    }

    /// The parent parser, where this parser is registered as a command
    pub fn parent(&self) -> Option<Parser> {
        let weak = self.state.borrow().parent.clone()?;
        weak.upgrade().map(|state| Parser { state })
    }

    /// The command name iteration stopped at, if any, along with the arguments that follow it
    /// (the child's argument list)
    pub fn dispatch(&self) -> Option<(String, Vec<String>)> {
        let st = self.state.borrow();
        st.dispatch.as_ref().map(|d| (d.name.clone(), d.argv.clone()))
    }

    /// Hand control to the command registered as `name`: its parser is reset to fresh state over
    /// `args` and returned
    ///
    /// Typically driven from a [`dispatch`](#method.dispatch) record:
    ///
    /// ```rust
    /// # let parser = argot::getopt(vec![ "build", "-x" ], "+v").unwrap();
    /// # parser.add_cmd("build", argot::getopt(Vec::<String>::new(), "x").unwrap()).unwrap();
    /// parser.opts().for_each(|_| ());
    /// if let Some((name, rest)) = parser.dispatch() {
    ///     let child = parser.execute_command(&name, rest).unwrap();
    ///     // ... iterate child.opts() ...
    /// }
    /// ```
    pub fn execute_command(&self, name: &str, args: Vec<String>) -> Result<Parser, TreeError> {
        let child = {
            let st = self.state.borrow();
            match st.commands.iter().find(|e| e.name == name) {
                Some(entry) => entry.child.clone(),
                None => return Err(TreeError::UnknownCommand(name.to_owned())),
            }
        };
        child.reset_with_args(args);
        Ok(child)
    }

    /// Find the long option declaration for `name`, consulting this parser's table first and then
    /// walking the ancestor chain
    ///
    /// Lookup is by exact name at every level; abbreviations never participate here.
    pub fn find_long_with_fallback(&self, name: &str) -> Option<LongOpt> {
        {
            let st = self.state.borrow();
            if let Some(opt) = st.longopts.find(name) {
                return Some(opt.clone());
            }
        }
        let mut parent = self.parent();
        while let Some(ancestor) = parent {
            {
                let st = ancestor.state.borrow();
                if let Some(opt) = st.longopts.find(name) {
                    return Some(opt.clone());
                }
            }
            parent = ancestor.parent();
        }
        None
    }

    /// Find the short option declaration for `ch`, consulting this parser's optstring first and
    /// then walking the ancestor chain
    pub fn find_short_with_fallback(&self, ch: char) -> Option<ShortOpt> {
        {
            let st = self.state.borrow();
            if let Some(spec) = st.optstring.lookup(ch) {
                return Some(*spec);
            }
        }
        let mut parent = self.parent();
        while let Some(ancestor) = parent {
            {
                let st = ancestor.state.borrow();
                if let Some(spec) = st.optstring.lookup(ch) {
                    return Some(*spec);
                }
            }
            parent = ancestor.parent();
        }
        None
    }

    /// Find the best matching command name for the given string
    ///
    /// This is intended to be used when a command argument was expected but the given argument
    /// matched none, and you want to report an “unrecognised command” error indicating the most
    /// likely command the user may have meant, if a suitable suggestion can be found. E.g.
    ///
    /// > “Error: Unknown command ‘*x*’, did you mean ‘*y*’?”
    ///
    /// Specifically, this uses the `jaro_winkler` algorithm from the `strsim` crate; It filters
    /// out any candidates with a metric calculated as less than `0.8`, and returns the first
    /// candidate with the highest metric.
    #[cfg(feature = "suggestions")]
    pub fn suggest_command(&self, unknown: &str) -> Option<String> {
        let st = self.state.borrow();
        crate::matching::suggest(unknown, st.commands.iter(), |e| e.name.as_str())
            .map(str::to_owned)
    }
}

/// Whether the tree rooted at `parser` contains the parser behind `needle`
///
/// Aliases make the registry a DAG over entries, so visited nodes are tracked by identity.
fn subtree_contains(parser: &Parser, needle: &Rc<RefCell<State>>) -> bool {
    let mut visited: Vec<*const RefCell<State>> = Vec::new();
    let mut stack: Vec<Parser> = vec![ parser.clone() ];
    while let Some(current) = stack.pop() {
        if Rc::ptr_eq(&current.state, needle) {
            return true;
        }
        let ptr = Rc::as_ptr(&current.state);
        if visited.contains(&ptr) {
            continue;
        }
        visited.push(ptr);
        let st = current.state.borrow();
        for entry in &st.commands {
            stack.push(entry.child.clone());
        }
    }
    false
}
