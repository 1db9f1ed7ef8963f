// Copyright 2026 the `argot` developers
//
// This file is part of the `argot` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

/// Constructs a [`LongOpt`](options/struct.LongOpt.html)
///
/// Takes:
///
/// 1. Option name
/// 2. Optionally, the keyword `required` or `optional` describing its data value (omitted means
///    it takes none)
/// 3. Optionally, `@val <char>` assigning the single-character identifier the option is
///    normalised to
///
/// # Examples
///
/// ```rust
/// let _ = argot::longopt!("foo");                     // A simple option
/// let _ = argot::longopt!("bar", required);           // One that requires data
/// let _ = argot::longopt!("baz", optional);           // One that optionally takes data
/// let _ = argot::longopt!("file", required, @val 'f'); // Normalised to `f` when yielded
/// ```
#[macro_export]
macro_rules! longopt {
    ( $name:expr ) => {
        $crate::options::LongOpt::new($name, $crate::options::HasArg::No)
    };
    ( $name:expr, required ) => {
        $crate::options::LongOpt::new($name, $crate::options::HasArg::Required)
    };
    ( $name:expr, optional ) => {
        $crate::options::LongOpt::new($name, $crate::options::HasArg::Optional)
    };
    ( $name:expr, @val $val:expr ) => {
        $crate::longopt!($name).with_val($val)
    };
    ( $name:expr, required, @val $val:expr ) => {
        $crate::longopt!($name, required).with_val($val)
    };
    ( $name:expr, optional, @val $val:expr ) => {
        $crate::longopt!($name, optional).with_val($val)
    };
}

/// Constructs a [`LongOptSet`](options/struct.LongOptSet.html)
///
/// Takes a comma separated list of [`longopt!`](macro.longopt.html)-compatible declarations, each
/// within brackets.
///
/// # Example
///
/// ```rust
/// let _ = argot::longopts!(
///     [ "verbose" ],
///     [ "file", required ],
///     [ "color", optional ],
/// );
/// ```
#[macro_export]
macro_rules! longopts {
    ( $( [ $($opt:tt)+ ] ),* $(,)? ) => {{
        let mut set = $crate::options::LongOptSet::new();
        $( set.add_existing($crate::longopt!($($opt)+)); )*
        set
    }};
}
