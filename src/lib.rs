//! `simpleargs` is a small command line option parser for Rust.
//!
//! A program declares the options it accepts, then hands the raw argument vector to the parser and gets back a typed, queryable container.
//! `simpleargs` keeps to a deliberately narrow grammar:
//! * *Options only*:
//! Every token is either `--full-name`, `-s` (a short alias), or the value of the option immediately before it.
//! There are no positional arguments, no `--name=value` syntax, no combined short flags (`-abc`), and no multi-value options.
//! * *Typed values*:
//! Each value option is declared with its type `T`; the raw text is converted and range checked during parsing, never by the caller.
//! * *Defaults and required options*:
//! An absent option resolves to its default, if it has one; an absent required option fails the parse.
//! * *A fixed-layout help page*:
//! `--help`/`-h` are always available and render a two column help page with configurable widths.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/server_options.rs")]
//! ```
//!
//! This generates the following Cli program:
//! ```console
//! $ server_options -h
//! Usage: server_options [options]
//! Serve files from a directory.
//! Available options:
//!   --port,-p arg(=8080)        Port to listen on.
//!   --root,-r arg               Directory to serve.
//!   --verbose,-v                Log every request.
//!   --workers arg               Number of worker threads.
//!
//! $ server_options -r /srv
//! Serving /srv on port 8080.
//!
//! $ server_options -r /srv --port 70000
//! Value out of range.
//!
//! $ server_options
//! Please set required param --root.
//! ```
//!
//! # Declaring options
//! Start with an [`ArgsInitializer`] and chain declarations.
//! Each declaration is validated immediately and returns a [`ParseError`] on a bad name:
//! * [`ArgsInitializer::flag`] declares a valueless option, present or absent.
//! * [`ArgsInitializer::value`] declares an option of type `T` via an [`ArgValue<T>`], optionally with a default.
//! * The `_with` variants additionally take [`ArgOptions`] (ex: [`ArgOptions::required`]).
//!
//! Option names are given as `"name"` or `"name, short"` without any `-` prefix; the parser adds `--`/`-`.
//! `help` and `h` are reserved.
//!
//! The help layout is configured with [`ArgsInitializer::with_layout`] (which fails with an [`InitializationError`] on zero widths),
//! and may be fitted to the terminal with [`ArgsInitializer::fit_terminal`].
//!
//! # Parsing
//! [`parse_args`] takes the argument vector (with the program name first) and returns an [`ArgsContainer`].
//! [`parse_env_args`] does the same for the process arguments, and [`parse_env_or_exit`] additionally prints help or errors and exits.
//!
//! # Querying
//! [`ArgsContainer::get`] retrieves a value by either its full or short name, as the declared type.
//! [`ArgsContainer::exists`] checks presence without failing.
//!
//! # Supported types
//! `bool`, the primitive integers, `f32`, `f64` and `String` implement [`ArgType`](prelude::ArgType).
//! Implement it for your own type to use that type as an option value.
//!
//! # Logging
//! Enable the `tracing_debug` feature to emit `tracing` debug events for declarations, token matching and defaults.
pub use simpleargs_builder::*;
