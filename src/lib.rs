//! Library entrypoint for `shsplit`.
//!
//! The crate splits a string into the words `/bin/sh` would produce after
//! quote removal. No expansion of any kind is performed.

pub mod splitter;

pub use splitter::{
    CharSet, SplitError, SplitOptions, Splitter, split, split_n, split_with_options,
};
