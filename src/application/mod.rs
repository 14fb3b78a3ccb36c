pub mod anagram;

pub use anagram::*;
