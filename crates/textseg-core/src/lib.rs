//! Shared types for textseg: character classification and the positional
//! records produced by the word tokenizer and sentence scanner.

pub mod character;
pub mod token;

pub use character::{
    CharClass, CharClassifier, CharSetError, default_classifier, get_char_class,
};
pub use token::{Sentence, Token};
