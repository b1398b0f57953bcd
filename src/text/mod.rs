//! Text processing - splitting raw text into studied tokens

pub mod script;
pub mod tokenizer;

pub use script::ScriptClass;
pub use tokenizer::{
    tokenize, LogographicTokenizer, TokenizeError, Tokenizer, WhitespaceTokenizer,
};
