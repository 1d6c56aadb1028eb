//! Argument parsing: prefixes, the tokenizer, and person construction from
//! tokenized input.

pub mod cli_syntax;
pub mod person_parser;
pub mod prefix;
pub mod tokenizer;

pub use cli_syntax::prefix_for;
pub use person_parser::{parse_custom_fields, parse_person, parse_tags, person_from_arguments};
pub use prefix::Prefix;
pub use tokenizer::{ArgumentMultimap, ArgumentTokenizer};
