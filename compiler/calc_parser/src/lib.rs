pub mod parser;

pub use parser::{to_postfix, ConvertError, Paren, Postfix, PostfixToken};


// Integration tests are in the tests/ directory
