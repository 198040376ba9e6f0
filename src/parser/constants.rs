// Constants for the Decaf front end

/// Longest identifier kept intact, in bytes.
/// Matches the fixed token buffer of the historic Decaf toolchain.
pub const MAX_ID_LEN: usize = 256;

/// Deepest nesting of blocks and expressions the parser descends into.
/// Every parenthesis, index, argument and block counts one level.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Reserved words; the lexer classifies these as keywords
pub const KEYWORDS: &[&str] = &[
    "bool", "break", "callout", "class", "continue", "def", "double", "else", "extends", "false",
    "float", "for", "if", "implements", "int", "interface", "new", "null", "return", "string",
    "this", "true", "void", "while",
];

/// Keywords that begin a variable declaration
pub const TYPE_KEYWORDS: &[&str] = &["int", "bool", "void"];

/// Every symbol the lexer recognises
pub const SYMBOLS: &[&str] = &[
    "(", ")", "[", "]", "{", "}", ";", ",", "=", "+", "-", "*", "/", "%", "<", ">", "<=", ">=",
    "==", "!=", "&&", "||", "!",
];
