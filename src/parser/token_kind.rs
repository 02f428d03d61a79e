//! Token kinds produced by the lexer
//!
//! Trivia tokens are kept so the token stream is lossless; the parser
//! filters them out and only remembers whether a token was preceded by
//! whitespace (Ruby's command-call syntax depends on it).

/// All token kinds in the Ruby expression subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    COMMENT,

    // Newlines terminate statements, so they are significant
    NEWLINE,

    // =========================================================================
    // NAMES AND LITERALS
    // =========================================================================
    IDENT,              // foo, _bar
    CONST,              // Foo
    IVAR,               // @foo
    CVAR,               // @@foo
    GVAR,               // $foo
    INTEGER,            // 42
    FLOAT,              // 3.14
    STRING,             // "hello" or 'hello'
    SYMBOL,             // :hello

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_PAREN,            // (
    R_PAREN,            // )
    L_BRACKET,          // [
    R_BRACKET,          // ]
    L_BRACE,            // {
    R_BRACE,            // }
    COMMA,              // ,
    SEMICOLON,          // ;
    DOT,                // .
    DOT_DOT,            // ..
    DOT_DOT_DOT,        // ...
    AMP_DOT,            // &.
    COLON_COLON,        // ::
    COLON,              // :
    QUESTION,           // ?
    FAT_ARROW,          // =>

    // =========================================================================
    // OPERATORS
    // =========================================================================
    EQ,                 // =
    EQ_EQ,              // ==
    EQ_EQ_EQ,           // ===
    BANG_EQ,            // !=
    EQ_TILDE,           // =~
    BANG_TILDE,         // !~
    SPACESHIP,          // <=>
    LT,                 // <
    LT_EQ,              // <=
    GT,                 // >
    GT_EQ,              // >=
    LT_LT,              // <<
    GT_GT,              // >>
    PLUS,               // +
    MINUS,              // -
    STAR,               // *
    STAR_STAR,          // **
    SLASH,              // /
    PERCENT,            // %
    BANG,               // !
    TILDE,              // ~
    AMP,                // &
    AMP_AMP,            // &&
    PIPE,               // |
    PIPE_PIPE,          // ||
    CARET,              // ^

    // Compound assignment
    PIPE_PIPE_EQ,       // ||=
    AMP_AMP_EQ,         // &&=
    PLUS_EQ,            // +=
    MINUS_EQ,           // -=
    STAR_EQ,            // *=
    SLASH_EQ,           // /=

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    AND_KW,
    BEGIN_KW,
    CLASS_KW,
    DEF_KW,
    DO_KW,
    ELSE_KW,
    ELSIF_KW,
    END_KW,
    ENSURE_KW,
    FALSE_KW,
    IF_KW,
    MODULE_KW,
    NIL_KW,
    NOT_KW,
    OR_KW,
    RESCUE_KW,
    SELF_KW,
    SUPER_KW,
    THEN_KW,
    TRUE_KW,
    UNLESS_KW,

    // =========================================================================
    // SPECIAL
    // =========================================================================
    ERROR,
    EOF,
}

impl TokenKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::AND_KW as u16) && (self as u16) <= (Self::UNLESS_KW as u16)
    }

    /// Check if this token ends a statement
    pub fn is_terminator(self) -> bool {
        matches!(self, Self::NEWLINE | Self::SEMICOLON)
    }

    /// Human-readable description used in parse errors
    pub fn describe(self) -> &'static str {
        match self {
            Self::NEWLINE => "newline",
            Self::IDENT => "identifier",
            Self::CONST => "constant",
            Self::IVAR => "instance variable",
            Self::CVAR => "class variable",
            Self::GVAR => "global variable",
            Self::INTEGER | Self::FLOAT => "number",
            Self::STRING => "string",
            Self::SYMBOL => "symbol",
            Self::L_PAREN => "`(`",
            Self::R_PAREN => "`)`",
            Self::L_BRACKET => "`[`",
            Self::R_BRACKET => "`]`",
            Self::L_BRACE => "`{`",
            Self::R_BRACE => "`}`",
            Self::COMMA => "`,`",
            Self::DOT => "`.`",
            Self::PIPE => "`|`",
            Self::EQ => "`=`",
            Self::FAT_ARROW => "`=>`",
            Self::END_KW => "`end`",
            Self::EOF => "end of input",
            Self::ERROR => "invalid token",
            kind if kind.is_keyword() => "keyword",
            _ => "operator",
        }
    }
}
