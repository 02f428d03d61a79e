//! Logos-based lexer for Ruby expressions
//!
//! Fast tokenization using the logos crate.

use super::token_kind::TokenKind;
use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    /// Byte range covered by this token
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }

    /// Offset just past the end of this token
    pub fn end(&self) -> TextSize {
        self.offset + TextSize::of(self.text)
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\f]+")]
    #[regex(r"\\\r?\n")]
    Whitespace,

    #[regex(r"#[^\n]*")]
    Comment,

    #[token("\n")]
    Newline,

    // =========================================================================
    // NAMES AND LITERALS
    // =========================================================================
    #[regex(r"[a-z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[A-Z][a-zA-Z0-9_]*")]
    Const,

    #[regex(r"@[a-zA-Z_][a-zA-Z0-9_]*")]
    Ivar,

    #[regex(r"@@[a-zA-Z_][a-zA-Z0-9_]*")]
    Cvar,

    #[regex(r"\$([a-zA-Z_][a-zA-Z0-9_]*|[0-9]+|[!@&~*$?:<>,./;\\])")]
    Gvar,

    #[regex(r"[0-9][0-9_]*")]
    #[regex(r"0[xX][0-9a-fA-F_]+")]
    Integer,

    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+")]
    Float,

    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r#"'([^'\\]|\\.)*'"#)]
    String,

    #[regex(r":[a-zA-Z_][a-zA-Z0-9_]*[?!]?")]
    Symbol,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (must come before single-char)
    // =========================================================================
    #[token("...")]
    DotDotDot,
    #[token("..")]
    DotDot,
    #[token("&.")]
    AmpDot,
    #[token("::")]
    ColonColon,
    #[token("=>")]
    FatArrow,
    #[token("===")]
    EqEqEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    BangEq,
    #[token("=~")]
    EqTilde,
    #[token("!~")]
    BangTilde,
    #[token("<=>")]
    Spaceship,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("<<")]
    LtLt,
    #[token(">>")]
    GtGt,
    #[token("**")]
    StarStar,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("||=")]
    PipePipeEq,
    #[token("&&=")]
    AmpAmpEq,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("?")]
    Question,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,

    // =========================================================================
    // KEYWORDS (exact matches win over the identifier regex)
    // =========================================================================
    #[token("and")]
    AndKw,
    #[token("begin")]
    BeginKw,
    #[token("class")]
    ClassKw,
    #[token("def")]
    DefKw,
    #[token("do")]
    DoKw,
    #[token("else")]
    ElseKw,
    #[token("elsif")]
    ElsifKw,
    #[token("end")]
    EndKw,
    #[token("ensure")]
    EnsureKw,
    #[token("false")]
    FalseKw,
    #[token("if")]
    IfKw,
    #[token("module")]
    ModuleKw,
    #[token("nil")]
    NilKw,
    #[token("not")]
    NotKw,
    #[token("or")]
    OrKw,
    #[token("rescue")]
    RescueKw,
    #[token("self")]
    SelfKw,
    #[token("super")]
    SuperKw,
    #[token("then")]
    ThenKw,
    #[token("true")]
    TrueKw,
    #[token("unless")]
    UnlessKw,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => TokenKind::WHITESPACE,
            Comment => TokenKind::COMMENT,
            Newline => TokenKind::NEWLINE,

            // Names and literals
            Ident => TokenKind::IDENT,
            Const => TokenKind::CONST,
            Ivar => TokenKind::IVAR,
            Cvar => TokenKind::CVAR,
            Gvar => TokenKind::GVAR,
            Integer => TokenKind::INTEGER,
            Float => TokenKind::FLOAT,
            String => TokenKind::STRING,
            Symbol => TokenKind::SYMBOL,

            // Multi-char punctuation
            DotDotDot => TokenKind::DOT_DOT_DOT,
            DotDot => TokenKind::DOT_DOT,
            AmpDot => TokenKind::AMP_DOT,
            ColonColon => TokenKind::COLON_COLON,
            FatArrow => TokenKind::FAT_ARROW,
            EqEqEq => TokenKind::EQ_EQ_EQ,
            EqEq => TokenKind::EQ_EQ,
            BangEq => TokenKind::BANG_EQ,
            EqTilde => TokenKind::EQ_TILDE,
            BangTilde => TokenKind::BANG_TILDE,
            Spaceship => TokenKind::SPACESHIP,
            LtEq => TokenKind::LT_EQ,
            GtEq => TokenKind::GT_EQ,
            LtLt => TokenKind::LT_LT,
            GtGt => TokenKind::GT_GT,
            StarStar => TokenKind::STAR_STAR,
            AmpAmp => TokenKind::AMP_AMP,
            PipePipe => TokenKind::PIPE_PIPE,
            PipePipeEq => TokenKind::PIPE_PIPE_EQ,
            AmpAmpEq => TokenKind::AMP_AMP_EQ,
            PlusEq => TokenKind::PLUS_EQ,
            MinusEq => TokenKind::MINUS_EQ,
            StarEq => TokenKind::STAR_EQ,
            SlashEq => TokenKind::SLASH_EQ,

            // Single-char punctuation
            LParen => TokenKind::L_PAREN,
            RParen => TokenKind::R_PAREN,
            LBracket => TokenKind::L_BRACKET,
            RBracket => TokenKind::R_BRACKET,
            LBrace => TokenKind::L_BRACE,
            RBrace => TokenKind::R_BRACE,
            Comma => TokenKind::COMMA,
            Semicolon => TokenKind::SEMICOLON,
            Dot => TokenKind::DOT,
            Colon => TokenKind::COLON,
            Question => TokenKind::QUESTION,
            Eq => TokenKind::EQ,
            Lt => TokenKind::LT,
            Gt => TokenKind::GT,
            Plus => TokenKind::PLUS,
            Minus => TokenKind::MINUS,
            Star => TokenKind::STAR,
            Slash => TokenKind::SLASH,
            Percent => TokenKind::PERCENT,
            Bang => TokenKind::BANG,
            Tilde => TokenKind::TILDE,
            Amp => TokenKind::AMP,
            Pipe => TokenKind::PIPE,
            Caret => TokenKind::CARET,

            // Keywords
            AndKw => TokenKind::AND_KW,
            BeginKw => TokenKind::BEGIN_KW,
            ClassKw => TokenKind::CLASS_KW,
            DefKw => TokenKind::DEF_KW,
            DoKw => TokenKind::DO_KW,
            ElseKw => TokenKind::ELSE_KW,
            ElsifKw => TokenKind::ELSIF_KW,
            EndKw => TokenKind::END_KW,
            EnsureKw => TokenKind::ENSURE_KW,
            FalseKw => TokenKind::FALSE_KW,
            IfKw => TokenKind::IF_KW,
            ModuleKw => TokenKind::MODULE_KW,
            NilKw => TokenKind::NIL_KW,
            NotKw => TokenKind::NOT_KW,
            OrKw => TokenKind::OR_KW,
            RescueKw => TokenKind::RESCUE_KW,
            SelfKw => TokenKind::SELF_KW,
            SuperKw => TokenKind::SUPER_KW,
            ThenKw => TokenKind::THEN_KW,
            TrueKw => TokenKind::TRUE_KW,
            UnlessKw => TokenKind::UNLESS_KW,
        }
    }
}
