//! Recursive descent parser for Ruby expressions
//!
//! Builds an immutable [`SyntaxNode`] tree from tokens. Parsing stops at the
//! first error; there is no recovery.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::error::ParseError;
use super::lexer::{Lexer, Token};
use super::token_kind::TokenKind;
use crate::base::Name;
use crate::syntax::{Child, NodeKind, SyntaxNode};

type ParseResult<T> = Result<T, ParseError>;

/// Arguments collected for a call: positional nodes plus an optional
/// trailing `&value` (offset of the `&`, value node).
type Arguments = (Vec<SyntaxNode>, Option<(TextSize, SyntaxNode)>);

/// Tokens that end the statement list of a `begin`/`def`/`class` body
const BODY_CLAUSES: &[TokenKind] = &[
    TokenKind::RESCUE_KW,
    TokenKind::ELSE_KW,
    TokenKind::ENSURE_KW,
    TokenKind::END_KW,
];

/// Parse Ruby source into a syntax tree rooted at a `SCOPE` node
pub fn parse(input: &str) -> Result<SyntaxNode, ParseError> {
    let mut parser = Parser::new(input)?;
    parser.parse_program()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeKind {
    /// Top level, `def`, `class`, `module`: enclosing locals are invisible
    Hard,
    /// Block body: enclosing locals stay visible
    Block,
}

#[derive(Debug)]
struct LocalScope {
    kind: ScopeKind,
    names: FxHashSet<Name>,
    order: Vec<Name>,
}

impl LocalScope {
    fn new(kind: ScopeKind) -> Self {
        Self {
            kind,
            names: FxHashSet::default(),
            order: Vec::new(),
        }
    }
}

/// Left-hand side of an assignment
enum Target {
    Variable(NodeKind, Name),
    Attribute {
        receiver: SyntaxNode,
        method: Name,
        arguments: Vec<SyntaxNode>,
    },
}

enum BinaryOp {
    Node(NodeKind),
    Call,
}

/// The parser state
struct Parser<'a> {
    /// Significant tokens only
    tokens: Vec<Token<'a>>,
    /// Whether each token was preceded by whitespace or a comment
    spaced: Vec<bool>,
    pos: usize,
    last_end: TextSize,
    eof: TextSize,
    scopes: Vec<LocalScope>,
    /// Set while parsing command arguments, where `do` belongs to the outer call
    no_do_block: bool,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> ParseResult<Self> {
        let mut tokens = Vec::new();
        let mut spaced = Vec::new();
        let mut after_trivia = false;
        for token in Lexer::new(input) {
            match token.kind {
                TokenKind::ERROR => {
                    return Err(ParseError::InvalidToken {
                        text: token.text.to_string(),
                        range: token.range(),
                    });
                }
                kind if kind.is_trivia() => after_trivia = true,
                _ => {
                    tokens.push(token);
                    spaced.push(after_trivia);
                    after_trivia = false;
                }
            }
        }

        Ok(Self {
            tokens,
            spaced,
            pos: 0,
            last_end: TextSize::new(0),
            eof: TextSize::of(input),
            scopes: vec![LocalScope::new(ScopeKind::Hard)],
            no_do_block: false,
        })
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> TokenKind {
        self.nth(0)
    }

    fn nth(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map_or(TokenKind::EOF, |t| t.kind)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn at_terminator(&self) -> bool {
        self.at_eof() || self.current_kind().is_terminator()
    }

    /// Current token is preceded by whitespace
    fn spaced(&self) -> bool {
        self.spaced.get(self.pos).copied().unwrap_or(false)
    }

    /// The nth token is glued to the token before it
    fn adjacent(&self, n: usize) -> bool {
        !self.spaced.get(self.pos + n).copied().unwrap_or(true)
    }

    fn offset(&self) -> TextSize {
        self.current().map_or(self.last_end, |t| t.offset)
    }

    /// `name:` label in an argument list or hash literal
    fn at_label(&self) -> bool {
        let kind = self.current_kind();
        (matches!(kind, TokenKind::IDENT | TokenKind::CONST) || kind.is_keyword())
            && self.nth(1) == TokenKind::COLON
            && self.adjacent(1)
    }

    /// A method chain continues on the next line with a leading `.`
    fn continues_on_next_line(&self) -> bool {
        self.tokens[self.pos..]
            .iter()
            .find(|t| t.kind != TokenKind::NEWLINE)
            .is_some_and(|t| matches!(t.kind, TokenKind::DOT | TokenKind::AMP_DOT))
    }

    /// Current token starts an argument of a call written without parentheses
    fn at_command_argument(&self) -> bool {
        if !self.spaced() {
            return false;
        }
        match self.current_kind() {
            TokenKind::IDENT
            | TokenKind::CONST
            | TokenKind::IVAR
            | TokenKind::CVAR
            | TokenKind::GVAR
            | TokenKind::INTEGER
            | TokenKind::FLOAT
            | TokenKind::STRING
            | TokenKind::SYMBOL
            | TokenKind::SELF_KW
            | TokenKind::NIL_KW
            | TokenKind::TRUE_KW
            | TokenKind::FALSE_KW
            | TokenKind::SUPER_KW
            | TokenKind::DEF_KW
            | TokenKind::L_BRACKET
            | TokenKind::L_PAREN => true,
            // `foo -1`, `foo *args`, `foo &blk`, `foo ::Bar`
            TokenKind::MINUS
            | TokenKind::STAR
            | TokenKind::AMP
            | TokenKind::COLON_COLON
            | TokenKind::BANG
            | TokenKind::TILDE => self.adjacent(1),
            _ => false,
        }
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) -> Token<'a> {
        match self.tokens.get(self.pos).copied() {
            Some(token) => {
                self.pos += 1;
                self.last_end = token.end();
                token
            }
            None => Token {
                kind: TokenKind::EOF,
                text: "",
                offset: self.eof,
            },
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token<'a>> {
        if self.at(kind) {
            Ok(self.bump())
        } else {
            Err(self.unexpected(kind.describe()))
        }
    }

    fn skip_newlines(&mut self) {
        while self.at(TokenKind::NEWLINE) {
            self.bump();
        }
    }

    fn skip_terminators(&mut self) {
        while self.current_kind().is_terminator() {
            self.bump();
        }
    }

    /// Glue an adjacent `?` or `!` onto a method name
    fn with_suffix(&mut self, token: Token<'a>) -> Name {
        if self.at_any(&[TokenKind::QUESTION, TokenKind::BANG]) && self.adjacent(0) {
            let suffix = self.bump();
            return Name::from(format!("{}{}", token.text, suffix.text));
        }
        Name::from(token.text)
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.current() {
            Some(token) => ParseError::UnexpectedToken {
                expected,
                found: token.text.to_string(),
                range: token.range(),
            },
            None => ParseError::UnexpectedEof { expected },
        }
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    /// Node spanning from `start` to the end of the last consumed token
    fn finish(&self, kind: NodeKind, children: Vec<Child>, start: TextSize) -> SyntaxNode {
        SyntaxNode::new(kind, children, TextRange::new(start, self.last_end.max(start)))
    }

    fn binary_node(kind: NodeKind, left: SyntaxNode, right: SyntaxNode) -> SyntaxNode {
        let range = left.range().cover(right.range());
        SyntaxNode::new(kind, vec![left.into(), right.into()], range)
    }

    fn operator_call(left: SyntaxNode, operator: &str, right: SyntaxNode) -> SyntaxNode {
        let range = left.range().cover(right.range());
        let arguments = Self::list_node(vec![right]);
        SyntaxNode::new(
            NodeKind::OPCALL,
            vec![left.into(), Child::Name(operator.into()), arguments.into()],
            range,
        )
    }

    fn unary_call(&self, operand: SyntaxNode, operator: &str, start: TextSize) -> SyntaxNode {
        self.finish(
            NodeKind::OPCALL,
            vec![operand.into(), Child::Name(operator.into()), Child::Absent],
            start,
        )
    }

    /// `LIST [elements.., nil]`, or nothing for an empty list
    fn list_node(elements: Vec<SyntaxNode>) -> Option<SyntaxNode> {
        let range = elements.first()?.range().cover(elements.last()?.range());
        let mut children: Vec<Child> = elements.into_iter().map(Child::from).collect();
        children.push(Child::Absent);
        Some(SyntaxNode::new(NodeKind::LIST, children, range))
    }

    /// Argument child of a call: `LIST`, `BLOCK_PASS`, or nil
    fn arguments_child((arguments, block_pass): Arguments) -> Child {
        let list = Self::list_node(arguments);
        match block_pass {
            Some((start, value)) => {
                let end = value.range().end();
                let start = list.as_ref().map_or(start, |l| l.range().start());
                let node = SyntaxNode::new(
                    NodeKind::BLOCK_PASS,
                    vec![list.into(), value.into()],
                    TextRange::new(start, end),
                );
                Child::Node(node)
            }
            None => list.into(),
        }
    }

    /// Fold pending `key => value` pairs into one trailing hash argument
    fn flush_pairs(arguments: &mut Vec<SyntaxNode>, pairs: &mut Vec<SyntaxNode>) {
        let pairs = std::mem::take(pairs);
        if let Some(list) = Self::list_node(pairs) {
            let range = list.range();
            arguments.push(SyntaxNode::new(NodeKind::HASH, vec![list.into()], range));
        }
    }

    fn with_do_blocks<T>(
        &mut self,
        allowed: bool,
        parse: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let saved = std::mem::replace(&mut self.no_do_block, !allowed);
        let result = parse(self);
        self.no_do_block = saved;
        result
    }

    // =========================================================================
    // Local variable scopes
    // =========================================================================

    fn push_scope(&mut self, kind: ScopeKind) {
        self.scopes.push(LocalScope::new(kind));
    }

    fn pop_scope(&mut self) -> Vec<Name> {
        self.scopes.pop().map(|s| s.order).unwrap_or_default()
    }

    fn lookup(&self, name: &str) -> Option<ScopeKind> {
        for scope in self.scopes.iter().rev() {
            if scope.names.contains(name) {
                return Some(scope.kind);
            }
            if scope.kind == ScopeKind::Hard {
                break;
            }
        }
        None
    }

    /// Declare a local in the innermost scope unless it is already visible
    fn declare(&mut self, name: &Name) -> ScopeKind {
        if let Some(kind) = self.lookup(name) {
            return kind;
        }
        match self.scopes.last_mut() {
            Some(scope) => {
                scope.names.insert(name.clone());
                scope.order.push(name.clone());
                scope.kind
            }
            None => ScopeKind::Hard,
        }
    }

    fn local_read_kind(&self, name: &str) -> Option<NodeKind> {
        self.lookup(name).map(|scope| match scope {
            ScopeKind::Block => NodeKind::DVAR,
            ScopeKind::Hard => NodeKind::LVAR,
        })
    }

    // =========================================================================
    // Statements
    // =========================================================================

    /// Program = Statements EOF
    fn parse_program(&mut self) -> ParseResult<SyntaxNode> {
        let body = self.parse_statements(&[])?;
        if !self.at_eof() {
            return Err(self.unexpected("end of input"));
        }
        let table = self.pop_scope();
        Ok(SyntaxNode::new(
            NodeKind::SCOPE,
            vec![Child::Table(table), Child::Absent, body.into()],
            TextRange::new(TextSize::new(0), self.eof),
        ))
    }

    /// Statements = (Statement Terminator)*, stopping at any of `terminators`
    fn parse_statements(&mut self, terminators: &[TokenKind]) -> ParseResult<Option<SyntaxNode>> {
        let mut statements = Vec::new();
        loop {
            self.skip_terminators();
            if self.at_eof() || self.at_any(terminators) {
                break;
            }
            statements.push(self.parse_statement()?);
            if !self.at_terminator() && !self.at_any(terminators) {
                return Err(self.unexpected("end of statement"));
            }
        }

        Ok(match statements.len() {
            0 => None,
            1 => statements.pop(),
            _ => {
                let range = statements[0]
                    .range()
                    .cover(statements[statements.len() - 1].range());
                let children = statements.into_iter().map(Child::from).collect();
                Some(SyntaxNode::new(NodeKind::BLOCK, children, range))
            }
        })
    }

    /// Statement = Expression (`if` | `unless` | `rescue` Expression)*
    fn parse_statement(&mut self) -> ParseResult<SyntaxNode> {
        let mut statement = self.parse_expression()?;
        loop {
            let start = statement.range().start();
            match self.current_kind() {
                TokenKind::IF_KW | TokenKind::UNLESS_KW => {
                    let kind = if self.bump().kind == TokenKind::IF_KW {
                        NodeKind::IF
                    } else {
                        NodeKind::UNLESS
                    };
                    let condition = self.parse_expression()?;
                    statement = self.finish(
                        kind,
                        vec![condition.into(), statement.into(), Child::Absent],
                        start,
                    );
                }
                TokenKind::RESCUE_KW => {
                    let clause_start = self.bump().offset;
                    let fallback = self.parse_expression()?;
                    let handler = self.finish(
                        NodeKind::RESBODY,
                        vec![Child::Absent, fallback.into()],
                        clause_start,
                    );
                    statement = self.finish(
                        NodeKind::RESCUE,
                        vec![statement.into(), handler.into(), Child::Absent],
                        start,
                    );
                }
                _ => break,
            }
        }
        Ok(statement)
    }

    /// Expression = NotExpression ((`and` | `or`) NotExpression)*
    fn parse_expression(&mut self) -> ParseResult<SyntaxNode> {
        let mut left = self.parse_not()?;
        loop {
            let kind = match self.current_kind() {
                TokenKind::AND_KW => NodeKind::AND,
                TokenKind::OR_KW => NodeKind::OR,
                _ => break,
            };
            self.bump();
            self.skip_newlines();
            let right = self.parse_not()?;
            left = Self::binary_node(kind, left, right);
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> ParseResult<SyntaxNode> {
        if self.at(TokenKind::NOT_KW) {
            let start = self.bump().offset;
            let operand = self.parse_not()?;
            return Ok(self.unary_call(operand, "!", start));
        }
        self.parse_arg()
    }

    // =========================================================================
    // Assignment
    // =========================================================================

    /// Arg = Binary ((`=` | `||=` | `&&=` | `+=` ...) Arg)?
    fn parse_arg(&mut self) -> ParseResult<SyntaxNode> {
        let target = self.parse_binary(1)?;
        match self.current_kind() {
            TokenKind::EQ => {
                self.bump();
                self.skip_newlines();
                self.parse_assignment(target)
            }
            kind @ (TokenKind::PIPE_PIPE_EQ
            | TokenKind::AMP_AMP_EQ
            | TokenKind::PLUS_EQ
            | TokenKind::MINUS_EQ
            | TokenKind::STAR_EQ
            | TokenKind::SLASH_EQ) => {
                self.bump();
                self.skip_newlines();
                self.parse_op_assignment(target, kind)
            }
            _ => Ok(target),
        }
    }

    fn assignment_target(&mut self, target: &SyntaxNode) -> ParseResult<Target> {
        let invalid = || ParseError::InvalidAssignment {
            range: target.range(),
        };
        let name = target
            .child(0)
            .and_then(Child::as_name)
            .map(Name::from);

        match target.kind() {
            NodeKind::VCALL | NodeKind::LVAR | NodeKind::DVAR => {
                let name = name.ok_or_else(invalid)?;
                if name.ends_with(['?', '!']) {
                    return Err(invalid());
                }
                let kind = match self.declare(&name) {
                    ScopeKind::Block => NodeKind::DASGN,
                    ScopeKind::Hard => NodeKind::LASGN,
                };
                Ok(Target::Variable(kind, name))
            }
            NodeKind::IVAR => Ok(Target::Variable(NodeKind::IASGN, name.ok_or_else(invalid)?)),
            NodeKind::CVAR => Ok(Target::Variable(NodeKind::CVASGN, name.ok_or_else(invalid)?)),
            NodeKind::GVAR => Ok(Target::Variable(NodeKind::GASGN, name.ok_or_else(invalid)?)),
            NodeKind::CONST => Ok(Target::Variable(NodeKind::CDECL, name.ok_or_else(invalid)?)),
            NodeKind::CALL => {
                let receiver = target.child_node(0).cloned().ok_or_else(invalid)?;
                let method = target.child(1).and_then(Child::as_name).ok_or_else(invalid)?;
                match target.child(2) {
                    Some(Child::Absent) if !method.ends_with(['?', '!']) => Ok(Target::Attribute {
                        receiver,
                        method: Name::from(format!("{method}=")),
                        arguments: Vec::new(),
                    }),
                    Some(Child::Node(list)) if method == "[]" && list.kind() == NodeKind::LIST => {
                        let arguments = list
                            .children()
                            .iter()
                            .filter_map(Child::as_node)
                            .cloned()
                            .collect();
                        Ok(Target::Attribute {
                            receiver,
                            method: Name::new_static("[]="),
                            arguments,
                        })
                    }
                    _ => Err(invalid()),
                }
            }
            _ => Err(invalid()),
        }
    }

    fn parse_assignment(&mut self, target: SyntaxNode) -> ParseResult<SyntaxNode> {
        let start = target.range().start();
        match self.assignment_target(&target)? {
            Target::Variable(kind, name) => {
                let value = self.parse_arg()?;
                Ok(self.finish(kind, vec![Child::Name(name), value.into()], start))
            }
            Target::Attribute {
                receiver,
                method,
                mut arguments,
            } => {
                let value = self.parse_arg()?;
                arguments.push(value);
                let list = Self::list_node(arguments);
                Ok(self.finish(
                    NodeKind::ATTRASGN,
                    vec![receiver.into(), Child::Name(method), list.into()],
                    start,
                ))
            }
        }
    }

    fn parse_op_assignment(
        &mut self,
        target: SyntaxNode,
        op: TokenKind,
    ) -> ParseResult<SyntaxNode> {
        let start = target.range().start();
        let operator = match op {
            TokenKind::PIPE_PIPE_EQ => "||",
            TokenKind::AMP_AMP_EQ => "&&",
            TokenKind::PLUS_EQ => "+",
            TokenKind::MINUS_EQ => "-",
            TokenKind::STAR_EQ => "*",
            _ => "/",
        };

        match self.assignment_target(&target)? {
            Target::Variable(kind, name) => {
                let read_kind = match kind {
                    NodeKind::LASGN => NodeKind::LVAR,
                    NodeKind::DASGN => NodeKind::DVAR,
                    NodeKind::IASGN => NodeKind::IVAR,
                    NodeKind::CVASGN => NodeKind::CVAR,
                    NodeKind::GASGN => NodeKind::GVAR,
                    _ => NodeKind::CONST,
                };
                let read =
                    SyntaxNode::new(read_kind, vec![Child::Name(name.clone())], target.range());
                let value = self.parse_arg()?;
                match op {
                    TokenKind::PIPE_PIPE_EQ => {
                        let assignment =
                            self.finish(kind, vec![Child::Name(name), value.into()], start);
                        Ok(self.finish(
                            NodeKind::OP_ASGN_OR,
                            vec![read.into(), Child::Absent, assignment.into()],
                            start,
                        ))
                    }
                    TokenKind::AMP_AMP_EQ => {
                        let assignment =
                            self.finish(kind, vec![Child::Name(name), value.into()], start);
                        Ok(self.finish(
                            NodeKind::OP_ASGN_AND,
                            vec![read.into(), assignment.into()],
                            start,
                        ))
                    }
                    _ => {
                        let call = Self::operator_call(read, operator, value);
                        Ok(self.finish(kind, vec![Child::Name(name), call.into()], start))
                    }
                }
            }
            Target::Attribute {
                receiver,
                method,
                arguments,
            } => {
                let value = self.parse_arg()?;
                if method == "[]=" {
                    let index = Self::list_node(arguments);
                    Ok(self.finish(
                        NodeKind::OP_ASGN1,
                        vec![
                            receiver.into(),
                            Child::Name(operator.into()),
                            index.into(),
                            value.into(),
                        ],
                        start,
                    ))
                } else {
                    let attribute = method.trim_end_matches('=');
                    Ok(self.finish(
                        NodeKind::OP_ASGN2,
                        vec![
                            receiver.into(),
                            Child::Name(attribute.into()),
                            Child::Name(operator.into()),
                            value.into(),
                        ],
                        start,
                    ))
                }
            }
        }
    }

    // =========================================================================
    // Operators
    // =========================================================================

    /// Binary = Unary (BinaryOperator Unary)*, by precedence climbing
    fn parse_binary(&mut self, min_precedence: u8) -> ParseResult<SyntaxNode> {
        let mut left = self.parse_unary()?;
        while let Some((precedence, op)) = binary_operator(self.current_kind()) {
            if precedence < min_precedence {
                break;
            }
            let token = self.bump();
            self.skip_newlines();
            let right = self.parse_binary(precedence + 1)?;
            left = match op {
                BinaryOp::Node(kind) => Self::binary_node(kind, left, right),
                BinaryOp::Call => Self::operator_call(left, token.text, right),
            };
        }
        Ok(left)
    }

    /// Unary minus binds looser than `**`, which binds looser than `!`/`~`
    fn parse_unary(&mut self) -> ParseResult<SyntaxNode> {
        if self.at(TokenKind::MINUS) {
            let start = self.bump().offset;
            if self.at_any(&[TokenKind::INTEGER, TokenKind::FLOAT]) && self.adjacent(0) {
                // `-1.abs` is `(-1).abs`
                let literal = self.parse_number(start, true)?;
                let literal = self.parse_postfix(literal)?;
                return self.parse_power(literal);
            }
            let operand = self.parse_unary()?;
            return Ok(self.unary_call(operand, "-@", start));
        }
        let base = self.parse_prefix()?;
        self.parse_power(base)
    }

    fn parse_power(&mut self, base: SyntaxNode) -> ParseResult<SyntaxNode> {
        if !self.at(TokenKind::STAR_STAR) {
            return Ok(base);
        }
        let token = self.bump();
        self.skip_newlines();
        let exponent = self.parse_unary()?;
        Ok(Self::operator_call(base, token.text, exponent))
    }

    fn parse_prefix(&mut self) -> ParseResult<SyntaxNode> {
        let operator = match self.current_kind() {
            TokenKind::BANG => "!",
            TokenKind::TILDE => "~",
            TokenKind::PLUS => "+@",
            _ => {
                let primary = self.parse_primary()?;
                return self.parse_postfix(primary);
            }
        };
        let start = self.bump().offset;
        let operand = self.parse_prefix()?;
        Ok(self.unary_call(operand, operator, start))
    }

    // =========================================================================
    // Postfix: method calls, constant paths, indexing, blocks
    // =========================================================================

    fn parse_postfix(&mut self, mut node: SyntaxNode) -> ParseResult<SyntaxNode> {
        loop {
            if self.at(TokenKind::NEWLINE) && self.continues_on_next_line() {
                self.skip_newlines();
            }
            match self.current_kind() {
                TokenKind::DOT | TokenKind::AMP_DOT => {
                    let kind = if self.bump().kind == TokenKind::DOT {
                        NodeKind::CALL
                    } else {
                        NodeKind::QCALL
                    };
                    self.skip_newlines();
                    let method = self.parse_method_name()?;
                    let start = node.range().start();
                    node = self.parse_call_rest(Some((kind, node)), method, start)?;
                }
                TokenKind::COLON_COLON if !self.spaced() => {
                    self.bump();
                    let start = node.range().start();
                    let is_path = self.at(TokenKind::CONST)
                        && !(self.nth(1) == TokenKind::L_PAREN && self.adjacent(1));
                    if is_path {
                        let token = self.bump();
                        node = self.finish(
                            NodeKind::COLON2,
                            vec![node.into(), Child::Name(token.text.into())],
                            start,
                        );
                    } else {
                        let method = self.parse_method_name()?;
                        node = self.parse_call_rest(Some((NodeKind::CALL, node)), method, start)?;
                    }
                }
                TokenKind::L_BRACKET if !self.spaced() || !node.kind().is_call() => {
                    let start = node.range().start();
                    self.bump();
                    let arguments = self.with_do_blocks(true, |p| {
                        p.skip_newlines();
                        p.parse_arguments(Some(TokenKind::R_BRACKET))
                    })?;
                    self.expect(TokenKind::R_BRACKET)?;
                    node = self.finish(
                        NodeKind::CALL,
                        vec![
                            node.into(),
                            Child::Name(Name::new_static("[]")),
                            Self::arguments_child(arguments),
                        ],
                        start,
                    );
                }
                TokenKind::L_BRACE if node.kind().is_call() => {
                    node = self.parse_block(node, TokenKind::R_BRACE)?;
                }
                TokenKind::DO_KW if node.kind().is_call() && !self.no_do_block => {
                    node = self.parse_block(node, TokenKind::END_KW)?;
                }
                _ => break,
            }
        }
        Ok(node)
    }

    /// Method name after `.`, `&.` or `::`; keywords are valid method names
    fn parse_method_name(&mut self) -> ParseResult<Name> {
        let kind = self.current_kind();
        if matches!(kind, TokenKind::IDENT | TokenKind::CONST) || kind.is_keyword() {
            let token = self.bump();
            return Ok(self.with_suffix(token));
        }
        Err(self.unexpected("method name"))
    }

    /// Arguments of a call whose method name was just consumed.
    ///
    /// Without a receiver this produces `FCALL` when arguments are present
    /// (even an empty `()`) and `VCALL` otherwise.
    fn parse_call_rest(
        &mut self,
        receiver: Option<(NodeKind, SyntaxNode)>,
        method: Name,
        start: TextSize,
    ) -> ParseResult<SyntaxNode> {
        let arguments = if self.at(TokenKind::L_PAREN) && self.adjacent(0) {
            Some(self.parse_paren_arguments()?)
        } else if self.at_command_argument() {
            Some(self.parse_command_arguments()?)
        } else {
            None
        };

        Ok(match (receiver, arguments) {
            (Some((kind, receiver)), arguments) => self.finish(
                kind,
                vec![
                    receiver.into(),
                    Child::Name(method),
                    arguments.unwrap_or(Child::Absent),
                ],
                start,
            ),
            (None, Some(arguments)) => {
                self.finish(NodeKind::FCALL, vec![Child::Name(method), arguments], start)
            }
            (None, None) => self.finish(NodeKind::VCALL, vec![Child::Name(method)], start),
        })
    }

    // =========================================================================
    // Arguments
    // =========================================================================

    fn parse_paren_arguments(&mut self) -> ParseResult<Child> {
        self.bump(); // (
        let arguments = self.with_do_blocks(true, |p| {
            p.skip_newlines();
            p.parse_arguments(Some(TokenKind::R_PAREN))
        })?;
        self.expect(TokenKind::R_PAREN)?;
        Ok(Self::arguments_child(arguments))
    }

    fn parse_command_arguments(&mut self) -> ParseResult<Child> {
        let arguments = self.with_do_blocks(false, |p| p.parse_arguments(None))?;
        Ok(Self::arguments_child(arguments))
    }

    /// Comma-separated arguments up to `close` (or the end of the command)
    fn parse_arguments(&mut self, close: Option<TokenKind>) -> ParseResult<Arguments> {
        let mut arguments = Vec::new();
        let mut pairs = Vec::new();
        let mut block_pass = None;

        loop {
            if close.is_some_and(|close| self.at(close)) {
                break;
            }
            self.parse_argument(&mut arguments, &mut pairs, &mut block_pass)?;
            if close.is_some() {
                self.skip_newlines();
            }
            // `&block` must be the last argument
            if block_pass.is_some() || !self.eat(TokenKind::COMMA) {
                break;
            }
            self.skip_newlines();
        }

        Self::flush_pairs(&mut arguments, &mut pairs);
        Ok((arguments, block_pass))
    }

    fn parse_argument(
        &mut self,
        arguments: &mut Vec<SyntaxNode>,
        pairs: &mut Vec<SyntaxNode>,
        block_pass: &mut Option<(TextSize, SyntaxNode)>,
    ) -> ParseResult<()> {
        match self.current_kind() {
            TokenKind::AMP => {
                let start = self.bump().offset;
                let value = self.parse_arg()?;
                *block_pass = Some((start, value));
            }
            TokenKind::STAR => {
                Self::flush_pairs(arguments, pairs);
                let start = self.bump().offset;
                let value = self.parse_arg()?;
                arguments.push(self.finish(NodeKind::SPLAT, vec![value.into()], start));
            }
            _ if self.at_label() => {
                let key = self.parse_label();
                self.skip_newlines();
                let value = self.parse_arg()?;
                pairs.push(key);
                pairs.push(value);
            }
            _ => {
                let value = self.parse_arg()?;
                if self.eat(TokenKind::FAT_ARROW) {
                    self.skip_newlines();
                    let pair_value = self.parse_arg()?;
                    pairs.push(value);
                    pairs.push(pair_value);
                } else {
                    Self::flush_pairs(arguments, pairs);
                    arguments.push(value);
                }
            }
        }
        Ok(())
    }

    /// `name:` becomes a symbol key
    fn parse_label(&mut self) -> SyntaxNode {
        let token = self.bump();
        self.bump(); // :
        self.finish(
            NodeKind::SYM,
            vec![Child::Literal(token.text.into())],
            token.offset,
        )
    }

    // =========================================================================
    // Blocks
    // =========================================================================

    /// Block = (`{` | `do`) (`|` Params `|`)? Statements (`}` | `end`)
    fn parse_block(&mut self, call: SyntaxNode, close: TokenKind) -> ParseResult<SyntaxNode> {
        let start = call.range().start();
        // A bare identifier with a block is a call, never a variable
        let call = if call.kind() == NodeKind::VCALL {
            let method = call.child(0).cloned().unwrap_or(Child::Absent);
            SyntaxNode::new(NodeKind::FCALL, vec![method, Child::Absent], call.range())
        } else {
            call
        };

        let open = self.bump();
        self.push_scope(ScopeKind::Block);
        let body = self.with_do_blocks(true, |p| {
            p.parse_block_parameters()?;
            p.parse_statements(&[close])
        });
        let table = self.pop_scope();
        let body = body?;
        self.expect(close)?;

        tracing::trace!("[PARSER] block attached to {}", call.kind());
        let scope = self.finish(
            NodeKind::SCOPE,
            vec![Child::Table(table), Child::Absent, body.into()],
            open.offset,
        );
        Ok(self.finish(NodeKind::ITER, vec![call.into(), scope.into()], start))
    }

    /// `|a, *rest, &blk; local|`
    fn parse_block_parameters(&mut self) -> ParseResult<()> {
        self.skip_newlines();
        if self.eat(TokenKind::PIPE_PIPE) || !self.eat(TokenKind::PIPE) {
            return Ok(());
        }
        while !self.at(TokenKind::PIPE) {
            if self.at_any(&[TokenKind::STAR, TokenKind::STAR_STAR, TokenKind::AMP]) {
                self.bump();
            }
            let token = self.expect(TokenKind::IDENT)?;
            self.declare(&Name::from(token.text));
            if !(self.eat(TokenKind::COMMA) || self.eat(TokenKind::SEMICOLON)) {
                break;
            }
        }
        self.expect(TokenKind::PIPE)?;
        Ok(())
    }

    // =========================================================================
    // Primary expressions
    // =========================================================================

    fn parse_primary(&mut self) -> ParseResult<SyntaxNode> {
        let start = self.offset();
        match self.current_kind() {
            TokenKind::INTEGER | TokenKind::FLOAT => self.parse_number(start, false),
            TokenKind::STRING => {
                let token = self.bump();
                let (kind, value) = string_literal(token.text);
                Ok(self.finish(kind, vec![Child::Literal(value)], start))
            }
            TokenKind::SYMBOL => {
                let token = self.bump();
                let name = token.text.trim_start_matches(':');
                Ok(self.finish(NodeKind::SYM, vec![Child::Literal(name.into())], start))
            }
            TokenKind::NIL_KW => Ok(self.parse_leaf(NodeKind::NIL)),
            TokenKind::TRUE_KW => Ok(self.parse_leaf(NodeKind::TRUE)),
            TokenKind::FALSE_KW => Ok(self.parse_leaf(NodeKind::FALSE)),
            TokenKind::SELF_KW => Ok(self.parse_leaf(NodeKind::SELF)),
            TokenKind::IVAR => Ok(self.parse_variable(NodeKind::IVAR)),
            TokenKind::CVAR => Ok(self.parse_variable(NodeKind::CVAR)),
            TokenKind::GVAR => Ok(self.parse_variable(NodeKind::GVAR)),
            TokenKind::CONST => {
                let token = self.bump();
                if self.at(TokenKind::L_PAREN) && self.adjacent(0) {
                    // `Integer("1")` is a method call
                    return self.parse_call_rest(None, token.text.into(), start);
                }
                Ok(self.finish(NodeKind::CONST, vec![Child::Name(token.text.into())], start))
            }
            TokenKind::COLON_COLON => {
                self.bump();
                let token = self.expect(TokenKind::CONST)?;
                Ok(self.finish(NodeKind::COLON3, vec![Child::Name(token.text.into())], start))
            }
            TokenKind::IDENT => self.parse_identifier(),
            TokenKind::SUPER_KW => self.parse_super(),
            TokenKind::L_PAREN => self.parse_parenthesized(),
            TokenKind::L_BRACKET => self.parse_array(),
            TokenKind::L_BRACE => self.parse_hash(),
            TokenKind::BEGIN_KW => self.parse_begin(),
            TokenKind::IF_KW | TokenKind::UNLESS_KW => self.parse_if(),
            TokenKind::CLASS_KW => self.parse_class(),
            TokenKind::MODULE_KW => self.parse_module(),
            TokenKind::DEF_KW => self.parse_def(),
            _ => Err(self.unexpected("expression")),
        }
    }

    fn parse_leaf(&mut self, kind: NodeKind) -> SyntaxNode {
        let token = self.bump();
        self.finish(kind, Vec::new(), token.offset)
    }

    fn parse_variable(&mut self, kind: NodeKind) -> SyntaxNode {
        let token = self.bump();
        self.finish(kind, vec![Child::Name(token.text.into())], token.offset)
    }

    fn parse_number(&mut self, start: TextSize, negative: bool) -> ParseResult<SyntaxNode> {
        let token = self.bump();
        let kind = match token.kind {
            TokenKind::FLOAT => NodeKind::FLOAT,
            TokenKind::INTEGER => NodeKind::INTEGER,
            _ => return Err(self.unexpected("number")),
        };
        let digits: String = token.text.chars().filter(|c| *c != '_').collect();
        let value = if negative { format!("-{digits}") } else { digits };
        Ok(self.finish(kind, vec![Child::Literal(value.into())], start))
    }

    /// A known local reads as a variable; anything else is a method call
    fn parse_identifier(&mut self) -> ParseResult<SyntaxNode> {
        let start = self.offset();
        let token = self.bump();
        let name = self.with_suffix(token);
        let has_parens = self.at(TokenKind::L_PAREN) && self.adjacent(0);
        if !has_parens && name.len() == token.text.len() {
            if let Some(kind) = self.local_read_kind(&name) {
                return Ok(self.finish(kind, vec![Child::Name(name)], start));
            }
        }
        self.parse_call_rest(None, name, start)
    }

    /// `super` forwards the caller's arguments; `super(...)` passes its own
    fn parse_super(&mut self) -> ParseResult<SyntaxNode> {
        let start = self.bump().offset;
        let arguments = if self.at(TokenKind::L_PAREN) && self.adjacent(0) {
            self.parse_paren_arguments()?
        } else if self.at_command_argument() {
            self.parse_command_arguments()?
        } else {
            return Ok(self.finish(NodeKind::ZSUPER, Vec::new(), start));
        };
        Ok(self.finish(NodeKind::SUPER, vec![arguments], start))
    }

    fn parse_parenthesized(&mut self) -> ParseResult<SyntaxNode> {
        let start = self.bump().offset;
        let body = self.with_do_blocks(true, |p| p.parse_statements(&[TokenKind::R_PAREN]))?;
        self.expect(TokenKind::R_PAREN)?;
        Ok(match body {
            Some(node) => node,
            None => self.finish(NodeKind::NIL, Vec::new(), start),
        })
    }

    fn parse_array(&mut self) -> ParseResult<SyntaxNode> {
        let start = self.bump().offset;
        let (elements, block_pass) = self.with_do_blocks(true, |p| {
            p.skip_newlines();
            p.parse_arguments(Some(TokenKind::R_BRACKET))
        })?;
        if block_pass.is_some() {
            return Err(self.unexpected("array element"));
        }
        self.expect(TokenKind::R_BRACKET)?;

        if elements.is_empty() {
            return Ok(self.finish(NodeKind::ZLIST, Vec::new(), start));
        }
        let mut children: Vec<Child> = elements.into_iter().map(Child::from).collect();
        children.push(Child::Absent);
        Ok(self.finish(NodeKind::LIST, children, start))
    }

    fn parse_hash(&mut self) -> ParseResult<SyntaxNode> {
        let start = self.bump().offset;
        let items = self.with_do_blocks(true, |p| p.parse_hash_items())?;
        self.expect(TokenKind::R_BRACE)?;
        let list = Self::list_node(items);
        Ok(self.finish(NodeKind::HASH, vec![list.into()], start))
    }

    /// `key => value` and `label: value` pairs, flattened
    fn parse_hash_items(&mut self) -> ParseResult<Vec<SyntaxNode>> {
        let mut items = Vec::new();
        self.skip_newlines();
        while !self.at(TokenKind::R_BRACE) && !self.at_eof() {
            let key = if self.at_label() {
                self.parse_label()
            } else {
                let key = self.parse_arg()?;
                self.skip_newlines();
                self.expect(TokenKind::FAT_ARROW)?;
                key
            };
            self.skip_newlines();
            let value = self.parse_arg()?;
            items.push(key);
            items.push(value);
            self.skip_newlines();
            if !self.eat(TokenKind::COMMA) {
                break;
            }
            self.skip_newlines();
        }
        Ok(items)
    }

    // =========================================================================
    // Compound expressions
    // =========================================================================

    /// `begin` Body `end`
    fn parse_begin(&mut self) -> ParseResult<SyntaxNode> {
        let start = self.bump().offset;
        let body = self.with_do_blocks(true, |p| p.parse_body())?;
        self.expect(TokenKind::END_KW)?;
        Ok(match body {
            Some(node) if matches!(node.kind(), NodeKind::RESCUE | NodeKind::ENSURE) => node,
            body => self.finish(NodeKind::BEGIN, vec![body.into()], start),
        })
    }

    /// Body = Statements (`rescue` ...)* (`else` Statements)? (`ensure` Statements)?
    fn parse_body(&mut self) -> ParseResult<Option<SyntaxNode>> {
        let start = self.offset();
        let body = self.parse_statements(BODY_CLAUSES)?;

        let mut handlers = Vec::new();
        while self.at(TokenKind::RESCUE_KW) {
            let clause_start = self.bump().offset;
            let mut classes = Vec::new();
            while !self.at_terminator()
                && !self.at_any(&[TokenKind::THEN_KW, TokenKind::FAT_ARROW])
            {
                classes.push(self.parse_binary(1)?);
                if !self.eat(TokenKind::COMMA) {
                    break;
                }
            }
            if self.eat(TokenKind::FAT_ARROW) {
                let token = self.expect(TokenKind::IDENT)?;
                self.declare(&Name::from(token.text));
            }
            self.eat(TokenKind::THEN_KW);
            let handler = self.parse_statements(BODY_CLAUSES)?;
            handlers.push(self.finish(
                NodeKind::RESBODY,
                vec![Self::list_node(classes).into(), handler.into()],
                clause_start,
            ));
        }

        let mut node = body;
        if !handlers.is_empty() {
            let fallback = if self.eat(TokenKind::ELSE_KW) {
                self.parse_statements(BODY_CLAUSES)?
            } else {
                None
            };
            let mut children = vec![Child::from(node)];
            children.extend(handlers.into_iter().map(Child::from));
            children.push(fallback.into());
            node = Some(self.finish(NodeKind::RESCUE, children, start));
        }

        if self.eat(TokenKind::ENSURE_KW) {
            let ensure = self.parse_statements(BODY_CLAUSES)?;
            node = Some(self.finish(NodeKind::ENSURE, vec![node.into(), ensure.into()], start));
        }
        Ok(node)
    }

    /// `if`/`unless` Expression `then`? Statements (`elsif` ...)* (`else` Statements)? `end`
    fn parse_if(&mut self) -> ParseResult<SyntaxNode> {
        let token = self.bump();
        let kind = if token.kind == TokenKind::UNLESS_KW {
            NodeKind::UNLESS
        } else {
            NodeKind::IF
        };
        let node = self.with_do_blocks(true, |p| p.parse_conditional(kind, token.offset))?;
        self.expect(TokenKind::END_KW)?;
        Ok(node)
    }

    fn parse_conditional(&mut self, kind: NodeKind, start: TextSize) -> ParseResult<SyntaxNode> {
        let condition = self.parse_expression()?;
        self.eat(TokenKind::THEN_KW);
        let then = self.parse_statements(&[
            TokenKind::ELSIF_KW,
            TokenKind::ELSE_KW,
            TokenKind::END_KW,
        ])?;
        let otherwise = match self.current_kind() {
            TokenKind::ELSIF_KW if kind == NodeKind::IF => {
                let start = self.bump().offset;
                Some(self.parse_conditional(NodeKind::IF, start)?)
            }
            TokenKind::ELSE_KW => {
                self.bump();
                self.parse_statements(&[TokenKind::END_KW])?
            }
            _ => None,
        };
        Ok(self.finish(
            kind,
            vec![condition.into(), then.into(), otherwise.into()],
            start,
        ))
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    /// `class` Path (`<` Expression)? Body `end` | `class << ` Expression Body `end`
    fn parse_class(&mut self) -> ParseResult<SyntaxNode> {
        let start = self.bump().offset;
        if self.eat(TokenKind::LT_LT) {
            let target = self.parse_expression()?;
            let body = self.parse_scope(false)?;
            return Ok(self.finish(NodeKind::SCLASS, vec![target.into(), body.into()], start));
        }
        let path = self.parse_constant_path()?;
        let superclass = if self.eat(TokenKind::LT) {
            Some(self.parse_expression()?)
        } else {
            None
        };
        let body = self.parse_scope(false)?;
        Ok(self.finish(
            NodeKind::CLASS,
            vec![path.into(), superclass.into(), body.into()],
            start,
        ))
    }

    fn parse_module(&mut self) -> ParseResult<SyntaxNode> {
        let start = self.bump().offset;
        let path = self.parse_constant_path()?;
        let body = self.parse_scope(false)?;
        Ok(self.finish(NodeKind::MODULE, vec![path.into(), body.into()], start))
    }

    fn parse_constant_path(&mut self) -> ParseResult<SyntaxNode> {
        let start = self.offset();
        let anchored = self.eat(TokenKind::COLON_COLON);
        let token = self.expect(TokenKind::CONST)?;
        let kind = if anchored {
            NodeKind::COLON3
        } else {
            NodeKind::CONST
        };
        let mut path = self.finish(kind, vec![Child::Name(token.text.into())], start);
        while self.eat(TokenKind::COLON_COLON) {
            let token = self.expect(TokenKind::CONST)?;
            path = self.finish(
                NodeKind::COLON2,
                vec![path.into(), Child::Name(token.text.into())],
                start,
            );
        }
        Ok(path)
    }

    /// `def` (Receiver `.`)? Name Params Body `end`
    fn parse_def(&mut self) -> ParseResult<SyntaxNode> {
        let start = self.bump().offset;
        let receiver = if self.nth(1) == TokenKind::DOT
            && self.at_any(&[TokenKind::SELF_KW, TokenKind::IDENT, TokenKind::CONST])
        {
            let token = self.bump();
            let receiver = match token.kind {
                TokenKind::SELF_KW => self.finish(NodeKind::SELF, Vec::new(), token.offset),
                TokenKind::CONST => self.finish(
                    NodeKind::CONST,
                    vec![Child::Name(token.text.into())],
                    token.offset,
                ),
                _ => {
                    let kind = self.local_read_kind(token.text).unwrap_or(NodeKind::VCALL);
                    self.finish(kind, vec![Child::Name(token.text.into())], token.offset)
                }
            };
            self.bump(); // .
            Some(receiver)
        } else {
            None
        };

        let name = self.parse_def_name()?;
        let scope = self.parse_scope(true)?;
        Ok(match receiver {
            Some(receiver) => self.finish(
                NodeKind::DEFS,
                vec![receiver.into(), Child::Name(name), scope.into()],
                start,
            ),
            None => self.finish(NodeKind::DEFN, vec![Child::Name(name), scope.into()], start),
        })
    }

    fn parse_def_name(&mut self) -> ParseResult<Name> {
        let kind = self.current_kind();
        let name = if matches!(kind, TokenKind::IDENT | TokenKind::CONST) || kind.is_keyword() {
            let token = self.bump();
            self.with_suffix(token)
        } else if kind == TokenKind::L_BRACKET && self.nth(1) == TokenKind::R_BRACKET {
            self.bump();
            self.bump();
            Name::new_static("[]")
        } else if binary_operator(kind).is_some()
            || matches!(kind, TokenKind::BANG | TokenKind::TILDE | TokenKind::STAR_STAR)
        {
            Name::from(self.bump().text)
        } else {
            return Err(self.unexpected("method name"));
        };

        // Setter: `def name=(value)`
        if self.at(TokenKind::EQ) && self.adjacent(0) && self.nth(1) == TokenKind::L_PAREN {
            self.bump();
            return Ok(Name::from(format!("{name}=")));
        }
        Ok(name)
    }

    /// New local scope for a `def`/`class`/`module` body, through its `end`
    fn parse_scope(&mut self, has_parameters: bool) -> ParseResult<SyntaxNode> {
        let start = self.offset();
        self.push_scope(ScopeKind::Hard);
        let body = self.with_do_blocks(true, |p| {
            if has_parameters {
                p.parse_def_parameters()?;
            }
            let body = p.parse_body()?;
            p.expect(TokenKind::END_KW)?;
            Ok(body)
        });
        let table = self.pop_scope();
        let body = body?;
        Ok(self.finish(
            NodeKind::SCOPE,
            vec![Child::Table(table), Child::Absent, body.into()],
            start,
        ))
    }

    /// `(a, b = 1, *rest, key:, opt: 2, **opts, &blk)` with or without parentheses
    fn parse_def_parameters(&mut self) -> ParseResult<()> {
        let parenthesized = self.eat(TokenKind::L_PAREN);
        loop {
            if parenthesized {
                self.skip_newlines();
                if self.at(TokenKind::R_PAREN) {
                    break;
                }
            } else if self.at_terminator() {
                break;
            }

            if self.at_any(&[TokenKind::STAR, TokenKind::STAR_STAR, TokenKind::AMP]) {
                self.bump();
                // Anonymous `*`, `**`, `&`
                if !self.at(TokenKind::IDENT) {
                    if !self.eat(TokenKind::COMMA) {
                        break;
                    }
                    continue;
                }
            }

            if self.at_label() {
                let token = self.bump();
                self.bump(); // :
                self.declare(&Name::from(token.text));
                let has_default = !self.at_terminator()
                    && !self.at_any(&[TokenKind::COMMA, TokenKind::R_PAREN]);
                if has_default {
                    self.parse_arg()?;
                }
            } else {
                let token = self.expect(TokenKind::IDENT)?;
                self.declare(&Name::from(token.text));
                if self.eat(TokenKind::EQ) {
                    self.parse_arg()?;
                }
            }

            if !self.eat(TokenKind::COMMA) {
                break;
            }
        }

        if parenthesized {
            self.skip_newlines();
            self.expect(TokenKind::R_PAREN)?;
        }
        Ok(())
    }
}

/// Precedence (higher binds tighter) and node shape of a binary operator
fn binary_operator(kind: TokenKind) -> Option<(u8, BinaryOp)> {
    let entry = match kind {
        TokenKind::DOT_DOT => (1, BinaryOp::Node(NodeKind::DOT2)),
        TokenKind::DOT_DOT_DOT => (1, BinaryOp::Node(NodeKind::DOT3)),
        TokenKind::PIPE_PIPE => (2, BinaryOp::Node(NodeKind::OR)),
        TokenKind::AMP_AMP => (3, BinaryOp::Node(NodeKind::AND)),
        TokenKind::EQ_EQ
        | TokenKind::BANG_EQ
        | TokenKind::EQ_EQ_EQ
        | TokenKind::EQ_TILDE
        | TokenKind::BANG_TILDE
        | TokenKind::SPACESHIP => (4, BinaryOp::Call),
        TokenKind::LT | TokenKind::LT_EQ | TokenKind::GT | TokenKind::GT_EQ => (5, BinaryOp::Call),
        TokenKind::PIPE | TokenKind::CARET => (6, BinaryOp::Call),
        TokenKind::AMP => (7, BinaryOp::Call),
        TokenKind::LT_LT | TokenKind::GT_GT => (8, BinaryOp::Call),
        TokenKind::PLUS | TokenKind::MINUS => (9, BinaryOp::Call),
        TokenKind::STAR | TokenKind::SLASH | TokenKind::PERCENT => (10, BinaryOp::Call),
        _ => return None,
    };
    Some(entry)
}

/// Node kind and unquoted contents of a string token
fn string_literal(text: &str) -> (NodeKind, SmolStr) {
    let inner = text
        .get(1..text.len().saturating_sub(1))
        .unwrap_or_default();
    let kind = if text.starts_with('"') && inner.contains("#{") {
        NodeKind::DSTR
    } else {
        NodeKind::STR
    };
    (kind, SmolStr::from(inner))
}
