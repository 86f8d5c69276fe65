//! Query parser
//!
//! Recursive descent over [`Token`]s with the usual boolean precedence,
//! lowest first:
//!
//! ```text
//! or      := and ( _OR_ and )*
//! and     := not ( [_AND_] not )*      juxtaposition is an implicit AND
//! not     := _NOT_ not | primary
//! primary := WORD | '(' or [')']
//! ```
//!
//! Parsing is lenient and never fails. A missing `)` ends at end of input,
//! a stray `)` is skipped, and an operator with a missing operand is dropped.
//! Groups nested deeper than [`MAX_NESTING`] are flattened: the extra `(`
//! tokens are ignored.

use crate::query::group::{GroupOp, GroupedQuery};
use crate::query::lexer::{Token, tokenize};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::mem;

/// Deepest parenthesized group the parser descends into
pub const MAX_NESTING: usize = 256;

/// Query AST node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryNode {
    Word(String),
    And(Box<QueryNode>, Box<QueryNode>),
    Or(Box<QueryNode>, Box<QueryNode>),
    /// Exclusion. Only meaningful as the right operand of `And`, where it
    /// reads as "left but not this"; there is no complement against the
    /// whole corpus.
    Not(Box<QueryNode>),
}

impl QueryNode {
    fn and(left: QueryNode, right: QueryNode) -> Self {
        QueryNode::And(Box::new(left), Box::new(right))
    }

    fn or(left: QueryNode, right: QueryNode) -> Self {
        QueryNode::Or(Box::new(left), Box::new(right))
    }

    /// Words in input order
    pub fn words(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_words(&mut out);
        out
    }

    fn collect_words<'a>(&'a self, out: &mut Vec<&'a str>) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                QueryNode::Word(w) => out.push(w),
                QueryNode::And(l, r) | QueryNode::Or(l, r) => {
                    stack.push(r);
                    stack.push(l);
                }
                QueryNode::Not(inner) => stack.push(inner),
            }
        }
    }

    /// Flatten a tree of words under a single binary operator
    fn flatten<'a>(&'a self, op: GroupOp, out: &mut Vec<&'a str>) -> bool {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match (node, op) {
                (QueryNode::Word(w), _) => out.push(w),
                (QueryNode::And(l, r), GroupOp::And) | (QueryNode::Or(l, r), GroupOp::Or) => {
                    stack.push(r);
                    stack.push(l);
                }
                _ => return false,
            }
        }
        true
    }

    /// Move compound children out into `out`, leaving empty words behind
    fn detach_children(&mut self, out: &mut Vec<QueryNode>) {
        let mut detach = |child: &mut Box<QueryNode>| {
            if !matches!(**child, QueryNode::Word(_)) {
                out.push(mem::replace(&mut **child, QueryNode::Word(String::new())));
            }
        };
        match self {
            QueryNode::And(l, r) | QueryNode::Or(l, r) => {
                detach(l);
                detach(r);
            }
            QueryNode::Not(inner) => detach(inner),
            QueryNode::Word(_) => {}
        }
    }

    fn is_compound(&self) -> bool {
        matches!(self, QueryNode::And(..) | QueryNode::Or(..))
    }
}

// Trees from long queries can be arbitrarily deep; tear them down with an
// explicit stack instead of recursive drops.
impl Drop for QueryNode {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

enum Piece<'a> {
    Node(&'a QueryNode),
    Text(&'static str),
}

/// Queue an operand for printing, parenthesized when compound
fn push_operand<'a>(stack: &mut Vec<Piece<'a>>, child: &'a QueryNode) {
    if child.is_compound() {
        stack.push(Piece::Text(")"));
        stack.push(Piece::Node(child));
        stack.push(Piece::Text("("));
    } else {
        stack.push(Piece::Node(child));
    }
}

impl fmt::Display for QueryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pieces are pushed right to left and printed as they pop
        let mut stack = vec![Piece::Node(self)];
        while let Some(piece) = stack.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Node(QueryNode::Word(w)) => f.write_str(w)?,
                Piece::Node(QueryNode::And(l, r)) => {
                    push_operand(&mut stack, r);
                    stack.push(Piece::Text(" _AND_ "));
                    push_operand(&mut stack, l);
                }
                Piece::Node(QueryNode::Or(l, r)) => {
                    push_operand(&mut stack, r);
                    stack.push(Piece::Text(" _OR_ "));
                    push_operand(&mut stack, l);
                }
                Piece::Node(QueryNode::Not(inner)) => {
                    f.write_str("_NOT_ ")?;
                    push_operand(&mut stack, inner);
                }
            }
        }
        Ok(())
    }
}

/// Parsed query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// `None` when the query has no words
    pub root: Option<QueryNode>,
}

impl Query {
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Words of the tree in input order
    pub fn words(&self) -> Vec<&str> {
        self.root.as_ref().map(QueryNode::words).unwrap_or_default()
    }

    /// The word, if the whole query is a single word
    pub fn single_word(&self) -> Option<&str> {
        match &self.root {
            Some(QueryNode::Word(w)) => Some(w.as_str()),
            _ => None,
        }
    }

    /// Convert a flat query (words under one operator, no `_NOT_`) to a
    /// grouped query for proximity evaluation.
    ///
    /// Returns `None` for a single word, for mixed operators and for any
    /// tree containing `_NOT_`.
    pub fn to_group(&self) -> Option<GroupedQuery> {
        let op = match self.root.as_ref()? {
            QueryNode::And(..) => GroupOp::And,
            QueryNode::Or(..) => GroupOp::Or,
            _ => return None,
        };
        let mut words = Vec::new();
        self.root.as_ref()?.flatten(op, &mut words).then(|| GroupedQuery::from_words(op, words))
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => write!(f, "{}", root),
            None => Ok(()),
        }
    }
}

/// Parse a query string into a Query structure
pub fn parse_query(input: &str) -> Query {
    let mut parser = QueryParser::new(tokenize(input));
    parser.parse()
}

/// Every word of the query in input order, ignoring operators and grouping
pub fn extract_words(input: &str) -> Vec<String> {
    tokenize(input)
        .into_iter()
        .filter_map(|token| match token {
            Token::Word(w) => Some(w),
            _ => None,
        })
        .collect()
}

/// Combine two optional operands, dropping whichever side is missing
fn join(
    left: Option<QueryNode>,
    right: Option<QueryNode>,
    op: fn(QueryNode, QueryNode) -> QueryNode,
) -> Option<QueryNode> {
    match (left, right) {
        (Some(l), Some(r)) => Some(op(l, r)),
        (l, r) => l.or(r),
    }
}

struct QueryParser {
    tokens: Vec<Token>,
    pos: usize,
    /// Open groups on the current descent
    depth: usize,
}

impl QueryParser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn parse(&mut self) -> Query {
        let mut root = self.parse_or();
        // Only a stray ')' stops parse_or early
        while !self.is_eof() {
            log::trace!("skipping unmatched token at {}", self.pos);
            self.pos += 1;
            let rest = self.parse_or();
            root = join(root, rest, QueryNode::and);
        }
        Query { root }
    }

    fn parse_or(&mut self) -> Option<QueryNode> {
        let mut left = self.parse_and();
        while self.consume(&Token::Or) {
            let right = self.parse_and();
            left = join(left, right, QueryNode::or);
        }
        left
    }

    fn parse_and(&mut self) -> Option<QueryNode> {
        let mut left = self.parse_not();
        loop {
            if !self.consume(&Token::And) && !self.starts_operand() {
                break;
            }
            let right = self.parse_not();
            left = join(left, right, QueryNode::and);
        }
        left
    }

    fn parse_not(&mut self) -> Option<QueryNode> {
        let mut negations = 0;
        while self.consume(&Token::Not) {
            negations += 1;
        }
        let mut node = self.parse_primary()?;
        for _ in 0..negations {
            node = QueryNode::Not(Box::new(node));
        }
        Some(node)
    }

    fn parse_primary(&mut self) -> Option<QueryNode> {
        if self.depth >= MAX_NESTING {
            while self.consume(&Token::LeftParen) {
                log::trace!("ignoring group nested past {} at {}", MAX_NESTING, self.pos);
            }
        }
        match self.peek()? {
            Token::LeftParen => {
                self.pos += 1;
                self.depth += 1;
                let node = self.parse_or();
                self.depth -= 1;
                self.consume(&Token::RightParen);
                node
            }
            Token::Word(w) => {
                let node = QueryNode::Word(w.clone());
                self.pos += 1;
                Some(node)
            }
            _ => None,
        }
    }

    /// Check if the next token can begin an implicitly AND-ed operand
    fn starts_operand(&self) -> bool {
        matches!(
            self.peek(),
            Some(Token::Word(_) | Token::LeftParen | Token::Not)
        )
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn consume(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }
}
