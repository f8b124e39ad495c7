//! 正则组合子代数
//!
//! A [`Combinator`] is an immutable matcher for the strings that are still
//! acceptable. Feeding it one character through [`Combinator::derivative`] yields
//! either `None` (no match possible) or a fresh combinator for the remainder.
//!
//! Nodes are `Arc`-shared: a derivative reuses unchanged sub-trees (the repeated
//! body of a `ZeroOrMore`, the tail of a `Concat`, the suffix of a literal) so one
//! step allocates only the few nodes on the changed spine.
//!
//! The priority lives on the handle, not on the node. A derivative carries the
//! priority of the combinator it was taken from, so every state descending from a
//! root keeps that root's priority for the whole round.

pub mod builder;
pub mod class;

pub use class::CharClass;

use std::fmt;
use std::sync::Arc;

use super::error::GrammarError;

/// 优先级：仅用于等长匹配的裁决
pub type Priority = i32;

enum Node {
    /// Remaining suffix `text[offset..]` of a literal
    Unit { text: Arc<[char]>, offset: usize },
    Class(CharClass),
    Concat(Combinator, Combinator),
    Union(Combinator, Combinator),
    Intersect(Combinator, Combinator),
    /// Single-character complement
    Complement(Combinator),
    ZeroOrOne(Combinator),
    ZeroOrMore(Combinator),
    /// `star` is the shared `ZeroOrMore` of the same body, used as the tail of
    /// every derivative.
    OneOrMore { body: Combinator, star: Combinator },
}

struct Inner {
    node: Node,
    nullable: bool,
}

/// Immutable regex combinator
#[derive(Clone)]
pub struct Combinator {
    inner: Arc<Inner>,
    priority: Priority,
}

impl Combinator {
    fn from_node(node: Node, priority: Priority) -> Self {
        let nullable = match &node {
            Node::Unit { text, offset } => *offset >= text.len(),
            Node::Class(_) | Node::Complement(_) => false,
            Node::Concat(a, b) | Node::Intersect(a, b) => a.is_nullable() && b.is_nullable(),
            Node::Union(a, b) => a.is_nullable() || b.is_nullable(),
            Node::ZeroOrOne(_) | Node::ZeroOrMore(_) => true,
            Node::OneOrMore { body, .. } => body.is_nullable(),
        };
        Self {
            inner: Arc::new(Inner { node, nullable }),
            priority,
        }
    }

    // ==================== 构造 ====================

    /// Literal string; the empty literal accepts only the empty remainder
    pub fn unit(text: &str) -> Self {
        Self::from_node(
            Node::Unit {
                text: text.chars().collect(),
                offset: 0,
            },
            0,
        )
    }

    /// The empty literal
    pub fn empty() -> Self {
        Self::empty_with(0)
    }

    fn empty_with(priority: Priority) -> Self {
        Self::from_node(
            Node::Unit {
                text: Arc::from(Vec::new()),
                offset: 0,
            },
            priority,
        )
    }

    /// One character of the given class
    pub fn class(class: CharClass) -> Self {
        Self::from_node(Node::Class(class), 0)
    }

    pub fn concat(a: Combinator, b: Combinator) -> Self {
        let priority = a.priority.max(b.priority);
        Self::concat_with(a, b, priority)
    }

    pub fn union(a: Combinator, b: Combinator) -> Self {
        let priority = a.priority.max(b.priority);
        Self::union_with(a, b, priority)
    }

    pub fn intersect(a: Combinator, b: Combinator) -> Self {
        let priority = a.priority.max(b.priority);
        Self::intersect_with(a, b, priority)
    }

    /// Any single character not accepted by `a`
    ///
    /// `a` must have a fixed width of exactly one character.
    pub fn complement(a: Combinator) -> Result<Self, GrammarError> {
        match a.fixed_width() {
            Some(1) => {
                let priority = a.priority;
                Ok(Self::from_node(Node::Complement(a), priority))
            }
            width => Err(GrammarError::ComplementWidth {
                matcher: format!("{a:?}"),
                width,
            }),
        }
    }

    pub fn zero_or_one(a: Combinator) -> Self {
        let priority = a.priority;
        Self::from_node(Node::ZeroOrOne(a), priority)
    }

    pub fn zero_or_more(a: Combinator) -> Self {
        let priority = a.priority;
        Self::from_node(Node::ZeroOrMore(a), priority)
    }

    pub fn one_or_more(a: Combinator) -> Self {
        let priority = a.priority;
        let star = Self::zero_or_more(a.clone());
        Self::from_node(Node::OneOrMore { body: a, star }, priority)
    }

    /// Same matcher, explicit priority
    pub fn with_priority(self, priority: Priority) -> Self {
        Self {
            inner: self.inner,
            priority,
        }
    }

    fn concat_with(a: Combinator, b: Combinator, priority: Priority) -> Self {
        if a.is_empty_unit() {
            return b.with_priority(priority);
        }
        if b.is_empty_unit() {
            return a.with_priority(priority);
        }
        Self::from_node(Node::Concat(a, b), priority)
    }

    fn union_with(a: Combinator, b: Combinator, priority: Priority) -> Self {
        if Arc::ptr_eq(&a.inner, &b.inner) || (a.is_empty_unit() && b.is_empty_unit()) {
            return a.with_priority(priority);
        }
        Self::from_node(Node::Union(a, b), priority)
    }

    fn intersect_with(a: Combinator, b: Combinator, priority: Priority) -> Self {
        if a.is_empty_unit() && b.is_empty_unit() {
            return a.with_priority(priority);
        }
        Self::from_node(Node::Intersect(a, b), priority)
    }

    /// Union of two optional derivatives
    fn either(a: Option<Combinator>, b: Option<Combinator>, priority: Priority) -> Option<Self> {
        match (a, b) {
            (Some(a), Some(b)) => Some(Self::union_with(a, b, priority)),
            (Some(one), None) | (None, Some(one)) => Some(one.with_priority(priority)),
            (None, None) => None,
        }
    }

    // ==================== 查询 ====================

    /// Accepts the empty remainder right now
    pub fn is_nullable(&self) -> bool {
        self.inner.nullable
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Literal with nothing left to consume
    pub fn is_empty_unit(&self) -> bool {
        matches!(&self.inner.node, Node::Unit { text, offset } if *offset >= text.len())
    }

    /// Number of characters every accepted string has, if that number is fixed
    pub fn fixed_width(&self) -> Option<usize> {
        match &self.inner.node {
            Node::Unit { text, offset } => Some(text.len().saturating_sub(*offset)),
            Node::Class(_) | Node::Complement(_) => Some(1),
            Node::Concat(a, b) => Some(a.fixed_width()? + b.fixed_width()?),
            Node::Union(a, b) => match (a.fixed_width(), b.fixed_width()) {
                (Some(x), Some(y)) if x == y => Some(x),
                _ => None,
            },
            Node::Intersect(a, b) => match (a.fixed_width(), b.fixed_width()) {
                (Some(x), Some(y)) => (x == y).then_some(x),
                (Some(x), None) | (None, Some(x)) => Some(x),
                (None, None) => None,
            },
            Node::ZeroOrOne(a) | Node::ZeroOrMore(a) | Node::OneOrMore { body: a, .. } => {
                match a.fixed_width() {
                    Some(0) => Some(0),
                    _ => None,
                }
            }
        }
    }

    /// Two handles to the same shared node
    pub fn same_node(&self, other: &Combinator) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // ==================== 求导 ====================

    /// Matcher for what remains after consuming `c`, or `None` if nothing can match
    pub fn derivative(&self, c: char) -> Option<Combinator> {
        let priority = self.priority;
        match &self.inner.node {
            Node::Unit { text, offset } => match text.get(*offset) {
                Some(&expected) if expected == c => Some(Self::from_node(
                    Node::Unit {
                        text: text.clone(),
                        offset: offset + 1,
                    },
                    priority,
                )),
                _ => None,
            },
            Node::Class(class) => class.matches(c).then(|| Self::empty_with(priority)),
            Node::Concat(a, b) => {
                let head = a
                    .derivative(c)
                    .map(|da| Self::concat_with(da, b.clone(), priority));
                if a.is_nullable() {
                    Self::either(head, b.derivative(c), priority)
                } else {
                    head
                }
            }
            Node::Union(a, b) => Self::either(a.derivative(c), b.derivative(c), priority),
            Node::Intersect(a, b) => {
                let da = a.derivative(c)?;
                let db = b.derivative(c)?;
                Some(Self::intersect_with(da, db, priority))
            }
            Node::Complement(a) => match a.derivative(c) {
                Some(_) => None,
                None => Some(Self::empty_with(priority)),
            },
            Node::ZeroOrOne(a) => a.derivative(c).map(|da| da.with_priority(priority)),
            Node::ZeroOrMore(a) => a
                .derivative(c)
                .map(|da| Self::concat_with(da, self.clone(), priority)),
            Node::OneOrMore { body, star } => body
                .derivative(c)
                .map(|da| Self::concat_with(da, star.clone(), priority)),
        }
    }

    /// Fold `derivative` over every character of `input`
    pub fn derive_str(&self, input: &str) -> Option<Combinator> {
        input
            .chars()
            .try_fold(self.clone(), |current, c| current.derivative(c))
    }

    /// Whole-string acceptance test
    pub fn accepts(&self, input: &str) -> bool {
        self.derive_str(input)
            .is_some_and(|remainder| remainder.is_nullable())
    }
}

impl fmt::Debug for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.node {
            Node::Unit { text, offset } => {
                write!(f, "\"")?;
                for c in text.iter().skip(*offset) {
                    write!(f, "{}", c.escape_debug())?;
                }
                write!(f, "\"")
            }
            Node::Class(class) => write!(f, "{class}"),
            Node::Concat(a, b) => write!(f, "({a:?} {b:?})"),
            Node::Union(a, b) => write!(f, "({a:?} | {b:?})"),
            Node::Intersect(a, b) => write!(f, "({a:?} & {b:?})"),
            Node::Complement(a) => write!(f, "~{a:?}"),
            Node::ZeroOrOne(a) => write!(f, "{a:?}?"),
            Node::ZeroOrMore(a) => write!(f, "{a:?}*"),
            Node::OneOrMore { body, .. } => write!(f, "{body:?}+"),
        }
    }
}
