#![forbid(unsafe_code)]

use std::fmt;

/// A symbolic regular expression over symbols of type `S`.
///
/// The empty word is written λ. Alternation and the closures are bracketed
/// in the rendering; concatenation is written by juxtaposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegularExpression<S> {
    /// The empty word.
    Lambda,
    /// A single symbol.
    Symbol(S),
    /// The alternation of two expressions.
    Or(Box<RegularExpression<S>>, Box<RegularExpression<S>>),
    /// The concatenation of two expressions.
    Concatenate(Box<RegularExpression<S>>, Box<RegularExpression<S>>),
    /// Zero or more repetitions.
    Star(Box<RegularExpression<S>>),
    /// One or more repetitions.
    Plus(Box<RegularExpression<S>>),
}

impl<S> RegularExpression<S> {
    /// Returns the expression for a single symbol.
    pub fn symbol(symbol: S) -> Self {
        RegularExpression::Symbol(symbol)
    }

    /// Returns the alternation of this expression with another.
    pub fn or(self, other: Self) -> Self {
        RegularExpression::Or(Box::new(self), Box::new(other))
    }

    /// Returns the concatenation of this expression with another.
    pub fn concatenate(self, other: Self) -> Self {
        RegularExpression::Concatenate(Box::new(self), Box::new(other))
    }

    /// Returns zero or more repetitions of this expression.
    pub fn star(self) -> Self {
        RegularExpression::Star(Box::new(self))
    }

    /// Returns one or more repetitions of this expression.
    pub fn plus(self) -> Self {
        RegularExpression::Plus(Box::new(self))
    }
}

impl<S: fmt::Display> fmt::Display for RegularExpression<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegularExpression::Lambda => write!(f, "λ"),
            RegularExpression::Symbol(symbol) => write!(f, "{symbol}"),
            RegularExpression::Or(left, right) => write!(f, "({left}|{right})"),
            RegularExpression::Concatenate(left, right) => write!(f, "{left}{right}"),
            RegularExpression::Star(inner) => write!(f, "({inner})*"),
            RegularExpression::Plus(inner) => write!(f, "({inner})+"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_expressions() {
        assert_eq!(format!("{}", RegularExpression::<char>::Lambda), "λ");
        assert_eq!(format!("{}", RegularExpression::symbol('a')), "a");
        assert_eq!(
            format!("{}", RegularExpression::symbol('a').or(RegularExpression::symbol('b'))),
            "(a|b)"
        );
        assert_eq!(format!("{}", RegularExpression::symbol('a').plus()), "(a)+");
    }

    #[test]
    fn test_render_nested_expression() {
        // ab(0|(ab|c)1)*
        let ab = RegularExpression::symbol('a').concatenate(RegularExpression::symbol('b'));
        let ab_or_c = ab.clone().or(RegularExpression::symbol('c'));
        let tail = RegularExpression::symbol('0')
            .or(ab_or_c.concatenate(RegularExpression::symbol('1')))
            .star();
        let expression = ab.concatenate(tail);

        assert_eq!(format!("{expression}"), "ab((0|(ab|c)1))*");
    }
}
