//! Token values and markings.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::{Add, Sub};

/// A non-negative integer token count, or the sentinel ω ("unboundedly
/// many"). Arithmetic is saturating and ω-absorbing: ω + n = ω, ω - n = ω,
/// and ω compares greater than every finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Token {
    Finite(u64),
    Omega,
}

impl Token {
    pub fn finite(n: u64) -> Self {
        Token::Finite(n)
    }

    pub fn is_omega(self) -> bool {
        matches!(self, Token::Omega)
    }

    pub fn as_finite(self) -> Option<u64> {
        match self {
            Token::Finite(n) => Some(n),
            Token::Omega => None,
        }
    }
}

impl Default for Token {
    fn default() -> Self {
        Token::Finite(0)
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Token::Omega, Token::Omega) => Ordering::Equal,
            (Token::Omega, Token::Finite(_)) => Ordering::Greater,
            (Token::Finite(_), Token::Omega) => Ordering::Less,
            (Token::Finite(a), Token::Finite(b)) => a.cmp(b),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Finite(n) => write!(f, "{n}"),
            Token::Omega => write!(f, "\u{03c9}"),
        }
    }
}

impl Add<u64> for Token {
    type Output = Token;
    fn add(self, rhs: u64) -> Token {
        match self {
            Token::Omega => Token::Omega,
            Token::Finite(n) => Token::Finite(n + rhs),
        }
    }
}

impl Sub<u64> for Token {
    type Output = Token;
    fn sub(self, rhs: u64) -> Token {
        match self {
            Token::Omega => Token::Omega,
            Token::Finite(n) => Token::Finite(n.saturating_sub(rhs)),
        }
    }
}

/// A total mapping from place name to token value.
///
/// Markings are compared by value equality (pointwise, ω equal only to ω)
/// and by covering (pointwise ≥, ω ≥ everything).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct Marking(BTreeMap<String, Token>);

impl Marking {
    pub fn new(values: BTreeMap<String, Token>) -> Self {
        Marking(values)
    }

    pub fn empty() -> Self {
        Marking(BTreeMap::new())
    }

    /// Token value for place `p`, or `Finite(0)` if `p` is not in the
    /// marking's domain.
    pub fn get(&self, p: &str) -> Token {
        self.0.get(p).copied().unwrap_or(Token::Finite(0))
    }

    pub fn set(&mut self, p: &str, value: Token) {
        self.0.insert(p.to_string(), value);
    }

    pub fn places(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Token)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Equality: same domain, pointwise equal values.
    pub fn equals(&self, other: &Marking) -> bool {
        self == other
    }

    /// `self` covers `other`: pointwise ≥ over the union of both domains.
    pub fn covers(&self, other: &Marking) -> bool {
        let places: BTreeSet<&str> = self.places().chain(other.places()).collect();
        places.into_iter().all(|p| self.get(p) >= other.get(p))
    }

    /// `self` covers `other` and the two are not equal.
    pub fn strictly_covers(&self, other: &Marking) -> bool {
        self.covers(other) && !self.equals(other)
    }

    /// A marking identical to `self` except that every place in `ps` is
    /// set to ω.
    pub fn with_omega_on_positions<'a, I: IntoIterator<Item = &'a str>>(&self, ps: I) -> Marking {
        let mut m = self.clone();
        for p in ps {
            m.set(p, Token::Omega);
        }
        m
    }

    pub fn contains_omega(&self) -> bool {
        self.0.values().any(|t| t.is_omega())
    }
}

impl fmt::Display for Marking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{k}:{v}")).collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}
