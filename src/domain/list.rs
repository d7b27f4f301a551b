//! Singly linked digit chains (least significant digit first) and their addition.

use std::fmt;
use std::str::FromStr;

use generational_arena::{Arena, Index};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};

/// One decimal digit in a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListNode {
    pub digit: u8,
    /// Index of the next (more significant) digit
    pub next: Option<Index>,
}

/// Arena-backed singly linked list of decimal digits.
///
/// The head is the least significant digit, so `[2,4,3]` represents 342.
/// Nodes are only ever appended at the tail.
#[derive(Debug, Clone)]
pub struct DigitList {
    arena: Arena<ListNode>,
    head: Option<Index>,
    tail: Option<Index>,
}

impl Default for DigitList {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitList {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: None,
            tail: None,
        }
    }

    /// Builds a chain from digits given least significant first.
    pub fn from_digits(digits: &[u8]) -> DomainResult<Self> {
        let mut list = Self::new();
        for &digit in digits {
            list.push_digit(digit)?;
        }
        Ok(list)
    }

    /// Builds a chain from a conventional decimal string, e.g. `"342"` -> `[2,4,3]`.
    pub fn from_number_str(number: &str) -> DomainResult<Self> {
        let number = number.trim();
        if number.is_empty() {
            return Err(DomainError::token(number, "empty number"));
        }
        let mut list = Self::new();
        for c in number.chars().rev() {
            let digit = c
                .to_digit(10)
                .ok_or_else(|| DomainError::InvalidDigit(c.to_string()))?;
            list.append(digit as u8);
        }
        Ok(list)
    }

    /// Appends a digit at the most significant end.
    pub fn push_digit(&mut self, digit: u8) -> DomainResult<Index> {
        if digit > 9 {
            return Err(DomainError::InvalidDigit(digit.to_string()));
        }
        Ok(self.append(digit))
    }

    fn append(&mut self, digit: u8) -> Index {
        let idx = self.arena.insert(ListNode { digit, next: None });
        match self.tail.and_then(|t| self.arena.get_mut(t)) {
            Some(tail) => tail.next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        idx
    }

    pub fn head(&self) -> Option<Index> {
        self.head
    }

    pub fn node(&self, idx: Index) -> Option<&ListNode> {
        self.arena.get(idx)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Walks the chain from the head.
    pub fn iter(&self) -> DigitIter<'_> {
        DigitIter {
            list: self,
            cursor: self.head,
        }
    }

    pub fn digits(&self) -> Vec<u8> {
        self.iter().collect()
    }

    /// Numeric value, `None` on overflow or for an empty chain.
    pub fn to_u128(&self) -> Option<u128> {
        if self.is_empty() {
            return None;
        }
        self.digits()
            .iter()
            .rev()
            .try_fold(0u128, |acc, &d| acc.checked_mul(10)?.checked_add(u128::from(d)))
    }

    /// Conventional decimal notation, most significant digit first.
    pub fn to_decimal_string(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        let rendered: String = self
            .digits()
            .iter()
            .rev()
            .map(|&d| char::from(b'0' + d))
            .collect();
        match rendered.trim_start_matches('0') {
            "" => "0".to_string(),
            trimmed => trimmed.to_string(),
        }
    }
}

pub struct DigitIter<'a> {
    list: &'a DigitList,
    cursor: Option<Index>,
}

impl Iterator for DigitIter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let node = self.list.node(self.cursor?)?;
        self.cursor = node.next;
        Some(node.digit)
    }
}

/// Parses `[2,4,3]` or `2 4 3` (least significant digit first).
impl FromStr for DigitList {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .map(|rest| rest.strip_suffix(']').unwrap_or(rest))
            .unwrap_or(trimmed);

        let mut list = Self::new();
        for token in inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let digit = token
                .parse::<u8>()
                .map_err(|_| DomainError::InvalidDigit(token.to_string()))?;
            list.push_digit(digit)?;
        }
        Ok(list)
    }
}

impl fmt::Display for DigitList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().join(","))
    }
}

/// Adds two digit chains with carry propagation.
///
/// An absent or exhausted chain contributes 0. The walk continues while
/// either chain has digits left or a carry is pending, so the result has
/// `max(len(a), len(b))` digits, plus one when the final carry overflows.
/// Both inputs absent (or empty) yields `None`. Inputs are never modified.
#[instrument(level = "debug", skip_all)]
pub fn add_two_digit_chains(a: Option<&DigitList>, b: Option<&DigitList>) -> Option<DigitList> {
    let mut left = a.into_iter().flat_map(DigitList::iter);
    let mut right = b.into_iter().flat_map(DigitList::iter);

    let mut sum = DigitList::new();
    let mut carry = 0u8;
    loop {
        let (da, db) = (left.next(), right.next());
        if da.is_none() && db.is_none() && carry == 0 {
            break;
        }
        let total = da.unwrap_or(0) + db.unwrap_or(0) + carry;
        sum.append(total % 10);
        carry = total / 10;
    }

    debug!(digits = sum.len(), "digit chains added");
    (!sum.is_empty()).then_some(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn list(digits: &[u8]) -> DigitList {
        DigitList::from_digits(digits).unwrap()
    }

    #[rstest]
    #[case(&[2, 4, 3], &[5, 6, 4], &[7, 0, 8])]
    #[case(&[9, 9], &[1], &[0, 0, 1])]
    #[case(&[0], &[0], &[0])]
    #[case(&[9, 9, 9, 9], &[9, 9], &[8, 9, 0, 0, 1])]
    fn test_add_two_digit_chains(#[case] a: &[u8], #[case] b: &[u8], #[case] expected: &[u8]) {
        let sum = add_two_digit_chains(Some(&list(a)), Some(&list(b))).unwrap();
        assert_eq!(sum.digits(), expected);
    }

    #[test]
    fn test_add_both_absent_is_absent() {
        assert!(add_two_digit_chains(None, None).is_none());
        assert!(add_two_digit_chains(Some(&DigitList::new()), Some(&DigitList::new())).is_none());
    }

    #[test]
    fn test_add_one_absent_copies_other() {
        let a = list(&[1, 2, 3]);
        let sum = add_two_digit_chains(Some(&a), None).unwrap();
        assert_eq!(sum.digits(), vec![1, 2, 3]);
        assert_eq!(a.digits(), vec![1, 2, 3]);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(342, 465)]
    #[case(99, 1)]
    #[case(1, 999_999)]
    #[case(123_456_789, 987_654_321)]
    fn test_sum_preserves_numeric_value(#[case] x: u128, #[case] y: u128) {
        let a = DigitList::from_number_str(&x.to_string()).unwrap();
        let b = DigitList::from_number_str(&y.to_string()).unwrap();
        let sum = add_two_digit_chains(Some(&a), Some(&b)).unwrap();
        assert_eq!(sum.to_u128(), Some(x + y));
        let longest = a.len().max(b.len());
        assert!(sum.len() == longest || sum.len() == longest + 1);
    }

    #[test]
    fn test_from_number_str_is_least_significant_first() {
        assert_eq!(DigitList::from_number_str("342").unwrap().digits(), vec![2, 4, 3]);
        assert!(matches!(
            DigitList::from_number_str("3a2"),
            Err(DomainError::InvalidDigit(_))
        ));
        assert!(DigitList::from_number_str("  ").is_err());
    }

    #[rstest]
    #[case("[2,4,3]", vec![2, 4, 3])]
    #[case("2 4 3", vec![2, 4, 3])]
    #[case("[]", vec![])]
    fn test_parse_digit_list(#[case] literal: &str, #[case] expected: Vec<u8>) {
        assert_eq!(literal.parse::<DigitList>().unwrap().digits(), expected);
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert_eq!(
            "[1,12]".parse::<DigitList>().unwrap_err(),
            DomainError::InvalidDigit("12".to_string())
        );
        assert!("[1,-1]".parse::<DigitList>().is_err());
    }

    #[test]
    fn test_decimal_rendering() {
        assert_eq!(list(&[0, 0, 1]).to_decimal_string(), "100");
        assert_eq!(list(&[0, 0]).to_decimal_string(), "0");
        assert_eq!(list(&[7, 0, 8]).to_string(), "[7,0,8]");
        assert_eq!(DigitList::new().to_decimal_string(), "");
    }
}
