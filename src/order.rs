//! Monomial orders, realized as a type-level (not runtime) parameter.
//!
//! The source's `MonomialOrder` is a runtime object wrapping a comparator closure, and
//! `monomial_order.cpp`'s `combine` builds new orders at runtime by composing two such
//! objects. This crate instead encodes the order as a zero-sized marker type implementing
//! [`MonomialOrder`], so that `Polynomial<LexOrder>` and `Polynomial<GrevLexOrder>` are
//! distinct, incomparable types rather than two values of the same type carrying different
//! runtime comparators — matching the design note that two polynomials under different
//! orders are meant to be genuinely different types.

use crate::monomial::Monomial;
use std::marker::PhantomData;

/// An admissible total order on monomials, selected at the type level.
///
/// Implementors must be irreflexive, antisymmetric, transitive, and total on distinct
/// monomials, with `1` as the unique minimum and must respect multiplication:
/// `is_less(a, b) => is_less(a*p, b*p)` for all `p`.
pub trait MonomialOrder: 'static {
    fn is_less(a: &Monomial, b: &Monomial) -> bool;
}

/// Lexicographic order: compare exponents left to right; the first difference decides.
/// Admissible on its own.
pub struct LexOrder;

impl MonomialOrder for LexOrder {
    fn is_less(a: &Monomial, b: &Monomial) -> bool {
        if a == b {
            return false;
        }
        let mut index = 0;
        loop {
            let da = a.degree(index);
            let db = b.degree(index);
            if da != db {
                return da < db;
            }
            index += 1;
        }
    }
}

/// Reverse-lexicographic order: compare right to left with reversed sense.
///
/// Not admissible by itself (fails `1 ≺ m` for some `m`); exposed only as a building
/// block for [`Sum`], never as a top-level order alias — see the Open Question decision
/// in `DESIGN.md`.
pub struct RevLexOrder;

impl MonomialOrder for RevLexOrder {
    fn is_less(a: &Monomial, b: &Monomial) -> bool {
        if a == b {
            return false;
        }
        let len = a.greatest_variable_index().max(b.greatest_variable_index());
        for index in (0..len).rev() {
            let da = a.degree(index);
            let db = b.degree(index);
            if da != db {
                return da > db;
            }
        }
        false
    }
}

/// Total-degree order: compares `total_degree()` only. Admissible as a refinement
/// component, not a total order on its own (many monomials share a degree); used only
/// inside [`Sum`].
pub struct DegreeOrder;

impl MonomialOrder for DegreeOrder {
    fn is_less(a: &Monomial, b: &Monomial) -> bool {
        a.total_degree() < b.total_degree()
    }
}

/// Lexicographic composition of two orders: compare by `A` first, break ties with `B`.
///
/// Grounded directly on `monomial_order.cpp`'s `combine`:
/// `a.isLess(lhs,rhs) ? true : a.isLess(rhs,lhs) ? false : b.isLess(lhs,rhs)`.
pub struct Sum<A, B>(PhantomData<(A, B)>);

impl<A: MonomialOrder, B: MonomialOrder> MonomialOrder for Sum<A, B> {
    fn is_less(a: &Monomial, b: &Monomial) -> bool {
        if A::is_less(a, b) {
            true
        } else if A::is_less(b, a) {
            false
        } else {
            B::is_less(a, b)
        }
    }
}

/// Graded lexicographic order: total degree first, lex to break ties.
pub type GrLexOrder = Sum<DegreeOrder, LexOrder>;

/// Graded reverse-lexicographic order: total degree first, revlex to break ties.
pub type GrevLexOrder = Sum<DegreeOrder, RevLexOrder>;

#[cfg(test)]
mod tests {
    use super::*;

    fn m(exponents: &[usize]) -> Monomial {
        Monomial::new(exponents)
    }

    #[test]
    fn lex_order_matches_fixture() {
        let a = m(&[2, 3, 4]);
        let b = m(&[2, 3, 4, 5]);
        let c = m(&[5]);
        let d = m(&[3, 6]);
        assert!(LexOrder::is_less(&a, &b));
        assert!(LexOrder::is_less(&a, &c));
        assert!(LexOrder::is_less(&d, &c));
        assert!(!LexOrder::is_less(&c, &d));
    }

    #[test]
    fn degree_order_compares_totals() {
        let a = m(&[2, 3, 4]); // degree 9
        let c = m(&[5]); // degree 5
        assert!(DegreeOrder::is_less(&c, &a));
        assert!(!DegreeOrder::is_less(&a, &c));
    }

    #[test]
    fn grlex_breaks_ties_by_lex() {
        let a = m(&[2, 3, 4]); // degree 9
        let b = m(&[2, 3, 4, 5]); // degree 14, strictly greater degree
        assert!(GrLexOrder::is_less(&a, &b));

        let e = m(&[1, 8]); // degree 9
        let f = m(&[2, 0, 7]); // degree 9, ties broken by lex
        assert!(GrLexOrder::is_less(&e, &f));
    }

    #[test]
    fn one_is_the_minimum() {
        let one = Monomial::one();
        let x = m(&[1]);
        assert!(LexOrder::is_less(&one, &x));
        assert!(GrLexOrder::is_less(&one, &x));
        assert!(GrevLexOrder::is_less(&one, &x));
    }

    #[test]
    fn order_is_total_on_distinct_monomials() {
        let a = m(&[2, 1]);
        let b = m(&[1, 2]);
        assert!(LexOrder::is_less(&b, &a) != LexOrder::is_less(&a, &b));
    }

    #[test]
    fn multiplication_respects_order() {
        let a = m(&[1]);
        let b = m(&[2]);
        let p = m(&[0, 1]);
        assert!(LexOrder::is_less(&a, &b));
        assert!(LexOrder::is_less(&(&a * &p), &(&b * &p)));
    }
}
