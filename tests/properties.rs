//! Property-based tests for the algebraic laws the core relies on: order totality and
//! polynomial ring identities. Grounded on the teacher's `proptest` dev-dependency for
//! exactly this kind of randomized algebraic-law check.

use groebner::monomial::Monomial;
use groebner::order::{GrLexOrder, GrevLexOrder, LexOrder, MonomialOrder};
use groebner::polynomial::Polynomial;
use groebner::rational::Rational;
use proptest::prelude::*;

type Lex = Polynomial<LexOrder>;

fn small_exponents() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..6, 0..5)
}

fn arb_monomial() -> impl Strategy<Value = Monomial> {
    small_exponents().prop_map(|v| Monomial::new(&v))
}

proptest! {
    #[test]
    fn lex_order_is_total_and_antisymmetric(a in arb_monomial(), b in arb_monomial()) {
        let less_ab = LexOrder::is_less(&a, &b);
        let less_ba = LexOrder::is_less(&b, &a);
        if a == b {
            prop_assert!(!less_ab && !less_ba);
        } else {
            prop_assert!(less_ab != less_ba);
        }
    }

    #[test]
    fn grlex_order_is_total_and_antisymmetric(a in arb_monomial(), b in arb_monomial()) {
        let less_ab = GrLexOrder::is_less(&a, &b);
        let less_ba = GrLexOrder::is_less(&b, &a);
        if a == b {
            prop_assert!(!less_ab && !less_ba);
        } else {
            prop_assert!(less_ab != less_ba);
        }
    }

    #[test]
    fn grevlex_order_is_total_and_antisymmetric(a in arb_monomial(), b in arb_monomial()) {
        let less_ab = GrevLexOrder::is_less(&a, &b);
        let less_ba = GrevLexOrder::is_less(&b, &a);
        if a == b {
            prop_assert!(!less_ab && !less_ba);
        } else {
            prop_assert!(less_ab != less_ba);
        }
    }

    #[test]
    fn one_is_the_order_minimum(a in arb_monomial()) {
        let one = Monomial::one();
        if a != one {
            prop_assert!(LexOrder::is_less(&one, &a));
            prop_assert!(GrLexOrder::is_less(&one, &a));
        }
    }

    #[test]
    fn order_respects_multiplication(a in arb_monomial(), b in arb_monomial(), p in arb_monomial()) {
        if LexOrder::is_less(&a, &b) {
            prop_assert!(LexOrder::is_less(&(&a * &p), &(&b * &p)));
        }
    }

    #[test]
    fn monomial_division_round_trips(a in arb_monomial(), b in arb_monomial()) {
        let product = &a * &b;
        prop_assert_eq!(product.checked_div(&b).unwrap(), a);
    }

    #[test]
    fn polynomial_addition_then_subtraction_is_identity(
        terms in prop::collection::vec((small_exponents(), -10i64..10), 0..4)
    ) {
        let p = Lex::from_terms(terms.into_iter().map(|(e, c)| (Monomial::new(&e), Rational::from_integer(c))));
        let q = &p + &Lex::from_scalar(Rational::from_integer(3));
        let back = &q - &Lex::from_scalar(Rational::from_integer(3));
        prop_assert_eq!(back, p);
    }

    #[test]
    fn multiplying_by_one_is_identity(
        terms in prop::collection::vec((small_exponents(), -10i64..10), 0..4)
    ) {
        let p = Lex::from_terms(terms.into_iter().map(|(e, c)| (Monomial::new(&e), Rational::from_integer(c))));
        let one = Lex::from_scalar(Rational::one());
        prop_assert_eq!(&p * &one, p);
    }

    #[test]
    fn multiplying_by_zero_is_zero(
        terms in prop::collection::vec((small_exponents(), -10i64..10), 0..4)
    ) {
        let p = Lex::from_terms(terms.into_iter().map(|(e, c)| (Monomial::new(&e), Rational::from_integer(c))));
        let zero = Lex::zero();
        prop_assert_eq!(&p * &zero, Lex::zero());
    }
}

proptest! {
    #[test]
    fn rational_arithmetic_stays_canonical(n1 in -50i64..50, d1 in 1i64..50, n2 in -50i64..50, d2 in 1i64..50) {
        let a = Rational::new(n1, d1).unwrap();
        let b = Rational::new(n2, d2).unwrap();
        let sum = &a + &b;
        prop_assert!(*sum.denominator() > num_bigint::BigInt::from(0));
        let product = &a * &b;
        prop_assert!(*product.denominator() > num_bigint::BigInt::from(0));
    }
}
