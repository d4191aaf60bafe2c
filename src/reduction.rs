//! Multivariate division: reducing one polynomial by another, or by a whole set, to a
//! normal form.
//!
//! Grounded directly on `algorithm.h`'s `tryReduce`/`ReduceAsPossible`/`ReduceOverSet`:
//! a reduction step picks the *first* term (in ascending iteration order) whose monomial
//! is divisible by the reducer's leading monomial -- not necessarily the target's own
//! leading term -- and subtracts the matching multiple of the reducer.

use crate::error::Result;
use crate::monomial::Monomial;
use crate::order::MonomialOrder;
use crate::polynomial::Polynomial;
use crate::rational::Rational;
use crate::set::PolynomialSet;

/// Performs a single reduction step of `g` by `f`, if possible.
///
/// Returns `Ok(true)` and mutates `g` if some term of `g` was divisible by `f`'s leading
/// monomial; returns `Ok(false)` (leaving `g` untouched) otherwise. Fails with
/// [`crate::error::GroebnerError::EmptyPolynomial`] if `f` is zero.
pub fn try_reduce<O: MonomialOrder>(f: &Polynomial<O>, g: &mut Polynomial<O>) -> Result<bool> {
    let (lead_monomial, lead_coefficient) = f.leading_term()?;
    let lead_monomial = lead_monomial.clone();
    let lead_coefficient = lead_coefficient.clone();

    let target: Option<(Monomial, Rational)> = g
        .terms_ascending()
        .into_iter()
        .find(|(m, _)| m.is_divisible_by(&lead_monomial))
        .map(|(m, c)| (m.clone(), c.clone()));

    let Some((divisible_monomial, divisible_coefficient)) = target else {
        return Ok(false);
    };

    let quotient_monomial = divisible_monomial.checked_div(&lead_monomial)?;
    let quotient_coefficient = divisible_coefficient.checked_div(&lead_coefficient)?;
    let quotient = Polynomial::from_terms([(quotient_monomial, quotient_coefficient)]);
    let scaled = &quotient * f;
    *g = &*g - &scaled;
    Ok(true)
}

/// Repeats [`try_reduce`] until it no longer applies. Returns whether any reduction
/// happened.
pub fn reduce_while_possible<O: MonomialOrder>(f: &Polynomial<O>, g: &mut Polynomial<O>) -> Result<bool> {
    let mut reduced_any = false;
    while try_reduce(f, g)? {
        reduced_any = true;
    }
    Ok(reduced_any)
}

/// Repeatedly sweeps `set`, reducing `g` by every member, until a full sweep makes no
/// change. The result is a representative of `g`'s coset modulo the ideal generated by
/// `set` (a true normal form only once `set` is itself a Gröbner basis).
pub fn reduce_over_set<O: MonomialOrder>(set: &PolynomialSet<O>, g: &mut Polynomial<O>) -> Result<bool> {
    let mut reduced_any = false;
    loop {
        let mut reduced_this_pass = false;
        for f in set.iter() {
            if reduce_while_possible(f, g)? {
                reduced_this_pass = true;
            }
        }
        if !reduced_this_pass {
            break;
        }
        reduced_any = true;
    }
    Ok(reduced_any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monomial::Monomial;
    use crate::order::LexOrder;

    type P = Polynomial<LexOrder>;

    fn rat(n: i64) -> Rational {
        Rational::from_integer(n)
    }

    fn mono(exponents: &[usize]) -> Monomial {
        Monomial::new(exponents)
    }

    #[test]
    fn reduces_a_matching_term_away() {
        // f = a - 1 ; g = a^2 - 1 -> reduce leading term a^2 using f: quotient a, g -= a*f
        let f = P::from_terms([(mono(&[1]), rat(1)), (mono(&[]), rat(-1))]);
        let mut g = P::from_terms([(mono(&[2]), rat(1)), (mono(&[]), rat(-1))]);
        let changed = reduce_while_possible(&f, &mut g).unwrap();
        assert!(changed);
        // a^2 - 1 - a*(a-1) = a^2 - 1 - a^2 + a = a - 1
        assert_eq!(g, P::from_terms([(mono(&[1]), rat(1)), (mono(&[]), rat(-1))]));
    }

    #[test]
    fn no_divisible_term_leaves_g_untouched() {
        let f = P::from_monomial(mono(&[0, 1]));
        let mut g = P::from_monomial(mono(&[1]));
        let changed = reduce_while_possible(&f, &mut g).unwrap();
        assert!(!changed);
        assert_eq!(g, P::from_monomial(mono(&[1])));
    }

    #[test]
    fn reduce_over_empty_set_is_identity() {
        let set: PolynomialSet<LexOrder> = PolynomialSet::new();
        let mut g = P::from_monomial(mono(&[1]));
        let changed = reduce_over_set(&set, &mut g).unwrap();
        assert!(!changed);
        assert_eq!(g, P::from_monomial(mono(&[1])));
    }
}
