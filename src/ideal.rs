//! Ideal and radical membership queries.
//!
//! Grounded directly on `algorithm.h`'s `LaysInIdeal` / `getMaxVariableNumber` /
//! `LaysInRadical`.

use crate::buchberger::do_buchberger;
use crate::error::Result;
use crate::monomial::Monomial;
use crate::order::MonomialOrder;
use crate::polynomial::Polynomial;
use crate::reduction::reduce_over_set;
use crate::set::PolynomialSet;

/// True iff `p` is in the ideal generated by `ideal`'s polynomials.
///
/// Computes a Gröbner basis of a *copy* of `ideal` (the caller's set is untouched),
/// reduces a copy of `p` over it, and checks the result is zero.
pub fn lays_in_ideal<O: MonomialOrder>(ideal: &PolynomialSet<O>, p: &Polynomial<O>) -> Result<bool> {
    let basis = do_buchberger(ideal)?;
    let mut p = p.clone();
    reduce_over_set(&basis, &mut p)?;
    Ok(p.is_zero())
}

fn max_variable_index<O: MonomialOrder>(set: &PolynomialSet<O>) -> usize {
    set.iter()
        .flat_map(|p| p.terms_ascending().into_iter().map(|(m, _)| m.greatest_variable_index()))
        .max()
        .unwrap_or(0)
}

/// True iff `p` is in the radical of the ideal generated by `ideal`'s polynomials.
///
/// Rabinowitsch trick: introduce a fresh variable `z` at index one past the highest
/// variable index appearing anywhere in `ideal` or in `p`, append `p*z - 1` to the
/// generators, and test whether `1` lies in the extended ideal.
pub fn lays_in_radical<O: MonomialOrder>(ideal: &PolynomialSet<O>, p: &Polynomial<O>) -> Result<bool> {
    let p_max_index = p
        .terms_ascending()
        .into_iter()
        .map(|(m, _)| m.greatest_variable_index())
        .max()
        .unwrap_or(0);
    let fresh_index = max_variable_index(ideal).max(p_max_index);
    let z = Monomial::nth_variable(fresh_index, 1);
    let z_poly = Polynomial::from_monomial(z);
    let one = Polynomial::from_scalar(crate::rational::Rational::one());

    let mut extended = ideal.clone();
    let witness = &(p * &z_poly) - &one;
    extended.insert(witness);

    lays_in_ideal(&extended, &one)
}
