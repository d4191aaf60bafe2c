//! The cyclic-n benchmark family: a standard stress test for Gröbner basis
//! implementations.
//!
//! Grounded directly on `cyclic.h`'s `GeneratePowerFamily` / `GenerateSymmetricFamily` /
//! `GenerateCyclicFamily`: build the power-sum family of `n` variables, turn it into the
//! elementary-symmetric family via Newton's identities, nudge the top symmetric function
//! by +-1, and drop the (trivial) zeroth entry.

use crate::error::Result;
use crate::monomial::Monomial;
use crate::order::MonomialOrder;
use crate::polynomial::Polynomial;
use crate::rational::Rational;
use crate::set::PolynomialSet;

/// `p_k = sum_{i=0}^{n-1} x_i^k` for `k = 1..=n`; `power_family[0]` is unused (left as
/// the zero polynomial) to keep the indexing `1..=n` matching the source directly.
fn power_family<O: MonomialOrder>(n: usize) -> Vec<Polynomial<O>> {
    let mut family = vec![Polynomial::zero(); n + 1];
    for degree in 1..=n {
        let mut sum = Polynomial::zero();
        for variable in 0..n {
            let term = Polynomial::from_monomial(Monomial::nth_variable(variable, degree));
            sum = &sum + &term;
        }
        family[degree] = sum;
    }
    family
}

/// Newton-Girard recursion: `e_0 = 1`, `e_k = (1/k) * sum_{i=1}^{k} (-1)^(i-1) * e_{k-i} * p_i`.
fn symmetric_family<O: MonomialOrder>(power: &[Polynomial<O>]) -> Result<Vec<Polynomial<O>>> {
    let mut family = vec![Polynomial::zero(); power.len()];
    family[0] = Polynomial::from_scalar(Rational::one());
    for k in 1..family.len() {
        let mut accumulator = Polynomial::zero();
        for i in 1..=k {
            let summand = &family[k - i] * &power[i];
            accumulator = if i % 2 == 1 { &accumulator + &summand } else { &accumulator - &summand };
        }
        family[k] = accumulator.checked_div_scalar(&Rational::from_integer(k as i64))?;
    }
    Ok(family)
}

/// Generates the standard `n`-variable cyclic benchmark ideal: `n - 1` cyclic generators
/// plus a final generator adjusted by +-1 depending on the parity of `n`. The generated
/// monomials range over variables `0..n`.
pub fn cyclic_n<O: MonomialOrder>(n: usize) -> Result<PolynomialSet<O>> {
    let power = power_family::<O>(n);
    let mut symmetric = symmetric_family(&power)?;

    let adjustment = Polynomial::from_scalar(Rational::one());
    if n % 2 == 0 {
        symmetric[n] = &symmetric[n] + &adjustment;
    } else {
        symmetric[n] = &symmetric[n] - &adjustment;
    }

    Ok(PolynomialSet::from_iter(symmetric.into_iter().skip(1)))
}
