//! The Buchberger completion engine: turns a set of generators into a Gröbner basis.
//!
//! Grounded directly on `algorithm.h`'s `ReduceSetOverItself` / `LeadingTermToOne` /
//! `DoBuhberger`. The outer iteration-count guard is not present in the original source;
//! it is grounded on `mathhook-core`'s `buchberger.rs`/`efficient_buchberger.rs`, which
//! bound their own Buchberger loops with `max_iterations` and a `MaxIterationsReached`
//! error for the same defensive reason.

use crate::error::{GroebnerError, Result};
use crate::order::MonomialOrder;
use crate::polynomial::Polynomial;
use crate::reduction::reduce_over_set;
use crate::s_polynomial::s_polynomial;
use crate::set::PolynomialSet;

/// Outer-loop bound on `do_buchberger`. Mathematically the loop always terminates
/// (Dickson's lemma); this exists only to fail fast on a malformed or pathological input
/// instead of spinning forever.
const MAX_OUTER_ITERATIONS: usize = 10_000;

/// Divides every polynomial in `set` by its own leading coefficient, producing monic
/// generators.
pub fn leading_term_to_one<O: MonomialOrder>(set: &PolynomialSet<O>) -> Result<PolynomialSet<O>> {
    let mut normalized = PolynomialSet::new();
    for polynomial in set.iter() {
        let leading_coefficient = polynomial.leading_coefficient()?.clone();
        normalized.insert(polynomial.checked_div_scalar(&leading_coefficient)?);
    }
    Ok(normalized)
}

/// Repeatedly pulls one polynomial out of `set`, reduces it against the rest to
/// fixpoint, and reinserts it unless it vanished -- until a full sweep makes no change.
/// Afterward, no member of `set` is reducible by the others, and `set` generates the
/// same ideal it did on entry.
pub fn reduce_set_over_itself<O: MonomialOrder>(set: &mut PolynomialSet<O>) -> Result<bool> {
    let mut reduced_any = false;
    loop {
        let mut working: Vec<Polynomial<O>> = set.iter().cloned().collect();
        let mut reduced_this_pass = false;
        for index in 0..working.len() {
            let rest = PolynomialSet::from_iter(
                working.iter().enumerate().filter(|(i, _)| *i != index).map(|(_, p)| p.clone()),
            );
            let mut p = working[index].clone();
            if reduce_over_set(&rest, &mut p)? {
                reduced_this_pass = true;
            }
            working[index] = p;
        }
        working.retain(|p| !p.is_zero());
        *set = PolynomialSet::from_iter(working);
        if !reduced_this_pass {
            break;
        }
        reduced_any = true;
    }
    Ok(reduced_any)
}

/// One round of pair processing: for every unordered pair in `set` whose leading
/// monomials are not coprime (Buchberger's first criterion), compute the S-polynomial,
/// reduce it over `set`, and collect the nonzero, not-already-present results.
pub fn reduced_pairs<O: MonomialOrder>(set: &PolynomialSet<O>) -> Result<PolynomialSet<O>> {
    let members: Vec<&Polynomial<O>> = set.iter().collect();
    let mut newbies = PolynomialSet::new();
    for i in 0..members.len() {
        for j in (i + 1)..members.len() {
            let (p, q) = (members[i], members[j]);
            let lp = p.leading_monomial()?;
            let lq = q.leading_monomial()?;
            let lcm = lp.lcm(lq);
            if lcm == lp * lq {
                continue; // Buchberger's first criterion: coprime leading monomials skip.
            }
            let mut s = s_polynomial(p, q)?;
            reduce_over_set(set, &mut s)?;
            if !s.is_zero() && !newbies.contains(&s) {
                newbies.insert(s);
            }
        }
    }
    leading_term_to_one(&newbies)
}

/// Runs Buchberger's algorithm to completion, returning an interreduced, monic Gröbner
/// basis for the ideal generated by `set`.
pub fn do_buchberger<O: MonomialOrder>(set: &PolynomialSet<O>) -> Result<PolynomialSet<O>> {
    let mut basis = leading_term_to_one(set)?;
    reduce_set_over_itself(&mut basis)?;

    for _ in 0..MAX_OUTER_ITERATIONS {
        let newbies = reduced_pairs(&basis)?;
        if newbies.is_empty() {
            reduce_set_over_itself(&mut basis)?;
            return Ok(basis);
        }
        for polynomial in newbies.into_vec() {
            basis.insert(polynomial);
        }
    }
    Err(GroebnerError::MaxIterationsExceeded { limit: MAX_OUTER_ITERATIONS })
}
