//! S-polynomials: the combination that cancels two polynomials' leading terms.

use crate::error::Result;
use crate::order::MonomialOrder;
use crate::polynomial::Polynomial;

/// `S(f, g) = (lcm/LT(f)) * c_g * f - (lcm/LT(g)) * c_f * g`, where `lcm` is the least
/// common multiple of `f` and `g`'s leading monomials. This is the unique minimal-degree
/// combination of `f` and `g` whose leading terms cancel.
///
/// Fails with [`crate::error::GroebnerError::EmptyPolynomial`] if either input is zero.
pub fn s_polynomial<O: MonomialOrder>(f: &Polynomial<O>, g: &Polynomial<O>) -> Result<Polynomial<O>> {
    let (f_monomial, f_coefficient) = f.leading_term()?;
    let (g_monomial, g_coefficient) = g.leading_term()?;
    let (f_monomial, f_coefficient) = (f_monomial.clone(), f_coefficient.clone());
    let (g_monomial, g_coefficient) = (g_monomial.clone(), g_coefficient.clone());

    let lcm = f_monomial.lcm(&g_monomial);
    let f_factor = lcm.checked_div(&f_monomial)?;
    let g_factor = lcm.checked_div(&g_monomial)?;

    let scaled_f = &(f * &f_factor) * &g_coefficient;
    let scaled_g = &(g * &g_factor) * &f_coefficient;
    Ok(&scaled_f - &scaled_g)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monomial::Monomial;
    use crate::order::LexOrder;
    use crate::rational::Rational;

    type P = Polynomial<LexOrder>;

    fn rat(n: i64) -> Rational {
        Rational::from_integer(n)
    }

    fn mono(exponents: &[usize]) -> Monomial {
        Monomial::new(exponents)
    }

    #[test]
    fn cancels_leading_terms() {
        // f = a^2*b - 1, g = a*b^2 - 1 (lex)
        let f = P::from_terms([(mono(&[2, 1]), rat(1)), (mono(&[]), rat(-1))]);
        let g = P::from_terms([(mono(&[1, 2]), rat(1)), (mono(&[]), rat(-1))]);
        let s = s_polynomial(&f, &g).unwrap();
        // lcm(a^2 b, a b^2) = a^2 b^2; f_factor = lcm/LT(f) = b; g_factor = lcm/LT(g) = a
        // S = b*f - a*g = (a^2 b^2 - b) - (a^2 b^2 - a) = a - b
        assert_eq!(s, P::from_terms([(mono(&[1]), rat(1)), (mono(&[0, 1]), rat(-1))]));
    }

    #[test]
    fn leading_term_of_s_poly_is_strictly_below_the_lcm() {
        let f = P::from_terms([(mono(&[2, 1]), rat(1)), (mono(&[]), rat(-1))]);
        let g = P::from_terms([(mono(&[1, 2]), rat(1)), (mono(&[]), rat(-1))]);
        let s = s_polynomial(&f, &g).unwrap();
        let lead = s.leading_monomial().unwrap();
        let lcm = mono(&[2, 2]);
        assert_ne!(*lead, lcm);
    }

    #[test]
    fn zero_input_errs() {
        let f = P::zero();
        let g = P::from_monomial(mono(&[1]));
        assert!(s_polynomial(&f, &g).is_err());
    }
}
