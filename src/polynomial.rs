//! Sparse multivariate polynomials over [`Rational`], sorted by a type-level
//! [`MonomialOrder`].

use crate::error::{GroebnerError, Result};
use crate::monomial::Monomial;
use crate::order::MonomialOrder;
use crate::rational::Rational;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, Mul, Sub};

/// A polynomial `sum_i c_i * m_i` with every `c_i` nonzero, keyed by monomial and
/// ordered for iteration/leading-term purposes by `O`.
///
/// `O` is part of the type: `Polynomial<LexOrder>` and `Polynomial<GrevLexOrder>` cannot
/// be compared, added, or multiplied together even if they happen to hold the same terms.
#[derive(Debug, Clone)]
pub struct Polynomial<O> {
    terms: HashMap<Monomial, Rational>,
    _order: PhantomData<O>,
}

impl<O: MonomialOrder> Polynomial<O> {
    /// The zero polynomial (the empty term map).
    pub fn zero() -> Self {
        Polynomial { terms: HashMap::new(), _order: PhantomData }
    }

    /// Builds a polynomial from a list of terms. Later entries overwrite earlier ones
    /// sharing a monomial; any resulting zero coefficient is trimmed.
    pub fn from_terms(terms: impl IntoIterator<Item = (Monomial, Rational)>) -> Self {
        let mut map = HashMap::new();
        for (monomial, coefficient) in terms {
            map.insert(monomial, coefficient);
        }
        map.retain(|_, coefficient| !coefficient.is_zero());
        Polynomial { terms: map, _order: PhantomData }
    }

    /// The monomial `m` with coefficient 1.
    pub fn from_monomial(m: Monomial) -> Self {
        Polynomial::from_terms([(m, Rational::one())])
    }

    /// The constant polynomial `c`.
    pub fn from_scalar(c: Rational) -> Self {
        Polynomial::from_terms([(Monomial::one(), c)])
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    pub fn coefficient(&self, m: &Monomial) -> Rational {
        self.terms.get(m).cloned().unwrap_or_else(Rational::zero)
    }

    /// Terms sorted ascending under `O`.
    pub fn terms_ascending(&self) -> Vec<(&Monomial, &Rational)> {
        let mut terms: Vec<_> = self.terms.iter().collect();
        terms.sort_by(|(a, _), (b, _)| cmp_with_order::<O>(a, b));
        terms
    }

    /// Terms sorted descending under `O`; the first entry is the leading term.
    pub fn terms_descending(&self) -> Vec<(&Monomial, &Rational)> {
        let mut terms = self.terms_ascending();
        terms.reverse();
        terms
    }

    /// The maximum term under `O`. Fails with [`GroebnerError::EmptyPolynomial`] on the
    /// zero polynomial.
    pub fn leading_term(&self) -> Result<(&Monomial, &Rational)> {
        self.terms_descending()
            .into_iter()
            .next()
            .ok_or(GroebnerError::EmptyPolynomial)
    }

    pub fn leading_monomial(&self) -> Result<&Monomial> {
        self.leading_term().map(|(m, _)| m)
    }

    pub fn leading_coefficient(&self) -> Result<&Rational> {
        self.leading_term().map(|(_, c)| c)
    }

    /// Divides every coefficient by `c`. Fails with [`GroebnerError::ArithmeticError`]
    /// if `c` is zero.
    pub fn checked_div_scalar(&self, c: &Rational) -> Result<Polynomial<O>> {
        if c.is_zero() {
            return Err(GroebnerError::ArithmeticError);
        }
        let terms = self
            .terms
            .iter()
            .map(|(m, coeff)| (m.clone(), coeff.checked_div(c).expect("c checked nonzero above")));
        Ok(Polynomial::from_terms(terms))
    }

    fn mutate_add(&mut self, other: &Polynomial<O>, sign: i64) {
        for (monomial, coefficient) in &other.terms {
            let entry = self.terms.entry(monomial.clone()).or_insert_with(Rational::zero);
            if sign > 0 {
                *entry = &*entry + coefficient;
            } else {
                *entry = &*entry - coefficient;
            }
        }
        self.terms.retain(|_, coefficient| !coefficient.is_zero());
    }
}

fn cmp_with_order<O: MonomialOrder>(a: &Monomial, b: &Monomial) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    if a == b {
        Ordering::Equal
    } else if O::is_less(a, b) {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

impl<O: MonomialOrder> Add for &Polynomial<O> {
    type Output = Polynomial<O>;
    fn add(self, rhs: &Polynomial<O>) -> Polynomial<O> {
        let mut out = self.clone();
        out.mutate_add(rhs, 1);
        out
    }
}

impl<O: MonomialOrder> Sub for &Polynomial<O> {
    type Output = Polynomial<O>;
    fn sub(self, rhs: &Polynomial<O>) -> Polynomial<O> {
        let mut out = self.clone();
        out.mutate_add(rhs, -1);
        out
    }
}

impl<O: MonomialOrder> Mul for &Polynomial<O> {
    type Output = Polynomial<O>;
    fn mul(self, rhs: &Polynomial<O>) -> Polynomial<O> {
        let mut terms: HashMap<Monomial, Rational> = HashMap::new();
        for (m1, c1) in &self.terms {
            for (m2, c2) in &rhs.terms {
                let m = m1 * m2;
                let entry = terms.entry(m).or_insert_with(Rational::zero);
                *entry = &*entry + &(c1 * c2);
            }
        }
        terms.retain(|_, coefficient| !coefficient.is_zero());
        Polynomial { terms, _order: PhantomData }
    }
}

/// Multiplication by a single monomial (scaling every term's exponent vector).
impl<O: MonomialOrder> Mul<&Monomial> for &Polynomial<O> {
    type Output = Polynomial<O>;
    fn mul(self, rhs: &Monomial) -> Polynomial<O> {
        let terms = self.terms.iter().map(|(m, c)| (m * rhs, c.clone()));
        Polynomial::from_terms(terms)
    }
}

/// Scaling every coefficient by a constant.
impl<O: MonomialOrder> Mul<&Rational> for &Polynomial<O> {
    type Output = Polynomial<O>;
    fn mul(self, rhs: &Rational) -> Polynomial<O> {
        let terms = self.terms.iter().map(|(m, c)| (m.clone(), c * rhs));
        Polynomial::from_terms(terms)
    }
}

impl<O: MonomialOrder> PartialEq for Polynomial<O> {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
    }
}

impl<O: MonomialOrder> Eq for Polynomial<O> {}

/// Order-independent: the hash combines per-term hashes without regard to iteration
/// order, the same way the source's `hash_value` folds `boost::hash_combine` over every
/// term of the (already order-sorted) map — except here the fold itself must not depend
/// on storage order, since this type's backing map is unordered.
impl<O: MonomialOrder> Hash for Polynomial<O> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut combined: u64 = 0;
        for (monomial, coefficient) in &self.terms {
            let mut term_hasher = std::collections::hash_map::DefaultHasher::new();
            monomial.hash(&mut term_hasher);
            coefficient.hash(&mut term_hasher);
            combined ^= term_hasher.finish();
        }
        state.write_u64(combined);
    }
}

impl<O: MonomialOrder> fmt::Display for Polynomial<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms = self.terms_ascending();
        if terms.is_empty() {
            return write!(f, "0");
        }
        for (index, (monomial, coefficient)) in terms.iter().enumerate() {
            if index > 0 {
                write!(f, " + ")?;
            }
            if !coefficient.is_one() || **monomial == Monomial::one() {
                write!(f, "{coefficient}")?;
            }
            write!(f, "{monomial}")?;
        }
        Ok(())
    }
}
