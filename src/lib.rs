//! Gröbner basis computation over the rationals.
//!
//! Implements Buchberger's algorithm over sparse multivariate polynomials with exact
//! rational coefficients, parameterized at the type level by an admissible monomial
//! order, plus the ideal- and radical-membership queries built on top of it.
//!
//! ```
//! use groebner::order::LexOrder;
//! use groebner::monomial::Monomial;
//! use groebner::polynomial::Polynomial;
//! use groebner::set::PolynomialSet;
//! use groebner::ideal::lays_in_radical;
//!
//! type P = Polynomial<LexOrder>;
//!
//! // I = { a^2 }; a is not in I but is in its radical.
//! let a_squared = P::from_monomial(Monomial::new(&[2]));
//! let ideal = PolynomialSet::from_iter([a_squared]);
//! let a = P::from_monomial(Monomial::new(&[1]));
//! assert!(lays_in_radical(&ideal, &a).unwrap());
//! ```

pub mod buchberger;
pub mod cyclic;
pub mod error;
pub mod ideal;
pub mod monomial;
pub mod order;
pub mod polynomial;
pub mod rational;
pub mod reduction;
pub mod s_polynomial;
pub mod set;

pub use buchberger::do_buchberger;
pub use error::{GroebnerError, Result};
pub use ideal::{lays_in_ideal, lays_in_radical};
pub use monomial::Monomial;
pub use order::{DegreeOrder, GrLexOrder, GrevLexOrder, LexOrder, MonomialOrder, RevLexOrder, Sum};
pub use polynomial::Polynomial;
pub use rational::Rational;
pub use s_polynomial::s_polynomial;
pub use set::PolynomialSet;
