//! # Discrete — Distribuição Sobre um Espaço Finito
//!
//! Associa uma **pmf** (função massa de probabilidade) a um espaço finito de
//! valores e gera dados sintéticos que seguem essa distribuição.
//!
//! A pmf não precisa estar normalizada: as cotas de amostragem são
//! proporcionais a `p(x) / Σp`.

use rand::Rng;

use super::quota_sample;
use crate::core::SolverError;

/// Distribuição discreta: pmf + espaço amostral.
///
/// ## Exemplo
///
/// ```rust
/// use pprobs::distribution::Discrete;
///
/// // dado viciado: o 6 sai metade das vezes
/// let dado = Discrete::new(|x: &u8| if *x == 6 { 0.5 } else { 0.1 }, (1..=6).collect())?;
/// let amostras = dado.generate(600);
/// assert_eq!(amostras.len(), 600);
/// assert_eq!(dado.get_prob(&6), 0.5);
/// # Ok::<(), pprobs::SolverError>(())
/// ```
pub struct Discrete<T, F> {
    pmf: F,
    space: Vec<T>,
}

impl<T, F> Discrete<T, F>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    /// Cria a distribuição.
    ///
    /// # Erros
    ///
    /// [`SolverError::InvalidDistribution`] se o espaço estiver vazio.
    pub fn new(pmf: F, space: Vec<T>) -> Result<Self, SolverError> {
        if space.is_empty() {
            return Err(SolverError::InvalidDistribution(
                "o espaço amostral deve ter ao menos um valor".to_string(),
            ));
        }
        Ok(Self { pmf, space })
    }

    /// Gera `size` amostras usando o RNG da thread.
    pub fn generate(&self, size: usize) -> Vec<T> {
        self.generate_with_rng(size, &mut rand::thread_rng())
    }

    /// Gera `size` amostras com um RNG específico (útil para testes).
    pub fn generate_with_rng<R: Rng>(&self, size: usize, rng: &mut R) -> Vec<T> {
        let weights: Vec<f64> = self.space.iter().map(|x| (self.pmf)(x)).collect();
        quota_sample(&self.space, &weights, size, rng)
    }

    /// Valor da pmf em `x`.
    pub fn get_prob(&self, x: &T) -> f64 {
        (self.pmf)(x)
    }

    /// Espaço amostral.
    pub fn space(&self) -> &[T] {
        &self.space
    }
}
