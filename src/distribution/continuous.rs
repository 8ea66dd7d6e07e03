//! # Continuous — Distribuição Sobre um Intervalo
//!
//! Associa uma **pdf** a um intervalo `[left, right]`. A amostragem
//! discretiza o intervalo em uma grade de `2 · n` pontos igualmente
//! espaçados e aplica o amostrador por cotas sobre a grade.

use rand::Rng;

use super::{linspace, quota_sample};
use crate::core::SolverError;

/// Distribuição contínua: pdf + intervalo.
pub struct Continuous<F> {
    pdf: F,
    left: f64,
    right: f64,
}

impl<F> Continuous<F>
where
    F: Fn(f64) -> f64,
{
    /// Cria a distribuição sobre `[left, right]`.
    ///
    /// # Erros
    ///
    /// [`SolverError::InvalidDistribution`] se `left >= right` ou algum
    /// extremo não for finito.
    pub fn new(pdf: F, space: [f64; 2]) -> Result<Self, SolverError> {
        let [left, right] = space;
        if !(left.is_finite() && right.is_finite() && left < right) {
            return Err(SolverError::InvalidDistribution(format!(
                "o espaço deve ser [a, b] com a < b, recebido [{}, {}]",
                left, right
            )));
        }
        Ok(Self { pdf, left, right })
    }

    /// Gera `size` amostras usando o RNG da thread.
    pub fn generate(&self, size: usize) -> Vec<f64> {
        self.generate_with_rng(size, &mut rand::thread_rng())
    }

    /// Gera `size` amostras com um RNG específico.
    pub fn generate_with_rng<R: Rng>(&self, size: usize, rng: &mut R) -> Vec<f64> {
        let grid = linspace(self.left, self.right, size * 2);
        let weights: Vec<f64> = grid.iter().map(|x| (self.pdf)(*x)).collect();
        quota_sample(&grid, &weights, size, rng)
    }

    /// Densidade em `x` (não é uma probabilidade).
    pub fn get_prob(&self, x: f64) -> f64 {
        (self.pdf)(x)
    }

    /// Extremos do intervalo.
    pub fn bounds(&self) -> (f64, f64) {
        (self.left, self.right)
    }
}
