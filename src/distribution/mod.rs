//! # Módulo Distribution — Amostragem e Probabilidade Conjunta
//!
//! Utilitários independentes do solver:
//!
//! - [`Discrete`] — pmf sobre um espaço finito
//! - [`Continuous`] — pdf sobre um intervalo `[a, b]`
//! - [`Joint`] — função de probabilidade bivariada (tabela e regiões)
//!
//! ## Amostrador por Cotas
//!
//! `Discrete` e `Continuous` compartilham o mesmo amostrador. Em vez de
//! sortear cada amostra de forma independente, cada ponto recebe uma **cota**
//! proporcional à sua probabilidade:
//!
//! ```text
//! para cada ponto x (em ordem decrescente de p(x)):
//!     repetir floor(n · p(x) / Σp) vezes:
//!         com chance 0.9, adicionar x
//! completar até n sorteando pontos proporcionalmente a p(x)
//! embaralhar
//! ```
//!
//! O resultado tem **exatamente** `n` amostras. As cotas garantem a forma
//! da distribuição para pontos de massa alta; o preenchimento ponderado cobre
//! o restante (em uma grade contínua, quase todas as cotas são zero). Se os
//! pesos não formarem uma distribuição válida (todos nulos, negativos, NaN),
//! o preenchimento é uniforme.

/// Sub-módulo com a distribuição discreta.
pub mod discrete;

/// Sub-módulo com a distribuição contínua.
pub mod continuous;

/// Sub-módulo com a função de probabilidade conjunta.
pub mod joint;

pub use continuous::Continuous;
pub use discrete::Discrete;
pub use joint::{Domain, Joint, ProbabilityTable, Region};

use std::cmp::Ordering;

use rand::distributions::WeightedIndex;
use rand::seq::SliceRandom;
use rand::Rng;

/// Probabilidade de manter cada tentativa dentro da cota de um ponto.
const KEEP_RATE: f64 = 0.9;

/// Amostrador por cotas compartilhado — ver documentação do módulo.
///
/// `weights[i]` é a massa (ou densidade) de `points[i]`. Retorna `size`
/// amostras, ou nenhuma se `points` estiver vazio.
pub(crate) fn quota_sample<T: Clone, R: Rng>(
    points: &[T],
    weights: &[f64],
    size: usize,
    rng: &mut R,
) -> Vec<T> {
    if points.is_empty() {
        return Vec::new();
    }

    let total: f64 = weights.iter().sum();
    let positive: f64 = weights.iter().filter(|w| **w > 0.0).sum();
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&i, &j| weights[j].partial_cmp(&weights[i]).unwrap_or(Ordering::Equal));

    let mut samples = Vec::with_capacity(size);
    // com pesos negativos `total < positive` e as cotas deixam de somar `size`
    if total > 0.0 && total.is_finite() && total >= positive {
        for i in order {
            let remaining = size - samples.len();
            if remaining == 0 {
                break;
            }
            let quota = (size as f64 * weights[i] / total).floor();
            if !(quota > 0.0) {
                continue;
            }
            for _ in 0..(quota as usize).min(remaining) {
                if rng.gen::<f64>() < KEEP_RATE {
                    samples.push(points[i].clone());
                }
            }
        }
    }

    match WeightedIndex::new(weights) {
        Ok(weighted) => {
            while samples.len() < size {
                samples.push(points[rng.sample(&weighted)].clone());
            }
        }
        Err(_) => {
            while samples.len() < size {
                if let Some(point) = points.choose(rng) {
                    samples.push(point.clone());
                }
            }
        }
    }
    samples.shuffle(rng);
    samples
}

/// `n` pontos igualmente espaçados em `[start, end]`, extremos incluídos.
pub(crate) fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_linspace() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_quota_sample_exact_size() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = ['a', 'b', 'c'];
        for size in [0, 1, 10, 333] {
            let samples = quota_sample(&points, &[0.5, 0.3, 0.2], size, &mut rng);
            assert_eq!(samples.len(), size);
        }
    }

    /// Pesos nulos ou negativos: só preenchimento uniforme, ainda com `size` amostras
    #[test]
    fn test_quota_sample_degenerate_weights() {
        let mut rng = StdRng::seed_from_u64(11);
        let zero = quota_sample(&[1, 2], &[0.0, 0.0], 20, &mut rng);
        assert_eq!(zero.len(), 20);
        let negative = quota_sample(&[1, 2], &[-1.0, 3.0], 20, &mut rng);
        assert_eq!(negative.len(), 20);
        assert!(quota_sample::<u8, _>(&[], &[], 5, &mut rng).is_empty());
    }

    /// Pesos quase se cancelando: sem cotas gigantes, retorno imediato
    #[test]
    fn test_quota_sample_near_cancelling_weights() {
        let mut rng = StdRng::seed_from_u64(13);
        for eps in [1e-7, 1e-12, 1e-300] {
            let samples = quota_sample(&[1u32, 2], &[-1.0, 1.0 + eps], 10, &mut rng);
            assert_eq!(samples.len(), 10);
            assert!(samples.iter().all(|s| *s == 1 || *s == 2));
        }
    }

    /// Ponto dominante aparece com frequência próxima da sua massa
    #[test]
    fn test_quota_sample_follows_weights() {
        let mut rng = StdRng::seed_from_u64(42);
        let samples = quota_sample(&["raro", "comum"], &[0.1, 0.9], 10_000, &mut rng);
        let comum = samples.iter().filter(|s| **s == "comum").count() as f64 / 10_000.0;
        assert!((comum - 0.9).abs() < 0.03, "frequência {}", comum);
    }
}
