//! # Joint — Probabilidade Conjunta de Duas Variáveis
//!
//! Um [`Joint`] associa uma função bivariada `p(x, y)` a dois domínios,
//! ambos **discretos** (conjuntos finitos de valores) ou ambos **contínuos**
//! (intervalos `[a, b]`).
//!
//! ## Operações
//!
//! - [`probability_table()`](Joint::probability_table) — tabula `p(x, y)` em
//!   uma [`ProbabilityTable`] com linhas `X=x` e colunas `Y=y`
//! - [`get_prob()`](Joint::get_prob) — probabilidade de uma região
//!
//! ## Regiões
//!
//! | Domínio | `Point × Point` | Com algum `Range` |
//! |---------|-----------------|-------------------|
//! | Discreto | `p(x, y)` | soma sobre os valores do domínio dentro do intervalo |
//! | Contínuo | densidade `p(x, y)` | integral dupla (Simpson) sobre o retângulo |
//!
//! No caso discreto, um eixo `Point(v)` é avaliado em `v`, mesmo que `v` não
//! pertença ao domínio. No caso contínuo, ele é integrado sobre a faixa
//! estreita `[v, v + 1e-4]`.

use std::fmt;

use rayon::prelude::*;
use serde::Serialize;

use super::linspace;
use crate::core::SolverError;

/// Largura da faixa usada para um eixo pontual em domínios contínuos.
const STRIP_WIDTH: f64 = 1e-4;

/// Subdivisões por eixo da regra de Simpson (deve ser par).
const SIMPSON_STEPS: usize = 64;

/// Domínio de uma das variáveis.
#[derive(Clone, Debug, PartialEq)]
pub enum Domain {
    /// Valores distintos, em ordem crescente.
    Discrete(Vec<f64>),
    /// Intervalo fechado `[low, high]`, `low < high`.
    Continuous { low: f64, high: f64 },
}

impl Domain {
    fn discrete(values: impl IntoIterator<Item = f64>) -> Result<Self, SolverError> {
        let mut values: Vec<f64> = values.into_iter().collect();
        if values.is_empty() {
            return Err(SolverError::InvalidDistribution(
                "domínio discreto vazio".to_string(),
            ));
        }
        if values.iter().any(|v| v.is_nan()) {
            return Err(SolverError::InvalidDistribution(
                "domínio discreto contém NaN".to_string(),
            ));
        }
        values.sort_by(f64::total_cmp);
        values.dedup();
        Ok(Domain::Discrete(values))
    }

    fn continuous(bounds: [f64; 2]) -> Result<Self, SolverError> {
        let [low, high] = bounds;
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(SolverError::InvalidDistribution(format!(
                "o domínio deve ser [a, b] com a < b, recebido [{}, {}]",
                low, high
            )));
        }
        Ok(Domain::Continuous { low, high })
    }

    /// Pontos usados na tabela: os próprios valores, ou uma grade.
    fn grid(&self, points: usize) -> Vec<f64> {
        match self {
            Domain::Discrete(values) => values.clone(),
            Domain::Continuous { low, high } => linspace(*low, *high, points),
        }
    }
}

/// Região consultada em um eixo.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Region {
    /// Um único valor.
    Point(f64),
    /// Intervalo fechado `[a, b]`.
    Range(f64, f64),
}

impl Region {
    /// Valores a somar em um eixo discreto: o próprio ponto, ou os valores do
    /// domínio dentro do intervalo.
    fn values_in(&self, domain: &[f64]) -> Vec<f64> {
        match *self {
            Region::Point(p) => vec![p],
            Region::Range(a, b) => domain.iter().copied().filter(|v| a <= *v && *v <= b).collect(),
        }
    }

    /// Limites de integração; um ponto vira uma faixa estreita.
    fn bounds(&self) -> (f64, f64) {
        match *self {
            Region::Point(p) => (p, p + STRIP_WIDTH),
            Region::Range(a, b) => (a, b),
        }
    }
}

/// Tabela de probabilidades `p(x, y)` — linhas `X=x`, colunas `Y=y`.
#[derive(Clone, Debug, Serialize)]
pub struct ProbabilityTable {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl ProbabilityTable {
    /// Valor na linha `row`, coluna `col`.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Soma de todas as células.
    pub fn total(&self) -> f64 {
        self.values.iter().flatten().sum()
    }
}

impl fmt::Display for ProbabilityTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self.rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let cell_width = self
            .columns
            .iter()
            .map(|c| c.len())
            .max()
            .unwrap_or(0)
            .max(8);

        write!(f, "{:label_width$}", "")?;
        for column in &self.columns {
            write!(f, " {:>cell_width$}", column)?;
        }
        writeln!(f)?;
        for (row, values) in self.rows.iter().zip(&self.values) {
            write!(f, "{:<label_width$}", row)?;
            for value in values {
                write!(f, " {:>cell_width$.4}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Função de probabilidade conjunta sobre dois domínios.
///
/// ## Exemplo
///
/// ```rust
/// use pprobs::distribution::{Joint, Region};
///
/// // dois dados honestos e independentes
/// let dados = Joint::discrete(|_: f64, _: f64| 1.0 / 36.0, (1..=6).map(f64::from), (1..=6).map(f64::from))?;
/// let soma = dados.get_prob(Region::Range(1.0, 6.0), Region::Point(3.0));
/// assert!((soma - 1.0 / 6.0).abs() < 1e-12);
/// # Ok::<(), pprobs::SolverError>(())
/// ```
pub struct Joint<F> {
    prob: F,
    x: Domain,
    y: Domain,
}

impl<F> Joint<F>
where
    F: Fn(f64, f64) -> f64 + Sync,
{
    /// Cria uma conjunta discreta. Valores repetidos são descartados.
    pub fn discrete(
        prob: F,
        xs: impl IntoIterator<Item = f64>,
        ys: impl IntoIterator<Item = f64>,
    ) -> Result<Self, SolverError> {
        Ok(Self {
            prob,
            x: Domain::discrete(xs)?,
            y: Domain::discrete(ys)?,
        })
    }

    /// Cria uma conjunta contínua sobre `[a, b] × [c, d]`.
    pub fn continuous(prob: F, x: [f64; 2], y: [f64; 2]) -> Result<Self, SolverError> {
        Ok(Self {
            prob,
            x: Domain::continuous(x)?,
            y: Domain::continuous(y)?,
        })
    }

    /// Domínios `(x, y)`.
    pub fn domains(&self) -> (&Domain, &Domain) {
        (&self.x, &self.y)
    }

    /// Tabula `p(x, y)`.
    ///
    /// Domínios contínuos usam `10 · resolution` pontos por eixo. As linhas
    /// são calculadas em paralelo.
    pub fn probability_table(&self, resolution: usize) -> ProbabilityTable {
        let xs = self.x.grid(10 * resolution);
        let ys = self.y.grid(10 * resolution);

        let values: Vec<Vec<f64>> = xs
            .par_iter()
            .map(|&x| ys.iter().map(|&y| (self.prob)(x, y)).collect::<Vec<f64>>())
            .collect();

        ProbabilityTable {
            rows: xs.iter().map(|x| format!("X={}", x)).collect(),
            columns: ys.iter().map(|y| format!("Y={}", y)).collect(),
            values,
        }
    }

    /// Probabilidade de uma região `x × y` — ver documentação do módulo.
    pub fn get_prob(&self, x: Region, y: Region) -> f64 {
        if let (Region::Point(px), Region::Point(py)) = (x, y) {
            return (self.prob)(px, py);
        }
        match (&self.x, &self.y) {
            (Domain::Discrete(xs), Domain::Discrete(ys)) => {
                let ys_in = y.values_in(ys);
                x.values_in(xs).into_iter().fold(0.0, |acc, xv| {
                    ys_in.iter().fold(acc, |acc, &yv| acc + (self.prob)(xv, yv))
                })
            }
            _ => simpson_2d(&self.prob, x.bounds(), y.bounds()),
        }
    }
}

/// Integral dupla de `f` sobre `[x0, x1] × [y0, y1]` pela regra de Simpson composta.
fn simpson_2d<F: Fn(f64, f64) -> f64>(f: &F, (x0, x1): (f64, f64), (y0, y1): (f64, f64)) -> f64 {
    let n = SIMPSON_STEPS;
    let hx = (x1 - x0) / n as f64;
    let hy = (y1 - y0) / n as f64;
    let weight = |i: usize| match i {
        0 => 1.0,
        i if i == n => 1.0,
        i if i % 2 == 1 => 4.0,
        _ => 2.0,
    };

    let mut sum = 0.0;
    for i in 0..=n {
        let x = x0 + hx * i as f64;
        let wx = weight(i);
        for j in 0..=n {
            let y = y0 + hy * j as f64;
            sum += wx * weight(j) * f(x, y);
        }
    }
    sum * hx * hy / 9.0
}
