//! # Erros do Solver
//!
//! Taxonomia de falhas **levantadas** pela biblioteca. Consultas que não
//! podem ser resolvidas **não** são erros: elas retornam `None` ("desconhecido").
//!
//! | Variante | Quando ocorre |
//! |----------|---------------|
//! | `InvalidValue` | Valor afirmado não é um número real finito |
//! | `InvalidKey` | Chave de relação malformada (ex: `A^B|C`, nome vazio) |
//! | `InvalidDistribution` | Espaço/domínio inválido em distribuições |

use thiserror::Error;

/// Erro da biblioteca pprobs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    /// O valor de probabilidade afirmado não é um número real.
    #[error("valor inválido para '{key}': {value} (esperado um número real)")]
    InvalidValue { key: String, value: String },

    /// A chave de relação não segue a gramática `evento [op evento]`.
    #[error("chave de relação inválida '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    /// Espaço amostral ou domínio inválido.
    #[error("distribuição inválida: {0}")]
    InvalidDistribution(String),
}
