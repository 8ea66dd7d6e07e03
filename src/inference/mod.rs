//! # Módulo Inference — Motor de Derivação Probabilística
//!
//! Este módulo contém o **motor de inferência** do pprobs, responsável por
//! derivar probabilidades **não afirmadas** a partir dos fatos existentes.
//!
//! ## Regras Implementadas
//!
//! | Consulta | Derivações tentadas (em ordem) |
//! |----------|--------------------------------|
//! | `A` / `A!` | fato → complemento → soma sobre pares dependentes |
//! | `A^B` | fato (2 ordens) → produto (independentes) → inclusão-exclusão → P(A\|B)·P(B) → P(B\|A)·P(A) |
//! | `A+B` | fato → P(A) + P(B) − P(A^B) |
//! | `A|B` | fato → P(A^B)/P(B) → Bayes |
//!
//! ## Exemplo
//!
//! ```text
//! Fatos:    P(A) = 0.6, P(B|A) = 0.5
//! Consulta: A^B
//! Derivação: P(B|A) · P(A) = 0.3
//! ```
//!
//! Veja [`Resolver`] para detalhes.

/// Sub-módulo com as regras de derivação.
pub mod resolver;

pub use resolver::Resolver;
