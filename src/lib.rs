//! # pprobs — Solver de Relações Probabilísticas
//!
//! Motor simbólico que responde consultas de probabilidade sobre eventos
//! nomeados, a partir de um conjunto **parcial** de fatos conhecidos
//! (marginais, conjuntas, uniões e condicionais) e de dependências declaradas.
//!
//! ## Arquitetura
//!
//! ```text
//! Simulator ──► FactStore   (fatos + dependências)
//!     │
//!     └──────► Resolver    (complemento, independência, inclusão-exclusão, Bayes)
//! ```
//!
//! Utilitários independentes em [`distribution`]: amostragem de pmf/pdf e
//! probabilidade conjunta bivariada.
//!
//! ## Exemplo
//!
//! ```rust
//! use pprobs::Simulator;
//!
//! let mut sim = Simulator::new();
//! sim.assert_event("E", 0.6)?
//!     .assert_event("F", 0.2)?
//!     .assert_event("E^F", 0.1)?;
//!
//! assert!((sim.query("E|F").unwrap() - 0.5).abs() < 1e-12);
//! assert!((sim.query("F^E").unwrap() - 0.1).abs() < 1e-12);
//! # Ok::<(), pprobs::SolverError>(())
//! ```

/// Módulo `core` — tipos fundamentais: Event, RelationKey, FactStore, SolverError.
pub mod core;

/// Módulo `inference` — regras de derivação probabilística.
pub mod inference;

/// Módulo `simulator` — fachada de afirmação e consulta.
pub mod simulator;

/// Módulo `distribution` — amostragem e probabilidade conjunta.
pub mod distribution;

/// Módulo `scenario` — cenários JSON de fatos e consultas.
pub mod scenario;

pub use crate::core::{Event, FactStore, RelationKey, SolverError};
pub use crate::inference::Resolver;
pub use crate::simulator::{SharedSimulator, Simulator};
