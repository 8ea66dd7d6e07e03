//! # Módulo Core — Tipos Fundamentais do Domínio
//!
//! Este módulo agrupa os **tipos fundamentais** sobre os quais o motor de
//! inferência opera:
//!
//! - [`Event`] — operando de uma relação (`A` ou `A!`)
//! - [`RelationKey`] — chave de relação (marginal, complemento, interseção, união, condicional)
//! - [`FactStore`] — contêiner de fatos afirmados e dependências declaradas
//! - [`SolverError`] — falhas levantadas pela biblioteca
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use pprobs::core::{FactStore, RelationKey};
//!
//! let mut store = FactStore::new();
//! store.assert_fact(RelationKey::parse("A|B").unwrap(), 0.5).unwrap();
//! assert_eq!(store.lookup(&"A|B".parse().unwrap()), Some(0.5));
//! ```

/// Sub-módulo com [`SolverError`].
pub mod error;

/// Sub-módulo com [`Event`] e [`RelationKey`] — parse de chaves textuais.
pub mod relation;

/// Sub-módulo com [`FactStore`] — armazenamento de fatos.
pub mod fact_store;

pub use error::SolverError;
pub use fact_store::FactStore;
pub use relation::{Event, RelationKey};
