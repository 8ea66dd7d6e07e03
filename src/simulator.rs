//! # Simulator — Fachada do Solver de Relações
//!
//! O [`Simulator`] é o ponto de entrada da biblioteca: recebe afirmações
//! textuais (`"A|B" = 0.5`), guarda-as no [`FactStore`] e responde consultas
//! delegando ao [`Resolver`].
//!
//! ## Ciclo de Uso
//!
//! ```text
//! assert_event("A", 0.6) ──► parse ──► FactStore
//! assert_event("B|A", 0.5) ─► parse ──► FactStore (+ dependência (B, A))
//! query("A^B") ────────────► parse ──► Resolver ──► Some(0.3)
//! ```
//!
//! ## Concorrência
//!
//! Consultas usam `&self` e afirmações `&mut self`: o compilador impede
//! consultar e afirmar ao mesmo tempo. Para compartilhar uma instância entre
//! threads, use [`SharedSimulator`] (`Arc<RwLock<Simulator>>`): várias
//! consultas simultâneas ou uma afirmação exclusiva.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::{Event, FactStore, RelationKey, SolverError};
use crate::inference::Resolver;

/// Simulator compartilhado entre threads, protegido por `RwLock`.
pub type SharedSimulator = Arc<RwLock<Simulator>>;

/// Solver de relações probabilísticas entre eventos nomeados.
///
/// ## Exemplo
///
/// ```rust
/// use pprobs::Simulator;
///
/// let mut sim = Simulator::new();
/// sim.assert_event("A", 0.6)?.assert_event("B|A", 0.5)?;
///
/// let joint = sim.query("A^B").unwrap();
/// assert!((joint - 0.3).abs() < 1e-12);
/// assert_eq!(sim.query("Z"), None);
/// # Ok::<(), pprobs::SolverError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct Simulator {
    store: FactStore,
}

impl Simulator {
    /// Cria um solver sem fatos nem dependências.
    pub fn new() -> Self {
        Self::default()
    }

    /// Afirma um fato. Encadeável com `?`.
    ///
    /// Aceita qualquer tipo numérico convertível em `f64` sem perda
    /// (`f64`, `f32`, `i32`, `u8`...).
    ///
    /// # Erros
    ///
    /// - [`SolverError::InvalidKey`] — chave malformada
    /// - [`SolverError::InvalidValue`] — valor não finito
    pub fn assert_event(
        &mut self,
        key: &str,
        value: impl Into<f64>,
    ) -> Result<&mut Self, SolverError> {
        let key = RelationKey::parse(key)?;
        self.store.assert_fact(key, value.into())?;
        Ok(self)
    }

    /// Declara explicitamente que `a` e `b` não são independentes.
    pub fn declare_dependent(&mut self, a: &str, b: &str) -> Result<&mut Self, SolverError> {
        let a = Event::parse(a)?;
        let b = Event::parse(b)?;
        self.store.declare_dependent(a, b);
        Ok(self)
    }

    /// Consulta uma probabilidade.
    ///
    /// Retorna `None` quando nenhuma combinação de fatos e regras determina
    /// o valor. Expressões malformadas também resultam em `None`.
    pub fn query(&self, key: &str) -> Option<f64> {
        match RelationKey::parse(key) {
            Ok(parsed) => self.query_key(&parsed),
            Err(e) => {
                tracing::debug!(error = %e, "Simulator: consulta malformada");
                None
            }
        }
    }

    /// Consulta uma chave já convertida.
    pub fn query_key(&self, key: &RelationKey) -> Option<f64> {
        let result = Resolver::new(&self.store).resolve(key);
        match result {
            Some(value) => tracing::debug!(key = %key, value, "Simulator: consulta resolvida"),
            None => tracing::debug!(key = %key, "Simulator: consulta desconhecida"),
        }
        result
    }

    /// Acesso de leitura ao armazém de fatos.
    pub fn store(&self) -> &FactStore {
        &self.store
    }

    /// Envolve o solver em `Arc<RwLock<_>>` para uso entre threads.
    pub fn into_shared(self) -> SharedSimulator {
        Arc::new(RwLock::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("esperava valor conhecido");
        assert!((actual - expected).abs() < 1e-12, "{} != {}", actual, expected);
    }

    #[test]
    fn test_scenarios() {
        let mut sim = Simulator::new();
        sim.assert_event("A", 0.6).unwrap().assert_event("B", 0.4).unwrap();
        approx(sim.query("A^B"), 0.24);
        approx(sim.query("A!"), 0.4);

        let mut sim = Simulator::new();
        sim.assert_event("A", 0.6).unwrap().assert_event("B|A", 0.5).unwrap();
        approx(sim.query("A^B"), 0.3);

        let mut sim = Simulator::new();
        sim.assert_event("E", 0.6)
            .unwrap()
            .assert_event("F", 0.2)
            .unwrap()
            .assert_event("E^F", 0.1)
            .unwrap();
        approx(sim.query("E|F"), 0.5);

        assert_eq!(Simulator::new().query("Z"), None);
    }

    /// Inteiros são aceitos como probabilidades
    #[test]
    fn test_integer_values_accepted() {
        let mut sim = Simulator::new();
        sim.assert_event("certo", 1).unwrap();
        sim.assert_event("impossivel", 0u8).unwrap();
        approx(sim.query("certo!"), 0.0);
        approx(sim.query("impossivel!"), 1.0);
    }

    #[test]
    fn test_invalid_assertions() {
        let mut sim = Simulator::new();
        assert!(matches!(
            sim.assert_event("A", f64::NAN),
            Err(SolverError::InvalidValue { .. })
        ));
        assert!(matches!(
            sim.assert_event("A^B|C", 0.5),
            Err(SolverError::InvalidKey { .. })
        ));
        assert!(sim.store().is_empty());
    }

    #[test]
    fn test_malformed_query_is_unknown() {
        let mut sim = Simulator::new();
        sim.assert_event("A", 0.5).unwrap();
        assert_eq!(sim.query("A^"), None);
        assert_eq!(sim.query("A^B|C"), None);
    }

    /// Dependência explícita desliga a fatoração por independência
    #[test]
    fn test_declare_dependent() {
        let mut sim = Simulator::new();
        sim.assert_event("A", 0.5).unwrap().assert_event("B", 0.5).unwrap();
        approx(sim.query("A^B"), 0.25);
        sim.declare_dependent("B", "A").unwrap();
        assert_eq!(sim.query("A^B"), None);
    }

    #[test]
    fn test_shared_simulator_across_threads() {
        let mut sim = Simulator::new();
        sim.assert_event("A", 0.6).unwrap().assert_event("B", 0.4).unwrap();
        let shared = sim.into_shared();

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || shared.read().query("A^B"))
            })
            .collect();
        for reader in readers {
            approx(reader.join().unwrap(), 0.24);
        }

        shared.write().assert_event("A^B", 0.1).unwrap();
        approx(shared.read().query("B^A"), 0.1);
    }
}
