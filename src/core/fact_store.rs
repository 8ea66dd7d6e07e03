//! # FactStore — Armazém de Fatos Probabilísticos
//!
//! O [`FactStore`] guarda tudo o que o usuário **afirmou**: valores de
//! probabilidade indexados por [`RelationKey`] e o conjunto de pares de
//! eventos declarados **dependentes**.
//!
//! ## Armazenamento
//!
//! - **Fatos**: `HashMap<RelationKey, f64>` — busca O(1) por chave
//! - **Dependências**: `BTreeSet<(Event, Event)>` — pares ordenados
//!
//! O conjunto de dependências é ordenado para que a soma sobre pares
//! dependentes (ver [`Resolver`](crate::inference::Resolver)) percorra os
//! pares sempre na mesma ordem, gerando resultados reprodutíveis.
//!
//! ## Independência Por Padrão
//!
//! Dois eventos são **independentes** a menos que `(a, b)` ou `(b, a)` esteja
//! no conjunto de dependências. Afirmar `A|B` registra `(A, B)` automaticamente.
//!
//! Nada é removido: fatos e dependências crescem monotonicamente durante a
//! vida do armazém. Afirmar a mesma chave duas vezes sobrescreve o valor.

use std::collections::{BTreeSet, HashMap};

use super::error::SolverError;
use super::relation::{Event, RelationKey};

/// Armazém in-memory de fatos e dependências declaradas.
#[derive(Debug, Default, Clone)]
pub struct FactStore {
    /// Valores afirmados: chave → probabilidade.
    facts: HashMap<RelationKey, f64>,

    /// Pares (a, b) sabidamente **não** independentes.
    dependencies: BTreeSet<(Event, Event)>,
}

impl FactStore {
    /// Cria um armazém vazio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Armazena `value` sob `key`, sobrescrevendo qualquer valor anterior.
    ///
    /// Chaves condicionais (`A|B`) também registram o par `(A, B)` como
    /// dependente.
    ///
    /// # Erros
    ///
    /// [`SolverError::InvalidValue`] se `value` for `NaN` ou infinito. O
    /// intervalo [0, 1] **não** é verificado.
    pub fn assert_fact(&mut self, key: RelationKey, value: f64) -> Result<(), SolverError> {
        if !value.is_finite() {
            return Err(SolverError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
        if let RelationKey::Conditional(a, b) = &key {
            self.declare_dependent(a.clone(), b.clone());
        }
        tracing::debug!(key = %key, value, "Store: fato armazenado");
        self.facts.insert(key, value);
        Ok(())
    }

    /// Registra o par ordenado `(a, b)` como dependente.
    pub fn declare_dependent(&mut self, a: Event, b: Event) {
        tracing::debug!(a = %a, b = %b, "Store: dependência registrada");
        self.dependencies.insert((a, b));
    }

    /// `true` se nenhuma das ordens `(a, b)` / `(b, a)` foi declarada.
    pub fn is_independent(&self, a: &Event, b: &Event) -> bool {
        // BTreeSet<(Event, Event)> só aceita busca pela tupla completa
        let forward = (a.clone(), b.clone());
        let backward = (b.clone(), a.clone());
        !self.dependencies.contains(&forward) && !self.dependencies.contains(&backward)
    }

    /// Leitura direta, sem derivação.
    pub fn lookup(&self, key: &RelationKey) -> Option<f64> {
        self.facts.get(key).copied()
    }

    /// Pares dependentes que envolvem `event` (em qualquer posição).
    pub fn dependencies_of<'a>(
        &'a self,
        event: &'a Event,
    ) -> impl Iterator<Item = &'a (Event, Event)> + 'a {
        self.dependencies
            .iter()
            .filter(move |(a, b)| a == event || b == event)
    }

    /// Todos os pares dependentes, em ordem.
    pub fn dependencies(&self) -> impl Iterator<Item = &(Event, Event)> {
        self.dependencies.iter()
    }

    /// Todos os fatos afirmados (ordem arbitrária).
    pub fn facts(&self) -> impl Iterator<Item = (&RelationKey, f64)> {
        self.facts.iter().map(|(k, v)| (k, *v))
    }

    /// Número de fatos armazenados.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// `true` se nenhum fato foi afirmado.
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}
