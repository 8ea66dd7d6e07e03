//! # Cenários — Fatos e Consultas em JSON
//!
//! Um [`Scenario`] descreve um problema completo: fatos afirmados,
//! dependências explícitas e consultas. É o formato de entrada do binário.
//!
//! ## Formato
//!
//! ```json
//! {
//!   "facts": { "A": 0.6, "B|A": 0.5 },
//!   "dependencies": [["A", "C"]],
//!   "queries": ["A^B", "A!", "Z"]
//! }
//! ```
//!
//! Todos os campos são opcionais. Valores em `facts` precisam ser números
//! JSON (inteiros ou reais); qualquer outro tipo gera
//! [`SolverError::InvalidValue`].
//!
//! O cenário é apenas **entrada**: o estado do solver não é salvo de volta.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::SolverError;
use crate::simulator::Simulator;

/// Caminho padrão do cenário (relativo ao diretório de trabalho).
pub const DEFAULT_SCENARIO_PATH: &str = "data/scenario.json";

/// Problema completo: fatos, dependências e consultas.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Chave de relação → valor (ainda não validado).
    #[serde(default)]
    pub facts: BTreeMap<String, Value>,

    /// Pares declarados dependentes.
    #[serde(default)]
    pub dependencies: Vec<(String, String)>,

    /// Chaves a consultar, em ordem.
    #[serde(default)]
    pub queries: Vec<String>,
}

/// Resposta de uma consulta. `value == None` significa "desconhecido".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryAnswer {
    pub query: String,
    pub value: Option<f64>,
}

impl fmt::Display for QueryAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "P({}) = {:.4}", self.query, value),
            None => write!(f, "P({}) = unknown", self.query),
        }
    }
}

impl Scenario {
    /// Desserializa um cenário a partir de JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Falha ao desserializar cenário")
    }

    /// Carrega um cenário do disco.
    ///
    /// # Erros
    ///
    /// Retorna erro se o arquivo não existir ou não for um cenário válido.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Falha ao ler {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Cenário inválido em {}", path.display()))
    }

    /// Constrói um [`Simulator`] com os fatos e dependências do cenário.
    pub fn build(&self) -> Result<Simulator, SolverError> {
        let mut sim = Simulator::new();
        for (key, value) in &self.facts {
            let number = value.as_f64().ok_or_else(|| SolverError::InvalidValue {
                key: key.clone(),
                value: value.to_string(),
            })?;
            sim.assert_event(key, number)?;
        }
        for (a, b) in &self.dependencies {
            sim.declare_dependent(a, b)?;
        }
        Ok(sim)
    }

    /// Constrói o solver e responde todas as consultas, na ordem.
    pub fn run(&self) -> Result<Vec<QueryAnswer>, SolverError> {
        let sim = self.build()?;
        tracing::debug!(
            facts = sim.store().len(),
            dependencies = sim.store().dependencies().count(),
            "Cenário: solver construído"
        );
        Ok(self
            .queries
            .iter()
            .map(|query| QueryAnswer {
                query: query.clone(),
                value: sim.query(query),
            })
            .collect())
    }
}
