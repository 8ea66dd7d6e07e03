//! # pprobs — Executor de Cenários
//!
//! **Ponto de entrada** da linha de comando: carrega um cenário JSON, afirma
//! os fatos, responde as consultas e imprime uma linha por consulta.
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Cenário padrão (data/scenario.json)
//! cargo run
//!
//! # Outro cenário, com logs detalhados
//! RUST_LOG=debug cargo run -- caminho/para/cenario.json
//! ```
//!
//! ## Saída
//!
//! ```text
//! P(A^B) = 0.3000
//! P(Z) = unknown
//! ```
//!
//! Os logs vão para stderr; as respostas, para stdout.

use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use pprobs::scenario::{Scenario, DEFAULT_SCENARIO_PATH};

fn main() -> Result<()> {
    // RUST_LOG controla o nível; padrão = info
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SCENARIO_PATH));
    tracing::info!(path = %path.display(), "Carregando cenário");

    let scenario = Scenario::load(&path)?;
    let answers = scenario.run()?;

    let unknown = answers.iter().filter(|a| a.value.is_none()).count();
    tracing::info!(
        facts = scenario.facts.len(),
        queries = answers.len(),
        unknown,
        "Cenário resolvido"
    );

    for answer in &answers {
        println!("{}", answer);
    }
    Ok(())
}
