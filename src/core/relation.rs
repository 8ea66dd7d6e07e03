//! # Relation — Chaves de Relação Entre Eventos
//!
//! Uma [`RelationKey`] identifica **qual probabilidade** está sendo afirmada
//! ou consultada. A chave é escrita como texto na fronteira da API e
//! convertida **uma única vez** para esta enum; as regras de inferência
//! nunca re-dividem strings.
//!
//! ## Gramática
//!
//! ```text
//! evento := nome | nome "!"
//! chave  := evento | evento "^" evento | evento "+" evento | evento "|" evento
//! ```
//!
//! | Texto | Variante | Significado |
//! |-------|----------|-------------|
//! | `A` | `Marginal` | P(A) |
//! | `A!` | `Complement` | P(¬A) = 1 − P(A) |
//! | `A^B` | `Intersection` | P(A ∩ B) |
//! | `A+B` | `Union` | P(A ∪ B) |
//! | `A|B` | `Conditional` | P(A dado B) |
//!
//! O operador é procurado na ordem de prioridade `^`, `+`, `|` e a chave é
//! dividida na **primeira** ocorrência. Expressões compostas como `A^B|C`
//! são rejeitadas.
//!
//! ## Normalização
//!
//! Nomes são aparados (`trim`) e normalizados em **NFC**, de modo que
//! "É" composto e "E + acento" decomposto representam o mesmo evento.

use std::fmt;
use std::str::FromStr;

use unicode_normalization::UnicodeNormalization;

use super::error::SolverError;

/// Marcador de negação (sufixo do nome).
const COMPLEMENT_MARK: char = '!';

/// Operadores binários, em ordem de prioridade.
const OPERATORS: [char; 3] = ['^', '+', '|'];

/// Um operando de relação: nome de evento, possivelmente negado.
///
/// Textualmente `A` ou `A!`. A ordenação (`Ord`) é usada pelo conjunto de
/// dependências para iteração determinística.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Event {
    name: String,
    negated: bool,
}

impl Event {
    /// Faz o parse de um operando (`A` ou `A!`).
    pub fn parse(text: &str) -> Result<Self, SolverError> {
        parse_event(text, text)
    }

    /// Nome do evento, sem o marcador de negação.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `true` se este operando é `nome!`.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// O evento complementar: `A` ↔ `A!`.
    pub fn complement(&self) -> Event {
        Event {
            name: self.name.clone(),
            negated: !self.negated,
        }
    }

    /// Chave unária correspondente (`Marginal` ou `Complement`).
    pub fn key(&self) -> RelationKey {
        if self.negated {
            RelationKey::Complement(self.name.clone())
        } else {
            RelationKey::Marginal(self.name.clone())
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "{}{}", self.name, COMPLEMENT_MARK)
        } else {
            f.write_str(&self.name)
        }
    }
}

impl FromStr for Event {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Event::parse(s)
    }
}

/// Chave de relação — a união etiquetada de todas as consultas possíveis.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RelationKey {
    /// `A` — probabilidade marginal.
    Marginal(String),
    /// `A!` — probabilidade do complemento.
    Complement(String),
    /// `A^B` — interseção (simétrica no significado).
    Intersection(Event, Event),
    /// `A+B` — união (consultada apenas na ordem afirmada).
    Union(Event, Event),
    /// `A|B` — condicional P(A dado B).
    Conditional(Event, Event),
}

impl RelationKey {
    /// Faz o parse de uma chave textual.
    ///
    /// # Erros
    ///
    /// [`SolverError::InvalidKey`] para nomes vazios, `!` fora do final,
    /// ou mais de um operador.
    pub fn parse(text: &str) -> Result<Self, SolverError> {
        let constructors: [(char, fn(Event, Event) -> RelationKey); 3] = [
            (OPERATORS[0], RelationKey::Intersection),
            (OPERATORS[1], RelationKey::Union),
            (OPERATORS[2], RelationKey::Conditional),
        ];
        for (op, build) in constructors {
            if let Some((left, right)) = text.split_once(op) {
                let first = parse_event(left, text)?;
                let second = parse_event(right, text)?;
                return Ok(build(first, second));
            }
        }
        Ok(parse_event(text, text)?.key())
    }

    /// Chave complementar, apenas para chaves unárias.
    pub fn complement(&self) -> Option<RelationKey> {
        self.as_event().map(|e| e.complement().key())
    }

    /// Converte uma chave unária de volta para [`Event`].
    pub fn as_event(&self) -> Option<Event> {
        match self {
            RelationKey::Marginal(name) => Some(Event {
                name: name.clone(),
                negated: false,
            }),
            RelationKey::Complement(name) => Some(Event {
                name: name.clone(),
                negated: true,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for RelationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationKey::Marginal(name) => f.write_str(name),
            RelationKey::Complement(name) => write!(f, "{}{}", name, COMPLEMENT_MARK),
            RelationKey::Intersection(a, b) => write!(f, "{}^{}", a, b),
            RelationKey::Union(a, b) => write!(f, "{}+{}", a, b),
            RelationKey::Conditional(a, b) => write!(f, "{}|{}", a, b),
        }
    }
}

impl FromStr for RelationKey {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelationKey::parse(s)
    }
}

/// Parse de um operando; `key` é a chave completa, usada na mensagem de erro.
fn parse_event(text: &str, key: &str) -> Result<Event, SolverError> {
    let normalized: String = text.trim().nfc().collect();
    let negated = normalized.ends_with(COMPLEMENT_MARK);
    let name = if negated {
        normalized[..normalized.len() - COMPLEMENT_MARK.len_utf8()]
            .trim_end()
            .to_string()
    } else {
        normalized
    };

    let invalid = |reason: &str| SolverError::InvalidKey {
        key: key.to_string(),
        reason: reason.to_string(),
    };
    if name.is_empty() {
        return Err(invalid("nome de evento vazio"));
    }
    if name.contains(COMPLEMENT_MARK) {
        return Err(invalid("'!' só é permitido no final do nome"));
    }
    if name.contains(OPERATORS) {
        return Err(invalid("apenas um operador por chave"));
    }
    Ok(Event { name, negated })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(s: &str) -> Event {
        Event::parse(s).unwrap()
    }

    #[test]
    fn test_parse_unary() {
        assert_eq!(RelationKey::parse("A").unwrap(), RelationKey::Marginal("A".into()));
        assert_eq!(RelationKey::parse("A!").unwrap(), RelationKey::Complement("A".into()));
        assert_eq!(RelationKey::parse("  chuva ").unwrap(), RelationKey::Marginal("chuva".into()));
    }

    #[test]
    fn test_parse_binary() {
        assert_eq!(
            RelationKey::parse("A^B").unwrap(),
            RelationKey::Intersection(ev("A"), ev("B"))
        );
        assert_eq!(
            RelationKey::parse("A+B!").unwrap(),
            RelationKey::Union(ev("A"), ev("B!"))
        );
        assert_eq!(
            RelationKey::parse("A|B").unwrap(),
            RelationKey::Conditional(ev("A"), ev("B"))
        );
    }

    /// Chaves compostas ou malformadas são rejeitadas, não mal interpretadas
    #[test]
    fn test_parse_rejects_malformed() {
        for key in ["", "!", "A^", "^B", "A^B|C", "A!!", "A!B", "A+B+C"] {
            assert!(
                matches!(RelationKey::parse(key), Err(SolverError::InvalidKey { .. })),
                "aceitou '{}'",
                key
            );
        }
    }

    #[test]
    fn test_event_accessors() {
        let negado = ev(" chuva! ");
        assert_eq!(negado.name(), "chuva");
        assert!(negado.is_negated());
        assert!(!negado.complement().is_negated());
        assert_eq!(negado.complement().name(), negado.name());
    }

    #[test]
    fn test_nfc_normalization() {
        // "É" decomposto (E + U+0301) vira a forma composta
        let decomposed = RelationKey::parse("E\u{301}").unwrap();
        let composed = RelationKey::parse("\u{c9}").unwrap();
        assert_eq!(decomposed, composed);
    }

    #[test]
    fn test_complement_and_display() {
        let key = RelationKey::parse("A").unwrap();
        assert_eq!(key.complement().unwrap().to_string(), "A!");
        assert_eq!(key.complement().unwrap().complement().unwrap(), key);
        assert!(RelationKey::parse("A^B").unwrap().complement().is_none());
        assert_eq!(RelationKey::parse("A! | B").unwrap().to_string(), "A!|B");
    }
}
