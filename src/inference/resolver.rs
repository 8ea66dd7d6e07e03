//! # Regras de Derivação Probabilística
//!
//! O [`Resolver`] responde uma consulta consultando o [`FactStore`] e, quando
//! o valor não foi afirmado, **deriva** o valor a partir de outros fatos
//! usando identidades da teoria da probabilidade.
//!
//! ## Regras
//!
//! | Regra | Identidade |
//! |-------|------------|
//! | **Complemento** | P(¬A) = 1 − P(A) |
//! | **Independência** | P(A ∩ B) = P(A) · P(B) |
//! | **Inclusão-exclusão** | P(A ∪ B) = P(A) + P(B) − P(A ∩ B) |
//! | **Produto** | P(A ∩ B) = P(A \| B) · P(B) |
//! | **Bayes** | P(A \| B) = P(B \| A) · P(A) / P(B) |
//!
//! ## A Flag `force`
//!
//! As regras de interseção, união e condicional chamam umas às outras.
//! Toda operação recebe `force`:
//!
//! - `force = true` — pode recorrer às outras regras
//! - `force = false` — consulta apenas fatos diretos (e complementos) e
//!   retorna `None` imediatamente
//!
//! Cada regra forçada chama as demais com `force = false` (a única exceção é
//! a condicional, que chama a interseção forçada; esta só desce com
//! `force = false`). O grafo de chamadas é, portanto, finito e raso,
//! independentemente do número de fatos.
//!
//! ```text
//! condition(T) ──► intersection(T) ──► condition(F), union(F), value(F)
//!      │
//!      ├─────────► value(T) ──► intersection(F) ──► union(F)
//!      └─────────► condition(F)
//! union(T) ──► value(T), intersection(F)
//! ```

use crate::core::{Event, FactStore, RelationKey};

/// Motor de derivação — struct sem estado próprio.
///
/// Recebe o [`FactStore`] por referência e nunca o modifica, assim como o
/// motor de inferência recebe a base por referência e apenas lê.
///
/// ## Uso
///
/// ```rust
/// use pprobs::core::{FactStore, RelationKey};
/// use pprobs::inference::Resolver;
///
/// let mut store = FactStore::new();
/// store.assert_fact("A".parse().unwrap(), 0.6).unwrap();
/// store.assert_fact("B".parse().unwrap(), 0.4).unwrap();
///
/// let resolver = Resolver::new(&store);
/// let joint = resolver.resolve(&"A^B".parse().unwrap()).unwrap();
/// assert!((joint - 0.24).abs() < 1e-12);
/// ```
pub struct Resolver<'a> {
    store: &'a FactStore,
}

impl<'a> Resolver<'a> {
    /// Cria um resolver sobre o armazém.
    pub fn new(store: &'a FactStore) -> Self {
        Self { store }
    }

    /// Resolve uma chave com `force = true`, despachando para a regra adequada.
    pub fn resolve(&self, key: &RelationKey) -> Option<f64> {
        match key {
            RelationKey::Intersection(a, b) => self.resolve_intersection(a, b, true),
            RelationKey::Union(a, b) => self.resolve_union(a, b, true),
            RelationKey::Conditional(a, b) => self.resolve_condition(a, b, true),
            RelationKey::Marginal(_) | RelationKey::Complement(_) => key
                .as_event()
                .and_then(|event| self.resolve_value(&event, true)),
        }
    }

    /// P(e) — marginal (ou complemento, se `e` for negado).
    ///
    /// 1. Fato direto
    /// 2. Complemento afirmado → `1 − valor`
    /// 3. Com `force`: soma de P(a ∩ b) sobre os pares dependentes que
    ///    envolvem `e` (interseções desconhecidas não contribuem)
    pub fn resolve_value(&self, event: &Event, force: bool) -> Option<f64> {
        if let Some(value) = self.store.lookup(&event.key()) {
            return Some(value);
        }
        if let Some(value) = self.store.lookup(&event.complement().key()) {
            return Some(1.0 - value);
        }
        if !force {
            return None;
        }

        self.store
            .dependencies_of(event)
            .filter(|(a, b)| !self.store.is_independent(a, b))
            .filter_map(|(a, b)| self.resolve_intersection(a, b, false))
            .fold(None, |acc, joint| Some(acc.unwrap_or(0.0) + joint))
    }

    /// P(a ∩ b).
    ///
    /// 1. Fato direto em `a^b` ou `b^a`
    /// 2. Marginais conhecidas: independentes → produto; dependentes →
    ///    inclusão-exclusão com a união direta
    /// 3. Com `force`: regra do produto com a condicional direta, nas duas ordens
    pub fn resolve_intersection(&self, a: &Event, b: &Event, force: bool) -> Option<f64> {
        let direct = self
            .store
            .lookup(&RelationKey::Intersection(a.clone(), b.clone()))
            .or_else(|| {
                self.store
                    .lookup(&RelationKey::Intersection(b.clone(), a.clone()))
            });
        if direct.is_some() {
            return direct;
        }

        let p_a = self.resolve_value(a, false);
        let p_b = self.resolve_value(b, false);
        if let (Some(p_a), Some(p_b)) = (p_a, p_b) {
            if self.store.is_independent(a, b) {
                return Some(p_a * p_b);
            }
            if let Some(union) = self.resolve_union(a, b, false) {
                return Some(p_a + p_b - union);
            }
        }

        if !force {
            return None;
        }
        self.resolve_condition(a, b, false)
            .zip(p_b)
            .map(|(cond, p_b)| cond * p_b)
            .or_else(|| {
                self.resolve_condition(b, a, false)
                    .zip(p_a)
                    .map(|(cond, p_a)| cond * p_a)
            })
    }

    /// P(a ∪ b).
    ///
    /// 1. Fato direto em `a+b` (somente na ordem afirmada)
    /// 2. Com `force` e marginais conhecidas: inclusão-exclusão
    ///
    /// Se a interseção não puder ser resolvida, ela é tratada como 0, ou
    /// seja, assume eventos disjuntos. É uma **aproximação**, não uma lei.
    pub fn resolve_union(&self, a: &Event, b: &Event, force: bool) -> Option<f64> {
        if let Some(value) = self.store.lookup(&RelationKey::Union(a.clone(), b.clone())) {
            return Some(value);
        }
        if !force {
            return None;
        }

        let p_a = self.resolve_value(a, true)?;
        let p_b = self.resolve_value(b, true)?;
        let joint = self.resolve_intersection(a, b, false).unwrap_or(0.0);
        Some(p_a + p_b - joint)
    }

    /// P(a | b).
    ///
    /// 1. Fato direto em `a|b`
    /// 2. Com `force`: P(a ∩ b) / P(b)
    /// 3. Senão, Bayes: P(b | a) · P(a) / P(b), com P(b | a) direta
    ///
    /// Condicionar em um evento de probabilidade 0 é indefinido: o resultado
    /// é `None`.
    pub fn resolve_condition(&self, a: &Event, b: &Event, force: bool) -> Option<f64> {
        if let Some(value) = self
            .store
            .lookup(&RelationKey::Conditional(a.clone(), b.clone()))
        {
            return Some(value);
        }
        if !force {
            return None;
        }

        let p_b = self.resolve_value(b, true).filter(|p| *p != 0.0)?;
        if let Some(joint) = self.resolve_intersection(a, b, true) {
            return Some(joint / p_b);
        }
        let reverse = self.resolve_condition(b, a, false)?;
        let p_a = self.resolve_value(a, true)?;
        Some(reverse * p_a / p_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn store(facts: &[(&str, f64)]) -> FactStore {
        let mut store = FactStore::new();
        for (key, value) in facts {
            store
                .assert_fact(RelationKey::parse(key).unwrap(), *value)
                .unwrap();
        }
        store
    }

    fn resolve(store: &FactStore, key: &str) -> Option<f64> {
        Resolver::new(store).resolve(&RelationKey::parse(key).unwrap())
    }

    fn approx(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("esperava valor conhecido");
        assert!(
            (actual - expected).abs() < EPS,
            "esperado {}, obtido {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_complement_both_directions() {
        approx(resolve(&store(&[("A", 0.6)]), "A!"), 0.4);
        approx(resolve(&store(&[("A!", 0.25)]), "A"), 0.75);
    }

    /// Eventos sem dependência declarada são independentes
    #[test]
    fn test_independence_factorization() {
        let s = store(&[("A", 0.6), ("B", 0.4)]);
        approx(resolve(&s, "A^B"), 0.24);
        approx(resolve(&s, "B^A"), 0.24);
        approx(resolve(&s, "A!^B"), 0.16);
    }

    #[test]
    fn test_symmetric_intersection_lookup() {
        let s = store(&[("A^B", 0.13)]);
        approx(resolve(&s, "B^A"), 0.13);
    }

    /// União é consultada só na ordem afirmada; a outra ordem é derivada
    #[test]
    fn test_union_not_symmetrized() {
        let s = store(&[("A+B", 0.7)]);
        approx(resolve(&s, "A+B"), 0.7);
        assert_eq!(resolve(&s, "B+A"), None);
    }

    #[test]
    fn test_product_rule_from_conditional() {
        let s = store(&[("A", 0.6), ("B|A", 0.5)]);
        approx(resolve(&s, "A^B"), 0.3);
    }

    #[test]
    fn test_conditional_from_joint() {
        let s = store(&[("E", 0.6), ("F", 0.2), ("E^F", 0.1)]);
        approx(resolve(&s, "E|F"), 0.5);
    }

    #[test]
    fn test_inclusion_exclusion() {
        let s = store(&[("A", 0.5), ("B", 0.4), ("A^B", 0.1)]);
        approx(resolve(&s, "A+B"), 0.8);
    }

    /// Interseção dependente via união direta (inclusão-exclusão invertida)
    #[test]
    fn test_intersection_from_union() {
        let mut s = store(&[("A", 0.5), ("B", 0.4), ("A+B", 0.7)]);
        s.declare_dependent(Event::parse("A").unwrap(), Event::parse("B").unwrap());
        approx(resolve(&s, "A^B"), 0.2);
    }

    /// Sem interseção conhecida, a união assume eventos disjuntos
    #[test]
    fn test_union_disjoint_fallback() {
        let mut s = store(&[("A", 0.2), ("B", 0.3)]);
        s.declare_dependent(Event::parse("A").unwrap(), Event::parse("B").unwrap());
        approx(resolve(&s, "A+B"), 0.5);
    }

    #[test]
    fn test_bayes_round_trip() {
        let s = store(&[("A|B", 0.3), ("B", 0.5), ("A", 0.25)]);
        approx(resolve(&s, "A^B"), 0.15);
        approx(resolve(&s, "B|A"), 0.3 * 0.5 / 0.25);
    }

    /// Marginal recuperada somando interseções de pares dependentes
    #[test]
    fn test_marginal_from_dependent_joints() {
        let s = store(&[("A^B", 0.2), ("A|B", 0.4)]);
        approx(resolve(&s, "A"), 0.2);
        approx(resolve(&s, "B"), 0.2);
        assert_eq!(resolve(&s, "C"), None);
    }

    /// Pares dependentes cuja interseção é desconhecida não contribuem
    #[test]
    fn test_marginal_scan_skips_unknown_joints() {
        let s = store(&[("A|B", 0.4), ("A|C", 0.1), ("A^C", 0.05)]);
        approx(resolve(&s, "A"), 0.05);
        assert_eq!(resolve(&s, "B"), None);
    }

    /// União força as marginais (soma de pares dependentes); interseção não
    #[test]
    fn test_union_forces_marginals_intersection_does_not() {
        let s = store(&[("A^B", 0.2), ("A|B", 0.4), ("C", 0.5)]);
        approx(resolve(&s, "A+C"), 0.7);
        assert_eq!(resolve(&s, "A^C"), None);
    }

    /// `A` e `A!` afirmados juntos: cada consulta direta devolve o próprio valor
    #[test]
    fn test_direct_facts_win_over_complement() {
        let s = store(&[("A", 0.3), ("A!", 0.5)]);
        approx(resolve(&s, "A"), 0.3);
        approx(resolve(&s, "A!"), 0.5);
    }

    #[test]
    fn test_conditioning_on_null_event_is_unknown() {
        let s = store(&[("A", 0.5), ("B", 0.0)]);
        assert_eq!(resolve(&s, "A|B"), None);
    }

    /// Nada conhecido: todas as regras terminam com `None`
    #[test]
    fn test_unknown_propagation_terminates() {
        let s = store(&[("X|Y", 0.5), ("Y|X", 0.5)]);
        for key in ["Z", "Z!", "Z^W", "Z+W", "Z|W", "X^Y", "X+Y", "X", "Y!"] {
            assert_eq!(resolve(&s, key), None, "chave {}", key);
        }
    }

    #[test]
    fn test_shallow_rules_do_not_derive() {
        let s = store(&[("A", 0.6), ("B", 0.4)]);
        let r = Resolver::new(&s);
        let a = Event::parse("A").unwrap();
        let b = Event::parse("B").unwrap();
        assert_eq!(r.resolve_union(&a, &b, false), None);
        assert_eq!(r.resolve_condition(&a, &b, false), None);
        assert!(r.resolve_union(&a, &b, true).is_some());
    }
}
