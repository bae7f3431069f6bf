//! Reconnaisseur d'adresses e-mail: accepte ou rejette, sans extraction.
//!
//! Grammaire équivalente à la regex de référence:
//! local-part (dot-atom ou quoted-string), `@`, domaine (labels pointés ou
//! address-literal), et consommation complète de l'entrée.

mod classes;
mod domain;
mod local;
mod scanner;
mod types;

pub use types::AddressError;

use scanner::Scanner;

/// Machine de validation à usage unique: construite sur une entrée,
/// consommée par [`Validator::validate`]. Deux validations = deux
/// instances; l'état n'est jamais partagé.
pub struct Validator {
    scanner: Scanner,
}

impl Validator {
    /// Charge l'adresse candidate; ne valide rien.
    pub fn new(input: &str) -> Self {
        Self {
            scanner: Scanner::new(input),
        }
    }

    /// Variante sur octets bruts: le décodage est une affaire d'appelant,
    /// un flux non UTF-8 est rejeté avant construction.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self, AddressError> {
        let input = std::str::from_utf8(bytes)?;
        Ok(Self::new(input))
    }

    /// Décision en un coup: local-part, `@`, domaine, puis l'entrée doit
    /// être entièrement consommée. Consomme l'instance, ce qui interdit
    /// statiquement une relance sur un curseur déjà déplacé.
    pub fn validate(mut self) -> bool {
        #[cfg(feature = "with-tracing")]
        tracing::trace!(chars = self.scanner.len(), "validate");

        let s = &mut self.scanner;

        if !(local::dot_atom(s) || local::quoted_string(s)) {
            return false;
        }
        if !(s.current() == Some('@') && s.advance()) {
            return false;
        }
        if !(domain::dot_labels(s) || domain::address_literal(s)) {
            return false;
        }

        let complete = s.at_end();
        #[cfg(feature = "with-tracing")]
        tracing::trace!(complete, "grammar matched");
        complete
    }
}

/// Raccourci: construit et valide en un appel.
pub fn validate_email(email: &str) -> bool {
    Validator::new(email).validate()
}
