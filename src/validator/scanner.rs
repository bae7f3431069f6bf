/// Curseur sur la séquence de caractères décodée. La fin d'entrée est un
/// état explicite (`None`), jamais un caractère réel réutilisé comme
/// sentinelle.
///
/// Invariant: `0 <= cursor <= input.len()`; `cursor == input.len()` est la
/// position sentinelle.
pub(crate) struct Scanner {
    input: Vec<char>,
    cursor: usize,
}

impl Scanner {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            cursor: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.input.len()
    }

    /// Caractère sous le curseur, `None` à partir de la sentinelle.
    pub(crate) fn current(&self) -> Option<char> {
        self.input.get(self.cursor).copied()
    }

    /// Caractère suivant sans déplacer le curseur.
    pub(crate) fn peek(&self) -> Option<char> {
        self.input.get(self.cursor + 1).copied()
    }

    /// Avance d'une position; `false` si déjà sur la sentinelle.
    pub(crate) fn advance(&mut self) -> bool {
        if self.cursor < self.input.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn at_end(&self) -> bool {
        self.cursor == self.input.len()
    }

    /// Nombre de positions restantes, sentinelle incluse dans le compte
    /// (`remaining() == 1` => curseur sur le dernier caractère réel).
    pub(crate) fn remaining(&self) -> usize {
        self.input.len() - self.cursor
    }

    pub(crate) fn mark(&self) -> usize {
        self.cursor
    }

    pub(crate) fn reset(&mut self, mark: usize) {
        self.cursor = mark;
    }

    /// Discipline de backtracking: exécute `rule` et restaure le curseur si
    /// elle échoue. Une alternative ratée ne laisse aucun déplacement
    /// observable.
    pub(crate) fn attempt(&mut self, rule: impl FnOnce(&mut Self) -> bool) -> bool {
        let saved = self.cursor;
        let matched = rule(self);
        if !matched {
            self.cursor = saved;
        }
        matched
    }

    pub(crate) fn current_is(&self, pred: fn(char) -> bool) -> bool {
        self.current().is_some_and(pred)
    }

    pub(crate) fn peek_is(&self, pred: fn(char) -> bool) -> bool {
        self.peek().is_some_and(pred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_and_peek_hit_sentinel() {
        let mut s = Scanner::new("ab");
        assert_eq!(s.len(), 2);
        assert_eq!(s.current(), Some('a'));
        assert_eq!(s.peek(), Some('b'));
        assert!(s.advance());
        assert_eq!(s.current(), Some('b'));
        assert_eq!(s.peek(), None);
        assert!(s.advance());
        assert_eq!(s.current(), None);
        assert!(s.at_end());
        assert!(!s.advance());
        assert!(s.at_end());
    }

    #[test]
    fn empty_input_starts_on_sentinel() {
        let s = Scanner::new("");
        assert_eq!(s.current(), None);
        assert_eq!(s.peek(), None);
        assert!(s.at_end());
        assert_eq!(s.remaining(), 0);
    }

    #[test]
    fn attempt_restores_cursor_on_failure() {
        let mut s = Scanner::new("abc");
        let matched = s.attempt(|s| {
            s.advance();
            s.advance();
            false
        });
        assert!(!matched);
        assert_eq!(s.current(), Some('a'));
    }

    #[test]
    fn attempt_keeps_cursor_on_success() {
        let mut s = Scanner::new("abc");
        assert!(s.attempt(|s| s.advance()));
        assert_eq!(s.current(), Some('b'));
    }

    #[test]
    fn remaining_counts_down_to_zero() {
        let mut s = Scanner::new("xy");
        assert_eq!(s.remaining(), 2);
        s.advance();
        assert_eq!(s.remaining(), 1);
        s.advance();
        assert_eq!(s.remaining(), 0);
    }
}
