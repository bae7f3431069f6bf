//! Grammaire du local-part (avant `@`): dot-atom ou quoted-string.

use super::classes;
use super::scanner::Scanner;

/// `atom(.atom)*`. Un `.` non suivi d'au moins un caractère d'atome
/// invalide tout le local-part si le balayage s'est arrêté dessus.
pub(crate) fn dot_atom(s: &mut Scanner) -> bool {
    s.attempt(|s| {
        if !atom_run(s) {
            return false;
        }

        let mut valid = true;
        if s.current() == Some('.') {
            while s.current().is_some() {
                let mark = s.mark();
                if s.current() == Some('.') && s.advance() && atom_run(s) {
                    valid = true;
                } else {
                    s.reset(mark);
                    if s.current() == Some('.') {
                        valid = false;
                    }
                    break;
                }
            }
        }
        valid
    })
}

/// Un ou plusieurs caractères d'atome consécutifs.
fn atom_run(s: &mut Scanner) -> bool {
    let mark = s.mark();
    while s.current_is(classes::is_atom_char) {
        s.advance();
    }
    s.mark() > mark
}

/// Quoted-string: `"` ouvrant, corps en qtext ou paires `\x`, `"` fermant.
/// `""` (corps vide) est accepté. Rollback complet en cas d'échec.
pub(crate) fn quoted_string(s: &mut Scanner) -> bool {
    s.attempt(|s| {
        if !(s.current() == Some('"') && s.advance()) {
            return false;
        }

        if s.current() == Some('"') && s.advance() {
            return true;
        }

        let mut valid = false;
        while s.current().is_some() {
            if s.current_is(classes::is_qtext) {
                s.advance();
                valid = true;
            } else if s.current() == Some('\\') && s.advance() {
                if s.current_is(classes::is_quoted_pair_char) {
                    s.advance();
                    valid = true;
                } else {
                    // tout autre caractère après '\' condamne la quoted-string
                    valid = false;
                    break;
                }
            } else {
                break;
            }
        }

        valid && s.current() == Some('"') && s.advance()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(rule: fn(&mut Scanner) -> bool, input: &str) -> (bool, usize) {
        let mut s = Scanner::new(input);
        let ok = rule(&mut s);
        (ok, s.mark())
    }

    #[test]
    fn dot_atom_basic() {
        assert_eq!(run(dot_atom, "email@"), (true, 5));
        assert_eq!(run(dot_atom, "firstname.lastname@"), (true, 18));
        assert_eq!(run(dot_atom, "a+b_c{d}@"), (true, 8));
    }

    #[test]
    fn dot_atom_rejects_dot_boundaries() {
        // '.' initial: aucun atome avant
        assert_eq!(run(dot_atom, ".a@"), (false, 0));
        // '.' final avant '@': rollback complet
        assert_eq!(run(dot_atom, "a.@"), (false, 0));
        assert_eq!(run(dot_atom, "a..b@"), (false, 0));
    }

    #[test]
    fn dot_atom_stops_before_at() {
        let (ok, cursor) = run(dot_atom, "a.b@x");
        assert!(ok);
        assert_eq!(cursor, 3);
    }

    #[test]
    fn quoted_string_empty_and_simple() {
        assert_eq!(run(quoted_string, r#"""@"#), (true, 2));
        assert_eq!(run(quoted_string, r#""abc"@"#), (true, 5));
        // qtext couvre '(' et '@'
        assert_eq!(run(quoted_string, r#""a(@)b"@"#), (true, 7));
    }

    #[test]
    fn quoted_string_escapes() {
        assert_eq!(run(quoted_string, r#""\tes@t"@"#), (true, 8));
        // '\' suivi d'un octet hors plage: échec total
        let (ok, cursor) = run(quoted_string, "\"a\\\n\"@");
        assert!(!ok);
        assert_eq!(cursor, 0);
    }

    #[test]
    fn quoted_string_requires_closing_quote() {
        assert_eq!(run(quoted_string, "\"abc"), (false, 0));
        assert_eq!(run(quoted_string, "\""), (false, 0));
        assert_eq!(run(quoted_string, "abc"), (false, 0));
    }
}
