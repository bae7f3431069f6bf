//! Grammaire du domaine (après `@`): labels pointés ou address-literal
//! `[...]` (IPv4 décimal pointé, ou tag général + payload).

use super::classes;
use super::scanner::Scanner;

/// `label(.label)*` sans point final. Tente `label.` en boucle; quand la
/// tentative échoue, rollback sur cette tentative puis exige un dernier
/// label sans point.
pub(crate) fn dot_labels(s: &mut Scanner) -> bool {
    s.attempt(|s| {
        let mut valid = false;
        loop {
            let mark = s.mark();
            if label(s) && s.current() == Some('.') {
                valid = s.advance();
            } else {
                s.reset(mark);
                break;
            }
        }
        valid && label(s)
    })
}

/// Label de domaine: commence par `[a-z0-9]`; un tiret (ou une suite de
/// tirets) n'est admis que suivi d'un `[a-z0-9]`. Ne restaure pas le
/// curseur: l'appelant fait le rollback.
fn label(s: &mut Scanner) -> bool {
    if !s.current_is(classes::is_alnum_lower) {
        return false;
    }
    s.advance();
    while s.current().is_some() {
        if s.current_is(classes::is_alnum_lower) {
            s.advance();
        } else if s.current() == Some('-') {
            while s.peek() == Some('-') {
                s.advance();
            }
            if s.peek_is(classes::is_alnum_lower) {
                s.advance();
            } else {
                // tirets en fin de label: toute la tentative échoue
                return false;
            }
        } else {
            break;
        }
    }
    true
}

/// `[` puis exactement trois `octet.`, puis soit un quatrième octet nu,
/// soit `tag:payload`, puis `]` obligatoire.
pub(crate) fn address_literal(s: &mut Scanner) -> bool {
    s.attempt(|s| {
        if s.current() != Some('[') {
            return false;
        }
        s.advance();

        for _ in 0..3 {
            if !(ipv4_octet(s) && s.current() == Some('.')) {
                return false;
            }
            s.advance();
        }

        if !ipv4_octet(s) {
            if !literal_tag(s) {
                return false;
            }
            if !(s.current() == Some(':') && s.advance() && literal_text(s)) {
                return false;
            }
        }

        s.current() == Some(']') && s.advance()
    })
}

/// Octet IPv4 sans arithmétique, par classes de préfixe, de la plus
/// spécifique à la moins spécifique: `25x`, `2[0-4]x`, `[01]x[x]`, `x[x]`.
/// Une seule classe est tentée; les ratés connus de la référence (`0` ou
/// `1` isolés, `25` nu) sont conservés tels quels.
fn ipv4_octet(s: &mut Scanner) -> bool {
    let mark = s.mark();
    let valid = match (s.current(), s.peek()) {
        (Some('2'), Some('5')) => {
            s.advance();
            s.advance();
            if matches!(s.current(), Some('0'..='5')) {
                s.advance();
                true
            } else {
                false
            }
        }
        (Some('2'), Some('0'..='4')) => {
            s.advance();
            s.advance();
            if s.current_is(|c| c.is_ascii_digit()) {
                s.advance();
                true
            } else {
                false
            }
        }
        (Some('0' | '1'), _) => {
            s.advance();
            if s.current_is(|c| c.is_ascii_digit()) {
                s.advance();
                if s.current_is(|c| c.is_ascii_digit()) {
                    s.advance();
                }
                true
            } else {
                false
            }
        }
        (Some('0'..='9'), _) => {
            s.advance();
            if s.current_is(|c| c.is_ascii_digit()) {
                s.advance();
            }
            true
        }
        _ => false,
    };
    if !valid {
        s.reset(mark);
    }
    valid
}

/// Tag du literal général: suite non vide de `[a-z0-9]` ou de tirets
/// suivis d'un `[a-z0-9]` (même règle que les labels, tiret initial admis).
fn literal_tag(s: &mut Scanner) -> bool {
    let mark = s.mark();
    while s.current().is_some() {
        if s.current_is(classes::is_alnum_lower) {
            s.advance();
        } else if s.current() == Some('-') {
            while s.peek() == Some('-') {
                s.advance();
            }
            if s.peek_is(classes::is_alnum_lower) {
                s.advance();
            } else {
                s.reset(mark);
                return false;
            }
        } else {
            break;
        }
    }
    if s.mark() > mark {
        true
    } else {
        s.reset(mark);
        false
    }
}

/// Payload du literal général: forme échappée d'abord (un `\` ouvre une
/// suite de quoted-pair-chars), sinon une suite brute de dtext. Les deux
/// balayages s'arrêtent une position avant le dernier caractère de
/// l'entrée, réservant le `]` fermant. Payload vide = échec.
fn literal_text(s: &mut Scanner) -> bool {
    let mut consumed = false;

    if s.current() == Some('\\') {
        while s.remaining() > 1 && s.current_is(classes::is_quoted_pair_char) {
            s.advance();
            consumed = true;
        }
    }

    if !consumed {
        while s.remaining() > 1 && s.current_is(classes::is_dtext) {
            s.advance();
            consumed = true;
        }
    }

    consumed
}
