use phf::phf_set;

/// Caractères spéciaux admis dans un atome du local-part, en plus de
/// `[a-z0-9]`.
const ATOM_SPECIALS: phf::Set<char> = phf_set! {
    '!', '#', '$', '%', '&', '\'', '*', '+', '/', '=', '?', '^', '_', '`',
    '{', '|', '}', '~', '-',
};

/// `[a-z0-9]` — labels de domaine et octets IPv4.
pub(crate) fn is_alnum_lower(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Caractère d'atome du local-part (dot-atom).
pub(crate) fn is_atom_char(c: char) -> bool {
    is_alnum_lower(c) || ATOM_SPECIALS.contains(&c)
}

// Les trois classes suivantes comparent l'octet bas du code point
// (`c as u8`), comme la référence. La troncature fait partie du
// comportement observable et les bornes sont reprises telles quelles,
// chevauchement compris.

/// [\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]
pub(crate) fn is_qtext(c: char) -> bool {
    let b = c as u8;
    matches!(b, 0x01..=0x08 | 0x0b | 0x0c | 0x0e..=0x1f | 0x21 | 0x23..=0x5b | 0x5d..=0x7f)
}

/// [\x01-\x09\x0b\x0c\x0e-\x7f]
pub(crate) fn is_quoted_pair_char(c: char) -> bool {
    let b = c as u8;
    matches!(b, 0x01..=0x09 | 0x0b | 0x0c | 0x0e..=0x7f)
}

/// [\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]
pub(crate) fn is_dtext(c: char) -> bool {
    let b = c as u8;
    matches!(b, 0x01..=0x08 | 0x0b | 0x0c | 0x0e..=0x1f | 0x21..=0x5a | 0x53..=0x7f)
}
