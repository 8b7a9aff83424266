//! Display masks for Brazilian document numbers and postal codes.
//!
//! Each mask strips everything but digits and re-inserts the separators
//! progressively, so it can run on every keystroke. Inputs longer than the
//! document allows are truncated.

pub const CPF_DIGITS: usize = 11;
pub const CNPJ_DIGITS: usize = 14;
pub const CEP_DIGITS: usize = 8;

const CPF_LAYOUT: &[(usize, Option<char>)] = &[(3, Some('.')), (3, Some('.')), (3, Some('-')), (2, None)];
const CNPJ_LAYOUT: &[(usize, Option<char>)] = &[
    (2, Some('.')),
    (3, Some('.')),
    (3, Some('/')),
    (4, Some('-')),
    (2, None),
];
const CEP_LAYOUT: &[(usize, Option<char>)] = &[(5, Some('-')), (3, None)];

pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// `12345678901` -> `123.456.789-01`
pub fn mask_cpf(raw: &str) -> String {
    apply_layout(&digits_only(raw), CPF_LAYOUT)
}

/// `12345678000195` -> `12.345.678/0001-95`
pub fn mask_cnpj(raw: &str) -> String {
    apply_layout(&digits_only(raw), CNPJ_LAYOUT)
}

/// `01001000` -> `01001-000`
pub fn mask_cep(raw: &str) -> String {
    apply_layout(&digits_only(raw), CEP_LAYOUT)
}

pub fn is_complete_cpf(raw: &str) -> bool {
    digits_only(raw).len() == CPF_DIGITS
}

pub fn is_complete_cnpj(raw: &str) -> bool {
    digits_only(raw).len() == CNPJ_DIGITS
}

pub fn is_complete_cep(raw: &str) -> bool {
    digits_only(raw).len() == CEP_DIGITS
}

fn apply_layout(digits: &str, layout: &[(usize, Option<char>)]) -> String {
    let mut out = String::with_capacity(digits.len() + layout.len());
    let mut rest = digits;
    for (width, separator) in layout {
        if rest.is_empty() {
            break;
        }
        let take = (*width).min(rest.len());
        let (chunk, tail) = rest.split_at(take);
        out.push_str(chunk);
        rest = tail;
        if let Some(sep) = separator {
            if !rest.is_empty() {
                out.push(*sep);
            }
        }
    }
    out
}
