//! Décodage Shift-JIS ligne à ligne.

use aa_core::error::DecodeError;
use encoding_rs::SHIFT_JIS;

/// Découpe les octets bruts d'un fichier en lignes.
///
/// Coupe sur `\n` et retire un `\r` final éventuel. Sûr avant décodage : en
/// Shift-JIS le second octet d'une paire est toujours ≥ 0x40, donc jamais
/// 0x0A ni 0x0D. Un `\n` terminal ne produit pas de ligne vide finale
/// (sémantique scanner : un fichier vide n'a aucune ligne).
#[must_use]
pub fn split_lines(bytes: &[u8]) -> Vec<&[u8]> {
    let mut lines: Vec<&[u8]> = bytes
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .collect();
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Décode une ligne Shift-JIS en texte Unicode.
///
/// # Errors
/// Retourne [`DecodeError`] si la ligne contient une séquence invalide.
/// L'erreur transporte le texte best-effort (U+FFFD aux positions fautives) ;
/// l'appelant décide explicitement de s'en servir ou d'abandonner le fichier.
/// Émettre du contenu vide en silence est interdit : c'est de la perte de
/// données.
pub fn decode_line(bytes: &[u8], line_no: usize) -> Result<String, DecodeError> {
    let (text, _, had_errors) = SHIFT_JIS.decode(bytes);
    if had_errors {
        return Err(DecodeError {
            line: line_no,
            lossy: text.into_owned(),
        });
    }
    Ok(text.into_owned())
}
