//! Normalisation des codes d'entité vers leurs caractères littéraux.

use aa_core::EntityTable;

/// Remplace chaque code d'entité reconnaissable par son littéral.
///
/// Applique les entrées dans l'ordre de la table ; pour chaque entrée, toutes
/// les occurrences restantes de son code sont remplacées. Le remplacement
/// étant destructif, la première entrée d'un code donné est la seule qui
/// puisse jamais agir — les doublons ultérieurs sont inertes, et ce
/// comportement est contractuel. Les codes inconnus restent tels quels.
/// Fonction pure, aucune condition d'erreur.
#[must_use]
pub fn normalize(line: &str, table: &EntityTable) -> String {
    let mut out = line.to_owned();
    for entry in table {
        if out.contains(&entry.code) {
            out = out.replace(&entry.code, &entry.value);
        }
    }
    out
}
