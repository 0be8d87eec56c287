//! Table des entités HTML rencontrées dans les scripts AA.
//!
//! La table est une liste *ordonnée* de paires (code, littéral), pas une map :
//! certains codes y figurent plusieurs fois. La normalisation applique les
//! entrées dans l'ordre de la table et le remplacement est destructif, donc
//! seule la première entrée d'un code donné peut produire un effet. Ce
//! comportement "première entrée gagne" fait partie du contrat et doit être
//! préservé tel quel.

use serde::Deserialize;

/// Une entrée de la table : un code `&nom;` et le caractère qu'il représente.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct EntityEntry {
    /// Caractère littéral de remplacement.
    pub value: String,
    /// Code de la forme `&nom;`.
    pub code: String,
}

/// Liste ordonnée d'entrées, consultée séquentiellement par la normalisation.
#[derive(Clone, Debug)]
pub struct EntityTable {
    entries: Vec<EntityEntry>,
}

/// Table embarquée, doublons de codes compris.
const BUILTIN_JSON: &str = include_str!("../assets/entities.json");

impl EntityTable {
    /// Charge la table embarquée.
    ///
    /// # Errors
    /// Retourne une erreur si le JSON embarqué est invalide.
    pub fn builtin() -> Result<Self, serde_json::Error> {
        let entries: Vec<EntityEntry> = serde_json::from_str(BUILTIN_JSON)?;
        Ok(Self { entries })
    }

    /// Construit une table à partir d'entrées arbitraires (tests, surtout).
    #[must_use]
    pub fn from_entries(entries: Vec<EntityEntry>) -> Self {
        Self { entries }
    }

    /// Itère les entrées dans l'ordre de la table.
    pub fn iter(&self) -> std::slice::Iter<'_, EntityEntry> {
        self.entries.iter()
    }

    /// Nombre d'entrées, doublons compris.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Vrai si la table est vide.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a EntityTable {
    type Item = &'a EntityEntry;
    type IntoIter = std::slice::Iter<'a, EntityEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
