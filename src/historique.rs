//! Historique + archive des calculs (mémoire, un seul utilisateur).
//!
//! Rôle : garder les calculs réussis (historique) et ceux que l’utilisateur
//! choisit de conserver (archive). Aucune persistance : tout vit le temps du
//! processus.
//!
//! Contrats :
//! - ids croissants à partir de 1, jamais réutilisés
//! - listes rendues du plus récent au plus ancien
//! - seule l’archive accepte la suppression unitaire
//! - l’historique est borné (CAPACITE_MAX), l’archive non

use log::{debug, info};
use thiserror::Error;

/// Garde-fou : nombre maximal d’entrées d’historique conservées.
pub const CAPACITE_MAX: usize = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Genre {
    Historique,
    Archive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Calcul {
    pub id: u64,
    pub expression: String,
    pub resultat: String,
    pub genre: Genre,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoriqueError {
    #[error("calcul {0} introuvable")]
    Introuvable(u64),
    #[error("calcul {0} : suppression possible seulement dans l’archive")]
    PasArchive(u64),
}

#[derive(Clone, Debug)]
pub struct Historique {
    // ordre d’insertion (le plus ancien d’abord)
    calculs: Vec<Calcul>,
    prochain_id: u64,
}

impl Default for Historique {
    fn default() -> Self {
        Self {
            calculs: Vec::new(),
            prochain_id: 1,
        }
    }
}

impl Historique {
    pub fn new() -> Self {
        Self::default()
    }

    fn enregistrer(&mut self, expression: &str, resultat: &str, genre: Genre) -> Calcul {
        if genre == Genre::Historique && self.compte(Genre::Historique) >= CAPACITE_MAX {
            if let Some(i) = self.calculs.iter().position(|c| c.genre == Genre::Historique) {
                let retire = self.calculs.remove(i);
                debug!("historique plein : calcul {} retiré", retire.id);
            }
        }

        let id = self.prochain_id;
        self.prochain_id += 1;

        debug!("enregistre {genre:?} #{id} : {expression} = {resultat}");
        let calcul = Calcul {
            id,
            expression: expression.to_string(),
            resultat: resultat.to_string(),
            genre,
        };
        self.calculs.push(calcul.clone());
        calcul
    }

    /// Ajoute un calcul à l’historique et rend la copie enregistrée.
    pub fn enregistrer_historique(&mut self, expression: &str, resultat: &str) -> Calcul {
        self.enregistrer(expression, resultat, Genre::Historique)
    }

    /// Ajoute un calcul à l’archive.
    pub fn enregistrer_archive(&mut self, expression: &str, resultat: &str) -> Calcul {
        self.enregistrer(expression, resultat, Genre::Archive)
    }

    fn liste(&self, genre: Genre) -> Vec<&Calcul> {
        self.calculs
            .iter()
            .rev()
            .filter(|c| c.genre == genre)
            .collect()
    }

    fn compte(&self, genre: Genre) -> usize {
        self.calculs.iter().filter(|c| c.genre == genre).count()
    }

    /// Historique, du plus récent au plus ancien.
    pub fn historique(&self) -> Vec<&Calcul> {
        self.liste(Genre::Historique)
    }

    /// Archive, du plus récent au plus ancien.
    pub fn archive(&self) -> Vec<&Calcul> {
        self.liste(Genre::Archive)
    }

    pub fn get(&self, id: u64) -> Option<&Calcul> {
        self.calculs.iter().find(|c| c.id == id)
    }

    /// Retire un calcul archivé et le rend.
    pub fn supprimer_archive(&mut self, id: u64) -> Result<Calcul, HistoriqueError> {
        let i = self
            .calculs
            .iter()
            .position(|c| c.id == id)
            .ok_or(HistoriqueError::Introuvable(id))?;

        if self.calculs[i].genre != Genre::Archive {
            return Err(HistoriqueError::PasArchive(id));
        }

        info!("archive : calcul {id} supprimé");
        Ok(self.calculs.remove(i))
    }

    /// Vide l’historique (l’archive est conservée).
    pub fn effacer_historique(&mut self) {
        let avant = self.calculs.len();
        self.calculs.retain(|c| c.genre != Genre::Historique);
        info!("historique effacé ({} calculs)", avant - self.calculs.len());
    }
}
