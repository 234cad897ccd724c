//! Built-in origin roster.
//!
//! The care facilities the service checks by default. `reach sweep` uses this
//! list unless `--origins` points at another roster file.

use crate::domain::Location;

const FACILITIES: [(&str, &str); 10] = [
    ("Colisée - EHPAD HERRI BURUA", "3 Place Harrismendi, 64210 Arbonne"),
    ("Colisée - EHPAD IASO", "10 Imp. du Parc de la Roche Tinard, 49800 Loire-Authion"),
    ("Colisée - EHPAD LA VARENNE", "21 Rue Auguste Perret, 76880 Arques-la-Bataille"),
    ("Colisée - EHPAD LES HAUTS DE BARBEGAL", "54 Rte de Coste Basse, 13200 Arles"),
    ("Colisée - EHPAD LE HOME MEDOCAIN", "1All. du Château, 33460 Arsac"),
    ("Colisée - EHPAD LES JARDINS D'ATHIS", "1 Rue des Saules Bertin, 51150 Athis"),
    ("Colisée - EHPAD L'HORLOGE", "27-29 Av. Denfert Rochereau, 89000 Auxerre"),
    ("Colisée - EHPAD LES TERRASSES DE LA PIOLINE", "330 Pt Rte des Milles, 13290 Aix-en-Provence"),
    ("Résidence Colisée Pro Santé Evry", "Rue des Clos, 91070 Bondoufle"),
    ("Colisée Patrimoine Groupe", "20-28 All. de Boutaut, 33070 Bordeaux"),
];

/// The built-in facilities, in their canonical order.
pub fn builtin_facilities() -> Vec<Location> {
    FACILITIES
        .iter()
        .map(|(name, address)| Location::new(*name, *address))
        .collect()
}
