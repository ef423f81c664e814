use super::SourceRow;
use super::category::{ABOUT, SERVICES, TRUST};

pub const STANDARD: &[SourceRow<'static>] = &[
    SourceRow::new(
        ABOUT,
        "Qu'est-ce que la plateforme ?",
        "Une place de marché qui met en relation des particuliers avec des \
         prestataires de services à domicile vérifiés : ménage, bricolage, \
         jardinage, garde d'enfants et plus encore.",
    ),
    SourceRow::new(
        ABOUT,
        "Dans quelles villes le service est-il disponible ?",
        "Le service couvre les principales métropoles françaises et s'étend \
         chaque mois. Saisissez votre code postal pour vérifier la couverture.",
    ),
    SourceRow::new(
        SERVICES,
        "Quels types de services sont proposés ?",
        "Ménage, repassage, petits travaux, jardinage, garde d'enfants, aide aux \
         devoirs et assistance informatique.",
    ),
    SourceRow::new(
        TRUST,
        "Comment signaler un comportement inapproprié ?",
        "Utilisez le bouton « Signaler » présent sur chaque profil et chaque \
         conversation. Notre équipe traite les signalements en priorité.",
    ),
];
