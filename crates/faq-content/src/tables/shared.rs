use super::SourceRow;
use super::category::{ACCOUNT, PAYMENTS, SIGN_UP, SUPPORT, TRUST};

pub const CREATE_ACCOUNT: SourceRow<'static> = SourceRow::new(
    SIGN_UP,
    "Comment créer un compte ?",
    "Cliquez sur « S'inscrire », choisissez « Particulier » puis renseignez votre \
     adresse e-mail et un mot de passe. Un e-mail de confirmation vous est envoyé.",
)
.with_provider_answer(
    "Cliquez sur « S'inscrire », choisissez « Prestataire » puis renseignez votre \
     identité, votre zone d'intervention et vos compétences. Votre profil est \
     publié après vérification.",
)
.with_general_answer(
    "Cliquez sur « S'inscrire » et choisissez votre profil : particulier pour \
     réserver un service, prestataire pour proposer vos services.",
);

pub const FREE_SIGN_UP: SourceRow<'static> = SourceRow::new(
    SIGN_UP,
    "L'inscription est-elle gratuite ?",
    "Oui, l'inscription est gratuite. Vous ne payez que les services que vous réservez.",
)
.with_provider_answer(
    "Oui, l'inscription est gratuite. Une commission est prélevée uniquement sur \
     les missions réalisées.",
);

pub const EDIT_PROFILE: SourceRow<'static> = SourceRow::new(
    ACCOUNT,
    "Comment modifier mes informations personnelles ?",
    "Rendez-vous dans « Mon profil » puis cliquez sur « Modifier ». Les changements \
     sont enregistrés immédiatement.",
);

pub const PAYMENT_METHODS: SourceRow<'static> = SourceRow::new(
    PAYMENTS,
    "Quels moyens de paiement sont acceptés ?",
    "Nous acceptons les cartes bancaires Visa, Mastercard et American Express. \
     Le paiement est sécurisé par notre partenaire de paiement.",
)
.with_provider_answer(
    "Vous êtes payé par virement bancaire sur le compte renseigné dans votre \
     profil. Aucun paiement en espèces ne transite par la plateforme.",
);

pub const DATA_PROTECTION: SourceRow<'static> = SourceRow::new(
    TRUST,
    "Comment mes données sont-elles protégées ?",
    "Vos données sont chiffrées et ne sont jamais revendues. Vous pouvez demander \
     leur suppression à tout moment depuis votre compte.",
);

pub const CONTACT_SUPPORT: SourceRow<'static> = SourceRow::new(
    SUPPORT,
    "Comment contacter le support ?",
    "Depuis votre espace, ouvrez « Aide » puis « Nous contacter ». Nous répondons \
     sous 24 heures ouvrées.",
)
.with_general_answer(
    "Écrivez-nous via le formulaire de contact en bas de page. Nous répondons \
     sous 24 heures ouvrées.",
);

/// Rows every audience reads first, in this order.
pub const SHARED: &[SourceRow<'static>] = &[
    CREATE_ACCOUNT,
    FREE_SIGN_UP,
    EDIT_PROFILE,
    PAYMENT_METHODS,
    DATA_PROTECTION,
    CONTACT_SUPPORT,
];
