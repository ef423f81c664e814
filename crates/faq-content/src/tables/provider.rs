use super::SourceRow;
use super::category::{ACCOUNT, BOOKINGS, FIRST_JOB, PAYMENTS, REVIEWS, SERVICES, SIGN_UP};

const REQUIRED_DOCUMENTS: SourceRow<'static> = SourceRow::new(
    SIGN_UP,
    "Quels documents fournir pour valider mon profil ?",
    "Une pièce d'identité en cours de validité, un justificatif de statut \
     (SIRET ou attestation d'auto-entrepreneur) et un RIB à votre nom.",
);

const PROFILE_VISIBILITY: SourceRow<'static> = SourceRow::new(
    ACCOUNT,
    "Comment rendre mon profil plus visible ?",
    "Ajoutez une photo, une description détaillée de vos compétences et tenez \
     vos disponibilités à jour. Les profils complets apparaissent en premier \
     dans les résultats de recherche.",
);

const ADD_SERVICE: SourceRow<'static> = SourceRow::new(
    SERVICES,
    "Comment ajouter un service ?",
    "Dans « Mes services », cliquez sur « Ajouter un service », choisissez la \
     catégorie, décrivez la prestation et indiquez votre tarif.",
);

const SET_RATES: SourceRow<'static> = SourceRow::new(
    SERVICES,
    "Comment fixer mes tarifs ?",
    "Vous fixez librement un tarif horaire ou forfaitaire pour chaque service. \
     Consultez les tarifs moyens de votre zone pour rester compétitif.",
);

const SEVERAL_SERVICES: SourceRow<'static> = SourceRow::new(
    SERVICES,
    "Puis-je proposer plusieurs services ?",
    "Oui, vous pouvez proposer autant de services que vous le souhaitez, chacun \
     avec son propre tarif.",
);

const ACCEPT_BOOKING: SourceRow<'static> = SourceRow::new(
    BOOKINGS,
    "Comment accepter une demande de réservation ?",
    "Vous recevez une notification pour chaque demande. Ouvrez-la depuis \
     « Mes réservations » et cliquez sur « Accepter » ou « Refuser » sous 48 heures.",
);

const MANAGE_AVAILABILITY: SourceRow<'static> = SourceRow::new(
    BOOKINGS,
    "Comment gérer mes disponibilités ?",
    "Dans « Mon agenda », bloquez les créneaux où vous n'êtes pas disponible. \
     Les clients ne peuvent réserver que vos créneaux libres.",
);

const FIRST_INTERVENTION: SourceRow<'static> = SourceRow::new(
    FIRST_JOB,
    "Comment bien préparer ma première intervention ?",
    "Confirmez l'adresse et l'horaire avec le client via la messagerie, \
     prévoyez votre matériel et présentez-vous quelques minutes en avance.",
);

const WHEN_PAID: SourceRow<'static> = SourceRow::new(
    PAYMENTS,
    "Quand suis-je payé ?",
    "Le paiement est libéré 48 heures après la fin de la mission, sauf \
     contestation du client. Le virement apparaît sous 2 à 3 jours ouvrés.",
);

const PLATFORM_FEES: SourceRow<'static> = SourceRow::new(
    PAYMENTS,
    "Quels frais la plateforme prélève-t-elle ?",
    "Une commission de 15 % est prélevée sur le montant de chaque mission \
     réalisée. Aucun abonnement n'est demandé.",
);

const GOOD_REVIEWS: SourceRow<'static> = SourceRow::new(
    REVIEWS,
    "Comment obtenir de bons avis ?",
    "Soyez ponctuel, communiquez clairement et invitez le client à laisser un \
     avis à la fin de la mission.",
);

const NEGATIVE_REVIEW: SourceRow<'static> = SourceRow::new(
    REVIEWS,
    "Comment répondre à un avis négatif ?",
    "Vous pouvez publier une réponse publique sous chaque avis. Restez courtois \
     et factuel ; en cas d'avis abusif, signalez-le au support.",
);

/// Provider onboarding walkthrough, in presentation order.
pub const JOURNEY: &[SourceRow<'static>] = &[
    REQUIRED_DOCUMENTS,
    PROFILE_VISIBILITY,
    ADD_SERVICE,
    SET_RATES,
    SEVERAL_SERVICES,
    ACCEPT_BOOKING,
    MANAGE_AVAILABILITY,
    FIRST_INTERVENTION,
    WHEN_PAID,
    GOOD_REVIEWS,
];

pub const STANDARD: &[SourceRow<'static>] = &[
    PROFILE_VISIBILITY,
    ADD_SERVICE,
    SET_RATES,
    MANAGE_AVAILABILITY,
    PLATFORM_FEES,
    NEGATIVE_REVIEW,
];
