use super::SourceRow;
use super::category::{BOOKINGS, PAYMENTS, REVIEWS, SUPPORT, TRUST};

const FIND_PROVIDER: SourceRow<'static> = SourceRow::new(
    BOOKINGS,
    "Comment trouver un prestataire près de chez moi ?",
    "Saisissez le service recherché et votre code postal dans la barre de \
     recherche. Vous pouvez ensuite filtrer par note, tarif et disponibilité.",
);

const BOOK_SERVICE: SourceRow<'static> = SourceRow::new(
    BOOKINGS,
    "Comment réserver un service ?",
    "Sur le profil du prestataire, choisissez le service, un créneau libre, \
     puis validez votre demande. Le prestataire a 48 heures pour l'accepter.",
);

const CANCEL_BOOKING: SourceRow<'static> = SourceRow::new(
    BOOKINGS,
    "Puis-je annuler une réservation ?",
    "Oui, gratuitement jusqu'à 24 heures avant l'intervention depuis « Mes \
     réservations ». Au-delà, des frais d'annulation peuvent s'appliquer.",
);

const WHEN_CHARGED: SourceRow<'static> = SourceRow::new(
    PAYMENTS,
    "Quand mon compte est-il débité ?",
    "Une empreinte bancaire est prise à la réservation. Le débit n'intervient \
     qu'une fois la mission terminée.",
);

const LEAVE_REVIEW: SourceRow<'static> = SourceRow::new(
    REVIEWS,
    "Comment laisser un avis ?",
    "Après la mission, un lien vous est envoyé par e-mail. Vous pouvez aussi \
     noter le prestataire depuis « Mes réservations ».",
);

const VERIFIED_PROVIDERS: SourceRow<'static> = SourceRow::new(
    TRUST,
    "Les prestataires sont-ils vérifiés ?",
    "Oui, chaque prestataire fournit une pièce d'identité et un justificatif \
     de statut, contrôlés par notre équipe avant publication du profil.",
);

const DISPUTE: SourceRow<'static> = SourceRow::new(
    SUPPORT,
    "Que faire en cas de litige ?",
    "Signalez le problème depuis la réservation concernée dans les 48 heures. \
     Le paiement est suspendu le temps que notre équipe étudie la situation.",
);

/// Client booking walkthrough, in presentation order.
pub const JOURNEY: &[SourceRow<'static>] = &[
    FIND_PROVIDER,
    BOOK_SERVICE,
    CANCEL_BOOKING,
    WHEN_CHARGED,
    VERIFIED_PROVIDERS,
    LEAVE_REVIEW,
    DISPUTE,
];

pub const STANDARD: &[SourceRow<'static>] = &[
    BOOK_SERVICE,
    CANCEL_BOOKING,
    WHEN_CHARGED,
    VERIFIED_PROVIDERS,
    LEAVE_REVIEW,
    DISPUTE,
];
