use std::collections::HashMap;

use lpa_dashboard_domain::{
    ActorType, AttorneyProvided, CertificateProviderProvided, DashboardActor, DashboardResults,
    DonorProvided, Lpa, ProvidedDetails, SortKey, VoucherProvided,
};

use super::dispatch::ProvidedByLpa;

/// Joins resolved LPAs with the user's provided details and applies each
/// role's visibility rules.
///
/// `donors[i]` is the record `lpas[i]` was resolved from.
pub(super) fn merge(
    user_sub: &str,
    actor_types: &HashMap<String, ActorType>,
    donors: &[DonorProvided],
    lpas: Vec<Lpa>,
    provided: &ProvidedByLpa,
) -> DashboardResults {
    let mut results = DashboardResults::default();

    for (donor, lpa) in donors.iter().zip(lpas) {
        let Some(actor_type) = actor_types.get(lpa.lpa_id.as_str()).copied() else {
            continue;
        };

        let entry = match actor_type {
            ActorType::Donor => Some(donor_entry(user_sub, donor, lpa)),
            ActorType::Attorney => {
                let attorney = provided.attorney.get(lpa.lpa_id.as_str()).cloned();
                attorney_entry(lpa, attorney)
            }
            ActorType::CertificateProvider => {
                let certificate_provider = provided
                    .certificate_provider
                    .get(lpa.lpa_id.as_str())
                    .cloned();
                certificate_provider_entry(lpa, certificate_provider)
            }
            ActorType::Voucher => {
                let voucher = provided.voucher.get(lpa.lpa_id.as_str()).cloned();
                voucher_entry(lpa, voucher)
            }
        };

        if let Some(entry) = entry {
            results.bucket_mut(actor_type).push(entry);
        }
    }

    results.sort_by_recently_updated();
    results
}

fn donor_entry(user_sub: &str, donor: &DonorProvided, lpa: Lpa) -> DashboardActor {
    let entry = DashboardActor::new(lpa);

    // Organisation owned LPAs are shown without donor details.
    match &donor.sk {
        SortKey::Donor(sub) if sub == user_sub => {
            entry.with_provided(ProvidedDetails::Donor(donor.clone()))
        }
        _ => entry,
    }
}

fn attorney_entry(lpa: Lpa, attorney: Option<AttorneyProvided>) -> Option<DashboardActor> {
    let attorney = attorney?;

    // Replacement attorneys have nothing to do once the LPA is submitted.
    if attorney.is_replacement && lpa.submitted {
        return None;
    }

    let lpa_attorney = lpa.attorney(attorney.uid.as_str()).cloned();
    let mut entry = DashboardActor::new(lpa).with_provided(ProvidedDetails::Attorney(attorney));
    entry.lpa_attorney = lpa_attorney;

    Some(entry)
}

fn certificate_provider_entry(
    lpa: Lpa,
    certificate_provider: Option<CertificateProviderProvided>,
) -> Option<DashboardActor> {
    let entry = DashboardActor::new(lpa);

    match certificate_provider {
        Some(certificate_provider) if certificate_provider.has_signed() => None,
        Some(certificate_provider) => Some(
            entry.with_provided(ProvidedDetails::CertificateProvider(certificate_provider)),
        ),
        None => Some(entry),
    }
}

fn voucher_entry(lpa: Lpa, voucher: Option<VoucherProvided>) -> Option<DashboardActor> {
    let entry = DashboardActor::new(lpa);

    let Some(voucher) = voucher else {
        return Some(entry);
    };

    let tasks = voucher.tasks;
    let identity_rejected =
        tasks.confirm_your_identity.is_completed() && !voucher.identity_confirmed();
    if tasks.sign_the_declaration.is_completed() || identity_rejected {
        return None;
    }

    Some(entry.with_provided(ProvidedDetails::Voucher(voucher)))
}
