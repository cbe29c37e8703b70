use std::collections::HashMap;

use lpa_dashboard_core::{AppError, AppResult};
use lpa_dashboard_domain::{
    AttorneyProvided, CertificateProviderProvided, DonorProvided, PartitionKey, SortKey,
    SortKeyKind, StoreKey, VoucherProvided,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use crate::dashboard_ports::RawItem;

/// Keys every stored item carries, read before the item itself is decoded.
#[derive(Debug, Deserialize)]
struct ItemEnvelope {
    #[serde(rename = "PK")]
    pk: PartitionKey,
    #[serde(rename = "SK")]
    sk: SortKey,
    #[serde(rename = "ReferencedSK", default, deserialize_with = "optional_sort_key")]
    referenced_sk: Option<SortKey>,
}

fn optional_sort_key<'de, D>(deserializer: D) -> Result<Option<SortKey>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    value
        .filter(|value| !value.is_empty())
        .map(|value| value.parse().map_err(serde::de::Error::custom))
        .transpose()
}

/// A fetched item decoded according to its sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum FetchedItem {
    /// Record owning an LPA directly.
    Donor(DonorProvided),
    /// Record pointing at the organisation record that owns the LPA.
    Reference(StoreKey),
    Attorney(AttorneyProvided),
    CertificateProvider(CertificateProviderProvided),
    Voucher(VoucherProvided),
}

pub(super) fn decode_item(item: RawItem) -> AppResult<FetchedItem> {
    let value = Value::Object(item);
    let envelope = ItemEnvelope::deserialize(&value)
        .map_err(|error| AppError::Decode(format!("invalid item keys: {error}")))?;

    match envelope.sk.kind() {
        SortKeyKind::LpaOwner => match envelope.referenced_sk {
            Some(referenced_sk) if referenced_sk.is_lpa_owner() => Ok(FetchedItem::Reference(
                StoreKey::new(envelope.pk, referenced_sk),
            )),
            Some(referenced_sk) => Err(AppError::Decode(format!(
                "item '{}/{}' references non-owner key '{referenced_sk}'",
                envelope.pk, envelope.sk
            ))),
            None => decode_as(value, "donor").map(FetchedItem::Donor),
        },
        SortKeyKind::Attorney => decode_as(value, "attorney").map(FetchedItem::Attorney),
        SortKeyKind::CertificateProvider => {
            decode_as(value, "certificate provider").map(FetchedItem::CertificateProvider)
        }
        SortKeyKind::Voucher => decode_as(value, "voucher").map(FetchedItem::Voucher),
        SortKeyKind::Link => Err(AppError::Decode(format!(
            "unexpected link item '{}/{}' in batch",
            envelope.pk, envelope.sk
        ))),
    }
}

fn decode_as<T: DeserializeOwned>(value: Value, kind: &str) -> AppResult<T> {
    serde_json::from_value(value)
        .map_err(|error| AppError::Decode(format!("invalid {kind} item: {error}")))
}

/// Provided details of the current user, by LPA identifier.
#[derive(Debug, Default, PartialEq, Eq)]
pub(super) struct ProvidedByLpa {
    pub(super) attorney: HashMap<String, AttorneyProvided>,
    pub(super) certificate_provider: HashMap<String, CertificateProviderProvided>,
    pub(super) voucher: HashMap<String, VoucherProvided>,
}

/// Items of one batch, routed by kind.
#[derive(Debug, Default, PartialEq, Eq)]
pub(super) struct DispatchedItems {
    /// Donor records to resolve, in the order they were read.
    pub(super) donors: Vec<DonorProvided>,
    /// Organisation records still to fetch.
    pub(super) references: Vec<StoreKey>,
    pub(super) provided: ProvidedByLpa,
}

impl DispatchedItems {
    fn push_donor(&mut self, donor: DonorProvided) {
        // Placeholders for LPAs that never got a UID are not shown anywhere.
        if donor.has_lpa_uid() {
            self.donors.push(donor);
        } else {
            debug!(pk = %donor.pk, sk = %donor.sk, "skipping lpa without uid");
        }
    }

    /// Adds the owner records read by following references.
    ///
    /// References are only ever one hop deep, so anything other than a donor
    /// record here is invalid data.
    pub(super) fn append_referenced(&mut self, items: Vec<RawItem>) -> AppResult<()> {
        for item in items {
            match decode_item(item)? {
                FetchedItem::Donor(donor) => self.push_donor(donor),
                FetchedItem::Reference(key) => {
                    return Err(AppError::Decode(format!(
                        "referenced owner item points at another reference '{key}'"
                    )));
                }
                _ => {
                    return Err(AppError::Decode(
                        "referenced item is not an lpa owner".to_owned(),
                    ));
                }
            }
        }

        Ok(())
    }
}

fn lpa_id_of(pk: &PartitionKey) -> AppResult<String> {
    pk.lpa_id()
        .map(str::to_owned)
        .ok_or_else(|| AppError::Decode(format!("provided details stored under '{pk}'")))
}

/// Decodes and routes every item of a batch.
///
/// Items may arrive in any order: owner records and provided details are
/// collected independently and only joined after resolution.
pub(super) fn dispatch_items(items: Vec<RawItem>) -> AppResult<DispatchedItems> {
    let mut dispatched = DispatchedItems::default();

    for item in items {
        match decode_item(item)? {
            FetchedItem::Donor(donor) => dispatched.push_donor(donor),
            FetchedItem::Reference(key) => dispatched.references.push(key),
            FetchedItem::Attorney(attorney) => {
                let lpa_id = lpa_id_of(&attorney.pk)?;
                dispatched.provided.attorney.insert(lpa_id, attorney);
            }
            FetchedItem::CertificateProvider(certificate_provider) => {
                let lpa_id = lpa_id_of(&certificate_provider.pk)?;
                dispatched
                    .provided
                    .certificate_provider
                    .insert(lpa_id, certificate_provider);
            }
            FetchedItem::Voucher(voucher) => {
                let lpa_id = lpa_id_of(&voucher.pk)?;
                dispatched.provided.voucher.insert(lpa_id, voucher);
            }
        }
    }

    Ok(dispatched)
}

#[cfg(test)]
mod tests {
    use lpa_dashboard_core::AppError;
    use lpa_dashboard_domain::{PartitionKey, SortKey, StoreKey};
    use proptest::prelude::*;
    use serde_json::{Value, json};

    use super::{FetchedItem, decode_item, dispatch_items};
    use crate::dashboard_ports::RawItem;

    fn raw(value: Value) -> RawItem {
        match value {
            Value::Object(map) => map,
            _ => RawItem::new(),
        }
    }

    fn owner_items() -> Vec<RawItem> {
        vec![
            raw(json!({"PK": "LPA#1", "SK": "DONOR#an-id", "LpaID": "1", "LpaUID": "M-1"})),
            raw(json!({"PK": "LPA#2", "SK": "DONOR#other", "LpaID": "2", "LpaUID": "M-2"})),
            raw(json!({"PK": "LPA#3", "SK": "DONOR#an-id", "ReferencedSK": "ORGANISATION#org"})),
            raw(json!({"PK": "LPA#4", "SK": "DONOR#other", "LpaID": "4", "LpaUID": "M-4"})),
            raw(json!({"PK": "LPA#5", "SK": "DONOR#an-id", "LpaID": "5"})),
        ]
    }

    fn detail_items() -> Vec<RawItem> {
        vec![
            raw(json!({"PK": "LPA#2", "SK": "ATTORNEY#an-id", "IsReplacement": true})),
            raw(json!({"PK": "LPA#4", "SK": "CERTIFICATE_PROVIDER#an-id"})),
            raw(json!({
                "PK": "LPA#1",
                "SK": "VOUCHER#an-id",
                "Tasks": {"SignTheDeclaration": "completed"},
            })),
        ]
    }

    #[test]
    fn routes_items_by_sort_key() {
        let mut items = owner_items();
        items.extend(detail_items());

        let dispatched = dispatch_items(items);
        assert!(dispatched.is_ok());
        let dispatched = dispatched.unwrap_or_default();

        let donor_ids: Vec<&str> = dispatched
            .donors
            .iter()
            .map(|donor| donor.lpa_id.as_str())
            .collect();
        assert_eq!(donor_ids, vec!["1", "2", "4"]);
        assert_eq!(
            dispatched.references,
            vec![StoreKey::new(
                PartitionKey::lpa("3"),
                SortKey::Organisation("org".to_owned())
            )]
        );
        assert!(dispatched.provided.attorney.contains_key("2"));
        assert!(dispatched.provided.certificate_provider.contains_key("4"));
        assert!(dispatched.provided.voucher.contains_key("1"));
    }

    #[test]
    fn empty_referenced_sk_is_a_direct_owner() {
        let decoded = decode_item(raw(json!({
            "PK": "LPA#1",
            "SK": "ORGANISATION#org",
            "ReferencedSK": "",
            "LpaID": "1",
            "LpaUID": "M-1",
        })));

        assert!(matches!(decoded, Ok(FetchedItem::Donor(_))));
    }

    #[test]
    fn link_items_in_a_batch_are_decode_errors() {
        let decoded = decode_item(raw(json!({
            "PK": "LPA#1",
            "SK": "SUB#an-id",
            "ActorType": "donor",
        })));

        assert!(matches!(decoded, Err(AppError::Decode(_))));
    }

    #[test]
    fn malformed_details_are_decode_errors() {
        let decoded = dispatch_items(vec![raw(json!({
            "PK": "LPA#1",
            "SK": "ATTORNEY#an-id",
            "IsReplacement": "yes",
        }))]);

        assert!(matches!(decoded, Err(AppError::Decode(_))));
    }

    #[test]
    fn referenced_items_must_not_be_references() {
        let mut dispatched = dispatch_items(Vec::new()).unwrap_or_default();
        let appended = dispatched.append_referenced(vec![raw(json!({
            "PK": "LPA#3",
            "SK": "ORGANISATION#org",
            "ReferencedSK": "ORGANISATION#other",
        }))]);

        assert!(matches!(appended, Err(AppError::Decode(_))));
    }

    #[test]
    fn referenced_items_without_uid_are_dropped() {
        let mut dispatched = dispatch_items(Vec::new()).unwrap_or_default();
        let appended = dispatched.append_referenced(vec![
            raw(json!({"PK": "LPA#3", "SK": "ORGANISATION#org", "LpaID": "3"})),
            raw(json!({"PK": "LPA#6", "SK": "ORGANISATION#org", "LpaID": "6", "LpaUID": "M-6"})),
        ]);

        assert!(appended.is_ok());
        assert_eq!(dispatched.donors.len(), 1);
        assert_eq!(dispatched.donors[0].lpa_id, "6");
    }

    proptest! {
        #[test]
        fn dispatch_does_not_depend_on_where_details_arrive(
            positions in Just((0..8_usize).collect::<Vec<_>>()).prop_shuffle()
        ) {
            let mut owners = owner_items().into_iter();
            let mut details = detail_items().into_iter();
            let shuffled: Vec<RawItem> = positions
                .iter()
                .filter_map(|position| {
                    if *position < 5 { owners.next() } else { details.next() }
                })
                .collect();

            let mut in_order = owner_items();
            in_order.extend(detail_items());

            prop_assert_eq!(dispatch_items(shuffled), dispatch_items(in_order));
        }
    }
}
