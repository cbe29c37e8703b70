//! Domain entities and invariants for LPA dashboards.

#![forbid(unsafe_code)]

mod actor;
mod dashboard;
mod keys;
mod link;
mod lpa;
mod provided;
mod timestamp;

pub use actor::ActorType;
pub use dashboard::{DashboardActor, DashboardResults, ProvidedDetails};
pub use keys::{PartitionKey, SortKey, SortKeyKind, StoreKey};
pub use link::LpaLink;
pub use lpa::{Lpa, LpaAttorney};
pub use provided::{
    AttorneyProvided, AttorneyTasks, CertificateProviderProvided, CertificateProviderTasks,
    DonorProvided, IdentityStatus, IdentityUserData, TaskState, VoucherProvided, VoucherTasks,
};
